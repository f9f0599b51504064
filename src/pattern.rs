//! 패턴 매칭 모듈
//!
//! 일괄 변환 대상 파일을 고릅니다. `.txt` 확장자는 항상 요구되고,
//! 추가로 glob 패턴으로 파일 이름을 거를 수 있습니다.

use glob::Pattern;

use crate::error::{ConvertError, Result};

/// 일괄 변환 대상 확장자
pub const INPUT_EXTENSION: &str = "txt";

/// 컴파일된 패턴 매처
#[derive(Default)]
pub struct PatternMatcher {
    pattern: Option<Pattern>,
}

impl PatternMatcher {
    /// 새 패턴 매처 생성
    ///
    /// # Arguments
    /// * `pattern` - 글로브 패턴 문자열 (None이면 모든 .txt 파일 매칭)
    ///
    /// # Examples
    /// ```
    /// use buoyconv::pattern::PatternMatcher;
    ///
    /// let matcher = PatternMatcher::new(Some("buoy_*".to_string())).unwrap();
    /// assert!(matcher.matches("buoy_01.txt"));
    /// assert!(!matcher.matches("buoy_01.json"));
    /// assert!(!matcher.matches("other.txt"));
    /// ```
    pub fn new(pattern: Option<String>) -> Result<Self> {
        let compiled = match pattern {
            Some(ref p) => Some(
                Pattern::new(p)
                    .map_err(|_| ConvertError::InvalidPattern { pattern: p.clone() })?,
            ),
            None => None,
        };

        Ok(Self { pattern: compiled })
    }

    /// 파일 이름이 변환 대상인지 확인
    ///
    /// 확장자는 대소문자를 구분합니다 (`LOG.TXT`는 제외).
    pub fn matches(&self, file_name: &str) -> bool {
        let has_extension = std::path::Path::new(file_name)
            .extension()
            .and_then(|s| s.to_str())
            .map(|s| s == INPUT_EXTENSION)
            .unwrap_or(false);

        has_extension
            && match &self.pattern {
                Some(p) => p.matches(file_name),
                None => true,
            }
    }
}
