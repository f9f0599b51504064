//! 시간 소스 모듈
//!
//! 엔트리 타임스탬프와 변환 타임스탬프를 만드는 시계를 추상화합니다.
//! 테스트에서는 `FixedClock`으로 결정적인 결과를 얻습니다.

use chrono::{Local, NaiveDateTime};

/// ISO-8601 타임스탬프 형식 (오프셋 없음, 마이크로초 정밀도)
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// 현재 시각을 제공하는 시계
pub trait Clock {
    fn now(&self) -> NaiveDateTime;

    /// 현재 시각을 ISO-8601 문자열로 반환
    fn timestamp(&self) -> String {
        self.now().format(TIMESTAMP_FORMAT).to_string()
    }
}

/// 로컬 벽시계
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// 항상 같은 시각을 반환하는 시계
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}
