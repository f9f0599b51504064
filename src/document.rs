//! 출력 문서 모델
//!
//! 변환 결과 JSON의 구조(`metadata` + `entries`)를 정의합니다.

use serde::Serialize;

use crate::parser::Reading;

/// `NEW ENTRY` 마커로 구분되는 측정값 묶음
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    /// 1부터 시작하는 순번
    pub entry_id: usize,
    /// 엔트리 생성 시각
    pub timestamp: String,
    /// 파일 순서대로의 측정값
    pub readings: Vec<Reading>,
}

impl Entry {
    pub fn new(entry_id: usize, timestamp: String) -> Self {
        Self {
            entry_id,
            timestamp,
            readings: Vec::new(),
        }
    }
}

/// 문서 메타데이터
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub source_file: String,
    pub conversion_timestamp: String,
    pub total_entries: usize,
    pub total_readings: usize,
}

/// 변환된 전체 문서
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub metadata: Metadata,
    pub entries: Vec<Entry>,
}

impl Document {
    /// 엔트리 목록으로 문서 조립
    ///
    /// 합계는 항상 `entries`에서 계산되므로 메타데이터와 본문이 어긋나지 않습니다.
    pub fn assemble(source_file: String, conversion_timestamp: String, entries: Vec<Entry>) -> Self {
        let total_readings = entries.iter().map(|e| e.readings.len()).sum();

        Self {
            metadata: Metadata {
                source_file,
                conversion_timestamp,
                total_entries: entries.len(),
                total_readings,
            },
            entries,
        }
    }

    /// 2칸 들여쓰기 JSON 문자열로 직렬화
    pub fn to_pretty_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
