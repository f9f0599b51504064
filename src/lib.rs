//! buoyconv - SMART BUOY SENSOR LOG CONVERTER
//!
//! 스마트 부이 센서 텍스트 로그를 구조화된 JSON 문서로 변환하는 CLI 도구입니다.
//!
//! # 주요 기능
//!
//! - 🛟 **엔트리 그룹화**: `NEW ENTRY` 마커 단위로 측정값을 묶음
//! - 🌡️ **센서 라인 파싱**: 온도(°F), 조도(lx), 자세(Pitch/Roll/Yaw) 추출
//! - 📁 **일괄 변환**: 폴더 내 `.txt` 로그를 한 번에 변환
//! - ⚠️ **관대한 처리**: 파싱 불가 라인은 경고 후 건너뜀, 파일별 실패는 격리
//! - 📊 **상세 통계**: 성공/실패 파일 수, 입출력 용량, 성공률 표시
//! - 🔍 **패턴 필터링**: glob 형식의 파일 이름 필터링
//! - 🧪 **드라이런 모드**: 실제 변환 없이 처리될 파일 목록 미리 확인
//!
//! # 예제
//!
//! ```bash
//! # 단일 파일 변환
//! convert sensor_data.txt
//!
//! # 폴더 일괄 변환
//! batch-convert ./data ./converted_data
//! ```

pub mod batch;
pub mod cli;
pub mod clock;
pub mod converter;
pub mod document;
pub mod error;
pub mod parser;
pub mod pattern;
pub mod stats;

// Re-exports for convenient access
pub use batch::{run_batch, BatchOptions, BatchReport, FileOutcome};
pub use cli::{BatchArgs, ConvertArgs, WriteMode};
pub use clock::{Clock, FixedClock, SystemClock};
pub use converter::{convert_file, convert_str, Conversion, ConvertOptions, LineWarning};
pub use document::{Document, Entry, Metadata};
pub use error::{ConvertError, Result};
pub use parser::{parse_line, Reading};
pub use pattern::PatternMatcher;
pub use stats::{format_bytes, Statistics};
