//! 센서 라인 파싱 모듈
//!
//! `T:72.5F | L:450.2lx | Pitch:1.2 | Roll:-0.5 | Yaw:180.0` 형식의
//! 한 줄을 `Reading`으로 변환합니다.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

/// 센서 데이터 라인 정규식 (라벨은 대소문자 구분, 공백은 자유)
///
/// 숫자는 ASCII `0-9`만 허용합니다. `f64` 파싱과 같은 범위입니다.
static SENSOR_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"T:\s*([0-9.]+)F\s*\|\s*L:\s*([0-9.]+)\s*lx\s*\|\s*Pitch:\s*([-0-9.]+)\s*\|\s*Roll:\s*([-0-9.]+)\s*\|\s*Yaw:\s*([-0-9.]+)",
    )
    .expect("sensor line pattern is valid")
});

/// 단일 센서 측정값
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Reading {
    pub temperature: f64,
    pub temperature_unit: &'static str,
    pub light: f64,
    pub light_unit: &'static str,
    pub pitch: f64,
    pub roll: f64,
    pub yaw: f64,
    pub orientation_unit: &'static str,
}

impl Reading {
    /// 고정 단위(°F, lx, degrees)로 측정값 생성
    pub fn new(temperature: f64, light: f64, pitch: f64, roll: f64, yaw: f64) -> Self {
        Self {
            temperature,
            temperature_unit: "F",
            light,
            light_unit: "lx",
            pitch,
            roll,
            yaw,
            orientation_unit: "degrees",
        }
    }
}

/// 센서 데이터 한 줄 파싱
///
/// # Arguments
/// * `line` - 파싱할 텍스트 라인 (앞뒤 공백 무시)
///
/// # Returns
/// 패턴과 일치하면 `Some(Reading)`, 아니면 `None`
///
/// # Examples
/// ```
/// use buoyconv::parser::parse_line;
///
/// let reading = parse_line("T: 72.5F | L: 450.2 lx | Pitch: 1.2 | Roll: -0.5 | Yaw: 180.0").unwrap();
/// assert_eq!(reading.temperature, 72.5);
/// assert_eq!(reading.roll, -0.5);
/// assert!(parse_line("garbled line").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<Reading> {
    let caps = SENSOR_LINE.captures(line.trim())?;

    // `[0-9.]+`는 "1.2.3" 같은 값도 잡으므로 숫자 변환 실패는 불일치로 처리
    let field = |i: usize| -> Option<f64> { caps.get(i)?.as_str().parse().ok() };

    Some(Reading::new(field(1)?, field(2)?, field(3)?, field(4)?, field(5)?))
}
