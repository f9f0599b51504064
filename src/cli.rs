//! CLI 인자 파싱 모듈
//!
//! clap을 사용한 `convert` / `batch-convert` 명령줄 인자를 정의합니다.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::batch::DEFAULT_OUTPUT_DIR;

/// 출력 파일 모드
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq)]
pub enum WriteMode {
    /// 기존 파일이 있으면 덮어쓰기
    #[default]
    Overwrite,
    /// 기존 파일이 있으면 에러
    Error,
}

impl std::fmt::Display for WriteMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WriteMode::Overwrite => write!(f, "Overwrite"),
            WriteMode::Error => write!(f, "Error"),
        }
    }
}

/// `convert` CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "convert",
    author = "YourName <your@email.com>",
    version,
    about = "SMART BUOY SENSOR LOG CONVERTER - 센서 텍스트 로그 하나를 JSON으로 변환",
    long_about = r#"
SMART BUOY SENSOR LOG CONVERTER
===============================

`NEW ENTRY` 마커로 구분된 센서 로그를 읽어
엔트리별 측정값을 담은 JSON 문서로 변환합니다.

데이터 라인 형식:
  T: 72.5F | L: 450.2 lx | Pitch: 1.2 | Roll: -0.5 | Yaw: 180.0

예제:
  convert sensor_data.txt
  convert sensor_data.txt result.json
  convert sensor_data.txt result.json --mode error
"#
)]
pub struct ConvertArgs {
    /// 변환할 센서 로그 파일
    pub input: PathBuf,

    /// 출력 JSON 파일 경로 (기본값: 입력 파일 이름.json)
    pub output: Option<PathBuf>,

    /// 출력 파일 모드
    #[arg(short, long, value_enum, default_value_t = WriteMode::Overwrite)]
    pub mode: WriteMode,
}

/// `batch-convert` CLI 인자 구조체
#[derive(Parser, Debug)]
#[command(
    name = "batch-convert",
    author = "YourName <your@email.com>",
    version,
    about = "SMART BUOY SENSOR LOG CONVERTER - 폴더 내 .txt 로그를 일괄 변환",
    long_about = r#"
SMART BUOY BATCH CONVERTER
==========================

입력 폴더 바로 아래의 모든 .txt 센서 로그를 JSON으로 변환합니다.
일부 파일이 실패해도 나머지 파일은 계속 처리됩니다.

예제:
  batch-convert ./data
  batch-convert ./data ./converted_data
  batch-convert ./data --pattern "buoy_*" --dry-run
  batch-convert ./data --log errors.log --verbose
"#
)]
pub struct BatchArgs {
    /// 센서 로그(.txt)가 있는 입력 폴더
    pub input: PathBuf,

    /// 출력 폴더 (기본값: <입력 폴더>/converted)
    pub output: Option<PathBuf>,

    /// 출력 파일 모드
    #[arg(short, long, value_enum, default_value_t = WriteMode::Overwrite)]
    pub mode: WriteMode,

    /// 파일 이름 패턴 필터 (glob 형식, 예: "buoy_*", "day?.txt")
    #[arg(short, long)]
    pub pattern: Option<String>,

    /// 상세 출력 모드
    #[arg(short, long)]
    pub verbose: bool,

    /// 실제 변환 없이 처리될 파일 목록만 표시
    #[arg(long)]
    pub dry_run: bool,

    /// 에러 로그 파일 경로
    #[arg(long)]
    pub log: Option<PathBuf>,
}

impl BatchArgs {
    /// 출력 폴더 결정 (미지정 시 입력 폴더 아래 `converted`)
    pub fn output_dir(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.input.join(DEFAULT_OUTPUT_DIR))
    }
}
