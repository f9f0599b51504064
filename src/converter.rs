//! 센서 로그 변환 모듈
//!
//! 텍스트 로그를 한 번 훑으면서 `NEW ENTRY` 마커로 엔트리를 나누고,
//! 측정값을 모아 `Document`를 만든 뒤 JSON 파일로 저장합니다.

use memmap2::Mmap;
use std::fs::{self, File};
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use crate::cli::WriteMode;
use crate::clock::Clock;
use crate::document::{Document, Entry};
use crate::error::{ConvertError, Result};
use crate::parser::parse_line;

/// 엔트리 경계 마커 (앞뒤 공백 제거 후 대문자 비교)
pub const ENTRY_MARKER: &str = "NEW ENTRY";

/// 마커 라인 여부
pub fn is_entry_marker(line: &str) -> bool {
    line.trim().to_uppercase() == ENTRY_MARKER
}

/// 파싱할 수 없는 라인에 대한 경고
#[derive(Debug, Clone, PartialEq)]
pub struct LineWarning {
    /// 1부터 시작하는 라인 번호
    pub line_number: usize,
    /// 앞뒤 공백을 제거한 원본 내용
    pub content: String,
}

impl std::fmt::Display for LineWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}번째 줄을 파싱할 수 없습니다: {}", self.line_number, self.content)
    }
}

/// 라인 단위 엔트리 누적기
///
/// 열린 엔트리가 없으면 마커가 아닌 라인은 조용히 버립니다.
/// 빈 줄은 상태와 관계없이 무시합니다.
#[derive(Debug, Default)]
pub struct EntryAccumulator {
    entries: Vec<Entry>,
    current: Option<Entry>,
    warnings: Vec<LineWarning>,
    line_number: usize,
}

impl EntryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    /// 다음 라인 처리
    pub fn push_line(&mut self, raw: &str, clock: &dyn Clock) {
        self.line_number += 1;
        let line = raw.trim();

        if is_entry_marker(line) {
            if let Some(done) = self.current.take() {
                self.entries.push(done);
            }
            self.current = Some(Entry::new(self.entries.len() + 1, clock.timestamp()));
            return;
        }

        if line.is_empty() {
            return;
        }

        if let Some(entry) = self.current.as_mut() {
            match parse_line(line) {
                Some(reading) => entry.readings.push(reading),
                None => self.warnings.push(LineWarning {
                    line_number: self.line_number,
                    content: line.to_string(),
                }),
            }
        }
    }

    /// 열린 엔트리를 닫고 결과 반환
    pub fn finish(mut self) -> (Vec<Entry>, Vec<LineWarning>) {
        if let Some(done) = self.current.take() {
            self.entries.push(done);
        }
        (self.entries, self.warnings)
    }
}

/// 변환 옵션
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// 출력 파일이 이미 있을 때의 동작
    pub write_mode: WriteMode,
    /// 대용량 파일 임계값 (이상이면 메모리 매핑 사용)
    pub mmap_threshold: u64,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            write_mode: WriteMode::Overwrite,
            mmap_threshold: 10 * 1024 * 1024, // 10MB
        }
    }
}

impl ConvertOptions {
    /// 기본 옵션 생성
    pub fn new() -> Self {
        Self::default()
    }

    /// 쓰기 모드 설정
    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    /// 메모리 매핑 임계값 설정
    pub fn with_mmap_threshold(mut self, mmap_threshold: u64) -> Self {
        self.mmap_threshold = mmap_threshold;
        self
    }
}

/// 단일 파일 변환 결과
#[derive(Debug)]
pub struct Conversion {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 실제로 기록된 출력 파일 경로
    pub output: PathBuf,
    /// 변환된 문서
    pub document: Document,
    /// 파싱 불가 라인 경고
    pub warnings: Vec<LineWarning>,
    /// 원본 파일 크기
    pub bytes_read: u64,
    /// 기록한 JSON 크기
    pub bytes_written: u64,
}

/// 입력 경로의 확장자를 `json`으로 바꾼 기본 출력 경로
pub fn default_output_path(input: &Path) -> PathBuf {
    input.with_extension("json")
}

/// 메모리 상의 텍스트를 문서로 변환
///
/// # Arguments
/// * `source_file` - 메타데이터에 기록할 원본 파일 이름
/// * `text` - 로그 전체 내용
/// * `clock` - 타임스탬프 시계
pub fn convert_str(source_file: &str, text: &str, clock: &dyn Clock) -> (Document, Vec<LineWarning>) {
    let mut acc = EntryAccumulator::new();
    for line in text.lines() {
        acc.push_line(line, clock);
    }
    finish_document(source_file, acc, clock)
}

fn finish_document(
    source_file: &str,
    acc: EntryAccumulator,
    clock: &dyn Clock,
) -> (Document, Vec<LineWarning>) {
    let (entries, warnings) = acc.finish();
    let document = Document::assemble(source_file.to_string(), clock.timestamp(), entries);
    (document, warnings)
}

/// 단일 센서 로그 파일 변환
///
/// # Arguments
/// * `input` - 변환할 텍스트 파일 경로
/// * `output` - 출력 JSON 경로 (None이면 입력 옆에 `.json`)
/// * `options` - 변환 옵션
/// * `clock` - 타임스탬프 시계
///
/// # Returns
/// 문서와 경고를 담은 `Conversion`
pub fn convert_file(
    input: &Path,
    output: Option<&Path>,
    options: &ConvertOptions,
    clock: &dyn Clock,
) -> Result<Conversion> {
    if !input.exists() {
        return Err(ConvertError::InputNotFound {
            path: input.to_path_buf(),
        });
    }

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| default_output_path(input));

    if options.write_mode == WriteMode::Error && output.exists() {
        return Err(ConvertError::OutputExists { path: output });
    }

    let bytes_read = input_size(input)?;

    let acc = if bytes_read >= options.mmap_threshold {
        // 대용량 파일: 메모리 매핑 사용
        scan_with_mmap(input, clock)?
    } else {
        // 일반 파일: 버퍼 리더 사용
        scan_with_reader(input, clock)?
    };

    let source_file = input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let (document, warnings) = finish_document(&source_file, acc, clock);

    let json = document
        .to_pretty_json()
        .map_err(|e| ConvertError::SerializeError {
            file: input.to_path_buf(),
            reason: e.to_string(),
        })?;

    fs::write(&output, &json).map_err(|e| ConvertError::WriteError {
        file: output.clone(),
        reason: e.to_string(),
    })?;

    Ok(Conversion {
        input: input.to_path_buf(),
        output,
        document,
        warnings,
        bytes_read,
        bytes_written: json.len() as u64,
    })
}

/// 버퍼 리더를 사용한 라인 스캔
fn scan_with_reader(path: &Path, clock: &dyn Clock) -> Result<EntryAccumulator> {
    let file = open_input(path)?;
    let mut acc = EntryAccumulator::new();

    for line in BufReader::new(file).lines() {
        let line = line.map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })?;
        acc.push_line(&line, clock);
    }

    Ok(acc)
}

/// 메모리 매핑을 사용한 라인 스캔 (대용량 파일용)
fn scan_with_mmap(path: &Path, clock: &dyn Clock) -> Result<EntryAccumulator> {
    let file = open_input(path)?;

    let mmap = unsafe {
        Mmap::map(&file).map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: format!("메모리 매핑 실패: {}", e),
        })?
    };

    let text = std::str::from_utf8(&mmap).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    let mut acc = EntryAccumulator::new();
    for line in text.lines() {
        acc.push_line(line, clock);
    }

    Ok(acc)
}

/// 입력 파일 크기
fn input_size(path: &Path) -> Result<u64> {
    fs::metadata(path)
        .map(|m| m.len())
        .map_err(|e| ConvertError::FileOpenError {
            file: path.to_path_buf(),
            reason: e.to_string(),
        })
}

fn open_input(path: &Path) -> Result<File> {
    File::open(path).map_err(|e| ConvertError::FileOpenError {
        file: path.to_path_buf(),
        reason: e.to_string(),
    })
}
