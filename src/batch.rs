//! 일괄 변환 모듈
//!
//! 폴더 바로 아래의 센서 로그를 하나씩 변환하고, 파일별 결과를 모읍니다.
//! 한 파일의 실패는 해당 파일의 `FileOutcome`에만 기록되고 나머지는 계속됩니다.

use indicatif::{ProgressBar, ProgressStyle};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::cli::WriteMode;
use crate::clock::Clock;
use crate::converter::{convert_file, Conversion, ConvertOptions};
use crate::error::{ConvertError, Result};
use crate::pattern::PatternMatcher;
use crate::stats::Statistics;

/// 기본 출력 폴더 이름
pub const DEFAULT_OUTPUT_DIR: &str = "converted";

/// 일괄 변환 옵션
#[derive(Debug, Clone, Default)]
pub struct BatchOptions {
    /// 파일 이름 glob 패턴
    pub pattern: Option<String>,
    /// 출력 파일 모드
    pub write_mode: WriteMode,
    /// 진행률 바 표시 여부
    pub show_progress: bool,
}

impl BatchOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pattern(mut self, pattern: Option<String>) -> Self {
        self.pattern = pattern;
        self
    }

    pub fn with_write_mode(mut self, write_mode: WriteMode) -> Self {
        self.write_mode = write_mode;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}

/// 파일 하나의 변환 결과
#[derive(Debug)]
pub struct FileOutcome {
    /// 입력 파일 경로
    pub input: PathBuf,
    /// 변환 결과 또는 실패 원인
    pub result: std::result::Result<Conversion, ConvertError>,
}

impl FileOutcome {
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// 실패 원인 메시지
    pub fn error_message(&self) -> Option<String> {
        self.result.as_ref().err().map(|e| e.to_string())
    }
}

/// 일괄 변환 결과
#[derive(Debug)]
pub struct BatchReport {
    /// 출력 폴더
    pub output_dir: PathBuf,
    /// 파일별 결과 (처리 순서)
    pub outcomes: Vec<FileOutcome>,
    /// 누적 통계
    pub stats: Statistics,
}

impl BatchReport {
    /// 변환 성공 파일 수
    pub fn converted_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_success()).count()
    }

    /// 실패한 파일과 원인 목록
    pub fn failures(&self) -> Vec<(PathBuf, String)> {
        self.outcomes
            .iter()
            .filter_map(|o| o.error_message().map(|e| (o.input.clone(), e)))
            .collect()
    }
}

/// 입력 폴더 유효성 검사
pub fn validate_input_dir(input: &Path) -> Result<()> {
    if !input.exists() {
        return Err(ConvertError::DirectoryNotFound {
            path: input.to_path_buf(),
        });
    }

    if !input.is_dir() {
        return Err(ConvertError::NotADirectory {
            path: input.to_path_buf(),
        });
    }

    Ok(())
}

/// 변환 대상 파일 수집 (하위 폴더 제외, 파일 이름순)
pub fn collect_input_files(input: &Path, matcher: &PatternMatcher) -> Vec<PathBuf> {
    WalkDir::new(input)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.path().is_file())
        .filter(|e| {
            e.file_name()
                .to_str()
                .map(|s| matcher.matches(s))
                .unwrap_or(false)
        })
        .map(|e| e.path().to_path_buf())
        .collect()
}

/// 입력 파일에 대응하는 출력 경로 (`<output_dir>/<stem>.json`)
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input.file_stem().unwrap_or_default().to_string_lossy();
    output_dir.join(format!("{}.json", stem))
}

/// 일괄 변환 계획 (입력 폴더 검증과 대상 파일 목록)
#[derive(Debug)]
pub struct BatchPlan {
    /// 출력 폴더
    pub output_dir: PathBuf,
    /// 변환 대상 파일 (파일 이름순)
    pub files: Vec<PathBuf>,
}

impl BatchPlan {
    /// 입력 폴더를 검사하고 대상 파일을 수집
    ///
    /// 파일 시스템에는 아무것도 쓰지 않습니다.
    pub fn new(input_dir: &Path, output_dir: Option<&Path>, options: &BatchOptions) -> Result<Self> {
        validate_input_dir(input_dir)?;

        let matcher = PatternMatcher::new(options.pattern.clone())?;
        let output_dir = output_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| input_dir.join(DEFAULT_OUTPUT_DIR));

        Ok(Self {
            output_dir,
            files: collect_input_files(input_dir, &matcher),
        })
    }

    /// 출력 폴더 생성 (이미 있으면 그대로 사용)
    pub fn prepare_output_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.output_dir).map_err(|e| ConvertError::OutputDirError {
            path: self.output_dir.clone(),
            reason: e.to_string(),
        })
    }

    /// 수집된 파일을 순서대로 변환
    pub fn execute(self, options: &BatchOptions, clock: &dyn Clock) -> BatchReport {
        let convert_options = ConvertOptions::new().with_write_mode(options.write_mode);

        let pb = if options.show_progress {
            create_progress_bar(self.files.len())
        } else {
            ProgressBar::hidden()
        };

        let (outcomes, stats) =
            convert_files(&self.files, &self.output_dir, &convert_options, clock, &pb);
        pb.finish_with_message("완료!");

        BatchReport {
            output_dir: self.output_dir,
            outcomes,
            stats,
        }
    }
}

/// 폴더 단위 일괄 변환
///
/// # Arguments
/// * `input_dir` - 센서 로그 폴더
/// * `output_dir` - 출력 폴더 (None이면 `<input_dir>/converted`)
/// * `options` - 일괄 변환 옵션
/// * `clock` - 타임스탬프 시계
///
/// # Returns
/// 입력 폴더 자체가 잘못되었거나 출력 폴더를 만들 수 없을 때만 에러.
/// 파일별 실패는 `BatchReport::outcomes`에 담깁니다.
pub fn run_batch(
    input_dir: &Path,
    output_dir: Option<&Path>,
    options: &BatchOptions,
    clock: &dyn Clock,
) -> Result<BatchReport> {
    let plan = BatchPlan::new(input_dir, output_dir, options)?;
    plan.prepare_output_dir()?;
    Ok(plan.execute(options, clock))
}

/// 파일 목록을 순서대로 변환
///
/// 목록 수집 후 사라진 파일 등 개별 실패는 결과에 기록하고 계속 진행합니다.
pub fn convert_files(
    files: &[PathBuf],
    output_dir: &Path,
    options: &ConvertOptions,
    clock: &dyn Clock,
    pb: &ProgressBar,
) -> (Vec<FileOutcome>, Statistics) {
    let mut stats = Statistics::new(files.len());
    let mut outcomes = Vec::with_capacity(files.len());

    for input in files {
        let output = output_path_for(input, output_dir);
        let result = convert_file(input, Some(&output), options, clock);
        pb.inc(1);

        match &result {
            Ok(conversion) => {
                stats.increment_success();
                stats.add_bytes_read(conversion.bytes_read);
                stats.add_bytes_written(conversion.bytes_written);
                stats.add_document(
                    conversion.document.metadata.total_entries,
                    conversion.document.metadata.total_readings,
                    conversion.warnings.len(),
                );
            }
            Err(_) => stats.increment_error(),
        }

        outcomes.push(FileOutcome {
            input: input.clone(),
            result,
        });
    }

    (outcomes, stats)
}

/// 진행률 바 생성
pub fn create_progress_bar(total: usize) -> ProgressBar {
    let pb = ProgressBar::new(total as u64);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("█▓▒░"));
    }
    pb
}
