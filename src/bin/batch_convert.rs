//! batch-convert - 폴더 내 센서 로그 일괄 변환
//!
//! 메인 엔트리포인트

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use colored::Colorize;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use buoyconv::{
    batch::{BatchOptions, BatchPlan, BatchReport},
    cli::BatchArgs,
    clock::SystemClock,
};

fn main() -> Result<()> {
    let args = BatchArgs::parse();

    let output_dir = args.output_dir();
    let options = BatchOptions::new()
        .with_pattern(args.pattern.clone())
        .with_write_mode(args.mode)
        .with_progress(true);

    // 입력 폴더 확인 및 대상 파일 수집
    let plan = BatchPlan::new(&args.input, Some(&output_dir), &options)?;

    // 헤더 출력
    print_header(&args, &plan.output_dir);

    if !args.dry_run {
        plan.prepare_output_dir()?;
    }

    if plan.files.is_empty() {
        println!(
            "{}",
            format!("⚠️ {:?} 폴더에 변환할 .txt 파일이 없습니다.", args.input).yellow()
        );
        return Ok(());
    }

    println!(
        "  {} 발견된 파일 수: {}",
        "📋".bright_white(),
        plan.files.len().to_string().bright_green()
    );

    // 드라이런 모드
    if args.dry_run {
        print_dry_run(&plan.files);
        return Ok(());
    }

    println!("\n{}", "⚡ 변환 중...".bright_cyan());

    let report = plan.execute(&options, &SystemClock);

    print_results(&report, args.verbose);

    // 에러 출력
    let errors = report.failures();
    print_errors(&errors, args.verbose);

    // 로그 파일 작성
    if let Some(ref log_path) = args.log {
        write_error_log(log_path, &errors)?;
    }

    // 통계 출력
    report.stats.print_summary();

    println!("\n{} 출력 폴더: {:?}\n", "✅".bright_green(), report.output_dir);

    Ok(())
}

/// 헤더 출력
fn print_header(args: &BatchArgs, output_dir: &Path) {
    println!("\n{}", "═".repeat(50).bright_blue());
    println!(
        "{}",
        " 🛟 SMART BUOY SENSOR LOG CONVERTER".bright_white().bold()
    );
    println!("{}", "═".repeat(50).bright_blue());
    println!("  {} 입력 폴더: {:?}", "📂".bright_cyan(), args.input);
    println!("  {} 출력 폴더: {:?}", "📄".bright_green(), output_dir);
    println!("  {} 모드: {}", "⚙️".bright_yellow(), args.mode);

    if let Some(ref pattern) = args.pattern {
        println!("  {} 패턴 필터: {}", "🔍".bright_magenta(), pattern);
    }

    if args.dry_run {
        println!(
            "  {} {}",
            "⚠️".bright_yellow(),
            "드라이런 모드 (실제 변환 없음)".yellow()
        );
    }

    println!("{}", "═".repeat(50).bright_blue());
    println!("\n{}", "📁 파일 검색 중...".bright_cyan());
}

/// 드라이런 출력
fn print_dry_run(files: &[PathBuf]) {
    println!("\n{}", "📋 처리 예정 파일 목록:".bright_cyan());
    for (i, path) in files.iter().enumerate() {
        println!("  {}. {:?}", i + 1, path.file_name().unwrap_or_default());
    }
    println!(
        "\n{} 총 {} 개의 파일이 처리될 예정입니다.",
        "ℹ️".bright_blue(),
        files.len().to_string().bright_green()
    );
}

/// 파일별 변환 결과 및 경고 출력
fn print_results(report: &BatchReport, verbose: bool) {
    for outcome in &report.outcomes {
        let Ok(conversion) = &outcome.result else {
            continue;
        };
        let name = outcome.input.file_name().unwrap_or_default();

        if verbose {
            println!(
                "  {} {:?} → {:?} (엔트리 {}, 측정값 {})",
                "✓".green(),
                name,
                conversion.output.file_name().unwrap_or_default(),
                conversion.document.metadata.total_entries,
                conversion.document.metadata.total_readings
            );
        }

        for warning in &conversion.warnings {
            println!("    {} {:?}: {}", "⚠️".yellow(), name, warning);
        }
    }
}

/// 에러 목록 출력
fn print_errors(errors: &[(PathBuf, String)], verbose: bool) {
    if errors.is_empty() {
        return;
    }

    println!("\n{}", "❌ 오류 발생 파일:".bright_red());
    for (path, error) in errors {
        println!("  {} {:?}", "•".red(), path.file_name().unwrap_or_default());
        if verbose {
            println!("    {}", error.dimmed());
        }
    }
}

/// 에러 로그 파일 작성
fn write_error_log(log_path: &Path, errors: &[(PathBuf, String)]) -> Result<()> {
    let mut log_file = File::create(log_path)
        .with_context(|| format!("에러 로그 파일을 만들 수 없습니다: {:?}", log_path))?;

    writeln!(log_file, "buoyconv 에러 로그")?;
    writeln!(log_file, "생성 시간: {}", Local::now().format("%Y-%m-%d %H:%M:%S"))?;
    writeln!(log_file, "총 에러 수: {}", errors.len())?;
    writeln!(log_file, "{}", "=".repeat(50))?;

    for (path, error) in errors {
        writeln!(log_file, "\n파일: {:?}", path)?;
        writeln!(log_file, "에러: {}", error)?;
    }

    println!("\n{} 에러 로그 저장: {:?}", "📝".bright_cyan(), log_path);

    Ok(())
}
