//! convert - 센서 로그 단일 파일 변환
//!
//! 메인 엔트리포인트

use anyhow::Result;
use clap::Parser;
use colored::Colorize;

use buoyconv::{
    cli::ConvertArgs,
    clock::SystemClock,
    converter::{convert_file, ConvertOptions},
};

fn main() -> Result<()> {
    let args = ConvertArgs::parse();

    let options = ConvertOptions::new().with_write_mode(args.mode);
    let conversion = convert_file(&args.input, args.output.as_deref(), &options, &SystemClock)?;

    for warning in &conversion.warnings {
        println!("{} {}", "⚠️ 경고:".yellow(), warning);
    }

    let source = conversion
        .input
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();

    println!(
        "{} {} → {:?}",
        "✅ 변환 완료:".bright_green(),
        source,
        conversion.output
    );
    println!(
        "  {} 전체 엔트리: {}",
        "🛟".bright_cyan(),
        conversion.document.metadata.total_entries.to_string().bright_green()
    );
    println!(
        "  {} 전체 측정값: {}",
        "🌡️".bright_cyan(),
        conversion.document.metadata.total_readings.to_string().bright_green()
    );

    Ok(())
}
