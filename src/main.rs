use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};
use jobscan::{cli, config, eligibility, ocr, scanner, telemetry};
use cli::{Cli, Commands};
use config::Config;
use eligibility::AcceptAll;
use serde::Serialize;
use std::path::Path;

/// JSON出力に付けるメタ情報
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct Report<'a, T: Serialize> {
    generated_at: String,
    #[serde(flatten)]
    body: &'a T,
}

fn write_json<T: Serialize>(value: &T, output: Option<&Path>) -> anyhow::Result<()> {
    let report = Report {
        generated_at: chrono::Utc::now().to_rfc3339(),
        body: value,
    };
    let json = serde_json::to_string_pretty(&report)?;

    match output {
        Some(path) => {
            std::fs::write(path, json)?;
            println!("✔ 結果を保存: {}", path.display());
        }
        None => println!("{}", json),
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    telemetry::init(cli.verbose);

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    match cli.command {
        Commands::Scan { image, output } => {
            let scanner = config.build_scanner(AcceptAll)?;
            let result = scanner.scan_image(&image);

            for warning in &result.warnings {
                eprintln!("⚠ {}", warning);
            }
            eprintln!("✔ {}件の求人を抽出 (信頼度 {:.1}%)", result.vacancies.len(), result.confidence);

            write_json(&result, output.as_deref())?;
        }

        Commands::ScanDir { folder, pattern, output, parallel } => {
            println!("🔍 jobscan - フォルダスキャン\n");

            if !folder.is_dir() {
                eprintln!("⚠ フォルダが見つかりません: {}", folder.display());
            }

            let scanner = config.build_scanner(AcceptAll)?;
            let summary = if parallel {
                scanner.scan_directory_parallel(&folder, &pattern)
            } else {
                let total = scanner.count_targets(&folder, &pattern);
                let progress = ProgressBar::new(total as u64);
                progress.set_style(
                    ProgressStyle::with_template("{bar:40} {pos}/{len} {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_bar()),
                );
                let summary = scanner.scan_directory_with(&folder, &pattern, |_, result| {
                    let name = result
                        .source_path
                        .file_name()
                        .map(|n| n.to_string_lossy().to_string())
                        .unwrap_or_default();
                    progress.set_message(name);
                    progress.inc(1);
                });
                progress.finish_and_clear();
                summary
            };

            println!("✔ 画像: {}枚", summary.images_scanned);
            println!("✔ 求人: {}件 (適格 {} / 不適格 {})",
                summary.vacancies_found, summary.eligible_count, summary.ineligible_count);
            if summary.warning_count() > 0 {
                println!("⚠ 警告: {}件", summary.warning_count());
            }

            let output = output.unwrap_or_else(|| folder.join("jobscan-summary.json"));
            if folder.is_dir() {
                write_json(&summary, Some(output.as_path()))?;
            }
        }

        Commands::Extract { input, confidence, output } => {
            let text = std::fs::read_to_string(&input)?;

            // OCRは呼ばないのでエンジンは使われない
            let scanner = config.build_scanner(AcceptAll)?;
            let result = scanner.scan_ocr_output(&input, ocr::OcrOutput::new(text, confidence));

            for warning in &result.warnings {
                eprintln!("⚠ {}", warning);
            }
            write_json(&result, output.as_deref())?;
        }

        Commands::Config { show, init } => {
            if init {
                let path = match &cli.config {
                    Some(path) => path.clone(),
                    None => Config::config_path()?,
                };
                if path.exists() {
                    println!("設定ファイルは既に存在します: {}", path.display());
                } else {
                    Config::default().save_to(&path)?;
                    println!("✔ 設定ファイルを作成しました: {}", path.display());
                }
            }

            if show || !init {
                println!("設定:");
                println!("  信頼度の閾値: {}%", config.confidence_threshold);
                println!("  年間労働時間: {}", config.hours_per_year);
                println!("  年間月数: {}", config.months_per_year);
                println!("  OCRコマンド: {} (-l {})", config.tesseract_command, config.ocr_language);
                println!("  追加語彙: {}", config.vocabulary_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "なし".into()));
                println!("  対応拡張子: {}", scanner::IMAGE_EXTENSIONS.join(", "));
            }
        }

        Commands::Vocab { export } => {
            let profile = config.extraction_profile()?;
            match export {
                Some(path) => {
                    std::fs::write(&path, profile.vocabulary.to_json()?)?;
                    println!("✔ 語彙を書き出しました: {}", path.display());
                }
                None => {
                    println!("スキル ({}件): {}", profile.vocabulary.skills.len(),
                        profile.vocabulary.skills.join(", "));
                    println!("UIノイズ ({}件): {}", profile.vocabulary.ui_noise.len(),
                        profile.vocabulary.ui_noise.join(", "));
                }
            }
        }
    }

    Ok(())
}
