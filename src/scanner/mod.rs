//! 画像スキャン
//!
//! 画像1枚: OCR → 分割 → 組み立て → 適格性判定
//! フォルダ: 対応画像を列挙して1枚ずつスキャンし集計する
//!
//! どの段階の失敗も警告として結果に付け、呼び出し元にはエラーを返さない。

mod result;
mod target;

pub use result::{AssessedVacancy, ImageScanResult, ScanSummary, ScanWarning, WarningKind};
pub use target::{
    enumerate_targets, is_image_extension, pattern_regex, source_id, ScanTarget, DEFAULT_PATTERN,
    IMAGE_EXTENSIONS,
};

use crate::eligibility::EligibilityGate;
use crate::ocr::{OcrEngine, OcrError, OcrOutput};
use jobscan_common::{assemble, segment, ExtractionProfile};
use rayon::prelude::*;
use std::path::Path;

/// 既定のOCR信頼度の閾値（%）
pub const DEFAULT_CONFIDENCE_THRESHOLD: f64 = 30.0;

#[derive(Debug, Clone)]
pub struct ScanSettings {
    pub confidence_threshold: f64,
    pub profile: ExtractionProfile,
}

impl Default for ScanSettings {
    fn default() -> Self {
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            profile: ExtractionProfile::default(),
        }
    }
}

pub struct Scanner<E, G> {
    engine: E,
    gate: G,
    settings: ScanSettings,
}

impl<E: OcrEngine, G: EligibilityGate> Scanner<E, G> {
    pub fn new(engine: E, gate: G, settings: ScanSettings) -> Self {
        Self {
            engine,
            gate,
            settings,
        }
    }

    pub fn settings(&self) -> &ScanSettings {
        &self.settings
    }

    /// 画像1枚をスキャン
    pub fn scan_image(&self, path: &Path) -> ImageScanResult {
        let source_path = path.to_path_buf();

        if !path.is_file() {
            return warn_empty(ImageScanResult::empty(
                source_path,
                0.0,
                ScanWarning::new(
                    WarningKind::InputError,
                    format!("File not found: {}", path.display()),
                ),
            ));
        }

        if ScanTarget::from_path(path).is_none() {
            let ext = path
                .extension()
                .map(|e| e.to_string_lossy().to_string())
                .unwrap_or_default();
            return warn_empty(ImageScanResult::empty(
                source_path,
                0.0,
                ScanWarning::new(
                    WarningKind::InputError,
                    format!(
                        "Unsupported image format '.{}' (supported: {})",
                        ext,
                        IMAGE_EXTENSIONS.join(", ")
                    ),
                ),
            ));
        }

        match self.engine.recognize(path) {
            Ok(output) => self.scan_ocr_output(path, output),
            Err(err) => warn_empty(ImageScanResult::empty(
                source_path,
                0.0,
                ScanWarning::new(WarningKind::OcrEngineError, describe_ocr_error(&err)),
            )),
        }
    }

    /// 認識済みテキストをスキャン（空テキスト判定以降の処理）
    pub fn scan_ocr_output(&self, source: &Path, output: OcrOutput) -> ImageScanResult {
        let source_path = source.to_path_buf();
        let confidence = output.confidence;

        if output.text.trim().is_empty() {
            return warn_empty(ImageScanResult::empty(
                source_path,
                confidence,
                ScanWarning::new(
                    WarningKind::NoTextExtracted,
                    format!("No text extracted from {}", source.display()),
                ),
            ));
        }

        let mut warnings = Vec::new();
        if confidence < self.settings.confidence_threshold {
            let warning = ScanWarning::new(
                WarningKind::LowConfidence,
                format!(
                    "Low OCR confidence {:.1}% (threshold {:.0}%); results may be unreliable",
                    confidence, self.settings.confidence_threshold
                ),
            );
            tracing::warn!(image = %source.display(), "{}", warning);
            warnings.push(warning);
        }

        let source_id = source_id(source);
        let blocks = segment(&output.text);
        let mut vacancies = Vec::new();

        for (index, block) in blocks.iter().enumerate() {
            match assemble(block, &source_id, index, &self.settings.profile) {
                Some(vacancy) => {
                    let assessment = self.gate.assess(&vacancy);
                    tracing::debug!(
                        id = %vacancy.id,
                        title = %vacancy.title,
                        eligible = assessment.is_eligible,
                        "vacancy extracted"
                    );
                    vacancies.push(AssessedVacancy { vacancy, assessment });
                }
                None => {
                    tracing::debug!(block = index, lines = block.len(), "no title, block dropped");
                }
            }
        }

        tracing::info!(
            image = %source.display(),
            blocks = blocks.len(),
            vacancies = vacancies.len(),
            confidence,
            "image scanned"
        );

        ImageScanResult {
            source_path,
            confidence,
            vacancies,
            warnings,
        }
    }

    /// フォルダ直下の画像を順にスキャン
    pub fn scan_directory(&self, folder: &Path, pattern: &str) -> ScanSummary {
        self.scan_directory_with(folder, pattern, |_, _| {})
    }

    /// 1枚ごとに `on_scanned(index, result)` を呼びながらスキャン（進捗表示用）
    pub fn scan_directory_with<F>(&self, folder: &Path, pattern: &str, mut on_scanned: F) -> ScanSummary
    where
        F: FnMut(usize, &ImageScanResult),
    {
        if !folder.is_dir() {
            tracing::warn!(folder = %folder.display(), "folder not found, returning empty summary");
            return ScanSummary::default();
        }

        let targets = enumerate_targets(folder, pattern);
        let results: Vec<ImageScanResult> = targets
            .iter()
            .enumerate()
            .map(|(i, target)| {
                let result = self.scan_image(&target.path);
                on_scanned(i, &result);
                result
            })
            .collect();

        log_summary(folder, ScanSummary::from_results(results))
    }

    /// 対象件数だけ数える（進捗バーの長さ用）
    pub fn count_targets(&self, folder: &Path, pattern: &str) -> usize {
        enumerate_targets(folder, pattern).len()
    }
}

impl<E, G> Scanner<E, G>
where
    E: OcrEngine + Sync,
    G: EligibilityGate + Sync,
{
    /// 画像を並列にスキャン（結果の順序・内容は逐次版と同じ）
    pub fn scan_directory_parallel(&self, folder: &Path, pattern: &str) -> ScanSummary {
        if !folder.is_dir() {
            tracing::warn!(folder = %folder.display(), "folder not found, returning empty summary");
            return ScanSummary::default();
        }

        let targets = enumerate_targets(folder, pattern);
        let results: Vec<ImageScanResult> = targets
            .par_iter()
            .map(|target| self.scan_image(&target.path))
            .collect();

        log_summary(folder, ScanSummary::from_results(results))
    }
}

fn warn_empty(result: ImageScanResult) -> ImageScanResult {
    for warning in &result.warnings {
        tracing::warn!(image = %result.source_path.display(), "{}", warning);
    }
    result
}

fn log_summary(folder: &Path, summary: ScanSummary) -> ScanSummary {
    tracing::info!(
        folder = %folder.display(),
        images = summary.images_scanned,
        vacancies = summary.vacancies_found,
        eligible = summary.eligible_count,
        warnings = summary.warning_count(),
        "directory scanned"
    );
    summary
}

fn describe_ocr_error(err: &OcrError) -> String {
    match err {
        OcrError::MissingResources(detail) => format!(
            "OCR resource files are missing (install the language data, e.g. eng.traineddata): {}",
            detail
        ),
        OcrError::EngineUnavailable(detail) => format!("OCR engine is not available: {}", detail),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eligibility::AcceptAll;

    struct NeverCalled;

    impl OcrEngine for NeverCalled {
        fn recognize(&self, _image_path: &Path) -> Result<OcrOutput, OcrError> {
            panic!("OCR must not run for invalid input");
        }
    }

    fn scanner() -> Scanner<NeverCalled, AcceptAll> {
        Scanner::new(NeverCalled, AcceptAll, ScanSettings::default())
    }

    #[test]
    fn test_scan_ocr_output_blank_text() {
        let result = scanner().scan_ocr_output(Path::new("shot.png"), OcrOutput::new("  \n ", 90.0));
        assert!(result.vacancies.is_empty());
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, WarningKind::NoTextExtracted);
        assert_eq!(result.confidence, 90.0);
    }

    #[test]
    fn test_scan_ocr_output_low_confidence_continues() {
        let result = scanner().scan_ocr_output(
            Path::new("shot.png"),
            OcrOutput::new("Rust Engineer\nAcme", 12.5),
        );
        assert_eq!(result.vacancies.len(), 1);
        assert_eq!(result.warnings.len(), 1);
        assert_eq!(result.warnings[0].kind, WarningKind::LowConfidence);
    }

    #[test]
    fn test_threshold_is_configurable() {
        let settings = ScanSettings {
            confidence_threshold: 10.0,
            ..Default::default()
        };
        let scanner = Scanner::new(NeverCalled, AcceptAll, settings);
        let result = scanner.scan_ocr_output(Path::new("a.png"), OcrOutput::new("Rust Engineer", 12.5));
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn test_scan_ocr_output_ids_use_file_stem() {
        let text = "Promoted\n\nRust Engineer\nAcme\n\nGo Developer\nInitech";
        let result = scanner().scan_ocr_output(Path::new("/x/feed-01.png"), OcrOutput::new(text, 95.0));
        let ids: Vec<&str> = result.extracted().map(|v| v.id.as_str()).collect();
        assert_eq!(ids, vec!["feed-01-1", "feed-01-2"]);
    }

    #[test]
    fn test_describe_missing_resources() {
        let message = describe_ocr_error(&OcrError::MissingResources("eng".into()));
        assert!(message.contains("resource files are missing"));
    }
}
