use crate::eligibility::EligibilityAssessment;
use jobscan_common::ExtractedVacancy;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 警告の種類
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WarningKind {
    /// ファイルが無い・未対応の拡張子
    InputError,
    /// OCRエンジンの起動失敗・処理失敗
    OcrEngineError,
    /// OCRは成功したがテキストが空
    NoTextExtracted,
    /// 信頼度が閾値未満（処理は続行）
    LowConfidence,
}

/// スキャンに付く致命的でない診断メッセージ
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScanWarning {
    pub kind: WarningKind,
    pub message: String,
}

impl ScanWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ScanWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// 求人と、その適格性判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessedVacancy {
    pub vacancy: ExtractedVacancy,
    pub assessment: EligibilityAssessment,
}

/// 画像1枚分のスキャン結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageScanResult {
    pub source_path: PathBuf,
    /// OCR平均信頼度（OCRに到達しなかった場合は 0）
    pub confidence: f64,
    pub vacancies: Vec<AssessedVacancy>,
    pub warnings: Vec<ScanWarning>,
}

impl ImageScanResult {
    /// 求人0件・警告1件の結果
    pub fn empty(source_path: PathBuf, confidence: f64, warning: ScanWarning) -> Self {
        Self {
            source_path,
            confidence,
            vacancies: Vec::new(),
            warnings: vec![warning],
        }
    }

    pub fn eligible_count(&self) -> usize {
        self.vacancies.iter().filter(|v| v.assessment.is_eligible).count()
    }

    pub fn ineligible_count(&self) -> usize {
        self.vacancies.len() - self.eligible_count()
    }

    /// 判定を外した求人のみ
    pub fn extracted(&self) -> impl Iterator<Item = &ExtractedVacancy> {
        self.vacancies.iter().map(|v| &v.vacancy)
    }
}

/// フォルダ全体の集計
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanSummary {
    pub images_scanned: usize,
    pub vacancies_found: usize,
    pub eligible_count: usize,
    pub ineligible_count: usize,
    pub results: Vec<ImageScanResult>,
}

impl ScanSummary {
    /// 画像ごとの結果から集計を作る（順序は保持）
    pub fn from_results(results: Vec<ImageScanResult>) -> Self {
        let vacancies_found = results.iter().map(|r| r.vacancies.len()).sum();
        let eligible_count = results.iter().map(ImageScanResult::eligible_count).sum();
        let ineligible_count = results.iter().map(ImageScanResult::ineligible_count).sum();

        Self {
            images_scanned: results.len(),
            vacancies_found,
            eligible_count,
            ineligible_count,
            results,
        }
    }

    pub fn warning_count(&self) -> usize {
        self.results.iter().map(|r| r.warnings.len()).sum()
    }
}
