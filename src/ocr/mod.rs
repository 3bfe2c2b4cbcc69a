//! OCRアダプタ
//!
//! 画像パスを受け取り、テキストと平均信頼度（0〜100）を返す外部エンジンの境界。

mod tesseract;

pub use tesseract::{parse_tsv, TesseractCli};

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// OCRの出力（画像1枚につき1回生成し、変更しない）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OcrOutput {
    pub text: String,
    /// 平均信頼度（0〜100）
    pub confidence: f64,
}

impl OcrOutput {
    pub fn new(text: impl Into<String>, confidence: f64) -> Self {
        Self {
            text: text.into(),
            confidence: confidence.clamp(0.0, 100.0),
        }
    }
}

#[derive(Error, Debug)]
pub enum OcrError {
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    #[error("OCR resource files missing: {0}")]
    MissingResources(String),

    #[error("OCR processing failed: {0}")]
    Processing(String),

    #[error("OCR output could not be parsed: {0}")]
    InvalidOutput(String),
}

/// OCRエンジン
///
/// 1回の呼び出しは1枚の画像に閉じる。実装は呼び出しごとにエンジンを確保・解放する。
pub trait OcrEngine {
    fn recognize(&self, image_path: &Path) -> Result<OcrOutput, OcrError>;
}

impl<T: OcrEngine + ?Sized> OcrEngine for &T {
    fn recognize(&self, image_path: &Path) -> Result<OcrOutput, OcrError> {
        (**self).recognize(image_path)
    }
}

impl<T: OcrEngine + ?Sized> OcrEngine for Box<T> {
    fn recognize(&self, image_path: &Path) -> Result<OcrOutput, OcrError> {
        (**self).recognize(image_path)
    }
}
