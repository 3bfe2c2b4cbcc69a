use crate::ocr::OcrError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum JobScanError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),

    #[error("OCRエラー: {0}")]
    Ocr(#[from] OcrError),

    #[error("語彙エラー: {0}")]
    Common(#[from] jobscan_common::Error),
}

pub type Result<T> = std::result::Result<T, JobScanError>;
