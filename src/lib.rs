//! jobscan
//!
//! 求人サイトのスクリーンショットをOCRし、求人ごとの構造化レコードに変換する。
//! 純粋な抽出ロジックは `jobscan_common`、I/O（OCR・ファイル列挙・設定）はこのクレート。

pub mod cli;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod ocr;
pub mod scanner;
pub mod telemetry;

pub use jobscan_common as common;
pub use scanner::{ImageScanResult, ScanSettings, ScanSummary, ScanWarning, Scanner};

