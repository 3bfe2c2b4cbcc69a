use crate::eligibility::EligibilityGate;
use crate::error::{JobScanError, Result};
use crate::ocr::TesseractCli;
use crate::scanner::{ScanSettings, Scanner, DEFAULT_CONFIDENCE_THRESHOLD};
use jobscan_common::{AnnualizationRates, ExtractionProfile, ExtractionVocabulary};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// OCRコマンドを上書きする環境変数
pub const TESSERACT_ENV: &str = "JOBSCAN_TESSERACT";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// これ未満のOCR信頼度は警告（処理は続行）
    pub confidence_threshold: f64,
    pub hours_per_year: f64,
    pub months_per_year: f64,
    pub tesseract_command: String,
    pub ocr_language: String,
    /// 組み込み語彙に追加する語彙JSON
    pub vocabulary_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        let rates = AnnualizationRates::default();
        Self {
            confidence_threshold: DEFAULT_CONFIDENCE_THRESHOLD,
            hours_per_year: rates.hours_per_year,
            months_per_year: rates.months_per_year,
            tesseract_command: "tesseract".into(),
            ocr_language: "eng".into(),
            vocabulary_path: None,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定パスから読み込み（無ければ既定値）
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let mut config = if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            serde_json::from_str(&content)?
        } else {
            Self::default()
        };

        // 環境変数を優先
        if let Ok(command) = std::env::var(TESSERACT_ENV) {
            if !command.trim().is_empty() {
                config.tesseract_command = command;
            }
        }

        config.validate()?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| JobScanError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("jobscan").join("config.json"))
    }

    fn validate(&self) -> Result<()> {
        if !(0.0..=100.0).contains(&self.confidence_threshold) {
            return Err(JobScanError::Config(format!(
                "confidence_threshold must be within 0-100 (got {})",
                self.confidence_threshold
            )));
        }
        if self.hours_per_year <= 0.0 || self.months_per_year <= 0.0 {
            return Err(JobScanError::Config(
                "hours_per_year and months_per_year must be positive".into(),
            ));
        }
        Ok(())
    }

    pub fn rates(&self) -> AnnualizationRates {
        AnnualizationRates {
            hours_per_year: self.hours_per_year,
            months_per_year: self.months_per_year,
        }
    }

    /// 語彙（追加ファイルがあればマージ）と換算係数から抽出プロファイルを作る
    pub fn extraction_profile(&self) -> Result<ExtractionProfile> {
        let mut vocabulary = ExtractionVocabulary::builtin();
        if let Some(path) = &self.vocabulary_path {
            if !path.exists() {
                return Err(JobScanError::FileNotFound(path.display().to_string()));
            }
            let extra = ExtractionVocabulary::from_file(path)?;
            vocabulary.merge(&extra);
        }

        Ok(ExtractionProfile {
            vocabulary,
            rates: self.rates(),
        })
    }

    /// 設定から Tesseract 版スキャナを組み立てる
    pub fn build_scanner<G: EligibilityGate>(&self, gate: G) -> Result<Scanner<TesseractCli, G>> {
        let settings = ScanSettings {
            confidence_threshold: self.confidence_threshold,
            profile: self.extraction_profile()?,
        };
        let engine = TesseractCli::new(&self.tesseract_command, &self.ocr_language);
        Ok(Scanner::new(engine, gate, settings))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_values() {
        let config = Config::default();
        assert_eq!(config.confidence_threshold, 30.0);
        assert_eq!(config.confidence_threshold, DEFAULT_CONFIDENCE_THRESHOLD);
        assert_eq!(config.hours_per_year, 2080.0);
        assert_eq!(config.months_per_year, 12.0);
        assert_eq!(config.ocr_language, "eng");
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            confidence_threshold: 45.0,
            ..Default::default()
        };
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.confidence_threshold, 45.0);
        assert_eq!(loaded.months_per_year, 12.0);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"hours_per_year": 1900.0}"#).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.hours_per_year, 1900.0);
        assert_eq!(loaded.confidence_threshold, 30.0);
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"confidence_threshold": 150.0}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(JobScanError::Config(_))));
    }

    #[test]
    fn test_extraction_profile_merges_vocabulary() {
        let dir = tempdir().unwrap();
        let vocab_path = dir.path().join("vocab.json");
        std::fs::write(&vocab_path, r#"{"skills": ["Elixir"]}"#).unwrap();

        let config = Config {
            vocabulary_path: Some(vocab_path),
            ..Default::default()
        };
        let profile = config.extraction_profile().unwrap();
        assert!(profile.vocabulary.skills.iter().any(|s| s == "Elixir"));
        assert!(profile.vocabulary.skills.iter().any(|s| s == "Kubernetes"));
    }

    #[test]
    fn test_extraction_profile_missing_vocabulary_file() {
        let config = Config {
            vocabulary_path: Some(PathBuf::from("/nonexistent/vocab.json")),
            ..Default::default()
        };
        assert!(matches!(
            config.extraction_profile(),
            Err(JobScanError::FileNotFound(_))
        ));
    }
}
