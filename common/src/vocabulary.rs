//! 抽出語彙モジュール
//!
//! スキル語彙とUIノイズ文言をデータとして保持する。
//! 組み込みの既定値を持ち、JSONファイルで拡張できる。

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// 抽出に使う語彙テーブル
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionVocabulary {
    /// 既知の技術トークン（この順序でスキルを報告する）
    #[serde(default)]
    pub skills: Vec<String>,
    /// 会社名候補から除外するUI文言
    #[serde(default)]
    pub ui_noise: Vec<String>,
}

impl Default for ExtractionVocabulary {
    fn default() -> Self {
        Self::builtin()
    }
}

impl ExtractionVocabulary {
    /// 組み込み語彙
    pub fn builtin() -> Self {
        let skills = [
            "C#", ".NET", "ASP.NET", "Entity Framework", "Blazor", "Azure", "AWS", "GCP",
            "SQL Server", "PostgreSQL", "MySQL", "MongoDB", "Redis", "SQL",
            "Docker", "Kubernetes", "Terraform", "Kafka", "RabbitMQ", "gRPC", "GraphQL",
            "Microservices", "CI/CD", "Linux", "Git",
            "TypeScript", "JavaScript", "React", "Angular", "Vue", "Node.js",
            "Python", "Java", "Kotlin", "Go", "Rust",
        ];
        let ui_noise = [
            "Easy Apply", "Promoted", "Actively recruiting", "Be an early applicant",
            "Viewed", "Reposted", "applicants", "Apply now", "Show more", "See more",
            "Top applicant", "Your profile matches", "days ago", "hours ago", "weeks ago",
            "Save job",
        ];

        Self {
            skills: skills.iter().map(|s| s.to_string()).collect(),
            ui_noise: ui_noise.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// JSONファイルから読み込み
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// JSON文字列から読み込み
    pub fn from_json(json: &str) -> Result<Self> {
        let vocabulary: Self = serde_json::from_str(json)?;
        vocabulary.validate()?;
        Ok(vocabulary)
    }

    /// 整形済みJSONに変換（編集用エクスポート）
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// 空白のみのエントリを拒否する
    pub fn validate(&self) -> Result<()> {
        if let Some(i) = self.skills.iter().position(|s| s.trim().is_empty()) {
            return Err(Error::Vocabulary(format!("skill entry #{} is blank", i)));
        }
        if let Some(i) = self.ui_noise.iter().position(|s| s.trim().is_empty()) {
            return Err(Error::Vocabulary(format!("ui noise entry #{} is blank", i)));
        }
        Ok(())
    }

    /// 語彙をマージ（既存エントリは大文字小文字を無視して重複排除、追加分は末尾）
    pub fn merge(&mut self, other: &ExtractionVocabulary) {
        extend_unique(&mut self.skills, &other.skills);
        extend_unique(&mut self.ui_noise, &other.ui_noise);
    }

    /// 行がUIノイズか判定
    ///
    /// 複数語の文言は部分一致、単語1つの文言は単語単位で一致させる。
    pub fn is_ui_noise(&self, line: &str) -> bool {
        let lower = line.trim().to_lowercase();
        if lower.is_empty() {
            return false;
        }

        self.ui_noise.iter().any(|phrase| {
            let phrase = phrase.trim().to_lowercase();
            if phrase.contains(char::is_whitespace) {
                lower.contains(&phrase)
            } else {
                lower
                    .split(|c: char| !c.is_alphanumeric())
                    .any(|word| word == phrase)
            }
        })
    }
}

fn extend_unique(target: &mut Vec<String>, extra: &[String]) {
    for entry in extra {
        let exists = target.iter().any(|t| t.eq_ignore_ascii_case(entry));
        if !exists {
            target.push(entry.clone());
        }
    }
}
