//! 求人抽出結果の型定義
//!
//! - ListingBlock: セグメンタの出力（1求人分の行）
//! - ExtractedVacancy: 1ブロックから組み立てた構造化求人
//! - RemotePolicy / SeniorityLevel / EngagementType: 分類結果（必ず Unknown を持つ）

use serde::{Deserialize, Serialize};

/// 画像由来の求人であることを示す固定タグ
pub const SOURCE_PLATFORM: &str = "screenshot-ocr";

/// 通貨記号が見つからない場合の通貨
pub const DEFAULT_CURRENCY: &str = "USD";

/// OCRテキストの連続領域から切り出した1求人分の行
///
/// 空白のみの行は含まない。行は元テキストのまま保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingBlock {
    lines: Vec<String>,
}

impl ListingBlock {
    /// 空白行を除いた行からブロックを作る。非空白行が無ければ None
    pub fn new<I, S>(lines: I) -> Option<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let lines: Vec<String> = lines
            .into_iter()
            .map(Into::into)
            .filter(|l| !l.trim().is_empty())
            .collect();

        if lines.is_empty() {
            None
        } else {
            Some(Self { lines })
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// 常に false（空ブロックは構築できない）
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// 行を改行で連結したテキスト
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}

/// リモート勤務方針
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RemotePolicy {
    FullyRemote,
    RemoteFriendly,
    Hybrid,
    OnSite,
    #[default]
    Unknown,
}

/// 職位レベル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SeniorityLevel {
    Principal,
    Lead,
    Senior,
    Middle,
    Junior,
    #[default]
    Unknown,
}

/// 契約形態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EngagementType {
    ContractB2B,
    Freelance,
    #[serde(rename = "InsideIR35")]
    InsideIr35,
    Employment,
    #[default]
    Unknown,
}

impl std::fmt::Display for RemotePolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RemotePolicy::FullyRemote => write!(f, "fully remote"),
            RemotePolicy::RemoteFriendly => write!(f, "remote-friendly"),
            RemotePolicy::Hybrid => write!(f, "hybrid"),
            RemotePolicy::OnSite => write!(f, "on-site"),
            RemotePolicy::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::fmt::Display for SeniorityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SeniorityLevel::Principal => write!(f, "principal"),
            SeniorityLevel::Lead => write!(f, "lead"),
            SeniorityLevel::Senior => write!(f, "senior"),
            SeniorityLevel::Middle => write!(f, "middle"),
            SeniorityLevel::Junior => write!(f, "junior"),
            SeniorityLevel::Unknown => write!(f, "unknown"),
        }
    }
}

impl std::fmt::Display for EngagementType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngagementType::ContractB2B => write!(f, "contract (B2B)"),
            EngagementType::Freelance => write!(f, "freelance"),
            EngagementType::InsideIr35 => write!(f, "inside IR35"),
            EngagementType::Employment => write!(f, "employment"),
            EngagementType::Unknown => write!(f, "unknown"),
        }
    }
}

/// 1ブロックから抽出した構造化求人
///
/// `title` は必ず空でない。給与は常に年額。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedVacancy {
    /// `{ソースのファイル名stem}-{ブロック番号}`
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub remote_policy: RemotePolicy,
    #[serde(default)]
    pub seniority_level: SeniorityLevel,
    #[serde(default)]
    pub engagement_type: EngagementType,
    #[serde(default)]
    pub salary_min: Option<u64>,
    #[serde(default)]
    pub salary_max: Option<u64>,
    #[serde(default)]
    pub salary_currency: String,
    #[serde(default)]
    pub required_skills: Vec<String>,
    #[serde(default)]
    pub raw_block_text: String,
    pub source_platform: String,
}
