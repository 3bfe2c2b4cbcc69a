//! 分類系の検出（リモート方針・職位・契約形態）
//!
//! いずれも大文字小文字を区別しないキーワード表を上から評価し、
//! 最初に一致した分類を返す。一致しなければ Unknown。

use super::first_match;
use crate::types::{EngagementType, RemotePolicy, SeniorityLevel};
use regex::Regex;

fn rule<T>(pattern: &str, value: T) -> (Regex, T) {
    (Regex::new(pattern).unwrap(), value)
}

lazy_static::lazy_static! {
    static ref REMOTE_RULES: Vec<(Regex, RemotePolicy)> = vec![
        rule(r"(?i)\bfully[\s-]+remote\b|\b100\s*%\s*remote\b", RemotePolicy::FullyRemote),
        rule(r"(?i)\bremote[\s-]+friendly\b", RemotePolicy::RemoteFriendly),
        rule(r"(?i)\bhybrid\b", RemotePolicy::Hybrid),
        rule(r"(?i)\bon[\s-]?site\b|\boffice\b", RemotePolicy::OnSite),
        // 単語としての remote のみ（remoteness 等には一致させない）
        rule(r"(?i)\bremote\b", RemotePolicy::FullyRemote),
    ];

    // "Senior Staff Engineer" は Principal になる（staff を先に評価）
    static ref SENIORITY_RULES: Vec<(Regex, SeniorityLevel)> = vec![
        rule(r"(?i)\b(?:principal|staff)\b", SeniorityLevel::Principal),
        rule(r"(?i)\blead\b", SeniorityLevel::Lead),
        rule(r"(?i)\b(?:senior|sr)\b", SeniorityLevel::Senior),
        rule(r"(?i)\bmid[\s-]?level\b|\bmiddle\b", SeniorityLevel::Middle),
        rule(r"(?i)\b(?:junior|jr)\b", SeniorityLevel::Junior),
    ];

    // contract は広いトークンなので先に評価する
    static ref ENGAGEMENT_RULES: Vec<(Regex, EngagementType)> = vec![
        rule(r"(?i)\bb2b\b|\bcontractor\b|\boutside\s+ir35\b|\b1099\b|\bcontract\b", EngagementType::ContractB2B),
        rule(r"(?i)\bfreelance|\bproject[\s-]based\b", EngagementType::Freelance),
        rule(r"(?i)\binside\s+ir35\b|\bpaye\b", EngagementType::InsideIr35),
        rule(r"(?i)\bpermanent\b|\bfull[\s-]time\s+employee\b", EngagementType::Employment),
    ];
}

/// リモート方針を判定（ブロックテキスト + 勤務地の修飾語ヒント）
pub fn detect_remote_policy(text: &str, qualifier_hint: Option<&str>) -> RemotePolicy {
    let haystack = match qualifier_hint {
        Some(hint) => format!("{}\n{}", text, hint),
        None => text.to_string(),
    };
    first_match(&REMOTE_RULES, &haystack).unwrap_or_default()
}

/// 職位レベルを判定
pub fn detect_seniority(text: &str) -> SeniorityLevel {
    first_match(&SENIORITY_RULES, text).unwrap_or_default()
}

/// 契約形態を判定
pub fn detect_engagement_type(text: &str) -> EngagementType {
    first_match(&ENGAGEMENT_RULES, text).unwrap_or_default()
}
