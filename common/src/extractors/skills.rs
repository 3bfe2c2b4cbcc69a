//! 技術スキルの検出
//!
//! 語彙との部分一致で検出する。短いトークン（4文字以下）は
//! 一般語への誤検出を避けるため大文字小文字を区別する。

use crate::vocabulary::ExtractionVocabulary;

/// この文字数以下のトークンは大文字小文字を区別して照合
pub const EXACT_CASE_MAX_CHARS: usize = 4;

/// 語彙順・重複なしでスキルを抽出
pub fn extract_skills(text: &str, vocabulary: &ExtractionVocabulary) -> Vec<String> {
    let lower = text.to_lowercase();
    let mut found: Vec<String> = Vec::new();

    for token in &vocabulary.skills {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let hit = if token.chars().count() <= EXACT_CASE_MAX_CHARS {
            text.contains(token)
        } else {
            lower.contains(&token.to_lowercase())
        };

        if hit && !found.iter().any(|f| f.to_lowercase() == token.to_lowercase()) {
            found.push(token.to_string());
        }
    }

    found
}
