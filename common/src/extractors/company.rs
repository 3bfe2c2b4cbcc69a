//! 会社名の検出
//!
//! 職種名の行より後ろを走査し、除外条件に当たらない最初の行を会社名とする。

use super::{is_location_line, is_salary_line, truncate_chars};
use crate::vocabulary::ExtractionVocabulary;

/// 会社名の最大文字数
pub const MAX_COMPANY_CHARS: usize = 100;

/// 会社名として短すぎる文字数（これ未満は除外）
pub const MIN_COMPANY_CHARS: usize = 3;

/// 区切り文字（`Company · Location · Qualifier` 形式）
const SEGMENT_DELIMITERS: [char; 3] = ['·', '•', '|'];

/// 会社名候補から除外する行か
fn is_excluded(line: &str, vocabulary: &ExtractionVocabulary) -> bool {
    let trimmed = line.trim();
    trimmed.chars().count() < MIN_COMPANY_CHARS
        || vocabulary.is_ui_noise(trimmed)
        || is_location_line(trimmed)
        || is_salary_line(trimmed)
}

/// 職種名の行（`title_index`）より後ろから会社名を抽出。無ければ空文字列
pub fn extract_company(
    lines: &[String],
    title_index: usize,
    vocabulary: &ExtractionVocabulary,
) -> String {
    lines
        .iter()
        .skip(title_index + 1)
        .find(|line| !is_excluded(line, vocabulary))
        .map(|line| {
            // 区切り行は先頭セグメントのみ
            let head = line.split(&SEGMENT_DELIMITERS[..]).next().unwrap_or(line.as_str());
            let head = if head.trim().chars().count() >= MIN_COMPANY_CHARS {
                head
            } else {
                line.as_str()
            };
            truncate_chars(head, MAX_COMPANY_CHARS)
        })
        .unwrap_or_default()
}
