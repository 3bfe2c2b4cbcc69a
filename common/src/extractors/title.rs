//! 職種名の検出
//!
//! 2つのパターン族を優先順に評価する:
//! 1. 技術職パターン（職位接頭辞 + 技術トークン + 職種名詞）
//! 2. 汎用パターン（短い行が職種名詞で終わる）
//!
//! 行ごとに1、2の順で試し、最初に一致した行を職種名とする。

use super::truncate_chars;
use regex::Regex;

/// 職種名の最大文字数
pub const MAX_TITLE_CHARS: usize = 120;

/// 汎用パターンを適用する行の最大文字数
pub const MAX_GENERIC_TITLE_LINE_CHARS: usize = 80;

lazy_static::lazy_static! {
    static ref TECHNOLOGY_TITLE_RE: Regex = Regex::new(
        r"(?i)(?:^|\s)(?:(?:senior|sr\.?|junior|jr\.?|lead|principal|staff|mid-level|middle|head\s+of)\s+)*(?:[\w.#+/-]+\s+){0,2}?(?:asp\.net|\.net|dotnet|c#|f#|rust|golang|go|java|kotlin|python|typescript|javascript|react|angular|node(?:\.js)?|back[\s-]?end|front[\s-]?end|full[\s-]?stack|software|cloud|devops|platform|data|azure|aws)(?:\s+[\w.#+/-]+){0,2}?\s+(?:developer|engineer|architect|consultant|programmer)s?\b"
    ).unwrap();

    static ref GENERIC_TITLE_RE: Regex = Regex::new(
        r"(?i)\b(?:developer|engineer|architect|consultant|programmer|specialist|analyst|administrator|manager|designer|tester|scientist)s?(?:\s*\([^)]*\))?\s*$"
    ).unwrap();
}

/// 検出した職種名と、その行の位置
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleMatch {
    pub line_index: usize,
    pub title: String,
}

fn matches_technology_title(line: &str) -> bool {
    TECHNOLOGY_TITLE_RE.is_match(line)
}

fn matches_generic_title(line: &str) -> bool {
    line.trim().chars().count() <= MAX_GENERIC_TITLE_LINE_CHARS && GENERIC_TITLE_RE.is_match(line)
}

/// 優先順のパターン族
const TITLE_PATTERNS: [fn(&str) -> bool; 2] = [matches_technology_title, matches_generic_title];

/// 行が職種名らしいか（いずれかのパターン族に一致）
pub fn is_title_line(line: &str) -> bool {
    TITLE_PATTERNS.iter().any(|matches| matches(line))
}

/// ブロックの行から職種名を抽出
pub fn extract_title(lines: &[String]) -> Option<TitleMatch> {
    lines
        .iter()
        .position(|line| is_title_line(line))
        .map(|line_index| TitleMatch {
            line_index,
            title: truncate_chars(&lines[line_index], MAX_TITLE_CHARS),
        })
}
