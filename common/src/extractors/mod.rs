//! フィールド抽出器
//!
//! ブロックの行またはテキストを受け取り、1フィールドを返す純粋関数群。
//! 各抽出器は順序付きのルール表を先頭から評価し、最初に一致したものを採用する。
//!
//! - title: 職種名（見つからなければブロックは求人にならない）
//! - company: 会社名
//! - location: 都市・国・勤務形態の修飾語
//! - salary: 給与レンジ（年額に換算）
//! - policy: リモート方針・職位・契約形態
//! - skills: 技術スキル

pub mod company;
pub mod location;
pub mod policy;
pub mod salary;
pub mod skills;
pub mod title;

pub use company::extract_company;
pub use location::{extract_location, is_location_line, LocationMatch};
pub use policy::{detect_engagement_type, detect_remote_policy, detect_seniority};
pub use salary::{detect_currency, extract_salary, is_salary_line, AnnualizationRates, PayPeriod, SalaryMatch};
pub use skills::extract_skills;
pub use title::{extract_title, is_title_line, TitleMatch};

use regex::Regex;

/// 文字数で切り詰める（前後の空白は除去）
pub(crate) fn truncate_chars(value: &str, max_chars: usize) -> String {
    value.trim().chars().take(max_chars).collect()
}

/// 順序付きルール表を評価し、最初に一致した値を返す
pub(crate) fn first_match<T: Copy>(rules: &[(Regex, T)], text: &str) -> Option<T> {
    rules
        .iter()
        .find(|(pattern, _)| pattern.is_match(text))
        .map(|(_, value)| *value)
}
