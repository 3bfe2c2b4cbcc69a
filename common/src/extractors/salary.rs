//! 給与レンジの検出と年額換算
//!
//! - 通貨は記号の有無だけで判定（€ → EUR、£ → GBP、それ以外は既定通貨）
//! - `$80K–$110K` / `$80-110K` 形式を先に試し（×1000）、次に一般的な2金額レンジを試す
//! - 期間トークン（hr/hour/mo/month/yr/year）で年額に換算する
//! - 日給・週給は年額に換算できないので給与なしとする

use crate::types::DEFAULT_CURRENCY;
use regex::Regex;

/// 金額の後ろに付く期間トークン（`/yr`, `per month`, `an hour` など）
macro_rules! period_suffix {
    () => {
        r"(?:\s*(?:/|per|an?)\s*(hour|hr|month|mo|year|yr|day|week|wk)\b)?"
    };
}

lazy_static::lazy_static! {
    // 上限側の k は必須、下限側は省略可（`$80-110K`）
    static ref K_RANGE_RE: Regex = Regex::new(concat!(
        r"(?i)(?:^|[^\d,.])[$€£]?\s*(\d+(?:\.\d+)?)\s*(k)?",
        period_suffix!(),
        r"\s*(?:-|–|—|to)\s*[$€£]?\s*(\d+(?:\.\d+)?)\s*k\b",
        period_suffix!(),
    )).unwrap();

    static ref AMOUNT_RANGE_RE: Regex = Regex::new(concat!(
        r"(?i)[$€£]\s*(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)",
        period_suffix!(),
        r"\s*(?:-|–|—|to)\s*[$€£]?\s*(\d{1,3}(?:,\d{3})+|\d+(?:\.\d+)?)",
        period_suffix!(),
    )).unwrap();

    static ref CURRENCY_AMOUNT_RE: Regex = Regex::new(r"[$€£]\s*\d").unwrap();
}

/// 年額換算の係数
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnnualizationRates {
    /// 時給 → 年額（40時間 × 52週）
    pub hours_per_year: f64,
    /// 月給 → 年額
    pub months_per_year: f64,
}

impl Default for AnnualizationRates {
    fn default() -> Self {
        Self {
            hours_per_year: 2080.0,
            months_per_year: 12.0,
        }
    }
}

/// 給与の期間
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PayPeriod {
    Hour,
    Month,
    Year,
}

impl PayPeriod {
    /// 年額換算できない期間（日給・週給）は None
    fn from_token(token: &str) -> Option<Self> {
        match token.to_lowercase().as_str() {
            "hr" | "hour" => Some(PayPeriod::Hour),
            "mo" | "month" => Some(PayPeriod::Month),
            "yr" | "year" => Some(PayPeriod::Year),
            _ => None,
        }
    }

    /// 後ろの期間トークンを優先し、無ければ前のトークン。どちらも無ければ年額
    fn from_captures(leading: Option<regex::Match>, trailing: Option<regex::Match>) -> Option<Self> {
        match trailing.or(leading) {
            Some(token) => Self::from_token(token.as_str()),
            None => Some(PayPeriod::Year),
        }
    }

    fn multiplier(self, rates: &AnnualizationRates) -> f64 {
        match self {
            PayPeriod::Hour => rates.hours_per_year,
            PayPeriod::Month => rates.months_per_year,
            PayPeriod::Year => 1.0,
        }
    }
}

/// 給与の検出結果（金額は年額）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SalaryMatch {
    pub min: Option<u64>,
    pub max: Option<u64>,
    pub currency: String,
}

/// 通貨記号から通貨コードを判定
pub fn detect_currency(text: &str) -> &'static str {
    if text.contains('€') {
        "EUR"
    } else if text.contains('£') {
        "GBP"
    } else {
        DEFAULT_CURRENCY
    }
}

/// 給与らしい行か（通貨記号 + 数字、またはKレンジ）
pub fn is_salary_line(line: &str) -> bool {
    CURRENCY_AMOUNT_RE.is_match(line) || K_RANGE_RE.is_match(line)
}

fn parse_amount(raw: &str) -> Option<f64> {
    raw.replace(',', "").parse::<f64>().ok()
}

fn annualize(amount: f64, multiplier: f64) -> u64 {
    (amount * multiplier).round() as u64
}

fn parse_k_range(text: &str, rates: &AnnualizationRates) -> Option<(u64, u64)> {
    let caps = K_RANGE_RE.captures(text)?;
    let low = parse_amount(&caps[1])?;
    let high = parse_amount(&caps[4])?;
    let multiplier = PayPeriod::from_captures(caps.get(3), caps.get(5))?.multiplier(rates) * 1000.0;

    Some((annualize(low, multiplier), annualize(high, multiplier)))
}

fn parse_amount_range(text: &str, rates: &AnnualizationRates) -> Option<(u64, u64)> {
    let caps = AMOUNT_RANGE_RE.captures(text)?;
    let low = parse_amount(&caps[1])?;
    let high = parse_amount(&caps[3])?;
    let multiplier = PayPeriod::from_captures(caps.get(2), caps.get(4))?.multiplier(rates);

    Some((annualize(low, multiplier), annualize(high, multiplier)))
}

/// 優先順の給与パーサ
const SALARY_PARSERS: [fn(&str, &AnnualizationRates) -> Option<(u64, u64)>; 2] =
    [parse_k_range, parse_amount_range];

/// テキストから給与レンジを抽出（年額換算済み）
pub fn extract_salary(text: &str, rates: &AnnualizationRates) -> SalaryMatch {
    let range = SALARY_PARSERS.iter().find_map(|parse| parse(text, rates));

    let (min, max) = match range {
        Some((a, b)) if a > b => (Some(b), Some(a)),
        Some((a, b)) => (Some(a), Some(b)),
        None => (None, None),
    };

    SalaryMatch {
        min,
        max,
        currency: detect_currency(text).to_string(),
    }
}
