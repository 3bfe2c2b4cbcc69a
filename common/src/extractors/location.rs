//! 勤務地の検出
//!
//! 優先順:
//! 1. `Region[, Region2] (Qualifier)` 形式（例: `London, UK (Remote)`）
//! 2. `Company · Location · Qualifier` 形式
//!
//! 修飾語（Remote / Hybrid 等）はリモート方針判定のヒントとして返す。

use regex::Regex;

lazy_static::lazy_static! {
    static ref PARENTHETICAL_RE: Regex = Regex::new(
        r"(?i)^\s*(\p{L}[\p{L} .'-]*?)\s*(?:,\s*(\p{L}[\p{L} .'-]*?)\s*)?\((fully\s+remote|100\s*%\s*remote|remote[\s-]+friendly|remote|hybrid|on[\s-]?site|in[\s-]office|office)\)\s*$"
    ).unwrap();

    static ref DELIMITED_RE: Regex = Regex::new(
        r"^\s*([^·•|]+?)\s*[·•|]\s*([^·•|]+?)\s*[·•|]\s*([^·•|]+?)\s*$"
    ).unwrap();
}

/// 勤務地の検出結果
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationMatch {
    pub city: String,
    pub country: String,
    /// 勤務形態の修飾語（リモート方針判定のヒント）
    pub qualifier: Option<String>,
}

/// 括弧付き修飾語の勤務地行か
pub fn is_location_line(line: &str) -> bool {
    PARENTHETICAL_RE.is_match(line)
}

fn parse_parenthetical(line: &str) -> Option<LocationMatch> {
    let caps = PARENTHETICAL_RE.captures(line)?;
    Some(LocationMatch {
        city: caps[1].trim().to_string(),
        country: caps.get(2).map(|m| m.as_str().trim().to_string()).unwrap_or_default(),
        qualifier: Some(caps[3].trim().to_string()),
    })
}

fn parse_delimited(line: &str) -> Option<LocationMatch> {
    let caps = DELIMITED_RE.captures(line)?;
    let region = caps[2].trim();
    let qualifier = caps[3].trim().to_string();

    // 中央セグメント自体が括弧形式ならそちらを優先
    if let Some(mut inner) = parse_parenthetical(region) {
        inner.qualifier = inner
            .qualifier
            .map(|q| format!("{} {}", q, qualifier))
            .or(Some(qualifier));
        return Some(inner);
    }

    let (city, country) = match region.split_once(',') {
        Some((city, country)) => (city.trim().to_string(), country.trim().to_string()),
        None => (region.to_string(), String::new()),
    };

    Some(LocationMatch {
        city,
        country,
        qualifier: Some(qualifier),
    })
}

/// 優先順の勤務地パーサ
const LOCATION_PARSERS: [fn(&str) -> Option<LocationMatch>; 2] = [parse_parenthetical, parse_delimited];

/// ブロックの行から勤務地を抽出。見つからなければ空
pub fn extract_location(lines: &[String]) -> LocationMatch {
    LOCATION_PARSERS
        .iter()
        .find_map(|parse| lines.iter().find_map(|line| parse(line)))
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parenthetical_city_country() {
        let found = extract_location(&lines(&["Senior .NET Developer", "London, UK (Remote)"]));
        assert_eq!(found.city, "London");
        assert_eq!(found.country, "UK");
        assert_eq!(found.qualifier.as_deref(), Some("Remote"));
    }

    #[test]
    fn test_parenthetical_single_region() {
        let found = extract_location(&lines(&["Berlin (Hybrid)"]));
        assert_eq!(found.city, "Berlin");
        assert_eq!(found.country, "");
        assert_eq!(found.qualifier.as_deref(), Some("Hybrid"));
    }

    #[test]
    fn test_parenthetical_multi_word_regions() {
        let found = extract_location(&lines(&["São Paulo, Brazil (On-site)"]));
        assert_eq!(found.city, "São Paulo");
        assert_eq!(found.country, "Brazil");
        assert_eq!(found.qualifier.as_deref(), Some("On-site"));
    }

    #[test]
    fn test_delimited_location() {
        let found = extract_location(&lines(&["Initech · Amsterdam, Netherlands · Hybrid"]));
        assert_eq!(found.city, "Amsterdam");
        assert_eq!(found.country, "Netherlands");
        assert_eq!(found.qualifier.as_deref(), Some("Hybrid"));
    }

    #[test]
    fn test_parenthetical_preferred_over_delimited() {
        let found = extract_location(&lines(&[
            "Initech · Paris, France · On-site",
            "Dublin, Ireland (Remote)",
        ]));
        assert_eq!(found.city, "Dublin");
    }

    #[test]
    fn test_title_with_parenthetical_is_not_location() {
        assert!(!is_location_line("Senior Developer (m/f/d)"));
        assert!(!is_location_line("Rust Engineer (12 month contract)"));
    }

    #[test]
    fn test_no_location() {
        let found = extract_location(&lines(&["Go Developer", "Acme"]));
        assert_eq!(found, LocationMatch::default());
    }
}
