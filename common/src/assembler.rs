//! 求人組み立てモジュール
//!
//! 1ブロック分の抽出結果を ExtractedVacancy にまとめる。
//! 職種名が見つからないブロックは None（エラーではない）。

use crate::extractors::{
    detect_engagement_type, detect_remote_policy, detect_seniority, extract_company,
    extract_location, extract_salary, extract_skills, extract_title, AnnualizationRates,
};
use crate::types::{ExtractedVacancy, ListingBlock, SOURCE_PLATFORM};
use crate::vocabulary::ExtractionVocabulary;

/// 抽出に使う語彙と換算係数
#[derive(Debug, Clone, Default)]
pub struct ExtractionProfile {
    pub vocabulary: ExtractionVocabulary,
    pub rates: AnnualizationRates,
}

/// ブロックから求人を組み立てる
///
/// # Arguments
/// * `block` - 対象ブロック
/// * `source_id` - ソースの識別子（通常は画像ファイル名のstem）
/// * `block_index` - テキスト内でのブロック番号（0始まり）
/// * `profile` - 語彙と換算係数
///
/// # Returns
/// 職種名が見つかれば `Some(ExtractedVacancy)`、無ければ `None`
pub fn assemble(
    block: &ListingBlock,
    source_id: &str,
    block_index: usize,
    profile: &ExtractionProfile,
) -> Option<ExtractedVacancy> {
    let lines = block.lines();
    let title = extract_title(lines)?;
    let text = block.text();

    let company = extract_company(lines, title.line_index, &profile.vocabulary);
    let location = extract_location(lines);
    let salary = extract_salary(&text, &profile.rates);

    Some(ExtractedVacancy {
        id: format!("{}-{}", source_id, block_index),
        title: title.title,
        company,
        remote_policy: detect_remote_policy(&text, location.qualifier.as_deref()),
        city: location.city,
        country: location.country,
        seniority_level: detect_seniority(&text),
        engagement_type: detect_engagement_type(&text),
        salary_min: salary.min,
        salary_max: salary.max,
        salary_currency: salary.currency,
        required_skills: extract_skills(&text, &profile.vocabulary),
        raw_block_text: text,
        source_platform: SOURCE_PLATFORM.to_string(),
    })
}

/// ブロック列をまとめて組み立てる（職種名の無いブロックは捨てる）
pub fn assemble_all(
    blocks: &[ListingBlock],
    source_id: &str,
    profile: &ExtractionProfile,
) -> Vec<ExtractedVacancy> {
    blocks
        .iter()
        .enumerate()
        .filter_map(|(index, block)| assemble(block, source_id, index, profile))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segmenter::segment;
    use crate::types::{EngagementType, RemotePolicy, SeniorityLevel};

    fn block(text: &str) -> ListingBlock {
        ListingBlock::new(text.lines()).unwrap()
    }

    #[test]
    fn test_assemble_end_to_end_scenario() {
        let profile = ExtractionProfile::default();
        let b = block("Senior .NET Developer\nAcme Corp\nLondon, UK (Remote)\n$90K - $120K");
        let v = assemble(&b, "feed", 0, &profile).unwrap();

        assert_eq!(v.id, "feed-0");
        assert_eq!(v.title, "Senior .NET Developer");
        assert_eq!(v.company, "Acme Corp");
        assert_eq!(v.city, "London");
        assert_eq!(v.country, "UK");
        assert_eq!(v.remote_policy, RemotePolicy::FullyRemote);
        assert_eq!(v.seniority_level, SeniorityLevel::Senior);
        assert_eq!(v.salary_min, Some(90_000));
        assert_eq!(v.salary_max, Some(120_000));
        assert_eq!(v.salary_currency, "USD");
        assert_eq!(v.required_skills, vec![".NET".to_string()]);
        assert_eq!(v.source_platform, SOURCE_PLATFORM);
        assert_eq!(v.raw_block_text, b.text());
    }

    #[test]
    fn test_assemble_generic_title_before_description() {
        let profile = ExtractionProfile::default();
        let b = block("Solutions Architect\nAcme Corp\nWork with our senior Java engineers");
        let v = assemble(&b, "feed", 0, &profile).unwrap();
        assert_eq!(v.title, "Solutions Architect");
        assert_eq!(v.company, "Acme Corp");
    }

    #[test]
    fn test_assemble_without_title_is_none() {
        let profile = ExtractionProfile::default();
        let b = block("Easy Apply\nPromoted\n12 applicants");
        assert!(assemble(&b, "feed", 3, &profile).is_none());
    }

    #[test]
    fn test_assemble_contract_listing() {
        let profile = ExtractionProfile::default();
        let b = block(
            "Lead Rust Engineer\nInitech · Berlin, Germany · Hybrid\n€600 - €750 per day\nB2B contract, Kubernetes, Kafka",
        );
        let v = assemble(&b, "shot", 2, &profile).unwrap();
        assert_eq!(v.id, "shot-2");
        assert_eq!(v.company, "Initech");
        assert_eq!(v.city, "Berlin");
        assert_eq!(v.country, "Germany");
        assert_eq!(v.remote_policy, RemotePolicy::Hybrid);
        assert_eq!(v.seniority_level, SeniorityLevel::Lead);
        assert_eq!(v.engagement_type, EngagementType::ContractB2B);
        // 日給は年額に換算しない
        assert_eq!(v.salary_min, None);
        assert_eq!(v.salary_max, None);
        assert_eq!(v.salary_currency, "EUR");
        assert_eq!(v.required_skills, vec!["Kubernetes", "Kafka", "Rust"]);
    }

    #[test]
    fn test_assemble_all_keeps_block_indices() {
        let profile = ExtractionProfile::default();
        let blocks = segment("Promoted\nEasy Apply\n\nRust Engineer\nAcme\n\nGo Developer\nInitech");
        let vacancies = assemble_all(&blocks, "img", &profile);
        assert_eq!(vacancies.len(), 2);
        assert_eq!(vacancies[0].id, "img-1");
        assert_eq!(vacancies[1].id, "img-2");
    }

    #[test]
    fn test_assemble_is_deterministic() {
        let profile = ExtractionProfile::default();
        let b = block("Senior Staff Engineer\nGlobex\n$40/hr - $60/hr\nPermanent, Python, AWS");
        let first = assemble(&b, "x", 0, &profile);
        let second = assemble(&b, "x", 0, &profile);
        assert_eq!(first, second);
        let v = first.unwrap();
        assert_eq!(v.seniority_level, SeniorityLevel::Principal);
        assert_eq!(v.engagement_type, EngagementType::Employment);
        assert_eq!(v.salary_min, Some(83_200));
        assert_eq!(v.salary_max, Some(124_800));
    }
}
