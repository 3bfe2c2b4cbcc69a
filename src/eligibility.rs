//! 適格性判定の境界
//!
//! 組み立てた求人1件ごとに外部の判定器を呼び出す。判定基準そのものは扱わない。

use jobscan_common::ExtractedVacancy;
use serde::{Deserialize, Serialize};

/// 判定結果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EligibilityAssessment {
    pub is_eligible: bool,
    #[serde(default)]
    pub reasons: Vec<String>,
}

impl EligibilityAssessment {
    pub fn eligible() -> Self {
        Self {
            is_eligible: true,
            reasons: Vec::new(),
        }
    }

    pub fn ineligible(reasons: Vec<String>) -> Self {
        Self {
            is_eligible: false,
            reasons,
        }
    }
}

pub trait EligibilityGate {
    fn assess(&self, vacancy: &ExtractedVacancy) -> EligibilityAssessment;
}

/// すべて適格とする判定器（CLIの既定）
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAll;

impl EligibilityGate for AcceptAll {
    fn assess(&self, _vacancy: &ExtractedVacancy) -> EligibilityAssessment {
        EligibilityAssessment::eligible()
    }
}

impl<F> EligibilityGate for F
where
    F: Fn(&ExtractedVacancy) -> EligibilityAssessment,
{
    fn assess(&self, vacancy: &ExtractedVacancy) -> EligibilityAssessment {
        self(vacancy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jobscan_common::{assemble, ExtractionProfile, ListingBlock, RemotePolicy};

    fn vacancy(text: &str) -> ExtractedVacancy {
        let block = ListingBlock::new(text.lines()).unwrap();
        assemble(&block, "t", 0, &ExtractionProfile::default()).unwrap()
    }

    #[test]
    fn test_accept_all() {
        let v = vacancy("Rust Engineer\nAcme");
        assert!(AcceptAll.assess(&v).is_eligible);
    }

    #[test]
    fn test_closure_gate() {
        let remote_only = |v: &ExtractedVacancy| {
            if v.remote_policy == RemotePolicy::FullyRemote {
                EligibilityAssessment::eligible()
            } else {
                EligibilityAssessment::ineligible(vec!["not fully remote".into()])
            }
        };

        assert!(remote_only.assess(&vacancy("Rust Engineer\nRemote")).is_eligible);
        let verdict = remote_only.assess(&vacancy("Rust Engineer\nOn-site"));
        assert!(!verdict.is_eligible);
        assert_eq!(verdict.reasons, vec!["not fully remote".to_string()]);
    }
}
