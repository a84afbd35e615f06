//! Deterministic message sampling for tier-bounded LLM submission.
//!
//! Long chats are downsampled to a fixed budget before being sent off for
//! analysis. The sampler is an even stride over the list, not a random
//! draw: the same input and budget always select the same messages, and
//! relative order is preserved.

use serde::{Deserialize, Serialize};

/// Sampling budget tier.
///
/// Pure configuration: selects the message budget (and, downstream, the
/// model the out-of-scope proxy routes to).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisTier {
    /// 100-message budget
    #[default]
    Free,
    /// 300-message budget
    Premium,
}

impl AnalysisTier {
    /// Maximum number of messages forwarded for this tier.
    pub fn max_messages(self) -> usize {
        match self {
            AnalysisTier::Free => 100,
            AnalysisTier::Premium => 300,
        }
    }

    /// Returns all tiers.
    pub fn all() -> &'static [AnalysisTier] {
        &[AnalysisTier::Free, AnalysisTier::Premium]
    }
}

impl std::fmt::Display for AnalysisTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnalysisTier::Free => write!(f, "free"),
            AnalysisTier::Premium => write!(f, "premium"),
        }
    }
}

impl std::str::FromStr for AnalysisTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "free" => Ok(AnalysisTier::Free),
            "premium" => Ok(AnalysisTier::Premium),
            _ => Err(format!("Unknown tier: '{s}'. Expected one of: free, premium")),
        }
    }
}

/// Selects at most `max_items` elements with an even stride.
///
/// Picks index `floor(i * len / max_items)` for each `i`, which spreads the
/// sample across the whole list instead of truncating the tail. When the
/// list already fits the budget, every element is selected.
///
/// Guarantees:
/// - exactly `min(len, max_items)` elements are returned
/// - relative order is preserved
/// - the selection is deterministic
///
/// # Example
///
/// ```
/// use kakaopack::sample::sample_evenly;
///
/// let items: Vec<u32> = (0..10).collect();
/// let picked = sample_evenly(&items, 5);
/// assert_eq!(picked, vec![&0, &2, &4, &6, &8]);
/// ```
pub fn sample_evenly<T>(items: &[T], max_items: usize) -> Vec<&T> {
    if max_items == 0 {
        return Vec::new();
    }
    if items.len() <= max_items {
        return items.iter().collect();
    }

    let step = items.len() as f64 / max_items as f64;
    (0..max_items)
        .map(|i| {
            let idx = ((i as f64 * step).floor() as usize).min(items.len() - 1);
            &items[idx]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_budget_larger_than_input() {
        let items = vec![1, 2, 3];
        let picked = sample_evenly(&items, 10);
        assert_eq!(picked, vec![&1, &2, &3]);
    }

    #[test]
    fn test_exact_count() {
        let items: Vec<u32> = (0..1000).collect();
        for budget in [1, 7, 100, 999, 1000] {
            assert_eq!(sample_evenly(&items, budget).len(), budget.min(items.len()));
        }
    }

    #[test]
    fn test_order_preserved() {
        let items: Vec<u32> = (0..537).collect();
        let picked = sample_evenly(&items, 100);
        let mut sorted = picked.clone();
        sorted.sort();
        assert_eq!(picked, sorted);
    }

    #[test]
    fn test_deterministic() {
        let items: Vec<u32> = (0..321).collect();
        assert_eq!(sample_evenly(&items, 50), sample_evenly(&items, 50));
    }

    #[test]
    fn test_spread_includes_both_ends_region() {
        let items: Vec<u32> = (0..100).collect();
        let picked = sample_evenly(&items, 10);
        assert_eq!(picked[0], &0);
        assert_eq!(picked[9], &90);
    }

    #[test]
    fn test_zero_budget() {
        let items = vec![1, 2, 3];
        assert!(sample_evenly(&items, 0).is_empty());
    }

    #[test]
    fn test_empty_input() {
        let items: Vec<u32> = vec![];
        assert!(sample_evenly(&items, 10).is_empty());
    }

    #[test]
    fn test_tier_budgets() {
        assert_eq!(AnalysisTier::Free.max_messages(), 100);
        assert_eq!(AnalysisTier::Premium.max_messages(), 300);
    }

    #[test]
    fn test_tier_from_str() {
        assert_eq!("free".parse::<AnalysisTier>().unwrap(), AnalysisTier::Free);
        assert_eq!(
            "PREMIUM".parse::<AnalysisTier>().unwrap(),
            AnalysisTier::Premium
        );
        assert!("gold".parse::<AnalysisTier>().is_err());
    }

    #[test]
    fn test_tier_serde_lowercase() {
        assert_eq!(
            serde_json::to_string(&AnalysisTier::Premium).unwrap(),
            "\"premium\""
        );
    }
}
