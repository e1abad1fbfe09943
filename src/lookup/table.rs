use std::collections::HashMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;

use crate::error::Result;
use crate::lookup::FoodLookup;
use crate::models::ReferenceFood;

/// Minimum Jaro-Winkler score for a name to be offered as a suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.7;

/// How ties between several rows containing the search key are resolved.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum MatchStrategy {
    /// First row in alphabetical order.
    #[default]
    FirstMatch,
    /// Exact name, then the key as a whole word, then closest by Jaro-Winkler.
    Ranked,
}

/// In-memory reference table with a canonical (alphabetical) row order.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    /// Rows sorted by lowercase name, unique by lowercase name.
    foods: Vec<ReferenceFood>,
    strategy: MatchStrategy,
}

impl ReferenceTable {
    /// Build a table from rows.
    ///
    /// Deduplicates by lowercase name (last occurrence wins) and sorts by name.
    pub fn new(foods: Vec<ReferenceFood>) -> Self {
        let mut seen: HashMap<String, ReferenceFood> = HashMap::new();
        for food in foods {
            seen.insert(food.key(), food);
        }

        let mut foods: Vec<ReferenceFood> = seen.into_values().collect();
        foods.sort_by_key(|f| f.key());

        Self {
            foods,
            strategy: MatchStrategy::default(),
        }
    }

    pub fn with_strategy(mut self, strategy: MatchStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    pub fn strategy(&self) -> MatchStrategy {
        self.strategy
    }

    /// Get a food by exact name (case-insensitive).
    pub fn get_food(&self, name: &str) -> Option<&ReferenceFood> {
        let key = name.to_lowercase();
        self.foods.iter().find(|f| f.key() == key)
    }

    /// All rows whose name contains `term` (case-insensitive), in canonical order.
    ///
    /// An empty term returns every row.
    pub fn search(&self, term: &str) -> Vec<&ReferenceFood> {
        let term = term.trim().to_lowercase();
        self.foods
            .iter()
            .filter(|f| f.key().contains(&term))
            .collect()
    }

    /// Resolve `key` to a single row according to the table's strategy.
    pub fn best_match(&self, key: &str) -> Option<&ReferenceFood> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return None;
        }

        match self.strategy {
            MatchStrategy::FirstMatch => self.foods.iter().find(|f| f.key().contains(&key)),
            MatchStrategy::Ranked => self
                .foods
                .iter()
                .filter_map(|f| {
                    let name = f.key();
                    name.contains(&key)
                        .then(|| (f, match_tier(&name, &key), jaro_winkler(&name, &key)))
                })
                // min_by keeps the first of equal elements, preserving name order
                .min_by(|a, b| {
                    a.1.cmp(&b.1)
                        .then(b.2.partial_cmp(&a.2).unwrap_or(std::cmp::Ordering::Equal))
                })
                .map(|(f, _, _)| f),
        }
    }

    /// Names close to `key`, best first, for "did you mean" hints.
    pub fn suggest(&self, key: &str, limit: usize) -> Vec<&str> {
        let key = key.trim().to_lowercase();
        if key.is_empty() {
            return Vec::new();
        }

        let mut candidates: Vec<(&ReferenceFood, f64)> = self
            .foods
            .iter()
            .map(|f| (f, jaro_winkler(&f.key(), &key)))
            .filter(|(_, score)| *score > SUGGESTION_THRESHOLD)
            .collect();

        candidates.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(std::cmp::Ordering::Equal));

        candidates
            .into_iter()
            .take(limit)
            .map(|(f, _)| f.name.as_str())
            .collect()
    }

    /// All rows in canonical order.
    pub fn all(&self) -> &[ReferenceFood] {
        &self.foods
    }

    /// Count of rows in the table.
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    /// Check if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }
}

impl FoodLookup for ReferenceTable {
    fn find(&self, key: &str) -> Result<Option<ReferenceFood>> {
        Ok(self.best_match(key).cloned())
    }
}

/// 0 = exact name, 1 = key starts a word of the name, 2 = any substring.
fn match_tier(name: &str, key: &str) -> u8 {
    if name == key {
        0
    } else if name
        .match_indices(key)
        .any(|(i, _)| i == 0 || name[..i].ends_with(|c: char| !c.is_alphanumeric()))
    {
        1
    } else {
        2
    }
}
