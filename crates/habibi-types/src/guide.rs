//! Guide view selectors: recommendation categories and prompt wording style.

use serde::{Deserialize, Serialize};

use std::fmt;
use std::str::FromStr;

/// Recommendation categories offered by the explore view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Top Attractions")]
    TopAttractions,
    #[serde(rename = "Luxury Hotels")]
    LuxuryHotels,
    #[serde(rename = "Budget Eats")]
    BudgetEats,
    #[serde(rename = "Hidden Gems")]
    HiddenGems,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 4] = [
        Category::TopAttractions,
        Category::LuxuryHotels,
        Category::BudgetEats,
        Category::HiddenGems,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Category::TopAttractions => "Top Attractions",
            Category::LuxuryHotels => "Luxury Hotels",
            Category::BudgetEats => "Budget Eats",
            Category::HiddenGems => "Hidden Gems",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Accepts the display label case-insensitively, with `-`/`_` allowed
    /// in place of the space (`luxury-hotels`, `budget_eats`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace(['-', '_'], " ");
        Category::ALL
            .into_iter()
            .find(|c| c.label().to_lowercase() == normalized)
            .ok_or_else(|| format!("unknown category: '{}'", s.trim()))
    }
}

/// Wording used for the prompt templates.
///
/// `Detailed` asks for structured output; `Brief` sends the minimal
/// instruction (chat sends the raw user text with no framing).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStyle {
    #[default]
    Detailed,
    Brief,
}

impl fmt::Display for PromptStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PromptStyle::Detailed => write!(f, "detailed"),
            PromptStyle::Brief => write!(f, "brief"),
        }
    }
}
