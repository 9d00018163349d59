//! Waste category enum as the single source of truth for category labels.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Fixed waste categories, in menu order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    FoodPackaging,
    PlasticFilm,
    FoodScraps,
    PersonalCare,
    OtherPlastics,
    OtherPaperCardboard,
    Miscellaneous,
}

impl Category {
    /// All categories in menu order.
    pub const ALL: [Self; 7] = [
        Self::FoodPackaging,
        Self::PlasticFilm,
        Self::FoodScraps,
        Self::PersonalCare,
        Self::OtherPlastics,
        Self::OtherPaperCardboard,
        Self::Miscellaneous,
    ];

    /// Human-readable label, also used in the ledger file.
    pub const fn label(self) -> &'static str {
        match self {
            Self::FoodPackaging => "Food Packaging",
            Self::PlasticFilm => "Plastic Film",
            Self::FoodScraps => "Food Scraps",
            Self::PersonalCare => "Personal Care",
            Self::OtherPlastics => "Other Plastics",
            Self::OtherPaperCardboard => "Other Paper/Cardboard",
            Self::Miscellaneous => "Miscellaneous",
        }
    }

    /// Resolves a 1-based menu selection.
    pub fn from_index(index: usize) -> Option<Self> {
        index
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }

    /// Reduction advice for this category. Empty when no advice exists.
    pub const fn advice(self) -> &'static [&'static str] {
        match self {
            Self::FoodPackaging => &[
                "Buy in bulk using reusable containers",
                "Choose products with minimal/recyclable packaging",
                "Use reusable bags for grocery shopping",
            ],
            Self::PlasticFilm => &[
                "Switch to reusable silicone bags",
                "Use beeswax wraps instead of plastic wrap",
                "Choose loose produce instead of pre-packaged",
            ],
            Self::FoodScraps => &[
                "Start composting kitchen scraps",
                "Plan meals to reduce food waste",
                "Use vegetable scraps for homemade broth",
            ],
            Self::PersonalCare => &[
                "Switch to bamboo toothbrushes",
                "Use shampoo and conditioner bars",
                "Choose safety razors instead of disposable",
            ],
            Self::OtherPlastics => &[
                "Carry a reusable water bottle and coffee cup",
                "Use reusable straws and utensils",
                "Choose glass or metal containers over plastic",
            ],
            Self::OtherPaperCardboard => &[
                "Reuse cardboard boxes for storage",
                "Use both sides of paper before recycling",
                "Switch to digital bills and statements",
            ],
            Self::Miscellaneous => &[],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.label() == s)
            .ok_or_else(|| UnknownCategory(s.to_string()))
    }
}

impl Serialize for Category {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Error type for labels outside the fixed category set.
#[derive(Debug, Clone)]
pub struct UnknownCategory(String);

impl fmt::Display for UnknownCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown category: {}", self.0)
    }
}

impl std::error::Error for UnknownCategory {}
