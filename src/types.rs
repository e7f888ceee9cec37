//! Type-safe enumerations for the statement builder
//!
//! Categories and joining modes are proper Rust enums rather than field-name
//! strings, so an "unknown category" cannot be expressed at all.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

/// One of the eight independent question groups, in canonical order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Category {
    GeneralPolicy,
    AppliedTools,
    Conditions,
    Processes,
    Rationale,
    Consequences,
    Support,
    PositionStatement,
}

/// Whether a category holds one value or an ordered set of values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Radio group: one value or none.
    Single,
    /// Checkbox group: zero or more values, in selection order.
    Multi,
}

impl Category {
    /// Number of categories (and of question steps in the wizard).
    pub const COUNT: usize = 8;

    /// All categories in canonical order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }

    /// Cardinality of this category.
    pub const fn cardinality(self) -> Cardinality {
        match self {
            Self::AppliedTools | Self::Conditions | Self::Processes => Cardinality::Multi,
            Self::GeneralPolicy
            | Self::Rationale
            | Self::Consequences
            | Self::Support
            | Self::PositionStatement => Cardinality::Single,
        }
    }

    /// Returns true for checkbox categories.
    pub const fn is_multi(self) -> bool {
        matches!(self.cardinality(), Cardinality::Multi)
    }

    /// 0-based position in canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Inverse of [`Category::index`].
    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }
}

/// How generated fragments are joined into the final paragraph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[derive(Display, EnumString, EnumIter)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum JoinMode {
    /// Join with ". " and append "."; double periods are left as-is.
    Strict,
    /// Join with a space, collapse period runs, ensure one trailing period.
    #[default]
    Normalized,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_order_and_index() {
        let all: Vec<Category> = Category::all().collect();
        assert_eq!(all.len(), Category::COUNT);
        assert_eq!(all[0], Category::GeneralPolicy);
        assert_eq!(all[7], Category::PositionStatement);
        for (i, category) in all.iter().enumerate() {
            assert_eq!(category.index(), i);
            assert_eq!(Category::from_index(i), Some(*category));
        }
        assert_eq!(Category::from_index(8), None);
    }

    #[test]
    fn test_category_cardinality() {
        let multi: Vec<Category> = Category::all().filter(|c| c.is_multi()).collect();
        assert_eq!(
            multi,
            vec![Category::AppliedTools, Category::Conditions, Category::Processes]
        );
    }

    #[test]
    fn test_category_strings() {
        assert_eq!(Category::GeneralPolicy.to_string(), "general-policy");
        assert_eq!(
            "position-statement".parse::<Category>().ok(),
            Some(Category::PositionStatement)
        );
        assert!("policy".parse::<Category>().is_err());
    }

    #[test]
    fn test_join_mode_parse() {
        assert_eq!("strict".parse::<JoinMode>().ok(), Some(JoinMode::Strict));
        assert_eq!(JoinMode::default(), JoinMode::Normalized);
        assert_eq!(JoinMode::Normalized.to_string(), "normalized");
    }
}
