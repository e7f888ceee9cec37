//! Selection store
//!
//! Holds the current answer for each of the eight categories. Single-choice
//! categories store one string (empty means "nothing chosen"); multi-choice
//! categories store an ordered, duplicate-free list in selection order.
//!
//! Mutations never fail. Applying a single-choice update to a checkbox
//! category (or the reverse) leaves the record untouched, and values are not
//! checked against the catalog here; see [`SelectionRecord::check_catalog`].

use crate::catalog;
use crate::types::Category;
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

/// Problems reported by [`SelectionRecord::check_catalog`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A stored value is not one of the category's fixed options
    #[error("{category}: '{value}' is not a listed option")]
    NotInCatalog { category: Category, value: String },

    /// A checkbox category holds the same value twice
    #[error("{category}: '{value}' is selected more than once")]
    Duplicate { category: Category, value: String },
}

/// Borrowed view of one category's value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionValue<'a> {
    Single(&'a str),
    Multi(&'a [String]),
}

impl SelectionValue<'_> {
    /// Returns true when nothing is selected.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Single(value) => value.is_empty(),
            Self::Multi(values) => values.is_empty(),
        }
    }
}

/// The full set of answers for one session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SelectionRecord {
    general_policy: String,
    applied_tools: Vec<String>,
    conditions: Vec<String>,
    processes: Vec<String>,
    rationale: String,
    consequences: String,
    support: String,
    position_statement: String,
}

impl SelectionRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    fn single_slot(&mut self, category: Category) -> Option<&mut String> {
        match category {
            Category::GeneralPolicy => Some(&mut self.general_policy),
            Category::Rationale => Some(&mut self.rationale),
            Category::Consequences => Some(&mut self.consequences),
            Category::Support => Some(&mut self.support),
            Category::PositionStatement => Some(&mut self.position_statement),
            Category::AppliedTools | Category::Conditions | Category::Processes => None,
        }
    }

    fn multi_slot(&mut self, category: Category) -> Option<&mut Vec<String>> {
        match category {
            Category::AppliedTools => Some(&mut self.applied_tools),
            Category::Conditions => Some(&mut self.conditions),
            Category::Processes => Some(&mut self.processes),
            _ => None,
        }
    }

    /// Replace the value of a single-choice category.
    ///
    /// Returns whether the record changed. No-op for multi-choice categories.
    pub fn set_single(&mut self, category: Category, value: impl Into<String>) -> bool {
        let value = value.into();
        let Some(slot) = self.single_slot(category) else {
            debug!(%category, "set_single ignored for multi-choice category");
            return false;
        };
        if *slot == value {
            return false;
        }
        debug!(%category, %value, "single-choice value set");
        *slot = value;
        true
    }

    /// Reset a single-choice category to empty.
    pub fn clear_single(&mut self, category: Category) -> bool {
        self.set_single(category, String::new())
    }

    /// Remove `value` if present, otherwise append it.
    ///
    /// Returns whether the record changed. No-op for single-choice categories.
    pub fn toggle_multi(&mut self, category: Category, value: impl Into<String>) -> bool {
        let value = value.into();
        let Some(values) = self.multi_slot(category) else {
            debug!(%category, "toggle_multi ignored for single-choice category");
            return false;
        };
        if let Some(pos) = values.iter().position(|v| *v == value) {
            values.remove(pos);
            debug!(%category, %value, "multi-choice value removed");
        } else {
            debug!(%category, %value, "multi-choice value appended");
            values.push(value);
        }
        true
    }

    /// Consuming form of [`SelectionRecord::set_single`].
    pub fn with_single(mut self, category: Category, value: impl Into<String>) -> Self {
        self.set_single(category, value);
        self
    }

    /// Consuming form of [`SelectionRecord::toggle_multi`].
    pub fn with_toggled(mut self, category: Category, value: impl Into<String>) -> Self {
        self.toggle_multi(category, value);
        self
    }

    /// Value of a single-choice category, or `None` for multi-choice ones.
    pub fn single(&self, category: Category) -> Option<&str> {
        match self.value(category) {
            SelectionValue::Single(value) => Some(value),
            SelectionValue::Multi(_) => None,
        }
    }

    /// Values of a multi-choice category, or `None` for single-choice ones.
    pub fn multi(&self, category: Category) -> Option<&[String]> {
        match self.value(category) {
            SelectionValue::Multi(values) => Some(values),
            SelectionValue::Single(_) => None,
        }
    }

    /// Borrowed view of a category's current value.
    pub fn value(&self, category: Category) -> SelectionValue<'_> {
        match category {
            Category::GeneralPolicy => SelectionValue::Single(&self.general_policy),
            Category::AppliedTools => SelectionValue::Multi(&self.applied_tools),
            Category::Conditions => SelectionValue::Multi(&self.conditions),
            Category::Processes => SelectionValue::Multi(&self.processes),
            Category::Rationale => SelectionValue::Single(&self.rationale),
            Category::Consequences => SelectionValue::Single(&self.consequences),
            Category::Support => SelectionValue::Single(&self.support),
            Category::PositionStatement => SelectionValue::Single(&self.position_statement),
        }
    }

    /// Returns true if `value` is the chosen radio value or a checked box.
    pub fn is_selected(&self, category: Category, value: &str) -> bool {
        match self.value(category) {
            SelectionValue::Single(current) => !current.is_empty() && current == value,
            SelectionValue::Multi(values) => values.iter().any(|v| v == value),
        }
    }

    /// Returns true when the category has nothing selected.
    pub fn is_category_empty(&self, category: Category) -> bool {
        self.value(category).is_empty()
    }

    /// Returns true when no category has anything selected.
    pub fn is_empty(&self) -> bool {
        Category::all().all(|c| self.is_category_empty(c))
    }

    /// Number of categories with at least one selection.
    pub fn answered_count(&self) -> usize {
        Category::all().filter(|c| !self.is_category_empty(*c)).count()
    }

    /// Check every stored value against the fixed option lists.
    pub fn check_catalog(&self) -> Result<(), SelectionError> {
        for category in Category::all() {
            match self.value(category) {
                SelectionValue::Single(value) => {
                    if !value.is_empty() && !catalog::contains(category, value) {
                        return Err(SelectionError::NotInCatalog {
                            category,
                            value: value.to_string(),
                        });
                    }
                }
                SelectionValue::Multi(values) => {
                    for (i, value) in values.iter().enumerate() {
                        if !catalog::contains(category, value) {
                            return Err(SelectionError::NotInCatalog {
                                category,
                                value: value.clone(),
                            });
                        }
                        if values[i + 1..].contains(value) {
                            return Err(SelectionError::Duplicate {
                                category,
                                value: value.clone(),
                            });
                        }
                    }
                }
            }
        }
        Ok(())
    }
}
