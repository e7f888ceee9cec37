//! Paragraph generator
//!
//! Maps a [`SelectionRecord`] to one paragraph of syllabus text. Each
//! non-empty category contributes one fragment built from a fixed template,
//! in canonical category order; empty categories are skipped entirely.
//!
//! Two joining policies exist:
//!
//! - **Strict**: fragments joined with `". "` plus a trailing `"."`. A value
//!   that already ends in a period produces `".."`, which is left alone.
//! - **Normalized**: fragments joined with a space, runs of periods
//!   collapsed, trimmed, and a trailing period added only when missing.
//!
//! The function is pure: the same record and config always give the same
//! string.

use crate::catalog;
use crate::error::{BuilderError, Result};
use crate::selection::{SelectionRecord, SelectionValue};
use crate::types::{Category, JoinMode};
use serde::{Deserialize, Serialize};

/// Separator between checked items in a multi-choice fragment.
pub const DEFAULT_SEPARATOR: &str = "; ";

/// Separator of the legacy single-page output.
pub const LEGACY_SEPARATOR: &str = " ";

/// Settings that shape the generated paragraph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratorConfig {
    pub mode: JoinMode,
    pub separator: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            mode: JoinMode::Normalized,
            separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Strict joining with space-separated items, matching the legacy
    /// single-page output byte for byte (double periods included).
    pub fn legacy() -> Self {
        Self {
            mode: JoinMode::Strict,
            separator: LEGACY_SEPARATOR.to_string(),
        }
    }

    /// Reject settings that would glue checked items together.
    pub fn validate(&self) -> Result<()> {
        if self.separator.is_empty() {
            return Err(BuilderError::validation("Separator must not be empty"));
        }
        Ok(())
    }
}

/// Build the fragment for one category, or `None` if it is empty.
pub fn fragment(record: &SelectionRecord, category: Category, separator: &str) -> Option<String> {
    let value = record.value(category);
    if value.is_empty() {
        return None;
    }
    let body = match value {
        SelectionValue::Single(value) => value.to_string(),
        SelectionValue::Multi(values) => values.join(separator),
    };
    Some(format!("{}{}", catalog::template_prefix(category), body))
}

/// All fragments for the record, in canonical category order.
pub fn fragments(record: &SelectionRecord, separator: &str) -> Vec<String> {
    Category::all()
        .filter_map(|category| fragment(record, category, separator))
        .collect()
}

/// Generate the paragraph for `record`.
pub fn generate(record: &SelectionRecord, config: &GeneratorConfig) -> String {
    let parts = fragments(record, &config.separator);
    match config.mode {
        JoinMode::Strict => format!("{}.", parts.join(". ")),
        JoinMode::Normalized => {
            let collapsed = collapse_periods(&parts.join(" "));
            let trimmed = collapsed.trim();
            if trimmed.is_empty() || trimmed.ends_with('.') {
                trimmed.to_string()
            } else {
                format!("{trimmed}.")
            }
        }
    }
}

/// Replace runs of two or three periods with a single period.
///
/// Longer runs are consumed three at a time from the left, so `"...."`
/// becomes `".."` and `"......."` becomes `"..."`.
pub fn collapse_periods(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '.' {
            out.push(c);
            continue;
        }
        let mut run = 1;
        while chars.peek() == Some(&'.') {
            chars.next();
            run += 1;
        }
        while run >= 2 {
            out.push('.');
            run -= run.min(3);
        }
        if run == 1 {
            out.push('.');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapse_periods() {
        assert_eq!(collapse_periods("a.b"), "a.b");
        assert_eq!(collapse_periods("a..b"), "a.b");
        assert_eq!(collapse_periods("a...b"), "a.b");
        assert_eq!(collapse_periods("a....b"), "a..b");
        assert_eq!(collapse_periods("a.....b"), "a..b");
        assert_eq!(collapse_periods("a......b"), "a..b");
        assert_eq!(collapse_periods("a.......b"), "a...b");
        assert_eq!(collapse_periods(""), "");
    }

    #[test]
    fn test_validate_separator() {
        assert!(GeneratorConfig::default().validate().is_ok());
        assert!(GeneratorConfig::legacy().validate().is_ok());
        let glued = GeneratorConfig {
            separator: String::new(),
            ..Default::default()
        };
        assert!(matches!(glued.validate(), Err(BuilderError::Validation(_))));
    }

    #[test]
    fn test_fragment_skips_empty() {
        let record = SelectionRecord::new();
        assert_eq!(fragment(&record, Category::Rationale, "; "), None);
    }

    #[test]
    fn test_fragment_uses_template() {
        let record = SelectionRecord::new().with_single(Category::Support, "Office hours.");
        assert_eq!(
            fragment(&record, Category::Support, "; ").as_deref(),
            Some("Support resources: Office hours.")
        );
    }

    #[test]
    fn test_empty_record() {
        let record = SelectionRecord::new();
        assert_eq!(generate(&record, &GeneratorConfig::legacy()), ".");
        assert_eq!(generate(&record, &GeneratorConfig::default()), "");
    }

    #[test]
    fn test_normalized_appends_missing_period() {
        let record = SelectionRecord::new().with_single(Category::Rationale, "Because");
        assert_eq!(
            generate(&record, &GeneratorConfig::default()),
            "Rationale: Because."
        );
    }
}
