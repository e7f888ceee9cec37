//! Fixed option catalog
//!
//! Every question group offers a fixed list of statements. The text here is
//! what ends up in the generated paragraph, so it is kept verbatim.

use crate::types::Category;

const GENERAL_POLICY: &[&str] = &[
    "Students are allowed to use AI tools freely as they choose.",
    "Students are only allowed to use AI tools in the limited ways described below.",
    "Students are not allowed to use AI tools, except when certain conditions are met as described below.",
    "Students are never allowed to use AI tools.",
];

const APPLIED_TOOLS: &[&str] = &[
    "AI chatbots (e.g., ChatGPT, Google Gemini, Claude, CoPilot).",
    "AI image generators (e.g., DALL-E, Midjourney, Stable Diffusion).",
    "AI code generators (e.g., CoPilot, Tabnine, Cody).",
    "AI audio or music generators (e.g., Amper, AIVA, Soundful).",
];

const CONDITIONS: &[&str] = &[
    "Only for specified assignments.",
    "Only with proper citations and acknowledgment.",
    "Only under supervision during class.",
    "Only by request and with instructor approval.",
    "Only for reflection, studying, and ideation.",
];

const PROCESSES: &[&str] = &[
    "Students must disclose the use of AI in their work, citing the system(s) used.",
    "Students must include an author\u{2019}s statement describing how AI output was reviewed.",
    "Students must cite all AI outputs following standard citation guidelines (APA/MLA).",
    "Students are responsible for identifying and addressing any inaccurate or biased AI content.",
];

const RATIONALE: &[&str] = &[
    "I consider learning to use AI tools an important skill in the discipline.",
    "Content in this course is private, so AI tools must be used only with caution.",
    "As AI tools evolve, the teaching team needs more time to adapt the course properly.",
];

const CONSEQUENCES: &[&str] = &[
    "If a student is suspected of not following this policy, the matter shall be referred to administration.",
    "Student work lacking required elements (citations, statements, etc.) shall receive a grade penalty.",
];

const SUPPORT: &[&str] = &[
    "AI use is not required and is entirely optional. Equivalent alternatives are provided.",
    "We will go over in class how to access and responsibly use any specified AI tools.",
];

const POSITION_STATEMENTS: &[&str] = &[
    "If you feel pressure in this course, please reach out instead of resorting to chatbots as a shortcut.",
    "A major goal for this course is for you to develop your creative voice and style. I want you to be critical of AI.",
    "We respect your concerns about privacy; you may opt out of AI usage and request alternative assignments.",
    "Generative AI tools come with a responsibility to verify the accuracy and integrity of AI output.",
    "Thoughtful and responsible use of generative AI applies to everyone, including me as your instructor.",
];

/// Options offered for a category, in display order.
pub fn options(category: Category) -> &'static [&'static str] {
    match category {
        Category::GeneralPolicy => GENERAL_POLICY,
        Category::AppliedTools => APPLIED_TOOLS,
        Category::Conditions => CONDITIONS,
        Category::Processes => PROCESSES,
        Category::Rationale => RATIONALE,
        Category::Consequences => CONSEQUENCES,
        Category::Support => SUPPORT,
        Category::PositionStatement => POSITION_STATEMENTS,
    }
}

/// Numbered section heading shown above the option group.
pub fn heading(category: Category) -> &'static str {
    match category {
        Category::GeneralPolicy => "1. General Policy about AI Use",
        Category::AppliedTools => "2. The Policy Applies to These AI Tools",
        Category::Conditions => "3. Conditions for Using AI Tools",
        Category::Processes => "4. Required Processes for Students",
        Category::Rationale => "5. Rationale",
        Category::Consequences => "6. Consequences for Non-compliance",
        Category::Support => "7. Support Resources",
        Category::PositionStatement => "8. Additional Position or Supportive Statement",
    }
}

/// Short label used in the navigation bar and help text.
pub fn short_label(category: Category) -> &'static str {
    match category {
        Category::GeneralPolicy => "Policy",
        Category::AppliedTools => "Tools",
        Category::Conditions => "Conditions",
        Category::Processes => "Processes",
        Category::Rationale => "Rationale",
        Category::Consequences => "Consequences",
        Category::Support => "Support",
        Category::PositionStatement => "Position",
    }
}

/// Fixed text that precedes the selected value(s) in a fragment.
pub fn template_prefix(category: Category) -> &'static str {
    match category {
        Category::GeneralPolicy => "General policy about AI use in this course: ",
        Category::AppliedTools => "This policy specifically applies to: ",
        Category::Conditions => "AI tools may be used under the following conditions: ",
        Category::Processes => "In addition, the following processes are required: ",
        Category::Rationale => "Rationale: ",
        Category::Consequences => "Consequences for non-compliance: ",
        Category::Support => "Support resources: ",
        Category::PositionStatement => "Additional statement: ",
    }
}

/// Look up an option by its 1-based display number.
pub fn option_by_number(category: Category, number: usize) -> Option<&'static str> {
    number
        .checked_sub(1)
        .and_then(|i| options(category).get(i).copied())
}

/// Returns true if `value` is one of the category's options.
pub fn contains(category: Category, value: &str) -> bool {
    options(category).contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_category_has_options() {
        for category in Category::all() {
            assert!(!options(category).is_empty(), "{category} has no options");
        }
    }

    #[test]
    fn test_headings_are_numbered_in_order() {
        for category in Category::all() {
            let expected = format!("{}.", category.index() + 1);
            assert!(heading(category).starts_with(&expected));
        }
    }

    #[test]
    fn test_option_by_number_is_one_based() {
        assert_eq!(
            option_by_number(Category::GeneralPolicy, 4),
            Some("Students are never allowed to use AI tools.")
        );
        assert_eq!(option_by_number(Category::GeneralPolicy, 0), None);
        assert_eq!(option_by_number(Category::GeneralPolicy, 5), None);
    }

    #[test]
    fn test_options_have_no_duplicates() {
        for category in Category::all() {
            let opts = options(category);
            for (i, opt) in opts.iter().enumerate() {
                assert!(!opts[i + 1..].contains(opt));
            }
        }
    }
}
