//! Label classification
//!
//! Labels form a priority list: a description is tested against each label's
//! pattern in configuration order and the first match wins. Patterns are
//! unanchored searches, so `"PAY"` matches `"ACME PAYROLL"`.

use crate::config::LabelRule;
use regex::Regex;

/// A configured label with its compiled pattern
///
/// `matcher` is `None` when the pattern failed to compile; such a label never
/// matches.
#[derive(Debug, Clone)]
struct CompiledLabel {
    name: String,
    matcher: Option<Regex>,
}

/// Ordered, first-match-wins set of labels
#[derive(Debug, Clone, Default)]
pub struct LabelSet {
    labels: Vec<CompiledLabel>,
}

impl LabelSet {
    /// Compile label rules, keeping their order
    ///
    /// Invalid patterns are logged once here and otherwise ignored.
    pub fn new(rules: &[LabelRule]) -> Self {
        let labels = rules
            .iter()
            .map(|rule| {
                let matcher = match Regex::new(&rule.pattern) {
                    Ok(regex) => Some(regex),
                    Err(e) => {
                        tracing::warn!(
                            label = %rule.name,
                            pattern = %rule.pattern,
                            error = %e,
                            "invalid label pattern, label will never match"
                        );
                        None
                    }
                };
                CompiledLabel {
                    name: rule.name.clone(),
                    matcher,
                }
            })
            .collect();

        Self { labels }
    }

    /// Position of the first label whose pattern matches `description`
    pub fn classify(&self, description: &str) -> Option<usize> {
        self.labels.iter().position(|label| {
            label
                .matcher
                .as_ref()
                .is_some_and(|regex| regex.is_match(description))
        })
    }

    /// Label names in configuration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.labels.iter().map(|label| label.name.as_str())
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn label_set(rules: &[(&str, &str)]) -> LabelSet {
        let rules: Vec<_> = rules
            .iter()
            .map(|(name, pattern)| LabelRule::new(name, pattern))
            .collect();
        LabelSet::new(&rules)
    }

    #[rstest]
    #[case::first_label("ACME PAYROLL", Some(0))]
    #[case::second_label("SAFEWAY #123", Some(1))]
    #[case::no_match("ATM WITHDRAWAL", None)]
    #[case::case_sensitive("acme payroll", None)]
    #[case::inline_flag("Whole Foods", Some(2))]
    fn test_classify(#[case] description: &str, #[case] expected: Option<usize>) {
        let labels = label_set(&[
            ("Income", "PAYROLL"),
            ("Groceries", "SAFEWAY|TRADER JOE"),
            ("Organic", "(?i)whole foods"),
        ]);
        assert_eq!(labels.classify(description), expected);
    }

    #[test]
    fn test_earlier_label_wins_on_overlap() {
        let labels = label_set(&[("Coffee", "COFFEE"), ("Food", "COFFEE|DELI")]);
        assert_eq!(labels.classify("BLUE BOTTLE COFFEE"), Some(0));
        assert_eq!(labels.classify("CORNER DELI"), Some(1));

        let reversed = label_set(&[("Food", "COFFEE|DELI"), ("Coffee", "COFFEE")]);
        assert_eq!(reversed.classify("BLUE BOTTLE COFFEE"), Some(0));
    }

    #[test]
    fn test_invalid_pattern_never_matches() {
        let labels = label_set(&[("Broken", "(unclosed"), ("Anything", ".")]);
        assert_eq!(labels.len(), 2);
        assert_eq!(labels.classify("(unclosed"), Some(1));
    }

    #[test]
    fn test_fixed_amount_tag_can_be_targeted() {
        let labels = label_set(&[("Rent", "_Rent$")]);
        assert_eq!(labels.classify("_Rent"), Some(0));
        assert_eq!(labels.classify("Check 1072_Rent"), Some(0));
        assert_eq!(labels.classify("Rent-a-center"), None);
    }

    #[test]
    fn test_names_keep_configuration_order() {
        let labels = label_set(&[("B", "b"), ("A", "a"), ("C", "c")]);
        assert_eq!(labels.names().collect::<Vec<_>>(), vec!["B", "A", "C"]);
    }

    #[test]
    fn test_empty_label_set() {
        let labels = LabelSet::default();
        assert!(labels.is_empty());
        assert_eq!(labels.classify("anything"), None);
    }
}
