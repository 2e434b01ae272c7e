//! Selector option derivation.
//!
//! Options are a synthetic "All <Category>" entry with an empty value,
//! followed by the reference list sorted by label, ignoring case and accents.

use crate::catalog::{OptionSource, SelectorSpec};
use crate::item::ReferenceEntry;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The synthetic "no filter" entry.
    pub fn all(category: &str) -> Self {
        Self::new("", format!("All {}", category))
    }

    pub fn is_all(&self) -> bool {
        self.value.is_empty()
    }
}

/// Label folded for base-sensitivity comparison: decomposed, combining
/// marks dropped, lowercased.
fn fold_label(label: &str) -> String {
    label
        .nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Build the option list for a selector from arbitrary reference rows.
pub fn derive_options<T>(
    category: &str,
    reference: &[T],
    label_of: impl Fn(&T) -> String,
    value_of: impl Fn(&T) -> String,
) -> Vec<SelectOption> {
    let mut sorted: Vec<SelectOption> = reference
        .iter()
        .map(|row| SelectOption::new(value_of(row), label_of(row)))
        .collect();
    sorted.sort_by_cached_key(|option| fold_label(&option.label));

    let mut options = Vec::with_capacity(sorted.len() + 1);
    options.push(SelectOption::all(category));
    options.extend(sorted);
    options
}

/// Options for a catalog selector, given the loaded reference entries.
///
/// `reference` is ignored for static selectors.
pub fn selector_options(selector: &SelectorSpec, reference: &[ReferenceEntry]) -> Vec<SelectOption> {
    match selector.source {
        OptionSource::Reference(_) => derive_options(
            selector.category,
            reference,
            |entry| entry.label.clone(),
            |entry| entry.id.to_string(),
        ),
        OptionSource::Static(pairs) => derive_options(
            selector.category,
            pairs,
            |(_, label)| label.to_string(),
            |(value, _)| value.to_string(),
        ),
    }
}

/// Option matching `value` exactly, or the synthetic "All" entry.
pub fn selected_option<'a>(options: &'a [SelectOption], value: &str) -> Option<&'a SelectOption> {
    options
        .iter()
        .find(|option| option.value == value)
        .or_else(|| options.iter().find(|option| option.is_all()))
        .or_else(|| options.first())
}

/// Index of the option `step` positions away from `value`, wrapping.
pub fn step_option(options: &[SelectOption], value: &str, step: isize) -> Option<usize> {
    if options.is_empty() {
        return None;
    }
    let current = options
        .iter()
        .position(|option| option.value == value)
        .unwrap_or(0) as isize;
    let len = options.len() as isize;
    Some((current + step).rem_euclid(len) as usize)
}


#[cfg(test)]
mod prop_tests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(100))]

        /// Property: the "All" entry comes first, followed by every row once,
        /// in folded-label order
        #[test]
        fn prop_all_first_then_sorted(labels in prop::collection::vec("[a-zA-ZéÉèü ]{0,8}", 0..12)) {
            let options = derive_options("Clients", &labels, |l| l.clone(), |l| l.clone());

            prop_assert_eq!(options.len(), labels.len() + 1);
            prop_assert_eq!(&options[0], &SelectOption::all("Clients"));
            for pair in options[1..].windows(2) {
                prop_assert!(fold_label(&pair[0].label) <= fold_label(&pair[1].label));
            }
        }

        /// Property: stepping forward then back returns to the same option
        #[test]
        fn prop_step_round_trips(len in 1usize..10, start in 0usize..10, step in -20isize..20) {
            let options: Vec<SelectOption> = (0..len)
                .map(|n| SelectOption::new(n.to_string(), format!("Option {}", n)))
                .collect();
            let value = (start % len).to_string();
            let forward = step_option(&options, &value, step).unwrap();
            let back = step_option(&options, &options[forward].value, -step).unwrap();
            prop_assert_eq!(back, start % len);
        }
    }
}
