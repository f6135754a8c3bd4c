use std::collections::BTreeSet;

use super::variations::{EXPANSION_KEYWORDS, MODIFIERS, ROOT_VARIATIONS};

/// Hebrew preposition "to/for", prefixed directly to the modifier ("מסנן למטבח").
const DIRECTIONAL_PREFIX: char = 'ל';

/// Every inflected form in the variation table, de-duplicated.
pub fn expand_variations() -> Vec<String> {
    ROOT_VARIATIONS
        .iter()
        .flat_map(|(_, forms)| forms.iter())
        .map(|form| form.to_string())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// `"{base} {modifier}"` and `"{base} ל{modifier}"` for every base keyword and modifier.
///
/// The result grows as `2 × bases × modifiers` before de-duplication; no cap is applied.
pub fn expand_compounds<S: AsRef<str>>(bases: &[S]) -> Vec<String> {
    let mut compounds = BTreeSet::new();
    for base in bases {
        let base = base.as_ref();
        for modifier in MODIFIERS {
            compounds.insert(format!("{base} {modifier}"));
            compounds.insert(format!("{base} {DIRECTIONAL_PREFIX}{modifier}"));
        }
    }
    compounds.into_iter().collect()
}

/// The curated bathroom/kitchen/installation/material phrases, in table order.
pub fn expand_fixed_list() -> Vec<String> {
    EXPANSION_KEYWORDS.iter().map(|k| k.to_string()).collect()
}
