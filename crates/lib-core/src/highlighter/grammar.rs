use crate::languages::LanguageKind;

use super::category::TokenCategory;

/// A single classification rule: a pattern plus its matching policy.
#[derive(Debug, Clone)]
pub struct Rule {
    category: TokenCategory,
    pattern: &'static str,
    lookbehind: bool,
    greedy: bool,
}

impl Rule {
    #[track_caller]
    pub fn regex(category: TokenCategory, pattern: &'static str) -> Self {
        #[cfg(debug_assertions)]
        if fancy_regex::Regex::new(pattern).is_err() {
            panic!("Invalid regex pattern: {}", std::panic::Location::caller());
        }

        Self {
            category,
            pattern,
            lookbehind: false,
            greedy: false,
        }
    }

    /// Mark the leading captured group as context only; it is excluded from
    /// the emitted span.
    pub fn lookbehind(mut self) -> Self {
        self.lookbehind = true;
        self
    }

    /// Allow matches to extend past the current unclaimed region, absorbing
    /// spans tentatively claimed there.
    pub fn greedy(mut self) -> Self {
        self.greedy = true;
        self
    }

    pub fn category(&self) -> TokenCategory {
        self.category
    }

    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn is_lookbehind(&self) -> bool {
        self.lookbehind
    }

    pub fn is_greedy(&self) -> bool {
        self.greedy
    }
}

/// An ordered rule table for one language. Order encodes priority: earlier
/// rules win for overlapping spans.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    pub name: LanguageKind,
    rules: Vec<Rule>,
}

impl PartialEq for Grammar {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Grammar {
    pub fn new(name: LanguageKind) -> Self {
        Grammar {
            name,
            rules: Vec::new(),
        }
    }

    pub fn name(&self) -> LanguageKind {
        self.name
    }

    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: Vec<Rule>) {
        self.rules = rules;
        self.assert_unique_categories();
    }

    /// Splice new rules in immediately before the rule for `before`.
    pub fn insert_rules(&mut self, patch: Vec<Rule>, before: TokenCategory) {
        assert!(
            !self.rules.is_empty(),
            "Grammar rules must be defined before they can be patched!"
        );

        let mut buff = Vec::new();
        let mut found = false;

        for elem in std::mem::take(&mut self.rules) {
            if elem.category() == before {
                found = true;
                for patch in patch.clone() {
                    buff.push(patch);
                }
                buff.push(elem);
            } else {
                buff.push(elem);
            }
        }

        assert!(
            found,
            "Rule insert before '{}' failed because the category was never found.",
            before.as_str()
        );

        self.rules = buff;
        self.assert_unique_categories();
    }

    /// Replace rules in place, keyed by category. Table order is preserved.
    pub fn patch_rules(&mut self, patch: Vec<Rule>) {
        assert!(
            !self.rules.is_empty(),
            "Grammar rules must be defined before they can be patched!"
        );

        let mut buff = Vec::with_capacity(self.rules.len());

        for elem in std::mem::take(&mut self.rules) {
            if let Some(patch) = patch.iter().find(|p| p.category() == elem.category()) {
                buff.push(patch.clone());
            } else {
                buff.push(elem);
            }
        }

        self.rules = buff;
    }

    // A grammar holds at most one rule per category.
    fn assert_unique_categories(&self) {
        let mut categories: Vec<TokenCategory> = self.rules.iter().map(Rule::category).collect();
        categories.sort();
        categories.dedup();
        assert!(
            categories.len() == self.rules.len(),
            "Grammar declares more than one rule for a category."
        );
    }
}
