use glint_lib_core::highlighter::grammar::Grammar;
use glint_lib_core::languages::LanguageKind;

pub mod qark;

pub fn kind_to_grammar(kind: &LanguageKind) -> Option<Grammar> {
    Some(match kind {
        LanguageKind::Qark => qark::grammar(),
    })
}

#[cfg(test)]
mod tests {
    use glint_lib_core::languages::LanguageKind;

    use super::kind_to_grammar;

    #[test]
    fn every_language_kind_has_a_grammar() {
        use strum::IntoEnumIterator as _;

        for kind in LanguageKind::iter() {
            let grammar = kind_to_grammar(&kind).unwrap();
            assert_eq!(grammar.name(), kind);
            assert!(!grammar.rules().is_empty());
        }
    }
}
