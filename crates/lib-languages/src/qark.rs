//! Grammar for qark, the configuration and markup language of the qASIC
//! tooling. Four rules: line comments opened with `#`, class names opened
//! with `-`, the `.@`/`._` value sigils, and `.`/`=`/`|`-terminated
//! keywords at the start of a line.

use glint_lib_core::helpers::Config;
use glint_lib_core::highlighter::category::TokenCategory;
use glint_lib_core::highlighter::grammar::{Grammar, Rule};
use glint_lib_core::languages::LanguageKind;

pub fn grammar() -> Grammar {
    Grammar::new(LanguageKind::Qark).config(|this| this.set_rules(rules()))
}

fn rules() -> Vec<Rule> {
    vec![
        Rule::regex(TokenCategory::Comment, r"(^|\n)#.*")
            .lookbehind()
            .greedy(),
        // No lookbehind here: the leading hyphen stays inside the span.
        Rule::regex(TokenCategory::ClassName, r"(\-).*").greedy(),
        Rule::regex(TokenCategory::Number, r"(\.)(@|_)").lookbehind(),
        Rule::regex(
            TokenCategory::Keyword,
            r"(^|\n)[^\s][^#-][^=@\|\n]*(\.|=|\|)",
        ),
    ]
}

#[cfg(test)]
mod tests {
    use glint_lib_core::highlighter::category::TokenCategory;
    use glint_lib_core::highlighter::tokenizer::Tokenizer;
    use pretty_assertions::assert_eq;

    use super::grammar;

    fn classify(text: &str) -> Vec<(Option<TokenCategory>, String)> {
        let tokenizer = Tokenizer::try_from(&grammar()).unwrap();
        tokenizer
            .tokenize(text)
            .iter()
            .map(|span| (span.category(), span.text().to_string()))
            .collect()
    }

    fn comment(text: &str) -> (Option<TokenCategory>, String) {
        (Some(TokenCategory::Comment), text.to_string())
    }

    fn class_name(text: &str) -> (Option<TokenCategory>, String) {
        (Some(TokenCategory::ClassName), text.to_string())
    }

    fn number(text: &str) -> (Option<TokenCategory>, String) {
        (Some(TokenCategory::Number), text.to_string())
    }

    fn keyword(text: &str) -> (Option<TokenCategory>, String) {
        (Some(TokenCategory::Keyword), text.to_string())
    }

    fn plain(text: &str) -> (Option<TokenCategory>, String) {
        (None, text.to_string())
    }

    #[test]
    fn test_comment_line() {
        assert_eq!(
            classify("# this is a comment"),
            vec![comment("# this is a comment")]
        );
    }

    #[test]
    fn test_comment_after_newline_excludes_the_newline() {
        assert_eq!(
            classify("app\n# note"),
            vec![plain("app\n"), comment("# note")]
        );
    }

    #[test]
    fn test_class_name_keeps_leading_hyphen() {
        // The rule captures the hyphen without marking it as context, so it
        // is part of the emitted span.
        assert_eq!(classify("- MyClass"), vec![class_name("- MyClass")]);
    }

    #[test]
    fn test_number_sigils() {
        assert_eq!(classify(".@"), vec![plain("."), number("@")]);
        assert_eq!(classify("._"), vec![plain("."), number("_")]);
    }

    #[test]
    fn test_keyword_terminators() {
        // The terminator is part of the span.
        assert_eq!(classify("foo."), vec![keyword("foo.")]);
        assert_eq!(classify("foo="), vec![keyword("foo=")]);
        assert_eq!(classify("foo|"), vec![keyword("foo|")]);
    }

    #[test]
    fn test_comment_wins_over_keyword() {
        // `# note.` also fits the keyword shape; the comment rule is
        // declared first and takes the overlapping span.
        assert_eq!(classify("# note."), vec![comment("# note.")]);
    }

    #[test]
    fn test_plain_text_falls_through() {
        assert_eq!(classify("plain text"), vec![plain("plain text")]);
    }

    #[test]
    fn test_classification_is_deterministic() {
        let text = "# display options\nwindow.\n- Window\n.@\n";
        assert_eq!(classify(text), classify(text));
    }

    #[test]
    fn test_mixed_document() {
        assert_eq!(
            classify("# display options\nwindow.\n- Window\n.@\n"),
            vec![
                comment("# display options"),
                keyword("\nwindow."),
                plain("\n"),
                class_name("- Window"),
                plain("\n."),
                number("@"),
                plain("\n"),
            ]
        );
    }
}
