#[derive(
    Debug,
    PartialEq,
    Eq,
    Clone,
    Copy,
    strum_macros::IntoStaticStr,
    strum_macros::EnumString,
    Hash,
    PartialOrd,
    Ord,
)]
#[strum(serialize_all = "kebab-case")]
pub enum TokenCategory {
    Comment,
    ClassName,
    Keyword,
    Number,
    String,
    Boolean,
    Operator,
    Punctuation,
    Function,
    Variable,
}

impl TokenCategory {
    /// The category name as rendered in output, e.g. `class-name`.
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::TokenCategory;

    #[test]
    fn category_names_are_kebab_case() {
        assert_eq!(TokenCategory::ClassName.as_str(), "class-name");
        assert_eq!(TokenCategory::Comment.as_str(), "comment");
        assert_eq!(
            TokenCategory::from_str("class-name").unwrap(),
            TokenCategory::ClassName
        );
    }
}
