use strum::IntoEnumIterator;
use strum_macros::AsRefStr;

#[derive(
    strum_macros::EnumString,
    strum_macros::EnumIter,
    AsRefStr,
    Debug,
    Clone,
    Copy,
    Default,
    Ord,
    PartialOrd,
    Eq,
    PartialEq,
    Hash,
)]
#[strum(serialize_all = "kebab-case")]
pub enum LanguageKind {
    #[default]
    Qark,
}

impl LanguageKind {
    /// Returns the identifier code blocks are tagged with.
    pub fn name(&self) -> &'static str {
        match self {
            LanguageKind::Qark => "qark",
        }
    }

    /// Returns a human-readable description of the language.
    pub fn description(&self) -> &'static str {
        match self {
            LanguageKind::Qark => {
                "Configuration and markup language used by the qASIC game tooling."
            }
        }
    }

    /// Returns an optional URL to the official documentation for the language.
    pub fn doc_url(&self) -> Option<&'static str> {
        match self {
            LanguageKind::Qark => Some("https://qasictools.com"),
        }
    }
}

/// Generate a readout of available languages.
pub fn language_readout() -> Vec<String> {
    LanguageKind::iter()
        .map(|x| x.as_ref().to_string())
        .collect()
}
