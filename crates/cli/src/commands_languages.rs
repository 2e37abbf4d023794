use itertools::Itertools;
use strum::IntoEnumIterator;

use glint_lib_core::languages::LanguageKind;

pub(crate) fn languages_info() {
    let readout = LanguageKind::iter()
        .map(|kind| format_language(&kind))
        .join("\n");
    println!("{readout}");
}

fn format_language(kind: &LanguageKind) -> String {
    match kind.doc_url() {
        Some(url) => format!("{}:\t{} ({url})", kind.name(), kind.description()),
        None => format!("{}:\t{}", kind.name(), kind.description()),
    }
}
