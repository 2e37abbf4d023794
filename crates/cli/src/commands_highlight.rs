use std::fs;

use glint_lib_core::errors::GlintUserError;
use glint_lib_core::highlighter::tokenizer::Tokenizer;
use glint_lib_core::languages::LanguageKind;
use glint_lib_languages::kind_to_grammar;

use crate::commands::{Format, HighlightArgs};
use crate::render;
use crate::stdin::read_std_in;

pub(crate) fn run_highlight(args: HighlightArgs) -> i32 {
    if args.paths.is_empty() {
        eprintln!("No input files provided. Use `-` to read from stdin.");
        return 1;
    }

    let tokenizer = match tokenizer_for(&args.language) {
        Ok(tokenizer) => tokenizer,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    let mut status_code = 0;
    for path in &args.paths {
        match fs::read_to_string(path) {
            Ok(source) => print_highlighted(&tokenizer, &source, args.format),
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                status_code = 1;
            }
        }
    }

    status_code
}

pub(crate) fn run_highlight_stdin(args: HighlightArgs) -> i32 {
    let tokenizer = match tokenizer_for(&args.language) {
        Ok(tokenizer) => tokenizer,
        Err(e) => {
            eprintln!("{e}");
            return 1;
        }
    };

    match read_std_in() {
        Ok(source) => {
            print_highlighted(&tokenizer, &source, args.format);
            0
        }
        Err(e) => {
            eprintln!("{e}");
            1
        }
    }
}

fn print_highlighted(tokenizer: &Tokenizer, source: &str, format: Format) {
    let spans = tokenizer.tokenize(source);
    let rendered = match format {
        Format::Ansi => render::render_ansi(&spans),
        Format::Html => render::render_html(&spans),
    };
    print!("{rendered}");
}

fn tokenizer_for(language: &str) -> Result<Tokenizer, GlintUserError> {
    let kind: LanguageKind = language.parse().map_err(|_| {
        GlintUserError::new(format!(
            "Unknown language '{language}'. Run `glint languages` to list the available ones."
        ))
    })?;

    let grammar = kind_to_grammar(&kind).ok_or_else(|| {
        GlintUserError::new(format!("No grammar is registered for '{language}'."))
    })?;

    Tokenizer::try_from(&grammar).map_err(|e| GlintUserError::new(e.to_string()))
}
