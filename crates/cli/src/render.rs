use std::fmt::Write;

use anstyle::{AnsiColor, Effects, Style};

use glint_lib_core::highlighter::category::TokenCategory;
use glint_lib_core::highlighter::tokenizer::Span;

const COMMENT: Style = AnsiColor::BrightBlack.on_default();
const CLASS_NAME: Style = AnsiColor::Yellow.on_default().effects(Effects::BOLD);
const KEYWORD: Style = AnsiColor::Blue.on_default().effects(Effects::BOLD);
const NUMBER: Style = AnsiColor::Magenta.on_default();
const STRING: Style = AnsiColor::Green.on_default();
const BOOLEAN: Style = AnsiColor::Magenta.on_default();
const OPERATOR: Style = AnsiColor::Cyan.on_default();
const PUNCTUATION: Style = AnsiColor::White.on_default();
const FUNCTION: Style = AnsiColor::Red.on_default();
const VARIABLE: Style = AnsiColor::Cyan.on_default();

fn style_for(category: TokenCategory) -> Style {
    match category {
        TokenCategory::Comment => COMMENT,
        TokenCategory::ClassName => CLASS_NAME,
        TokenCategory::Keyword => KEYWORD,
        TokenCategory::Number => NUMBER,
        TokenCategory::String => STRING,
        TokenCategory::Boolean => BOOLEAN,
        TokenCategory::Operator => OPERATOR,
        TokenCategory::Punctuation => PUNCTUATION,
        TokenCategory::Function => FUNCTION,
        TokenCategory::Variable => VARIABLE,
    }
}

pub(crate) fn render_ansi(spans: &[Span]) -> String {
    let mut out = String::new();

    for span in spans {
        match span.category() {
            Some(category) => {
                let style = style_for(category);
                let _ = write!(out, "{style}{}{style:#}", span.text());
            }
            None => out.push_str(span.text()),
        }
    }

    out
}

/// Categorized spans become `<span class="token …">` elements, the shape
/// documentation renderers style via their token CSS classes.
pub(crate) fn render_html(spans: &[Span]) -> String {
    let mut out = String::new();

    for span in spans {
        match span.category() {
            Some(category) => {
                let _ = write!(
                    out,
                    "<span class=\"token {}\">{}</span>",
                    category.as_str(),
                    escape_html(span.text())
                );
            }
            None => out.push_str(&escape_html(span.text())),
        }
    }

    out
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());

    for ch in text.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            _ => escaped.push(ch),
        }
    }

    escaped
}
