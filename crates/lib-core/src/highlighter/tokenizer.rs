use std::ops::Range;

use fancy_regex::Regex;
use log::debug;

use crate::errors::RulePatternError;
use crate::helpers::next_char_boundary;

use super::category::TokenCategory;
use super::grammar::{Grammar, Rule};

/// A classified slice of the input. The span sequence returned by
/// [`Tokenizer::tokenize`] covers the input exactly, in order; `category` is
/// `None` for uncategorized (plain) text.
#[derive(Debug, Clone, PartialEq)]
pub struct Span<'a> {
    text: &'a str,
    range: Range<usize>,
    category: Option<TokenCategory>,
}

impl<'a> Span<'a> {
    fn new(text: &'a str, range: Range<usize>, category: Option<TokenCategory>) -> Self {
        Self {
            text,
            range,
            category,
        }
    }

    pub fn text(&self) -> &'a str {
        self.text
    }

    pub fn range(&self) -> Range<usize> {
        self.range.clone()
    }

    pub fn category(&self) -> Option<TokenCategory> {
        self.category
    }

    pub fn is_plain(&self) -> bool {
        self.category.is_none()
    }
}

#[derive(Debug)]
struct CompiledRule {
    category: TokenCategory,
    regex: Regex,
    lookbehind: bool,
    greedy: bool,
}

// A region tentatively owned by a rule. Claims are kept sorted by start and
// never overlap.
#[derive(Debug)]
struct Claim {
    range: Range<usize>,
    category: TokenCategory,
}

/// The Tokenizer actually does the classification step.
#[derive(Debug)]
pub struct Tokenizer {
    rules: Vec<CompiledRule>,
}

impl TryFrom<&Grammar> for Tokenizer {
    type Error = RulePatternError;

    fn try_from(grammar: &Grammar) -> Result<Self, Self::Error> {
        Tokenizer::new(grammar.rules())
    }
}

impl Tokenizer {
    pub fn new(rules: &[Rule]) -> Result<Self, RulePatternError> {
        let mut compiled = Vec::with_capacity(rules.len());

        for rule in rules {
            let regex = Regex::new(rule.pattern()).map_err(|source| RulePatternError {
                category: rule.category(),
                source,
            })?;

            compiled.push(CompiledRule {
                category: rule.category(),
                regex,
                lookbehind: rule.is_lookbehind(),
                greedy: rule.is_greedy(),
            });
        }

        Ok(Self { rules: compiled })
    }

    /// Partition `text` into classified spans by applying the rules in
    /// priority order. Stateless: the same input always produces the same
    /// spans. Text no rule claims falls through as plain spans.
    pub fn tokenize<'a>(&self, text: &'a str) -> Vec<Span<'a>> {
        let mut claims: Vec<Claim> = Vec::new();

        for rule in &self.rules {
            apply_rule(rule, text, &mut claims);
        }

        debug!(
            "tokenized {} bytes into {} claimed span(s)",
            text.len(),
            claims.len()
        );

        to_spans(text, claims)
    }
}

/// One pass of a single rule over the regions no earlier rule has claimed.
///
/// Matching restarts at the beginning of each unclaimed region, so `^`
/// anchors at region starts. A greedy rule's search window runs from the
/// region start to the end of the input; its match must still start inside
/// the region, but may extend over text already claimed, in which case the
/// overlapped claims are dropped and the span is re-claimed for this rule.
fn apply_rule(rule: &CompiledRule, text: &str, claims: &mut Vec<Claim>) {
    let mut search_from = 0;

    while search_from < text.len() {
        let Some(region) = next_unclaimed(claims, text.len(), search_from) else {
            break;
        };

        let window_end = if rule.greedy { text.len() } else { region.end };
        let window = &text[region.start..window_end];

        let captures = match rule.regex.captures(window) {
            Ok(Some(captures)) => captures,
            _ => {
                search_from = region.end;
                continue;
            }
        };

        let matched = captures.get(0).unwrap();

        if matched.start() >= region.end - region.start {
            // The leftmost match begins past this region; try the next one.
            search_from = region.end;
            continue;
        }

        if matched.range().is_empty() {
            search_from = next_char_boundary(text, region.start + matched.end());
            continue;
        }

        let context = if rule.lookbehind {
            captures.get(1).map_or(0, |group| group.as_str().len())
        } else {
            0
        };

        let start = region.start + matched.start() + context;
        let end = region.start + matched.end();

        if start >= end {
            search_from = end;
            continue;
        }

        claims.retain(|claim| claim.range.end <= start || claim.range.start >= end);
        let at = claims.partition_point(|claim| claim.range.start < start);
        claims.insert(
            at,
            Claim {
                range: start..end,
                category: rule.category,
            },
        );

        search_from = end;
    }
}

/// The first unclaimed region starting at or after `from`, truncated to
/// begin there.
fn next_unclaimed(claims: &[Claim], len: usize, from: usize) -> Option<Range<usize>> {
    let mut position = from;

    for claim in claims {
        if claim.range.end <= position {
            continue;
        }
        if claim.range.start > position {
            return Some(position..claim.range.start);
        }
        position = claim.range.end;
    }

    (position < len).then(|| position..len)
}

fn to_spans(text: &str, claims: Vec<Claim>) -> Vec<Span<'_>> {
    let mut spans = Vec::with_capacity(claims.len() * 2 + 1);
    let mut position = 0;

    for claim in claims {
        if claim.range.start > position {
            spans.push(Span::new(
                &text[position..claim.range.start],
                position..claim.range.start,
                None,
            ));
        }

        spans.push(Span::new(
            &text[claim.range.clone()],
            claim.range.clone(),
            Some(claim.category),
        ));
        position = claim.range.end;
    }

    if position < text.len() {
        spans.push(Span::new(&text[position..], position..text.len(), None));
    }

    spans
}
