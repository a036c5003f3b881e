/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Formula string parser
//!
//! Accepts element symbols followed by optional decimal amounts, e.g.
//! `CoFeNiSi0.25`, and parenthesized groups with a multiplier, e.g.
//! `(CoCrFeNi)95Nb5`. Whitespace anywhere in the formula is ignored.

use super::errors::{CompositionError, Result};
use crate::elements::Element;
use once_cell::sync::Lazy;
use regex::Regex;

static GROUP: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\(([^()]*)\)([0-9.]*)").expect("group pattern compiles"));

static TERM: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"([A-Z][a-z]*)([0-9.]*)").expect("term pattern compiles"));

/// Parse a formula into `(element, amount)` terms in order of appearance
///
/// Repeated symbols are returned as separate terms; merging is left to
/// the caller.
pub fn parse_terms(formula: &str) -> Result<Vec<(Element, f64)>> {
    let compact: String = formula.chars().filter(|c| !c.is_whitespace()).collect();
    if compact.is_empty() {
        return Err(CompositionError::EmptyFormula);
    }

    let flat = expand_groups(formula, compact)?;
    parse_flat(formula, &flat)
}

/// Replace innermost `( ... )n` groups with their scaled contents until
/// no group remains
fn expand_groups(formula: &str, mut text: String) -> Result<String> {
    loop {
        let (range, inner, factor) = match GROUP.captures(&text) {
            Some(caps) => (
                caps.get(0).map_or(0..0, |m| m.range()),
                caps[1].to_string(),
                caps[2].to_string(),
            ),
            None => return Ok(text),
        };
        let factor = parse_amount(formula, "(...)", &factor)?;

        let mut expanded = String::new();
        for (element, amount) in parse_flat(formula, &inner)? {
            expanded.push_str(element.symbol());
            expanded.push_str(&(amount * factor).to_string());
        }

        log::trace!("expanded group ({}) -> {}", inner, expanded);
        text.replace_range(range, &expanded);
    }
}

fn parse_flat(formula: &str, text: &str) -> Result<Vec<(Element, f64)>> {
    let mut terms = Vec::new();
    let mut cursor = 0;

    for caps in TERM.captures_iter(text) {
        let whole = match caps.get(0) {
            Some(m) => m,
            None => continue,
        };
        if whole.start() != cursor {
            return Err(invalid(formula, &text[cursor..]));
        }
        cursor = whole.end();

        let symbol = &caps[1];
        let element = Element::from_symbol(symbol).ok_or_else(|| {
            CompositionError::UnknownElement {
                formula: formula.to_string(),
                symbol: symbol.to_string(),
            }
        })?;
        let amount = parse_amount(formula, symbol, &caps[2])?;
        terms.push((element, amount));
    }

    if cursor != text.len() {
        return Err(invalid(formula, &text[cursor..]));
    }
    if terms.is_empty() {
        return Err(CompositionError::EmptyFormula);
    }
    Ok(terms)
}

fn parse_amount(formula: &str, symbol: &str, amount: &str) -> Result<f64> {
    if amount.is_empty() {
        return Ok(1.0);
    }
    amount
        .parse::<f64>()
        .map_err(|_| CompositionError::InvalidAmount {
            formula: formula.to_string(),
            symbol: symbol.to_string(),
            amount: amount.to_string(),
        })
}

fn invalid(formula: &str, remainder: &str) -> CompositionError {
    CompositionError::InvalidFormula {
        formula: formula.to_string(),
        remainder: remainder.to_string(),
    }
}
