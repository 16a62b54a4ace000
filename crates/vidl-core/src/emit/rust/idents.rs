// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust identifiers for C++ names.
//!
//! C++ and Rust reserve different words, so the names used here come from
//! the original spelling rather than the C++-sanitized one: a parameter
//! `class` becomes the field `class`, while `type` becomes `r#type`.

use convert_case::{Case, Casing};
use proc_macro2::{Ident, Span};
use quote::format_ident;

use crate::error::EmitError;

/// Rust keywords, strict and reserved, sorted for binary search.
const RUST_KEYWORDS: &[&str] = &[
    "Self", "abstract", "as", "async", "await", "become", "box", "break", "const", "continue",
    "crate", "do", "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "gen", "if",
    "impl", "in", "let", "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub",
    "ref", "return", "self", "static", "struct", "super", "trait", "true", "try", "type", "typeof",
    "unsafe", "unsized", "use", "virtual", "where", "while", "yield"
];

/// Keywords that cannot be raw identifiers.
const NOT_RAW: &[&str] = &["Self", "crate", "self", "super"];

fn is_keyword(word: &str) -> bool {
    RUST_KEYWORDS.binary_search(&word).is_ok()
}

/// Field identifier for a parameter.
///
/// `index` names the field when the parameter name has no letters left
/// after case conversion.
pub fn field_ident(orig_name: &str, index: usize) -> Ident {
    let snake = orig_name.to_case(Case::Snake);
    if snake.is_empty() {
        format_ident!("arg{}", index)
    } else if snake.starts_with(|c: char| c.is_ascii_digit()) {
        format_ident!("_{}", snake)
    } else if NOT_RAW.contains(&snake.as_str()) {
        format_ident!("{}_", snake)
    } else if is_keyword(&snake) {
        Ident::new_raw(&snake, Span::call_site())
    } else {
        format_ident!("{}", snake)
    }
}

/// PascalCase form of a command name, never a keyword.
///
/// Names with no leading letter after conversion (`_2d` gives `2D`) are
/// prefixed with `Cmd`.
pub fn type_name(name: &str) -> String {
    let pascal = name.to_case(Case::Pascal);
    if !pascal.starts_with(|c: char| c.is_ascii_alphabetic()) {
        format!("Cmd{pascal}")
    } else if is_keyword(&pascal) {
        format!("{pascal}_")
    } else {
        pascal
    }
}

/// Identifier for a generated item name.
///
/// # Errors
///
/// [`EmitError::InvalidIdentifier`] when `name` is not a Rust identifier.
pub fn item_ident(name: &str) -> Result<Ident, EmitError> {
    syn::parse_str::<Ident>(name).map_err(|_| EmitError::InvalidIdentifier {
        name: name.to_string()
    })
}

/// Handler method for a command name.
pub fn handler_ident(name: &str) -> Ident {
    format_ident!("handle_{}", name.to_case(Case::Snake))
}
