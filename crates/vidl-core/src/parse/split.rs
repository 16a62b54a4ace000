// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Depth-aware splitting of a comment-free declaration.
//!
//! A naive `split(',')` breaks `std::map<int, float> m` into two
//! parameters. Every function here instead makes one left-to-right pass
//! over [`CodeChars`], keeping a [`Nesting`] stack and acting only on
//! delimiters found at depth zero.
//!
//! Inside a default expression `<` is ambiguous. It opens a template
//! argument list only when it follows a name (`std::map<int, float>()`) and
//! a matching `>` closes that list before the parameter ends. Otherwise it
//! is a comparison (`int n = a < b`) and is not counted.

use super::lex::{CodeChars, Nesting, is_identifier};
use crate::error::ParseErrorKind;

/// Locate the outermost parameter-list parentheses.
///
/// The list opens at the first `(` outside any template argument list, so
/// `std::function<void(int)> make(int n)` picks the second `(`.
///
/// Returns byte offsets of the `(` and its matching `)`.
pub fn find_param_list(text: &str) -> Result<(usize, usize), ParseErrorKind> {
    let mut angles = Nesting::default();
    let mut open = None;

    for (idx, ch) in CodeChars::new(text) {
        match ch {
            '<' => angles.open('<'),
            '>' => angles.close('>')?,
            '(' if angles.is_top() => {
                open = Some(idx);
                break;
            }
            '(' => angles.open('('),
            ')' if angles.is_top() => return Err(ParseErrorKind::Unbalanced(')')),
            ')' => angles.close(')')?,
            _ => {}
        }
    }

    let open = open.ok_or(ParseErrorKind::MissingParameterList)?;
    let mut depth = 0usize;
    for (idx, ch) in CodeChars::new(&text[open..]) {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Ok((open, open + idx));
                }
            }
            _ => {}
        }
    }

    Err(ParseErrorKind::Unbalanced('('))
}

/// Validate what follows the closing `)` of the parameter list.
///
/// Function specifiers (`const`, `noexcept`, `override`) and a terminating
/// `;` are accepted and ignored.
pub fn check_trailing(rest: &str) -> Result<(), ParseErrorKind> {
    let rest = rest.trim();
    let rest = rest.strip_suffix(';').unwrap_or(rest);

    if rest.contains(')') {
        return Err(ParseErrorKind::Unbalanced(')'));
    }
    if rest.split_whitespace().all(super::lex::is_identifier) {
        Ok(())
    } else {
        Err(ParseErrorKind::UnexpectedTrailing)
    }
}

/// Split the text between the parameter-list parentheses into one trimmed
/// segment per parameter.
///
/// An all-blank list and a lone `void` both mean "no parameters".
pub fn split_params(text: &str) -> Result<Vec<&str>, ParseErrorKind> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed == "void" {
        return Ok(Vec::new());
    }

    let mut segments = Vec::new();
    let mut nesting = Nesting::default();
    let mut in_default = false;
    let mut start = 0;

    for (idx, ch) in CodeChars::new(text) {
        match ch {
            ',' if nesting.is_top() => {
                segments.push(segment(&text[start..idx])?);
                start = idx + 1;
                in_default = false;
            }
            '=' if nesting.is_top() => in_default = true,
            '<' if in_default => {
                if follows_name(&text[start..idx]) && closes_template(&text[idx..]) {
                    nesting.open('<');
                }
            }
            '>' if in_default => {
                if nesting.expects('>') {
                    nesting.close('>')?;
                }
            }
            '(' | '[' | '{' | '<' => nesting.open(ch),
            ')' | ']' | '}' | '>' => nesting.close(ch)?,
            _ => {}
        }
    }
    nesting.finish()?;
    segments.push(segment(&text[start..])?);

    Ok(segments)
}

/// `true` when `before` ends in a plain or `::`-qualified name, the only
/// thing a template argument list can follow.
fn follows_name(before: &str) -> bool {
    before
        .trim_end()
        .rsplit(|c: char| !(c.is_ascii_alphanumeric() || c == '_' || c == ':'))
        .next()
        .and_then(|name| name.rsplit("::").next())
        .is_some_and(is_identifier)
}

/// `true` when the `<` starting `rest` is closed by a `>` that ends a
/// template-id, before any stray closer or the end of the parameter.
///
/// A bare `=` outside brackets means a later parameter's default was
/// reached, so the `<` was a comparison.
fn closes_template(rest: &str) -> bool {
    let mut angles = 0usize;
    let mut nesting = Nesting::default();
    let mut prev = '\0';

    for (idx, ch) in CodeChars::new(rest) {
        let before = std::mem::replace(&mut prev, ch);
        match ch {
            '=' if nesting.is_top()
                && !matches!(before, '=' | '!' | '<' | '>')
                && !rest[idx + 1..].starts_with('=') =>
            {
                return false;
            }
            '(' | '[' | '{' => nesting.open(ch),
            ')' | ']' | '}' => {
                if nesting.close(ch).is_err() {
                    return false;
                }
            }
            '<' if nesting.is_top() => angles += 1,
            '>' if nesting.is_top() => {
                angles -= 1;
                if angles == 0 {
                    return ends_template_id(&rest[idx + 1..]);
                }
            }
            _ => {}
        }
    }

    false
}

/// What may follow the `>` of a template-id: a call, a brace initializer,
/// a scope, another closer or the end of the parameter. `a < b > c` is
/// two comparisons.
fn ends_template_id(after: &str) -> bool {
    after
        .trim_start()
        .chars()
        .next()
        .is_none_or(|c| matches!(c, '(' | '{' | ':' | ',' | ')' | '>'))
}

fn segment(raw: &str) -> Result<&str, ParseErrorKind> {
    let seg = raw.trim();
    if seg.is_empty() {
        Err(ParseErrorKind::EmptyParameter)
    } else {
        Ok(seg)
    }
}

/// Drop a `= <default-expression>` suffix from one parameter.
pub fn strip_default(param: &str) -> &str {
    let mut nesting = Nesting::default();

    for (idx, ch) in CodeChars::new(param) {
        match ch {
            '=' if nesting.is_top() => return param[..idx].trim_end(),
            '(' | '[' | '{' | '<' => nesting.open(ch),
            ')' | ']' | '}' | '>' => {
                if nesting.close(ch).is_err() {
                    break;
                }
            }
            _ => {}
        }
    }

    param
}
