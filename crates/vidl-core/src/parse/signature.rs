// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Declaration → [`CommandDef`].

use super::{
    lex::{is_identifier, strip_comments},
    split::{check_trailing, find_param_list, split_params, strip_default},
    types::{CommandDef, ParamDef}
};
use crate::error::{ParseError, ParseErrorKind};

/// Parse one C++ function declaration.
///
/// Comments anywhere in `text` are ignored and default arguments are
/// discarded. A trailing `;` is allowed.
///
/// # Errors
///
/// [`ParseError`] carrying `text` and the reason it is malformed. No
/// parameter is ever silently dropped.
///
/// # Example
///
/// ```rust
/// use vidl_core::parse_declaration;
///
/// let cmd = parse_declaration("uint32_t ComplexFunc(char* ptr, bool flag = true)").unwrap();
/// assert_eq!(cmd.return_type, "uint32_t");
/// assert_eq!(cmd.name, "ComplexFunc");
/// assert_eq!(cmd.params[0].ty, "char*");
/// assert_eq!(cmd.params[1].ty, "bool");
/// ```
pub fn parse_declaration(text: &str) -> Result<CommandDef, ParseError> {
    let fail = |kind| ParseError::new(kind, text);

    let clean = strip_comments(text).map_err(fail)?;
    let (open, close) = find_param_list(&clean).map_err(fail)?;
    check_trailing(&clean[close + 1..]).map_err(fail)?;

    let (return_type, name) = split_type_and_name(&clean[..open]).map_err(|kind| {
        fail(match kind {
            ParseErrorKind::UnsplittableParameter | ParseErrorKind::EmptyParameter => {
                ParseErrorKind::MissingReturnType
            }
            other => other
        })
    })?;

    let params = split_params(&clean[open + 1..close])
        .map_err(fail)?
        .into_iter()
        .map(|segment| {
            split_type_and_name(strip_default(segment)).map(|(ty, name)| ParamDef::new(ty, name))
        })
        .collect::<Result<Vec<_>, _>>()
        .map_err(fail)?;

    let command = CommandDef::new(return_type, name, params);
    tracing::debug!(
        command = %command.name,
        arity = command.arity(),
        "parsed declaration"
    );
    Ok(command)
}

/// Keywords that only ever spell a type. A parameter "named" one of these
/// is an unnamed parameter such as `unsigned int` or `int const`.
const TYPE_KEYWORDS: &[&str] = &[
    "auto", "bool", "char", "char16_t", "char32_t", "char8_t", "const", "double", "float", "int",
    "long", "short", "signed", "unsigned", "void", "volatile", "wchar_t"
];

/// `true` for the characters that may be glued between a type and a name.
fn is_glue(c: char) -> bool {
    matches!(c, '*' | '&' | '>')
}

/// Split `<type tokens> <name>` into a normalized type and the name.
///
/// Whitespace runs collapse to one space. Pointer and reference markers
/// stuck to the name move onto the type without a space, so `float *y`,
/// `float* y` and `float*y` all give `float*`; markers that stand alone
/// keep their spacing (`int * x` gives `int *`).
fn split_type_and_name(decl: &str) -> Result<(String, String), ParseErrorKind> {
    let mut tokens: Vec<&str> = decl.split_whitespace().collect();
    let last = tokens.pop().ok_or(ParseErrorKind::EmptyParameter)?;

    let (glued, name) = match last.rfind(is_glue) {
        Some(pos) => last.split_at(pos + 1),
        None => ("", last)
    };

    let mut ty = tokens.join(" ");
    if !glued.is_empty() {
        if !ty.is_empty() && !glued.chars().all(is_glue) {
            ty.push(' ');
        }
        ty.push_str(glued);
    }

    if name.is_empty()
        || TYPE_KEYWORDS.contains(&name)
        || !ty.chars().any(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(ParseErrorKind::UnsplittableParameter);
    }
    if !is_identifier(name) {
        return Err(ParseErrorKind::InvalidIdentifier);
    }

    Ok((ty, name.to_string()))
}
