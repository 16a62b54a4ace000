// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Error types for the scan → parse → emit pipeline.
//!
//! # Hierarchy
//!
//! | Type | Raised by | Scope |
//! |------|-----------|-------|
//! | [`ParseError`] | scanner, signature parser | one declaration |
//! | [`EmitError`] | emitters, magic assignment | one emission batch |
//! | [`Error`] | anything in the pipeline | either of the above |
//! | [`BatchError`] | [`generate`](crate::generate) | aggregate of a whole run |
//!
//! A parse failure never aborts a batch: [`generate`](crate::generate)
//! records it, keeps going with the remaining declarations and reports
//! every failure together at the end.

use thiserror::Error;

use crate::parse::CommandDef;

/// Reason a declaration could not be parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// An opening delimiter without its closing partner, or vice versa.
    #[error("unbalanced `{0}`")]
    Unbalanced(char),

    /// A block comment or string literal that never ends.
    #[error("unterminated comment or literal")]
    Unterminated,

    /// No `(` introducing the parameter list.
    #[error("missing parameter list")]
    MissingParameterList,

    /// Nothing before the parameter list names a return type.
    #[error("missing return type")]
    MissingReturnType,

    /// A comma-separated segment with nothing in it, e.g. `f(int a, )`.
    #[error("empty parameter")]
    EmptyParameter,

    /// A parameter that is a lone token and cannot be split into type and
    /// name (unnamed parameters, `...`).
    #[error("parameter cannot be split into a type and a name")]
    UnsplittableParameter,

    /// A function or parameter name that is not a plain identifier.
    #[error("invalid identifier")]
    InvalidIdentifier,

    /// Something other than function specifiers after the closing `)`.
    #[error("unexpected text after parameter list")]
    UnexpectedTrailing,

    /// A declaration that runs to the next directive or end of input
    /// without a terminating `;`.
    #[error("declaration is not terminated by `;`")]
    MissingTerminator,

    /// A directive marker not followed by any declaration.
    #[error("no declaration found after marker")]
    MissingDeclaration,

    /// A comment that starts like the directive marker but is not it.
    #[error("unknown directive")]
    UnknownDirective
}

/// A declaration that could not be turned into a [`CommandDef`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("malformed declaration ({kind}): `{text}`")]
pub struct ParseError {
    /// What went wrong.
    pub kind: ParseErrorKind,
    /// The offending raw text (the whole declaration or the failing part).
    pub text: String,
    /// 1-based source line of the directive, when known.
    pub line: Option<usize>
}

impl ParseError {
    /// Create an error without position information.
    pub fn new(kind: ParseErrorKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into().trim().to_string(),
            line: None
        }
    }

    /// Attach the 1-based source line of the directive.
    #[must_use]
    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }
}

/// Failures that concern a whole emission batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EmitError {
    /// Perturbation could not find a free magic within the configured bound.
    #[error("no free magic identifier for `{name}` after {attempts} attempts")]
    MagicExhausted {
        /// Command name being assigned.
        name:     String,
        /// Attempts made, including the unperturbed hash.
        attempts: u32
    },

    /// Two commands would produce the same generated identifier.
    #[error("duplicate command `{name}`")]
    DuplicateCommand {
        /// The colliding generated name.
        name: String
    },

    /// Two members of one generated struct would share a name, either two
    /// parameters or a parameter and a generated member such as `MAGIC`.
    #[error("command `{command}` would declare member `{member}` twice")]
    DuplicateMember {
        /// Command declaring the parameters.
        command: String,
        /// The colliding member name.
        member:  String
    },

    /// A generated Rust item name is not a valid identifier, e.g. a prefix
    /// that starts with a digit.
    #[error("`{name}` is not a valid Rust identifier")]
    InvalidIdentifier {
        /// The rejected name.
        name: String
    },

    /// The Rust back end has no mapping for a C++ type.
    #[error("parameter `{param}` of `{command}` has unsupported type `{ty}`")]
    UnsupportedType {
        /// Command declaring the parameter.
        command: String,
        /// Original parameter name.
        param:   String,
        /// The C++ type as parsed.
        ty:      String
    }
}

/// Any single failure in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A declaration failed to scan or parse.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Emission failed.
    #[error(transparent)]
    Emit(#[from] EmitError)
}

/// Aggregate failure of a [`generate`](crate::generate) run.
///
/// Carries every error in source order, plus the commands that did parse so
/// callers can still report on them.
#[derive(Debug, Error)]
#[error("{} declaration(s) failed{}", .errors.len(), render_lines(.errors))]
pub struct BatchError {
    /// Every failure, in source order.
    pub errors:   Vec<Error>,
    /// Commands that parsed successfully.
    pub commands: Vec<CommandDef>
}

fn render_lines(errors: &[Error]) -> String {
    errors
        .iter()
        .map(|err| match err {
            Error::Parse(ParseError {
                line: Some(line), ..
            }) => format!("\n  line {line}: {err}"),
            _ => format!("\n  {err}")
        })
        .collect()
}
