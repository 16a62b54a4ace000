// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Directive detection.
//!
//! A directive is a line whose trimmed content is exactly the marker
//! (`// VIDL_GENERATE` by default). The declaration it applies to starts
//! after that line and ends at the first `;` outside comments, literals and
//! brackets. A declaration never extends past the next directive.
//!
//! ```text
//! // VIDL_GENERATE            <- directive, line 1
//! void CmdA(int x);           <- declaration handed to the parser
//!
//! // VIDL_GENERATE
//! uint32_t CmdB(
//!     float y  // comment
//! );
//! ```

use crate::{
    error::{ParseError, ParseErrorKind},
    parse::lex::{find_terminator, strip_comments}
};

/// Raw declaration text found after one directive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// 1-based line of the directive marker.
    pub line: usize,
    /// Declaration text without the terminating `;`, comments included.
    pub text: String
}

/// Directive line found while scanning.
struct Directive {
    line:  usize,
    /// Byte offset of the marker line itself.
    start: usize,
    /// Byte offset where the text governed by the directive begins.
    body:  usize,
    known: bool,
    raw:   String
}

/// Find every directive in `source` and extract its declaration.
///
/// Results are in source order. Each directive produces exactly one entry:
/// the declaration, or the [`ParseError`] explaining why none was found.
#[must_use]
pub fn scan(source: &str, marker: &str) -> Vec<Result<Declaration, ParseError>> {
    let directives = find_directives(source, marker);

    directives
        .iter()
        .enumerate()
        .map(|(i, directive)| {
            let end = directives.get(i + 1).map_or(source.len(), |next| next.start);
            let region = &source[directive.body..end];
            extract(directive, region)
        })
        .collect()
}

fn find_directives(source: &str, marker: &str) -> Vec<Directive> {
    let mut directives = Vec::new();
    let mut offset = 0;

    for (idx, line) in source.split_inclusive('\n').enumerate() {
        let start = offset;
        offset += line.len();
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix(marker) {
            directives.push(Directive {
                line: idx + 1,
                start,
                body: offset,
                known: rest.is_empty(),
                raw: trimmed.to_string()
            });
        }
    }

    directives
}

fn extract(directive: &Directive, region: &str) -> Result<Declaration, ParseError> {
    if !directive.known {
        return Err(ParseError::new(ParseErrorKind::UnknownDirective, &directive.raw)
            .at_line(directive.line));
    }

    let fail = |kind, text: &str| ParseError::new(kind, text).at_line(directive.line);

    let (text, terminated) = match find_terminator(region) {
        Ok(Some(end)) => (&region[..end], true),
        Ok(None) => (region, false),
        Err(kind) => return Err(fail(kind, region))
    };

    let blank = strip_comments(text).is_ok_and(|clean| clean.trim().is_empty());
    if blank {
        return Err(fail(ParseErrorKind::MissingDeclaration, &directive.raw));
    }
    if !terminated {
        return Err(fail(ParseErrorKind::MissingTerminator, text));
    }

    Ok(Declaration {
        line: directive.line,
        text: text.trim().to_string()
    })
}
