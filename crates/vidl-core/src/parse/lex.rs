// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Character-level helpers shared by the parser and the scanner.
//!
//! Nothing here understands C++ grammar. The helpers only know enough to
//! tell code apart from comments and string/character literals, which is
//! what every delimiter search needs before it can trust a `,` `(` or `;`.

use std::{iter::Peekable, str::CharIndices};

use crate::error::ParseErrorKind;

/// Tracks whether the cursor is inside a number, so that C++14 digit
/// separators (`1'000'000`) are not mistaken for character literals.
#[derive(Debug, Default, Clone, Copy)]
struct Word {
    active:  bool,
    numeric: bool
}

impl Word {
    fn feed(&mut self, ch: char) {
        if ch.is_ascii_alphanumeric() || ch == '_' || (self.numeric && ch == '.') {
            if !self.active {
                self.numeric = ch.is_ascii_digit();
            }
            self.active = true;
        } else {
            *self = Self::default();
        }
    }

    fn quote_opens_literal(&self) -> bool {
        !self.numeric
    }
}

/// Blank out `/* ... */` and `// ...` comments.
///
/// Every byte of a comment becomes a space except newlines, which are kept.
/// The result has the same length and line structure as the input, so
/// offsets found in it are valid in the original text, and `int/*x*/y`
/// still separates into two tokens. Literals are copied verbatim.
///
/// # Errors
///
/// [`ParseErrorKind::Unterminated`] for an open block comment or literal.
pub fn strip_comments(text: &str) -> Result<String, ParseErrorKind> {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    let mut word = Word::default();

    while let Some(ch) = chars.next() {
        match ch {
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                out.push_str("  ");
                let mut prev = '\0';
                loop {
                    match chars.next() {
                        Some(c) => {
                            blank(c, &mut out);
                            if prev == '*' && c == '/' {
                                break;
                            }
                            prev = c;
                        }
                        None => return Err(ParseErrorKind::Unterminated)
                    }
                }
                word = Word::default();
            }
            '/' if chars.peek() == Some(&'/') => {
                out.push(' ');
                while let Some(c) = chars.next_if(|&c| c != '\n') {
                    blank(c, &mut out);
                }
                word = Word::default();
            }
            '"' | '\'' if ch == '"' || word.quote_opens_literal() => {
                out.push(ch);
                copy_literal(&mut chars, ch, &mut out)?;
                word = Word::default();
            }
            _ => {
                out.push(ch);
                word.feed(ch);
            }
        }
    }

    Ok(out)
}

fn blank(c: char, out: &mut String) {
    if c == '\n' {
        out.push('\n');
    } else {
        out.extend(std::iter::repeat_n(' ', c.len_utf8()));
    }
}

fn copy_literal(
    chars: &mut Peekable<std::str::Chars<'_>>,
    quote: char,
    out: &mut String
) -> Result<(), ParseErrorKind> {
    while let Some(ch) = chars.next() {
        out.push(ch);
        if ch == '\\' {
            match chars.next() {
                Some(escaped) => out.push(escaped),
                None => break
            }
        } else if ch == quote {
            return Ok(());
        }
    }
    Err(ParseErrorKind::Unterminated)
}

/// Byte offset of the first `;` outside comments, literals and brackets.
///
/// Works on raw source: scanning stops at the terminator, so whatever
/// follows it is never inspected.
///
/// # Errors
///
/// [`ParseErrorKind::Unterminated`] when a comment or literal opened before
/// the terminator never closes.
pub fn find_terminator(text: &str) -> Result<Option<usize>, ParseErrorKind> {
    let mut chars = text.char_indices().peekable();
    let mut word = Word::default();
    let mut depth = 0usize;

    while let Some((idx, ch)) = chars.next() {
        match ch {
            '/' if chars.peek().is_some_and(|&(_, c)| c == '*') => {
                chars.next();
                let mut prev = '\0';
                loop {
                    match chars.next() {
                        Some((_, '/')) if prev == '*' => break,
                        Some((_, c)) => prev = c,
                        None => return Err(ParseErrorKind::Unterminated)
                    }
                }
                word = Word::default();
                continue;
            }
            '/' if chars.peek().is_some_and(|&(_, c)| c == '/') => {
                while chars.next_if(|&(_, c)| c != '\n').is_some() {}
                word = Word::default();
                continue;
            }
            '"' | '\'' if ch == '"' || word.quote_opens_literal() => {
                let mut closed = false;
                while let Some((_, c)) = chars.next() {
                    if c == '\\' {
                        chars.next();
                    } else if c == ch {
                        closed = true;
                        break;
                    }
                }
                if !closed {
                    return Err(ParseErrorKind::Unterminated);
                }
                word = Word::default();
                continue;
            }
            '(' | '[' | '{' => depth += 1,
            ')' | ']' | '}' => depth = depth.saturating_sub(1),
            ';' if depth == 0 => return Ok(Some(idx)),
            _ => {}
        }
        word.feed(ch);
    }

    Ok(None)
}

/// Iterator over the code characters of comment-free text.
///
/// The opening quote of a string or character literal is yielded so callers
/// can see that a literal was there; its contents and closing quote are
/// skipped.
pub struct CodeChars<'a> {
    chars: Peekable<CharIndices<'a>>,
    word:  Word
}

impl<'a> CodeChars<'a> {
    /// Iterate over `text`, which must already be free of comments.
    pub fn new(text: &'a str) -> Self {
        Self {
            chars: text.char_indices().peekable(),
            word:  Word::default()
        }
    }

    fn skip_literal(&mut self, quote: char) {
        while let Some((_, ch)) = self.chars.next() {
            if ch == '\\' {
                self.chars.next();
            } else if ch == quote {
                return;
            }
        }
    }
}

impl Iterator for CodeChars<'_> {
    type Item = (usize, char);

    fn next(&mut self) -> Option<Self::Item> {
        let (idx, ch) = self.chars.next()?;
        if ch == '"' || (ch == '\'' && self.word.quote_opens_literal()) {
            self.skip_literal(ch);
            self.word = Word::default();
        } else {
            self.word.feed(ch);
        }
        Some((idx, ch))
    }
}

/// Stack of expected closing delimiters.
#[derive(Debug, Default)]
pub struct Nesting {
    closers: Vec<char>
}

impl Nesting {
    /// Closing partner of an opening delimiter.
    pub fn closer_for(open: char) -> Option<char> {
        match open {
            '(' => Some(')'),
            '[' => Some(']'),
            '{' => Some('}'),
            '<' => Some('>'),
            _ => None
        }
    }

    /// Enter the delimiter opened by `open`.
    pub fn open(&mut self, open: char) {
        if let Some(closer) = Self::closer_for(open) {
            self.closers.push(closer);
        }
    }

    /// Leave a delimiter; `close` must match the innermost open one.
    ///
    /// # Errors
    ///
    /// [`ParseErrorKind::Unbalanced`] on a mismatched or stray closer.
    pub fn close(&mut self, close: char) -> Result<(), ParseErrorKind> {
        match self.closers.pop() {
            Some(expected) if expected == close => Ok(()),
            _ => Err(ParseErrorKind::Unbalanced(close))
        }
    }

    /// `true` when `close` would close the innermost open delimiter.
    pub fn expects(&self, close: char) -> bool {
        self.closers.last() == Some(&close)
    }

    /// `true` when no delimiter is open.
    pub fn is_top(&self) -> bool {
        self.closers.is_empty()
    }

    /// Succeed only if every delimiter was closed.
    ///
    /// # Errors
    ///
    /// [`ParseErrorKind::Unbalanced`] naming the innermost unclosed opener.
    pub fn finish(&self) -> Result<(), ParseErrorKind> {
        match self.closers.last() {
            None => Ok(()),
            Some(')') => Err(ParseErrorKind::Unbalanced('(')),
            Some(']') => Err(ParseErrorKind::Unbalanced('[')),
            Some('}') => Err(ParseErrorKind::Unbalanced('{')),
            Some(_) => Err(ParseErrorKind::Unbalanced('<'))
        }
    }
}

/// `true` for a plain C/C++ identifier.
pub fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}
