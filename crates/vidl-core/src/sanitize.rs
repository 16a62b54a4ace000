// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Keyword-safe identifiers.
//!
//! Generated code reuses declaration and parameter names as struct, member
//! and method names. A name that happens to be a C++ keyword (`class`,
//! `virtual`, ...) would not compile, so it gets a trailing underscore.
//!
//! ```rust
//! use vidl_core::sanitize;
//!
//! assert_eq!(sanitize("class"), "class_");
//! assert_eq!(sanitize("myVar"), "myVar");
//! ```

use std::borrow::Cow;

/// Reserved words of C++20, including alternative operator tokens.
///
/// Sorted for binary search.
pub const CPP_KEYWORDS: &[&str] = &[
    "alignas",
    "alignof",
    "and",
    "and_eq",
    "asm",
    "auto",
    "bitand",
    "bitor",
    "bool",
    "break",
    "case",
    "catch",
    "char",
    "char16_t",
    "char32_t",
    "char8_t",
    "class",
    "co_await",
    "co_return",
    "co_yield",
    "compl",
    "concept",
    "const",
    "const_cast",
    "consteval",
    "constexpr",
    "constinit",
    "continue",
    "decltype",
    "default",
    "delete",
    "do",
    "double",
    "dynamic_cast",
    "else",
    "enum",
    "explicit",
    "export",
    "extern",
    "false",
    "float",
    "for",
    "friend",
    "goto",
    "if",
    "inline",
    "int",
    "long",
    "mutable",
    "namespace",
    "new",
    "noexcept",
    "not",
    "not_eq",
    "nullptr",
    "operator",
    "or",
    "or_eq",
    "private",
    "protected",
    "public",
    "register",
    "reinterpret_cast",
    "requires",
    "return",
    "short",
    "signed",
    "sizeof",
    "static",
    "static_assert",
    "static_cast",
    "struct",
    "switch",
    "template",
    "this",
    "thread_local",
    "throw",
    "true",
    "try",
    "typedef",
    "typeid",
    "typename",
    "union",
    "unsigned",
    "using",
    "virtual",
    "void",
    "volatile",
    "wchar_t",
    "while",
    "xor",
    "xor_eq"
];

/// Check whether `ident` is a reserved C++ word.
#[must_use]
pub fn is_reserved(ident: &str) -> bool {
    CPP_KEYWORDS.binary_search(&ident).is_ok()
}

/// Map an identifier to one that cannot collide with a C++ keyword.
///
/// Reserved words get a trailing `_`; everything else is returned unchanged.
/// Total over all strings.
#[must_use]
pub fn sanitize(ident: &str) -> Cow<'_, str> {
    if is_reserved(ident) {
        Cow::Owned(format!("{ident}_"))
    } else {
        Cow::Borrowed(ident)
    }
}
