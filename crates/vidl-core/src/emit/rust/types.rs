// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! C++ → Rust type mapping.
//!
//! | C++ | Rust |
//! |-----|------|
//! | `int`, `int32_t` | `i32` |
//! | `unsigned`, `uint32_t` | `u32` |
//! | `short` / `long` / `long long` | `i16` / `i64` / `i64` |
//! | `float` / `double` | `f32` / `f64` |
//! | `char` | `c_char` |
//! | `size_t` | `usize` |
//! | `std::string` | `String` |
//! | `std::vector<T>` | `Vec<T>` |
//! | `std::map<K, V>` / `std::unordered_map<K, V>` | `BTreeMap` / `HashMap` |
//! | `std::set<T>` / `std::unordered_set<T>` | `BTreeSet` / `HashSet` |
//! | `std::optional<T>` | `Option<T>` |
//! | `std::pair<A, B>` | `(A, B)` |
//! | `std::array<T, N>` | `[T; N]` |
//! | `T&`, `const T&`, `T&&` | owned `T` |
//! | `T*` / `const T*` | `*mut T` / `*const T` |
//! | `ns::Name` | `ns::Name` |
//!
//! `long` is taken to be 64-bit. Anything else yields `None`.

use proc_macro2::TokenStream;
use quote::quote;

use crate::parse::lex::is_identifier;

/// Map a parameter type as parsed to a Rust type.
///
/// References become the owned value type: a generated command stores its
/// arguments.
pub fn map_type(cpp: &str) -> Option<TokenStream> {
    let ty = cpp.trim().trim_end_matches('&').trim_end();
    map_pointer(ty)
}

fn map_pointer(ty: &str) -> Option<TokenStream> {
    let (_, ty) = strip_trailing_cv(ty);
    if let Some(inner) = ty.strip_suffix('*') {
        let (is_const, pointee) = split_const(inner.trim_end());
        let target = if pointee == "void" {
            quote! { ::core::ffi::c_void }
        } else {
            map_pointer(pointee)?
        };
        return Some(if is_const {
            quote! { *const #target }
        } else {
            quote! { *mut #target }
        });
    }
    let (_, base) = split_const(ty);
    map_base(base)
}

/// Remove `const`/`volatile` that qualify the outermost level.
fn strip_trailing_cv(ty: &str) -> (bool, &str) {
    let mut ty = ty.trim();
    let mut is_const = false;
    loop {
        if let Some(rest) = ty.strip_suffix("const").filter(|r| r.ends_with([' ', '*'])) {
            is_const = true;
            ty = rest.trim_end();
        } else if let Some(rest) = ty.strip_suffix("volatile").filter(|r| r.ends_with([' ', '*'])) {
            ty = rest.trim_end();
        } else {
            return (is_const, ty);
        }
    }
}

/// Split off the qualifiers of a pointee.
///
/// A leading `const` only applies when no further pointer level follows:
/// in `const char**` the outer pointer is mutable.
fn split_const(ty: &str) -> (bool, &str) {
    let (mut is_const, mut ty) = strip_trailing_cv(ty);
    if !ty.contains('*') {
        loop {
            if let Some(rest) = ty.strip_prefix("const ") {
                is_const = true;
                ty = rest.trim_start();
            } else if let Some(rest) = ty.strip_prefix("volatile ") {
                ty = rest.trim_start();
            } else {
                break;
            }
        }
    }
    (is_const, ty)
}

fn map_base(base: &str) -> Option<TokenStream> {
    let normalized = base.split_whitespace().collect::<Vec<_>>().join(" ");
    let global = normalized.strip_prefix("::").unwrap_or(&normalized);
    let bare = global.strip_prefix("std::").unwrap_or(global);

    if let Some(primitive) = map_primitive(bare) {
        return Some(primitive);
    }
    if let Some(open) = bare.find('<') {
        let args = bare[open + 1..].strip_suffix('>')?;
        return map_template(bare[..open].trim(), &split_args(args)?);
    }
    match bare {
        "string" | "string_view" => return Some(quote! { ::std::string::String }),
        "void" => return None,
        _ => {}
    }
    map_path(global)
}

fn map_primitive(name: &str) -> Option<TokenStream> {
    let ty = match name {
        "bool" => quote! { bool },
        "char" => quote! { ::core::ffi::c_char },
        "signed char" | "int8_t" => quote! { i8 },
        "unsigned char" | "uint8_t" => quote! { u8 },
        "short" | "short int" | "signed short" | "signed short int" | "int16_t" => quote! { i16 },
        "unsigned short" | "unsigned short int" | "uint16_t" => quote! { u16 },
        "int" | "signed" | "signed int" | "int32_t" => quote! { i32 },
        "unsigned" | "unsigned int" | "uint32_t" => quote! { u32 },
        "long" | "long int" | "signed long" | "long long" | "long long int" | "signed long long"
        | "int64_t" => quote! { i64 },
        "unsigned long" | "unsigned long int" | "unsigned long long" | "unsigned long long int"
        | "uint64_t" => quote! { u64 },
        "float" => quote! { f32 },
        "double" => quote! { f64 },
        "size_t" | "uintptr_t" => quote! { usize },
        "ptrdiff_t" | "intptr_t" | "ssize_t" => quote! { isize },
        _ => return None
    };
    Some(ty)
}

fn map_template(name: &str, args: &[&str]) -> Option<TokenStream> {
    if let ("array", [elem, len]) = (name, args) {
        let t = map_type(elem)?;
        let n: usize = len.trim().parse().ok()?;
        return Some(quote! { [#t; #n] });
    }

    let mapped = args
        .iter()
        .map(|arg| map_type(arg))
        .collect::<Option<Vec<_>>>()?;
    let ty = match (name, mapped.as_slice()) {
        ("vector", [t]) => quote! { ::std::vec::Vec<#t> },
        ("map", [k, v]) => quote! { ::std::collections::BTreeMap<#k, #v> },
        ("unordered_map", [k, v]) => quote! { ::std::collections::HashMap<#k, #v> },
        ("set", [t]) => quote! { ::std::collections::BTreeSet<#t> },
        ("unordered_set", [t]) => quote! { ::std::collections::HashSet<#t> },
        ("optional", [t]) => quote! { ::core::option::Option<#t> },
        ("pair", [a, b]) => quote! { (#a, #b) },
        _ => return None
    };
    Some(ty)
}

/// Split template arguments on top-level commas.
fn split_args(args: &str) -> Option<Vec<&str>> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in args.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                parts.push(args[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None;
    }
    parts.push(args[start..].trim());
    if parts.iter().any(|p| p.is_empty()) {
        return None;
    }
    Some(parts)
}

/// A plain or namespace-qualified name maps to the same Rust path.
fn map_path(name: &str) -> Option<TokenStream> {
    if !name.split("::").all(is_identifier) {
        return None;
    }
    let path: syn::Path = syn::parse_str(name).ok()?;
    Some(quote! { #path })
}
