// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Parsed command model.
//!
//! [`CommandDef`] is the boundary between parsing and emission: any emitter
//! consumes a slice of them and nothing else.

use crate::sanitize::sanitize;

/// One parameter of a declaration.
///
/// # Fields
///
/// | Field | Example (`const std::string& class`) |
/// |-------|---------------------------------------|
/// | `ty` | `const std::string&` |
/// | `name` | `class_` |
/// | `orig_name` | `class` |
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamDef {
    /// Canonical type text, pointer/reference markers included.
    pub ty:        String,
    /// Keyword-safe name used for generated members.
    pub name:      String,
    /// Name exactly as written in the source.
    pub orig_name: String
}

impl ParamDef {
    /// Create a parameter, sanitizing `orig_name`.
    pub fn new(ty: impl Into<String>, orig_name: impl Into<String>) -> Self {
        let orig_name = orig_name.into();
        Self {
            ty: ty.into(),
            name: sanitize(&orig_name).into_owned(),
            orig_name
        }
    }

    /// `true` when the type ends with `&` (lvalue or rvalue reference).
    #[must_use]
    pub fn is_reference(&self) -> bool {
        self.ty.trim_end().ends_with('&')
    }

    /// `true` when the type ends with `*`.
    #[must_use]
    pub fn is_pointer(&self) -> bool {
        self.ty.trim_end().ends_with('*')
    }

    /// The type with any trailing reference markers removed.
    ///
    /// `const std::string&` becomes `const std::string`; pointer types are
    /// returned unchanged.
    #[must_use]
    pub fn value_type(&self) -> &str {
        self.ty.trim_end().trim_end_matches('&').trim_end()
    }
}

/// One parsed declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandDef {
    /// Return type text. Informational only.
    pub return_type:    String,
    /// Declaration name exactly as written.
    pub name:           String,
    /// Keyword-safe declaration name.
    pub sanitized_name: String,
    /// Parameters in declaration order.
    pub params:         Vec<ParamDef>
}

impl CommandDef {
    /// Create a command, sanitizing `name`.
    pub fn new(return_type: impl Into<String>, name: impl Into<String>, params: Vec<ParamDef>) -> Self {
        let name = name.into();
        Self {
            return_type: return_type.into(),
            sanitized_name: sanitize(&name).into_owned(),
            name,
            params
        }
    }

    /// Number of parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Render the declaration back as a one-line signature.
    ///
    /// Used in generated documentation.
    #[must_use]
    pub fn signature(&self) -> String {
        let params: Vec<String> = self
            .params
            .iter()
            .map(|p| format!("{} {}", p.ty, p.orig_name))
            .collect();
        format!("{} {}({})", self.return_type, self.name, params.join(", "))
    }
}
