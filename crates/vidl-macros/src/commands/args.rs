// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `commands!` arguments parsed with darling.

use std::path::PathBuf;

use darling::{FromMeta, util::SpannedValue};
use proc_macro2::Span;
use vidl_core::GeneratorConfig;

/// Arguments of `commands!`.
///
/// ```rust,ignore
/// commands! {
///     file = "include/commands.h",
///     prefix = "Rpc",
///     marker = "// @rpc"
/// }
/// ```
#[derive(Debug, FromMeta)]
pub struct CommandsArgs {
    /// Inline C++ text.
    source: Option<SpannedValue<String>>,

    /// C++ file relative to the invoking crate's manifest directory.
    file: Option<SpannedValue<String>>,

    /// Directive marker override.
    marker: Option<String>,

    /// Rust type prefix override.
    prefix: Option<String>,

    /// Magic perturbation bound override.
    max_magic_attempts: Option<u32>
}

/// Where the C++ text came from.
#[derive(Debug)]
pub enum Input {
    /// `source = "..."`.
    Inline { text: String, span: Span },
    /// `file = "..."`, resolved to an absolute path.
    File {
        text: String,
        path: String,
        span: Span
    }
}

impl Input {
    pub fn text(&self) -> &str {
        match self {
            Self::Inline { text, .. } | Self::File { text, .. } => text
        }
    }

    pub fn span(&self) -> Span {
        match self {
            Self::Inline { span, .. } | Self::File { span, .. } => *span
        }
    }
}

impl CommandsArgs {
    /// Generator configuration with every override applied.
    pub fn config(&self) -> GeneratorConfig {
        let mut config = GeneratorConfig::default();
        if let Some(marker) = &self.marker {
            config = config.with_marker(marker);
        }
        if let Some(prefix) = &self.prefix {
            config = config.with_rust_prefix(prefix);
        }
        if let Some(attempts) = self.max_magic_attempts {
            config = config.with_max_magic_attempts(attempts);
        }
        config
    }

    /// Load the C++ text.
    pub fn input(&self) -> darling::Result<Input> {
        match (&self.source, &self.file) {
            (Some(source), None) => Ok(Input::Inline {
                text: source.as_ref().clone(),
                span: source.span()
            }),
            (None, Some(file)) => read_file(file),
            _ => Err(syn::Error::new(
                Span::call_site(),
                "expected exactly one of `source` or `file`"
            )
            .into())
        }
    }
}

fn read_file(file: &SpannedValue<String>) -> darling::Result<Input> {
    let span = file.span();
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR")
        .map_err(|_| syn::Error::new(span, "CARGO_MANIFEST_DIR is not set"))?;
    let relative = file.as_str();
    let path = PathBuf::from(manifest_dir).join(relative);
    let text = std::fs::read_to_string(&path)
        .map_err(|err| syn::Error::new(span, format!("cannot read `{relative}`: {err}")))?;

    Ok(Input::File {
        text,
        path: path.to_string_lossy().into_owned(),
        span
    })
}
