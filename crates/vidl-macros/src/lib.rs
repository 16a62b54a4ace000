// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Proc-macro implementation for vidl.
//!
//! Use the `vidl` crate instead; it re-exports [`commands!`] together with
//! the core API.
//!
//! # How it works
//!
//! `commands!` runs the vidl pipeline at compile time:
//!
//! 1. read the annotated C++ text (inline or from a file)
//! 2. scan it for directive markers and parse each declaration
//! 3. assign magics exactly like the C++ back end
//! 4. expand to Rust structs, a command enum and a handler trait
//!
//! Every malformed declaration is reported as its own compile error.

mod commands;

use proc_macro::TokenStream;

/// Generate Rust command types from annotated C++ declarations.
///
/// # Arguments
///
/// | Argument | Required | Default | Description |
/// |----------|----------|---------|-------------|
/// | `source` | one of | | C++ text containing directives |
/// | `file` | one of | | Path to a C++ file, relative to `CARGO_MANIFEST_DIR` |
/// | `prefix` | No | `"Vidl"` | Prefix of every generated type |
/// | `marker` | No | `"// VIDL_GENERATE"` | Directive marker |
/// | `max_magic_attempts` | No | `16` | Magic perturbation bound |
///
/// # Generated Items
///
/// For `void CmdA(int x);` with the default prefix:
///
/// | Item | Description |
/// |------|-------------|
/// | `VidlCmdA` | Struct with `pub x: i32`, `MAGIC`, `NAME` and `new` |
/// | `VidlCommand` | Enum with one variant per command |
/// | `VidlHandler` | Trait with `handle_cmd_a` and `handle` |
///
/// # Example
///
/// ```rust,ignore
/// vidl::commands! {
///     source = "
///         // VIDL_GENERATE
///         void CmdA(int x);
///     "
/// }
///
/// struct Log(Vec<i32>);
///
/// impl VidlHandler for Log {
///     fn handle_cmd_a(&mut self, cmd: &VidlCmdA) {
///         self.0.push(cmd.x);
///     }
/// }
///
/// let mut log = Log(Vec::new());
/// log.handle(&VidlCmdA::new(7).into());
/// assert_eq!(log.0, [7]);
/// ```
#[proc_macro]
pub fn commands(input: TokenStream) -> TokenStream {
    commands::expand(input)
}
