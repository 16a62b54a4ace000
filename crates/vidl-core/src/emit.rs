// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Code emission.
//!
//! An [`Emitter`] turns an ordered batch of [`CommandDef`]s into generated
//! code. Two back ends ship with the crate:
//!
//! | Emitter | Output | Consumer |
//! |---------|--------|----------|
//! | [`CppEmitter`] | C++ header text | C++ call sites, the `vidl` CLI |
//! | [`RustEmitter`] | `proc_macro2::TokenStream` | `commands!`, `vidl --lang rust` |
//!
//! Both assign magics with [`magic::assign`](crate::magic::assign), so the
//! same batch gets the same tags in either language.
//!
//! # Architecture
//!
//! ```text
//! emit/
//! ├── cpp.rs  : structs, constructors, VIDLHandler switch
//! ├── rust.rs : Rust orchestrator
//! └── rust/   : idents, type mapping, struct/enum/trait generators
//! ```

mod cpp;
mod rust;

use std::collections::HashSet;

pub use cpp::CppEmitter;
pub use rust::RustEmitter;

use crate::{error::EmitError, parse::CommandDef};

/// A code generation back end.
pub trait Emitter {
    /// What the back end produces.
    type Output;

    /// Generate code for `commands`, in order.
    ///
    /// The slice is the uniqueness domain for magics and generated names;
    /// nothing is remembered between calls.
    ///
    /// # Errors
    ///
    /// [`EmitError`] when names clash or magics cannot be made unique.
    fn emit(&self, commands: &[CommandDef]) -> Result<Self::Output, EmitError>;
}

/// Fail on the first name produced twice.
fn ensure_unique<'a>(names: impl IntoIterator<Item = &'a str>) -> Result<(), EmitError> {
    let mut seen = HashSet::new();
    for name in names {
        if !seen.insert(name) {
            return Err(EmitError::DuplicateCommand {
                name: name.to_string()
            });
        }
    }
    Ok(())
}

/// Fail when two members of one struct share a name.
///
/// `reserved` lists members the emitter adds on its own.
fn ensure_unique_members<'a>(
    command: &CommandDef,
    members: impl IntoIterator<Item = &'a str>,
    reserved: &[&str]
) -> Result<(), EmitError> {
    let mut seen: HashSet<&str> = reserved.iter().copied().collect();
    for member in members {
        if !seen.insert(member) {
            return Err(EmitError::DuplicateMember {
                command: command.name.clone(),
                member:  member.to_string()
            });
        }
    }
    Ok(())
}
