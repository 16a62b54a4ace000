// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! Rust code generation.
//!
//! # Architecture
//!
//! ```text
//! rust/
//! ├── rust.rs        : Orchestrator (this file)
//! ├── idents.rs      : Keyword-safe Rust identifiers
//! ├── types.rs       : C++ → Rust type mapping
//! ├── struct_gen.rs  : Command structs (VidlCmdA, etc.)
//! ├── enum_gen.rs    : Command enum (VidlCommand)
//! └── handler_gen.rs : Handler trait (VidlHandler)
//! ```
//!
//! # Generated Code
//!
//! For `void CmdA(int x);` and `void CmdB(const std::string& name);`:
//!
//! | Item | Purpose |
//! |------|---------|
//! | `VidlCmdA`, `VidlCmdB` | Command payloads with `MAGIC`, `NAME`, `new` |
//! | `VidlCommand` | Enum wrapping every command, tagged by magic |
//! | `VidlHandler` | Trait with one default no-op method per command |
//!
//! Magics are the ones the C++ back end assigns to the same batch.

mod enum_gen;
mod handler_gen;
mod idents;
mod struct_gen;
mod types;

use proc_macro2::{Ident, TokenStream};
use quote::quote;

use super::{Emitter, ensure_unique, ensure_unique_members};
use crate::{config::GeneratorConfig, error::EmitError, magic, parse::CommandDef};

/// Emits Rust items as a token stream.
///
/// Used by the `commands!` macro and by `vidl --lang rust`.
#[derive(Debug, Clone, Copy)]
pub struct RustEmitter<'a> {
    config: &'a GeneratorConfig
}

impl<'a> RustEmitter<'a> {
    /// Create an emitter using the naming conventions in `config`.
    pub fn new(config: &'a GeneratorConfig) -> Self {
        Self { config }
    }
}

/// A command with every Rust name and type resolved.
struct RustCommand<'a> {
    def:     &'a CommandDef,
    magic:   u32,
    ident:   Ident,
    variant: Ident,
    handler: Ident,
    fields:  Vec<RustField>
}

struct RustField {
    ident: Ident,
    ty:    TokenStream
}

/// Names shared by every generated item.
struct Context {
    command_enum:  Ident,
    handler_trait: Ident
}

impl Emitter for RustEmitter<'_> {
    type Output = TokenStream;

    fn emit(&self, commands: &[CommandDef]) -> Result<TokenStream, EmitError> {
        let type_names: Vec<String> = commands
            .iter()
            .map(|c| idents::type_name(&c.name))
            .collect();
        ensure_unique(type_names.iter().map(String::as_str))?;

        let mut resolved = Vec::with_capacity(commands.len());
        for (def, type_name) in commands.iter().zip(&type_names) {
            let fields = resolve_fields(def)?;
            let field_names: Vec<String> = fields.iter().map(|f| f.ident.to_string()).collect();
            ensure_unique_members(def, field_names.iter().map(String::as_str), &[])?;
            resolved.push((def, type_name, fields));
        }

        let tagged = magic::assign(commands, self.config.max_magic_attempts)?;
        let prefix = &self.config.rust_prefix;
        let commands = resolved
            .into_iter()
            .zip(tagged)
            .map(|((def, type_name, fields), tagged)| {
                Ok(RustCommand {
                    def,
                    magic: tagged.magic,
                    ident: idents::item_ident(&format!("{prefix}{type_name}"))?,
                    variant: idents::item_ident(type_name)?,
                    handler: idents::handler_ident(&def.name),
                    fields
                })
            })
            .collect::<Result<Vec<RustCommand<'_>>, EmitError>>()?;

        let ctx = Context {
            command_enum:  idents::item_ident(&self.config.rust_command_enum())?,
            handler_trait: idents::item_ident(&self.config.rust_handler_trait())?
        };

        let structs = struct_gen::generate(&commands);
        let command_enum = enum_gen::generate(&ctx, &commands);
        let handler_trait = handler_gen::generate(&ctx, &commands);

        tracing::debug!(commands = commands.len(), "emitted rust items");

        Ok(quote! {
            #structs
            #command_enum
            #handler_trait
        })
    }
}

fn resolve_fields(def: &CommandDef) -> Result<Vec<RustField>, EmitError> {
    def.params
        .iter()
        .enumerate()
        .map(|(index, param)| {
            let ty = types::map_type(&param.ty).ok_or_else(|| EmitError::UnsupportedType {
                command: def.name.clone(),
                param:   param.orig_name.clone(),
                ty:      param.ty.clone()
            })?;
            Ok(RustField {
                ident: idents::field_ident(&param.orig_name, index),
                ty
            })
        })
        .collect()
}
