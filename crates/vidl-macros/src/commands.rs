// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `commands!` expansion.

mod args;

use darling::{FromMeta, ast::NestedMeta};
use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use vidl_core::{BatchError, Error, ParseError, RustEmitter, generate};

use self::args::{CommandsArgs, Input};

/// Main entry point for the `commands!` macro.
pub fn expand(input: TokenStream) -> TokenStream {
    match try_expand(input.into()) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into()
    }
}

fn try_expand(input: TokenStream2) -> darling::Result<TokenStream2> {
    let items = NestedMeta::parse_meta_list(input)?;
    let args = CommandsArgs::from_list(&items)?;
    let config = args.config();
    let input = args.input()?;

    let items = generate(input.text(), &config, &RustEmitter::new(&config))
        .map_err(|err| batch_error(&err, input.span()))?;

    let track = match &input {
        Input::File { path, .. } => quote! {
            const _: &[u8] = include_bytes!(#path);
        },
        Input::Inline { .. } => TokenStream2::new()
    };

    Ok(quote! {
        #track
        #items
    })
}

/// One compile error per failed declaration, prefixed with the line of its
/// directive inside the C++ text.
fn batch_error(err: &BatchError, span: Span) -> darling::Error {
    darling::Error::multiple(
        err.errors
            .iter()
            .map(|e| {
                let message = match e {
                    Error::Parse(ParseError {
                        line: Some(line), ..
                    }) => format!("line {line}: {e}"),
                    _ => e.to_string()
                };
                syn::Error::new(span, message).into()
            })
            .collect()
    )
}
