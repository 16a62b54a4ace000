// SPDX-FileCopyrightText: 2025-2026 RAprogramm <andrey.rozanov.vl@gmail.com>
// SPDX-License-Identifier: MIT

//! `vidl`: generate command headers from annotated C++ sources.

mod discover;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;
use vidl_core::{Batch, CppEmitter, Emitter, Error, GeneratorConfig, RustEmitter, collect};

#[derive(Parser)]
#[command(
    name = "vidl",
    version,
    about = "Generate command structs and dispatch code from annotated C++ declarations"
)]
struct Cli {
    /// Source files or directories to scan
    #[arg(required = true)]
    inputs: Vec<PathBuf>,

    /// Write the generated code here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Language to generate
    #[arg(long, value_enum, default_value_t = Lang::Cpp)]
    lang: Lang,

    /// Prefix of generated types (`VIDL_` for C++, `Vidl` for Rust)
    #[arg(long)]
    prefix: Option<String>,

    /// Directive marker
    #[arg(long, default_value = vidl_core::DEFAULT_MARKER)]
    marker: String,

    /// Log progress
    #[arg(short, long)]
    verbose: bool
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum Lang {
    /// C++ header
    Cpp,
    /// Rust module
    Rust
}

impl Cli {
    fn config(&self) -> GeneratorConfig {
        let config = GeneratorConfig::default().with_marker(&self.marker);
        match (&self.prefix, self.lang) {
            (Some(prefix), Lang::Cpp) => config.with_struct_prefix(prefix),
            (Some(prefix), Lang::Rust) => config.with_rust_prefix(prefix),
            (None, _) => config
        }
    }
}

fn init_tracing(verbose: bool) {
    let fallback = if verbose { "info" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
        )
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("{}", colored::Colorize::red(format!("Error: {e:#}").as_str()));
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let config = cli.config();
    let files = discover::discover(&cli.inputs)?;
    tracing::info!(files = files.len(), "scanning sources");

    let batch = scan_files(&files, &config)?;
    tracing::info!(commands = batch.commands.len(), "parsed declarations");

    let generated = render(batch, cli.lang, &config)?;

    match &cli.output {
        Some(path) => {
            std::fs::write(path, generated)
                .with_context(|| format!("writing {}", path.display()))?;
            tracing::info!(path = %path.display(), "wrote output");
        }
        None => print!("{generated}")
    }
    Ok(())
}

/// Parse every file into one batch, failing with a per-file report.
fn scan_files(files: &[PathBuf], config: &GeneratorConfig) -> anyhow::Result<Batch> {
    let mut batch = Batch::default();
    let mut report = Vec::new();

    for path in files {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let found = collect(&source, config);
        report.extend(found.errors.iter().map(|err| locate(path, err)));
        batch.extend(found);
    }

    if !batch.is_clean() {
        bail!("{} declaration(s) failed\n{}", report.len(), report.join("\n"));
    }
    Ok(batch)
}

fn locate(path: &Path, err: &Error) -> String {
    match err {
        Error::Parse(parse) => match parse.line {
            Some(line) => format!("  {}:{line}: {err}", path.display()),
            None => format!("  {}: {err}", path.display())
        },
        Error::Emit(_) => format!("  {err}")
    }
}

/// Emit `batch` in `lang`. Rust output is formatted with `prettyplease`.
fn render(batch: Batch, lang: Lang, config: &GeneratorConfig) -> anyhow::Result<String> {
    match lang {
        Lang::Cpp => Ok(CppEmitter::new(config).emit(&batch.commands)?),
        Lang::Rust => {
            let tokens = RustEmitter::new(config).emit(&batch.commands)?;
            let file: syn::File =
                syn::parse2(tokens).context("generated Rust items do not parse")?;
            Ok(format!(
                "// Generated by vidl. Do not edit.\n\n{}",
                prettyplease::unparse(&file)
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("vidl").chain(args.iter().copied()))
    }

    #[test]
    fn prefix_targets_the_chosen_language() {
        let cpp = cli(&["in.h", "--prefix", "Rpc_"]).config();
        assert_eq!(cpp.struct_prefix, "Rpc_");
        assert_eq!(cpp.rust_prefix, "Vidl");

        let rust = cli(&["in.h", "--lang", "rust", "--prefix", "Rpc"]).config();
        assert_eq!(rust.rust_prefix, "Rpc");
        assert_eq!(rust.struct_prefix, "VIDL_");
    }

    #[test]
    fn batch_spans_every_file() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.h"), "// VIDL_GENERATE\nvoid CmdA(int x);\n").unwrap();
        fs::write(dir.path().join("b.h"), "// VIDL_GENERATE\nvoid CmdB();\n").unwrap();

        let config = GeneratorConfig::default();
        let files = discover::discover(&[dir.path().to_path_buf()]).unwrap();
        let batch = scan_files(&files, &config).unwrap();
        let header = render(batch, Lang::Cpp, &config).unwrap();

        assert!(header.contains("struct VIDL_CmdA"));
        assert!(header.contains("Handle_CmdB( (VIDL_CmdB*) cmd );"));
        assert!(header.find("VIDL_CmdA").unwrap() < header.find("VIDL_CmdB").unwrap());
    }

    #[test]
    fn errors_name_file_and_line() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.h");
        fs::write(&path, "\n// VIDL_GENERATE\nvoid Broken(int);\n").unwrap();

        let err = scan_files(&[path.clone()], &GeneratorConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("1 declaration(s) failed"));
        assert!(message.contains(&format!("{}:2:", path.display())));
    }

    #[test]
    fn duplicate_across_files_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.h"), "// VIDL_GENERATE\nvoid Twin();\n").unwrap();
        fs::write(dir.path().join("b.h"), "// VIDL_GENERATE\nvoid Twin();\n").unwrap();

        let config = GeneratorConfig::default();
        let files = discover::discover(&[dir.path().to_path_buf()]).unwrap();
        let batch = scan_files(&files, &config).unwrap();
        assert!(render(batch, Lang::Cpp, &config).is_err());
    }

    #[test]
    fn rust_output_has_banner() {
        let config = GeneratorConfig::default();
        let batch = collect("// VIDL_GENERATE\nvoid CmdA(int x);\n", &config);
        let out = render(batch, Lang::Rust, &config).unwrap();
        assert!(out.starts_with("// Generated by vidl. Do not edit."));
        assert!(out.lines().any(|line| line == "pub struct VidlCmdA {"));
        assert!(out.lines().any(|line| line == "pub trait VidlHandler {"));
    }

    #[test]
    fn errors_from_every_file_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.h"), "// VIDL_GENERATE\nvoid BadA(int);\n").unwrap();
        fs::write(dir.path().join("b.h"), "// VIDL_GENERATE\nvoid Good();\n").unwrap();
        fs::write(dir.path().join("c.h"), "// VIDL_GENERATE\nvoid BadC(,);\n").unwrap();

        let files = discover::discover(&[dir.path().to_path_buf()]).unwrap();
        let err = scan_files(&files, &GeneratorConfig::default()).unwrap_err();
        let message = err.to_string();
        assert!(message.starts_with("2 declaration(s) failed"));
        assert!(message.contains("a.h:1:"));
        assert!(message.contains("c.h:1:"));
    }
}
