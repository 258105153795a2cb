// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! History generation command implementation.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use respeak::cli::GenerateArgs;
use respeak::dictionary::Dictionary;
use respeak::error::{Error, ExitCode};
use respeak::history::write_history;
use respeak::normalize;
use respeak::scanner::{ScanOptions, Scanner};

/// Run the history generation command.
pub fn run(args: &GenerateArgs) -> anyhow::Result<ExitCode> {
    let Some(input) = &args.input else {
        return Ok(ExitCode::ConfigError);
    };

    let dictionary = match &args.dictionary {
        Some(path) => Dictionary::load(path)?,
        None => Dictionary::embedded(),
    };

    let text = std::fs::read_to_string(input).map_err(|e| Error::Io {
        path: input.clone(),
        source: e,
    })?;
    let text = normalize::expand_tabs(&text, args.tab_width);
    let text = if args.strip_indentation {
        normalize::strip_indentation(&text)
    } else {
        text
    };

    let scanner = Scanner::new(
        &dictionary,
        ScanOptions {
            prose: !args.no_prose,
        },
    );
    tracing::info!(chars = text.chars().count(), "reconstructing command history");
    let commands = scanner.reconstruct(&text);
    tracing::info!(commands = commands.len(), "reconstruction finished");

    write_output(&commands, &args.output)?;
    Ok(ExitCode::Success)
}

fn write_output(commands: &[respeak::Command], output: &Path) -> anyhow::Result<()> {
    if output == Path::new("-") {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        write_history(commands, &mut out)?;
        out.flush()?;
        return Ok(());
    }
    let file = File::create(output).map_err(|e| Error::Io {
        path: output.to_path_buf(),
        source: e,
    })?;
    let mut out = BufWriter::new(file);
    write_history(commands, &mut out)?;
    out.flush()?;
    Ok(())
}
