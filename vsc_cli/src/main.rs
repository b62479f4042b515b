use std::{
    io,
    path::{Path, PathBuf},
};

use anyhow::Context;
use clap::{Parser, Subcommand};
use log::debug;
use vsc_schema::{FieldPolicy, Milliseconds, WriteMode};
use vsc_shifter::ShiftOptions;

mod preview;
mod prompt;

#[derive(Debug, Parser)]
#[command(name = "vsc")]
#[command(about = "VSC chart offset shifter", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Shift every kept timestamp in place and drop type 3 events
    Shift {
        input: Option<PathBuf>,
        #[arg(short, long, allow_negative_numbers = true)]
        offset: Option<String>,
        /// Keep the type code and trailing fields of every line
        #[arg(long)]
        keep_fields: bool,
        /// Replace the file content instead of appending to it
        #[arg(long)]
        overwrite: bool,
        /// Print the shift report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show the shifted timestamps without writing
    Preview {
        input: Option<PathBuf>,
        #[arg(short, long, allow_negative_numbers = true)]
        offset: Option<String>,
        #[arg(long)]
        keep_fields: bool,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            let (input, offset_ms) = resolve_target(None, None)?;
            shift(&input, offset_ms, ShiftOptions::default(), false)?;
        }
        Some(Command::Shift {
            input,
            offset,
            keep_fields,
            overwrite,
            json,
        }) => {
            let (input, offset_ms) = resolve_target(input, offset)?;
            let options = ShiftOptions {
                field_policy: field_policy(keep_fields),
                write_mode: if overwrite {
                    WriteMode::Overwrite
                } else {
                    WriteMode::Append
                },
            };
            shift(&input, offset_ms, options, json)?;
        }
        Some(Command::Preview {
            input,
            offset,
            keep_fields,
        }) => {
            let (input, offset_ms) = resolve_target(input, offset)?;
            let output = vsc_shifter::preview_file(&input, offset_ms, field_policy(keep_fields))
                .with_context(|| format!("preview failed: {}", input.display()))?;
            print!("{}", preview::render_preview(&output));
        }
    }

    Ok(())
}

fn shift(
    input: &Path,
    offset_ms: Milliseconds,
    options: ShiftOptions,
    json: bool,
) -> anyhow::Result<()> {
    debug!("shifting {} by {offset_ms}ms with {options:?}", input.display());
    let report = vsc_shifter::shift_file(input, offset_ms, &options)
        .with_context(|| format!("shift failed: {}", input.display()))?;

    if json {
        let text = serde_json::to_string_pretty(&report).context("failed to serialize report")?;
        println!("{text}");
    }
    Ok(())
}

/// Fills in whatever the command line left out from the interactive prompts,
/// file name first.
fn resolve_target(
    input: Option<PathBuf>,
    offset: Option<String>,
) -> anyhow::Result<(PathBuf, Milliseconds)> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut stdout = io::stdout();

    let input = match input {
        Some(path) => path,
        None => PathBuf::from(prompt::ask(&mut reader, &mut stdout, prompt::FILE_PROMPT)?),
    };
    let offset_text = match offset {
        Some(text) => text,
        None => prompt::ask(&mut reader, &mut stdout, prompt::OFFSET_PROMPT)?,
    };
    let offset_ms = vsc_shifter::parse_offset(&offset_text).context("invalid offset")?;

    Ok((input, offset_ms))
}

fn field_policy(keep_fields: bool) -> FieldPolicy {
    if keep_fields {
        FieldPolicy::Preserve
    } else {
        FieldPolicy::TimestampOnly
    }
}
