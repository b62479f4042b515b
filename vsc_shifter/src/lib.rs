use std::{
    fs::{self, File, OpenOptions},
    io::{self, Read, Seek, SeekFrom, Write},
    path::Path,
};

use log::info;
use vsc_schema::{FieldPolicy, LineChange, Milliseconds, ShiftReport, WriteMode};

mod error;
mod format;
mod parser;
mod shift;

pub use error::{ShiftError, ShiftErrorKind};
pub use format::{format_timestamp, round_to_places};

use parser::{parse_float, parse_vsc};
use shift::apply_offset;

#[derive(Debug, Clone, Copy, Default)]
pub struct ShiftOptions {
    pub field_policy: FieldPolicy,
    pub write_mode: WriteMode,
}

/// Result of shifting a chart in memory.
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftOutput {
    /// Lines to write back, without terminators.
    pub lines: Vec<String>,
    /// One entry per input line, in file order.
    pub changes: Vec<LineChange>,
}

impl ShiftOutput {
    pub fn lines_read(&self) -> usize {
        self.changes.len()
    }

    pub fn lines_dropped(&self) -> usize {
        self.changes.iter().filter(|c| c.is_dropped()).count()
    }
}

pub fn parse_offset(text: &str) -> Result<Milliseconds, ShiftError> {
    parse_float(text).ok_or_else(|| {
        ShiftError::new("E1001", format!("offset is not a number: {:?}", text.trim()), 0)
    })
}

pub fn shift_str(
    src: &str,
    offset_ms: Milliseconds,
    field_policy: FieldPolicy,
) -> Result<ShiftOutput, ShiftError> {
    let raw_lines = parse_vsc(src)?;
    let shifted = apply_offset(&raw_lines, offset_ms, field_policy)?;
    Ok(ShiftOutput {
        lines: shifted.lines,
        changes: shifted.changes,
    })
}

/// Shifts a chart without touching the file.
pub fn preview_file(
    path: impl AsRef<Path>,
    offset_ms: Milliseconds,
    field_policy: FieldPolicy,
) -> Result<ShiftOutput, ShiftError> {
    let path = path.as_ref();
    let src = fs::read_to_string(path).map_err(|e| {
        ShiftError::new("E3001", format!("failed to read chart: {e}"), 0)
            .with_file(path.display().to_string())
    })?;
    shift_str(&src, offset_ms, field_policy).map_err(|e| e.with_file(path.display().to_string()))
}

/// Shifts a chart file in place through a single read/write handle.
///
/// The whole chart is transformed before anything is written, so a malformed
/// line leaves the file as it was.
pub fn shift_file(
    path: impl AsRef<Path>,
    offset_ms: Milliseconds,
    options: &ShiftOptions,
) -> Result<ShiftReport, ShiftError> {
    let path = path.as_ref();
    let file_name = path.display().to_string();

    let mut file = OpenOptions::new()
        .read(true)
        .write(true)
        .open(path)
        .map_err(|e| {
            ShiftError::new("E3001", format!("failed to open chart: {e}"), 0)
                .with_file(file_name.clone())
        })?;

    let mut src = String::new();
    file.read_to_string(&mut src).map_err(|e| {
        ShiftError::new("E3001", format!("failed to read chart: {e}"), 0)
            .with_file(file_name.clone())
    })?;

    let output = shift_str(&src, offset_ms, options.field_policy)
        .map_err(|e| e.with_file(file_name.clone()))?;

    write_back(&mut file, &src, &output.lines, options.write_mode).map_err(|e| {
        ShiftError::new("E3002", format!("failed to write chart: {e}"), 0)
            .with_file(file_name.clone())
    })?;

    info!(
        "{file_name}: shifted by {offset_ms}ms, {} written, {} dropped ({:?})",
        output.lines.len(),
        output.lines_dropped(),
        options.write_mode
    );

    Ok(ShiftReport {
        file: Some(file_name),
        offset_ms,
        field_policy: options.field_policy,
        write_mode: options.write_mode,
        lines_read: output.lines_read(),
        lines_written: output.lines.len(),
        lines_dropped: output.lines_dropped(),
    })
}

fn write_back(file: &mut File, original: &str, lines: &[String], mode: WriteMode) -> io::Result<()> {
    let mut out = String::new();
    match mode {
        WriteMode::Append => {
            // the handle already sits at the end of the original content
            if !lines.is_empty() && !original.is_empty() && !original.ends_with('\n') {
                out.push('\n');
            }
        }
        WriteMode::Overwrite => {
            file.seek(SeekFrom::Start(0))?;
            file.set_len(0)?;
        }
    }
    for line in lines {
        out.push_str(line);
        out.push('\n');
    }
    file.write_all(out.as_bytes())?;
    file.flush()
}
