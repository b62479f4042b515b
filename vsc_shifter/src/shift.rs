use log::debug;
use vsc_schema::{ChartLine, FieldPolicy, LineChange, Milliseconds, TIMESTAMP_PLACES};

use crate::format::{render_line, round_to_places};
use crate::parser::{parse_float, RawLine};
use crate::ShiftError;

pub(crate) struct Shifted {
    pub(crate) lines: Vec<String>,
    pub(crate) changes: Vec<LineChange>,
}

pub(crate) fn apply_offset(
    raw_lines: &[RawLine],
    offset_ms: Milliseconds,
    policy: FieldPolicy,
) -> Result<Shifted, ShiftError> {
    let mut lines = Vec::with_capacity(raw_lines.len());
    let mut changes = Vec::with_capacity(raw_lines.len());

    for raw in raw_lines {
        if raw.is_filtered() {
            debug!("line {}: dropping type {} event", raw.line, raw.type_code());
            changes.push(LineChange {
                line: raw.line,
                type_code: raw.type_code().to_string(),
                // dropped lines are never validated
                before_ms: parse_float(&raw.fields[0]),
                after_ms: None,
            });
            continue;
        }

        let before_ms = raw.timestamp_ms()?;
        let after_ms = round_to_places(before_ms + offset_ms, TIMESTAMP_PLACES);
        let shifted = ChartLine {
            timestamp_ms: after_ms,
            type_code: raw.type_code().to_string(),
            extra_fields: raw.extra_fields().to_vec(),
        };

        lines.push(render_line(&shifted, policy));
        changes.push(LineChange {
            line: raw.line,
            type_code: shifted.type_code,
            before_ms: Some(before_ms),
            after_ms: Some(after_ms),
        });
    }

    Ok(Shifted { lines, changes })
}
