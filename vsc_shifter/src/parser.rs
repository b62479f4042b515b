use vsc_schema::{Milliseconds, FIELD_SEPARATOR, FILTERED_TYPE_CODE};

use crate::ShiftError;

#[derive(Debug, Clone)]
pub(crate) struct RawLine {
    pub(crate) line: usize,
    pub(crate) fields: Vec<String>,
}

impl RawLine {
    pub(crate) fn type_code(&self) -> &str {
        // parse_vsc guarantees at least two fields
        &self.fields[1]
    }

    pub(crate) fn is_filtered(&self) -> bool {
        self.type_code() == FILTERED_TYPE_CODE
    }

    pub(crate) fn extra_fields(&self) -> &[String] {
        &self.fields[2..]
    }

    pub(crate) fn timestamp_ms(&self) -> Result<Milliseconds, ShiftError> {
        let raw = &self.fields[0];
        parse_float(raw).ok_or_else(|| {
            ShiftError::new(
                "E2002",
                format!("timestamp is not a number: {raw:?}"),
                self.line,
            )
            .with_column(1)
            .with_context(self.fields.join(","))
        })
    }
}

/// Splits a chart into lines of comma-separated fields.
///
/// Every line, blank ones included, must carry a timestamp and a type code.
pub(crate) fn parse_vsc(src: &str) -> Result<Vec<RawLine>, ShiftError> {
    let mut lines = Vec::new();

    for (i, text) in src.lines().enumerate() {
        let line_no = i + 1;
        let fields: Vec<String> = text.split(FIELD_SEPARATOR).map(str::to_string).collect();
        if fields.len() < 2 {
            return Err(ShiftError::new(
                "E2001",
                format!(
                    "expected at least 2 comma-separated fields, found {}",
                    fields.len()
                ),
                line_no,
            )
            .with_context(text));
        }
        lines.push(RawLine {
            line: line_no,
            fields,
        });
    }

    Ok(lines)
}

/// Float parsing for user and chart input: surrounding whitespace is ignored.
pub(crate) fn parse_float(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok()
}
