use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShiftErrorKind {
    Input,
    Parse,
    IO,
}

impl ShiftErrorKind {
    pub(crate) fn from_code(code: &'static str) -> Self {
        match code {
            "E1001" => Self::Input,
            "E2001" | "E2002" => Self::Parse,
            "E3001" | "E3002" => Self::IO,
            // unknown codes are reported as malformed charts
            _ => Self::Parse,
        }
    }
}

#[derive(Debug, Error, Clone)]
#[error("{code}: {message} (line {line})")]
pub struct ShiftError {
    pub code: &'static str,
    pub kind: ShiftErrorKind,
    pub message: String,
    /// 1-based; 0 when the error is not tied to a chart line.
    pub line: usize,

    pub file: Option<String>,
    pub column: Option<usize>,
    pub context: Option<String>,
}

impl ShiftError {
    pub(crate) fn new(code: &'static str, message: impl Into<String>, line: usize) -> Self {
        Self {
            code,
            kind: ShiftErrorKind::from_code(code),
            message: message.into(),
            line,

            file: None,
            column: None,
            context: None,
        }
    }

    pub fn with_file(mut self, file: impl Into<String>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_column(mut self, column: usize) -> Self {
        self.column = Some(column);
        self
    }

    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}
