use std::io::{BufRead, Write};

use anyhow::Context;

pub const FILE_PROMPT: &str = "输入VSC文件名";
pub const OFFSET_PROMPT: &str = "输入移动距离(ms)";

/// Prints `prompt` without a newline and returns the next input line with its
/// terminator removed.
pub fn ask(input: &mut impl BufRead, output: &mut impl Write, prompt: &str) -> anyhow::Result<String> {
    write!(output, "{prompt}").context("failed to write prompt")?;
    output.flush().context("failed to write prompt")?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .context("failed to read from stdin")?;
    if read == 0 {
        anyhow::bail!("unexpected end of input at prompt: {prompt}");
    }

    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
    Ok(line)
}
