use vsc_shifter::{format_timestamp, ShiftOutput};

pub fn render_preview(output: &ShiftOutput) -> String {
    if output.changes.is_empty() {
        return "Chart is empty.\n".to_string();
    }

    let mut text = String::new();
    text.push_str("Line | Type | Before(ms)   | After(ms)\n");
    text.push_str("-----|------|--------------|--------------\n");

    for change in &output.changes {
        let before = change
            .before_ms
            .map(format_timestamp)
            .unwrap_or_else(|| "?".to_string());
        let after = change
            .after_ms
            .map(format_timestamp)
            .unwrap_or_else(|| "dropped".to_string());
        text.push_str(&format!(
            "{:4} | {:<4} | {:<12} | {}\n",
            change.line, change.type_code, before, after
        ));
    }

    text.push_str(&format!(
        "{} read, {} kept, {} dropped\n",
        output.lines_read(),
        output.lines.len(),
        output.lines_dropped()
    ));
    text
}
