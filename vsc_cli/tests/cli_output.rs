use std::{
    env,
    fs,
    io::Write,
    path::PathBuf,
    process::{Command, Stdio},
};

fn norm_newlines(s: &str) -> String {
    s.replace("\r\n", "\n").replace('\r', "")
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = env::temp_dir().join(format!("vsc_cli_{name}_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
fn interactive_run_appends_shifted_timestamps() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let chart = temp_dir("interactive").join("chart.vsc");
    fs::write(&chart, "100.0,1\n200.0,3\n300.5,2\n").unwrap();

    let mut child = Command::new(exe)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(format!("{}\n50\n", chart.display()).as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("输入VSC文件名"));
    assert!(stdout.contains("输入移动距离(ms)"));

    let written = fs::read_to_string(&chart).unwrap();
    assert_eq!(written, "100.0,1\n200.0,3\n300.5,2\n150.0\n350.5\n");
}

#[test]
fn shift_with_flags_overwrites_and_keeps_fields() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let chart = temp_dir("flags").join("chart.vsc");
    fs::write(&chart, "1000,1,2\n1200,3,0\n1500.25,2,5\n").unwrap();

    let output = Command::new(exe)
        .args([
            "shift",
            chart.to_str().unwrap(),
            "--offset",
            "-250",
            "--keep-fields",
            "--overwrite",
            "--json",
        ])
        .output()
        .unwrap();

    assert!(output.status.success());
    assert_eq!(fs::read_to_string(&chart).unwrap(), "750.0,1,2\n1250.25,2,5\n");

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["lines_read"], 3);
    assert_eq!(v["lines_written"], 2);
    assert_eq!(v["lines_dropped"], 1);
    assert_eq!(v["write_mode"], "overwrite");
    assert_eq!(v["field_policy"], "preserve");
}

#[test]
fn preview_prints_table_and_leaves_file() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let chart = temp_dir("preview").join("chart.vsc");
    let original = "100.0,1\n200.0,3\n";
    fs::write(&chart, original).unwrap();

    let output = Command::new(exe)
        .args(["preview", chart.to_str().unwrap(), "-o", "50"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("150.0"));
    assert!(stdout.contains("dropped"));
    assert_eq!(fs::read_to_string(&chart).unwrap(), original);
}

#[test]
fn malformed_line_fails_without_writing() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let chart = temp_dir("malformed").join("chart.vsc");
    let original = "100.0,1\n200.0\n";
    fs::write(&chart, original).unwrap();

    let output = Command::new(exe)
        .args(["shift", chart.to_str().unwrap(), "-o", "50"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: shift failed: "));
    assert!(stderr.contains("Caused by:"));
    assert!(stderr.contains(
        "E2001: expected at least 2 comma-separated fields, found 1 (line 2)"
    ));
    assert_eq!(fs::read_to_string(&chart).unwrap(), original);
}

#[test]
fn missing_file_is_e3001() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let missing = env::temp_dir().join(format!("vsc_cli_missing_{}.vsc", std::process::id()));
    let _ = fs::remove_file(&missing);

    let output = Command::new(exe)
        .args(["shift", missing.to_str().unwrap(), "-o", "10"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    // the OS error text varies, so only the prefix is fixed
    assert!(stderr.contains("E3001: failed to open chart:"));
    assert!(stderr.contains("(line 0)"));
    assert!(!missing.exists());
}

#[test]
fn bad_offset_is_rejected_before_opening_file() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let missing = env::temp_dir().join(format!("vsc_cli_offset_{}.vsc", std::process::id()));
    let _ = fs::remove_file(&missing);

    let output = Command::new(exe)
        .args(["shift", missing.to_str().unwrap(), "-o", "soon"])
        .output()
        .unwrap();

    assert_eq!(output.status.code(), Some(1));
    let stderr = norm_newlines(&String::from_utf8_lossy(&output.stderr));
    assert!(stderr.contains("Error: invalid offset"));
    assert!(stderr.contains("E1001: offset is not a number: \"soon\" (line 0)"));
}

#[test]
fn help_mentions_subcommands() {
    let exe = env!("CARGO_BIN_EXE_vsc_cli");

    let output = Command::new(exe).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = norm_newlines(&String::from_utf8_lossy(&output.stdout));
    assert!(stdout.contains("shift"));
    assert!(stdout.contains("preview"));
}
