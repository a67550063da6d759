use std::process::{Command, Output};

fn run_remote(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_remote-stats"))
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to start remote-stats")
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(String::from)
        .collect()
}

#[test]
fn test_shunter_session_cycles_through_gauges() {
    let output = run_remote(&[
        "--loco",
        "shunter",
        "--ticks",
        "5",
        "--throttle",
        "0",
        "--cycle-every",
        "1",
    ]);
    assert!(output.status.success());
    assert_eq!(
        stdout_lines(&output),
        ["[+] F:9.", "[+] O:9.", "[+] S:9", "[+] T:c", "[+] F:9."]
    );
}

#[test]
fn test_unpaired_remote_shows_not_available() {
    let output = run_remote(&["--loco", "none", "--ticks", "3"]);
    assert!(output.status.success());
    assert_eq!(stdout_lines(&output), ["[-] N:A", "[-] N:A", "[-] N:A"]);
}

#[test]
fn test_frame_log_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("frames.jsonl");
    let output = run_remote(&[
        "--ticks",
        "4",
        "--frame-log",
        path.to_str().unwrap(),
    ]);
    assert!(output.status.success());

    let content = std::fs::read_to_string(&path).unwrap();
    let frames: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).unwrap())
        .collect();
    assert_eq!(frames.len(), 4);
    assert!(frames.iter().all(|f| f["frame"]["sign"] == "+"));
}

#[test]
fn test_bad_option_fails() {
    let output = run_remote(&["--loco", "steam"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("steam"), "stderr was: {stderr}");
}

#[test]
fn test_help_prints_usage() {
    let output = run_remote(&["--help"]);
    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).contains("USAGE:"));
}
