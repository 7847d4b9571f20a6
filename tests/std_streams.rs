use std::env;
use std::process::Command;
use vlog::{Logger, Opt, VERBOSE_ENV};

const CHILD_ENV: &str = "VLOG_STD_STREAMS_CHILD";

// Runs only inside the child process started by the test below.
#[test]
fn emit_to_std_streams() {
    if env::var_os(CHILD_ENV).is_none() {
        return;
    }

    Logger::new([Opt::Verbose(true)]).printf(format_args!("count={}", 3));
    let quiet = Logger::new([]);
    quiet.printf(format_args!("quiet debug"));
    quiet.errorf(format_args!("fail: {}", "disk full"));

    vlog::printf!("global {}", "debug");
    vlog::errorf!("global {}", "error");
}

fn tagged<'a>(output: &'a str, tag: char, needle: &str) -> Vec<&'a str> {
    output
        .lines()
        .filter(|l| l.starts_with(tag) && l.contains(needle))
        .collect()
}

#[test]
fn test_debug_goes_to_stdout_and_errors_to_stderr() {
    let output = Command::new(env::current_exe().unwrap())
        .args(["--exact", "emit_to_std_streams", "--nocapture", "--test-threads=1", "--quiet"])
        .env(CHILD_ENV, "1")
        .env(VERBOSE_ENV, "true")
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    let counted = tagged(&stdout, 'D', ": count=3");
    assert_eq!(counted.len(), 1);
    assert!(counted[0].contains(" std_streams.rs:"));
    assert_eq!(tagged(&stdout, 'D', "global debug").len(), 1);
    assert!(!stdout.contains("quiet debug"));
    assert!(!stdout.contains("disk full"));
    assert!(!stdout.contains("global error"));

    let failed = tagged(&stderr, 'E', ": fail: disk full");
    assert_eq!(failed.len(), 1);
    assert_eq!(tagged(&stderr, 'E', "global error").len(), 1);
    assert!(!stderr.contains("count=3"));
    assert!(!stderr.contains("quiet debug"));
}
