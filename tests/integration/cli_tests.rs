//! Integration tests for the cistring command line

use crate::common::{run_cli, TestContext};

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

// ============================================================================
// find
// ============================================================================

#[test]
fn test_find_prints_location_and_line() {
    let ctx = TestContext::with_files(&[(
        "query.sql",
        "SELECT 1;\nselect Name FROM dbo.Users;\n",
    )]);
    let file = ctx.path("query.sql");

    let output = run_cli(&["find", "from DBO", file.to_str().unwrap()], None);

    assert!(
        output.status.success(),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert_eq!(
        stdout_of(&output),
        format!("{}:2:13:select Name FROM dbo.Users;\n", file.display())
    );
}

#[test]
fn test_find_count_mode() {
    let ctx = TestContext::with_files(&[("words.txt", "Ab ab AB aB")]);
    let file = ctx.path("words.txt");

    let output = run_cli(&["find", "--count", "ab", file.to_str().unwrap()], None);

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), format!("{}:4\n", file.display()));
}

#[test]
fn test_find_without_match_exits_with_failure() {
    let ctx = TestContext::with_files(&[("a.txt", "nothing to see")]);
    let output = run_cli(&["find", "needle", ctx.root.to_str().unwrap()], None);

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_find_reads_stdin() {
    let output = run_cli(&["find", "NeedLE"], Some(b"a NEEDLE here\n"));

    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "<stdin>:1:3:a NEEDLE here\n");
}

#[test]
fn test_find_missing_path_fails() {
    let ctx = TestContext::new();
    let missing = ctx.path("missing.txt");

    let output = run_cli(&["find", "x", missing.to_str().unwrap()], None);

    assert!(!output.status.success());
    assert!(String::from_utf8_lossy(&output.stderr).contains("does not exist"));
}

// ============================================================================
// fold
// ============================================================================

#[test]
fn test_fold_lowercases_stdin() {
    let output = run_cli(&["fold"], Some("Hello, WORLD! Ünïcode stays".as_bytes()));

    assert!(output.status.success());
    assert_eq!(output.stdout, "hello, world! Ünïcode stays".as_bytes());
}

#[test]
fn test_fold_upper_from_file() {
    let ctx = TestContext::with_files(&[("in.txt", "mixed Case 42\n")]);
    let file = ctx.path("in.txt");

    let output = run_cli(&["fold", "--upper", file.to_str().unwrap()], None);

    assert!(output.status.success());
    assert_eq!(output.stdout, b"MIXED CASE 42\n");
}

// ============================================================================
// hash
// ============================================================================

#[test]
fn test_hash_ignores_case() {
    let ctx =
        TestContext::with_files(&[("upper.txt", "HELLO WORLD"), ("lower.txt", "hello world")]);
    let upper = ctx.path("upper.txt");
    let lower = ctx.path("lower.txt");

    let output = run_cli(
        &["hash", upper.to_str().unwrap(), lower.to_str().unwrap()],
        None,
    );

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    let digests: Vec<&str> = stdout
        .lines()
        .map(|line| line.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(digests.len(), 2);
    assert_eq!(digests[0], digests[1]);
    assert_eq!(digests[0], cistring::ci_sha256_hex(b"hello world"));
}

#[test]
fn test_hash_stdin_matches_library() {
    let output = run_cli(&["hash"], Some(b"Some Input"));

    assert!(output.status.success());
    assert_eq!(
        stdout_of(&output),
        format!("{}  -\n", cistring::ci_sha256_hex(b"some input"))
    );
}

// ============================================================================
// stdin decoding
// ============================================================================

#[test]
fn test_hash_stdin_and_file_agree_with_bom() {
    let ctx = TestContext::new();
    let bytes = b"\xEF\xBB\xBFHello";
    let file = ctx.write("bom.txt", bytes);

    let from_file = run_cli(&["hash", file.to_str().unwrap()], None);
    let from_stdin = run_cli(&["hash"], Some(bytes));

    assert!(from_file.status.success());
    assert!(from_stdin.status.success());
    let file_digest = stdout_of(&from_file);
    let stdin_digest = stdout_of(&from_stdin);
    assert_eq!(
        file_digest.split_whitespace().next(),
        stdin_digest.split_whitespace().next()
    );
    assert_eq!(stdin_digest, format!("{}  -\n", cistring::ci_sha256_hex(b"hello")));
}

#[test]
fn test_find_decodes_utf16_stdin() {
    let mut bytes = vec![0xFF, 0xFE];
    for unit in "Wide Needle\n".encode_utf16() {
        bytes.extend_from_slice(&unit.to_le_bytes());
    }
    let ctx = TestContext::new();
    let file = ctx.write("wide.txt", &bytes);

    let from_file = run_cli(&["find", "needle", file.to_str().unwrap()], None);
    let from_stdin = run_cli(&["find", "needle"], Some(&bytes));

    assert!(from_file.status.success());
    assert!(from_stdin.status.success());
    assert_eq!(
        stdout_of(&from_file),
        format!("{}:1:6:Wide Needle\n", file.display())
    );
    assert_eq!(stdout_of(&from_stdin), "<stdin>:1:6:Wide Needle\n");
}

#[test]
fn test_fold_strips_bom_from_stdin() {
    let output = run_cli(&["fold"], Some(b"\xEF\xBB\xBFMiXeD"));

    assert!(output.status.success());
    assert_eq!(output.stdout, b"mixed");
}
