use std::io::Write;
use std::process::{Command, Stdio};

const WISP_BIN: &str = env!("CARGO_BIN_EXE_wisp");

/// The REPL persists bindings across lines: a `var` on one line must
/// be visible when a later line references it (`spec.md` §6.2).
#[test]
fn repl_persists_bindings_across_lines() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(WISP_BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"var x = 41;\nx + 1\n")?;

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains("42"), "unexpected stdout: {stdout:?}");
    Ok(())
}

#[test]
fn repl_reports_parse_errors_and_keeps_going() -> Result<(), Box<dyn std::error::Error>> {
    let mut child = Command::new(WISP_BIN)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"var x = ;\n1 + 1\n")?;

    let output = child.wait_with_output()?;
    let stdout = String::from_utf8(output.stdout)?;

    assert!(stdout.contains('\t'), "expected a tab-prefixed parse error: {stdout:?}");
    assert!(stdout.contains('2'), "expected the next line to still evaluate: {stdout:?}");
    Ok(())
}
