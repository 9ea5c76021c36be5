use std::{
    error::Error,
    path::Path,
    process::{Command, Output},
    str,
};

/// The `wisp` binary built for the current test run. Cargo sets this
/// env var for every integration test in a crate that has a `[[bin]]`.
const WISP_BIN: &str = env!("CARGO_BIN_EXE_wisp");

pub struct Expected<'a> {
    pub stdout: &'a str,
    pub stderr: &'a str,
}

impl<'a> Expected<'a> {
    fn assert_matches(self, output: &Output) -> Result<(), Box<dyn Error>> {
        assert_eq!(str::from_utf8(&output.stdout)?, self.stdout);
        assert_eq!(str::from_utf8(&output.stderr)?, self.stderr);
        Ok(())
    }
}

fn run_file(src_path: &Path) -> Result<Output, std::io::Error> {
    Command::new(WISP_BIN)
        .arg("--file")
        .arg(src_path)
        .output()
}

/// Runs a `.wisp` fixture file through the built binary and asserts its
/// stdout/stderr match exactly.
pub fn check_run(src_path: &Path, expected: Expected) -> Result<(), Box<dyn Error>> {
    let output = run_file(src_path)?;

    expected.assert_matches(&output)?;
    assert!(
        output.status.success(),
        "wisp exited with status {:?}",
        output.status.code()
    );

    Ok(())
}

/// Runs a `.wisp` fixture file and asserts the process exits non-zero
/// (a parse-error fixture).
pub fn check_parse_failure(src_path: &Path) -> Result<(), Box<dyn Error>> {
    let output = run_file(src_path)?;

    assert!(
        !output.status.success(),
        "wisp should have exited with a non-zero status on parse errors"
    );

    Ok(())
}
