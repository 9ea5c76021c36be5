use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

const SRC_PATH: &str = "./demos/closures.wisp";
const EXPECTED: Expected = Expected {
    stdout: "15\n",
    stderr: "",
};

#[test]
fn closure_captures_its_defining_frame() -> Result<(), Box<dyn Error>> {
    check_run(Path::new(SRC_PATH), EXPECTED)
}
