use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

const SRC_PATH: &str = "./demos/builtins.wisp";
const EXPECTED: Expected = Expected {
    stdout: "5\n",
    stderr: "",
};

#[test]
fn append_then_len_on_an_array_element() -> Result<(), Box<dyn Error>> {
    check_run(Path::new(SRC_PATH), EXPECTED)
}
