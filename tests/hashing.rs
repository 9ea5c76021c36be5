use std::{error::Error, path::Path};

use test_utils::{check_run, Expected};

const SRC_PATH: &str = "./demos/hashing.wisp";
const EXPECTED: Expected = Expected {
    stdout: "30\n",
    stderr: "",
};

#[test]
fn hash_literal_indexed_by_variable_key() -> Result<(), Box<dyn Error>> {
    check_run(Path::new(SRC_PATH), EXPECTED)
}
