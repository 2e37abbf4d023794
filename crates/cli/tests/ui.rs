use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use expect_test::expect_file;

fn main() {
    let mut test_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    test_dir.push("tests/ui");

    // Iterate over each test file in the directory
    for entry in fs::read_dir(&test_dir).unwrap() {
        let entry = entry.unwrap();
        let path = entry.path();

        if path.extension().and_then(|e| e.to_str()) != Some("qark") {
            continue;
        }

        // Set up the command with arguments
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_glint"));
        cmd.arg("highlight").arg("-f").arg("html").arg(&path);

        // Run the command and capture the output
        let assert = cmd.assert();

        // Construct the expected output file paths
        let mut expected_output_path_stderr = path.clone();
        expected_output_path_stderr.set_extension("stderr");
        let mut expected_output_path_stdout = path.clone();
        expected_output_path_stdout.set_extension("stdout");
        let mut expected_output_path_exitcode = path.clone();
        expected_output_path_exitcode.set_extension("exitcode");

        // Read the expected output
        let output = assert.get_output();
        let stderr_str = std::str::from_utf8(&output.stderr).unwrap();
        let stdout_str = std::str::from_utf8(&output.stdout).unwrap();
        let exit_code_str = output.status.code().unwrap().to_string();

        expect_file![expected_output_path_stderr].assert_eq(stderr_str);
        expect_file![expected_output_path_stdout].assert_eq(stdout_str);
        expect_file![expected_output_path_exitcode].assert_eq(&exit_code_str);
    }
}
