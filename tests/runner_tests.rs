use std::fs::{self, File};
use std::io::Write;

use tempfile::TempDir;

use parklot::{run_script, OutputFormat};

/// Write a command script to a temp file and run it the way the binary does:
/// read the whole file, then feed it through the script runner.
fn run_file(commands: &str, format: OutputFormat) -> String {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let path = dir.path().join("commands.txt");

    let mut file = File::create(&path).expect("Failed to create command file");
    file.write_all(commands.as_bytes())
        .expect("Failed to write command file");
    drop(file);

    let script = fs::read_to_string(&path).expect("Failed to read command file");
    let mut out = Vec::new();
    run_script(&script, format, &mut out).expect("Runner failed");
    String::from_utf8(out).expect("Output was not UTF-8")
}

#[test]
fn test_file_driven_transcript() {
    let commands = "\
create_parking_lot 6
park KA-01-HH-1234
park KA-01-HH-9999
park KA-01-BB-0001
status
leave KA-01-HH-9999 2
status
";
    let expected = "\
Allocated slot number: 1
Allocated slot number: 2
Allocated slot number: 3
Slot No. Registration No.
1 KA-01-HH-1234
2 KA-01-HH-9999
3 KA-01-BB-0001
Registration number KA-01-HH-9999 with Slot Number 2 is free with Charge $10
Slot No. Registration No.
1 KA-01-HH-1234
3 KA-01-BB-0001
";
    assert_eq!(run_file(commands, OutputFormat::Text), expected);
}

#[test]
fn test_file_with_blank_lines_and_garbage() {
    let commands = "\

create_parking_lot 1

unpark KA-01
park KA-01
park KA-02
leave KA-03 1
";
    let expected = "\
Unknown command: unpark
Allocated slot number: 1
Sorry, parking lot is full
Registration number KA-03 not found
";
    assert_eq!(run_file(commands, OutputFormat::Text), expected);
}

#[test]
fn test_json_mode_emits_only_json_lines() {
    let commands = "\
park
create_parking_lot nope
create_parking_lot 1
wash KA-01
park KA-01
";
    let output = run_file(commands, OutputFormat::Json);

    // Rejected lines are events too: every output line must parse
    for line in output.lines() {
        let value: serde_json::Value = serde_json::from_str(line)
            .unwrap_or_else(|_| panic!("non-JSON line in JSON mode: {:?}", line));
        assert!(value.get("event").is_some());
    }

    let lines: Vec<&str> = output.lines().collect();
    assert_eq!(
        lines[0],
        r#"{"event":"rejected","message":"Invalid park command"}"#
    );
    assert_eq!(
        lines[1],
        r#"{"event":"rejected","message":"Invalid capacity"}"#
    );
    assert_eq!(
        lines[3],
        r#"{"event":"rejected","message":"Unknown command: wash"}"#
    );
}

#[test]
fn test_json_transcript() {
    let commands = "\
create_parking_lot 1
park KA-01
leave KA-01 3
";
    let expected = "\
{\"event\":\"created\",\"capacity\":1}
{\"event\":\"allocated\",\"slot\":1}
{\"event\":\"left\",\"registration\":\"KA-01\",\"slot\":1,\"charge\":20}
";
    assert_eq!(run_file(commands, OutputFormat::Json), expected);
}
