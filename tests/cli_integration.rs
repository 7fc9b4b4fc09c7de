// CLI integration tests for operations, marshal, and decode flows.
use std::io::Write;
use std::process::{Command, Stdio};

use serde_json::Value;

fn cmd() -> Command {
    let exe = env!("CARGO_BIN_EXE_switchboard");
    let mut command = Command::new(exe);
    command.env_remove("SWITCHBOARD_REGION");
    command.env_remove("SWITCHBOARD_ENDPOINT");
    command.env_remove("RUST_LOG");
    command
}

fn parse_json(value: &str) -> Value {
    serde_json::from_str(value).expect("valid json")
}

fn parse_json_line(output: &[u8]) -> Value {
    let text = String::from_utf8_lossy(output);
    let line = text.lines().next().expect("json line");
    parse_json(line)
}

fn write_input(dir: &tempfile::TempDir, name: &str, contents: &str) -> String {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).expect("write input");
    path.to_str().expect("utf8 path").to_string()
}

#[test]
fn operations_lists_every_operation() {
    let output = cmd().arg("operations").output().expect("operations");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    let lines: Vec<Value> = text.lines().map(parse_json).collect();
    assert_eq!(lines.len(), 30);
    let list_queues = lines
        .iter()
        .find(|line| line["name"] == "ListQueues")
        .expect("ListQueues");
    assert_eq!(list_queues["method"], "GET");
    assert_eq!(list_queues["uri"], "/queues-summary/{InstanceId}");
    assert!(list_queues.get("fields").is_none());
}

#[test]
fn operations_fields_include_locations_and_shapes() {
    let output = cmd()
        .args(["operations", "--fields"])
        .output()
        .expect("operations");
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).expect("utf8");
    let untag = text
        .lines()
        .map(parse_json)
        .find(|line| line["name"] == "UntagResource")
        .expect("UntagResource");
    let fields = untag["fields"].as_array().expect("fields");
    assert_eq!(fields[0]["name"], "resourceArn");
    assert_eq!(fields[0]["location"], "path");
    assert_eq!(fields[1]["shape"], "list<string>");
}

#[test]
fn marshal_from_file_prints_request() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        &temp,
        "request.json",
        r#"{"InstanceId":"i1","UserId":"u-1","HierarchyGroupId":"hg-7","Ignored":1}"#,
    );
    let output = cmd()
        .args([
            "marshal",
            "UpdateUserHierarchy",
            "--input",
            &input,
            "--endpoint",
            "http://localhost:9000",
        ])
        .output()
        .expect("marshal");
    assert!(output.status.success());
    let value = parse_json_line(&output.stdout);
    assert_eq!(value["method"], "POST");
    assert_eq!(value["path"], "/users/i1/u-1/hierarchy");
    assert_eq!(value["url"], "http://localhost:9000/users/i1/u-1/hierarchy");
    assert_eq!(value["body"]["HierarchyGroupId"], "hg-7");
    assert!(value["body"].get("InstanceId").is_none());
    assert_eq!(value["headers"]["Content-Type"], "application/x-amz-json-1.1");
}

#[test]
fn marshal_reads_stdin_and_uses_region_endpoint() {
    let mut child = cmd()
        .args(["marshal", "ListQueues", "--region", "eu-central-1"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(br#"{"InstanceId":"i1","queueTypes":["STANDARD"]}"#)
        .expect("write stdin");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    let value = parse_json_line(&output.stdout);
    assert_eq!(
        value["url"],
        "https://connect.eu-central-1.amazonaws.com/queues-summary/i1?queueTypes=STANDARD"
    );
    assert_eq!(value["body"], Value::Null);
}

#[test]
fn marshal_non_object_input_is_invalid_argument() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = write_input(&temp, "null.json", "null");
    let output = cmd()
        .args(["marshal", "StopContact", "--input", &input])
        .output()
        .expect("marshal");
    assert_eq!(output.status.code(), Some(3));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "InvalidArgument");
    assert_eq!(
        err["error"]["message"],
        "Invalid argument passed to marshall(StopContactRequest)"
    );
}

#[test]
fn decode_drops_unknown_keys() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = write_input(
        &temp,
        "response.json",
        r#"{"Attributes":{"lang":"en"},"Trace":{"x":1}}"#,
    );
    let output = cmd()
        .args(["decode", "GetContactAttributes", "--input", &input])
        .output()
        .expect("decode");
    assert!(output.status.success());
    let value = parse_json_line(&output.stdout);
    assert_eq!(value, parse_json(r#"{"Attributes":{"lang":"en"}}"#));
}

#[test]
fn unknown_operation_is_usage_error() {
    let output = cmd()
        .args(["marshal", "ListWidgets", "--input", "-"])
        .stdin(Stdio::null())
        .output()
        .expect("marshal");
    assert_eq!(output.status.code(), Some(2));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Usage");
    assert!(err["error"]["hint"].as_str().unwrap().contains("operations"));
}

#[test]
fn malformed_input_reports_parse_hint() {
    let temp = tempfile::tempdir().expect("tempdir");
    let input = write_input(&temp, "bad.json", r#"{"InstanceId":"#);
    let output = cmd()
        .args(["marshal", "ListUsers", "--input", &input])
        .output()
        .expect("marshal");
    assert_eq!(output.status.code(), Some(1));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Client");
    assert!(
        err["error"]["hint"]
            .as_str()
            .unwrap()
            .contains("context: json.reader")
    );
}

#[test]
fn missing_input_file_is_io_error() {
    let output = cmd()
        .args(["decode", "DescribeUser", "--input", "/nonexistent/response.json"])
        .output()
        .expect("decode");
    assert_eq!(output.status.code(), Some(8));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Io");
}

#[test]
fn deeply_nested_body_fails_cleanly() {
    let temp = tempfile::tempdir().expect("tempdir");
    let depth = 100_000;
    let body = format!("{}{}", "[".repeat(depth), "]".repeat(depth));
    let input = write_input(&temp, "deep.json", &body);
    let output = cmd()
        .args(["decode", "ListQueues", "--input", &input])
        .output()
        .expect("decode");
    assert_eq!(output.status.code(), Some(1));
    let err = parse_json_line(&output.stderr);
    assert_eq!(err["error"]["kind"], "Client");
    assert!(
        err["error"]["hint"]
            .as_str()
            .unwrap()
            .contains("depth-limit")
    );
}
