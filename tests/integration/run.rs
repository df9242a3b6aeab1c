use crate::common::{
    SAMPLE_CATALOG, make_temp_dir, normalized_lines, read_log_contents, run_in, write_catalog,
    write_school_config,
};

fn prepared_dir(prefix: &str) -> std::path::PathBuf {
    let dir = make_temp_dir(prefix);
    write_school_config(&dir);
    write_catalog(&dir, SAMPLE_CATALOG);
    dir
}

#[test]
fn default_run_prints_report_and_summary() {
    let dir = prepared_dir("report");
    let output = run_in(&dir, &[]);
    assert!(output.status.success(), "run should succeed");

    let lines = normalized_lines(&output.stdout);
    assert!(lines.iter().any(|l| l == "SELECTED"));
    assert!(lines.iter().any(|l| l == "PLACEMENTS"));
    assert!(lines.iter().any(|l| l == "REJECTED"));
    assert!(
        lines
            .iter()
            .any(|l| l.contains("Microeconomics") && l.contains("section 2"))
    );
    assert_eq!(
        lines.last().map(String::as_str),
        Some("Schedule generated with 2 courses (total importance: 1.40)")
    );

    let log = read_log_contents(&dir).expect("session log should exist");
    assert!(log.contains("'Chemistry' (recurring, importance 0.90) placed via period 1st"));
    assert!(log.contains("'Yearbook' (recurring, importance 0.30) rejected"));
    assert!(log.contains("Finished scheduling."));
}

#[test]
fn json_flag_emits_machine_readable_result() {
    let dir = prepared_dir("json");
    let output = run_in(&dir, &["--json"]);
    assert!(output.status.success(), "json run should succeed");

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let names: Vec<&str> = value["selection"]
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["name"].as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["Chemistry", "Microeconomics"]);
    assert_eq!(value["included"]["1"], false);
    assert_eq!(value["events"].as_array().unwrap().len(), 6);
}

#[test]
fn importance_override_changes_the_winner() {
    let dir = prepared_dir("override");
    let output = run_in(&dir, &["--json", "--importance", "Yearbook=1.0"]);
    assert!(output.status.success(), "override run should succeed");

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["selection"][0]["name"], "Yearbook");
    assert_eq!(value["included"]["0"], false);

    let catalog = std::fs::read_to_string(dir.join("catalog.json")).unwrap();
    assert!(catalog.contains(r#""importance": 0.3"#));
}

#[test]
fn unknown_override_name_is_warned_about() {
    let dir = prepared_dir("unknown-override");
    let output = run_in(&dir, &["--importance", "Ceramics=0.8"]);
    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Importance override for unknown item 'Ceramics' ignored."));
}

#[test]
fn missing_config_fails_with_context() {
    let dir = make_temp_dir("no-config");
    write_catalog(&dir, SAMPLE_CATALOG);
    let output = run_in(&dir, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("could not load configuration"));
    assert!(stderr.contains("not found"));
}

#[test]
fn bad_arguments_print_usage() {
    let dir = prepared_dir("bad-args");
    let output = run_in(&dir, &["--importance", "Yearbook"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Expected NAME=VALUE"));
    assert!(stderr.contains("usage: coursefit"));
}

#[test]
fn malformed_section_time_aborts_the_run() {
    let dir = make_temp_dir("bad-time");
    write_school_config(&dir);
    write_catalog(
        &dir,
        r#"{ "items": [ { "name": "Film Studies", "kind": "sectioned",
              "sections": [ { "days": ["Fri"], "start": "3:00 PM", "end": "4:7O PM" } ] } ] }"#,
    );
    let output = run_in(&dir, &[]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("scheduling run aborted"));
    assert!(stderr.contains("Invalid time format: '4:7O PM'"));
    assert!(output.stdout.is_empty() || !String::from_utf8_lossy(&output.stdout).contains("SELECTED"));
}
