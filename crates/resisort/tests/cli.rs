use insta::assert_snapshot;
use resisort_test_utils::sandbox::Sandbox;

const E_SERIES_TXT: &str = r#"4k7
10R
1K
220
470Ω
2.2k
100
10k
"#;

const MIXED_NOTATION_TXT: &str = "2M2\n4k7\n\n1K2\n10\n";

#[test]
fn test_resistors_per_container_from_file() {
    let output = Sandbox::new()
        .write("values.txt", E_SERIES_TXT)
        .snapshot_run(
            "resisort",
            ["--resistors-per-container", "3", "--file", "values.txt"],
        );
    assert_snapshot!(output, @r"
    Exit Code: 0

    --- STDOUT ---
    In order to sort 8 resistors you can use 3 container(s) with up to 3 resistor(s) each!
      1st Container:        10Ω -       220Ω
      2nd Container:       470Ω -      2.2KΩ
      3rd Container:      4.7KΩ -       10KΩ

    --- STDERR ---
    ");
}

#[test]
fn test_container_count_from_stdin() {
    let output =
        Sandbox::new().snapshot_run_with_stdin("resisort", ["--containers", "2"], MIXED_NOTATION_TXT);
    assert_snapshot!(output, @r"
    Exit Code: 0

    --- STDOUT ---
    In order to sort 4 resistors you can use 2 container(s) with up to 2 resistor(s) each!
      1st Container:        10Ω -      1.2KΩ
      2nd Container:      4.7KΩ -      2.2MΩ

    --- STDERR ---
    ");
}

#[test]
fn test_dash_reads_stdin() {
    let sb = Sandbox::new();
    let from_dash = sb
        .run("resisort", ["-c", "2", "--file", "-"], Some(MIXED_NOTATION_TXT))
        .unwrap();
    let from_stdin = sb
        .run("resisort", ["-c", "2"], Some(MIXED_NOTATION_TXT))
        .unwrap();
    assert_eq!(from_dash, from_stdin);
}

#[test]
fn test_more_containers_than_resistors() {
    let output = Sandbox::new().snapshot_run_with_stdin(
        "resisort",
        ["--containers", "10"],
        "1M\n330\n100R\n",
    );
    assert_snapshot!(output, @r"
    Exit Code: 0

    --- STDOUT ---
    In order to sort 3 resistors you can use 3 container(s) with up to 1 resistor(s) each!
      1st Container:       100Ω -       100Ω
      2nd Container:       330Ω -       330Ω
      3rd Container:        1MΩ -        1MΩ

    --- STDERR ---
    ");
}

#[test]
fn test_invalid_value_aborts() {
    let output =
        Sandbox::new().snapshot_run_with_stdin("resisort", ["-r", "2"], "10\n---\n4k7\n");
    assert_snapshot!(output, @r"
    Exit Code: 1

    --- STDOUT ---

    --- STDERR ---
    Error: Failed to read resistors from stdin
      Invalid value on line 2
      Invalid resistor value '---': no digits found
    ");
}

#[test]
fn test_empty_input() {
    let output = Sandbox::new().snapshot_run_with_stdin("resisort", ["-r", "2"], "\n\n");
    assert_snapshot!(output, @r"
    Exit Code: 1

    --- STDOUT ---

    --- STDERR ---
    Error: No resistors to sort
    ");
}

#[test]
#[cfg(unix)]
fn test_missing_file() {
    let output = Sandbox::new().snapshot_run("resisort", ["-r", "2", "--file", "missing.txt"]);
    assert_snapshot!(output, @r"
    Exit Code: 1

    --- STDOUT ---

    --- STDERR ---
    Error: Could not open file missing.txt
      No such file or directory (os error 2)
    ");
}

#[test]
fn test_sizing_option_required() {
    let sb = Sandbox::new();

    let output = sb.snapshot_run("resisort", ["--file", "values.txt"]);
    assert!(output.starts_with("Exit Code: 2"), "{output}");
    assert!(output.contains("--resistors-per-container"), "{output}");

    let output = sb.snapshot_run("resisort", ["-r", "2", "-c", "2"]);
    assert!(output.starts_with("Exit Code: 2"), "{output}");
    assert!(output.contains("cannot be used with"), "{output}");
}

#[test]
fn test_json_output() {
    let stdout = Sandbox::new()
        .write("values.txt", E_SERIES_TXT)
        .run(
            "resisort",
            ["-r", "3", "-f", "values.txt", "--format", "json"],
            None,
        )
        .unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(
        json,
        serde_json::json!({
            "resistor_count": 8,
            "container_count": 3,
            "resistors_per_container": 3,
            "containers": [
                { "lower_bound": 10, "upper_bound": 220, "lower": "10Ω", "upper": "220Ω" },
                { "lower_bound": 470, "upper_bound": 2200, "lower": "470Ω", "upper": "2.2KΩ" },
                { "lower_bound": 4700, "upper_bound": 10000, "lower": "4.7KΩ", "upper": "10KΩ" },
            ],
        })
    );
}

#[test]
fn test_table_output() {
    let stdout = Sandbox::new()
        .run("resisort", ["-c", "2", "--format", "table"], Some(MIXED_NOTATION_TXT))
        .unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert!(lines[0].starts_with("In order to sort 4 resistors"), "{stdout}");
    assert_eq!(lines[2], "│ Container ┆ Lower ┆ Upper ┆ Resistors │", "{stdout}");
    assert_eq!(lines[4], "│ 1st       ┆   10Ω ┆ 1.2KΩ ┆         2 │", "{stdout}");
}

#[test]
fn test_debug_logging_goes_to_stderr() {
    let sb = Sandbox::new();
    let output = sb.snapshot_run_with_stdin("resisort", ["-d", "-c", "1"], "4k7\n10\n");
    let (stdout, stderr) = output
        .split_once("--- STDERR ---")
        .expect("snapshot has a stderr section");
    assert!(stdout.contains("1st Container:        10Ω -      4.7KΩ"), "{output}");
    assert!(stderr.contains("Read 2 resistors from stdin"), "{output}");
    assert!(!stdout.contains("DEBUG"), "{output}");
}
