use std::{
    fs::{create_dir, read_to_string, write},
    path::Path,
};

use assert_cmd::Command;

fn metric(n: u64, k: u64, cores: u64, layers: &[(f64, f64)]) -> String {
    let layers = layers
        .iter()
        .map(|(g, p)| {
            format!(r#"{{"duration": {{"generating": {{"total": {g}}}, "pruning": {{"total": {p}}}}}}}"#)
        })
        .collect::<Vec<_>>()
        .join(",");
    format!(r#"{{"n": {n}, "k": {k}, "cores": {cores}, "duration": 1.0, "layers": [{layers}]}}"#)
}

fn results_dir(root: &Path, files: &[(&str, String)]) {
    let dir = root.join("results");
    create_dir(&dir).unwrap();
    for (name, content) in files {
        write(dir.join(name), content).unwrap();
    }
}

fn cmd(root: &Path) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_bench-compare"));
    cmd.current_dir(root);
    cmd
}

#[test]
fn test_cli_exits_with_success_on_help() {
    let dir = tempfile::tempdir().unwrap();
    cmd(dir.path()).arg("--help").assert().success();
}

#[test]
fn test_cli_ls_lists_results() {
    let dir = tempfile::tempdir().unwrap();
    results_dir(
        dir.path(),
        &[
            ("metrics-cpp-4.json", metric(4, 2, 3, &[(1.0, 0.5), (2.0, 1.0)])),
            ("metrics-prolog-4.json", metric(4, 2, 3, &[(2.0, 1.0)])),
        ],
    );

    let output = cmd(dir.path()).arg("ls").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("prolog: 1 results"));
    assert!(stdout.contains("cpp: 1 results"));
    assert!(stdout.contains("N4 K2 4 threads 2 layers 4.5000s"));
}

#[test]
fn test_cli_plot_without_results_succeeds() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(dir.path()).output().unwrap();
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_plot_reports_unmatched_key() {
    let dir = tempfile::tempdir().unwrap();
    results_dir(
        dir.path(),
        &[
            ("metrics-cpp-4.json", metric(4, 2, 3, &[(1.0, 0.5)])),
            ("metrics-prolog-4.json", metric(4, 3, 3, &[(1.0, 0.5)])),
        ],
    );

    let output = cmd(dir.path()).arg("plot").output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("No cpp result for N4 K3"));
}

#[test]
fn test_cli_plot_reports_layer_mismatch() {
    let dir = tempfile::tempdir().unwrap();
    results_dir(
        dir.path(),
        &[
            ("metrics-cpp-4.json", metric(4, 2, 3, &[(1.0, 0.5); 2])),
            ("metrics-prolog-4.json", metric(4, 2, 3, &[(1.0, 0.5); 3])),
        ],
    );

    let output = cmd(dir.path()).args(["--pairing", "index"]).output().unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("baseline has 3 layers, comparison has 2"));
}

#[test]
fn test_cli_config_selects_summary_plot() {
    let dir = tempfile::tempdir().unwrap();
    results_dir(
        dir.path(),
        &[
            ("metrics-cpp-4.json", metric(4, 2, 3, &[(1.0, 0.5)])),
            ("metrics-prolog-4.json", metric(4, 2, 3, &[(2.0, 1.0)])),
        ],
    );
    write(
        dir.path().join("compare.yaml"),
        "output_dir: out\nplots:\n  - type: DurationSummary\n",
    )
    .unwrap();

    cmd(dir.path()).assert().success();
    let csv = read_to_string(dir.path().join("out").join("comparison-summary.csv")).unwrap();
    assert!(csv.contains("4,2,4,1,3.0,1.5,2.0"));
}

#[test]
fn test_cli_config_error_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    let output = cmd(dir.path())
        .args(["--config", "absent.yaml", "ls"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let log = read_to_string(dir.path().join("log.log")).unwrap();
    assert!(log.contains("absent.yaml"));
}

#[test]
fn test_cli_ls_error_is_logged() {
    let dir = tempfile::tempdir().unwrap();
    results_dir(dir.path(), &[("metrics-prolog-4.json", "{".to_owned())]);

    let output = cmd(dir.path()).arg("ls").output().unwrap();
    assert!(!output.status.success());
    let log = read_to_string(dir.path().join("log.log")).unwrap();
    assert!(log.contains("metrics-prolog-4.json"));
}
