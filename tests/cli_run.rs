// tests/cli_run.rs

mod common;
use crate::common::init_tracing;

use std::path::Path;

use tempfile::TempDir;

use workdeps::cli::CliArgs;
use workdeps::config::parse_project;
use workdeps::dag::{evaluate_all, DependencyGraph};
use workdeps::errors::WorkdepsError;
use workdeps::{format_reports, run};

const PROJECT: &str = r#"
[config]
window_start = "2024-06-03"
window_end = "2024-06-28"

[[work]]
id = 1
name = "Excavation"
plan_start = "2024-06-03"
plan_end = "2024-06-07"
actual_end = "2024-06-10"

[[work]]
id = 2
name = "Footings"
plan_start = "2024-06-10"
plan_end = "2024-06-14"
actual_start = "2024-06-10"

[[dependency]]
id = 1
work_id = 2
depends_on_work_id = 1
dependency_type = "FS"
lag_days = 2
"#;

fn project_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Workdeps.toml"), PROJECT).unwrap();
    dir
}

fn args(dir: &Path) -> CliArgs {
    CliArgs {
        project: dir.join("Workdeps.toml").to_string_lossy().into_owned(),
        work: None,
        out: Some(dir.join("out/arrows.svg").to_string_lossy().into_owned()),
        watch: false,
        log_level: None,
        dry_run: false,
    }
}

#[tokio::test]
async fn run_writes_the_overlay_file() {
    init_tracing();
    let dir = project_dir();

    run(args(dir.path())).await.unwrap();

    let svg = std::fs::read_to_string(dir.path().join("out/arrows.svg")).unwrap();
    assert!(svg.starts_with("<svg"));
    assert_eq!(svg.matches("<path data-dependency-id=\"1\"").count(), 1);
    assert!(svg.contains(">+2d</text>"));
}

#[tokio::test]
async fn dry_run_renders_nothing() {
    init_tracing();
    let dir = project_dir();

    run(CliArgs {
        dry_run: true,
        ..args(dir.path())
    })
    .await
    .unwrap();

    assert!(!dir.path().join("out/arrows.svg").exists());
}

#[tokio::test]
async fn unknown_work_filter_is_an_error() {
    init_tracing();
    let dir = project_dir();

    let result = run(CliArgs {
        work: Some(77),
        ..args(dir.path())
    })
    .await;

    match result {
        Err(WorkdepsError::WorkNotFound(id)) => assert_eq!(id, 77),
        other => panic!("Expected WorkNotFound, got: {:?}", other),
    }
    assert!(!dir.path().join("out/arrows.svg").exists());
}

#[tokio::test]
async fn missing_project_file_is_an_error() {
    init_tracing();
    let dir = tempfile::tempdir().unwrap();

    assert!(run(args(dir.path())).await.is_err());
}

#[test]
fn report_lists_bounds_and_violations() {
    let project = parse_project(PROJECT).unwrap();
    let graph = DependencyGraph::from_project(&project);
    let reports = evaluate_all(&graph, &project.date_infos());

    let text = format_reports(&project, &reports, None).unwrap();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines.len(), 3);
    assert!(lines[0].contains("Excavation"));
    assert!(lines[0].contains("min start -"));
    // Excavation ended 06-10, so with two days of lag Footings may start 06-13.
    assert!(lines[1].contains("Footings"));
    assert!(lines[1].contains("min start 2024-06-13"));
    assert!(lines[2].contains("actual_start 2024-06-10 is before the earliest allowed 2024-06-13"));
}

#[test]
fn report_filter_keeps_only_the_requested_work() {
    let project = parse_project(PROJECT).unwrap();
    let graph = DependencyGraph::from_project(&project);
    let reports = evaluate_all(&graph, &project.date_infos());

    let text = format_reports(&project, &reports, Some(1)).unwrap();
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("Excavation"));
    assert!(!text.contains("Footings"));

    assert!(matches!(
        format_reports(&project, &reports, Some(3)),
        Err(WorkdepsError::WorkNotFound(3))
    ));
}
