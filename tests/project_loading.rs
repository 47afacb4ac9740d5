mod common;
use crate::common::builders::{dependency, ProjectBuilder, WorkBuilder};
use crate::common::d;

use std::io::Write;
use std::path::Path;

use workdeps::config::{load_from_path, load_with_fs, parse_project};
use workdeps::constraint::DateField;
use workdeps::dag::{constraints_for, evaluate_all, index_dates, DependencyGraph};
use workdeps::fs::mock::MockFileSystem;
use workdeps::types::{DependencyType, ViewMode};

const PROJECT: &str = r#"
[config]
view_mode = "week"
cell_width = 56.0
timeline_left = 240.0

[grid]
row_height = 28.0
header_height = 48.0

[[work]]
id = 1
name = "Foundations"
plan_start = "2024-03-04"
plan_end = "2024-03-08"
actual_start = "2024-03-04"
actual_end = "2024-03-11T17:00:00"

[[work]]
id = 2
name = "Framing"
plan_start = "2024-03-11"
plan_end = "2024-03-22"
actual_start = "2024-03-11"

[[work]]
id = 3
plan_start = "2024-03-18"
plan_end = "2024-03-29"

[[dependency]]
id = 100
work_id = 2
depends_on_work_id = 1
dependency_type = "FS"
lag_days = 1

[[dependency]]
id = 101
work_id = 3
depends_on_work_id = 2
dependency_type = "ss"
"#;

#[test]
fn parses_sections_and_flattened_dates() {
    let project = parse_project(PROJECT).unwrap();

    assert_eq!(project.config.view_mode, ViewMode::Week);
    assert_eq!(project.config.cell_width, 56.0);
    assert_eq!(project.grid.row_height, 28.0);
    assert_eq!(project.work.len(), 3);

    let foundations = project.find_work(1).unwrap();
    assert_eq!(foundations.display_name(), "Foundations");
    assert_eq!(foundations.dates.plan_start.as_deref(), Some("2024-03-04"));
    assert_eq!(project.find_work(3).unwrap().display_name(), "work 3");

    let info = foundations.date_info();
    assert_eq!(info.actual_end_date, Some(d("2024-03-11")));

    assert_eq!(project.dependency[1].dependency_type, DependencyType::StartStart);
    assert_eq!(project.dependency[1].lag_days, 0);
}

#[test]
fn defaults_apply_when_sections_are_missing() {
    let project = parse_project("[[work]]\nid = 7\n").unwrap();

    assert_eq!(project.config.view_mode, ViewMode::Day);
    assert_eq!(project.config.cell_width, 40.0);
    assert_eq!(project.grid.row_height, 32.0);
    assert!(project.dependency.is_empty());
    assert_eq!(project.time_window(), None);
}

#[test]
fn time_window_spans_all_known_dates_unless_configured() {
    let project = parse_project(PROJECT).unwrap();
    assert_eq!(project.time_window(), Some((d("2024-03-04"), d("2024-03-29"))));

    let pinned = ProjectBuilder::new()
        .window("2024-03-01", "2024-03-15")
        .with_work(WorkBuilder::new(1).plan("2024-02-01", "2024-04-01").build())
        .build();
    assert_eq!(pinned.time_window(), Some((d("2024-03-01"), d("2024-03-15"))));
}

#[test]
fn loads_through_the_filesystem_abstraction() {
    let fs = MockFileSystem::new();
    fs.add_file("/site/Workdeps.toml", PROJECT);

    let project = load_with_fs(&fs, Path::new("/site/Workdeps.toml")).unwrap();
    assert_eq!(project.work.len(), 3);

    assert!(load_with_fs(&fs, Path::new("/site/missing.toml")).is_err());
}

#[test]
fn graph_indexes_records_both_ways() {
    let project = parse_project(PROJECT).unwrap();
    let graph = DependencyGraph::from_project(&project);

    assert_eq!(graph.len(), 2);
    let into_two: Vec<i64> = graph.dependencies_of(2).map(|r| r.id).collect();
    assert_eq!(into_two, vec![100]);
    let out_of_two: Vec<i64> = graph.dependents_of(2).map(|r| r.id).collect();
    assert_eq!(out_of_two, vec![101]);
    assert_eq!(graph.dependencies_of(1).count(), 0);
}

#[test]
fn constraints_join_predecessor_dates() {
    let project = parse_project(PROJECT).unwrap();
    let graph = DependencyGraph::from_project(&project);
    let dates = index_dates(project.date_infos());

    let constraints = constraints_for(&graph, 2, &dates);
    assert_eq!(constraints.len(), 1);
    assert_eq!(constraints[0].predecessor_work_id, 1);
    assert_eq!(constraints[0].lag_days, 1);
    assert_eq!(
        constraints[0].predecessor_dates.actual_end_date,
        Some(d("2024-03-11"))
    );
}

#[test]
fn evaluation_reports_bounds_and_violations() {
    let project = parse_project(PROJECT).unwrap();
    let graph = DependencyGraph::from_project(&project);
    let reports = evaluate_all(&graph, &project.date_infos());

    assert_eq!(reports.len(), 3);
    assert_eq!(reports[0].constraint_count, 0);
    assert_eq!(reports[0].bounds.min_start, None);

    // Foundations actually ended 03-11, so Framing may start 03-13 at the earliest.
    let framing = &reports[1];
    assert_eq!(framing.bounds.min_start, Some(d("2024-03-13")));
    assert_eq!(framing.bounds.min_end, Some(d("2024-03-11")));
    assert_eq!(framing.violations.len(), 1);
    assert_eq!(framing.violations[0].field, DateField::ActualStart);
    assert_eq!(framing.violations[0].actual, d("2024-03-11"));

    let third = &reports[2];
    assert_eq!(third.bounds.min_start, Some(d("2024-03-11")));
    assert!(third.violations.is_empty(), "planned dates are never reported");
}

#[test]
fn missing_predecessor_contributes_no_bound() {
    let project = ProjectBuilder::new()
        .with_work(WorkBuilder::new(1).plan("2024-01-01", "2024-01-05").build())
        .with_dependency(dependency(1, 99, 1, DependencyType::FinishStart, 3))
        .build();
    let graph = DependencyGraph::from_project(&project);
    let reports = evaluate_all(&graph, &project.date_infos());

    assert_eq!(reports[0].constraint_count, 1);
    assert_eq!(reports[0].bounds.min_start, None);
}

#[test]
fn raw_load_skips_semantic_checks() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "[config]\ncell_width = -1.0\n").unwrap();

    let raw = load_from_path(file.path()).unwrap();
    assert!(raw.work.is_empty());
    assert_eq!(raw.config.cell_width, -1.0);
}

#[test]
fn loosely_formatted_dates_do_not_stretch_the_window() {
    let project = ProjectBuilder::new()
        .with_work(WorkBuilder::new(1).plan("2024-01-08", "2024-01-12").build())
        .with_work(WorkBuilder::new(2).plan("24-01-05", "2024-1-20").build())
        .build();

    assert_eq!(
        project.find_work(2).unwrap().dates.malformed_fields(),
        vec!["plan_start", "plan_end"]
    );
    assert_eq!(project.time_window(), Some((d("2024-01-08"), d("2024-01-12"))));
}
