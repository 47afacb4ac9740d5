mod common;
use crate::common::d;

use workdeps::constraint::{
    check_work, compute_min_end_date, compute_min_start_date, DateField, DependencyConstraint,
    RawWorkDates, WorkDateInfo,
};
use workdeps::types::DependencyType;

fn dates(
    plan_start: Option<&str>,
    plan_end: Option<&str>,
    actual_start: Option<&str>,
    actual_end: Option<&str>,
) -> WorkDateInfo {
    WorkDateInfo::from_raw(
        1,
        &RawWorkDates {
            plan_start: plan_start.map(str::to_string),
            plan_end: plan_end.map(str::to_string),
            actual_start: actual_start.map(str::to_string),
            actual_end: actual_end.map(str::to_string),
        },
    )
}

fn constraint(kind: DependencyType, lag_days: i32, predecessor: WorkDateInfo) -> DependencyConstraint {
    DependencyConstraint {
        dependency_type: kind,
        lag_days,
        predecessor_work_id: predecessor.work_id,
        predecessor_dates: predecessor,
    }
}

#[test]
fn empty_constraint_set_has_no_bounds() {
    assert_eq!(compute_min_start_date(&[]), None);
    assert_eq!(compute_min_end_date(&[], None), None);
}

#[test]
fn finish_start_starts_the_day_after_predecessor_ends() {
    let pred = dates(None, Some("2024-01-08"), None, Some("2024-01-10"));
    let c = constraint(DependencyType::FinishStart, 0, pred);

    assert_eq!(compute_min_start_date(&[c]), Some(d("2024-01-11")));
}

#[test]
fn start_start_adds_lag_to_predecessor_start() {
    let pred = dates(Some("2024-01-20"), None, Some("2024-02-01"), None);
    let c = constraint(DependencyType::StartStart, 2, pred);

    assert_eq!(compute_min_start_date(&[c]), Some(d("2024-02-03")));
}

#[test]
fn finish_finish_falls_back_to_planned_end_with_negative_lag() {
    let pred = dates(None, Some("2024-03-05"), None, None);
    let c = constraint(DependencyType::FinishFinish, -1, pred);

    assert_eq!(compute_min_end_date(&[c], None), Some(d("2024-03-05")));
}

#[test]
fn start_finish_bounds_the_end_by_predecessor_start() {
    let pred = dates(Some("2024-05-01"), Some("2024-05-10"), None, None);
    let c = constraint(DependencyType::StartFinish, 3, pred);

    assert_eq!(compute_min_end_date(&[c], None), Some(d("2024-05-04")));
    assert_eq!(compute_min_start_date(&[c]), None);
}

#[test]
fn latest_candidate_wins_across_predecessors() {
    let first = constraint(
        DependencyType::FinishStart,
        0,
        dates(None, Some("2024-01-10"), None, None),
    );
    let second = constraint(
        DependencyType::FinishStart,
        0,
        dates(None, Some("2024-01-14"), None, None),
    );

    assert_eq!(compute_min_start_date(&[first, second]), Some(d("2024-01-15")));
    assert_eq!(compute_min_start_date(&[second, first]), Some(d("2024-01-15")));
}

#[test]
fn start_kinds_never_constrain_the_end_and_vice_versa() {
    let pred = dates(Some("2024-01-01"), Some("2024-01-05"), None, None);

    for kind in DependencyType::ALL {
        let c = constraint(kind, 0, pred);
        if kind.constrains_start() {
            assert!(c.start_candidate().is_some(), "{kind} should bound start");
            assert!(c.end_candidate().is_none(), "{kind} must not bound end");
        } else {
            assert!(c.start_candidate().is_none(), "{kind} must not bound start");
            assert!(c.end_candidate().is_some(), "{kind} should bound end");
        }
    }
}

#[test]
fn actual_start_overrides_an_earlier_dependency_floor() {
    // FF on a predecessor ending 2024-03-31 → dep floor 2024-04-01.
    let c = constraint(
        DependencyType::FinishFinish,
        0,
        dates(None, Some("2024-03-31"), None, None),
    );

    assert_eq!(
        compute_min_end_date(&[c], Some(d("2024-04-10"))),
        Some(d("2024-04-10"))
    );
    assert_eq!(
        compute_min_end_date(&[c], Some(d("2024-03-20"))),
        Some(d("2024-04-01"))
    );
}

#[test]
fn min_end_uses_actual_start_alone_when_no_dependency_applies() {
    let c = constraint(
        DependencyType::FinishStart,
        0,
        dates(None, Some("2024-03-31"), None, None),
    );

    assert_eq!(
        compute_min_end_date(&[c], Some(d("2024-02-02"))),
        Some(d("2024-02-02"))
    );
}

#[test]
fn malformed_predecessor_dates_contribute_nothing() {
    let pred = dates(None, Some("not-a-date"), None, Some("2024-13-45"));
    let c = constraint(DependencyType::FinishStart, 0, pred);

    assert_eq!(compute_min_start_date(&[c]), None);
}

#[test]
fn malformed_actual_falls_back_to_planned() {
    let pred = dates(None, Some("2024-06-01"), None, Some("garbage"));
    let c = constraint(DependencyType::FinishStart, 1, pred);

    assert_eq!(compute_min_start_date(&[c]), Some(d("2024-06-03")));
}

#[test]
fn date_time_strings_are_reduced_to_their_day() {
    let pred = dates(None, Some("2024-01-10T17:45:00"), None, None);
    let c = constraint(DependencyType::FinishStart, 0, pred);

    assert_eq!(compute_min_start_date(&[c]), Some(d("2024-01-11")));
}

#[test]
fn check_work_reports_actual_dates_before_their_bounds() {
    let pred = dates(None, Some("2024-01-10"), None, None);
    let c = constraint(DependencyType::FinishStart, 0, pred);

    let mut work = dates(Some("2024-01-11"), Some("2024-01-20"), Some("2024-01-09"), None);
    work.work_id = 2;

    let violations = check_work(&work, &[c]);
    assert_eq!(violations.len(), 1);
    assert_eq!(violations[0].work_id, 2);
    assert_eq!(violations[0].field, DateField::ActualStart);
    assert_eq!(violations[0].actual, d("2024-01-09"));
    assert_eq!(violations[0].min_allowed, d("2024-01-11"));
}

#[test]
fn check_work_ignores_planned_dates_and_satisfied_bounds() {
    let pred = dates(None, Some("2024-01-10"), None, None);
    let c = constraint(DependencyType::FinishStart, 0, pred);

    // Planned start before the bound is not a violation.
    let planned_only = dates(Some("2024-01-05"), Some("2024-01-06"), None, None);
    assert!(check_work(&planned_only, &[c]).is_empty());

    let on_time = dates(None, None, Some("2024-01-11"), Some("2024-01-12"));
    assert!(check_work(&on_time, &[c]).is_empty());
}
