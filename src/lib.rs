// src/lib.rs

pub mod cli;
pub mod config;
pub mod constraint;
pub mod dag;
pub mod engine;
pub mod errors;
pub mod fs;
pub mod layout;
pub mod logging;
pub mod output;
pub mod types;
pub mod watch;

use std::fmt::Write as _;
use std::path::PathBuf;
use std::sync::Arc;

use chrono::NaiveDate;
use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::config::loader::parse_project;
use crate::config::model::ProjectFile;
use crate::dag::{evaluate_all, DependencyGraph, WorkReport};
use crate::engine::{LayoutCore, LayoutEvent, LayoutOptions, Runtime};
use crate::errors::{Result, WorkdepsError};
use crate::fs::{FileSystem, RealFileSystem};
use crate::output::{FileOverlaySink, OverlaySink, StdoutOverlaySink};
use crate::types::WorkId;
use crate::watch::ContentTracker;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - project loading
/// - constraint evaluation report
/// - layout core / runtime / overlay sink
/// - (optional) project file watcher
/// - Ctrl-C handling
pub async fn run(args: CliArgs) -> Result<()> {
    let fs: Arc<dyn FileSystem> = Arc::new(RealFileSystem);
    let project_path = PathBuf::from(&args.project);

    let contents = fs.read(&project_path)?;
    let project = parse_project(&String::from_utf8_lossy(&contents))?;

    if args.dry_run {
        print_dry_run(&project);
        return Ok(());
    }

    let graph = DependencyGraph::from_project(&project);
    let reports = evaluate_all(&graph, &project.date_infos());
    print_reports(&project, &reports, args.work)?;

    let options = LayoutOptions {
        exit_after_pass: !args.watch,
    };

    match args.out.as_ref() {
        Some(out) => {
            let sink = FileOverlaySink::new(Arc::clone(&fs), out);
            run_layout(args.watch, fs, project_path, &contents, project, options, sink).await
        }
        None => {
            run_layout(
                args.watch,
                fs,
                project_path,
                &contents,
                project,
                options,
                StdoutOverlaySink,
            )
            .await
        }
    }
}

async fn run_layout<S: OverlaySink>(
    watch: bool,
    fs: Arc<dyn FileSystem>,
    project_path: PathBuf,
    loaded_contents: &[u8],
    project: ProjectFile,
    options: LayoutOptions,
    sink: S,
) -> Result<()> {
    let (rt_tx, rt_rx) = mpsc::channel::<LayoutEvent>(64);

    // Optional project watcher (only with --watch).
    let _watcher_handle = if watch {
        let tracker = ContentTracker::with_initial(loaded_contents);
        Some(crate::watch::spawn_project_watcher(
            fs,
            project_path,
            tracker,
            rt_tx.clone(),
        )?)
    } else {
        None
    };

    // Ctrl-C → graceful shutdown.
    {
        let tx = rt_tx.clone();
        tokio::spawn(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                eprintln!("failed to listen for Ctrl+C: {e}");
                return;
            }
            let _ = tx.send(LayoutEvent::ShutdownRequested).await;
        });
    }

    let core = LayoutCore::from_project(&project, options);

    // Seed the first pass with the project as loaded.
    rt_tx
        .send(LayoutEvent::ProjectReloaded(Box::new(project)))
        .await
        .map_err(|e| WorkdepsError::Other(anyhow::anyhow!("seeding layout runtime: {e}")))?;

    let runtime = Runtime::new(core, rt_rx, sink);
    let core = runtime.run().await?;
    debug!(rows = core.positions().len(), "final layout");
    Ok(())
}

/// Print each work's earliest permissible actual dates and any violations.
fn print_reports(
    project: &ProjectFile,
    reports: &[WorkReport],
    only: Option<WorkId>,
) -> Result<()> {
    eprint!("{}", format_reports(project, reports, only)?);
    info!(works = reports.len(), "constraint evaluation complete");
    Ok(())
}

/// One line per work with its minimum dates, followed by its violations.
///
/// `only` restricts the listing to a single work, which must exist.
pub fn format_reports(
    project: &ProjectFile,
    reports: &[WorkReport],
    only: Option<WorkId>,
) -> Result<String> {
    if let Some(id) = only {
        if project.find_work(id).is_none() {
            return Err(WorkdepsError::WorkNotFound(id));
        }
    }

    let fmt_date = |d: Option<NaiveDate>| d.map_or_else(|| "-".to_string(), |d| d.to_string());
    let mut out = String::new();

    for report in reports
        .iter()
        .filter(|r| only.is_none_or(|id| id == r.work_id))
    {
        let name = project
            .find_work(report.work_id)
            .map(|w| w.display_name())
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "{:>6}  {:<24} min start {:<10}  min end {:<10}  ({} dependencies)",
            report.work_id,
            name,
            fmt_date(report.bounds.min_start),
            fmt_date(report.bounds.min_end),
            report.constraint_count,
        );
        for violation in &report.violations {
            let _ = writeln!(out, "        ! {violation}");
        }
    }

    Ok(out)
}

/// Simple dry-run output: print works and dependencies.
fn print_dry_run(project: &ProjectFile) {
    println!("workdeps dry-run");
    println!("  config.view_mode = {:?}", project.config.view_mode);
    println!("  config.cell_width = {}", project.config.cell_width);
    match project.time_window() {
        Some((start, end)) => println!("  window = {start} .. {end}"),
        None => println!("  window = (no dates)"),
    }
    println!();

    println!("works ({}):", project.work.len());
    for work in project.work.iter() {
        println!("  - {} {}", work.id, work.display_name());
        let dates = &work.dates;
        for (label, value) in [
            ("plan_start", &dates.plan_start),
            ("plan_end", &dates.plan_end),
            ("actual_start", &dates.actual_start),
            ("actual_end", &dates.actual_end),
        ] {
            if let Some(value) = value {
                println!("      {label}: {value}");
            }
        }
    }

    println!();
    println!("dependencies ({}):", project.dependency.len());
    for dep in project.dependency.iter() {
        let lag = if dep.lag_days == 0 {
            String::new()
        } else {
            format!(" lag {:+}d", dep.lag_days)
        };
        println!(
            "  - #{} {} -> {} ({}){}",
            dep.id, dep.depends_on_work_id, dep.work_id, dep.dependency_type, lag
        );
    }

    debug!("dry-run complete (nothing rendered)");
}
