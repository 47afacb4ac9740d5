// src/config/model.rs

use chrono::NaiveDate;
use serde::Deserialize;

use crate::constraint::dates::{parse_opt_date, RawWorkDates, WorkDateInfo};
use crate::types::{DependencyType, ViewMode, WorkId};

/// Project snapshot exactly as read from a TOML file.
///
/// ```toml
/// [config]
/// view_mode = "week"
/// cell_width = 56.0
///
/// [grid]
/// row_height = 32.0
///
/// [[work]]
/// id = 1
/// plan_start = "2024-01-02"
/// plan_end = "2024-01-05"
///
/// [[dependency]]
/// id = 10
/// work_id = 2
/// depends_on_work_id = 1
/// dependency_type = "FS"
/// ```
///
/// All sections are optional here; [`ProjectFile`] is the validated form.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawProjectFile {
    #[serde(default)]
    pub config: LayoutSection,

    #[serde(default)]
    pub grid: GridSection,

    /// Works in display order (`[[work]]`).
    #[serde(default)]
    pub work: Vec<WorkConfig>,

    /// Dependency records (`[[dependency]]`).
    #[serde(default)]
    pub dependency: Vec<DependencyRecord>,
}

/// `[config]` section: the time axis and its pixel scale.
#[derive(Debug, Clone, Deserialize)]
pub struct LayoutSection {
    #[serde(default)]
    pub view_mode: ViewMode,

    /// Width of one time unit (day or week column) in pixels.
    #[serde(default = "default_cell_width")]
    pub cell_width: f64,

    /// First day of the visible window. Derived from work dates when absent.
    #[serde(default)]
    pub window_start: Option<String>,

    /// Last day of the visible window. Derived from work dates when absent.
    #[serde(default)]
    pub window_end: Option<String>,

    /// Horizontal offset of the first time unit inside the grid (label columns).
    #[serde(default)]
    pub timeline_left: f64,
}

fn default_cell_width() -> f64 {
    40.0
}

impl Default for LayoutSection {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::default(),
            cell_width: default_cell_width(),
            window_start: None,
            window_end: None,
            timeline_left: 0.0,
        }
    }
}

/// `[grid]` section: geometry of the rendered schedule grid.
#[derive(Debug, Clone, Deserialize)]
pub struct GridSection {
    #[serde(default = "default_row_height")]
    pub row_height: f64,

    /// Height of the header above the first row.
    #[serde(default)]
    pub header_height: f64,

    /// Vertical scroll offset of the grid container.
    #[serde(default)]
    pub scroll_top: f64,
}

fn default_row_height() -> f64 {
    32.0
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            row_height: default_row_height(),
            header_height: 0.0,
            scroll_top: 0.0,
        }
    }
}

/// `[[work]]` entry.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkConfig {
    pub id: WorkId,

    #[serde(default)]
    pub name: Option<String>,

    #[serde(flatten)]
    pub dates: RawWorkDates,
}

impl WorkConfig {
    pub fn date_info(&self) -> WorkDateInfo {
        WorkDateInfo::from_raw(self.id, &self.dates)
    }

    pub fn display_name(&self) -> String {
        self.name
            .clone()
            .unwrap_or_else(|| format!("work {}", self.id))
    }
}

/// One dependency record: `work_id` may not be scheduled before
/// `depends_on_work_id` allows it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct DependencyRecord {
    pub id: i64,

    /// Successor.
    pub work_id: WorkId,

    /// Predecessor.
    pub depends_on_work_id: WorkId,

    pub dependency_type: DependencyType,

    #[serde(default)]
    pub lag_days: i32,
}

/// A validated project snapshot.
///
/// Construct via `ProjectFile::try_from(raw)` (see `config::validate`).
#[derive(Debug, Clone)]
pub struct ProjectFile {
    pub config: LayoutSection,
    pub grid: GridSection,
    pub work: Vec<WorkConfig>,
    pub dependency: Vec<DependencyRecord>,
}

impl ProjectFile {
    pub(crate) fn new_unchecked(
        config: LayoutSection,
        grid: GridSection,
        work: Vec<WorkConfig>,
        dependency: Vec<DependencyRecord>,
    ) -> Self {
        Self {
            config,
            grid,
            work,
            dependency,
        }
    }

    pub fn find_work(&self, id: WorkId) -> Option<&WorkConfig> {
        self.work.iter().find(|w| w.id == id)
    }

    /// Parsed date snapshots of every work, in display order.
    pub fn date_infos(&self) -> Vec<WorkDateInfo> {
        self.work.iter().map(WorkConfig::date_info).collect()
    }

    /// Visible window of the time axis.
    ///
    /// Explicit `window_start`/`window_end` win; a missing bound falls back to
    /// the earliest/latest date found on any work. `None` when no date is
    /// known at all.
    pub fn time_window(&self) -> Option<(NaiveDate, NaiveDate)> {
        let all_dates: Vec<NaiveDate> = self
            .date_infos()
            .iter()
            .flat_map(|d| {
                [
                    d.plan_start_date,
                    d.plan_end_date,
                    d.actual_start_date,
                    d.actual_end_date,
                ]
            })
            .flatten()
            .collect();

        let start = parse_opt_date(self.config.window_start.as_deref())
            .or_else(|| all_dates.iter().min().copied())?;
        let end = parse_opt_date(self.config.window_end.as_deref())
            .or_else(|| all_dates.iter().max().copied())?;

        Some((start, end.max(start)))
    }
}
