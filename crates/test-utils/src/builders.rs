#![allow(dead_code)]

use workdeps::config::{
    DependencyRecord, GridSection, LayoutSection, ProjectFile, RawProjectFile, WorkConfig,
};
use workdeps::constraint::RawWorkDates;
use workdeps::types::{DependencyType, ViewMode, WorkId};

/// Builder for `ProjectFile` to simplify test setup.
pub struct ProjectBuilder {
    project: RawProjectFile,
}

impl ProjectBuilder {
    pub fn new() -> Self {
        Self {
            project: RawProjectFile {
                config: LayoutSection::default(),
                grid: GridSection::default(),
                work: Vec::new(),
                dependency: Vec::new(),
            },
        }
    }

    pub fn with_work(mut self, work: WorkConfig) -> Self {
        self.project.work.push(work);
        self
    }

    pub fn with_dependency(mut self, dep: DependencyRecord) -> Self {
        self.project.dependency.push(dep);
        self
    }

    pub fn view_mode(mut self, mode: ViewMode) -> Self {
        self.project.config.view_mode = mode;
        self
    }

    pub fn cell_width(mut self, width: f64) -> Self {
        self.project.config.cell_width = width;
        self
    }

    pub fn window(mut self, start: &str, end: &str) -> Self {
        self.project.config.window_start = Some(start.to_string());
        self.project.config.window_end = Some(end.to_string());
        self
    }

    pub fn timeline_left(mut self, left: f64) -> Self {
        self.project.config.timeline_left = left;
        self
    }

    pub fn row_height(mut self, height: f64) -> Self {
        self.project.grid.row_height = height;
        self
    }

    pub fn header_height(mut self, height: f64) -> Self {
        self.project.grid.header_height = height;
        self
    }

    pub fn scroll_top(mut self, offset: f64) -> Self {
        self.project.grid.scroll_top = offset;
        self
    }

    /// The unvalidated project, for tests that exercise validation itself.
    pub fn build_raw(self) -> RawProjectFile {
        self.project
    }

    pub fn build(self) -> ProjectFile {
        ProjectFile::try_from(self.project).expect("Failed to build valid project from builder")
    }
}

impl Default for ProjectBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `WorkConfig`.
pub struct WorkBuilder {
    work: WorkConfig,
}

impl WorkBuilder {
    pub fn new(id: WorkId) -> Self {
        Self {
            work: WorkConfig {
                id,
                name: None,
                dates: RawWorkDates::default(),
            },
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.work.name = Some(name.to_string());
        self
    }

    pub fn plan(mut self, start: &str, end: &str) -> Self {
        self.work.dates.plan_start = Some(start.to_string());
        self.work.dates.plan_end = Some(end.to_string());
        self
    }

    pub fn actual_start(mut self, date: &str) -> Self {
        self.work.dates.actual_start = Some(date.to_string());
        self
    }

    pub fn actual_end(mut self, date: &str) -> Self {
        self.work.dates.actual_end = Some(date.to_string());
        self
    }

    pub fn build(self) -> WorkConfig {
        self.work
    }
}

/// Shorthand for a dependency record: `work_id` depends on `depends_on`.
pub fn dependency(
    id: i64,
    depends_on: WorkId,
    work_id: WorkId,
    dependency_type: DependencyType,
    lag_days: i32,
) -> DependencyRecord {
    DependencyRecord {
        id,
        work_id,
        depends_on_work_id: depends_on,
        dependency_type,
        lag_days,
    }
}
