use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Identity of a work as handed out by the data layer.
pub type WorkId = i64;

/// The four dependency kinds between two works.
///
/// The first letter names the predecessor's anchor, the second the
/// successor's: `FS` means "successor starts after predecessor finishes".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum DependencyType {
    FinishStart,
    StartStart,
    FinishFinish,
    StartFinish,
}

impl DependencyType {
    pub const ALL: [DependencyType; 4] = [
        DependencyType::FinishStart,
        DependencyType::StartStart,
        DependencyType::FinishFinish,
        DependencyType::StartFinish,
    ];

    /// `true` for kinds that restrict the successor's start date (FS, SS).
    pub fn constrains_start(self) -> bool {
        matches!(self, DependencyType::FinishStart | DependencyType::StartStart)
    }

    /// `true` for kinds that restrict the successor's end date (FF, SF).
    pub fn constrains_end(self) -> bool {
        !self.constrains_start()
    }

    /// Whether the predecessor side of the edge is anchored on its end date.
    pub fn anchors_predecessor_end(self) -> bool {
        matches!(
            self,
            DependencyType::FinishStart | DependencyType::FinishFinish
        )
    }

    /// Whether the successor side of the edge is anchored on its end date.
    pub fn anchors_successor_end(self) -> bool {
        self.constrains_end()
    }

    pub fn code(self) -> &'static str {
        match self {
            DependencyType::FinishStart => "FS",
            DependencyType::StartStart => "SS",
            DependencyType::FinishFinish => "FF",
            DependencyType::StartFinish => "SF",
        }
    }
}

impl fmt::Display for DependencyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for DependencyType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FS" => Ok(DependencyType::FinishStart),
            "SS" => Ok(DependencyType::StartStart),
            "FF" => Ok(DependencyType::FinishFinish),
            "SF" => Ok(DependencyType::StartFinish),
            other => Err(format!(
                "invalid dependency_type: {other} (expected one of FS, SS, FF, SF)"
            )),
        }
    }
}

impl TryFrom<String> for DependencyType {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Granularity of the schedule's time axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// One column per calendar day.
    #[default]
    Day,
    /// One column per Monday-start week.
    Week,
}
