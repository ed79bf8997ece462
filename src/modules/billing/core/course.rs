// Courses a customer can pick on entry.
//
// Purpose
// - Name every course with a closed enum so pricing never branches on raw strings.
// - Carry the immutable base fee and base duration of a course.
//
// Boundaries
// - The values themselves live in the catalog adapter, not here.

use crate::shared::core::primitives::Amount;
use chrono::TimeDelta;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CourseId {
    Standard,
    ThreeHourPack,
    FiveHourPack,
    EightHourPack,
}

impl CourseId {
    pub const ALL: [CourseId; 4] = [
        CourseId::Standard,
        CourseId::ThreeHourPack,
        CourseId::FiveHourPack,
        CourseId::EightHourPack,
    ];

    /// Identifier customers and callers use for the course.
    pub fn identifier(&self) -> &'static str {
        match self {
            CourseId::Standard => "standard",
            CourseId::ThreeHourPack => "3-hour pack",
            CourseId::FiveHourPack => "5-hour pack",
            CourseId::EightHourPack => "8-hour pack",
        }
    }

    pub fn from_identifier(identifier: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|course| course.identifier() == identifier)
    }
}

impl std::fmt::Display for CourseId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.identifier())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CourseDefinition {
    pub id: CourseId,
    pub base_fee: Amount,
    pub base_duration_hours: u32,
}

impl CourseDefinition {
    pub fn base_duration(&self) -> TimeDelta {
        TimeDelta::hours(i64::from(self.base_duration_hours))
    }
}
