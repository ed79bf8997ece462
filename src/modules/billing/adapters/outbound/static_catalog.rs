// Fixed, ordered course table.
//
// Purpose
// - Implement the CourseCatalog port over a compile-time table.
//
// Notes
// - Changing prices or adding a course is a data change in COURSES only.

use crate::modules::billing::core::catalog::{CourseCatalog, UnknownCourseError};
use crate::modules::billing::core::course::{CourseDefinition, CourseId};

const COURSES: [CourseDefinition; 4] = [
    CourseDefinition {
        id: CourseId::Standard,
        base_fee: 500,
        base_duration_hours: 1,
    },
    CourseDefinition {
        id: CourseId::ThreeHourPack,
        base_fee: 800,
        base_duration_hours: 3,
    },
    CourseDefinition {
        id: CourseId::FiveHourPack,
        base_fee: 1500,
        base_duration_hours: 5,
    },
    CourseDefinition {
        id: CourseId::EightHourPack,
        base_fee: 1900,
        base_duration_hours: 8,
    },
];

#[derive(Debug, Clone, Copy, Default)]
pub struct StaticCourseCatalog;

impl StaticCourseCatalog {
    pub fn new() -> Self {
        Self
    }
}

impl CourseCatalog for StaticCourseCatalog {
    fn resolve(&self, identifier: &str) -> Result<CourseDefinition, UnknownCourseError> {
        CourseId::from_identifier(identifier)
            .and_then(|id| COURSES.iter().find(|course| course.id == id).copied())
            .ok_or_else(|| UnknownCourseError(identifier.to_string()))
    }

    fn courses(&self) -> Vec<CourseDefinition> {
        COURSES.to_vec()
    }
}
