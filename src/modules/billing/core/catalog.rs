// Port for resolving a course identifier into its definition.
//
// Purpose
// - Let the pricing core look up courses without knowing where the table lives.
//
// Boundaries
// - No concrete table here. The static catalog adapter implements this trait.
//
// Testing guidance
// - Any in-memory implementation works; lookups must be pure.

use crate::modules::billing::core::course::CourseDefinition;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown course: {0}")]
pub struct UnknownCourseError(pub String);

pub trait CourseCatalog: Send + Sync {
    fn resolve(&self, identifier: &str) -> Result<CourseDefinition, UnknownCourseError>;

    /// Every course in catalog order.
    fn courses(&self) -> Vec<CourseDefinition>;
}
