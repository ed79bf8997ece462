use crate::modules::billing::core::catalog::UnknownCourseError;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BillingError {
    #[error(transparent)]
    UnknownCourse(#[from] UnknownCourseError),

    #[error("exit time must not be before entry time")]
    ExitBeforeEntry,

    #[error("visit extends past the supported date range")]
    OutOfRange,
}
