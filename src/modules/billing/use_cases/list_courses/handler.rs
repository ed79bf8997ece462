use crate::modules::billing::core::catalog::CourseCatalog;
use crate::modules::billing::core::course::CourseDefinition;
use std::sync::Arc;

pub struct ListCoursesHandler {
    catalog: Arc<dyn CourseCatalog>,
}

impl ListCoursesHandler {
    pub fn new(catalog: Arc<dyn CourseCatalog>) -> Self {
        Self { catalog }
    }

    pub fn handle(&self) -> Vec<CourseDefinition> {
        self.catalog.courses()
    }
}
