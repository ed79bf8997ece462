use crate::modules::billing::adapters::outbound::static_catalog::StaticCourseCatalog;
use crate::modules::billing::core::policy::PricingPolicy;
use crate::modules::billing::use_cases::compute_bill::handler::ComputeBillHandler;
use crate::modules::billing::use_cases::list_courses::handler::ListCoursesHandler;
use crate::shared::core::primitives::TaxRate;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub compute_bill_handler: Arc<ComputeBillHandler<StaticCourseCatalog>>,
    pub list_courses_handler: Arc<ListCoursesHandler>,
}

impl AppState {
    /// Wires both use cases over the static catalog.
    pub fn new(policy: PricingPolicy, tax_rate: TaxRate) -> Self {
        let catalog = Arc::new(StaticCourseCatalog::new());
        Self {
            compute_bill_handler: Arc::new(ComputeBillHandler::new(
                catalog.clone(),
                policy,
                tax_rate,
            )),
            list_courses_handler: Arc::new(ListCoursesHandler::new(catalog)),
        }
    }
}
