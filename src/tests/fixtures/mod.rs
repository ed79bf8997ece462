pub mod commands {
    pub mod compute_bill;
}
