pub mod shared {
    pub mod core {
        pub mod primitives;
    }
}

pub mod modules {
    pub mod billing {
        pub mod core {
            pub mod bill;
            pub mod catalog;
            pub mod course;
            pub mod errors;
            pub mod extension;
            pub mod night_window;
            pub mod policy;
            pub mod surcharge;
        }
        pub mod use_cases {
            pub mod compute_bill {
                pub mod command;
                pub mod compute;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_courses {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod static_catalog;
            }
        }
    }
}

pub mod shell;
