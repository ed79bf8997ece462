// Runtime configuration read from the environment.
//
// Variables
// - BIND_ADDR: socket address to listen on (default 0.0.0.0:8080).
// - TAX_RATE_PERCENT: whole-percent sales tax for reported totals, 0 to 100 (default 10).

use crate::shared::core::primitives::TaxRate;
use anyhow::Context;
use std::net::SocketAddr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub bind_addr: SocketAddr,
    pub tax_rate: TaxRate,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let bind_addr = lookup("BIND_ADDR")
            .unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .context("BIND_ADDR must be a socket address such as 0.0.0.0:8080")?;

        let tax_rate = match lookup("TAX_RATE_PERCENT") {
            Some(raw) => {
                let percent = raw
                    .trim()
                    .parse::<u32>()
                    .with_context(|| format!("TAX_RATE_PERCENT must be a whole number, got {raw:?}"))?;
                if percent > TaxRate::MAX_PERCENT {
                    anyhow::bail!(
                        "TAX_RATE_PERCENT must be at most {}, got {percent}",
                        TaxRate::MAX_PERCENT
                    );
                }
                TaxRate::percent(percent)
            }
            None => TaxRate::default(),
        };

        Ok(Self {
            bind_addr,
            tax_rate,
        })
    }
}
