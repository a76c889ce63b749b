//! Plan files
//!
//! A plan is a `SimulationConfig` stored as YAML:
//!
//! ```yaml
//! start_year: 2024
//! end_year: 2027
//! securities:
//!   - name: A
//!     dividend_per_share: 1000.0
//!     payout_months: [3, 6, 9, 12]
//!     purchases:
//!       - { year: 2024, quantity: 10, price_per_share: 5000.0 }
//! ```

use std::fs;
use std::path::Path;

use color_eyre::eyre::{WrapErr, eyre};
use divsim_core::config::{SecurityBuilder, SimulationBuilder, SimulationConfig};

use crate::util::io::atomic_write;

pub fn from_yaml(yaml: &str) -> Result<SimulationConfig, serde_saphyr::Error> {
    serde_saphyr::from_str(yaml)
}

pub fn to_yaml(config: &SimulationConfig) -> Result<String, serde_saphyr::ser::Error> {
    serde_saphyr::to_string(config)
}

/// Read and parse a plan file
pub fn load_plan(path: &Path) -> color_eyre::Result<SimulationConfig> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("failed to read plan {}", path.display()))?;
    let config =
        from_yaml(&content).map_err(|e| eyre!("failed to parse plan {}: {e}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        securities = config.securities.len(),
        start_year = config.start_year,
        end_year = config.end_year,
        "loaded plan"
    );
    Ok(config)
}

/// Write a plan file, replacing any existing one
pub fn save_plan(path: &Path, config: &SimulationConfig) -> color_eyre::Result<()> {
    let yaml = to_yaml(config).map_err(|e| eyre!("failed to serialize plan: {e}"))?;
    atomic_write(path, &yaml).wrap_err_with(|| format!("failed to write {}", path.display()))?;
    tracing::info!(path = %path.display(), "saved plan");
    Ok(())
}

/// A four-year, three-security plan starting at `start_year`
pub fn sample_plan(start_year: i32) -> SimulationConfig {
    SimulationBuilder::new()
        .start_year(start_year)
        .duration_years(4)
        .security(
            SecurityBuilder::new("Quarterly REIT")
                .dividend(90.0)
                .quarterly()
                .buy(start_year, 300, 4_800.0)
                .buy(start_year + 1, 100, 5_000.0),
        )
        .security(
            SecurityBuilder::new("Semi-annual REIT")
                .dividend(140.0)
                .semi_annual(6)
                .buy(start_year, 200, 5_200.0)
                .buy(start_year + 2, 150, 5_400.0),
        )
        .security(
            SecurityBuilder::new("Monthly Income Fund")
                .dividend(40.0)
                .monthly()
                .buy(start_year + 1, 500, 9_800.0),
        )
        .build()
}
