use crate::aggregate::aggregate;
use crate::config::{SimulationConfig, ValidatedPlan};
use crate::error::Result;
use crate::model::{ByName, SimulationResult};
use crate::projection::{Projection, project};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Validate `config` and run the full simulation.
pub fn simulate(config: &SimulationConfig) -> Result<SimulationResult> {
    let plan = config.validate()?;
    simulate_plan(&plan)
}

/// Run the simulation on an already validated plan.
///
/// Each security is projected independently (in parallel with the `parallel`
/// feature); aggregation starts once every projection is done.
pub fn simulate_plan(plan: &ValidatedPlan) -> Result<SimulationResult> {
    let _span = tracing::debug_span!(
        "simulate",
        securities = plan.securities().len(),
        start = plan.years().start(),
        end = plan.years().end()
    )
    .entered();

    let projections = project_all(plan)?;
    let (monthly, yearly) = aggregate(
        plan.securities(),
        &projections,
        plan.purchases(),
        plan.years(),
    )?;

    Ok(SimulationResult {
        years: plan.years(),
        securities: plan.securities().iter().map(|s| s.name.clone()).collect(),
        monthly,
        yearly,
    })
}

fn project_all(plan: &ValidatedPlan) -> Result<ByName<Projection>> {
    #[cfg(feature = "parallel")]
    let projections: Vec<Projection> = plan
        .securities()
        .par_iter()
        .map(|security| project(security, plan.purchases_for(&security.name), plan.years()))
        .collect::<Result<_>>()?;

    #[cfg(not(feature = "parallel"))]
    let projections: Vec<Projection> = plan
        .securities()
        .iter()
        .map(|security| project(security, plan.purchases_for(&security.name), plan.years()))
        .collect::<Result<_>>()?;

    Ok(projections
        .into_iter()
        .map(|projection| (projection.security.clone(), projection))
        .collect())
}
