use tracing::{info, warn};

use super::{ActivationError, PlanRegistry};
use crate::cli::{powercfg_parser, PowerCommand};

/// What the host reports as the current plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActivePlan {
    Known(String),
    /// Query failed or its output had no name. Not an error.
    Unknown,
}

impl ActivePlan {
    pub fn name(&self) -> Option<&str> {
        match self {
            ActivePlan::Known(name) => Some(name),
            ActivePlan::Unknown => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activated {
    pub name: String,
}

pub async fn active_plan_name<C: PowerCommand>(cmd: &C) -> ActivePlan {
    match cmd.active_scheme().await {
        Ok(out) => match powercfg_parser::parse_active(&out) {
            Some(name) => ActivePlan::Known(name.to_string()),
            None => {
                warn!("Could not parse active scheme from: {:?}", out.trim());
                ActivePlan::Unknown
            }
        },
        Err(e) => {
            warn!("powercfg /getactivescheme failed: {}", e);
            ActivePlan::Unknown
        }
    }
}

/// Resolve `label` and make that plan active. Single attempt, no retries.
///
/// An unresolved label never reaches the set-active command.
pub async fn activate<C: PowerCommand>(
    cmd: &C,
    registry: &PlanRegistry,
    label: &str,
) -> Result<Activated, ActivationError> {
    let plan = registry
        .find_by_label(label)
        .inspect_err(|e| warn!("{}", e))?;
    info!("Activating '{}' ({}) for label {:?}", plan.name, plan.guid, label);
    cmd.set_active(&plan.guid)
        .await
        .map_err(|source| ActivationError::Command {
            plan: plan.name.clone(),
            source,
        })?;
    info!("Switched to {} mode", plan.name);
    Ok(Activated {
        name: plan.name.clone(),
    })
}
