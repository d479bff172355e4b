//! Power plan discovery and selection.
//!
//! [`PlanRegistry`] is built once from the enumeration command and resolves
//! user-facing labels to plan identifiers. The selector functions query and
//! switch the active plan through a [`PowerCommand`](crate::cli::PowerCommand).
//! Every command failure is converted into one of the error types below;
//! nothing here panics or presents UI.

pub mod registry;
pub mod selector;

pub use registry::PlanRegistry;
pub use selector::{activate, active_plan_name, ActivePlan, Activated};

use thiserror::Error;

use crate::cli::CommandError;

#[derive(Debug, Error)]
pub enum DiscoveryError {
    #[error("failed to get power plans: {0} (administrator rights may be required)")]
    Command(#[source] CommandError),

    #[error("no power plans found in powercfg output")]
    NoPlans,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("power plan '{label}' not found; available plans: {}", .available.join(", "))]
pub struct PlanNotFound {
    pub label: String,
    pub available: Vec<String>,
}

#[derive(Debug, Error)]
pub enum ActivationError {
    #[error(transparent)]
    NotFound(#[from] PlanNotFound),

    #[error("failed to set power plan '{plan}': {source} (administrator rights may be required)")]
    Command {
        plan: String,
        #[source]
        source: CommandError,
    },
}
