use tracing::{debug, info, warn};

use super::{DiscoveryError, PlanNotFound};
use crate::cli::{powercfg_parser, PowerCommand};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PowerPlan {
    pub name: String,
    /// GUID-shaped identifier as printed by powercfg
    pub guid: String,
}

/// Discovered plans in output order, keyed by display name.
///
/// Built once from a single enumeration and never refreshed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlanRegistry {
    plans: Vec<PowerPlan>,
}

impl PlanRegistry {
    /// Run the enumeration command and build a registry from its output.
    pub async fn enumerate<C: PowerCommand>(
        cmd: &C,
        marker: &str,
    ) -> Result<Self, DiscoveryError> {
        let out = cmd.list_schemes().await.map_err(|e| {
            warn!("powercfg /list failed: {}", e);
            DiscoveryError::Command(e)
        })?;
        let registry = Self::parse(&out, marker);
        if registry.is_empty() {
            warn!("powercfg /list produced no plan rows");
            return Err(DiscoveryError::NoPlans);
        }
        info!("Discovered {} power plans: {}", registry.len(), registry.names().join(", "));
        Ok(registry)
    }

    /// Build from raw enumeration output. Malformed rows are dropped.
    pub fn parse(text: &str, marker: &str) -> Self {
        let mut registry = Self::default();
        for (name, guid) in powercfg_parser::parse_list(text, marker) {
            registry.insert(name, guid);
        }
        registry
    }

    /// Last write wins; an overwritten name keeps its original position.
    fn insert(&mut self, name: &str, guid: &str) {
        match self.plans.iter_mut().find(|p| p.name == name) {
            Some(existing) => {
                debug!("Duplicate plan name {:?}: {} replaces {}", name, guid, existing.guid);
                existing.guid = guid.to_string();
            }
            None => self.plans.push(PowerPlan {
                name: name.to_string(),
                guid: guid.to_string(),
            }),
        }
    }

    /// Case-insensitive substring match against display names.
    /// When several plans match, the first in discovery order wins.
    pub fn find_by_label(&self, label: &str) -> Result<&PowerPlan, PlanNotFound> {
        let needle = label.to_lowercase();
        self.plans
            .iter()
            .find(|p| p.name.to_lowercase().contains(&needle))
            .ok_or_else(|| PlanNotFound {
                label: label.to_string(),
                available: self.names(),
            })
    }

    pub fn names(&self) -> Vec<String> {
        self.plans.iter().map(|p| p.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.plans.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plans.is_empty()
    }
}
