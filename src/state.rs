use tracing::info;

use crate::cli::PowerCommand;
use crate::plans::{self, ActivationError, Activated, ActivePlan, DiscoveryError, PlanRegistry};

/// Everything the panel knows about the host's power plans.
///
/// Owned by the UI thread. The registry is built once in [`PowerSession::start`];
/// only [`PowerSession::activate`] mutates state afterwards.
pub struct PowerSession<C> {
    cmd: C,
    registry: PlanRegistry,
    active: ActivePlan,
    discovery_error: Option<DiscoveryError>,
}

impl<C: PowerCommand> PowerSession<C> {
    pub async fn start(cmd: C, marker: &str) -> Self {
        let (registry, discovery_error) = match PlanRegistry::enumerate(&cmd, marker).await {
            Ok(registry) => (registry, None),
            Err(e) => (PlanRegistry::default(), Some(e)),
        };
        let active = plans::active_plan_name(&cmd).await;
        info!("Current power plan: {}", active.name().unwrap_or("Unknown"));
        Self {
            cmd,
            registry,
            active,
            discovery_error,
        }
    }

    pub fn list_plans(&self) -> Vec<String> {
        self.registry.names()
    }

    pub fn active_plan_name(&self) -> &ActivePlan {
        &self.active
    }

    /// Set when enumeration failed at startup; the registry is then empty.
    pub fn discovery_error(&self) -> Option<&DiscoveryError> {
        self.discovery_error.as_ref()
    }

    /// On success the active plan is updated without re-querying the host.
    pub async fn activate(&mut self, label: &str) -> Result<Activated, ActivationError> {
        let done = plans::activate(&self.cmd, &self.registry, label).await?;
        self.active = ActivePlan::Known(done.name.clone());
        Ok(done)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::stub::StubPowerCfg;

    const MARKER: &str = "Power Scheme GUID";
    const LIST: &str = "Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced) *\n\
Power Scheme GUID: 8c5e7fda-e8bf-4a96-9a85-a6e23a8c635c  (High performance)\n";

    #[tokio::test]
    async fn start_discovers_plans_and_active() {
        let cmd = StubPowerCfg {
            list: Some(LIST.to_string()),
            active: Some("Power Scheme GUID: 381b4222-f694-41f0-9685-ff5bb260df2e  (Balanced)".into()),
            ..StubPowerCfg::default()
        };
        let session = PowerSession::start(cmd, MARKER).await;
        assert_eq!(session.list_plans(), vec!["Balanced", "High performance"]);
        assert_eq!(session.active_plan_name(), &ActivePlan::Known("Balanced".into()));
        assert!(session.discovery_error().is_none());
    }

    #[tokio::test]
    async fn failed_discovery_leaves_empty_registry() {
        let mut session = PowerSession::start(StubPowerCfg::default(), MARKER).await;
        assert!(session.list_plans().is_empty());
        assert!(session.discovery_error().is_some());
        assert_eq!(session.active_plan_name(), &ActivePlan::Unknown);
        assert!(matches!(
            session.activate("Balanced").await,
            Err(ActivationError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn activation_updates_active_plan_optimistically() {
        let mut session = PowerSession::start(StubPowerCfg::with_list(LIST), MARKER).await;
        assert_eq!(session.active_plan_name(), &ActivePlan::Unknown);
        let done = session.activate("high").await.unwrap();
        assert_eq!(done.name, "High performance");
        assert_eq!(
            session.active_plan_name(),
            &ActivePlan::Known("High performance".into())
        );
    }

    #[tokio::test]
    async fn failed_activation_keeps_previous_plan() {
        let cmd = StubPowerCfg {
            list: Some(LIST.to_string()),
            active: Some("(Balanced)".into()),
            fail_set: true,
            ..StubPowerCfg::default()
        };
        let mut session = PowerSession::start(cmd, MARKER).await;
        assert!(session.activate("High performance").await.is_err());
        assert_eq!(session.active_plan_name(), &ActivePlan::Known("Balanced".into()));
    }
}
