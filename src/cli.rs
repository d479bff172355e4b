// External command boundary for power plan management
pub mod powercfg;
pub mod powercfg_parser;

pub use powercfg::{CommandError, PowerCfg};

/// The three `powercfg` operations the core depends on.
///
/// Implemented by [`PowerCfg`] for the real host and by stubs in tests.
#[allow(async_fn_in_trait)]
pub trait PowerCommand {
    /// Raw output of the plan enumeration command
    async fn list_schemes(&self) -> Result<String, CommandError>;

    /// Raw output of the active plan query
    async fn active_scheme(&self) -> Result<String, CommandError>;

    /// Make the plan identified by `guid` active. Success is the exit status alone.
    async fn set_active(&self, guid: &str) -> Result<(), CommandError>;
}
