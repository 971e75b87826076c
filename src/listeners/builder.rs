//! # Listener assembly.
//!
//! [`ListenerBuilder`] collects the listeners an orchestrator wants notified
//! and builds the minimal strategy for the set: no listeners means no-op, a
//! single listener is used as-is, several are wrapped into a [`Compound`] in
//! registration order.

use super::{Compound, InstallListener};

/// Builder collecting the listeners for one agent installation.
#[derive(Clone, Debug, Default)]
pub struct ListenerBuilder {
    listeners: Vec<InstallListener>,
}

impl ListenerBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a listener; notification order follows registration order.
    pub fn with(mut self, listener: impl Into<InstallListener>) -> Self {
        self.listeners.push(listener.into());
        self
    }

    /// Builds the minimal listener for the collected set.
    pub fn build(mut self) -> InstallListener {
        match self.listeners.len() {
            0 => InstallListener::NoOp,
            1 => self.listeners.remove(0),
            _ => InstallListener::Compound(Compound::new(self.listeners)),
        }
    }
}
