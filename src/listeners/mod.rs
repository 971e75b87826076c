//! # Installation lifecycle listeners.
//!
//! This module provides [`InstallListener`], the strategy an agent
//! orchestrator notifies about transformer installation, failure, and reset,
//! together with the concrete strategies and assembly helpers.
//!
//! ## Event flow
//! ```text
//! orchestrator ──► InstallListener::{on_install, on_error, on_reset}
//!                        │
//!        ┌───────────────┼────────────────────┬─────────────────────┐
//!        ▼               ▼                    ▼                     ▼
//!      NoOp       ErrorSuppressing    Stream(StreamWriter)    Compound([..])
//!    (ignore)     (handle errors)     (one line per event)   (ordered fan-out)
//! ```
//!
//! ## Choosing a strategy
//! - [`InstallListener::NoOp`] for orchestrators that do their own reporting
//! - [`InstallListener::ErrorSuppressing`] to keep installation going past
//!   transform failures
//! - [`StreamWriter`] for line-oriented diagnostics on a [`Sink`]
//! - [`Compound`] (or [`ListenerBuilder`]) to combine several of the above

mod builder;
mod compound;
mod listener;
mod stream;

#[cfg(test)]
pub(crate) mod capture;

pub use builder::ListenerBuilder;
pub use compound::Compound;
pub use listener::InstallListener;
pub use stream::{SharedWriter, Sink, StreamWriter};
