//! # Demo: wiring
//!
//! Drives the three lifecycle hooks the way an agent orchestrator would and
//! shows how child order inside a compound decides which diagnostics fire.
//!
//! ## Flow
//! ```text
//! install("jdbc-tracer") ──► listener.on_install ──► "[Byte Buddy] INSTALL ..."
//! fail("jdbc-tracer")    ──► listener.on_error   ──► ERROR line + trace, then handled
//! reset("jdbc-tracer")   ──► listener.on_reset   ──► "[Byte Buddy] RESET ..."
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example wiring
//! ```

use std::sync::Arc;

use bytevisor::{InstallError, InstallListener, ListenerBuilder};

/// Stand-in for the orchestrator's installation routine.
fn install(listener: &InstallListener, session: &str, transformer: &str) {
    // Attachment mechanics would run here.
    listener.on_install(&session, &transformer);
}

/// Stand-in for a retransformation going wrong mid-install.
fn fail(listener: &InstallListener, session: &str, transformer: &str) {
    let error = Arc::new(InstallError::Retransform {
        class: "com.example.repo.UserDao".to_string(),
        source: "class file version mismatch".into(),
    });
    match listener.on_error(&session, &transformer, error) {
        Some(unhandled) => println!("=> escalating: {unhandled}"),
        None => println!("=> handled by a listener, installation continues"),
    }
}

/// Stand-in for the orchestrator's reset routine.
fn reset(listener: &InstallListener, session: &str, transformer: &str) {
    listener.on_reset(&session, &transformer);
}

fn main() {
    let session = "pid-4242";
    let transformer = "jdbc-tracer";

    // Diagnostics first, suppression second: the error is reported and then
    // declared handled, so the installation keeps going.
    let listener = ListenerBuilder::new()
        .with(InstallListener::to_stdout())
        .with(InstallListener::ErrorSuppressing)
        .build();

    install(&listener, session, transformer);
    fail(&listener, session, transformer);
    reset(&listener, session, transformer);

    // Swapped order: the suppressor wins first and the stream child never
    // sees the error, so no ERROR line is printed.
    println!("-- muted stack --");
    let muted = ListenerBuilder::new()
        .with(InstallListener::ErrorSuppressing)
        .with(InstallListener::to_stdout())
        .build();
    fail(&muted, session, transformer);
}
