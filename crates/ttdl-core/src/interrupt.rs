//! Ctrl+C handling.
//!
//! The handler only sets a flag; whoever owns the terminal decides how to
//! react (the interactive menu asks before quitting). A second Ctrl+C
//! force-exits with the conventional status.

use std::sync::atomic::{AtomicBool, Ordering};

static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Error recognized in `main` to exit with status 130.
#[derive(Debug)]
pub struct InterruptedError;

impl std::fmt::Display for InterruptedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Interrupted")
    }
}

impl std::error::Error for InterruptedError {}

/// Installs the Ctrl+C handler.
///
/// # Panics
/// Panics if registering the handler fails.
pub fn init() {
    ctrlc::set_handler(|| {
        if INTERRUPTED.swap(true, Ordering::SeqCst) {
            // Second interrupt - force exit.
            std::process::exit(130);
        }
    })
    .expect("Error setting Ctrl+C handler");
}

/// Checks if an interrupt has been requested.
pub fn is_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Clears the flag after the prompt decided to keep going.
pub fn reset() {
    INTERRUPTED.store(false, Ordering::SeqCst);
}
