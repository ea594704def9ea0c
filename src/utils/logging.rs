// ============================================================================
// Logging Bootstrap
// Installs a tracing-subscriber fmt layer for binaries and demos
// ============================================================================
//
// The library only emits `tracing` events (debug! on rejected input, trace!
// on silent wrap-around). Nothing is printed unless a subscriber is
// installed, which is what this helper does.

use std::error::Error;
use tracing::Level;

/// Install a global `fmt` subscriber that prints events up to `level`.
///
/// # Errors
/// Fails if a global subscriber was already installed.
pub fn init_tracing(level: Level) -> Result<(), Box<dyn Error + Send + Sync + 'static>> {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_fails() {
        // The first call may already have happened in another test thread
        let _ = init_tracing(Level::DEBUG);
        assert!(init_tracing(Level::TRACE).is_err());
    }
}
