// ============================================================================
// Utilities Module
// ============================================================================

/// Install a plain-text tracing subscriber for binaries and demos.
///
/// Library code only emits through `tracing`; whoever owns `main` decides
/// whether anything is collected.
#[cfg(feature = "logging")]
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();
}
