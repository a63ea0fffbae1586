//! Logging setup.

/// Installs the `env_logger` backend for the `log` facade.
///
/// Output is controlled through `RUST_LOG` as usual. Calling this more than
/// once is harmless; only the first call installs a logger.
///
/// # Example
///
/// ```no_run
/// hopf::init_logging();
/// log::info!("sampling fibres");
/// ```
pub fn init_logging() {
    let _ = env_logger::try_init();
}
