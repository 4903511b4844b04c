//! Logging setup for binaries and tests that embed the library.
//!
//! The library itself only emits records through the `log` facade: growth of
//! the backing storage at `trace`, construction and realignment at `debug`.
//! Nothing is printed unless the host installs a logger, which
//! `enable_verbose_logging` does with `env_logger`.

use log::LevelFilter;
use std::sync::Once;

static INIT_LOGGER: Once = Once::new();

/// Installs a process-wide `env_logger` at the given level. Only the first
/// call has an effect; later calls (or a logger installed elsewhere) are
/// silently ignored.
pub fn enable_verbose_logging(level: LevelFilter) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(cfg!(test));
        builder.filter_level(level);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        let _ = builder.try_init();
    });
}
