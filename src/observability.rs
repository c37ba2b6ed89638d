//! Logging setup and structured diagnostics for the dispatch layer.
//!
//! The crate only talks to the `log` facade. Hosts that have no logger of their
//! own (the Python extension, ad-hoc tools) call `enable_verbose_logging` once to
//! route records through `env_logger`.

use std::fs::OpenOptions;
use std::sync::Once;

use log::LevelFilter;

/// Logs a structured key-value metric string at debug level.
///
/// # Example
/// ```
/// use vctype::log_metric;
/// let tag = "s3";
/// log_metric!("event"="classify", "tag"=tag);
/// ```
#[macro_export]
macro_rules! log_metric {
    ($($key:literal = $value:expr),+ $(,)?) => {
        if $crate::__log::log_enabled!($crate::__log::Level::Debug) {
            let mut parts = Vec::new();
            $(
                parts.push(format!("\"{}\": \"{}\"", $key, $value));
            )+
            $crate::__log::debug!("VCTYPE_METRIC: {{ {} }}", parts.join(", "));
        }
    };
}

static INIT_LOGGER: Once = Once::new();

/// Installs an `env_logger` at info level, writing `[LEVEL] message` lines to
/// stderr or, when `log_file` is given, appending to that file.
///
/// Only the first call has any effect. If another logger is already installed
/// it is left in place.
pub fn enable_verbose_logging(log_file: Option<String>) {
    INIT_LOGGER.call_once(|| {
        let mut builder = env_logger::Builder::new();

        builder.is_test(false);
        builder.filter_level(LevelFilter::Info);

        // Custom formatter: just print the level and message
        builder.format(|buf, record| {
            use std::io::Write;
            writeln!(buf, "[{}] {}", record.level(), record.args())?;
            buf.flush()?;
            Ok(())
        });

        if let Some(filename) = log_file {
            match OpenOptions::new().append(true).create(true).open(&filename) {
                Ok(file) => {
                    builder.target(env_logger::Target::Pipe(Box::new(file)));
                }
                Err(e) => {
                    eprintln!("vctype: could not open log file {}: {}", filename, e);
                }
            }
        }

        let _ = builder.try_init();
    });
}
