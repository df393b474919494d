use std::io;

use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;

/// Instala el subscriber de stdout. `RUST_LOG` manda; si no está, `info`.
/// Llamar una sola vez desde el binario; la librería nunca lo hace.
pub fn configure_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,actix_web=info"));

    let stdout_log = fmt::layer().with_writer(io::stdout).with_target(true).with_filter(filter);

    // try_init: en tests el subscriber puede estar ya instalado
    let _ = tracing_subscriber::registry().with(stdout_log).try_init();
}
