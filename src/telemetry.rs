use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceCell<()> = OnceCell::new();

/// Installs the global tracing subscriber once. Level policy belongs to the
/// host process via `RUST_LOG`; the default keeps this crate at `info`.
pub fn init_tracing() {
    let _ = INIT.get_or_init(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("gaquery=info"));
        fmt().with_env_filter(filter).with_target(false).init();
    });
}
