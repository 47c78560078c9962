/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 19/10/26
******************************************************************************/
use std::env;
use std::sync::Once;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

static INIT: Once = Once::new();

/// Installs a global `tracing` fmt subscriber.
///
/// The level comes from `LOGLEVEL` (`TRACE`, `DEBUG`, `INFO`, `WARN`,
/// `ERROR`) and defaults to `INFO`. Calling it more than once is a no-op,
/// as is calling it after another subscriber was installed.
pub fn setup_logger() {
    INIT.call_once(|| {
        let level = env::var("LOGLEVEL")
            .ok()
            .and_then(|l| l.parse::<Level>().ok())
            .unwrap_or(Level::INFO);

        let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

        if tracing::subscriber::set_global_default(subscriber).is_err() {
            tracing::debug!("Global subscriber already set");
        }
    });
}
