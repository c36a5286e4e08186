use std::io::Write;

use env_logger::Env;

/// Initialize the global logger. Safe to call more than once; later calls
/// are no-ops. Level defaults to `info`, overridable via RUST_LOG.
pub fn init() {
    let _ = env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format(|buf, record| {
            let timestamp = chrono::Local::now().format("%H:%M:%S%.3f");
            writeln!(buf, "[{}] [{}] {}", timestamp, record.level(), record.args())
        })
        .try_init();
}
