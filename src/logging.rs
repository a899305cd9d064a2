/// Installs the global `tracing` subscriber. Logs go to stderr so stdout stays free for board output.
pub fn init_tracing(filter: &str) {
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
