use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
pub const DEFAULT_FILTER: &str = "diet_planner_rs=warn";

/// Install the global subscriber.
///
/// Logs go to stderr so they never interleave with the rendered plan.
/// `LOG_FORMAT=json` switches to structured output.
pub fn init() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let json_logs = std::env::var("LOG_FORMAT")
        .map(|v| v == "json")
        .unwrap_or(false);

    let builder = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr);

    // Ignore the error if a subscriber is already installed.
    if json_logs {
        let _ = builder.with_target(false).json().try_init();
    } else {
        let _ = builder.try_init();
    }
}
