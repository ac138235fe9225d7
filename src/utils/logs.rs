use crate::core::domain::Configuration;

pub fn setup_tracing(config: &Configuration) {
    let builder = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false);
    if config.dev_mode {
        builder.init();
    } else {
        // json lines for log shippers, which add their own ingestion time.
        builder
            .with_ansi(false)
            .without_time()
            .json()
            .init();
    }
}
