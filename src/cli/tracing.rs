use tracing::Level;
use tracing_subscriber::prelude::*;

pub(crate) fn init() {
    // stdout carries --dry-run output
    let tracing_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr);
    let filter = tracing_subscriber::filter::Targets::new()
        .with_target("octocrab", Level::DEBUG)
        .with_default(Level::INFO);

    tracing_subscriber::registry()
        .with(tracing_layer)
        .with(filter)
        .init();
}
