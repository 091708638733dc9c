mod cli;
mod sample;

use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "rdl_schema=info";
const VERBOSE_LOG_FILTER: &str = "rdl_schema=debug";

fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if verbose { VERBOSE_LOG_FILTER } else { DEFAULT_LOG_FILTER })
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let command_line_interface = cli::CommandLineInterface::load();
    init_logging(command_line_interface.verbose);
    command_line_interface.run()
}
