use clap::Parser;

use billing_periods::cli::{self, CliConfig};

fn main() {
    let config = CliConfig::parse();
    cli::init_logger(config.verbose);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = cli::run(&config, &mut out) {
        tracing::error!("{e:#}");
        std::process::exit(1);
    }
}
