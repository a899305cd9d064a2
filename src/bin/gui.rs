use chessboard_viewer::{PixelsPresenterFactory, RunGuiCommand, ViewerConfig, logging};
use clap::Parser;

/// Interactive chessboard: click a piece, then its destination.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ViewerConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.config.log_filter);

    let command = RunGuiCommand::new(PixelsPresenterFactory::new(), cli.config);
    command.execute()?;

    Ok(())
}
