use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;

use chessboard_viewer::{
    BoardPalette, FilePresenterPort, PpmFilePresenter, ScriptedSession, SessionError, ViewerConfig, logging,
    render_board,
};
use clap::Parser;
use tracing::info;

/// Plays a scripted sequence of board clicks and undo requests, printing each outcome.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Cli {
    #[command(flatten)]
    config: ViewerConfig,

    /// Script to run; reads stdin when omitted
    #[arg(long)]
    script: Option<PathBuf>,

    /// Write the final board to this path as a PPM image
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

fn run(cli: Cli) -> Result<(), SessionError> {
    cli.config.validate()?;
    let engine = cli.config.build_engine()?;
    let mut session = ScriptedSession::new(engine, cli.config.geometry(), cli.config.undo_key);

    let input: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(io::stdin().lock()),
    };

    let mut stdout = io::stdout().lock();
    session.run(input, &mut stdout)?;

    if let Some(path) = &cli.snapshot {
        let controller = session.controller();
        let buffer = render_board(&controller.view(), controller.geometry(), &BoardPalette::default())?;
        PpmFilePresenter::new().present(&buffer, path)?;
    }

    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.config.log_filter);
    info!(board_size = cli.config.board_size, "starting headless session");

    run(cli)?;

    Ok(())
}
