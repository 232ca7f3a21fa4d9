use anyhow::{Context, Result};
use letterboxed::cli::{CliView, parse_cli};
use letterboxed::logging::{init_logger, tui_log_path};
use letterboxed::tui::TuiView;
use letterboxed::{Letterbox, Solver, present_solutions};
use log::info;
use std::io;

fn main() -> Result<()> {
    let cli = parse_cli();
    let log_file = if cli.tui { tui_log_path() } else { None };
    init_logger(cli.verbose, log_file.as_deref());

    let puzzle = cli.load_puzzle().context("Failed to load puzzle")?;
    info!(
        "Loaded puzzle {} with {} candidate words",
        puzzle,
        puzzle.dictionary.len()
    );

    let letterbox = Letterbox::new(&puzzle.sides)?;
    let solver = Solver::new(letterbox, &puzzle.dictionary);
    info!("{} valid words", solver.valid_words().len());

    let strategy = cli.strategy();
    let solutions = if cli.tui {
        let mut view = TuiView::new().context("Failed to start terminal UI")?;
        present_solutions(&solver, strategy, &mut view)?
    } else {
        let mut view = CliView::new(io::stdout().lock(), cli.from_page());
        present_solutions(&solver, strategy, &mut view)?
    };

    info!("Found {} solutions", solutions.len());
    Ok(())
}
