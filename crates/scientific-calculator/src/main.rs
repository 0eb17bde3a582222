//! `scicalc`: scientific calculator for the terminal
//!
//! Without `--eval` this opens the full-screen calculator. Logs go to
//! `--log-file` only, since the calculator owns the screen.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use scientific_calculator::cli::{evaluate_once, Cli, CliResult};
use scientific_calculator::config::CalculatorConfig;
use scientific_calculator::logging::LoggingConfig;
use scientific_calculator::tui::{keypad_area, render, CalculatorApp};
use tracing::{debug, info};

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> CliResult<()> {
    let logging = match &cli.eval {
        Some(_) => LoggingConfig::stderr(cli.verbose),
        None => LoggingConfig::file_or_off(cli.log_file.as_deref(), cli.verbose),
    };
    logging.with_format(cli.log_format).init()?;

    let config = cli.build_config()?;
    debug!(?config, "configuration loaded");

    if let Some(expression) = &cli.eval {
        println!("{}", evaluate_once(expression, &config)?);
        return Ok(());
    }

    run_tui(config)
}

fn run_tui(config: CalculatorConfig) -> CliResult<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    info!("calculator started");

    let result = run_app(&mut terminal, CalculatorApp::with_config(config));

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;
    info!("calculator stopped");

    result
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: CalculatorApp,
) -> CliResult<()> {
    loop {
        let area = terminal.draw(|f| render(&app, f))?.area;

        match event::read()? {
            Event::Key(key) if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) => {
                app.handle_key(key);
            }
            Event::Mouse(mouse) => {
                app.handle_mouse(mouse, keypad_area(area, &app.screen().view));
            }
            _ => {}
        }

        if app.should_quit() {
            return Ok(());
        }
    }
}
