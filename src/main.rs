use std::env;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use trailhead::cli::{Cli, RunConfig};
use trailhead::runner;
use trailhead::shell;
use trailhead::ui;

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // clap renders --help and --version through its error path too;
            // those exit 0. Actual parse errors print the usage text and
            // exit 1.
            let _ = err.print();
            return if err.exit_code() == 0 {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            };
        }
    };

    init_tracing(cli.verbose);

    if cli.no_color {
        // Honored by console and by anything the validation suite spawns.
        env::set_var("NO_COLOR", "1");
    }

    let interactive = console::Term::stdout().is_term() && !shell::is_ci();
    let mut ui = ui::create_ui(interactive);

    let config = RunConfig::from_cli(&cli);
    match runner::run_default(&config, ui.as_mut()) {
        Ok(code) => ExitCode::from(code.clamp(0, 255) as u8),
        Err(err) => {
            ui.error(&err.to_string());
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("trailhead=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trailhead=info"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
