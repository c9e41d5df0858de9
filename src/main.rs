//! damped-oscillator CLI binary

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;
use cli::{parse_command, Cli, Commands, SessionCommand, SESSION_HELP};

use damped_oscillator::{
    evaluate, export_charts, Config, DerivedMetrics, OscillatorParameters, Parameter, Session,
    THEORY,
};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load(path)
            .with_context(|| format!("failed to load config {}", path.display()))?,
        None => Config::default(),
    };
    cli.params.apply(&mut config.parameters);

    match cli.command {
        Commands::Render(args) => {
            args.apply(&mut config);
            config.validate().context("invalid configuration")?;
            let params = config.parameters;
            let traj = evaluate(&params).context("evaluation failed")?;
            let files = export_charts(&traj, &params, &config.export)
                .context("failed to export charts")?;
            println!("{}", files.full.display());
            println!("{}", files.zoom.display());
        }
        Commands::Metrics => {
            let params = config.parameters;
            let traj = evaluate(&params).context("evaluation failed")?;
            print_parameters(&params);
            println!("{}", DerivedMetrics::new(&params, &traj));
        }
        Commands::Theory => print!("{THEORY}"),
        Commands::Interactive => run_session(&config)?,
    }

    Ok(())
}

fn print_parameters(params: &OscillatorParameters) {
    for parameter in Parameter::ALL {
        println!("  {:<30} {}", parameter.label(), params.get(parameter));
    }
    println!("  {:<30} {}", "Samples", params.samples);
    println!();
}

fn run_session(config: &Config) -> Result<()> {
    let mut session = Session::new(config.parameters).context("invalid initial parameters")?;
    info!("interactive session started, type `help` for commands");

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    write!(stdout, "> ")?;
    stdout.flush()?;

    for line in stdin.lock().lines() {
        let line = line.context("failed to read stdin")?;
        match parse_command(&line) {
            Ok(None) => {}
            Ok(Some(SessionCommand::Set(parameter, value))) => {
                match session.set(parameter, value) {
                    Ok(applied) => {
                        if applied != value {
                            warn!(%parameter, requested = value, applied, "value clamped");
                        }
                        println!("{parameter} = {applied}");
                        println!("{}", session.metrics());
                    }
                    Err(e) => warn!("{e}"),
                }
            }
            Ok(Some(SessionCommand::Show)) => {
                print_parameters(session.parameters());
                println!("{}", session.metrics());
            }
            Ok(Some(SessionCommand::Save)) => {
                match export_charts(session.trajectory(), session.parameters(), &config.export) {
                    Ok(files) => println!(
                        "saved {} and {}",
                        files.full.display(),
                        files.zoom.display()
                    ),
                    Err(e) => warn!("export failed: {e}"),
                }
            }
            Ok(Some(SessionCommand::Help)) => println!("{SESSION_HELP}"),
            Ok(Some(SessionCommand::Quit)) => break,
            Err(message) => warn!("{message}"),
        }
        write!(stdout, "> ")?;
        stdout.flush()?;
    }

    Ok(())
}
