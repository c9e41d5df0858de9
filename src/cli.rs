//! Command line interface for the damped oscillator explorer.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use damped_oscillator::{Config, OscillatorParameters, Parameter};

/// Damped harmonic oscillator explorer
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub params: ParamArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render the full and zoomed charts to PNG files
    Render(RenderArgs),

    /// Print derived metrics for the current parameters
    Metrics,

    /// Print the closed-form solutions
    Theory,

    /// Adjust parameters line by line on stdin
    Interactive,
}

/// Oscillator parameters, overriding the configuration file
#[derive(Args, Debug, Default)]
pub struct ParamArgs {
    /// Natural frequency ω₀ [rad/s], 0.1 to 10
    #[arg(long, global = true, value_parser = parse_omega0)]
    pub omega0: Option<f64>,

    /// Initial displacement x₀ [m], 0.1 to 10
    #[arg(long, global = true, value_parser = parse_x0)]
    pub x0: Option<f64>,

    /// Initial velocity v₀ [m/s], -5 to 5
    #[arg(long, global = true, value_parser = parse_v0, allow_hyphen_values = true)]
    pub v0: Option<f64>,

    /// Time horizon [s], whole seconds from 2 to 20
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(2..=20))]
    pub t_max: Option<u32>,

    /// Underdamped ratio, 0.01 to 0.99
    #[arg(long, global = true, value_parser = parse_xi_under)]
    pub xi_under: Option<f64>,

    /// Overdamped ratio, 1.01 to 3.0
    #[arg(long, global = true, value_parser = parse_xi_over)]
    pub xi_over: Option<f64>,

    /// Grid resolution
    #[arg(long, global = true, value_parser = clap::value_parser!(u32).range(2..=1_000_000))]
    pub samples: Option<u32>,
}

impl ParamArgs {
    /// Overwrite the parameters given on the command line.
    pub fn apply(&self, params: &mut OscillatorParameters) {
        let overrides = [
            (Parameter::Omega0, self.omega0),
            (Parameter::X0, self.x0),
            (Parameter::V0, self.v0),
            (Parameter::TMax, self.t_max.map(f64::from)),
            (Parameter::XiUnder, self.xi_under),
            (Parameter::XiOver, self.xi_over),
        ];
        for (parameter, value) in overrides {
            if let Some(value) = value {
                *params = params.with(parameter, value);
            }
        }
        if let Some(samples) = self.samples {
            params.samples = samples as usize;
        }
    }
}

/// Output overrides for `render`
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Output directory
    #[arg(short, long)]
    pub out_dir: Option<PathBuf>,

    /// Image width [px]
    #[arg(long)]
    pub width: Option<u32>,

    /// Image height [px]
    #[arg(long)]
    pub height: Option<u32>,
}

impl RenderArgs {
    /// Overwrite the export settings given on the command line.
    pub fn apply(&self, config: &mut Config) {
        if let Some(dir) = &self.out_dir {
            config.export.out_dir = dir.clone();
        }
        if let Some(width) = self.width {
            config.export.width = width;
        }
        if let Some(height) = self.height {
            config.export.height = height;
        }
    }
}

fn parse_in_range(parameter: Parameter, text: &str) -> Result<f64, String> {
    let value: f64 = text
        .trim()
        .parse()
        .map_err(|_| format!("`{text}` is not a number"))?;
    let range = parameter.range();
    if !range.contains(value) {
        return Err(format!(
            "{} must lie in [{}, {}]",
            parameter, range.min, range.max
        ));
    }
    // Same step grid as the interactive session
    parameter
        .clamp(value)
        .ok_or_else(|| format!("`{text}` is not a number"))
}

fn parse_omega0(text: &str) -> Result<f64, String> {
    parse_in_range(Parameter::Omega0, text)
}

fn parse_x0(text: &str) -> Result<f64, String> {
    parse_in_range(Parameter::X0, text)
}

fn parse_v0(text: &str) -> Result<f64, String> {
    parse_in_range(Parameter::V0, text)
}

fn parse_xi_under(text: &str) -> Result<f64, String> {
    parse_in_range(Parameter::XiUnder, text)
}

fn parse_xi_over(text: &str) -> Result<f64, String> {
    parse_in_range(Parameter::XiOver, text)
}

/// One line of the interactive session
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SessionCommand {
    /// `set <param> <value>`
    Set(Parameter, f64),
    /// `show`
    Show,
    /// `save`
    Save,
    /// `help`
    Help,
    /// `quit` / `exit`
    Quit,
}

/// Help text for the interactive session
pub const SESSION_HELP: &str = "\
commands:
  set <param> <value>   change a parameter (omega0, x0, v0, t_max, xi_under, xi_over)
  show                  print parameters and metrics
  save                  export both charts
  help                  this message
  quit                  leave the session";

/// Parse one interactive line. Blank lines and `#` comments yield `None`.
pub fn parse_command(line: &str) -> Result<Option<SessionCommand>, String> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }
    let mut words = line.split_whitespace();
    let command = match words.next().unwrap_or_default() {
        "set" => {
            let key = words.next().ok_or("usage: set <param> <value>")?;
            let parameter =
                Parameter::from_key(key).ok_or_else(|| format!("unknown parameter `{key}`"))?;
            let value = words.next().ok_or("usage: set <param> <value>")?;
            let value: f64 = value
                .parse()
                .map_err(|_| format!("`{value}` is not a number"))?;
            SessionCommand::Set(parameter, value)
        }
        "show" => SessionCommand::Show,
        "save" => SessionCommand::Save,
        "help" | "?" => SessionCommand::Help,
        "quit" | "exit" | "q" => SessionCommand::Quit,
        other => return Err(format!("unknown command `{other}`, try `help`")),
    };
    if words.next().is_some() {
        return Err("too many arguments".into());
    }
    Ok(Some(command))
}
