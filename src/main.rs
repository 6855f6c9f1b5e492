use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::io::{BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use zcalc::calculator::{
    ACTION_NAMES, AngleMode, Calculator, CalculatorSnapshot, copy_to_clipboard, parse_keys,
};
use zcalc::config::Config;
use zcalc::display::{DisplaySurface, TextDisplay};
use zcalc::ui::render_panel;

#[derive(Parser)]
#[command(name = "zcalc")]
#[command(about = "A key-driven scientific calculator")]
#[command(after_help = "Keys are digits, . + - * / = and the action names: see --list-keys")]
struct Cli {
    /// Keys to press, e.g. `2 + 3 * 4 =` or `9 sqrt sign`
    keys: Vec<String>,

    /// Read key scripts from stdin line by line and show the panel after each
    #[arg(short, long)]
    interactive: bool,

    /// Angle mode for trigonometric keys
    #[arg(short, long, value_enum)]
    angle: Option<AngleArg>,

    /// Config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the final state as JSON instead of the display text
    #[arg(long)]
    json: bool,

    /// Copy the final display to the clipboard
    #[arg(long)]
    copy: bool,

    /// List the named action keys and exit
    #[arg(long)]
    list_keys: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum AngleArg {
    Deg,
    Rad,
}

impl From<AngleArg> for AngleMode {
    fn from(arg: AngleArg) -> Self {
        match arg {
            AngleArg::Deg => AngleMode::Deg,
            AngleArg::Rad => AngleMode::Rad,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_keys {
        for name in ACTION_NAMES {
            println!("{name}");
        }
        return Ok(());
    }

    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let mut options = config.calculator_options();
    if let Some(angle) = cli.angle {
        options.angle_mode = angle.into();
    }

    let mut calc = Calculator::with_options(TextDisplay::new(), options);

    let script = cli.keys.join(" ");
    press_all(&mut calc, &script)?;

    if cli.interactive {
        run_interactive(&mut calc, config.panel_width)?;
    } else if cli.json {
        let snapshot = CalculatorSnapshot::capture(&calc);
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
    } else {
        println!("{}", calc.display());
    }

    if cli.copy {
        copy_to_clipboard(calc.display())?;
    }

    Ok(())
}

fn press_all<D: DisplaySurface>(calc: &mut Calculator<D>, script: &str) -> Result<()> {
    let keys = parse_keys(script).with_context(|| format!("Invalid key script: {script}"))?;
    for key in keys {
        calc.press(key);
    }
    Ok(())
}

fn run_interactive<D: DisplaySurface>(calc: &mut Calculator<D>, width: usize) -> Result<()> {
    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout();

    writeln!(stdout, "{}", render_panel(&CalculatorSnapshot::capture(calc), width))?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read from stdin")?;
        let line = line.trim();
        if matches!(line, "quit" | "exit") {
            break;
        }

        // A bad line is reported but does not end the session
        if let Err(err) = press_all(calc, line) {
            writeln!(stdout, "{err:#}")?;
            continue;
        }

        writeln!(stdout, "{}", render_panel(&CalculatorSnapshot::capture(calc), width))?;
        stdout.flush()?;
    }

    Ok(())
}
