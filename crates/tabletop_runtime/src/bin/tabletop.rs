//! Tabletop CLI entry point.

use std::env;
use std::process::ExitCode;

use tabletop_engine::RollMode;
use tabletop_runtime::{Command, Repl, RuntimeConfig, Session, init_tracing};

/// CLI configuration parsed from arguments.
#[derive(Default)]
struct CliConfig {
    show_help: bool,
    show_version: bool,
    trace: bool,
    seed: Option<u64>,
    roll_mode: RollMode,
    /// A one-shot command, as the words after the options.
    command: Vec<String>,
}

fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("\x1b[31mError: {e}\x1b[0m");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: Vec<String>) -> Result<CliConfig, Box<dyn std::error::Error>> {
    let mut config = CliConfig::default();

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => config.show_help = true,
            "-V" | "--version" => config.show_version = true,
            "--trace" => config.trace = true,
            "--min" => config.roll_mode = RollMode::Min,
            "--max" => config.roll_mode = RollMode::Max,
            "--seed" => {
                let value = args.next().ok_or("--seed requires a value")?;
                config.seed = Some(
                    value
                        .parse()
                        .map_err(|_| format!("invalid --seed value: {value}"))?,
                );
            }
            arg if arg.starts_with('-') => {
                return Err(format!("unknown option: {arg}").into());
            }
            // Everything from the command word on belongs to the command.
            word => {
                config.command.push(word.to_string());
                config.command.extend(args.by_ref());
            }
        }
    }

    Ok(config)
}

fn run(args: Vec<String>) -> Result<(), Box<dyn std::error::Error>> {
    let cli = parse_args(args)?;

    if cli.show_help {
        print_help();
        return Ok(());
    }

    if cli.show_version {
        println!("tabletop {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }

    let mut engine = tabletop_engine::EngineConfig::default().with_roll_mode(cli.roll_mode);
    if let Some(seed) = cli.seed {
        engine = engine.with_seed(seed);
    }
    let config = RuntimeConfig::default()
        .with_trace(cli.trace)
        .with_engine(engine);
    init_tracing(config.trace);

    // One-shot command
    if !cli.command.is_empty() {
        let command = Command::parse(&cli.command.join(" "))?;
        let output = Session::new(&config).execute(&command)?;
        if !output.is_empty() {
            println!("{output}");
        }
        return Ok(());
    }

    Repl::new(&config)?.run()?;
    Ok(())
}

fn print_help() {
    println!(
        "\x1b[1mTabletop\x1b[0m - Dice, reference and event-binding grammars

\x1b[1mUSAGE:\x1b[0m
    tabletop [OPTIONS] [COMMAND...]

\x1b[1mOPTIONS:\x1b[0m
    -h, --help         Print help information
    -V, --version      Print version information
    --seed N           Seed random rolls so they repeat
    --min              Every die rolls 1
    --max              Every die rolls its highest face
    --trace            Log parser and engine activity to stderr

\x1b[1mCOMMANDS:\x1b[0m
{}

\x1b[1mEXAMPLES:\x1b[0m
    tabletop                                  Start interactive REPL
    tabletop roll 2d6+1d4-3                   Roll once and exit
    tabletop --seed 7 roll 4d6                Repeatable roll
    tabletop tree roll d100                   Show a parse tree
    tabletop action 'click[ctrl]:roll(str)'   Validate a binding

Without a command, starts the REPL. Ctrl+D exits.",
        tabletop_runtime::command::help_text()
            .lines()
            .map(|line| format!("    {line}"))
            .collect::<Vec<_>>()
            .join("\n")
    );
}
