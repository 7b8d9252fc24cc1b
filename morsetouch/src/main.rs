use std::io::{self, BufRead, Read};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Arc};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use morsetouch::{
    encode_text, login_form, parse_raw_line, parse_script, run_script, LoginHost, Speaker,
};
use morsetouch_core::{Config, DecodeTables, MorseContext, MorseTouch, TableKind};

#[derive(Parser)]
#[command(name = "morsetouch")]
#[command(about = "Gesture-driven Morse text entry with spoken feedback")]
#[command(version)]
struct Cli {
    /// Configuration file (TOML)
    #[arg(global = true, short, long)]
    config: Option<PathBuf>,

    /// More logging (-v debug, -vv trace); RUST_LOG overrides
    #[arg(global = true, short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a gesture script against the demo login form
    Run {
        /// Script file; reads stdin when omitted
        script: Option<PathBuf>,
    },
    /// Enter gestures line by line through the tap classifier
    Interactive,
    /// Print the gesture script that types TEXT
    Encode { text: String },
    /// Print the decode tables
    Tables {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Print the default configuration, or write it to a file
    InitConfig {
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct TableEntry {
    kind: TableKind,
    code: String,
    text: &'static str,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_target(false)
        .with_env_filter(filter)
        .init();
}

fn load_config(path: Option<&Path>) -> Result<Config> {
    match path {
        Some(path) => {
            let config = Config::load_toml(path)
                .with_context(|| format!("failed to load config from {}", path.display()))?;
            tracing::debug!(path = %path.display(), "loaded config");
            Ok(config)
        }
        None => Ok(Config::default()),
    }
}

fn print_context(context: &MorseContext, config: &Config) {
    let field = context.field_name.as_deref().unwrap_or("-");
    println!("[{}] {} | pending: {}", context.mode.as_str(), field, context.pending);
    if context.show_result_view {
        println!("  {}", context.result_label(&config.phrases.result_label));
        println!("  {}", context.combined_label(&config.phrases.combined_label));
    }
}

fn handle_run(script: Option<&Path>, config: Config) -> Result<()> {
    let text = match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read script {}", path.display()))?,
        None => {
            let mut text = String::new();
            io::stdin().read_to_string(&mut text).context("failed to read stdin")?;
            text
        }
    };
    let events = parse_script(&text)?;
    tracing::debug!(count = events.len(), "parsed script");

    let (speech, speaker) = Speaker::spawn(io::stdout());
    let (touch, host) = run_script(&events, Arc::new(speech), config.clone());
    let context = touch.context().clone();
    drop(touch);
    speaker.finish()?;

    print_context(&context, &config);
    let state = host.state();
    println!("username: {:?}", state.username);
    println!("password: {:?}", state.password);
    println!("submitted: {}", state.submitted);
    Ok(())
}

fn handle_interactive(config: Config) -> Result<()> {
    println!("morsetouch: . tap, : double-tap, * long-press, < left, - right, ^ up, v down");
    println!(
        "Two taps entered within {} ms make a double tap. Ctrl-D to exit.",
        config.double_tap_window().as_millis()
    );

    let (lines_tx, lines_rx) = mpsc::channel::<(Instant, String)>();
    std::thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            match line {
                Ok(line) => {
                    if lines_tx.send((Instant::now(), line)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    tracing::error!("error reading stdin: {}", e);
                    break;
                }
            }
        }
    });

    let (speech, speaker) = Speaker::spawn(io::stdout());
    let host = LoginHost::new();
    let speech = Arc::new(speech);
    let mut touch = MorseTouch::open(login_form(), speech, host.ports(), config.clone());
    let mut classifier = config.classifier();

    loop {
        let mut events = Vec::new();
        match lines_rx.recv_timeout(classifier.window()) {
            Ok((at, line)) => {
                for raw in parse_raw_line(&line) {
                    events.extend(classifier.feed(raw, at));
                }
            }
            Err(mpsc::RecvTimeoutError::Timeout) => events.extend(classifier.tick(Instant::now())),
            Err(mpsc::RecvTimeoutError::Disconnected) => {
                if let Some(event) = classifier.flush() {
                    touch.process_gesture(event);
                }
                break;
            }
        }
        if events.is_empty() {
            continue;
        }
        for event in events {
            touch.process_gesture(event);
        }
        print_context(touch.context(), &config);
    }

    drop(touch);
    speaker.finish()?;
    let state = host.state();
    println!(
        "username: {:?}, password: {:?}, submitted: {}",
        state.username, state.password, state.submitted
    );
    Ok(())
}

fn handle_tables(json: bool) -> Result<()> {
    let tables = DecodeTables::standard();
    let entries: Vec<TableEntry> = TableKind::ORDER
        .iter()
        .flat_map(|&kind| tables.entries(kind))
        .map(|(seq, token)| TableEntry {
            kind: token.kind,
            code: seq.to_string(),
            text: token.text,
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
        return Ok(());
    }
    for kind in TableKind::ORDER {
        println!("{}:", kind.as_str());
        for entry in entries.iter().filter(|e| e.kind == kind) {
            println!("  {:<8} {}", entry.code, entry.text);
        }
    }
    Ok(())
}

fn handle_init_config(output: Option<&Path>, config: &Config) -> Result<()> {
    match output {
        Some(path) => {
            config
                .save_toml(path)
                .with_context(|| format!("failed to write {}", path.display()))?;
            println!("Wrote config to {}", path.display());
        }
        None => print!("{}", config.to_toml_string()?),
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Run { script } => handle_run(script.as_deref(), config),
        Commands::Interactive => handle_interactive(config),
        Commands::Encode { text } => {
            println!("{}", encode_text(&text)?);
            Ok(())
        }
        Commands::Tables { json } => handle_tables(json),
        Commands::InitConfig { output } => handle_init_config(output.as_deref(), &config),
    }
}
