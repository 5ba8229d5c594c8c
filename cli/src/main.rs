//! fluent-keys CLI: check and evaluate key predicates from the shell.
//!
//! Subcommands:
//! - `check <spec>` — validate a predicate spec compiles
//! - `eval <spec> --key K [--ctrl] [--alt] [--shift] [--trace]` — evaluate a spec
//! - `named <name> --key K [...]` — evaluate an entry of the `is` catalogue
//! - `list` — print the catalogue's entry names

use std::path::Path;
use std::process;

use clap::{Args, Parser, Subcommand};
use fluent_keys::{is, KeyError, KeyEvent, KeyMatchSpec, KeyPredicate};
use log::LevelFilter;

#[derive(Parser, Debug)]
#[command(name = "fluent-keys")]
#[command(version, about = "Evaluate keyboard-event predicates")]
struct Cli {
    /// Log compilation and evaluation details to stderr
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate that a predicate spec loads and compiles
    Check {
        /// Path to a YAML or JSON spec
        spec: String,
    },

    /// Evaluate a predicate spec against one key event
    Eval {
        /// Path to a YAML or JSON spec
        spec: String,

        #[command(flatten)]
        event: EventArgs,
    },

    /// Evaluate a named catalogue entry (e.g. `lowercase.letter`) against one key event
    Named {
        /// Dotted entry name
        name: String,

        #[command(flatten)]
        event: EventArgs,
    },

    /// Print the names of the catalogue entries
    List,
}

#[derive(Args, Debug, Clone)]
struct EventArgs {
    /// The key name, as a browser reports it (`Enter`, `a`, `" "`)
    #[arg(long, short = 'k', allow_hyphen_values = true)]
    key: String,

    /// Control is held
    #[arg(long)]
    ctrl: bool,

    /// Alt is held
    #[arg(long)]
    alt: bool,

    /// Shift is held
    #[arg(long)]
    shift: bool,

    /// Print how each guard and the leaf decided
    #[arg(long)]
    trace: bool,
}

impl EventArgs {
    fn event(&self) -> KeyEvent {
        KeyEvent {
            key: self.key.clone(),
            ctrl_key: self.ctrl,
            alt_key: self.alt,
            shift_key: self.shift,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    setup_log(cli.verbose);

    let result = match cli.command {
        Command::Check { spec } => cmd_check(&spec),
        Command::Eval { spec, event } => cmd_eval(&spec, &event),
        Command::Named { name, event } => cmd_named(&name, &event),
        Command::List => {
            cmd_list();
            Ok(true)
        }
    };

    match result {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
}

fn setup_log(verbose: bool) {
    let mut builder = env_logger::Builder::from_default_env();
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.init();
}

// ═══════════════════════════════════════════════════════════════════════════════
// Commands
// ═══════════════════════════════════════════════════════════════════════════════

fn cmd_check(path: &str) -> Result<bool, KeyError> {
    let spec = load_spec(path)?;
    let predicate = spec.compile()?;
    log::debug!("compiled {spec} (depth {})", predicate.depth());

    println!("Spec valid: {predicate}");
    Ok(true)
}

fn cmd_eval(path: &str, args: &EventArgs) -> Result<bool, KeyError> {
    let predicate = load_spec(path)?.compile()?;
    Ok(report(&predicate, args))
}

fn cmd_named(name: &str, args: &EventArgs) -> Result<bool, KeyError> {
    let predicate = is().lookup(name)?;
    Ok(report(predicate, args))
}

fn cmd_list() {
    for name in is().names() {
        println!("{name}");
    }
}

/// Evaluate and print the outcome; returns whether the predicate matched.
fn report(predicate: &KeyPredicate, args: &EventArgs) -> bool {
    let event = args.event();
    log::debug!("evaluating {predicate} on {event}");

    let matched = if args.trace {
        let trace = predicate.evaluate_with_trace(&event);
        print!("{trace}");
        trace.matched()
    } else {
        predicate.evaluate(&event)
    };

    println!("{}", if matched { "match" } else { "no match" });
    matched
}

// ═══════════════════════════════════════════════════════════════════════════════
// Spec loading
// ═══════════════════════════════════════════════════════════════════════════════

fn load_spec(path: &str) -> Result<KeyMatchSpec, KeyError> {
    let content = std::fs::read_to_string(path).map_err(|e| KeyError::InvalidConfig {
        reason: format!("failed to read \"{path}\": {e}"),
    })?;
    parse_spec(&content, is_json(path))
}

fn is_json(path: &str) -> bool {
    Path::new(path)
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"))
}

fn parse_spec(content: &str, json: bool) -> Result<KeyMatchSpec, KeyError> {
    if json {
        serde_json::from_str(content).map_err(|e| KeyError::InvalidConfig {
            reason: format!("JSON parse error: {e}"),
        })
    } else {
        // Default to YAML (handles .yaml and .yml)
        serde_yaml::from_str(content).map_err(|e| KeyError::InvalidConfig {
            reason: format!("YAML parse error: {e}"),
        })
    }
}
