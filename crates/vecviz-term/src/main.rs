//! vecviz terminal
//!
//! Run with:
//! ```bash
//! cargo run -p vecviz-term
//! cargo run -p vecviz-term -- --settings scene.json --script setup.vv
//! cargo run -p vecviz-term -- --replay history.json --log session.jsonl
//! ```
//!
//! Each line typed at the `vecviz> ` prompt is an expression; commands are
//! called like functions and their results can be kept in variables:
//!
//! ```text
//! vecviz> let a = createVector2("a", [1, 0, 0])
//! vecviz> let b = createVector2("b", [0, 1, 0])
//! vecviz> crossProduct(a, b)
//! Result0
//! ```

use std::path::PathBuf;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use vecviz_cmd::{CmdResult, CommandEngine, ConsoleSink, Value};
use vecviz_scene::{SceneContext, SceneSettings};

const PROMPT: &str = "vecviz> ";

const USAGE: &str = "\
Usage: vecviz [OPTIONS]

Options:
  --settings <file>  Load scene settings from a JSON file
  --script <file>    Evaluate an expression script before the prompt
  --replay <file>    Replay a JSON command list before the prompt
  --log <file>       Append every recorded command to a file
  --help             Show this message";

/// Command-line options
#[derive(Debug, Default)]
struct Options {
    settings: Option<PathBuf>,
    script: Option<PathBuf>,
    replay: Option<PathBuf>,
    log: Option<PathBuf>,
}

impl Options {
    /// Parse `std::env::args`; `Ok(None)` means help was requested
    fn parse(args: impl IntoIterator<Item = String>) -> Result<Option<Self>, String> {
        let mut opts = Options::default();
        let mut args = args.into_iter();
        while let Some(arg) = args.next() {
            let slot = match arg.as_str() {
                "--settings" => &mut opts.settings,
                "--script" => &mut opts.script,
                "--replay" => &mut opts.replay,
                "--log" => &mut opts.log,
                "--help" | "-h" => return Ok(None),
                other => return Err(format!("unknown option '{}'", other)),
            };
            let value = args
                .next()
                .ok_or_else(|| format!("option '{}' needs a file argument", arg))?;
            *slot = Some(PathBuf::from(value));
        }
        Ok(Some(opts))
    }
}

/// Console that echoes menu-invoked commands to the terminal
struct StdoutConsole;

impl ConsoleSink for StdoutConsole {
    fn print_input(&mut self, input: &str) {
        println!("{}{}", PROMPT, input);
    }

    fn print_output(&mut self, output: &str) {
        println!("{}", output);
    }

    fn prompt(&mut self) {}
}

/// Build the engine and run the startup options
fn start(opts: &Options) -> CmdResult<CommandEngine> {
    let mut scene = SceneContext::headless();
    if let Some(path) = &opts.settings {
        scene = scene.with_settings(SceneSettings::load(path)?);
    }

    let mut engine = CommandEngine::with_scene(scene)?;
    engine.set_console(Box::new(StdoutConsole));

    if let Some(path) = &opts.log {
        engine.log_open(path)?;
    }
    if let Some(path) = &opts.replay {
        let json = std::fs::read_to_string(path)?;
        let results = engine.execute_json_cmd_list(&json)?;
        log::info!("Replayed {} commands from {:?}", results.len(), path);
    }
    if let Some(path) = &opts.script {
        print_result(&engine.run_script(path)?);
    }
    Ok(engine)
}

fn print_result(value: &Value) {
    if !value.is_none() {
        println!("{}", value);
    }
}

/// Read-evaluate-print loop
fn repl(engine: &mut CommandEngine) -> rustyline::Result<()> {
    let mut rl = DefaultEditor::new()?;

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }
                if input == "quit" || input == "exit" {
                    break;
                }
                let _ = rl.add_history_entry(input);

                match engine.evaluate(input) {
                    Ok(value) => print_result(&value),
                    Err(e) => eprintln!("Error: {}", e),
                }
                if engine.take_menu_refresh() {
                    log::debug!("entity set changed");
                }
            }
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => {
                // Ctrl+C or Ctrl+D
                log::info!("EOF/interrupt received, exiting...");
                break;
            }
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let opts = match Options::parse(std::env::args().skip(1)) {
        Ok(Some(opts)) => opts,
        Ok(None) => {
            println!("{}", USAGE);
            return;
        }
        Err(e) => {
            eprintln!("Error: {}\n\n{}", e, USAGE);
            std::process::exit(2);
        }
    };

    let mut engine = match start(&opts) {
        Ok(engine) => engine,
        Err(e) => {
            log::error!("Startup failed: {}", e);
            std::process::exit(1);
        }
    };

    println!("vecviz terminal. Type listCommands() for commands, help(\"name\") for details, quit to exit.");
    if let Err(e) = repl(&mut engine) {
        log::error!("Terminal error: {}", e);
    }

    if let Err(e) = engine.log_close() {
        log::error!("Could not close command log: {}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Option<Options>, String> {
        Options::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn test_parse_options() {
        let opts = parse(&["--script", "a.vv", "--log", "out.jsonl"]).unwrap().unwrap();
        assert_eq!(opts.script, Some(PathBuf::from("a.vv")));
        assert_eq!(opts.log, Some(PathBuf::from("out.jsonl")));
        assert!(opts.settings.is_none());
        assert!(opts.replay.is_none());
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!(parse(&["--script"]).is_err());
        assert!(parse(&["--verbose"]).is_err());
        assert!(parse(&["--help"]).unwrap().is_none());
    }

    #[test]
    fn test_start_without_options() {
        let engine = start(&Options::default()).unwrap();
        assert!(engine.history().is_empty());
        assert!(engine.scene().vectors.is_empty());
    }
}
