// repl.rs

use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;
use rustyline::{CompletionType, Config, Editor};

use crate::completion::CommandCompleter;
use crate::error::CalcError;
use crate::history::{CalculationRecord, History};
use crate::parser::parse_request;
use crate::util::format_number;

const PROMPT: &str =
    "Enter an operation (add, subtract, multiply, divide) and two numbers, or a command: ";

/// What the dispatcher decided for one line of input.
#[derive(Debug, PartialEq)]
pub enum Outcome {
    /// Lines to print; the loop keeps running.
    Reply(Vec<String>),
    /// Terminal state: stop reading input.
    Exit,
}

pub fn start_repl(history: &mut History) -> anyhow::Result<()> {
    let config = Config::builder()
        .completion_type(CompletionType::List)
        .build();
    let mut rl: Editor<CommandCompleter, DefaultHistory> = Editor::with_config(config)?;
    rl.set_helper(Some(CommandCompleter::new()));
    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                // Line-editor recall history, separate from the calculation store.
                let _ = rl.add_history_entry(line.as_str());
                match handle_line(&line, history) {
                    Outcome::Reply(lines) => {
                        for out in lines {
                            println!("{out}");
                        }
                    }
                    Outcome::Exit => {
                        println!("Exiting calculator...");
                        break;
                    }
                }
            }
            // End-of-input and Ctrl-C behave like an explicit `exit`.
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => {
                log::info!("Input stream closed; exiting the calculator.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }
    Ok(())
}

/// Classify one line of input and execute it against the history store.
/// Control keywords are matched case-insensitively; anything else is treated
/// as a calculation request.
pub fn handle_line(line: &str, history: &mut History) -> Outcome {
    let trimmed = line.trim();
    match trimmed.to_lowercase().as_str() {
        "exit" => {
            log::info!("User exited the calculator.");
            Outcome::Exit
        }
        "history" => {
            log::info!("User requested calculation history.");
            let mut lines = vec!["Calculation History:".to_string()];
            lines.extend(history.iter().map(ToString::to_string));
            Outcome::Reply(lines)
        }
        "clear" => {
            history.clear();
            log::info!("User cleared the calculation history.");
            Outcome::Reply(vec!["History cleared.".to_string()])
        }
        "undo" => {
            // Same confirmation whether or not anything was removed.
            history.undo();
            log::info!("User undid the last calculation.");
            Outcome::Reply(vec!["Last calculation undone.".to_string()])
        }
        _ => Outcome::Reply(vec![calculate(trimmed, history)]),
    }
}

fn calculate(line: &str, history: &mut History) -> String {
    let (op, lhs, rhs) = match parse_request(line) {
        Ok(parsed) => parsed,
        Err(err @ CalcError::UnknownOperation(_)) => {
            log::warn!("{err}");
            return err.to_string();
        }
        Err(err) => {
            log::error!("Invalid input format provided by user.");
            return err.to_string();
        }
    };
    match op.apply(lhs, rhs) {
        Ok(result) => {
            let record = CalculationRecord::new(op, lhs, rhs, result);
            log::info!("Performed calculation: {record}");
            history.add(record);
            format!("Result: {}", format_number(result))
        }
        Err(err) => {
            log::error!("Error during division: {err}");
            err.to_string()
        }
    }
}
