// completion.rs

use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::{ValidationContext, ValidationResult, Validator};
use rustyline::{Context, Helper};

use crate::ops::Operation;

const CONTROL_COMMANDS: [&str; 4] = ["exit", "history", "clear", "undo"];

/// Completes the first token of a line against the control commands and the
/// operation names. Operands have no completions.
pub struct CommandCompleter;

impl CommandCompleter {
    pub fn new() -> Self {
        Self
    }
}

impl Completer for CommandCompleter {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> Result<(usize, Vec<Pair>), ReadlineError> {
        let prefix = &line[..pos];
        if prefix.contains(char::is_whitespace) {
            return Ok((pos, vec![]));
        }
        let mut names: Vec<&str> = CONTROL_COMMANDS
            .iter()
            .copied()
            .chain(Operation::ALL.iter().map(|op| op.name()))
            .filter(|name| name.starts_with(prefix))
            .collect();
        names.sort();
        let completions = names
            .iter()
            .map(|n| Pair {
                display: n.to_string(),
                replacement: format!("{} ", n),
            })
            .collect();
        Ok((0, completions))
    }
}

impl Hinter for CommandCompleter {
    type Hint = String;
    fn hint(&self, _line: &str, _pos: usize, _ctx: &Context<'_>) -> Option<String> {
        None
    }
}

impl Highlighter for CommandCompleter {}

impl Validator for CommandCompleter {
    fn validate(&self, _ctx: &mut ValidationContext) -> Result<ValidationResult, ReadlineError> {
        Ok(ValidationResult::Valid(None))
    }
}

impl Helper for CommandCompleter {}
