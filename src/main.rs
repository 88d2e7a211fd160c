// main.rs

use std::env;

mod completion;
mod error;
mod history;
mod ops;
mod parser;
mod repl;
mod util;

use crate::history::History;

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Logging configured.");

    let environment = env::var("ENVIRONMENT").unwrap_or_else(|_| String::from("PRODUCTION"));
    log::info!("Environment loaded: {environment}");

    println!("Welcome to the calculator REPL! Type 'exit' to quit.");
    println!("You can also type 'history' to view past calculations, 'clear' to clear history, or 'undo' to remove the last calculation.");

    let mut history = History::new();
    repl::start_repl(&mut history)
}
