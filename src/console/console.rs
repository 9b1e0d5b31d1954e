use super::command::Command;
use crate::engine::Actor;
use crate::engine::Batch;
use crate::engine::Reply;
use crate::moves::Table;
use colored::Colorize;
use dialoguer::Input;

/// Line-oriented REPL actor. Lists the decoded valid moves, then prompts
/// until a command produces an action for the engine.
pub struct Console {
    table: Table,
    done: bool,
}

impl Console {
    pub fn new(table: Table) -> Self {
        Self { table, done: false }
    }

    /// set once the player typed exit; the driver loop should stop
    pub fn done(&self) -> bool {
        self.done
    }

    fn listing(&self, valids: &[bool]) -> anyhow::Result<String> {
        Ok(self
            .table
            .labels(valids)?
            .iter()
            .map(|(i, (from, till))| {
                format!(" {}\t:  {} => {}\n", i, from.ordinal(), till.ordinal())
            })
            .collect())
    }

    fn prompt(&mut self) -> Reply {
        loop {
            let line = Input::<String>::new()
                .with_prompt(">")
                .allow_empty(true)
                .interact_text()
                .unwrap_or_default();
            match Command::try_from(line.as_str()) {
                Ok(Command::Genmove(index)) => return Reply::new(index as crate::Action),
                Ok(Command::Exit) => {
                    self.done = true;
                    return Reply::resign();
                }
                Err(reason) => {
                    println!("{} : {} ({})", "invalid command".red().bold(), line, reason);
                    println!("{} :", "available commands".blue());
                    for name in Command::names() {
                        println!("  {}", name);
                    }
                }
            }
        }
    }
}

impl Actor for Console {
    fn act(&mut self, batch: &Batch) -> anyhow::Result<Reply> {
        println!("{}", self.listing(&batch.valids)?);
        Ok(self.prompt())
    }
}
