/// Explicit REPL command table. Every command the prompt understands is
/// enumerated here; unknown input lists the names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// submit an action by table index
    Genmove(usize),
    /// resign and leave the loop
    Exit,
}

impl Command {
    pub const fn names() -> &'static [&'static str] {
        &["genmove", "exit"]
    }
}

impl TryFrom<&str> for Command {
    type Error = &'static str;
    fn try_from(line: &str) -> Result<Self, Self::Error> {
        let mut items = line.split_whitespace();
        match items.next() {
            Some("genmove") => items
                .next()
                .and_then(|n| n.parse::<usize>().ok())
                .map(Self::Genmove)
                .ok_or("genmove takes an action index"),
            Some("exit") => Ok(Self::Exit),
            _ => Err("unknown command"),
        }
    }
}
