use crate::events::SortKey;
use thiserror::Error;

pub const ADD_USAGE: &str = "add <name> <quantity>";
pub const SELL_USAGE: &str = "sell <name> <quantity>";

/// A line typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Add { name: String, quantity: String },
    Sell { name: String, quantity: String },
    Sort(Option<SortKey>),
    Show,
    Help,
    Exit,
    Empty,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum InputError {
    #[error("unknown command `{0}`, type `help` to list commands")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("cannot sort by `{0}`, only `name` is supported")]
    UnknownSortKey(String),
}

/// Parses one line. Names may contain spaces, the last word is the quantity.
pub fn parse_line(line: &str) -> Result<Input, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(Input::Empty);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };

    match command.to_lowercase().as_str() {
        "add" => {
            let (name, quantity) = name_and_quantity(rest).ok_or(InputError::Usage(ADD_USAGE))?;
            Ok(Input::Add { name, quantity })
        }
        "sell" | "buy" => {
            let (name, quantity) =
                name_and_quantity(rest).ok_or(InputError::Usage(SELL_USAGE))?;
            Ok(Input::Sell { name, quantity })
        }
        "sort" if rest.is_empty() => Ok(Input::Sort(Some(SortKey::Name))),
        "sort" => SortKey::parse(rest)
            .map(|key| Input::Sort(Some(key)))
            .ok_or_else(|| InputError::UnknownSortKey(rest.to_owned())),
        "show" => Ok(Input::Show),
        "help" => Ok(Input::Help),
        "exit" | "quit" => Ok(Input::Exit),
        _ => Err(InputError::Unknown(command.to_owned())),
    }
}

fn name_and_quantity(rest: &str) -> Option<(String, String)> {
    let (name, quantity) = rest.rsplit_once(char::is_whitespace)?;
    let name = name.trim();

    if name.is_empty() {
        return None;
    }

    Some((name.to_owned(), quantity.to_owned()))
}
