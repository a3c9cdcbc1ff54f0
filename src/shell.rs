use crate::{draft::Field, showcase::Command};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellInput {
  Command(Command),
  List,
  Form,
  Categories,
  Help,
  Quit,
  Empty,
}

pub const HELP: &str = "\
set <field> <value>  edit a form field (title, description, category, image, link)
submit               validate the form and add the project
search <query>       filter projects by title, description or category
clear                clear the search query
list                 show the projects matching the query
form                 show the form with its errors
categories           show the category choices
help                 show this message
quit                 leave the shell";

/// Parses one shell line. Values keep everything after the first separating
/// space, so a query may start or end with spaces.
pub fn parse_line(line: &str) -> Result<ShellInput, String> {
  let line = line.trim_end_matches(&['\n', '\r'][..]);
  if line.trim().is_empty() {
    return Ok(ShellInput::Empty);
  }

  let line = line.trim_start();
  let (word, rest) = match line.split_once(' ') {
    Some((word, rest)) => (word, rest),
    None => (line, ""),
  };

  match word {
    "set" => {
      let (field, value) = match rest.split_once(' ') {
        Some((field, value)) => (field, value),
        None => (rest, ""),
      };
      if field.is_empty() {
        return Err("usage: set <field> <value>".to_owned());
      }
      let field: Field = field.parse()?;
      Ok(ShellInput::Command(Command::SetField(field, value.to_owned())))
    }
    "submit" => Ok(ShellInput::Command(Command::Submit)),
    "search" => Ok(ShellInput::Command(Command::SetQuery(rest.to_owned()))),
    "clear" => Ok(ShellInput::Command(Command::ClearQuery)),
    "list" => Ok(ShellInput::List),
    "form" => Ok(ShellInput::Form),
    "categories" => Ok(ShellInput::Categories),
    "help" => Ok(ShellInput::Help),
    "quit" | "exit" => Ok(ShellInput::Quit),
    unknown => Err(format!("unknown command: {}, type `help`", unknown)),
  }
}
