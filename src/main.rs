extern crate colored;
extern crate serde_json;

use std::{
  cell::RefCell,
  io::{BufRead, Write},
  rc::Rc,
};

use colored::Colorize;
use log::debug;

use showcase::{
  draft::Field,
  shell::{parse_line, ShellInput, HELP},
  viewer::Viewer,
  Command, Config, Outcome, Showcase,
};

fn build_cli() -> clap::Command<'static> {
  clap::Command::new("showcase")
    .about("Portfolio projects: search and add")
    .arg_required_else_help(true)
    .subcommand(
      clap::Command::new("list").args(&[
        clap::Arg::new("query").index(1),
        clap::Arg::new("json").long("json"),
      ]),
    )
    .subcommand(clap::Command::new("categories"))
    .subcommand(clap::Command::new("add").args(&[
      clap::Arg::new("title").long("title").takes_value(true),
      clap::Arg::new("description").long("description").takes_value(true),
      clap::Arg::new("category").long("category").takes_value(true),
      clap::Arg::new("image").long("image").takes_value(true),
      clap::Arg::new("link").long("link").takes_value(true),
    ]))
    .subcommand(clap::Command::new("shell"))
    .subcommand(
      clap::Command::new("completions").arg(
        clap::Arg::new("shell")
          .required(true)
          .index(1)
          .possible_values(["bash", "elvish", "fish", "powershell", "zsh"]),
      ),
    )
}

fn main() {
  env_logger::init();

  let matches = build_cli().get_matches();

  if let Some(("completions", command_matches)) = matches.subcommand() {
    let shell: clap_complete::Shell = match command_matches.value_of_t("shell") {
      Ok(shell) => shell,
      Err(err) => err.exit(),
    };
    clap_complete::generate(shell, &mut build_cli(), "showcase", &mut std::io::stdout());
    return;
  }

  let config = match Config::load() {
    Ok(config) => config,
    Err(err) => exit_with_error(&err),
  };
  let seed = match config.seed() {
    Ok(seed) => seed,
    Err(err) => exit_with_error(&err),
  };
  debug!("starting with {} projects", seed.len());

  let showcase = Rc::new(RefCell::new(Showcase::new(seed, &config.default_query)));
  let viewer = Viewer::new(Rc::clone(&showcase));

  match matches.subcommand() {
    Some(("list", command_matches)) => {
      if let Some(query) = command_matches.value_of("query") {
        showcase
          .borrow_mut()
          .handle(Command::SetQuery(query.to_owned()));
      }

      if command_matches.is_present("json") {
        let visible = showcase.borrow().visible();
        match serde_json::to_string_pretty(&visible) {
          Ok(json) => println!("{}", json),
          Err(err) => exit_with_error(&format!("couldn't serialize projects: {}", err)),
        }
        return;
      }
      viewer.print_projects();
    }

    Some(("categories", _)) => {
      viewer.print_categories();
    }

    Some(("add", command_matches)) => {
      for field in Field::ALL.iter() {
        if let Some(value) = command_matches.value_of(field.name()) {
          if *field == Field::Category {
            viewer.print_category_warning(value);
          }
          showcase
            .borrow_mut()
            .handle(Command::SetField(*field, value.to_owned()));
        }
      }

      let outcome = showcase.borrow_mut().handle(Command::Submit);
      match outcome {
        Outcome::Added(project) => {
          println!("project added:");
          viewer.print_project(&project);
          println!();
          viewer.print_projects();
        }
        Outcome::Rejected(errors) => {
          println!("couldn't add project:");
          viewer.print_errors(&errors);
          std::process::exit(1);
        }
        _ => {}
      }
    }

    Some(("shell", _)) => run_shell(&showcase, &viewer),

    Some((subcmd, _)) => println!("unknown subcommand {}", subcmd),
    None => println!("subcommand not found"),
  };
}

fn run_shell(showcase: &Rc<RefCell<Showcase>>, viewer: &Viewer) {
  println!("{}", "type `help` for commands".dimmed());

  let stdin = std::io::stdin();
  let mut lines = stdin.lock().lines();
  loop {
    print!("> ");
    if let Err(err) = std::io::stdout().flush() {
      println!("write err: {}", err);
      return;
    }

    let line = match lines.next() {
      Some(Ok(line)) => line,
      Some(Err(err)) => {
        println!("read err: {}", err);
        return;
      }
      None => return,
    };

    let input = match parse_line(&line) {
      Ok(input) => input,
      Err(err) => {
        println!("{}", err.red());
        continue;
      }
    };

    match input {
      ShellInput::Command(command) => {
        if let Command::SetField(Field::Category, value) = &command {
          viewer.print_category_warning(value);
        }
        let outcome = showcase.borrow_mut().handle(command);
        match outcome {
          Outcome::Added(project) => {
            println!("project added:");
            viewer.print_project(&project);
          }
          Outcome::Rejected(errors) => viewer.print_errors(&errors),
          Outcome::QueryChanged => viewer.print_projects(),
          Outcome::FieldSet(_) => {}
        }
      }
      ShellInput::List => viewer.print_projects(),
      ShellInput::Form => viewer.print_form(),
      ShellInput::Categories => viewer.print_categories(),
      ShellInput::Help => println!("{}", HELP),
      ShellInput::Quit => return,
      ShellInput::Empty => {}
    }
  }
}

fn exit_with_error(err: &str) -> ! {
  eprintln!("{}", err.red());
  std::process::exit(1);
}
