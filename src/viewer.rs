use std::{cell::RefCell, rc::Rc};

use colored::{Color, Colorize};

use crate::{
  category::Category,
  draft::Field,
  project::Project,
  showcase::Showcase,
  traits::Indexable,
  validator::ErrorMap,
};

pub const EMPTY_STATE: &str = "No projects found. Try adjusting your search or add a new project!";

struct ViewColors {}
impl ViewColors {
  const ID: Color = Color::BrightBlack;
  const TITLE: Color = Color::Green;
  const CATEGORY: Color = Color::Cyan;
  const LINK: Color = Color::Blue;
  const HEADER: Color = Color::BrightYellow;
  const ERROR: Color = Color::Red;
  const WARNING: Color = Color::Yellow;
}

const PAD: &str = "  ";
const LINE_INDENT: &str = "    ";

pub struct Viewer {
  showcase: Rc<RefCell<Showcase>>,
}

impl Viewer {
  pub fn new(showcase: Rc<RefCell<Showcase>>) -> Self {
    Self { showcase }
  }

  pub fn print_projects(&self) {
    let showcase = self.showcase.borrow();
    println!("{}", format_header(showcase.query()));
    print!("{}", format_projects(&showcase.visible()));
  }

  pub fn print_project(&self, project: &Project) {
    print!("{}", format_project(project));
  }

  pub fn print_form(&self) {
    let showcase = self.showcase.borrow();
    print!("{}", format_form(showcase.draft(), showcase.errors()));
  }

  pub fn print_errors(&self, errors: &ErrorMap) {
    print!("{}", format_errors(errors));
  }

  pub fn print_category_warning(&self, value: &str) {
    if let Some(warning) = format_category_warning(value) {
      println!("{}", warning);
    }
  }

  pub fn print_categories(&self) {
    for category in Category::ALL.iter() {
      println!("{PAD}{}", category.as_str().color(ViewColors::CATEGORY));
    }
  }
}

pub fn format_header(query: &str) -> String {
  let mut header = "Portfolio".to_string();
  if !query.is_empty() {
    header += &format!(" - Results for \"{}\"", query);
  }
  return header.color(ViewColors::HEADER).bold().to_string();
}

pub fn format_projects(projects: &[Project]) -> String {
  if projects.is_empty() {
    return format!("{PAD}{}\n", EMPTY_STATE.dimmed());
  }
  projects.iter().map(format_project).collect()
}

pub fn format_project(project: &Project) -> String {
  format!(
    "{PAD}{id}{PAD}{title}  [{category}]\n{LINE_INDENT}{description}\n{LINE_INDENT}{link}\n",
    id = format!("#{:<4}", project.id()).color(ViewColors::ID),
    title = project.title().color(ViewColors::TITLE).bold(),
    category = project.category().color(ViewColors::CATEGORY),
    description = project.description().italic(),
    link = project.link().color(ViewColors::LINK).underline(),
  )
}

pub fn format_form(draft: &crate::draft::Draft, errors: &ErrorMap) -> String {
  let mut form = String::new();
  for field in Field::ALL.iter() {
    form += &format!("{PAD}{:<12}{}\n", format!("{}:", field), draft.get(*field));
    if let Some(error) = errors.get(field) {
      form += &format!("{LINE_INDENT}{}\n", error.color(ViewColors::ERROR));
    }
  }
  return form;
}

/// Unknown categories are still accepted by the form, only flagged.
pub fn format_category_warning(value: &str) -> Option<String> {
  match value.parse::<Category>() {
    Ok(_) => None,
    Err(err) => Some(
      format!("{PAD}warning: {}, see `categories`", err)
        .color(ViewColors::WARNING)
        .to_string(),
    ),
  }
}

pub fn format_errors(errors: &ErrorMap) -> String {
  errors
    .iter()
    .map(|(field, error)| format!("{PAD}{}: {}\n", field, error.color(ViewColors::ERROR)))
    .collect()
}
