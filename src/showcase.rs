use log::debug;

use crate::{
  draft::{Draft, Field},
  filter::filter,
  form::FormSession,
  project::Project,
  store::ProjectStore,
  validator::ErrorMap,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  SetField(Field, String),
  Submit,
  SetQuery(String),
  ClearQuery,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
  FieldSet(Field),
  Added(Project),
  Rejected(ErrorMap),
  QueryChanged,
}

pub struct Showcase {
  store: ProjectStore,
  form: FormSession,
  query: String,
}

impl Showcase {
  pub fn new(seed: Vec<Project>, query: &str) -> Self {
    Self {
      store: ProjectStore::new(seed),
      form: FormSession::new(),
      query: query.to_owned(),
    }
  }

  pub fn handle(&mut self, command: Command) -> Outcome {
    match command {
      Command::SetField(field, value) => {
        self.form.set_field(field, &value);
        Outcome::FieldSet(field)
      }
      Command::Submit => self.submit(),
      Command::SetQuery(query) => {
        debug!("query: {:?}", query);
        self.query = query;
        Outcome::QueryChanged
      }
      Command::ClearQuery => {
        self.query.clear();
        Outcome::QueryChanged
      }
    }
  }

  fn submit(&mut self) -> Outcome {
    let store = &mut self.store;
    let mut added = None;
    let submission = self.form.submit(|draft| added = Some(store.add(draft)));

    match added {
      Some(project) if submission.accepted => Outcome::Added(project),
      _ => Outcome::Rejected(self.form.errors().clone()),
    }
  }

  /// Filtered view of the whole collection, recomputed on every call.
  pub fn visible(&self) -> Vec<Project> {
    filter(self.store.projects(), &self.query)
  }

  pub fn projects(&self) -> &[Project] {
    self.store.projects()
  }

  pub fn query(&self) -> &str {
    self.query.as_str()
  }

  pub fn draft(&self) -> &Draft {
    self.form.draft()
  }

  pub fn errors(&self) -> &ErrorMap {
    self.form.errors()
  }
}
