use log::{debug, info};

use crate::{
  draft::{Draft, Field},
  validator::{validate, ErrorMap},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Submission {
  pub accepted: bool,
}

/// One project form: the draft being edited and the errors of its last
/// rejected submit.
#[derive(Debug, Default)]
pub struct FormSession {
  draft: Draft,
  errors: ErrorMap,
}

impl FormSession {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn draft(&self) -> &Draft {
    &self.draft
  }

  pub fn errors(&self) -> &ErrorMap {
    &self.errors
  }

  pub fn error(&self, field: Field) -> Option<&str> {
    self.errors.get(&field).map(|e| e.as_str())
  }

  /// Editing a field drops that field's error only, nothing is revalidated.
  pub fn set_field(&mut self, field: Field, value: &str) {
    self.draft.set(field, value);
    self.errors.remove(&field);
  }

  pub fn submit<F>(&mut self, add: F) -> Submission
  where
    F: FnOnce(Draft),
  {
    let errors = validate(&self.draft);
    if !errors.is_empty() {
      debug!("draft rejected with {} field errors", errors.len());
      self.errors = errors;
      return Submission { accepted: false };
    }

    let draft = std::mem::take(&mut self.draft);
    info!("draft accepted: {}", draft.title);
    add(draft);
    self.errors.clear();

    return Submission { accepted: true };
  }
}
