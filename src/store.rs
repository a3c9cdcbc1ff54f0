use log::debug;

use crate::{draft::Draft, project::Project, traits::Indexable};

/// Owns the project collection, newest first.
pub struct ProjectStore {
  projects: Vec<Project>,
}

impl ProjectStore {
  /// Seed projects are taken verbatim, their ids are trusted to be unique and
  /// below `u64::MAX` (see `seed::load_seed`).
  pub fn new(seed: Vec<Project>) -> Self {
    debug!("store initialized with {} projects", seed.len());
    Self { projects: seed }
  }

  pub fn next_id(&self) -> u64 {
    self.projects.iter().map(|p| p.id()).max().unwrap_or(0) + 1
  }

  pub fn add(&mut self, draft: Draft) -> Project {
    let project = Project::new(self.next_id(), draft);
    self.projects.insert(0, project.clone());

    debug!("added project id: {} title: {}", project.id(), project.title());
    return project;
  }

  pub fn projects(&self) -> &[Project] {
    self.projects.as_slice()
  }
}
