use crate::project::Project;

/// Projects whose title, description or category contain `query`, ignoring
/// case. The query is not trimmed, an empty one matches everything.
pub fn filter(projects: &[Project], query: &str) -> Vec<Project> {
  let query = query.to_lowercase();
  projects
    .iter()
    .filter(|p| matches_lowercase(p, &query))
    .cloned()
    .collect()
}

/// Same as [`filter`], a missing collection is treated as an empty one.
pub fn filter_optional(projects: Option<&[Project]>, query: &str) -> Vec<Project> {
  filter(projects.unwrap_or_default(), query)
}

fn matches_lowercase(project: &Project, query: &str) -> bool {
  project.title().to_lowercase().contains(query)
    || project.description().to_lowercase().contains(query)
    || project.category().to_lowercase().contains(query)
}
