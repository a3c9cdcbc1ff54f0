use log::debug;

use crate::{draft::Draft, project::Project, traits::Indexable};

const SEED: [(u64, &str, &str, &str, &str, &str); 6] = [
  (
    1,
    "E-Commerce Platform",
    "A modern e-commerce platform built with React and Node.js featuring a dynamic shopping cart and payment integration.",
    "Web Development",
    "https://images.unsplash.com/photo-1460925895917-aae19106c48f?w=500&h=300&fit=crop",
    "https://example.com/ecommerce",
  ),
  (
    2,
    "Mobile App Design",
    "UI/UX design for a fitness tracking mobile application with an intuitive interface and smooth user experience.",
    "Design",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=300&fit=crop",
    "https://example.com/mobile",
  ),
  (
    3,
    "Brand Identity Redesign",
    "Complete brand identity overhaul including logo design, color palette, and marketing materials for a tech startup.",
    "Branding",
    "https://images.unsplash.com/photo-1561070791-2526d30994b5?w=500&h=300&fit=crop",
    "https://example.com/branding",
  ),
  (
    4,
    "Data Analytics Dashboard",
    "Interactive dashboard for real-time data visualization and business intelligence analysis.",
    "Web Development",
    "https://images.unsplash.com/photo-1551288049-bebda4e38f71?w=500&h=300&fit=crop",
    "https://example.com/dashboard",
  ),
  (
    5,
    "Social Media Campaign",
    "Creative social media marketing campaign that increased engagement by 250% across all platforms.",
    "Marketing",
    "https://images.unsplash.com/photo-1460925895917-aae19106c48f?w=500&h=300&fit=crop",
    "https://example.com/campaign",
  ),
  (
    6,
    "Video Production",
    "Professional video production for product launch featuring cinematic storytelling and high-quality cinematography.",
    "Video",
    "https://images.unsplash.com/photo-1533928298208-27ff66555d0d?w=500&h=300&fit=crop",
    "https://example.com/video",
  ),
];

pub fn default_seed() -> Vec<Project> {
  SEED
    .iter()
    .map(|&(id, title, description, category, image, link)| {
      Project::new(
        id,
        Draft {
          title: title.to_owned(),
          description: description.to_owned(),
          category: category.to_owned(),
          image: image.to_owned(),
          link: link.to_owned(),
        },
      )
    })
    .collect()
}

/// Reads a JSON array of projects. Records are not revalidated, but an id of
/// `u64::MAX` is refused since no project could be added after it.
pub fn load_seed(filepath: &str) -> Result<Vec<Project>, String> {
  let file = std::fs::File::open(filepath)
    .map_err(|err| format!("couldn't open seed file {}: {}", filepath, err))?;
  let projects: Vec<Project> = serde_json::from_reader(std::io::BufReader::new(file))
    .map_err(|err| format!("couldn't parse seed file {}: {}", filepath, err))?;

  if let Some(project) = projects.iter().find(|p| p.id() == u64::MAX) {
    return Err(format!(
      "seed id {} in {} leaves no room for new projects",
      project.id(),
      filepath
    ));
  }

  debug!("restored {} projects from: {}", projects.len(), filepath);
  return Ok(projects);
}

#[cfg(test)]
mod test {
  use std::{collections::BTreeSet, io::Write};

  use super::{default_seed, load_seed};
  use crate::{traits::Indexable, validator::validate};

  #[test]
  fn default_seed_ids_are_unique() {
    let seed = default_seed();
    let ids: BTreeSet<u64> = seed.iter().map(|p| p.id()).collect();
    assert_eq!(ids.len(), seed.len());
    assert_eq!(ids.into_iter().max(), Some(6));
  }

  #[test]
  fn default_seed_projects_are_valid() {
    for project in default_seed() {
      let draft = crate::draft::Draft {
        title: project.title().to_owned(),
        description: project.description().to_owned(),
        category: project.category().to_owned(),
        image: project.image().to_owned(),
        link: project.link().to_owned(),
      };
      assert!(validate(&draft).is_empty(), "{}", project.title());
    }
  }

  #[test]
  fn load_seed_from_file() {
    let mut file = tempfile::Builder::new()
      .prefix("showcase")
      .suffix(".json")
      .tempfile()
      .unwrap();
    file
      .write_all(
        br#"[{"id": 6, "title": "Six", "description": "Sixth project here", "category": "Video",
              "image": "https://example.com/6.png", "link": "https://example.com/6"},
             {"id": 2, "title": "Two", "description": "Second project here", "category": "Design",
              "image": "https://example.com/2.png", "link": "https://example.com/2"}]"#,
      )
      .unwrap();

    let projects = load_seed(file.path().to_str().unwrap()).unwrap();
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].id(), 6);
    assert_eq!(projects[1].title(), "Two");
  }

  #[test]
  fn load_seed_refuses_last_id() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file
      .write_all(
        br#"[{"id": 18446744073709551615, "title": "Last", "description": "Nothing fits after it",
              "category": "Design", "image": "https://example.com/l.png", "link": "https://example.com/l"}]"#,
      )
      .unwrap();

    let err = load_seed(file.path().to_str().unwrap()).expect_err("no id left for new projects");
    assert!(err.contains("leaves no room for new projects"));
  }

  #[test]
  fn load_seed_reports_bad_json() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(b"{ not json").unwrap();

    let err = load_seed(file.path().to_str().unwrap()).expect_err("malformed seed must fail");
    assert!(err.starts_with("couldn't parse seed file"));
  }

  #[test]
  fn load_seed_reports_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.json");
    load_seed(path.to_str().unwrap()).expect_err("missing seed must fail");
  }
}
