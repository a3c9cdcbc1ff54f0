use crate::{draft::Draft, traits::Indexable};

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Project {
  id: u64,
  title: String,
  description: String,
  category: String,
  image: String,
  link: String,
}

impl Indexable for Project {
  fn id(&self) -> u64 {
    self.id
  }
}

impl Project {
  pub fn new(id: u64, draft: Draft) -> Self {
    Self {
      id,
      title: draft.title,
      description: draft.description,
      category: draft.category,
      image: draft.image,
      link: draft.link,
    }
  }

  pub fn title(&self) -> &str {
    self.title.as_str()
  }

  pub fn description(&self) -> &str {
    self.description.as_str()
  }

  pub fn category(&self) -> &str {
    self.category.as_str()
  }

  pub fn image(&self) -> &str {
    self.image.as_str()
  }

  pub fn link(&self) -> &str {
    self.link.as_str()
  }
}
