use std::fmt::Display;

use crate::category::Category;

pub const DEFAULT_IMAGE: &str =
  "https://images.unsplash.com/photo-1460925895917-aae19106c48f?w=500&h=300&fit=crop";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
  Title,
  Description,
  Category,
  Image,
  Link,
}

impl Field {
  pub const ALL: [Field; 5] = [
    Field::Title,
    Field::Description,
    Field::Category,
    Field::Image,
    Field::Link,
  ];

  pub fn name(&self) -> &'static str {
    match self {
      Field::Title => "title",
      Field::Description => "description",
      Field::Category => "category",
      Field::Image => "image",
      Field::Link => "link",
    }
  }
}

impl Display for Field {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

impl std::str::FromStr for Field {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match Field::ALL.iter().find(|f| f.name() == s) {
      Some(field) => Ok(*field),
      None => Err(format!("unknown field: {}", s)),
    }
  }
}

/// In-progress form entry. `Default` is the blank form used both when a
/// session starts and after every accepted submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
  pub title: String,
  pub description: String,
  pub category: String,
  pub image: String,
  pub link: String,
}

impl Default for Draft {
  fn default() -> Self {
    Self {
      title: String::new(),
      description: String::new(),
      category: Category::default().as_str().to_owned(),
      image: DEFAULT_IMAGE.to_owned(),
      link: String::new(),
    }
  }
}

impl Draft {
  pub fn get(&self, field: Field) -> &str {
    match field {
      Field::Title => self.title.as_str(),
      Field::Description => self.description.as_str(),
      Field::Category => self.category.as_str(),
      Field::Image => self.image.as_str(),
      Field::Link => self.link.as_str(),
    }
  }

  pub fn set(&mut self, field: Field, value: &str) {
    let slot = match field {
      Field::Title => &mut self.title,
      Field::Description => &mut self.description,
      Field::Category => &mut self.category,
      Field::Image => &mut self.image,
      Field::Link => &mut self.link,
    };
    *slot = value.to_owned();
  }
}

#[cfg(test)]
mod test {
  use super::{Draft, Field, DEFAULT_IMAGE};

  #[test]
  fn default_draft() {
    let draft = Draft::default();
    assert_eq!(draft.title, "");
    assert_eq!(draft.description, "");
    assert_eq!(draft.category, "Web Development");
    assert_eq!(draft.image, DEFAULT_IMAGE);
    assert_eq!(draft.link, "");
  }

  #[test]
  fn set_touches_one_field() {
    let mut draft = Draft::default();
    draft.set(Field::Link, "https://example.com");

    assert_eq!(draft.get(Field::Link), "https://example.com");
    assert_eq!(draft.get(Field::Title), "");
    assert_eq!(draft.get(Field::Image), DEFAULT_IMAGE);
  }

  #[test]
  fn parse_field_name() {
    assert_eq!("description".parse::<Field>().unwrap(), Field::Description);
    "id".parse::<Field>().expect_err("id isn't an editable field");
  }
}
