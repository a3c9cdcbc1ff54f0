use std::fmt::Display;

/// Categories offered by the project form.
///
/// Projects keep their category as a plain string, so a seed may carry a value
/// outside of this list; it is still shown and searched like any other.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Category {
  #[default]
  WebDevelopment,
  Design,
  Branding,
  Marketing,
  Video,
  Photography,
  Consulting,
}

impl Category {
  pub const ALL: [Category; 7] = [
    Category::WebDevelopment,
    Category::Design,
    Category::Branding,
    Category::Marketing,
    Category::Video,
    Category::Photography,
    Category::Consulting,
  ];

  pub fn as_str(&self) -> &'static str {
    match self {
      Category::WebDevelopment => "Web Development",
      Category::Design => "Design",
      Category::Branding => "Branding",
      Category::Marketing => "Marketing",
      Category::Video => "Video",
      Category::Photography => "Photography",
      Category::Consulting => "Consulting",
    }
  }
}

impl Display for Category {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl std::str::FromStr for Category {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match Category::ALL.iter().find(|c| c.as_str() == s) {
      Some(category) => Ok(*category),
      None => Err(format!("unknown category: {}", s)),
    }
  }
}

#[cfg(test)]
mod test {
  use super::Category;

  #[test]
  fn default_is_web_development() {
    assert_eq!(Category::default().as_str(), "Web Development");
  }

  #[test]
  fn parse_display_name() {
    assert_eq!("Branding".parse::<Category>().unwrap(), Category::Branding);
    assert_eq!(
      "Web Development".parse::<Category>().unwrap(),
      Category::WebDevelopment
    );
    "branding"
      .parse::<Category>()
      .expect_err("category names are case sensitive");
  }
}
