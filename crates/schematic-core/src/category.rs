//! Node categories.
//!
//! A [`Category`] tells what kind of architectural element a node stands for.
//! The renderer uses it to pick the node shape and its default fill color.

use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::color::Color;

/// The kind of architectural element a node represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// A client-side component: a page, a widget, a module of the web client.
    Frontend,

    /// A server-side component: an entry point, a route, a service.
    Backend,

    /// A storage system: a database, a cache.
    Datastore,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 3] = [Category::Frontend, Category::Backend, Category::Datastore];

    /// Returns the lowercase name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            Category::Frontend => "frontend",
            Category::Backend => "backend",
            Category::Datastore => "datastore",
        }
    }

    /// Returns the Graphviz shape used for nodes of this category.
    pub fn shape(self) -> &'static str {
        match self {
            Category::Frontend | Category::Backend => "box",
            Category::Datastore => "cylinder",
        }
    }

    /// Returns the fill color used when the configuration does not override it.
    pub fn default_fill(self) -> Color {
        let css = match self {
            Category::Frontend => "#D6EAF8",
            Category::Backend => "#FAD7A0",
            Category::Datastore => "#D5F5E3",
        };
        Color::new(css).expect("category defaults are valid CSS colors")
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|category| category.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("unknown category `{s}`, expected one of: frontend, backend, datastore")
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip_names() {
        for category in Category::ALL {
            assert_eq!(category.to_string().parse::<Category>(), Ok(category));
        }
    }

    #[test]
    fn test_parse_is_case_insensitive() {
        assert_eq!("DataStore".parse::<Category>(), Ok(Category::Datastore));
        assert!("database".parse::<Category>().is_err());
    }

    #[test]
    fn test_shapes() {
        assert_eq!(Category::Frontend.shape(), "box");
        assert_eq!(Category::Datastore.shape(), "cylinder");
    }

    #[test]
    fn test_default_fills_are_distinct() {
        let fills: Vec<_> = Category::ALL.iter().map(|c| c.default_fill()).collect();
        assert_ne!(fills[0], fills[1]);
        assert_ne!(fills[1], fills[2]);
    }
}
