use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Which optional field a list item shows after the id and name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    /// `id nombre edad`
    #[default]
    Age,
    /// `id nombre ciudad`
    City,
}

impl Layout {
    pub fn label(self) -> &'static str {
        match self {
            Layout::Age => "age",
            Layout::City => "city",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
