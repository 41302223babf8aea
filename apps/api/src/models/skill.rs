use serde::{Deserialize, Serialize};

/// A named skill with a category and an importance weight (1–5 in practice).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Skill {
    pub name: String,
    pub category: String,
    pub weight: i32,
}

impl Skill {
    pub fn new(name: &str, category: &str, weight: i32) -> Self {
        Skill {
            name: name.to_string(),
            category: category.to_string(),
            weight,
        }
    }

    /// Case-insensitive name comparison.
    pub fn same_name(&self, other: &str) -> bool {
        self.name.trim().eq_ignore_ascii_case(other.trim())
    }
}
