//! Person domain model and role labels

use crate::record::Record;
use serde::{Deserialize, Serialize};

/// Role of a lab member, the grouping key on the People page.
///
/// The data files carry roles as plain strings. Labels outside the
/// known set are preserved as `Other` so they can still be rendered in
/// a fallback bucket rather than silently disappearing from the page.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    Director,
    Researcher,
    PhdStudent,
    MscStudent,
    Undergraduate,
    Alumni,
    Other(String),
}

impl Role {
    /// The display labels of the known roles, in display priority order.
    pub const KNOWN_LABELS: [&'static str; 6] = [
        "Director",
        "Researcher",
        "PhD Student",
        "MSc Student",
        "Undergraduate",
        "Alumni",
    ];

    /// Parse a role label from the data files.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Director" => Role::Director,
            "Researcher" => Role::Researcher,
            "PhD Student" => Role::PhdStudent,
            "MSc Student" => Role::MscStudent,
            "Undergraduate" => Role::Undergraduate,
            "Alumni" => Role::Alumni,
            other => Role::Other(other.to_string()),
        }
    }

    /// The label as it appears in data files and the role filter.
    pub fn label(&self) -> &str {
        match self {
            Role::Director => "Director",
            Role::Researcher => "Researcher",
            Role::PhdStudent => "PhD Student",
            Role::MscStudent => "MSc Student",
            Role::Undergraduate => "Undergraduate",
            Role::Alumni => "Alumni",
            Role::Other(label) => label,
        }
    }

    /// Whether this is one of the enumerated known roles.
    pub fn is_known(&self) -> bool {
        !matches!(self, Role::Other(_))
    }
}

impl From<String> for Role {
    fn from(s: String) -> Self {
        Role::from_label(&s)
    }
}

impl From<Role> for String {
    fn from(r: Role) -> Self {
        r.label().to_string()
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A lab member shown on the People page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub name: String,
    #[serde(default)]
    pub position: String,
    pub role: Role,
    #[serde(default)]
    pub photo: Option<String>,
    /// Research interests, matched by search and shown as badges.
    #[serde(default, rename = "researchInterests")]
    pub interests: Vec<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub linkedin: Option<String>,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub scholar: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    /// Cite keys of this member's publications.
    #[serde(default)]
    pub publications: Vec<String>,
}

impl Person {
    /// Create a new person with required fields.
    pub fn new(name: impl Into<String>, position: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            position: position.into(),
            role,
            photo: None,
            interests: Vec::new(),
            website: None,
            linkedin: None,
            github: None,
            scholar: None,
            bio: None,
            publications: Vec::new(),
        }
    }

    /// Builder method to add research interests.
    pub fn with_interests(mut self, interests: Vec<String>) -> Self {
        self.interests = interests;
        self
    }
}

impl Record for Person {
    fn display_title(&self) -> &str {
        &self.name
    }

    fn facet_values(&self) -> Vec<&str> {
        vec![self.role.label()]
    }

    fn search_fields(&self) -> Vec<&str> {
        let mut fields = vec![self.name.as_str(), self.position.as_str()];
        fields.extend(self.interests.iter().map(String::as_str));
        fields
    }
}
