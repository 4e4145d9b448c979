use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Error returned when a label does not name a member of a closed set.
///
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown {kind} '{label}'")]
pub struct UnknownLabel {
    pub kind: &'static str,
    pub label: String,
}

/// Declare a closed set of values with a display label per variant.
///
/// Generates the enum along with `ALL` (declaration order), `label()`,
/// `Display`, case-insensitive `FromStr` and label-based `Serialize`.
///
macro_rules! closed_set {
    ($(#[$meta:meta])* $name:ident $kind:literal { $($variant:ident => $label:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant),+
        }

        impl $name {
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = UnknownLabel;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim();
                $name::ALL
                    .iter()
                    .copied()
                    .find(|value| value.label().eq_ignore_ascii_case(wanted))
                    .ok_or_else(|| UnknownLabel {
                        kind: $kind,
                        label: wanted.to_string(),
                    })
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.label())
            }
        }
    };
}

closed_set!(
    /// Defines the kind of work a project belongs to.
    ///
    ProjectCategory "project category" {
        WebDevelopment => "Web Development",
        MachineLearning => "Machine Learning",
        MobileDevelopment => "Mobile Development",
        Blockchain => "Blockchain",
        Iot => "IoT",
        DataAnalytics => "Data Analytics",
    }
);

closed_set!(
    /// Defines the category of a single technology in a stack.
    ///
    TechCategory "technology category" {
        Frontend => "Frontend",
        Backend => "Backend",
        Language => "Language",
        Database => "Database",
        Ml => "ML",
        Mobile => "Mobile",
        Blockchain => "Blockchain",
        Platform => "Platform",
        Hardware => "Hardware",
        Protocol => "Protocol",
        StateManagement => "State Management",
        DevOps => "DevOps",
    }
);

closed_set!(
    /// Defines where a publication appeared.
    ///
    PublicationType "publication type" {
        Conference => "Conference",
        Journal => "Journal",
        Workshop => "Workshop",
    }
);

closed_set!(
    /// Defines the kind of timeline entry.
    ///
    ExperienceKind "experience kind" {
        Work => "Work",
        Education => "Education",
    }
);

/// Defines a single technology used by a project.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TechStackItem {
    pub name: String,
    pub category: TechCategory,
}

/// Defines project data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub image: String,
    pub category: ProjectCategory,
    pub tech_stack: Vec<TechStackItem>,
    pub project_url: Option<String>,
    pub github_url: Option<String>,
    pub video_url: Option<String>,
}

impl Project {
    /// Return true if any entry in the stack belongs to the category.
    ///
    pub fn uses(&self, category: TechCategory) -> bool {
        self.tech_stack.iter().any(|tech| tech.category == category)
    }
}

/// Defines publication data structure.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Publication {
    pub id: String,
    pub title: String,
    pub authors: Vec<String>,
    pub venue: String,
    pub year: u16,
    pub kind: PublicationType,
    pub abstract_text: String,
    pub url: Option<String>,
    pub doi: Option<String>,
}

impl Publication {
    /// Return the author list as a single comma separated line.
    ///
    pub fn author_line(&self) -> String {
        self.authors.join(", ")
    }
}

/// Defines skill data structure. Level is a percentage.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: String,
    level: u8,
}

impl Skill {
    pub const MAX_LEVEL: u8 = 100;

    /// Return a new skill, clamping the level to `MAX_LEVEL`.
    ///
    pub fn new(name: &str, level: u8) -> Self {
        Skill {
            name: name.to_owned(),
            level: level.min(Self::MAX_LEVEL),
        }
    }

    pub fn level(&self) -> u8 {
        self.level
    }
}

/// Defines an entry on the experience timeline.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Experience {
    pub kind: ExperienceKind,
    pub title: String,
    pub organization: String,
    pub location: String,
    pub start: String,
    pub end: String,
    pub description: String,
}

impl Experience {
    /// Return the period as "start - end".
    ///
    pub fn period(&self) -> String {
        format!("{} - {}", self.start, self.end)
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Hobby {
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    pub title: String,
    pub author: String,
    pub status: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FunFact {
    pub fact: String,
    pub detail: String,
}

/// Defines the content of the about section.
///
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct About {
    pub summary: String,
    pub hobbies: Vec<Hobby>,
    pub current_reads: Vec<Book>,
    pub fun_facts: Vec<FunFact>,
}
