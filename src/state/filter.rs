//! Project gallery filtering.
//!
//! The gallery narrows the project list by two independent facets: the
//! project category and the category of any technology in its stack. The
//! visible list is recomputed synchronously from the selection and always
//! keeps catalog order.

use crate::catalog::{Project, ProjectCategory, TechCategory};
use log::*;
use std::fmt;
use std::str::FromStr;

/// Label used for the unrestricted facet value.
pub const ALL_LABEL: &str = "All";

/// Specifying a single facet selection.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Facet<T> {
    All,
    Only(T),
}

impl<T> Default for Facet<T> {
    fn default() -> Self {
        Facet::All
    }
}

impl<T: PartialEq> Facet<T> {
    /// Return true if the facet admits the value.
    ///
    pub fn admits(&self, value: &T) -> bool {
        match self {
            Facet::All => true,
            Facet::Only(wanted) => wanted == value,
        }
    }
}

impl<T: Copy> Facet<T> {
    /// Return every selectable option: `All` first, then each value in order.
    ///
    pub fn options(values: &[T]) -> Vec<Facet<T>> {
        std::iter::once(Facet::All)
            .chain(values.iter().copied().map(Facet::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Facet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facet::All => f.write_str(ALL_LABEL),
            Facet::Only(value) => fmt::Display::fmt(value, f),
        }
    }
}

impl<T: FromStr> FromStr for Facet<T> {
    type Err = T::Err;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case(ALL_LABEL) {
            Ok(Facet::All)
        } else {
            s.parse().map(Facet::Only)
        }
    }
}

/// Specifying the current gallery selection. Both facets start at `All`.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FilterSelection {
    pub category: Facet<ProjectCategory>,
    pub tech: Facet<TechCategory>,
}

impl FilterSelection {
    /// Return true if the project satisfies both facets.
    ///
    pub fn matches(&self, project: &Project) -> bool {
        let category_match = self.category.admits(&project.category);
        let tech_match = match self.tech {
            Facet::All => true,
            Facet::Only(tech) => project.uses(tech),
        };
        category_match && tech_match
    }

    pub fn is_unrestricted(&self) -> bool {
        self.category == Facet::All && self.tech == Facet::All
    }
}

/// Return the projects matching the selection, in their original order.
///
pub fn filter_projects<'a>(projects: &'a [Project], selection: &FilterSelection) -> Vec<&'a Project> {
    projects
        .iter()
        .filter(|project| selection.matches(project))
        .collect()
}

/// Result of applying a selection to the gallery.
///
/// An empty match is reported as `NoResults` so callers can offer a reset
/// instead of rendering an empty grid.
#[derive(Debug, PartialEq, Eq)]
pub enum FilterOutcome<'a> {
    Matches(Vec<&'a Project>),
    NoResults { selection: FilterSelection },
}

impl<'a> FilterOutcome<'a> {
    pub fn projects(&self) -> &[&'a Project] {
        match self {
            FilterOutcome::Matches(projects) => projects,
            FilterOutcome::NoResults { .. } => &[],
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, FilterOutcome::NoResults { .. })
    }
}

/// Oversees the project list and the facet selection applied to it.
///
#[derive(Debug, Clone)]
pub struct ProjectGallery {
    projects: Vec<Project>,
    selection: FilterSelection,
}

impl ProjectGallery {
    /// Return a new gallery over the projects with both facets at `All`.
    ///
    pub fn new(projects: Vec<Project>) -> Self {
        ProjectGallery {
            projects,
            selection: FilterSelection::default(),
        }
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn selection(&self) -> FilterSelection {
        self.selection
    }

    pub fn select_category(&mut self, category: Facet<ProjectCategory>) {
        debug!("Selecting project category '{}'...", category);
        self.selection.category = category;
    }

    pub fn select_tech(&mut self, tech: Facet<TechCategory>) {
        debug!("Selecting technology category '{}'...", tech);
        self.selection.tech = tech;
    }

    /// Put both facets back to `All`.
    ///
    pub fn reset(&mut self) {
        debug!("Clearing project filters.");
        self.selection = FilterSelection::default();
    }

    /// Return the projects visible under the current selection.
    ///
    pub fn outcome(&self) -> FilterOutcome<'_> {
        let matches = filter_projects(&self.projects, &self.selection);
        if matches.is_empty() {
            FilterOutcome::NoResults {
                selection: self.selection,
            }
        } else {
            FilterOutcome::Matches(matches)
        }
    }

    pub fn category_options() -> Vec<Facet<ProjectCategory>> {
        Facet::options(ProjectCategory::ALL)
    }

    pub fn tech_options() -> Vec<Facet<TechCategory>> {
        Facet::options(TechCategory::ALL)
    }
}
