//! Command execution.
//!
//! Turns a parsed command into text for the terminal, reading the catalog
//! through the same state types the page uses.

use crate::catalog::{self, ExperienceKind};
use crate::config::Config;
use crate::delivery::{self, Delivery};
use crate::error::{AppError, AppResult};
use crate::state::{
    ContactForm, ContactFormState, Field, FilterOutcome, FilterSelection, ProjectGallery,
    PublicationList, SubmissionStatus, SUCCESS_MESSAGE,
};
use log::*;
use serde::Serialize;
use std::fmt::Write;

/// Specifying what the user asked for.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Projects { selection: FilterSelection, json: bool },
    Facets,
    Research { expand: Vec<String>, json: bool },
    Skills { json: bool },
    Experience { kind: Option<ExperienceKind>, json: bool },
    About { json: bool },
    Contact(ContactForm),
}

/// Oversees command execution with the loaded configuration.
///
pub struct App {
    config: Config,
}

impl App {
    pub fn new(config: Config) -> Self {
        App { config }
    }

    /// Run the command and return what should be printed.
    ///
    pub async fn run(&self, command: Command) -> AppResult<String> {
        debug!("Running command {:?}...", command);
        match command {
            Command::Projects { selection, json } => projects(selection, json),
            Command::Facets => facets(),
            Command::Research { expand, json } => research(&expand, json),
            Command::Skills { json } => skills(json),
            Command::Experience { kind, json } => experience(kind, json),
            Command::About { json } => about(json),
            Command::Contact(form) => {
                let delivery = delivery::from_config(&self.config)?;
                contact(form, delivery.as_ref()).await
            }
        }
    }
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

fn projects(selection: FilterSelection, json: bool) -> AppResult<String> {
    let mut gallery = ProjectGallery::new(catalog::projects());
    gallery.select_category(selection.category);
    gallery.select_tech(selection.tech);

    let outcome = gallery.outcome();
    if json {
        return to_json(outcome.projects());
    }

    let mut out = String::new();
    match outcome {
        FilterOutcome::Matches(projects) => {
            for project in projects {
                let stack: Vec<&str> = project.tech_stack.iter().map(|t| t.name.as_str()).collect();
                writeln!(out, "{} [{}]", project.title, project.category)?;
                writeln!(out, "  {}", project.description)?;
                writeln!(out, "  Stack: {}", stack.join(", "))?;
            }
        }
        FilterOutcome::NoResults { selection } => {
            writeln!(
                out,
                "No projects found matching your filters (category: {}, tech: {}).",
                selection.category, selection.tech
            )?;
            writeln!(out, "Run again with both filters set to All to clear them.")?;
        }
    }
    Ok(out)
}

fn facets() -> AppResult<String> {
    let join = |labels: Vec<String>| labels.join(", ");
    let mut out = String::new();
    writeln!(
        out,
        "Categories: {}",
        join(ProjectGallery::category_options().iter().map(|f| f.to_string()).collect())
    )?;
    writeln!(
        out,
        "Technologies: {}",
        join(ProjectGallery::tech_options().iter().map(|f| f.to_string()).collect())
    )?;
    Ok(out)
}

fn research(expand: &[String], json: bool) -> AppResult<String> {
    let mut list = PublicationList::new(catalog::publications());
    for id in expand {
        list.toggle_expanded(id);
    }
    if json {
        return to_json(list.publications());
    }

    let mut out = String::new();
    for paper in list.publications() {
        writeln!(out, "{} ({}, {})", paper.title, paper.kind, paper.year)?;
        writeln!(out, "  {}", paper.author_line())?;
        writeln!(out, "  {}", paper.venue)?;
        if let Some(doi) = &paper.doi {
            writeln!(out, "  DOI: {}", doi)?;
        }
        if list.is_expanded(&paper.id) {
            writeln!(out, "  {}", paper.abstract_text)?;
        }
    }
    Ok(out)
}

fn skills(json: bool) -> AppResult<String> {
    let skills = catalog::skills();
    if json {
        return to_json(&skills);
    }
    let mut out = String::new();
    for skill in skills {
        writeln!(out, "{:<24} {:>3}%", skill.name, skill.level())?;
    }
    Ok(out)
}

fn experience(kind: Option<ExperienceKind>, json: bool) -> AppResult<String> {
    let entries = match kind {
        Some(kind) => catalog::experiences_of(kind),
        None => catalog::experiences(),
    };
    if json {
        return to_json(&entries);
    }
    let mut out = String::new();
    for entry in entries {
        writeln!(out, "{} | {} ({})", entry.period(), entry.title, entry.kind)?;
        writeln!(out, "  {}, {}", entry.organization, entry.location)?;
    }
    Ok(out)
}

fn about(json: bool) -> AppResult<String> {
    let about = catalog::about();
    if json {
        return to_json(&about);
    }
    let mut out = String::new();
    writeln!(out, "{}", about.summary)?;
    writeln!(out, "Hobbies:")?;
    for hobby in &about.hobbies {
        writeln!(out, "  {}: {}", hobby.title, hobby.description)?;
    }
    writeln!(out, "Reading:")?;
    for book in &about.current_reads {
        writeln!(out, "  {} by {} ({})", book.title, book.author, book.status)?;
    }
    writeln!(out, "Fun facts:")?;
    for fact in &about.fun_facts {
        writeln!(out, "  {} ({})", fact.fact, fact.detail)?;
    }
    Ok(out)
}

async fn contact(form: ContactForm, delivery: &dyn Delivery) -> AppResult<String> {
    let mut state = ContactFormState::new();
    for field in Field::ALL {
        state.set_field(field, form.get(field));
    }

    info!("Sending contact message...");
    let status = state.submit(delivery).await?.clone();
    match status {
        SubmissionStatus::Success => Ok(SUCCESS_MESSAGE.to_string()),
        SubmissionStatus::Error(reason) => Err(AppError::SubmissionFailed(reason)),
        SubmissionStatus::Idle | SubmissionStatus::Submitting => {
            let details: Vec<String> = state
                .errors()
                .messages()
                .into_iter()
                .map(|(field, message)| format!("{}: {}", field, message))
                .collect();
            Err(AppError::InvalidForm(details.join("; ")))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{ProjectCategory, TechCategory};
    use crate::delivery::{DeliveryError, SimulatedDelivery};
    use crate::state::Facet;
    use async_trait::async_trait;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingDelivery {
        sent: Mutex<Vec<ContactForm>>,
    }

    #[async_trait]
    impl Delivery for RecordingDelivery {
        async fn submit(&self, form: &ContactForm) -> Result<(), DeliveryError> {
            self.sent.lock().unwrap().push(form.clone());
            Ok(())
        }
    }

    fn app() -> App {
        let mut config = Config::new();
        config.delivery.simulated_delay_ms = 0;
        App::new(config)
    }

    fn valid_form() -> ContactForm {
        ContactForm {
            name: "Ann".to_string(),
            email: "a@b.co".to_string(),
            subject: "Hi".to_string(),
            message: "1234567890".to_string(),
        }
    }

    #[tokio::test]
    async fn projects_filtered() {
        let selection = FilterSelection {
            category: Facet::All,
            tech: Facet::Only(TechCategory::DevOps),
        };
        let out = app()
            .run(Command::Projects {
                selection,
                json: false,
            })
            .await
            .unwrap();
        assert!(out.starts_with("Social Media Analytics [Data Analytics]"));
        assert!(!out.contains("E-Commerce Platform"));
    }

    #[tokio::test]
    async fn projects_no_results() {
        let selection = FilterSelection {
            category: Facet::Only(ProjectCategory::Blockchain),
            tech: Facet::Only(TechCategory::Hardware),
        };
        let out = app()
            .run(Command::Projects {
                selection,
                json: false,
            })
            .await
            .unwrap();
        assert!(out.contains("No projects found"));
        assert!(out.contains("category: Blockchain, tech: Hardware"));
    }

    #[tokio::test]
    async fn projects_json() {
        let out = app()
            .run(Command::Projects {
                selection: FilterSelection::default(),
                json: true,
            })
            .await
            .unwrap();
        let value: serde_json::Value = serde_json::from_str(&out).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 6);
        assert_eq!(value[2]["category"], "Mobile Development");
        assert_eq!(value[2]["tech_stack"][3]["category"], "State Management");
    }

    #[tokio::test]
    async fn research_expands_abstract() {
        let out = app()
            .run(Command::Research {
                expand: vec!["3".to_string()],
                json: false,
            })
            .await
            .unwrap();
        assert!(out.contains("150 participants"));
        assert!(!out.contains("23% improvement"));
    }

    #[tokio::test]
    async fn experience_by_kind() {
        let out = app()
            .run(Command::Experience {
                kind: Some(ExperienceKind::Education),
                json: false,
            })
            .await
            .unwrap();
        assert!(out.contains("Stanford University"));
        assert!(!out.contains("StartupXYZ"));
    }

    #[tokio::test]
    async fn facets_list_all_first() {
        let out = app().run(Command::Facets).await.unwrap();
        assert!(out.contains("Categories: All, Web Development"));
        assert!(out.contains("Technologies: All, Frontend"));
    }

    #[tokio::test]
    async fn contact_success() {
        let out = app().run(Command::Contact(valid_form())).await.unwrap();
        assert_eq!(out, SUCCESS_MESSAGE);
    }

    #[tokio::test]
    async fn contact_invalid_form() {
        let mut form = valid_form();
        form.message = "too short".to_string();
        form.email = "ann".to_string();
        let error = app().run(Command::Contact(form)).await.unwrap_err();
        match error {
            AppError::InvalidForm(details) => {
                assert_eq!(
                    details,
                    "email: Please enter a valid email; message: Message must be at least 10 characters"
                );
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[tokio::test]
    async fn contact_delivers_submitted_form() {
        let delivery = RecordingDelivery::default();
        let out = contact(valid_form(), &delivery).await.unwrap();
        assert_eq!(out, SUCCESS_MESSAGE);
        assert_eq!(*delivery.sent.lock().unwrap(), vec![valid_form()]);
    }

    #[tokio::test]
    async fn contact_invalid_form_is_not_delivered() {
        let delivery = RecordingDelivery::default();
        let error = contact(ContactForm::default(), &delivery).await.unwrap_err();
        assert!(matches!(error, AppError::InvalidForm(details) if details.contains("Name is required")));
        assert!(delivery.sent.lock().unwrap().is_empty());
    }

    #[test]
    fn facets_render() {
        let out = facets().unwrap();
        assert_eq!(out.lines().count(), 2);
    }

    #[tokio::test]
    async fn contact_delivery_failure() {
        let delivery = SimulatedDelivery::failing(Duration::ZERO, "relay offline");
        let error = contact(valid_form(), &delivery).await.unwrap_err();
        assert!(matches!(error, AppError::SubmissionFailed(reason) if reason.contains("relay offline")));
    }
}
