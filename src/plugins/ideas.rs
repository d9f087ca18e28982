use crate::core::error::IdeasError;
use crate::core::output;
use crate::core::store::{self, Store};
use crate::core::time;
use clap::{Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Lifecycle stage of an idea.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum IdeaStatus {
    #[default]
    Idea,
    Planned,
    Implemented,
}

impl IdeaStatus {
    pub const ALL: [IdeaStatus; 3] = [IdeaStatus::Idea, IdeaStatus::Planned, IdeaStatus::Implemented];

    pub fn as_str(self) -> &'static str {
        match self {
            IdeaStatus::Idea => "idea",
            IdeaStatus::Planned => "planned",
            IdeaStatus::Implemented => "implemented",
        }
    }
}

impl fmt::Display for IdeaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Idea {
    pub id: u64,
    pub title: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub status: IdeaStatus,
    #[serde(default)]
    pub created_at: String,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum IdeasCommand {
    /// Add a new idea.
    Add {
        /// Idea title (e.g. 'Public pools per 100,000 residents')
        #[clap(value_name = "TITLE", value_parser = validate_title)]
        title: String,
        /// Category (e.g. infrastructure, health, traffic)
        #[clap(short, long)]
        category: Option<String>,
        /// Free-form notes or data source
        #[clap(short, long)]
        notes: Option<String>,
    },
    /// List ideas, optionally filtered.
    List {
        /// Only show ideas with this status (idea, planned, implemented)
        #[clap(short, long)]
        status: Option<String>,
        /// Only show ideas in this category
        #[clap(short, long)]
        category: Option<String>,
    },
    /// Change the status of an idea.
    Status {
        /// Idea ID
        #[clap(value_name = "ID")]
        id: u64,
        /// New status
        #[clap(value_name = "STATUS", value_enum)]
        status: IdeaStatus,
    },
    /// Delete an idea.
    Delete {
        /// ID of the idea to delete
        #[clap(value_name = "ID")]
        id: u64,
    },
}

/// Result of a list query. Kept distinct so callers can tell an empty store
/// from a filter that matched nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListOutcome {
    EmptyStore,
    NoMatches,
    Matches(Vec<Idea>),
}

fn validate_title(s: &str) -> Result<String, String> {
    if s.is_empty() {
        return Err("Title must not be empty".to_string());
    }
    Ok(s.to_string())
}

pub fn add_idea(
    store: &Store,
    title: &str,
    category: Option<&str>,
    notes: Option<&str>,
) -> Result<Idea, IdeasError> {
    validate_title(title).map_err(IdeasError::ValidationError)?;

    let mut ideas = store.load()?;
    let idea = Idea {
        id: store::next_id(&ideas)?,
        title: title.to_string(),
        category: category.unwrap_or_default().to_string(),
        notes: notes.unwrap_or_default().to_string(),
        status: IdeaStatus::Idea,
        created_at: time::now_local_seconds(),
    };
    ideas.push(idea.clone());
    store.save(&ideas)?;
    tracing::info!(id = idea.id, "idea added");
    Ok(idea)
}

/// Both filters are exact string matches and combine with AND. An empty
/// filter value is the same as no filter.
pub fn filter_ideas(ideas: &[Idea], status: Option<&str>, category: Option<&str>) -> Vec<Idea> {
    let status = status.filter(|s| !s.is_empty());
    let category = category.filter(|c| !c.is_empty());
    ideas
        .iter()
        .filter(|idea| status.is_none_or(|s| idea.status.as_str() == s))
        .filter(|idea| category.is_none_or(|c| idea.category == c))
        .cloned()
        .collect()
}

pub fn list_ideas(
    store: &Store,
    status: Option<&str>,
    category: Option<&str>,
) -> Result<ListOutcome, IdeasError> {
    let ideas = store.load()?;
    if ideas.is_empty() {
        return Ok(ListOutcome::EmptyStore);
    }
    let matched = filter_ideas(&ideas, status, category);
    if matched.is_empty() {
        return Ok(ListOutcome::NoMatches);
    }
    Ok(ListOutcome::Matches(matched))
}

/// Sets the status of the idea with `id`. Returns the updated record, or
/// `None` without writing if no such idea exists.
pub fn update_status(
    store: &Store,
    id: u64,
    status: IdeaStatus,
) -> Result<Option<Idea>, IdeasError> {
    let mut ideas = store.load()?;
    let Some(idea) = ideas.iter_mut().find(|idea| idea.id == id) else {
        tracing::debug!(id, "status update target not found");
        return Ok(None);
    };
    idea.status = status;
    let updated = idea.clone();
    store.save(&ideas)?;
    tracing::info!(id, status = %status, "idea status updated");
    Ok(Some(updated))
}

/// Removes the idea with `id`. Returns `false` without writing if nothing matched.
pub fn delete_idea(store: &Store, id: u64) -> Result<bool, IdeasError> {
    let ideas = store.load()?;
    let before = ideas.len();
    let remaining: Vec<Idea> = ideas.into_iter().filter(|idea| idea.id != id).collect();
    if remaining.len() == before {
        tracing::debug!(id, "delete target not found");
        return Ok(false);
    }
    store.save(&remaining)?;
    tracing::info!(id, "idea deleted");
    Ok(true)
}

pub fn run_ideas_cli(
    store: &Store,
    format: OutputFormat,
    command: &IdeasCommand,
) -> Result<(), IdeasError> {
    let store_path = store.ideas_path().to_string_lossy().to_string();
    match command {
        IdeasCommand::Add {
            title,
            category,
            notes,
        } => {
            let idea = add_idea(store, title, category.as_deref(), notes.as_deref())?;
            match format {
                OutputFormat::Text => println!("{}", output::render_added(&idea)),
                OutputFormat::Json => print_envelope(
                    "ideas.add",
                    "ok",
                    serde_json::json!({ "store": store_path, "item": idea }),
                )?,
            }
        }
        IdeasCommand::List { status, category } => {
            let outcome = list_ideas(store, status.as_deref(), category.as_deref())?;
            match format {
                OutputFormat::Text => match &outcome {
                    ListOutcome::EmptyStore => println!("{}", output::NO_IDEAS_STORED),
                    ListOutcome::NoMatches => println!("{}", output::NO_MATCHING_IDEAS),
                    ListOutcome::Matches(items) => {
                        for idea in items {
                            println!("{}", output::render_idea(idea));
                        }
                    }
                },
                OutputFormat::Json => {
                    let (result, items) = match outcome {
                        ListOutcome::EmptyStore => ("empty_store", Vec::new()),
                        ListOutcome::NoMatches => ("no_matches", Vec::new()),
                        ListOutcome::Matches(items) => ("matches", items),
                    };
                    print_envelope(
                        "ideas.list",
                        "ok",
                        serde_json::json!({
                            "store": store_path,
                            "result": result,
                            "items": items
                        }),
                    )?
                }
            }
        }
        IdeasCommand::Status { id, status } => {
            let updated = update_status(store, *id, *status)?;
            match format {
                OutputFormat::Text => match &updated {
                    Some(_) => println!("{}", output::render_status_updated(*id, *status)),
                    None => println!("{}", output::render_not_found(*id)),
                },
                OutputFormat::Json => print_envelope(
                    "ideas.status",
                    if updated.is_some() { "ok" } else { "not_found" },
                    serde_json::json!({ "store": store_path, "id": id, "item": updated }),
                )?,
            }
        }
        IdeasCommand::Delete { id } => {
            let deleted = delete_idea(store, *id)?;
            match format {
                OutputFormat::Text => {
                    if deleted {
                        println!("{}", output::render_deleted(*id));
                    } else {
                        println!("{}", output::render_not_found(*id));
                    }
                }
                OutputFormat::Json => print_envelope(
                    "ideas.delete",
                    if deleted { "ok" } else { "not_found" },
                    serde_json::json!({ "store": store_path, "id": id }),
                )?,
            }
        }
    }
    Ok(())
}

fn print_envelope(cmd: &str, status: &str, extra: serde_json::Value) -> Result<(), IdeasError> {
    let envelope = time::command_envelope(cmd, status, extra);
    println!("{}", serde_json::to_string_pretty(&envelope)?);
    Ok(())
}

pub fn schema() -> serde_json::Value {
    serde_json::json!({
        "name": "ideas",
        "version": env!("CARGO_PKG_VERSION"),
        "description": "Flat list of free-text ideas with a three-stage status",
        "commands": [
            { "name": "add", "parameters": ["title", "category", "notes"] },
            { "name": "list", "parameters": ["status", "category"] },
            { "name": "status", "parameters": ["id", "status"] },
            { "name": "delete", "parameters": ["id"] }
        ],
        "statuses": IdeaStatus::ALL.iter().map(|s| s.as_str()).collect::<Vec<_>>(),
        "storage": [store::IDEAS_FILE_NAME]
    })
}
