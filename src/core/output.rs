//! Text rendering for command results.

use crate::plugins::ideas::{Idea, IdeaStatus};
use colored::Colorize;

pub const NO_IDEAS_STORED: &str = "No ideas stored yet.";
pub const NO_MATCHING_IDEAS: &str = "No matching ideas found.";

const SEPARATOR_WIDTH: usize = 40;

/// Confirmation printed after `add`. Category and notes only appear when set.
pub fn render_added(idea: &Idea) -> String {
    let mut out = format!("{} Idea #{} added:\n", "✓".bright_green(), idea.id);
    out.push_str(&format!("  Title    : {}", idea.title));
    if !idea.category.is_empty() {
        out.push_str(&format!("\n  Category : {}", idea.category));
    }
    if !idea.notes.is_empty() {
        out.push_str(&format!("\n  Notes    : {}", idea.notes));
    }
    out
}

/// One `list` entry, terminated by a separator line.
pub fn render_idea(idea: &Idea) -> String {
    let mut out = format!("{}: {}", format!("#{}", idea.id).bold(), idea.title);
    if !idea.category.is_empty() {
        out.push_str(&format!("\n   Category: {}", idea.category));
    }
    out.push_str(&format!("\n   Status  : {}", idea.status));
    let created = if idea.created_at.is_empty() {
        "-"
    } else {
        idea.created_at.as_str()
    };
    out.push_str(&format!("\n   Created : {}", created));
    if !idea.notes.is_empty() {
        out.push_str(&format!("\n   Notes   : {}", idea.notes));
    }
    out.push('\n');
    out.push_str(&"-".repeat(SEPARATOR_WIDTH));
    out
}

pub fn render_status_updated(id: u64, status: IdeaStatus) -> String {
    format!(
        "{} Status of idea #{} set to '{}'.",
        "✓".bright_green(),
        id,
        status
    )
}

pub fn render_deleted(id: u64) -> String {
    format!("{} Idea #{} deleted.", "✓".bright_green(), id)
}

pub fn render_not_found(id: u64) -> String {
    format!("{} No idea with ID {} found.", "ℹ".bright_blue(), id)
}
