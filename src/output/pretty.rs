//! Human-readable output formatting.
//!
//! Colors come from `colored` and follow the process-wide override set from
//! the `general.color` setting.

use std::fmt::Write;

use colored::Colorize;

use crate::feedback::Preview;
use crate::nlp::ParsedTask;
use crate::todoist::{Operation, Plan};

/// Format a parsed task as labelled lines
pub fn format_parsed_pretty(task: &ParsedTask) -> String {
    let mut output = format!("{}\n", "Parsed Task".yellow().bold());
    writeln!(output, "  {} {}", "Todo:".cyan().bold(), task.todo).ok();

    if !task.labels.is_empty() {
        let labels: Vec<String> = task.labels.iter().map(|l| format!("@{l}")).collect();
        writeln!(output, "  {} {}", "Labels:".yellow(), labels.join(" ")).ok();
    }
    if !task.priority.is_empty() {
        writeln!(output, "  {} {}", "Priority:".red().bold(), task.priority).ok();
    }
    if !task.project.is_empty() {
        writeln!(output, "  {} {}", "Project:".magenta(), task.project).ok();
    }
    if !task.due.is_empty() {
        writeln!(output, "  {} {}", "Due:".cyan(), task.due).ok();
    }
    if !task.notes.is_empty() {
        writeln!(output, "  {}", "Notes:".dimmed()).ok();
        for note in &task.notes {
            writeln!(output, "    - {note}").ok();
        }
    }

    output
}

/// Format a preview as title and subtitle lines
pub fn format_preview_pretty(preview: &Preview) -> String {
    format!("{}\n  {}", preview.title.bold(), preview.subtitle.dimmed())
}

/// Format a plan as the resolved payload followed by numbered calls
pub fn format_plan_pretty(plan: &Plan) -> String {
    let mut output = format!("{}\n", "Plan (nothing sent)".yellow().bold());
    writeln!(output, "  {} {}", "Todo:".cyan().bold(), plan.task.todo).ok();
    writeln!(output, "  {} {}", "Project id:".magenta(), plan.payload.project_id).ok();

    let labels = &plan.payload.properties.labels;
    if !labels.is_empty() {
        let ids: Vec<String> = labels.iter().map(ToString::to_string).collect();
        writeln!(output, "  {} {}", "Label ids:".yellow(), ids.join(", ")).ok();
    }
    writeln!(output, "  {} {}", "Priority:".red().bold(), plan.payload.properties.priority).ok();
    if !plan.payload.properties.date_string.is_empty() {
        writeln!(output, "  {} {}", "Due:".cyan(), plan.payload.properties.date_string).ok();
    }
    if plan.payload.synced {
        writeln!(output, "  {}", "catalog synced".dimmed()).ok();
    }

    output.push_str(&"─".repeat(60));
    output.push('\n');

    for (index, operation) in plan.operations.iter().enumerate() {
        let line = match operation {
            Operation::AddItem {
                id,
                content,
                project_id,
                ..
            } => format!("add_item  #{id} \"{content}\" -> project {project_id}"),
            Operation::AddNote { item_id, content } => {
                format!("add_note  #{item_id} \"{content}\"")
            },
            Operation::Commit => "commit".to_string(),
        };
        writeln!(output, "{:>2}. {line}", index + 1).ok();
    }

    output
}
