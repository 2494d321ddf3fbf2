use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

#[derive(Parser)]
#[command(name = "taskline")]
#[command(about = "Parse free-form task lines into labels, priority, project, due date and notes")]
#[command(long_about = "taskline - a task line parser

Turns a single line such as

  pick up groceries !!1 #{grocery shopping} @errands due: tomorrow note: check milk

into structured fields, previews it, and plans the calls a task service
would receive.

QUICK START:
  taskline parse \"buy milk @errands p2\"     Show the extracted fields
  taskline preview \"buy milk due: friday\"   One-line summary for launchers
  taskline plan \"buy milk #groceries\"       Resolve ids and list the calls

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  taskline <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to `general.default_output` from the config file.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Path to the config file (default: ~/.taskline/config.yaml)
    #[arg(short, long, global = true, env = "TASKLINE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a task line and show every extracted field
    ///
    /// # Supported Patterns
    ///
    ///   Labels:     @errands @on_the_go
    ///   Priority:   !!1 .. !!4, p1 .. p4 (1 is most urgent)
    ///   Project:    #groceries, #{grocery shopping}, #(a b), #`a b`, #"a b", #'a b'
    ///   Due date:   due: next friday      (kept as text, up to the next note:)
    ///   Notes:      note: first note: second
    ///
    /// # Examples
    ///
    ///   taskline parse "pick up groceries !!1 @errands due: tomorrow"
    ///   taskline parse pick up groceries p2 -o json
    #[command(alias = "p")]
    Parse(TaskTextArgs),

    /// Show the one-line summary a launcher displays before submitting
    ///
    /// JSON output is a script-filter document: {"items": [{title, subtitle, arg, valid}]}.
    ///
    /// # Examples
    ///
    ///   taskline preview "call mom @phone note: ask about sunday"
    ///   taskline preview "call mom" -o json
    Preview(TaskTextArgs),

    /// Resolve labels and project against the catalog and list the resulting calls
    ///
    /// Nothing is sent anywhere. Label and project names are looked up in
    /// the catalog file (default: ~/.taskline/catalog.yaml); unknown labels
    /// are dropped and unknown projects fall back to the inbox.
    ///
    /// # Examples
    ///
    ///   taskline plan "buy milk #groceries @errands !!2 note: whole"
    ///   taskline plan "buy milk" --catalog ./catalog.yaml -o json
    Plan(PlanArgs),

    /// Generate shell completions
    ///
    /// Example: taskline completions bash > ~/.bash_completion.d/taskline
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show the effective configuration
    Config,
}

/// A task line given as one or more words.
#[derive(Args, Debug)]
pub struct TaskTextArgs {
    /// The task line; multiple words are joined with single spaces
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,
}

impl TaskTextArgs {
    /// The task line as a single string.
    #[must_use]
    pub fn text(&self) -> String {
        self.text.join(" ")
    }
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    #[command(flatten)]
    pub task: TaskTextArgs,

    /// Catalog file with known labels and projects
    #[arg(long)]
    pub catalog: Option<PathBuf>,
}
