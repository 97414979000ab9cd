use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.0" for releases, "0.3.0@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cognition", bin_name = "cognition", version = get_version())]
#[command(about = "Flashcard quizzes kept in a local JSON document", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Use the test document instead of the real one
    #[arg(long, global = true, help_heading = "Options")]
    pub test: bool,

    /// Base directory for the document (defaults to $COGNITION_HOME, then the home directory)
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub home: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage users
    #[command(subcommand, display_order = 1)]
    User(UserCommands),

    /// Manage a user's quizzes
    #[command(subcommand, display_order = 2)]
    Quiz(QuizCommands),

    /// Manage the flashcards of a quiz
    #[command(subcommand, display_order = 3)]
    Card(CardCommands),

    /// Print the path of the document
    #[command(display_order = 10)]
    Path,

    /// Print the resolved storage configuration
    #[command(display_order = 11)]
    Config,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Register a new user
    Add { username: String, password: String },

    /// List all users
    #[command(alias = "ls")]
    List,

    /// Show one user and their quizzes
    Show { username: String },

    /// Change a username
    Rename { username: String, new_username: String },

    /// Change a password
    Passwd { username: String, password: String },

    /// Delete a user and all their quizzes
    #[command(alias = "delete")]
    Rm { username: String },
}

#[derive(Subcommand, Debug)]
pub enum QuizCommands {
    /// Create a quiz for a user
    Add {
        username: String,
        name: String,
        description: String,
    },

    /// List the quizzes of a user
    #[command(alias = "ls")]
    List { username: String },

    /// Show a quiz with its flashcards
    Show { id: String },

    /// Change the name or description of a quiz
    Edit {
        id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,
    },

    /// Delete a quiz
    #[command(alias = "delete")]
    Rm { id: String },
}

#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// Add a flashcard to a quiz
    Add {
        quiz_id: String,
        front: String,
        answer: String,
    },

    /// Remove a flashcard from a quiz
    #[command(alias = "delete")]
    Rm { quiz_id: String, card_id: String },
}
