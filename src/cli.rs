//! CLI interface for the career advisor

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "skillsync")]
#[command(about = "Career guidance from a curated question catalog and AI-style answers")]
#[command(long_about = "Ask career questions, browse topics, save answers, and manage a local SkillSync account")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Args, Clone, Debug, Default)]
pub struct OutputArgs {
    /// Output format: console, json, markdown, html
    #[arg(short, long)]
    pub output: Option<String>,

    /// Save output to file
    #[arg(short, long)]
    pub save: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a career question
    Ask {
        /// The question, e.g. "How do I start a career in cybersecurity?"
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,

        /// Only keep answers in these career fields (tech, business, healthcare, arts)
        #[arg(long = "field")]
        fields: Vec<String>,

        /// Answer strategy: catalog_augmented or demo_keyword_table
        #[arg(long)]
        strategy: Option<String>,

        /// Never call the chat-completion API
        #[arg(long)]
        no_ai: bool,

        /// Print full answers instead of previews
        #[arg(short, long)]
        detailed: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show one catalog question with its full answer
    Show {
        id: i64,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// List topics, or the questions in one topic
    Topics {
        /// Topic name (tech, business, healthcare, arts)
        category: Option<String>,
    },

    /// Explain how a question is classified
    Analyze {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Step-by-step guide with tips for a question
    Guide {
        #[arg(required = true, trailing_var_arg = true)]
        question: Vec<String>,
    },

    /// Careers and learning paths matched to your onboarding preferences
    Recommend {
        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Saved questions
    Bookmarks {
        #[command(subcommand)]
        action: Option<BookmarkAction>,
    },

    /// Recent searches and recently viewed questions
    History {
        #[command(subcommand)]
        action: Option<HistoryAction>,
    },

    /// Rate an answer
    Feedback {
        #[command(subcommand)]
        action: FeedbackAction,
    },

    /// Notification center
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationAction>,
    },

    /// App settings
    Settings {
        #[command(subcommand)]
        action: Option<SettingsAction>,
    },

    /// Local account management
    Account {
        #[command(subcommand)]
        action: AccountAction,
    },

    /// Show configuration
    Config {
        #[command(subcommand)]
        action: Option<ConfigAction>,
    },
}

#[derive(Subcommand)]
pub enum BookmarkAction {
    /// List saved questions
    List,

    /// Save or unsave a question
    Toggle { id: i64 },
}

#[derive(Subcommand)]
pub enum HistoryAction {
    /// Recent searches, newest first
    Searches,

    /// Recently viewed questions, newest first
    Viewed,

    /// Forget recent searches
    Clear,
}

#[derive(Subcommand)]
pub enum FeedbackAction {
    /// Record a like or dislike for an answer
    Give {
        question_id: i64,

        /// like or dislike
        feedback: String,

        /// Optional reason
        #[arg(short, long)]
        reason: Option<String>,
    },

    /// List recorded feedback
    List,

    /// Likes, dislikes, and top reasons per question
    Stats,
}

#[derive(Subcommand)]
pub enum NotificationAction {
    /// List notifications
    List,

    /// Mark one notification as read
    Read { id: i64 },

    /// Mark every notification as read
    ReadAll,

    /// Delete one notification
    Delete { id: i64 },

    /// Delete every notification
    Clear,
}

#[derive(Subcommand)]
pub enum SettingsAction {
    /// Show current settings
    Show,

    /// Flip a setting (darkMode, notifications, emailNotifications,
    /// pushNotifications, soundEffects, aiResponses)
    Toggle { key: String },
}

#[derive(Subcommand)]
pub enum AccountAction {
    /// Create an account and sign in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Sign in
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },

    /// Sign out
    Logout,

    /// Show the signed-in user
    Whoami,

    /// Request a password reset token
    Forgot {
        #[arg(long)]
        email: String,
    },

    /// Set a new password with a reset token
    Reset {
        #[arg(long)]
        token: String,
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm_password: String,
    },

    /// Update name or email of the signed-in user
    Profile {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
    },

    /// Save onboarding preferences
    Preferences {
        #[arg(long = "interest")]
        interests: Vec<String>,
        #[arg(long = "skill")]
        skills: Vec<String>,
        #[arg(long)]
        experience_level: Option<String>,
        #[arg(long = "goal")]
        career_goals: Vec<String>,
        #[arg(long = "industry")]
        industries: Vec<String>,
        #[arg(long)]
        work_style: Option<String>,
        #[arg(long)]
        learning_goals: Option<String>,
    },

    /// Clear bookmarks, notifications, history, and settings
    ClearData,

    /// Delete the signed-in account
    Delete,

    /// Export the user database as JSON
    Export {
        /// Write to this file instead of stdout
        #[arg(short, long)]
        file: Option<PathBuf>,
    },

    /// Replace the user database with an exported file
    Import { file: PathBuf },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show,

    /// Print the configuration file path
    Path,

    /// Reset configuration to defaults
    Reset,

    /// Set a configuration value
    Set {
        /// Configuration key (e.g., "advisor.strategy")
        key: String,

        /// Configuration value
        value: String,
    },
}

/// Parse and validate output format
pub fn parse_output_format(format: &str) -> Result<crate::config::OutputFormat, String> {
    match format.to_lowercase().as_str() {
        "console" => Ok(crate::config::OutputFormat::Console),
        "json" => Ok(crate::config::OutputFormat::Json),
        "markdown" | "md" => Ok(crate::config::OutputFormat::Markdown),
        "html" => Ok(crate::config::OutputFormat::Html),
        _ => Err(format!(
            "Invalid output format: {}. Supported: console, json, markdown, html",
            format
        )),
    }
}

/// Join trailing words into one question.
pub fn join_question(words: &[String]) -> String {
    words.join(" ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;

    #[test]
    fn test_parse_output_format() {
        assert_eq!(parse_output_format("MD").unwrap(), OutputFormat::Markdown);
        assert_eq!(parse_output_format("html").unwrap(), OutputFormat::Html);
        assert!(parse_output_format("pdf").is_err());
    }

    #[test]
    fn test_ask_collects_words() {
        let cli = Cli::parse_from([
            "skillsync", "ask", "--field", "tech", "how", "do", "I", "start?",
        ]);
        match cli.command {
            Commands::Ask { question, fields, .. } => {
                assert_eq!(join_question(&question), "how do I start?");
                assert_eq!(fields, vec!["tech".to_string()]);
            }
            _ => panic!("expected ask"),
        }
    }

    #[test]
    fn test_recommend_and_feedback_stats() {
        let cli = Cli::parse_from(["skillsync", "recommend", "--json"]);
        assert!(matches!(cli.command, Commands::Recommend { json: true }));

        let cli = Cli::parse_from(["skillsync", "feedback", "stats"]);
        assert!(matches!(cli.command, Commands::Feedback { action: FeedbackAction::Stats }));
    }

    #[test]
    fn test_account_subcommand() {
        let cli = Cli::parse_from([
            "skillsync", "-v", "account", "login", "--email", "a@b.co", "--password", "secret1",
        ]);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Account { action: AccountAction::Login { .. } }));
    }
}
