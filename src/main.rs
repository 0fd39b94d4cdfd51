//! SkillSync: career questions answered from a curated catalog, templates,
//! or a chat-completion API

use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use indicatif::ProgressBar;
use log::{error, info};
use skillsync::advisor::catalog::{sample_catalog, Category, SUGGESTED_QUESTIONS};
use skillsync::advisor::classifier::{analyze_question, detect_question_type, extract_field_from_query};
use skillsync::advisor::{
    detect_category, filter_by_categories, learning_paths, recommendations, responses::quick_guide,
};
use skillsync::app::{Advisor, AnswerSource};
use skillsync::auth::{validate_account_form, AccountForm, FormMode};
use skillsync::cli::{
    self, AccountAction, BookmarkAction, Cli, Commands, ConfigAction, FeedbackAction, HistoryAction,
    NotificationAction, OutputArgs, SettingsAction,
};
use skillsync::config::{Config, OutputFormat};
use skillsync::output::formatter::{save_output_to_file, suggest_filename, AnswerRenderer, SearchReport};
use skillsync::storage::preferences::{FeedbackKind, SettingKey, UserPreferences};
use skillsync::storage::users::ProfileUpdate;
use skillsync::storage::{
    FileStore, PasswordResetService, PreferencesRepository, SessionRepository, SharedStore, UserRepository,
};
use skillsync::{Result, SkillSyncError};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::process;
use std::sync::Arc;
use std::time::Duration;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let config_path = cli.config.clone().unwrap_or_else(Config::config_path);
    let config = match Config::load_from(&config_path) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run_command(cli.command, config, &config_path).await {
        error!("Command failed: {}", e);
        process::exit(1);
    }
}

fn open_store(config: &Config) -> Result<SharedStore> {
    config.ensure_data_dir()?;
    Ok(Arc::new(FileStore::new(config.data_dir())?))
}

fn output_format(config: &Config, output: &OutputArgs) -> Result<OutputFormat> {
    match &output.output {
        Some(format) => cli::parse_output_format(format).map_err(SkillSyncError::InvalidInput),
        None => Ok(config.output.format),
    }
}

fn emit(content: &str, save: Option<&Path>) -> Result<()> {
    match save {
        Some(path) => {
            save_output_to_file(content, path)?;
            println!("💾 Saved to {}", path.display());
        }
        None => println!("{}", content),
    }
    Ok(())
}

fn parse_fields(fields: &[String]) -> Result<HashSet<Category>> {
    fields
        .iter()
        .map(|field| field.parse().map_err(SkillSyncError::InvalidInput))
        .collect()
}

fn signed_in(sessions: &SessionRepository) -> Result<skillsync::storage::session::SessionUser> {
    sessions
        .current_user()?
        .ok_or_else(|| SkillSyncError::InvalidInput("Not signed in. Run `skillsync account login` first.".to_string()))
}

async fn run_command(command: Commands, mut config: Config, config_path: &Path) -> Result<()> {
    let renderer_for = |config: &Config, detailed: bool| AnswerRenderer::with_options(config.output.color_output, detailed);

    match command {
        Commands::Ask {
            question,
            fields,
            strategy,
            no_ai,
            detailed,
            output,
        } => {
            let query = cli::join_question(&question);
            if let Some(strategy) = strategy {
                config.advisor.strategy = strategy.parse().map_err(SkillSyncError::InvalidInput)?;
            }
            if no_ai {
                config.llm.enabled = false;
            }
            let format = output_format(&config, &output)?;
            let fields = parse_fields(&fields)?;

            let advisor = Advisor::new(&config, open_store(&config)?)?;
            info!("Answering with {} strategy", config.advisor.strategy);

            let spinner = if advisor.live_answers_available()? || config.llm.demo_delay_ms > 0 {
                let spinner = ProgressBar::new_spinner();
                spinner.set_message("Thinking about your career question...");
                spinner.enable_steady_tick(Duration::from_millis(100));
                Some(spinner)
            } else {
                None
            };

            let outcome = advisor.search(&query).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            let outcome = outcome?;

            let results = filter_by_categories(&fields, &outcome.results);
            if let Some(first) = results.first().filter(|_| outcome.source != AnswerSource::Catalog) {
                advisor.view(first)?;
            }

            let report = SearchReport::new(&outcome.query, &results).with_notice(outcome.notice);
            let content = renderer_for(&config, detailed).render_results(&report, format)?;
            let save = output
                .save
                .map(|path| resolve_save_path(path, format, &outcome.query));
            emit(&content, save.as_deref())?;
        }

        Commands::Show { id, output } => {
            let format = output_format(&config, &output)?;
            let advisor = Advisor::new(&config, open_store(&config)?)?;
            let question = advisor.show(id)?;
            let content = renderer_for(&config, true).render_question(&question, format)?;
            let save = output
                .save
                .map(|path| resolve_save_path(path, format, &question.question));
            emit(&content, save.as_deref())?;
        }

        Commands::Topics { category } => {
            let advisor = Advisor::new(&config, open_store(&config)?)?;
            match category {
                Some(name) => {
                    let category: Category = name.parse().map_err(SkillSyncError::InvalidInput)?;
                    let questions = advisor.topic(category);
                    let report = SearchReport::new(category.as_str(), &questions);
                    println!("{}", renderer_for(&config, false).render_results(&report, OutputFormat::Console)?);
                }
                None => {
                    println!("📚 Topics\n");
                    for category in Category::ALL {
                        println!("  • {} ({} questions)", category, advisor.topic(category).len());
                    }
                    println!("\n💡 Try asking:");
                    for suggestion in SUGGESTED_QUESTIONS {
                        println!("  • {}", suggestion);
                    }
                }
            }
        }

        Commands::Analyze { question } => {
            let query = cli::join_question(&question);
            let analysis = analyze_question(&query);
            println!("🔍 Question Analysis\n");
            println!("Category: {}", detect_category(&query));
            println!("Field: {}", analysis.field.map_or("none", |field| field.name));
            println!("Field (quick match): {}", extract_field_from_query(&query));
            println!("Intent: {}", analysis.intent);
            println!("Question type: {:?}", detect_question_type(&query));
        }

        Commands::Guide { question } => {
            let query = cli::join_question(&question);
            println!("{}", quick_guide(&query));
        }

        Commands::Recommend { json } => {
            let preferences = PreferencesRepository::new(open_store(&config)?);
            let Some(saved) = preferences.preferences()? else {
                println!("No preferences saved yet. Run `skillsync account preferences` first.");
                return Ok(());
            };
            let careers = recommendations(&saved);
            let paths = learning_paths(&saved);

            if json {
                let value = serde_json::json!({ "recommendations": careers, "learningPaths": paths });
                println!("{}", serde_json::to_string_pretty(&value)?);
                return Ok(());
            }

            println!("🎯 Recommended careers
");
            for career in &careers {
                println!(
                    "  {} {}% match  {}  growth: {}",
                    career.title.bold(),
                    career.match_score,
                    career.salary,
                    career.growth
                );
                println!("    {}", career.description);
                println!("    Skills: {}", career.skills.join(", "));
            }
            println!("\n📚 Learning paths\n");
            for path in &paths {
                println!("  {} {} ({}, {})", path.icon, path.title.bold(), path.duration, path.level);
            }
        }

        Commands::Bookmarks { action } => {
            let advisor = Advisor::new(&config, open_store(&config)?)?;
            match action {
                Some(BookmarkAction::List) | None => {
                    let saved = advisor.bookmarked_questions()?;
                    let report = SearchReport::new("", &saved);
                    println!("🔖 Saved questions");
                    println!("{}", renderer_for(&config, false).render_results(&report, OutputFormat::Console)?);
                }
                Some(BookmarkAction::Toggle { id }) => {
                    let toggle = advisor.preferences().toggle_bookmark(id, advisor.catalog())?;
                    if toggle.bookmarked {
                        println!("✅ Saved question {} ({} saved)", id, toggle.total);
                    } else {
                        println!("🗑️  Removed question {} ({} saved)", id, toggle.total);
                    }
                    for notification in &toggle.notifications {
                        println!("🔔 {}: {}", notification.title.bold(), notification.message);
                    }
                }
            }
        }

        Commands::History { action } => {
            let preferences = PreferencesRepository::new(open_store(&config)?);
            match action {
                Some(HistoryAction::Searches) | None => {
                    println!("🕘 Recent searches\n");
                    for search in preferences.recent_searches()? {
                        let when = chrono::DateTime::<chrono::Utc>::from_timestamp_millis(search.timestamp)
                            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
                            .unwrap_or_default();
                        println!("  {}  {}", when.dimmed(), search.query);
                    }
                }
                Some(HistoryAction::Viewed) => {
                    println!("👀 Recently viewed\n");
                    for question in preferences.recently_viewed()? {
                        println!("  #{} {} [{}]", question.id, question.question, question.category);
                    }
                }
                Some(HistoryAction::Clear) => {
                    preferences.clear_recent_searches()?;
                    println!("✅ Recent searches cleared");
                }
            }
        }

        Commands::Feedback { action } => {
            let preferences = PreferencesRepository::new(open_store(&config)?);
            match action {
                FeedbackAction::Give {
                    question_id,
                    feedback,
                    reason,
                } => {
                    let kind: FeedbackKind = feedback.parse()?;
                    preferences.record_feedback(question_id, kind, reason)?;
                    println!("🙏 Thanks for your feedback!");
                }
                FeedbackAction::Stats => {
                    let stats = preferences.feedback_stats(&sample_catalog())?;
                    let likes: usize = stats.iter().map(|s| s.total_likes).sum();
                    let dislikes: usize = stats.iter().map(|s| s.total_dislikes).sum();
                    println!(
                        "👥 Community feedback: {} votes ({} 👍, {} 👎)\n",
                        preferences.feedback()?.len(),
                        likes,
                        dislikes
                    );
                    for entry in &stats {
                        println!(
                            "  #{} {} [{}]\n    {}% helpful ({} 👍, {} 👎)",
                            entry.question_id,
                            entry.question.bold(),
                            entry.category,
                            entry.helpful_percentage,
                            entry.total_likes,
                            entry.total_dislikes
                        );
                        for reason in entry.reasons.iter().take(3) {
                            println!("      • {} ({})", reason.reason, reason.count);
                        }
                    }
                }
                FeedbackAction::List => {
                    for entry in preferences.feedback()? {
                        println!(
                            "  #{} {:?} {} {}",
                            entry.question_id,
                            entry.feedback,
                            entry.timestamp.format("%Y-%m-%d %H:%M"),
                            entry.reason.unwrap_or_default()
                        );
                    }
                }
            }
        }

        Commands::Notifications { action } => {
            let preferences = PreferencesRepository::new(open_store(&config)?);
            match action {
                Some(NotificationAction::List) | None => {
                    println!("🔔 Notifications ({} unread)\n", preferences.unread_notification_count()?);
                    for notification in preferences.notifications()? {
                        let marker = if notification.is_read { " " } else { "●" };
                        println!(
                            "{} [{}] {} ({})\n    {}",
                            marker,
                            notification.id,
                            notification.title.bold(),
                            notification.time,
                            notification.message
                        );
                    }
                }
                Some(NotificationAction::Read { id }) => preferences.mark_notification_read(id)?,
                Some(NotificationAction::ReadAll) => preferences.mark_all_notifications_read()?,
                Some(NotificationAction::Delete { id }) => preferences.delete_notification(id)?,
                Some(NotificationAction::Clear) => preferences.clear_notifications()?,
            }
        }

        Commands::Settings { action } => {
            let preferences = PreferencesRepository::new(open_store(&config)?);
            let settings = match action {
                Some(SettingsAction::Show) | None => preferences.settings()?,
                Some(SettingsAction::Toggle { key }) => preferences.toggle_setting(key.parse()?)?,
            };
            println!("⚙️  Settings\n");
            for key in SettingKey::ALL {
                let state = if settings.get(key) { "on".green() } else { "off".red() };
                println!("  {:<20} {}", key.as_str(), state);
            }
        }

        Commands::Account { action } => run_account(action, &config).await?,

        Commands::Config { action } => match action {
            Some(ConfigAction::Show) | None => {
                println!("⚙️  Current Configuration\n");
                println!("Config file: {}", config_path.display());
                println!("Data directory: {}", config.data_dir().display());
                println!("Answer strategy: {}", config.advisor.strategy);
                println!("Sparse threshold: {}", config.advisor.sparse_threshold);
                println!("\nChat completion:");
                println!("  Enabled: {}", config.llm.enabled);
                println!("  Model: {}", config.llm.model);
                println!(
                    "  API key: {}",
                    if config.api_key().is_some() { "configured" } else { "not set" }
                );
                println!("  Demo delay: {}ms", config.llm.demo_delay_ms);
                println!("\nOutput: {:?} (colors: {})", config.output.format, config.output.color_output);
            }
            Some(ConfigAction::Path) => println!("{}", config_path.display()),
            Some(ConfigAction::Reset) => {
                Config::default().save_to(config_path)?;
                println!("✅ Configuration reset to defaults");
            }
            Some(ConfigAction::Set { key, value }) => {
                config.set_value(&key, &value)?;
                config.save_to(config_path)?;
                println!("✅ Set {} = {}", key, value);
            }
        },
    }

    Ok(())
}

async fn run_account(action: AccountAction, config: &Config) -> Result<()> {
    let store = open_store(config)?;
    let users = UserRepository::new(store.clone());
    let sessions = SessionRepository::new(store.clone());

    match action {
        AccountAction::Signup {
            name,
            email,
            password,
            confirm_password,
        } => {
            let form = AccountForm {
                name,
                email,
                password,
                confirm_password,
            };
            validate_account_form(&form, FormMode::SignUp)?;
            let user = users.create_user(form.name.trim(), form.email.trim(), &form.password)?;
            sessions.set_current_user(&user)?;
            println!("🎉 Welcome to SkillSync, {}!", user.name);
        }
        AccountAction::Login { email, password } => {
            let form = AccountForm {
                email,
                password,
                ..Default::default()
            };
            validate_account_form(&form, FormMode::SignIn)?;
            let user = users.authenticate_user(form.email.trim(), &form.password)?;
            sessions.set_current_user(&user)?;
            println!("👋 Welcome back, {}!", user.name);
        }
        AccountAction::Logout => {
            sessions.clear()?;
            println!("Signed out");
        }
        AccountAction::Whoami => match sessions.current_user()? {
            Some(user) => {
                println!("{} <{}>", user.name, user.email);
                println!("Member since {}", user.join_date.format("%Y-%m-%d"));
            }
            None => println!("Not signed in"),
        },
        AccountAction::Forgot { email } => {
            let token = PasswordResetService::new(store).request_reset(&email)?;
            println!("📧 Reset token (valid for one hour): {}", token);
        }
        AccountAction::Reset {
            token,
            password,
            confirm_password,
        } => {
            PasswordResetService::new(store).reset_password(&token, &password, &confirm_password)?;
            println!("✅ Password updated. You can sign in with your new password.");
        }
        AccountAction::Profile { name, email } => {
            let current = signed_in(&sessions)?;
            let updated = users.update_user_profile(current.id, ProfileUpdate { name, email })?;
            sessions.set_current_user(&updated)?;
            println!("✅ Profile updated: {} <{}>", updated.name, updated.email);
        }
        AccountAction::Preferences {
            interests,
            skills,
            experience_level,
            career_goals,
            industries,
            work_style,
            learning_goals,
        } => {
            signed_in(&sessions)?;
            let preferences = UserPreferences {
                interests,
                skills,
                experience_level: experience_level.unwrap_or_default(),
                career_goals,
                industries,
                work_style: work_style.unwrap_or_default(),
                learning_goals: learning_goals.unwrap_or_default(),
            };
            PreferencesRepository::new(store).save_preferences(&preferences)?;
            println!("✅ Preferences saved");
        }
        AccountAction::ClearData => {
            let current = signed_in(&sessions)?;
            users.clear_user_data(current.id)?;
            println!("✅ Saved questions, notifications, history, and settings cleared");
        }
        AccountAction::Delete => {
            let current = signed_in(&sessions)?;
            users.delete_user(current.id)?;
            sessions.clear()?;
            println!("Account deleted");
        }
        AccountAction::Export { file } => {
            let exported = users.export_database()?;
            emit(&exported, file.as_deref())?;
        }
        AccountAction::Import { file } => {
            let content = std::fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            users.import_database(&content)?;
            println!("✅ Imported user database from {}", file.display());
        }
    }

    Ok(())
}

/// A directory target gets a generated file name.
fn resolve_save_path(path: PathBuf, format: OutputFormat, stem: &str) -> PathBuf {
    if path.is_dir() {
        path.join(suggest_filename(format, stem))
    } else {
        path
    }
}
