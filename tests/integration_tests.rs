//! Integration tests for the career advisor

use skillsync::advisor::catalog::{sample_catalog, CareerQuestion, Category};
use skillsync::advisor::classifier::extract_field_from_query;
use skillsync::advisor::{
    detect_category, learning_paths, recommendations, search, AnswerTemplateEngine, QuestionMatcher,
    Strategy,
};
use skillsync::output::{format_answer, parse_answer, AnswerBlock};
use skillsync::storage::preferences::{FeedbackKind, NotificationKind, UserPreferences};
use skillsync::storage::{
    keys, FileStore, KeyValueStore, PasswordResetService, PreferencesRepository, SessionRepository,
    SharedStore, UserRepository,
};
use skillsync::{Advisor, AnswerSource, Config, SkillSyncError};
use std::sync::Arc;
use tempfile::TempDir;

fn file_store(dir: &TempDir) -> SharedStore {
    Arc::new(FileStore::new(dir.path().join("data")).unwrap())
}

fn offline_config(dir: &TempDir) -> Config {
    let mut config = Config::default();
    config.llm.enabled = false;
    config.storage.data_dir = dir.path().join("data");
    config
}

#[test]
fn test_empty_query_returns_catalog_in_order() {
    let catalog = sample_catalog();
    assert_eq!(search("", &catalog), catalog);

    let reversed: Vec<CareerQuestion> = catalog.iter().rev().cloned().collect();
    assert_eq!(search("", &reversed), reversed);
}

#[test]
fn test_substring_matches_are_always_returned() {
    let catalog = sample_catalog();
    let queries = ["tech", "HEALTHCARE", "salary", "network", "Arts", "career"];

    for query in queries {
        let results = search(query, &catalog);
        let lower = query.to_lowercase();
        for entry in &catalog {
            let hit = entry.question.to_lowercase().contains(&lower)
                || entry.answer.to_lowercase().contains(&lower)
                || entry.category.as_str().to_lowercase().contains(&lower);
            if hit {
                assert!(
                    results.iter().any(|r| r.id == entry.id && !r.is_ai_generated),
                    "{} missing for {:?}",
                    entry.id,
                    query
                );
            }
        }
    }
}

#[test]
fn test_category_detection_is_total() {
    let inputs = ["", "   ", "asdkjhasdkjh", "software engineer", "nurse", "graphic design", "teacher"];
    for input in inputs {
        let first = detect_category(input);
        assert_eq!(first, detect_category(input));
        assert!(Category::ALL.contains(&first));
    }
    assert_eq!(detect_category(""), Category::Business);
    assert_eq!(detect_category("asdkjhasdkjh"), Category::Business);
}

#[test]
fn test_specific_fields_win_over_generic_ones() {
    assert_eq!(extract_field_from_query("I want to become a data scientist"), "data science");
}

#[test]
fn test_formatter_keeps_section_boundaries() {
    let text = "**Skills:**\n1. Python\n• Teamwork\nRegular text";
    let blocks = parse_answer(text);
    assert!(matches!(
        blocks.as_slice(),
        [
            AnswerBlock::Heading(h),
            AnswerBlock::Numbered(_),
            AnswerBlock::Bullet(_),
            AnswerBlock::Paragraph(_),
        ] if h == "Skills:"
    ));

    let html = format_answer(text, true).unwrap();
    assert_eq!(html.matches("<h4").count(), 1);
    let heading = html.find("Skills:").unwrap();
    let numbered = html.find("1. Python").unwrap();
    let bullet = html.find("• Teamwork").unwrap();
    let plain = html.find("Regular text").unwrap();
    assert!(heading < numbered && numbered < bullet && bullet < plain);
}

#[test]
fn test_cybersecurity_question_finds_catalog_entry() {
    let catalog = sample_catalog();
    let results = search("How do I start a career in cybersecurity?", &catalog);
    let entry = results
        .iter()
        .find(|r| r.question == "How do I start a career in cybersecurity?" && !r.is_ai_generated);
    assert!(entry.is_some());
}

#[test]
fn test_nonsense_query_gets_one_synthetic_answer() {
    let results = search("asdkjhasdkjh nonsense query", &sample_catalog());
    assert_eq!(results.len(), 1);
    assert!(results[0].is_ai_generated);
    assert_eq!(results[0].category, Category::Business);

    let json = serde_json::to_value(&results[0]).unwrap();
    assert_eq!(json["category"], "Business");
    assert_eq!(json["isAiGenerated"], true);
}

#[test]
fn test_duplicate_signup_and_case_insensitive_lookup() {
    let dir = TempDir::new().unwrap();
    let users = UserRepository::new(file_store(&dir));

    users.create_user("Ada", "ada@example.com", "secret1").unwrap();
    let err = users.create_user("Ada Two", "ADA@Example.COM", "secret2").unwrap_err();
    assert!(matches!(err, SkillSyncError::AlreadyExists(_)));
    assert!(err.to_string().contains("already exists"));

    let found = users.find_user_by_email("Ada@EXAMPLE.com").unwrap();
    assert_eq!(found.map(|u| u.name), Some("Ada".to_string()));
}

#[test]
fn test_strategies_share_the_matcher() {
    let catalog = sample_catalog();
    let demo = QuestionMatcher::new(AnswerTemplateEngine::new(Strategy::DemoKeywordTable));
    let results = demo.search("plumber apprenticeship", &catalog);
    assert_eq!(results.len(), 1);
    assert!(results[0].answer.contains("Demo Mode Active"));
}

#[tokio::test]
async fn test_search_flow_persists_history() {
    let dir = TempDir::new().unwrap();
    let config = offline_config(&dir);
    let advisor = Advisor::new(&config, file_store(&dir)).unwrap();

    let outcome = advisor.search("asdkjhasdkjh nonsense query").await.unwrap();
    assert_eq!(outcome.source, AnswerSource::Template);
    assert_eq!(outcome.results.len(), 1);

    advisor.search("tech").await.unwrap();
    advisor.search("asdkjhasdkjh nonsense query").await.unwrap();

    // a fresh handle reads the same files
    let preferences = PreferencesRepository::new(file_store(&dir));
    let searches = preferences.recent_searches().unwrap();
    assert_eq!(searches.len(), 2);
    assert_eq!(searches[0].query, "asdkjhasdkjh nonsense query");
    assert!(dir.path().join("data").join("skillsync_recent_searches.json").exists());
}

#[tokio::test]
async fn test_live_failure_falls_back_to_templates() {
    let dir = TempDir::new().unwrap();
    let mut config = offline_config(&dir);
    config.llm.enabled = true;
    config.llm.api_url = "http://127.0.0.1:9/v1/chat/completions".to_string();
    config.llm.timeout_secs = 2;
    let advisor =
        Advisor::with_api_key(&config, file_store(&dir), Some("sk-test".to_string())).unwrap();
    assert!(advisor.live_answers_available().unwrap());

    let outcome = advisor.search("asdkjhasdkjh nonsense query").await.unwrap();
    assert_eq!(outcome.source, AnswerSource::Template);
    assert_eq!(outcome.results.len(), 1);
    assert_eq!(
        outcome.notice,
        Some("Network error. Please check your internet connection.")
    );
    assert!(outcome.results[0].is_ai_generated);
}

#[test]
fn test_bookmark_milestones_reach_notification_center() {
    let dir = TempDir::new().unwrap();
    let preferences = PreferencesRepository::new(file_store(&dir));
    let catalog = sample_catalog();

    for question in catalog.iter().take(5) {
        preferences.toggle_bookmark(question.id, &catalog).unwrap();
    }

    let notifications = preferences.notifications().unwrap();
    assert_eq!(notifications.len(), 6);
    assert_eq!(notifications[0].kind, NotificationKind::Achievement);
    assert_eq!(preferences.unread_notification_count().unwrap(), 6);
}

#[test]
fn test_account_lifecycle_over_files() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    let users = UserRepository::new(store.clone());
    let sessions = SessionRepository::new(store.clone());

    let user = users.create_user("Ada", "ada@example.com", "secret1").unwrap();
    sessions.set_current_user(&user).unwrap();

    let token = PasswordResetService::new(store.clone())
        .request_reset("ada@example.com")
        .unwrap();
    PasswordResetService::new(store.clone())
        .reset_password(&token, "brandnew", "brandnew")
        .unwrap();
    assert!(users.authenticate_user("ada@example.com", "brandnew").is_ok());

    let raw = store.get(keys::USERS_DB).unwrap().unwrap();
    assert!(!raw.contains("brandnew"));

    users.delete_user(user.id).unwrap();
    sessions.clear().unwrap();
    assert!(sessions.current_user().unwrap().is_none());
}

#[test]
fn test_corrupt_files_are_tolerated() {
    let dir = TempDir::new().unwrap();
    let store = file_store(&dir);
    store.set(keys::RECENT_SEARCHES, "{{{").unwrap();
    store.set(keys::SETTINGS, "[]").unwrap();

    let preferences = PreferencesRepository::new(store);
    assert!(preferences.recent_searches().unwrap().is_empty());
    assert!(preferences.settings().unwrap().ai_responses);
    preferences.record_search("nursing").unwrap();
    assert_eq!(preferences.recent_searches().unwrap().len(), 1);
}

#[test]
fn test_saved_preferences_drive_recommendations() {
    let dir = TempDir::new().unwrap();
    PreferencesRepository::new(file_store(&dir))
        .save_preferences(&UserPreferences {
            interests: vec!["Technology".into(), "Healthcare".into()],
            skills: vec!["Programming".into()],
            ..Default::default()
        })
        .unwrap();

    let saved = PreferencesRepository::new(file_store(&dir))
        .preferences()
        .unwrap()
        .unwrap();
    let picks = recommendations(&saved);
    let titles: Vec<&str> = picks.iter().map(|r| r.title).collect();
    assert_eq!(titles, vec!["Software Engineer", "Healthcare Administrator"]);
    assert_eq!(learning_paths(&saved)[0].title, "Full Stack Development");
}

#[test]
fn test_feedback_stats_over_files() {
    let dir = TempDir::new().unwrap();
    let preferences = PreferencesRepository::new(file_store(&dir));
    preferences.record_feedback(3, FeedbackKind::Like, None).unwrap();
    preferences
        .record_feedback(3, FeedbackKind::Dislike, Some("needs more detail".into()))
        .unwrap();
    preferences.record_feedback(4, FeedbackKind::Like, None).unwrap();

    let stats = PreferencesRepository::new(file_store(&dir))
        .feedback_stats(&sample_catalog())
        .unwrap();
    assert_eq!(stats[0].question_id, 3);
    assert_eq!(stats[0].helpful_percentage, 50);
    assert_eq!(stats[0].reasons[0].reason, "needs more detail");
    assert_eq!(stats[1].question_id, 4);
}
