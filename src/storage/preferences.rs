//! Per-user state: bookmarks, notifications, history, settings, feedback,
//! and onboarding preferences

use crate::advisor::catalog::{find_by_id, CareerQuestion, Category};
use crate::error::{Result, SkillSyncError};
use crate::storage::{keys, load_json, load_json_or_default, save_json, SharedStore};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use unicode_segmentation::UnicodeSegmentation;

pub const MAX_RECENT_SEARCHES: usize = 50;
pub const MAX_RECENTLY_VIEWED: usize = 20;
/// Bookmark counts that unlock an achievement notification.
pub const BOOKMARK_MILESTONES: [usize; 4] = [5, 10, 25, 50];

const PREVIEW_GRAPHEMES: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Ai,
    Bookmark,
    Trending,
    Achievement,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    pub time: String,
    pub is_read: bool,
}

impl Notification {
    fn fresh(id: i64, kind: NotificationKind, title: &str, message: String) -> Self {
        Self {
            id,
            kind,
            title: title.to_string(),
            message,
            time: "Just now".to_string(),
            is_read: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecentSearch {
    pub query: String,
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Like,
    Dislike,
}

impl FromStr for FeedbackKind {
    type Err = SkillSyncError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "like" | "up" | "helpful" => Ok(FeedbackKind::Like),
            "dislike" | "down" | "unhelpful" => Ok(FeedbackKind::Dislike),
            other => Err(SkillSyncError::InvalidInput(format!("Unknown feedback: {}", other))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackEntry {
    pub question_id: i64,
    pub feedback: FeedbackKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReasonCount {
    pub reason: String,
    pub count: usize,
}

/// Aggregated votes for one catalog question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedbackStats {
    pub question_id: i64,
    pub question: String,
    pub category: Category,
    pub total_likes: usize,
    pub total_dislikes: usize,
    /// Dislike reasons, most common first.
    pub reasons: Vec<ReasonCount>,
    pub helpful_percentage: u32,
}

impl FeedbackStats {
    fn for_question(question: &CareerQuestion) -> Self {
        Self {
            question_id: question.id,
            question: question.question.clone(),
            category: question.category,
            total_likes: 0,
            total_dislikes: 0,
            reasons: Vec::new(),
            helpful_percentage: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.total_likes + self.total_dislikes
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    pub dark_mode: bool,
    pub notifications: bool,
    pub email_notifications: bool,
    pub push_notifications: bool,
    pub sound_effects: bool,
    /// Allow live AI answers when nothing in the catalog matches.
    pub ai_responses: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            dark_mode: false,
            notifications: true,
            email_notifications: true,
            push_notifications: false,
            sound_effects: true,
            ai_responses: true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingKey {
    DarkMode,
    Notifications,
    EmailNotifications,
    PushNotifications,
    SoundEffects,
    AiResponses,
}

impl SettingKey {
    pub const ALL: [SettingKey; 6] = [
        SettingKey::DarkMode,
        SettingKey::Notifications,
        SettingKey::EmailNotifications,
        SettingKey::PushNotifications,
        SettingKey::SoundEffects,
        SettingKey::AiResponses,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SettingKey::DarkMode => "darkMode",
            SettingKey::Notifications => "notifications",
            SettingKey::EmailNotifications => "emailNotifications",
            SettingKey::PushNotifications => "pushNotifications",
            SettingKey::SoundEffects => "soundEffects",
            SettingKey::AiResponses => "aiResponses",
        }
    }
}

impl fmt::Display for SettingKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SettingKey {
    type Err = SkillSyncError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized: String = s
            .chars()
            .filter(|c| c.is_ascii_alphanumeric())
            .collect::<String>()
            .to_lowercase();
        SettingKey::ALL
            .into_iter()
            .find(|key| key.as_str().to_lowercase() == normalized)
            .ok_or_else(|| SkillSyncError::InvalidInput(format!("Unknown setting: {}", s)))
    }
}

impl Settings {
    pub fn get(&self, key: SettingKey) -> bool {
        match key {
            SettingKey::DarkMode => self.dark_mode,
            SettingKey::Notifications => self.notifications,
            SettingKey::EmailNotifications => self.email_notifications,
            SettingKey::PushNotifications => self.push_notifications,
            SettingKey::SoundEffects => self.sound_effects,
            SettingKey::AiResponses => self.ai_responses,
        }
    }

    fn slot(&mut self, key: SettingKey) -> &mut bool {
        match key {
            SettingKey::DarkMode => &mut self.dark_mode,
            SettingKey::Notifications => &mut self.notifications,
            SettingKey::EmailNotifications => &mut self.email_notifications,
            SettingKey::PushNotifications => &mut self.push_notifications,
            SettingKey::SoundEffects => &mut self.sound_effects,
            SettingKey::AiResponses => &mut self.ai_responses,
        }
    }
}

/// Answers collected by the onboarding questionnaire.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UserPreferences {
    pub interests: Vec<String>,
    pub skills: Vec<String>,
    pub experience_level: String,
    pub career_goals: Vec<String>,
    pub industries: Vec<String>,
    pub work_style: String,
    pub learning_goals: String,
}

/// Result of [`PreferencesRepository::toggle_bookmark`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookmarkToggle {
    pub bookmarked: bool,
    pub total: usize,
    /// Notifications raised by this toggle, newest first.
    pub notifications: Vec<Notification>,
}

const CLEARABLE_KEYS: [&str; 5] = [
    keys::BOOKMARKS,
    keys::NOTIFICATIONS,
    keys::RECENT_SEARCHES,
    keys::RECENTLY_VIEWED,
    keys::SETTINGS,
];

#[derive(Clone)]
pub struct PreferencesRepository {
    store: SharedStore,
}

impl PreferencesRepository {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // Bookmarks

    pub fn bookmarks(&self) -> Result<Vec<i64>> {
        load_json_or_default(self.store.as_ref(), keys::BOOKMARKS)
    }

    pub fn is_bookmarked(&self, id: i64) -> Result<bool> {
        Ok(self.bookmarks()?.contains(&id))
    }

    /// Add or remove a bookmark. Saving a catalog question raises a
    /// "Question Saved" notification, plus an achievement when the new
    /// total hits a milestone.
    pub fn toggle_bookmark(&self, id: i64, catalog: &[CareerQuestion]) -> Result<BookmarkToggle> {
        let mut bookmarks = self.bookmarks()?;

        if let Some(pos) = bookmarks.iter().position(|&b| b == id) {
            bookmarks.remove(pos);
            save_json(self.store.as_ref(), keys::BOOKMARKS, &bookmarks)?;
            return Ok(BookmarkToggle {
                bookmarked: false,
                total: bookmarks.len(),
                notifications: Vec::new(),
            });
        }

        bookmarks.push(id);
        save_json(self.store.as_ref(), keys::BOOKMARKS, &bookmarks)?;
        let total = bookmarks.len();

        let mut raised = Vec::new();
        if let Some(question) = find_by_id(catalog, id) {
            let mut existing = self.notifications()?;
            let base_id = next_notification_id(&existing);

            if BOOKMARK_MILESTONES.contains(&total) {
                raised.push(Notification::fresh(
                    base_id + 1,
                    NotificationKind::Achievement,
                    "Achievement Unlocked! 🎉",
                    format!(
                        "You've saved {} questions! Keep exploring to grow your knowledge.",
                        total
                    ),
                ));
            }
            raised.push(Notification::fresh(
                base_id,
                NotificationKind::Bookmark,
                "Question Saved",
                format!(
                    "\"{}...\" has been added to your saved questions.",
                    preview(&question.question)
                ),
            ));

            let mut updated = raised.clone();
            updated.append(&mut existing);
            self.save_notifications(&updated)?;
        }

        Ok(BookmarkToggle {
            bookmarked: true,
            total,
            notifications: raised,
        })
    }

    // Notifications

    pub fn notifications(&self) -> Result<Vec<Notification>> {
        load_json_or_default(self.store.as_ref(), keys::NOTIFICATIONS)
    }

    fn save_notifications(&self, notifications: &[Notification]) -> Result<()> {
        save_json(self.store.as_ref(), keys::NOTIFICATIONS, notifications)
    }

    pub fn unread_notification_count(&self) -> Result<usize> {
        Ok(self.notifications()?.iter().filter(|n| !n.is_read).count())
    }

    pub fn mark_notification_read(&self, id: i64) -> Result<()> {
        let mut notifications = self.notifications()?;
        let notification = notifications
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| SkillSyncError::NotFound(format!("notification {}", id)))?;
        notification.is_read = true;
        self.save_notifications(&notifications)
    }

    pub fn mark_all_notifications_read(&self) -> Result<()> {
        let mut notifications = self.notifications()?;
        for notification in &mut notifications {
            notification.is_read = true;
        }
        self.save_notifications(&notifications)
    }

    pub fn delete_notification(&self, id: i64) -> Result<()> {
        let mut notifications = self.notifications()?;
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        if notifications.len() == before {
            return Err(SkillSyncError::NotFound(format!("notification {}", id)));
        }
        self.save_notifications(&notifications)
    }

    pub fn clear_notifications(&self) -> Result<()> {
        self.store.remove(keys::NOTIFICATIONS)
    }

    // History

    pub fn recent_searches(&self) -> Result<Vec<RecentSearch>> {
        load_json_or_default(self.store.as_ref(), keys::RECENT_SEARCHES)
    }

    /// Record a search, newest first. Repeats move to the front and the
    /// list is capped. Blank queries are ignored.
    pub fn record_search(&self, query: &str) -> Result<()> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(());
        }

        let mut searches = self.recent_searches()?;
        searches.retain(|s| s.query != query);
        searches.insert(
            0,
            RecentSearch {
                query: query.to_string(),
                timestamp: Utc::now().timestamp_millis(),
            },
        );
        searches.truncate(MAX_RECENT_SEARCHES);
        save_json(self.store.as_ref(), keys::RECENT_SEARCHES, &searches)
    }

    pub fn clear_recent_searches(&self) -> Result<()> {
        self.store.remove(keys::RECENT_SEARCHES)
    }

    pub fn recently_viewed(&self) -> Result<Vec<CareerQuestion>> {
        load_json_or_default(self.store.as_ref(), keys::RECENTLY_VIEWED)
    }

    pub fn record_view(&self, question: &CareerQuestion) -> Result<()> {
        let mut viewed = self.recently_viewed()?;
        viewed.retain(|q| q.id != question.id);
        viewed.insert(0, question.clone());
        viewed.truncate(MAX_RECENTLY_VIEWED);
        save_json(self.store.as_ref(), keys::RECENTLY_VIEWED, &viewed)
    }

    // Settings

    pub fn settings(&self) -> Result<Settings> {
        load_json_or_default(self.store.as_ref(), keys::SETTINGS)
    }

    pub fn save_settings(&self, settings: &Settings) -> Result<()> {
        save_json(self.store.as_ref(), keys::SETTINGS, settings)
    }

    /// Flip one setting and return the updated settings.
    pub fn toggle_setting(&self, key: SettingKey) -> Result<Settings> {
        let mut settings = self.settings()?;
        let slot = settings.slot(key);
        *slot = !*slot;
        self.save_settings(&settings)?;
        Ok(settings)
    }

    // Feedback

    pub fn feedback(&self) -> Result<Vec<FeedbackEntry>> {
        load_json_or_default(self.store.as_ref(), keys::FEEDBACK)
    }

    pub fn record_feedback(
        &self,
        question_id: i64,
        feedback: FeedbackKind,
        reason: Option<String>,
    ) -> Result<FeedbackEntry> {
        let entry = FeedbackEntry {
            question_id,
            feedback,
            reason,
            timestamp: Utc::now(),
        };
        let mut all = self.feedback()?;
        all.push(entry.clone());
        save_json(self.store.as_ref(), keys::FEEDBACK, &all)?;
        Ok(entry)
    }

    /// Votes per catalog question, busiest first. Feedback for questions
    /// outside the catalog is ignored.
    pub fn feedback_stats(&self, catalog: &[CareerQuestion]) -> Result<Vec<FeedbackStats>> {
        let mut stats: Vec<FeedbackStats> = Vec::new();

        for entry in self.feedback()? {
            let index = match stats.iter().position(|s| s.question_id == entry.question_id) {
                Some(index) => index,
                None => match find_by_id(catalog, entry.question_id) {
                    Some(question) => {
                        stats.push(FeedbackStats::for_question(question));
                        stats.len() - 1
                    }
                    None => continue,
                },
            };

            let current = &mut stats[index];
            match entry.feedback {
                FeedbackKind::Like => current.total_likes += 1,
                FeedbackKind::Dislike => {
                    current.total_dislikes += 1;
                    if let Some(reason) = entry.reason.filter(|r| !r.is_empty()) {
                        match current.reasons.iter_mut().find(|r| r.reason == reason) {
                            Some(existing) => existing.count += 1,
                            None => current.reasons.push(ReasonCount { reason, count: 1 }),
                        }
                    }
                }
            }
        }

        for current in &mut stats {
            let total = current.total();
            if total > 0 {
                current.helpful_percentage =
                    (current.total_likes as f64 / total as f64 * 100.0).round() as u32;
            }
            current.reasons.sort_by(|a, b| b.count.cmp(&a.count));
        }
        stats.sort_by(|a, b| b.total().cmp(&a.total()));
        Ok(stats)
    }

    // Onboarding preferences

    pub fn preferences(&self) -> Result<Option<UserPreferences>> {
        load_json(self.store.as_ref(), keys::PREFERENCES)
    }

    pub fn save_preferences(&self, preferences: &UserPreferences) -> Result<()> {
        save_json(self.store.as_ref(), keys::PREFERENCES, preferences)
    }

    /// Drop bookmarks, notifications, history, and settings.
    pub fn clear_data(&self) -> Result<()> {
        for key in CLEARABLE_KEYS {
            self.store.remove(key)?;
        }
        Ok(())
    }
}

/// Clock-based id that stays above every existing id, leaving room for a
/// second notification raised in the same call. Stored ids too close to
/// `i64::MAX` to be topped are skipped.
fn next_notification_id(existing: &[Notification]) -> i64 {
    let now = Utc::now().timestamp_millis();
    let above = existing
        .iter()
        .filter_map(|n| n.id.checked_add(2))
        .filter(|&id| id < i64::MAX)
        .max()
        .unwrap_or(0);
    now.max(above)
}

fn preview(text: &str) -> String {
    text.graphemes(true).take(PREVIEW_GRAPHEMES).collect()
}
