//! Demo-mode answers: a fixed keyword table mapped to long overview answers

use crate::advisor::catalog::Category;
use std::time::Duration;

static TECH_KEYWORDS: &[&str] = &[
    "software", "developer", "programming", "code", "web", "app", "data", "analytics", "science",
    "cybersecurity", "security", "cloud", "ai", "artificial intelligence", "machine learning", "ml",
    "devops", "network", "database", "frontend", "backend", "fullstack", "mobile", "ios",
    "android", "blockchain", "game",
];
static BUSINESS_KEYWORDS: &[&str] = &[
    "marketing", "business", "sales", "finance", "accounting", "hr", "human resources",
    "management", "consulting", "entrepreneur", "startup", "mba", "project manager",
    "product manager", "analyst", "strategy", "operations", "supply chain", "real estate",
    "investment", "banking",
];
static HEALTH_KEYWORDS: &[&str] = &[
    "health", "medical", "nurse", "nursing", "doctor", "physician", "therapy", "therapist",
    "pharmacy", "pharmacist", "dental", "dentist", "mental health", "psychology", "counseling",
    "social work", "public health", "epidemiology", "medical assistant", "emt", "paramedic",
    "radiology", "surgery",
];
static ARTS_KEYWORDS: &[&str] = &[
    "design", "designer", "ux", "ui", "graphic", "art", "artist", "creative", "animation", "video",
    "film", "photography", "illustration", "fashion", "interior", "architecture", "music",
    "writing", "content", "copywriting", "media",
];
static EDUCATION_KEYWORDS: &[&str] = &[
    "teacher", "teaching", "education", "professor", "tutor", "instructor", "academic", "school",
    "university", "college", "degree", "bachelor", "master", "phd", "certification", "training",
    "learning",
];
static TRADE_KEYWORDS: &[&str] = &[
    "electrician", "plumber", "hvac", "mechanic", "carpenter", "welder", "construction", "trade",
    "technician", "repair", "maintenance", "contractor",
];
static LEGAL_KEYWORDS: &[&str] = &[
    "law", "lawyer", "attorney", "legal", "paralegal", "court", "judge", "compliance", "policy",
    "regulation",
];
static SCIENCE_KEYWORDS: &[&str] = &[
    "science", "research", "scientist", "biology", "chemistry", "physics", "laboratory", "lab",
    "biotech", "pharmaceutical", "environmental", "engineering", "engineer",
];

static KEYWORD_LISTS: [&[&str]; 8] = [
    TECH_KEYWORDS,
    BUSINESS_KEYWORDS,
    HEALTH_KEYWORDS,
    ARTS_KEYWORDS,
    EDUCATION_KEYWORDS,
    TRADE_KEYWORDS,
    LEGAL_KEYWORDS,
    SCIENCE_KEYWORDS,
];

/// Every table keyword contained in the lower-cased question, in table
/// order. A keyword listed twice is reported twice.
pub fn extract_keywords(lower_question: &str) -> Vec<&'static str> {
    KEYWORD_LISTS
        .iter()
        .flat_map(|list| list.iter())
        .filter(|keyword| lower_question.contains(*keyword))
        .copied()
        .collect()
}

/// Overview answer chosen by [`generate_comprehensive_answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoTopic {
    Software,
    Data,
    Cybersecurity,
    CloudDevops,
    Marketing,
    Finance,
    Management,
    Nursing,
    Physician,
    Design,
    Teaching,
    Trades,
    General,
}

impl DemoTopic {
    pub fn answer(&self) -> &'static str {
        match self {
            DemoTopic::Software => include_str!("answers/software.md"),
            DemoTopic::Data => include_str!("answers/data.md"),
            DemoTopic::Cybersecurity => include_str!("answers/cybersecurity.md"),
            DemoTopic::CloudDevops => include_str!("answers/cloud_devops.md"),
            DemoTopic::Marketing => include_str!("answers/marketing.md"),
            DemoTopic::Finance => include_str!("answers/finance.md"),
            DemoTopic::Management => include_str!("answers/management.md"),
            DemoTopic::Nursing => include_str!("answers/nursing.md"),
            DemoTopic::Physician => include_str!("answers/physician.md"),
            DemoTopic::Design => include_str!("answers/design.md"),
            DemoTopic::Teaching => include_str!("answers/teaching.md"),
            DemoTopic::Trades => include_str!("answers/trades.md"),
            DemoTopic::General => include_str!("answers/general.md"),
        }
    }
}

// Some trigger words ("seo", "rn", "aws") are not in the keyword table and
// therefore never fire; only extracted keywords are compared.
static TOPIC_TRIGGERS: &[(DemoTopic, &[&str])] = &[
    (
        DemoTopic::Software,
        &["software", "developer", "programming", "code", "web", "app", "frontend", "backend", "fullstack"],
    ),
    (DemoTopic::Data, &["data", "analytics", "science", "machine learning", "ml", "ai"]),
    (DemoTopic::Cybersecurity, &["cybersecurity", "security", "network"]),
    (DemoTopic::CloudDevops, &["cloud", "devops", "aws", "azure"]),
    (DemoTopic::Marketing, &["marketing", "social media", "content", "seo"]),
    (DemoTopic::Finance, &["finance", "accounting", "investment", "banking"]),
    (DemoTopic::Management, &["project manager", "product manager", "management"]),
    (DemoTopic::Nursing, &["nurse", "nursing", "rn"]),
    (DemoTopic::Physician, &["doctor", "physician", "medical", "medicine"]),
    (DemoTopic::Design, &["ux", "ui", "designer", "design", "user experience"]),
    (DemoTopic::Teaching, &["teacher", "teaching", "education"]),
    (
        DemoTopic::Trades,
        &["electrician", "plumber", "hvac", "trade", "mechanic", "welder"],
    ),
];

/// First topic with a trigger among the extracted keywords.
pub fn select_topic(keywords: &[&str]) -> DemoTopic {
    TOPIC_TRIGGERS
        .iter()
        .find(|(_, triggers)| keywords.iter().any(|k| triggers.contains(k)))
        .map(|(topic, _)| *topic)
        .unwrap_or(DemoTopic::General)
}

/// Overview answer for a question, picked through the keyword table.
pub fn generate_comprehensive_answer(question: &str) -> &'static str {
    let keywords = extract_keywords(&question.to_lowercase());
    select_topic(&keywords).answer()
}

static DEMO_CATEGORY_KEYWORDS: &[(Category, &[&str])] = &[
    (
        Category::Tech,
        &[
            "software", "developer", "programming", "code", "tech", "data science", "cybersecurity",
            "cloud", "ai", "machine learning",
        ],
    ),
    (
        Category::Business,
        &["marketing", "business", "sales", "finance", "accounting", "management", "hr", "consulting"],
    ),
    (
        Category::Healthcare,
        &["health", "medical", "nurse", "doctor", "physician", "pharmacy", "therapy", "patient"],
    ),
    (
        Category::Arts,
        &["design", "art", "creative", "ux", "ui", "graphic", "video", "animation"],
    ),
];

/// Category detection used by demo mode. It has its own, shorter keyword
/// lists and can disagree with [`crate::advisor::category::detect_category`].
pub fn detect_category(question: &str) -> Category {
    let lower = question.to_lowercase();
    DEMO_CATEGORY_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower.contains(k)))
        .map(|(category, _)| *category)
        .unwrap_or(Category::Business)
}

/// Answer produced by the demo path or the live chat-completion client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdviceResponse {
    pub answer: String,
    pub category: Category,
    pub is_ai_generated: bool,
}

/// Demo answer after an optional artificial delay.
pub async fn generate_demo_response(question: &str, delay: Duration) -> AdviceResponse {
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    AdviceResponse {
        answer: generate_comprehensive_answer(question).to_string(),
        category: detect_category(question),
        is_ai_generated: true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_keywords_in_table_order() {
        let keywords = extract_keywords("data science careers");
        assert_eq!(keywords, vec!["data", "science", "science"]);
    }

    #[test]
    fn test_topic_priority() {
        assert_eq!(select_topic(&extract_keywords("web developer or data analyst")), DemoTopic::Software);
        assert_eq!(select_topic(&extract_keywords("nursing school")), DemoTopic::Nursing);
        assert_eq!(select_topic(&extract_keywords("plumber")), DemoTopic::Trades);
        assert_eq!(select_topic(&[]), DemoTopic::General);
    }

    #[test]
    fn test_unlisted_triggers_never_fire() {
        // "seo" is a marketing trigger but not an extracted keyword
        assert_eq!(extract_keywords("seo"), Vec::<&str>::new());
        assert_eq!(select_topic(&extract_keywords("seo")), DemoTopic::General);
    }

    #[test]
    fn test_answers_are_distinct_and_tagged() {
        let software = generate_comprehensive_answer("Software jobs");
        assert!(software.starts_with("Excellent question about software development!"));
        assert!(software.ends_with("*Demo Mode Active. Enable OpenAI for personalized guidance.*"));
        assert_ne!(software, DemoTopic::General.answer());
    }

    #[test]
    fn test_demo_category() {
        assert_eq!(detect_category("cloud jobs"), Category::Tech);
        assert_eq!(detect_category("nurse jobs"), Category::Healthcare);
        assert_eq!(detect_category("graphic novels"), Category::Arts);
        assert_eq!(detect_category("zzz"), Category::Business);
    }

    #[tokio::test]
    async fn test_demo_response_without_delay() {
        let response = generate_demo_response("nurse jobs", Duration::ZERO).await;
        assert!(response.is_ai_generated);
        assert_eq!(response.category, Category::Healthcare);
        assert!(response.answer.starts_with("Nursing is one of the most rewarding"));
    }
}
