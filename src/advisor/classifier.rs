//! Field and intent classification for free-text career questions

use crate::advisor::knowledge::{FieldProfile, FIELD_PROFILES};
use serde::Serialize;
use std::fmt;

/// Returned by [`extract_field_from_query`] when no trigger phrase matches.
pub const UNKNOWN_FIELD: &str = "your chosen field";

/// Field trigger cascade. Longer, more specific phrases come before the
/// short keywords that would otherwise shadow them.
static FIELD_TRIGGERS: &[(&str, &[&str])] = &[
    // Technology
    ("data science", &["data science", "data scientist"]),
    ("artificial intelligence", &["artificial intelligence", "ai engineer"]),
    ("artificial intelligence", &["machine learning", "ml engineer"]),
    ("web development", &["web development", "web developer"]),
    ("cloud computing", &["cloud computing", "cloud engineer", "aws", "azure"]),
    ("mobile development", &["mobile dev", "ios", "android", "react native", "flutter"]),
    ("game development", &["game dev", "unity", "unreal"]),
    ("database administration", &["database", "dba", "sql"]),
    ("quality assurance", &["qa", "quality assurance", "testing", "tester"]),
    ("network engineering", &["network engineer", "ccna", "networking"]),
    ("systems administration", &["sysadmin", "system admin", "linux admin"]),
    ("software development", &["software", "programming", "developer"]),
    ("cybersecurity", &["cybersecurity", "security analyst", "infosec"]),
    // Engineering
    ("mechanical engineering", &["mechanical engineer"]),
    ("electrical engineering", &["electrical engineer"]),
    ("civil engineering", &["civil engineer"]),
    ("chemical engineering", &["chemical engineer"]),
    ("biomedical engineering", &["biomedical engineer"]),
    ("industrial engineering", &["industrial engineer"]),
    ("aerospace engineering", &["aerospace engineer"]),
    // Trades
    ("electrician", &["electrician"]),
    ("plumbing", &["plumber", "plumbing"]),
    ("hvac", &["hvac"]),
    ("welding", &["welder", "welding"]),
    ("carpentry", &["carpenter", "carpentry"]),
    ("construction management", &["construction manag", "general contractor"]),
    ("automotive technician", &["mechanic", "automotive tech"]),
    // Business
    ("accounting", &["accounting", "accountant", "cpa", "bookkeep"]),
    ("finance", &["finance", "financial analyst", "cfa"]),
    ("product management", &["product manag", "product owner"]),
    ("supply chain management", &["supply chain", "logistics", "procurement"]),
    ("operations management", &["operations manag"]),
    ("digital marketing", &["digital marketing", "seo", "social media marketing"]),
    ("digital marketing", &["marketing"]),
    ("sales", &["sales", "account executive", "business development"]),
    ("human resources", &["human resources", "hr", "recruiter"]),
    ("management consulting", &["consulting", "management consultant"]),
    ("business analyst", &["business analyst"]),
    ("project management", &["project manag"]),
    ("real estate", &["real estate", "realtor", "broker"]),
    ("insurance", &["insurance", "underwriter"]),
    ("public relations", &["public relations", "pr", "communications"]),
    ("event planning", &["event plan", "event coordinat"]),
    ("corporate training", &["corporate train", "instructional design"]),
    ("teaching", &["teaching", "teacher", "classroom"]),
    ("higher education", &["higher education", "professor", "lecturer"]),
    // Legal
    ("attorney", &["attorney", "lawyer"]),
    ("paralegal", &["paralegal"]),
    ("compliance officer", &["compliance officer", "compliance analyst"]),
    // Hospitality
    ("culinary arts", &["chef", "cook", "culinary"]),
    ("hotel management", &["hotel", "hospitality manag"]),
    ("nonprofit management", &["nonprofit", "fundraising", "grant writing"]),
    ("agriculture", &["agriculture", "farming", "farm"]),
    ("forestry", &["forestry", "forester"]),
    ("personal training", &["personal train", "fitness coach"]),
    ("sports management", &["sports manag"]),
    // Healthcare
    ("physician", &["physician", "doctor", "md"]),
    ("nursing", &["nursing", "nurse", "rn"]),
    ("physical therapy", &["physical therap", "pt ", " pt"]),
    ("occupational therapy", &["occupational therap", "ot ", " ot"]),
    ("dental hygiene", &["dental hygien"]),
    ("radiologic technologist", &["radiologic", "radiology", "x-ray tech"]),
    ("respiratory therapist", &["respiratory therap"]),
    ("veterinary medicine", &["veterinar", "vet ", " vet"]),
    (
        "mental health counseling",
        &["mental health", "counselor", "therapist", "lpc", "lmhc"],
    ),
    ("social work", &["social work", "lcsw", "msw"]),
    ("public health", &["public health", "epidemiolog"]),
    ("healthcare administration", &["healthcare admin", "hospital admin"]),
    ("medical assistant", &["medical assistant"]),
    ("pharmacy", &["pharmacy", "pharmacist"]),
    // Science
    ("biology research", &["biology", "biologist", "research scientist"]),
    ("environmental science", &["environmental science", "environmental scientist"]),
    ("chemistry", &["chemistry", "chemist"]),
    // Arts and design
    ("ux design", &["ux", "ui", "user experience"]),
    ("graphic design", &["graphic design"]),
    ("content writing", &["content writ", "copywriter"]),
    ("video production", &["video product", "videographer"]),
    ("animation", &["animation", "animator"]),
    ("interior design", &["interior design"]),
    ("photography", &["photograph"]),
    ("fashion design", &["fashion design"]),
    ("music production", &["music product", "audio engineer"]),
];

/// Map a question to the field key of its first matching trigger group.
pub fn extract_field_from_query(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    FIELD_TRIGGERS
        .iter()
        .find(|(_, triggers)| triggers.iter().any(|t| lower.contains(t)))
        .map(|(field, _)| *field)
        .unwrap_or(UNKNOWN_FIELD)
}

/// Purpose behind a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Intent {
    GettingStarted,
    SkillBuilding,
    CareerChange,
    SalaryNegotiation,
    JobSearch,
    Advancement,
    WorkLife,
    Education,
    General,
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Intent::GettingStarted => "getting started",
            Intent::SkillBuilding => "skill building",
            Intent::CareerChange => "career change",
            Intent::SalaryNegotiation => "salary negotiation",
            Intent::JobSearch => "job search",
            Intent::Advancement => "advancement",
            Intent::WorkLife => "work-life balance",
            Intent::Education => "education",
            Intent::General => "general",
        };
        f.write_str(name)
    }
}

static INTENT_KEYWORDS: &[(Intent, &[&str])] = &[
    (Intent::GettingStarted, &["start", "begin", "get into", "break into", "enter"]),
    (Intent::SkillBuilding, &["skills", "learn", "improve", "develop", "master"]),
    (Intent::CareerChange, &["change", "transition", "switch", "pivot", "move to"]),
    (
        Intent::SalaryNegotiation,
        &["salary", "negotiate", "pay", "compensation", "money"],
    ),
    (Intent::JobSearch, &["find job", "apply", "job search", "hiring", "interview"]),
    (Intent::Advancement, &["promote", "advance", "grow", "next level", "senior"]),
    (Intent::WorkLife, &["remote", "work life", "balance", "flexible", "culture"]),
    (Intent::Education, &["degree", "certification", "bootcamp", "course", "study"]),
];

/// First intent whose keyword group appears in the lower-cased text.
/// Defaults to [`Intent::General`].
pub fn detect_intent(lower_text: &str) -> Intent {
    INTENT_KEYWORDS
        .iter()
        .find(|(_, keywords)| keywords.iter().any(|k| lower_text.contains(k)))
        .map(|(intent, _)| *intent)
        .unwrap_or(Intent::General)
}

/// Result of [`analyze_question`].
#[derive(Debug, Clone, Serialize)]
pub struct QuestionAnalysis {
    #[serde(serialize_with = "serialize_field")]
    pub field: Option<&'static FieldProfile>,
    pub intent: Intent,
    pub query: String,
}

fn serialize_field<S>(
    field: &Option<&'static FieldProfile>,
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    match field {
        Some(profile) => serializer.serialize_some(profile.name),
        None => serializer.serialize_none(),
    }
}

/// Resolve the field profile and intent of a question.
///
/// Profiles are scanned in declaration order and the first one mentioned
/// by name, skill, or entry role wins. Short skills such as "R" or "Git"
/// make this match loosely; that is the documented behavior.
pub fn analyze_question(text: &str) -> QuestionAnalysis {
    let query = text.to_lowercase();
    let field = FIELD_PROFILES
        .iter()
        .find(|profile| profile.is_mentioned_in(&query));
    let intent = detect_intent(&query);

    QuestionAnalysis {
        field,
        intent,
        query,
    }
}

/// Coarse question type used by the quick guide templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionType {
    CareerStart,
    SkillDevelopment,
    CareerChange,
    Interview,
    Salary,
}

/// Classify a question into a [`QuestionType`]. Unlike [`detect_intent`],
/// the fallback here is [`QuestionType::SkillDevelopment`].
pub fn detect_question_type(text: &str) -> QuestionType {
    let lower = text.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["start", "begin", "get into"]) {
        QuestionType::CareerStart
    } else if has(&["skill", "learn", "improve"]) {
        QuestionType::SkillDevelopment
    } else if has(&["change", "transition", "switch"]) {
        QuestionType::CareerChange
    } else if has(&["interview", "job interview"]) {
        QuestionType::Interview
    } else if has(&["salary", "negotiate", "pay"]) {
        QuestionType::Salary
    } else {
        QuestionType::SkillDevelopment
    }
}

/// Intro line plus ordered steps for one question type.
#[derive(Debug, Clone, Copy)]
pub struct ResponseTemplate {
    pub intro: &'static str,
    pub steps: &'static [&'static str],
}

impl ResponseTemplate {
    /// Fill the `{field}` and `{skills}` placeholders of the intro.
    pub fn render_intro(&self, field: &str, skills: &str) -> String {
        self.intro
            .replace("{field}", field)
            .replace("{skills}", skills)
    }

    /// Intro followed by the numbered steps.
    pub fn render(&self, field: &str, skills: &str) -> String {
        let mut out = self.render_intro(field, skills);
        out.push('\n');
        for (i, step) in self.steps.iter().enumerate() {
            out.push_str(&format!("\n{}. {}", i + 1, step));
        }
        out
    }
}

pub fn response_template(question_type: QuestionType) -> ResponseTemplate {
    match question_type {
        QuestionType::CareerStart => ResponseTemplate {
            intro: "Starting a career in {field} requires a strategic approach. Here's how to get started:",
            steps: &[
                "Build foundational skills through online courses, bootcamps, or formal education",
                "Create a portfolio showcasing relevant projects and accomplishments",
                "Network with professionals in the field through LinkedIn and industry events",
                "Apply for entry-level positions, internships, or apprenticeships",
                "Stay current with industry trends and continuously develop your skills",
            ],
        },
        QuestionType::SkillDevelopment => ResponseTemplate {
            intro: "To develop {skills} effectively, focus on these key areas:",
            steps: &[
                "Identify the specific skills most valued in your target role",
                "Practice regularly through real-world projects and challenges",
                "Seek feedback from mentors or experienced professionals",
                "Consider formal training or certification programs",
                "Join professional communities to learn from others",
            ],
        },
        QuestionType::CareerChange => ResponseTemplate {
            intro: "Transitioning to {field} from your current career requires careful planning:",
            steps: &[
                "Identify transferable skills from your current experience",
                "Research the requirements and expectations in your target field",
                "Network with professionals who've made similar transitions",
                "Consider taking on freelance projects to build relevant experience",
                "Prepare for potential salary adjustments during the transition period",
            ],
        },
        QuestionType::Interview => ResponseTemplate {
            intro: "Succeeding in {field} interviews requires thorough preparation:",
            steps: &[
                "Research the company culture, values, and recent developments",
                "Prepare specific examples that demonstrate your relevant skills",
                "Practice answering common interview questions for your field",
                "Prepare thoughtful questions about the role and company",
                "Follow up professionally after the interview",
            ],
        },
        QuestionType::Salary => ResponseTemplate {
            intro: "Negotiating salary in {field} requires market knowledge and strategy:",
            steps: &[
                "Research salary ranges for your role and experience level",
                "Document your achievements and value proposition",
                "Practice your negotiation conversation beforehand",
                "Consider the full compensation package, not just base salary",
                "Be prepared to walk away if the offer doesn't meet your needs",
            ],
        },
    }
}

/// Extra tips for the question types that have them.
pub fn advanced_tips(field: &str, question_type: QuestionType) -> Vec<String> {
    match question_type {
        QuestionType::CareerStart => vec![
            format!(
                "Consider joining {} communities on Reddit, Discord, or Slack for peer support",
                field
            ),
            "Look for mentorship opportunities through platforms like ADPList or industry organizations".to_string(),
            "Start building your professional brand on LinkedIn with relevant content and insights".to_string(),
        ],
        QuestionType::SkillDevelopment => vec![
            "Set up a learning schedule with specific, measurable goals".to_string(),
            "Document your learning journey to showcase growth to potential employers".to_string(),
            "Find accountability partners or study groups to maintain motivation".to_string(),
        ],
        QuestionType::CareerChange => vec![
            "Consider informational interviews with professionals in your target field".to_string(),
            "Update your LinkedIn profile gradually to reflect your transition".to_string(),
            "Look for bridge roles that combine your current skills with new field requirements".to_string(),
        ],
        QuestionType::Interview | QuestionType::Salary => Vec::new(),
    }
}
