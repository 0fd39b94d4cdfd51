//! Career recommendations and learning paths scored against the saved
//! onboarding preferences

use crate::storage::preferences::UserPreferences;
use serde::Serialize;

pub const MAX_RECOMMENDATIONS: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CareerRecommendation {
    pub title: &'static str,
    /// Match score in percent.
    #[serde(rename = "match")]
    pub match_score: u8,
    pub salary: &'static str,
    pub growth: &'static str,
    pub description: &'static str,
    pub skills: &'static [&'static str],
    /// Display group; wider than the four catalog categories.
    pub category: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningPath {
    pub title: &'static str,
    pub duration: &'static str,
    pub level: &'static str,
    pub icon: &'static str,
}

const SOFTWARE_ENGINEER: CareerRecommendation = CareerRecommendation {
    title: "Software Engineer",
    match_score: 95,
    salary: "$80k - $150k",
    growth: "High",
    description: "Design and develop software applications",
    skills: &["Programming", "Problem Solving", "Teamwork"],
    category: "Tech",
};

const DATA_SCIENTIST: CareerRecommendation = CareerRecommendation {
    title: "Data Scientist",
    match_score: 92,
    salary: "$90k - $160k",
    growth: "Very High",
    description: "Analyze complex data to drive business decisions",
    skills: &["Data Analysis", "Critical Thinking", "Programming"],
    category: "Tech",
};

const PRODUCT_MANAGER: CareerRecommendation = CareerRecommendation {
    title: "Product Manager",
    match_score: 88,
    salary: "$90k - $140k",
    growth: "High",
    description: "Lead product strategy and development",
    skills: &["Strategic Planning", "Leadership", "Communication"],
    category: "Business",
};

const MARKETING_MANAGER: CareerRecommendation = CareerRecommendation {
    title: "Marketing Manager",
    match_score: 85,
    salary: "$70k - $120k",
    growth: "Medium",
    description: "Develop and execute marketing strategies",
    skills: &["Communication", "Creativity", "Strategic Planning"],
    category: "Business",
};

const UX_DESIGNER: CareerRecommendation = CareerRecommendation {
    title: "UX/UI Designer",
    match_score: 90,
    salary: "$75k - $130k",
    growth: "High",
    description: "Create user-centered digital experiences",
    skills: &["Creativity", "Problem Solving", "Communication"],
    category: "Design",
};

const HEALTHCARE_ADMINISTRATOR: CareerRecommendation = CareerRecommendation {
    title: "Healthcare Administrator",
    match_score: 87,
    salary: "$70k - $110k",
    growth: "Medium",
    description: "Manage healthcare facilities and operations",
    skills: &["Leadership", "Project Management", "Communication"],
    category: "Healthcare",
};

const FINANCIAL_ANALYST: CareerRecommendation = CareerRecommendation {
    title: "Financial Analyst",
    match_score: 86,
    salary: "$65k - $115k",
    growth: "Medium",
    description: "Analyze financial data and market trends",
    skills: &["Data Analysis", "Critical Thinking", "Problem Solving"],
    category: "Finance",
};

const PROJECT_MANAGER: CareerRecommendation = CareerRecommendation {
    title: "Project Manager",
    match_score: 80,
    salary: "$75k - $125k",
    growth: "High",
    description: "Lead and coordinate project teams",
    skills: &["Project Management", "Leadership", "Communication"],
    category: "Business",
};

const BUSINESS_ANALYST: CareerRecommendation = CareerRecommendation {
    title: "Business Analyst",
    match_score: 78,
    salary: "$70k - $110k",
    growth: "Medium",
    description: "Bridge business needs and technical solutions",
    skills: &["Problem Solving", "Communication", "Data Analysis"],
    category: "Business",
};

fn has(values: &[String], wanted: &str) -> bool {
    values.iter().any(|v| v == wanted)
}

/// Up to five careers for the given interests and skills, best match first.
/// Preferences that match nothing get the general management picks.
pub fn recommendations(preferences: &UserPreferences) -> Vec<CareerRecommendation> {
    let interests = &preferences.interests;
    let skills = &preferences.skills;
    let mut picks = Vec::new();

    if has(interests, "Technology") || has(interests, "Data Science") {
        if has(skills, "Programming") {
            picks.push(SOFTWARE_ENGINEER);
        }
        if has(skills, "Data Analysis") {
            picks.push(DATA_SCIENTIST);
        }
    }
    if has(interests, "Business") || has(interests, "Marketing") {
        if has(skills, "Strategic Planning") {
            picks.push(PRODUCT_MANAGER);
        }
        if has(skills, "Communication") {
            picks.push(MARKETING_MANAGER);
        }
    }
    if has(interests, "Design") || has(interests, "Creative Arts") {
        picks.push(UX_DESIGNER);
    }
    if has(interests, "Healthcare") {
        picks.push(HEALTHCARE_ADMINISTRATOR);
    }
    if has(interests, "Finance") {
        picks.push(FINANCIAL_ANALYST);
    }

    if picks.is_empty() {
        picks.extend([PROJECT_MANAGER, BUSINESS_ANALYST]);
    }

    picks.sort_by(|a, b| b.match_score.cmp(&a.match_score));
    picks.truncate(MAX_RECOMMENDATIONS);
    picks
}

pub fn learning_paths(preferences: &UserPreferences) -> Vec<LearningPath> {
    let interests = &preferences.interests;
    let mut paths = Vec::new();

    if has(interests, "Technology") {
        paths.push(LearningPath {
            title: "Full Stack Development",
            duration: "6-9 months",
            level: "Intermediate",
            icon: "💻",
        });
    }
    if has(interests, "Data Science") {
        paths.push(LearningPath {
            title: "Data Science & ML",
            duration: "8-12 months",
            level: "Advanced",
            icon: "📊",
        });
    }
    if has(interests, "Business") {
        paths.push(LearningPath {
            title: "Business Strategy",
            duration: "4-6 months",
            level: "Beginner",
            icon: "📈",
        });
    }

    if paths.is_empty() {
        paths.push(LearningPath {
            title: "Leadership & Management",
            duration: "5-7 months",
            level: "Intermediate",
            icon: "👥",
        });
        paths.push(LearningPath {
            title: "Digital Marketing",
            duration: "3-5 months",
            level: "Beginner",
            icon: "🎯",
        });
    }
    paths
}
