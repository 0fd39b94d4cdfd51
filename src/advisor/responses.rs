//! Templated long-form answers for career questions

use crate::advisor::catalog::Category;
use crate::advisor::classifier::{
    advanced_tips, analyze_question, detect_question_type, extract_field_from_query,
    response_template, Intent, QuestionAnalysis, UNKNOWN_FIELD,
};
use crate::advisor::knowledge::{field_profile, FieldProfile};
use regex::Regex;
use std::sync::OnceLock;

const HOW_TO_GUIDE: &str = include_str!("guides/how_to.md");
const SKILLS_GUIDE: &str = include_str!("guides/skills.md");
const COMPARISON_GUIDE: &str = include_str!("guides/comparison.md");
const WHY_GUIDE: &str = include_str!("guides/why.md");
const TIMELINE_GUIDE: &str = include_str!("guides/timeline.md");
const BEST_PRACTICES_GUIDE: &str = include_str!("guides/best_practices.md");
const FALLBACK_GUIDE: &str = include_str!("guides/fallback.md");

const GENERAL_GETTING_STARTED: &str = include_str!("guides/general_getting_started.md");
const GENERAL_SALARY_NEGOTIATION: &str = include_str!("guides/general_salary_negotiation.md");
const GENERAL_WORK_LIFE: &str = include_str!("guides/general_work_life.md");
const GENERAL_DEFAULT: &str = include_str!("guides/general_general.md");

/// Syntactic shape of a question that has no recognizable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionPattern {
    HowTo,
    Skills,
    Comparison,
    Why,
    Timeline,
    BestPractices,
    Other,
}

/// Classify the lower-cased query. Checks run in a fixed order and the
/// first hit wins.
pub fn detect_pattern(lower_query: &str) -> QuestionPattern {
    let has = |needle: &str| lower_query.contains(needle);

    if has("how to") || has("how do i") || has("how can i") {
        QuestionPattern::HowTo
    } else if has("what") && (has("skills") || has("requirements")) {
        QuestionPattern::Skills
    } else if has("vs") || has("versus") || has("compared to") {
        QuestionPattern::Comparison
    } else if has("why") {
        QuestionPattern::Why
    } else if has("how long") || has("time") || has("duration") {
        QuestionPattern::Timeline
    } else if has("best") || has("tips") || has("advice") {
        QuestionPattern::BestPractices
    } else {
        QuestionPattern::Other
    }
}

/// Full answer text for a question, before trimming.
pub fn generate_intelligent_response(query: &str) -> String {
    let analysis = analyze_question(query);

    if analysis.field.is_some() {
        return contextual_response(&analysis);
    }

    let response = match detect_pattern(&analysis.query) {
        QuestionPattern::HowTo => how_to_response(query),
        QuestionPattern::Skills => SKILLS_GUIDE.to_string(),
        QuestionPattern::Comparison => COMPARISON_GUIDE.to_string(),
        QuestionPattern::Why => WHY_GUIDE.to_string(),
        QuestionPattern::Timeline => TIMELINE_GUIDE.to_string(),
        QuestionPattern::BestPractices => BEST_PRACTICES_GUIDE.to_string(),
        QuestionPattern::Other => contextual_response(&analysis),
    };

    if response.is_empty() {
        fallback_response(query)
    } else {
        response
    }
}

fn contextual_response(analysis: &QuestionAnalysis) -> String {
    match analysis.field {
        Some(field) => field_specific_response(field, analysis.intent),
        None => general_response(analysis.intent).to_string(),
    }
}

/// Intent-specific guidance for a known field, followed by resources for
/// the field's category.
pub fn field_specific_response(field: &FieldProfile, intent: Intent) -> String {
    let name = field.name;
    let mut response = String::new();

    match intent {
        Intent::GettingStarted => {
            response.push_str(&format!(
                "Starting a career in {} is an exciting journey! Here's your roadmap:\n\n",
                name
            ));
            response.push_str("**Essential Skills to Develop:**\n");
            for (i, skill) in field.skills.iter().enumerate() {
                response.push_str(&format!("{}. {}\n", i + 1, skill));
            }

            response.push_str("\n**Entry-Level Positions to Target:**\n");
            for role in field.entry_roles {
                response.push_str(&format!("• {}\n", role));
            }

            response.push_str(&format!("\n**Salary Expectations:** {}\n", field.salary_range));
            response.push_str(&format!("**Career Progression:** {}\n\n", field.growth_path));

            response.push_str("**Recommended Certifications:**\n");
            for cert in field.certifications {
                response.push_str(&format!("• {}\n", cert));
            }
        }
        Intent::SkillBuilding => {
            response.push_str(&format!(
                "To build expertise in {}, focus on these key areas:\n\n",
                name
            ));
            response.push_str("**Core Skills Priority:**\n");
            for (i, skill) in field.skills.iter().take(4).enumerate() {
                response.push_str(&format!(
                    "{}. {} - Start with fundamentals and build practical projects\n",
                    i + 1,
                    skill
                ));
            }

            response.push_str("\n**Certification Path:**\n");
            for (i, cert) in field.certifications.iter().take(2).enumerate() {
                response.push_str(&format!("{}. {} - Industry-recognized credential\n", i + 1, cert));
            }

            response.push_str("\n**Practical Learning Approach:**\n");
            response.push_str("• Build a portfolio with real-world projects\n");
            response.push_str(&format!("• Join {} communities and forums\n", name));
            response.push_str("• Find a mentor in the field\n");
            response.push_str("• Practice consistently (aim for 1-2 hours daily)\n");
        }
        Intent::CareerChange => {
            response.push_str(&format!("Transitioning to {} requires strategic planning:\n\n", name));
            response.push_str("**Step-by-Step Transition Plan:**\n");
            response.push_str("1. **Assess Transferable Skills** - Identify how your current experience applies\n");
            response.push_str(&format!(
                "2. **Skill Gap Analysis** - Focus on: {}\n",
                join_first(field.skills, 3)
            ));
            response.push_str(&format!(
                "3. **Build Portfolio** - Create projects showcasing {} capabilities\n",
                name
            ));
            response.push_str(&format!(
                "4. **Network Strategically** - Connect with {} professionals\n",
                name
            ));
            response.push_str(&format!(
                "5. **Consider Bridge Roles** - Look for positions that combine your background with {}\n\n",
                name
            ));

            response.push_str("**Timeline Expectations:**\n");
            response.push_str("• 3-6 months: Skill building and portfolio development\n");
            response.push_str("• 6-12 months: Networking and applying for roles\n");
            response.push_str(&format!("• Entry-level salary range: {}\n", field.salary_range));
        }
        Intent::SalaryNegotiation => {
            response.push_str(&format!("Salary negotiation in {}:\n\n", name));
            response.push_str(&format!("**Market Rate:** {}\n\n", field.salary_range));
            response.push_str("**Negotiation Strategy:**\n");
            response.push_str("1. **Research Thoroughly** - Use Glassdoor, PayScale, and industry reports\n");
            response.push_str(&format!(
                "2. **Highlight Value** - Emphasize skills in: {}\n",
                join_first(field.skills, 3)
            ));
            response.push_str("3. **Consider Total Package** - Benefits, equity, remote work options\n");
            response.push_str("4. **Timing Matters** - Best negotiated at offer stage, not during interviews\n");
            response.push_str("5. **Professional Approach** - Be confident but collaborative\n\n");

            response.push_str("**Leverage Points:**\n");
            for cert in field.certifications.iter().take(2) {
                response.push_str(&format!("• {} certification\n", cert));
            }
            response.push_str("• Portfolio demonstrating practical skills\n");
            response.push_str("• Industry connections and recommendations\n");
        }
        _ => {
            response.push_str(&format!("Here's comprehensive guidance for {}:\n\n", name));
            response.push_str("**Key Information:**\n");
            response.push_str(&format!("• **Salary Range:** {}\n", field.salary_range));
            response.push_str(&format!("• **Career Path:** {}\n", field.growth_path));
            response.push_str(&format!("• **Top Skills:** {}\n", join_first(field.skills, 4)));
            response.push_str(&format!("• **Entry Roles:** {}\n\n", field.entry_roles.join(", ")));

            response.push_str("**Success Factors:**\n");
            response.push_str("1. Continuous learning and skill development\n");
            response.push_str("2. Building a strong professional network\n");
            response.push_str("3. Staying current with industry trends\n");
            response.push_str("4. Developing both technical and soft skills\n");
        }
    }

    response.push_str("\n**Recommended Resources:**\n");
    for resource in category_resources(field.category) {
        response.push_str(&format!("• {}\n", resource));
    }

    response
}

fn join_first(items: &[&str], n: usize) -> String {
    items.iter().take(n).copied().collect::<Vec<_>>().join(", ")
}

fn category_resources(category: Category) -> &'static [&'static str] {
    match category {
        Category::Tech => &[
            "GitHub for code portfolio and collaboration",
            "Stack Overflow for technical problem-solving",
            "freeCodeCamp, Coursera, or Udemy for skill development",
            "Tech meetups and conferences in your area",
        ],
        Category::Business => &[
            "LinkedIn Learning for professional development",
            "Harvard Business Review for industry insights",
            "Industry-specific conferences and networking events",
            "Professional associations in your field",
        ],
        Category::Healthcare => &[
            "Professional medical associations",
            "Continuing education programs",
            "Healthcare-specific job boards",
            "Medical journals and publications",
        ],
        Category::Arts => &[
            "Behance or Dribbble for portfolio showcase",
            "Adobe Creative Suite or Figma training",
            "Design communities and workshops",
            "Freelance platforms for building experience",
        ],
    }
}

/// Field-independent guidance. Intents without a dedicated text get the
/// general one.
pub fn general_response(intent: Intent) -> &'static str {
    match intent {
        Intent::GettingStarted => GENERAL_GETTING_STARTED,
        Intent::SalaryNegotiation => GENERAL_SALARY_NEGOTIATION,
        Intent::WorkLife => GENERAL_WORK_LIFE,
        _ => GENERAL_DEFAULT,
    }
}

fn how_to_prefix() -> &'static Regex {
    static PREFIX: OnceLock<Regex> = OnceLock::new();
    PREFIX.get_or_init(|| Regex::new(r"(?i)how (to|do i|can i)").expect("valid how-to pattern"))
}

/// Topic of a how-to question: the question with every "how to/do i/can i"
/// removed, trimmed, and stripped of question marks.
pub fn how_to_topic(query: &str) -> String {
    how_to_prefix()
        .replace_all(query, "")
        .trim()
        .replace('?', "")
}

fn how_to_response(query: &str) -> String {
    HOW_TO_GUIDE.replace("{topic}", &how_to_topic(query))
}

/// Generic essay quoting the original question.
pub fn fallback_response(query: &str) -> String {
    FALLBACK_GUIDE.replace("{query}", query)
}

/// Short step list for the question type, with extra tips when the type has
/// any.
pub fn quick_guide(query: &str) -> String {
    let question_type = detect_question_type(query);
    let field = extract_field_from_query(query);
    let skills = field_profile(field)
        .map(|profile| join_first(profile.skills, 3))
        .unwrap_or_else(|| {
            if field == UNKNOWN_FIELD {
                "your skills".to_string()
            } else {
                format!("{} skills", field)
            }
        });

    let mut guide = response_template(question_type).render(field, &skills);
    let tips = advanced_tips(field, question_type);
    if !tips.is_empty() {
        guide.push_str("\n\n**Pro Tips:**");
        for tip in tips {
            guide.push_str(&format!("\n• {}", tip));
        }
    }
    guide
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_question_gets_field_template() {
        let answer = generate_intelligent_response("How do I start a career in cybersecurity?");
        assert!(answer.starts_with("Starting a career in cybersecurity is an exciting journey!"));
        assert!(answer.contains("**Essential Skills to Develop:**\n1. network security\n"));
        assert!(answer.contains("• SOC Analyst\n"));
        assert!(answer.contains("**Recommended Resources:**\n• GitHub"));
    }

    #[test]
    fn test_skill_question_resolves_field_by_skill() {
        let answer = generate_intelligent_response("learn python");
        assert!(answer.starts_with("To build expertise in software development"));
        assert!(answer.contains("1. JavaScript - Start with fundamentals"));
    }

    #[test]
    fn test_pattern_order() {
        assert_eq!(detect_pattern("how to begin"), QuestionPattern::HowTo);
        assert_eq!(detect_pattern("what skills matter"), QuestionPattern::Skills);
        assert_eq!(detect_pattern("what is new"), QuestionPattern::Other);
        assert_eq!(detect_pattern("law versus medicine"), QuestionPattern::Comparison);
        assert_eq!(detect_pattern("why bother"), QuestionPattern::Why);
        assert_eq!(detect_pattern("how long does it take"), QuestionPattern::Timeline);
        assert_eq!(detect_pattern("any tips"), QuestionPattern::BestPractices);
    }

    #[test]
    fn test_how_to_topic() {
        assert_eq!(how_to_topic("How do I get hired?"), "get hired");
        assert_eq!(how_to_topic("HOW CAN I  win "), "win");
    }

    #[test]
    fn test_fieldless_how_to_uses_topic() {
        let answer = generate_intelligent_response("how to get a job?");
        assert!(answer.starts_with("Here's a comprehensive guide to get a job:"));
    }

    #[test]
    fn test_fieldless_general_response() {
        let answer = generate_intelligent_response("zzz");
        assert_eq!(answer, GENERAL_DEFAULT);
        assert_eq!(general_response(Intent::WorkLife), GENERAL_WORK_LIFE);
        assert_eq!(general_response(Intent::JobSearch), GENERAL_DEFAULT);
    }

    #[test]
    fn test_fallback_quotes_query() {
        let text = fallback_response("odd question");
        assert!(text.starts_with("Thank you for your question about \"odd question\"."));
    }

    #[test]
    fn test_field_specific_sections_by_intent() {
        let nursing = field_profile("nursing").unwrap();
        let salary = field_specific_response(nursing, Intent::SalaryNegotiation);
        assert!(salary.starts_with("Salary negotiation in nursing:"));
        assert!(salary.contains("**Leverage Points:**"));
        assert!(salary.contains("• Professional medical associations"));

        let general = field_specific_response(nursing, Intent::Advancement);
        assert!(general.starts_with("Here's comprehensive guidance for nursing:"));
    }

    #[test]
    fn test_quick_guide() {
        let guide = quick_guide("How do I start in nursing?");
        assert!(guide.starts_with("Starting a career in nursing requires a strategic approach."));
        assert!(guide.contains("\n1. Build foundational skills"));
        assert!(guide.contains("Consider joining nursing communities"));

        let salary = quick_guide("salary negotiation");
        assert!(!salary.contains("**Pro Tips:**"));
    }
}
