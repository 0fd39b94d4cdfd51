//! Career question records and the bundled question catalog

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Coarse career category attached to every question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Tech,
    Business,
    Healthcare,
    Arts,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Tech,
        Category::Business,
        Category::Healthcare,
        Category::Arts,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Tech => "Tech",
            Category::Business => "Business",
            Category::Healthcare => "Healthcare",
            Category::Arts => "Arts",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "tech" | "technology" => Ok(Category::Tech),
            "business" => Ok(Category::Business),
            "healthcare" | "health" => Ok(Category::Healthcare),
            "arts" | "art" | "design" => Ok(Category::Arts),
            _ => Err(format!(
                "Unknown category: {}. Supported: Tech, Business, Healthcare, Arts",
                s
            )),
        }
    }
}

/// A question/answer record, either bundled or synthesized per query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CareerQuestion {
    pub id: i64,
    pub question: String,
    pub answer: String,
    pub category: Category,
    #[serde(default)]
    pub is_ai_generated: bool,
}

impl CareerQuestion {
    fn bundled(id: i64, question: &str, answer: &str, category: Category) -> Self {
        Self {
            id,
            question: question.to_string(),
            answer: answer.to_string(),
            category,
            is_ai_generated: false,
        }
    }

    /// Builds a synthesized record. Ids come from the wall clock and can
    /// collide; synthesized records never enter the catalog.
    pub fn generated(question: &str, answer: String, category: Category) -> Self {
        Self {
            id: chrono::Utc::now().timestamp_millis(),
            question: question.to_string(),
            answer,
            category,
            is_ai_generated: true,
        }
    }

    /// Case-insensitive substring test over question, answer and category.
    pub fn matches(&self, lower_query: &str) -> bool {
        self.question.to_lowercase().contains(lower_query)
            || self.answer.to_lowercase().contains(lower_query)
            || self.category.as_str().to_lowercase().contains(lower_query)
    }
}

/// Suggested starter questions shown before the first search.
pub const SUGGESTED_QUESTIONS: [&str; 4] = [
    "How do I negotiate salary in tech?",
    "What certifications boost career growth?",
    "How to build a professional network?",
    "Best way to change careers at 30?",
];

/// Look up a record by id.
pub fn find_by_id(catalog: &[CareerQuestion], id: i64) -> Option<&CareerQuestion> {
    catalog.iter().find(|q| q.id == id)
}

/// The bundled catalog: starter questions followed by the extended set.
pub fn sample_catalog() -> Vec<CareerQuestion> {
    let mut catalog = starter_questions();
    catalog.extend(extended_questions());
    catalog
}

fn starter_questions() -> Vec<CareerQuestion> {
    vec![
        CareerQuestion::bundled(
            1,
            "How do I start a career in cybersecurity?",
            "To start a career in cybersecurity, begin with networking fundamentals, practice coding, get certifications, and gain practical experience through internships and projects. Start by learning the basics of computer networks, operating systems, and programming languages like Python or JavaScript. Pursue industry-recognized certifications such as CompTIA Security+, CISSP, or CEH to validate your skills. Build a home lab environment to practice ethical hacking and security analysis. Apply for entry-level positions like SOC analyst, junior security specialist, or cybersecurity intern. Stay current with the latest security threats, attend conferences, and join professional organizations like (ISC)² or ISACA to network with other professionals in the field.",
            Category::Tech,
        ),
        CareerQuestion::bundled(
            2,
            "What skills do I need for digital marketing?",
            "Digital marketing requires a mix of analytical, creative, and technical skills. Key areas include SEO/SEM, social media marketing, content creation, email marketing, data analytics, and marketing automation tools like HubSpot or Marketo. Learn Google Analytics, Google Ads, Facebook Ads Manager, and tools like Canva or Adobe Creative Suite. Develop strong writing skills for content marketing and understand basic HTML/CSS. Stay updated with digital trends and consumer behavior patterns.",
            Category::Business,
        ),
        CareerQuestion::bundled(
            3,
            "How to become a nurse practitioner?",
            "To become a nurse practitioner, you need to first become a registered nurse (RN) with a Bachelor of Science in Nursing (BSN). Gain clinical experience in your desired specialty area, then pursue a Master of Science in Nursing (MSN) or Doctor of Nursing Practice (DNP) degree. Complete clinical hours in your specialty, pass the national certification exam, and obtain state licensure. Popular specialties include family practice, pediatrics, psychiatric/mental health, and acute care.",
            Category::Healthcare,
        ),
        CareerQuestion::bundled(
            4,
            "What does a UX designer do daily?",
            "UX designers research user needs, create wireframes and prototypes, conduct usability testing, and collaborate with developers and stakeholders. Daily tasks include user interviews, sketching ideas, creating user personas, designing user flows, prototyping in tools like Figma or Sketch, analyzing user feedback, and iterating on designs. They also attend meetings with product teams, review analytics data, and ensure designs meet accessibility standards.",
            Category::Arts,
        ),
        CareerQuestion::bundled(
            5,
            "How to transition from teaching to corporate training?",
            "Transitioning from teaching to corporate training leverages your educational background while entering the business world. Start by identifying transferable skills like curriculum development, presentation abilities, and learning assessment. Get familiar with corporate learning management systems (LMS), adult learning principles, and instructional design methodologies like ADDIE. Consider certifications in training and development, build a portfolio of corporate training materials, and network with L&D professionals through LinkedIn and professional associations.",
            Category::Business,
        ),
    ]
}

fn extended_questions() -> Vec<CareerQuestion> {
    vec![
        // Tech
        CareerQuestion::bundled(
            101,
            "How do I become a machine learning engineer?",
            "Becoming a machine learning engineer requires a strong foundation in programming, mathematics, and data science. Start by mastering Python and key libraries like scikit-learn, TensorFlow, and PyTorch. Develop expertise in statistics, linear algebra, and calculus. Build projects showcasing different ML techniques like supervised learning, unsupervised learning, and deep learning. Consider pursuing a degree in computer science, mathematics, or a related field, or complete specialized ML bootcamps. Gain experience with cloud platforms (AWS, GCP, Azure) and MLOps tools. The typical salary range is $120,000-$180,000, with strong growth prospects in AI-driven industries.",
            Category::Tech,
        ),
        CareerQuestion::bundled(
            102,
            "What programming languages should I learn first?",
            "For beginners, Python is often the best first language due to its readable syntax and versatility. It's widely used in web development, data science, automation, and AI. JavaScript is essential for web development and increasingly popular for full-stack development. If you're interested in mobile app development, consider Swift (iOS) or Kotlin (Android). For systems programming or game development, C++ or Rust are valuable. Java remains important for enterprise applications. Focus on mastering one language thoroughly before moving to others - the programming concepts you learn will transfer across languages.",
            Category::Tech,
        ),
        CareerQuestion::bundled(
            103,
            "How to get into DevOps engineering?",
            "DevOps engineering combines development and operations to streamline software delivery. Start by learning Linux/Unix fundamentals and command-line tools. Master version control with Git and understand CI/CD pipelines using tools like Jenkins, GitLab CI, or GitHub Actions. Learn containerization with Docker and orchestration with Kubernetes. Gain expertise in cloud platforms (AWS, Azure, GCP) and infrastructure as code tools like Terraform or Ansible. Develop scripting skills in Python, Bash, or PowerShell. Understanding monitoring and logging tools (Prometheus, ELK stack) is crucial. Entry-level positions start around $70,000-$100,000, with senior roles reaching $150,000+.",
            Category::Tech,
        ),
        // Business
        CareerQuestion::bundled(
            201,
            "How to become a product manager?",
            "Product management requires a unique blend of technical understanding, business acumen, and user empathy. Start by learning product management frameworks like Agile, Scrum, and Design Thinking. Develop skills in market research, user experience design, and data analysis. Master tools like Jira, Figma, and analytics platforms. Build a portfolio showcasing product case studies, even if they're personal projects. Consider pursuing an MBA or product management certification. Transition paths include marketing, engineering, consulting, or business analysis roles. Salary ranges from $90,000-$180,000 depending on experience and company size. The role offers excellent growth potential into senior leadership positions.",
            Category::Business,
        ),
        CareerQuestion::bundled(
            202,
            "What skills do data analysts need?",
            "Data analysts need strong analytical thinking and proficiency in SQL for database querying. Excel mastery is essential for data manipulation and basic analysis. Learn statistical concepts and data visualization tools like Tableau, Power BI, or Python libraries (Matplotlib, Seaborn). Python or R programming skills are increasingly valuable for advanced analysis. Develop business acumen to translate data insights into actionable recommendations. Strong communication skills are crucial for presenting findings to stakeholders. Understanding of A/B testing and experimental design is beneficial. Entry-level positions start around $55,000-$75,000, with senior analysts earning $80,000-$120,000.",
            Category::Business,
        ),
        // Healthcare
        CareerQuestion::bundled(
            301,
            "How to become a physical therapist?",
            "Becoming a physical therapist requires completing a Doctor of Physical Therapy (DPT) program, which typically takes 3 years after a bachelor's degree. Prerequisite courses include anatomy, physiology, biology, chemistry, and physics. Gain experience through volunteering or working in healthcare settings. The profession requires strong interpersonal skills, physical stamina, and problem-solving abilities. After graduation, pass the National Physical Therapy Examination (NPTE) to obtain licensure. Many states require continuing education for license renewal. Specializations include orthopedics, neurology, pediatrics, and sports medicine. Median salary is around $95,000, with excellent job growth prospects due to an aging population.",
            Category::Healthcare,
        ),
        CareerQuestion::bundled(
            302,
            "What does a medical scribe do?",
            "Medical scribes assist physicians by documenting patient encounters in electronic health records (EHR) in real-time. They record medical histories, physical exam findings, diagnoses, and treatment plans while the physician focuses on patient care. Scribes need strong typing skills (60+ WPM), knowledge of medical terminology, and familiarity with EHR systems like Epic or Cerner. The role requires attention to detail, ability to work under pressure, and excellent listening skills. Many positions offer on-the-job training, though medical terminology or healthcare administration courses are beneficial. Entry-level positions start around $30,000-$40,000, with potential for growth into healthcare administration or clinical roles.",
            Category::Healthcare,
        ),
        // Arts
        CareerQuestion::bundled(
            401,
            "How to build a graphic design portfolio?",
            "A strong graphic design portfolio should showcase your best work across different mediums and styles. Include 10-15 pieces that demonstrate various skills: branding, typography, web design, print design, and illustration. For each project, provide context about the client, objectives, and your design process. Use high-quality images and ensure consistent presentation. Create both a physical portfolio and an online version using platforms like Behance, Dribbble, or a personal website. Include personal projects if you lack client work - redesign existing brands, create fictional campaigns, or participate in design challenges. Update regularly and tailor your portfolio to specific job applications by highlighting relevant work.",
            Category::Arts,
        ),
        CareerQuestion::bundled(
            402,
            "What's the difference between UX and UI design?",
            "UX (User Experience) design focuses on the overall experience and journey a user has with a product, while UI (User Interface) design concentrates on the visual and interactive elements. UX designers conduct user research, create personas, design wireframes and user flows, and test usability. They're concerned with how the product works and feels. UI designers focus on how the product looks - typography, color schemes, buttons, icons, and visual hierarchy. UX designers typically work earlier in the process, defining the structure and functionality, while UI designers polish the visual design. Many professionals work in both areas, especially at smaller companies. Both roles require creativity, problem-solving skills, and user empathy.",
            Category::Arts,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_ids_are_unique() {
        let catalog = sample_catalog();
        let mut ids: Vec<i64> = catalog.iter().map(|q| q.id).collect();
        ids.sort();
        ids.dedup();
        assert_eq!(ids.len(), catalog.len());
        assert!(catalog.iter().all(|q| !q.is_ai_generated));
    }

    #[test]
    fn test_category_parsing() {
        assert_eq!("tech".parse::<Category>().unwrap(), Category::Tech);
        assert_eq!(" Healthcare ".parse::<Category>().unwrap(), Category::Healthcare);
        assert!("astronomy".parse::<Category>().is_err());
    }

    #[test]
    fn test_question_serializes_in_camel_case() {
        let question = CareerQuestion::generated("q", "a".to_string(), Category::Arts);
        let json = serde_json::to_value(&question).unwrap();
        assert_eq!(json["isAiGenerated"], true);
        assert_eq!(json["category"], "Arts");
    }

    #[test]
    fn test_missing_ai_flag_defaults_to_false() {
        let json = r#"{"id":7,"question":"q","answer":"a","category":"Tech"}"#;
        let question: CareerQuestion = serde_json::from_str(json).unwrap();
        assert!(!question.is_ai_generated);
    }
}
