//! Static career knowledge: field profiles and category keyword buckets
//!
//! Both tables are ordered. Lookups walk them front to back and the first
//! hit wins, so reordering entries changes classification results.

use crate::advisor::catalog::Category;

/// Profile of a single career specialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldProfile {
    pub name: &'static str,
    pub category: Category,
    pub skills: &'static [&'static str],
    pub certifications: &'static [&'static str],
    pub entry_roles: &'static [&'static str],
    pub salary_range: &'static str,
    pub growth_path: &'static str,
}

impl FieldProfile {
    /// True when the lower-cased text names this field, one of its skills,
    /// or one of its entry roles.
    pub fn is_mentioned_in(&self, lower_text: &str) -> bool {
        lower_text.contains(self.name)
            || self
                .skills
                .iter()
                .any(|skill| lower_text.contains(&skill.to_lowercase()))
            || self
                .entry_roles
                .iter()
                .any(|role| lower_text.contains(&role.to_lowercase()))
    }
}

/// Look up a profile by its exact field key.
pub fn field_profile(name: &str) -> Option<&'static FieldProfile> {
    FIELD_PROFILES.iter().find(|profile| profile.name == name)
}

/// Coarse keyword bucket used only for category detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeywordBucket {
    Tech,
    Business,
    Healthcare,
    Arts,
    Education,
    General,
}

impl KeywordBucket {
    /// Category a bucket normalizes to. Education and general questions are
    /// filed under Business.
    pub fn category(&self) -> Category {
        match self {
            KeywordBucket::Tech => Category::Tech,
            KeywordBucket::Business => Category::Business,
            KeywordBucket::Healthcare => Category::Healthcare,
            KeywordBucket::Arts => Category::Arts,
            KeywordBucket::Education | KeywordBucket::General => Category::Business,
        }
    }
}

/// Keyword buckets in detection priority order.
pub static KEYWORD_TABLE: &[(KeywordBucket, &[&str])] = &[
    (
        KeywordBucket::Tech,
        &[
            "software", "programming", "coding", "developer", "engineer", "engineering", "data",
            "cybersecurity", "ai", "artificial intelligence", "machine learning", "web development",
            "mobile app", "frontend", "backend", "fullstack", "devops", "cloud", "javascript",
            "python", "react", "node", "aws", "azure", "kubernetes", "docker", "database", "dba",
            "qa", "quality assurance", "testing", "network", "sysadmin", "systems", "game dev",
            "unity", "unreal", "mechanical", "electrical", "civil", "chemical", "biomedical",
            "industrial", "aerospace", "electrician", "plumber", "plumbing", "hvac", "welder",
            "welding", "carpenter", "carpentry", "construction", "automotive", "mechanic",
            "technician",
        ],
    ),
    (
        KeywordBucket::Business,
        &[
            "marketing", "sales", "finance", "accounting", "accountant", "cpa", "bookkeeping",
            "tax", "audit", "consulting", "consultant", "management", "manager", "leadership",
            "entrepreneur", "startup", "business analyst", "project manager", "product manager",
            "operations", "strategy", "digital marketing", "seo", "social media", "hr",
            "human resources", "recruiter", "financial analyst", "supply chain", "logistics",
            "procurement", "real estate", "realtor", "broker", "insurance", "agent", "underwriter",
            "public relations", "pr", "communications", "event planning", "event coordinator",
            "lawyer", "attorney", "paralegal", "legal", "compliance", "nonprofit", "fundraising",
            "grant writing", "culinary", "chef", "cooking", "hotel", "hospitality", "restaurant",
            "sports management", "agriculture", "farming",
        ],
    ),
    (
        KeywordBucket::Healthcare,
        &[
            "nurse", "nursing", "doctor", "physician", "medical", "healthcare", "hospital",
            "clinic", "therapy", "therapist", "physical therapy", "pt", "occupational therapy",
            "ot", "counseling", "counselor", "mental health", "lpc", "lcsw", "pharmacy",
            "pharmacist", "dentistry", "dental", "dental hygiene", "hygienist", "veterinary", "vet",
            "veterinarian", "public health", "epidemiology", "medical assistant", "radiologic",
            "radiology", "x-ray", "respiratory", "rt", "social work", "social worker", "biology",
            "research", "scientist", "lab", "environmental science", "chemistry", "chemist",
            "forestry", "forester", "personal training", "fitness", "trainer",
        ],
    ),
    (
        KeywordBucket::Arts,
        &[
            "design", "designer", "graphic design", "ux", "ui", "creative", "artist", "writer",
            "writing", "content", "copywriter", "photography", "photographer", "video",
            "videographer", "animation", "animator", "illustrator", "musician", "actor",
            "filmmaker", "interior design", "fashion", "fashion design", "music production",
            "audio", "sound design",
        ],
    ),
    (
        KeywordBucket::Education,
        &[
            "teacher", "teaching", "educator", "professor", "training", "trainer", "curriculum",
            "instruction", "academic", "school", "university", "learning", "development",
            "counselor", "school counselor", "higher education", "instructional design",
        ],
    ),
    (
        KeywordBucket::General,
        &[
            "career change", "salary", "interview", "resume", "linkedin", "networking", "skills",
            "certification", "promotion", "work life balance", "remote work", "freelance",
        ],
    ),
];

/// Every known career field, in lookup order.
pub static FIELD_PROFILES: &[FieldProfile] = &[
    // Technology
    FieldProfile {
        name: "software development",
        category: Category::Tech,
        skills: &["JavaScript", "Python", "React", "Node.js", "databases", "Git", "APIs"],
        certifications: &["AWS Certified Developer", "Google Cloud Professional", "Microsoft Azure"],
        entry_roles: &["Junior Developer", "Software Engineer I", "Frontend/Backend Developer"],
        salary_range: "$60,000 - $120,000",
        growth_path: "Junior → Mid-level → Senior → Lead → Principal Engineer",
    },
    FieldProfile {
        name: "cybersecurity",
        category: Category::Tech,
        skills: &["network security", "ethical hacking", "risk assessment", "incident response", "Python"],
        certifications: &["CompTIA Security+", "CISSP", "CEH", "CISM"],
        entry_roles: &["SOC Analyst", "Security Specialist", "Cybersecurity Intern"],
        salary_range: "$55,000 - $140,000",
        growth_path: "Analyst → Specialist → Engineer → Architect → CISO",
    },
    FieldProfile {
        name: "data science",
        category: Category::Tech,
        skills: &["Python", "R", "SQL", "machine learning", "statistics", "data visualization"],
        certifications: &["Google Data Analytics", "Microsoft Azure Data Scientist", "AWS ML Specialty"],
        entry_roles: &["Data Analyst", "Junior Data Scientist", "Business Intelligence Analyst"],
        salary_range: "$70,000 - $150,000",
        growth_path: "Analyst → Data Scientist → Senior Data Scientist → Principal Data Scientist",
    },
    FieldProfile {
        name: "web development",
        category: Category::Tech,
        skills: &["HTML", "CSS", "JavaScript", "React", "Vue", "Angular", "responsive design", "APIs"],
        certifications: &["Meta Front-End Developer", "Google UX Design", "freeCodeCamp"],
        entry_roles: &["Junior Web Developer", "Frontend Developer", "Full Stack Developer"],
        salary_range: "$50,000 - $110,000",
        growth_path: "Junior → Mid-level → Senior → Lead → Engineering Manager",
    },
    FieldProfile {
        name: "cloud computing",
        category: Category::Tech,
        skills: &["AWS", "Azure", "Google Cloud", "Docker", "Kubernetes", "infrastructure as code", "networking"],
        certifications: &["AWS Solutions Architect", "Azure Administrator", "Google Cloud Engineer"],
        entry_roles: &["Cloud Support Engineer", "Junior Cloud Engineer", "DevOps Engineer"],
        salary_range: "$65,000 - $140,000",
        growth_path: "Support → Engineer → Senior Engineer → Cloud Architect → Director",
    },

    // Business
    FieldProfile {
        name: "accounting",
        category: Category::Business,
        skills: &["financial reporting", "tax preparation", "auditing", "QuickBooks", "Excel", "GAAP", "bookkeeping"],
        certifications: &["CPA", "CMA", "CIA", "QuickBooks Certified"],
        entry_roles: &["Staff Accountant", "Junior Accountant", "Accounts Payable/Receivable Clerk"],
        salary_range: "$45,000 - $95,000",
        growth_path: "Staff Accountant → Senior Accountant → Accounting Manager → Controller → CFO",
    },
    FieldProfile {
        name: "finance",
        category: Category::Business,
        skills: &["financial analysis", "modeling", "Excel", "Bloomberg", "valuation", "risk management", "investment analysis"],
        certifications: &["CFA", "CFP", "FRM", "Series 7"],
        entry_roles: &["Financial Analyst", "Junior Analyst", "Investment Banking Analyst"],
        salary_range: "$55,000 - $120,000",
        growth_path: "Analyst → Senior Analyst → Associate → VP → Director → Managing Director",
    },
    FieldProfile {
        name: "digital marketing",
        category: Category::Business,
        skills: &["SEO", "Google Ads", "social media", "content marketing", "analytics", "email marketing"],
        certifications: &["Google Ads", "HubSpot", "Facebook Blueprint", "Google Analytics"],
        entry_roles: &["Marketing Coordinator", "Digital Marketing Specialist", "Social Media Manager"],
        salary_range: "$40,000 - $100,000",
        growth_path: "Coordinator → Specialist → Manager → Director → VP Marketing",
    },
    FieldProfile {
        name: "project management",
        category: Category::Business,
        skills: &["planning", "stakeholder management", "risk assessment", "Agile", "Scrum", "budgeting"],
        certifications: &["PMP", "Scrum Master", "Prince2", "Agile PM"],
        entry_roles: &["Project Coordinator", "Assistant Project Manager", "Scrum Master"],
        salary_range: "$55,000 - $120,000",
        growth_path: "Coordinator → Project Manager → Senior PM → Program Manager → PMO Director",
    },
    FieldProfile {
        name: "human resources",
        category: Category::Business,
        skills: &["recruitment", "employee relations", "benefits administration", "HRIS systems", "labor law", "training"],
        certifications: &["PHR", "SPHR", "SHRM-CP", "SHRM-SCP"],
        entry_roles: &["HR Coordinator", "Recruiter", "HR Generalist"],
        salary_range: "$45,000 - $95,000",
        growth_path: "Coordinator → HR Generalist → HR Manager → HR Director → CHRO",
    },
    FieldProfile {
        name: "sales",
        category: Category::Business,
        skills: &["prospecting", "negotiation", "CRM software", "presentation", "relationship building", "closing"],
        certifications: &["Certified Sales Professional", "Sandler Sales", "Challenger Sale"],
        entry_roles: &["Sales Development Rep", "Account Executive", "Inside Sales Rep"],
        salary_range: "$40,000 - $150,000+ (with commission)",
        growth_path: "SDR → AE → Senior AE → Sales Manager → VP Sales → CRO",
    },
    FieldProfile {
        name: "consulting",
        category: Category::Business,
        skills: &["problem solving", "data analysis", "presentation", "strategy", "stakeholder management", "Excel"],
        certifications: &["MBA", "PMP", "Six Sigma", "Industry-specific certs"],
        entry_roles: &["Analyst", "Associate Consultant", "Junior Consultant"],
        salary_range: "$60,000 - $140,000",
        growth_path: "Analyst → Consultant → Senior Consultant → Manager → Partner",
    },
    FieldProfile {
        name: "business analysis",
        category: Category::Business,
        skills: &["requirements gathering", "process mapping", "SQL", "data analysis", "stakeholder management", "Agile"],
        certifications: &["CBAP", "PMI-PBA", "Agile Analysis Certification"],
        entry_roles: &["Junior Business Analyst", "Business Analyst", "Data Analyst"],
        salary_range: "$50,000 - $100,000",
        growth_path: "Junior BA → Business Analyst → Senior BA → Lead BA → Product Manager",
    },

    // Healthcare
    FieldProfile {
        name: "nursing",
        category: Category::Healthcare,
        skills: &["patient care", "medical procedures", "documentation", "critical thinking", "communication"],
        certifications: &["RN License", "BLS", "ACLS", "Specialty Certifications"],
        entry_roles: &["Staff Nurse", "Graduate Nurse", "Clinical Nurse"],
        salary_range: "$60,000 - $90,000",
        growth_path: "Staff Nurse → Charge Nurse → Nurse Manager → Director of Nursing",
    },
    FieldProfile {
        name: "healthcare administration",
        category: Category::Healthcare,
        skills: &["healthcare systems", "regulations", "finance", "leadership", "quality improvement"],
        certifications: &["CHAM", "FACHE", "CCS", "RHIA"],
        entry_roles: &["Administrative Assistant", "Healthcare Coordinator", "Operations Specialist"],
        salary_range: "$45,000 - $110,000",
        growth_path: "Coordinator → Manager → Director → Administrator → CEO",
    },
    FieldProfile {
        name: "medical assistant",
        category: Category::Healthcare,
        skills: &["patient intake", "vital signs", "medical records", "scheduling", "basic clinical procedures"],
        certifications: &["CMA", "RMA", "CCMA", "BLS"],
        entry_roles: &["Medical Assistant", "Clinical Assistant", "Patient Care Technician"],
        salary_range: "$30,000 - $45,000",
        growth_path: "Medical Assistant → Lead MA → Office Manager → Practice Administrator",
    },
    FieldProfile {
        name: "pharmacy",
        category: Category::Healthcare,
        skills: &["medication dispensing", "drug interactions", "patient counseling", "inventory management", "pharmacology"],
        certifications: &["PharmD", "Pharmacy Technician Certification", "State License"],
        entry_roles: &["Pharmacy Technician", "Pharmacy Intern", "Clinical Pharmacist"],
        salary_range: "$35,000 - $130,000",
        growth_path: "Technician → Pharmacist → Clinical Pharmacist → Pharmacy Manager → Director",
    },

    // Arts and design
    FieldProfile {
        name: "ux design",
        category: Category::Arts,
        skills: &["user research", "wireframing", "prototyping", "Figma", "Adobe XD", "usability testing"],
        certifications: &["Google UX Design Certificate", "Nielsen Norman Group UX", "HFI CUA"],
        entry_roles: &["UX Designer", "UI Designer", "Product Designer"],
        salary_range: "$55,000 - $130,000",
        growth_path: "Designer → Senior Designer → Lead Designer → Design Manager",
    },
    FieldProfile {
        name: "graphic design",
        category: Category::Arts,
        skills: &["Adobe Creative Suite", "typography", "branding", "layout design", "color theory", "illustration"],
        certifications: &["Adobe Certified Professional", "Graphic Design Certification"],
        entry_roles: &["Junior Graphic Designer", "Graphic Designer", "Production Artist"],
        salary_range: "$38,000 - $75,000",
        growth_path: "Junior Designer → Designer → Senior Designer → Art Director → Creative Director",
    },
    FieldProfile {
        name: "content writing",
        category: Category::Arts,
        skills: &["copywriting", "SEO writing", "storytelling", "editing", "research", "content strategy"],
        certifications: &["HubSpot Content Marketing", "Google Analytics", "Content Marketing Institute"],
        entry_roles: &["Content Writer", "Copywriter", "Junior Content Strategist"],
        salary_range: "$35,000 - $80,000",
        growth_path: "Writer → Senior Writer → Content Manager → Content Director",
    },

    // Education and training
    FieldProfile {
        name: "teaching",
        category: Category::Business,
        skills: &["curriculum development", "classroom management", "assessment", "communication", "technology integration"],
        certifications: &["Teaching License", "Subject-specific certifications", "National Board Certification"],
        entry_roles: &["Student Teacher", "Substitute Teacher", "Classroom Teacher"],
        salary_range: "$40,000 - $70,000",
        growth_path: "Teacher → Lead Teacher → Department Head → Principal → Superintendent",
    },
    FieldProfile {
        name: "corporate training",
        category: Category::Business,
        skills: &["instructional design", "LMS administration", "facilitation", "adult learning theory", "e-learning development"],
        certifications: &["CPLP", "ATD Master Trainer", "CPTD"],
        entry_roles: &["Training Coordinator", "Corporate Trainer", "Instructional Designer"],
        salary_range: "$45,000 - $90,000",
        growth_path: "Trainer → Senior Trainer → Training Manager → L&D Director",
    },

    // More technology
    FieldProfile {
        name: "mobile development",
        category: Category::Tech,
        skills: &["Swift", "Kotlin", "React Native", "Flutter", "iOS", "Android", "mobile UI/UX", "API integration"],
        certifications: &["Google Associate Android Developer", "iOS Developer Certification", "Flutter Certification"],
        entry_roles: &["Junior Mobile Developer", "iOS/Android Developer", "Mobile Engineer"],
        salary_range: "$65,000 - $125,000",
        growth_path: "Junior → Mobile Developer → Senior → Lead Mobile Engineer → Engineering Manager",
    },
    FieldProfile {
        name: "artificial intelligence",
        category: Category::Tech,
        skills: &["machine learning", "deep learning", "neural networks", "Python", "TensorFlow", "PyTorch", "NLP"],
        certifications: &["TensorFlow Developer", "AWS ML Specialty", "Deep Learning Specialization"],
        entry_roles: &["ML Engineer", "AI Research Assistant", "NLP Engineer"],
        salary_range: "$90,000 - $180,000",
        growth_path: "Engineer → Senior ML Engineer → AI Research Scientist → Principal Scientist",
    },
    FieldProfile {
        name: "database administration",
        category: Category::Tech,
        skills: &["SQL", "database design", "performance tuning", "backup/recovery", "Oracle", "PostgreSQL", "MongoDB"],
        certifications: &["Oracle DBA", "Microsoft SQL Server", "MongoDB Certified DBA"],
        entry_roles: &["Junior DBA", "Database Administrator", "SQL Developer"],
        salary_range: "$60,000 - $120,000",
        growth_path: "Junior DBA → DBA → Senior DBA → Database Architect",
    },
    FieldProfile {
        name: "quality assurance",
        category: Category::Tech,
        skills: &["testing", "automation", "Selenium", "JIRA", "test planning", "bug tracking", "QA processes"],
        certifications: &["ISTQB", "Certified Selenium Professional", "CSTE"],
        entry_roles: &["QA Tester", "Test Engineer", "QA Analyst"],
        salary_range: "$50,000 - $100,000",
        growth_path: "Tester → QA Engineer → Senior QA → QA Manager",
    },
    FieldProfile {
        name: "network engineering",
        category: Category::Tech,
        skills: &["networking", "Cisco", "routing", "switching", "firewalls", "network security", "troubleshooting"],
        certifications: &["CCNA", "CCNP", "CompTIA Network+", "JNCIA"],
        entry_roles: &["Network Technician", "Junior Network Engineer", "Network Administrator"],
        salary_range: "$55,000 - $110,000",
        growth_path: "Technician → Network Engineer → Senior Engineer → Network Architect",
    },
    FieldProfile {
        name: "systems administration",
        category: Category::Tech,
        skills: &["Linux", "Windows Server", "Active Directory", "PowerShell", "virtualization", "system monitoring"],
        certifications: &["RHCSA", "MCSA", "CompTIA Server+", "VMware VCP"],
        entry_roles: &["Junior Sysadmin", "Systems Administrator", "IT Support Specialist"],
        salary_range: "$50,000 - $95,000",
        growth_path: "Junior Sysadmin → Sysadmin → Senior Sysadmin → Infrastructure Manager",
    },
    FieldProfile {
        name: "game development",
        category: Category::Tech,
        skills: &["Unity", "Unreal Engine", "C++", "C#", "game design", "3D modeling", "physics"],
        certifications: &["Unity Certified Developer", "Unreal Engine Certification"],
        entry_roles: &["Junior Game Developer", "Gameplay Programmer", "Game Designer"],
        salary_range: "$50,000 - $110,000",
        growth_path: "Junior Developer → Game Developer → Senior → Lead Developer → Game Director",
    },

    // More business
    FieldProfile {
        name: "product management",
        category: Category::Business,
        skills: &["product strategy", "roadmapping", "user research", "Agile", "data analysis", "stakeholder management"],
        certifications: &["Product Management Certificate", "Pragmatic Marketing", "Scrum Product Owner"],
        entry_roles: &["Associate Product Manager", "Product Analyst", "Junior PM"],
        salary_range: "$70,000 - $150,000",
        growth_path: "Associate PM → Product Manager → Senior PM → Director → VP Product",
    },
    FieldProfile {
        name: "supply chain management",
        category: Category::Business,
        skills: &["logistics", "procurement", "inventory management", "SAP", "forecasting", "vendor management"],
        certifications: &["CSCP", "CPIM", "CLTD", "Six Sigma"],
        entry_roles: &["Supply Chain Analyst", "Logistics Coordinator", "Procurement Specialist"],
        salary_range: "$50,000 - $110,000",
        growth_path: "Analyst → Supply Chain Manager → Director → VP Supply Chain",
    },
    FieldProfile {
        name: "operations management",
        category: Category::Business,
        skills: &["process improvement", "lean methodology", "Six Sigma", "project management", "data analysis"],
        certifications: &["Six Sigma Black Belt", "PMP", "CPIM"],
        entry_roles: &["Operations Analyst", "Operations Coordinator", "Process Analyst"],
        salary_range: "$50,000 - $105,000",
        growth_path: "Analyst → Operations Manager → Senior Manager → Director → VP Operations",
    },
    FieldProfile {
        name: "real estate",
        category: Category::Business,
        skills: &["property valuation", "market analysis", "negotiation", "contracts", "client relations", "marketing"],
        certifications: &["Real Estate License", "Broker License", "CCIM", "CRS"],
        entry_roles: &["Real Estate Agent", "Property Manager", "Leasing Consultant"],
        salary_range: "$40,000 - $150,000+",
        growth_path: "Agent → Senior Agent → Broker → Managing Broker → Firm Owner",
    },
    FieldProfile {
        name: "insurance",
        category: Category::Business,
        skills: &["risk assessment", "underwriting", "claims processing", "sales", "policy knowledge", "customer service"],
        certifications: &["Insurance License", "CLU", "CPCU", "CIC"],
        entry_roles: &["Insurance Agent", "Claims Adjuster", "Underwriter"],
        salary_range: "$40,000 - $95,000",
        growth_path: "Agent → Senior Agent → Agency Manager → Regional Manager",
    },
    FieldProfile {
        name: "public relations",
        category: Category::Business,
        skills: &["media relations", "writing", "crisis management", "social media", "event planning", "brand management"],
        certifications: &["APR", "PRSA Certification", "Digital Marketing Certification"],
        entry_roles: &["PR Coordinator", "Communications Specialist", "PR Assistant"],
        salary_range: "$40,000 - $90,000",
        growth_path: "Coordinator → PR Manager → Senior Manager → Director → VP Communications",
    },
    FieldProfile {
        name: "event planning",
        category: Category::Business,
        skills: &["event coordination", "vendor management", "budgeting", "logistics", "client relations", "marketing"],
        certifications: &["CMP", "CSEP", "Wedding Planning Certification"],
        entry_roles: &["Event Coordinator", "Event Assistant", "Meeting Planner"],
        salary_range: "$35,000 - $75,000",
        growth_path: "Coordinator → Event Planner → Senior Planner → Event Director",
    },

    // Clinical and allied health
    FieldProfile {
        name: "physician",
        category: Category::Healthcare,
        skills: &["diagnosis", "patient care", "medical procedures", "clinical decision making", "EMR systems"],
        certifications: &["Medical License", "Board Certification", "Specialty Certification"],
        entry_roles: &["Resident Physician", "Fellow", "Attending Physician"],
        salary_range: "$200,000 - $400,000+",
        growth_path: "Resident → Attending → Department Head → Chief Medical Officer",
    },
    FieldProfile {
        name: "physical therapy",
        category: Category::Healthcare,
        skills: &["rehabilitation", "patient assessment", "treatment planning", "manual therapy", "exercise prescription"],
        certifications: &["PT License", "Board Specialization", "Specialty Certifications"],
        entry_roles: &["Physical Therapist", "PT Resident", "Clinical PT"],
        salary_range: "$70,000 - $95,000",
        growth_path: "PT → Senior PT → Clinical Specialist → Director of Rehabilitation",
    },
    FieldProfile {
        name: "occupational therapy",
        category: Category::Healthcare,
        skills: &["patient assessment", "treatment planning", "adaptive equipment", "activity analysis", "documentation"],
        certifications: &["OT License", "NBCOT Certification", "Specialty Certifications"],
        entry_roles: &["Occupational Therapist", "OT Resident", "Clinical OT"],
        salary_range: "$70,000 - $95,000",
        growth_path: "OT → Senior OT → Clinical Specialist → Director of OT Services",
    },
    FieldProfile {
        name: "dental hygiene",
        category: Category::Healthcare,
        skills: &["teeth cleaning", "patient education", "x-rays", "periodontal assessment", "preventive care"],
        certifications: &["Dental Hygiene License", "Local Anesthesia Certification", "Radiology Certification"],
        entry_roles: &["Dental Hygienist", "Clinical Hygienist"],
        salary_range: "$65,000 - $85,000",
        growth_path: "Hygienist → Senior Hygienist → Clinical Coordinator → Practice Manager",
    },
    FieldProfile {
        name: "radiologic technologist",
        category: Category::Healthcare,
        skills: &["x-ray imaging", "patient positioning", "radiation safety", "equipment operation", "PACS systems"],
        certifications: &["ARRT Certification", "State License", "Specialty Certifications"],
        entry_roles: &["Radiologic Technologist", "X-Ray Technician", "Imaging Technologist"],
        salary_range: "$50,000 - $75,000",
        growth_path: "Technologist → Senior Technologist → Lead Tech → Radiology Manager",
    },
    FieldProfile {
        name: "respiratory therapist",
        category: Category::Healthcare,
        skills: &["respiratory care", "ventilator management", "patient assessment", "emergency response", "pulmonary function testing"],
        certifications: &["RRT", "CRT", "ACLS", "NRP"],
        entry_roles: &["Respiratory Therapist", "Clinical RT", "Staff RT"],
        salary_range: "$55,000 - $75,000",
        growth_path: "RT → Senior RT → Clinical Specialist → RT Manager",
    },
    FieldProfile {
        name: "veterinary medicine",
        category: Category::Healthcare,
        skills: &["animal care", "diagnosis", "surgery", "client communication", "medical procedures", "pharmacology"],
        certifications: &["DVM License", "Board Certification", "Specialty Certifications"],
        entry_roles: &["Associate Veterinarian", "Veterinary Intern", "Staff Veterinarian"],
        salary_range: "$70,000 - $120,000",
        growth_path: "Associate → Veterinarian → Senior DVM → Practice Owner",
    },
    FieldProfile {
        name: "mental health counseling",
        category: Category::Healthcare,
        skills: &["therapy", "assessment", "diagnosis", "treatment planning", "crisis intervention", "documentation"],
        certifications: &["LPC", "LMHC", "LCSW", "State License"],
        entry_roles: &["Counseling Intern", "Associate Counselor", "Mental Health Counselor"],
        salary_range: "$40,000 - $75,000",
        growth_path: "Associate → Counselor → Senior Counselor → Clinical Director",
    },
    FieldProfile {
        name: "public health",
        category: Category::Healthcare,
        skills: &["epidemiology", "health policy", "community health", "data analysis", "program planning", "research"],
        certifications: &["CPH", "CHES", "MPH"],
        entry_roles: &["Public Health Analyst", "Community Health Worker", "Epidemiologist"],
        salary_range: "$45,000 - $85,000",
        growth_path: "Analyst → Program Manager → Director → Health Commissioner",
    },

    // Creative and media
    FieldProfile {
        name: "video production",
        category: Category::Arts,
        skills: &["videography", "editing", "Adobe Premiere", "Final Cut Pro", "storytelling", "cinematography"],
        certifications: &["Adobe Certified Video Specialist", "Avid Certified"],
        entry_roles: &["Production Assistant", "Video Editor", "Videographer"],
        salary_range: "$35,000 - $80,000",
        growth_path: "Production Assistant → Video Producer → Senior Producer → Creative Director",
    },
    FieldProfile {
        name: "animation",
        category: Category::Arts,
        skills: &["2D/3D animation", "After Effects", "Maya", "Blender", "character design", "motion graphics"],
        certifications: &["Adobe Certified", "Autodesk Certified"],
        entry_roles: &["Junior Animator", "Motion Graphics Designer", "3D Artist"],
        salary_range: "$45,000 - $95,000",
        growth_path: "Junior Animator → Animator → Senior Animator → Animation Director",
    },
    FieldProfile {
        name: "interior design",
        category: Category::Arts,
        skills: &["space planning", "CAD software", "color theory", "materials", "3D rendering", "client management"],
        certifications: &["NCIDQ", "LEED AP", "Interior Design Certification"],
        entry_roles: &["Junior Designer", "Design Assistant", "Interior Designer"],
        salary_range: "$40,000 - $85,000",
        growth_path: "Junior Designer → Interior Designer → Senior Designer → Principal Designer",
    },
    FieldProfile {
        name: "photography",
        category: Category::Arts,
        skills: &["camera operation", "lighting", "photo editing", "Adobe Lightroom", "Photoshop", "composition"],
        certifications: &["Professional Photographers of America", "Adobe Certified"],
        entry_roles: &["Assistant Photographer", "Freelance Photographer", "Studio Photographer"],
        salary_range: "$30,000 - $70,000",
        growth_path: "Assistant → Photographer → Senior Photographer → Photography Director",
    },
    FieldProfile {
        name: "fashion design",
        category: Category::Arts,
        skills: &["sketching", "pattern making", "sewing", "textiles", "fashion trends", "Adobe Illustrator"],
        certifications: &["Fashion Design Certification", "Technical Design Certification"],
        entry_roles: &["Fashion Design Assistant", "Junior Designer", "Pattern Maker"],
        salary_range: "$40,000 - $90,000",
        growth_path: "Assistant → Fashion Designer → Senior Designer → Creative Director",
    },
    FieldProfile {
        name: "music production",
        category: Category::Arts,
        skills: &["audio engineering", "Pro Tools", "mixing", "mastering", "music theory", "sound design"],
        certifications: &["Pro Tools Certification", "Audio Engineering Certification"],
        entry_roles: &["Assistant Engineer", "Music Producer", "Sound Designer"],
        salary_range: "$35,000 - $85,000",
        growth_path: "Assistant → Producer → Senior Producer → Production Director",
    },

    // Engineering
    FieldProfile {
        name: "mechanical engineering",
        category: Category::Tech,
        skills: &["CAD", "thermodynamics", "mechanics", "materials science", "manufacturing", "product design"],
        certifications: &["PE License", "Six Sigma", "SOLIDWORKS Certification"],
        entry_roles: &["Junior Engineer", "Design Engineer", "Manufacturing Engineer"],
        salary_range: "$60,000 - $100,000",
        growth_path: "Junior Engineer → Mechanical Engineer → Senior Engineer → Engineering Manager",
    },
    FieldProfile {
        name: "electrical engineering",
        category: Category::Tech,
        skills: &["circuit design", "power systems", "electronics", "signal processing", "control systems", "PCB design"],
        certifications: &["PE License", "Six Sigma", "PMP"],
        entry_roles: &["Junior Electrical Engineer", "Design Engineer", "Test Engineer"],
        salary_range: "$65,000 - $110,000",
        growth_path: "Junior Engineer → Electrical Engineer → Senior Engineer → Principal Engineer",
    },
    FieldProfile {
        name: "civil engineering",
        category: Category::Tech,
        skills: &["structural design", "AutoCAD", "project management", "surveying", "construction management", "geotechnical"],
        certifications: &["PE License", "SE License", "LEED AP"],
        entry_roles: &["Junior Civil Engineer", "Design Engineer", "Project Engineer"],
        salary_range: "$55,000 - $95,000",
        growth_path: "Junior Engineer → Civil Engineer → Senior Engineer → Project Manager → Principal",
    },
    FieldProfile {
        name: "chemical engineering",
        category: Category::Tech,
        skills: &["process design", "thermodynamics", "reaction engineering", "process safety", "materials", "plant operations"],
        certifications: &["PE License", "Six Sigma", "Process Safety Certification"],
        entry_roles: &["Process Engineer", "Junior Chemical Engineer", "Production Engineer"],
        salary_range: "$65,000 - $115,000",
        growth_path: "Process Engineer → Chemical Engineer → Senior Engineer → Plant Manager",
    },
    FieldProfile {
        name: "biomedical engineering",
        category: Category::Tech,
        skills: &["medical devices", "biomechanics", "CAD", "regulatory compliance", "testing", "research"],
        certifications: &["PE License", "Clinical Engineering Certification"],
        entry_roles: &["Junior Biomedical Engineer", "R&D Engineer", "Clinical Engineer"],
        salary_range: "$60,000 - $105,000",
        growth_path: "Junior Engineer → Biomedical Engineer → Senior Engineer → R&D Manager",
    },
    FieldProfile {
        name: "industrial engineering",
        category: Category::Tech,
        skills: &["process optimization", "lean manufacturing", "Six Sigma", "supply chain", "data analysis", "ergonomics"],
        certifications: &["PE License", "Six Sigma Black Belt", "Lean Certification"],
        entry_roles: &["Junior Industrial Engineer", "Process Engineer", "Manufacturing Engineer"],
        salary_range: "$60,000 - $100,000",
        growth_path: "Junior Engineer → Industrial Engineer → Senior Engineer → Operations Manager",
    },
    FieldProfile {
        name: "aerospace engineering",
        category: Category::Tech,
        skills: &["aerodynamics", "propulsion", "CAD", "structural analysis", "flight dynamics", "systems engineering"],
        certifications: &["PE License", "Six Sigma", "PMP"],
        entry_roles: &["Junior Aerospace Engineer", "Design Engineer", "Systems Engineer"],
        salary_range: "$70,000 - $120,000",
        growth_path: "Junior Engineer → Aerospace Engineer → Senior Engineer → Chief Engineer",
    },

    // Science and research
    FieldProfile {
        name: "biology research",
        category: Category::Healthcare,
        skills: &["laboratory techniques", "data analysis", "research design", "scientific writing", "molecular biology", "microscopy"],
        certifications: &["PhD", "Lab Certifications", "Safety Certifications"],
        entry_roles: &["Research Assistant", "Lab Technician", "Research Associate"],
        salary_range: "$40,000 - $85,000",
        growth_path: "Research Assistant → Scientist → Senior Scientist → Principal Investigator",
    },
    FieldProfile {
        name: "environmental science",
        category: Category::Healthcare,
        skills: &["environmental assessment", "GIS", "data analysis", "field sampling", "regulations", "sustainability"],
        certifications: &["Environmental Professional", "LEED AP", "GIS Certification"],
        entry_roles: &["Environmental Technician", "Environmental Specialist", "Field Scientist"],
        salary_range: "$45,000 - $80,000",
        growth_path: "Technician → Environmental Scientist → Senior Scientist → Environmental Manager",
    },
    FieldProfile {
        name: "chemistry",
        category: Category::Healthcare,
        skills: &["analytical chemistry", "lab techniques", "instrumentation", "data analysis", "quality control", "research"],
        certifications: &["ACS Certification", "Lab Certifications", "Safety Certifications"],
        entry_roles: &["Lab Technician", "Analytical Chemist", "Research Chemist"],
        salary_range: "$45,000 - $90,000",
        growth_path: "Technician → Chemist → Senior Chemist → Lab Manager",
    },

    // Legal
    FieldProfile {
        name: "attorney",
        category: Category::Business,
        skills: &["legal research", "writing", "negotiation", "litigation", "contract law", "client counseling"],
        certifications: &["JD Degree", "Bar License", "Specialty Certifications"],
        entry_roles: &["Associate Attorney", "Junior Lawyer", "Legal Associate"],
        salary_range: "$60,000 - $180,000+",
        growth_path: "Associate → Senior Associate → Partner → Managing Partner",
    },
    FieldProfile {
        name: "paralegal",
        category: Category::Business,
        skills: &["legal research", "document preparation", "case management", "e-discovery", "litigation support"],
        certifications: &["Paralegal Certificate", "NALA Certification", "State Certification"],
        entry_roles: &["Paralegal", "Legal Assistant", "Litigation Assistant"],
        salary_range: "$40,000 - $70,000",
        growth_path: "Paralegal → Senior Paralegal → Paralegal Manager → Legal Operations Manager",
    },
    FieldProfile {
        name: "compliance officer",
        category: Category::Business,
        skills: &["regulatory compliance", "risk assessment", "policy development", "auditing", "training", "reporting"],
        certifications: &["CCEP", "CRCM", "CAMS"],
        entry_roles: &["Compliance Analyst", "Compliance Coordinator", "Junior Compliance Officer"],
        salary_range: "$50,000 - $100,000",
        growth_path: "Analyst → Compliance Officer → Senior Officer → Chief Compliance Officer",
    },

    // Skilled trades
    FieldProfile {
        name: "electrician",
        category: Category::Tech,
        skills: &["electrical systems", "wiring", "troubleshooting", "code compliance", "safety", "blueprints"],
        certifications: &["Journeyman License", "Master Electrician", "OSHA Certification"],
        entry_roles: &["Apprentice Electrician", "Helper", "Journeyman"],
        salary_range: "$40,000 - $80,000",
        growth_path: "Apprentice → Journeyman → Master Electrician → Electrical Contractor",
    },
    FieldProfile {
        name: "plumbing",
        category: Category::Tech,
        skills: &["pipe installation", "troubleshooting", "code compliance", "water systems", "drainage", "gas lines"],
        certifications: &["Journeyman License", "Master Plumber", "Backflow Certification"],
        entry_roles: &["Apprentice Plumber", "Helper", "Journeyman Plumber"],
        salary_range: "$40,000 - $85,000",
        growth_path: "Apprentice → Journeyman → Master Plumber → Plumbing Contractor",
    },
    FieldProfile {
        name: "hvac",
        category: Category::Tech,
        skills: &["HVAC systems", "refrigeration", "troubleshooting", "installation", "maintenance", "EPA certification"],
        certifications: &["EPA 608", "NATE Certification", "HVAC License"],
        entry_roles: &["HVAC Apprentice", "HVAC Technician", "Service Technician"],
        salary_range: "$40,000 - $75,000",
        growth_path: "Apprentice → Technician → Master Technician → HVAC Contractor",
    },
    FieldProfile {
        name: "welding",
        category: Category::Tech,
        skills: &["welding techniques", "blueprint reading", "metallurgy", "safety", "fabrication", "inspection"],
        certifications: &["AWS Certification", "Welding License", "Safety Certifications"],
        entry_roles: &["Welder", "Welding Apprentice", "Junior Welder"],
        salary_range: "$35,000 - $70,000",
        growth_path: "Welder → Certified Welder → Welding Supervisor → Welding Inspector",
    },
    FieldProfile {
        name: "carpentry",
        category: Category::Tech,
        skills: &["woodworking", "blueprint reading", "framing", "finishing", "tool operation", "measurements"],
        certifications: &["Journeyman Certificate", "Master Carpenter", "OSHA Certification"],
        entry_roles: &["Carpenter Apprentice", "Helper", "Journeyman Carpenter"],
        salary_range: "$35,000 - $70,000",
        growth_path: "Apprentice → Journeyman → Master Carpenter → General Contractor",
    },
    FieldProfile {
        name: "construction management",
        category: Category::Tech,
        skills: &["project planning", "budgeting", "scheduling", "safety management", "building codes", "contract management"],
        certifications: &["CCM", "PMP", "OSHA 30", "LEED AP"],
        entry_roles: &["Assistant Project Manager", "Project Engineer", "Field Engineer"],
        salary_range: "$55,000 - $110,000",
        growth_path: "Assistant PM → Project Manager → Senior PM → Construction Manager → Director",
    },
    FieldProfile {
        name: "automotive technician",
        category: Category::Tech,
        skills: &["diagnostics", "engine repair", "electrical systems", "brake systems", "computerized systems", "customer service"],
        certifications: &["ASE Certification", "Manufacturer Certifications", "State License"],
        entry_roles: &["Automotive Technician", "Service Technician", "Mechanic Apprentice"],
        salary_range: "$35,000 - $65,000",
        growth_path: "Technician → Master Technician → Service Manager → Shop Owner",
    },

    // Hospitality
    FieldProfile {
        name: "culinary arts",
        category: Category::Business,
        skills: &["cooking techniques", "menu planning", "food safety", "kitchen management", "creativity", "plating"],
        certifications: &["ServSafe", "Culinary Degree", "Specialty Certifications"],
        entry_roles: &["Line Cook", "Prep Cook", "Commis Chef"],
        salary_range: "$30,000 - $75,000",
        growth_path: "Line Cook → Sous Chef → Executive Chef → Culinary Director",
    },
    FieldProfile {
        name: "hotel management",
        category: Category::Business,
        skills: &["customer service", "operations management", "budgeting", "staff management", "hospitality software", "sales"],
        certifications: &["CHA", "CHE", "Hospitality Degree"],
        entry_roles: &["Front Desk Agent", "Assistant Manager", "Department Supervisor"],
        salary_range: "$35,000 - $85,000",
        growth_path: "Front Desk → Department Manager → Assistant GM → General Manager → Regional Director",
    },

    // Social services
    FieldProfile {
        name: "social work",
        category: Category::Healthcare,
        skills: &["case management", "counseling", "advocacy", "crisis intervention", "documentation", "resource coordination"],
        certifications: &["MSW", "LCSW", "LMSW", "State License"],
        entry_roles: &["Case Manager", "Social Worker", "Clinical Social Worker"],
        salary_range: "$40,000 - $70,000",
        growth_path: "Case Manager → Social Worker → Clinical SW → Program Director",
    },
    FieldProfile {
        name: "nonprofit management",
        category: Category::Business,
        skills: &["fundraising", "grant writing", "program management", "volunteer coordination", "budgeting", "community outreach"],
        certifications: &["CFRE", "Nonprofit Management Certificate", "Grant Writing Certification"],
        entry_roles: &["Program Coordinator", "Development Associate", "Nonprofit Associate"],
        salary_range: "$40,000 - $85,000",
        growth_path: "Coordinator → Program Manager → Director → Executive Director",
    },

    // Agriculture and environment
    FieldProfile {
        name: "agriculture",
        category: Category::Business,
        skills: &["crop management", "soil science", "farm equipment", "pest management", "sustainable practices", "business management"],
        certifications: &["Certified Crop Adviser", "Pesticide Applicator License", "Organic Certification"],
        entry_roles: &["Farm Hand", "Agricultural Technician", "Farm Manager"],
        salary_range: "$30,000 - $70,000",
        growth_path: "Farm Hand → Farm Manager → Agricultural Manager → Farm Owner",
    },
    FieldProfile {
        name: "forestry",
        category: Category::Healthcare,
        skills: &["forest management", "silviculture", "GIS", "wildlife management", "conservation", "timber assessment"],
        certifications: &["Certified Forester", "GIS Certification", "Wildlife Certifications"],
        entry_roles: &["Forestry Technician", "Forest Ranger", "Junior Forester"],
        salary_range: "$40,000 - $75,000",
        growth_path: "Technician → Forester → Senior Forester → Forest Manager",
    },

    // Sports and fitness
    FieldProfile {
        name: "personal training",
        category: Category::Healthcare,
        skills: &["exercise science", "program design", "nutrition basics", "motivation", "client assessment", "injury prevention"],
        certifications: &["NASM CPT", "ACE", "NSCA CSCS", "First Aid/CPR"],
        entry_roles: &["Personal Trainer", "Fitness Coach", "Group Fitness Instructor"],
        salary_range: "$30,000 - $70,000",
        growth_path: "Trainer → Senior Trainer → Fitness Director → Gym Owner",
    },
    FieldProfile {
        name: "sports management",
        category: Category::Business,
        skills: &["event management", "marketing", "budgeting", "facility management", "contract negotiation", "public relations"],
        certifications: &["Sports Management Degree", "Event Management Certification"],
        entry_roles: &["Sports Coordinator", "Facility Manager", "Marketing Coordinator"],
        salary_range: "$35,000 - $80,000",
        growth_path: "Coordinator → Manager → Director → General Manager",
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_field_names_are_unique_and_lowercase() {
        let names: HashSet<&str> = FIELD_PROFILES.iter().map(|p| p.name).collect();
        assert_eq!(names.len(), FIELD_PROFILES.len());
        assert!(FIELD_PROFILES.iter().all(|p| p.name == p.name.to_lowercase()));
        assert!(FIELD_PROFILES.len() >= 70);
    }

    #[test]
    fn test_every_profile_is_populated() {
        for profile in FIELD_PROFILES {
            assert!(!profile.skills.is_empty(), "{} has no skills", profile.name);
            assert!(!profile.certifications.is_empty(), "{} has no certifications", profile.name);
            assert!(!profile.entry_roles.is_empty(), "{} has no entry roles", profile.name);
            assert!(profile.salary_range.starts_with('$'), "{} salary", profile.name);
        }
    }

    #[test]
    fn test_field_profile_lookup() {
        let profile = field_profile("cybersecurity").unwrap();
        assert_eq!(profile.category, Category::Tech);
        assert!(profile.certifications.contains(&"CISSP"));
        assert!(field_profile("astrology").is_none());
    }

    #[test]
    fn test_mention_checks_skills_and_roles() {
        let nursing = field_profile("nursing").unwrap();
        assert!(nursing.is_mentioned_in("i love patient care"));
        assert!(nursing.is_mentioned_in("how do i become a staff nurse"));
        assert!(!nursing.is_mentioned_in("hello"));
    }

    #[test]
    fn test_keyword_table_order() {
        let order: Vec<KeywordBucket> = KEYWORD_TABLE.iter().map(|(bucket, _)| *bucket).collect();
        assert_eq!(order.first(), Some(&KeywordBucket::Tech));
        assert_eq!(order.last(), Some(&KeywordBucket::General));
        assert_eq!(KeywordBucket::Education.category(), Category::Business);
    }
}
