//! Resume aggregate — the immutable profile data every other component reads.
//!
//! Built once at startup and shared behind an `Arc`; nothing mutates it after
//! construction. Skills are an ordered list of categories (not a map) so the
//! serialized form has a stable key order, which keeps the generated system
//! prompt byte-identical across calls.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub period: String,
    pub details: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub category: String,
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub role: String,
    pub company: String,
    pub period: String,
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub name: String,
    pub period: String,
    pub link: String,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resume {
    pub name: String,
    pub title: String,
    pub location: String,
    pub email: String,
    pub phone: String,
    pub linkedin: String,
    pub github: String,
    pub summary: String,
    pub education: Vec<Education>,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub achievements: Vec<String>,
}

impl Resume {
    /// Serializes the full resume for the system prompt. Pretty-printed JSON
    /// in struct-field order, so repeated calls produce identical text.
    pub fn to_prompt_text(&self) -> String {
        serde_json::to_string_pretty(self).expect("resume serialization cannot fail")
    }

    /// All skill names across every category, flattened in declaration order.
    pub fn flattened_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|c| c.items.iter().map(String::as_str))
            .collect()
    }
}

/// The compiled-in profile served by this deployment.
pub fn profile() -> Resume {
    Resume {
        name: "Jakka Chenchu Prasad".to_string(),
        title: "BTECH Undergraduate".to_string(),
        location: "Andhra Pradesh, India".to_string(),
        email: "chenchuprasad72@gmail.com".to_string(),
        phone: "+91 9347774361".to_string(),
        linkedin: "https://www.linkedin.com/in/jakka-prasad/".to_string(),
        github: "https://github.com/PRASADAUCSE".to_string(),
        summary: "I'm a BTECH undergraduate seeking an entry level position to apply my \
                  technical skills and theoretical knowledge in practical scenarios for \
                  contributing innovative solutions and continual learning in the field."
            .to_string(),
        education: vec![
            Education {
                degree: "Bachelor's Degree".to_string(),
                institution: "Andhra University".to_string(),
                period: "2022 - 2026".to_string(),
                details: "CGPA: 8.35".to_string(),
            },
            Education {
                degree: "Intermediate".to_string(),
                institution: "Sri Prakash Junior College".to_string(),
                period: "2020 - 2022".to_string(),
                details: "CGPA: 9".to_string(),
            },
            Education {
                degree: "10th Standard".to_string(),
                institution: "Sri Chaitanya".to_string(),
                period: "2019 - 2020".to_string(),
                details: "CGPA: 10".to_string(),
            },
        ],
        skills: vec![
            SkillCategory {
                category: "Programming".to_string(),
                items: vec!["Java".to_string(), "MySQL".to_string()],
            },
            SkillCategory {
                category: "Web Technologies".to_string(),
                items: vec![
                    "HTML".to_string(),
                    "CSS".to_string(),
                    "JavaScript".to_string(),
                    "Redux".to_string(),
                ],
            },
            SkillCategory {
                category: "Core Competencies".to_string(),
                items: vec!["OS".to_string(), "DBMS".to_string()],
            },
            SkillCategory {
                category: "Tools".to_string(),
                items: vec!["GitHub".to_string(), "VS Code".to_string()],
            },
        ],
        experience: vec![
            Experience {
                role: "Frontend Developer Intern".to_string(),
                company: "Plasmid".to_string(),
                period: "Aug 2024 - Oct 2024".to_string(),
                description: "Worked with a team of four to develop a responsive food \
                              ordering web application using ReactJS and JavaScript, \
                              focusing on features like restaurant listings, menu browsing, \
                              and cart management."
                    .to_string(),
            },
            Experience {
                role: "Teaching Assistant".to_string(),
                company: "Mentiby".to_string(),
                period: "Apr 2025 - Aug 2025".to_string(),
                description: "Served as a teaching assistant responsible for clarifying \
                              complex aptitude concepts and guiding students through \
                              problem-solving techniques to strengthen understanding."
                    .to_string(),
            },
        ],
        projects: vec![
            Project {
                name: "Movies Recommendation System".to_string(),
                period: "Apr 2025 - May 2025".to_string(),
                link: "https://netflix-gpt-dg8x.vercel.app/".to_string(),
                description: "Developed a responsive movie platform with React, delivering \
                              a Netflix-like browsing experience by integrating multiple \
                              APIs and GPT API for intelligent search and personalized \
                              recommendations. Implemented Firebase authentication for \
                              secure user access, managed global state with Redux Toolkit, \
                              and optimized performance through reusable components and \
                              modular code."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Redux Toolkit".to_string(),
                    "Firebase".to_string(),
                    "GPT API".to_string(),
                ],
            },
            Project {
                name: "Wikipedia Search Application".to_string(),
                period: "Dec 2024".to_string(),
                link: "https://prasadwiksearch.ccbp.tech/".to_string(),
                description: "Built a responsive search application using HTML, CSS, \
                              Bootstrap, and JavaScript to deliver curated Wikipedia \
                              results with a clean, adaptive UI. Implemented asynchronous \
                              Fetch API calls for real-time search and enabled seamless \
                              navigation to detailed Wikipedia pages in new tabs."
                    .to_string(),
                technologies: vec![
                    "HTML".to_string(),
                    "CSS".to_string(),
                    "Bootstrap".to_string(),
                    "JavaScript".to_string(),
                    "Fetch API".to_string(),
                ],
            },
            Project {
                name: "Todos Application".to_string(),
                period: "Dec 2024".to_string(),
                link: "https://chenchutodoapp.ccbp.tech/".to_string(),
                description: "Built a responsive todos application using React, HTML, CSS, \
                              and JavaScript to manage tasks with features like task \
                              creation, editing, deletion, and filtering. Implemented \
                              local storage for persistent data management and a clean UI \
                              with intuitive controls."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "HTML".to_string(),
                    "CSS".to_string(),
                    "JavaScript".to_string(),
                    "Local Storage".to_string(),
                ],
            },
            Project {
                name: "AI resume analyzer".to_string(),
                period: "Dec 2024".to_string(),
                link: "https://resume-analyzer-eight-rho.vercel.app/".to_string(),
                description: "Developed a responsive resume analyzer application using \
                              React, Tailwind CSS, and JavaScript to analyze resumes and \
                              provide feedback on strengths and weaknesses. Implemented \
                              local storage for persistent data management and a clean UI \
                              with intuitive controls."
                    .to_string(),
                technologies: vec![
                    "React".to_string(),
                    "Tailwind CSS".to_string(),
                    "JavaScript".to_string(),
                    "Local Storage".to_string(),
                ],
            },
        ],
        achievements: vec![
            "Awarded First Prize at the College's Department Day Hackathon, demonstrating \
             exceptional problem-solving and innovative application of technical skills."
                .to_string(),
        ],
    }
}
