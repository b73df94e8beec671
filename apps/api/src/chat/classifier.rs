//! Keyword Classifier — maps a free-text message to one of nine fixed topics
//! and renders a deterministic templated reply from resume data.
//!
//! Classification is a linear scan over `TOPIC_KEYWORDS` in priority order;
//! the first topic with any keyword present in the lowercased message wins.
//! The order is a semantic contract: a message containing both a skills word
//! and a projects word is always `Skills`. Keep the order as data — do not
//! reorder or "fix" the overlap between the sets.

use crate::models::resume::Resume;

/// How many projects the projects reply lists.
const MAX_PROJECTS_IN_REPLY: usize = 2;
/// How many description characters each listed project keeps.
const PROJECT_DESCRIPTION_CHARS: usize = 100;

/// The nine fixed classification topics, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topic {
    Skills,
    Projects,
    Experience,
    Education,
    Identity,
    Contact,
    Achievements,
    Greeting,
    Unknown,
}

/// Priority-ordered (topic, trigger keywords) table. First match wins.
const TOPIC_KEYWORDS: &[(Topic, &[&str])] = &[
    (
        Topic::Skills,
        &[
            "skill",
            "technology",
            "tech",
            "programming",
            "know",
            "proficient",
            "language",
        ],
    ),
    (
        Topic::Projects,
        &["project", "portfolio", "work", "built", "developed", "created"],
    ),
    (
        Topic::Experience,
        &["experience", "internship", "job", "work", "position", "role"],
    ),
    (
        Topic::Education,
        &["education", "degree", "university", "study", "school", "college"],
    ),
    (
        Topic::Identity,
        &["who", "about", "tell me", "yourself", "name", "introduce"],
    ),
    (
        Topic::Contact,
        &["contact", "email", "phone", "reach", "connect", "linkedin", "github"],
    ),
    (
        Topic::Achievements,
        &["achievement", "award", "accomplishment", "prize"],
    ),
    (
        Topic::Greeting,
        &["hello", "hi", "hey", "help", "what can", "what do"],
    ),
];

/// Classifies a message into a topic by first-match substring scan.
pub fn classify(message: &str) -> Topic {
    let message_lower = message.to_lowercase();

    for (topic, keywords) in TOPIC_KEYWORDS {
        if keywords.iter().any(|kw| message_lower.contains(kw)) {
            return *topic;
        }
    }

    Topic::Unknown
}

/// Renders the canonical reply for a topic from resume data.
///
/// `message` is only used by `Topic::Unknown`, which echoes the original
/// (non-lowercased) text back to the user.
pub fn render(topic: Topic, message: &str, resume: &Resume) -> String {
    match topic {
        Topic::Skills => {
            let skills = resume.flattened_skills();
            format!(
                "I'm skilled in: {}. I specialize in various programming languages, \
                 web technologies, and tools for full-stack development.",
                skills.join(", ")
            )
        }
        Topic::Projects => {
            if resume.projects.is_empty() {
                return "I have several projects showcasing my development skills!".to_string();
            }
            resume
                .projects
                .iter()
                .take(MAX_PROJECTS_IN_REPLY)
                .map(|p| {
                    format!(
                        "{} - {}...",
                        p.name,
                        truncate_chars(&p.description, PROJECT_DESCRIPTION_CHARS)
                    )
                })
                .collect::<Vec<_>>()
                .join("\n")
        }
        Topic::Experience => {
            if resume.experience.is_empty() {
                return "I have hands-on experience in web development and building \
                        applications."
                    .to_string();
            }
            let mut text = String::from("I have experience as:\n");
            for e in &resume.experience {
                text.push_str(&format!(
                    "- {} at {} ({}): {}\n",
                    e.role, e.company, e.period, e.description
                ));
            }
            text
        }
        Topic::Education => {
            if resume.education.is_empty() {
                return "I'm a BTECH undergraduate with a strong foundation in computer \
                        science."
                    .to_string();
            }
            let mut text = String::from("My education:\n");
            for e in &resume.education {
                text.push_str(&format!(
                    "- {} at {} ({})\n",
                    e.degree, e.institution, e.period
                ));
            }
            text
        }
        Topic::Identity => format!("Hi! I'm {}. {}", resume.name, resume.summary),
        Topic::Contact => format!(
            "You can reach me at:\n- Email: {}\n- Phone: {}\n- LinkedIn: {}\n- GitHub: {}",
            or_na(&resume.email),
            or_na(&resume.phone),
            or_na(&resume.linkedin),
            or_na(&resume.github)
        ),
        Topic::Achievements => {
            if resume.achievements.is_empty() {
                return "I'm proud of my academic and professional accomplishments."
                    .to_string();
            }
            format!("My achievements:\n- {}", resume.achievements.join("\n- "))
        }
        Topic::Greeting => "Hello! I'm an AI assistant on this portfolio. I can tell you \
                            about my background, skills, experience, projects, education, \
                            and achievements. What would you like to know?"
            .to_string(),
        Topic::Unknown => format!(
            "That's an interesting question! While I may not have a specific answer \
             about '{message}', I can tell you about my background, skills, experience, \
             projects, and education. Feel free to ask about any of those topics!"
        ),
    }
}

/// First `max` characters of `s`, respecting char boundaries.
fn truncate_chars(s: &str, max: usize) -> String {
    s.chars().take(max).collect()
}

/// Blank contact fields render as "N/A".
fn or_na(field: &str) -> &str {
    if field.trim().is_empty() {
        "N/A"
    } else {
        field
    }
}
