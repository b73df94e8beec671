//! The fixed system prompt prepended to every remote completion call.
//! Regenerated from the resume snapshot on each request; never taken from
//! caller-supplied history.

use crate::models::resume::Resume;

pub const SYSTEM_PROMPT_TEMPLATE: &str = "You are an AI assistant for a personal portfolio \
website. Your role is to help visitors learn about the person described in the resume \
provided below.

You should:
- Answer questions about the person's skills, experience, education, and projects
- Be friendly, professional, and concise
- If you don't know something, admit it honestly
- Use the resume information to provide accurate responses

Resume Data:
{resume_json}

Always respond in a helpful and conversational manner. If the user asks about something \
not in the resume, be honest that you can only answer questions about what's in the resume.";

/// Builds the system prompt from the current resume snapshot.
pub fn build_system_prompt(resume: &Resume) -> String {
    SYSTEM_PROMPT_TEMPLATE.replace("{resume_json}", &resume.to_prompt_text())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume;

    #[test]
    fn test_system_prompt_embeds_resume_json() {
        let prompt = build_system_prompt(&resume::profile());
        assert!(prompt.contains("\"name\": \"Jakka Chenchu Prasad\""));
        assert!(!prompt.contains("{resume_json}"));
    }

    #[test]
    fn test_system_prompt_is_deterministic() {
        let resume = resume::profile();
        assert_eq!(build_system_prompt(&resume), build_system_prompt(&resume));
    }
}
