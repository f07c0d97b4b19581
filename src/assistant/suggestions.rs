use crate::upstream::{ChatMessage, Role};

pub const SUGGEST_MAX_TOKENS: u32 = 200;

pub const DEFAULT_CATEGORY: &str = "Other";

const FALLBACKS: [(&str, &str); 7] = [
    (
        "Web Development",
        "For a successful web project, keep these points in mind:
- Define your target audience and conversion goals clearly
- Think about scalability from the start
- Prioritize load speed and SEO
- Consider the integrations you need (payments, CRM, analytics)",
    ),
    (
        "Mobile App",
        "For your mobile app, consider:
- Will it be native (iOS/Android) or cross-platform?
- Define the MVP (minimum viable product) to launch quickly
- Plan monetization from the design stage
- Plan the update cycle",
    ),
    (
        "Artificial Intelligence",
        "To bring AI into your project:
- Identify which processes can be automated
- Decide whether you need custom models or existing APIs
- Consider data quality and privacy
- Plan human review of the results",
    ),
    (
        "Cybersecurity",
        "To strengthen your security:
- Start with a risk assessment
- Prioritize protecting sensitive data
- Implement strong authentication (MFA)
- Plan periodic audits and incident response",
    ),
    (
        "Custom Software",
        "For custom software:
- Document every current process to be digitized
- Prioritize features by business impact
- Plan the migration of existing data
- Consider training for your team",
    ),
    (
        "Consulting",
        "For an effective consultation:
- Prepare documentation of your current infrastructure
- List the main pain points of the business
- Define clear success metrics
- Keep time available for joint working sessions",
    ),
    (
        DEFAULT_CATEGORY,
        "For special projects:
- Describe the problem to solve in as much detail as possible
- Point to references or examples of similar solutions
- Define an approximate budget and timeline
- Mention any technical or business constraints",
    ),
];

/// Static advice for `project_type`; unknown categories get the generic entry.
pub fn fallback_suggestion(project_type: &str) -> &'static str {
    let lookup = |category: &str| {
        FALLBACKS
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(category))
            .map(|(_, text)| *text)
    };
    lookup(project_type.trim())
        .or_else(|| lookup(DEFAULT_CATEGORY))
        .unwrap_or_default()
}

/// Prompt asking the model for a 3-4 line preparation tip.
pub fn suggestion_messages(project_type: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::new(
            Role::System,
            format!(
                "You are a senior software development consultant with 12 years of experience.
Your job is to give a short suggestion (3-4 lines at most) that helps a potential client \
prepare their \"{project_type}\" project.
Be concise, professional and useful. Do not use emojis."
            ),
        ),
        ChatMessage::new(
            Role::User,
            format!(
                "Give me a short suggestion for someone starting a {project_type} project. \
What should they consider before getting in touch?"
            ),
        ),
    ]
}
