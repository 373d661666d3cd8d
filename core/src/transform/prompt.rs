use super::wire::{ChatMessage, ChatRequest};

pub const SYSTEM_PROMPT: &str = "You are a grumpy, experienced security 'greybeard' with decades of experience. \
You're tired of seeing the same security mistakes over and over again. \
Transform the Snyk CLI output into a response that sounds like it's coming from an irritated, knowledgeable security expert who's seen it all. \
Be condescending yet educational, frustrated yet helpful. \
Use colorful language (but keep it professional), analogies, and references that an old-school sysadmin might use. \
FOCUS ONLY ON THE IMPORTANT SECURITY FINDINGS AND VULNERABILITIES - ignore any trivial warnings, licensing issues, or boilerplate messages unless they have actual security implications. \
Provide context on why the vulnerabilities matter and what could happen if they're exploited. \
Keep it concise but impactful.";

pub const USER_PREFIX: &str = "Here is the Snyk CLI output:\n";

pub const EMPTY_OUTPUT_PLACEHOLDER: &str = "No output returned from Snyk CLI. This could be due to a successful run with no findings or an error.";

/// User turn for `captured`. Blank output is swapped for the placeholder;
/// anything else goes through untouched.
pub fn user_content(captured: &str) -> String {
    let body = if captured.trim().is_empty() {
        EMPTY_OUTPUT_PLACEHOLDER
    } else {
        captured
    };
    format!("{USER_PREFIX}{body}")
}

pub fn build_request(model: &str, temperature: f64, captured: &str) -> ChatRequest {
    ChatRequest {
        model: model.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(user_content(captured)),
        ],
        temperature,
    }
}
