mod prompt;
mod response;
mod traits;
mod wire;

pub use prompt::{build_request, user_content, EMPTY_OUTPUT_PLACEHOLDER, SYSTEM_PROMPT, USER_PREFIX};
pub use response::interpret_response;
pub use traits::TransformPlugin;
pub use wire::{ApiErrorBody, ChatChoice, ChatMessage, ChatRequest, ChatResponse, ResponseMessage};
