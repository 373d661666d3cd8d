use crate::error::TransformError;

use super::wire::ChatResponse;

/// Pulls the first candidate's text out of a raw response body.
pub fn interpret_response(body: &str) -> Result<String, TransformError> {
    let resp: ChatResponse = serde_json::from_str(body).map_err(|e| TransformError::Decode {
        message: e.to_string(),
        body: body.to_string(),
    })?;

    if let Some(msg) = resp.error.and_then(|e| e.message) {
        if !msg.is_empty() {
            return Err(TransformError::Api(msg));
        }
    }

    let first = resp
        .choices
        .unwrap_or_default()
        .into_iter()
        .next()
        .ok_or_else(|| TransformError::NoChoices {
            body: body.to_string(),
        })?;

    Ok(first.message.and_then(|m| m.content).unwrap_or_default())
}
