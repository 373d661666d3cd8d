use async_trait::async_trait;

use crate::error::TransformError;

/// Turns raw scanner output into the greybeard's commentary.
#[async_trait]
pub trait TransformPlugin: Send + Sync {
    fn name(&self) -> &str;

    async fn transform(&self, captured: &str) -> Result<String, TransformError>;
}
