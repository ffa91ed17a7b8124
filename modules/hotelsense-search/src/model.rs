use ai_client::TextModel;
use anyhow::{bail, Result};
use async_trait::async_trait;

/// Stand-in when no generative model is configured. Every call fails, which
/// sends callers down their fallback path.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnavailableModel;

#[async_trait]
impl TextModel for UnavailableModel {
    async fn generate(&self, _prompt: &str, _temperature: f32) -> Result<String> {
        bail!("no generative model configured")
    }
}
