use anyhow::Result;
use async_trait::async_trait;
use std::sync::Arc;

// =============================================================================
// TextModel Trait
// =============================================================================

/// A single-shot prompt-in, text-out generative model.
///
/// Implementations return the raw text of the first candidate. Callers are
/// responsible for pulling structured data out of it.
#[async_trait]
pub trait TextModel: Send + Sync {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String>;
}

#[async_trait]
impl<T: TextModel + ?Sized> TextModel for Arc<T> {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        (**self).generate(prompt, temperature).await
    }
}

#[async_trait]
impl<T: TextModel + ?Sized> TextModel for Box<T> {
    async fn generate(&self, prompt: &str, temperature: f32) -> Result<String> {
        (**self).generate(prompt, temperature).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    #[async_trait]
    impl TextModel for Echo {
        async fn generate(&self, prompt: &str, _temperature: f32) -> Result<String> {
            Ok(prompt.to_string())
        }
    }

    #[tokio::test]
    async fn arc_forwards_to_inner_model() {
        let model: Arc<dyn TextModel> = Arc::new(Echo);
        assert_eq!(model.generate("hi", 0.0).await.unwrap(), "hi");
    }
}
