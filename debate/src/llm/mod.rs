//! Text generator boundary used by the role handlers.
//!
//! A generator takes one system instruction plus ordered user turns and returns one
//! text, or a [`GenerationError`]. Implementations: [`MockGenerator`] for tests and
//! demos, [`ChatOpenAI`] for the OpenAI Chat Completions API.

mod mock;
mod openai;

use async_trait::async_trait;

use crate::error::GenerationError;

pub use mock::{GenerateCall, MockGenerator};
pub use openai::{ChatOpenAI, DEFAULT_MODEL, DEFAULT_TEMPERATURE};

/// External text generator: system instruction + user turns in, one text out.
///
/// May be slow; must tolerate concurrent calls from independent runs. Must fail with
/// `GenerationError` instead of returning partial output.
///
/// **Interaction**: Called once per handler invocation by the Affirmative, Negative and
/// (second) Judge handlers. Never called by the Judge's first invocation.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(
        &self,
        system_instruction: &str,
        user_turns: &[String],
    ) -> Result<String, GenerationError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct StubGenerator {
        content: String,
    }

    #[async_trait]
    impl TextGenerator for StubGenerator {
        async fn generate(
            &self,
            _system_instruction: &str,
            _user_turns: &[String],
        ) -> Result<String, GenerationError> {
            Ok(self.content.clone())
        }
    }

    #[tokio::test]
    async fn generator_usable_as_shared_trait_object() {
        let inner: Arc<dyn TextGenerator> = Arc::new(StubGenerator {
            content: "hello".to_string(),
        });
        let out = inner.generate("sys", &["u".to_string()]).await.unwrap();
        assert_eq!(out, "hello");
    }
}
