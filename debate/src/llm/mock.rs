//! Mock generator for tests and offline demos.
//!
//! Replies with fixed text or with text computed from the request, records every call,
//! and can be told to fail on a given call to exercise the error path.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::error::GenerationError;
use crate::llm::TextGenerator;

type ReplyFn = Arc<dyn Fn(&str, &[String]) -> String + Send + Sync>;

/// One recorded `generate` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateCall {
    pub system_instruction: String,
    pub user_turns: Vec<String>,
}

/// Mock generator: configurable reply, call log, optional failure.
///
/// **Interaction**: Implements `TextGenerator`; shared by the three handlers in tests
/// so the call log shows the exact order and inputs of every request.
pub struct MockGenerator {
    reply: ReplyFn,
    /// 1-based index of the call that fails with `GenerationError::Provider`.
    fail_on_call: Option<usize>,
    call_count: AtomicUsize,
    calls: Mutex<Vec<GenerateCall>>,
}

impl MockGenerator {
    /// Always replies with `content`.
    pub fn with_reply(content: impl Into<String>) -> Self {
        let content = content.into();
        Self::with_fn(move |_, _| content.clone())
    }

    /// Replies with `f(system_instruction, user_turns)`.
    pub fn with_fn(f: impl Fn(&str, &[String]) -> String + Send + Sync + 'static) -> Self {
        Self {
            reply: Arc::new(f),
            fail_on_call: None,
            call_count: AtomicUsize::new(0),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Replies with the system instruction it was given.
    pub fn echo_instruction() -> Self {
        Self::with_fn(|system, _| system.to_string())
    }

    /// Fail the `n`-th call (1-based) instead of replying. Builder.
    pub fn failing_on_call(mut self, n: usize) -> Self {
        self.fail_on_call = Some(n);
        self
    }

    /// Number of `generate` calls so far, failed ones included.
    pub fn call_count(&self) -> usize {
        self.call_count.load(Ordering::SeqCst)
    }

    /// Snapshot of the recorded calls, in order.
    pub fn calls(&self) -> Vec<GenerateCall> {
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    async fn generate(
        &self,
        system_instruction: &str,
        user_turns: &[String],
    ) -> Result<String, GenerationError> {
        let n = self.call_count.fetch_add(1, Ordering::SeqCst) + 1;
        self.calls
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(GenerateCall {
                system_instruction: system_instruction.to_string(),
                user_turns: user_turns.to_vec(),
            });
        if self.fail_on_call == Some(n) {
            return Err(GenerationError::Provider(format!(
                "mock failure on call {}",
                n
            )));
        }
        Ok((self.reply)(system_instruction, user_turns))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn with_reply_ignores_input() {
        let g = MockGenerator::with_reply("fixed");
        assert_eq!(g.generate("a", &[]).await.unwrap(), "fixed");
        assert_eq!(g.generate("b", &["x".into()]).await.unwrap(), "fixed");
        assert_eq!(g.call_count(), 2);
    }

    #[tokio::test]
    async fn records_calls_in_order() {
        let g = MockGenerator::echo_instruction();
        g.generate("first", &["t1".into()]).await.unwrap();
        g.generate("second", &["t2".into(), "t3".into()]).await.unwrap();
        let calls = g.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].system_instruction, "first");
        assert_eq!(calls[1].user_turns, vec!["t2".to_string(), "t3".to_string()]);
    }

    /// **Scenario**: Only the configured call fails; earlier and later calls succeed.
    #[tokio::test]
    async fn failing_on_call_fails_only_that_call() {
        let g = MockGenerator::echo_instruction().failing_on_call(2);
        assert!(g.generate("one", &[]).await.is_ok());
        let err = g.generate("two", &[]).await.unwrap_err();
        assert!(matches!(err, GenerationError::Provider(_)));
        assert!(g.generate("three", &[]).await.is_ok());
        assert_eq!(g.call_count(), 3);
    }
}
