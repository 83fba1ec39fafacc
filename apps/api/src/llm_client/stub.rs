//! Scripted `ExtractionBackend` for tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use super::{ExtractionBackend, LlmError};

enum Reply {
    Text(String),
    ApiError(u16),
    Hang,
}

/// Replies are served in call order; once the script runs out every call gets `[]`.
#[derive(Default)]
pub struct StubBackend {
    replies: Mutex<VecDeque<Reply>>,
    prompts: Mutex<Vec<String>>,
    always_fail: bool,
}

impl StubBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// A backend whose every call fails with a 500.
    pub fn failing() -> Self {
        Self {
            always_fail: true,
            ..Self::default()
        }
    }

    pub fn reply(self, text: impl Into<String>) -> Self {
        self.push(Reply::Text(text.into()))
    }

    pub fn reply_error(self, status: u16) -> Self {
        self.push(Reply::ApiError(status))
    }

    /// The next call never completes on its own.
    pub fn reply_hang(self) -> Self {
        self.push(Reply::Hang)
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }

    fn push(self, reply: Reply) -> Self {
        self.replies.lock().unwrap().push_back(reply);
        self
    }
}

#[async_trait]
impl ExtractionBackend for StubBackend {
    async fn complete(&self, prompt: &str, _system: &str) -> Result<String, LlmError> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if self.always_fail {
            return Err(LlmError::Api {
                status: 500,
                message: "stub failure".to_string(),
            });
        }

        let next = self.replies.lock().unwrap().pop_front();
        match next {
            Some(Reply::Text(text)) => Ok(text),
            Some(Reply::ApiError(status)) => Err(LlmError::Api {
                status,
                message: "stub error".to_string(),
            }),
            Some(Reply::Hang) => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Err(LlmError::EmptyContent)
            }
            None => Ok("[]".to_string()),
        }
    }
}
