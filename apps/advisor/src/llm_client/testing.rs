//! In-memory oracle for unit tests. Replies with a fixed script and records
//! every prompt it receives.

use std::sync::Mutex;

use async_trait::async_trait;

use super::{GenerationOptions, LlmError, TextOracle};

#[derive(Debug, Clone)]
pub struct RecordedCall {
    pub model: String,
    pub prompt: String,
    pub options: GenerationOptions,
}

enum Script {
    Reply(String),
    Fail { status: u16, message: String },
}

pub struct ScriptedOracle {
    script: Script,
    calls: Mutex<Vec<RecordedCall>>,
}

impl ScriptedOracle {
    pub fn replying(text: impl Into<String>) -> Self {
        Self {
            script: Script::Reply(text.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing(status: u16, message: impl Into<String>) -> Self {
        Self {
            script: Script::Fail {
                status,
                message: message.into(),
            },
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// The prompt of the only call made. Panics unless exactly one call happened.
    pub fn single_prompt(&self) -> String {
        let calls = self.calls();
        assert_eq!(calls.len(), 1, "expected exactly one oracle call");
        calls[0].prompt.clone()
    }
}

#[async_trait]
impl TextOracle for ScriptedOracle {
    async fn generate(
        &self,
        model: &str,
        prompt: &str,
        options: &GenerationOptions,
    ) -> Result<String, LlmError> {
        self.calls.lock().unwrap().push(RecordedCall {
            model: model.to_string(),
            prompt: prompt.to_string(),
            options: *options,
        });
        match &self.script {
            Script::Reply(text) => Ok(text.clone()),
            Script::Fail { status, message } => Err(LlmError::Api {
                status: *status,
                message: message.clone(),
            }),
        }
    }
}
