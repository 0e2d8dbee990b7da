use async_trait::async_trait;
use prompt_gateway::{Error, Result, inference::InferenceClient};
use std::sync::{Arc, Mutex};

/// Recorded arguments of one `invoke` call.
#[derive(Debug, Clone, PartialEq)]
pub struct Invocation {
    pub prompt: String,
    pub model: String,
}

/// Stub inference client with a canned reply or error.
#[derive(Debug)]
pub struct MockInferenceClient {
    pub reply: String,
    pub error: Option<String>,
    pub invocations: Arc<Mutex<Vec<Invocation>>>,
}

impl MockInferenceClient {
    pub fn new(reply: impl Into<String>) -> Self {
        Self {
            reply: reply.into(),
            error: None,
            invocations: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_error(mut self, error: impl Into<String>) -> Self {
        self.error = Some(error.into());
        self
    }

    pub fn get_invocations(&self) -> Vec<Invocation> {
        self.invocations.lock().unwrap().clone()
    }
}

#[async_trait]
impl InferenceClient for MockInferenceClient {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String> {
        self.invocations.lock().unwrap().push(Invocation {
            prompt: prompt.to_string(),
            model: model.to_string(),
        });

        if let Some(ref error) = self.error {
            return Err(Error::inference(error.clone()));
        }

        Ok(self.reply.clone())
    }
}
