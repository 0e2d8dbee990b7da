use crate::{Error, Result, config::AwsConfig};
use async_trait::async_trait;
use aws_sdk_bedrockruntime::{
    Client,
    config::Credentials,
    error::DisplayErrorContext,
    types::{ContentBlock, ConversationRole, Message},
};
use tracing::debug;

/// Invokes a named remote model with a text prompt.
#[async_trait]
pub trait InferenceClient: Send + Sync {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String>;
}

pub struct BedrockClient {
    client: Client,
}

impl BedrockClient {
    /// Builds a Bedrock runtime client from a static credential pair.
    ///
    /// Fails with a configuration error when the region or either key is empty.
    pub async fn new(config: &AwsConfig) -> Result<Self> {
        validate(config)?;

        let credentials = Credentials::new(
            config.access_key_id.clone(),
            config.secret_access_key.clone(),
            config.session_token.clone(),
            None,
            "prompt-gateway",
        );

        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(aws_config::Region::new(config.region.clone()))
            .credentials_provider(credentials)
            .load()
            .await;

        debug!("Created Bedrock client for region {}", config.region);

        Ok(Self {
            client: Client::new(&sdk_config),
        })
    }
}

fn validate(config: &AwsConfig) -> Result<()> {
    let missing: Vec<&str> = [
        ("AWS_REGION", config.region.as_str()),
        ("AWS_ACCESS_KEY_ID", config.access_key_id.as_str()),
        ("AWS_SECRET_ACCESS_KEY", config.secret_access_key.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(Error::config(format!(
            "Missing required settings: {}",
            missing.join(", ")
        )))
    }
}

#[async_trait]
impl InferenceClient for BedrockClient {
    async fn invoke(&self, prompt: &str, model: &str) -> Result<String> {
        debug!("Invoking model {} with {} byte prompt", model, prompt.len());

        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| Error::inference(e.to_string()))?;

        let output = self
            .client
            .converse()
            .model_id(model)
            .messages(message)
            .send()
            .await
            .map_err(|e| Error::inference(DisplayErrorContext(&e).to_string()))?;

        let text = output
            .output()
            .and_then(|o| o.as_message().ok())
            .map(reply_text)
            .unwrap_or_default();

        debug!("Model {} returned {} bytes", model, text.len());

        Ok(text)
    }
}

/// Concatenates the text blocks of a model reply; non-text blocks are skipped.
fn reply_text(message: &Message) -> String {
    message
        .content()
        .iter()
        .filter_map(|block| block.as_text().ok())
        .map(String::as_str)
        .collect()
}
