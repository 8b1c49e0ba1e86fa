//! Wire types for the chat-completions endpoint.
//!
//! Only the fields the swarm reads or writes are modelled; everything else in
//! the response body is ignored.

use serde::{Deserialize, Serialize};

/// Request body for `POST {base_url}/chat/completions`
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: [ChatMessage<'a>; 2],
    pub max_tokens: u32,
    pub temperature: f32,
}

#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage<'a> {
    pub role: &'static str,
    pub content: &'a str,
}

impl<'a> ChatCompletionRequest<'a> {
    /// System prompt followed by the user message
    pub fn new(
        model: &'a str,
        system_prompt: &'a str,
        user_message: &'a str,
        max_tokens: u32,
        temperature: f32,
    ) -> Self {
        Self {
            model,
            messages: [
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_message,
                },
            ],
            max_tokens,
            temperature,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionResponse {
    /// Text of the first choice, if any
    pub fn into_first_content(self) -> Option<String> {
        self.choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_shape() {
        let req = ChatCompletionRequest::new("google/gemini-2.5-flash", "sys", "hi", 600, 0.5);
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            json!({
                "model": "google/gemini-2.5-flash",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "hi"}
                ],
                "max_tokens": 600,
                "temperature": 0.5
            })
        );
    }

    #[test]
    fn test_first_content() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({
            "id": "x",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "first"}},
                {"index": 1, "message": {"role": "assistant", "content": "second"}}
            ]
        }))
        .unwrap();
        assert_eq!(resp.into_first_content().as_deref(), Some("first"));
    }

    #[test]
    fn test_no_choices() {
        let resp: ChatCompletionResponse = serde_json::from_value(json!({"id": "x"})).unwrap();
        assert!(resp.into_first_content().is_none());
    }
}
