//! Gemini `generateContent` request and response bodies.

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use super::{FieldType, PromptRequest, SchemaDescriptor};

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentRequest {
    pub contents: Vec<RequestContent>,
    pub system_instruction: RequestContent,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
}

#[derive(Serialize, Debug)]
pub struct RequestContent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<&'static str>,
    pub parts: Vec<RequestPart>,
}

#[derive(Serialize, Debug)]
pub struct RequestPart {
    pub text: String,
}

#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct GenerationConfig {
    pub response_mime_type: &'static str,
    pub response_schema: Value,
}

impl From<&PromptRequest> for GenerateContentRequest {
    fn from(request: &PromptRequest) -> Self {
        Self {
            contents: vec![RequestContent {
                role: Some("user"),
                parts: vec![RequestPart {
                    text: request.user_query.clone(),
                }],
            }],
            system_instruction: RequestContent {
                role: None,
                parts: vec![RequestPart {
                    text: request.system_instruction.clone(),
                }],
            },
            generation_config: request.response_schema.as_ref().map(|schema| GenerationConfig {
                response_mime_type: "application/json",
                response_schema: schema_to_gemini(schema),
            }),
        }
    }
}

/// Render a flat descriptor in Gemini's OpenAPI-subset schema dialect.
pub fn schema_to_gemini(schema: &SchemaDescriptor) -> Value {
    let mut properties = Map::new();
    for field in &schema.fields {
        let mut property = Map::new();
        property.insert("type".into(), json!(gemini_type(field.field_type)));
        if let Some(description) = &field.description {
            property.insert("description".into(), json!(description));
        }
        if let Some(values) = &field.enum_values {
            property.insert("format".into(), json!("enum"));
            property.insert("enum".into(), json!(values));
        }
        properties.insert(field.name.clone(), Value::Object(property));
    }

    json!({
        "type": "OBJECT",
        "properties": properties,
        "required": schema.required(),
        "propertyOrdering": schema.required(),
    })
}

fn gemini_type(field_type: FieldType) -> &'static str {
    match field_type {
        FieldType::String => "STRING",
        FieldType::Number => "NUMBER",
        FieldType::Integer => "INTEGER",
        FieldType::Boolean => "BOOLEAN",
    }
}

#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub prompt_feedback: Option<PromptFeedback>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    #[serde(default)]
    pub content: Option<Content>,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

#[derive(Deserialize, Debug)]
pub struct Content {
    #[serde(default)]
    pub parts: Vec<Part>,
}

#[derive(Deserialize, Debug)]
pub struct Part {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Deserialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    #[serde(default)]
    pub block_reason: Option<String>,
}

impl GenerateContentResponse {
    /// Reason the prompt was refused, if the API says so.
    pub fn block_reason(&self) -> Option<&str> {
        self.prompt_feedback
            .as_ref()
            .and_then(|f| f.block_reason.as_deref())
    }

    pub fn finish_reason(&self) -> Option<&str> {
        self.candidates
            .first()
            .and_then(|c| c.finish_reason.as_deref())
    }

    /// Text of the first candidate, with all its text parts joined.
    pub fn into_text(self) -> Option<String> {
        let candidate = self.candidates.into_iter().next()?;
        let text: String = candidate
            .content?
            .parts
            .into_iter()
            .filter_map(|p| p.text)
            .collect();
        Some(text).filter(|t| !t.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::Feature;

    #[test]
    fn test_text_request_body() {
        let request = PromptRequest::text(
            Feature::FaqSearch,
            "You are helpful.".to_string(),
            "Do you deliver?".to_string(),
        );
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "Do you deliver?");
        assert_eq!(body["systemInstruction"]["parts"][0]["text"], "You are helpful.");
        assert!(body["systemInstruction"].get("role").is_none());
        assert!(body.get("generationConfig").is_none());
    }

    #[test]
    fn test_structured_request_body() {
        let schema = SchemaDescriptor::new()
            .field("projectionText", FieldType::String, "A short projection")
            .field("score", FieldType::Integer, "");
        let request = PromptRequest::structured(
            Feature::Projection,
            "instr".to_string(),
            "query".to_string(),
            schema,
        );
        let body = serde_json::to_value(GenerateContentRequest::from(&request)).unwrap();
        let config = &body["generationConfig"];

        assert_eq!(config["responseMimeType"], "application/json");
        let schema = &config["responseSchema"];
        assert_eq!(schema["type"], "OBJECT");
        assert_eq!(schema["properties"]["projectionText"]["type"], "STRING");
        assert_eq!(
            schema["properties"]["projectionText"]["description"],
            "A short projection"
        );
        assert_eq!(schema["properties"]["score"]["type"], "INTEGER");
        assert!(schema["properties"]["score"].get("description").is_none());
        assert_eq!(schema["required"], json!(["projectionText", "score"]));
    }

    #[test]
    fn test_response_text_joins_parts() {
        let raw = r#"{
            "candidates": [{
                "content": {"role": "model", "parts": [{"text": "[LUNCH]|Pasta"}, {"text": "|Good carbs."}]},
                "finishReason": "STOP"
            }]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.into_text().unwrap(), "[LUNCH]|Pasta|Good carbs.");
    }

    #[test]
    fn test_blocked_response_has_no_text() {
        let raw = r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.block_reason(), Some("SAFETY"));
        assert!(response.into_text().is_none());
    }

    #[test]
    fn test_enum_field_is_closed_in_schema() {
        let schema = SchemaDescriptor::new().enum_field(
            "recommendedPlan",
            "Plan to recommend",
            &["Weekly Warrior", "Monthly Motivator"],
        );
        let value = schema_to_gemini(&schema);
        let property = &value["properties"]["recommendedPlan"];

        assert_eq!(property["type"], "STRING");
        assert_eq!(property["format"], "enum");
        assert_eq!(property["enum"], json!(["Weekly Warrior", "Monthly Motivator"]));
        assert_eq!(value["required"], json!(["recommendedPlan"]));
    }

    #[test]
    fn test_plain_field_has_no_enum() {
        let schema = SchemaDescriptor::new().field("projectionText", FieldType::String, "x");
        let value = schema_to_gemini(&schema);
        assert!(value["properties"]["projectionText"].get("enum").is_none());
        assert!(value["properties"]["projectionText"].get("format").is_none());
    }

    #[test]
    fn test_candidate_without_content() {
        let raw = r#"{"candidates": [{"finishReason": "MAX_TOKENS"}]}"#;
        let response: GenerateContentResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(response.finish_reason(), Some("MAX_TOKENS"));
        assert!(response.into_text().is_none());
    }
}
