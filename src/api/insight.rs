use serde_json::Value;

/// Field names the AI endpoints have been observed to answer with, in the
/// order they win when several are present.
const FIELD_PRIORITY: [&str; 5] = ["answer", "insight", "message", "content", "response"];

/// Decoded AI-insight body. The upstream response shape is not contractually
/// fixed, so the decode is a priority scan over known text fields with an
/// explicit fallback branch instead of a rigid schema.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsightPayload {
    /// A known field carried non-empty text.
    Text { field: &'static str, text: String },
    /// No known field matched; the raw body, stringified.
    Unstructured(String),
}

impl InsightPayload {
    pub fn decode(body: &Value) -> Self {
        for field in FIELD_PRIORITY {
            if let Some(text) = body.get(field).and_then(Value::as_str) {
                if !text.trim().is_empty() {
                    return InsightPayload::Text {
                        field,
                        text: text.to_string(),
                    };
                }
            }
        }
        InsightPayload::Unstructured(body.to_string())
    }

    pub fn into_text(self) -> String {
        match self {
            InsightPayload::Text { text, .. } => text,
            InsightPayload::Unstructured(raw) => raw,
        }
    }
}
