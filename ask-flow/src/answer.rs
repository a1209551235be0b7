use serde::{Deserialize, Serialize};

use crate::query::PromptStrategy;

/// Body of `POST /api/v1/ask`. Built from a trimmed draft at submission
/// time; the service owns everything past this boundary.
#[derive(Debug, Clone, Serialize)]
pub struct AskRequest {
    pub question: String,
    pub prompt_type: PromptStrategy,
    pub use_memory: bool,
}

/// A cited document the service used to ground its answer, with an optional
/// page range. Invariant: a missing `page_start` implies a missing
/// `page_end`; [`Answer::normalized`] enforces this at the decode boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    #[serde(rename = "source")]
    pub document: String,
    #[serde(default)]
    pub page_start: Option<u32>,
    #[serde(default)]
    pub page_end: Option<u32>,
}

/// A successful answer. Produced only by the remote service, immutable once
/// received, and replaced wholesale by the next successful submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Answer {
    #[serde(rename = "answer")]
    pub text: String,
    #[serde(default)]
    pub sources: Vec<Source>,
    #[serde(default)]
    pub conversation_id: Option<String>,
}

impl Answer {
    /// Drop any `page_end` that arrived without a `page_start`.
    pub(crate) fn normalized(mut self) -> Self {
        for source in &mut self.sources {
            if source.page_start.is_none() {
                source.page_end = None;
            }
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_with_wire_field_names() {
        let request = AskRequest {
            question: "¿Cómo tratar una herida sangrante?".to_string(),
            prompt_type: PromptStrategy::FewShot,
            use_memory: false,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "question": "¿Cómo tratar una herida sangrante?",
                "prompt_type": "few_shot",
                "use_memory": false,
            })
        );
    }

    #[test]
    fn answer_tolerates_missing_sources_and_conversation_id() {
        let answer: Answer = serde_json::from_str(r#"{"answer":"ok"}"#).unwrap();
        assert_eq!(answer.text, "ok");
        assert!(answer.sources.is_empty());
        assert!(answer.conversation_id.is_none());
    }

    #[test]
    fn normalization_drops_orphaned_page_end() {
        let answer: Answer = serde_json::from_str(
            r#"{"answer":"ok","sources":[{"source":"guia.pdf","page_start":null,"page_end":9}]}"#,
        )
        .unwrap();
        let answer = answer.normalized();
        assert!(answer.sources[0].page_end.is_none());
    }
}
