use serde::{Deserialize, Serialize};

/// The prompting technique the service should use to construct its answer.
/// The set is closed; the service rejects anything outside it, so selection
/// is expressed at the type level rather than as a free string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptStrategy {
    #[default]
    Default,
    FewShot,
    ChainOfThought,
    Structured,
    Direct,
    AntiHallucination,
    React,
    LeastToMost,
}

impl PromptStrategy {
    pub const ALL: [PromptStrategy; 8] = [
        PromptStrategy::Default,
        PromptStrategy::FewShot,
        PromptStrategy::ChainOfThought,
        PromptStrategy::Structured,
        PromptStrategy::Direct,
        PromptStrategy::AntiHallucination,
        PromptStrategy::React,
        PromptStrategy::LeastToMost,
    ];

    /// Wire value sent as `prompt_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            PromptStrategy::Default => "default",
            PromptStrategy::FewShot => "few_shot",
            PromptStrategy::ChainOfThought => "chain_of_thought",
            PromptStrategy::Structured => "structured",
            PromptStrategy::Direct => "direct",
            PromptStrategy::AntiHallucination => "anti_hallucination",
            PromptStrategy::React => "react",
            PromptStrategy::LeastToMost => "least_to_most",
        }
    }

    /// Human label as the original option list shows it.
    pub fn label(self) -> &'static str {
        match self {
            PromptStrategy::Default => "Default",
            PromptStrategy::FewShot => "Few-Shot",
            PromptStrategy::ChainOfThought => "Chain-of-Thought",
            PromptStrategy::Structured => "Structured",
            PromptStrategy::Direct => "Direct",
            PromptStrategy::AntiHallucination => "Anti-Hallucination",
            PromptStrategy::React => "ReAct",
            PromptStrategy::LeastToMost => "Least-to-Most",
        }
    }

    /// Look up a wire value. `None` for anything outside the closed set.
    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.as_str() == value)
    }
}

/// The question being composed, together with how it should be asked.
/// Mutated freely by the user until submission, at which point a trimmed
/// snapshot is taken.
#[derive(Debug, Clone)]
pub struct Query {
    pub text: String,
    pub strategy: PromptStrategy,
    pub use_memory: bool,
}

impl Default for Query {
    fn default() -> Self {
        Self {
            text: String::new(),
            strategy: PromptStrategy::Default,
            // conversational memory is on unless the user opts out
            use_memory: true,
        }
    }
}

impl Query {
    pub fn trimmed_text(&self) -> &str {
        self.text.trim()
    }

    /// Whether the draft can be submitted at all (whitespace-only questions
    /// are refused locally, never sent).
    pub fn is_submittable(&self) -> bool {
        !self.trimmed_text().is_empty()
    }
}
