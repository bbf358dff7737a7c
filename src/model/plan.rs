//! Plan types: one generated content blueprint.

use serde::{Deserialize, Serialize};

/// One complete generated content blueprint.
///
/// Created whole by the generator and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Plan {
    /// 1-based position in the generated list.
    pub id: u32,
    pub topic: String,

    /// Why this format should travel.
    pub virality: String,
    pub titles: [String; 3],
    pub hooks: [String; 3],
    pub scripts: [ScriptVariation; 3],
    pub visuals: [String; 3],
    pub voiceover: [String; 3],

    /// Deduplicated case-insensitively, first occurrence wins.
    pub tags: Vec<String>,

    /// Deduplicated case-insensitively, first occurrence wins.
    pub hashtags: Vec<String>,
    pub posting: [PostingSlot; 3],
    pub automation: [AutomationStep; 3],
}

/// A labeled creative-script variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScriptVariation {
    pub label: String,
    pub short: String,
    pub long: String,
    pub cta: String,
}

/// A recommended publish time and why.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingSlot {
    pub label: String,
    pub window: String,
    pub reason: String,
}

/// A workflow stage, the tool suggested for it, and how to use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomationStep {
    pub step: String,
    pub tool: String,
    pub how: String,
}
