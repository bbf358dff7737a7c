//! Form inputs: the five fields a plan is generated from.

use serde::{Deserialize, Serialize};

/// Platforms offered by the platform selector.
pub const PLATFORMS: [&str; 3] = ["YouTube Shorts", "Instagram Reels", "TikTok"];

/// Goals offered by the goal selector.
pub const GOALS: [&str; 3] = [
    "Explosive channel growth",
    "Lead generation launch",
    "Community authority build",
];

/// Creator vibes offered by the vibe selector.
pub const VIBES: [&str; 3] = [
    "High-energy storyteller",
    "Relatable friend next door",
    "Smart but chill coach",
];

/// Audience used when none is given.
pub const FALLBACK_AUDIENCE: &str = "fresh eyeballs";

/// The current form values.
///
/// Platform, goal, and vibe are nominally drawn from [`PLATFORMS`],
/// [`GOALS`], and [`VIBES`], but any string is accepted. Off-catalog
/// values are interpolated verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormState {
    pub niche: String,
    pub audience: String,
    pub platform: String,
    pub goal: String,
    pub vibe: String,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            niche: String::new(),
            audience: String::new(),
            platform: PLATFORMS[0].to_string(),
            goal: GOALS[0].to_string(),
            vibe: VIBES[0].to_string(),
        }
    }
}

impl FormState {
    /// Whether the form may be submitted: the trimmed niche must be
    /// longer than one character.
    pub fn can_submit(&self) -> bool {
        self.niche.trim().chars().count() > 1
    }

    /// The trimmed niche.
    pub fn clean_niche(&self) -> &str {
        self.niche.trim()
    }

    /// The trimmed audience, or [`FALLBACK_AUDIENCE`] when blank.
    pub fn clean_audience(&self) -> &str {
        match self.audience.trim() {
            "" => FALLBACK_AUDIENCE,
            audience => audience,
        }
    }
}

/// Whether `value` is one of the catalog entries.
pub fn in_catalog(catalog: &[&str], value: &str) -> bool {
    catalog.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(niche: &str, audience: &str) -> FormState {
        FormState {
            niche: niche.to_string(),
            audience: audience.to_string(),
            ..FormState::default()
        }
    }

    #[test]
    fn default_selects_first_of_each_catalog() {
        let state = FormState::default();
        assert_eq!(state.platform, "YouTube Shorts");
        assert_eq!(state.goal, "Explosive channel growth");
        assert_eq!(state.vibe, "High-energy storyteller");
        assert!(state.niche.is_empty());
        assert!(state.audience.is_empty());
    }

    #[test]
    fn submission_requires_more_than_one_character() {
        let cases = [
            ("", false),
            ("   ", false),
            ("a", false),
            ("  a  ", false),
            ("ai", true),
            (" fitness ", true),
            ("é", false),
            ("éé", true),
        ];
        for (niche, expected) in cases {
            assert_eq!(form(niche, "").can_submit(), expected, "niche {niche:?}");
        }
    }

    #[test]
    fn blank_audience_falls_back() {
        assert_eq!(form("x", "").clean_audience(), "fresh eyeballs");
        assert_eq!(form("x", "   ").clean_audience(), "fresh eyeballs");
        assert_eq!(form("x", " gamers ").clean_audience(), "gamers");
    }

    #[test]
    fn niche_is_trimmed() {
        assert_eq!(form("  street food \n", "").clean_niche(), "street food");
    }

    #[test]
    fn catalog_membership_is_exact() {
        assert!(in_catalog(&PLATFORMS, "TikTok"));
        assert!(!in_catalog(&PLATFORMS, "tiktok"));
        assert!(!in_catalog(&GOALS, ""));
    }
}
