//! Tag and hashtag pools, plus the text helpers the templates share.
//!
//! Every plan's tag list is its own archetype tags followed by the shared
//! pool built here, merged with [`unique_merge`].

use std::collections::HashSet;

/// Longest token a niche is reduced to.
const MAX_TOKEN_LEN: usize = 24;

/// Token used when the niche has nothing taggable in it.
const FALLBACK_TOKEN: &str = "creator";

/// Title-case each space-separated word.
///
/// Runs of spaces are kept as-is: splitting on a single space leaves empty
/// words, which come back out unchanged.
pub fn title_case(value: &str) -> String {
    value.split(' ').map(capitalize).collect::<Vec<_>>().join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Reduce a niche to a lowercase `a-z0-9` token that starts with a letter.
///
/// At most 24 characters. Falls back to `"creator"` when nothing survives.
pub fn sanitize_for_tag(value: &str) -> String {
    let token: String = value
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .skip_while(|c| !c.is_ascii_lowercase())
        .take(MAX_TOKEN_LEN)
        .collect();

    if token.is_empty() {
        FALLBACK_TOKEN.to_string()
    } else {
        token
    }
}

/// The shared tag pool for a niche.
pub fn build_tags(niche: &str) -> Vec<String> {
    let base = sanitize_for_tag(niche);
    vec![
        format!("{base} tips"),
        format!("{base} strategy"),
        format!("{base} content"),
        "yt automation".to_string(),
        "short form growth".to_string(),
    ]
}

/// The shared hashtag pool for a niche on a platform.
pub fn build_hashtags(niche: &str, platform: &str) -> Vec<String> {
    let base = sanitize_for_tag(niche);
    vec![
        format!("#{base}"),
        format!("#{base}tips"),
        "#contentgrowth".to_string(),
        "#shortform".to_string(),
        platform_tag(platform).to_string(),
        "#creatorhustle".to_string(),
    ]
}

/// Pick the platform hashtag by case-insensitive substring match.
///
/// YouTube is checked before Instagram. Anything else, including an empty
/// or unknown platform, gets `#tiktok`.
pub fn platform_tag(platform: &str) -> &'static str {
    let platform = platform.to_lowercase();
    if platform.contains("youtube") {
        "#ytshorts"
    } else if platform.contains("instagram") {
        "#reels"
    } else {
        "#tiktok"
    }
}

/// Concatenate `primary` then `secondary`, trimming each entry and keeping
/// only the first entry per case-insensitive key.
///
/// Blank entries are dropped. Surviving entries keep their original casing
/// and encounter order.
pub fn unique_merge(primary: &[impl AsRef<str>], secondary: &[impl AsRef<str>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    let entries = primary
        .iter()
        .map(|s| s.as_ref())
        .chain(secondary.iter().map(|s| s.as_ref()));

    for entry in entries {
        let trimmed = entry.trim();
        if trimmed.is_empty() {
            continue;
        }
        if seen.insert(trimmed.to_lowercase()) {
            merged.push(trimmed.to_string());
        }
    }

    merged
}
