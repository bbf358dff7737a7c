//! Output formatting for CLI display.

use crate::model::{FormState, GOALS, PLATFORMS, VIBES};

use super::OutputFormat;

/// List every catalog, marking the current default of each with `*`.
pub(super) fn format_options(defaults: &FormState) -> String {
    [
        ("Platforms", PLATFORMS, defaults.platform.as_str()),
        ("Goals", GOALS, defaults.goal.as_str()),
        ("Vibes", VIBES, defaults.vibe.as_str()),
    ]
    .iter()
    .map(|(heading, catalog, current)| format_catalog(heading, catalog, current))
    .collect::<Vec<_>>()
    .join("\n\n")
}

fn format_catalog(heading: &str, catalog: &[&str], current: &str) -> String {
    let mut lines = vec![format!("{heading}:")];
    for option in catalog {
        let marker = if *option == current { '*' } else { ' ' };
        lines.push(format!("  {marker} {option}"));
    }
    lines.join("\n")
}

/// Short human-readable description of what was generated.
pub(super) fn describe_output(form: &FormState, format: OutputFormat) -> String {
    let format = match format {
        OutputFormat::Text => "text",
        OutputFormat::Json => "JSON",
    };
    format!(
        "3 plans for \"{}\" on {} [{format}]",
        form.clean_niche(),
        form.platform
    )
}
