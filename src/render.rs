//! Plain-text rendering of plans as box-drawn trees.
//!
//! Output is meant for a monospace display and is never wrapped.

use crate::model::Plan;

/// Separator between rendered plans.
const PLAN_SEPARATOR: &str = "\n\n";

/// Render one plan as a tree.
///
/// The first line is `Variation <id>`; every section is a `├─` branch,
/// and every line inside a section is prefixed with `│  `.
/// There is no trailing newline.
pub fn to_block(plan: &Plan) -> String {
    let mut lines = Vec::new();

    lines.push(format!("Variation {}", plan.id));
    lines.push(format!("├─ Topic / Idea: {}", plan.topic));
    lines.push(format!("├─ Virality Potential: {}", plan.virality));

    lines.push("├─ Titles:".to_string());
    push_numbered(&mut lines, &plan.titles);

    lines.push("├─ Hook:".to_string());
    push_numbered(&mut lines, &plan.hooks);

    lines.push("├─ Script:".to_string());
    for (n, script) in (1..).zip(&plan.scripts) {
        lines.push(format!("│  Variation {n} — {}", script.label));
        lines.push(format!("│    • Short-form: {}", script.short));
        lines.push(format!("│    • Long-form: {}", script.long));
        lines.push(format!("│    • CTA: {}", script.cta));
    }

    lines.push("├─ Visual Plan:".to_string());
    push_numbered(&mut lines, &plan.visuals);

    lines.push("├─ Voiceover:".to_string());
    push_numbered(&mut lines, &plan.voiceover);

    lines.push("├─ Tags + Hashtags:".to_string());
    lines.push(format!("│  Tags: {}", plan.tags.join(", ")));
    lines.push(format!("│  Hashtags: {}", plan.hashtags.join(" ")));

    lines.push("├─ Posting Strategy:".to_string());
    for slot in &plan.posting {
        lines.push(format!("│  {}: {} — {}", slot.label, slot.window, slot.reason));
    }

    lines.push("├─ Tools for automation:".to_string());
    for step in &plan.automation {
        lines.push(format!("│  {}: {} → {}", step.step, step.tool, step.how));
    }

    lines.join("\n")
}

/// Render every plan, separated by a blank line.
pub fn render_plans(plans: &[Plan]) -> String {
    plans
        .iter()
        .map(to_block)
        .collect::<Vec<_>>()
        .join(PLAN_SEPARATOR)
}

fn push_numbered(lines: &mut Vec<String>, items: &[String]) {
    for (n, item) in (1..).zip(items) {
        lines.push(format!("│  {n}. {item}"));
    }
}
