//! Smart Stack Breakdown: the AI tool stack behind the niche.

use super::{PlanSeed, SeedInput, script, slot, step, strings};

pub(super) fn seed(input: &SeedInput<'_>) -> PlanSeed {
    let SeedInput {
        niche,
        angle,
        audience,
        platform,
        goal,
        vibe,
    } = input;

    PlanSeed {
        topic: format!("Smart Stack Breakdown: AI tools jo {angle} ko autopilot pe daal de"),
        virality: format!(
            "People love tool stacks: swipe-friendly explainer format {platform} algorithm ko \
             signal deta hai ki ye shareable knowledge bomb hai, aur {goal} ke liye trust anchor \
             build hota hai."
        ),
        titles: [
            format!("{angle} ke liye mere top 3 AI copilots"),
            format!("Iss stack se tum 5x fast {angle} content banaoge"),
            format!("{angle} ops ka full automation layout"),
        ],
        hooks: [
            format!(
                "Ye trio tumhare {angle} workflow se editing stress hatayega — ab sirf shoot karo \
                 aur drop karo."
            ),
            format!(
                "Imagine karo {audience}: tum so rahe ho aur ye stack tumhara channel grow kar \
                 raha hai."
            ),
            format!(
                "Main jo backend use karta hoon {angle} ke liye, woh sab reveal kar raha hoon — \
                 steal it."
            ),
        ],
        scripts: [
            script(
                "Stack Spotlight",
                "Countdown format use karo: 3...2...1... har AI tool ke liye 5-second demo clip."
                    .to_string(),
                "Narration me pain point → tool → instantly measurable win structure rakho. \
                 Screen recording snippets overlay karo."
                    .to_string(),
                "Ye stack ka Notion template free chahiye? \"STACK\" comment karo, auto-DM \
                 trigger hai."
                    .to_string(),
            ),
            script(
                "Workflow Flythrough",
                "Start with kanban board shot, arrows animate showing automation flow.".to_string(),
                "Each step me \"If This → Tool handles\" format explain karo. Show quick macro of \
                 you reviewing final cut sip of coffee."
                    .to_string(),
                "Iss automation ko plug karne ke liye 10-minute loom walkthrough telegram channel \
                 me drop kar raha hoon — join link bio me."
                    .to_string(),
            ),
            script(
                "Cost Breakdown",
                "Hook: \"Pure stack cost? ₹0 se ₹2999 tak.\"".to_string(),
                "Bullet levels me teenager, starter, pro tiers explain karo. Screen text me tool \
                 logos + price flashes."
                    .to_string(),
                "Comment me apna budget likho, main tumhare liye custom combo recommend karunga."
                    .to_string(),
            ),
        ],
        visuals: strings([
            "Overhead desk shots with colourful sticky UI callouts",
            "Dynamic screen recordings with zoom cuts synced to beat",
            "Animated flowchart transitions (Use Canva / Figma smart animate)",
        ]),
        voiceover: [
            "Confident but chill tone, emphasise tool names with mini pauses".to_string(),
            "Add glitch swoosh SFX between tool reveals for dopamine hits".to_string(),
            format!(
                "Outro me quick recap chant: \"Shoot. Drop. Scale.\" remixed with beat tag — \
                 voice delivery {vibe} flavour me rakho"
            ),
        ],
        tags: [
            format!("{angle} ai tools"),
            format!("{niche} workflow"),
            "creator automation stack".to_string(),
        ],
        hashtags: strings(["#aitoolbox", "#creatoreconomy", "#nocodeautomation"]),
        posting: [
            slot(
                "Drop 1",
                "Monday 11:50 AM IST",
                "B2B style productivity slot — tool hunters active.",
            ),
            slot(
                "Drop 2",
                "Friday 9:20 PM IST",
                "Weekend planning energy — best for checklists.",
            ),
            slot(
                "Drop 3",
                "Sunday 4:40 PM IST",
                "Sunday systems setup window, high DM conversions.",
            ),
        ],
        automation: [
            step(
                "Outline autogen",
                "PromptLayer + GPT-4o mini",
                "Preset prompt create karo jisme niche inject karo; output ko auto-sync karo \
                 Google Docs me.",
            ),
            step(
                "Voiceover synth",
                "ElevenLabs + Descript",
                "Script paste karo, instant Hinglish voiceover export, Descript me filler clean \
                 karo.",
            ),
            step(
                "Asset sync",
                "make.com",
                "Drive folder drop = auto push to Canva template + Notion status update.",
            ),
        ],
    }
}

#[cfg(test)]
mod tests {
    use crate::model::FormState;

    use super::*;

    #[test]
    fn interpolates_every_field() {
        let form = FormState {
            niche: "personal FINANCE".to_string(),
            audience: "first jobbers".to_string(),
            platform: "YouTube Shorts".to_string(),
            goal: "Explosive channel growth".to_string(),
            vibe: "High-energy storyteller".to_string(),
        };
        let seed = seed(&SeedInput::from_form(&form));

        assert_eq!(
            seed.topic,
            "Smart Stack Breakdown: AI tools jo Personal Finance ko autopilot pe daal de"
        );
        assert_eq!(
            seed.hooks[1],
            "Imagine karo first jobbers: tum so rahe ho aur ye stack tumhara channel grow kar raha hai."
        );
        assert!(seed.virality.contains("YouTube Shorts algorithm ko signal deta hai"));
        assert!(seed.virality.contains("aur explosive channel growth ke liye trust anchor"));
        assert!(seed.voiceover[2].ends_with("voice delivery high-energy storyteller flavour me rakho"));
        assert_eq!(
            seed.tags,
            [
                "Personal Finance ai tools",
                "personal FINANCE workflow",
                "creator automation stack",
            ]
        );
    }

    #[test]
    fn cost_breakdown_keeps_rupee_prices() {
        let form = FormState::default();
        let seed = seed(&SeedInput::from_form(&form));
        assert_eq!(seed.scripts[2].label, "Cost Breakdown");
        assert_eq!(seed.scripts[2].short, "Hook: \"Pure stack cost? ₹0 se ₹2999 tak.\"");
    }
}
