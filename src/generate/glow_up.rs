//! Glow-Up Journey: a before-and-after roadmap through the niche.

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
        topic: format!("Glow-Up Journey Sprint: {angle} roadmap start-to-finish"),
        virality: format!(
            "Before-after storytelling {platform} par watch time beast mode leta hai, aur \
             transformation narratives {goal} me trust inject karte hain."
        ),
        titles: [
            format!("{angle} 30-day glow-up plan (Day 0 to hero)"),
            format!("POV: Tum {angle} start kar rahe ho — yeh turbo guide follow karo"),
            format!("{angle} roadmap jo creators secretly follow karte hain"),
        ],
        hooks: [
            format!(
                "Ye 5-step map tumhe zero se viral {angle} creator bana dega — bina burnout ke."
            ),
            format!(
                "Scroll mat karo, ye hi woh template hai jo top {angle} channels use karte hain."
            ),
            format!("{audience} ke liye fastest {angle} momentum hack yahin hai."),
        ],
        scripts: [
            script(
                "Hero Timeline",
                "0-5 seconds: throwback clip drop karo, text overlay \"Week 1 vs Week 4\" with \
                 trending sound."
                    .to_string(),
                "Narrative ko day buckets me break karo. Har bucket me ek actionable micro-task \
                 mention karo + \"proof of progress\" idea attach karo. Finale me CTA teaser: \
                 \"Full toolkit comment me.\""
                    .to_string(),
                "Full roadmap PDF chahiye? \"MAP\" comment karo aur auto-DM bot tumhe bhej dega."
                    .to_string(),
            ),
            script(
                "Checklist Carousel",
                "Use rapid carousel edits: har point par big bold keyword + you acting it out."
                    .to_string(),
                "Voiceover me do line hook, phir each phase explain with 6-7 second micro story. \
                 Bridge scenes add karo showing roadblocks."
                    .to_string(),
                "Jo bhi step tum kal try kar rahe ho, comments me drop karo — best reply ko \
                 personal video response milega."
                    .to_string(),
            ),
            script(
                "Community POV",
                format!("Open with DM screenshot style: \"Bro, main {angle} start kaise karu?\""),
                "Q&A narration karo, audience angle highlight karo, har solution ke baad show \
                 karo kitna time lagta hai aur kya resource chahiye."
                    .to_string(),
                "Iss template ko friend ko send karo jo stuck hai — team effort se glow-up jaldi \
                 aata hai."
                    .to_string(),
            ),
        ],
        visuals: strings([
            "Progress bar overlay updating through the video",
            "Photo dump montage + kinetic captions for each milestone",
            "Google Calendar style shots to visualise schedule commitment",
        ]),
        voiceover: [
            "Conversational Hinglish with aspirational upswing, maintain warm tone".to_string(),
            "Light background groove + subtle riser before each phase".to_string(),
            format!(
                "End sentence me confident whisper + beat drop for retention hook — delivery ka \
                 vibe {vibe} jaisa rakho"
            ),
        ],
        tags: [
            format!("{angle} roadmap"),
            format!("{angle} transformation"),
            format!("{niche} glow up"),
        ],
        hashtags: strings(["#glowuptemplate", "#dayzerochallenge", "#buildinpublic"]),
        posting: [
            slot(
                "Drop 1",
                "Tuesday 8:30 PM IST",
                "Prime binge slot for aspirational content, high completion.",
            ),
            slot(
                "Drop 2",
                "Thursday 12:45 PM IST",
                "Lunch break aspirational scroll, great for saves.",
            ),
            slot(
                "Drop 3",
                "Sunday 9:15 PM IST",
                "Sunday reset vibe — planning mode audience ready to commit.",
            ),
        ],
        automation: [
            step(
                "Trend mining",
                "vidIQ Trend Alerts",
                "Set niche keywords, fetch top-performing Shorts headings daily.",
            ),
            step(
                "Storyboard wizard",
                "Gamma.app",
                "Prompt ke through auto-create slide storyboards for each phase, export to notion.",
            ),
            step(
                "Scheduling",
                "Hootsuite + Zapier",
                "Zap configure karo: Notion status = \"Approved\" -> auto schedule to \
                 Shorts/Reels/TikTok.",
            ),
        ],
    }
}
