//! Plan generation: form state in, three finished plans out.
//!
//! Each archetype is a fixed narrative template that fills in the niche,
//! audience, platform, goal, and vibe. The orchestrator runs every
//! archetype in order, then merges the shared tag and hashtag pools into
//! each result.
//!
//! Generation is total and pure: any form state yields exactly three plans,
//! and identical input yields identical output.

mod glow_up;
mod myth_smash;
mod smart_stack;

use log::debug;

use crate::model::{AutomationStep, FormState, Plan, PostingSlot, ScriptVariation};
use crate::tags::{build_hashtags, build_tags, title_case, unique_merge};

/// The fixed narrative templates, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Archetype {
    /// Rapid-fire myth busting.
    MythSmash,

    /// Before-and-after transformation roadmap.
    GlowUp,

    /// AI tool-stack explainer.
    SmartStack,
}

impl Archetype {
    /// Every archetype, in the order plans are numbered.
    pub const ALL: [Self; 3] = [Self::MythSmash, Self::GlowUp, Self::SmartStack];

    /// Display name of the archetype.
    pub fn name(self) -> &'static str {
        match self {
            Self::MythSmash => "Myth Smash",
            Self::GlowUp => "Glow-Up Journey",
            Self::SmartStack => "Smart Stack Breakdown",
        }
    }

    /// Build this archetype's seed from normalized inputs.
    pub fn seed(self, input: &SeedInput<'_>) -> PlanSeed {
        match self {
            Self::MythSmash => myth_smash::seed(input),
            Self::GlowUp => glow_up::seed(input),
            Self::SmartStack => smart_stack::seed(input),
        }
    }
}

/// Normalized inputs shared by every archetype.
#[derive(Debug, Clone)]
pub struct SeedInput<'a> {
    /// Trimmed niche, as typed.
    pub niche: &'a str,

    /// Title-cased niche.
    pub angle: String,

    /// Trimmed audience, with the fallback applied.
    pub audience: &'a str,
    pub platform: &'a str,

    /// Lowercased goal.
    pub goal: String,

    /// Lowercased vibe.
    pub vibe: String,
}

impl<'a> SeedInput<'a> {
    pub fn from_form(form: &'a FormState) -> Self {
        let niche = form.clean_niche();
        Self {
            niche,
            angle: title_case(niche),
            audience: form.clean_audience(),
            platform: &form.platform,
            goal: form.goal.to_lowercase(),
            vibe: form.vibe.to_lowercase(),
        }
    }
}

/// One archetype's content before the shared pools are merged in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanSeed {
    pub topic: String,
    pub virality: String,
    pub titles: [String; 3],
    pub hooks: [String; 3],
    pub scripts: [ScriptVariation; 3],
    pub visuals: [String; 3],
    pub voiceover: [String; 3],
    pub tags: [String; 3],
    pub hashtags: [String; 3],
    pub posting: [PostingSlot; 3],
    pub automation: [AutomationStep; 3],
}

/// Generate the three plans for a form, numbered 1 to 3 in archetype order.
pub fn generate_plans(form: &FormState) -> Vec<Plan> {
    let input = SeedInput::from_form(form);
    let tag_pool = build_tags(input.niche);
    let hashtag_pool = build_hashtags(input.niche, input.platform);

    debug!(
        "generating plans for niche {:?}, audience {:?}, platform {:?}",
        input.niche, input.audience, input.platform
    );

    (1..)
        .zip(Archetype::ALL)
        .map(|(id, archetype)| {
            let seed = archetype.seed(&input);
            debug!("seeded plan {id} from {}", archetype.name());
            Plan {
                id,
                topic: seed.topic,
                virality: seed.virality,
                titles: seed.titles,
                hooks: seed.hooks,
                scripts: seed.scripts,
                visuals: seed.visuals,
                voiceover: seed.voiceover,
                tags: unique_merge(&seed.tags, &tag_pool),
                hashtags: unique_merge(&seed.hashtags, &hashtag_pool),
                posting: seed.posting,
                automation: seed.automation,
            }
        })
        .collect()
}

fn script(label: &str, short: String, long: String, cta: String) -> ScriptVariation {
    ScriptVariation {
        label: label.to_string(),
        short,
        long,
        cta,
    }
}

fn slot(label: &str, window: &str, reason: &str) -> PostingSlot {
    PostingSlot {
        label: label.to_string(),
        window: window.to_string(),
        reason: reason.to_string(),
    }
}

fn step(step: &str, tool: &str, how: &str) -> AutomationStep {
    AutomationStep {
        step: step.to_string(),
        tool: tool.to_string(),
        how: how.to_string(),
    }
}

fn strings(values: [&str; 3]) -> [String; 3] {
    values.map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fitness_form() -> FormState {
        FormState {
            niche: "fitness".to_string(),
            audience: String::new(),
            platform: "YouTube Shorts".to_string(),
            goal: "Explosive channel growth".to_string(),
            vibe: "High-energy storyteller".to_string(),
        }
    }

    #[test]
    fn generates_three_plans_in_order() {
        let plans = generate_plans(&fitness_form());
        let ids: Vec<u32> = plans.iter().map(|p| p.id).collect();
        assert_eq!(ids, [1, 2, 3]);
        assert!(plans[0].topic.starts_with("Flash Myth Smash"));
        assert!(plans[1].topic.starts_with("Glow-Up Journey Sprint"));
        assert!(plans[2].topic.starts_with("Smart Stack Breakdown"));
    }

    #[test]
    fn generation_is_idempotent() {
        let form = fitness_form();
        assert_eq!(generate_plans(&form), generate_plans(&form));
    }

    #[test]
    fn fitness_end_to_end() {
        let form = fitness_form();
        let input = SeedInput::from_form(&form);
        assert_eq!(input.audience, "fresh eyeballs");

        let plans = generate_plans(&form);
        let first = &plans[0];
        assert_eq!(
            first.topic,
            "Flash Myth Smash: Fitness facts tumhare feed ke liye ready"
        );
        assert_eq!(
            first.hashtags,
            [
                "#viralmyths",
                "#factcheckshorts",
                "#learnin60",
                "#fitness",
                "#fitnesstips",
                "#contentgrowth",
                "#shortform",
                "#ytshorts",
                "#creatorhustle",
            ]
        );
        assert_eq!(
            first.hooks[1],
            "Agar tum fresh eyeballs ho to ye 60-second truth bomb tumhari growth double karega."
        );
        assert!(first.virality.contains("explosive channel growth"));
        assert!(first.scripts[1].long.contains("vibe high-energy storyteller feel ho"));
    }

    #[test]
    fn seed_tags_come_before_pool() {
        let plans = generate_plans(&fitness_form());
        assert_eq!(
            plans[1].tags,
            [
                "Fitness roadmap",
                "Fitness transformation",
                "fitness glow up",
                "fitness tips",
                "fitness strategy",
                "fitness content",
                "yt automation",
                "short form growth",
            ]
        );
    }

    #[test]
    fn pool_entries_colliding_with_seed_are_dropped() {
        // "viral myths" sanitizes to "viralmyths", so the pool's "#viralmyths"
        // collides with the myth-smash seed's own hashtag.
        let form = FormState {
            niche: "Viral Myths".to_string(),
            platform: "TikTok".to_string(),
            ..FormState::default()
        };
        let plans = generate_plans(&form);
        assert_eq!(
            plans[0].hashtags,
            [
                "#viralmyths",
                "#factcheckshorts",
                "#learnin60",
                "#viralmythstips",
                "#contentgrowth",
                "#shortform",
                "#tiktok",
                "#creatorhustle",
            ]
        );
        // The other archetypes don't collide and keep the whole pool.
        assert_eq!(plans[1].hashtags.len(), 9);
        assert_eq!(plans[2].hashtags.len(), 9);
    }

    #[test]
    fn blank_fields_still_produce_plans() {
        let form = FormState {
            niche: String::new(),
            audience: String::new(),
            platform: String::new(),
            goal: String::new(),
            vibe: String::new(),
        };
        let plans = generate_plans(&form);
        assert_eq!(plans.len(), 3);
        assert_eq!(
            plans[0].topic,
            "Flash Myth Smash:  facts tumhare feed ke liye ready"
        );
        assert!(plans[0].hashtags.iter().any(|h| h == "#creator"));
        assert!(plans[0].hashtags.iter().any(|h| h == "#tiktok"));
    }

    #[test]
    fn audience_is_trimmed_into_hooks() {
        let form = FormState {
            niche: "street food".to_string(),
            audience: "  college students ".to_string(),
            ..FormState::default()
        };
        let plans = generate_plans(&form);
        assert_eq!(
            plans[1].hooks[2],
            "college students ke liye fastest Street Food momentum hack yahin hai."
        );
        assert!(plans[2].tags.iter().any(|t| t == "street food workflow"));
    }

    #[test]
    fn archetype_order_and_names() {
        let names: Vec<&str> = Archetype::ALL.iter().map(|a| a.name()).collect();
        assert_eq!(
            names,
            ["Myth Smash", "Glow-Up Journey", "Smart Stack Breakdown"]
        );
    }
}
