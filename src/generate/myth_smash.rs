//! Myth Smash: rapid-fire myth busting around the niche.

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
        topic: format!("Flash Myth Smash: {angle} facts tumhare feed ke liye ready"),
        virality: format!(
            "Rapid-fire myth busting {platform} par insane retention deta hai: comment wars ignite, \
             curiosity loop set hota hai, aur {goal} ko push karta hai."
        ),
        titles: [
            format!("{angle} myths jo tum maanta tha — ab khatam!"),
            format!("1 Minute me {angle}: sach vs hype"),
            format!("{angle} ke 3 sach jo kisi ne on-cam nahi bola"),
        ],
        hooks: [
            "Pehla myth tum definitely believe karte ho... aur wahi tumhe peeche kheench raha hai."
                .to_string(),
            format!(
                "Agar tum {audience} ho to ye 60-second truth bomb tumhari growth double karega."
            ),
            format!("Camera on karo: chalo ek viral {angle} reality check karte hain."),
        ],
        scripts: [
            script(
                "Explosive Debunk",
                format!(
                    "Cold open: \"Myth: {angle} me ye hi chal raha hai... WRONG!\" Quick cuts me \
                     teen myths smash karo visual receipts ke saath. Each beat me ek hooky stat \
                     drop karo."
                ),
                format!(
                    "Intro punchy rakho: \"Sun, {audience}, ye 3 myths tum swarg samajh rahe the \
                     par channel ko rok rahe hain.\" Har myth ke liye side-by-side proof shot \
                     dikhao, phir CTA: \"Agar ye expose pasand aaya to agle reel me aur kara rahe \
                     hain.\" Loop close karo teaser ke saath."
                ),
                "Comment me batao kaunsa myth tum abhi tak follow kar rahe the, main next drop \
                 usko upgrade banaunga."
                    .to_string(),
            ),
            script(
                "Side-by-Side Reveal",
                "Screen split: left side \"Myth Shortcut\", right side \"Reality Hack\". Ek timer \
                 overlay se urgency build karo."
                    .to_string(),
                format!(
                    "Storyline: har myth break ke baad instantly show karo kya replace kare. \
                     Voiceover me friendly but authoritative tone rakho taaki vibe {vibe} feel ho."
                ),
                "Save karo isko aur DM share karo apne creator dost ko — hum sab milke myths \
                 khatam karte hain."
                    .to_string(),
            ),
            script(
                "Challenge Flip",
                "Hook karo \"Try this live abhi\": audience ko prompt do comment me proof dalne ka."
                    .to_string(),
                "Script me on-screen text + captions use karo. Finale me mashup karo viewers ki \
                 reaction clips compile karne ka promise."
                    .to_string(),
                "Jo sabse zyada savage myth drop karega, usko main next video me shoutout dunga."
                    .to_string(),
            ),
        ],
        visuals: strings([
            "B-roll of fast headline screenshots + green screen pointing for myth reveal",
            "Kinetic typography overlays highlighting TRUE / CAP",
            "Countdown timer animation to keep pace tight",
        ]),
        voiceover: strings([
            "Snappy Hinglish delivery: 120-140 wpm, micro-pauses post revelation",
            "Layer ek subtle bass boost + light distortion for hype energy",
            "End me vocal rise plus signature sound sting for brand recall",
        ]),
        tags: [
            format!("{angle} myths"),
            format!("{angle} truth"),
            format!("viral {niche} shorts"),
        ],
        hashtags: strings(["#viralmyths", "#factcheckshorts", "#learnin60"]),
        posting: [
            slot(
                "Drop 1",
                "Monday 7:45 PM IST",
                "Commute ke baad doomscroll window — retention spikes for hot takes.",
            ),
            slot(
                "Drop 2",
                "Wednesday 1:05 PM IST",
                "Lunch break crowd comment fights accelerate.",
            ),
            slot(
                "Drop 3",
                "Saturday 11:30 AM IST",
                "Weekend creators research mode me hote hain — saves shoot up.",
            ),
        ],
        automation: [
            step(
                "Research sweep",
                "perplexity.ai",
                "Trending myth queries dump karo aur 3 bullet summaries auto-generate karo.",
            ),
            step(
                "Script polishing",
                "Notion AI + ElevenLabs",
                "Script template paste karo, Notion AI se Hinglish tighten karo, phir voice clone \
                 me export.",
            ),
            step(
                "Publishing & clips",
                "opus.pro",
                "Long form recording ko drop karo, auto-caption + vertical crops ready lo, \
                 schedule to Shorts/IG.",
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
            niche: "street food".to_string(),
            audience: "foodies".to_string(),
            platform: "TikTok".to_string(),
            goal: "Lead generation launch".to_string(),
            vibe: "Smart but chill coach".to_string(),
        };
        let seed = seed(&SeedInput::from_form(&form));

        assert_eq!(
            seed.titles[0],
            "Street Food myths jo tum maanta tha — ab khatam!"
        );
        assert_eq!(
            seed.virality,
            "Rapid-fire myth busting TikTok par insane retention deta hai: comment wars ignite, \
             curiosity loop set hota hai, aur lead generation launch ko push karta hai."
        );
        assert_eq!(
            seed.scripts[0].short,
            "Cold open: \"Myth: Street Food me ye hi chal raha hai... WRONG!\" Quick cuts me teen \
             myths smash karo visual receipts ke saath. Each beat me ek hooky stat drop karo."
        );
        assert!(seed.scripts[0].long.starts_with("Intro punchy rakho: \"Sun, foodies, ye 3 myths"));
        assert!(seed.scripts[1].long.ends_with("taaki vibe smart but chill coach feel ho."));
        assert_eq!(seed.tags[2], "viral street food shorts");
    }

    #[test]
    fn schedule_and_tools_are_fixed() {
        let form = FormState::default();
        let seed = seed(&SeedInput::from_form(&form));

        let windows: Vec<&str> = seed.posting.iter().map(|s| s.window.as_str()).collect();
        assert_eq!(
            windows,
            [
                "Monday 7:45 PM IST",
                "Wednesday 1:05 PM IST",
                "Saturday 11:30 AM IST"
            ]
        );
        let tools: Vec<&str> = seed.automation.iter().map(|s| s.tool.as_str()).collect();
        assert_eq!(tools, ["perplexity.ai", "Notion AI + ElevenLabs", "opus.pro"]);
    }
}
