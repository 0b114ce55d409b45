//! Common types and UI state structures

use crate::constants::PROFILE;
use rand::Rng;

/// Which screen the window is currently showing
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum Screen {
    #[default]
    Card,
    Dice,
}

/// External contact platform represented by a toggle on the card
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    WhatsApp,
    GitHub,
    LinkedIn,
}

impl Platform {
    /// Display order of the toggle row
    pub const ALL: [Platform; 3] = [Platform::WhatsApp, Platform::GitHub, Platform::LinkedIn];

    pub fn label(self) -> &'static str {
        match self {
            Platform::WhatsApp => "WhatsApp",
            Platform::GitHub => "GitHub",
            Platform::LinkedIn => "LinkedIn",
        }
    }

    /// Phosphor glyph used both on the toggle and on the code panel
    pub fn icon(self) -> &'static str {
        match self {
            Platform::WhatsApp => egui_phosphor::regular::WHATSAPP_LOGO,
            Platform::GitHub => egui_phosphor::regular::GITHUB_LOGO,
            Platform::LinkedIn => egui_phosphor::regular::LINKEDIN_LOGO,
        }
    }

    /// The profile's contact entry for this platform
    pub fn contact(self) -> &'static str {
        match self {
            Platform::WhatsApp => PROFILE.phone,
            Platform::GitHub => PROFILE.github,
            Platform::LinkedIn => PROFILE.linkedin,
        }
    }
}

/// What the middle stage of the card shows
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Stage {
    Avatar,
    Code(Platform),
}

/// Card screen state: which platform's code is on display, if any.
/// Clicking a toggle selects its platform; clicking the active toggle
/// again clears the selection back to the avatar.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct CardState {
    pub selection: Option<Platform>,
}

impl CardState {
    /// Apply a click on `platform`'s contact toggle
    pub fn toggle(&mut self, platform: Platform) {
        self.selection = if self.selection == Some(platform) {
            None
        } else {
            Some(platform)
        };
    }

    pub fn is_active(&self, platform: Platform) -> bool {
        self.selection == Some(platform)
    }

    /// Middle-stage content for the current selection
    pub fn stage(&self) -> Stage {
        match self.selection {
            None => Stage::Avatar,
            Some(platform) => Stage::Code(platform),
        }
    }
}

/// Die face value, always in 1..=6
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct DiceValue(u8);

impl DiceValue {
    /// Draw a new value uniformly from 1..=6
    pub fn roll(rng: &mut impl Rng) -> Self {
        Self(rng.gen_range(1..=6))
    }

    pub fn get(self) -> u8 {
        self.0
    }

    /// Phosphor die-face glyph for this value
    pub fn face_glyph(self) -> &'static str {
        match self.0 {
            1 => egui_phosphor::regular::DICE_ONE,
            2 => egui_phosphor::regular::DICE_TWO,
            3 => egui_phosphor::regular::DICE_THREE,
            4 => egui_phosphor::regular::DICE_FOUR,
            5 => egui_phosphor::regular::DICE_FIVE,
            _ => egui_phosphor::regular::DICE_SIX,
        }
    }
}

impl Default for DiceValue {
    fn default() -> Self {
        Self(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn initial_state_defaults() {
        assert_eq!(CardState::default().selection, None);
        assert_eq!(DiceValue::default().get(), 1);
        assert_eq!(Screen::default(), Screen::Card);
    }

    #[test]
    fn toggle_selects_then_deselects() {
        for platform in Platform::ALL {
            let mut card = CardState::default();
            card.toggle(platform);
            assert_eq!(card.selection, Some(platform));
            card.toggle(platform);
            assert_eq!(card.selection, None);
        }
    }

    #[test]
    fn toggle_switches_platforms_directly() {
        for a in Platform::ALL {
            for b in Platform::ALL {
                if a == b {
                    continue;
                }
                let mut card = CardState { selection: Some(a) };
                card.toggle(b);
                assert_eq!(card.selection, Some(b));
            }
        }
    }

    #[test]
    fn stage_follows_selection() {
        let mut card = CardState::default();
        assert_eq!(card.stage(), Stage::Avatar);
        card.toggle(Platform::LinkedIn);
        assert_eq!(card.stage(), Stage::Code(Platform::LinkedIn));
    }

    #[test]
    fn github_toggle_roundtrip() {
        let mut card = CardState::default();

        card.toggle(Platform::GitHub);
        assert_eq!(card.selection, Some(Platform::GitHub));
        assert_eq!(card.stage(), Stage::Code(Platform::GitHub));
        assert!(card.is_active(Platform::GitHub));
        assert!(!card.is_active(Platform::WhatsApp));
        assert!(!card.is_active(Platform::LinkedIn));

        card.toggle(Platform::GitHub);
        assert_eq!(card.selection, None);
        assert_eq!(card.stage(), Stage::Avatar);
        for platform in Platform::ALL {
            assert!(!card.is_active(platform));
        }
    }

    #[test]
    fn roll_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1_000 {
            let value = DiceValue::roll(&mut rng).get();
            assert!((1..=6).contains(&value));
        }
    }

    #[test]
    fn roll_is_roughly_uniform() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut counts = [0u32; 6];
        let rolls = 6_000;
        for _ in 0..rolls {
            counts[(DiceValue::roll(&mut rng).get() - 1) as usize] += 1;
        }
        // Expected 1000 per face; allow a generous statistical margin
        for (face, count) in counts.iter().enumerate() {
            assert!(
                (800..=1200).contains(count),
                "face {} rolled {} times out of {}",
                face + 1,
                count,
                rolls
            );
        }
    }

    #[test]
    fn platform_presentation_is_stable() {
        for platform in Platform::ALL {
            assert_eq!(platform.icon(), platform.icon());
            assert_eq!(platform.label(), platform.label());
            assert_eq!(platform.contact(), platform.contact());
            assert!(!platform.contact().is_empty());
        }
        assert_ne!(Platform::WhatsApp.icon(), Platform::GitHub.icon());
        assert_ne!(Platform::GitHub.icon(), Platform::LinkedIn.icon());
    }

    #[test]
    fn face_glyphs_are_distinct() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(DiceValue::roll(&mut rng).face_glyph());
        }
        assert_eq!(seen.len(), 6);
    }
}
