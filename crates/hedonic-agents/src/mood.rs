//! Mood classification for display.
//!
//! [`classify`] maps a state to one [`Mood`] by checking critical states
//! first, then anxiety, trance and arousal, then post-orgasm and digestion,
//! and finally banding the liking score.

use hedonic_types::AgentState;

use crate::scoring::liking;
use crate::viability::is_viable;

/// The overall mood of an agent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mood {
    /// Not viable.
    Dead,
    /// About to fall asleep.
    Drowsy,
    /// Very hungry.
    Starving,
    /// Nearly out of energy.
    Exhausted,
    /// Very anxious.
    Anxious,
    /// Deep absorption, flow.
    Trance,
    /// Arousal above 80.
    VeryAroused,
    /// Arousal above 50.
    Aroused,
    /// Post-orgasm bliss.
    Afterglow,
    /// Refractory period.
    Refractory,
    /// Heavy digestion.
    FoodComa,
    /// Liking above 70.
    Elated,
    /// Liking above 55.
    Happy,
    /// Liking above 45.
    Content,
    /// Liking above 35.
    Neutral,
    /// Liking above 25.
    Uneasy,
    /// Liking at or below 25.
    Unhappy,
}

impl Mood {
    /// Emoji shown for this mood.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Dead => "💀",
            Self::Drowsy => "😴",
            Self::Starving => "🥺",
            Self::Exhausted => "😫",
            Self::Anxious => "😰",
            Self::Trance => "🌀",
            Self::VeryAroused => "🥵",
            Self::Aroused => "😏",
            Self::Afterglow => "🤤",
            Self::Refractory => "😮‍💨",
            Self::FoodComa => "🫃",
            Self::Elated => "😍",
            Self::Happy => "😊",
            Self::Content => "🙂",
            Self::Neutral => "😐",
            Self::Uneasy => "😕",
            Self::Unhappy => "😢",
        }
    }

    /// Short lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dead => "dead",
            Self::Drowsy => "drowsy",
            Self::Starving => "starving",
            Self::Exhausted => "exhausted",
            Self::Anxious => "anxious",
            Self::Trance => "trance",
            Self::VeryAroused => "very aroused",
            Self::Aroused => "aroused",
            Self::Afterglow => "afterglow",
            Self::Refractory => "refractory",
            Self::FoodComa => "food coma",
            Self::Elated => "elated",
            Self::Happy => "happy",
            Self::Content => "content",
            Self::Neutral => "neutral",
            Self::Uneasy => "uneasy",
            Self::Unhappy => "unhappy",
        }
    }
}

impl core::fmt::Display for Mood {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} {}", self.glyph(), self.label())
    }
}

/// Classify the current state. The first matching rule wins.
pub fn classify(state: &AgentState) -> Mood {
    if !is_viable(state) {
        return Mood::Dead;
    }
    if state.sleepiness > 80.0 {
        return Mood::Drowsy;
    }
    if state.hunger > 80.0 {
        return Mood::Starving;
    }
    if state.energy < 20.0 {
        return Mood::Exhausted;
    }
    if state.anxiety > 70.0 {
        return Mood::Anxious;
    }
    if state.absorption > 80.0 {
        return Mood::Trance;
    }
    if state.arousal > 80.0 {
        return Mood::VeryAroused;
    }
    if state.arousal > 50.0 {
        return Mood::Aroused;
    }
    if state.prolactin > 40.0 && state.endorphins > 40.0 {
        return Mood::Afterglow;
    }
    if state.prolactin > 50.0 {
        return Mood::Refractory;
    }
    if state.digesting > 30.0 {
        return Mood::FoodComa;
    }

    let score = liking(state);
    if score > 70.0 {
        Mood::Elated
    } else if score > 55.0 {
        Mood::Happy
    } else if score > 45.0 {
        Mood::Content
    } else if score > 35.0 {
        Mood::Neutral
    } else if score > 25.0 {
        Mood::Uneasy
    } else {
        Mood::Unhappy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_overrides_everything() {
        let state = AgentState {
            energy: 2.0,
            sleepiness: 99.0,
            ..AgentState::default()
        };
        assert_eq!(classify(&state), Mood::Dead);
    }

    #[test]
    fn critical_states_come_before_arousal() {
        let state = AgentState {
            arousal: 90.0,
            anxiety: 80.0,
            ..AgentState::default()
        };
        assert_eq!(classify(&state), Mood::Anxious);

        let state = AgentState {
            arousal: 90.0,
            ..AgentState::default()
        };
        assert_eq!(classify(&state), Mood::VeryAroused);
    }

    #[test]
    fn afterglow_needs_prolactin_and_endorphins() {
        let glow = AgentState {
            prolactin: 45.0,
            endorphins: 60.0,
            ..AgentState::default()
        };
        let refractory = AgentState {
            prolactin: 60.0,
            ..AgentState::default()
        };
        assert_eq!(classify(&glow), Mood::Afterglow);
        assert_eq!(classify(&refractory), Mood::Refractory);
    }

    #[test]
    fn default_state_is_neutral() {
        // Default liking is about 37.1.
        assert_eq!(classify(&AgentState::default()), Mood::Neutral);
        assert_eq!(Mood::Neutral.to_string(), "😐 neutral");
    }
}
