//! Enumeration types for the hedonic simulation.
//!
//! Categories key the tolerance and cue-salience maps, neurotransmitters key
//! the reserve map, and attributes name every bounded scalar on the agent
//! state that an effect queue may target.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Action categories
// ---------------------------------------------------------------------------

/// The category an action belongs to.
///
/// Tolerance, cue salience, receptivity and backfire are all resolved per
/// category, never per action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Sexual stimulation and release.
    Sexual,
    /// Bonding touch with another person.
    Social,
    /// Light pain and sensation play.
    Pain,
    /// Breathing techniques and the dive reflex.
    Breathwork,
    /// Eating.
    Food,
    /// Sleep, rest and idling.
    Rest,
    /// Recreational substances.
    Drugs,
    /// Medication and therapy that shift traits.
    Medical,
    /// Life events that shift chronic stress.
    Life,
}

impl Category {
    /// Every category in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Sexual,
        Self::Social,
        Self::Pain,
        Self::Breathwork,
        Self::Food,
        Self::Rest,
        Self::Drugs,
        Self::Medical,
        Self::Life,
    ];

    /// Lowercase label used in logs and serialized maps.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sexual => "sexual",
            Self::Social => "social",
            Self::Pain => "pain",
            Self::Breathwork => "breathwork",
            Self::Food => "food",
            Self::Rest => "rest",
            Self::Drugs => "drugs",
            Self::Medical => "medical",
            Self::Life => "life",
        }
    }
}

impl core::fmt::Display for Category {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Neurotransmitters with depletable reserves
// ---------------------------------------------------------------------------

/// A neurotransmitter backed by a depletable reserve pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Neurotransmitter {
    /// Wanting and anticipation.
    Dopamine,
    /// Contentment and mood stability.
    Serotonin,
    /// Euphoria and pain relief.
    Endorphins,
    /// Bonding and diffuse relaxation.
    Oxytocin,
}

impl Neurotransmitter {
    /// Every tracked neurotransmitter.
    pub const ALL: [Self; 4] = [
        Self::Dopamine,
        Self::Serotonin,
        Self::Endorphins,
        Self::Oxytocin,
    ];

    /// The state attribute holding this neurotransmitter's current level.
    pub const fn attribute(self) -> Attribute {
        match self {
            Self::Dopamine => Attribute::Dopamine,
            Self::Serotonin => Attribute::Serotonin,
            Self::Endorphins => Attribute::Endorphins,
            Self::Oxytocin => Attribute::Oxytocin,
        }
    }

    /// Lowercase label.
    pub const fn as_str(self) -> &'static str {
        self.attribute().as_str()
    }
}

// ---------------------------------------------------------------------------
// Bounded attributes
// ---------------------------------------------------------------------------

/// A bounded `[0, 100]` scalar on the agent state.
///
/// Traits and `time_since_orgasm` are not attributes: nothing relaxes them
/// toward a baseline and no effect queue targets them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Attribute {
    /// Dopamine level.
    Dopamine,
    /// Oxytocin level.
    Oxytocin,
    /// Endorphin level.
    Endorphins,
    /// Serotonin level.
    Serotonin,
    /// Prolactin level.
    Prolactin,
    /// Vasopressin level.
    Vasopressin,
    /// Physical and sexual arousal.
    Arousal,
    /// Prefrontal (analytical, self-monitoring) activity.
    Prefrontal,
    /// Drowsiness.
    Sleepiness,
    /// Mental tension, a cortisol proxy.
    Anxiety,
    /// Immersion in the current experience.
    Absorption,
    /// Sexual inhibition system (the brake).
    SexualInhibition,
    /// Dorsal shutdown.
    Shutdown,
    /// Hunger.
    Hunger,
    /// Energy.
    Energy,
    /// Physical health.
    PhysicalHealth,
    /// Psychological health.
    PsychologicalHealth,
    /// Arousal accumulated without release.
    EdgingBuildup,
    /// Post-meal digestive load.
    Digesting,
}

impl Attribute {
    /// Every bounded attribute.
    pub const ALL: [Self; 19] = [
        Self::Dopamine,
        Self::Oxytocin,
        Self::Endorphins,
        Self::Serotonin,
        Self::Prolactin,
        Self::Vasopressin,
        Self::Arousal,
        Self::Prefrontal,
        Self::Sleepiness,
        Self::Anxiety,
        Self::Absorption,
        Self::SexualInhibition,
        Self::Shutdown,
        Self::Hunger,
        Self::Energy,
        Self::PhysicalHealth,
        Self::PsychologicalHealth,
        Self::EdgingBuildup,
        Self::Digesting,
    ];

    /// The reserve backing this attribute, if it is a tracked neurotransmitter.
    pub const fn neurotransmitter(self) -> Option<Neurotransmitter> {
        match self {
            Self::Dopamine => Some(Neurotransmitter::Dopamine),
            Self::Serotonin => Some(Neurotransmitter::Serotonin),
            Self::Endorphins => Some(Neurotransmitter::Endorphins),
            Self::Oxytocin => Some(Neurotransmitter::Oxytocin),
            _ => None,
        }
    }

    /// Snake-case label matching the state field name.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dopamine => "dopamine",
            Self::Oxytocin => "oxytocin",
            Self::Endorphins => "endorphins",
            Self::Serotonin => "serotonin",
            Self::Prolactin => "prolactin",
            Self::Vasopressin => "vasopressin",
            Self::Arousal => "arousal",
            Self::Prefrontal => "prefrontal",
            Self::Sleepiness => "sleepiness",
            Self::Anxiety => "anxiety",
            Self::Absorption => "absorption",
            Self::SexualInhibition => "sexual_inhibition",
            Self::Shutdown => "shutdown",
            Self::Hunger => "hunger",
            Self::Energy => "energy",
            Self::PhysicalHealth => "physical_health",
            Self::PsychologicalHealth => "psychological_health",
            Self::EdgingBuildup => "edging_buildup",
            Self::Digesting => "digesting",
        }
    }
}

impl core::fmt::Display for Attribute {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neurotransmitters_round_trip_through_attributes() {
        for nt in Neurotransmitter::ALL {
            assert_eq!(nt.attribute().neurotransmitter(), Some(nt));
        }
    }

    #[test]
    fn only_four_attributes_have_reserves() {
        let tracked = Attribute::ALL
            .iter()
            .filter(|a| a.neurotransmitter().is_some())
            .count();
        assert_eq!(tracked, 4);
    }

    #[test]
    fn category_serializes_snake_case() {
        let json = serde_json::to_string(&Category::Breathwork).unwrap_or_default();
        assert_eq!(json, "\"breathwork\"");
        let attr = serde_json::to_string(&Attribute::PhysicalHealth).unwrap_or_default();
        assert_eq!(attr, "\"physical_health\"");
    }
}
