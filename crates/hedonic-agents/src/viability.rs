//! Viability: the survival predicate that ends a run.
//!
//! An agent stays viable while energy is above 5, hunger below 95,
//! sleepiness below 95 and both health scores above 10. The first clause
//! that fails is reported as a [`ViabilityFailure`].

use hedonic_types::AgentState;

/// Energy at or below this level means collapse.
pub const ENERGY_FLOOR: f64 = 5.0;
/// Hunger at or above this level means starvation.
pub const HUNGER_CEILING: f64 = 95.0;
/// Sleepiness at or above this level means the agent falls asleep.
pub const SLEEPINESS_CEILING: f64 = 95.0;
/// Physical or psychological health at or below this level is fatal.
pub const HEALTH_FLOOR: f64 = 10.0;

/// Which viability clause failed first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViabilityFailure {
    /// Energy dropped to the floor.
    Exhaustion,
    /// Hunger reached the ceiling.
    Starvation,
    /// Sleepiness reached the ceiling.
    Asleep,
    /// Physical health dropped to the floor.
    PhysicalCollapse,
    /// Psychological health dropped to the floor.
    PsychologicalCollapse,
}

impl ViabilityFailure {
    /// Short snake-case label.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Exhaustion => "exhaustion",
            Self::Starvation => "starvation",
            Self::Asleep => "asleep",
            Self::PhysicalCollapse => "physical_collapse",
            Self::PsychologicalCollapse => "psychological_collapse",
        }
    }
}

impl core::fmt::Display for ViabilityFailure {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check every viability clause in order.
///
/// Returns `Some(failure)` for the first failing clause, `None` while the
/// agent is viable. Does not mutate anything.
pub const fn check_viability(state: &AgentState) -> Option<ViabilityFailure> {
    if state.energy <= ENERGY_FLOOR {
        return Some(ViabilityFailure::Exhaustion);
    }
    if state.hunger >= HUNGER_CEILING {
        return Some(ViabilityFailure::Starvation);
    }
    if state.sleepiness >= SLEEPINESS_CEILING {
        return Some(ViabilityFailure::Asleep);
    }
    if state.physical_health <= HEALTH_FLOOR {
        return Some(ViabilityFailure::PhysicalCollapse);
    }
    if state.psychological_health <= HEALTH_FLOOR {
        return Some(ViabilityFailure::PsychologicalCollapse);
    }
    None
}

/// Whether the agent is still viable.
pub const fn is_viable(state: &AgentState) -> bool {
    check_viability(state).is_none()
}
