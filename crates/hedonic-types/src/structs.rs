//! Agent state and delayed-effect queue entries.
//!
//! [`AgentState`] is the single mutable record a simulation run owns. It is
//! created once per run, mutated in place by the orchestrator and the decay
//! integrator, and dropped (or cloned before reuse) at the end of the run.

use serde::{Deserialize, Serialize};

use crate::enums::Attribute;
use crate::maps::{CategoryMap, ReserveMap};

/// Lower bound for every bounded scalar.
pub const SCALAR_MIN: f64 = 0.0;
/// Upper bound for every bounded scalar.
pub const SCALAR_MAX: f64 = 100.0;

// ---------------------------------------------------------------------------
// Effect queue entries
// ---------------------------------------------------------------------------

/// Sustained delivery of a boost whose immediate share already landed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveEffect {
    /// Attribute receiving the delivery.
    pub attribute: Attribute,
    /// Points delivered per hour.
    pub rate: f64,
    /// Hours of delivery left.
    pub remaining_hours: f64,
}

/// Delayed opponent-process correction scheduled by a large boost.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rebound {
    /// Attribute being corrected.
    pub attribute: Attribute,
    /// Signed magnitude of the correction (negative for a dip).
    pub amount: f64,
    /// Hours before delivery starts.
    pub delay_remaining: f64,
    /// Hours of the delivery window left.
    pub duration: f64,
}

// ---------------------------------------------------------------------------
// Agent state
// ---------------------------------------------------------------------------

/// The full physiological and affective state of one simulated agent.
///
/// Every scalar except the `ssri_level`/`life_stress` traits and
/// `time_since_orgasm` lives on a `[0, 100]` scale and is restored to it
/// by [`AgentState::clamp_values`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentState {
    // --- Traits ---
    /// Testosterone trait, shifts arousal/vasopressin/anxiety baselines.
    pub testosterone: f64,
    /// Psychiatric medication dose.
    pub ssri_level: f64,
    /// Background chronic stress.
    pub life_stress: f64,

    // --- Neurotransmitters ---
    /// Wanting and anticipation.
    pub dopamine: f64,
    /// Bonding, trust, diffuse pleasure.
    pub oxytocin: f64,
    /// Euphoria and pain relief.
    pub endorphins: f64,
    /// Contentment and mood stability.
    pub serotonin: f64,

    // --- Hormones ---
    /// Post-orgasm refractory hormone.
    pub prolactin: f64,
    /// Active arousal, focus, intensity.
    pub vasopressin: f64,

    // --- Physiological ---
    /// Physical and sexual arousal.
    pub arousal: f64,
    /// Prefrontal activity (low means hypofrontality).
    pub prefrontal: f64,
    /// Drowsiness.
    pub sleepiness: f64,

    // --- Mental ---
    /// Tension and worry, a cortisol proxy.
    pub anxiety: f64,
    /// Immersion in the experience.
    pub absorption: f64,
    /// Sexual inhibition system.
    pub sexual_inhibition: f64,
    /// Dorsal-vagal shutdown.
    pub shutdown: f64,

    // --- Needs ---
    /// 0 is full, 100 is starving.
    pub hunger: f64,
    /// 0 is exhausted, 100 is fully rested.
    pub energy: f64,

    // --- Health ---
    /// Physical health.
    pub physical_health: f64,
    /// Psychological health.
    pub psychological_health: f64,

    // --- Trackers ---
    /// Hours since the last orgasm (unbounded).
    pub time_since_orgasm: f64,
    /// Arousal accumulated without release.
    pub edging_buildup: f64,
    /// Post-meal digestive load.
    pub digesting: f64,

    // --- Category and reserve maps ---
    /// Per-category desensitization in `[0, 1]`.
    pub tolerance: CategoryMap<f64>,
    /// Per-neurotransmitter reserve pools in `[0, 100]`.
    pub reserves: ReserveMap<f64>,
    /// Per-category learned wanting in `[0, 1]`.
    pub cue_salience: CategoryMap<f64>,

    // --- Effect queues ---
    /// Sustained deliveries in progress.
    pub active_effects: Vec<ActiveEffect>,
    /// Scheduled opponent-process rebounds.
    pub rebound_queue: Vec<Rebound>,
}

impl Default for AgentState {
    fn default() -> Self {
        Self {
            testosterone: 50.0,
            ssri_level: 0.0,
            life_stress: 0.0,
            dopamine: 50.0,
            oxytocin: 30.0,
            endorphins: 20.0,
            serotonin: 50.0,
            prolactin: 10.0,
            vasopressin: 20.0,
            arousal: 20.0,
            prefrontal: 50.0,
            sleepiness: 20.0,
            anxiety: 30.0,
            absorption: 30.0,
            sexual_inhibition: 0.0,
            shutdown: 0.0,
            hunger: 20.0,
            energy: 80.0,
            physical_health: 80.0,
            psychological_health: 70.0,
            time_since_orgasm: 0.0,
            edging_buildup: 0.0,
            digesting: 0.0,
            tolerance: CategoryMap::splat(0.0),
            reserves: ReserveMap::splat(100.0),
            cue_salience: CategoryMap::splat(0.0),
            active_effects: Vec::new(),
            rebound_queue: Vec::new(),
        }
    }
}

impl AgentState {
    /// Current value of a bounded attribute.
    pub const fn get(&self, attribute: Attribute) -> f64 {
        match attribute {
            Attribute::Dopamine => self.dopamine,
            Attribute::Oxytocin => self.oxytocin,
            Attribute::Endorphins => self.endorphins,
            Attribute::Serotonin => self.serotonin,
            Attribute::Prolactin => self.prolactin,
            Attribute::Vasopressin => self.vasopressin,
            Attribute::Arousal => self.arousal,
            Attribute::Prefrontal => self.prefrontal,
            Attribute::Sleepiness => self.sleepiness,
            Attribute::Anxiety => self.anxiety,
            Attribute::Absorption => self.absorption,
            Attribute::SexualInhibition => self.sexual_inhibition,
            Attribute::Shutdown => self.shutdown,
            Attribute::Hunger => self.hunger,
            Attribute::Energy => self.energy,
            Attribute::PhysicalHealth => self.physical_health,
            Attribute::PsychologicalHealth => self.psychological_health,
            Attribute::EdgingBuildup => self.edging_buildup,
            Attribute::Digesting => self.digesting,
        }
    }

    /// Mutable access to a bounded attribute.
    pub const fn get_mut(&mut self, attribute: Attribute) -> &mut f64 {
        match attribute {
            Attribute::Dopamine => &mut self.dopamine,
            Attribute::Oxytocin => &mut self.oxytocin,
            Attribute::Endorphins => &mut self.endorphins,
            Attribute::Serotonin => &mut self.serotonin,
            Attribute::Prolactin => &mut self.prolactin,
            Attribute::Vasopressin => &mut self.vasopressin,
            Attribute::Arousal => &mut self.arousal,
            Attribute::Prefrontal => &mut self.prefrontal,
            Attribute::Sleepiness => &mut self.sleepiness,
            Attribute::Anxiety => &mut self.anxiety,
            Attribute::Absorption => &mut self.absorption,
            Attribute::SexualInhibition => &mut self.sexual_inhibition,
            Attribute::Shutdown => &mut self.shutdown,
            Attribute::Hunger => &mut self.hunger,
            Attribute::Energy => &mut self.energy,
            Attribute::PhysicalHealth => &mut self.physical_health,
            Attribute::PsychologicalHealth => &mut self.psychological_health,
            Attribute::EdgingBuildup => &mut self.edging_buildup,
            Attribute::Digesting => &mut self.digesting,
        }
    }

    /// Add `delta` to a bounded attribute without clamping.
    pub fn add(&mut self, attribute: Attribute, delta: f64) {
        *self.get_mut(attribute) += delta;
    }

    /// Restore every bounded field to its valid range.
    ///
    /// Scalars (including the testosterone trait) go to `[0, 100]`, reserves
    /// to `[0, 100]`, tolerance and cue salience to `[0, 1]`. The
    /// `ssri_level` and `life_stress` traits, `time_since_orgasm`, and the
    /// effect queues are left untouched.
    pub fn clamp_values(&mut self) {
        for attribute in Attribute::ALL {
            let slot = self.get_mut(attribute);
            *slot = (*slot).clamp(SCALAR_MIN, SCALAR_MAX);
        }
        self.testosterone = self.testosterone.clamp(SCALAR_MIN, SCALAR_MAX);
        self.reserves.update_all(|_, v| v.clamp(SCALAR_MIN, SCALAR_MAX));
        self.tolerance.update_all(|_, v| v.clamp(0.0, 1.0));
        self.cue_salience.update_all(|_, v| v.clamp(0.0, 1.0));
    }

    /// Highest cue salience across all categories.
    pub fn max_cue_salience(&self) -> f64 {
        self.cue_salience
            .iter()
            .map(|(_, v)| v)
            .fold(0.0, f64::max)
    }
}
