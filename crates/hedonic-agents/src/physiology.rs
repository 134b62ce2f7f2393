//! Constants of the physiology model.
//!
//! Baselines, relaxation rates, tolerance dynamics and boost delivery
//! parameters. The model is a tunable balance model, so every number is
//! kept in one place and looked up through `const fn` tables.

use hedonic_types::{AgentState, Attribute, Category};

// ---------------------------------------------------------------------------
// Reserves and sustained delivery
// ---------------------------------------------------------------------------

/// Reserve points replenished per hour for each neurotransmitter.
pub const RESERVE_REPLENISH_RATE: f64 = 5.0;

/// Reserve points restored by one sleep.
pub const SLEEP_RESERVE_RESTORE: f64 = 40.0;

/// Tolerance removed from every category by one sleep.
pub const SLEEP_TOLERANCE_REDUCE: f64 = 0.15;

/// Cue salience removed from every category by one sleep.
pub const SLEEP_SALIENCE_REDUCE: f64 = 0.05;

/// Share of a standard boost delivered over the sustained window.
pub const SUSTAINED_FRACTION: f64 = 0.4;

/// Share of an orgasm boost delivered immediately.
pub const ORGASM_IMMEDIATE_FRACTION: f64 = 0.9;

/// Length of the sustained delivery window in hours.
pub const SUSTAINED_DURATION: f64 = 0.25;

/// Reserve consumed per raw boost point.
pub const RESERVE_COST_PER_POINT: f64 = 0.5;

/// Share of the boost that still lands at an empty reserve.
pub const RESERVE_FLOOR_SCALE: f64 = 0.15;

/// Raw boosts above this size schedule an opponent-process rebound.
pub const REBOUND_THRESHOLD: f64 = 10.0;

/// Rebound magnitude as a share of the scaled boost.
pub const REBOUND_FRACTION: f64 = 0.3;

/// Hours between the boost and the start of its rebound.
pub const REBOUND_DELAY: f64 = 0.5;

/// Hours over which a rebound is delivered.
pub const REBOUND_DURATION: f64 = 1.0;

/// Baseline depression at an empty reserve (fraction of the baseline lost).
pub const RESERVE_BASELINE_DEPRESSION: f64 = 0.4;

/// Cue salience lost per hour in every category.
pub const SALIENCE_DECAY_RATE: f64 = 0.02;

// ---------------------------------------------------------------------------
// Baselines and relaxation
// ---------------------------------------------------------------------------

/// Untraited baseline an attribute relaxes toward, if it has one.
#[allow(clippy::match_same_arms)] // Each attribute has its own tuned baseline; keeping them separate for readability.
pub const fn baseline(attribute: Attribute) -> Option<f64> {
    match attribute {
        Attribute::Dopamine => Some(50.0),
        Attribute::Oxytocin => Some(30.0),
        Attribute::Endorphins => Some(20.0),
        Attribute::Serotonin => Some(50.0),
        Attribute::Prolactin => Some(10.0),
        Attribute::Vasopressin => Some(20.0),
        Attribute::Arousal => Some(20.0),
        Attribute::Prefrontal => Some(50.0),
        Attribute::Absorption => Some(30.0),
        Attribute::Sleepiness => Some(20.0),
        Attribute::Hunger => Some(50.0),
        Attribute::Energy => Some(50.0),
        Attribute::Anxiety => Some(30.0),
        Attribute::SexualInhibition
        | Attribute::Shutdown
        | Attribute::PhysicalHealth
        | Attribute::PsychologicalHealth
        | Attribute::EdgingBuildup
        | Attribute::Digesting => None,
    }
}

/// Fraction of the distance to baseline recovered per hour.
///
/// Hunger and energy have baselines but no rate: they only drift.
#[allow(clippy::match_same_arms)] // Each attribute has its own tuned rate; keeping them separate for readability.
pub const fn decay_rate(attribute: Attribute) -> Option<f64> {
    match attribute {
        Attribute::Dopamine => Some(0.15),
        Attribute::Oxytocin => Some(0.10),
        Attribute::Endorphins => Some(0.20),
        Attribute::Serotonin => Some(0.05),
        Attribute::Prolactin => Some(0.08),
        Attribute::Vasopressin => Some(0.15),
        Attribute::Arousal => Some(0.25),
        Attribute::Prefrontal => Some(0.10),
        Attribute::Sleepiness => Some(0.15),
        Attribute::Anxiety => Some(0.12),
        Attribute::Absorption => Some(0.20),
        _ => None,
    }
}

/// Baseline shifted by the agent's testosterone, SSRI and stress traits.
///
/// Returns `None` for attributes without a baseline. The result is clamped
/// to `[0, 100]`.
pub fn effective_baseline(state: &AgentState, attribute: Attribute) -> Option<f64> {
    let base = baseline(attribute)?;
    let t_factor = state.testosterone / 50.0 - 1.0;
    let ssri = state.ssri_level / 100.0;
    let stress = state.life_stress / 100.0;

    let shift = match attribute {
        Attribute::Arousal | Attribute::Vasopressin => t_factor * 5.0,
        Attribute::Anxiety => -t_factor * 5.0 - ssri * 10.0 + stress * 20.0,
        Attribute::Serotonin => ssri * 15.0,
        Attribute::Prolactin => ssri * 12.0,
        Attribute::Dopamine => -ssri * 5.0,
        Attribute::Absorption => -stress * 8.0,
        _ => 0.0,
    };

    Some((base + shift).clamp(0.0, 100.0))
}

// ---------------------------------------------------------------------------
// Tolerance
// ---------------------------------------------------------------------------

/// Tolerance added to a category by one application.
#[allow(clippy::match_same_arms)] // Each category has its own tuned gain; keeping them separate for readability.
pub const fn tolerance_gain(category: Category) -> f64 {
    match category {
        Category::Sexual => 0.12,
        Category::Pain => 0.10,
        Category::Social => 0.06,
        Category::Breathwork => 0.08,
        Category::Food => 0.05,
        Category::Rest => 0.0,
        Category::Drugs => 0.15,
        Category::Medical => 0.0,
        Category::Life => 0.0,
    }
}

/// Tolerance lost per hour in a category.
#[allow(clippy::match_same_arms)] // Each category has its own tuned decay; keeping them separate for readability.
pub const fn tolerance_decay(category: Category) -> f64 {
    match category {
        Category::Sexual => 0.08,
        Category::Pain => 0.10,
        Category::Social => 0.12,
        Category::Breathwork => 0.10,
        Category::Food => 0.15,
        Category::Rest => 0.0,
        Category::Drugs => 0.04,
        Category::Medical => 0.0,
        Category::Life => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_traits_leave_baselines_unchanged() {
        let state = AgentState::default();
        for attribute in Attribute::ALL {
            assert_eq!(effective_baseline(&state, attribute), baseline(attribute));
        }
    }

    #[test]
    fn high_testosterone_shifts_arousal_up_and_anxiety_down() {
        let state = AgentState {
            testosterone: 100.0,
            ..AgentState::default()
        };
        let arousal = effective_baseline(&state, Attribute::Arousal).unwrap_or(0.0);
        let anxiety = effective_baseline(&state, Attribute::Anxiety).unwrap_or(0.0);
        assert!((arousal - 25.0).abs() < 1e-9);
        assert!((anxiety - 25.0).abs() < 1e-9);
    }

    #[test]
    fn ssri_and_stress_combine_on_anxiety() {
        let state = AgentState {
            ssri_level: 100.0,
            life_stress: 100.0,
            ..AgentState::default()
        };
        // 30 - 10 (SSRI) + 20 (stress)
        let anxiety = effective_baseline(&state, Attribute::Anxiety).unwrap_or(0.0);
        assert!((anxiety - 40.0).abs() < 1e-9);
        let serotonin = effective_baseline(&state, Attribute::Serotonin).unwrap_or(0.0);
        assert!((serotonin - 65.0).abs() < 1e-9);
    }

    #[test]
    fn hunger_and_energy_do_not_relax() {
        assert!(decay_rate(Attribute::Hunger).is_none());
        assert!(decay_rate(Attribute::Energy).is_none());
        assert!(baseline(Attribute::Hunger).is_some());
    }

    #[test]
    fn rest_medical_life_never_build_tolerance() {
        for category in [Category::Rest, Category::Medical, Category::Life] {
            assert!(tolerance_gain(category).abs() < f64::EPSILON);
            assert!(tolerance_decay(category).abs() < f64::EPSILON);
        }
    }
}
