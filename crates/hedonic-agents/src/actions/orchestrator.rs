//! Applying one action to an agent.
//!
//! [`apply_event`] is the only way actions reach the state. It appraises
//! receptivity, scales the effect by tolerance, runs the handler (or the
//! backfire path), follows a forced release once, and then updates the
//! category's tolerance and learned cue salience.
//!
//! Nothing here clamps. Values may sit outside `[0, 100]` until the next
//! decay step.

use hedonic_types::{ActionId, AgentState, Category};

use super::catalog::category;
use super::handlers::{EffectOutcome, apply_effect, orgasm};
use crate::chance::Chance;
use crate::physiology::tolerance_gain;
use crate::receptivity::{apply_backfire, receptivity};

/// Effectiveness lost at full tolerance.
pub const MAX_TOLERANCE_PENALTY: f64 = 0.6;

/// Dopamine added per unit of cue salience after every application.
pub const CUE_DOPAMINE_SCALE: f64 = 2.0;

/// How one application landed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AppliedAction {
    /// The action applied.
    pub id: ActionId,
    /// Its category.
    pub category: Category,
    /// Appraised receptivity, `-0.5..=1.0`.
    pub receptivity: f64,
    /// Effectiveness the handler ran at. Zero on backfire.
    pub effectiveness: f64,
    /// Whether the action backfired.
    pub backfired: bool,
    /// Whether arousal ran away into a forced orgasm.
    pub forced_release: bool,
}

/// Apply `id` to `state`.
///
/// # Order of operations
///
/// 1. Tolerance factor: `1 - tolerance * 0.6`.
/// 2. Receptivity for the action's category.
/// 3. Run the effect at `tolerance_factor * receptivity` when receptive,
///    or at zero effectiveness (costs only) when not.
/// 4. A forced release runs the orgasm effect once at the same
///    effectiveness.
/// 5. On backfire, apply the category backfire with severity
///    `|receptivity|`. It lands after any forced release.
/// 6. Tolerance grows by the category gain, capped at 1.
/// 7. Cue salience grows by half the gain when receptive, or shrinks by
///    `|receptivity| * 0.1` on backfire.
/// 8. Dopamine rises by twice the resulting salience.
///
/// Preconditions are not checked here; callers consult
/// [`can_apply`](super::catalog::can_apply) first.
pub fn apply_event(state: &mut AgentState, id: ActionId, chance: &mut Chance) -> AppliedAction {
    let category = category(id);
    let tolerance_factor = 1.0 - state.tolerance.get(category) * MAX_TOLERANCE_PENALTY;
    let receptivity = receptivity(state, category);
    let backfired = receptivity < 0.0;

    let effectiveness = if backfired {
        0.0
    } else {
        tolerance_factor * receptivity
    };

    let outcome = apply_effect(id, state, effectiveness, chance);
    let forced_release = outcome == EffectOutcome::ForcedRelease;
    if forced_release {
        orgasm(state, effectiveness);
    }
    if backfired {
        apply_backfire(state, category, receptivity.abs());
    }

    let gain = tolerance_gain(category);
    if gain > 0.0 {
        let tolerance = state.tolerance.get_mut(category);
        *tolerance = (*tolerance + gain).min(1.0);
    }

    let salience = state.cue_salience.get_mut(category);
    *salience = if backfired {
        (*salience - receptivity.abs() * 0.1).max(0.0)
    } else {
        (*salience + gain * 0.5).min(1.0)
    };

    let cue_dopamine = state.cue_salience.get(category) * CUE_DOPAMINE_SCALE;
    if cue_dopamine > 0.0 {
        state.dopamine += cue_dopamine;
    }

    tracing::debug!(
        action = %id,
        category = %category,
        receptivity,
        effectiveness,
        backfired,
        forced_release,
        "action applied"
    );

    AppliedAction {
        id,
        category,
        receptivity,
        effectiveness,
        backfired,
        forced_release,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_use_is_fully_effective() {
        let mut state = AgentState::default();
        let applied = apply_event(&mut state, ActionId::Snack, &mut Chance::disabled());
        assert!(!applied.backfired);
        assert!((applied.effectiveness - 1.0).abs() < f64::EPSILON);
        assert!((state.tolerance.food - 0.05).abs() < 1e-12);
        assert!((state.cue_salience.food - 0.025).abs() < 1e-12);
    }

    #[test]
    fn tolerance_reduces_effectiveness() {
        let mut state = AgentState::default();
        state.tolerance.social = 0.5;
        let applied = apply_event(&mut state, ActionId::Massage, &mut Chance::disabled());
        assert!((applied.effectiveness - 0.7).abs() < 1e-12);
        assert!((state.tolerance.social - 0.56).abs() < 1e-12);
    }

    #[test]
    fn backfire_withholds_benefit_and_lowers_salience() {
        let mut state = AgentState {
            anxiety: 100.0,
            ..AgentState::default()
        };
        state.cue_salience.social = 0.3;
        let applied = apply_event(&mut state, ActionId::Cuddling, &mut Chance::disabled());
        assert!(applied.backfired);
        assert!(applied.effectiveness.abs() < f64::EPSILON);
        // Social backfire at severity 0.2: anxiety +5, no relief.
        assert!((state.anxiety - 105.0).abs() < 1e-9);
        assert!((state.cue_salience.social - 0.28).abs() < 1e-12);
        assert!((state.tolerance.social - 0.06).abs() < 1e-12);
    }

    #[test]
    fn backfire_lands_after_a_forced_release() {
        // Receptivity clamps to -0.5: 1 - 1.2 + 0.2625 - 0.8.
        let inhibited = AgentState {
            anxiety: 100.0,
            arousal: 90.0,
            absorption: 0.0,
            prefrontal: 50.0,
            sexual_inhibition: 100.0,
            ..AgentState::default()
        };
        assert!((receptivity(&inhibited, Category::Sexual) + 0.5).abs() < 1e-12);

        let released = (0..500).find_map(|seed| {
            let mut state = inhibited.clone();
            let applied = apply_event(&mut state, ActionId::Edging, &mut Chance::seeded(seed));
            applied.forced_release.then_some((state, applied))
        });
        let (state, applied) = released.unwrap();

        assert!(applied.backfired);
        assert!(state.time_since_orgasm.abs() < f64::EPSILON);
        assert!((state.arousal - 5.0).abs() < f64::EPSILON);
        // The orgasm resets prefrontal to 25, then the backfire adds 0.5 * 10.
        assert!((state.prefrontal - 30.0).abs() < 1e-9);
        assert!((state.sexual_inhibition - 115.0).abs() < 1e-9);
    }

    #[test]
    fn rest_builds_no_tolerance_or_salience() {
        let mut state = AgentState::default();
        let dopamine = state.dopamine;
        let _ = apply_event(&mut state, ActionId::Rest, &mut Chance::disabled());
        assert!(state.tolerance.rest.abs() < f64::EPSILON);
        assert!(state.cue_salience.rest.abs() < f64::EPSILON);
        assert!((state.dopamine - dopamine).abs() < f64::EPSILON);
    }

    #[test]
    fn salience_drives_dopamine() {
        let mut state = AgentState::default();
        state.cue_salience.drugs = 0.5;
        let dopamine = state.dopamine;
        let _ = apply_event(&mut state, ActionId::Nitrous, &mut Chance::disabled());
        // Nitrous boosts no dopamine of its own: 0.575 * 2
        assert!((state.dopamine - (dopamine + 1.15)).abs() < 1e-9);
    }
}
