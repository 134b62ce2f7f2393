//! Context appraisal: receptivity and backfire.
//!
//! [`receptivity`] scores how well an action category lands in the current
//! state, from `-0.5` (backfire) to `1.0` (fully receptive). A non-negative
//! score gates how much of the benefit is delivered. A negative score
//! withholds the benefit entirely and triggers [`apply_backfire`], which
//! applies the category's own aversive consequences.

use hedonic_types::{AgentState, Category};

/// Lowest receptivity score.
pub const MIN_RECEPTIVITY: f64 = -0.5;
/// Highest receptivity score.
pub const MAX_RECEPTIVITY: f64 = 1.0;

/// Appraise how receptive the agent is to `category` right now.
pub fn receptivity(state: &AgentState, category: Category) -> f64 {
    let mut r = 1.0;

    match category {
        Category::Sexual => {
            if state.anxiety > 50.0 {
                r -= (state.anxiety - 50.0) / 50.0 * 1.2;
            }
            // Overthinking.
            if state.prefrontal > 60.0 {
                r -= (state.prefrontal - 60.0) / 40.0 * 0.3;
            }
            if state.arousal > 20.0 {
                r += (state.arousal - 20.0) / 80.0 * 0.3;
            }
            if state.absorption > 30.0 {
                r += (state.absorption - 30.0) / 70.0 * 0.2;
            }
            // The inhibition brake blocks response even when desire is present.
            if state.sexual_inhibition > 20.0 {
                r -= (state.sexual_inhibition - 20.0) / 80.0 * 0.8;
            }
        }
        Category::Social => {
            if state.anxiety > 50.0 {
                r -= (state.anxiety - 50.0) / 50.0 * 1.2;
            }
            if state.energy < 25.0 {
                r -= (25.0 - state.energy) / 25.0 * 0.4;
            }
            if state.oxytocin > 35.0 {
                r += (state.oxytocin - 35.0) / 65.0 * 0.4;
            }
        }
        Category::Pain => {
            // Pain without arousal context is just pain.
            if state.arousal < 30.0 {
                r -= (30.0 - state.arousal) / 30.0 * 1.8;
            }
            if state.absorption > 40.0 {
                r += (state.absorption - 40.0) / 60.0 * 0.3;
            }
            if state.anxiety > 55.0 {
                r -= (state.anxiety - 55.0) / 45.0 * 0.5;
            }
        }
        Category::Breathwork => {
            if state.anxiety > 70.0 {
                r -= (state.anxiety - 70.0) / 30.0 * 0.5;
            }
        }
        Category::Food => {
            if state.anxiety > 60.0 {
                r -= (state.anxiety - 60.0) / 40.0 * 0.3;
            }
        }
        Category::Drugs => {
            if state.anxiety > 55.0 {
                r -= (state.anxiety - 55.0) / 45.0 * 0.5;
            }
            if state.psychological_health < 40.0 {
                r -= (40.0 - state.psychological_health) / 40.0 * 0.4;
            }
        }
        Category::Rest | Category::Medical | Category::Life => {}
    }

    if category != Category::Rest {
        r -= state.life_stress / 100.0 * 0.3;
    }

    // Shutdown flattens everything: indifference, not aversion.
    if state.shutdown > 20.0 {
        r -= (state.shutdown - 20.0) / 80.0 * 0.6;
    }

    r.clamp(MIN_RECEPTIVITY, MAX_RECEPTIVITY)
}

/// Apply the aversive consequences of a backfired `category` action.
///
/// `severity` is the magnitude of the negative receptivity, `0..=0.5`.
/// Categories without a backfire profile are left untouched.
pub fn apply_backfire(state: &mut AgentState, category: Category, severity: f64) {
    match category {
        Category::Sexual => {
            state.anxiety += severity * 20.0;
            state.absorption -= severity * 15.0;
            state.prefrontal += severity * 10.0;
            // Failed attempts reinforce the brake.
            state.sexual_inhibition += severity * 30.0;
        }
        Category::Social => {
            state.anxiety += severity * 25.0;
            state.absorption -= severity * 10.0;
            state.prefrontal += severity * 15.0;
            state.psychological_health -= severity * 2.0;
        }
        Category::Pain => {
            state.anxiety += severity * 20.0;
            state.physical_health -= severity * 3.0;
            state.absorption -= severity * 10.0;
        }
        Category::Breathwork => {
            state.anxiety += severity * 15.0;
        }
        Category::Food => {
            state.anxiety += severity * 10.0;
            state.digesting += severity * 15.0;
        }
        Category::Drugs => {
            state.anxiety += severity * 30.0;
            state.psychological_health -= severity * 4.0;
            state.absorption -= severity * 15.0;
            // A bad enough trip tips over into collapse.
            state.shutdown += severity * 50.0;
        }
        Category::Rest | Category::Medical | Category::Life => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn calm() -> AgentState {
        AgentState {
            anxiety: 20.0,
            arousal: 50.0,
            absorption: 40.0,
            ..AgentState::default()
        }
    }

    fn panicked() -> AgentState {
        AgentState {
            anxiety: 100.0,
            ..calm()
        }
    }

    #[test]
    fn rest_is_always_fully_receptive() {
        let state = AgentState {
            anxiety: 100.0,
            life_stress: 100.0,
            ..AgentState::default()
        };
        assert!((receptivity(&state, Category::Rest) - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn anxiety_turns_sexual_and_social_negative() {
        assert!(receptivity(&panicked(), Category::Sexual) < 0.0);
        assert!(receptivity(&panicked(), Category::Social) < 0.0);
        assert!(receptivity(&calm(), Category::Sexual) > 0.5);
    }

    #[test]
    fn pain_needs_arousal_context() {
        let cold = AgentState {
            arousal: 5.0,
            ..AgentState::default()
        };
        assert!(receptivity(&cold, Category::Pain) < 0.0);
        assert!(receptivity(&calm(), Category::Pain) > 0.0);
    }

    #[test]
    fn stress_lowers_every_category_but_rest() {
        let relaxed = AgentState::default();
        let stressed = AgentState {
            life_stress: 100.0,
            ..AgentState::default()
        };
        for category in Category::ALL {
            let before = receptivity(&relaxed, category);
            let after = receptivity(&stressed, category);
            if category == Category::Rest {
                assert!((before - after).abs() < f64::EPSILON);
            } else {
                assert!(after < before, "{category} unaffected by stress");
            }
        }
    }

    #[test]
    fn shutdown_flattens_rest_too() {
        let state = AgentState {
            shutdown: 100.0,
            ..AgentState::default()
        };
        assert!(receptivity(&state, Category::Rest) < 1.0);
    }

    #[test]
    fn drug_backfire_pushes_toward_shutdown() {
        let mut state = AgentState::default();
        apply_backfire(&mut state, Category::Drugs, 0.5);
        assert!((state.shutdown - 25.0).abs() < 1e-9);
        assert!((state.anxiety - 45.0).abs() < 1e-9);
    }

    #[test]
    fn sexual_backfire_builds_inhibition() {
        let mut state = AgentState::default();
        apply_backfire(&mut state, Category::Sexual, 0.4);
        assert!((state.sexual_inhibition - 12.0).abs() < 1e-9);
        assert!(state.anxiety > 30.0);
    }

    #[test]
    fn medical_backfire_is_a_no_op() {
        let mut state = AgentState::default();
        let before = state.clone();
        apply_backfire(&mut state, Category::Medical, 0.5);
        assert_eq!(state, before);
    }
}
