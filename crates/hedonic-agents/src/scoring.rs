//! Reward signals: liking and wanting.
//!
//! Liking is the hedonic signal the runner integrates over time. It is
//! built from endorphins, oxytocin and serotonin and shaped by an
//! individualized Yerkes-Dodson anxiety curve, absorption and shutdown.
//! Wanting is the approach drive, reported for display only.

use hedonic_types::AgentState;

/// Untraited anxiety level at which liking peaks.
pub const BASE_ANXIETY_OPTIMUM: f64 = 35.0;

/// Anxiety level at which liking peaks for this agent, in `[10, 50]`.
///
/// High testosterone and SSRI both lower the optimum.
pub fn yerkes_dodson_optimum(state: &AgentState) -> f64 {
    let optimum = BASE_ANXIETY_OPTIMUM
        - (state.testosterone - 50.0) / 50.0 * 5.0
        - state.ssri_level / 100.0 * 8.0;
    optimum.clamp(10.0, 50.0)
}

/// How good the current state feels.
///
/// # Order of operations
///
/// 1. Base: `endorphins * 0.40 + oxytocin * 0.25 + serotonin * 0.35`.
/// 2. Anxiety factor: rises linearly from 0.92 to 1.05 at the optimum,
///    then falls linearly to 0.60 at anxiety 100.
/// 3. Absorption amplifies by up to 30%, halved at the maximum SSRI dose.
/// 4. Shutdown flattens by up to 80%.
pub fn liking(state: &AgentState) -> f64 {
    let base = state.endorphins * 0.40 + state.oxytocin * 0.25 + state.serotonin * 0.35;

    let optimum = yerkes_dodson_optimum(state);
    let anxiety_factor = if state.anxiety <= optimum {
        0.92 + (state.anxiety / optimum) * 0.13
    } else {
        1.05 - ((state.anxiety - optimum) / (100.0 - optimum)) * 0.45
    };

    let max_bonus = 0.3 * (1.0 - state.ssri_level / 100.0 * 0.5);
    let absorption_factor = 1.0 + (state.absorption / 100.0) * max_bonus;

    let shutdown_factor = 1.0 - (state.shutdown / 100.0) * 0.8;

    base * anxiety_factor * absorption_factor * shutdown_factor
}

/// Approach motivation.
///
/// Dopamine and arousal drive it, learned cue salience adds up to 25
/// points, and prolactin, low energy and shutdown suppress it.
pub fn wanting(state: &AgentState) -> f64 {
    let base = state.dopamine * 0.50 + state.arousal * 0.25 + state.max_cue_salience() * 25.0;

    let prolactin_factor = 1.0 - (state.prolactin / 100.0) * 0.5;
    let energy_factor = 0.6 + (state.energy / 100.0) * 0.4;
    let shutdown_factor = 1.0 - (state.shutdown / 100.0) * 0.6;

    base * prolactin_factor * energy_factor * shutdown_factor
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optimum_moves_with_traits() {
        let state = AgentState::default();
        assert!((yerkes_dodson_optimum(&state) - 35.0).abs() < 1e-9);

        let state = AgentState {
            testosterone: 100.0,
            ssri_level: 100.0,
            ..AgentState::default()
        };
        assert!((yerkes_dodson_optimum(&state) - 22.0).abs() < 1e-9);
    }

    #[test]
    fn liking_peaks_at_optimum_anxiety() {
        let at = |anxiety: f64| {
            liking(&AgentState {
                anxiety,
                ..AgentState::default()
            })
        };
        assert!(at(35.0) > at(10.0));
        assert!(at(35.0) > at(60.0));
        assert!(at(60.0) > at(95.0));
    }

    #[test]
    fn default_liking_matches_hand_computation() {
        // base 8 + 7.5 + 17.5 = 33, anxiety 30 of 35, absorption 30
        let expected = 33.0 * (0.92 + 30.0 / 35.0 * 0.13) * (1.0 + 0.3 * 0.3);
        assert!((liking(&AgentState::default()) - expected).abs() < 1e-9);
    }

    #[test]
    fn shutdown_flattens_liking_and_wanting() {
        let normal = AgentState::default();
        let numb = AgentState {
            shutdown: 100.0,
            ..AgentState::default()
        };
        assert!((liking(&numb) - liking(&normal) * 0.2).abs() < 1e-9);
        assert!((wanting(&numb) - wanting(&normal) * 0.4).abs() < 1e-9);
    }

    #[test]
    fn cue_salience_raises_wanting_not_liking() {
        let mut cued = AgentState::default();
        cued.cue_salience.drugs = 0.8;
        assert!(wanting(&cued) > wanting(&AgentState::default()));
        assert!((liking(&cued) - liking(&AgentState::default())).abs() < f64::EPSILON);
    }
}
