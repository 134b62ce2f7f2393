//! Homeostatic decay and cross-variable coupling.
//!
//! [`advance`] moves an agent's state forward by `dt` hours. It is the only
//! place where time passes: effect queues drain, tolerance and salience
//! fade, reserves refill, and the threshold-gated couplings between
//! neurotransmitters, hormones and mental state fire.
//!
//! All effects are proportional to `dt`. The function is total: every
//! branch is well defined for any finite state, and the final clamp
//! restores every bounded field.

use hedonic_types::{AgentState, Attribute, Category};

use crate::physiology::{
    RESERVE_BASELINE_DEPRESSION, RESERVE_REPLENISH_RATE, SALIENCE_DECAY_RATE, decay_rate,
    effective_baseline, tolerance_decay,
};

/// Advance the agent's physiology by `dt` hours.
///
/// # Order of operations
///
/// 1. Relax decaying attributes toward trait-adjusted baselines
///    (neurotransmitter baselines depressed by low reserves)
/// 2. Drift: hunger up, energy down, chronic stress drains
/// 3. Digestion, then sleepiness suppression
/// 4. Orgasm timer and edging decay
/// 5. Drain sustained effects, then rebounds
/// 6. Tolerance and cue salience fade, reserves refill
/// 7. Anxiety, absorption and hormone couplings
/// 8. Sexual inhibition and shutdown dynamics
/// 9. Health consequences of extreme states
/// 10. Clamp
pub fn advance(state: &mut AgentState, dt: f64) {
    relax_toward_baselines(state, dt);
    apply_drift(state, dt);
    apply_digestion_and_sleepiness(state, dt);

    state.time_since_orgasm += dt;
    state.edging_buildup *= 1.0 - 0.05 * dt;

    drain_active_effects(state, dt);
    drain_rebounds(state, dt);
    fade_tolerance_and_salience(state, dt);
    state
        .reserves
        .update_all(|_, v| v + RESERVE_REPLENISH_RATE * dt);

    apply_mental_couplings(state, dt);
    apply_hormone_couplings(state, dt);
    apply_inhibition_and_shutdown(state, dt);
    apply_health_consequences(state, dt);

    state.clamp_values();
}

// ---------------------------------------------------------------------------
// 1. Baseline relaxation
// ---------------------------------------------------------------------------

fn relax_toward_baselines(state: &mut AgentState, dt: f64) {
    for attribute in Attribute::ALL {
        let (Some(baseline), Some(rate)) =
            (effective_baseline(state, attribute), decay_rate(attribute))
        else {
            continue;
        };

        let target = match attribute.neurotransmitter() {
            Some(nt) => depressed_baseline(baseline, state.reserves.get(nt)),
            None => baseline,
        };

        let current = state.get(attribute);
        *state.get_mut(attribute) = current + (target - current) * rate * dt;
    }
}

/// A neurotransmitter baseline sinks up to 40% when its reserve runs dry.
fn depressed_baseline(baseline: f64, reserve: f64) -> f64 {
    if reserve < 100.0 {
        baseline * (1.0 - (1.0 - reserve / 100.0) * RESERVE_BASELINE_DEPRESSION)
    } else {
        baseline
    }
}

// ---------------------------------------------------------------------------
// 2-3. Drift, digestion, sleepiness
// ---------------------------------------------------------------------------

fn apply_drift(state: &mut AgentState, dt: f64) {
    state.hunger += 3.0 * dt;
    state.energy -= 2.0 * dt;

    if state.life_stress > 0.0 {
        let stress = state.life_stress / 100.0;
        state.absorption -= stress * 2.0 * dt;
        state.psychological_health -= stress * 0.5 * dt;
    }
}

fn apply_digestion_and_sleepiness(state: &mut AgentState, dt: f64) {
    if state.digesting > 0.0 {
        state.sleepiness += state.digesting * 0.3 * dt;
        state.arousal -= state.digesting * 0.2 * dt;
        state.digesting *= 1.0 - 0.4 * dt;
        if state.digesting < 1.0 {
            state.digesting = 0.0;
        }
    }

    if state.sleepiness > 40.0 {
        let factor = (state.sleepiness - 40.0) / 60.0;
        state.arousal -= factor * 5.0 * dt;
        state.prefrontal -= factor * 3.0 * dt;
    }

    // Drowsiness breaks the sustained attention absorption needs.
    if state.sleepiness > 60.0 {
        let factor = (state.sleepiness - 60.0) / 40.0;
        state.absorption -= factor * 4.0 * dt;
    }
}

// ---------------------------------------------------------------------------
// 5. Effect queues
// ---------------------------------------------------------------------------

fn drain_active_effects(state: &mut AgentState, dt: f64) {
    let mut effects = std::mem::take(&mut state.active_effects);
    for effect in &mut effects {
        state.add(effect.attribute, effect.rate * dt);
        effect.remaining_hours -= dt;
    }
    effects.retain(|e| e.remaining_hours > 0.0);
    state.active_effects = effects;
}

/// Rebounds wait out their delay, then deliver `amount / duration` per hour
/// against the window still left, so the correction steepens toward the
/// end of the window.
fn drain_rebounds(state: &mut AgentState, dt: f64) {
    let mut rebounds = std::mem::take(&mut state.rebound_queue);
    rebounds.retain_mut(|rebound| {
        if rebound.delay_remaining > 0.0 {
            rebound.delay_remaining -= dt;
            return true;
        }
        let rate = rebound.amount / rebound.duration;
        state.add(rebound.attribute, rate * dt);
        rebound.duration -= dt;
        rebound.duration > 0.0
    });
    state.rebound_queue = rebounds;
}

// ---------------------------------------------------------------------------
// 6. Tolerance and salience
// ---------------------------------------------------------------------------

fn fade_tolerance_and_salience(state: &mut AgentState, dt: f64) {
    state.tolerance.update_all(|category: Category, v| {
        let rate = tolerance_decay(category);
        if rate > 0.0 { (v - rate * dt).max(0.0) } else { v }
    });
    state
        .cue_salience
        .update_all(|_, v| (v - SALIENCE_DECAY_RATE * dt).max(0.0));
}

// ---------------------------------------------------------------------------
// 7. Couplings
// ---------------------------------------------------------------------------

fn apply_mental_couplings(state: &mut AgentState, dt: f64) {
    // Unmet needs feed anxiety.
    if state.hunger > 50.0 {
        state.anxiety += (state.hunger - 50.0) * 0.05 * dt;
    }
    if state.energy < 30.0 {
        state.anxiety += (30.0 - state.energy) * 0.05 * dt;
    }

    if state.anxiety > 50.0 {
        let suppression = (state.anxiety - 50.0) / 50.0;
        state.absorption -= suppression * 5.0 * dt;
    }
    // Hypofrontality opens the door to flow.
    if state.prefrontal < 40.0 {
        state.absorption += (40.0 - state.prefrontal) * 0.1 * dt;
    }
    if state.arousal > 60.0 {
        state.absorption += (state.arousal - 60.0) * 0.08 * dt;
    }
}

fn apply_hormone_couplings(state: &mut AgentState, dt: f64) {
    // Refractory period.
    if state.prolactin > 20.0 {
        let factor = (state.prolactin - 20.0) / 80.0;
        state.dopamine -= factor * 8.0 * dt;
        state.arousal -= factor * 10.0 * dt;
        state.sleepiness += factor * 5.0 * dt;
    }

    if state.vasopressin > 40.0 {
        let factor = (state.vasopressin - 40.0) / 60.0;
        state.prefrontal -= factor * 3.0 * dt;
        state.absorption += factor * 3.0 * dt;
    }
    if state.vasopressin > 50.0 {
        let tension = (state.vasopressin - 50.0) / 50.0;
        state.anxiety += tension * 2.0 * dt;
    }

    if state.oxytocin > 40.0 {
        let factor = (state.oxytocin - 40.0) / 60.0;
        state.absorption += factor * 2.0 * dt;
    }

    // Oxytocin and vasopressin antagonize each other.
    if state.oxytocin > 50.0 && state.vasopressin > 30.0 {
        state.vasopressin -= (state.oxytocin - 50.0) * 0.02 * dt;
    }
    if state.vasopressin > 50.0 && state.oxytocin > 30.0 {
        state.oxytocin -= (state.vasopressin - 50.0) * 0.02 * dt;
    }

    if state.serotonin > 60.0 {
        let factor = (state.serotonin - 60.0) / 40.0;
        state.prolactin += factor * 3.0 * dt;
        state.dopamine -= factor * 4.0 * dt;
    }
}

// ---------------------------------------------------------------------------
// 8. Sexual inhibition and shutdown
// ---------------------------------------------------------------------------

fn apply_inhibition_and_shutdown(state: &mut AgentState, dt: f64) {
    // Self-monitoring during arousal builds the brake.
    if state.arousal > 40.0 && state.prefrontal > 55.0 {
        let build = ((state.arousal - 40.0) / 60.0) * ((state.prefrontal - 55.0) / 45.0);
        state.sexual_inhibition += build * 5.0 * dt;
    }
    state.sexual_inhibition = (state.sexual_inhibition - 10.0 * dt).max(0.0);

    // Overwhelm plus depletion collapses into shutdown.
    if state.anxiety > 80.0 && state.energy < 25.0 {
        state.shutdown += (state.anxiety - 80.0) / 20.0 * 3.0 * dt;
    }
    if state.shutdown > 30.0 {
        state.absorption -= (state.shutdown - 30.0) / 70.0 * 3.0 * dt;
    }
    state.shutdown = (state.shutdown - 6.0 * dt).max(0.0);
}

// ---------------------------------------------------------------------------
// 9. Health consequences
// ---------------------------------------------------------------------------

fn apply_health_consequences(state: &mut AgentState, dt: f64) {
    if state.dopamine > 85.0 {
        state.psychological_health -= (state.dopamine - 85.0) * 0.1 * dt;
    }
    if state.anxiety > 70.0 {
        state.psychological_health -= (state.anxiety - 70.0) * 0.1 * dt;
    }
    if state.arousal > 90.0 {
        state.physical_health -= (state.arousal - 90.0) * 0.15 * dt;
    }
    if state.absorption > 90.0 {
        state.psychological_health -= (state.absorption - 90.0) * 0.1 * dt;
    }
    if state.energy < 15.0 {
        state.physical_health -= (15.0 - state.energy) * 0.1 * dt;
    }
    if state.endorphins > 80.0 {
        state.physical_health -= (state.endorphins - 80.0) * 0.08 * dt;
    }
}
