//! Effect functions for every catalog action.
//!
//! Each handler mutates the state in place and takes the action's
//! effectiveness `eff` in `[0, 1]`. Benefits (positive neurotransmitter
//! boosts, anxiety relief, absorption) are multiplied by `eff`. Costs
//! (energy, prefrontal drop, hunger, digestion, post-orgasm crash) are not,
//! so a backfired action at `eff = 0` still costs what it costs.
//!
//! Handlers never clamp; the decay step does. Medical and life actions
//! bound their trait to `[0, 100]` because traits are never clamped
//! elsewhere.
//!
//! Handlers never recurse. A handler that loses control (premature or
//! forced orgasm) returns [`EffectOutcome::ForcedRelease`] and leaves the
//! follow-up to the orchestrator.

use hedonic_types::{ActionId, AgentState, Attribute, Neurotransmitter};

use crate::boost::{BoostProfile, nt_boost};
use crate::chance::Chance;
use crate::physiology::{
    SLEEP_RESERVE_RESTORE, SLEEP_SALIENCE_REDUCE, SLEEP_TOLERANCE_REDUCE, effective_baseline,
};

/// What the orchestrator must do after an effect has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum EffectOutcome {
    /// Nothing further.
    Settled,
    /// Arousal ran away: apply the orgasm effect once, at the same
    /// effectiveness.
    ForcedRelease,
}

/// Apply the effect of `id` at effectiveness `eff`.
pub fn apply_effect(
    id: ActionId,
    state: &mut AgentState,
    eff: f64,
    chance: &mut Chance,
) -> EffectOutcome {
    match id {
        ActionId::Snack => snack(state, eff),
        ActionId::Eat => eat(state, eff),
        ActionId::Sleep => sleep(state),
        ActionId::LightStimulation => light_stimulation(state, eff),
        ActionId::IntenseStimulation => return intense_stimulation(state, eff, chance),
        ActionId::Edging => return edging(state, eff, chance),
        ActionId::Orgasm => orgasm(state, eff),
        ActionId::LightPain => light_pain(state, eff),
        ActionId::TemperaturePlay => temperature_play(state, eff),
        ActionId::Cuddling => cuddling(state, eff),
        ActionId::Massage => massage(state, eff),
        ActionId::DeepBreathing => deep_breathing(state, eff),
        ActionId::ColdFaceImmersion => cold_face_immersion(state, eff),
        ActionId::HolotropicBreathing => holotropic_breathing(state, eff),
        ActionId::Rest => rest(state),
        ActionId::Wait => wait(state),
        ActionId::Mdma => mdma(state, eff, chance),
        ActionId::Weed => weed(state, eff),
        ActionId::Mushrooms => mushrooms(state, eff, chance),
        ActionId::Lsd => lsd(state, eff, chance),
        ActionId::Poppers => poppers(state, eff),
        ActionId::Ketamine => ketamine(state, eff),
        ActionId::Tobacco => tobacco(state, eff),
        ActionId::Caffeine => caffeine(state, eff),
        ActionId::Alcohol => alcohol(state, eff, chance),
        ActionId::Amphetamines => amphetamines(state, eff),
        ActionId::Cocaine => cocaine(state, eff, chance),
        ActionId::Nitrous => nitrous(state, eff),
        ActionId::TakeSsri => take_ssri(state, eff),
        ActionId::StopSsri => stop_ssri(state),
        ActionId::TestosteroneInjection => testosterone_injection(state, eff),
        ActionId::AntiAndrogen => anti_androgen(state),
        ActionId::TherapySession => therapy_session(state),
        ActionId::JobLoss => job_loss(state),
        ActionId::FinancialCrisis => financial_crisis(state),
        ActionId::Breakup => breakup(state),
        ActionId::GetJob => get_job(state, eff),
        ActionId::ResolveFinances => resolve_finances(state),
        ActionId::NewRelationship => new_relationship(state, eff),
    }
    EffectOutcome::Settled
}

fn boost(state: &mut AgentState, nt: Neurotransmitter, amount: f64) {
    nt_boost(state, nt, amount, BoostProfile::Standard);
}

fn release(state: &mut AgentState, nt: Neurotransmitter, amount: f64) {
    nt_boost(state, nt, amount, BoostProfile::Orgasm);
}

fn bound_trait(value: &mut f64) {
    *value = value.clamp(0.0, 100.0);
}

fn bad_trip(state: &mut AgentState) {
    state.anxiety += 40.0;
    state.absorption = 10.0;
    state.prefrontal += 20.0;
}

// ---------------------------------------------------------------------------
// Food and rest
// ---------------------------------------------------------------------------

fn snack(s: &mut AgentState, eff: f64) {
    s.hunger -= 15.0;
    s.digesting += 10.0;
    s.energy += 2.0;
    boost(s, Neurotransmitter::Dopamine, 5.0 * eff);
    s.anxiety -= 3.0 * eff;
}

fn eat(s: &mut AgentState, eff: f64) {
    s.hunger -= 50.0;
    s.digesting += 50.0;
    s.sleepiness += 15.0;
    s.arousal -= 10.0;
    s.prefrontal -= 5.0;
    s.energy += 5.0;
    boost(s, Neurotransmitter::Dopamine, 10.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 8.0 * eff);
    s.anxiety -= 10.0 * eff;
    s.absorption += 5.0 * eff;
}

/// Sleep resets most of the state rather than nudging it.
///
/// Dopamine, anxiety, absorption, prolactin and vasopressin return to the
/// agent's trait-adjusted baselines. Reserves refill by 40, every category
/// loses 0.15 tolerance and 0.05 cue salience, queued effects and rebounds
/// are dropped, the inhibition brake is released and shutdown eases by 40.
fn sleep(s: &mut AgentState) {
    for attribute in [
        Attribute::Dopamine,
        Attribute::Anxiety,
        Attribute::Absorption,
        Attribute::Prolactin,
        Attribute::Vasopressin,
    ] {
        if let Some(baseline) = effective_baseline(s, attribute) {
            *s.get_mut(attribute) = baseline;
        }
    }

    s.energy += 35.0;
    s.hunger += 10.0;
    s.serotonin += 10.0;
    s.psychological_health += 2.0;
    s.arousal = 10.0;
    s.edging_buildup = 0.0;
    s.prefrontal = 60.0;
    s.sleepiness = 10.0;
    s.digesting = 0.0;

    s.reserves.update_all(|_, reserve| reserve + SLEEP_RESERVE_RESTORE);
    s.tolerance
        .update_all(|_, tolerance| (tolerance - SLEEP_TOLERANCE_REDUCE).max(0.0));
    s.active_effects.clear();
    s.rebound_queue.clear();
    s.cue_salience
        .update_all(|_, salience| (salience - SLEEP_SALIENCE_REDUCE).max(0.0));

    s.sexual_inhibition = 0.0;
    s.shutdown = (s.shutdown - 40.0).max(0.0);
}

fn rest(s: &mut AgentState) {
    s.energy += 5.0;
    s.prefrontal += 5.0;
    s.anxiety -= 5.0;
    s.absorption -= 5.0;
}

fn wait(s: &mut AgentState) {
    s.energy += 2.0;
    s.anxiety += 3.0;
    s.absorption -= 3.0;
}

// ---------------------------------------------------------------------------
// Sexual
// ---------------------------------------------------------------------------

fn light_stimulation(s: &mut AgentState, eff: f64) {
    s.edging_buildup += 10.0;
    s.energy -= 3.0;
    s.prefrontal -= 5.0;
    s.arousal += 15.0 * eff;
    boost(s, Neurotransmitter::Dopamine, 10.0 * eff);
    s.anxiety -= 5.0 * eff;
    s.absorption += 10.0 * eff;
    s.vasopressin += 8.0 * eff;
}

fn intense_stimulation(s: &mut AgentState, eff: f64, chance: &mut Chance) -> EffectOutcome {
    s.edging_buildup += 25.0;
    s.energy -= 8.0;
    s.prefrontal -= 15.0;
    s.arousal += 30.0 * eff;
    boost(s, Neurotransmitter::Dopamine, 20.0 * eff);
    boost(s, Neurotransmitter::Endorphins, 10.0 * eff);
    s.anxiety -= 10.0 * eff;
    s.absorption += 20.0 * eff;
    s.vasopressin += 15.0 * eff;

    // Premature release.
    if s.arousal > 70.0 && chance.hits(0.08) {
        return EffectOutcome::ForcedRelease;
    }
    EffectOutcome::Settled
}

fn edging(s: &mut AgentState, eff: f64, chance: &mut Chance) -> EffectOutcome {
    s.edging_buildup += 15.0;
    s.energy -= 5.0;
    s.prefrontal -= 10.0;
    s.anxiety += 5.0;
    s.arousal = (s.arousal + 10.0 * eff).min(95.0);
    let drive = (15.0 + s.edging_buildup * 0.2) * eff;
    boost(s, Neurotransmitter::Dopamine, drive);
    boost(s, Neurotransmitter::Endorphins, 5.0 * eff);
    s.absorption += 15.0 * eff;
    s.vasopressin += 12.0 * eff;

    // Losing control.
    if s.arousal > 80.0 && chance.hits(0.12) {
        return EffectOutcome::ForcedRelease;
    }
    EffectOutcome::Settled
}

/// Release: a brief spike, then the crash.
///
/// The character depends on the vasopressin/oxytocin balance. A
/// vasopressin-dominant release is sharper (more vasopressin and dopamine),
/// an oxytocin-dominant one is more diffuse (more oxytocin and serotonin).
/// Accumulated edging buildup adds to the endorphin spike and to the
/// prolactin surge. The prolactin surge, dopamine crash and post-orgasm
/// resets are costs and do not scale with `eff`.
pub fn orgasm(s: &mut AgentState, eff: f64) {
    let bonus = s.edging_buildup * 0.3;
    let vaso_oxy_ratio = s.vasopressin / s.oxytocin.max(10.0);

    release(s, Neurotransmitter::Endorphins, (50.0 + bonus) * eff);

    if vaso_oxy_ratio > 1.0 {
        s.vasopressin += 20.0 * eff;
        release(s, Neurotransmitter::Oxytocin, 25.0 * eff);
        release(s, Neurotransmitter::Dopamine, 10.0 * eff);
    } else {
        release(s, Neurotransmitter::Oxytocin, 45.0 * eff);
        s.vasopressin += 5.0 * eff;
        release(s, Neurotransmitter::Serotonin, 5.0 * eff);
    }

    let prolactin_surge = 50.0 + s.edging_buildup * 0.3;
    s.prolactin += prolactin_surge;
    s.dopamine = (s.dopamine * 0.5).max(25.0);

    s.arousal = 5.0;
    s.energy -= 20.0;
    s.prefrontal = 25.0;
    s.sleepiness += 15.0 + prolactin_surge * 0.1;
    release(s, Neurotransmitter::Serotonin, 10.0 * eff);

    s.anxiety = (s.anxiety - 30.0 * eff).max(5.0);
    s.absorption = (s.absorption + 25.0 * eff).min(100.0);

    s.time_since_orgasm = 0.0;
    s.edging_buildup = 0.0;
}

// ---------------------------------------------------------------------------
// Pain and social
// ---------------------------------------------------------------------------

fn light_pain(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 5.0;
    s.anxiety += 3.0;
    boost(s, Neurotransmitter::Endorphins, 20.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 8.0 * eff);
    s.arousal += 10.0 * eff;
    s.absorption += 15.0 * eff;
    s.vasopressin += 12.0 * eff;
}

fn temperature_play(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 8.0;
    s.anxiety += 3.0;
    boost(s, Neurotransmitter::Endorphins, 15.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 5.0 * eff);
    s.arousal += 8.0 * eff;
    s.absorption += 12.0 * eff;
    s.vasopressin += 10.0 * eff;
}

fn cuddling(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 5.0;
    boost(s, Neurotransmitter::Oxytocin, 25.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 10.0 * eff);
    s.psychological_health += eff;
    s.arousal += 5.0 * eff;
    s.anxiety -= 15.0 * eff;
    s.absorption += 10.0 * eff;
    s.vasopressin -= 8.0 * eff;
}

fn massage(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 10.0;
    boost(s, Neurotransmitter::Oxytocin, 15.0 * eff);
    boost(s, Neurotransmitter::Endorphins, 12.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 8.0 * eff);
    s.energy += 5.0;
    s.physical_health += eff;
    s.anxiety -= 20.0 * eff;
    s.absorption += 15.0 * eff;
    s.vasopressin -= 10.0 * eff;
}

// ---------------------------------------------------------------------------
// Breathwork
// ---------------------------------------------------------------------------

fn deep_breathing(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 10.0;
    boost(s, Neurotransmitter::Serotonin, 8.0 * eff);
    s.psychological_health += eff;
    s.energy += 3.0;
    s.anxiety -= 15.0 * eff;
    s.absorption += 8.0 * eff;
}

/// Dive reflex: a cold startle followed by strong arousal suppression and
/// net calming.
fn cold_face_immersion(s: &mut AgentState, eff: f64) {
    s.anxiety += 5.0;
    s.energy -= 3.0;
    s.arousal -= 15.0 * eff;
    s.prefrontal -= 10.0;
    boost(s, Neurotransmitter::Endorphins, 12.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 5.0 * eff);
    s.anxiety -= 12.0 * eff;
    s.absorption += 5.0 * eff;
    s.sleepiness -= 10.0 * eff;
}

fn holotropic_breathing(s: &mut AgentState, eff: f64) {
    s.energy -= 10.0;
    s.prefrontal -= 25.0;
    boost(s, Neurotransmitter::Endorphins, 25.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 15.0 * eff);
    s.arousal += 15.0 * eff;
    s.anxiety -= 10.0 * eff;
    s.absorption += 30.0 * eff;
    s.vasopressin += 10.0 * eff;
    boost(s, Neurotransmitter::Oxytocin, 10.0 * eff);
}

// ---------------------------------------------------------------------------
// Drugs
// ---------------------------------------------------------------------------

fn mdma(s: &mut AgentState, eff: f64, chance: &mut Chance) {
    s.energy -= 25.0;
    s.prefrontal -= 30.0;
    boost(s, Neurotransmitter::Serotonin, 40.0 * eff);
    boost(s, Neurotransmitter::Oxytocin, 35.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 25.0 * eff);
    boost(s, Neurotransmitter::Endorphins, 20.0 * eff);
    s.anxiety -= 30.0 * eff;
    // Overwhelmed.
    if chance.hits(0.05) {
        s.anxiety += 30.0;
        s.physical_health -= 5.0;
    }
}

fn weed(s: &mut AgentState, eff: f64) {
    s.energy -= 5.0;
    s.prefrontal -= 20.0;
    s.hunger += 25.0;
    s.sleepiness += 15.0;
    boost(s, Neurotransmitter::Dopamine, 15.0 * eff);
    s.absorption += 25.0 * eff;
    s.anxiety -= 20.0 * eff;
}

fn mushrooms(s: &mut AgentState, eff: f64, chance: &mut Chance) {
    s.energy -= 10.0;
    s.prefrontal -= 35.0;
    s.anxiety += 15.0;
    s.absorption += 40.0 * eff;
    boost(s, Neurotransmitter::Endorphins, 20.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 15.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 10.0 * eff);
    if chance.hits(0.15) {
        bad_trip(s);
    }
}

fn lsd(s: &mut AgentState, eff: f64, chance: &mut Chance) {
    s.energy -= 15.0;
    s.prefrontal -= 40.0;
    s.anxiety += 20.0;
    s.sleepiness -= 20.0;
    s.absorption += 45.0 * eff;
    boost(s, Neurotransmitter::Dopamine, 15.0 * eff);
    boost(s, Neurotransmitter::Serotonin, 10.0 * eff);
    boost(s, Neurotransmitter::Endorphins, 15.0 * eff);
    if chance.hits(0.10) {
        bad_trip(s);
    }
}

fn poppers(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 25.0;
    s.energy -= 3.0;
    s.physical_health -= 2.0;
    s.arousal += 25.0 * eff;
    s.absorption += 20.0 * eff;
    s.vasopressin += 15.0 * eff;
}

fn ketamine(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 40.0;
    s.energy -= 10.0;
    s.sleepiness += 15.0;
    s.arousal -= 15.0;
    s.absorption += 35.0 * eff;
    boost(s, Neurotransmitter::Endorphins, 25.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 10.0 * eff);
    s.anxiety -= 20.0 * eff;
}

fn tobacco(s: &mut AgentState, eff: f64) {
    s.physical_health -= 1.0;
    boost(s, Neurotransmitter::Dopamine, 8.0 * eff);
    s.arousal += 5.0 * eff;
    s.anxiety -= 8.0 * eff;
    s.energy += 3.0;
}

fn caffeine(s: &mut AgentState, eff: f64) {
    s.anxiety += 10.0;
    boost(s, Neurotransmitter::Dopamine, 8.0 * eff);
    s.arousal += 10.0 * eff;
    s.sleepiness -= 25.0 * eff;
    s.energy += 10.0;
    s.prefrontal += 10.0 * eff;
}

fn alcohol(s: &mut AgentState, eff: f64, chance: &mut Chance) {
    s.prefrontal -= 25.0;
    s.energy -= 10.0;
    s.sleepiness += 15.0;
    s.physical_health -= 2.0;
    boost(s, Neurotransmitter::Dopamine, 15.0 * eff);
    s.anxiety -= 25.0 * eff;
    s.absorption += 10.0 * eff;
    s.arousal += 10.0 * eff;
    // Vomiting.
    if s.arousal > 60.0 && chance.hits(0.10) {
        s.hunger += 20.0;
        s.energy -= 10.0;
        s.digesting = 0.0;
    }
}

fn amphetamines(s: &mut AgentState, eff: f64) {
    s.anxiety += 20.0;
    s.physical_health -= 3.0;
    s.hunger -= 20.0;
    s.sleepiness -= 30.0;
    boost(s, Neurotransmitter::Dopamine, 35.0 * eff);
    s.arousal += 25.0 * eff;
    s.energy += 20.0;
    s.prefrontal += 10.0 * eff;
}

fn cocaine(s: &mut AgentState, eff: f64, chance: &mut Chance) {
    s.anxiety += 15.0;
    s.prefrontal -= 10.0;
    s.physical_health -= 3.0;
    boost(s, Neurotransmitter::Dopamine, 45.0 * eff);
    s.arousal += 20.0 * eff;
    s.energy += 15.0;
    if chance.hits(0.08) {
        s.anxiety += 35.0;
    }
}

fn nitrous(s: &mut AgentState, eff: f64) {
    s.prefrontal -= 20.0;
    s.energy -= 2.0;
    s.physical_health -= 2.0;
    boost(s, Neurotransmitter::Endorphins, 20.0 * eff);
    s.absorption += 25.0 * eff;
}

// ---------------------------------------------------------------------------
// Medical
// ---------------------------------------------------------------------------

fn take_ssri(s: &mut AgentState, eff: f64) {
    s.ssri_level += 8.0;
    s.serotonin += 3.0 * eff;
    s.anxiety += 5.0;
    bound_trait(&mut s.ssri_level);
}

fn stop_ssri(s: &mut AgentState) {
    s.ssri_level -= 12.0;
    s.anxiety += 10.0;
    s.serotonin -= 5.0;
    bound_trait(&mut s.ssri_level);
}

fn testosterone_injection(s: &mut AgentState, eff: f64) {
    s.testosterone += 10.0;
    s.energy += 5.0;
    s.arousal += 5.0 * eff;
    s.anxiety += 3.0;
    bound_trait(&mut s.testosterone);
}

fn anti_androgen(s: &mut AgentState) {
    s.testosterone -= 10.0;
    s.anxiety -= 3.0;
    s.arousal -= 5.0;
    bound_trait(&mut s.testosterone);
}

fn therapy_session(s: &mut AgentState) {
    s.life_stress -= 8.0;
    s.psychological_health += 3.0;
    s.anxiety -= 10.0;
    s.prefrontal += 10.0;
    bound_trait(&mut s.life_stress);
}

// ---------------------------------------------------------------------------
// Life events
// ---------------------------------------------------------------------------

fn job_loss(s: &mut AgentState) {
    s.life_stress += 25.0;
    s.anxiety += 20.0;
    s.psychological_health -= 5.0;
    s.energy -= 10.0;
    bound_trait(&mut s.life_stress);
}

fn financial_crisis(s: &mut AgentState) {
    s.life_stress += 30.0;
    s.anxiety += 25.0;
    s.psychological_health -= 8.0;
    bound_trait(&mut s.life_stress);
}

fn breakup(s: &mut AgentState) {
    s.life_stress += 20.0;
    s.anxiety += 15.0;
    s.oxytocin -= 15.0;
    s.psychological_health -= 10.0;
    bound_trait(&mut s.life_stress);
}

fn get_job(s: &mut AgentState, eff: f64) {
    s.life_stress -= 20.0;
    s.anxiety -= 10.0;
    boost(s, Neurotransmitter::Dopamine, 10.0 * eff);
    s.psychological_health += 3.0;
    bound_trait(&mut s.life_stress);
}

fn resolve_finances(s: &mut AgentState) {
    s.life_stress -= 15.0;
    s.anxiety -= 8.0;
    s.psychological_health += 2.0;
    bound_trait(&mut s.life_stress);
}

fn new_relationship(s: &mut AgentState, eff: f64) {
    s.life_stress -= 10.0;
    boost(s, Neurotransmitter::Oxytocin, 20.0 * eff);
    boost(s, Neurotransmitter::Dopamine, 15.0 * eff);
    s.anxiety -= 5.0;
    s.psychological_health += 5.0;
    bound_trait(&mut s.life_stress);
}
