//! Reserve-gated neurotransmitter boosts.
//!
//! Every positive neurotransmitter gain an action produces goes through
//! [`nt_boost`]: the nominal amount is scaled by the remaining reserve, the
//! reserve is drawn down, part of the gain lands immediately and the rest is
//! queued for sustained delivery. Large boosts also schedule a delayed
//! opponent-process rebound.

use hedonic_types::{ActiveEffect, AgentState, Neurotransmitter, Rebound};

use crate::physiology::{
    ORGASM_IMMEDIATE_FRACTION, REBOUND_DELAY, REBOUND_DURATION, REBOUND_FRACTION,
    REBOUND_THRESHOLD, RESERVE_COST_PER_POINT, RESERVE_FLOOR_SCALE, SUSTAINED_DURATION,
    SUSTAINED_FRACTION,
};

/// How a boost splits between immediate and sustained delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoostProfile {
    /// 60% immediate, 40% over the sustained window.
    Standard,
    /// 90% immediate, 10% over the sustained window.
    Orgasm,
}

impl BoostProfile {
    /// Share of the scaled boost applied immediately.
    pub const fn immediate_fraction(self) -> f64 {
        match self {
            Self::Standard => 1.0 - SUSTAINED_FRACTION,
            Self::Orgasm => ORGASM_IMMEDIATE_FRACTION,
        }
    }
}

/// Apply a neurotransmitter boost of `raw_amount` nominal points.
///
/// Non-positive amounts are ignored.
///
/// 1. Scale by reserve: 15% at an empty reserve, 100% at a full one.
/// 2. SSRI caps dopamine boosts at 60% of normal at the maximum dose.
/// 3. Consume 0.5 reserve per raw point, floored at 0.
/// 4. Apply the immediate share, queue the remainder over 0.25h.
/// 5. If `raw_amount > 10`, queue a rebound of 30% of the scaled amount,
///    starting after 0.5h and spread over 1h.
pub fn nt_boost(
    state: &mut AgentState,
    nt: Neurotransmitter,
    raw_amount: f64,
    profile: BoostProfile,
) {
    if raw_amount <= 0.0 {
        return;
    }

    let reserve = state.reserves.get(nt);
    let scale = RESERVE_FLOOR_SCALE + 0.85 * (reserve / 100.0);
    let mut scaled = raw_amount * scale;

    if nt == Neurotransmitter::Dopamine && state.ssri_level > 0.0 {
        scaled *= 1.0 - (state.ssri_level / 100.0) * 0.4;
    }

    let slot = state.reserves.get_mut(nt);
    *slot = (*slot - raw_amount * RESERVE_COST_PER_POINT).max(0.0);

    let immediate_fraction = profile.immediate_fraction();
    let immediate = scaled * immediate_fraction;
    let sustained = scaled * (1.0 - immediate_fraction);

    let attribute = nt.attribute();
    state.add(attribute, immediate);

    if sustained > 0.0 {
        state.active_effects.push(ActiveEffect {
            attribute,
            rate: sustained / SUSTAINED_DURATION,
            remaining_hours: SUSTAINED_DURATION,
        });
    }

    if raw_amount > REBOUND_THRESHOLD {
        state.rebound_queue.push(Rebound {
            attribute,
            amount: -(scaled * REBOUND_FRACTION),
            delay_remaining: REBOUND_DELAY,
            duration: REBOUND_DURATION,
        });
    }
}

#[cfg(test)]
mod tests {
    use hedonic_types::Attribute;

    use super::*;

    #[test]
    fn non_positive_boost_is_ignored() {
        let mut state = AgentState::default();
        let before = state.clone();
        nt_boost(&mut state, Neurotransmitter::Dopamine, 0.0, BoostProfile::Standard);
        nt_boost(&mut state, Neurotransmitter::Dopamine, -5.0, BoostProfile::Standard);
        assert_eq!(state, before);
    }

    #[test]
    fn full_reserve_splits_sixty_forty() {
        let mut state = AgentState::default();
        nt_boost(&mut state, Neurotransmitter::Serotonin, 10.0, BoostProfile::Standard);
        assert!((state.serotonin - 56.0).abs() < 1e-9);
        assert_eq!(state.active_effects.len(), 1);
        let effect = state.active_effects.first().copied();
        assert_eq!(effect.map(|e| e.attribute), Some(Attribute::Serotonin));
        assert!(effect.is_some_and(|e| (e.rate - 16.0).abs() < 1e-9));
        assert!((state.reserves.serotonin - 95.0).abs() < 1e-9);
    }

    #[test]
    fn empty_reserve_still_delivers_floor() {
        let mut state = AgentState::default();
        state.reserves.endorphins = 0.0;
        nt_boost(&mut state, Neurotransmitter::Endorphins, 10.0, BoostProfile::Standard);
        // 10 * 0.15 * 0.6
        assert!((state.endorphins - 20.9).abs() < 1e-9);
        assert!(state.reserves.endorphins.abs() < f64::EPSILON);
    }

    #[test]
    fn orgasm_profile_is_mostly_immediate() {
        let mut state = AgentState::default();
        nt_boost(&mut state, Neurotransmitter::Oxytocin, 10.0, BoostProfile::Orgasm);
        assert!((state.oxytocin - 39.0).abs() < 1e-9);
    }

    #[test]
    fn ssri_caps_dopamine_only() {
        let mut state = AgentState {
            ssri_level: 100.0,
            ..AgentState::default()
        };
        nt_boost(&mut state, Neurotransmitter::Dopamine, 10.0, BoostProfile::Standard);
        nt_boost(&mut state, Neurotransmitter::Serotonin, 10.0, BoostProfile::Standard);
        assert!((state.dopamine - 53.6).abs() < 1e-9);
        assert!((state.serotonin - 56.0).abs() < 1e-9);
    }

    #[test]
    fn rebound_threshold_is_strict() {
        let mut state = AgentState::default();
        nt_boost(&mut state, Neurotransmitter::Dopamine, 10.0, BoostProfile::Standard);
        assert!(state.rebound_queue.is_empty());
        nt_boost(&mut state, Neurotransmitter::Dopamine, 10.5, BoostProfile::Standard);
        assert_eq!(state.rebound_queue.len(), 1);
        assert!(state.rebound_queue.iter().all(|r| r.amount < 0.0));
    }
}
