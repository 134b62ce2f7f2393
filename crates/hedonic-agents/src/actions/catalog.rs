//! Static metadata for each action: duration, category, description and
//! the precondition that gates it.

use hedonic_types::{ActionId, AgentState, Category};

/// Hours the action occupies.
///
/// - Snack: 0.1
/// - Eat: 0.5
/// - Sleep: 2.0
/// - Stimulation, edging: 0.25
/// - Orgasm: 0.1
/// - Cold face immersion, poppers, nitrous: 0.05
/// - Drugs: 0.05 to 6.0
/// - Medical, life: 0.1 to 1.0
#[allow(clippy::match_same_arms)] // Each action has its own tuned duration; keeping them separate for readability.
pub const fn duration(id: ActionId) -> f64 {
    match id {
        ActionId::Snack => 0.1,
        ActionId::Eat => 0.5,
        ActionId::Sleep => 2.0,
        ActionId::LightStimulation => 0.25,
        ActionId::IntenseStimulation => 0.25,
        ActionId::Edging => 0.25,
        ActionId::Orgasm => 0.1,
        ActionId::LightPain => 0.1,
        ActionId::TemperaturePlay => 0.1,
        ActionId::Cuddling => 0.5,
        ActionId::Massage => 0.5,
        ActionId::DeepBreathing => 0.25,
        ActionId::ColdFaceImmersion => 0.05,
        ActionId::HolotropicBreathing => 0.5,
        ActionId::Rest => 0.25,
        ActionId::Wait => 0.25,
        ActionId::Mdma => 3.0,
        ActionId::Weed => 2.0,
        ActionId::Mushrooms => 4.0,
        ActionId::Lsd => 6.0,
        ActionId::Poppers => 0.05,
        ActionId::Ketamine => 1.0,
        ActionId::Tobacco => 0.1,
        ActionId::Caffeine => 2.0,
        ActionId::Alcohol => 1.5,
        ActionId::Amphetamines => 4.0,
        ActionId::Cocaine => 0.5,
        ActionId::Nitrous => 0.05,
        ActionId::TakeSsri => 0.1,
        ActionId::StopSsri => 0.1,
        ActionId::TestosteroneInjection => 0.25,
        ActionId::AntiAndrogen => 0.1,
        ActionId::TherapySession => 1.0,
        ActionId::JobLoss => 0.5,
        ActionId::FinancialCrisis => 0.5,
        ActionId::Breakup => 1.0,
        ActionId::GetJob => 0.5,
        ActionId::ResolveFinances => 0.5,
        ActionId::NewRelationship => 1.0,
    }
}

/// Category the action belongs to, for tolerance, receptivity and cue
/// learning.
pub const fn category(id: ActionId) -> Category {
    match id {
        ActionId::Snack | ActionId::Eat => Category::Food,
        ActionId::Sleep | ActionId::Rest | ActionId::Wait => Category::Rest,
        ActionId::LightStimulation
        | ActionId::IntenseStimulation
        | ActionId::Edging
        | ActionId::Orgasm => Category::Sexual,
        ActionId::LightPain | ActionId::TemperaturePlay => Category::Pain,
        ActionId::Cuddling | ActionId::Massage => Category::Social,
        ActionId::DeepBreathing | ActionId::ColdFaceImmersion | ActionId::HolotropicBreathing => {
            Category::Breathwork
        }
        ActionId::Mdma
        | ActionId::Weed
        | ActionId::Mushrooms
        | ActionId::Lsd
        | ActionId::Poppers
        | ActionId::Ketamine
        | ActionId::Tobacco
        | ActionId::Caffeine
        | ActionId::Alcohol
        | ActionId::Amphetamines
        | ActionId::Cocaine
        | ActionId::Nitrous => Category::Drugs,
        ActionId::TakeSsri
        | ActionId::StopSsri
        | ActionId::TestosteroneInjection
        | ActionId::AntiAndrogen
        | ActionId::TherapySession => Category::Medical,
        ActionId::JobLoss
        | ActionId::FinancialCrisis
        | ActionId::Breakup
        | ActionId::GetJob
        | ActionId::ResolveFinances
        | ActionId::NewRelationship => Category::Life,
    }
}

/// One-line human readable description.
pub const fn description(id: ActionId) -> &'static str {
    match id {
        ActionId::Snack => "Have a light snack",
        ActionId::Eat => "Eat a full meal (causes drowsiness)",
        ActionId::Sleep => "Take a restful nap",
        ActionId::LightStimulation => "Light sexual stimulation, teasing",
        ActionId::IntenseStimulation => "Intense sexual stimulation",
        ActionId::Edging => "Edge: maintain high arousal without release",
        ActionId::Orgasm => "Orgasm; character depends on vasopressin/oxytocin balance",
        ActionId::LightPain => "Light pain stimulus (spanking, pinching)",
        ActionId::TemperaturePlay => "Temperature play (ice, heat)",
        ActionId::Cuddling => "Intimate cuddling and touch",
        ActionId::Massage => "Receive a relaxing massage",
        ActionId::DeepBreathing => "Deep, slow breathing exercises",
        ActionId::ColdFaceImmersion => "Cold water face immersion, mammalian dive reflex",
        ActionId::HolotropicBreathing => "Intense holotropic breathwork",
        ActionId::Rest => "Rest quietly",
        ActionId::Wait => "Wait, do nothing",
        ActionId::Mdma => "MDMA: empathogenic serotonin/oxytocin release",
        ActionId::Weed => "Cannabis: relaxation, absorption, munchies",
        ActionId::Mushrooms => "Psilocybin: deep absorption, risk of bad trip",
        ActionId::Lsd => "LSD: long absorption boost, risk of bad trip",
        ActionId::Poppers => "Poppers: brief vasodilation, arousal spike",
        ActionId::Ketamine => "Ketamine: dissociative, absorption, pain relief",
        ActionId::Tobacco => "Tobacco: mild stimulant, brief anxiety relief",
        ActionId::Caffeine => "Caffeine: alertness, wakefulness",
        ActionId::Alcohol => "Alcohol: anxiolytic, disinhibition",
        ActionId::Amphetamines => "Amphetamines: strong stimulant, dopamine surge",
        ActionId::Cocaine => "Cocaine: intense short dopamine spike, harsh crash",
        ActionId::Nitrous => "Nitrous oxide: brief euphoria, dissociation",
        ActionId::TakeSsri => "Take SSRI medication",
        ActionId::StopSsri => "Stop SSRI medication (withdrawal)",
        ActionId::TestosteroneInjection => "Testosterone injection",
        ActionId::AntiAndrogen => "Anti-androgen medication",
        ActionId::TherapySession => "Therapy session",
        ActionId::JobLoss => "Job loss",
        ActionId::FinancialCrisis => "Financial crisis",
        ActionId::Breakup => "Breakup",
        ActionId::GetJob => "Get a new job",
        ActionId::ResolveFinances => "Resolve financial issues",
        ActionId::NewRelationship => "New relationship",
    }
}

/// Whether the action's precondition holds in `state`.
///
/// Actions without a precondition are always allowed.
pub const fn can_apply(id: ActionId, state: &AgentState) -> bool {
    match id {
        ActionId::Snack => state.hunger > 10.0,
        ActionId::Eat => state.hunger > 25.0,
        ActionId::Sleep => state.energy < 60.0 || state.sleepiness > 50.0,
        ActionId::IntenseStimulation => state.arousal > 30.0,
        ActionId::Edging => state.arousal > 50.0,
        ActionId::Orgasm => state.arousal > 70.0 && state.prolactin < 30.0,
        ActionId::ColdFaceImmersion => state.energy > 10.0,
        ActionId::HolotropicBreathing
        | ActionId::Mdma
        | ActionId::Mushrooms
        | ActionId::Lsd => state.energy > 30.0,
        ActionId::Weed
        | ActionId::Poppers
        | ActionId::Ketamine
        | ActionId::Tobacco
        | ActionId::Amphetamines
        | ActionId::Cocaine
        | ActionId::Nitrous => state.energy > 20.0,
        ActionId::Alcohol => state.energy > 15.0,
        ActionId::StopSsri => state.ssri_level > 10.0,
        ActionId::AntiAndrogen => state.testosterone > 10.0,
        ActionId::JobLoss => state.life_stress < 80.0,
        ActionId::FinancialCrisis => state.life_stress < 85.0,
        ActionId::GetJob => state.life_stress > 15.0,
        ActionId::ResolveFinances => state.life_stress > 10.0,
        ActionId::LightStimulation
        | ActionId::LightPain
        | ActionId::TemperaturePlay
        | ActionId::Cuddling
        | ActionId::Massage
        | ActionId::DeepBreathing
        | ActionId::Rest
        | ActionId::Wait
        | ActionId::Caffeine
        | ActionId::TakeSsri
        | ActionId::TestosteroneInjection
        | ActionId::TherapySession
        | ActionId::Breakup
        | ActionId::NewRelationship => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_duration_is_positive() {
        for id in ActionId::ALL {
            assert!(duration(id) > 0.0, "{id} has no duration");
            assert!(!description(id).is_empty());
        }
    }

    #[test]
    fn category_sizes() {
        let count = |cat: Category| ActionId::ALL.iter().filter(|id| category(**id) == cat).count();
        assert_eq!(count(Category::Drugs), 12);
        assert_eq!(count(Category::Sexual), 4);
        assert_eq!(count(Category::Rest), 3);
        assert_eq!(count(Category::Medical), 5);
        assert_eq!(count(Category::Life), 6);
    }

    #[test]
    fn orgasm_requires_arousal_and_low_prolactin() {
        let mut state = AgentState {
            arousal: 75.0,
            ..AgentState::default()
        };
        assert!(can_apply(ActionId::Orgasm, &state));
        state.prolactin = 30.0;
        assert!(!can_apply(ActionId::Orgasm, &state));
        state.prolactin = 10.0;
        state.arousal = 70.0;
        assert!(!can_apply(ActionId::Orgasm, &state));
    }

    #[test]
    fn sleep_needs_fatigue() {
        let rested = AgentState::default();
        assert!(!can_apply(ActionId::Sleep, &rested));
        let tired = AgentState {
            energy: 59.0,
            ..AgentState::default()
        };
        assert!(can_apply(ActionId::Sleep, &tired));
    }

    #[test]
    fn default_state_blocks_only_gated_actions() {
        let state = AgentState::default();
        let blocked: Vec<ActionId> = ActionId::ALL
            .into_iter()
            .filter(|id| !can_apply(*id, &state))
            .collect();
        assert_eq!(
            blocked,
            vec![
                ActionId::Eat,
                ActionId::Sleep,
                ActionId::IntenseStimulation,
                ActionId::Edging,
                ActionId::Orgasm,
                ActionId::StopSsri,
                ActionId::GetJob,
                ActionId::ResolveFinances,
            ]
        );
    }
}
