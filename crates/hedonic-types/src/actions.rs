//! The closed set of actions an agent can take.
//!
//! Durations, categories, predicates and effects live in the agents crate;
//! this module only names the actions and maps them to and from their
//! snake-case identifiers.

use serde::{Deserialize, Serialize};

/// Identifier of one catalog action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActionId {
    // --- Food ---
    /// Light snack.
    Snack,
    /// Full meal, causes drowsiness.
    Eat,

    // --- Rest ---
    /// Restful nap that resets most of the state.
    Sleep,

    // --- Sexual ---
    /// Light stimulation, teasing.
    LightStimulation,
    /// Intense stimulation.
    IntenseStimulation,
    /// Hold high arousal without release.
    Edging,
    /// Release.
    Orgasm,

    // --- Pain ---
    /// Spanking, pinching.
    LightPain,
    /// Ice or heat.
    TemperaturePlay,

    // --- Social ---
    /// Intimate cuddling.
    Cuddling,
    /// Receive a massage.
    Massage,

    // --- Breathwork ---
    /// Slow calming breathing.
    DeepBreathing,
    /// Cold water on the face, triggers the dive reflex.
    ColdFaceImmersion,
    /// Intense holotropic breathwork.
    HolotropicBreathing,

    // --- Rest ---
    /// Rest quietly.
    Rest,
    /// Do nothing, let time pass.
    Wait,

    // --- Drugs ---
    /// Empathogen.
    Mdma,
    /// Cannabis.
    Weed,
    /// Psilocybin.
    Mushrooms,
    /// Lysergic acid diethylamide.
    Lsd,
    /// Alkyl nitrites.
    Poppers,
    /// Dissociative.
    Ketamine,
    /// Nicotine.
    Tobacco,
    /// Coffee.
    Caffeine,
    /// Ethanol.
    Alcohol,
    /// Strong stimulant.
    Amphetamines,
    /// Short intense stimulant.
    Cocaine,
    /// Nitrous oxide.
    Nitrous,

    // --- Medical ---
    /// Take an SSRI dose.
    TakeSsri,
    /// Stop SSRI medication.
    StopSsri,
    /// Testosterone injection.
    TestosteroneInjection,
    /// Anti-androgen medication.
    AntiAndrogen,
    /// Therapy session.
    TherapySession,

    // --- Life ---
    /// Lose a job.
    JobLoss,
    /// Financial crisis.
    FinancialCrisis,
    /// End a relationship.
    Breakup,
    /// Get a job.
    GetJob,
    /// Resolve financial problems.
    ResolveFinances,
    /// Start a relationship.
    NewRelationship,
}

impl ActionId {
    /// Every action in catalog order.
    pub const ALL: [Self; 39] = [
        Self::Snack,
        Self::Eat,
        Self::Sleep,
        Self::LightStimulation,
        Self::IntenseStimulation,
        Self::Edging,
        Self::Orgasm,
        Self::LightPain,
        Self::TemperaturePlay,
        Self::Cuddling,
        Self::Massage,
        Self::DeepBreathing,
        Self::ColdFaceImmersion,
        Self::HolotropicBreathing,
        Self::Rest,
        Self::Wait,
        Self::Mdma,
        Self::Weed,
        Self::Mushrooms,
        Self::Lsd,
        Self::Poppers,
        Self::Ketamine,
        Self::Tobacco,
        Self::Caffeine,
        Self::Alcohol,
        Self::Amphetamines,
        Self::Cocaine,
        Self::Nitrous,
        Self::TakeSsri,
        Self::StopSsri,
        Self::TestosteroneInjection,
        Self::AntiAndrogen,
        Self::TherapySession,
        Self::JobLoss,
        Self::FinancialCrisis,
        Self::Breakup,
        Self::GetJob,
        Self::ResolveFinances,
        Self::NewRelationship,
    ];

    /// The snake-case identifier of this action.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Snack => "snack",
            Self::Eat => "eat",
            Self::Sleep => "sleep",
            Self::LightStimulation => "light_stimulation",
            Self::IntenseStimulation => "intense_stimulation",
            Self::Edging => "edging",
            Self::Orgasm => "orgasm",
            Self::LightPain => "light_pain",
            Self::TemperaturePlay => "temperature_play",
            Self::Cuddling => "cuddling",
            Self::Massage => "massage",
            Self::DeepBreathing => "deep_breathing",
            Self::ColdFaceImmersion => "cold_face_immersion",
            Self::HolotropicBreathing => "holotropic_breathing",
            Self::Rest => "rest",
            Self::Wait => "wait",
            Self::Mdma => "mdma",
            Self::Weed => "weed",
            Self::Mushrooms => "mushrooms",
            Self::Lsd => "lsd",
            Self::Poppers => "poppers",
            Self::Ketamine => "ketamine",
            Self::Tobacco => "tobacco",
            Self::Caffeine => "caffeine",
            Self::Alcohol => "alcohol",
            Self::Amphetamines => "amphetamines",
            Self::Cocaine => "cocaine",
            Self::Nitrous => "nitrous",
            Self::TakeSsri => "take_ssri",
            Self::StopSsri => "stop_ssri",
            Self::TestosteroneInjection => "testosterone_injection",
            Self::AntiAndrogen => "anti_androgen",
            Self::TherapySession => "therapy_session",
            Self::JobLoss => "job_loss",
            Self::FinancialCrisis => "financial_crisis",
            Self::Breakup => "breakup",
            Self::GetJob => "get_job",
            Self::ResolveFinances => "resolve_finances",
            Self::NewRelationship => "new_relationship",
        }
    }

    /// Look an action up by its snake-case identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|id| id.name() == name)
    }
}

impl core::fmt::Display for ActionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_are_unique_and_resolvable() {
        for id in ActionId::ALL {
            assert_eq!(ActionId::from_name(id.name()), Some(id));
        }
        let mut names: Vec<&str> = ActionId::ALL.iter().map(|id| id.name()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ActionId::ALL.len());
    }

    #[test]
    fn unknown_names_do_not_resolve() {
        assert_eq!(ActionId::from_name("teleport"), None);
        assert_eq!(ActionId::from_name("Orgasm"), None);
    }

    #[test]
    fn serde_name_matches_display() {
        let json = serde_json::to_string(&ActionId::ColdFaceImmersion).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", ActionId::ColdFaceImmersion));
    }
}
