//! Agent creation from traits.
//!
//! [`AgentTraits`] are the three fixed, per-run parameters of an agent:
//! testosterone, SSRI dose and chronic life stress. [`create_agent`] turns
//! them into a starting [`AgentState`] whose arousal, energy, anxiety and
//! vasopressin already reflect the testosterone level.

use hedonic_types::AgentState;
use serde::{Deserialize, Serialize};

/// Fixed traits of an agent, each on a `0..=100` scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTraits {
    /// Testosterone level. 50 is neutral.
    pub testosterone: f64,
    /// SSRI dose. 0 means unmedicated.
    pub ssri_level: f64,
    /// Background chronic stress.
    pub life_stress: f64,
}

impl Default for AgentTraits {
    fn default() -> Self {
        Self {
            testosterone: 50.0,
            ssri_level: 0.0,
            life_stress: 0.0,
        }
    }
}

/// Create an agent from its traits.
///
/// With `t = testosterone / 50`: arousal starts at `15 + 10t`, energy at
/// `75 + 10t`, anxiety at `35 - 10t` and vasopressin at `15 + 10t`. All
/// other fields take their defaults. Neutral traits reproduce
/// [`AgentState::default`] except for a slightly higher energy.
pub fn create_agent(traits: AgentTraits) -> AgentState {
    let t_factor = traits.testosterone / 50.0;
    AgentState {
        testosterone: traits.testosterone,
        ssri_level: traits.ssri_level,
        life_stress: traits.life_stress,
        arousal: 15.0 + 10.0 * t_factor,
        energy: 75.0 + 10.0 * t_factor,
        anxiety: 35.0 - 10.0 * t_factor,
        vasopressin: 15.0 + 10.0 * t_factor,
        ..AgentState::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn neutral_traits_match_defaults() {
        let state = create_agent(AgentTraits::default());
        let default = AgentState::default();
        assert!((state.arousal - default.arousal).abs() < 1e-9);
        assert!((state.anxiety - default.anxiety).abs() < 1e-9);
        assert!((state.vasopressin - default.vasopressin).abs() < 1e-9);
        assert!((state.energy - 85.0).abs() < 1e-9);
    }

    #[test]
    fn testosterone_shapes_the_start() {
        let low = create_agent(AgentTraits {
            testosterone: 0.0,
            ..AgentTraits::default()
        });
        let high = create_agent(AgentTraits {
            testosterone: 100.0,
            ..AgentTraits::default()
        });
        assert!((low.arousal - 15.0).abs() < 1e-9);
        assert!((high.arousal - 35.0).abs() < 1e-9);
        assert!((low.anxiety - 35.0).abs() < 1e-9);
        assert!((high.anxiety - 15.0).abs() < 1e-9);
        assert!((high.energy - 95.0).abs() < 1e-9);
    }

    #[test]
    fn traits_deserialize_with_defaults() {
        let traits: AgentTraits =
            serde_json::from_str(r#"{"ssri_level": 40.0}"#).unwrap_or_default();
        assert!((traits.ssri_level - 40.0).abs() < f64::EPSILON);
        assert!((traits.testosterone - 50.0).abs() < f64::EPSILON);
    }
}
