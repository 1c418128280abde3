//! Startup configuration
//!
//! Only the values the plugin starts from live here. A button picked at
//! runtime with the modifier is never written back.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{Error, Result};
use crate::input::Button;
use crate::memory::layout::{player, rdram};
use crate::player::StateGate;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunButtonConfig {
    /// Button bound to run when the plugin initializes
    pub default_button: Button,
    /// Which character states allow the boost
    pub state_gate: StateGate,
    /// Player actor instance address
    pub player_actor: u32,
}

impl Default for RunButtonConfig {
    fn default() -> Self {
        Self {
            default_button: Button::L,
            state_gate: StateGate::Extended,
            player_actor: player::DEFAULT_ACTOR,
        }
    }
}

impl RunButtonConfig {
    /// Create a new configuration builder
    pub fn builder() -> RunButtonConfigBuilder {
        RunButtonConfigBuilder::default()
    }

    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config = Self::from_toml_str(&content)?;
        debug!("Loaded config from {}", path.as_ref().display());
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that every player field the controller touches lies inside
    /// KSEG0 RDRAM and that the actor is word aligned
    pub fn validate(&self) -> Result<()> {
        let end = rdram::KSEG0_BASE + rdram::SIZE as u32;
        if !(rdram::KSEG0_BASE..end).contains(&self.player_actor) {
            return Err(Error::InvalidConfig(format!(
                "player_actor {:#010x} is outside RDRAM",
                self.player_actor
            )));
        }
        let fields_end = self.player_actor.checked_add(player::FIELDS_END);
        if fields_end.is_none_or(|fields_end| fields_end > end) {
            return Err(Error::InvalidConfig(format!(
                "player_actor {:#010x} leaves its fields past the end of RDRAM",
                self.player_actor
            )));
        }
        if !self.player_actor.is_multiple_of(4) {
            return Err(Error::InvalidConfig(format!(
                "player_actor {:#010x} is not word aligned",
                self.player_actor
            )));
        }
        Ok(())
    }
}

/// Builder for RunButtonConfig
#[derive(Debug, Clone, Default)]
pub struct RunButtonConfigBuilder {
    default_button: Option<Button>,
    state_gate: Option<StateGate>,
    player_actor: Option<u32>,
}

impl RunButtonConfigBuilder {
    pub fn default_button(mut self, button: Button) -> Self {
        self.default_button = Some(button);
        self
    }

    pub fn state_gate(mut self, gate: StateGate) -> Self {
        self.state_gate = Some(gate);
        self
    }

    pub fn player_actor(mut self, address: u32) -> Self {
        self.player_actor = Some(address);
        self
    }

    pub fn build(self) -> RunButtonConfig {
        let default = RunButtonConfig::default();
        RunButtonConfig {
            default_button: self.default_button.unwrap_or(default.default_button),
            state_gate: self.state_gate.unwrap_or(default.state_gate),
            player_actor: self.player_actor.unwrap_or(default.player_actor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = RunButtonConfig::default();
        assert_eq!(config.default_button, Button::L);
        assert_eq!(config.state_gate, StateGate::Extended);
        assert_eq!(config.player_actor, 0x801D_AA30);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = RunButtonConfig::builder()
            .default_button(Button::CUp)
            .state_gate(StateGate::Coarse)
            .build();

        assert_eq!(config.default_button, Button::CUp);
        assert_eq!(config.state_gate, StateGate::Coarse);
        assert_eq!(config.player_actor, player::DEFAULT_ACTOR);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config = RunButtonConfig::from_toml_str("default_button = \"R\"\n").unwrap();
        assert_eq!(config.default_button, Button::R);
        assert_eq!(config.state_gate, StateGate::Extended);
    }

    #[test]
    fn test_full_toml() {
        let content = r#"
default_button = "D_UP"
state_gate = "coarse"
player_actor = 0x801DB0B0
"#;
        let config = RunButtonConfig::from_toml_str(content).unwrap();
        assert_eq!(config.default_button, Button::DUp);
        assert_eq!(config.state_gate, StateGate::Coarse);
        assert_eq!(config.player_actor, 0x801D_B0B0);
    }

    #[test]
    fn test_unknown_button_rejected() {
        let err = RunButtonConfig::from_toml_str("default_button = \"START\"\n").unwrap_err();
        assert!(matches!(err, Error::Toml(_)));
    }

    #[test]
    fn test_actor_outside_rdram_rejected() {
        let err = RunButtonConfig::from_toml_str("player_actor = 0x80900000\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let err = RunButtonConfig::from_toml_str("player_actor = 0x801DAA32\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_actor_fields_outside_rdram_rejected() {
        // Actor itself is in range, but position and state flags are not
        let err = RunButtonConfig::from_toml_str("player_actor = 0x807FFFFC\n").unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));

        let last_fitting = 0x8080_0000 - player::FIELDS_END;
        let config = RunButtonConfig::builder()
            .player_actor(last_fitting)
            .build();
        assert!(config.validate().is_ok());

        let config = RunButtonConfig::builder()
            .player_actor(last_fitting + 4)
            .build();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_demo_config_loads() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../demos/runbutton.toml");
        let config = RunButtonConfig::load(path).unwrap();
        assert_eq!(config, RunButtonConfig::default());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "default_button = \"Z\"").unwrap();

        let config = RunButtonConfig::load(file.path()).unwrap();
        assert_eq!(config.default_button, Button::Z);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = RunButtonConfig::load(dir.path().join("missing.toml")).unwrap_err();
        assert!(err.is_not_found());
    }
}
