use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

/// Coarse movement mode of the player character, as reported by the game core
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Movement {
    #[default]
    Unknown,
    Standing,
    Swimming,
    ObtainingItem,
    Talking,
    FirstPerson,
    Jumping,
    ClimbingOutOfWater,
    Busy,
    LoadingZone,
    Dying,
    ZTargeting,
    HoldingActor,
}

impl Movement {
    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names_round_trip() {
        assert_eq!(Movement::ZTargeting.name(), "Z_TARGETING");
        assert_eq!(
            "holding_actor".parse::<Movement>().unwrap(),
            Movement::HoldingActor
        );
        assert!("flying".parse::<Movement>().is_err());
    }
}
