use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};

use super::{Movement, StateFlags};

/// Which character states permit the run boost.
///
/// `Coarse` only looks at the movement mode. `Extended` allows two more
/// movement modes but also rejects any state word carrying a deny flag.
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
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StateGate {
    Coarse,
    #[default]
    Extended,
}

impl StateGate {
    pub fn allows_movement(self, movement: Movement) -> bool {
        match self {
            Self::Coarse => matches!(
                movement,
                Movement::Standing | Movement::Swimming | Movement::Jumping
            ),
            Self::Extended => matches!(
                movement,
                Movement::Standing
                    | Movement::Swimming
                    | Movement::Jumping
                    | Movement::ZTargeting
                    | Movement::HoldingActor
            ),
        }
    }

    /// Whether this gate needs the fine-grained state word at all
    pub fn reads_flags(self) -> bool {
        self == Self::Extended
    }

    pub fn allows(self, movement: Movement, flags: StateFlags) -> bool {
        self.allows_movement(movement) && !(self.reads_flags() && flags.blocks_run())
    }
}
