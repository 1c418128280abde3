mod flags;
mod gate;
mod kinematics;
mod movement;

pub use flags::*;
pub use gate::*;
pub use kinematics::*;
pub use movement::*;
