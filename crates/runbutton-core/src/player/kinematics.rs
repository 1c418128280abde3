use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// Extra distance covered per boosted frame, as a fraction of velocity
pub mod scale {
    pub const HORIZONTAL: f32 = 2.0;
    pub const VERTICAL: f32 = 4.0;
}

/// Position nudge for one boosted frame.
///
/// Half the velocity on the horizontal axes, a quarter on the vertical one,
/// added on top of whatever the game already moved the player by.
pub fn boosted_position(position: Vec3, velocity: Vec3) -> Vec3 {
    Vec3 {
        x: velocity.x / scale::HORIZONTAL + position.x,
        y: velocity.y / scale::VERTICAL + position.y,
        z: velocity.z / scale::HORIZONTAL + position.z,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boost_scales_per_axis() {
        let next = boosted_position(Vec3::new(100.0, 50.0, -20.0), Vec3::new(8.0, -4.0, 6.0));
        assert_eq!(next, Vec3::new(104.0, 49.0, -17.0));
    }

    #[test]
    fn test_zero_velocity_is_identity() {
        let position = Vec3::new(1.5, 2.5, 3.5);
        assert_eq!(boosted_position(position, Vec3::default()), position);
    }
}
