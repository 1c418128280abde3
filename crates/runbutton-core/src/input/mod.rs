//! Controller input word and the buttons that can be bound to run

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

bitflags::bitflags! {
    /// Held buttons, as packed in the controller's 16-bit button word
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Buttons: u16 {
        const C_RIGHT = 0x0001;
        const C_LEFT  = 0x0002;
        const C_DOWN  = 0x0004;
        const C_UP    = 0x0008;
        const R       = 0x0010;
        const L       = 0x0020;
        const D_RIGHT = 0x0100;
        const D_LEFT  = 0x0200;
        const D_DOWN  = 0x0400;
        const D_UP    = 0x0800;
        const START   = 0x1000;
        const Z       = 0x2000;
        const B       = 0x4000;
        const A       = 0x8000;
    }
}

impl Buttons {
    /// Button that puts the tick into rebind mode while held
    pub const MODIFIER: Self = Self::START;

    /// Wrap a raw button word, keeping bits with no named flag
    pub fn from_raw(raw: u16) -> Self {
        Self::from_bits_retain(raw)
    }

    pub fn is_held(&self, button: Button) -> bool {
        self.contains(button.mask())
    }

    /// First bindable button held, in rebind priority order
    pub fn first_bindable(&self) -> Option<Button> {
        Button::iter().find(|&button| self.is_held(button))
    }
}

/// A button that can be bound to run.
///
/// Variants are declared in rebind priority order: when several are held
/// together with the modifier, the first one here wins.
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
    EnumIter,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[repr(u16)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
pub enum Button {
    A = 0x8000,
    B = 0x4000,
    Z = 0x2000,
    #[default]
    L = 0x0020,
    R = 0x0010,
    DUp = 0x0800,
    CUp = 0x0008,
    CDown = 0x0004,
    CLeft = 0x0002,
    CRight = 0x0001,
}

impl Button {
    pub fn mask(self) -> Buttons {
        Buttons::from_bits_retain(self as u16)
    }

    pub fn name(&self) -> &'static str {
        self.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        let order: Vec<Button> = Button::iter().collect();
        assert_eq!(
            order,
            vec![
                Button::A,
                Button::B,
                Button::Z,
                Button::L,
                Button::R,
                Button::DUp,
                Button::CUp,
                Button::CDown,
                Button::CLeft,
                Button::CRight,
            ]
        );
    }

    #[test]
    fn test_masks_match_flags() {
        assert_eq!(Button::A.mask(), Buttons::A);
        assert_eq!(Button::L.mask(), Buttons::L);
        assert_eq!(Button::DUp.mask(), Buttons::D_UP);
        assert_eq!(Button::CRight.mask(), Buttons::C_RIGHT);
        assert!(Button::iter().all(|b| !b.mask().contains(Buttons::MODIFIER)));
    }

    #[test]
    fn test_first_bindable_uses_priority() {
        let held = Buttons::START | Buttons::C_UP | Buttons::R | Buttons::B;
        assert_eq!(held.first_bindable(), Some(Button::B));

        let held = Buttons::START | Buttons::C_LEFT | Buttons::C_RIGHT;
        assert_eq!(held.first_bindable(), Some(Button::CLeft));
    }

    #[test]
    fn test_first_bindable_ignores_unbindable() {
        assert_eq!(Buttons::START.first_bindable(), None);
        assert_eq!((Buttons::D_DOWN | Buttons::D_LEFT).first_bindable(), None);
        assert_eq!(Buttons::empty().first_bindable(), None);
    }

    #[test]
    fn test_from_raw_keeps_unknown_bits() {
        let held = Buttons::from_raw(0x00C0 | 0x0020);
        assert!(held.is_held(Button::L));
        assert_eq!(held.bits(), 0x00E0);
    }

    #[test]
    fn test_names() {
        assert_eq!(Button::DUp.name(), "D_UP");
        assert_eq!(Button::CDown.to_string(), "C_DOWN");
        assert_eq!("c_left".parse::<Button>().unwrap(), Button::CLeft);
        assert_eq!(Button::B.mask().bits(), 0x4000);
    }
}
