use num_derive::{FromPrimitive, ToPrimitive};

/// Whether the distance sensor is being read and its value sent as a Control Change.
///
/// The device always boots [`Mode::Inactive`]; the mode button [cycles](`super::CycleConfig`) between the two.
#[derive(Debug, Default, Clone, Copy, ToPrimitive, FromPrimitive, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// The sensor is idle and only the note button produces MIDI.
    #[default]
    Inactive,
    /// The sensor is read every tick.
    Active,
}

impl Mode {
    /// Returns true for [`Mode::Active`].
    pub fn is_active(&self) -> bool {
        *self == Self::Active
    }
}

impl super::CycleConfig for Mode {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::configuration::CycleConfig;

    #[test]
    fn boots_inactive() {
        assert_eq!(Mode::Inactive, Mode::default(), "Expected left but got right");
    }

    #[test]
    fn cycle_toggles() {
        assert_eq!(Mode::Active, Mode::Inactive.cycle(), "Expected left but got right");
        assert_eq!(Mode::Inactive, Mode::Active.cycle(), "Expected left but got right");
    }

    #[test]
    fn is_active() {
        assert!(Mode::Active.is_active(), "Should be active");
        assert!(!Mode::Inactive.is_active(), "Should be inactive");
    }
}
