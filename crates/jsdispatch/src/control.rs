use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Logical controls a record can be routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Control {
    LeftStickLeft,
    LeftStickRight,
    LeftStickUp,
    LeftStickDown,
    RightStickLeft,
    RightStickRight,
    RightStickUp,
    RightStickDown,
    DPadLeft,
    DPadRight,
    DPadUp,
    DPadDown,
    B,
    A,
    Y,
    X,
    LB,
    RB,
    LT,
    RT,
    Select,
    Start,
    LeftStickClick,
    RightStickClick,
    Home,
    Capture,
}

impl Control {
    pub const COUNT: usize = 26;

    pub const ALL: [Control; Control::COUNT] = [
        Control::LeftStickLeft,
        Control::LeftStickRight,
        Control::LeftStickUp,
        Control::LeftStickDown,
        Control::RightStickLeft,
        Control::RightStickRight,
        Control::RightStickUp,
        Control::RightStickDown,
        Control::DPadLeft,
        Control::DPadRight,
        Control::DPadUp,
        Control::DPadDown,
        Control::B,
        Control::A,
        Control::Y,
        Control::X,
        Control::LB,
        Control::RB,
        Control::LT,
        Control::RT,
        Control::Select,
        Control::Start,
        Control::LeftStickClick,
        Control::RightStickClick,
        Control::Home,
        Control::Capture,
    ];

    /// Dense index in `0..Control::COUNT`.
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Stable snake_case name.
    pub const fn name(self) -> &'static str {
        match self {
            Control::LeftStickLeft => "left_stick_left",
            Control::LeftStickRight => "left_stick_right",
            Control::LeftStickUp => "left_stick_up",
            Control::LeftStickDown => "left_stick_down",
            Control::RightStickLeft => "right_stick_left",
            Control::RightStickRight => "right_stick_right",
            Control::RightStickUp => "right_stick_up",
            Control::RightStickDown => "right_stick_down",
            Control::DPadLeft => "dpad_left",
            Control::DPadRight => "dpad_right",
            Control::DPadUp => "dpad_up",
            Control::DPadDown => "dpad_down",
            Control::B => "b",
            Control::A => "a",
            Control::Y => "y",
            Control::X => "x",
            Control::LB => "lb",
            Control::RB => "rb",
            Control::LT => "lt",
            Control::RT => "rt",
            Control::Select => "select",
            Control::Start => "start",
            Control::LeftStickClick => "left_stick_click",
            Control::RightStickClick => "right_stick_click",
            Control::Home => "home",
            Control::Capture => "capture",
        }
    }

    /// The button behind this control, if it is one.
    pub fn button(self) -> Option<Button> {
        Button::ALL.into_iter().find(|b| b.control() == self)
    }

    /// The axis and direction sign (`-1` or `1`) behind a directional control.
    pub fn axis(self) -> Option<(Axis, i32)> {
        Axis::ALL.into_iter().find_map(|axis| {
            if axis.negative() == self {
                Some((axis, -1))
            } else if axis.positive() == self {
                Some((axis, 1))
            } else {
                None
            }
        })
    }
}

impl fmt::Display for Control {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown control: {0}")]
pub struct ParseControlError(pub String);

impl FromStr for Control {
    type Err = ParseControlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim().to_ascii_lowercase();
        Control::ALL
            .into_iter()
            .find(|c| c.name() == needle)
            .ok_or_else(|| ParseControlError(s.to_string()))
    }
}

/// The six directional axes, ordered by their record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    LeftStickX,
    LeftStickY,
    RightStickX,
    RightStickY,
    DPadX,
    DPadY,
}

impl Axis {
    pub const COUNT: usize = 6;

    pub const ALL: [Axis; Axis::COUNT] = [
        Axis::LeftStickX,
        Axis::LeftStickY,
        Axis::RightStickX,
        Axis::RightStickY,
        Axis::DPadX,
        Axis::DPadY,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    /// Control fired for negative values (left or up).
    pub const fn negative(self) -> Control {
        match self {
            Axis::LeftStickX => Control::LeftStickLeft,
            Axis::LeftStickY => Control::LeftStickUp,
            Axis::RightStickX => Control::RightStickLeft,
            Axis::RightStickY => Control::RightStickUp,
            Axis::DPadX => Control::DPadLeft,
            Axis::DPadY => Control::DPadUp,
        }
    }

    /// Control fired for positive values (right or down).
    pub const fn positive(self) -> Control {
        match self {
            Axis::LeftStickX => Control::LeftStickRight,
            Axis::LeftStickY => Control::LeftStickDown,
            Axis::RightStickX => Control::RightStickRight,
            Axis::RightStickY => Control::RightStickDown,
            Axis::DPadX => Control::DPadRight,
            Axis::DPadY => Control::DPadDown,
        }
    }
}

/// The fourteen buttons, ordered by their record id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    B,
    A,
    Y,
    X,
    LB,
    RB,
    LT,
    RT,
    Select,
    Start,
    LeftStickClick,
    RightStickClick,
    Home,
    Capture,
}

impl Button {
    pub const COUNT: usize = 14;

    pub const ALL: [Button; Button::COUNT] = [
        Button::B,
        Button::A,
        Button::Y,
        Button::X,
        Button::LB,
        Button::RB,
        Button::LT,
        Button::RT,
        Button::Select,
        Button::Start,
        Button::LeftStickClick,
        Button::RightStickClick,
        Button::Home,
        Button::Capture,
    ];

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.get(usize::from(id)).copied()
    }

    pub const fn id(self) -> u8 {
        self as u8
    }

    pub const fn control(self) -> Control {
        match self {
            Button::B => Control::B,
            Button::A => Control::A,
            Button::Y => Control::Y,
            Button::X => Control::X,
            Button::LB => Control::LB,
            Button::RB => Control::RB,
            Button::LT => Control::LT,
            Button::RT => Control::RT,
            Button::Select => Control::Select,
            Button::Start => Control::Start,
            Button::LeftStickClick => Control::LeftStickClick,
            Button::RightStickClick => Control::RightStickClick,
            Button::Home => Control::Home,
            Button::Capture => Control::Capture,
        }
    }
}

impl From<Button> for Control {
    fn from(button: Button) -> Self {
        button.control()
    }
}

/// A set of controls packed into one word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct ControlMask(u32);

impl ControlMask {
    /// Create an empty mask.
    pub const fn empty() -> Self {
        Self(0)
    }

    /// Create a mask from a slice of controls.
    pub fn new(controls: &[Control]) -> Self {
        let mut mask = Self::empty();
        for &control in controls {
            mask.insert(control);
        }
        mask
    }

    #[inline]
    const fn bit(control: Control) -> u32 {
        1 << control.index()
    }

    #[inline]
    pub fn insert(&mut self, control: Control) {
        self.0 |= Self::bit(control);
    }

    #[inline]
    pub fn remove(&mut self, control: Control) {
        self.0 &= !Self::bit(control);
    }

    #[inline]
    pub fn contains(&self, control: Control) -> bool {
        self.0 & Self::bit(control) != 0
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.0.count_ones()
    }

    /// Iterate the contained controls in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = Control> + '_ {
        Control::ALL.into_iter().filter(|c| self.contains(*c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_indexed_in_declaration_order() {
        for (i, control) in Control::ALL.iter().enumerate() {
            assert_eq!(control.index(), i);
        }
    }

    #[test]
    fn axis_ids_follow_record_layout() {
        assert_eq!(Axis::from_id(0), Some(Axis::LeftStickX));
        assert_eq!(Axis::from_id(1), Some(Axis::LeftStickY));
        assert_eq!(Axis::from_id(4), Some(Axis::DPadX));
        assert_eq!(Axis::from_id(5), Some(Axis::DPadY));
        assert_eq!(Axis::from_id(6), None);
        assert_eq!(Axis::from_id(255), None);
    }

    #[test]
    fn button_ids_follow_record_layout() {
        assert_eq!(Button::from_id(0), Some(Button::B));
        assert_eq!(Button::from_id(3), Some(Button::X));
        assert_eq!(Button::from_id(9), Some(Button::Start));
        assert_eq!(Button::from_id(13), Some(Button::Capture));
        assert_eq!(Button::from_id(14), None);
        for button in Button::ALL {
            assert_eq!(Button::from_id(button.id()), Some(button));
        }
    }

    #[test]
    fn axis_directions_are_left_up_negative() {
        assert_eq!(Axis::LeftStickX.negative(), Control::LeftStickLeft);
        assert_eq!(Axis::LeftStickX.positive(), Control::LeftStickRight);
        assert_eq!(Axis::RightStickY.negative(), Control::RightStickUp);
        assert_eq!(Axis::DPadY.positive(), Control::DPadDown);
        assert_eq!(Control::DPadUp.axis(), Some((Axis::DPadY, -1)));
        assert_eq!(Control::A.axis(), None);
    }

    #[test]
    fn every_control_is_either_button_or_direction() {
        for control in Control::ALL {
            assert!(control.button().is_some() ^ control.axis().is_some(), "{control}");
        }
    }

    #[test]
    fn names_parse_back() {
        for control in Control::ALL {
            assert_eq!(control.name().parse::<Control>(), Ok(control));
        }
        assert_eq!(" Start ".parse::<Control>(), Ok(Control::Start));
        assert!("turbo".parse::<Control>().is_err());
    }

    #[test]
    fn mask_insert_remove_and_iter() {
        let mut mask = ControlMask::empty();
        assert!(mask.is_empty());

        mask.insert(Control::A);
        mask.insert(Control::Capture);
        mask.insert(Control::A);
        assert_eq!(mask.count(), 2);
        assert!(mask.contains(Control::Capture));
        assert_eq!(mask.iter().collect::<Vec<_>>(), vec![Control::A, Control::Capture]);

        mask.remove(Control::A);
        assert!(!mask.contains(Control::A));
        assert_eq!(mask, ControlMask::new(&[Control::Capture]));
    }
}
