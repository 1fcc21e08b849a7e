use std::sync::{Arc, Mutex, PoisonError};

use crate::control::{Axis, Button, Control, ControlMask};
use crate::registry::CallbackRegistry;

/// Pad state shared between the listening thread and a consumer.
pub type SharedPad = Arc<Mutex<PadState>>;

/// Last known magnitude of every control.
///
/// Handlers built by [`PadState::registry`] write here from the listening
/// thread; a consumer loop reads snapshots under the same mutex.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PadState {
    active: ControlMask,
    magnitudes: [i32; Control::COUNT],
}

impl PadState {
    pub fn shared() -> SharedPad {
        Arc::new(Mutex::new(Self::default()))
    }

    /// Records a dispatched magnitude.
    ///
    /// A non-zero direction clears its opposite, so an axis flipping sign
    /// without passing through center does not leave both sides set.
    pub fn apply(&mut self, control: Control, magnitude: i32) {
        self.magnitudes[control.index()] = magnitude;
        if magnitude == 0 {
            self.active.remove(control);
            return;
        }
        self.active.insert(control);
        if let Some((axis, sign)) = control.axis() {
            let opposite = if sign < 0 { axis.positive() } else { axis.negative() };
            self.magnitudes[opposite.index()] = 0;
            self.active.remove(opposite);
        }
    }

    pub fn magnitude(&self, control: Control) -> i32 {
        self.magnitudes[control.index()]
    }

    /// Controls with a non-zero magnitude.
    pub fn active(&self) -> ControlMask {
        self.active
    }

    pub fn is_active(&self, control: Control) -> bool {
        self.active.contains(control)
    }

    pub fn button(&self, button: Button) -> i32 {
        self.magnitude(button.control())
    }

    pub fn pressed_buttons(&self) -> impl Iterator<Item = Button> + '_ {
        Button::ALL
            .into_iter()
            .filter(|b| self.is_active(b.control()))
    }

    /// Signed deflection: negative is left/up, positive is right/down.
    pub fn axis(&self, axis: Axis) -> i32 {
        self.magnitude(axis.positive()) - self.magnitude(axis.negative())
    }

    pub fn left_stick(&self) -> (i32, i32) {
        (self.axis(Axis::LeftStickX), self.axis(Axis::LeftStickY))
    }

    pub fn right_stick(&self) -> (i32, i32) {
        (self.axis(Axis::RightStickX), self.axis(Axis::RightStickY))
    }

    pub fn dpad(&self) -> (i32, i32) {
        (self.axis(Axis::DPadX), self.axis(Axis::DPadY))
    }

    /// Builds a registry whose every handler writes into `shared`.
    pub fn registry(shared: &SharedPad) -> CallbackRegistry {
        let mut registry = CallbackRegistry::default();
        for control in Control::ALL {
            let pad = Arc::clone(shared);
            registry.register(control, move |magnitude| {
                pad.lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .apply(control, magnitude);
            });
        }
        registry
    }
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::dispatcher::Dispatcher;
    use crate::record::Record;

    #[test]
    fn apply_tracks_buttons() {
        let mut pad = PadState::default();
        pad.apply(Control::A, 1);
        pad.apply(Control::RT, 200);
        assert_eq!(pad.pressed_buttons().collect::<Vec<_>>(), vec![Button::A, Button::RT]);
        assert_eq!(pad.button(Button::RT), 200);

        pad.apply(Control::A, 0);
        assert!(!pad.is_active(Control::A));
        assert_eq!(pad.active().count(), 1);
    }

    #[test]
    fn axis_is_signed_and_sign_flip_clears_opposite() {
        let mut pad = PadState::default();
        pad.apply(Control::LeftStickLeft, 300);
        assert_eq!(pad.left_stick(), (-300, 0));

        pad.apply(Control::LeftStickRight, 120);
        assert_eq!(pad.axis(Axis::LeftStickX), 120);
        assert!(!pad.is_active(Control::LeftStickLeft));

        pad.apply(Control::LeftStickLeft, 0);
        pad.apply(Control::LeftStickRight, 0);
        assert_eq!(pad.left_stick(), (0, 0));
        assert!(pad.active().is_empty());
    }

    #[test]
    fn registry_feeds_shared_state_from_stream() {
        let shared = PadState::shared();
        let mut dispatcher = Dispatcher::new("/dev/null").with_registry(PadState::registry(&shared));

        let records = [
            Record::new(2, 4, -1),
            Record::new(2, 3, 500),
            Record::new(1, 9, 1),
            Record::new(2, 4, 0),
        ];
        let bytes: Vec<u8> = records.iter().flat_map(Record::encode).collect();
        let _ = dispatcher.listen_to(Cursor::new(bytes));

        let pad = shared.lock().unwrap();
        assert_eq!(pad.dpad(), (0, 0));
        assert_eq!(pad.right_stick(), (0, 500));
        assert_eq!(pad.button(Button::Start), 1);
        assert_eq!(pad.pressed_buttons().collect::<Vec<_>>(), vec![Button::Start]);
    }
}
