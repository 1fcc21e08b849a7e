use std::array;
use std::fmt;

use crate::control::{Axis, Button, Control, ControlMask};

/// A control handler. Receives the normalized magnitude of the event.
pub type Handler = Box<dyn FnMut(i32) + Send>;

fn noop() -> Handler {
    Box::new(|_| {})
}

/// Optional handlers for the four directions of a stick or the D-pad.
#[derive(Default)]
pub struct StickCallbacks {
    left: Option<Handler>,
    right: Option<Handler>,
    up: Option<Handler>,
    down: Option<Handler>,
}

impl StickCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn on_left(mut self, f: impl FnMut(i32) + Send + 'static) -> Self {
        self.left = Some(Box::new(f));
        self
    }

    pub fn on_right(mut self, f: impl FnMut(i32) + Send + 'static) -> Self {
        self.right = Some(Box::new(f));
        self
    }

    pub fn on_up(mut self, f: impl FnMut(i32) + Send + 'static) -> Self {
        self.up = Some(Box::new(f));
        self
    }

    pub fn on_down(mut self, f: impl FnMut(i32) + Send + 'static) -> Self {
        self.down = Some(Box::new(f));
        self
    }

    /// Moves the handlers into the registry slots of the given axis pair.
    fn install(self, registry: &mut CallbackRegistry, horizontal: Axis, vertical: Axis) {
        let slots = [
            (horizontal.negative(), self.left),
            (horizontal.positive(), self.right),
            (vertical.negative(), self.up),
            (vertical.positive(), self.down),
        ];
        for (control, handler) in slots {
            if let Some(handler) = handler {
                registry.register_boxed(control, handler);
            }
        }
    }
}

/// Optional handlers for the fourteen buttons.
pub struct ButtonCallbacks {
    handlers: [Option<Handler>; Button::COUNT],
}

impl Default for ButtonCallbacks {
    fn default() -> Self {
        Self {
            handlers: array::from_fn(|_| None),
        }
    }
}

macro_rules! button_setters {
    ($($name:ident => $button:ident),* $(,)?) => {
        $(
            pub fn $name(self, f: impl FnMut(i32) + Send + 'static) -> Self {
                self.on(Button::$button, f)
            }
        )*
    };
}

impl ButtonCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the handler for any button.
    pub fn on(mut self, button: Button, f: impl FnMut(i32) + Send + 'static) -> Self {
        self.handlers[usize::from(button.id())] = Some(Box::new(f));
        self
    }

    button_setters! {
        on_b => B,
        on_a => A,
        on_y => Y,
        on_x => X,
        on_lb => LB,
        on_rb => RB,
        on_lt => LT,
        on_rt => RT,
        on_select => Select,
        on_start => Start,
        on_left_stick => LeftStickClick,
        on_right_stick => RightStickClick,
        on_home => Home,
        on_capture => Capture,
    }

    fn install(self, registry: &mut CallbackRegistry) {
        for (button, handler) in Button::ALL.into_iter().zip(self.handlers) {
            if let Some(handler) = handler {
                registry.register_boxed(button.control(), handler);
            }
        }
    }
}

/// One active handler per [`Control`].
///
/// Every slot starts as a no-op, so [`CallbackRegistry::invoke`] never misses.
pub struct CallbackRegistry {
    handlers: [Handler; Control::COUNT],
    registered: ControlMask,
}

impl Default for CallbackRegistry {
    fn default() -> Self {
        Self {
            handlers: array::from_fn(|_| noop()),
            registered: ControlMask::empty(),
        }
    }
}

impl fmt::Debug for CallbackRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CallbackRegistry")
            .field("registered", &self.registered.iter().collect::<Vec<_>>())
            .finish()
    }
}

impl CallbackRegistry {
    /// Builds a registry from the four caller configurations.
    pub fn new(
        left_stick: StickCallbacks,
        right_stick: StickCallbacks,
        dpad: StickCallbacks,
        buttons: ButtonCallbacks,
    ) -> Self {
        let mut registry = Self::default();
        registry.set_left_stick(left_stick);
        registry.set_right_stick(right_stick);
        registry.set_dpad(dpad);
        registry.set_buttons(buttons);
        registry
    }

    pub fn set_left_stick(&mut self, callbacks: StickCallbacks) {
        callbacks.install(self, Axis::LeftStickX, Axis::LeftStickY);
    }

    pub fn set_right_stick(&mut self, callbacks: StickCallbacks) {
        callbacks.install(self, Axis::RightStickX, Axis::RightStickY);
    }

    pub fn set_dpad(&mut self, callbacks: StickCallbacks) {
        callbacks.install(self, Axis::DPadX, Axis::DPadY);
    }

    pub fn set_buttons(&mut self, callbacks: ButtonCallbacks) {
        callbacks.install(self);
    }

    /// Replaces the active handler of `control`.
    pub fn register(&mut self, control: Control, f: impl FnMut(i32) + Send + 'static) {
        self.register_boxed(control, Box::new(f));
    }

    pub fn register_boxed(&mut self, control: Control, handler: Handler) {
        self.handlers[control.index()] = handler;
        self.registered.insert(control);
    }

    /// Restores the no-op handler of `control`.
    pub fn reset(&mut self, control: Control) {
        self.handlers[control.index()] = noop();
        self.registered.remove(control);
    }

    /// Whether a caller supplied handler is active for `control`.
    pub fn is_registered(&self, control: Control) -> bool {
        self.registered.contains(control)
    }

    /// Controls with a caller supplied handler.
    pub fn registered(&self) -> ControlMask {
        self.registered
    }

    #[inline]
    pub fn invoke(&mut self, control: Control, magnitude: i32) {
        (self.handlers[control.index()])(magnitude);
    }
}
