//! Decoder and dispatcher for joystick-class input streams.
//!
//! A device such as `/dev/input/js0` yields fixed 8-byte records. Each record
//! is decoded into a [`Record`], resolved to zero, one or two logical
//! [`Control`]s and routed to the handler registered for that control in a
//! [`CallbackRegistry`]. Every control always has a handler; unset ones are
//! no-ops.
//!
//! ```no_run
//! use jsdispatch::{ButtonCallbacks, Dispatcher, StickCallbacks};
//!
//! let mut dispatcher = Dispatcher::default()
//!     .left_stick(StickCallbacks::new().on_right(|m| log::info!("right {m}")))
//!     .buttons(ButtonCallbacks::new().on_start(|v| log::info!("start {v}")));
//!
//! if let Err(e) = dispatcher.listen() {
//!     log::error!("listener stopped: {e}");
//! }
//! ```

mod control;
mod decode;
mod dispatcher;
mod error;
mod reader;
mod record;
mod registry;
mod state;

pub use crate::control::{Axis, Button, Control, ControlMask, ParseControlError};
pub use crate::decode::{resolve, Hit, Hits};
pub use crate::dispatcher::{Dispatcher, ListenerHandle, LoopState, DEFAULT_DEVICE};
pub use crate::error::{Error, Result};
pub use crate::reader::RecordReader;
pub use crate::record::{Group, Record, RECORD_SIZE};
pub use crate::registry::{ButtonCallbacks, CallbackRegistry, Handler, StickCallbacks};
pub use crate::state::{PadState, SharedPad};
