use std::fmt::Write;
use std::sync::PoisonError;

use colored::Colorize;
use crossbeam_channel::{select, tick, Receiver};

use jsdispatch::{Dispatcher, PadState};

use crate::config::Settings;
use crate::error::AppError;
use crate::{print_debug, print_info};

/// One line summary of the pad.
pub(crate) fn render(pad: &PadState) -> String {
    let (lx, ly) = pad.left_stick();
    let (rx, ry) = pad.right_stick();
    let (dx, dy) = pad.dpad();
    let mut line = format!("L({lx:>6},{ly:>6}) R({rx:>6},{ry:>6}) D({dx:>2},{dy:>2}) [");
    let mut first = true;
    for button in pad.pressed_buttons() {
        if !first {
            line.push(' ');
        }
        first = false;
        let _ = write!(line, "{}", button.control());
        let value = pad.button(button);
        if value != 1 {
            let _ = write!(line, "={value}");
        }
    }
    line.push(']');
    line
}

/// Renders the shared pad state on every tick where it changed.
///
/// Handlers write the state on the listener thread, this loop only reads
/// snapshots of it.
pub(crate) fn run(settings: &Settings, stop_rx: &Receiver<()>) -> Result<(), AppError> {
    let shared = PadState::shared();
    let listener = Dispatcher::new(&settings.device)
        .with_registry(PadState::registry(&shared))
        .spawn()?;
    let ticker = tick(settings.tick);
    print_info!(
        "rendering {} every {}ms",
        settings.device.display(),
        settings.tick.as_millis()
    );

    let mut last: Option<PadState> = None;
    loop {
        select! {
            recv(stop_rx) -> _ => {
                print_debug!("interrupted");
                return Ok(());
            }
            recv(listener.errors()) -> msg => {
                return Err(msg.map_or(AppError::ListenerLost, AppError::Dispatch));
            }
            recv(ticker) -> _ => {
                let snapshot = shared
                    .lock()
                    .unwrap_or_else(PoisonError::into_inner)
                    .clone();
                if last.as_ref() != Some(&snapshot) {
                    print_info!("{}", render(&snapshot));
                    last = Some(snapshot);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsdispatch::Control;

    #[test]
    fn render_idle_pad() {
        assert_eq!(
            render(&PadState::default()),
            "L(     0,     0) R(     0,     0) D( 0, 0) []"
        );
    }

    #[test]
    fn render_shows_deflection_and_buttons() {
        let mut pad = PadState::default();
        pad.apply(Control::LeftStickLeft, 1200);
        pad.apply(Control::RightStickDown, 32767);
        pad.apply(Control::DPadUp, 1);
        pad.apply(Control::A, 1);
        pad.apply(Control::RT, 128);
        assert_eq!(
            render(&pad),
            "L( -1200,     0) R(     0, 32767) D( 0,-1) [a rt=128]"
        );
    }
}
