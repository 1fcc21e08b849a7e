use colored::Colorize;
use crossbeam_channel::{select, unbounded, Receiver};

use jsdispatch::{CallbackRegistry, Control, Dispatcher, ListenerHandle};

use crate::config::Settings;
use crate::error::AppError;
use crate::{print_debug, print_info};

/// Builds a registry forwarding every invocation to `tx`.
fn forwarding_registry(tx: &crossbeam_channel::Sender<(Control, i32)>) -> CallbackRegistry {
    let mut registry = CallbackRegistry::default();
    for control in Control::ALL {
        let tx = tx.clone();
        registry.register(control, move |magnitude| {
            let _ = tx.send((control, magnitude));
        });
    }
    registry
}

fn print_event(control: Control, magnitude: i32) {
    print_info!("{:<18} {magnitude}", control.name().bold());
}

fn flush(events: &Receiver<(Control, i32)>) {
    for (control, magnitude) in events.try_iter() {
        print_event(control, magnitude);
    }
}

/// Waits for the error that stopped `listener`.
fn stopped(listener: &ListenerHandle) -> AppError {
    listener
        .errors()
        .recv()
        .map_or(AppError::ListenerLost, AppError::Dispatch)
}

/// Logs every callback until interrupted or the device fails.
pub(crate) fn run(settings: &Settings, stop_rx: &Receiver<()>) -> Result<(), AppError> {
    let (event_tx, event_rx) = unbounded();
    let registry = forwarding_registry(&event_tx);
    drop(event_tx);

    let listener = Dispatcher::new(&settings.device)
        .with_registry(registry)
        .spawn()?;
    print_info!("watching {}", settings.device.display());

    loop {
        select! {
            recv(stop_rx) -> _ => {
                print_debug!("interrupted");
                return Ok(());
            }
            recv(event_rx) -> msg => match msg {
                Ok((control, magnitude)) => print_event(control, magnitude),
                // Handlers are dropped with the listener, so this means it stopped.
                Err(_) => return Err(stopped(&listener)),
            },
            recv(listener.errors()) -> msg => {
                flush(&event_rx);
                return Err(msg.map_or(AppError::ListenerLost, AppError::Dispatch));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsdispatch::Record;

    #[test]
    fn forwarding_registry_sends_in_dispatch_order() {
        let (tx, rx) = unbounded();
        let mut dispatcher = Dispatcher::default().with_registry(forwarding_registry(&tx));

        dispatcher.dispatch(&Record::new(2, 0, 0));
        dispatcher.dispatch(&Record::new(1, 1, 1));

        assert_eq!(
            rx.try_iter().collect::<Vec<_>>(),
            vec![
                (Control::LeftStickLeft, 0),
                (Control::LeftStickRight, 0),
                (Control::A, 1)
            ]
        );
    }
}
