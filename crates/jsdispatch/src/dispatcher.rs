use std::convert::Infallible;
use std::fs::{File, OpenOptions};
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread::{self, JoinHandle};

use crossbeam_channel::{bounded, Receiver};
use log::{debug, trace};

use crate::decode::{resolve, Hits};
use crate::error::{Error, Result};
use crate::reader::RecordReader;
use crate::record::Record;
use crate::registry::{ButtonCallbacks, CallbackRegistry, StickCallbacks};

/// Device read when no path is given.
pub const DEFAULT_DEVICE: &str = "/dev/input/js0";

/// Phase of the read loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    Idle,
    Reading,
    Decoding,
    Dispatching,
}

/// Reads records from a device and routes them to registered handlers.
///
/// Handlers run synchronously on the listening thread, in record order.
/// State shared with other threads is the caller's to guard.
#[derive(Debug)]
pub struct Dispatcher {
    device: PathBuf,
    registry: CallbackRegistry,
    state: LoopState,
}

impl Default for Dispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_DEVICE)
    }
}

impl Dispatcher {
    /// Creates a dispatcher for `device` with no-op handlers everywhere.
    pub fn new(device: impl Into<PathBuf>) -> Self {
        Self {
            device: device.into(),
            registry: CallbackRegistry::default(),
            state: LoopState::Idle,
        }
    }

    #[must_use]
    pub fn left_stick(mut self, callbacks: StickCallbacks) -> Self {
        self.registry.set_left_stick(callbacks);
        self
    }

    #[must_use]
    pub fn right_stick(mut self, callbacks: StickCallbacks) -> Self {
        self.registry.set_right_stick(callbacks);
        self
    }

    #[must_use]
    pub fn dpad(mut self, callbacks: StickCallbacks) -> Self {
        self.registry.set_dpad(callbacks);
        self
    }

    #[must_use]
    pub fn buttons(mut self, callbacks: ButtonCallbacks) -> Self {
        self.registry.set_buttons(callbacks);
        self
    }

    /// Replaces the whole registry.
    #[must_use]
    pub fn with_registry(mut self, registry: CallbackRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn device(&self) -> &Path {
        &self.device
    }

    pub fn registry(&self) -> &CallbackRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut CallbackRegistry {
        &mut self.registry
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Resolves one record and runs its handlers. Returns how many ran.
    pub fn dispatch(&mut self, record: &Record) -> usize {
        let hits = resolve(record);
        self.invoke(&hits)
    }

    /// Opens the device and runs the read loop until the stream fails.
    pub fn listen(&mut self) -> Result<Infallible> {
        let device = self.open()?;
        debug!("listening on {}", self.device.display());
        self.listen_to(device)
    }

    /// Runs the read loop over any byte stream.
    ///
    /// Only returns on a fatal read error; a truncated record is never dispatched.
    pub fn listen_to<R: Read>(&mut self, stream: R) -> Result<Infallible> {
        let mut reader = RecordReader::new(stream);
        loop {
            self.transition(LoopState::Reading);
            let record = reader.next_record()?;

            self.transition(LoopState::Decoding);
            let hits = resolve(&record);
            if hits.is_empty() {
                trace!(
                    "dropping unmapped record: group={} id={} value={}",
                    record.group,
                    record.id,
                    record.value
                );
                continue;
            }

            self.transition(LoopState::Dispatching);
            self.invoke(&hits);
        }
    }

    /// Moves the dispatcher onto a dedicated thread and starts listening.
    pub fn spawn(self) -> Result<ListenerHandle> {
        let (error_tx, error_rx) = bounded(1);
        let mut dispatcher = self;
        let thread = thread::Builder::new()
            .name("jsdispatch-listener".into())
            .spawn(move || {
                let err = match dispatcher.listen() {
                    Ok(never) => match never {},
                    Err(e) => e,
                };
                debug!("listener on {} stopped: {err}", dispatcher.device.display());
                let _ = error_tx.send(err);
            })
            .map_err(Error::Spawn)?;

        Ok(ListenerHandle {
            errors: error_rx,
            thread,
        })
    }

    fn open(&self) -> Result<File> {
        OpenOptions::new()
            .read(true)
            .open(&self.device)
            .map_err(|source| Error::Open {
                path: self.device.clone(),
                source,
            })
    }

    fn invoke(&mut self, hits: &Hits) -> usize {
        for hit in hits {
            self.registry.invoke(hit.control, hit.magnitude);
        }
        hits.len()
    }

    #[inline]
    fn transition(&mut self, next: LoopState) {
        trace!("{:?} -> {next:?}", self.state);
        self.state = next;
    }
}

/// A listener running on its own thread.
pub struct ListenerHandle {
    errors: Receiver<Error>,
    thread: JoinHandle<()>,
}

impl ListenerHandle {
    /// Yields the fatal error once the loop stops. Usable in `select!`.
    pub fn errors(&self) -> &Receiver<Error> {
        &self.errors
    }

    pub fn is_finished(&self) -> bool {
        self.thread.is_finished()
    }

    /// Waits for the loop to stop and returns the error that stopped it.
    ///
    /// Returns `None` if the error was already taken from [`Self::errors`]
    /// or the thread panicked.
    pub fn join(self) -> Option<Error> {
        let _ = self.thread.join();
        self.errors.try_recv().ok()
    }
}
