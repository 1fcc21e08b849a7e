use std::io::{ErrorKind, Read};

use crate::error::{Error, Result};
use crate::record::{Record, RECORD_SIZE};

/// Reads whole records from a byte stream, one at a time.
///
/// There is no resynchronization: a partial record is fatal.
#[derive(Debug)]
pub struct RecordReader<R> {
    inner: R,
}

impl<R: Read> RecordReader<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    /// Blocks until the next record is available.
    pub fn next_record(&mut self) -> Result<Record> {
        let mut buf = [0u8; RECORD_SIZE];
        let mut filled = 0;
        while filled < RECORD_SIZE {
            match self.inner.read(&mut buf[filled..]) {
                Ok(0) => {
                    return Err(Error::ShortRead {
                        expected: RECORD_SIZE,
                        got: filled,
                    })
                }
                Ok(n) => filled += n,
                Err(e) if e.kind() == ErrorKind::Interrupted => {}
                Err(e) => return Err(Error::Read(e)),
            }
        }
        Ok(Record::decode(&buf))
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}
