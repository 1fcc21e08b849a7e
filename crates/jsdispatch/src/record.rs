/// Size of one record on the wire: `i32` timestamp, `i16` value, `u8` group, `u8` id.
pub const RECORD_SIZE: usize = 8;

/// Control group selector carried in every record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Group {
    Button = 1,
    Axis = 2,
}

impl Group {
    /// Maps a raw group byte. Anything but `1` and `2` is unknown.
    pub const fn from_raw(raw: u8) -> Option<Self> {
        match raw {
            1 => Some(Group::Button),
            2 => Some(Group::Axis),
            _ => None,
        }
    }
}

/// One raw event record.
///
/// Fields are decoded in native byte order: the stream is produced by the
/// kernel of the machine reading it, so no endianness conversion is done.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Record {
    /// Event time. Read to keep alignment, ignored by the decoder.
    pub timestamp: i32,
    /// Signed deflection or button value.
    pub value: i16,
    /// Raw group byte, see [`Group`].
    pub group: u8,
    /// Control index inside the group.
    pub id: u8,
}

impl Record {
    pub const fn new(group: u8, id: u8, value: i16) -> Self {
        Self {
            timestamp: 0,
            value,
            group,
            id,
        }
    }

    /// Decodes a record from its wire bytes. Every byte pattern is valid.
    pub fn decode(bytes: &[u8; RECORD_SIZE]) -> Self {
        Self {
            timestamp: i32::from_ne_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]),
            value: i16::from_ne_bytes([bytes[4], bytes[5]]),
            group: bytes[6],
            id: bytes[7],
        }
    }

    /// Encodes the record into wire bytes.
    pub fn encode(&self) -> [u8; RECORD_SIZE] {
        let mut out = [0u8; RECORD_SIZE];
        out[0..4].copy_from_slice(&self.timestamp.to_ne_bytes());
        out[4..6].copy_from_slice(&self.value.to_ne_bytes());
        out[6] = self.group;
        out[7] = self.id;
        out
    }

    /// Known group of this record, if any.
    pub const fn kind(&self) -> Option<Group> {
        Group::from_raw(self.group)
    }
}
