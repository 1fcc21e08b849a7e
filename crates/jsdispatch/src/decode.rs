use smallvec::{smallvec, SmallVec};

use crate::control::{Axis, Button, Control};
use crate::record::{Group, Record};

/// A resolved callback invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub control: Control,
    pub magnitude: i32,
}

impl Hit {
    pub const fn new(control: Control, magnitude: i32) -> Self {
        Self { control, magnitude }
    }
}

/// Invocations produced by one record. At most two, never allocates.
pub type Hits = SmallVec<[Hit; 2]>;

/// Resolves a record to the controls it fires, in invocation order.
///
/// Unknown groups and ids resolve to nothing.
pub fn resolve(record: &Record) -> Hits {
    match record.kind() {
        Some(Group::Axis) => match Axis::from_id(record.id) {
            Some(axis) => resolve_axis(axis, record.value),
            None => Hits::new(),
        },
        Some(Group::Button) => match Button::from_id(record.id) {
            Some(button) => smallvec![Hit::new(button.control(), i32::from(record.value))],
            None => Hits::new(),
        },
        None => Hits::new(),
    }
}

/// Centered axes fire both directions with `0` so consumers can clear either side.
fn resolve_axis(axis: Axis, value: i16) -> Hits {
    let value = i32::from(value);
    match value.signum() {
        1 => smallvec![Hit::new(axis.positive(), value)],
        -1 => smallvec![Hit::new(axis.negative(), value.abs())],
        _ => smallvec![Hit::new(axis.negative(), 0), Hit::new(axis.positive(), 0)],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hits(group: u8, id: u8, value: i16) -> Vec<Hit> {
        resolve(&Record::new(group, id, value)).into_vec()
    }

    #[test]
    fn positive_axis_fires_right_or_down() {
        assert_eq!(hits(2, 0, 5), vec![Hit::new(Control::LeftStickRight, 5)]);
        assert_eq!(hits(2, 3, 100), vec![Hit::new(Control::RightStickDown, 100)]);
        assert_eq!(hits(2, 5, i16::MAX), vec![Hit::new(Control::DPadDown, 32767)]);
    }

    #[test]
    fn negative_axis_fires_left_or_up_with_abs() {
        assert_eq!(hits(2, 1, -3), vec![Hit::new(Control::LeftStickUp, 3)]);
        assert_eq!(hits(2, 2, -1), vec![Hit::new(Control::RightStickLeft, 1)]);
        assert_eq!(hits(2, 4, i16::MIN), vec![Hit::new(Control::DPadLeft, 32768)]);
    }

    #[test]
    fn centered_axis_fires_both_directions() {
        assert_eq!(
            hits(2, 4, 0),
            vec![Hit::new(Control::DPadLeft, 0), Hit::new(Control::DPadRight, 0)]
        );
        assert_eq!(
            hits(2, 1, 0),
            vec![Hit::new(Control::LeftStickUp, 0), Hit::new(Control::LeftStickDown, 0)]
        );
    }

    #[test]
    fn every_axis_value_sign_yields_expected_count() {
        for axis in Axis::ALL {
            for value in [i16::MIN, -1, 0, 1, i16::MAX] {
                let resolved = hits(2, axis.id(), value);
                let expected = if value == 0 { 2 } else { 1 };
                assert_eq!(resolved.len(), expected, "{axis:?} {value}");
                assert!(resolved
                    .iter()
                    .all(|h| h.magnitude == i32::from(value).abs()));
            }
        }
    }

    #[test]
    fn buttons_pass_raw_value_through() {
        assert_eq!(hits(1, 9, 1), vec![Hit::new(Control::Start, 1)]);
        assert_eq!(hits(1, 0, 0), vec![Hit::new(Control::B, 0)]);
        assert_eq!(hits(1, 6, 255), vec![Hit::new(Control::LT, 255)]);
        assert_eq!(hits(1, 13, -7), vec![Hit::new(Control::Capture, -7)]);
    }

    #[test]
    fn unmapped_records_resolve_to_nothing() {
        assert!(hits(3, 0, 7).is_empty());
        assert!(hits(0, 0, 1).is_empty());
        assert!(hits(0x81, 0, 1).is_empty());
        assert!(hits(2, 6, 10).is_empty());
        assert!(hits(1, 14, 1).is_empty());
        assert!(hits(1, 255, 1).is_empty());
    }

    #[test]
    fn resolve_is_stateless() {
        let record = Record::new(2, 2, -42);
        assert_eq!(resolve(&record), resolve(&record));
    }
}
