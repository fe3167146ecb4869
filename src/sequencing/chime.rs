#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;
use crate::error::Result;

/// One strike action of the repeater
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ChimeEvent {
    Hour,    // low gong, once per hour on the 12-hour dial
    Quarter, // high-low "ding-dong", once per completed quarter
    Minute,  // high gong, once per minute past the last quarter
}

/// The strikes for one time of day, in ringing order.
///
/// Built fresh by [`ChimeSequencer`] and never mutated afterwards. Hours always
/// come first, then quarters, then minutes.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChimeSequence {
    events: Vec<ChimeEvent>,
}

impl ChimeSequence {
    pub fn events(&self) -> &[ChimeEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = ChimeEvent> + '_ {
        self.events.iter().copied()
    }

    /// Number of strikes of one kind
    pub fn count(&self, kind: ChimeEvent) -> usize {
        self.events.iter().filter(|&&e| e == kind).count()
    }
}

impl<'a> IntoIterator for &'a ChimeSequence {
    type Item = ChimeEvent;
    type IntoIter = std::iter::Copied<std::slice::Iter<'a, ChimeEvent>>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.iter().copied()
    }
}

impl IntoIterator for ChimeSequence {
    type Item = ChimeEvent;
    type IntoIter = std::vec::IntoIter<ChimeEvent>;

    fn into_iter(self) -> Self::IntoIter {
        self.events.into_iter()
    }
}

/// Maps a time of day onto minute-repeater strikes.
///
/// Stateless: every call builds a new sequence from its input alone.
pub struct ChimeSequencer;

impl ChimeSequencer {
    /// Compute the strikes for a raw 24-hour reading.
    ///
    /// Fails with `InvalidInput` when `hour24 > 23` or `minute > 59`.
    pub fn compute(hour24: u32, minute: u32) -> Result<ChimeSequence> {
        TimeOfDay::new(hour24, minute).map(Self::compute_time)
    }

    /// Compute the strikes for an already validated time
    pub fn compute_time(time: TimeOfDay) -> ChimeSequence {
        let hours = time.hour12() as usize;
        let quarters = time.quarters() as usize;
        let minutes = time.minutes_past_quarter() as usize;

        let mut events = Vec::with_capacity(hours + quarters + minutes);
        events.extend(std::iter::repeat(ChimeEvent::Hour).take(hours));
        events.extend(std::iter::repeat(ChimeEvent::Quarter).take(quarters));
        events.extend(std::iter::repeat(ChimeEvent::Minute).take(minutes));

        ChimeSequence { events }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RepeaterError;

    fn counts(hour24: u32, minute: u32) -> (usize, usize, usize) {
        let seq = ChimeSequencer::compute(hour24, minute).unwrap();
        (
            seq.count(ChimeEvent::Hour),
            seq.count(ChimeEvent::Quarter),
            seq.count(ChimeEvent::Minute),
        )
    }

    #[test]
    fn test_known_times() {
        assert_eq!(counts(12, 0), (12, 0, 0)); // noon
        assert_eq!(counts(1, 15), (1, 1, 0));
        assert_eq!(counts(4, 59), (4, 3, 14));
        assert_eq!(counts(0, 0), (12, 0, 0)); // midnight
        assert_eq!(counts(23, 45), (11, 3, 0));
        assert_eq!(counts(13, 0), (1, 0, 0));
    }

    #[test]
    fn test_blocks_are_ordered() {
        let seq = ChimeSequencer::compute(2, 37).unwrap();

        let mut expected = vec![ChimeEvent::Hour; 2];
        expected.extend([ChimeEvent::Quarter; 2]);
        expected.extend([ChimeEvent::Minute; 7]);
        assert_eq!(seq.events(), expected.as_slice());
    }

    #[test]
    fn test_composition_holds_for_every_minute_of_the_day() {
        for hour24 in 0..24 {
            for minute in 0..60 {
                let seq = ChimeSequencer::compute(hour24, minute).unwrap();

                let hour12 = match hour24 % 12 {
                    0 => 12,
                    h => h,
                };
                let hours = seq.count(ChimeEvent::Hour);
                let quarters = seq.count(ChimeEvent::Quarter);
                let minutes = seq.count(ChimeEvent::Minute);

                assert_eq!(hours, hour12 as usize);
                assert_eq!(quarters, (minute / 15) as usize);
                assert_eq!(minutes, (minute % 15) as usize);
                assert!((1..=12).contains(&hours));
                assert!(quarters <= 3);
                assert!(minutes <= 14);

                // No block may interleave with another
                let events = seq.events();
                assert!(events[..hours].iter().all(|&e| e == ChimeEvent::Hour));
                assert!(events[hours..hours + quarters]
                    .iter()
                    .all(|&e| e == ChimeEvent::Quarter));
                assert!(events[hours + quarters..]
                    .iter()
                    .all(|&e| e == ChimeEvent::Minute));
            }
        }
    }

    #[test]
    fn test_compute_is_idempotent() {
        let a = ChimeSequencer::compute(9, 52).unwrap();
        let b = ChimeSequencer::compute(9, 52).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_never_empty() {
        for hour24 in 0..24 {
            assert!(!ChimeSequencer::compute(hour24, 0).unwrap().is_empty());
        }
    }

    #[test]
    fn test_invalid_input_fails_fast() {
        assert!(matches!(
            ChimeSequencer::compute(24, 0),
            Err(RepeaterError::InvalidInput { field: "hour24", .. })
        ));
        assert!(matches!(
            ChimeSequencer::compute(7, 60),
            Err(RepeaterError::InvalidInput { field: "minute", .. })
        ));
    }
}
