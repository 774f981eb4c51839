//! Cut and panel identifiers
//!
//! Cut ids come from a session-wide monotonic counter. Panel ids are
//! structural: a child's id is a hash of its parent's id, the lineage key of
//! the cut that split the parent, and which side of that cut it lies on.
//! Replaying the same cut list therefore always yields the same panel ids, no
//! matter how many cut ids were handed out in between.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

const FNV_OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

/// Identifier of a cut, displayed as `c<n>`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CutId(pub u32);

/// Identifier of a panel, displayed as `p<hex>`; the seed panel is `p0`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PanelId(pub u64);

/// The two pieces a split produces, in the order they are emitted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    /// Positive side of the cut normal
    High,
    /// Negative side of the cut normal
    Low,
}

impl PanelId {
    /// The panel covering the whole inset rectangle
    pub const ROOT: PanelId = PanelId(0);

    /// Id of the piece of this panel on `side` of the cut with lineage `cut`
    pub fn child(self, cut: CutId, side: Side) -> PanelId {
        let side_byte = match side {
            Side::High => 0u8,
            Side::Low => 1u8,
        };
        let bytes = self
            .0
            .to_le_bytes()
            .into_iter()
            .chain(cut.0.to_le_bytes())
            .chain([side_byte]);

        let mut hash = FNV_OFFSET;
        for b in bytes {
            hash ^= u64::from(b);
            hash = hash.wrapping_mul(FNV_PRIME);
        }
        PanelId(hash)
    }
}

impl fmt::Display for CutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "c{}", self.0)
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "p{:x}", self.0)
    }
}

impl FromStr for CutId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('c')
            .and_then(|digits| digits.parse().ok())
            .map(CutId)
            .ok_or_else(|| format!("Invalid cut id: '{s}' (expected c<number>)"))
    }
}

impl FromStr for PanelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix('p')
            .and_then(|digits| u64::from_str_radix(digits, 16).ok())
            .map(PanelId)
            .ok_or_else(|| format!("Invalid panel id: '{s}' (expected p<hex>)"))
    }
}

impl Serialize for CutId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for CutId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl Serialize for PanelId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for PanelId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Monotonic cut id counter for one editing session
///
/// Never reset, not even by a layout reset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IdSequence {
    next: u32,
}

impl Default for IdSequence {
    fn default() -> Self {
        Self { next: 1 }
    }
}

impl IdSequence {
    /// Resume a sequence at `next`
    pub fn starting_at(next: u32) -> Self {
        Self { next: next.max(1) }
    }

    /// Hand out the next id; the counter stops at `u32::MAX`
    pub fn next_cut_id(&mut self) -> CutId {
        let id = CutId(self.next);
        self.next = self.next.saturating_add(1);
        id
    }

    /// The value the next allocation will use
    pub fn peek(&self) -> u32 {
        self.next
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_monotonic() {
        let mut ids = IdSequence::default();
        assert_eq!(ids.next_cut_id(), CutId(1));
        assert_eq!(ids.next_cut_id(), CutId(2));
        assert_eq!(ids.peek(), 3);
        assert_eq!(IdSequence::starting_at(0).peek(), 1);
    }

    #[test]
    fn test_sequence_stops_at_the_top() {
        let mut ids = IdSequence::starting_at(u32::MAX);
        assert_eq!(ids.next_cut_id(), CutId(u32::MAX));
        assert_eq!(ids.peek(), u32::MAX);
    }

    #[test]
    fn test_child_ids_are_deterministic_and_distinct() {
        let a = PanelId::ROOT.child(CutId(1), Side::High);
        let b = PanelId::ROOT.child(CutId(1), Side::Low);
        assert_eq!(a, PanelId::ROOT.child(CutId(1), Side::High));
        assert_ne!(a, b);
        assert_ne!(a, PanelId::ROOT.child(CutId(2), Side::High));
        assert_ne!(a.child(CutId(3), Side::High), b.child(CutId(3), Side::High));
    }

    #[test]
    fn test_display_and_parse() {
        assert_eq!(CutId(12).to_string(), "c12");
        assert_eq!("c12".parse::<CutId>(), Ok(CutId(12)));
        assert!("p12".parse::<CutId>().is_err());

        assert_eq!(PanelId::ROOT.to_string(), "p0");
        let child = PanelId::ROOT.child(CutId(7), Side::Low);
        assert_eq!(child.to_string().parse::<PanelId>(), Ok(child));
        assert!("c1".parse::<PanelId>().is_err());
        assert!("pzz".parse::<PanelId>().is_err());
    }
}
