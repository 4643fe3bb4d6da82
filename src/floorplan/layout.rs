//! Floor layout tables for the school plano.
//! Each floor carries its room identifiers in the exact order the draw
//! routines place them; that order is part of the contract between this
//! table and `render`.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Numeric identifier of a room or stand on the plano.
///
/// The authored tables below are written as digit strings (the format the
/// plano was drafted in) and parsed once, at compile time; leading zeros
/// normalize away, so `"07"` and `"7"` are the same id. Everything past this
/// boundary works with the canonical numeric value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LocationId(u32);

impl LocationId {
    pub const fn new(value: u32) -> Self {
        LocationId(value)
    }

    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Parses an authored digit-string id. Compile-time only; a non-digit in a
/// table is a build error.
const fn loc(raw: &str) -> LocationId {
    let bytes = raw.as_bytes();
    assert!(!bytes.is_empty(), "room id must have at least one digit");
    let mut value: u32 = 0;
    let mut i = 0;
    while i < bytes.len() {
        assert!(bytes[i].is_ascii_digit(), "room ids are decimal digit strings");
        value = value * 10 + (bytes[i] - b'0') as u32;
        i += 1;
    }
    LocationId(value)
}

// Stage first, then the three left-side and four right-side stands, then the
// two rooms beside the entrance.
const GYMNASIUM_ROOMS: [LocationId; 10] = [
    loc("0"),
    loc("17"),
    loc("18"),
    loc("19"),
    loc("25"),
    loc("24"),
    loc("23"),
    loc("22"),
    loc("20"),
    loc("21"),
];

// Left-side rooms top to bottom, the circular patio, then the inside room.
// Two physical rooms share the label 14 on this floor; the duplicate entry is
// deliberate and both get highlighted together.
const GROUND_ROOMS: [LocationId; 7] = [
    loc("12"),
    loc("13"),
    loc("14"),
    loc("14"),
    loc("15"),
    loc("11"),
    loc("16"),
];

// Left-side rooms top to bottom, the right-side room, the two small inside
// rooms, then the lower inside and outside rooms.
const TOP_ROOMS: [LocationId; 10] = [
    loc("4"),
    loc("5"),
    loc("6"),
    loc("7"),
    loc("8"),
    loc("1"),
    loc("3"),
    loc("2"),
    loc("9"),
    loc("10"),
];

/// The three floors of the school. Discriminants match the numeric floor
/// selector used by the host data (-1, 0, 1).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(i32)]
pub enum Floor {
    Gymnasium = -1,
    Ground = 0,
    Top = 1,
}

/// A floor selector outside -1..=1. Rejected before any drawing happens;
/// there is no default floor for a bad selector.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown floor selector {0}, expected -1, 0 or 1")]
pub struct UnknownFloor(pub i32);

impl TryFrom<i32> for Floor {
    type Error = UnknownFloor;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        match value {
            -1 => Ok(Floor::Gymnasium),
            0 => Ok(Floor::Ground),
            1 => Ok(Floor::Top),
            other => Err(UnknownFloor(other)),
        }
    }
}

impl Floor {
    /// All floors, in selector order.
    pub const ALL: [Floor; 3] = [Floor::Gymnasium, Floor::Ground, Floor::Top];

    /// Room ids of this floor, in draw order.
    pub fn rooms(self) -> &'static [LocationId] {
        match self {
            Floor::Gymnasium => &GYMNASIUM_ROOMS,
            Floor::Ground => &GROUND_ROOMS,
            Floor::Top => &TOP_ROOMS,
        }
    }

    pub fn contains(self, id: LocationId) -> bool {
        self.rooms().contains(&id)
    }

    /// The floor a room id sits on. Ids are disjoint across floors, so the
    /// answer is unique; `None` for ids on no floor.
    pub fn containing(id: LocationId) -> Option<Floor> {
        Floor::ALL.into_iter().find(|floor| floor.contains(id))
    }

    pub fn label(self) -> &'static str {
        match self {
            Floor::Gymnasium => "Gimnasio",
            Floor::Ground => "Planta Baja",
            Floor::Top => "Primer Piso",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leading_zeros_normalize_away() {
        assert_eq!(loc("07"), loc("7"));
        assert_eq!(loc("007").value(), 7);
        assert_eq!(loc("0").value(), 0);
    }

    #[test]
    fn tables_have_the_expected_shape() {
        assert_eq!(Floor::Gymnasium.rooms().len(), 10);
        assert_eq!(Floor::Ground.rooms().len(), 7);
        assert_eq!(Floor::Top.rooms().len(), 10);
    }

    #[test]
    fn every_room_resolves_to_its_own_floor() {
        for floor in Floor::ALL {
            for id in floor.rooms() {
                assert_eq!(Floor::containing(*id), Some(floor), "id {id}");
            }
        }
    }

    #[test]
    fn ground_floor_lists_label_14_twice() {
        let count = Floor::Ground
            .rooms()
            .iter()
            .filter(|id| id.value() == 14)
            .count();
        assert_eq!(count, 2);
    }

    #[test]
    fn unknown_id_sits_on_no_floor() {
        assert_eq!(Floor::containing(LocationId::new(99)), None);
        assert!(!Floor::Top.contains(LocationId::new(99)));
    }

    #[test]
    fn selector_conversion() {
        assert_eq!(Floor::try_from(-1), Ok(Floor::Gymnasium));
        assert_eq!(Floor::try_from(0), Ok(Floor::Ground));
        assert_eq!(Floor::try_from(1), Ok(Floor::Top));
        assert_eq!(Floor::try_from(2), Err(UnknownFloor(2)));
        assert_eq!(Floor::try_from(-2), Err(UnknownFloor(-2)));
    }
}
