//! Schedule and stand data for the expo, embedded at build time.

use serde::{Deserialize, Serialize};

use crate::floorplan::{Floor, LocationId};

/// One scheduled event from the printed programme.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: i32,
    pub title: String,
    /// Start time, unix epoch milliseconds.
    pub time: f64,
    /// Human-readable room name shown in the UI.
    pub location: String,
    /// Numeric room id on the plano; -1 when the event has no single room.
    pub location_id: i32,
}

/// A subject stand, located by its room id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StandRecord {
    pub location_id: LocationId,
    pub location: String,
    pub title: String,
}

pub fn load_events() -> Vec<EventRecord> {
    serde_json::from_str(include_str!("../data/events.json"))
        .expect("data/events.json is valid embedded data")
}

pub fn load_stands() -> Vec<StandRecord> {
    serde_json::from_str(include_str!("../data/stands.json"))
        .expect("data/stands.json is valid embedded data")
}

/// Splits the programme around `now_ms` the way the schedule screen lists
/// it: events still to come first (soonest first), then the ones already
/// under way (most recently started first).
pub fn split_events(events: &[EventRecord], now_ms: f64) -> (Vec<EventRecord>, Vec<EventRecord>) {
    let mut upcoming: Vec<EventRecord> = events
        .iter()
        .filter(|event| now_ms < event.time)
        .cloned()
        .collect();
    let mut started: Vec<EventRecord> = events
        .iter()
        .filter(|event| now_ms >= event.time)
        .cloned()
        .collect();
    upcoming.sort_by(|a, b| a.time.total_cmp(&b.time));
    started.sort_by(|a, b| b.time.total_cmp(&a.time));
    (upcoming, started)
}

/// The room to highlight for an event; `None` when the programme lists no
/// mappable room.
pub fn highlight_for(event: &EventRecord) -> Option<LocationId> {
    u32::try_from(event.location_id).ok().map(LocationId::new)
}

/// The floor the plano opens on for a highlight. Ids found on no floor (and
/// no highlight at all) fall back to the gymnasium.
pub fn floor_for(highlight: Option<LocationId>) -> Floor {
    highlight
        .and_then(Floor::containing)
        .unwrap_or(Floor::Gymnasium)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn event(id: i32, time: f64, location_id: i32) -> EventRecord {
        EventRecord {
            id,
            title: format!("Evento {id}"),
            time,
            location: "Aula".to_string(),
            location_id,
        }
    }

    #[test]
    fn schedule_splits_around_now() {
        let events = vec![
            event(1, 1_000.0, 1),
            event(2, 3_000.0, 2),
            event(3, 2_000.0, 3),
            event(4, 500.0, 4),
        ];
        let (upcoming, started) = split_events(&events, 1_500.0);
        let upcoming_ids: Vec<i32> = upcoming.iter().map(|e| e.id).collect();
        let started_ids: Vec<i32> = started.iter().map(|e| e.id).collect();
        assert_eq!(upcoming_ids, vec![3, 2]);
        assert_eq!(started_ids, vec![1, 4]);
    }

    #[test]
    fn event_starting_exactly_now_counts_as_started() {
        let (upcoming, started) = split_events(&[event(1, 1_000.0, 1)], 1_000.0);
        assert!(upcoming.is_empty());
        assert_eq!(started.len(), 1);
    }

    #[test]
    fn negative_location_id_means_no_highlight() {
        assert_eq!(highlight_for(&event(1, 0.0, -1)), None);
        assert_eq!(highlight_for(&event(1, 0.0, 14)), Some(LocationId::new(14)));
    }

    #[test]
    fn unmapped_rooms_fall_back_to_the_gymnasium() {
        assert_eq!(floor_for(None), Floor::Gymnasium);
        assert_eq!(floor_for(Some(LocationId::new(99))), Floor::Gymnasium);
        assert_eq!(floor_for(Some(LocationId::new(16))), Floor::Ground);
        assert_eq!(floor_for(Some(LocationId::new(4))), Floor::Top);
        assert_eq!(floor_for(Some(LocationId::new(0))), Floor::Gymnasium);
    }

    #[test]
    fn embedded_data_is_consistent_with_the_plano() {
        let events = load_events();
        assert!(!events.is_empty());
        for event in &events {
            if let Some(id) = highlight_for(event) {
                assert!(
                    Floor::containing(id).is_some(),
                    "event {} points at unknown room {id}",
                    event.id
                );
            }
        }

        let stands = load_stands();
        assert!(!stands.is_empty());
        for stand in &stands {
            assert!(
                Floor::containing(stand.location_id).is_some(),
                "stand at {} sits on no floor",
                stand.location_id
            );
        }
    }
}
