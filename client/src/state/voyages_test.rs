use super::*;
use schema::Vessel;
use time::macros::datetime;

fn voyage(id: &str) -> Voyage {
    Voyage {
        id: id.to_owned(),
        scheduled_departure: datetime!(2024-01-02 10:00 UTC),
        scheduled_arrival: datetime!(2024-01-03 08:30 UTC),
        port_of_loading: "Oslo".to_owned(),
        port_of_discharge: "Copenhagen".to_owned(),
        vessel: Vessel {
            id: "vessel-1".to_owned(),
            name: "Crown Seaways".to_owned(),
        },
        unit_types: Vec::new(),
    }
}

#[test]
fn successful_fetch_replaces_items_and_clears_status() {
    let mut state = VoyagesState {
        items: vec![voyage("old")],
        loading: true,
        error: Some("stale".to_owned()),
    };
    state.apply_fetch(Ok(vec![voyage("a"), voyage("b")]));
    assert_eq!(state.items.len(), 2);
    assert_eq!(state.items[0].id, "a");
    assert!(!state.loading);
    assert!(state.error.is_none());
}

#[test]
fn failed_fetch_keeps_existing_items() {
    let mut state = VoyagesState {
        items: vec![voyage("keep")],
        loading: true,
        error: None,
    };
    state.apply_fetch(Err("network down".to_owned()));
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].id, "keep");
    assert!(!state.loading);
    assert_eq!(state.error.as_deref(), Some("network down"));
}
