//! Booking persistence against the on-disk store.

use std::collections::HashSet;
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use hotelsense_common::{Booking, Hotel};
use hotelsense_store::{BookingStore, FileStore, KeyValueStore, SearchHistory, BOOKINGS_KEY};

fn hotel(id: &str, price: f64) -> Hotel {
    Hotel {
        id: id.to_string(),
        name: format!("Hotel {id}"),
        location: "Udaipur".into(),
        price,
        rating: 4.0,
        image: "https://img.example/x.jpg".into(),
        tags: vec!["Spa".into()],
        description: "Lakeside".into(),
    }
}

fn ids(bookings: &[Booking]) -> HashSet<String> {
    bookings.iter().map(|b| b.id.clone()).collect()
}

#[test]
fn append_then_cancel_restores_prior_collection() {
    let tmp = tempfile::tempdir().unwrap();
    let store = BookingStore::new(FileStore::new(tmp.path()));

    let t0 = Utc.with_ymd_and_hms(2026, 10, 1, 8, 0, 0).unwrap();
    let t1 = Utc.with_ymd_and_hms(2026, 10, 2, 8, 0, 0).unwrap();
    let t2 = Utc.with_ymd_and_hms(2026, 10, 3, 8, 0, 0).unwrap();

    for (i, t) in [t0, t1].into_iter().enumerate() {
        let b = Booking::confirm(&hotel(&format!("hotel-{i}"), 1000.0), "2026-11-01", "2026-11-02", 1, t);
        store.save_booking_at(b, t).unwrap();
    }
    let prior = store.bookings();

    let extra = Booking::confirm(&hotel("hotel-9", 2000.0), "2026-11-05", "2026-11-08", 2, t2);
    let extra_id = extra.id.clone();
    store.save_booking_at(extra, t2).unwrap();
    assert_eq!(store.bookings().len(), prior.len() + 1);

    assert!(store.cancel_booking(&extra_id).unwrap());
    let after = store.bookings();
    assert_eq!(ids(&after), ids(&prior));
    assert_eq!(after, prior);
}

#[test]
fn bookings_survive_reopening_the_store() {
    let tmp = tempfile::tempdir().unwrap();
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap();

    {
        let store = BookingStore::new(FileStore::new(tmp.path()));
        let b = Booking::confirm(&hotel("hotel-1", 1500.0), "2026-12-01", "2026-12-05", 2, now);
        store.save_booking_at(b, now).unwrap();
    }

    let reopened = BookingStore::new(FileStore::new(tmp.path()));
    let bookings = reopened.bookings();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].price, 6000.0);
    assert_eq!(bookings[0].check_out, "2026-12-05");
}

#[test]
fn bookings_and_history_share_one_store() {
    let tmp = tempfile::tempdir().unwrap();
    let kv = Arc::new(FileStore::new(tmp.path()));
    let bookings = BookingStore::new(Arc::clone(&kv));
    let history = SearchHistory::new(Arc::clone(&kv));

    history.save_results(&[hotel("hotel-2", 900.0)]).unwrap();
    bookings
        .save_booking(Booking::confirm(&hotel("hotel-2", 900.0), "2026-11-01", "2026-11-02", 1, Utc::now()))
        .unwrap();

    assert_eq!(history.last_results().len(), 1);
    assert!(kv.get(BOOKINGS_KEY).unwrap().is_some());
}

#[test]
fn stored_json_uses_camel_case_fields() {
    let tmp = tempfile::tempdir().unwrap();
    let kv = FileStore::new(tmp.path());
    let store = BookingStore::new(kv.clone());
    let now = Utc.with_ymd_and_hms(2026, 10, 18, 10, 0, 0).unwrap();
    store
        .save_booking_at(Booking::confirm(&hotel("hotel-5", 100.0), "2026-11-01", "2026-11-02", 1, now), now)
        .unwrap();

    let raw = kv.get(BOOKINGS_KEY).unwrap().unwrap();
    let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(json[0]["hotelId"], "hotel-5");
    assert_eq!(json[0]["bookingDate"], "2026-10-18T10:00:00.000Z");
}
