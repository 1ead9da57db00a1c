//! Concurrent appends must never lose or corrupt records.

mod common;

use std::sync::Arc;
use std::thread;

use common::{caller_priced, test_clock};
use tempfile::TempDir;
use tripbook::clock::FixedClock;
use tripbook::store::{JsonFileStore, ReservationStore, SqliteStore, DEFAULT_BUSY_TIMEOUT};
use tripbook::{build_report_from_store, BookingDesk};

const THREADS: usize = 8;
const PER_THREAD: usize = 10;

fn hammer<S: ReservationStore + 'static>(store: S) -> Arc<BookingDesk<S, FixedClock>> {
    let desk = Arc::new(BookingDesk::with_clock(store, caller_priced(), test_clock()));

    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let desk = Arc::clone(&desk);
            thread::spawn(move || {
                for i in 0..PER_THREAD {
                    let cost = i64::try_from(t * 100 + i).unwrap();
                    desk.reserve_bus("2030-07-01", "Sucre", "Potosí", cost).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
    desk
}

#[test]
fn test_json_store_keeps_every_concurrent_append() {
    let dir = TempDir::new().unwrap();
    let desk = hammer(JsonFileStore::new(dir.path().join("trip.json")));

    let records = desk.store().load_all().unwrap();
    assert_eq!(records.len(), THREADS * PER_THREAD);

    let mut costs: Vec<u64> = records
        .iter()
        .map(|r| r.as_map()["cost"].as_u64().unwrap())
        .collect();
    costs.sort_unstable();
    costs.dedup();
    assert_eq!(costs.len(), THREADS * PER_THREAD);
}

#[test]
fn test_sqlite_store_keeps_every_concurrent_append() {
    let dir = TempDir::new().unwrap();
    let store = SqliteStore::open(dir.path().join("tripbook.db"), DEFAULT_BUSY_TIMEOUT).unwrap();
    let desk = hammer(store);

    let report = build_report_from_store(desk.store()).unwrap();
    assert_eq!(report.activities.len(), THREADS * PER_THREAD);
}

#[test]
fn test_json_store_keeps_appends_from_independent_handles() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("trip.json");

    // Each thread opens its own store, as separate CLI runs do.
    let handles: Vec<_> = (0..THREADS)
        .map(|t| {
            let path = path.clone();
            thread::spawn(move || {
                let desk = BookingDesk::with_clock(
                    JsonFileStore::new(path),
                    caller_priced(),
                    test_clock(),
                );
                for i in 0..PER_THREAD {
                    let cost = i64::try_from(t * 100 + i).unwrap();
                    desk.reserve_bus("2030-07-01", "Sucre", "Potosí", cost).unwrap();
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    let report = build_report_from_store(&JsonFileStore::new(&path)).unwrap();
    assert_eq!(report.activities.len(), THREADS * PER_THREAD);
}
