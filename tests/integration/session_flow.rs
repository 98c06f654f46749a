//! A shopper typing, scrolling and clicking through one session.

use std::thread;
use std::time::{Duration, Instant};

use vitrine::{
    CatalogHandle, EntityKind, JsonFileProvider, SearchSession, SessionSettings, Tuning,
    ViewItem,
};

use crate::common::{catalog_file, row_names, sample_catalog_json, sample_index};

const DELAY: Duration = Duration::from_millis(250);

fn settings(batch_size: usize) -> SessionSettings {
    SessionSettings {
        debounce_ms: 250,
        batch_size,
        quick_categories: 3,
    }
}

fn session(batch_size: usize) -> SearchSession {
    SearchSession::new(
        CatalogHandle::new(sample_index()),
        Tuning::default(),
        settings(batch_size),
    )
}

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_keystrokes_collapse_into_one_evaluation() {
    let file = catalog_file(&sample_catalog_json());
    let handle = CatalogHandle::load(&JsonFileProvider::new(file.path())).expect("load");
    let mut session = SearchSession::new(handle, Tuning::default(), settings(20));
    let t0 = Instant::now();

    for (i, prefix) in ["n", "no", "not", "note", "noteb", "notebo", "notebok"]
        .iter()
        .enumerate()
    {
        let now = t0 + ms(80 * i as u64);
        session.set_query(*prefix, now);
        assert!(!session.tick(now), "evaluated {:?} before the pause", prefix);
    }

    let last_keystroke = t0 + ms(80 * 6);
    assert!(!session.tick(last_keystroke + DELAY - ms(1)));
    assert!(session.tick(last_keystroke + DELAY));

    assert_eq!(session.outcome().query, "notebok");
    assert_eq!(session.outcome().intent.kind(), Some(EntityKind::Subcategory));
    assert!(!session.is_pending());
    // Nothing left to fire
    assert!(!session.tick(last_keystroke + DELAY * 4));
}

#[test]
fn test_result_from_worker_dropped_after_new_keystroke() {
    let mut session = session(20);
    let t0 = Instant::now();
    session.set_query("mug", t0);
    let ticket = session.poll(t0 + DELAY).expect("due");

    let outcome = thread::scope(|s| {
        let worker = s.spawn(|| session.run(&ticket));
        worker.join().expect("worker")
    });
    assert_eq!(outcome.query, "mug");

    // The shopper kept typing while the worker ran
    session.set_query("mugs", t0 + DELAY + ms(10));
    assert!(!session.complete(ticket, outcome));
    assert!(session.outcome().view.is_empty());

    assert!(session.tick(t0 + DELAY * 2 + ms(10)));
    assert_eq!(session.outcome().query, "mugs");
}

#[test]
fn test_scroll_then_click_chip() {
    let mut session = session(2);
    let t0 = Instant::now();

    session.set_query("stationery", t0);
    assert!(session.tick(t0 + DELAY));
    assert_eq!(session.outcome().intent.kind(), Some(EntityKind::Category));
    assert_eq!(row_names(session.visible_items()).len(), 2);

    assert!(session.on_scroll_near_end());
    assert!(session.on_scroll_near_end());
    assert_eq!(row_names(session.visible_items()).len(), 5);
    assert!(!session.has_more());
    assert!(!session.on_scroll_near_end());

    // Chips come from the category header row
    let chips = session
        .visible_items()
        .iter()
        .find_map(|item| match item {
            ViewItem::Chips(names) => Some(names.clone()),
            _ => None,
        })
        .expect("chips row");
    assert_eq!(chips, vec!["Notebooks", "Pens & Pencils"]);

    let t1 = t0 + ms(5000);
    session.select_chip(&chips[1], t1);
    assert!(session.tick(t1 + DELAY));
    assert_eq!(session.outcome().intent.kind(), Some(EntityKind::Subcategory));
    assert_eq!(session.loaded(), 2);
    assert_eq!(
        row_names(session.visible_items()),
        vec!["Gel Pen Set", "Graphite Pencils"]
    );
}

#[test]
fn test_did_you_mean_round_trip() {
    let mut session = session(20);
    let t0 = Instant::now();

    session.set_query("e", t0);
    assert!(session.tick(t0 + DELAY));
    assert_eq!(session.did_you_mean(), vec!["Stationery", "Home & Living"]);

    let t1 = t0 + ms(1000);
    session.select_suggestion("Home & Living", t1);
    assert_eq!(session.input(), "Home & Living");
    assert!(session.tick(t1 + DELAY));
    assert_eq!(session.outcome().view[0], ViewItem::Header("Home & Living".to_string()));
}

#[test]
fn test_quick_categories_follow_settings() {
    let session = session(20);
    assert_eq!(
        session.quick_categories(),
        vec!["Stationery", "Home & Living", "Wall Art"]
    );
}

#[test]
fn test_clearing_the_box_empties_the_panel() {
    let mut session = session(20);
    let t0 = Instant::now();
    session.set_query("poster", t0);
    assert!(session.tick(t0 + DELAY));
    assert!(!session.visible_items().is_empty());

    session.set_query("   ", t0 + ms(1000));
    assert!(session.flush());
    assert!(session.visible_items().is_empty());
    assert!(session.outcome().intent.is_broad());
}
