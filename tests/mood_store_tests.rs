use moodstyle::mood::{ConfidencePolicy, Mood, MoodStore, LIVE_DETECTION_CONTEXT};

#[test]
fn test_history_never_exceeds_limit() {
    let store = MoodStore::default();
    for i in 0..200 {
        store
            .add_mood_entry(format!("m{}", i), 0.5, Some("bulk"))
            .unwrap();
        assert!(store.mood_history().len() <= 50, "overflow after {} inserts", i + 1);
    }
}

#[test]
fn test_fifty_first_entry_evicts_first() {
    let store = MoodStore::default();
    store.add_mood_entry("first", 0.5, None).unwrap();
    for _ in 0..49 {
        store.add_mood_entry("calm", 0.5, None).unwrap();
    }
    assert_eq!(store.mood_history().len(), 50);
    assert_eq!(store.mood_history().last().unwrap().mood.label(), "first");

    store.add_mood_entry("happy", 0.5, None).unwrap();
    let history = store.mood_history();
    assert_eq!(history.len(), 50);
    assert!(history.iter().all(|e| e.mood.label() != "first"));
    assert_eq!(history[0].mood, Mood::Happy);
}

#[test]
fn test_history_ordered_newest_first() {
    let store = MoodStore::default();
    for i in 0..60 {
        if i % 3 == 0 {
            store.set_detected_mood("excited", 0.8).unwrap();
        } else {
            store.add_mood_entry("calm", 0.4, None).unwrap();
        }
    }
    let history = store.mood_history();
    for i in 0..history.len() {
        for j in (i + 1)..history.len() {
            assert!(history[i].date >= history[j].date);
        }
    }
}

#[test]
fn test_set_detected_equals_manual_sequence() {
    let detected = MoodStore::default();
    let manual = MoodStore::default();

    detected.set_detected_mood("romantic", 0.77).unwrap();
    manual.add_mood_entry("romantic", 0.77, Some(LIVE_DETECTION_CONTEXT)).unwrap();

    let a = detected.mood_history();
    let b = manual.mood_history();
    assert_eq!(a.len(), 1);
    assert_eq!(b.len(), 1);
    assert_eq!(a[0].mood, b[0].mood);
    assert_eq!(a[0].confidence, b[0].confidence);
    assert_eq!(a[0].context, b[0].context);
    assert_eq!(detected.detected_mood(), Some(Mood::Romantic));
}

#[test]
fn test_each_detection_adds_exactly_one_entry() {
    let store = MoodStore::default();
    for n in 1..=10 {
        store.set_detected_mood("happy", 0.9).unwrap();
        assert_eq!(store.mood_history().len(), n);
        assert_eq!(
            store.latest_entry().unwrap().context.as_deref(),
            Some("Live detection")
        );
    }
}

#[test]
fn test_set_current_mood_is_isolated() {
    let store = MoodStore::default();
    store.set_detected_mood("calm", 0.8).unwrap();
    let history = store.mood_history();

    for label in ["happy", "whimsical", "happy", ""] {
        store.set_current_mood(label);
        assert_eq!(store.mood_history(), history);
        assert_eq!(store.detected_mood(), Some(Mood::Calm));
    }
    assert_eq!(store.current_mood(), Some(Mood::Custom(String::new())));
}

#[test]
fn test_setting_same_current_mood_twice_is_stable() {
    let store = MoodStore::default();
    store.set_current_mood("elegant");
    let first = store.snapshot();
    store.set_current_mood("elegant");
    let second = store.snapshot();
    assert_eq!(first.current_mood, second.current_mood);
    assert_eq!(first.mood_history, second.mood_history);
    assert_eq!(first.detected_mood, second.detected_mood);
}

#[test]
fn test_subscriber_sees_latest_snapshot() {
    let store = MoodStore::new(5, ConfidencePolicy::PassThrough);
    let mut rx = store.subscribe();
    for _ in 0..8 {
        store.set_detected_mood("excited", 0.85).unwrap();
    }
    assert!(rx.has_changed().unwrap());
    let snapshot = rx.borrow_and_update().clone();
    assert_eq!(snapshot.revision, 8);
    assert_eq!(snapshot.mood_history.len(), 5);
    assert!(!rx.has_changed().unwrap());
}

#[test]
fn test_snapshot_serializes_for_views() {
    let store = MoodStore::default();
    store.set_current_mood("confident");
    store.set_detected_mood("calm", 0.9).unwrap();

    let json = serde_json::to_value(store.snapshot()).unwrap();
    assert_eq!(json["currentMood"], "confident");
    assert_eq!(json["detectedMood"], "calm");
    assert_eq!(json["moodHistory"][0]["context"], "Live detection");
    assert_eq!(json["moodLeaderboard"].as_array().unwrap().len(), 6);
}
