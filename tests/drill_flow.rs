//! End-to-end session walks over the public session API, driving the
//! state machine the way the key handlers do.

use rand::SeedableRng;
use rand::rngs::SmallRng;

use kanadr::catalog;
use kanadr::session::drill::{DrillState, Mode};
use kanadr::session::input::{self, Judgment};

fn submit(drill: &mut DrillState, text: &str, rng: &mut SmallRng) -> Option<Judgment> {
    for ch in text.chars() {
        if let Some(judgment) = input::process_char(drill, ch, rng) {
            return Some(judgment);
        }
    }
    input::process_enter(drill, rng)
}

#[test]
fn normal_mode_full_session_reaches_complete() {
    let mut rng = SmallRng::seed_from_u64(11);
    let mut drill = DrillState::with_random_start(catalog::full_pool(), Mode::Normal, &mut rng);

    let mut answered = 0;
    while let Some(entry) = drill.current().copied() {
        let before = drill.pool.len();
        assert_eq!(submit(&mut drill, entry.romaji, &mut rng), Some(Judgment::Correct));
        assert_eq!(drill.pool.len(), before - 1);
        answered += 1;
        assert!(answered <= catalog::ENTRIES.len(), "session failed to terminate");
    }

    assert!(drill.is_complete());
    assert_eq!(drill.correct_count as usize, catalog::ENTRIES.len());
    assert_eq!(drill.wrong_count, 0);
    assert_eq!(drill.progress(), 1.0);
}

#[test]
fn wrong_answers_and_skips_never_shrink_the_pool() {
    let mut rng = SmallRng::seed_from_u64(12);
    let mut drill = DrillState::with_random_start(catalog::full_pool(), Mode::Normal, &mut rng);
    let full = drill.pool.len();

    for _ in 0..10 {
        assert_eq!(submit(&mut drill, "qqqq", &mut rng), Some(Judgment::Retry));
    }
    assert_eq!(drill.pool.len(), full);
    assert_eq!(drill.wrong_count, 10);

    for _ in 0..10 {
        assert_eq!(input::process_enter(&mut drill, &mut rng), Some(Judgment::Skipped));
    }
    assert_eq!(drill.pool.len(), full);
    assert_eq!(drill.wrong_count, 10);
    assert_eq!(drill.correct_count, 0);
}

#[test]
fn quick_mode_full_session_without_enter() {
    let mut rng = SmallRng::seed_from_u64(13);
    let mut drill = DrillState::with_random_start(catalog::full_pool(), Mode::Quick, &mut rng);

    let mut guard = 0;
    while let Some(entry) = drill.current().copied() {
        let mut judged = None;
        for ch in entry.romaji.chars() {
            assert!(judged.is_none(), "judged before the full answer was typed");
            judged = input::process_char(&mut drill, ch, &mut rng);
        }
        assert_eq!(judged, Some(Judgment::Correct));
        guard += 1;
        assert!(guard <= catalog::ENTRIES.len());
    }

    assert!(drill.is_complete());
    assert_eq!(drill.correct_count as usize, catalog::ENTRIES.len());
}

#[test]
fn quick_mode_miss_surfaces_a_new_item_immediately() {
    let mut rng = SmallRng::seed_from_u64(14);
    // ka-row only: every target is two chars
    let mut drill = DrillState::new(catalog::ENTRIES[5..10].to_vec(), Some(0), Mode::Quick);

    assert_eq!(input::process_char(&mut drill, 'x', &mut rng), None);
    assert_eq!(
        input::process_char(&mut drill, 'x', &mut rng),
        Some(Judgment::Missed)
    );
    assert_eq!(drill.pool.len(), 5);
    assert_eq!(drill.wrong_count, 1);
    assert!(drill.current().is_some());
    assert!(drill.input.is_empty());
}

#[test]
fn mixed_case_answers_are_accepted() {
    let mut rng = SmallRng::seed_from_u64(15);
    let mut drill = DrillState::new(catalog::full_pool(), Some(11), Mode::Normal);
    assert_eq!(drill.current().unwrap().romaji, "shi");
    assert_eq!(submit(&mut drill, "ShI", &mut rng), Some(Judgment::Correct));
}

#[test]
fn reset_from_complete_returns_to_active() {
    let mut rng = SmallRng::seed_from_u64(16);
    let mut drill = DrillState::new(catalog::ENTRIES[..2].to_vec(), Some(0), Mode::Normal);

    while let Some(entry) = drill.current().copied() {
        submit(&mut drill, entry.romaji, &mut rng);
    }
    assert!(drill.is_complete());

    drill.reset(&mut rng);
    assert!(!drill.is_complete());
    assert_eq!(drill.pool.len(), 2);
    assert_eq!(drill.correct_count, 0);
    assert_eq!(drill.wrong_count, 0);
    assert!(drill.current().is_some());
}
