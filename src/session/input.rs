use rand::Rng;

use crate::catalog;
use crate::session::drill::{DrillState, Mode};

/// Outcome of a judged submission. Buffered keystrokes that don't trigger
/// a judgment produce no outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Judgment {
    /// Answer matched: entry removed from the pool, session advanced.
    Correct,
    /// Answer mismatched and the session advanced to a fresh item
    /// (quick mode). The missed entry stays in the pool.
    Missed,
    /// Answer mismatched and the same item is retained for retry
    /// (normal mode).
    Retry,
    /// Empty Enter: advanced to a fresh item without touching either
    /// counter.
    Skipped,
}

/// Buffer one keystroke. In quick mode the buffer is judged as soon as
/// its length reaches the target romaji length; shorter buffers never
/// trigger a judgment.
pub fn process_char(drill: &mut DrillState, ch: char, rng: &mut impl Rng) -> Option<Judgment> {
    let target = drill.current()?.romaji;

    for lower in ch.to_lowercase() {
        drill.input.push(lower);
    }

    if drill.mode == Mode::Quick && drill.input.chars().count() >= target.chars().count() {
        return Some(judge(drill, rng));
    }

    None
}

pub fn process_backspace(drill: &mut DrillState) {
    drill.input.pop();
}

/// Explicit submit. Empty input advances without penalty; otherwise the
/// buffer is judged against the current romaji.
pub fn process_enter(drill: &mut DrillState, rng: &mut impl Rng) -> Option<Judgment> {
    drill.current()?;

    if drill.input.is_empty() {
        advance(drill, rng);
        return Some(Judgment::Skipped);
    }

    Some(judge(drill, rng))
}

fn judge(drill: &mut DrillState, rng: &mut impl Rng) -> Judgment {
    let Some(idx) = drill.current.filter(|&i| i < drill.pool.len()) else {
        return Judgment::Skipped;
    };

    if drill.input == drill.pool[idx].romaji {
        // Removal shifts pool indices, so current must be re-derived.
        drill.pool.remove(idx);
        drill.correct_count += 1;
        advance(drill, rng);
        Judgment::Correct
    } else {
        drill.wrong_count += 1;
        match drill.mode {
            Mode::Quick => {
                advance(drill, rng);
                Judgment::Missed
            }
            Mode::Normal => {
                drill.input.clear();
                Judgment::Retry
            }
        }
    }
}

fn advance(drill: &mut DrillState, rng: &mut impl Rng) {
    drill.current = catalog::random_index(&drill.pool, rng);
    drill.input.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{self, ScriptEntry};
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn rng() -> SmallRng {
        SmallRng::seed_from_u64(42)
    }

    fn ka_row() -> Vec<ScriptEntry> {
        // ka ki ku ke ko: every romaji is two chars
        catalog::ENTRIES[5..10].to_vec()
    }

    fn submit(drill: &mut DrillState, text: &str, rng: &mut SmallRng) -> Option<Judgment> {
        for ch in text.chars() {
            if let Some(j) = process_char(drill, ch, rng) {
                return Some(j);
            }
        }
        process_enter(drill, rng)
    }

    #[test]
    fn test_correct_submit_shrinks_pool_by_one() {
        let mut rng = rng();
        let mut drill = DrillState::new(catalog::full_pool(), Some(0), Mode::Normal);
        let before = drill.pool.len();

        let j = submit(&mut drill, "a", &mut rng);
        assert_eq!(j, Some(Judgment::Correct));
        assert_eq!(drill.pool.len(), before - 1);
        assert_eq!(drill.correct_count, 1);
        assert_eq!(drill.wrong_count, 0);
        assert!(drill.input.is_empty());
        assert!(!drill.pool.iter().any(|e| e.romaji == "a"));
    }

    #[test]
    fn test_incorrect_submit_keeps_pool_and_current() {
        let mut rng = rng();
        let mut drill = DrillState::new(catalog::full_pool(), Some(0), Mode::Normal);
        let before = drill.pool.len();
        let current = drill.current;

        let j = submit(&mut drill, "zzz", &mut rng);
        assert_eq!(j, Some(Judgment::Retry));
        assert_eq!(drill.pool.len(), before);
        assert_eq!(drill.current, current);
        assert_eq!(drill.wrong_count, 1);
        assert_eq!(drill.correct_count, 0);
        assert!(drill.input.is_empty());
    }

    #[test]
    fn test_empty_submit_advances_without_penalty() {
        let mut rng = rng();
        let mut drill = DrillState::new(catalog::full_pool(), Some(0), Mode::Normal);
        let before = drill.pool.len();

        let j = process_enter(&mut drill, &mut rng);
        assert_eq!(j, Some(Judgment::Skipped));
        assert_eq!(drill.pool.len(), before);
        assert_eq!(drill.correct_count, 0);
        assert_eq!(drill.wrong_count, 0);
        assert!(drill.current().is_some());
    }

    #[test]
    fn test_case_insensitive_judging() {
        let mut rng = rng();
        let mut drill = DrillState::new(ka_row(), Some(1), Mode::Normal);
        let j = submit(&mut drill, "KI", &mut rng);
        assert_eq!(j, Some(Judgment::Correct));
    }

    #[test]
    fn test_backspace_pops_buffer_without_judging() {
        let mut rng = rng();
        let mut drill = DrillState::new(ka_row(), Some(0), Mode::Quick);
        assert_eq!(process_char(&mut drill, 'k', &mut rng), None);
        process_backspace(&mut drill);
        assert!(drill.input.is_empty());
        assert_eq!(drill.wrong_count, 0);
        // Safe on empty buffer too.
        process_backspace(&mut drill);
        assert!(drill.input.is_empty());
    }

    #[test]
    fn test_quick_mode_prefix_never_judges() {
        let mut rng = rng();
        let mut drill = DrillState::new(ka_row(), Some(0), Mode::Quick);
        assert_eq!(process_char(&mut drill, 'k', &mut rng), None);
        assert_eq!(drill.input, "k");
        assert_eq!(drill.correct_count, 0);
        assert_eq!(drill.wrong_count, 0);
    }

    #[test]
    fn test_quick_mode_equal_length_match_is_correct() {
        let mut rng = rng();
        let mut drill = DrillState::new(ka_row(), Some(0), Mode::Quick);
        process_char(&mut drill, 'k', &mut rng);
        let j = process_char(&mut drill, 'a', &mut rng);
        assert_eq!(j, Some(Judgment::Correct));
        assert_eq!(drill.pool.len(), 4);
        assert_eq!(drill.correct_count, 1);
    }

    #[test]
    fn test_quick_mode_equal_length_mismatch_rerolls() {
        let mut rng = rng();
        let mut drill = DrillState::new(ka_row(), Some(0), Mode::Quick);
        process_char(&mut drill, 'z', &mut rng);
        let j = process_char(&mut drill, 'z', &mut rng);
        assert_eq!(j, Some(Judgment::Missed));
        // Pool untouched; the missed item stays eligible.
        assert_eq!(drill.pool.len(), 5);
        assert_eq!(drill.wrong_count, 1);
        assert!(drill.input.is_empty());
        assert!(drill.current().is_some());
    }

    #[test]
    fn test_keystroke_on_no_current_is_ignored() {
        let mut rng = rng();
        let mut drill = DrillState::new(Vec::new(), None, Mode::Normal);
        assert_eq!(process_char(&mut drill, 'a', &mut rng), None);
        assert_eq!(process_enter(&mut drill, &mut rng), None);
        assert!(drill.input.is_empty());
    }

    #[test]
    fn test_correct_answers_never_duplicate_pool_entries() {
        let mut rng = rng();
        let mut drill = DrillState::with_random_start(catalog::full_pool(), Mode::Normal, &mut rng);

        while let Some(entry) = drill.current().copied() {
            let j = submit(&mut drill, entry.romaji, &mut rng);
            assert_eq!(j, Some(Judgment::Correct));
            for (i, a) in drill.pool.iter().enumerate() {
                for b in &drill.pool[i + 1..] {
                    assert_ne!(a.romaji, b.romaji);
                }
            }
        }

        assert!(drill.is_complete());
        assert_eq!(drill.correct_count as usize, drill.catalog_len());
        assert_eq!(drill.wrong_count, 0);
    }

    #[test]
    fn test_two_entry_session_walkthrough() {
        // catalog = [あ/a, い/i], start at あ:
        // "a" correct, "x" incorrect, "i" correct -> Complete.
        let mut rng = rng();
        let mut drill = DrillState::new(catalog::ENTRIES[..2].to_vec(), Some(0), Mode::Normal);

        assert_eq!(submit(&mut drill, "a", &mut rng), Some(Judgment::Correct));
        assert_eq!(drill.pool.len(), 1);
        assert_eq!(drill.pool[0].romaji, "i");
        assert_eq!((drill.correct_count, drill.wrong_count), (1, 0));

        assert_eq!(submit(&mut drill, "x", &mut rng), Some(Judgment::Retry));
        assert_eq!(drill.pool.len(), 1);
        assert_eq!((drill.correct_count, drill.wrong_count), (1, 1));

        assert_eq!(submit(&mut drill, "i", &mut rng), Some(Judgment::Correct));
        assert!(drill.is_complete());
        assert!(drill.current().is_none());
        assert_eq!((drill.correct_count, drill.wrong_count), (2, 1));

        drill.reset(&mut rng);
        assert_eq!(drill.pool.len(), 2);
        assert_eq!((drill.correct_count, drill.wrong_count), (0, 0));
    }
}
