use std::time::{Duration, Instant};

use super::*;

const PHRASES: [&str; 3] = ["ab", "wxyz", "q"];

fn phrase_char_len(tw: &Typewriter) -> usize {
    PHRASES[tw.phrase_index()].chars().count()
}

#[test]
fn char_index_stays_in_bounds_and_flips_at_boundaries() {
    let start = Instant::now();
    let mut tw = Typewriter::new(&PHRASES, start);
    let mut was_deleting = tw.is_deleting();

    for i in 1..10_000u64 {
        let now = start + Duration::from_millis(i * 50);
        tw.advance(now);

        assert!(tw.char_index() <= phrase_char_len(&tw));

        if tw.is_deleting() != was_deleting {
            if tw.is_deleting() {
                // flipped to deleting: the word must be fully typed
                assert_eq!(tw.char_index(), phrase_char_len(&tw));
            } else {
                // flipped back to typing: the word must be fully deleted
                assert_eq!(tw.char_index(), 0);
            }
        }

        was_deleting = tw.is_deleting();
    }
}

#[test]
fn types_then_holds_then_deletes_a_word() {
    const SINGLE: [&str; 1] = ["ab"];
    let start = Instant::now();
    let mut tw = Typewriter::new(&SINGLE, start);

    tw.advance(start + Duration::from_millis(100));
    assert_eq!(tw.line(), "a");

    tw.advance(start + Duration::from_millis(200));
    assert_eq!(tw.line(), "ab");
    assert!(tw.is_deleting());

    // held in place until the 2000ms pause elapses
    tw.advance(start + Duration::from_millis(2100));
    assert_eq!(tw.line(), "ab");

    tw.advance(start + Duration::from_millis(2200));
    assert_eq!(tw.line(), "a");

    // deletes run at the faster interval
    tw.advance(start + Duration::from_millis(2250));
    assert_eq!(tw.line(), "");
    assert!(!tw.is_deleting());
}

#[test]
fn advances_phrases_cyclically() {
    const PAIR: [&str; 2] = ["ab", "cd"];
    let start = Instant::now();
    let mut tw = Typewriter::new(&PAIR, start);

    let mut seen = vec![tw.phrase_index()];
    for i in 1..2_000u64 {
        tw.advance(start + Duration::from_millis(i * 50));
        if *seen.last().unwrap() != tw.phrase_index() {
            seen.push(tw.phrase_index());
        }
    }

    // both phrases visited, strictly alternating
    assert!(seen.len() >= 3);
    for pair in seen.windows(2) {
        assert_ne!(pair[0], pair[1]);
    }
}

#[test]
fn line_slices_on_character_boundaries() {
    const ACCENTED: [&str; 1] = ["héllo"];
    let start = Instant::now();
    let mut tw = Typewriter::new(&ACCENTED, start);

    tw.advance(start + Duration::from_millis(100));
    assert_eq!(tw.line(), "h");
    tw.advance(start + Duration::from_millis(200));
    assert_eq!(tw.line(), "hé");
    tw.advance(start + Duration::from_millis(300));
    assert_eq!(tw.line(), "hél");
}

#[test]
fn empty_phrase_list_is_inert() {
    const NONE: [&str; 0] = [];
    let start = Instant::now();
    let mut tw = Typewriter::new(&NONE, start);

    assert!(!tw.advance(start + Duration::from_secs(10)));
    assert_eq!(tw.line(), "");
}
