use super::*;

// viewport of 24 rows leaves rows [scroll, scroll+22) after the bottom margin

#[test]
fn section_below_viewport_is_not_visible() {
    assert!(!is_visible(100, 10, 0, 24));
    assert_eq!(visible_rows(100, 10, 0, 24), 0);
}

#[test]
fn section_above_viewport_is_not_visible() {
    assert!(!is_visible(0, 10, 50, 24));
}

#[test]
fn fully_on_screen_section_is_visible() {
    assert!(is_visible(5, 10, 0, 24));
    assert_eq!(visible_rows(5, 10, 0, 24), 10);
}

#[test]
fn one_tenth_visible_crosses_the_threshold() {
    // 20-row section whose top two rows are inside the trimmed window
    assert_eq!(visible_rows(20, 20, 0, 24), 2);
    assert!(is_visible(20, 20, 0, 24));

    // only one row inside: below the 10% threshold
    assert_eq!(visible_rows(21, 20, 0, 24), 1);
    assert!(!is_visible(21, 20, 0, 24));
}

#[test]
fn bottom_margin_delays_reveal() {
    // section starting on the last two raw viewport rows does not count
    assert_eq!(visible_rows(22, 10, 0, 24), 0);
    assert!(!is_visible(22, 10, 0, 24));
}

#[test]
fn half_visibility_needs_more_rows_than_reveal() {
    // 10-row section with 3 rows visible: revealed but not half-visible
    assert_eq!(visible_rows(19, 10, 0, 24), 3);
    assert!(is_visible(19, 10, 0, 24));
    assert!(!is_half_visible(19, 10, 0, 24));

    // 5 rows visible crosses the 50% bar
    assert_eq!(visible_rows(17, 10, 0, 24), 5);
    assert!(is_half_visible(17, 10, 0, 24));
}

#[test]
fn zero_height_section_never_reveals() {
    assert!(!is_visible(0, 0, 0, 24));
}
