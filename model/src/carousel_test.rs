use super::*;

#[test]
fn cursor_starts_at_first_slide() {
    let cursor = CarouselCursor::new();
    assert_eq!(cursor.current(3), Some(0));
    assert_eq!(cursor.offset_percent(3), 0);
}

#[test]
fn empty_carousel_has_no_current_slide() {
    let mut cursor = CarouselCursor::new();
    assert_eq!(cursor.current(0), None);
    cursor.next(0);
    cursor.prev(0);
    assert_eq!(cursor.current(0), None);
    assert_eq!(cursor.offset_percent(0), 0);
}

#[test]
fn next_clamps_at_last_slide() {
    let mut cursor = CarouselCursor::new();
    cursor.next(3);
    cursor.next(3);
    assert_eq!(cursor.current(3), Some(2));
    cursor.next(3);
    assert_eq!(cursor.current(3), Some(2));
    assert_eq!(cursor.offset_percent(3), 200);
}

#[test]
fn repeated_next_never_passes_last_slide() {
    for len in 1..6 {
        let mut cursor = CarouselCursor::new();
        for _ in 0..(len * 3) {
            cursor.next(len);
            assert!(cursor.current(len).expect("non-empty") <= len - 1);
        }
        assert_eq!(cursor.current(len), Some(len - 1));
    }
}

#[test]
fn repeated_prev_never_goes_below_zero() {
    let mut cursor = CarouselCursor::new();
    cursor.next(4);
    cursor.next(4);
    for _ in 0..10 {
        cursor.prev(4);
    }
    assert_eq!(cursor.current(4), Some(0));
}

#[test]
fn cursor_reclamps_when_images_shrink() {
    let mut cursor = CarouselCursor::new();
    for _ in 0..4 {
        cursor.next(5);
    }
    assert_eq!(cursor.current(5), Some(4));
    assert_eq!(cursor.current(2), Some(1));
    cursor.prev(2);
    assert_eq!(cursor.current(2), Some(0));
}

#[test]
fn controls_shown_only_for_multiple_images() {
    assert!(!CarouselCursor::has_controls(0));
    assert!(!CarouselCursor::has_controls(1));
    assert!(CarouselCursor::has_controls(2));
}
