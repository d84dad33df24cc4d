use super::*;

fn cursor(input: &str) -> Cursor<'_, u32> {
    Cursor::new("test", input)
}

// === next ===

#[test]
fn next_consumes_code_points_in_order() {
    let mut cur = cursor("abc");
    assert_eq!(cur.next(), Some('a'));
    assert_eq!(cur.next(), Some('b'));
    assert_eq!(cur.next(), Some('c'));
    assert_eq!(cur.next(), None);
}

#[test]
fn next_advances_by_utf8_width() {
    // 水 is 3 bytes, 😀 is 4
    let mut cur = cursor("水😀x");
    assert_eq!(cur.next(), Some('水'));
    assert_eq!(cur.pos(), 3);
    assert_eq!(cur.next(), Some('😀'));
    assert_eq!(cur.pos(), 7);
    assert_eq!(cur.next(), Some('x'));
    assert_eq!(cur.pos(), 8);
}

#[test]
fn next_at_end_is_idempotent() {
    let mut cur = cursor("x");
    assert_eq!(cur.next(), Some('x'));
    // The end sentinel is an ordinary return value, repeatable at will.
    assert_eq!(cur.next(), None);
    assert_eq!(cur.next(), None);
    assert_eq!(cur.pos(), 1);
}

#[test]
fn next_on_empty_input() {
    let mut cur = cursor("");
    assert!(cur.is_eof());
    assert_eq!(cur.next(), None);
    assert_eq!(cur.pos(), 0);
}

// === peek ===

#[test]
fn peek_is_stable() {
    let cur = cursor("ab");
    assert_eq!(cur.peek(), Some('a'));
    assert_eq!(cur.peek(), Some('a'));
    assert_eq!(cur.pos(), 0);
}

#[test]
fn peek_tracks_position() {
    let mut cur = cursor("ab");
    cur.next();
    assert_eq!(cur.peek(), Some('b'));
    assert_eq!(cur.pos(), 1);
}

#[test]
fn peek_at_end_returns_sentinel() {
    let cur = cursor("");
    assert_eq!(cur.peek(), None);
}

// === backup ===

#[test]
fn backup_reverses_one_next() {
    let mut cur = cursor("ab");
    cur.next();
    cur.backup();
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.next(), Some('a'));
}

#[test]
fn backup_handles_multibyte_widths() {
    let mut cur = cursor("水B");
    cur.next();
    assert_eq!(cur.pos(), 3);
    cur.backup();
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.next(), Some('水'));
}

#[test]
fn backup_after_end_sentinel_is_a_no_op() {
    let mut cur = cursor("a");
    cur.next();
    cur.next(); // end sentinel, zero width
    cur.backup();
    assert_eq!(cur.pos(), 1);
}

#[test]
#[should_panic(expected = "backup without a matching next")]
fn double_backup_violates_the_contract() {
    let mut cur = cursor("ab");
    cur.next();
    cur.backup();
    cur.backup();
}

#[test]
#[should_panic(expected = "backup without a matching next")]
fn backup_after_emit_violates_the_contract() {
    let mut cur = cursor("ab");
    cur.next();
    cur.emit(0);
    cur.backup();
}

// === accept ===

#[test]
fn accept_consumes_on_match() {
    let mut cur = cursor("ab");
    assert!(cur.accept(|c| c == 'a'));
    assert_eq!(cur.pos(), 1);
}

#[test]
fn accept_leaves_position_on_mismatch() {
    let mut cur = cursor("ab");
    assert!(!cur.accept(|c| c == 'z'));
    assert_eq!(cur.pos(), 0);
    assert_eq!(cur.next(), Some('a'));
}

#[test]
fn accept_at_end_returns_false() {
    let mut cur = cursor("");
    assert!(!cur.accept(|_| true));
}

// === accept_run ===

#[test]
fn accept_run_consumes_maximal_run() {
    let mut cur = cursor("aaab");
    cur.accept_run(|c| c == 'a');
    assert_eq!(cur.pos(), 3);
    assert_eq!(cur.peek(), Some('b'));
}

#[test]
fn accept_run_with_no_match_consumes_nothing() {
    let mut cur = cursor("bbb");
    cur.accept_run(|c| c == 'a');
    assert_eq!(cur.pos(), 0);
}

#[test]
fn accept_run_stops_at_end_of_input() {
    let mut cur = cursor("aaa");
    cur.accept_run(|c| c == 'a');
    assert_eq!(cur.pos(), 3);
    assert!(cur.is_eof());
    assert_eq!(cur.next(), None);
}

#[test]
fn accept_run_over_multibyte_runs() {
    let mut cur = cursor("水水水B");
    cur.accept_run(|c| c == '水');
    assert_eq!(cur.pending(), "水水水");
    assert_eq!(cur.peek(), Some('B'));
}

// === ignore / pending ===

#[test]
fn ignore_discards_pending_input() {
    let mut cur = cursor("  ab");
    cur.accept_run(|c| c == ' ');
    cur.ignore();
    assert_eq!(cur.start(), 2);
    assert_eq!(cur.pending(), "");
}

#[test]
fn pending_is_the_consumed_slice() {
    let mut cur = cursor("abcd");
    cur.next();
    cur.next();
    assert_eq!(cur.pending(), "ab");
}

// === emit ===

#[test]
fn emit_queues_the_pending_text() {
    let mut cur = cursor("abc");
    cur.next();
    cur.next();
    cur.emit(7);
    assert_eq!(cur.take_item(), Some(Item::new(7, "ab")));
    assert_eq!(cur.start(), 2);
    assert_eq!(cur.pending(), "");
}

#[test]
fn emit_preserves_emission_order() {
    let mut cur = cursor("ab");
    cur.next();
    cur.emit(1);
    cur.next();
    cur.emit(2);
    assert_eq!(cur.take_item(), Some(Item::new(1, "a")));
    assert_eq!(cur.take_item(), Some(Item::new(2, "b")));
    assert_eq!(cur.take_item(), None);
}

#[test]
fn emit_with_nothing_pending_yields_empty_text() {
    let mut cur = cursor("ab");
    cur.emit(0);
    assert_eq!(cur.take_item(), Some(Item::new(0, "")));
}

// === emit_error ===

#[test]
fn emit_error_carries_the_formatted_message() {
    let mut cur = cursor("C rest");
    let Some(r) = cur.next() else {
        panic!("input is non-empty");
    };
    cur.emit_error(9, format!("unexpected rune {r:?}"));
    assert_eq!(cur.take_item(), Some(Item::new(9, "unexpected rune 'C'")));
}

#[test]
fn emit_error_resets_start_like_emit() {
    let mut cur = cursor("Cab");
    cur.next();
    cur.emit_error(9, "bad");
    assert_eq!(cur.start(), 1);
    assert_eq!(cur.pending(), "");
}

// === invariants ===

#[test]
fn start_never_exceeds_pos() {
    let mut cur = cursor("aaa bb");
    cur.accept_run(|c| c == 'a');
    cur.emit(0);
    cur.accept_run(|c| c == ' ');
    cur.ignore();
    cur.accept_run(|c| c == 'b');
    assert!(cur.start() <= cur.pos());
    assert!(cur.pos() <= cur.input().len());
}
