//! Property-based invariant tests for the option picker's viewport state
//! machine and view stack.
//!
//! These tests verify structural invariants that must hold for any valid
//! inputs:
//!
//! 1. The selection stays within `[0, len-1]` under any move sequence.
//! 2. Movement past either end of the list is idempotent.
//! 3. The window contains the selection immediately after any move.
//! 4. The window is exactly `height` rows wide after any resize with a
//!    positive height.
//! 5. Visible rows are ascending, within the window, and restartable.
//! 6. Push/pop pairs restore the exact viewport in LIFO order.
//! 7. `did_select` only ever reports the highlighted label.

use optpick::{Event, KeyCode, KeyEvent, OptionPicker};
use proptest::prelude::*;

// ── Helpers ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
enum Move {
    Up,
    Down,
}

fn move_strategy() -> impl Strategy<Value = Move> {
    prop_oneof![Just(Move::Up), Just(Move::Down)]
}

fn options_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec("[a-z]{1,8}", 1..40)
}

fn picker_with(options: Vec<String>, height: usize) -> OptionPicker {
    let mut picker = OptionPicker::new();
    picker.options = options;
    picker.set_height(height);
    picker
}

fn apply(picker: &mut OptionPicker, mv: Move) {
    match mv {
        Move::Up => picker.move_up(),
        Move::Down => picker.move_down(),
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 1. Selection stays in bounds at every step
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn selection_stays_in_bounds(
        options in options_strategy(),
        height in 1usize..20,
        moves in prop::collection::vec(move_strategy(), 0..100),
    ) {
        let len = options.len();
        let mut picker = picker_with(options, height);
        for mv in moves {
            apply(&mut picker, mv);
            prop_assert!(
                picker.selected() < len,
                "selected {} escaped 0..{}",
                picker.selected(),
                len
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. Movement past either end is idempotent
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn movement_past_the_ends_is_idempotent(
        options in options_strategy(),
        height in 1usize..20,
        extra in 1usize..30,
    ) {
        let len = options.len();
        let mut picker = picker_with(options, height);
        for _ in 0..len + extra {
            picker.move_down();
        }
        prop_assert_eq!(picker.selected(), len - 1);
        let bottom = picker.viewport();
        picker.move_down();
        prop_assert_eq!(picker.selected(), len - 1);
        prop_assert_eq!(picker.viewport(), bottom);

        for _ in 0..len + extra {
            picker.move_up();
        }
        prop_assert_eq!(picker.selected(), 0);
        let top = picker.viewport();
        picker.move_up();
        prop_assert_eq!(picker.selected(), 0);
        prop_assert_eq!(picker.viewport(), top);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. The window contains the selection after any move
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_contains_selection_after_moves(
        options in options_strategy(),
        height in 1usize..20,
        moves in prop::collection::vec(move_strategy(), 1..100),
    ) {
        let mut picker = picker_with(options, height);
        for mv in moves {
            apply(&mut picker, mv);
            let (min, max) = picker.viewport();
            prop_assert!(
                min <= picker.selected() && picker.selected() <= max,
                "selection {} outside window [{}, {}]",
                picker.selected(),
                min,
                max
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. The window is exactly `height` rows wide after a resize
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn window_width_tracks_height_after_resize(
        options in options_strategy(),
        initial in 1usize..20,
        moves in prop::collection::vec(move_strategy(), 0..60),
        new_height in 1usize..30,
    ) {
        let mut picker = picker_with(options, initial);
        for mv in moves {
            apply(&mut picker, mv);
        }
        picker.auto_height = false;
        picker.height = new_height;
        let picker = picker.update(&Event::Resize { width: 80, height: 40 });
        let (_, max) = picker.viewport();
        prop_assert_eq!(max, new_height - 1, "max must be height - 1");
    }
}

proptest! {
    #[test]
    fn auto_height_resize_reserves_five_rows(
        term_height in 6u16..200,
    ) {
        let picker = OptionPicker::new().update(&Event::Resize {
            width: 80,
            height: term_height,
        });
        prop_assert_eq!(picker.height, usize::from(term_height) - 5);
        prop_assert_eq!(picker.viewport().1, picker.height - 1);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Visible rows are ascending, in-window, and restartable
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn visible_rows_are_ascending_and_in_window(
        options in options_strategy(),
        height in 1usize..20,
        moves in prop::collection::vec(move_strategy(), 0..60),
    ) {
        let len = options.len();
        let mut picker = picker_with(options, height);
        for mv in moves {
            apply(&mut picker, mv);
        }
        let (min, max) = picker.viewport();
        let rows: Vec<usize> = picker.visible_rows().map(|(i, _)| i).collect();
        for pair in rows.windows(2) {
            prop_assert!(pair[0] < pair[1], "indices must ascend");
        }
        for index in &rows {
            prop_assert!(min <= *index && *index <= max && *index < len);
        }
        let again: Vec<usize> = picker.visible_rows().map(|(i, _)| i).collect();
        prop_assert_eq!(rows, again, "iteration must be restartable");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. Push/pop pairs restore the exact viewport in LIFO order
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn nested_push_pop_restores_in_lifo_order(
        options in options_strategy(),
        height in 1usize..20,
        rounds in prop::collection::vec(prop::collection::vec(move_strategy(), 0..20), 1..6),
    ) {
        let mut picker = picker_with(options, height);
        let mut pushed = Vec::new();
        for moves in &rounds {
            picker.push_view();
            pushed.push((picker.selected(), picker.viewport()));
            for mv in moves {
                apply(&mut picker, *mv);
            }
        }
        prop_assert_eq!(picker.view_depth(), rounds.len());
        for expected in pushed.iter().rev() {
            let view = picker.pop_view();
            picker.restore_view(view);
            prop_assert_eq!((picker.selected(), picker.viewport()), *expected);
        }
        prop_assert_eq!(picker.view_depth(), 0);
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. did_select only ever reports the highlighted label
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn did_select_reports_exactly_the_highlighted_label(
        options in options_strategy(),
        height in 1usize..20,
        moves in prop::collection::vec(move_strategy(), 0..60),
    ) {
        let mut picker = picker_with(options, height);
        for mv in moves {
            apply(&mut picker, mv);
        }
        let enter = Event::Key(KeyEvent::new(KeyCode::Enter));
        let expected = picker.options[picker.selected()].clone();
        prop_assert_eq!(picker.did_select(&enter), Some(expected.as_str()));

        let other = Event::Key(KeyEvent::new(KeyCode::Char('x')));
        prop_assert_eq!(picker.did_select(&other), None);
        prop_assert_eq!(
            picker.did_select(&Event::Resize { width: 1, height: 1 }),
            None
        );
    }
}
