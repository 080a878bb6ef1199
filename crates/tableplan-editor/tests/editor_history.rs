//! Integration tests for command history and the keyboard surface.

use uuid::Uuid;

use tableplan_editor::{
    EditorState, Key, KeyInput, Modifiers, Point, TablePatch, TableShape, TableStatus,
};

fn editor() -> EditorState {
    EditorState::new(Uuid::new_v4(), "Terrace")
}

#[test]
fn undo_redo_inverse_law() {
    let mut ed = editor();
    let initial = ed.tables().clone();

    // Four committed mutations.
    let a = ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));
    let b = ed.add_table_at(TableShape::Rectangle, Point::new(300.0, 200.0));
    ed.update_table(
        a,
        TablePatch {
            label: Some("Window 1".into()),
            status: Some(TableStatus::Reserved),
            ..Default::default()
        },
    );
    ed.delete_table(b);
    let final_state = ed.tables().clone();

    for _ in 0..4 {
        ed.undo();
    }
    assert_eq!(ed.tables(), &initial);

    for _ in 0..4 {
        ed.redo();
    }
    assert_eq!(ed.tables(), &final_state);
}

#[test]
fn undo_and_redo_on_empty_stacks_are_noops() {
    let mut ed = editor();
    ed.undo();
    ed.redo();
    assert!(ed.tables().is_empty());
    assert!(!ed.can_undo());
    assert!(!ed.can_redo());
}

#[test]
fn committed_mutation_after_undo_clears_redo() {
    let mut ed = editor();
    ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));
    ed.undo();
    assert!(ed.can_redo());

    ed.add_table_at(TableShape::Square, Point::new(200.0, 200.0));
    assert!(!ed.can_redo());
}

#[test]
fn delete_key_removes_selection_and_undo_restores_it() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));
    let original = ed.table(id).unwrap().clone();
    assert_eq!(ed.selected(), Some(id));

    assert!(ed.handle_key(KeyInput::plain(Key::Delete)));
    assert!(ed.table(id).is_none());
    assert_eq!(ed.selected(), None);

    ed.undo();
    // Identical id and geometry come back.
    assert_eq!(ed.table(id).unwrap(), &original);
}

#[test]
fn duplicate_offsets_the_copy_and_selects_it() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Rectangle, Point::new(100.0, 100.0));
    ed.update_table(
        id,
        TablePatch {
            rotation: Some(45.0),
            seat_count: Some(8),
            ..Default::default()
        },
    );

    assert!(ed.handle_key(KeyInput::with_primary(Key::Char('d'))));
    let copy_id = ed.selected().unwrap();
    assert_ne!(copy_id, id);

    let source = ed.table(id).unwrap();
    let copy = ed.table(copy_id).unwrap();
    assert_eq!(copy.position.x, source.position.x + 24.0);
    assert_eq!(copy.position.y, source.position.y + 24.0);
    assert_eq!(copy.rotation, 45.0);
    assert_eq!(copy.seat_count, 8);
    assert!(copy.z_index > source.z_index);
}

#[test]
fn z_order_actions_move_past_the_extremes() {
    let mut ed = editor();
    let a = ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));
    let b = ed.add_table_at(TableShape::Circle, Point::new(200.0, 100.0));
    let c = ed.add_table_at(TableShape::Circle, Point::new(300.0, 100.0));
    assert_eq!(
        ed.draw_order().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![a, b, c]
    );

    ed.bring_to_front(a);
    assert_eq!(
        ed.draw_order().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![b, c, a]
    );

    ed.send_to_back(c);
    assert_eq!(
        ed.draw_order().iter().map(|t| t.id).collect::<Vec<_>>(),
        vec![c, b, a]
    );
}

#[test]
fn geometry_patches_clamp_instead_of_failing() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Rectangle, Point::new(100.0, 100.0));

    ed.update_table(
        id,
        TablePatch {
            width: Some(-50.0),
            height: Some(3.0),
            rotation: Some(725.0),
            ..Default::default()
        },
    );

    let table = ed.table(id).unwrap();
    assert_eq!(table.width, 20.0);
    assert_eq!(table.height, 20.0);
    assert_eq!(table.rotation, 5.0);
}

#[test]
fn unknown_ids_are_ignored_without_history_entries() {
    let mut ed = editor();
    ed.update_table(99, TablePatch::default());
    ed.delete_table(99);
    assert_eq!(ed.duplicate_table(99), None);
    assert!(!ed.can_undo());
}

#[test]
fn arrow_keys_nudge_by_one_unit_without_snap() {
    let mut ed = editor();
    ed.toggle_snap();
    let id = ed.add_table_at(TableShape::Rectangle, Point::new(100.0, 100.0));
    let start = ed.table(id).unwrap().position;

    assert!(ed.handle_key(KeyInput::plain(Key::ArrowRight)));
    assert!(ed.handle_key(KeyInput::plain(Key::ArrowDown)));
    let pos = ed.table(id).unwrap().position;
    assert_eq!(pos, Point::new(start.x + 1.0, start.y + 1.0));

    // Each nudge is its own committed mutation.
    ed.undo();
    assert_eq!(
        ed.table(id).unwrap().position,
        Point::new(start.x + 1.0, start.y)
    );
}

#[test]
fn shift_nudges_by_a_grid_cell() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Rectangle, Point::new(100.0, 100.0));
    let start = ed.table(id).unwrap().position;

    let input = KeyInput {
        key: Key::ArrowLeft,
        modifiers: Modifiers {
            shift: true,
            ..Modifiers::default()
        },
    };
    assert!(ed.handle_key(input));
    assert_eq!(
        ed.table(id).unwrap().position,
        Point::new(start.x - 20.0, start.y)
    );
}

#[test]
fn alt_bypasses_snap_on_nudges() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Rectangle, Point::new(100.0, 100.0));
    let start = ed.table(id).unwrap().position;

    // Snap is on; a plain 1-unit nudge rounds straight back to the grid.
    assert!(ed.handle_key(KeyInput::plain(Key::ArrowRight)));
    assert_eq!(ed.table(id).unwrap().position, start);

    let input = KeyInput {
        key: Key::ArrowRight,
        modifiers: Modifiers {
            alt: true,
            ..Modifiers::default()
        },
    };
    assert!(ed.handle_key(input));
    assert_eq!(
        ed.table(id).unwrap().position,
        Point::new(start.x + 1.0, start.y)
    );
}

#[test]
fn undo_redo_shortcuts() {
    let mut ed = editor();
    ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));

    assert!(ed.handle_key(KeyInput::with_primary(Key::Char('z'))));
    assert!(ed.tables().is_empty());

    let redo = KeyInput {
        key: Key::Char('z'),
        modifiers: Modifiers {
            primary: true,
            shift: true,
            alt: false,
        },
    };
    assert!(ed.handle_key(redo));
    assert_eq!(ed.tables().len(), 1);

    assert!(ed.handle_key(KeyInput::with_primary(Key::Char('z'))));
    assert!(ed.handle_key(KeyInput::with_primary(Key::Char('y'))));
    assert_eq!(ed.tables().len(), 1);
}

#[test]
fn view_and_grid_toggles() {
    let mut ed = editor();
    let grid_visible = ed.grid().visible;
    let snap = ed.grid().snap;

    assert!(ed.handle_key(KeyInput::plain(Key::Char('g'))));
    assert_eq!(ed.grid().visible, !grid_visible);
    assert!(ed.handle_key(KeyInput::plain(Key::Char('s'))));
    assert_eq!(ed.grid().snap, !snap);

    ed.set_zoom(2.5);
    ed.set_pan(40.0, -20.0);
    assert!(ed.handle_key(KeyInput::plain(Key::Char('0'))));
    assert_eq!(ed.viewport().zoom(), 1.0);
    assert_eq!(ed.viewport().pan_x(), 0.0);
    assert_eq!(ed.viewport().pan_y(), 0.0);
}

#[test]
fn shortcuts_are_inert_while_a_text_entry_has_focus() {
    let mut ed = editor();
    let id = ed.add_table_at(TableShape::Circle, Point::new(100.0, 100.0));

    ed.set_text_entry_focus(true);
    assert!(!ed.handle_key(KeyInput::plain(Key::Delete)));
    assert!(ed.table(id).is_some());

    ed.set_text_entry_focus(false);
    assert!(ed.handle_key(KeyInput::plain(Key::Delete)));
    assert!(ed.table(id).is_none());
}
