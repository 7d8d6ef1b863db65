//! Unit tests for the history module.

use bevy::prelude::*;

use crate::constants::{DEFAULT_HISTORY_CAPACITY, NOTHING_TO_REDO, NOTHING_TO_UNDO};
use crate::sprite::{Collider, RectField, SpriteItem, SpriteItemCollection, SpriteProperty};

use super::*;

/// Everything observable about the collection, for before/after comparisons
#[derive(Debug, PartialEq)]
struct Snapshot {
    items: Vec<SpriteItem>,
    colors: Vec<Color>,
    selected: Option<u32>,
}

fn snapshot(collection: &SpriteItemCollection) -> Snapshot {
    Snapshot {
        items: collection.items().to_vec(),
        colors: collection
            .items()
            .iter()
            .map(|item| collection.item_color(item.id))
            .collect(),
        selected: collection.selected(),
    }
}

fn ids(collection: &SpriteItemCollection) -> Vec<u32> {
    collection.items().iter().map(|item| item.id).collect()
}

fn add_sprite(manager: &mut CommandManager, collection: &mut SpriteItemCollection) -> u32 {
    manager.execute_command(AddSpriteCommand::new(), collection);
    collection.selected().unwrap()
}

fn remove_sprite(manager: &mut CommandManager, collection: &mut SpriteItemCollection, id: u32) {
    let command = RemoveSpriteCommand::new(collection, id);
    manager.execute_command(command, collection);
}

fn set_name(collection: &mut SpriteItemCollection, manager: &mut CommandManager, id: u32, name: &str) {
    let command =
        ModifySpritePropertyCommand::new(collection, id, SpriteProperty::Name(name.to_string()))
            .unwrap();
    manager.execute_command(command, collection);
}

#[test]
fn test_new_manager_is_empty() {
    let manager = CommandManager::default();
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.capacity(), DEFAULT_HISTORY_CAPACITY);
    assert_eq!(manager.undo_command_name(), NOTHING_TO_UNDO);
    assert_eq!(manager.redo_command_name(), NOTHING_TO_REDO);
}

#[test]
fn test_add_remove_sequence_fully_undone_restores_state() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);
    let b = add_sprite(&mut manager, &mut collection);
    collection.set_selected(Some(a));
    let before = snapshot(&collection);

    let c = add_sprite(&mut manager, &mut collection);
    remove_sprite(&mut manager, &mut collection, a);
    remove_sprite(&mut manager, &mut collection, c);
    let d = add_sprite(&mut manager, &mut collection);
    remove_sprite(&mut manager, &mut collection, b);
    remove_sprite(&mut manager, &mut collection, d);
    assert!(collection.is_empty());

    for _ in 0..6 {
        manager.undo(&mut collection);
    }

    assert_eq!(snapshot(&collection), before);
}

#[test]
fn test_add_after_removing_highest_id_undoes_cleanly() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);
    let b = add_sprite(&mut manager, &mut collection);
    let before = snapshot(&collection);

    remove_sprite(&mut manager, &mut collection, b);
    let c = add_sprite(&mut manager, &mut collection);
    assert!(c != a && c != b);

    manager.undo(&mut collection);
    manager.undo(&mut collection);
    assert_eq!(snapshot(&collection), before);
}

#[test]
fn test_undo_all_then_redo_all() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();

    let a = add_sprite(&mut manager, &mut collection);
    let b = add_sprite(&mut manager, &mut collection);
    set_name(&mut collection, &mut manager, a, "rock_01");
    manager.execute_command(
        AddColliderCommand::new(b, Collider::rectangle(0, 0, 8, 8)),
        &mut collection,
    );
    remove_sprite(&mut manager, &mut collection, a);
    let after = snapshot(&collection);

    for _ in 0..5 {
        manager.undo(&mut collection);
    }
    assert!(!manager.can_undo());
    assert!(manager.can_redo());
    assert!(collection.is_empty());

    for _ in 0..5 {
        manager.redo(&mut collection);
    }
    assert!(manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(snapshot(&collection), after);
}

#[test]
fn test_execute_after_undo_clears_redo() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();

    let a = add_sprite(&mut manager, &mut collection);
    add_sprite(&mut manager, &mut collection);
    manager.undo(&mut collection);
    assert!(manager.can_redo());

    set_name(&mut collection, &mut manager, a, "tree");
    assert!(!manager.can_redo());
    assert_eq!(manager.redo_command_name(), NOTHING_TO_REDO);
}

#[test]
fn test_history_capped_at_capacity() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);

    // 1 add + 59 renames = 60 commands
    for i in 1..60 {
        set_name(&mut collection, &mut manager, id, &format!("name_{i}"));
    }
    assert_eq!(manager.undo_count(), 50);

    // Most recent first
    for i in (10..60).rev() {
        assert_eq!(manager.undo_command_name(), format!("Change name of 'name_{}'", i - 1));
        manager.undo(&mut collection);
    }
    assert!(!manager.can_undo());
    // The add and the first nine renames fell off the bottom
    assert_eq!(collection.item(id).unwrap().name, "name_9");
}

#[test]
fn test_set_capacity_trims_oldest() {
    let mut manager = CommandManager::with_capacity(10);
    let mut collection = SpriteItemCollection::default();
    for _ in 0..8 {
        add_sprite(&mut manager, &mut collection);
    }

    manager.set_capacity(3);
    assert_eq!(manager.undo_count(), 3);
    for _ in 0..3 {
        manager.undo(&mut collection);
    }
    assert_eq!(collection.len(), 5);
}

#[test]
fn test_zero_capacity_keeps_one() {
    let manager = CommandManager::with_capacity(0);
    assert_eq!(manager.capacity(), 1);
}

#[test]
fn test_remove_undo_restores_original_index() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);
    let b = add_sprite(&mut manager, &mut collection);
    let c = add_sprite(&mut manager, &mut collection);

    remove_sprite(&mut manager, &mut collection, b);
    assert_eq!(ids(&collection), vec![a, c]);

    manager.undo(&mut collection);
    assert_eq!(ids(&collection), vec![a, b, c]);
}

#[test]
fn test_remove_undo_restores_previous_selection() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);
    let b = add_sprite(&mut manager, &mut collection);

    collection.set_selected(Some(b));
    remove_sprite(&mut manager, &mut collection, b);
    assert_eq!(collection.selected(), Some(a));

    manager.undo(&mut collection);
    assert_eq!(collection.selected(), Some(b));
}

#[test]
fn test_remove_undo_clamps_out_of_range_index() {
    let mut collection = SpriteItemCollection::default();
    let a = collection.add_new_item_internal();
    let b = collection.add_new_item_internal();
    let c = collection.add_new_item_internal();

    let mut remove_c = RemoveSpriteCommand::new(&collection, c);
    remove_c.execute(&mut collection);
    // Something outside the history shrank the collection meanwhile
    collection.remove_item_internal(a);
    collection.remove_item_internal(b);

    remove_c.undo(&mut collection);
    assert_eq!(ids(&collection), vec![c]);
}

#[test]
fn test_remove_stale_sprite_is_noop() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);

    let mut stale = RemoveSpriteCommand::new(&collection, 4242);
    stale.execute(&mut collection);
    stale.undo(&mut collection);
    assert_eq!(ids(&collection), vec![a]);
}

#[test]
fn test_redo_add_keeps_id_and_color() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);
    let color = collection.item_color(id);

    manager.undo(&mut collection);
    assert!(collection.is_empty());
    manager.redo(&mut collection);

    assert_eq!(ids(&collection), vec![id]);
    assert_eq!(collection.item_color(id), color);
    assert_eq!(collection.selected(), Some(id));
}

#[test]
fn test_redo_add_appends() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let a = add_sprite(&mut manager, &mut collection);
    manager.undo(&mut collection);

    // Another sprite arrives outside the history while `a` is undone
    collection.add_existing_item_internal(SpriteItem::new(5000), None);
    manager.redo(&mut collection);

    assert_eq!(ids(&collection), vec![5000, a]);
}

#[test]
fn test_modify_source_x_execute_undo_redo() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);
    collection.modify_item(id, |item| item.source.x = 5);

    let command = ModifySpritePropertyCommand::with_values(
        &collection,
        id,
        SpriteProperty::Source(RectField::X, 5),
        SpriteProperty::Source(RectField::X, 20),
    )
    .unwrap();
    manager.execute_command(command, &mut collection);
    assert_eq!(collection.item(id).unwrap().source.x, 20);

    manager.undo(&mut collection);
    assert_eq!(collection.item(id).unwrap().source.x, 5);

    manager.redo(&mut collection);
    assert_eq!(collection.item(id).unwrap().source.x, 20);
}

#[test]
fn test_modify_captures_current_value() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();

    collection.modify_item(id, |item| item.y_sort = 7);

    let mut command =
        ModifySpritePropertyCommand::new(&collection, id, SpriteProperty::YSort(12)).unwrap();
    assert!(!command.is_noop());

    command.execute(&mut collection);
    assert_eq!(collection.item(id).unwrap().y_sort, 12);
    command.undo(&mut collection);
    assert_eq!(collection.item(id).unwrap().y_sort, 7);
}

#[test]
fn test_modify_rejects_mismatched_fields_and_missing_sprite() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();

    assert!(
        ModifySpritePropertyCommand::with_values(
            &collection,
            id,
            SpriteProperty::Source(RectField::X, 5),
            SpriteProperty::Source(RectField::Y, 20),
        )
        .is_none()
    );
    assert!(ModifySpritePropertyCommand::new(&collection, 4242, SpriteProperty::YSort(1)).is_none());
}

#[test]
fn test_modify_on_removed_sprite_is_noop() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();
    let mut command =
        ModifySpritePropertyCommand::new(&collection, id, SpriteProperty::Fragile(true)).unwrap();

    collection.remove_item_internal(id);
    command.execute(&mut collection);
    command.undo(&mut collection);
    assert!(collection.is_empty());
}

#[test]
fn test_remove_collider_undo_restores_index() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);
    let colliders = vec![
        Collider::rectangle(0, 0, 8, 8),
        Collider::rectangle(8, 0, 8, 8),
        Collider::rectangle(16, 0, 8, 8),
    ];
    collection.modify_item(id, |item| item.colliders = colliders.clone());

    let command = RemoveColliderCommand::new(&collection, id, 1).unwrap();
    manager.execute_command(command, &mut collection);
    assert_eq!(collection.item(id).unwrap().colliders.len(), 2);

    manager.undo(&mut collection);
    assert_eq!(collection.item(id).unwrap().colliders, colliders);

    manager.redo(&mut collection);
    assert_eq!(
        collection.item(id).unwrap().colliders,
        vec![colliders[0].clone(), colliders[2].clone()]
    );
}

#[test]
fn test_remove_collider_undo_out_of_bounds_appends() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();
    let first = Collider::rectangle(0, 0, 8, 8);
    let last = Collider::rectangle(16, 0, 8, 8);
    collection.modify_item(id, |item| {
        item.colliders = vec![first.clone(), Collider::default(), last.clone()]
    });

    let mut command = RemoveColliderCommand::new(&collection, id, 2).unwrap();
    command.execute(&mut collection);
    collection.modify_item(id, |item| item.colliders.truncate(1));

    command.undo(&mut collection);
    assert_eq!(collection.item(id).unwrap().colliders, vec![first, last]);
}

#[test]
fn test_remove_collider_rejects_bad_index() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();
    assert!(RemoveColliderCommand::new(&collection, id, 0).is_none());
}

#[test]
fn test_add_collider_undo_removes_the_appended_one() {
    let mut collection = SpriteItemCollection::default();
    let id = collection.add_new_item_internal();
    let collider = Collider::rectangle(0, 0, 8, 8);
    collection.modify_item(id, |item| {
        item.colliders = vec![collider.clone(), Collider::rectangle(4, 4, 2, 2)]
    });

    let mut command = AddColliderCommand::new(id, collider.clone());
    command.execute(&mut collection);
    command.undo(&mut collection);

    assert_eq!(
        collection.item(id).unwrap().colliders,
        vec![collider, Collider::rectangle(4, 4, 2, 2)]
    );
}

#[test]
fn test_empty_stack_undo_redo_are_noops() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();

    manager.undo(&mut collection);
    manager.redo(&mut collection);

    assert!(!manager.has_pending_changes());
    assert!(collection.is_empty());
}

#[test]
fn test_clear_history_sends_reset() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    add_sprite(&mut manager, &mut collection);
    manager.undo(&mut collection);
    manager.drain_changes();

    manager.clear_history();
    assert!(!manager.can_undo());
    assert!(!manager.can_redo());
    assert_eq!(manager.drain_changes(), vec![HistoryChanged { command: None }]);
}

#[test]
fn test_history_changes_carry_command_labels() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);
    set_name(&mut collection, &mut manager, id, "rock_01");
    remove_sprite(&mut manager, &mut collection, id);
    manager.undo(&mut collection);

    let labels: Vec<Option<String>> = manager
        .drain_changes()
        .into_iter()
        .map(|change| change.command)
        .collect();
    assert_eq!(
        labels,
        vec![
            Some("Add Sprite".to_string()),
            Some("Change name of 'New Sprite'".to_string()),
            Some("Remove Sprite 'rock_01'".to_string()),
            Some("Remove Sprite 'rock_01'".to_string()),
        ]
    );
}

#[test]
fn test_undo_redo_names_follow_stack_tops() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();
    let id = add_sprite(&mut manager, &mut collection);
    manager.execute_command(
        AddColliderCommand::new(id, Collider::default()),
        &mut collection,
    );

    assert_eq!(manager.undo_command_name(), "Add Collider");
    manager.undo(&mut collection);
    assert_eq!(manager.undo_command_name(), "Add Sprite");
    assert_eq!(manager.redo_command_name(), "Add Collider");
}

#[test]
fn test_add_collider_scenario() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();

    manager.execute_command(AddSpriteCommand::new(), &mut collection);
    let id = collection.selected().unwrap();
    assert_eq!(id, 1001);
    let color = collection.item_color(id);

    let collider = Collider::rectangle(0, 0, 8, 8);
    manager.execute_command(AddColliderCommand::new(id, collider.clone()), &mut collection);
    assert_eq!(collection.item(id).unwrap().colliders, vec![collider.clone()]);

    manager.undo(&mut collection);
    assert!(collection.item(id).unwrap().colliders.is_empty());

    manager.undo(&mut collection);
    assert!(collection.is_empty());
    assert_eq!(collection.selected(), None);

    manager.redo(&mut collection);
    manager.redo(&mut collection);
    let sprite = collection.item(id).unwrap();
    assert_eq!(sprite.id, 1001);
    assert_eq!(sprite.colliders, vec![collider]);
    assert_eq!(collection.item_color(id), color);
}

#[test]
fn test_requests_apply_in_arrival_order() {
    let mut manager = CommandManager::default();
    let mut collection = SpriteItemCollection::default();

    let requests = vec![
        HistoryRequest::execute(AddSpriteCommand::new()),
        HistoryRequest::execute(AddSpriteCommand::new()),
        HistoryRequest::Undo,
        HistoryRequest::execute(AddSpriteCommand::new()),
    ];
    for request in requests {
        manager.apply(request, &mut collection);
    }

    // The undo ran before the last add, so that add discarded the redo entry
    assert_eq!(ids(&collection), vec![1001, 1003]);
    assert!(!manager.can_redo());
    assert_eq!(manager.undo_count(), 2);

    manager.apply(HistoryRequest::Clear, &mut collection);
    assert!(!manager.can_undo());
    assert_eq!(collection.len(), 2);
}
