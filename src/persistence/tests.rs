//! Unit tests for the persistence module.

use crate::history::{CommandManager, RemoveSpriteCommand};
use crate::sprite::{Collider, SpriteItem, SpriteItemCollection};

use super::resources::{AsyncFileOperation, SpriteFileError};
use super::sheet::SavedSpriteSheet;

#[test]
fn test_sheet_from_collection_keeps_order_and_selection() {
    let mut collection = SpriteItemCollection::default();
    let a = collection.add_new_item_internal();
    let b = collection.add_new_item_internal();
    collection.set_selected(Some(a));

    let sheet = SavedSpriteSheet::from_collection(&collection);
    let ids: Vec<u32> = sheet.items.iter().map(|item| item.id).collect();
    assert_eq!(ids, vec![a, b]);
    assert_eq!(sheet.selected_id(), Some(a));
}

#[test]
fn test_sheet_json_layout() {
    let mut sprite = SpriteItem::new(1001);
    sprite.name = "rock_01".to_string();
    sprite.colliders.push(Collider::rectangle(0, 0, 8, 8));
    let sheet = SavedSpriteSheet {
        items: vec![sprite.clone()],
        selected_item: Some(sprite),
    };

    let value: serde_json::Value = serde_json::from_str(&sheet.to_json().unwrap()).unwrap();
    assert_eq!(value["Items"][0]["Name"], "rock_01");
    assert_eq!(value["Items"][0]["Colliders"][0]["Type"], "rectangle");
    assert_eq!(value["SelectedItem"]["Id"], 1001);
}

#[test]
fn test_parse_sheet_without_selection() {
    let json = r#"{
        "Items": [
            { "Id": 1001, "Name": "a", "YSort": 2, "Source": { "X": 0, "Y": 0, "Width": 16, "Height": 16 } }
        ]
    }"#;

    let sheet = SavedSpriteSheet::parse(json).unwrap();
    assert_eq!(sheet.items.len(), 1);
    assert_eq!(sheet.items[0].y_sort, 2);
    assert_eq!(sheet.selected_id(), None);
    assert!(sheet.items[0].colliders.is_empty());
}

#[test]
fn test_parse_null_selection() {
    let json = r#"{ "Items": [], "SelectedItem": null }"#;
    let sheet = SavedSpriteSheet::parse(json).unwrap();
    assert!(sheet.items.is_empty());
    assert_eq!(sheet.selected_id(), None);
}

#[test]
fn test_parse_bare_sprite_as_single_item_sheet() {
    let json = r#"{
        "Id": 1042, "Name": "barrel", "YSort": 0, "Fragile": true,
        "Source": { "X": 32, "Y": 0, "Width": 16, "Height": 24 },
        "BreakingAnimation": {
            "Source": { "X": 0, "Y": 64, "Width": 16, "Height": 24 },
            "Offset": { "X": 0, "Y": 0 },
            "XInverted": 1, "FrameDuration": 80, "NbFrames": 4
        }
    }"#;

    let sheet = SavedSpriteSheet::parse(json).unwrap();
    assert_eq!(sheet.items.len(), 1);
    assert_eq!(sheet.selected_id(), Some(1042));
    let sprite = &sheet.items[0];
    assert!(sprite.fragile);
    assert_eq!(sprite.source.height, 24);
    assert_eq!(sprite.breaking_animation.frame_count, 4);
    assert_eq!(sprite.breaking_animation.x_inverted, 1);
}

#[test]
fn test_parse_errors_are_reported() {
    assert!(SavedSpriteSheet::parse("not json").unwrap_err().starts_with("Invalid JSON"));
    assert!(
        SavedSpriteSheet::parse(r#"{ "Items": 3 }"#)
            .unwrap_err()
            .starts_with("Invalid sprite sheet")
    );
    assert!(
        SavedSpriteSheet::parse(r#"{ "Name": "no id" }"#)
            .unwrap_err()
            .starts_with("Invalid sprite")
    );
}

#[test]
fn test_loaded_sheet_round_trips_through_collection() {
    let json = r#"{
        "Items": [
            { "Id": 7, "Name": "a", "YSort": 0, "Source": { "X": 0, "Y": 0, "Width": 8, "Height": 8 } },
            { "Id": 3, "Name": "b", "YSort": 1, "Source": { "X": 8, "Y": 0, "Width": 8, "Height": 8 } }
        ],
        "SelectedItem": { "Id": 3, "Name": "b", "YSort": 1, "Source": { "X": 8, "Y": 0, "Width": 8, "Height": 8 } }
    }"#;
    let sheet = SavedSpriteSheet::parse(json).unwrap();

    let mut collection = SpriteItemCollection::default();
    let selected = sheet.selected_id();
    collection.replace_all(sheet.items.clone(), selected);

    let saved = SavedSpriteSheet::from_collection(&collection);
    assert_eq!(saved.items, sheet.items);
    assert_eq!(saved.selected_id(), Some(3));
    assert_eq!(collection.next_id(), 1001);
}

#[test]
fn test_loaded_duplicate_ids_survive_remove_and_undo() {
    let json = r#"{
        "Items": [
            { "Id": 5, "Name": "crate", "YSort": 0, "Source": { "X": 0, "Y": 0, "Width": 16, "Height": 16 } },
            { "Id": 5, "Name": "barrel", "YSort": 0, "Source": { "X": 16, "Y": 0, "Width": 16, "Height": 16 } }
        ]
    }"#;
    let sheet = SavedSpriteSheet::parse(json).unwrap();

    let mut collection = SpriteItemCollection::default();
    let reassigned = collection.replace_all(sheet.items, sheet.selected_item.map(|item| item.id));
    assert_eq!(reassigned, vec![(5, 1001)]);

    let mut manager = CommandManager::default();
    manager.execute_command(RemoveSpriteCommand::new(&collection, 5), &mut collection);
    assert_eq!(collection.len(), 1);

    manager.undo(&mut collection);
    let names: Vec<&str> = collection.items().iter().map(|item| item.name.as_str()).collect();
    assert_eq!(names, vec!["crate", "barrel"]);
    assert_eq!(collection.item(1001).unwrap().name, "barrel");
}

#[test]
fn test_async_file_operation_busy() {
    let mut op = AsyncFileOperation::default();
    assert!(!op.is_busy());
    op.is_loading = true;
    assert!(op.is_busy());
}

#[test]
fn test_sprite_file_error_default() {
    assert!(SpriteFileError::default().message.is_none());
}
