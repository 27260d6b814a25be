//! Drag and drop between tabs, records and the catalog.

use gearsheet_domain::{
    CharacterRecord, Item, ItemId, ItemKind, RecordKind, SENTINEL_INDEX,
};
use gearsheet_shared::{ErrorCode, SheetRequest, TransferPayload};

use super::SheetHarness;
use crate::infrastructure::ports::RecordStore;
use crate::test_fixtures::sheet;
use crate::use_cases::{DropOutcome, Renderable};

/// A second record with a single default tab.
fn wren() -> (CharacterRecord, ItemId) {
    let sack = Item::new(ItemKind::Tab, "Sack")
        .with_data("index", 0)
        .with_data("default", true);
    let sack_id = sack.id;
    let record = CharacterRecord::new("Wren", RecordKind::Npc)
        .with_default_gear_tab(sack_id)
        .with_item(sack);
    (record, sack_id)
}

#[tokio::test]
async fn same_owner_drop_moves_gear_to_end_of_tab() {
    let fixture = sheet();
    let owner = fixture.record.id();
    let ctx = SheetHarness::new(vec![fixture.record]);
    let transfer = &ctx.app.use_cases.transfer;

    let payload = transfer
        .begin_drag
        .execute(owner, fixture.dagger)
        .await
        .expect("drag");
    let outcome = transfer
        .drop_item
        .execute(owner, &payload, Some(fixture.backpack))
        .await
        .expect("drop");

    assert_eq!(
        outcome,
        DropOutcome::Moved {
            item_id: fixture.dagger,
            tab_id: fixture.backpack
        }
    );
    let record = ctx.record(owner).await;
    let dagger = record.item(fixture.dagger).expect("dagger kept");
    assert_eq!(dagger.tab(), Some(fixture.backpack));
    assert_eq!(dagger.index(), Some(SENTINEL_INDEX));
    assert_eq!(record.items().len(), 6);

    let view = ctx
        .app
        .use_cases
        .view
        .view_model(owner)
        .await
        .expect("view");
    let names: Vec<_> = view
        .tab(&fixture.backpack.to_string())
        .expect("backpack")
        .gear
        .iter()
        .map(|row| row.name.as_str())
        .collect();
    assert_eq!(names, ["Rope", "Torch", "Dagger"]);
}

#[tokio::test]
async fn same_owner_drop_without_target_writes_nothing() {
    let fixture = sheet();
    let owner = fixture.record.id();
    let before = fixture.record.clone();
    let ctx = SheetHarness::new(vec![fixture.record]);
    let mut changes = ctx.store.subscribe();
    let transfer = &ctx.app.use_cases.transfer;

    let payload = transfer
        .begin_drag
        .execute(owner, fixture.rope)
        .await
        .expect("drag");
    let outcome = transfer
        .drop_item
        .execute(owner, &payload, None)
        .await
        .expect("drop");

    assert_eq!(outcome, DropOutcome::Ignored);
    assert!(changes.try_recv().is_err(), "no write was made");
    assert_eq!(ctx.record(owner).await, before);
}

#[tokio::test]
async fn cross_owner_drop_clones_into_default_tab() {
    let fixture = sheet();
    let source = fixture.record.id();
    let source_before = fixture.record.clone();
    let (receiver, sack) = wren();
    let receiver_id = receiver.id();
    let ctx = SheetHarness::new(vec![fixture.record, receiver]);
    let transfer = &ctx.app.use_cases.transfer;

    let payload = transfer
        .begin_drag
        .execute(source, fixture.rope)
        .await
        .expect("drag");
    let outcome = transfer
        .drop_item
        .execute(receiver_id, &payload, None)
        .await
        .expect("drop");

    let DropOutcome::Cloned { item } = outcome else {
        panic!("expected a clone");
    };
    assert_ne!(item.id, fixture.rope);
    assert_eq!(item.name, "Rope");
    assert_eq!(item.tab(), Some(sack));
    assert_eq!(item.index(), Some(SENTINEL_INDEX));

    assert!(ctx.record(receiver_id).await.contains(item.id));
    assert_eq!(ctx.record(source).await, source_before);
}

#[tokio::test]
async fn dropped_default_tab_does_not_become_a_second_default() {
    let fixture = sheet();
    let source = fixture.record.id();
    let (receiver, sack) = wren();
    let receiver_id = receiver.id();
    let ctx = SheetHarness::new(vec![fixture.record, receiver]);
    let transfer = &ctx.app.use_cases.transfer;

    let payload = transfer
        .begin_drag
        .execute(source, fixture.backpack)
        .await
        .expect("drag");
    let outcome = transfer
        .drop_item
        .execute(receiver_id, &payload, None)
        .await
        .expect("drop");

    let DropOutcome::Cloned { item } = outcome else {
        panic!("expected a clone");
    };
    assert!(item.is_tab());
    assert!(!item.is_default());

    let record = ctx.record(receiver_id).await;
    let defaults: Vec<_> = record
        .tabs()
        .into_iter()
        .filter(|tab| tab.is_default())
        .map(|tab| tab.id)
        .collect();
    assert_eq!(defaults, vec![sack]);
    assert!(ctx.record(source).await.item(fixture.backpack).is_some_and(Item::is_default));
}

#[tokio::test]
async fn clone_onto_unknown_target_tab_uses_default_tab() {
    let fixture = sheet();
    let source = fixture.record.id();
    let (receiver, sack) = wren();
    let receiver_id = receiver.id();
    let ctx = SheetHarness::new(vec![fixture.record, receiver]);
    let transfer = &ctx.app.use_cases.transfer;

    let payload = transfer
        .begin_drag
        .execute(source, fixture.rope)
        .await
        .expect("drag");
    // The giver's backpack is not a tab of the receiver.
    let outcome = transfer
        .drop_item
        .execute(receiver_id, &payload, Some(fixture.backpack))
        .await
        .expect("drop");

    let DropOutcome::Cloned { item } = outcome else {
        panic!("expected a clone");
    };
    assert_eq!(item.tab(), Some(sack));
}

#[tokio::test]
async fn vanished_source_falls_back_to_snapshot() {
    let fixture = sheet();
    let source = fixture.record.id();
    let (receiver, _) = wren();
    let receiver_id = receiver.id();
    let ctx = SheetHarness::new(vec![fixture.record, receiver]);

    let payload = ctx
        .app
        .use_cases
        .transfer
        .begin_drag
        .execute(source, fixture.torch)
        .await
        .expect("drag");
    ctx.store
        .delete_items(source, vec![fixture.torch])
        .await
        .expect("delete source");

    let response = ctx
        .dispatcher
        .handle(
            &receiver_id.to_string(),
            SheetRequest::Drop {
                payload,
                target_tab: None,
            },
        )
        .await;

    assert!(response.is_success(), "{:?}", response);
    let record = ctx.record(receiver_id).await;
    assert!(record.items().iter().any(|item| item.name == "Torch"));
}

#[tokio::test]
async fn vanished_source_without_snapshot_is_not_found() {
    let fixture = sheet();
    let source_record = fixture.record.clone();
    let (receiver, _) = wren();
    let receiver_id = receiver.id();
    let receiver_before = receiver.clone();
    // The source record is never stored, so nothing resolves.
    let ctx = SheetHarness::new(vec![receiver]);

    let rope = source_record.item(fixture.rope).expect("rope");
    let mut payload = TransferPayload::for_record_item(&source_record, rope);
    payload.item_snapshot = None;

    let response = ctx
        .dispatcher
        .handle(
            &receiver_id.to_string(),
            SheetRequest::Drop {
                payload: payload.encode().expect("encode"),
                target_tab: None,
            },
        )
        .await;

    assert_eq!(response.error_code(), Some(ErrorCode::NotFound));
    assert_eq!(ctx.record(receiver_id).await, receiver_before);
}

#[tokio::test]
async fn catalog_payload_with_unknown_keys_still_decodes() {
    let lantern = Item::new(ItemKind::Gear, "Lantern").with_data("weight", 2);
    let lantern_id = lantern.id;
    let (receiver, sack) = wren();
    let receiver_id = receiver.id();
    let ctx = SheetHarness::with_catalog(vec![receiver], vec![(None, lantern)]);

    let text = format!(
        r#"{{"entityKind":"Item","itemId":"{}","uuid":"Item.legacy","sort":100000}}"#,
        lantern_id
    );
    let outcome = ctx
        .app
        .use_cases
        .transfer
        .drop_item
        .execute(receiver_id, &text, None)
        .await
        .expect("drop");

    let DropOutcome::Cloned { item } = outcome else {
        panic!("expected a clone");
    };
    assert_eq!(item.name, "Lantern");
    assert_eq!(item.tab(), Some(sack));
}

#[tokio::test]
async fn non_item_payload_is_rejected_without_writes() {
    let (receiver, _) = wren();
    let receiver_id = receiver.id();
    let before = receiver.clone();
    let ctx = SheetHarness::new(vec![receiver]);

    let text = format!(
        r#"{{"entityKind":"Actor","itemId":"{}"}}"#,
        ItemId::new()
    );
    let response = ctx
        .dispatcher
        .handle(
            &receiver_id.to_string(),
            SheetRequest::Drop {
                payload: text,
                target_tab: None,
            },
        )
        .await;

    assert_eq!(response.error_code(), Some(ErrorCode::ValidationError));
    assert_eq!(ctx.record(receiver_id).await, before);
}
