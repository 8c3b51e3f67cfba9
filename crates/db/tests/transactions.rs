//! Integration tests for the transactional existence gate.
//!
//! Verifies that:
//! - A parent soft-delete waits for a gated write holding the parent lock,
//!   then tombstones the row that write created
//! - A gated write waits for an in-flight parent soft-delete, then fails
//!   with "not found" and persists nothing
//! - Concurrent creates and deletes never leave a live child under a
//!   tombstoned parent
//! - A multi-parent create that fails on a later parent leaves no row

use std::time::Duration;

use assert_matches::assert_matches;
use facility_core::error::CoreError;
use facility_db::error::StoreError;
use facility_db::models::building::CreateBuilding;
use facility_db::models::component::CreateComponent;
use facility_db::models::component_category::CreateComponentCategory;
use facility_db::models::floor::CreateFloor;
use facility_db::models::report::CreateReport;
use facility_db::models::room::CreateRoom;
use facility_db::repositories::{
    BuildingRepo, ComponentCategoryRepo, ComponentRepo, FloorRepo, ReportRepo, RoomRepo,
};
use sqlx::PgPool;

/// How long a blocked task is given to (wrongly) finish.
const SETTLE: Duration = Duration::from_millis(300);

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn building(pool: &PgPool, code: &str) -> i64 {
    BuildingRepo::create(
        pool,
        &CreateBuilding {
            code: code.to_string(),
            name: "Tower".to_string(),
            location: String::new(),
        },
    )
    .await
    .unwrap()
    .id
}

fn ground_floor(building_id: i64) -> CreateFloor {
    CreateFloor {
        building_id,
        floor_number: 1,
        name: "Ground".to_string(),
    }
}

async fn count(pool: &PgPool, query: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(query)
        .fetch_one(pool)
        .await
        .unwrap()
}

// ---------------------------------------------------------------------------
// Test: delete waits for a gated write, then cascades over its row
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_waits_for_parent_lock_then_cascades(pool: PgPool) {
    let building_id = building(&pool, "B1").await;

    // A write that has passed the gate and still holds the parent lock.
    let mut writer = pool.begin().await.unwrap();
    sqlx::query("SELECT id FROM buildings WHERE id = $1 AND deleted_at IS NULL FOR SHARE")
        .bind(building_id)
        .fetch_one(&mut *writer)
        .await
        .unwrap();

    let delete = tokio::spawn({
        let pool = pool.clone();
        async move { BuildingRepo::soft_delete(&pool, building_id).await }
    });
    tokio::time::sleep(SETTLE).await;
    assert!(!delete.is_finished(), "delete must wait for the share lock");

    let floor_id: i64 = sqlx::query_scalar(
        "INSERT INTO floors (building_id, number, name) VALUES ($1, 1, 'Ground') RETURNING id",
    )
    .bind(building_id)
    .fetch_one(&mut *writer)
    .await
    .unwrap();
    writer.commit().await.unwrap();

    assert!(delete.await.unwrap().unwrap());
    assert!(FloorRepo::find_by_id(&pool, floor_id).await.unwrap().is_none());
    let tombstoned = count(
        &pool,
        "SELECT COUNT(*) FROM floors WHERE deleted_at IS NOT NULL",
    )
    .await;
    assert_eq!(tombstoned, 1);
}

// ---------------------------------------------------------------------------
// Test: gated create waits for an in-flight delete, then fails cleanly
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_waits_for_parent_delete_then_fails(pool: PgPool) {
    let building_id = building(&pool, "B1").await;

    // A building delete that has tombstoned the row but not yet committed.
    let mut deleter = pool.begin().await.unwrap();
    sqlx::query("UPDATE buildings SET deleted_at = NOW() WHERE id = $1")
        .bind(building_id)
        .execute(&mut *deleter)
        .await
        .unwrap();

    let create = tokio::spawn({
        let pool = pool.clone();
        async move { FloorRepo::create(&pool, &ground_floor(building_id)).await }
    });
    tokio::time::sleep(SETTLE).await;
    assert!(!create.is_finished(), "gate must wait for the pending delete");

    deleter.commit().await.unwrap();

    let err = create.await.unwrap().unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound {
            entity: "building",
            ..
        })
    );
    assert_eq!(count(&pool, "SELECT COUNT(*) FROM floors").await, 0);
}

// ---------------------------------------------------------------------------
// Test: racing create and delete never orphan a live floor
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_concurrent_create_and_delete_leave_no_live_orphans(pool: PgPool) {
    for n in 0..10 {
        let building_id = building(&pool, &format!("B{n}")).await;
        let input = ground_floor(building_id);

        let (created, deleted) = tokio::join!(
            FloorRepo::create(&pool, &input),
            BuildingRepo::soft_delete(&pool, building_id),
        );

        assert!(deleted.unwrap());
        if let Err(err) = created {
            assert_eq!(err.to_string(), "building not found");
        }
    }

    let orphans = count(
        &pool,
        "SELECT COUNT(*) FROM floors f JOIN buildings b ON b.id = f.building_id \
         WHERE f.deleted_at IS NULL AND b.deleted_at IS NOT NULL",
    )
    .await;
    assert_eq!(orphans, 0);
}

// ---------------------------------------------------------------------------
// Test: a failure on a later parent rolls back the whole create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_with_dead_component_persists_nothing(pool: PgPool) {
    let building_id = building(&pool, "B1").await;
    let floor = FloorRepo::create(&pool, &ground_floor(building_id))
        .await
        .unwrap();
    let room = RoomRepo::create(
        &pool,
        &CreateRoom {
            floor_id: floor.id,
            code: "R101".to_string(),
            name: "Lobby".to_string(),
        },
    )
    .await
    .unwrap();
    let category = ComponentCategoryRepo::create(
        &pool,
        &CreateComponentCategory {
            code: "LT".to_string(),
            name: "Lighting".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let component = ComponentRepo::create(
        &pool,
        &CreateComponent {
            room_id: Some(room.id),
            category_id: category.id,
            code: "LT-01".to_string(),
            name: "Ceiling lamp".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    assert!(ComponentRepo::soft_delete(&pool, component.id).await.unwrap());

    let input = CreateReport {
        name: "Lamp flickers".to_string(),
        room_id: room.id,
        component_id: component.id,
        ..Default::default()
    };
    let err = ReportRepo::create(&pool, &input).await.unwrap_err();
    assert_matches!(
        err,
        StoreError::Core(CoreError::NotFound {
            entity: "component",
            ..
        })
    );

    // Live room and component, missing user: the last gate fails.
    let live = ComponentRepo::create(
        &pool,
        &CreateComponent {
            room_id: Some(room.id),
            category_id: category.id,
            code: "LT-02".to_string(),
            name: "Desk lamp".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let input = CreateReport {
        component_id: live.id,
        user_id: Some(42),
        ..input
    };
    let err = ReportRepo::create(&pool, &input).await.unwrap_err();
    assert_eq!(err.to_string(), "user not found");

    assert_eq!(count(&pool, "SELECT COUNT(*) FROM reports").await, 0);
}
