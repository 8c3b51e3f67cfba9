//! Integration tests for soft-delete cascades and hard-deleted reports.
//!
//! Verifies that:
//! - Soft-deleted rows disappear from `find_by_id` and list queries
//! - Deleting a parent tombstones its descendants in the same transaction
//! - Reports survive cascades and keep their historical links
//! - Soft delete is idempotent (second call returns `false`)

use facility_core::pagination::PageRequest;
use facility_db::models::building::CreateBuilding;
use facility_db::models::component::CreateComponent;
use facility_db::models::component_category::CreateComponentCategory;
use facility_db::models::floor::CreateFloor;
use facility_db::models::report::CreateReport;
use facility_db::models::room::CreateRoom;
use facility_db::models::user::CreateUser;
use facility_db::repositories::{
    BuildingRepo, ComponentCategoryRepo, ComponentRepo, FloorRepo, ReportRepo, RoomRepo,
    UserRepo,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Ids of a fully populated hierarchy: building, floor, room, category,
/// component (in the room), and a report against that component.
struct Seeded {
    building: i64,
    floor: i64,
    room: i64,
    category: i64,
    component: i64,
    report: i64,
}

async fn seed(pool: &PgPool) -> Seeded {
    let building = BuildingRepo::create(
        pool,
        &CreateBuilding {
            code: "B1".to_string(),
            name: "Tower".to_string(),
            location: String::new(),
        },
    )
    .await
    .unwrap();
    let floor = FloorRepo::create(
        pool,
        &CreateFloor {
            building_id: building.id,
            floor_number: 1,
            name: "L1".to_string(),
        },
    )
    .await
    .unwrap();
    let room = RoomRepo::create(
        pool,
        &CreateRoom {
            floor_id: floor.id,
            code: "R101".to_string(),
            name: "Lab".to_string(),
        },
    )
    .await
    .unwrap();
    let category = ComponentCategoryRepo::create(
        pool,
        &CreateComponentCategory {
            code: "HVAC".to_string(),
            name: "Air handling".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    let component = ComponentRepo::create(
        pool,
        &CreateComponent {
            room_id: Some(room.id),
            category_id: category.id,
            code: "AHU-1".to_string(),
            name: "Air handler".to_string(),
            ..Default::default()
        },
    )
    .await
    .unwrap();
    let report = ReportRepo::create(
        pool,
        &CreateReport {
            name: "noise".to_string(),
            room_id: room.id,
            component_id: component.id,
            ..Default::default()
        },
    )
    .await
    .unwrap();

    Seeded {
        building: building.id,
        floor: floor.id,
        room: room.id,
        category: category.id,
        component: component.id,
        report: report.id,
    }
}

// ---------------------------------------------------------------------------
// Test: cascades
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_building_delete_cascades_to_descendants(pool: PgPool) {
    let s = seed(&pool).await;

    assert!(BuildingRepo::soft_delete(&pool, s.building).await.unwrap());

    assert!(BuildingRepo::find_by_id(&pool, s.building).await.unwrap().is_none());
    assert!(FloorRepo::find_by_id(&pool, s.floor).await.unwrap().is_none());
    assert!(RoomRepo::find_by_id(&pool, s.room).await.unwrap().is_none());
    assert!(ComponentRepo::find_by_id(&pool, s.component).await.unwrap().is_none());

    // The category is not part of the building's subtree.
    assert!(ComponentCategoryRepo::find_by_id(&pool, s.category)
        .await
        .unwrap()
        .is_some());

    // Reports are never cascaded and still point at the tombstoned rows.
    let report = ReportRepo::find_by_id(&pool, s.report).await.unwrap().unwrap();
    assert_eq!(report.component_id, s.component);
    let retired = ComponentRepo::find_by_id_include_deleted(&pool, report.component_id)
        .await
        .unwrap()
        .unwrap();
    assert!(retired.deleted_at.is_some());
    let building = BuildingRepo::find_by_id_include_deleted(&pool, s.building)
        .await
        .unwrap()
        .unwrap();
    assert!(building.deleted_at.is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_room_delete_leaves_floor(pool: PgPool) {
    let s = seed(&pool).await;

    assert!(RoomRepo::soft_delete(&pool, s.room).await.unwrap());

    assert!(FloorRepo::find_by_id(&pool, s.floor).await.unwrap().is_some());
    assert!(ComponentRepo::find_by_id(&pool, s.component).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_category_delete_cascades_to_components(pool: PgPool) {
    let s = seed(&pool).await;

    assert!(ComponentCategoryRepo::soft_delete(&pool, s.category).await.unwrap());

    assert!(ComponentRepo::find_by_id(&pool, s.component).await.unwrap().is_none());
    assert!(RoomRepo::find_by_id(&pool, s.room).await.unwrap().is_some());
}

// ---------------------------------------------------------------------------
// Test: visibility and idempotency
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_hides_from_list(pool: PgPool) {
    let s = seed(&pool).await;

    let before = FloorRepo::list(&pool, PageRequest::default()).await.unwrap();
    assert_eq!(before.total, 1);

    FloorRepo::soft_delete(&pool, s.floor).await.unwrap();

    let after = FloorRepo::list(&pool, PageRequest::default()).await.unwrap();
    assert_eq!(after.total, 0);
    assert!(after.data.is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_soft_delete_is_idempotent(pool: PgPool) {
    let s = seed(&pool).await;

    assert!(ComponentRepo::soft_delete(&pool, s.component).await.unwrap());
    assert!(!ComponentRepo::soft_delete(&pool, s.component).await.unwrap());
    assert!(!ComponentRepo::soft_delete(&pool, 999).await.unwrap());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_user_delete_keeps_report_assignment(pool: PgPool) {
    let s = seed(&pool).await;
    let user = UserRepo::create(
        &pool,
        &CreateUser {
            name: "Ana".to_string(),
            email: "ana@example.com".to_string(),
        },
    )
    .await
    .unwrap();
    ReportRepo::assign_user(&pool, s.report, user.id).await.unwrap();

    assert!(UserRepo::soft_delete(&pool, user.id).await.unwrap());

    let report = ReportRepo::find_by_id(&pool, s.report).await.unwrap().unwrap();
    assert_eq!(report.user_id, Some(user.id));
    assert!(UserRepo::find_by_id(&pool, user.id).await.unwrap().is_none());
    assert!(UserRepo::find_by_id_include_deleted(&pool, user.id)
        .await
        .unwrap()
        .is_some());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_report_hard_delete(pool: PgPool) {
    let s = seed(&pool).await;

    assert!(ReportRepo::hard_delete(&pool, s.report).await.unwrap());
    assert!(ReportRepo::find_by_id(&pool, s.report).await.unwrap().is_none());
    assert!(!ReportRepo::hard_delete(&pool, s.report).await.unwrap());

    let rows: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM reports")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(rows, 0);
}
