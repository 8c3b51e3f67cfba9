//! Integration tests for paginated and parent-filtered lists.

use facility_core::pagination::PageRequest;
use facility_db::models::component::CreateComponent;
use facility_db::models::component_category::CreateComponentCategory;
use facility_db::repositories::{ComponentCategoryRepo, ComponentRepo, FloorRepo};
use sqlx::PgPool;

async fn seed_components(pool: &PgPool, count: usize) -> i64 {
    let category = ComponentCategoryRepo::create(
        pool,
        &CreateComponentCategory {
            code: "ELC".to_string(),
            name: "Electrical".to_string(),
            description: String::new(),
        },
    )
    .await
    .unwrap();
    for i in 1..=count {
        ComponentRepo::create(
            pool,
            &CreateComponent {
                category_id: category.id,
                code: format!("C-{i:03}"),
                name: format!("Breaker {i}"),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    }
    category.id
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_second_page_of_twenty_five(pool: PgPool) {
    seed_components(&pool, 25).await;

    let page = ComponentRepo::list(&pool, PageRequest::new(Some(2), Some(10)))
        .await
        .unwrap();
    assert_eq!(page.data.len(), 10);
    assert_eq!(page.total, 25);
    assert_eq!(page.total_page, 3);
    let ids: Vec<i64> = page.data.iter().map(|c| c.id).collect();
    assert_eq!(ids, (11..=20).collect::<Vec<i64>>());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_out_of_range_values_fall_back_to_defaults(pool: PgPool) {
    seed_components(&pool, 25).await;

    let zeroes = ComponentRepo::list(&pool, PageRequest::new(Some(0), Some(0)))
        .await
        .unwrap();
    let oversized = ComponentRepo::list(&pool, PageRequest::new(Some(1), Some(500)))
        .await
        .unwrap();
    for page in [&zeroes, &oversized] {
        assert_eq!(page.page, 1);
        assert_eq!(page.page_size, 10);
        assert_eq!(page.data.len(), 10);
        assert_eq!(page.data[0].id, 1);
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_category(pool: PgPool) {
    let category_id = seed_components(&pool, 3).await;

    let page = ComponentRepo::list_by_category(&pool, category_id, PageRequest::default())
        .await
        .unwrap();
    assert_eq!(page.total, 3);
    assert_eq!(page.total_page, 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_missing_parent_is_not_found(pool: PgPool) {
    let err = FloorRepo::list_by_building(&pool, 9, PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "building not found");

    let err = ComponentRepo::list_by_room(&pool, 9, PageRequest::default())
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "room not found");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_past_last_page_is_empty(pool: PgPool) {
    seed_components(&pool, 5).await;

    let page = ComponentRepo::list(&pool, PageRequest::new(Some(4), Some(10)))
        .await
        .unwrap();
    assert!(page.data.is_empty());
    assert_eq!(page.total, 5);
    assert_eq!(page.total_page, 1);
}
