//! Service Catalog Repository
//!
//! The catalog is read-only at runtime: it is seeded once on first run
//! and only ever replaced wholesale by a backup restore.

use shared::models::{ServiceCategory, ServiceItem};
use sqlx::{SqliteConnection, SqlitePool};

use super::RepoResult;

const SELECT: &str = "SELECT id, name, price, category, points_awarded FROM service_item";

/// Default catalog installed on first run. Fixed IDs so that a fresh
/// install is deterministic.
pub fn default_catalog() -> Vec<ServiceItem> {
    vec![
        ServiceItem {
            id: 1,
            name: "Express Wash".into(),
            price: 150.0,
            category: ServiceCategory::Exterior,
            points_awarded: 15,
        },
        ServiceItem {
            id: 2,
            name: "Deluxe Wash".into(),
            price: 250.0,
            category: ServiceCategory::Full,
            points_awarded: 25,
        },
        ServiceItem {
            id: 3,
            name: "Interior Deep Clean".into(),
            price: 600.0,
            category: ServiceCategory::Interior,
            points_awarded: 60,
        },
        ServiceItem {
            id: 4,
            name: "Ceramic Coating".into(),
            price: 1500.0,
            category: ServiceCategory::Detailing,
            points_awarded: 150,
        },
        ServiceItem {
            id: 5,
            name: "Tire Shine".into(),
            price: 50.0,
            category: ServiceCategory::Exterior,
            points_awarded: 5,
        },
    ]
}

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<ServiceItem>> {
    let sql = format!("{SELECT} ORDER BY id");
    let rows = sqlx::query_as::<_, ServiceItem>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<ServiceItem>> {
    let sql = format!("{SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, ServiceItem>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Insert the default catalog if the table is empty. Returns the number
/// of rows inserted (0 when the catalog already exists).
pub async fn seed_defaults(pool: &SqlitePool) -> RepoResult<u64> {
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM service_item")
        .fetch_one(pool)
        .await?;
    if count > 0 {
        return Ok(0);
    }

    let mut conn = pool.acquire().await?;
    let mut inserted = 0;
    for item in default_catalog() {
        insert(&mut conn, &item).await?;
        inserted += 1;
    }
    Ok(inserted)
}

/// Insert one catalog row. Used by seeding and by backup restore, never
/// by normal operation.
pub async fn insert(conn: &mut SqliteConnection, item: &ServiceItem) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO service_item (id, name, price, category, points_awarded) \
         VALUES (?1, ?2, ?3, ?4, ?5)",
    )
    .bind(item.id)
    .bind(&item.name)
    .bind(item.price)
    .bind(item.category)
    .bind(item.points_awarded)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
