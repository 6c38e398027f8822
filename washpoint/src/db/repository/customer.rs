//! Customer Repository

use shared::models::{Customer, CustomerCreate, CustomerUpdate};
use shared::util;
use sqlx::{SqliteConnection, SqlitePool};

use super::{RepoError, RepoResult};

const SELECT: &str = "SELECT id, name, license_plate, vehicle_model, phone, membership_tier, \
     points, joined_at FROM customer";

pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Customer>> {
    let sql = format!("{SELECT} ORDER BY joined_at DESC, id DESC");
    let rows = sqlx::query_as::<_, Customer>(&sql).fetch_all(pool).await?;
    Ok(rows)
}

pub async fn find_by_id(pool: &SqlitePool, id: i64) -> RepoResult<Option<Customer>> {
    let sql = format!("{SELECT} WHERE id = ?");
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(id)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

/// Case-insensitive exact plate match.
///
/// Plates are not unique in the schema (documented gap); when duplicates
/// exist the oldest registration wins.
pub async fn find_by_plate(pool: &SqlitePool, plate: &str) -> RepoResult<Option<Customer>> {
    let sql = format!(
        "{SELECT} WHERE license_plate = ?1 COLLATE NOCASE ORDER BY joined_at ASC, id ASC LIMIT 1"
    );
    let row = sqlx::query_as::<_, Customer>(&sql)
        .bind(plate)
        .fetch_optional(pool)
        .await?;
    Ok(row)
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM customer")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Register a customer: fresh ID, zero points, joined now.
pub async fn create(pool: &SqlitePool, data: CustomerCreate) -> RepoResult<Customer> {
    let id = util::snowflake_id();
    let now = util::now_millis();
    sqlx::query(
        "INSERT INTO customer (id, name, license_plate, vehicle_model, phone, membership_tier, \
         points, joined_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, 0, ?7)",
    )
    .bind(id)
    .bind(&data.name)
    .bind(&data.license_plate)
    .bind(&data.vehicle_model)
    .bind(&data.phone)
    .bind(data.membership_tier)
    .bind(now)
    .execute(pool)
    .await?;

    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::Database("Failed to create customer".into()))
}

/// Profile edit with merge semantics. The point balance is not
/// touchable here; only the settlement engine moves points.
pub async fn update(pool: &SqlitePool, id: i64, data: CustomerUpdate) -> RepoResult<Customer> {
    let rows = sqlx::query(
        "UPDATE customer SET name = COALESCE(?1, name), \
         license_plate = COALESCE(?2, license_plate), \
         vehicle_model = COALESCE(?3, vehicle_model), \
         phone = COALESCE(?4, phone), \
         membership_tier = COALESCE(?5, membership_tier) \
         WHERE id = ?6",
    )
    .bind(data.name)
    .bind(data.license_plate)
    .bind(data.vehicle_model)
    .bind(data.phone)
    .bind(data.membership_tier)
    .bind(id)
    .execute(pool)
    .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    find_by_id(pool, id)
        .await?
        .ok_or_else(|| RepoError::NotFound(format!("Customer {id} not found")))
}

/// Set the point balance. Takes a connection so the settlement engine
/// can run it inside the same SQLite transaction as the ledger append.
/// The schema CHECK rejects negative balances as a last line of defense.
pub async fn set_points(conn: &mut SqliteConnection, id: i64, points: i64) -> RepoResult<()> {
    let rows = sqlx::query("UPDATE customer SET points = ?1 WHERE id = ?2")
        .bind(points)
        .bind(id)
        .execute(&mut *conn)
        .await?;
    if rows.rows_affected() == 0 {
        return Err(RepoError::NotFound(format!("Customer {id} not found")));
    }
    Ok(())
}

/// Raw insert used only by backup restore.
pub async fn insert(conn: &mut SqliteConnection, customer: &Customer) -> RepoResult<()> {
    sqlx::query(
        "INSERT INTO customer (id, name, license_plate, vehicle_model, phone, membership_tier, \
         points, joined_at) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)",
    )
    .bind(customer.id)
    .bind(&customer.name)
    .bind(&customer.license_plate)
    .bind(&customer.vehicle_model)
    .bind(&customer.phone)
    .bind(customer.membership_tier)
    .bind(customer.points)
    .bind(customer.joined_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}
