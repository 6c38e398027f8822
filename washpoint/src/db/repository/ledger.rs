//! Transaction Ledger Repository
//!
//! Append-only: there is no update or delete. `seq` (AUTOINCREMENT)
//! preserves insertion order, which is the chronological order of
//! settlement. Item lists are stored as a JSON snapshot in the row.

use shared::models::Transaction;
use sqlx::{FromRow, SqliteConnection, SqlitePool};

use super::RepoResult;

#[derive(FromRow)]
struct LedgerRow {
    id: i64,
    customer_id: i64,
    customer_name: String,
    items: String,
    subtotal: f64,
    discount_amount: f64,
    points_redeemed: i64,
    final_amount: f64,
    created_at: i64,
}

impl LedgerRow {
    fn into_transaction(self) -> RepoResult<Transaction> {
        Ok(Transaction {
            id: self.id,
            customer_id: self.customer_id,
            customer_name: self.customer_name,
            items: serde_json::from_str(&self.items)?,
            subtotal: self.subtotal,
            discount_amount: self.discount_amount,
            points_redeemed: self.points_redeemed,
            final_amount: self.final_amount,
            created_at: self.created_at,
        })
    }
}

const SELECT: &str = "SELECT id, customer_id, customer_name, items, subtotal, discount_amount, \
     points_redeemed, final_amount, created_at FROM ledger";

/// Append one settled transaction. Takes a connection so the settlement
/// engine can pair it with the balance update in one SQLite transaction.
pub async fn append(conn: &mut SqliteConnection, txn: &Transaction) -> RepoResult<()> {
    let items = serde_json::to_string(&txn.items)?;
    sqlx::query(
        "INSERT INTO ledger (id, customer_id, customer_name, items, subtotal, discount_amount, \
         points_redeemed, final_amount, created_at) \
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
    )
    .bind(txn.id)
    .bind(txn.customer_id)
    .bind(&txn.customer_name)
    .bind(items)
    .bind(txn.subtotal)
    .bind(txn.discount_amount)
    .bind(txn.points_redeemed)
    .bind(txn.final_amount)
    .bind(txn.created_at)
    .execute(&mut *conn)
    .await?;
    Ok(())
}

/// All transactions in insertion order (oldest first).
pub async fn find_all(pool: &SqlitePool) -> RepoResult<Vec<Transaction>> {
    let sql = format!("{SELECT} ORDER BY seq ASC");
    let rows = sqlx::query_as::<_, LedgerRow>(&sql).fetch_all(pool).await?;
    rows.into_iter().map(LedgerRow::into_transaction).collect()
}

pub async fn count(pool: &SqlitePool) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM ledger")
        .fetch_one(pool)
        .await?;
    Ok(n)
}

/// Sum of `final_amount` over `start <= created_at < end`.
pub async fn revenue_between(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<f64> {
    let revenue: f64 = sqlx::query_scalar(
        "SELECT CAST(COALESCE(SUM(final_amount), 0) AS REAL) FROM ledger \
         WHERE created_at >= ?1 AND created_at < ?2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(revenue)
}

/// Number of transactions with `start <= created_at < end`.
pub async fn count_between(pool: &SqlitePool, start: i64, end: i64) -> RepoResult<i64> {
    let n: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM ledger WHERE created_at >= ?1 AND created_at < ?2",
    )
    .bind(start)
    .bind(end)
    .fetch_one(pool)
    .await?;
    Ok(n)
}
