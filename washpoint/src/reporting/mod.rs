//! Reporting Aggregator
//!
//! Pure read-side projections over the ledger and customer store.
//! Every value is recomputed from scratch on each call — fine at the
//! ledger sizes of a single shop, and the scalability boundary to
//! revisit before this contract ever serves a larger dataset.

use chrono::Duration;
use chrono_tz::Tz;
use shared::models::{DashboardStats, RevenuePoint};
use sqlx::SqlitePool;

use crate::db::repository::{customer, ledger};
use crate::utils::{time, AppResult};

/// Headline dashboard numbers for "now" in the business time zone.
pub async fn dashboard_stats(pool: &SqlitePool, tz: Tz) -> AppResult<DashboardStats> {
    let today = time::today(tz);
    let day_start = time::day_start_millis(today, tz);
    let day_end = time::day_end_millis(today, tz);
    let month_start = time::month_start_millis(today, tz);

    let daily_revenue = ledger::revenue_between(pool, day_start, day_end).await?;
    let monthly_revenue = ledger::revenue_between(pool, month_start, day_end).await?;
    let todays_washes = ledger::count_between(pool, day_start, day_end).await?;
    let total_customers = customer::count(pool).await?;

    Ok(DashboardStats {
        daily_revenue,
        monthly_revenue,
        total_customers,
        todays_washes,
    })
}

/// Trailing 7-day revenue series, oldest day first, zero-filled.
pub async fn weekly_revenue(pool: &SqlitePool, tz: Tz) -> AppResult<Vec<RevenuePoint>> {
    let today = time::today(tz);
    let mut series = Vec::with_capacity(7);
    for offset in (0..7).rev() {
        let date = today - Duration::days(offset);
        let start = time::day_start_millis(date, tz);
        let end = time::day_end_millis(date, tz);
        let revenue = ledger::revenue_between(pool, start, end).await?;
        series.push(RevenuePoint {
            date: date.format("%Y-%m-%d").to_string(),
            revenue,
        });
    }
    Ok(series)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repository::customer;
    use crate::db::DbService;
    use shared::models::{CustomerCreate, MembershipTier, ServiceCategory, ServiceItem, Transaction};
    use shared::util;

    const TZ: Tz = chrono_tz::UTC;

    async fn append_txn(db: &DbService, id: i64, final_amount: f64, created_at: i64) {
        let txn = Transaction {
            id,
            customer_id: 1,
            customer_name: "Test Customer".into(),
            items: vec![ServiceItem {
                id: 1,
                name: "Express Wash".into(),
                price: final_amount,
                category: ServiceCategory::Exterior,
                points_awarded: 0,
            }],
            subtotal: final_amount,
            discount_amount: 0.0,
            points_redeemed: 0,
            final_amount,
            created_at,
        };
        let mut conn = db.pool.acquire().await.unwrap();
        ledger::append(&mut conn, &txn).await.unwrap();
    }

    #[tokio::test]
    async fn dashboard_counts_today_and_month_separately() {
        let db = DbService::open_in_memory().await.unwrap();
        customer::create(
            &db.pool,
            CustomerCreate {
                name: "Ali Vural".into(),
                license_plate: "34 ABC 123".into(),
                vehicle_model: "Honda Civic".into(),
                phone: "+90 555 111 2233".into(),
                membership_tier: MembershipTier::Basic,
            },
        )
        .await
        .unwrap();

        let now = util::now_millis();
        append_txn(&db, 1, 150.0, now).await;
        append_txn(&db, 2, 250.0, now).await;
        // 40 days ago: in neither today's nor this month's window
        append_txn(&db, 3, 999.0, now - 40 * 24 * 60 * 60 * 1000).await;

        let stats = dashboard_stats(&db.pool, TZ).await.unwrap();
        assert_eq!(stats.daily_revenue, 400.0);
        assert_eq!(stats.todays_washes, 2);
        assert_eq!(stats.total_customers, 1);
        // Monthly includes today's washes, never the 40-day-old one
        assert_eq!(stats.monthly_revenue, 400.0);
    }

    #[tokio::test]
    async fn dashboard_on_empty_stores_is_all_zero() {
        let db = DbService::open_in_memory().await.unwrap();
        let stats = dashboard_stats(&db.pool, TZ).await.unwrap();
        assert_eq!(
            stats,
            DashboardStats {
                daily_revenue: 0.0,
                monthly_revenue: 0.0,
                total_customers: 0,
                todays_washes: 0,
            }
        );
    }

    #[tokio::test]
    async fn weekly_series_is_zero_filled_oldest_first() {
        let db = DbService::open_in_memory().await.unwrap();
        let today = time::today(TZ);
        let day_ms = 24 * 60 * 60 * 1000i64;

        // One wash today, one three days ago
        append_txn(&db, 1, 100.0, time::day_start_millis(today, TZ) + 1).await;
        append_txn(
            &db,
            2,
            300.0,
            time::day_start_millis(today, TZ) - 3 * day_ms + 1,
        )
        .await;

        let series = weekly_revenue(&db.pool, TZ).await.unwrap();
        assert_eq!(series.len(), 7);
        assert_eq!(series[6].date, today.format("%Y-%m-%d").to_string());
        assert_eq!(series[6].revenue, 100.0);
        assert_eq!(series[3].revenue, 300.0);
        assert_eq!(series[0].revenue, 0.0);
        // Dates ascend
        assert!(series.windows(2).all(|w| w[0].date < w[1].date));
    }
}
