//! Backup and restore
//!
//! The whole database travels as one JSON document. Restore parses the
//! complete document before touching anything: a malformed document is
//! rejected with every store exactly as it was, and a valid one
//! replaces all three stores wholesale inside a single SQLite
//! transaction.

use serde::{Deserialize, Serialize};
use shared::models::{Customer, ServiceItem, Transaction};
use sqlx::SqlitePool;

use crate::db::repository::{customer, ledger, service_item};
use crate::utils::{AppError, AppResult};

/// The single backup document: `{customers, transactions, services}`.
///
/// All three collections are required — a document missing one of them
/// is treated as malformed rather than partially applied.
#[derive(Debug, Serialize, Deserialize)]
pub struct BackupDocument {
    pub customers: Vec<Customer>,
    pub transactions: Vec<Transaction>,
    pub services: Vec<ServiceItem>,
}

/// Serialize all three stores into one document.
pub async fn export(pool: &SqlitePool) -> AppResult<String> {
    let doc = BackupDocument {
        customers: customer::find_all(pool).await?,
        transactions: ledger::find_all(pool).await?,
        services: service_item::find_all(pool).await?,
    };
    serde_json::to_string(&doc).map_err(|e| AppError::Internal(format!("backup serialization failed: {e}")))
}

/// Replace all three stores with the contents of `json`.
///
/// Parse-before-write: nothing is mutated unless the whole document
/// deserializes. The replacement itself is one transaction, so a
/// mid-restore failure also leaves the previous state intact.
pub async fn restore(pool: &SqlitePool, json: &str) -> AppResult<()> {
    let doc: BackupDocument = serde_json::from_str(json)
        .map_err(|e| AppError::validation(format!("malformed backup document: {e}")))?;

    let mut tx = pool.begin().await?;

    sqlx::query("DELETE FROM ledger").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM customer").execute(&mut *tx).await?;
    sqlx::query("DELETE FROM service_item").execute(&mut *tx).await?;

    for item in &doc.services {
        service_item::insert(&mut tx, item).await?;
    }
    for c in &doc.customers {
        customer::insert(&mut tx, c).await?;
    }
    for t in &doc.transactions {
        ledger::append(&mut tx, t).await?;
    }

    tx.commit().await?;

    tracing::info!(
        customers = doc.customers.len(),
        transactions = doc.transactions.len(),
        services = doc.services.len(),
        "backup restored"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::DbService;
    use crate::settlement::{Selection, SettlementEngine};
    use shared::models::{CustomerCreate, MembershipTier};

    async fn seeded_db_with_history() -> DbService {
        let db = DbService::open_in_memory().await.unwrap();
        let c = customer::create(
            &db.pool,
            CustomerCreate {
                name: "Ayşe Demir".into(),
                license_plate: "34 ABC 123".into(),
                vehicle_model: "Fiat Egea".into(),
                phone: "+90 555 000 0000".into(),
                membership_tier: MembershipTier::Premium,
            },
        )
        .await
        .unwrap();

        let engine = SettlementEngine::new(db.pool.clone());
        let catalog = service_item::find_all(&db.pool).await.unwrap();
        let mut selection = Selection::new();
        selection.toggle(catalog[0].clone());
        engine.settle(c.id, &selection, 0).await.unwrap();
        db
    }

    #[tokio::test]
    async fn export_restore_round_trip() {
        let db = seeded_db_with_history().await;
        let snapshot = export(&db.pool).await.unwrap();

        let other = DbService::open_in_memory().await.unwrap();
        restore(&other.pool, &snapshot).await.unwrap();

        assert_eq!(
            customer::find_all(&other.pool).await.unwrap(),
            customer::find_all(&db.pool).await.unwrap()
        );
        assert_eq!(
            ledger::find_all(&other.pool).await.unwrap(),
            ledger::find_all(&db.pool).await.unwrap()
        );
        assert_eq!(
            service_item::find_all(&other.pool).await.unwrap(),
            service_item::find_all(&db.pool).await.unwrap()
        );
    }

    #[tokio::test]
    async fn malformed_document_leaves_stores_untouched() {
        let db = seeded_db_with_history().await;
        let customers_before = customer::find_all(&db.pool).await.unwrap();
        let ledger_before = ledger::find_all(&db.pool).await.unwrap();
        let services_before = service_item::find_all(&db.pool).await.unwrap();

        for bad in [
            "not json at all",
            "{\"customers\": []}",
            "{\"customers\": [], \"transactions\": [], \"services\": 3}",
        ] {
            let err = restore(&db.pool, bad).await.unwrap_err();
            assert!(matches!(err, AppError::Validation(_)));
        }

        assert_eq!(customer::find_all(&db.pool).await.unwrap(), customers_before);
        assert_eq!(ledger::find_all(&db.pool).await.unwrap(), ledger_before);
        assert_eq!(
            service_item::find_all(&db.pool).await.unwrap(),
            services_before
        );
    }

    #[tokio::test]
    async fn restore_replaces_rather_than_merges() {
        let db = seeded_db_with_history().await;

        let empty = BackupDocument {
            customers: vec![],
            transactions: vec![],
            services: vec![],
        };
        let json = serde_json::to_string(&empty).unwrap();
        restore(&db.pool, &json).await.unwrap();

        assert!(customer::find_all(&db.pool).await.unwrap().is_empty());
        assert!(ledger::find_all(&db.pool).await.unwrap().is_empty());
        assert!(service_item::find_all(&db.pool).await.unwrap().is_empty());
    }
}
