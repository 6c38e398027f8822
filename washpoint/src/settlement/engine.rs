//! Settlement Engine
//!
//! Validates a proposed sale, computes the quote and persists the
//! result. The ledger append and the customer balance update run in one
//! SQLite transaction: a failure on either side rolls back both, so the
//! two stores can never disagree about a settlement.

use shared::models::Transaction;
use shared::util;
use sqlx::SqlitePool;

use super::quote::{quote, Selection, REDEMPTION_STEP};
use crate::db::repository::{customer, ledger};
use crate::utils::{AppError, AppResult};

pub struct SettlementEngine {
    pool: SqlitePool,
}

impl SettlementEngine {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Settle a sale for `customer_id`: validate, compute, persist.
    ///
    /// Rejections (empty selection, bad redemption, unknown customer)
    /// leave every store untouched. On success the returned transaction
    /// is already durable and the customer balance already moved to
    /// `balance − points_to_redeem + points_earned`.
    pub async fn settle(
        &self,
        customer_id: i64,
        selection: &Selection,
        points_to_redeem: i64,
    ) -> AppResult<Transaction> {
        if selection.is_empty() {
            return Err(AppError::validation(
                "checkout requires at least one selected service",
            ));
        }

        let customer = customer::find_by_id(&self.pool, customer_id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Customer {customer_id} not found")))?;

        // Last line of defense against negative balances: never trust
        // the caller's redemption input.
        validate_redemption(points_to_redeem, customer.points)?;

        let breakdown = quote(customer.membership_tier, selection.items(), points_to_redeem);
        let new_balance = customer.points - points_to_redeem + breakdown.points_earned;

        let txn = Transaction {
            id: util::snowflake_id(),
            customer_id: customer.id,
            customer_name: customer.name.clone(),
            items: selection.items().to_vec(),
            subtotal: breakdown.subtotal,
            discount_amount: breakdown.membership_discount + breakdown.points_discount,
            points_redeemed: points_to_redeem,
            final_amount: breakdown.final_amount,
            created_at: util::now_millis(),
        };

        let mut tx = self.pool.begin().await?;
        ledger::append(&mut tx, &txn).await?;
        customer::set_points(&mut tx, customer.id, new_balance).await?;
        tx.commit().await?;

        tracing::info!(
            transaction_id = txn.id,
            customer_id = customer.id,
            final_amount = txn.final_amount,
            points_redeemed = points_to_redeem,
            points_earned = breakdown.points_earned,
            "settlement completed"
        );

        Ok(txn)
    }
}

fn validate_redemption(points_to_redeem: i64, balance: i64) -> AppResult<()> {
    if points_to_redeem < 0 || points_to_redeem % REDEMPTION_STEP != 0 {
        return Err(AppError::validation(format!(
            "points redemption must be a non-negative multiple of {REDEMPTION_STEP}, got {points_to_redeem}"
        )));
    }
    if points_to_redeem > balance {
        return Err(AppError::business_rule(format!(
            "cannot redeem {points_to_redeem} points, balance is {balance}"
        )));
    }
    Ok(())
}
