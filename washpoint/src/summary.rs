//! Advisory business summary
//!
//! Sends a compact snapshot of the ledger and customer base to an
//! external text-generation service and returns its analysis for
//! display. Strictly advisory: no invariant depends on the result, and
//! every failure mode (missing key, network error, unexpected response
//! shape) degrades to a static fallback string instead of an error.

use serde_json::json;
use shared::models::{Customer, Transaction};

/// Shown when no API key is configured.
pub const FALLBACK_NO_KEY: &str =
    "AI analysis is not configured. Set an API key to enable business summaries.";

/// Shown when the collaborator call fails for any reason.
pub const FALLBACK_UNAVAILABLE: &str =
    "AI analysis is currently unavailable. Please try again later.";

/// How many of the most recent transactions go into the prompt.
const RECENT_SAMPLE: usize = 30;

/// Read-only snapshot fed to the prompt. Derived, never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct BusinessSnapshot {
    pub total_customers: usize,
    pub total_revenue: f64,
    pub top_service: Option<String>,
    /// Most recent transactions, oldest of the sample first
    pub recent: Vec<RecentSale>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentSale {
    pub timestamp: i64,
    pub amount: f64,
    pub services: Vec<String>,
}

/// Condense the full ledger + customer list into prompt-sized facts.
pub fn build_snapshot(transactions: &[Transaction], customers: &[Customer]) -> BusinessSnapshot {
    let total_revenue = transactions.iter().map(|t| t.final_amount).sum();

    // Most frequently sold service across the whole ledger
    let mut sale_counts: std::collections::HashMap<&str, u64> = std::collections::HashMap::new();
    for txn in transactions {
        for item in &txn.items {
            *sale_counts.entry(item.name.as_str()).or_insert(0) += 1;
        }
    }
    let top_service = sale_counts
        .into_iter()
        .max_by(|a, b| a.1.cmp(&b.1).then_with(|| b.0.cmp(a.0)))
        .map(|(name, _)| name.to_string());

    let skip = transactions.len().saturating_sub(RECENT_SAMPLE);
    let recent = transactions[skip..]
        .iter()
        .map(|t| RecentSale {
            timestamp: t.created_at,
            amount: t.final_amount,
            services: t.items.iter().map(|i| i.name.clone()).collect(),
        })
        .collect();

    BusinessSnapshot {
        total_customers: customers.len(),
        total_revenue,
        top_service,
        recent,
    }
}

fn render_prompt(snapshot: &BusinessSnapshot) -> String {
    let recent: Vec<_> = snapshot
        .recent
        .iter()
        .map(|s| json!({ "date": s.timestamp, "amount": s.amount, "services": s.services }))
        .collect();
    format!(
        "Act as a senior business consultant for a car wash shop.\n\
         Current data:\n\
         - Total customers: {}\n\
         - All-time revenue: {:.2}\n\
         - Most popular service: {}\n\
         - Recent transaction sample: {}\n\n\
         Produce a short three-point executive summary:\n\
         1. Revenue trend analysis.\n\
         2. A data-backed customer loyalty suggestion.\n\
         3. One marketing idea to lift underperforming services.\n\
         Keep it professional and actionable.",
        snapshot.total_customers,
        snapshot.total_revenue,
        snapshot.top_service.as_deref().unwrap_or("n/a"),
        serde_json::Value::Array(recent),
    )
}

/// HTTP client for the external analysis service.
pub struct BusinessAdvisor {
    client: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
}

impl BusinessAdvisor {
    pub fn new(endpoint: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: endpoint.into(),
            api_key,
        }
    }

    /// Analyze current business performance. Never fails — any problem
    /// with the collaborator yields a static fallback message.
    pub async fn analyze(&self, transactions: &[Transaction], customers: &[Customer]) -> String {
        let Some(key) = self.api_key.as_deref() else {
            return FALLBACK_NO_KEY.to_string();
        };

        let snapshot = build_snapshot(transactions, customers);
        let prompt = render_prompt(&snapshot);

        match self.request(key, &prompt).await {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(error = %e, "business summary request failed");
                FALLBACK_UNAVAILABLE.to_string()
            }
        }
    }

    async fn request(&self, key: &str, prompt: &str) -> anyhow::Result<String> {
        let body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }]
        });

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", key)])
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let value: serde_json::Value = response.json().await?;
        value
            .pointer("/candidates/0/content/parts/0/text")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| anyhow::anyhow!("response contained no analysis text"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::models::{ServiceCategory, ServiceItem};

    fn txn(id: i64, amount: f64, service: &str) -> Transaction {
        Transaction {
            id,
            customer_id: 1,
            customer_name: "Test Customer".into(),
            items: vec![ServiceItem {
                id,
                name: service.into(),
                price: amount,
                category: ServiceCategory::Exterior,
                points_awarded: 0,
            }],
            subtotal: amount,
            discount_amount: 0.0,
            points_redeemed: 0,
            final_amount: amount,
            created_at: id,
        }
    }

    #[test]
    fn snapshot_totals_and_top_service() {
        let txns = vec![
            txn(1, 150.0, "Express Wash"),
            txn(2, 150.0, "Express Wash"),
            txn(3, 600.0, "Interior Deep Clean"),
        ];
        let snapshot = build_snapshot(&txns, &[]);
        assert_eq!(snapshot.total_revenue, 900.0);
        assert_eq!(snapshot.top_service.as_deref(), Some("Express Wash"));
        assert_eq!(snapshot.recent.len(), 3);
    }

    #[test]
    fn snapshot_caps_the_recent_sample() {
        let txns: Vec<_> = (0..40).map(|i| txn(i, 100.0, "Express Wash")).collect();
        let snapshot = build_snapshot(&txns, &[]);
        assert_eq!(snapshot.recent.len(), RECENT_SAMPLE);
        // The sample keeps the latest transactions
        assert_eq!(snapshot.recent.last().unwrap().timestamp, 39);
        assert_eq!(snapshot.recent[0].timestamp, 10);
    }

    #[test]
    fn snapshot_of_empty_ledger() {
        let snapshot = build_snapshot(&[], &[]);
        assert_eq!(snapshot.total_revenue, 0.0);
        assert!(snapshot.top_service.is_none());
        assert!(snapshot.recent.is_empty());
    }

    #[test]
    fn prompt_mentions_the_headline_numbers() {
        let txns = vec![txn(1, 150.0, "Express Wash")];
        let prompt = render_prompt(&build_snapshot(&txns, &[]));
        assert!(prompt.contains("All-time revenue: 150.00"));
        assert!(prompt.contains("Express Wash"));
    }

    #[tokio::test]
    async fn missing_key_degrades_to_static_message() {
        let advisor = BusinessAdvisor::new("http://localhost:1/unused", None);
        let out = advisor.analyze(&[], &[]).await;
        assert_eq!(out, FALLBACK_NO_KEY);
    }

    #[tokio::test]
    async fn unreachable_service_degrades_to_static_message() {
        // Port 1 on localhost refuses connections immediately.
        let advisor =
            BusinessAdvisor::new("http://127.0.0.1:1/analyze", Some("test-key".into()));
        let out = advisor.analyze(&[], &[]).await;
        assert_eq!(out, FALLBACK_UNAVAILABLE);
    }
}
