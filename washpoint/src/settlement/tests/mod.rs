use super::*;
use crate::db::repository::{customer, ledger};
use crate::db::DbService;
use crate::utils::AppError;
use shared::models::{
    Customer, CustomerCreate, MembershipTier, ServiceCategory, ServiceItem,
};


async fn create_test_db() -> DbService {
    DbService::open_in_memory().await.unwrap()
}

async fn register(db: &DbService, name: &str, tier: MembershipTier) -> Customer {
    customer::create(
        &db.pool,
        CustomerCreate {
            name: name.to_string(),
            license_plate: format!("34 TST {}", name.len()),
            vehicle_model: "Toyota Corolla".to_string(),
            phone: "+90 555 123 4567".to_string(),
            membership_tier: tier,
        },
    )
    .await
    .unwrap()
}

/// Force a specific point balance (registration always starts at zero).
async fn set_balance(db: &DbService, customer_id: i64, points: i64) {
    let mut conn = db.pool.acquire().await.unwrap();
    customer::set_points(&mut conn, customer_id, points)
        .await
        .unwrap();
}

async fn balance_of(db: &DbService, customer_id: i64) -> i64 {
    customer::find_by_id(&db.pool, customer_id)
        .await
        .unwrap()
        .unwrap()
        .points
}

fn wash(id: i64, name: &str, price: f64) -> ServiceItem {
    ServiceItem {
        id,
        name: name.to_string(),
        price,
        category: ServiceCategory::Exterior,
        points_awarded: (price / 10.0) as i64,
    }
}

fn select(items: Vec<ServiceItem>) -> Selection {
    let mut selection = Selection::new();
    for item in items {
        selection.toggle(item);
    }
    selection
}
