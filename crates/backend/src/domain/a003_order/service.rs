use super::repository;
use contracts::domain::a003_order::{Order, OrderSearchQuery};

/// Orders for the listing page, filtered by the search form
pub async fn list(query: &OrderSearchQuery) -> anyhow::Result<Vec<Order>> {
    repository::list(query).await
}
