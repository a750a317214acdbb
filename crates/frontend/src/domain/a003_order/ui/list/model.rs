use crate::shared::api_utils::{api_url, with_query};
use contracts::domain::a003_order::{Order, OrderSearchQuery};
use gloo_net::http::Request;

/// GET /pedidos?<query>
pub async fn fetch_orders(query: &OrderSearchQuery) -> Result<Vec<Order>, String> {
    let url = api_url(&with_query("/pedidos", &query.to_query_string()));

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    if !response.ok() {
        return Err(format!("Failed to fetch orders: {}", response.status()));
    }

    response
        .json::<Vec<Order>>()
        .await
        .map_err(|e| format!("Failed to parse response: {}", e))
}
