//! API utilities for frontend-backend communication

/// URL for a backend path such as `/pedidos`.
///
/// The backend serves this bundle itself, so API paths stay relative to the
/// origin the page came from, whatever port the server was configured with.
pub fn api_url(path: &str) -> String {
    path.to_string()
}

/// `path?query`, or just `path` when the query is empty
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Blocking browser alert; the only way errors and confirmations are surfaced
pub fn show_alert(message: &str) {
    if let Some(w) = web_sys::window() {
        let _ = w.alert_with_message(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_is_same_origin() {
        assert_eq!(api_url("/pedidos"), "/pedidos");
        assert_eq!(
            api_url(&with_query("/pedidos", "tipo_producto=mica")),
            "/pedidos?tipo_producto=mica"
        );
    }

    #[test]
    fn test_with_query() {
        assert_eq!(with_query("/pedidos", ""), "/pedidos");
        assert_eq!(
            with_query("/pedidos", "tipo_producto=mica"),
            "/pedidos?tipo_producto=mica"
        );
    }
}
