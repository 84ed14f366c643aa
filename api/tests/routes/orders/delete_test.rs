#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::helpers::app::{DELIVERED_ORDER_ID, PENDING_ORDER_ID};
    use crate::helpers::{body_json, make_test_app, request};

    #[tokio::test]
    async fn delete_pending_order_returns_204() {
        let (app, state) = make_test_app().await;
        let before = state.orders().len().await;

        let uri = format!("/orders/{PENDING_ORDER_ID}");
        let response = app.oneshot(request("DELETE", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(body_json(response).await, serde_json::Value::Null);

        assert_eq!(state.orders().len().await, before - 1);
        assert!(state.orders().find(PENDING_ORDER_ID).await.is_none());
    }

    #[tokio::test]
    async fn delete_non_pending_order_leaves_store_unchanged() {
        let (app, state) = make_test_app().await;
        let before = state.orders().all().await;

        let uri = format!("/orders/{DELIVERED_ORDER_ID}");
        let response = app.oneshot(request("DELETE", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "An order cannot be deleted unless it is pending");
        assert_eq!(state.orders().all().await, before);
    }

    #[tokio::test]
    async fn delete_unknown_order_returns_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(request("DELETE", "/orders/nope", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
