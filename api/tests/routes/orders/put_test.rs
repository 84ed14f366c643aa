#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use serde_json::{Number, Value, json};
    use tower::ServiceExt;

    use crate::helpers::app::{PENDING_ORDER_ID, SPAGHETTI_ID};
    use crate::helpers::{body_json, make_test_app, request};

    fn order_body(status: Option<&str>, id: Option<&str>) -> Value {
        let mut data = json!({
            "deliverTo": "Rooftop",
            "mobileNumber": "555-0100",
            "dishes": [ { "id": SPAGHETTI_ID, "quantity": 4 } ]
        });
        if let Some(status) = status {
            data["status"] = json!(status);
        }
        if let Some(id) = id {
            data["id"] = json!(id);
        }
        json!({ "data": data })
    }

    #[tokio::test]
    async fn update_order_replaces_fields_and_keeps_id() {
        let (app, state) = make_test_app().await;

        let uri = format!("/orders/{PENDING_ORDER_ID}");
        let response = app
            .oneshot(request("PUT", &uri, Some(order_body(Some("preparing"), None))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], PENDING_ORDER_ID);
        assert_eq!(json["data"]["status"], "preparing");

        let stored = state.orders().find(PENDING_ORDER_ID).await.unwrap();
        assert_eq!(stored.deliver_to, "Rooftop");
        assert_eq!(stored.dishes.len(), 1);
        assert_eq!(stored.dishes[0].quantity, Number::from(4));
    }

    #[tokio::test]
    async fn missing_or_invalid_status_is_rejected() {
        for status in [None, Some(""), Some("invalid")] {
            let (app, state) = make_test_app().await;

            let uri = format!("/orders/{PENDING_ORDER_ID}");
            let response = app
                .oneshot(request("PUT", &uri, Some(order_body(status, None))))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(
                json["error"],
                "Order must have a status of pending, preparing, out-for-delivery, delivered"
            );
            assert!(state.orders().find(PENDING_ORDER_ID).await.unwrap().is_pending());
        }
    }

    #[tokio::test]
    async fn mismatched_body_id_returns_400() {
        let (app, _) = make_test_app().await;

        let uri = format!("/orders/{PENDING_ORDER_ID}");
        let response = app
            .oneshot(request("PUT", &uri, Some(order_body(Some("pending"), Some("other")))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            format!("Order id does not match route id. Order: other, Route: {PENDING_ORDER_ID}")
        );
    }

    #[tokio::test]
    async fn numeric_body_id_is_a_mismatch() {
        let (app, state) = make_test_app().await;

        let mut body = order_body(Some("preparing"), None);
        body["data"]["id"] = json!(7);
        let uri = format!("/orders/{PENDING_ORDER_ID}");
        let response = app.oneshot(request("PUT", &uri, Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            format!("Order id does not match route id. Order: 7, Route: {PENDING_ORDER_ID}")
        );
        assert!(state.orders().find(PENDING_ORDER_ID).await.unwrap().is_pending());
    }

    #[tokio::test]
    async fn update_unknown_order_returns_404() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(request("PUT", "/orders/nope", Some(order_body(Some("pending"), None))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
