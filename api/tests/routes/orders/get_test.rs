#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use tower::ServiceExt;

    use crate::helpers::app::{DELIVERED_ORDER_ID, STIR_FRY_ID};
    use crate::helpers::{body_json, make_test_app, request};

    #[tokio::test]
    async fn list_orders_returns_all() {
        let (app, state) = make_test_app().await;

        let response = app.oneshot(request("GET", "/orders", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(
            json["data"].as_array().unwrap().len(),
            state.orders().len().await
        );
    }

    #[tokio::test]
    async fn get_order_uses_camel_case_fields() {
        let (app, _) = make_test_app().await;

        let uri = format!("/orders/{DELIVERED_ORDER_ID}");
        let response = app.oneshot(request("GET", &uri, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        let order = &json["data"];
        assert_eq!(order["id"], DELIVERED_ORDER_ID);
        assert_eq!(order["status"], "delivered");
        assert_eq!(order["deliverTo"], "308 Negra Arroyo Lane, Albuquerque, NM");
        assert_eq!(order["mobileNumber"], "(505) 143-3369");
        assert_eq!(order["dishes"][0]["id"], STIR_FRY_ID);
        assert_eq!(order["dishes"][0]["quantity"], 2);
    }

    #[tokio::test]
    async fn get_unknown_order_returns_404() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(request("GET", "/orders/nope", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Order does not exist: nope.");
    }
}
