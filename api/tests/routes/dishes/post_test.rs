#[cfg(test)]
mod tests {
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use serde_json::json;
    use tower::ServiceExt;

    use crate::helpers::{body_json, make_test_app, request};

    #[tokio::test]
    async fn create_dish_returns_201_with_generated_id() {
        let (app, state) = make_test_app().await;
        let before = state.dishes().len().await;

        let body = json!({
            "data": {
                "id": "client-chosen",
                "name": "Taco",
                "description": "Crunchy",
                "price": 5,
                "image_url": "taco.png"
            }
        });
        let response = app.oneshot(request("POST", "/dishes", Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        let id = json["data"]["id"].as_str().unwrap();
        assert_ne!(id, "client-chosen");
        assert_eq!(id.len(), 32);
        assert_eq!(json["data"]["name"], "Taco");
        assert_eq!(json["data"]["price"].as_f64(), Some(5.0));

        assert_eq!(state.dishes().len().await, before + 1);
        assert_eq!(state.dishes().all().await.last().unwrap().id, id);
    }

    #[tokio::test]
    async fn decimal_price_is_kept() {
        let (app, _) = make_test_app().await;

        let body = json!({
            "data": { "name": "Taco", "description": "Crunchy", "price": 5.5, "image_url": "taco.png" }
        });
        let response = app.oneshot(request("POST", "/dishes", Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let json = body_json(response).await;
        assert_eq!(json["data"]["price"].as_f64(), Some(5.5));
    }

    #[tokio::test]
    async fn first_missing_field_is_reported() {
        let (app, state) = make_test_app().await;
        let before = state.dishes().len().await;

        let body = json!({ "data": { "price": 5, "image_url": "taco.png" } });
        let response = app.oneshot(request("POST", "/dishes", Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Dish must include a name");
        assert_eq!(state.dishes().len().await, before);
    }

    #[tokio::test]
    async fn invalid_price_is_rejected() {
        for price in [json!(0), json!(-3), json!("5"), json!(null)] {
            let (app, _) = make_test_app().await;

            let body = json!({
                "data": { "name": "Taco", "description": "Crunchy", "price": price, "image_url": "taco.png" }
            });
            let response = app.oneshot(request("POST", "/dishes", Some(body))).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);

            let json = body_json(response).await;
            assert_eq!(json["error"], "Dish must include a price, numeral and > 0");
        }
    }

    #[tokio::test]
    async fn empty_body_reports_first_validator() {
        let (app, _) = make_test_app().await;

        let response = app.oneshot(request("POST", "/dishes", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Dish must include a name");
    }

    #[tokio::test]
    async fn malformed_json_returns_400_and_mutates_nothing() {
        let (app, state) = make_test_app().await;
        let before = state.dishes().len().await;

        let req = Request::builder()
            .method("POST")
            .uri("/dishes")
            .header("content-type", "application/json")
            .body(Body::from("{\"data\": {\"name\": "))
            .unwrap();
        let response = app.oneshot(req).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert!(json["error"].is_string());
        assert_eq!(state.dishes().len().await, before);
    }
}
