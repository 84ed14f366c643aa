#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use db::models::Dish;
    use serde_json::{Number, json};
    use tower::ServiceExt;

    use crate::helpers::app::SPAGHETTI_ID;
    use crate::helpers::{body_json, make_test_app, request};

    fn dish_body(id: Option<&str>) -> serde_json::Value {
        let mut data = json!({
            "name": "Spaghetti",
            "description": "Plain",
            "price": 12,
            "image_url": "plain.png"
        });
        if let Some(id) = id {
            data["id"] = json!(id);
        }
        json!({ "data": data })
    }

    #[tokio::test]
    async fn update_dish_replaces_fields_and_keeps_id() {
        let (app, state) = make_test_app().await;

        let uri = format!("/dishes/{SPAGHETTI_ID}");
        let response = app
            .oneshot(request("PUT", &uri, Some(dish_body(None))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let json = body_json(response).await;
        assert_eq!(json["data"]["id"], SPAGHETTI_ID);
        assert_eq!(json["data"]["name"], "Spaghetti");

        let stored = state.dishes().find(SPAGHETTI_ID).await.unwrap();
        assert_eq!(stored.name, "Spaghetti");
        assert_eq!(stored.price.as_f64(), Some(12.0));
    }

    #[tokio::test]
    async fn matching_or_empty_body_id_is_accepted() {
        for id in [SPAGHETTI_ID, ""] {
            let (app, _) = make_test_app().await;

            let uri = format!("/dishes/{SPAGHETTI_ID}");
            let response = app
                .oneshot(request("PUT", &uri, Some(dish_body(Some(id)))))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK);
        }
    }

    #[tokio::test]
    async fn mismatched_body_id_returns_400() {
        let (app, state) = make_test_app().await;
        state
            .dishes()
            .insert(Dish {
                id: "123".into(),
                name: "Soup".into(),
                description: "Hot".into(),
                price: Number::from(4),
                image_url: "soup.png".into(),
            })
            .await;

        let response = app
            .oneshot(request("PUT", "/dishes/123", Some(dish_body(Some("456")))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        let message = json["error"].as_str().unwrap();
        assert!(message.contains("456"));
        assert!(message.contains("123"));
        assert_eq!(state.dishes().find("123").await.unwrap().name, "Soup");
    }

    #[tokio::test]
    async fn numeric_body_id_is_a_mismatch() {
        let (app, state) = make_test_app().await;

        let mut body = dish_body(None);
        body["data"]["id"] = json!(456);
        let uri = format!("/dishes/{SPAGHETTI_ID}");
        let response = app.oneshot(request("PUT", &uri, Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(
            json["error"],
            format!("Dish id does not match route id. Dish: 456, Route: {SPAGHETTI_ID}")
        );
        assert_eq!(
            state.dishes().find(SPAGHETTI_ID).await.unwrap().name,
            "Dolcelatte and chickpea spaghetti"
        );
    }

    #[tokio::test]
    async fn missing_field_is_reported_before_id_mismatch() {
        let (app, _) = make_test_app().await;

        let body = json!({ "data": { "id": "other", "name": "Spaghetti" } });
        let uri = format!("/dishes/{SPAGHETTI_ID}");
        let response = app.oneshot(request("PUT", &uri, Some(body))).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let json = body_json(response).await;
        assert_eq!(json["error"], "Dish must include a description");
    }

    #[tokio::test]
    async fn update_unknown_dish_returns_404() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(request("PUT", "/dishes/nope", Some(dish_body(None))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn unsupported_verb_on_unknown_dish_returns_405() {
        let (app, _) = make_test_app().await;

        let response = app
            .oneshot(request("PATCH", "/dishes/nope", Some(dish_body(None))))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);

        let json = body_json(response).await;
        assert_eq!(json["error"], "PATCH not allowed for /dishes/nope");
    }
}
