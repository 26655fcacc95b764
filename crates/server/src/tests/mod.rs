// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

#![allow(clippy::expect_used, clippy::unwrap_used)]


use atelier_persistence::SqlitePersistence;
use axum::{
    Router,
    body::Body,
    http::{Request, Response, StatusCode},
};
use serde_json::Value;
use tower::ServiceExt;

use crate::routes::{AppState, build_router};

/// Helper to create a router over a fresh in-memory database.
pub fn create_test_app() -> Router {
    let persistence: SqlitePersistence =
        SqlitePersistence::new_in_memory().expect("Failed to create in-memory persistence");
    build_router(AppState::new(persistence))
}

/// Sends one request and returns the status and parsed JSON body.
pub async fn send(
    app: &Router,
    method: &str,
    uri: &str,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request: Request<Body> = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response: Response<Body> = app.clone().oneshot(request).await.unwrap();
    let status: StatusCode = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value: Value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

pub fn booking_body() -> Value {
    serde_json::json!({
        "first_name": "Camille",
        "last_name": "Durand",
        "email": "camille@example.fr",
        "phone": "+33 6 12 34 56 78",
        "preferred_date": "2099-05-04",
        "preferred_time": "14:00",
        "appointment_type": "fitting",
        "message": "Bridal fitting"
    })
}
