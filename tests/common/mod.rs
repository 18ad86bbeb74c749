// Copyright (c) 2025 Soumyadip Sarkar.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

#![allow(dead_code)]

use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::get,
};
use finmini::{api::Transport, config::ClientConfig};
use serde_json::{Value, json};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

pub const TODAY: &str = "2024-05-20";

#[derive(Default)]
pub struct Service {
    pub rows: Vec<Value>,
    pub next_id: i64,
    /// Auth header of every request, in arrival order.
    pub seen_auth: Vec<Option<String>>,
    pub seen_content_type: Vec<Option<String>>,
    pub seen_queries: Vec<HashMap<String, String>>,
}

pub type Shared = Arc<Mutex<Service>>;

fn record(state: &Shared, headers: &HeaderMap) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
    };
    let mut s = state.lock().unwrap();
    s.seen_auth.push(header("x-telegram-init-data"));
    s.seen_content_type.push(header("content-type"));
}

fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(json!({"detail": "Transaction not found"})),
    )
        .into_response()
}

async fn create(State(state): State<Shared>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    record(&state, &headers);
    let amount = body.get("amount").and_then(Value::as_f64).unwrap_or(0.0);
    if amount <= 0.0 {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{
                "loc": ["body", "amount"],
                "msg": "Input should be greater than 0",
                "type": "greater_than"
            }]})),
        )
            .into_response();
    }
    let mut s = state.lock().unwrap();
    s.next_id += 1;
    let date = body
        .get("transaction_date")
        .and_then(Value::as_str)
        .unwrap_or(TODAY)
        .to_string();
    let row = json!({
        "id": s.next_id,
        "user_id": 1,
        "type": body["type"],
        "amount": amount,
        "currency": body.get("currency").cloned().unwrap_or(json!("RUB")),
        "category": body["category"],
        "description": body.get("description").cloned().unwrap_or(Value::Null),
        "transaction_date": date,
        "created_at": "2024-05-20T10:15:00.123456",
    });
    s.rows.push(row.clone());
    Json(row).into_response()
}

async fn list(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    record(&state, &headers);
    let mut s = state.lock().unwrap();
    s.seen_queries.push(q.clone());
    let limit: usize = q.get("limit").and_then(|v| v.parse().ok()).unwrap_or(50);
    let skip: usize = q.get("skip").and_then(|v| v.parse().ok()).unwrap_or(0);
    let mut rows: Vec<Value> = s
        .rows
        .iter()
        .filter(|r| q.get("type").is_none_or(|t| r["type"] == json!(t)))
        .filter(|r| q.get("category").is_none_or(|c| r["category"] == json!(c)))
        .cloned()
        .collect();
    rows.sort_by(|a, b| {
        b["transaction_date"]
            .as_str()
            .cmp(&a["transaction_date"].as_str())
    });
    let page: Vec<Value> = rows.into_iter().skip(skip).take(limit).collect();
    Json(Value::Array(page)).into_response()
}

async fn get_one(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    record(&state, &headers);
    let s = state.lock().unwrap();
    match s.rows.iter().find(|r| r["id"] == json!(id)) {
        Some(r) => Json(r.clone()).into_response(),
        None => not_found(),
    }
}

async fn delete_one(State(state): State<Shared>, headers: HeaderMap, Path(id): Path<i64>) -> Response {
    record(&state, &headers);
    let mut s = state.lock().unwrap();
    let before = s.rows.len();
    s.rows.retain(|r| r["id"] != json!(id));
    if s.rows.len() == before {
        return not_found();
    }
    Json(json!({"message": "Transaction deleted"})).into_response()
}

fn breakdown(rows: &[&Value], kind: &str) -> (f64, Vec<Value>) {
    let mut order: Vec<String> = Vec::new();
    let mut sums: HashMap<String, (f64, u32)> = HashMap::new();
    let mut total = 0.0;
    for r in rows.iter().filter(|r| r["type"] == json!(kind)) {
        let cat = r["category"].as_str().unwrap_or_default().to_string();
        let amt = r["amount"].as_f64().unwrap_or(0.0);
        total += amt;
        let e = sums.entry(cat.clone()).or_insert_with(|| {
            order.push(cat.clone());
            (0.0, 0)
        });
        e.0 += amt;
        e.1 += 1;
    }
    let items = order
        .into_iter()
        .map(|c| {
            let (t, n) = sums[&c];
            json!({"category": c, "total": t, "count": n})
        })
        .collect();
    (total, items)
}

async fn monthly(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(q): Query<HashMap<String, String>>,
) -> Response {
    record(&state, &headers);
    let year: i32 = q.get("year").and_then(|v| v.parse().ok()).unwrap_or(0);
    let month: u32 = q.get("month").and_then(|v| v.parse().ok()).unwrap_or(0);
    if !(1..=12).contains(&month) {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(json!({"detail": [{"loc": ["query", "month"], "msg": "Input should be less than or equal to 12", "type": "less_than_equal"}]})),
        )
            .into_response();
    }
    let prefix = format!("{}-{:02}-", year, month);
    let s = state.lock().unwrap();
    let in_month: Vec<&Value> = s
        .rows
        .iter()
        .filter(|r| {
            r["transaction_date"]
                .as_str()
                .is_some_and(|d| d.starts_with(&prefix))
        })
        .collect();
    let (income, income_items) = breakdown(&in_month, "income");
    let (expense, expense_items) = breakdown(&in_month, "expense");
    Json(json!({
        "month": format!("{}-{:02}", year, month),
        "total_income": income,
        "total_expense": expense,
        "savings": income - expense,
        "expenses_by_category": expense_items,
        "income_by_category": income_items,
    }))
    .into_response()
}

async fn categories(State(state): State<Shared>, headers: HeaderMap) -> Response {
    record(&state, &headers);
    let s = state.lock().unwrap();
    let mut out: Vec<String> = Vec::new();
    for r in &s.rows {
        if let Some(c) = r["category"].as_str() {
            if !out.iter().any(|x| x == c) {
                out.push(c.to_string());
            }
        }
    }
    Json(out).into_response()
}

pub fn service_router(state: Shared) -> Router {
    let api = Router::new()
        .route("/transactions/", get(list).post(create))
        .route("/transactions/{id}", get(get_one).delete(delete_one))
        .route("/transactions/report/monthly", get(monthly))
        .route("/transactions/categories/list", get(categories));
    Router::new().nest("/api", api).with_state(state)
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn serve(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind listener");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move { axum::serve(listener, app).await.expect("serve app") });
    format!("http://{}/api", addr)
}

pub fn transport(base_url: &str, token: Option<&str>) -> Transport {
    let mut cfg = ClientConfig::new(base_url).without_proxy();
    if let Some(t) = token {
        cfg = cfg.with_init_data(t);
    }
    Transport::new(&cfg).expect("transport")
}

/// A fresh fake service and a client pointed at it.
pub async fn start(token: Option<&str>) -> (Shared, Transport) {
    let state: Shared = Arc::new(Mutex::new(Service::default()));
    let base = serve(service_router(state.clone())).await;
    (state, transport(&base, token))
}

/// A service that answers every request with `status` and `body`.
pub async fn start_failing(status: StatusCode, body: &'static str) -> Transport {
    let app = Router::new().fallback(move || async move {
        (status, [("content-type", "application/json")], body)
    });
    let base = serve(app).await;
    transport(&base, None)
}

/// A service that answers every request with a fixed JSON document.
pub async fn start_fixed(body: Value) -> Transport {
    let app = Router::new().fallback(move || {
        let body = body.clone();
        async move { Json(body) }
    });
    let base = serve(app).await;
    transport(&base, None)
}
