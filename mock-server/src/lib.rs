//! In-memory stand-in for a slice of the Opendatabot `/api/v2` service.
//!
//! Serves canned registry records for a handful of endpoints, checks the
//! `apiKey` query parameter the same way the real service does, and answers
//! unknown identifiers with 404.

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use serde::Serialize;
use serde_json::{json, Value};
use tokio::net::TcpListener;

/// Key accepted by `app()`.
pub const API_KEY: &str = "test-key";

/// EDRPOU code of the one company the server knows.
pub const KNOWN_CODE: &str = "31325005";

/// Individual tax number of the one sole proprietor the server knows.
pub const KNOWN_FOP: &str = "2977014518";

/// Id of the one court decision the server knows.
pub const KNOWN_DECISION: &str = "86301431";

type Params = HashMap<String, String>;

#[derive(Debug)]
struct Settings {
    api_key: String,
}

type Shared = Arc<Settings>;

/// Error body returned for rejected requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug)]
struct Failure(StatusCode, String);

impl IntoResponse for Failure {
    fn into_response(self) -> Response {
        let body = ErrorBody {
            status: "error",
            message: self.1,
        };
        (self.0, Json(body)).into_response()
    }
}

type Reply = Result<Json<Value>, Failure>;

pub fn app() -> Router {
    app_with_key(API_KEY)
}

/// Router that accepts `api_key` instead of `API_KEY`.
pub fn app_with_key(api_key: &str) -> Router {
    let settings: Shared = Arc::new(Settings {
        api_key: api_key.to_string(),
    });
    let api = Router::new()
        .route("/government-companies", get(government_companies))
        .route("/company/{code}", get(company))
        .route("/dpa/{code}", get(dpa))
        .route("/registrations", get(registrations))
        .route("/court/{id}", get(court_decision))
        .route("/statistics", get(statistics))
        .route("/institutions", get(institutions))
        .route("/koatuu/regions", get(koatuu_regions))
        .with_state(settings);
    Router::new().nest("/api/v2", api)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

fn authorize(settings: &Settings, params: &Params) -> Result<(), Failure> {
    match params.get("apiKey") {
        Some(key) if *key == settings.api_key => Ok(()),
        Some(_) => Err(Failure(StatusCode::FORBIDDEN, "invalid api key".to_string())),
        None => Err(Failure(StatusCode::FORBIDDEN, "api key is required".to_string())),
    }
}

fn not_found(what: &str) -> Failure {
    Failure(StatusCode::NOT_FOUND, format!("{what} not found"))
}

fn number(params: &Params, key: &str, default: usize) -> usize {
    params
        .get(key)
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

async fn government_companies(
    State(settings): State<Shared>,
    Query(params): Query<Params>,
) -> Reply {
    authorize(&settings, &params)?;
    let items: Vec<Value> = match params.get("code") {
        Some(code) if code == KNOWN_CODE => vec![json!({ "code": KNOWN_CODE })],
        _ => Vec::new(),
    };
    tracing::debug!(matches = items.len(), "government-companies");
    Ok(Json(json!({
        "status": "ok",
        "data": { "count": items.len(), "items": items }
    })))
}

async fn company(
    State(settings): State<Shared>,
    Path(code): Path<String>,
    Query(params): Query<Params>,
) -> Reply {
    authorize(&settings, &params)?;
    if code != KNOWN_CODE {
        return Err(not_found("company"));
    }
    Ok(Json(json!([{
        "full_name": "ДЕРЖАВНЕ ПІДПРИЄМСТВО \"ПРОЗОРРО\"",
        "short_name": "ДП \"ПРОЗОРРО\"",
        "code": KNOWN_CODE,
        "ceo_name": null,
        "location": "Україна, 01001, місто Київ, вул.Грушевського, будинок 12/2",
        "status": "зареєстровано",
        "beneficiaries": [
            { "title": "МІНІСТЕРСТВО ЕКОНОМІКИ УКРАЇНИ", "capital": 1000000, "location": "" }
        ],
        "database_date": "2024-01-15"
    }])))
}

async fn dpa(
    State(settings): State<Shared>,
    Path(code): Path<String>,
    Query(params): Query<Params>,
) -> Reply {
    authorize(&settings, &params)?;
    if code != KNOWN_FOP {
        return Err(not_found("sole proprietor"));
    }
    Ok(Json(json!({
        "code": KNOWN_FOP,
        "full_name": "ШЕВЧЕНКО ТАРАС ГРИГОРОВИЧ",
        "status": "зареєстровано",
        "phones": ["+380441234567"],
        "registration_date": "2015-03-09",
        "activities": "62.01 Комп'ютерне програмування"
    })))
}

/// The service reports this counter as a string.
async fn registrations(
    State(settings): State<Shared>,
    Query(params): Query<Params>,
) -> Reply {
    authorize(&settings, &params)?;
    let all = [
        json!({ "id": "1", "type": "company", "full_name": "ТОВ \"АЛЬФА\"", "region_id": 26 }),
        json!({ "id": "2", "type": "fop", "full_name": "КОВАЛЬ ОЛЕНА", "region_id": 14 }),
        json!({ "id": "3", "type": "company", "full_name": "ТОВ \"БЕТА\"", "region_id": 26 }),
    ];
    let kind = params.get("type").map(String::as_str);
    let matching: Vec<&Value> = all
        .iter()
        .filter(|r| kind.map_or(true, |k| r["type"] == k))
        .collect();
    let offset = number(&params, "offset", 0);
    let limit = number(&params, "limit", 100);
    let items: Vec<&Value> = matching.iter().skip(offset).take(limit).copied().collect();
    Ok(Json(json!({
        "count": matching.len().to_string(),
        "items": items
    })))
}

async fn court_decision(
    State(settings): State<Shared>,
    Path(id): Path<String>,
    Query(params): Query<Params>,
) -> Reply {
    authorize(&settings, &params)?;
    if id != KNOWN_DECISION {
        return Err(not_found("court decision"));
    }
    // Unlike most records, a decision is served without the status envelope.
    Ok(Json(json!({
        "doc_id": 86301431,
        "court_code": 2610,
        "court_name": "Шевченківський районний суд міста Києва",
        "judgment_code": 1,
        "cause_number": "761/1234/19",
        "judge": "Іваненко І. І."
    })))
}

async fn statistics(State(settings): State<Shared>, Query(params): Query<Params>) -> Reply {
    authorize(&settings, &params)?;
    Ok(Json(json!({
        "COMPANY": { "name": "Компанії", "used": 12, "limit": 1000, "balance": 988 },
        "FOP": { "name": "ФОП", "used": 3, "limit": 500, "balance": 497 },
        "expiry_date": "2025-12-31",
        "customerId": "42"
    })))
}

/// Public: no key required.
async fn institutions(Query(params): Query<Params>) -> Reply {
    let all = [
        json!({ "name": "Господарський суд міста Києва", "court_id": "5011", "code": "5011", "stage": "first" }),
        json!({ "name": "Київський апеляційний суд", "court_id": "4856", "code": "4856", "stage": "appeal" }),
    ];
    let items: Vec<&Value> = match params.get("name") {
        Some(name) => all
            .iter()
            .filter(|i| i["name"].as_str().is_some_and(|n| n.contains(name.as_str())))
            .collect(),
        None => all.iter().collect(),
    };
    Ok(Json(json!({
        "status": "ok",
        "data": { "count": items.len(), "items": items }
    })))
}

/// Public: no key required.
async fn koatuu_regions() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "data": [
            { "code": "8000000000", "name": "М.КИЇВ", "type": "region" },
            { "code": "4600000000", "name": "ЛЬВІВСЬКА ОБЛАСТЬ/М.ЛЬВІВ", "type": "region" }
        ]
    }))
}
