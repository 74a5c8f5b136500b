use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::StatusCode;
use axum::{Json, Router, routing::post};
use serde::{Deserialize, Serialize};
use tower_http::cors::{Any, CorsLayer};
use tracing::{info, warn};

use crate::frame::{FrameParseError, FrameParser};
use crate::fresh::FreshEntitySet;
use crate::ontology::OntologyAxiomPair;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseRequest {
    pub text: String,
    #[serde(default)]
    pub fresh_entities: FreshEntitySet,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParseResponse {
    pub status: String,
    pub elapsed_ms: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axiom_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub axioms: Option<Vec<AxiomRow>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<FrameParseError>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AxiomRow {
    pub ontology: String,
    pub axiom: String,
}

/// Parsed axioms in a stable order, rendered in functional syntax.
pub fn rows(axioms: HashSet<OntologyAxiomPair>) -> Vec<AxiomRow> {
    let mut axioms: Vec<_> = axioms.into_iter().collect();
    axioms.sort();
    axioms
        .iter()
        .map(|pair| AxiomRow {
            ontology: pair.ontology().to_string(),
            axiom: pair.axiom().to_string(),
        })
        .collect()
}

pub fn router(parser: Arc<FrameParser>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([axum::http::Method::POST])
        .allow_headers(Any);
    Router::new()
        .route("/v1/parse", post(parse_frames))
        .layer(cors)
        .with_state(parser)
}

pub async fn parse_frames(
    State(parser): State<Arc<FrameParser>>,
    Json(request): Json<ParseRequest>,
) -> Result<(StatusCode, Json<ParseResponse>), (StatusCode, &'static str)> {
    let started = Instant::now();
    // the parser is synchronous
    let result = tokio::task::spawn_blocking(move || {
        parser
            .parse(&request.text, &request.fresh_entities)
            .map(rows)
            .map_err(|e| parser.describe_error(&e))
    })
    .await
    .map_err(|e| {
        warn!(error=%e, "Join error");
        (StatusCode::INTERNAL_SERVER_ERROR, "Join error")
    })?;
    let elapsed_ms = started.elapsed().as_secs_f64() * 1000.0;
    match result {
        Ok(axioms) => {
            info!(ms = elapsed_ms, axioms = axioms.len(), "parse complete");
            let body = ParseResponse {
                status: "ok".into(),
                elapsed_ms,
                axiom_count: Some(axioms.len()),
                axioms: Some(axioms),
                error: None,
            };
            Ok((StatusCode::OK, Json(body)))
        }
        Err(error) => {
            warn!(ms = elapsed_ms, line = error.line(), column = error.column(), token = %error.token(), "parse error");
            let body = ParseResponse {
                status: "error".into(),
                elapsed_ms,
                axiom_count: None,
                axioms: None,
                error: Some(error),
            };
            Ok((StatusCode::BAD_REQUEST, Json(body)))
        }
    }
}
