//! Inbound request handlers.
//!
//! All CRUD routes go through the same forwarding shape: validate what the
//! route requires, map the form onto the kind's schema, issue exactly one
//! upstream call, decide what the caller sees. Handlers hold no state beyond
//! what [`AppState`] carries.

use std::collections::HashMap;

use axum::extract::rejection::FormRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::{Extension, Form, Json};
use reqwest::Method;
use serde::Deserialize;
use serde_json::json;

use crate::http::error::GatewayError;
use crate::http::request::RequestId;
use crate::http::server::AppState;
use crate::render::IndexTemplate;
use crate::resource::{map_fields, ResourceKind};

type FormFields = HashMap<String, String>;
type FormResult = Result<Form<FormFields>, FormRejection>;

/// `GET /`: render the boot-time listing snapshot.
pub async fn index(State(state): State<AppState>) -> IndexTemplate {
    IndexTemplate {
        users: state.users.as_ref().clone(),
    }
}

/// `GET /healthz`: liveness probe reporting the snapshot size.
pub async fn healthz(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(json!({ "status": "ok", "snapshot_users": state.users.len() }))
}

/// `POST /users`: forward a user creation.
pub async fn create_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: FormResult,
) -> Result<Response, GatewayError> {
    forward_create(&state, &request_id, ResourceKind::User, form).await
}

/// `POST /posts`: forward a post creation.
pub async fn create_post(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    form: FormResult,
) -> Result<Response, GatewayError> {
    forward_create(&state, &request_id, ResourceKind::Post, form).await
}

/// Query parameters accepted by the update route.
#[derive(Debug, Deserialize)]
pub struct UpdateParams {
    #[serde(default)]
    id: Option<String>,
}

/// `POST|PUT /users/update?id={id}`: forward a user update.
///
/// The identifier is required before anything else happens; without it no
/// outbound call is made.
pub async fn update_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(params): Query<UpdateParams>,
    form: FormResult,
) -> Result<Response, GatewayError> {
    let id = params
        .id
        .filter(|id| !id.is_empty())
        .ok_or(GatewayError::MissingParameter("id"))?;

    let fields = parse_form(form)?;
    let payload = map_fields(ResourceKind::User, &fields)?;
    let url = state.upstream.item_url(ResourceKind::User, &id)?;

    let response = state
        .upstream
        .send(Method::PUT, url, Some(payload), Some(request_id.as_str()))
        .await?
        .into_success()?;

    tracing::info!(request_id = %request_id, user_id = %id, "update forwarded");
    Ok((StatusCode::OK, response.body).into_response())
}

/// `DELETE /users/{id}`: forward a deletion.
///
/// Unlike create and update, deletion relays the upstream response to the
/// caller verbatim, status and body alike.
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<String>,
) -> Result<Response, GatewayError> {
    let url = state.upstream.item_url(ResourceKind::User, &id)?;
    let response = state
        .upstream
        .send(Method::DELETE, url, None, Some(request_id.as_str()))
        .await?;

    tracing::info!(
        request_id = %request_id,
        user_id = %id,
        status = response.status.as_u16(),
        "delete relayed"
    );
    Ok((response.status, response.body).into_response())
}

/// Shared create path: map the form onto the kind's schema and POST it to
/// the kind's collection. Non-200 upstream statuses surface as 502.
async fn forward_create(
    state: &AppState,
    request_id: &RequestId,
    kind: ResourceKind,
    form: FormResult,
) -> Result<Response, GatewayError> {
    let fields = parse_form(form)?;
    let payload = map_fields(kind, &fields)?;
    let url = state.upstream.collection_url(kind)?;

    let response = state
        .upstream
        .send(Method::POST, url, Some(payload), Some(request_id.as_str()))
        .await?
        .into_success()?;

    tracing::info!(request_id = %request_id, kind = %kind, "create forwarded");
    Ok((StatusCode::OK, response.body).into_response())
}

fn parse_form(form: FormResult) -> Result<FormFields, GatewayError> {
    let Form(fields) = form.map_err(|rejection| GatewayError::FormParse(rejection.body_text()))?;
    Ok(fields)
}
