//! HTTP handlers for the installer directory
//!
//! Handlers are thin: they parse the request, call the catalog or the core
//! functions, and map `DirectoryError` to a JSON error response.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::StatusCode,
};
use chrono::Utc;
use serde::Serialize;
use serde_json::{Value, json};
use std::sync::Arc;

use crate::config::DirectoryConfig;
use crate::core::assign::ImagePool;
use crate::core::error::{DirectoryError, QueryError, ValidationError};
use crate::core::installer::Installer;
use crate::core::query::QueryParams;
use crate::core::quote::{QuoteForm, QuoteReceipt};
use crate::storage::Catalog;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub config: Arc<DirectoryConfig>,
}

/// Installer as shown on a listing tile
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerCard {
    #[serde(flatten)]
    pub installer: Installer,
    pub card_image: String,
}

/// Response for the list endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListInstallersResponse {
    pub data: Vec<InstallerCard>,
    pub total: usize,
    pub active_filters: usize,
    pub cities: Vec<String>,
}

/// Response for the detail endpoint
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallerDetail {
    #[serde(flatten)]
    pub installer: Installer,
    pub card_image: String,
    pub hero_image: String,
}

#[derive(Debug, Serialize)]
pub struct ImagePoolResponse {
    pub name: String,
    pub count: usize,
    pub paths: Vec<String>,
}

impl From<&ImagePool> for ImagePoolResponse {
    fn from(pool: &ImagePool) -> Self {
        Self {
            name: pool.name.clone(),
            count: pool.count,
            paths: pool.all_paths(),
        }
    }
}

/// List installers matching the query
///
/// GET /installers?search=&skillLevel=&city=&sort=
pub async fn list_installers(
    State(state): State<AppState>,
    params: Result<Query<QueryParams>, QueryRejection>,
) -> Result<Json<ListInstallersResponse>, DirectoryError> {
    let Query(params) = params.map_err(|rejection| QueryError::Malformed {
        message: rejection.body_text(),
    })?;
    let query = params.into_state(state.config.query.default_sort)?;
    let view = state.catalog.query(&query);

    let cards = &state.config.images.cards;
    let data = view
        .into_iter()
        .map(|installer| -> Result<InstallerCard, DirectoryError> {
            let card_image = installer.card_image(cards)?;
            Ok(InstallerCard {
                installer,
                card_image,
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Json(ListInstallersResponse {
        total: data.len(),
        data,
        active_filters: query.active_filter_count(),
        cities: state.catalog.cities(),
    }))
}

/// Get one installer with its resolved images
///
/// GET /installers/{id}
pub async fn get_installer(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<InstallerDetail>, DirectoryError> {
    let installer = state.catalog.get(&id)?;
    let images = &state.config.images;

    Ok(Json(InstallerDetail {
        card_image: installer.card_image(&images.cards)?,
        hero_image: images.hero.path_for(&installer.id)?,
        installer: installer.clone(),
    }))
}

/// Submit a quote request to an installer
///
/// POST /installers/{id}/quotes
///
/// The installer is resolved before the body is inspected, so an unknown id
/// is a 404 whatever the body contains.
pub async fn request_quote(
    State(state): State<AppState>,
    Path(id): Path<String>,
    form: Result<Json<QuoteForm>, JsonRejection>,
) -> Result<(StatusCode, Json<QuoteReceipt>), DirectoryError> {
    let installer = state.catalog.get(&id)?;
    let Json(form) = form.map_err(|rejection| ValidationError::MalformedBody {
        message: rejection.body_text(),
    })?;
    form.validate()?;

    let receipt = QuoteReceipt::issue(form.into_request(installer), Utc::now());
    Ok((StatusCode::CREATED, Json(receipt)))
}

/// GET /images/cards
pub async fn list_card_images(State(state): State<AppState>) -> Json<ImagePoolResponse> {
    Json(ImagePoolResponse::from(&state.config.images.cards))
}

/// GET /images/hero
pub async fn list_hero_images(State(state): State<AppState>) -> Json<ImagePoolResponse> {
    Json(ImagePoolResponse::from(&state.config.images.hero))
}

/// GET /health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
