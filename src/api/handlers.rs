use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Html,
    Extension, Json,
};
use chrono::Local;
use serde::Serialize;

use crate::{
    error::AppResult,
    middleware::request_id::RequestId,
    views::{
        assets::ImageAsset, home, html::Markup, item_item, layout, market_basket, user_item,
        Selection, View, MARKET_BASKET_BANNER,
    },
};

use super::AppState;

#[derive(Debug, Serialize)]
pub struct DatasetCounts {
    pub rules: usize,
    pub similar_items: usize,
    pub picks: usize,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub datasets: DatasetCounts,
    pub warnings: Vec<String>,
}

/// Health check endpoint with per-dataset row counts
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let inner = &state.inner;
    let body = HealthResponse {
        status: "healthy",
        datasets: DatasetCounts {
            rules: inner.rules.len(),
            similar_items: inner.similar_items.len(),
            picks: inner.picks.len(),
        },
        warnings: inner.warnings.clone(),
    };
    (StatusCode::OK, Json(body))
}

/// Dashboard page for the selected view
pub async fn dashboard(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(selection): Query<Selection>,
) -> AppResult<Html<String>> {
    tracing::info!(
        request_id = %request_id,
        view = selection.view.slug(),
        "Rendering view"
    );

    let body = render_selected(&state, &selection).await?;
    let page = layout::render_page(selection.view, &body, &state.inner.warnings, Local::now());

    Ok(Html(page))
}

/// Navigation dispatch: exactly one renderer per selected view
///
/// Per-view inputs that touch the filesystem (banner image, purchase
/// history) are resolved here so the renderers stay pure.
async fn render_selected(state: &AppState, selection: &Selection) -> AppResult<Markup> {
    let inner = &state.inner;

    let body = match selection.view {
        View::Home => home::render(),
        View::MarketBasket => {
            let banner = ImageAsset::resolve(&inner.config.images_path(), MARKET_BASKET_BANNER).await;
            market_basket::render(&inner.rules, selection.antecedent.as_ref(), &banner)
        }
        View::ItemItem => item_item::render(
            &inner.similar_items,
            selection.product_id.as_ref(),
            selection.k,
        ),
        View::UserItem => {
            let history = state.purchase_history().await?;
            user_item::render(&inner.picks, selection.profile_id.as_ref(), &history)
        }
    };

    Ok(body)
}
