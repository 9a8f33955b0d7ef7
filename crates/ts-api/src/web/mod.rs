//! Web routes: server-rendered catalog with HTMX + Askama templates.
//!
//! The full page is the ViewEngine's full render; the item-list partial is
//! the incremental render, refreshed on every search keystroke and on
//! accordion clicks. View state travels in the `f` (fragment) and `q`
//! (search) query parameters; the page script mirrors `f` into the URL
//! hash so the shareable state keeps the fragment grammar.

mod templates;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect, Response},
    routing::get,
    Router,
};
use serde::Deserialize;
use tracing::warn;

use ts_core::{AssetType, Category, ViewSession};

use crate::error::ApiError;
use crate::state::AppState;
use templates::*;

/// Creates the web router.
pub fn create_web_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/catalog", get(catalog_page))
        .route("/catalog/partials/items", get(partials_items))
        .with_state(state)
}

async fn index() -> Redirect {
    Redirect::to("/catalog")
}

#[derive(Debug, Deserialize)]
struct CatalogQuery {
    /// View fragment, e.g. `azure-tier-1-2-type-custom`.
    #[serde(default)]
    f: String,
    /// Live search string; transient, never part of the fragment.
    #[serde(default)]
    q: String,
}

/// Full catalog page.
async fn catalog_page(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Result<Response, ApiError> {
    if !state.snapshot.is_ready() {
        return Ok(HtmlTemplate(UnavailableTemplate).into_response());
    }

    let mut session = ViewSession::from_snapshot(&state.snapshot);
    restore(&mut session, &query.f, &query.q, None);

    let view = session.full_view();
    let fragment = session.fragment();

    let tabs = Category::ALL
        .iter()
        .map(|&category| CategoryTab {
            name: category.display_name(),
            fragment: category.as_str().to_string(),
            active: category == session.category(),
        })
        .collect();

    let tier_buttons = view
        .tier_buttons
        .iter()
        .map(|b| TierButtonView {
            label: b.label.clone(),
            class: b.class,
            selected: b.selected,
            fragment: session.fragment_with_tier_toggled(b.tier),
        })
        .collect();

    let type_buttons = view
        .type_buttons
        .iter()
        .map(|b| TypeButtonView {
            label: match b.asset_type {
                AssetType::BuiltIn => "Built-in",
                AssetType::Custom => "Custom",
            },
            selected: b.selected,
            fragment: session.fragment_with_type_toggled(b.asset_type),
        })
        .collect();

    let definitions = view
        .definitions
        .into_iter()
        .map(|d| TierDefinitionView {
            label: d.label,
            class: d.class,
            name: d.name,
            definition: d.definition,
        })
        .collect();

    let template = CatalogTemplate {
        category_name: view.category.display_name(),
        fragment,
        q: view.search,
        untiered: view.untiered.untiered,
        total: view.untiered.total,
        tabs,
        tier_buttons,
        type_buttons,
        definitions,
        items: view.items.into_iter().map(ItemRow::from).collect(),
    };

    Ok(HtmlTemplate(template).into_response())
}

#[derive(Debug, Deserialize)]
struct ItemsQuery {
    #[serde(default)]
    f: String,
    #[serde(default)]
    q: String,
    /// Key of the item whose detail block is open, if any.
    #[serde(default)]
    expanded: String,
}

/// Incremental render: the item list only.
async fn partials_items(
    State(state): State<AppState>,
    Query(query): Query<ItemsQuery>,
) -> Result<Response, ApiError> {
    if !state.snapshot.is_ready() {
        return Err(ApiError::ServiceUnavailable(
            "catalog data has not loaded".to_string(),
        ));
    }

    let mut session = ViewSession::from_snapshot(&state.snapshot);
    let expanded = (!query.expanded.is_empty()).then(|| query.expanded.clone());
    restore(&mut session, &query.f, &query.q, expanded);

    let template = ItemListTemplate {
        fragment: session.fragment(),
        q: session.search().to_string(),
        items: session.visible_items().into_iter().map(ItemRow::from).collect(),
    };

    Ok(HtmlTemplate(template).into_response())
}

/// Rebuilds a view session from request state: fragment, then search,
/// then expansion. An unrecognized fragment leaves the default view in
/// place rather than failing the request.
fn restore(session: &mut ViewSession<'_>, fragment: &str, search: &str, expanded: Option<String>) {
    if !fragment.is_empty() && !session.apply_fragment(fragment) {
        warn!(%fragment, "ignoring unrecognized fragment");
    }
    session.set_search(search);
    session.set_expanded(expanded);
}

// ============================================
// Template Response Wrapper
// ============================================

pub struct HtmlTemplate<T>(pub T);

impl<T> IntoResponse for HtmlTemplate<T>
where
    T: askama::Template,
{
    fn into_response(self) -> Response {
        use axum::response::Html;

        match self.0.render() {
            Ok(html) => Html(html).into_response(),
            Err(err) => {
                tracing::error!("Template rendering error: {}", err);
                (
                    axum::http::StatusCode::INTERNAL_SERVER_ERROR,
                    format!("Template error: {}", err),
                )
                    .into_response()
            }
        }
    }
}
