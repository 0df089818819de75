// region:    --- Imports
use crate::error::Error;
use crate::query::store::UserStore;
use crate::session::CurrentUser;
use crate::view::{self, page, BidListing, ProductListing};
use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{Html, IntoResponse, Response};
use axum::{Extension, Json};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

/// 로그인 페이지 경로
pub const LOGIN_PATH: &str = "/login";

// region:    --- Shared Queries

/// 경로의 사용자 id 파싱
fn parse_user_id(raw: &str) -> Result<i64, Error> {
    raw.trim()
        .parse()
        .map_err(|_| Error::InvalidUserId(raw.to_string()))
}

/// 판매 상품 목록 조회
async fn load_product_listings(
    store: &dyn UserStore,
    seller_id: i64,
) -> Result<Vec<ProductListing>, Error> {
    let rows = store.products_by_seller(seller_id).await?;
    Ok(view::product_listings(rows))
}

/// 입찰 목록 조회
async fn load_bid_listings(store: &dyn UserStore, user_id: i64) -> Result<Vec<BidListing>, Error> {
    let rows = store.bids_by_user(user_id).await?;
    Ok(view::bid_listings(rows))
}

// endregion: --- Shared Queries

// region:    --- Query Handlers

/// 사용자 판매 상품 조회
pub async fn handle_get_user_products(
    State(store): State<Arc<dyn UserStore>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<ProductListing>>, Error> {
    info!("{:<12} --> 판매 상품 조회 user: {}", "HandlerQuery", user_id);
    let user_id = parse_user_id(&user_id)?;
    let listings = load_product_listings(&*store, user_id).await?;
    Ok(Json(listings))
}

/// 사용자 입찰 내역 조회
pub async fn handle_get_user_bids(
    State(store): State<Arc<dyn UserStore>>,
    Path(user_id): Path<String>,
) -> Result<Json<Vec<BidListing>>, Error> {
    info!("{:<12} --> 입찰 내역 조회 user: {}", "HandlerQuery", user_id);
    let user_id = parse_user_id(&user_id)?;
    let listings = load_bid_listings(&*store, user_id).await?;
    Ok(Json(listings))
}

/// 마이페이지
/// 로그인하지 않았으면 조회 없이 로그인 페이지로 보낸다.
pub async fn handle_get_my_page(
    State(store): State<Arc<dyn UserStore>>,
    current_user: Option<Extension<CurrentUser>>,
) -> Result<Response, Error> {
    let Some(Extension(CurrentUser(user))) = current_user else {
        info!("{:<12} --> 마이페이지: 로그인 필요", "HandlerQuery");
        return Ok((StatusCode::FOUND, [(header::LOCATION, LOGIN_PATH)]).into_response());
    };

    info!("{:<12} --> 마이페이지 조회 user: {}", "HandlerQuery", user.id);
    let products = load_product_listings(&*store, user.id).await?;
    let bids = load_bid_listings(&*store, user.id).await?;

    let html = page::render_user_page(&user, &products, &bids)?;
    Ok(Html(html).into_response())
}

// endregion: --- Query Handlers
