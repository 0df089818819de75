//! 조회 결과를 응답용 뷰 모델로 변환

pub mod page;

// region:    --- Imports
use crate::market::model::{SellerProductRow, UserBidRow};
use chrono::{DateTime, Utc};
use serde::Serialize;

// endregion: --- Imports

/// 상품 상세 페이지 링크
pub fn product_link(product_id: i64) -> String {
    format!("/product/{product_id}")
}

// region:    --- View Models
/// 판매 상품 목록 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListing {
    pub name: String,
    pub description: String,
    pub photo: Option<String>,
    /// 최고 입찰가, 입찰이 없으면 시작가
    pub current_price: i64,
    pub bid_count: i64,
    pub link: String,
}

impl From<SellerProductRow> for ProductListing {
    fn from(row: SellerProductRow) -> Self {
        Self {
            current_price: row.highest_bid.unwrap_or(row.starting_price),
            link: product_link(row.id),
            name: row.name,
            description: row.description,
            photo: row.photo,
            bid_count: row.bid_count,
        }
    }
}

/// 입찰 목록 항목
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BidListing {
    pub name: String,
    pub link: String,
    /// 해당 입찰 자체의 금액 (상품 전체 최고가 아님)
    pub highest_bid: i64,
    pub date: DateTime<Utc>,
    pub status: String,
}

impl From<UserBidRow> for BidListing {
    fn from(row: UserBidRow) -> Self {
        Self {
            name: row.product_name,
            link: product_link(row.product_id),
            highest_bid: row.amount,
            date: row.created_at,
            status: row.status,
        }
    }
}

// endregion: --- View Models

pub fn product_listings(rows: Vec<SellerProductRow>) -> Vec<ProductListing> {
    rows.into_iter().map(ProductListing::from).collect()
}

pub fn bid_listings(rows: Vec<UserBidRow>) -> Vec<BidListing> {
    rows.into_iter().map(BidListing::from).collect()
}
