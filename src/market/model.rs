use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// 사용자 모델
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
}

// 판매자 상품 조회 결과 (상품 + 입찰 집계)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct SellerProductRow {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub photo: Option<String>,
    pub starting_price: i64,
    /// 입찰이 없으면 None
    pub highest_bid: Option<i64>,
    pub bid_count: i64,
}

// 사용자 입찰 조회 결과 (입찰 + 상품명)
#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct UserBidRow {
    pub id: i64,
    pub product_id: i64,
    pub product_name: String,
    pub amount: i64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}
