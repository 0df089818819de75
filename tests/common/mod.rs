//! 테스트 공용 저장소와 요청 헬퍼
#![allow(dead_code)]

use async_trait::async_trait;
use auction_user_service::market::model::{SellerProductRow, User, UserBidRow};
use auction_user_service::query::store::UserStore;
use auction_user_service::routes;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use http_body_util::BodyExt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tower::ServiceExt;

/// 실패시킬 조회
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum FailOn {
    #[default]
    Nothing,
    Everything,
    ProductsBySeller,
    BidsByUser,
    FindUser,
}

/// 메모리 기반 조회 저장소 (호출 횟수 기록)
#[derive(Default)]
pub struct MemoryStore {
    pub users: Vec<User>,
    pub products: Vec<(i64, SellerProductRow)>,
    pub bids: Vec<(i64, UserBidRow)>,
    pub fail_on: FailOn,
    pub calls: AtomicUsize,
}

impl MemoryStore {
    /// 모든 조회가 실패하는 저장소
    pub fn failing() -> Self {
        Self {
            fail_on: FailOn::Everything,
            ..Self::default()
        }
    }

    /// 지정한 조회만 실패하는 시드 저장소
    pub fn seeded_failing_on(fail_on: FailOn) -> Self {
        Self {
            fail_on,
            ..seeded_store()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn check(&self, op: FailOn) -> Result<(), sqlx::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_on == FailOn::Everything || self.fail_on == op {
            return Err(sqlx::Error::PoolClosed);
        }
        Ok(())
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn products_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<SellerProductRow>, sqlx::Error> {
        self.check(FailOn::ProductsBySeller)?;
        Ok(self
            .products
            .iter()
            .filter(|(seller, _)| *seller == seller_id)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn bids_by_user(&self, user_id: i64) -> Result<Vec<UserBidRow>, sqlx::Error> {
        self.check(FailOn::BidsByUser)?;
        Ok(self
            .bids
            .iter()
            .filter(|(bidder, _)| *bidder == user_id)
            .map(|(_, row)| row.clone())
            .collect())
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>, sqlx::Error> {
        self.check(FailOn::FindUser)?;
        Ok(self.users.iter().find(|u| u.id == user_id).cloned())
    }
}

pub fn ts(hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 3, 1, hour, 0, 0).unwrap()
}

pub fn product(id: i64, name: &str, starting_price: i64, bids: &[i64]) -> SellerProductRow {
    SellerProductRow {
        id,
        name: name.to_string(),
        description: format!("{name} 설명"),
        photo: Some(format!("/images/{id}.jpg")),
        starting_price,
        highest_bid: bids.iter().copied().max(),
        bid_count: bids.len() as i64,
    }
}

pub fn bid(id: i64, product_id: i64, product_name: &str, amount: i64, status: &str) -> UserBidRow {
    UserBidRow {
        id,
        product_id,
        product_name: product_name.to_string(),
        amount,
        status: status.to_string(),
        created_at: ts(id as u32),
    }
}

/// 판매자 1, 입찰자 2 가 있는 저장소
pub fn seeded_store() -> MemoryStore {
    MemoryStore {
        users: vec![
            User {
                id: 1,
                username: "seller".to_string(),
                email: "seller@example.com".to_string(),
            },
            User {
                id: 2,
                username: "bidder".to_string(),
                email: "bidder@example.com".to_string(),
            },
        ],
        products: vec![
            (1, product(10, "기계식 키보드", 30_000, &[31_000, 45_000, 40_000])),
            (1, product(11, "빈티지 카메라", 100_000, &[120_000])),
            (1, product(12, "중고 자전거", 80_000, &[])),
            (2, product(20, "책상", 50_000, &[])),
        ],
        bids: vec![
            (2, bid(3, 10, "기계식 키보드", 45_000, "ACTIVE")),
            (2, bid(1, 10, "기계식 키보드", 31_000, "OUTBID")),
            (2, bid(2, 11, "빈티지 카메라", 120_000, "ACTIVE")),
            (1, bid(4, 20, "책상", 55_000, "ACTIVE")),
        ],
        ..MemoryStore::default()
    }
}

pub async fn send(
    store: Arc<MemoryStore>,
    path: &str,
    headers: &[(&str, &str)],
) -> (StatusCode, HeaderMap, String) {
    let router = routes::router(store);
    let mut builder = Request::builder().uri(path);
    for (name, value) in headers {
        builder = builder.header(*name, *value);
    }
    let resp = router
        .oneshot(builder.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let headers = resp.headers().clone();
    let body = resp.into_body().collect().await.unwrap().to_bytes();
    (status, headers, String::from_utf8_lossy(&body).to_string())
}

