// region:    --- Imports
use super::queries;
use crate::market::model::{SellerProductRow, User, UserBidRow};
use async_trait::async_trait;
use sqlx::{Error as SqlxError, PgPool};
use std::sync::Arc;
use tracing::info;

// endregion: --- Imports

// region:    --- User Store Trait
/// 사용자 단위 조회 저장소 트레이트
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 판매자가 등록한 상품과 입찰 집계
    async fn products_by_seller(&self, seller_id: i64)
        -> Result<Vec<SellerProductRow>, SqlxError>;

    /// 사용자가 넣은 입찰과 해당 상품명
    async fn bids_by_user(&self, user_id: i64) -> Result<Vec<UserBidRow>, SqlxError>;

    /// 사용자 조회
    async fn find_user(&self, user_id: i64) -> Result<Option<User>, SqlxError>;
}

// endregion: --- User Store Trait

// region:    --- Postgres User Store
/// 조회 저장소 구현체 (읽기 전용이라 트랜잭션을 쓰지 않는다)
pub struct PostgresUserStore {
    pool: Arc<PgPool>,
}

impl PostgresUserStore {
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PostgresUserStore {
    async fn products_by_seller(
        &self,
        seller_id: i64,
    ) -> Result<Vec<SellerProductRow>, SqlxError> {
        info!("{:<12} --> 판매 상품 조회 seller: {}", "Query", seller_id);
        sqlx::query_as::<_, SellerProductRow>(queries::GET_PRODUCTS_BY_SELLER)
            .bind(seller_id)
            .fetch_all(&*self.pool)
            .await
    }

    async fn bids_by_user(&self, user_id: i64) -> Result<Vec<UserBidRow>, SqlxError> {
        info!("{:<12} --> 입찰 내역 조회 user: {}", "Query", user_id);
        sqlx::query_as::<_, UserBidRow>(queries::GET_BIDS_BY_USER)
            .bind(user_id)
            .fetch_all(&*self.pool)
            .await
    }

    async fn find_user(&self, user_id: i64) -> Result<Option<User>, SqlxError> {
        info!("{:<12} --> 사용자 조회 id: {}", "Query", user_id);
        sqlx::query_as::<_, User>(queries::GET_USER)
            .bind(user_id)
            .fetch_optional(&*self.pool)
            .await
    }
}

// endregion: --- Postgres User Store
