//! 현재 사용자 확인
//!
//! 인증 자체는 앞단 인증 계층이 처리하고, 확인된 사용자 id 를
//! [`USER_ID_HEADER`] 헤더로 넘겨준다. 여기서는 그 id 로 사용자를 조회해
//! 요청 extension 에 [`CurrentUser`] 를 넣는다.

// region:    --- Imports
use crate::error::Error;
use crate::market::model::User;
use crate::query::store::UserStore;
use axum::extract::{Request, State};
use axum::http::HeaderMap;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;
use tracing::{debug, warn};

// endregion: --- Imports

/// 인증 계층이 설정하는 사용자 id 헤더
pub const USER_ID_HEADER: &str = "x-authenticated-user-id";

/// 요청의 현재 사용자
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrentUser(pub User);

/// 헤더에서 사용자 id 추출. 없거나 정수가 아니면 None
pub fn authenticated_user_id(headers: &HeaderMap) -> Option<i64> {
    let raw = headers.get(USER_ID_HEADER)?.to_str().ok()?;
    raw.trim().parse().ok()
}

/// 현재 사용자 확인 미들웨어
/// 헤더가 없으면 DB 를 조회하지 않고 그대로 통과시킨다.
pub async fn resolve_current_user(
    State(store): State<Arc<dyn UserStore>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Error> {
    match authenticated_user_id(req.headers()) {
        Some(user_id) => match store.find_user(user_id).await? {
            Some(user) => {
                debug!("{:<12} --> 현재 사용자 확인 id: {}", "Session", user.id);
                req.extensions_mut().insert(CurrentUser(user));
            }
            None => warn!(
                "{:<12} --> 존재하지 않는 사용자 id: {}",
                "Session", user_id
            ),
        },
        None => debug!("{:<12} --> 인증 정보 없음", "Session"),
    }

    Ok(next.run(req).await)
}
