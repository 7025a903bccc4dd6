//! Viewer identification middleware
//!
//! Decodes an optional bearer JWT to find out which role is looking at the
//! dashboard. Requests without a token are served as guests. The role only
//! decides which affordances appear in view models; it never hides data.

use axum::{
    extract::{Request, State},
    http::{header::AUTHORIZATION, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use chrono::Utc;
use jsonwebtoken::{decode, encode, errors::ErrorKind, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use shared::{Role, RolePolicy};
use uuid::Uuid;

use crate::error::{AppError, AppResult};
use crate::AppState;

/// Who is viewing the dashboard
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Viewer {
    pub user_id: Option<Uuid>,
    pub role: Role,
}

impl Viewer {
    pub fn guest() -> Self {
        Self {
            user_id: None,
            role: Role::Guest,
        }
    }

    pub fn policy(&self) -> RolePolicy {
        self.role.policy()
    }
}

/// JWT claims structure
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    role: Role,
    exp: i64,
    iat: i64,
}

/// Issue a viewer token signed with `secret`
pub fn encode_viewer_token(
    secret: &str,
    user_id: Uuid,
    role: Role,
    ttl_seconds: i64,
) -> Result<String, jsonwebtoken::errors::Error> {
    let now = Utc::now().timestamp();
    let claims = Claims {
        sub: user_id.to_string(),
        role,
        exp: now + ttl_seconds,
        iat: now,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
}

fn decode_viewer(token: &str, secret: &str) -> AppResult<Viewer> {
    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => AppError::TokenExpired,
        _ => AppError::InvalidToken,
    })?;

    let user_id = Uuid::parse_str(&claims.sub).map_err(|_| AppError::InvalidToken)?;

    Ok(Viewer {
        user_id: Some(user_id),
        role: claims.role,
    })
}

/// Attach a `Viewer` to every request
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Response {
    let auth_header = match request.headers().get(AUTHORIZATION).map(|h| h.to_str()) {
        None => None,
        Some(Ok(header)) => Some(header),
        Some(Err(_)) => return AppError::InvalidToken.into_response(),
    };

    let viewer = match auth_header {
        None => Viewer::guest(),
        Some(header) => match header.strip_prefix("Bearer ") {
            Some(token) => match decode_viewer(token, &state.config.auth.jwt_secret) {
                Ok(viewer) => viewer,
                Err(e) => return e.into_response(),
            },
            None => {
                return AppError::Unauthorized {
                    message: "Authorization header must use the Bearer scheme".to_string(),
                    message_th: "รูปแบบ Authorization ไม่ถูกต้อง".to_string(),
                }
                .into_response();
            }
        },
    };

    tracing::debug!(role = %viewer.role, "viewer identified");
    request.extensions_mut().insert(viewer);

    next.run(request).await
}

/// Extractor for the current viewer; falls back to guest outside the middleware
#[axum::async_trait]
impl<S> axum::extract::FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        Ok(parts
            .extensions
            .get::<Viewer>()
            .cloned()
            .unwrap_or_else(Viewer::guest))
    }
}
