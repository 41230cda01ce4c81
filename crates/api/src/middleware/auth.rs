//! JWT authentication middleware.
//!
//! Two gates, one per permission tier: the admin console and the league
//! official portal never share a route surface, so each route group is
//! wrapped with the middleware for its own tier.

use axum::{
    body::Body,
    extract::State,
    http::{Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use uuid::Uuid;

use crate::app::AppState;
use shared::jwt::{extract_subject_id, TokenRole};

/// Authenticated subject extracted from a validated access token.
#[derive(Debug, Clone)]
pub struct AuthSubject {
    /// Admin user or official ID from the subject claim.
    pub subject_id: Uuid,
    /// Permission tier the token was issued for.
    pub role: TokenRole,
    /// JWT ID for session correlation.
    pub jti: String,
}

/// Middleware that requires a valid admin access token.
pub async fn require_admin(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    require_role(state, req, next, TokenRole::Admin).await
}

/// Middleware that requires a valid league-official access token.
pub async fn require_official(
    State(state): State<AppState>,
    req: Request<Body>,
    next: Next,
) -> Response {
    require_role(state, req, next, TokenRole::Official).await
}

async fn require_role(
    state: AppState,
    mut req: Request<Body>,
    next: Next,
    role: TokenRole,
) -> Response {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok());

    let token = match auth_header {
        Some(header) if header.starts_with("Bearer ") => &header[7..],
        _ => {
            return unauthorized_response("Missing or invalid Authorization header");
        }
    };

    match state.jwt.validate_access_token(token, role) {
        Ok(claims) => {
            let subject_id = match extract_subject_id(&claims) {
                Ok(id) => id,
                Err(_) => return unauthorized_response("Invalid subject in token"),
            };
            req.extensions_mut().insert(AuthSubject {
                subject_id,
                role,
                jti: claims.jti,
            });
            next.run(req).await
        }
        Err(e) => {
            tracing::debug!("JWT validation failed: {}", e);
            unauthorized_response("Invalid or expired token")
        }
    }
}

fn unauthorized_response(message: &str) -> Response {
    (
        StatusCode::UNAUTHORIZED,
        Json(json!({
            "error": "unauthorized",
            "message": message,
        })),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_subject_fields() {
        let subject = AuthSubject {
            subject_id: Uuid::new_v4(),
            role: TokenRole::Admin,
            jti: "jti-123".to_string(),
        };
        assert_eq!(subject.role, TokenRole::Admin);
        assert_eq!(subject.jti, "jti-123");
    }

    #[tokio::test]
    async fn test_unauthorized_response_status() {
        let response = unauthorized_response("nope");
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    }
}
