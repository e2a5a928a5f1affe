use crate::error::AppError;
use axum::{extract::FromRequestParts, http::request::Parts};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use types::ids::ParticipantId;
use types::participant::{Profile, Role};

/// Claims issued by the external auth collaborator. The gateway trusts them
/// as given, the same way the engine trusts the role flag passed in.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

/// The authenticated caller of a request.
pub struct AuthenticatedUser {
    pub participant_id: ParticipantId,
    pub display_name: String,
    pub email: String,
    pub role: Role,
}

impl AuthenticatedUser {
    /// Profile view of the claims, used to keep the engine's participant
    /// registry in sync with the auth collaborator.
    pub fn profile(&self) -> Profile {
        Profile::new(
            self.participant_id,
            self.display_name.clone(),
            self.email.clone(),
            self.role,
        )
    }
}

impl<S> FromRequestParts<S> for AuthenticatedUser
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("Authorization")
            .ok_or_else(|| AppError::Unauthorized("Missing authentication credentials".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::Unauthorized("Invalid header string".into()))?;
        let token = auth_str
            .strip_prefix("Bearer ")
            .ok_or_else(|| AppError::Unauthorized("Expected bearer token".into()))?;

        // Tokens come from the trusted auth collaborator; signature checking
        // is disabled until its verification key is wired through.
        // TODO: fetch the decoding key from the auth service keystore
        let key = DecodingKey::from_secret("secret".as_ref());
        let mut validation = Validation::default();
        validation.insecure_disable_signature_validation();
        let token_data = decode::<Claims>(token, &key, &validation)
            .map_err(|e| AppError::Unauthorized(format!("Invalid token: {}", e)))?;

        let claims = token_data.claims;
        Ok(AuthenticatedUser {
            participant_id: claims.participant_id,
            display_name: claims.display_name,
            email: claims.email,
            role: claims.role,
        })
    }
}
