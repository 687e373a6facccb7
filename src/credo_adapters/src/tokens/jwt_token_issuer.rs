use chrono::Utc;
use credo_core::{
    TokenClaims, TokenIssuer, TokenIssuerError, TokenKind, TokenPair, VerifiedToken,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_ACCESS_TTL_SECONDS: i64 = 3 * 60 * 60;
pub const DEFAULT_REFRESH_TTL_SECONDS: i64 = 24 * 60 * 60;

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub access_ttl_seconds: i64,
    pub refresh_ttl_seconds: i64,
}

impl JwtConfig {
    pub fn new(secret: Secret<String>) -> Self {
        Self {
            secret,
            access_ttl_seconds: DEFAULT_ACCESS_TTL_SECONDS,
            refresh_ttl_seconds: DEFAULT_REFRESH_TTL_SECONDS,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Wire form of a token: the payload plus transport-only claims.
#[derive(Debug, Serialize, Deserialize)]
struct JwtClaims {
    #[serde(flatten)]
    payload: TokenClaims,
    iat: i64,
    exp: i64,
    jti: String,
    typ: TokenKind,
}

/// HS256 signer for access and refresh tokens.
#[derive(Clone)]
pub struct JwtTokenIssuer {
    config: JwtConfig,
}

impl JwtTokenIssuer {
    pub fn new(config: JwtConfig) -> Self {
        Self { config }
    }

    fn create_token(
        &self,
        payload: &TokenClaims,
        kind: TokenKind,
        ttl_seconds: i64,
    ) -> Result<String, TokenIssuerError> {
        let iat = Utc::now().timestamp();
        let claims = JwtClaims {
            payload: payload.clone(),
            iat,
            exp: iat + ttl_seconds,
            // Two pairs minted in the same second must still differ
            jti: Uuid::new_v4().to_string(),
            typ: kind,
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.as_bytes()),
        )
        .map_err(|e| TokenIssuerError::UnexpectedError(e.to_string()))
    }
}

#[async_trait::async_trait]
impl TokenIssuer for JwtTokenIssuer {
    #[tracing::instrument(name = "Signing token pair", skip_all)]
    async fn sign(&self, claims: &TokenClaims) -> Result<TokenPair, TokenIssuerError> {
        Ok(TokenPair {
            token: self.create_token(claims, TokenKind::Access, self.config.access_ttl_seconds)?,
            refresh_token: self.create_token(
                claims,
                TokenKind::Refresh,
                self.config.refresh_ttl_seconds,
            )?,
        })
    }

    #[tracing::instrument(name = "Verifying token", skip_all)]
    async fn verify(&self, token: &str) -> Result<VerifiedToken, TokenIssuerError> {
        let data = decode::<JwtClaims>(
            token,
            &DecodingKey::from_secret(self.config.as_bytes()),
            &Validation::default(),
        )
        .map_err(|e| {
            tracing::debug!(error = %e, "Token rejected");
            TokenIssuerError::InvalidToken
        })?;

        Ok(VerifiedToken {
            claims: data.claims.payload,
            kind: data.claims.typ,
            issued_at: data.claims.iat,
            expires_at: data.claims.exp,
        })
    }
}
