// src/services/auth.rs

use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::JwtSettings,
    db::UserRepository,
    models::auth::{Claims, User},
};

/// Emite um token HS256 com username, papel e id do usuário.
pub fn issue_token(settings: &JwtSettings, user: &User) -> Result<String, AppError> {
    let now = Utc::now();
    let expires_at = now + settings.expiration;

    let claims = Claims {
        sub: user.username.clone(),
        role: user.role.clone(),
        id: user.id,
        iss: settings.issuer.clone(),
        aud: settings.audience.clone(),
        iat: now.timestamp(),
        exp: expires_at.timestamp(),
        jti: Uuid::new_v4().to_string(),
    };

    // Usa '?' para um tratamento de erro mais limpo
    Ok(encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(settings.secret.as_ref()),
    )?)
}

/// Valida assinatura, emissor, audiência e expiração.
pub fn decode_token(settings: &JwtSettings, token: &str) -> Result<Claims, AppError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.set_issuer(&[settings.issuer.as_str()]);
    validation.set_audience(&[settings.audience.as_str()]);

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(settings.secret.as_ref()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|_| AppError::InvalidToken)
}

#[derive(Clone)]
pub struct AuthService {
    user_repo: UserRepository,
    jwt: JwtSettings,
}

impl AuthService {
    pub fn new(user_repo: UserRepository, jwt: JwtSettings) -> Self {
        Self { user_repo, jwt }
    }

    // A senha é gravada exatamente como chegou (sem hash).
    pub async fn register_user(&self, username: &str, password: &str) -> Result<User, AppError> {
        if self.user_repo.username_exists(username).await? {
            return Err(AppError::UsernameAlreadyExists);
        }

        let user = self.user_repo.create_user(username, password).await?;
        tracing::info!("👤 Usuário '{}' registrado", user.username);
        Ok(user)
    }

    pub async fn login_user(&self, username: &str, password: &str) -> Result<String, AppError> {
        let user = self
            .user_repo
            .find_by_username(username)
            .await?
            .filter(|user| user.password_matches(password))
            .ok_or(AppError::InvalidCredentials)?;

        issue_token(&self.jwt, &user)
    }

    pub fn validate_token(&self, token: &str) -> Result<Claims, AppError> {
        decode_token(&self.jwt, token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn settings() -> JwtSettings {
        JwtSettings {
            secret: "segredo-de-teste".into(),
            issuer: "pdv-backend".into(),
            audience: "pdv-frontend".into(),
            expiration: chrono::Duration::hours(2),
        }
    }

    fn user() -> User {
        User {
            id: 42,
            username: "caixa01".into(),
            password_hash: "1234".into(),
            role: "User".into(),
        }
    }

    #[test]
    fn token_carries_username_role_and_id() {
        let settings = settings();
        let token = issue_token(&settings, &user()).unwrap();

        let claims = decode_token(&settings, &token).unwrap();
        assert_eq!(claims.sub, "caixa01");
        assert_eq!(claims.role, "User");
        assert_eq!(claims.id, 42);
        assert_eq!(claims.exp - claims.iat, 2 * 60 * 60);
    }

    #[test]
    fn token_signed_with_other_secret_is_rejected() {
        let token = issue_token(&settings(), &user()).unwrap();
        let other = JwtSettings { secret: "outro".into(), ..settings() };

        assert!(matches!(decode_token(&other, &token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn token_for_other_audience_is_rejected() {
        let token = issue_token(&settings(), &user()).unwrap();
        let other = JwtSettings { audience: "outra-api".into(), ..settings() };

        assert!(matches!(decode_token(&other, &token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let expired = JwtSettings { expiration: chrono::Duration::hours(-1), ..settings() };
        let token = issue_token(&expired, &user()).unwrap();

        assert!(matches!(decode_token(&settings(), &token), Err(AppError::InvalidToken)));
    }
}
