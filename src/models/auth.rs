// src/models/auth.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

// Representa um usuário vindo do banco de dados
#[derive(Debug, Clone, Serialize, sqlx::FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: i32,
    pub username: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    pub password_hash: String,

    pub role: String,
}

impl User {
    // Comparação em texto puro: a coluna guarda a senha como foi enviada.
    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password_hash == candidate
    }
}

// Dados para registro e login: o mesmo par usuário/senha
#[derive(Debug, Deserialize, Serialize, Validate, ToSchema)]
pub struct CredentialsPayload {
    #[validate(length(min = 1, max = 100, message = "O nome de usuário é obrigatório."))]
    #[schema(example = "caixa01")]
    pub username: String,

    #[validate(length(min = 1, message = "A senha é obrigatória."))]
    pub password: String,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AuthResponse {
    pub token: String,
}

// Estrutura de dados ("claims") dentro do JWT
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Claims {
    pub sub: String, // Subject (username)
    pub role: String,
    pub id: i32,
    pub iss: String,
    pub aud: String,
    pub iat: i64, // Issued At (quando o token foi criado)
    pub exp: i64, // Expiration time (quando o token expira)
    pub jti: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(password: &str) -> User {
        User {
            id: 1,
            username: "caixa01".into(),
            password_hash: password.into(),
            role: "User".into(),
        }
    }

    #[test]
    fn password_must_match_exactly() {
        let user = user("Segredo123");
        assert!(user.password_matches("Segredo123"));
        assert!(!user.password_matches("segredo123"));
        assert!(!user.password_matches(""));
    }

    #[test]
    fn password_is_never_serialized() {
        let json = serde_json::to_value(user("Segredo123")).unwrap();
        assert!(json.get("passwordHash").is_none());
        assert_eq!(json["username"], "caixa01");
    }
}
