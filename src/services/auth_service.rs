use argon2::{
    Argon2, PasswordHasher,
    password_hash::{PasswordHash, PasswordVerifier, SaltString},
};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind};
use password_hash::rand_core::OsRng;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter, Set};

use crate::{
    config::AuthConfig,
    dto::auth::{Claims, LoginRequest, LoginResponse, RegisterRequest},
    entity::users::{self, ActiveModel, Column, Entity as Users},
    error::{AppError, AppResult},
    models::User,
};

const INVALID_CREDENTIALS: &str = "Invalid username or password";

pub async fn register<C: ConnectionTrait>(db: &C, payload: RegisterRequest) -> AppResult<User> {
    let RegisterRequest {
        username,
        email,
        password,
    } = payload;

    if find_by_username(db, &username).await?.is_some() {
        return Err(AppError::BadRequest("Username is already taken".into()));
    }
    let email_taken = Users::find()
        .filter(Column::Email.eq(email.as_str()))
        .one(db)
        .await?;
    if email_taken.is_some() {
        return Err(AppError::BadRequest("Email is already taken".into()));
    }

    let password_hash = hash_password(&password)?;
    let user = ActiveModel {
        username: Set(username),
        email: Set(email),
        password_hash: Set(password_hash),
        created_at: Set(Utc::now().into()),
        ..Default::default()
    }
    .insert(db)
    .await
    .map_err(|e| AppError::from_unique(e, "Username or email is already taken"))?;

    tracing::info!(user_id = user.id, username = %user.username, "user registered");
    Ok(user.into())
}

pub async fn login<C: ConnectionTrait>(
    db: &C,
    auth: &AuthConfig,
    payload: LoginRequest,
) -> AppResult<LoginResponse> {
    let LoginRequest { username, password } = payload;
    let user = match find_by_username(db, &username).await? {
        Some(u) => u,
        None => {
            tracing::warn!(username = %username, "login for unknown user");
            return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
        }
    };

    let parsed_hash = PasswordHash::new(&user.password_hash)
        .map_err(|_| AppError::Internal(anyhow::anyhow!("Invalid password hash")))?;
    if Argon2::default()
        .verify_password(password.as_bytes(), &parsed_hash)
        .is_err()
    {
        tracing::warn!(username = %username, "login with wrong password");
        return Err(AppError::Unauthorized(INVALID_CREDENTIALS.into()));
    }

    let resp = issue_token(&user.username, auth)?;
    tracing::info!(user_id = user.id, "user logged in");
    Ok(resp)
}

pub async fn find_by_username<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> AppResult<Option<users::Model>> {
    Ok(Users::find()
        .filter(Column::Username.eq(username))
        .one(db)
        .await?)
}

pub fn hash_password(password: &str) -> AppResult<String> {
    let salt = SaltString::generate(&mut OsRng);
    Ok(Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?
        .to_string())
}

/// Signs an HS256 token whose subject is the username.
pub fn issue_token(username: &str, auth: &AuthConfig) -> AppResult<LoginResponse> {
    let ttl = Duration::try_minutes(auth.token_ttl_minutes)
        .filter(|ttl| *ttl > Duration::zero())
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Token lifetime out of range")))?;
    let expiration = Utc::now()
        .checked_add_signed(ttl)
        .ok_or_else(|| AppError::Internal(anyhow::anyhow!("Failed to set expiration")))?;

    let claims = Claims {
        sub: username.to_string(),
        exp: expiration.timestamp() as usize,
    };
    let token = encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(auth.jwt_secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;

    Ok(LoginResponse {
        access_token: token,
        token_type: "bearer".to_string(),
        expires_in: ttl.num_seconds(),
    })
}

pub fn decode_token(token: &str, secret: &str) -> AppResult<Claims> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|err| match err.kind() {
        ErrorKind::ExpiredSignature => AppError::Unauthorized("Token expired".into()),
        _ => AppError::Unauthorized("Invalid token".into()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn auth() -> AuthConfig {
        AuthConfig {
            jwt_secret: "test-secret".into(),
            token_ttl_minutes: 30,
        }
    }

    #[test]
    fn issued_token_decodes_back_to_username() {
        let resp = issue_token("alice", &auth()).unwrap();
        assert_eq!(resp.token_type, "bearer");
        assert_eq!(resp.expires_in, 30 * 60);

        let claims = decode_token(&resp.access_token, "test-secret").unwrap();
        assert_eq!(claims.sub, "alice");
    }

    #[test]
    fn oversized_lifetime_is_an_error_not_a_panic() {
        for minutes in [i64::MAX, i64::MAX / 60, 0, -5] {
            let auth = AuthConfig {
                token_ttl_minutes: minutes,
                ..auth()
            };
            let err = issue_token("alice", &auth).unwrap_err();
            assert!(matches!(err, AppError::Internal(_)), "{minutes} minutes");
        }
    }

    #[test]
    fn wrong_secret_is_invalid() {
        let resp = issue_token("alice", &auth()).unwrap();
        let err = decode_token(&resp.access_token, "other-secret").unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: Invalid token");
    }

    #[test]
    fn expired_token_is_reported_as_expired() {
        let claims = Claims {
            sub: "alice".into(),
            exp: (Utc::now() - Duration::hours(2)).timestamp() as usize,
        };
        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        let err = decode_token(&token, "test-secret").unwrap_err();
        assert_eq!(err.to_string(), "Unauthorized: Token expired");
    }

    #[test]
    fn garbage_is_invalid() {
        let err = decode_token("not-a-jwt", "test-secret").unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn password_hash_verifies() {
        let hash = hash_password("secret123").unwrap();
        let parsed = PasswordHash::new(&hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"secret123", &parsed)
                .is_ok()
        );
        assert!(Argon2::default().verify_password(b"nope", &parsed).is_err());
    }
}
