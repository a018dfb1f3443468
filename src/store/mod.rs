use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, PgPool};
use uuid::Uuid;

use crate::auth::verify_password;

/// 用户记录，由外部注册流程写入，本服务只读
#[derive(Debug, Serialize, Deserialize, FromRow)]
pub struct User {
    pub user_id: Uuid,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub async fn find_by_email(pool: &PgPool, email: &str) -> Result<Option<Self>, sqlx::Error> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT user_id, email, password_hash, created_at
            FROM users
            WHERE email = $1
            "#,
        )
        .bind(email)
        .fetch_optional(pool)
        .await?;

        Ok(user)
    }

    pub async fn verify_login(&self, password: &str) -> Result<bool, bcrypt::BcryptError> {
        verify_password(password, &self.password_hash)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::hash_password;

    fn user_with_password(password: &str) -> User {
        User {
            user_id: Uuid::new_v4(),
            email: "a@example.com".into(),
            password_hash: hash_password(password).unwrap(),
            created_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn verify_login_accepts_matching_password() {
        let user = user_with_password("secret123");

        assert!(user.verify_login("secret123").await.unwrap());
    }

    #[tokio::test]
    async fn verify_login_rejects_wrong_password() {
        let user = user_with_password("secret123");

        assert!(!user.verify_login("SECRET123").await.unwrap());
        assert!(!user.verify_login("").await.unwrap());
    }

    #[test]
    fn password_hash_is_not_serialized() {
        let user = user_with_password("secret123");
        let json = serde_json::to_value(&user).unwrap();

        assert!(json.get("password_hash").is_none());
        assert_eq!(json["email"], "a@example.com");
    }
}
