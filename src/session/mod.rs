use sqlx::PgPool;
use tracing::{info, warn};
use uuid::Uuid;

use crate::auth::{SESSION_TTL_SECS, generate_token};
use crate::cache::{SessionCache, keys::session_key};
use crate::config::Config;
use crate::error::AppError;
use crate::store::User;

/// 会话管理器，持有凭证库连接池和会话缓存句柄
#[derive(Clone)]
pub struct SessionManager {
    pool: PgPool,
    cache: SessionCache,
    config: Config,
}

impl SessionManager {
    pub fn new(pool: PgPool, cache: SessionCache, config: Config) -> Self {
        SessionManager {
            pool,
            cache,
            config,
        }
    }

    /// 登录：校验凭证，签发令牌并写入缓存
    ///
    /// 用户不存在和密码错误统一返回 InvalidCredentials，避免枚举账号
    pub async fn login(&self, email: &str, password: &str) -> Result<(String, Uuid), AppError> {
        let user = match User::find_by_email(&self.pool, email).await? {
            Some(user) => user,
            None => {
                warn!("Invalid email or password");
                return Err(AppError::InvalidCredentials);
            }
        };

        if !user.verify_login(password).await? {
            warn!("Invalid email or password");
            return Err(AppError::InvalidCredentials);
        }

        let token = generate_token(&user.user_id, &self.config)?;

        // 单会话策略：覆盖该用户已有的缓存条目
        self.cache
            .set(&session_key(&user.user_id), &token, SESSION_TTL_SECS)
            .await?;

        info!("User logged in successfully");
        Ok((token, user.user_id))
    }

    /// 登出：比对缓存中的令牌并删除
    ///
    /// 缓存键按用户ID生成，先由邮箱解析用户；未知邮箱与过期令牌同样返回
    /// InvalidToken。get 与 del 之间条目过期时 del 返回 0，映射为 UserNotFound。
    pub async fn logout(&self, email: &str, token: &str) -> Result<(), AppError> {
        let user = match User::find_by_email(&self.pool, email).await? {
            Some(user) => user,
            None => {
                warn!("Invalid token");
                return Err(AppError::InvalidToken);
            }
        };

        let key = session_key(&user.user_id);
        let stored = self.cache.get(&key).await?;

        if stored.as_deref() != Some(token) {
            warn!("Invalid token");
            return Err(AppError::InvalidToken);
        }

        if self.cache.delete(&key).await? == 0 {
            warn!("User not found in cache");
            return Err(AppError::UserNotFound);
        }

        info!("User logged out successfully");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::postgres::PgPoolOptions;
    use std::sync::Arc;
    use std::time::Duration;

    // 指向无监听端口的地址，凭证库不可用时两个操作都必须降级为 Internal
    fn unreachable_manager() -> SessionManager {
        let pool = PgPoolOptions::new()
            .acquire_timeout(Duration::from_secs(2))
            .connect_lazy("postgres://postgres@127.0.0.1:1/auth")
            .unwrap();
        let client = redis::Client::open("redis://127.0.0.1:1/").unwrap();
        let config = Config {
            database_url: "postgres://postgres@127.0.0.1:1/auth".into(),
            redis_url: "redis://127.0.0.1:1/".into(),
            jwt_secret: "test-secret".into(),
            server_host: "127.0.0.1".into(),
            server_port: 3000,
            api_base_uri: "/api".into(),
        };

        SessionManager::new(pool, SessionCache::new(Arc::new(client)), config)
    }

    #[tokio::test]
    async fn login_surfaces_store_unavailability_as_internal() {
        let sessions = unreachable_manager();

        let err = sessions.login("a@example.com", "secret123").await.unwrap_err();

        assert!(matches!(err, AppError::Internal));
    }

    #[tokio::test]
    async fn logout_surfaces_store_unavailability_as_internal() {
        let sessions = unreachable_manager();

        let err = sessions.logout("a@example.com", "some-token").await.unwrap_err();

        assert!(matches!(err, AppError::Internal));
    }
}
