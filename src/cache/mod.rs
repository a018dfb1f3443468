use std::sync::Arc;

use redis::{AsyncCommands, Client as RedisClient};

pub mod keys;

/// 会话缓存句柄，进程启动时构造后注入会话管理器
#[derive(Clone)]
pub struct SessionCache {
    client: Arc<RedisClient>,
}

impl SessionCache {
    pub fn new(client: Arc<RedisClient>) -> Self {
        SessionCache { client }
    }

    /// 写入令牌，带过期时间
    pub async fn set(
        &self,
        key: &str,
        value: &str,
        ttl_secs: u64,
    ) -> Result<(), redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let _: () = conn.set_ex(key, value, ttl_secs).await?;

        Ok(())
    }

    /// 读取令牌
    pub async fn get(&self, key: &str) -> Result<Option<String>, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let value: Option<String> = conn.get(key).await?;

        Ok(value)
    }

    /// 删除令牌，返回删除数量
    pub async fn delete(&self, key: &str) -> Result<u32, redis::RedisError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;

        let removed: u32 = conn.del(key).await?;

        Ok(removed)
    }
}
