use uuid::Uuid;

/// 会话令牌缓存键前缀
const SESSION_PREFIX: &str = "session:";

/// 生成用户会话缓存键
pub fn session_key(user_id: &Uuid) -> String {
    format!("{}{}", SESSION_PREFIX, user_id)
}
