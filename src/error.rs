use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("读取配置失败：{0}")]
    Io(#[from] std::io::Error),
    #[error("配置文件格式错误：{0}")]
    Json(#[from] serde_json::Error),
    #[error("配置文件错误：{0}")]
    Invalid(String),
}
