//! # 错误模型模块
//!
//! ## 设计思路
//!
//! 使用单一错误枚举承载图标生成链路中的所有错误来源，避免字符串拼接式错误处理。
//! 错误分为两层：
//! - 前置条件失败（源图不存在）：显式检测，不产生任何输出
//! - 运行期失败（解码 / 缩放 / 编码 / 文件系统）：直接上抛给调用方

use std::path::PathBuf;

/// 图标生成统一错误类型。
///
/// 该类型会在入口层被上转为 `AppError`。
#[derive(Debug, thiserror::Error)]
pub enum IconError {
    #[error("源图不存在：{}", .0.display())]
    SourceNotFound(PathBuf),

    #[error("解码错误：{0}")]
    Decode(String),

    #[error("缩放错误：{0}")]
    Resize(String),

    #[error("编码错误：{0}")]
    Encode(String),

    #[error("文件错误：{0}")]
    FileSystem(String),
}

impl IconError {
    /// 是否属于前置条件失败（此时保证没有任何文件或目录被创建）。
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::SourceNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::IconError;
    use std::path::PathBuf;

    #[test]
    fn source_not_found_is_precondition() {
        let err = IconError::SourceNotFound(PathBuf::from("app/src/main/res/logo_original.png"));
        assert!(err.is_precondition());
        assert!(err.to_string().contains("logo_original.png"));
    }

    #[test]
    fn runtime_errors_are_not_precondition() {
        assert!(!IconError::Decode("bad header".to_string()).is_precondition());
        assert!(!IconError::FileSystem("read-only".to_string()).is_precondition());
    }
}
