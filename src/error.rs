//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义入口层统一的 `AppError` 枚举，`main` 只面对这一种错误，
//! 根据错误层级决定输出的失败提示与退出码。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 为 `IconError` 与 `std::io::Error` 提供 `From` 转换，无需手动 map。

use crate::icon_generator::IconError;

/// 应用级统一错误类型
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// 图标生成流水线错误（源图缺失 / 解码 / 缩放 / 写入）
    #[error("{0}")]
    Icon(#[from] IconError),

    /// 文件系统 I/O 错误
    #[error("文件系统错误: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// 前置条件失败（源图缺失）时，保证没有产生任何输出。
    pub fn is_precondition(&self) -> bool {
        matches!(self, Self::Icon(err) if err.is_precondition())
    }

    /// 失败时附带给操作者的提示。
    pub fn hint(&self) -> &'static str {
        match self {
            Self::Icon(IconError::SourceNotFound(_)) => {
                "请将原始图标放在 app/src/main/res/logo_original.png，并在项目根目录运行"
            }
            Self::Icon(IconError::Decode(_)) => "请确认源图是有效的图片文件",
            Self::Icon(_) | Self::Io(_) => "请检查输出目录的写入权限与磁盘空间",
        }
    }
}
