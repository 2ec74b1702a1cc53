//! # 启动器图标生成模块（icon_generator）
//!
//! ## 设计思路
//!
//! 该模块将“源图校验 → 解码归一化 → 方形缩放 → PNG 编码 → 写入 mipmap 目录”
//! 按职责拆分为多个子模块：
//!
//! - `handler`：编排整条生成流程
//! - `pipeline`：负责解码、RGBA 转换、Lanczos3 缩放与 PNG 编码
//! - `density`：固定的密度档位与边长表
//! - `config/error/source`：配置、错误、中间数据模型
//!
//! ## 调用链
//!
//! ```text
//! main.rs
//!    ↓
//! handler.rs（源图校验 + 按密度循环 + 阶段耗时日志）
//!    ├─ pipeline.rs（解码 → RGBA → 缩放 → PNG）
//!    └─ fs（create_dir_all + 覆盖写入两个变体）
//!    ↓
//! 返回 GenerationReport / IconError
//! ```

mod config;
mod density;
mod error;
mod handler;
mod pipeline;
mod source;

pub use config::IconConfig;
pub use density::{Density, DENSITIES};
pub use error::IconError;
pub use handler::IconGenerator;
pub use source::{GeneratedIcon, GenerationReport, IconVariant, SourceImage, VARIANTS};
