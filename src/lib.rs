//! # Android 启动器图标生成工具 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  main.rs ── env_logger 初始化 + 汇总输出 + 退出码         │
//! └───────┬──────────────────────────────────────────────────┘
//!         ↓ Result<GenerationReport, AppError>
//! ┌───────┼──────────────────────────────────────────────────┐
//! │  ┌─ error ────────── AppError (统一错误类型)              │
//! │  │                                                       │
//! │  └─ icon_generator   源图 → RGBA → mipmap-* 图标          │
//! │      ├─ density       mdpi..xxxhdpi 固定边长表            │
//! │      ├─ pipeline      解码 · Lanczos3 缩放 · PNG 编码     │
//! │      └─ handler       流程编排 + 阶段耗时日志             │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 入口层统一错误类型 `AppError` |
//! | [`icon_generator`] | 从单张源图生成 5 个密度 × 2 个变体的启动器图标 |

pub mod error;
pub mod icon_generator;
