//! # 配置模块
//!
//! ## 设计思路
//!
//! 将所有固定约定集中到 `IconConfig`：资源目录、源图文件名、输出文件名、
//! 缩放滤镜与 PNG 压缩策略。`Default` 即生产使用的唯一配置，
//! 输出路径与尺寸不对外开放调整。
//!
//! ## 实现思路
//!
//! - 所有路径均相对 `base_dir` 解析；入口层使用当前工作目录，测试使用临时目录。
//! - 路径拼接统一走 `source_path / density_dir / output_path`，避免各处重复 `format!`。

use std::path::{Path, PathBuf};

use image::codecs::png::{CompressionType, FilterType as PngFilterType};
use image::imageops::FilterType;

use super::{Density, IconVariant};

/// 图标生成配置。
#[derive(Debug, Clone)]
pub struct IconConfig {
    /// 相对路径的解析基准目录。
    pub base_dir: PathBuf,
    /// Android 资源目录（相对 `base_dir`）。
    pub res_dir: PathBuf,
    /// 源图文件名（位于 `res_dir` 下）。
    pub source_file_name: &'static str,
    pub launcher_file_name: &'static str,
    pub launcher_round_file_name: &'static str,
    /// 缩放滤镜，固定为 Lanczos3。
    pub resize_filter: FilterType,
    /// PNG 压缩等级。
    pub png_compression: CompressionType,
    /// PNG 行过滤策略。
    pub png_filter: PngFilterType,
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::new(),
            res_dir: PathBuf::from("app/src/main/res"),
            source_file_name: "logo_original.png",
            launcher_file_name: "ic_launcher.png",
            launcher_round_file_name: "ic_launcher_round.png",
            resize_filter: FilterType::Lanczos3,
            png_compression: CompressionType::Best,
            png_filter: PngFilterType::Adaptive,
        }
    }
}

impl IconConfig {
    /// 以指定目录为基准解析资源树。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icons::icon_generator::IconConfig;
    ///
    /// let config = IconConfig::with_base_dir("/tmp/project");
    /// assert!(config.source_path().ends_with("app/src/main/res/logo_original.png"));
    /// ```
    pub fn with_base_dir(base_dir: impl AsRef<Path>) -> Self {
        Self {
            base_dir: base_dir.as_ref().to_path_buf(),
            ..Self::default()
        }
    }

    fn res_root(&self) -> PathBuf {
        self.base_dir.join(&self.res_dir)
    }

    pub fn source_path(&self) -> PathBuf {
        self.res_root().join(self.source_file_name)
    }

    pub fn density_dir(&self, density: Density) -> PathBuf {
        self.res_root().join(density.mipmap_dir_name())
    }

    pub fn output_path(&self, density: Density, variant: IconVariant) -> PathBuf {
        let file_name = match variant {
            IconVariant::Standard => self.launcher_file_name,
            IconVariant::Round => self.launcher_round_file_name,
        };
        self.density_dir(density).join(file_name)
    }
}
