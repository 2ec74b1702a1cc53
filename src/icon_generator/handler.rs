//! # 核心编排模块
//!
//! ## 设计思路
//!
//! `IconGenerator` 只负责流程编排，处理链路固定为：
//! 1. 校验源图存在（不存在时不创建任何目录）
//! 2. 解码并归一化为 RGBA
//! 3. 按密度表顺序：建目录 → 缩放 → 编码 → 写标准与圆形两个文件
//!
//! ## 实现思路
//!
//! - 全程单线程顺序执行，无重试，错误直接上抛。
//! - 记录 `load/density/total` 阶段耗时，便于诊断。

use std::fs;
use std::path::Path;
use std::time::Instant;

use super::density::DENSITIES;
use super::source::{GeneratedIcon, GenerationReport, VARIANTS};
use super::{IconConfig, IconError};

/// 启动器图标生成器。
pub struct IconGenerator {
    pub(super) config: IconConfig,
}

impl IconGenerator {
    /// # 示例
    /// ```rust,ignore
    /// use launcher_icons::icon_generator::{IconConfig, IconGenerator};
    ///
    /// let generator = IconGenerator::new(IconConfig::default());
    /// let report = generator.generate_icons()?;
    /// assert_eq!(report.icons.len(), 10);
    /// # Ok::<(), launcher_icons::icon_generator::IconError>(())
    /// ```
    pub fn new(config: IconConfig) -> Self {
        Self { config }
    }

    /// 生成全部密度的标准与圆形启动器图标。
    ///
    /// 源图缺失时返回 `IconError::SourceNotFound`，且保证文件系统未被改动。
    pub fn generate_icons(&self) -> Result<GenerationReport, IconError> {
        let config = &self.config;
        let total_started = Instant::now();

        let source_path = config.source_path();
        if !source_path.is_file() {
            log::error!("❌ 源图不存在：{}", source_path.display());
            return Err(IconError::SourceNotFound(source_path));
        }

        log::info!("📂 打开源图：{}", source_path.display());
        let load_started = Instant::now();
        let source = self.load_source(&source_path)?;
        log::info!(
            "✅ 源图加载完成 - 尺寸: {}x{} 原始色彩模式: {:?} 耗时: {}ms",
            source.width(),
            source.height(),
            source.original_color(),
            load_started.elapsed().as_millis()
        );

        let mut report = GenerationReport {
            source: source_path,
            icons: Vec::with_capacity(DENSITIES.len() * VARIANTS.len()),
        };

        for density in DENSITIES {
            let density_started = Instant::now();
            let size = density.icon_size();

            let dir = config.density_dir(density);
            fs::create_dir_all(&dir).map_err(|e| {
                IconError::FileSystem(format!("创建目录 {} 失败：{}", dir.display(), e))
            })?;

            let resized = self.resize_square(&source, size, config)?;
            let png = Self::encode_png(&resized, config)?;

            for variant in VARIANTS {
                let path = config.output_path(density, variant);
                Self::write_icon(&path, &png)?;
                log::info!(
                    "🖼️ 已生成 {} {}：{}x{} -> {}",
                    density.label(),
                    variant.as_str(),
                    size,
                    size,
                    path.display()
                );
                report.icons.push(GeneratedIcon {
                    density,
                    variant,
                    size,
                    path,
                    bytes: png.len(),
                });
            }

            log::debug!(
                "⏱️ {} 完成，耗时 {}ms",
                density.label(),
                density_started.elapsed().as_millis()
            );
        }

        log::info!(
            "✅ 全部图标生成完成：{} 个文件，共 {} 字节，总耗时 {}ms",
            report.icons.len(),
            report.total_bytes(),
            total_started.elapsed().as_millis()
        );

        Ok(report)
    }

    /// 覆盖写入单个图标文件。
    fn write_icon(path: &Path, png: &[u8]) -> Result<(), IconError> {
        fs::write(path, png)
            .map_err(|e| IconError::FileSystem(format!("写入 {} 失败：{}", path.display(), e)))
    }
}

#[cfg(test)]
mod tests {
    use super::IconGenerator;
    use crate::icon_generator::{Density, IconConfig, IconError, IconVariant};
    use image::{Rgb, RgbImage};

    #[test]
    fn missing_source_leaves_filesystem_untouched() {
        let dir = tempfile::tempdir().expect("tempdir");
        let generator = IconGenerator::new(IconConfig::with_base_dir(dir.path()));

        let err = generator.generate_icons().expect_err("source is missing");
        assert!(matches!(err, IconError::SourceNotFound(_)));
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn report_lists_both_variants_per_density() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconConfig::with_base_dir(dir.path());
        std::fs::create_dir_all(config.source_path().parent().expect("parent")).expect("mkdir");
        RgbImage::from_pixel(64, 64, Rgb([0, 128, 255]))
            .save(config.source_path())
            .expect("write source");

        let generator = IconGenerator::new(config);
        let report = generator.generate_icons().expect("generation succeeds");

        assert_eq!(report.icons.len(), 10);
        let xhdpi = report.icons_for(Density::Xhdpi);
        assert_eq!(xhdpi.len(), 2);
        assert_eq!(xhdpi[0].variant, IconVariant::Standard);
        assert_eq!(xhdpi[1].variant, IconVariant::Round);
        assert!(xhdpi.iter().all(|icon| icon.size == 96));
        assert_eq!(xhdpi[0].bytes, xhdpi[1].bytes);
    }

    #[test]
    fn corrupt_source_surfaces_decode_error() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = IconConfig::with_base_dir(dir.path());
        std::fs::create_dir_all(config.source_path().parent().expect("parent")).expect("mkdir");
        std::fs::write(config.source_path(), b"definitely not a png").expect("write");

        let err = IconGenerator::new(config)
            .generate_icons()
            .expect_err("decode must fail");
        assert!(matches!(err, IconError::Decode(_)));
        assert!(!err.is_precondition());
    }
}
