//! # 数据源与中间模型
//!
//! ## 设计思路
//!
//! 将“输入图像”和“生成结果”解耦：
//! - `SourceImage` 表示已解码并统一为 RGBA 的源图
//! - `IconVariant` 表示同一密度下的两种输出文件
//! - `GeneratedIcon` / `GenerationReport` 表示已写入磁盘的结果，供入口层打印汇总

use std::path::PathBuf;

use image::RgbaImage;

use super::Density;

/// 已加载并归一化为 RGBA 的源图，整个生成过程中只读。
pub struct SourceImage {
    pub(crate) rgba: RgbaImage,
    /// 解码前的原始色彩模式（用于日志）。
    pub(crate) original_color: image::ColorType,
}

impl SourceImage {
    pub fn width(&self) -> u32 {
        self.rgba.width()
    }

    pub fn height(&self) -> u32 {
        self.rgba.height()
    }

    pub fn original_color(&self) -> image::ColorType {
        self.original_color
    }
}

/// 启动器图标变体。
///
/// 圆形变体与标准变体内容完全一致，不做圆形遮罩。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IconVariant {
    Standard,
    Round,
}

pub const VARIANTS: [IconVariant; 2] = [IconVariant::Standard, IconVariant::Round];

impl IconVariant {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Round => "round",
        }
    }
}

/// 单个已写入的图标文件。
#[derive(Debug, Clone)]
pub struct GeneratedIcon {
    pub density: Density,
    pub variant: IconVariant,
    pub size: u32,
    pub path: PathBuf,
    /// 编码后 PNG 字节数。
    pub bytes: usize,
}

/// 一次完整生成的结果。
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub source: PathBuf,
    pub icons: Vec<GeneratedIcon>,
}

impl GenerationReport {
    /// 给定密度的输出条目，按标准、圆形顺序。
    pub fn icons_for(&self, density: Density) -> Vec<&GeneratedIcon> {
        self.icons
            .iter()
            .filter(|icon| icon.density == density)
            .collect()
    }

    pub fn total_bytes(&self) -> usize {
        self.icons.iter().map(|icon| icon.bytes).sum()
    }
}
