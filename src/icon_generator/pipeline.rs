//! # 解码与变换流水线模块
//!
//! ## 设计思路
//!
//! 将“文件 → 图像 → RGBA → 方形缩放 → PNG 字节”的过程集中管理。
//! 每个密度只编码一次，标准与圆形两个文件写入同一份字节。
//!
//! ## 实现思路
//!
//! 1. 读取并解码源图，记录原始色彩模式
//! 2. 非 RGBA 统一转换为 RGBA（补全不透明 alpha）
//! 3. 使用 `fast_image_resize` 的 Lanczos3 卷积缩放到 `size x size`，
//!    失败时回退 `image::resize_exact`
//! 4. 以最高压缩等级编码 PNG

use std::path::Path;

use fast_image_resize as fr;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, RgbaImage};

use super::source::SourceImage;
use super::{IconConfig, IconError, IconGenerator};

impl IconGenerator {
    /// 从磁盘解码源图并归一化为 RGBA。
    pub(crate) fn load_source(&self, path: &Path) -> Result<SourceImage, IconError> {
        let read_failed = |e: std::io::Error| {
            IconError::FileSystem(format!("读取源图 {} 失败：{}", path.display(), e))
        };

        // 按文件内容而非扩展名识别格式
        let decoded = image::ImageReader::open(path)
            .map_err(read_failed)?
            .with_guessed_format()
            .map_err(read_failed)?
            .decode()
            .map_err(|e| match e {
                image::ImageError::IoError(io) => read_failed(io),
                other => IconError::Decode(format!("源图 {} 解码失败：{}", path.display(), other)),
            })?;

        let original_color = decoded.color();
        let rgba = match decoded {
            DynamicImage::ImageRgba8(rgba) => rgba,
            other => {
                log::debug!("色彩模式 {:?} 转换为 RGBA8", original_color);
                other.into_rgba8()
            }
        };

        Ok(SourceImage {
            rgba,
            original_color,
        })
    }

    /// 将源图非等比拉伸为 `size x size`。
    pub(crate) fn resize_square(
        &self,
        source: &SourceImage,
        size: u32,
        config: &IconConfig,
    ) -> Result<RgbaImage, IconError> {
        if size == 0 {
            return Err(IconError::Resize("目标尺寸不能为 0".to_string()));
        }

        match Self::resize_with_fast_image_resize(&source.rgba, size, size, config.resize_filter) {
            Ok(resized) => Ok(resized),
            Err(err) => {
                log::warn!(
                    "⚠️ fast_image_resize 缩放失败，回退 image::resize_exact：{}",
                    err
                );
                let fallback = DynamicImage::ImageRgba8(source.rgba.clone())
                    .resize_exact(size, size, config.resize_filter);
                Ok(fallback.into_rgba8())
            }
        }
    }

    fn resize_with_fast_image_resize(
        src: &RgbaImage,
        target_width: u32,
        target_height: u32,
        filter: image::imageops::FilterType,
    ) -> Result<RgbaImage, IconError> {
        let (src_width, src_height) = src.dimensions();

        let src_image =
            fr::images::ImageRef::new(src_width, src_height, src.as_raw(), fr::PixelType::U8x4)
                .map_err(|e| IconError::Resize(format!("构建源图像缓冲失败：{}", e)))?;

        let mut dst_image = fr::images::Image::new(target_width, target_height, fr::PixelType::U8x4);

        let mut resizer = fr::Resizer::new();
        let options = fr::ResizeOptions::new().resize_alg(fr::ResizeAlg::Convolution(
            Self::to_fast_filter(filter),
        ));

        resizer
            .resize(&src_image, &mut dst_image, Some(&options))
            .map_err(|e| IconError::Resize(format!("fast_image_resize 执行失败：{}", e)))?;

        RgbaImage::from_raw(target_width, target_height, dst_image.into_vec())
            .ok_or_else(|| IconError::Resize("fast_image_resize 输出缓冲长度异常".to_string()))
    }

    fn to_fast_filter(filter: image::imageops::FilterType) -> fr::FilterType {
        match filter {
            image::imageops::FilterType::Nearest => fr::FilterType::Box,
            image::imageops::FilterType::Triangle => fr::FilterType::Bilinear,
            image::imageops::FilterType::CatmullRom => fr::FilterType::CatmullRom,
            image::imageops::FilterType::Gaussian => fr::FilterType::Mitchell,
            image::imageops::FilterType::Lanczos3 => fr::FilterType::Lanczos3,
        }
    }

    /// 以配置的压缩策略编码为 PNG 字节。
    pub(crate) fn encode_png(image: &RgbaImage, config: &IconConfig) -> Result<Vec<u8>, IconError> {
        let mut buf = Vec::new();
        let encoder =
            PngEncoder::new_with_quality(&mut buf, config.png_compression, config.png_filter);
        encoder
            .write_image(
                image.as_raw(),
                image.width(),
                image.height(),
                ExtendedColorType::Rgba8,
            )
            .map_err(|e| IconError::Encode(format!("PNG 编码失败：{}", e)))?;
        Ok(buf)
    }
}
