//! Android 屏幕密度档位与图标边长的固定映射。

/// 屏幕密度档位。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Density {
    Mdpi,
    Hdpi,
    Xhdpi,
    Xxhdpi,
    Xxxhdpi,
}

/// 固定生成顺序：密度从低到高。
pub const DENSITIES: [Density; 5] = [
    Density::Mdpi,
    Density::Hdpi,
    Density::Xhdpi,
    Density::Xxhdpi,
    Density::Xxxhdpi,
];

impl Density {
    /// 目录后缀中使用的档位名，例如 `mipmap-xhdpi` 中的 `xhdpi`。
    pub fn label(self) -> &'static str {
        match self {
            Self::Mdpi => "mdpi",
            Self::Hdpi => "hdpi",
            Self::Xhdpi => "xhdpi",
            Self::Xxhdpi => "xxhdpi",
            Self::Xxxhdpi => "xxxhdpi",
        }
    }

    /// 启动器图标边长（像素）。
    pub fn icon_size(self) -> u32 {
        match self {
            Self::Mdpi => 48,
            Self::Hdpi => 72,
            Self::Xhdpi => 96,
            Self::Xxhdpi => 144,
            Self::Xxxhdpi => 192,
        }
    }

    pub fn mipmap_dir_name(self) -> String {
        format!("mipmap-{}", self.label())
    }
}
