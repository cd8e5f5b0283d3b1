//! 显示色彩模式.
//!
//! 对标 HAL 的 `android_color_mode_t`. 色彩模式是平铺枚举, 没有位域.

use std::fmt;

use crate::hal::*;

/// 显示管线的色彩模式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum ColorMode {
    /// 面板原生色域
    #[default]
    Native,
    /// BT.601 625 行
    StandardBt601_625,
    /// BT.601 625 行, 原色未调整
    StandardBt601_625Unadjusted,
    /// BT.601 525 行
    StandardBt601_525,
    /// BT.601 525 行, 原色未调整
    StandardBt601_525Unadjusted,
    /// BT.709
    StandardBt709,
    /// DCI-P3 (影院, 伽马 2.6)
    DciP3,
    /// sRGB
    Srgb,
    /// Adobe RGB
    AdobeRgb,
    /// Display P3 (DCI-P3 原色 + sRGB 曲线)
    DisplayP3,
    /// 未知取值
    Unknown(i32),
}

impl ColorMode {
    pub const ALL: &'static [ColorMode] = &[
        Self::Native,
        Self::StandardBt601_625,
        Self::StandardBt601_625Unadjusted,
        Self::StandardBt601_525,
        Self::StandardBt601_525Unadjusted,
        Self::StandardBt709,
        Self::DciP3,
        Self::Srgb,
        Self::AdobeRgb,
        Self::DisplayP3,
    ];

    /// 从 HAL 色彩模式编号创建
    pub fn from_code(code: i32) -> Self {
        match code {
            HAL_COLOR_MODE_NATIVE => Self::Native,
            HAL_COLOR_MODE_STANDARD_BT601_625 => Self::StandardBt601_625,
            HAL_COLOR_MODE_STANDARD_BT601_625_UNADJUSTED => Self::StandardBt601_625Unadjusted,
            HAL_COLOR_MODE_STANDARD_BT601_525 => Self::StandardBt601_525,
            HAL_COLOR_MODE_STANDARD_BT601_525_UNADJUSTED => Self::StandardBt601_525Unadjusted,
            HAL_COLOR_MODE_STANDARD_BT709 => Self::StandardBt709,
            HAL_COLOR_MODE_DCI_P3 => Self::DciP3,
            HAL_COLOR_MODE_SRGB => Self::Srgb,
            HAL_COLOR_MODE_ADOBE_RGB => Self::AdobeRgb,
            HAL_COLOR_MODE_DISPLAY_P3 => Self::DisplayP3,
            _ => Self::Unknown(code),
        }
    }

    /// 获取 HAL 编号
    pub fn code(&self) -> i32 {
        match self {
            Self::Native => HAL_COLOR_MODE_NATIVE,
            Self::StandardBt601_625 => HAL_COLOR_MODE_STANDARD_BT601_625,
            Self::StandardBt601_625Unadjusted => HAL_COLOR_MODE_STANDARD_BT601_625_UNADJUSTED,
            Self::StandardBt601_525 => HAL_COLOR_MODE_STANDARD_BT601_525,
            Self::StandardBt601_525Unadjusted => HAL_COLOR_MODE_STANDARD_BT601_525_UNADJUSTED,
            Self::StandardBt709 => HAL_COLOR_MODE_STANDARD_BT709,
            Self::DciP3 => HAL_COLOR_MODE_DCI_P3,
            Self::Srgb => HAL_COLOR_MODE_SRGB,
            Self::AdobeRgb => HAL_COLOR_MODE_ADOBE_RGB,
            Self::DisplayP3 => HAL_COLOR_MODE_DISPLAY_P3,
            Self::Unknown(code) => *code,
        }
    }

    /// HAL 符号名 (去掉 `HAL_COLOR_MODE_` 前缀)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Native => "NATIVE",
            Self::StandardBt601_625 => "STANDARD_BT601_625",
            Self::StandardBt601_625Unadjusted => "STANDARD_BT601_625_UNADJUSTED",
            Self::StandardBt601_525 => "STANDARD_BT601_525",
            Self::StandardBt601_525Unadjusted => "STANDARD_BT601_525_UNADJUSTED",
            Self::StandardBt709 => "STANDARD_BT709",
            Self::DciP3 => "DCI_P3",
            Self::Srgb => "SRGB",
            Self::AdobeRgb => "ADOBE_RGB",
            Self::DisplayP3 => "DISPLAY_P3",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// 日志用描述.
    ///
    /// 注意 `STANDARD_*` 模式的描述省略了 `STANDARD_`, 如 `HAL_COLOR_MODE_BT709`.
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::Native => "HAL_COLOR_MODE_NATIVE",
            Self::StandardBt601_625 => "HAL_COLOR_MODE_BT601_625",
            Self::StandardBt601_625Unadjusted => "HAL_COLOR_MODE_BT601_625_UNADJUSTED",
            Self::StandardBt601_525 => "HAL_COLOR_MODE_BT601_525",
            Self::StandardBt601_525Unadjusted => "HAL_COLOR_MODE_BT601_525_UNADJUSTED",
            Self::StandardBt709 => "HAL_COLOR_MODE_BT709",
            Self::DciP3 => "HAL_COLOR_MODE_DCI_P3",
            Self::Srgb => "HAL_COLOR_MODE_SRGB",
            Self::AdobeRgb => "HAL_COLOR_MODE_ADOBE_RGB",
            Self::DisplayP3 => "HAL_COLOR_MODE_DISPLAY_P3",
            Self::Unknown(_) => return None,
        })
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "Unknown color mode {}", self.code()),
        }
    }
}

impl From<i32> for ColorMode {
    fn from(code: i32) -> Self {
        Self::from_code(code)
    }
}

/// 解码色彩模式, 直接比较原始值
pub fn decode_color_mode(color_mode: i32) -> String {
    ColorMode::from_code(color_mode).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_color_mode_known() {
        assert_eq!(decode_color_mode(HAL_COLOR_MODE_SRGB), "HAL_COLOR_MODE_SRGB");
        assert_eq!(decode_color_mode(HAL_COLOR_MODE_NATIVE), "HAL_COLOR_MODE_NATIVE");
        assert_eq!(
            decode_color_mode(HAL_COLOR_MODE_STANDARD_BT601_525_UNADJUSTED),
            "HAL_COLOR_MODE_BT601_525_UNADJUSTED"
        );
        assert_eq!(
            decode_color_mode(HAL_COLOR_MODE_DISPLAY_P3),
            "HAL_COLOR_MODE_DISPLAY_P3"
        );
    }

    #[test]
    fn test_decode_color_mode_unknown() {
        assert_eq!(decode_color_mode(10), "Unknown color mode 10");
        assert_eq!(decode_color_mode(-1), "Unknown color mode -1");
    }

    #[test]
    fn test_color_mode_code_roundtrip() {
        for mode in ColorMode::ALL {
            assert_eq!(ColorMode::from(mode.code()), *mode);
        }
    }
}
