//! 旧版 (已废弃) dataspace.
//!
//! 位域布局引入之前, dataspace 是一组平铺的枚举值, 全部落在低 16 位,
//! standard/transfer/range 字段均为 0. 这些值只能整体比较.

use std::fmt;

use crate::hal::*;

/// 旧版 dataspace
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum LegacyDataspace {
    /// 未知
    Unknown,
    /// 任意 (非颜色数据)
    Arbitrary,
    /// JPEG File Interchange Format
    Jfif,
    /// BT.601 625 行, 有限范围
    Bt601_625,
    /// BT.601 525 行, 有限范围
    Bt601_525,
    /// BT.709, 有限范围
    Bt709,
    /// 线性 sRGB
    SrgbLinear,
    /// sRGB
    Srgb,
}

impl LegacyDataspace {
    /// 所有旧版 dataspace, 按 HAL 数值升序
    pub const ALL: &'static [LegacyDataspace] = &[
        Self::Unknown,
        Self::Arbitrary,
        Self::Jfif,
        Self::Bt601_625,
        Self::Bt601_525,
        Self::Bt709,
        Self::SrgbLinear,
        Self::Srgb,
    ];

    /// 按低 16 位查找, 不匹配时返回 None
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code & HAL_DATASPACE_LEGACY_MASK {
            HAL_DATASPACE_UNKNOWN => Self::Unknown,
            HAL_DATASPACE_ARBITRARY => Self::Arbitrary,
            HAL_DATASPACE_JFIF => Self::Jfif,
            HAL_DATASPACE_BT601_625 => Self::Bt601_625,
            HAL_DATASPACE_BT601_525 => Self::Bt601_525,
            HAL_DATASPACE_BT709 => Self::Bt709,
            HAL_DATASPACE_SRGB_LINEAR => Self::SrgbLinear,
            HAL_DATASPACE_SRGB => Self::Srgb,
            _ => return None,
        })
    }

    /// HAL 数值 (只占低 16 位)
    pub fn code(&self) -> u32 {
        match self {
            Self::Unknown => HAL_DATASPACE_UNKNOWN,
            Self::Arbitrary => HAL_DATASPACE_ARBITRARY,
            Self::Jfif => HAL_DATASPACE_JFIF,
            Self::Bt601_625 => HAL_DATASPACE_BT601_625,
            Self::Bt601_525 => HAL_DATASPACE_BT601_525,
            Self::Bt709 => HAL_DATASPACE_BT709,
            Self::SrgbLinear => HAL_DATASPACE_SRGB_LINEAR,
            Self::Srgb => HAL_DATASPACE_SRGB,
        }
    }

    /// HAL 符号名 (去掉 `HAL_DATASPACE_` 前缀)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Arbitrary => "ARBITRARY",
            Self::Jfif => "JFIF",
            Self::Bt601_625 => "BT601_625",
            Self::Bt601_525 => "BT601_525",
            Self::Bt709 => "BT709",
            Self::SrgbLinear => "SRGB_LINEAR",
            Self::Srgb => "SRGB",
        }
    }

    /// 日志用描述.
    ///
    /// `Unknown` 与 `Bt709` 没有描述: 旧版查表里 BT709 一项以
    /// `HAL_DATASPACE_V0_BT709` 为键, 其低 16 位为 0, 永远匹配不到 0x0104.
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::Jfif => "(deprecated) JFIF (BT601_625, SMPTE_170M Full range)",
            Self::Bt601_625 => "(deprecated) BT601_625 (BT601_625, SMPTE_170M Limited range)",
            Self::Bt601_525 => "(deprecated) BT601_525 (BT601_525, SMPTE_170M Limited range)",
            Self::SrgbLinear => "(deprecated) SRGB Linear Full range",
            Self::Srgb => "(deprecated) sRGB",
            Self::Arbitrary => "ARBITRARY",
            Self::Bt709 | Self::Unknown => return None,
        })
    }
}

impl fmt::Display for LegacyDataspace {
    /// 与 `decode_standard` 对旧版编码的输出一致
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => f.write_str(label),
            None => write!(
                f,
                "Unknown deprecated dataspace code {HAL_DATASPACE_STANDARD_UNSPECIFIED}"
            ),
        }
    }
}
