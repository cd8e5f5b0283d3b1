//! Dataspace standard 字段 (原色 + YCbCr 矩阵系数).
//!
//! 对标 HAL 的 `HAL_DATASPACE_STANDARD_*`.

use std::fmt;

use crate::hal::*;

/// Dataspace 色彩标准
///
/// 由 `dataspace & HAL_DATASPACE_STANDARD_MASK` 得到.
/// `Unspecified` (0) 表示可能是旧版 dataspace, 需要按低 16 位再查一次.
///
/// 单个字段不含低 16 位, `Display` 不做旧版查找: `Unspecified` 输出
/// "Unknown dataspace code 0". 需要完整描述时用 [`Dataspace::standard_label`]
/// 或 [`decode_standard`].
///
/// [`Dataspace::standard_label`]: super::Dataspace::standard_label
/// [`decode_standard`]: super::decode_standard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[non_exhaustive]
pub enum DataspaceStandard {
    /// 未指定 (旧版 dataspace 的 standard 字段也为 0)
    #[default]
    Unspecified,
    /// ITU-R BT.709 (高清)
    Bt709,
    /// ITU-R BT.601 625 行 (PAL)
    Bt601_625,
    /// BT.601 625 行, 原色未按 BT.709 调整
    Bt601_625Unadjusted,
    /// ITU-R BT.601 525 行 (NTSC)
    Bt601_525,
    /// BT.601 525 行, 原色未按 BT.709 调整
    Bt601_525Unadjusted,
    /// ITU-R BT.2020 非恒定亮度
    Bt2020,
    /// ITU-R BT.2020 恒定亮度
    Bt2020ConstantLuminance,
    /// ITU-R BT.470 M
    Bt470m,
    /// Generic Film
    Film,
    /// SMPTE EG 432-1 / RP 431-2 (DCI-P3)
    DciP3,
    /// Adobe RGB
    AdobeRgb,
    /// 未知取值 (已掩码)
    Unknown(u32),
}

impl DataspaceStandard {
    /// 所有已知取值
    pub const ALL: &'static [DataspaceStandard] = &[
        Self::Unspecified,
        Self::Bt709,
        Self::Bt601_625,
        Self::Bt601_625Unadjusted,
        Self::Bt601_525,
        Self::Bt601_525Unadjusted,
        Self::Bt2020,
        Self::Bt2020ConstantLuminance,
        Self::Bt470m,
        Self::Film,
        Self::DciP3,
        Self::AdobeRgb,
    ];

    /// 从已掩码的 standard 位创建
    pub fn from_bits(bits: u32) -> Self {
        match bits {
            HAL_DATASPACE_STANDARD_UNSPECIFIED => Self::Unspecified,
            HAL_DATASPACE_STANDARD_BT709 => Self::Bt709,
            HAL_DATASPACE_STANDARD_BT601_625 => Self::Bt601_625,
            HAL_DATASPACE_STANDARD_BT601_625_UNADJUSTED => Self::Bt601_625Unadjusted,
            HAL_DATASPACE_STANDARD_BT601_525 => Self::Bt601_525,
            HAL_DATASPACE_STANDARD_BT601_525_UNADJUSTED => Self::Bt601_525Unadjusted,
            HAL_DATASPACE_STANDARD_BT2020 => Self::Bt2020,
            HAL_DATASPACE_STANDARD_BT2020_CONSTANT_LUMINANCE => Self::Bt2020ConstantLuminance,
            HAL_DATASPACE_STANDARD_BT470M => Self::Bt470m,
            HAL_DATASPACE_STANDARD_FILM => Self::Film,
            HAL_DATASPACE_STANDARD_DCI_P3 => Self::DciP3,
            HAL_DATASPACE_STANDARD_ADOBE_RGB => Self::AdobeRgb,
            _ => Self::Unknown(bits),
        }
    }

    /// 从完整 dataspace 提取 standard 字段
    pub fn from_dataspace(dataspace: u32) -> Self {
        Self::from_bits(dataspace & HAL_DATASPACE_STANDARD_MASK)
    }

    /// 获取已掩码的 standard 位
    pub fn bits(&self) -> u32 {
        match self {
            Self::Unspecified => HAL_DATASPACE_STANDARD_UNSPECIFIED,
            Self::Bt709 => HAL_DATASPACE_STANDARD_BT709,
            Self::Bt601_625 => HAL_DATASPACE_STANDARD_BT601_625,
            Self::Bt601_625Unadjusted => HAL_DATASPACE_STANDARD_BT601_625_UNADJUSTED,
            Self::Bt601_525 => HAL_DATASPACE_STANDARD_BT601_525,
            Self::Bt601_525Unadjusted => HAL_DATASPACE_STANDARD_BT601_525_UNADJUSTED,
            Self::Bt2020 => HAL_DATASPACE_STANDARD_BT2020,
            Self::Bt2020ConstantLuminance => HAL_DATASPACE_STANDARD_BT2020_CONSTANT_LUMINANCE,
            Self::Bt470m => HAL_DATASPACE_STANDARD_BT470M,
            Self::Film => HAL_DATASPACE_STANDARD_FILM,
            Self::DciP3 => HAL_DATASPACE_STANDARD_DCI_P3,
            Self::AdobeRgb => HAL_DATASPACE_STANDARD_ADOBE_RGB,
            Self::Unknown(bits) => *bits,
        }
    }

    /// HAL 符号名 (去掉 `HAL_DATASPACE_STANDARD_` 前缀)
    pub fn name(&self) -> &'static str {
        match self {
            Self::Unspecified => "UNSPECIFIED",
            Self::Bt709 => "BT709",
            Self::Bt601_625 => "BT601_625",
            Self::Bt601_625Unadjusted => "BT601_625_UNADJUSTED",
            Self::Bt601_525 => "BT601_525",
            Self::Bt601_525Unadjusted => "BT601_525_UNADJUSTED",
            Self::Bt2020 => "BT2020",
            Self::Bt2020ConstantLuminance => "BT2020_CONSTANT_LUMINANCE",
            Self::Bt470m => "BT470M",
            Self::Film => "FILM",
            Self::DciP3 => "DCI_P3",
            Self::AdobeRgb => "ADOBE_RGB",
            Self::Unknown(_) => "UNKNOWN",
        }
    }

    /// 日志用描述. `Unspecified` 与未知值没有固定描述, 返回 None.
    pub fn label(&self) -> Option<&'static str> {
        Some(match self {
            Self::Bt709 => "BT709",
            Self::Bt601_625 => "BT601_625",
            Self::Bt601_625Unadjusted => "BT601_625_UNADJUSTED",
            Self::Bt601_525 => "BT601_525",
            Self::Bt601_525Unadjusted => "BT601_525_UNADJUSTED",
            Self::Bt2020 => "BT2020",
            Self::Bt2020ConstantLuminance => "BT2020 (constant luminance)",
            Self::Bt470m => "BT470M",
            Self::Film => "FILM",
            Self::DciP3 => "DCI-P3",
            Self::AdobeRgb => "AdobeRGB",
            Self::Unspecified | Self::Unknown(_) => return None,
        })
    }
}

impl fmt::Display for DataspaceStandard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.label() {
            Some(label) => write!(f, "{label}"),
            None => write!(f, "Unknown dataspace code {}", self.bits()),
        }
    }
}
