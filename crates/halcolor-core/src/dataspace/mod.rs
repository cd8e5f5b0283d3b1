//! Dataspace 解码.
//!
//! 把打包的 dataspace 整数拆成 standard/transfer/range 三个位域, 输出日志用的可读描述.
//! 无法识别的取值不会报错, 而是返回带原始数值的 "Unknown ..." 描述.

mod legacy;
mod range;
mod standard;
mod transfer;

use std::fmt;

pub use legacy::LegacyDataspace;
pub use range::DataspaceRange;
pub use standard::DataspaceStandard;
pub use transfer::DataspaceTransfer;

use crate::hal::HAL_DATASPACE_STANDARD_MASK;

/// 打包的 dataspace 值
///
/// `Display` 输出与 [`dataspace_details`] 相同.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Dataspace(pub u32);

impl Dataspace {
    /// 由三个位域组合
    pub fn from_parts(
        standard: DataspaceStandard,
        transfer: DataspaceTransfer,
        range: DataspaceRange,
    ) -> Self {
        Self(standard.bits() | transfer.bits() | range.bits())
    }

    /// 原始数值
    pub fn bits(&self) -> u32 {
        self.0
    }

    pub fn standard(&self) -> DataspaceStandard {
        DataspaceStandard::from_dataspace(self.0)
    }

    pub fn transfer(&self) -> DataspaceTransfer {
        DataspaceTransfer::from_dataspace(self.0)
    }

    pub fn range(&self) -> DataspaceRange {
        DataspaceRange::from_dataspace(self.0)
    }

    /// standard 字段为 0 时才按旧版 dataspace 解释
    pub fn is_legacy(&self) -> bool {
        self.0 & HAL_DATASPACE_STANDARD_MASK == 0
    }

    /// 旧版 dataspace (仅当 standard 字段为 0 且低 16 位可识别)
    pub fn legacy(&self) -> Option<LegacyDataspace> {
        if self.is_legacy() {
            LegacyDataspace::from_code(self.0)
        } else {
            None
        }
    }

    /// standard 描述, 与 [`decode_standard`] 相同
    ///
    /// 与 `self.standard().to_string()` 不同, standard 为 0 时会按旧版 dataspace 再查一次.
    pub fn standard_label(&self) -> String {
        let standard = self.standard();
        if standard != DataspaceStandard::Unspecified {
            return standard.to_string();
        }
        // 未命中时报告的是掩码后的 standard 值 (恒为 0), 不是低 16 位.
        match self.legacy() {
            Some(legacy) => legacy.to_string(),
            None => format!("Unknown deprecated dataspace code {}", standard.bits()),
        }
    }
}

impl From<u32> for Dataspace {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<Dataspace> for u32 {
    fn from(dataspace: Dataspace) -> Self {
        dataspace.0
    }
}

impl fmt::Display for Dataspace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.standard_label(),
            self.transfer(),
            self.range()
        )
    }
}

/// 解码 standard 字段
///
/// standard 为 0 时按低 16 位查找旧版 dataspace.
pub fn decode_standard(dataspace: u32) -> String {
    Dataspace(dataspace).standard_label()
}

/// 解码 transfer 字段
pub fn decode_transfer(dataspace: u32) -> String {
    DataspaceTransfer::from_dataspace(dataspace).to_string()
}

/// 解码 range 字段
pub fn decode_range(dataspace: u32) -> String {
    DataspaceRange::from_dataspace(dataspace).to_string()
}

/// 完整描述: "standard transfer range", 以单个空格分隔
pub fn dataspace_details(dataspace: u32) -> String {
    Dataspace(dataspace).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hal::*;

    #[test]
    fn test_decode_standard_known() {
        assert_eq!(decode_standard(HAL_DATASPACE_STANDARD_BT709), "BT709");
        assert_eq!(decode_standard(HAL_DATASPACE_STANDARD_BT601_625), "BT601_625");
        assert_eq!(
            decode_standard(HAL_DATASPACE_STANDARD_BT2020_CONSTANT_LUMINANCE),
            "BT2020 (constant luminance)"
        );
        assert_eq!(decode_standard(HAL_DATASPACE_STANDARD_DCI_P3), "DCI-P3");
        assert_eq!(decode_standard(HAL_DATASPACE_STANDARD_ADOBE_RGB), "AdobeRGB");
    }

    #[test]
    fn test_decode_standard_deprecated() {
        assert_eq!(
            decode_standard(HAL_DATASPACE_JFIF),
            "(deprecated) JFIF (BT601_625, SMPTE_170M Full range)"
        );
        assert_eq!(decode_standard(HAL_DATASPACE_SRGB), "(deprecated) sRGB");
        assert_eq!(
            decode_standard(HAL_DATASPACE_SRGB_LINEAR),
            "(deprecated) SRGB Linear Full range"
        );
        assert_eq!(decode_standard(HAL_DATASPACE_ARBITRARY), "ARBITRARY");
    }

    #[test]
    fn test_decode_standard_unknown_deprecated_reports_masked_value() {
        assert_eq!(
            decode_standard(HAL_DATASPACE_UNKNOWN),
            "Unknown deprecated dataspace code 0"
        );
        // 低 16 位不在旧版表中, 消息里仍是掩码后的 0
        assert_eq!(decode_standard(0x1234), "Unknown deprecated dataspace code 0");
    }

    #[test]
    fn test_decode_standard_legacy_bt709_is_unknown() {
        // 旧版查表的 BT709 键是 V0_BT709, 低 16 位为 0, 0x0104 命中不了
        assert_eq!(
            decode_standard(HAL_DATASPACE_BT709),
            "Unknown deprecated dataspace code 0"
        );
        assert_eq!(
            dataspace_details(HAL_DATASPACE_BT709),
            "Unknown deprecated dataspace code 0 Unspecified Range Unspecified"
        );
    }

    #[test]
    fn test_standard_label_vs_lone_field_display() {
        let ds = Dataspace(HAL_DATASPACE_JFIF);
        assert_eq!(
            ds.standard_label(),
            "(deprecated) JFIF (BT601_625, SMPTE_170M Full range)"
        );
        // 单独的 standard 字段没有旧版上下文
        assert_eq!(ds.standard().to_string(), "Unknown dataspace code 0");

        let ds = Dataspace(HAL_DATASPACE_V0_SRGB);
        assert_eq!(ds.standard_label(), ds.standard().to_string());
    }

    #[test]
    fn test_decode_standard_unknown_nonzero() {
        let reserved = 63 << HAL_DATASPACE_STANDARD_SHIFT;
        let text = decode_standard(reserved | HAL_DATASPACE_TRANSFER_SRGB);
        assert_eq!(text, format!("Unknown dataspace code {reserved}"));
    }

    #[test]
    fn test_nonzero_standard_skips_legacy_lookup() {
        // 低 16 位恰好是 JFIF, 但 standard 非 0, 以位域为准
        assert_eq!(
            decode_standard(HAL_DATASPACE_STANDARD_BT709 | HAL_DATASPACE_JFIF),
            "BT709"
        );
    }

    #[test]
    fn test_decode_transfer_and_range() {
        assert_eq!(decode_transfer(HAL_DATASPACE_TRANSFER_GAMMA2_2), "gamma 2.2");
        assert_eq!(decode_transfer(0), "Unspecified");
        assert_eq!(decode_range(HAL_DATASPACE_RANGE_LIMITED), "Limited range");
        assert_eq!(decode_range(0), "Range Unspecified");
    }

    #[test]
    fn test_dataspace_details_order() {
        assert_eq!(
            dataspace_details(HAL_DATASPACE_V0_BT709),
            "BT709 SMPTE_170M Limited range"
        );
        assert_eq!(
            dataspace_details(HAL_DATASPACE_DISPLAY_P3),
            "DCI-P3 sRGB Full range"
        );
    }

    #[test]
    fn test_dataspace_details_legacy() {
        assert_eq!(
            dataspace_details(HAL_DATASPACE_SRGB),
            "(deprecated) sRGB Unspecified Range Unspecified"
        );
    }

    #[test]
    fn test_dataspace_from_parts() {
        let ds = Dataspace::from_parts(
            DataspaceStandard::Bt2020,
            DataspaceTransfer::St2084,
            DataspaceRange::Full,
        );
        assert_eq!(ds.standard(), DataspaceStandard::Bt2020);
        assert_eq!(ds.transfer(), DataspaceTransfer::St2084);
        assert_eq!(ds.range(), DataspaceRange::Full);
        assert!(!ds.is_legacy());
        assert_eq!(ds.legacy(), None);
        assert_eq!(ds.to_string(), "BT2020 SMPTE 2084 Full range");
    }

    #[test]
    fn test_dataspace_legacy_accessor() {
        assert_eq!(
            Dataspace(HAL_DATASPACE_BT601_525).legacy(),
            Some(LegacyDataspace::Bt601_525)
        );
        assert_eq!(Dataspace(HAL_DATASPACE_V0_BT709).legacy(), None);
    }
}
