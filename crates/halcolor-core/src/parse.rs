//! 文本形式的色彩编码解析.
//!
//! 支持的写法:
//! - 十进制: `281083904`
//! - 十六进制: `0x10c10000`
//! - 符号名: `STANDARD_BT709`, `HAL_DATASPACE_TRANSFER_SRGB`, `jfif`, `V0_SRGB`
//! - 以 `|` 组合: `STANDARD_BT709|TRANSFER_SMPTE_170M|RANGE_LIMITED`
//!
//! 符号名不区分大小写, `HAL_DATASPACE_` / `HAL_COLOR_MODE_` 前缀可省略.
//!
//! 每个片段占用它涉及的位域, 同一位域被两个片段指定时报 `FieldConflict`.
//! 数值片段按非零位涉及的掩码占用位域, 值为 0 的数值片段不占用.
//! 旧版符号 (如 `JFIF`) 同时占用 legacy 与 standard: 旧版编码要求 standard 为 0.

use log::debug;

use crate::color_mode::ColorMode;
use crate::dataspace::{DataspaceRange, DataspaceStandard, DataspaceTransfer, LegacyDataspace};
use crate::error::{HalColorError, HalColorResult};
use crate::hal::*;

/// 新版组合 dataspace 符号
const COMPOSITES: &[(&str, u32)] = &[
    ("V0_SRGB_LINEAR", HAL_DATASPACE_V0_SRGB_LINEAR),
    ("V0_SRGB", HAL_DATASPACE_V0_SRGB),
    ("V0_JFIF", HAL_DATASPACE_V0_JFIF),
    ("V0_BT601_625", HAL_DATASPACE_V0_BT601_625),
    ("V0_BT601_525", HAL_DATASPACE_V0_BT601_525),
    ("V0_BT709", HAL_DATASPACE_V0_BT709),
    ("DISPLAY_P3", HAL_DATASPACE_DISPLAY_P3),
];

/// 符号所占的位域, 用于检测重复指定
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Standard,
    Transfer,
    Range,
    Legacy,
}

impl Field {
    fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::Transfer => "transfer",
            Self::Range => "range",
            Self::Legacy => "legacy",
        }
    }

    fn index(self) -> usize {
        match self {
            Self::Standard => 0,
            Self::Transfer => 1,
            Self::Range => 2,
            Self::Legacy => 3,
        }
    }
}

/// 数值片段按掩码判断占用的位域
const FIELD_MASKS: [(Field, u32); 4] = [
    (Field::Standard, HAL_DATASPACE_STANDARD_MASK),
    (Field::Transfer, HAL_DATASPACE_TRANSFER_MASK),
    (Field::Range, HAL_DATASPACE_RANGE_MASK),
    (Field::Legacy, HAL_DATASPACE_LEGACY_MASK),
];

/// 已被片段占用的位域
#[derive(Default)]
struct FieldTracker {
    owners: [Option<String>; 4],
}

impl FieldTracker {
    fn claim(&mut self, field: Field, token: &str) -> HalColorResult<()> {
        let slot = &mut self.owners[field.index()];
        if let Some(first) = slot {
            return Err(HalColorError::FieldConflict {
                field: field.name(),
                first: first.clone(),
                second: token.to_string(),
            });
        }
        *slot = Some(token.to_string());
        Ok(())
    }
}

/// 解析 dataspace 文本, 多个片段按位或组合
pub fn parse_dataspace(text: &str) -> HalColorResult<u32> {
    let text = text.trim();
    if text.is_empty() {
        return Err(HalColorError::EmptyInput);
    }

    let mut tracker = FieldTracker::default();
    let mut value = 0u32;
    for token in text.split('|').map(str::trim) {
        if token.is_empty() {
            return Err(HalColorError::InvalidCode(text.to_string()));
        }
        if starts_numeric(token) {
            let bits = parse_u32(token)?;
            for (field, mask) in FIELD_MASKS {
                if bits & mask != 0 {
                    tracker.claim(field, token)?;
                }
            }
            value |= bits;
            continue;
        }
        let (bits, fields) = resolve_dataspace_symbol(token)?;
        for field in fields {
            tracker.claim(*field, token)?;
        }
        debug!("dataspace 符号 {token} => {bits:#010x}");
        value |= bits;
    }
    Ok(value)
}

/// 解析色彩模式文本
pub fn parse_color_mode(text: &str) -> HalColorResult<i32> {
    let token = text.trim();
    if token.is_empty() {
        return Err(HalColorError::EmptyInput);
    }
    if starts_numeric(token) {
        return parse_i32(token);
    }

    let upper = token.to_ascii_uppercase();
    let name = upper.strip_prefix("HAL_COLOR_MODE_").unwrap_or(&upper);
    let mode = ColorMode::ALL
        .iter()
        .find(|mode| {
            // 描述里 STANDARD_* 省略了前缀, 两种写法都接受
            mode.name() == name || mode.name().strip_prefix("STANDARD_") == Some(name)
        })
        .ok_or_else(|| HalColorError::UnknownName(token.to_string()))?;
    debug!("色彩模式符号 {token} => {}", mode.code());
    Ok(mode.code())
}

fn resolve_dataspace_symbol(token: &str) -> HalColorResult<(u32, &'static [Field])> {
    let upper = token.to_ascii_uppercase();
    let name = upper.strip_prefix("HAL_DATASPACE_").unwrap_or(&upper);
    let unknown = || HalColorError::UnknownName(token.to_string());

    if let Some(rest) = name.strip_prefix("STANDARD_") {
        let standard = DataspaceStandard::ALL
            .iter()
            .find(|s| s.name() == rest)
            .ok_or_else(unknown)?;
        return Ok((standard.bits(), &[Field::Standard]));
    }
    if let Some(rest) = name.strip_prefix("TRANSFER_") {
        let transfer = DataspaceTransfer::ALL
            .iter()
            .find(|t| t.name() == rest)
            .ok_or_else(unknown)?;
        return Ok((transfer.bits(), &[Field::Transfer]));
    }
    if let Some(rest) = name.strip_prefix("RANGE_") {
        let range = DataspaceRange::ALL
            .iter()
            .find(|r| r.name() == rest)
            .ok_or_else(unknown)?;
        return Ok((range.bits(), &[Field::Range]));
    }
    if let Some((_, bits)) = COMPOSITES.iter().find(|(n, _)| *n == name) {
        return Ok((*bits, &[Field::Standard, Field::Transfer, Field::Range]));
    }
    if let Some(legacy) = LegacyDataspace::ALL.iter().find(|l| l.name() == name) {
        return Ok((legacy.code(), &[Field::Standard, Field::Legacy]));
    }
    Err(unknown())
}

fn starts_numeric(token: &str) -> bool {
    token
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit() || c == '-' || c == '+')
}

fn split_radix(token: &str) -> (&str, u32) {
    match token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        Some(hex) => (hex, 16),
        None => (token, 10),
    }
}

fn parse_u32(token: &str) -> HalColorResult<u32> {
    let (digits, radix) = split_radix(token);
    u32::from_str_radix(digits, radix)
        .map_err(|_| HalColorError::InvalidCode(token.to_string()))
}

fn parse_i32(token: &str) -> HalColorResult<i32> {
    let (digits, radix) = split_radix(token);
    if radix == 16 {
        // 十六进制按位模式解释, 允许 0xffffffff 表示 -1
        return u32::from_str_radix(digits, 16)
            .map(|v| v as i32)
            .map_err(|_| HalColorError::InvalidCode(token.to_string()));
    }
    digits
        .parse::<i32>()
        .map_err(|_| HalColorError::InvalidCode(token.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_dataspace_numeric() {
        assert_eq!(parse_dataspace("281083904"), Ok(HAL_DATASPACE_V0_BT709));
        assert_eq!(parse_dataspace("0x10c10000"), Ok(HAL_DATASPACE_V0_BT709));
        assert_eq!(parse_dataspace(" 0X201 "), Ok(HAL_DATASPACE_SRGB));
    }

    #[test]
    fn test_parse_dataspace_symbols() {
        assert_eq!(
            parse_dataspace("STANDARD_BT709|TRANSFER_SMPTE_170M|RANGE_LIMITED"),
            Ok(HAL_DATASPACE_V0_BT709)
        );
        assert_eq!(
            parse_dataspace("hal_dataspace_standard_dci_p3 | transfer_srgb | range_full"),
            Ok(HAL_DATASPACE_DISPLAY_P3)
        );
        assert_eq!(parse_dataspace("jfif"), Ok(HAL_DATASPACE_JFIF));
        assert_eq!(parse_dataspace("V0_SRGB"), Ok(HAL_DATASPACE_V0_SRGB));
    }

    #[test]
    fn test_parse_dataspace_mixed_numeric_and_symbol() {
        assert_eq!(
            parse_dataspace("STANDARD_BT2020|0x01c00000"),
            Ok(HAL_DATASPACE_STANDARD_BT2020 | HAL_DATASPACE_TRANSFER_ST2084)
        );
    }

    #[test]
    fn test_parse_dataspace_field_conflict() {
        let err = parse_dataspace("STANDARD_BT709|STANDARD_BT2020").unwrap_err();
        assert_eq!(
            err,
            HalColorError::FieldConflict {
                field: "standard",
                first: "STANDARD_BT709".to_string(),
                second: "STANDARD_BT2020".to_string(),
            }
        );
        assert!(matches!(
            parse_dataspace("V0_SRGB|RANGE_LIMITED"),
            Err(HalColorError::FieldConflict { field: "range", .. })
        ));
    }

    #[test]
    fn test_parse_dataspace_numeric_claims_fields() {
        // 0x20000 落在 standard 位域, 不能悄悄并入 BT709
        assert_eq!(
            parse_dataspace("STANDARD_BT709|0x20000"),
            Err(HalColorError::FieldConflict {
                field: "standard",
                first: "STANDARD_BT709".to_string(),
                second: "0x20000".to_string(),
            })
        );
        assert!(matches!(
            parse_dataspace("0x10c10000|RANGE_FULL"),
            Err(HalColorError::FieldConflict { field: "range", .. })
        ));
        assert!(matches!(
            parse_dataspace("0x101|0x0201"),
            Err(HalColorError::FieldConflict { field: "legacy", .. })
        ));
        // 不相交的数值片段和 0 照常组合
        assert_eq!(
            parse_dataspace("0x10000|0x00c00000|0x10000000|0"),
            Ok(HAL_DATASPACE_V0_BT709)
        );
    }

    #[test]
    fn test_parse_dataspace_legacy_conflicts_with_standard() {
        assert_eq!(
            parse_dataspace("JFIF|STANDARD_BT709"),
            Err(HalColorError::FieldConflict {
                field: "standard",
                first: "JFIF".to_string(),
                second: "STANDARD_BT709".to_string(),
            })
        );
        assert!(matches!(
            parse_dataspace("STANDARD_BT709|SRGB"),
            Err(HalColorError::FieldConflict { field: "standard", .. })
        ));
        assert!(matches!(
            parse_dataspace("V0_SRGB|SRGB_LINEAR"),
            Err(HalColorError::FieldConflict { field: "standard", .. })
        ));
        assert!(matches!(
            parse_dataspace("0x10000|JFIF"),
            Err(HalColorError::FieldConflict { field: "standard", .. })
        ));
        // transfer / range 不与旧版冲突
        assert_eq!(
            parse_dataspace("JFIF|TRANSFER_SRGB"),
            Ok(HAL_DATASPACE_JFIF | HAL_DATASPACE_TRANSFER_SRGB)
        );
    }

    #[test]
    fn test_parse_dataspace_errors() {
        assert_eq!(parse_dataspace("   "), Err(HalColorError::EmptyInput));
        assert_eq!(
            parse_dataspace("STANDARD_BT709|"),
            Err(HalColorError::InvalidCode("STANDARD_BT709|".to_string()))
        );
        assert_eq!(
            parse_dataspace("0xzz"),
            Err(HalColorError::InvalidCode("0xzz".to_string()))
        );
        assert_eq!(
            parse_dataspace("4294967296"),
            Err(HalColorError::InvalidCode("4294967296".to_string()))
        );
        assert_eq!(
            parse_dataspace("STANDARD_BT999"),
            Err(HalColorError::UnknownName("STANDARD_BT999".to_string()))
        );
        assert_eq!(
            parse_dataspace("bogus"),
            Err(HalColorError::UnknownName("bogus".to_string()))
        );
    }

    #[test]
    fn test_parse_color_mode() {
        assert_eq!(parse_color_mode("7"), Ok(HAL_COLOR_MODE_SRGB));
        assert_eq!(parse_color_mode("-3"), Ok(-3));
        assert_eq!(parse_color_mode("0xffffffff"), Ok(-1));
        assert_eq!(
            parse_color_mode("HAL_COLOR_MODE_DISPLAY_P3"),
            Ok(HAL_COLOR_MODE_DISPLAY_P3)
        );
        assert_eq!(parse_color_mode("bt709"), Ok(HAL_COLOR_MODE_STANDARD_BT709));
        assert_eq!(
            parse_color_mode("standard_bt601_625"),
            Ok(HAL_COLOR_MODE_STANDARD_BT601_625)
        );
    }

    #[test]
    fn test_parse_color_mode_errors() {
        assert_eq!(parse_color_mode(""), Err(HalColorError::EmptyInput));
        assert_eq!(
            parse_color_mode("RAINBOW"),
            Err(HalColorError::UnknownName("RAINBOW".to_string()))
        );
        assert_eq!(
            parse_color_mode("12abc"),
            Err(HalColorError::InvalidCode("12abc".to_string()))
        );
    }
}
