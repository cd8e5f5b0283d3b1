//! halcolor-probe - 色彩编码探测工具
//!
//! 把命令行给出的 dataspace / 色彩模式编码解码为可读描述, 用于排查图形管线日志.

mod logging;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::process;
use tracing::{debug, info};

use halcolor_core::parse::{parse_color_mode, parse_dataspace};
use halcolor_core::{
    ColorMode, Dataspace, DataspaceRange, DataspaceStandard, DataspaceTransfer, LegacyDataspace,
    decode_color_mode, decode_range, decode_standard, decode_transfer,
};

use logging::LoggingConfig;

/// 色彩编码探测工具
#[derive(Parser, Debug)]
#[command(name = "halcolor-probe", version, about = "图形 HAL 色彩编码探测工具")]
struct Cli {
    /// 待解码的编码: 十进制, 0x 十六进制, 或以 | 组合的符号名
    #[arg(allow_negative_numbers = true)]
    codes: Vec<String>,

    /// 按色彩模式解码 (默认按 dataspace)
    #[arg(short = 'm', long)]
    color_mode: bool,

    /// 列出所有已知常量
    #[arg(long)]
    list: bool,

    /// 输出 JSON 格式
    #[arg(long)]
    json: bool,

    /// 日志目录
    #[arg(long, default_value = "logs")]
    log_dir: String,

    /// 静默模式 (控制台只输出错误)
    #[arg(short, long)]
    quiet: bool,

    /// 日志级别 (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

// ============================================================
// JSON 输出结构体
// ============================================================

/// dataspace 解码结果
#[derive(Debug, Serialize)]
struct DataspaceInfo {
    input: String,
    code: u32,
    hex: String,
    standard: String,
    transfer: String,
    range: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    legacy: Option<&'static str>,
    details: String,
}

/// 色彩模式解码结果
#[derive(Debug, Serialize)]
struct ColorModeInfo {
    input: String,
    code: i32,
    name: &'static str,
    label: String,
}

/// 已知常量
#[derive(Debug, Serialize)]
struct ConstantInfo {
    kind: &'static str,
    name: String,
    value: i64,
    label: String,
}

// ============================================================
// 主逻辑
// ============================================================

fn main() {
    let cli = Cli::parse();

    let log_config = LoggingConfig::from_cli(&cli.log_dir, cli.verbose, cli.quiet);
    if let Err(e) = logging::init(&log_config) {
        eprintln!("警告: 日志初始化失败: {e:#}");
    }

    if !cli.list && cli.codes.is_empty() {
        print_banner();
        return;
    }

    if let Err(e) = run(&cli) {
        eprintln!("错误: {e:#}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    if cli.list {
        let constants = list_constants();
        info!("列出已知常量: {} 项", constants.len());
        if cli.json {
            println!("{}", to_json(&constants)?);
        } else {
            for c in &constants {
                println!("{:<10} {:<40} {:>11}  {}", c.kind, c.name, c.value, c.label);
            }
        }
        return Ok(());
    }

    if cli.color_mode {
        let infos = cli
            .codes
            .iter()
            .map(|input| build_color_mode_info(input))
            .collect::<Result<Vec<_>>>()?;
        if cli.json {
            println!("{}", to_json(&infos)?);
        } else {
            for info in &infos {
                println!("{} = {}: {}", info.input, info.code, info.label);
            }
        }
    } else {
        let infos = cli
            .codes
            .iter()
            .map(|input| build_dataspace_info(input))
            .collect::<Result<Vec<_>>>()?;
        if cli.json {
            println!("{}", to_json(&infos)?);
        } else {
            for info in &infos {
                println!("{} = {}: {}", info.input, info.hex, info.details);
            }
        }
    }
    Ok(())
}

fn build_dataspace_info(input: &str) -> Result<DataspaceInfo> {
    let code = parse_dataspace(input).with_context(|| format!("无法解析 dataspace '{input}'"))?;
    let dataspace = Dataspace(code);
    debug!("dataspace {input} => {code:#010x}");
    Ok(DataspaceInfo {
        input: input.to_string(),
        code,
        hex: format!("{code:#010x}"),
        standard: decode_standard(code),
        transfer: decode_transfer(code),
        range: decode_range(code),
        legacy: dataspace.legacy().map(|legacy| legacy.name()),
        details: dataspace.to_string(),
    })
}

fn build_color_mode_info(input: &str) -> Result<ColorModeInfo> {
    let code = parse_color_mode(input).with_context(|| format!("无法解析色彩模式 '{input}'"))?;
    debug!("色彩模式 {input} => {code}");
    Ok(ColorModeInfo {
        input: input.to_string(),
        code,
        name: ColorMode::from_code(code).name(),
        label: decode_color_mode(code),
    })
}

/// 收集所有已知常量, 顺序: standard, transfer, range, legacy, color mode
fn list_constants() -> Vec<ConstantInfo> {
    let mut out = Vec::new();
    for s in DataspaceStandard::ALL {
        out.push(ConstantInfo {
            kind: "standard",
            name: format!("HAL_DATASPACE_STANDARD_{}", s.name()),
            value: i64::from(s.bits()),
            label: decode_standard(s.bits()),
        });
    }
    for t in DataspaceTransfer::ALL {
        out.push(ConstantInfo {
            kind: "transfer",
            name: format!("HAL_DATASPACE_TRANSFER_{}", t.name()),
            value: i64::from(t.bits()),
            label: t.to_string(),
        });
    }
    for r in DataspaceRange::ALL {
        out.push(ConstantInfo {
            kind: "range",
            name: format!("HAL_DATASPACE_RANGE_{}", r.name()),
            value: i64::from(r.bits()),
            label: r.to_string(),
        });
    }
    for l in LegacyDataspace::ALL {
        out.push(ConstantInfo {
            kind: "legacy",
            name: format!("HAL_DATASPACE_{}", l.name()),
            value: i64::from(l.code()),
            label: l.to_string(),
        });
    }
    for m in ColorMode::ALL {
        out.push(ConstantInfo {
            kind: "color_mode",
            name: format!("HAL_COLOR_MODE_{}", m.name()),
            value: i64::from(m.code()),
            label: m.to_string(),
        });
    }
    out
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("JSON 序列化失败")
}

fn print_banner() {
    println!(
        "halcolor-probe 版本 {} -- 图形 HAL 色彩编码探测工具",
        env!("CARGO_PKG_VERSION")
    );
    println!();
    println!("用法: halcolor-probe [选项] <编码>...");
    println!();
    println!("示例:");
    println!("  halcolor-probe 0x10c10000");
    println!("  halcolor-probe 'STANDARD_BT2020|TRANSFER_ST2084|RANGE_FULL' --json");
    println!("  halcolor-probe -m 7 DISPLAY_P3");
    println!("  halcolor-probe --list");
    println!();
    println!("使用 --help 查看所有选项");
}
