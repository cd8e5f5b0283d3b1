//! halcolor 解码性能基准测试.
//!
//! 覆盖位域解码、旧版 dataspace 二次查找、色彩模式解码与文本解析.

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use halcolor::core::hal::*;
use halcolor::core::parse::parse_dataspace;
use halcolor::{dataspace_details, decode_color_mode, decode_standard};

fn bench_dataspace_details(c: &mut Criterion) {
    c.bench_function("dataspace_details_v0_bt709", |b| {
        b.iter(|| dataspace_details(black_box(HAL_DATASPACE_V0_BT709)));
    });
}

fn bench_legacy_lookup(c: &mut Criterion) {
    c.bench_function("decode_standard_legacy_jfif", |b| {
        b.iter(|| decode_standard(black_box(HAL_DATASPACE_JFIF)));
    });
}

fn bench_unknown_fallback(c: &mut Criterion) {
    let reserved = 0x3f << HAL_DATASPACE_STANDARD_SHIFT;
    c.bench_function("decode_standard_unknown", |b| {
        b.iter(|| decode_standard(black_box(reserved)));
    });
}

fn bench_color_mode(c: &mut Criterion) {
    c.bench_function("decode_color_mode_all", |b| {
        b.iter(|| {
            for mode in -1..=10 {
                black_box(decode_color_mode(black_box(mode)));
            }
        });
    });
}

fn bench_parse(c: &mut Criterion) {
    c.bench_function("parse_dataspace_symbols", |b| {
        b.iter(|| parse_dataspace(black_box("STANDARD_BT709|TRANSFER_SMPTE_170M|RANGE_LIMITED")));
    });
}

criterion_group!(
    benches,
    bench_dataspace_details,
    bench_legacy_lookup,
    bench_unknown_fallback,
    bench_color_mode,
    bench_parse
);
criterion_main!(benches);
