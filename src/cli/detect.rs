//! # detect 子命令 CLI 定义
//!
//! 扫描峰检测入口：加载扫描文件、运行检测、打印峰位表格，
//! 可选输出图像（PNG/SVG）或数据文件（CSV/XY）。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/detect.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq)]
pub enum ScanOutputFormat {
    /// PNG image (scan curve with labeled marker lines)
    Png,
    /// SVG vector image
    Svg,
    /// CSV peak list
    Csv,
    /// XY peak list (two-column text)
    Xy,
}

/// detect 子命令参数
#[derive(Args, Debug)]
pub struct DetectArgs {
    /// Input scan file (.xy, .dat, .txt or .csv; two columns: 2theta, intensity)
    pub input: PathBuf,

    /// Output file; format auto-detected from extension if --format is not given
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Output format (overrides extension detection)
    #[arg(short, long, value_enum)]
    pub format: Option<ScanOutputFormat>,

    // ─────────────────────────────────────────────────────────────
    // 检测参数
    // ─────────────────────────────────────────────────────────────
    /// Noise cutoff as a multiple of the mean intensity
    #[arg(long, default_value_t = 1.0)]
    pub noise_threshold: f64,

    /// Peak magnitude criterion as a multiple of the mean intensity
    #[arg(long, default_value_t = 1.7)]
    pub peak_magnitude: f64,

    /// Sliding window length (samples) for the local-maximum test
    #[arg(long, default_value_t = 7)]
    pub window_size: usize,

    /// Lookahead mean / apex ratio above which a broad top is one peak
    #[arg(long, default_value_t = 0.65)]
    pub overlap_threshold: f64,

    // ─────────────────────────────────────────────────────────────
    // 绘图参数
    // ─────────────────────────────────────────────────────────────
    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1200)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 800)]
    pub height: u32,

    /// Title for the plot (default: scan name)
    #[arg(long)]
    pub title: Option<String>,
}
