//! # adjust 子命令 CLI 定义
//!
//! 交互式峰位微调入口：检测完成后读取方向键，按采样栅格步进选中的标记。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/adjust.rs`

use clap::Args;
use std::path::PathBuf;

/// adjust 子命令参数
#[derive(Args, Debug)]
pub struct AdjustArgs {
    /// Input scan file (.xy, .dat, .txt or .csv; two columns: 2theta, intensity)
    pub input: PathBuf,

    /// CSV file for saving adjusted positions (default: <input>.peaks.csv)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

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
}
