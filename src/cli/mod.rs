//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `detect`: 扫描峰检测，输出表格、图像或数据文件
//! - `adjust`: 峰检测后进入交互式峰位微调
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: detect, adjust

pub mod adjust;
pub mod detect;

use clap::{Parser, Subcommand};

/// peakmark - XRD 扫描峰检测与峰位标记工具
#[derive(Parser)]
#[command(name = "peakmark")]
#[command(version)]
#[command(about = "XRD scan peak detection with interactive marker adjustment", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Detect peaks in a scan and print, plot or export them
    Detect(detect::DetectArgs),

    /// Detect peaks, then fine-tune marker positions interactively
    Adjust(adjust::AdjustArgs),
}
