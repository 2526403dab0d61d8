//! # peakmark - XRD 扫描峰检测与峰位标记工具
//!
//! 将衍射扫描（2θ-强度）的峰检测与交互式峰位微调整合为单一可执行文件。
//!
//! ## 子命令
//! - `detect` - 峰检测：表格、图像 (PNG/SVG)、数据导出 (CSV/XY)
//! - `adjust` - 检测后进入交互式峰位微调
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── parsers/   (扫描文件解析器)
//!   │     ├── models/    (扫描数据模型)
//!   │     └── peaks/     (峰检测核心)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod commands;
mod error;
mod models;
mod parsers;
mod peaks;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
