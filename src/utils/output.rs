//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `colored` crate

use colored::Colorize;

/// 打印成功消息
pub fn print_success(msg: &str) {
    println!("{} {}", "[OK]".green().bold(), msg);
}

/// 打印错误消息
pub fn print_error(msg: &str) {
    eprintln!("{} {}", "[ERR]".red().bold(), msg);
}

/// 打印警告消息
pub fn print_warning(msg: &str) {
    println!("{} {}", "[WARN]".yellow().bold(), msg);
}

/// 打印信息消息
pub fn print_info(msg: &str) {
    println!("{} {}", "[*]".blue().bold(), msg);
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}

/// 打印分隔线
pub fn print_separator() {
    println!("{}", "─".repeat(60).dimmed());
}

/// 打印标记位置更新（adjust 交互循环使用）
pub fn print_marker_position(label: usize, two_theta: f64) {
    println!(
        "{} Peak {} {} 2θ = {:.4}°",
        "[*]".blue().bold(),
        label.to_string().bold(),
        "->".cyan(),
        two_theta
    );
}

/// 打印 adjust 模式按键说明
pub fn print_key_hints() {
    println!(
        "  {}  select marker   {}  step marker   {} save CSV   {} quit",
        "↑/↓".bold(),
        "←/→".bold(),
        "s".bold(),
        "q".bold()
    );
}
