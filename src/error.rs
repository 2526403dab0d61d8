//! # 统一错误处理模块
//!
//! 定义 peakmark 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// peakmark 统一错误类型
#[derive(Error, Debug)]
pub enum PeakmarkError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse scan file: {path} (line {line})\nReason: {reason}")]
    ParseError {
        path: String,
        line: usize,
        reason: String,
    },

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    // ─────────────────────────────────────────────────────────────
    // 信号错误（检测开始前即失败）
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid signal: {reason}")]
    InvalidSignal { reason: String },

    // ─────────────────────────────────────────────────────────────
    // 配置错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration: {reason}")]
    InvalidConfig { reason: String },

    // ─────────────────────────────────────────────────────────────
    // 标记操作错误（可恢复，调用方按 no-op 处理）
    // ─────────────────────────────────────────────────────────────
    #[error("Marker {label}: apex is the last sample, no grid spacing to step by")]
    StepOutOfRange { label: usize },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, PeakmarkError>;
