//! # 统一错误处理模块
//!
//! 定义 bise-scrape 的所有错误类型，使用 `thiserror` 派生。
//!
//! "查无此号" 不是错误，由 `Option` / `ProcessResult::NoResult` 表达。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// bise-scrape 统一错误类型
#[derive(Error, Debug)]
pub enum ScrapeError {
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
    // 网络错误
    // ─────────────────────────────────────────────────────────────
    #[error("Request to {url} failed: {source}")]
    NetworkError {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Form token '{field}' not found on the lookup page")]
    MissingToken { field: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {what}\nReason: {reason}")]
    ParseError { what: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 工作簿错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read workbook: {path}\nReason: {reason}")]
    WorkbookReadError { path: String, reason: String },

    #[error("Workbook error: {0}")]
    XlsxError(#[from] rust_xlsxwriter::XlsxError),

    // ─────────────────────────────────────────────────────────────
    // CSV 错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid roll number range: {0}")]
    InvalidRange(String),

    // ─────────────────────────────────────────────────────────────
    // 其他
    // ─────────────────────────────────────────────────────────────
    #[error("{0}")]
    Other(String),
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ScrapeError>;
