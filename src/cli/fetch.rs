//! # fetch 子命令 CLI 定义
//!
//! 批量查询成绩并追加到工作簿
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/fetch.rs`

use crate::net::DEFAULT_RESULT_URL;
use clap::Args;
use std::path::PathBuf;

/// fetch 子命令参数
#[derive(Args, Debug)]
pub struct FetchArgs {
    /// First roll number of the range (prompted for if omitted)
    #[arg(long, requires = "end")]
    pub start: Option<u32>,

    /// Last roll number of the range, inclusive (prompted for if omitted)
    #[arg(long, requires = "start")]
    pub end: Option<u32>,

    /// Workbook to create or append to
    #[arg(short, long, default_value = "bise_matric_results.xlsx")]
    pub output: PathBuf,

    /// Name of the results sheet inside the workbook
    #[arg(long, default_value = "Sheet1")]
    pub sheet: String,

    /// Result lookup page of the board
    #[arg(long, default_value = DEFAULT_RESULT_URL)]
    pub url: String,

    /// Request timeout in seconds (library default if omitted)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Also write this run's records to a CSV file
    #[arg(long)]
    pub csv: Option<PathBuf>,
}
