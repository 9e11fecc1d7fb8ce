//! # summary 子命令 CLI 定义
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/summary.rs`

use clap::Args;
use std::path::PathBuf;

/// summary 子命令参数
#[derive(Args, Debug)]
pub struct SummaryArgs {
    /// Results workbook written by `fetch`
    #[arg(default_value = "bise_matric_results.xlsx")]
    pub input: PathBuf,

    /// Name of the results sheet inside the workbook
    #[arg(long, default_value = "Sheet1")]
    pub sheet: String,
}
