//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `fetch`: 批量查询成绩并写入工作簿
//! - `parse`: 离线解析保存的成绩页
//! - `summary`: 统计已有工作簿中的不及格情况
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: fetch, parse, summary

pub mod fetch;
pub mod parse;
pub mod summary;

use clap::{Parser, Subcommand};

/// bise-scrape - BISE 成绩批量查询工具
#[derive(Parser)]
#[command(name = "bise-scrape")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "Batch retrieval of BISE matric results into a highlighted spreadsheet", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Retrieve results for a range of roll numbers and append them to a workbook
    Fetch(fetch::FetchArgs),

    /// Parse a saved result page and print the extracted record
    Parse(parse::ParseArgs),

    /// Summarize failed subjects in an existing results workbook
    Summary(summary::SummaryArgs),
}
