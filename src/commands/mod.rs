//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `net/`, `parsers/`, `export/`, `batch/`, `utils/`
//! - 子模块: fetch, parse, summary

pub mod fetch;
pub mod parse;
pub mod summary;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Fetch(args) => fetch::execute(args),
        Commands::Parse(args) => parse::execute(args),
        Commands::Summary(args) => summary::execute(args),
    }
}
