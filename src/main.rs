//! # bise-scrape - BISE 成绩批量查询工具
//!
//! 按准考证号范围查询 BISE 成绩站点（ASP.NET 表单），提取成绩并写入
//! 带不及格高亮的工作簿。
//!
//! ## 子命令
//! - `fetch`   - 批量查询并追加到工作簿
//! - `parse`   - 离线解析保存的成绩页
//! - `summary` - 统计工作簿中的不及格科目
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── net/       (令牌获取与表单提交)
//!   │     ├── parsers/   (页面解析器)
//!   │     ├── tagger.rs  (不及格科目标注)
//!   │     ├── export/    (XLSX/CSV 导出)
//!   │     ├── batch/     (顺序批处理)
//!   │     └── models/    (数据模型)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod export;
mod models;
mod net;
mod parsers;
mod tagger;
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
