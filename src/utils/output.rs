//! # 美化输出工具
//!
//! 提供统一的终端输出样式。
//!
//! ## 依赖关系
//! - 被 `commands/`, `batch/`, `export/` 模块使用
//! - 使用 `colored` crate

use crate::export::WriteOutcome;

use colored::Colorize;
use std::path::Path;

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

/// 打印跳过消息
pub fn print_skip(msg: &str) {
    println!("{} {}", "[SKIP]".dimmed(), msg);
}

/// 打印完成消息
pub fn print_done(msg: &str) {
    println!("{} {}", "[DONE]".green().bold(), msg);
}

/// 打印工作簿写入结果
pub fn print_write_outcome(outcome: &WriteOutcome, path: &Path) {
    let path = path.display().to_string();
    match outcome {
        WriteOutcome::Created { rows } => print_done(&format!(
            "Created '{}' with {} rows and failed subjects highlighted",
            path, rows
        )),
        WriteOutcome::Appended { existing, added } => print_done(&format!(
            "Appended {} rows to '{}' ({} rows already present)",
            added,
            path.cyan(),
            existing
        )),
        WriteOutcome::Recreated { rows, reason } => {
            print_warning(&format!("Previous contents of '{}' were replaced", path));
            println!("       {}", reason.dimmed());
            print_done(&format!("Recreated '{}' with {} rows", path, rows));
        }
    }
}

/// 打印标题栏
pub fn print_header(title: &str) {
    let line = "─".repeat(60);
    println!("\n{}", line.dimmed());
    println!("  {}", title.bold());
    println!("{}\n", line.dimmed());
}
