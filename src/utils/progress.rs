//! # 查询进度条
//!
//! 逐个准考证号推进的进度条，当前号码显示在消息栏。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{ProgressBar, ProgressStyle};

const ROLL_TEMPLATE: &str =
    "{spinner:.green} {prefix:.bold} [{bar:32.cyan/blue}] {pos}/{len} roll numbers ({elapsed}, eta {eta}) {msg}";

/// 创建按准考证号计数的进度条，`label` 作为前缀
pub fn roll_progress_bar(total: u64, label: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    let style = ProgressStyle::with_template(ROLL_TEMPLATE)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("=> ");
    pb.set_style(style);
    pb.set_prefix(label.to_string());
    pb
}

/// 消息栏显示的当前号码
pub fn current_roll(roll_no: &str) -> String {
    format!("Roll No {}", roll_no)
}
