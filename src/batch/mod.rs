//! # 批量处理模块
//!
//! 按顺序逐个处理准考证号，汇总结果。
//!
//! ## 功能
//! - 顺序执行（一个号码处理完再处理下一个）
//! - 进度反馈与统计
//! - 失败跳过，不重试
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 使用
//! - 使用 `indicatif` 显示进度

pub mod runner;

pub use runner::{BatchResult, BatchRunner, ProcessResult};
