//! # 数据模型模块
//!
//! 定义成绩记录、科目查找表和准考证号范围。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `tagger.rs`, `export/` 和 `commands/` 使用
//! - 子模块: record, subject, range

pub mod range;
pub mod record;
pub mod subject;

pub use range::RollRange;
pub use record::StudentRecord;
pub use subject::{Subject, COLUMN_ORDER, OVERALL_RESULT_COLUMN};
