//! # 导出模块
//!
//! 将成绩记录写入工作簿（带不及格高亮）和 CSV。
//!
//! ## 支持格式
//! - XLSX: 追加写入，表头加粗居中，列宽自适应，冻结首行和前两列
//! - CSV: 本次运行记录的纯文本副本
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs`, `commands/summary.rs` 调用
//! - 使用 `tagger.rs` 计算高亮单元格
//! - 子模块: sheet, xlsx, csv

pub mod csv;
pub mod sheet;
pub mod xlsx;

pub use sheet::SheetGrid;
pub use xlsx::{read_workbook, write_records, WriteOutcome};
