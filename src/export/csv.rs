//! # CSV 导出
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 调用
//! - 使用 `csv` 库写入

use crate::error::{Result, ScrapeError};
use crate::models::{StudentRecord, COLUMN_ORDER};

use std::path::Path;

/// 按列顺序导出记录（覆盖已有文件）
pub fn to_csv(records: &[StudentRecord], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    wtr.write_record(COLUMN_ORDER)?;
    for record in records {
        wtr.write_record(record.to_row())?;
    }

    wtr.flush().map_err(|e| ScrapeError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
