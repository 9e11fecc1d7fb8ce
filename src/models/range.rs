//! # 准考证号范围
//!
//! ## 依赖关系
//! - 被 `utils/prompt.rs`, `commands/fetch.rs` 使用

use crate::error::{Result, ScrapeError};

/// 闭区间 [start, end]，两端均为正整数
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RollRange {
    start: u32,
    end: u32,
}

impl RollRange {
    pub fn new(start: u32, end: u32) -> Result<Self> {
        if start == 0 || end == 0 {
            return Err(ScrapeError::InvalidRange(
                "Roll numbers must be positive integers".to_string(),
            ));
        }
        if start > end {
            return Err(ScrapeError::InvalidRange(format!(
                "Starting roll number {} is greater than ending roll number {}",
                start, end
            )));
        }
        Ok(RollRange { start, end })
    }

    pub fn len(&self) -> usize {
        (self.end - self.start) as usize + 1
    }

    /// 以字符串形式列出所有准考证号
    pub fn roll_numbers(&self) -> Vec<String> {
        (self.start..=self.end).map(|n| n.to_string()).collect()
    }
}

impl std::fmt::Display for RollRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}
