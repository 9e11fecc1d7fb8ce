//! # 批量执行器
//!
//! 顺序执行每个准考证号的查询，记录按输入顺序累积。
//!
//! ## 功能
//! - 进度条显示（消息输出时暂停进度条）
//! - 无结果/失败分类统计与汇总报告
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `utils/output.rs` 输出诊断

use crate::models::StudentRecord;
use crate::utils::{output, progress};

/// 单个准考证号的处理结果
#[derive(Debug, Clone)]
pub enum ProcessResult {
    /// 取得成绩
    Retrieved(StudentRecord),
    /// 查无此号（无效号码或无成绩）
    NoResult(String),
    /// 处理失败
    Failed(String, String), // (准考证号, 错误信息)
}

/// 批量处理结果统计
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 按顺序取得的记录
    pub records: Vec<StudentRecord>,
    /// 查无此号数量
    pub no_result: usize,
    /// 失败数量
    pub failed: usize,
    /// 失败详情
    pub failures: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, result: ProcessResult) {
        match result {
            ProcessResult::Retrieved(record) => self.records.push(record),
            ProcessResult::NoResult(_) => self.no_result += 1,
            ProcessResult::Failed(roll_no, err) => {
                self.failed += 1;
                self.failures.push((roll_no, err));
            }
        }
    }

    /// 成功数量
    pub fn retrieved(&self) -> usize {
        self.records.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.retrieved() + self.no_result + self.failed
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 进度条说明
    message: String,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// 顺序处理准考证号列表
    pub fn run<F>(&self, roll_numbers: &[String], mut processor: F) -> BatchResult
    where
        F: FnMut(&str) -> ProcessResult,
    {
        let pb = progress::roll_progress_bar(roll_numbers.len() as u64, &self.message);
        let mut batch_result = BatchResult::default();

        for roll_no in roll_numbers {
            pb.set_message(progress::current_roll(roll_no));
            let result = processor(roll_no);

            match &result {
                ProcessResult::Retrieved(_) => {}
                ProcessResult::NoResult(r) => pb.suspend(|| {
                    output::print_skip(&format!(
                        "No result found for Roll No: {} (invalid roll number or no record)",
                        r
                    ));
                }),
                ProcessResult::Failed(r, err) => pb.suspend(|| {
                    output::print_warning(&format!(
                        "Could not retrieve result for Roll No {}: {}",
                        r, err
                    ));
                }),
            }

            batch_result.merge(result);
            pb.inc(1);
        }

        pb.finish_and_clear();
        batch_result
    }
}
