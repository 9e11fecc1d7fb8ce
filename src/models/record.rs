//! # 学生成绩记录
//!
//! 解析器产出、导出器只读使用的扁平记录。
//!
//! ## 依赖关系
//! - 被 `parsers/result_page.rs` 创建
//! - 被 `tagger.rs`, `export/`, `commands/` 读取

use super::subject::{Subject, COLUMN_ORDER, SUBJECT_COUNT};

/// 单个考生的成绩记录
///
/// 准考证号为空的记录不会被创建（见 `parsers::result_page`）。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StudentRecord {
    /// 准考证号
    pub roll_no: String,

    /// 考生姓名
    pub candidate_name: String,

    /// 父亲姓名
    pub father_name: String,

    /// 各科成绩，按 `Subject` 下标存放，原样保留页面文本
    pub marks: [String; SUBJECT_COUNT],

    /// 总成绩文本
    pub overall_result: String,
}

impl StudentRecord {
    pub fn new(roll_no: impl Into<String>) -> Self {
        StudentRecord {
            roll_no: roll_no.into(),
            candidate_name: String::new(),
            father_name: String::new(),
            marks: Default::default(),
            overall_result: String::new(),
        }
    }

    /// 某科成绩（未出现则为空串）
    pub fn mark(&self, subject: Subject) -> &str {
        &self.marks[subject.index()]
    }

    pub fn set_mark(&mut self, subject: Subject, value: impl Into<String>) {
        self.marks[subject.index()] = value.into();
    }

    /// 按列顺序展开为一行
    pub fn to_row(&self) -> Vec<String> {
        let mut row = Vec::with_capacity(COLUMN_ORDER.len());
        row.push(self.roll_no.clone());
        row.push(self.candidate_name.clone());
        row.push(self.father_name.clone());
        row.extend(self.marks.iter().cloned());
        row.push(self.overall_result.clone());
        row
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::subject::OVERALL_RESULT_COLUMN;

    #[test]
    fn test_row_follows_column_order() {
        let mut record = StudentRecord::new("520001");
        record.candidate_name = "AHMAD ALI".to_string();
        record.set_mark(Subject::Physics, "55");
        record.overall_result = "PASS".to_string();

        let row = record.to_row();
        assert_eq!(row.len(), COLUMN_ORDER.len());
        assert_eq!(row[0], "520001");
        assert_eq!(row[1], "AHMAD ALI");
        assert_eq!(row[2], "");
        assert_eq!(row[Subject::Physics.column()], "55");
        assert_eq!(row[Subject::Chemistry.column()], "");
        assert_eq!(row[OVERALL_RESULT_COLUMN], "PASS");
    }
}
