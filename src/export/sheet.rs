//! # 工作表内存模型
//!
//! 工作簿先完整读入内存，修改后整体重写，因此追加、高亮和列宽都在此计算。
//! 单元格保留原始类型（数字、日期、布尔、公式），重写时按类型写回；
//! 只有本次追加的记录以文本写入。
//!
//! ## 依赖关系
//! - 被 `export/xlsx.rs`, `commands/summary.rs` 使用
//! - 使用 `tagger.rs`

use crate::models::{StudentRecord, Subject, COLUMN_ORDER, OVERALL_RESULT_COLUMN};
use crate::tagger;

use std::collections::BTreeSet;

/// 列宽在最长文本之外的留白
const WIDTH_PADDING: usize = 2;

/// 单元格值
#[derive(Debug, Clone, Default, PartialEq)]
pub enum CellValue {
    #[default]
    Empty,
    Text(String),
    Number(f64),
    Bool(bool),
    /// Excel 日期序列号
    DateTime(f64),
    /// 公式（不含前导 `=`）及读取时的缓存结果
    Formula { formula: String, cached: String },
}

impl CellValue {
    /// 显示文本，用于匹配、统计和列宽
    pub fn text(&self) -> String {
        match self {
            CellValue::Empty => String::new(),
            CellValue::Text(s) => s.clone(),
            CellValue::Number(n) | CellValue::DateTime(n) => format_number(*n),
            CellValue::Bool(true) => "TRUE".to_string(),
            CellValue::Bool(false) => "FALSE".to_string(),
            CellValue::Formula { cached, .. } => cached.clone(),
        }
    }

    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        if s.is_empty() {
            CellValue::Empty
        } else {
            CellValue::Text(s)
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::from(s.to_string())
    }
}

/// 整数值不带小数点（准考证号 520001 而非 520001.0）
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}

/// 一张工作表的全部单元格（行优先，行长度可不等）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SheetGrid {
    pub name: String,
    pub rows: Vec<Vec<CellValue>>,
}

impl SheetGrid {
    /// 只有表头的新表
    pub fn with_header(name: impl Into<String>) -> Self {
        SheetGrid {
            name: name.into(),
            rows: vec![COLUMN_ORDER.iter().map(|h| CellValue::from(*h)).collect()],
        }
    }

    /// 去掉末尾的空行
    pub fn trim_trailing_blank_rows(&mut self) {
        while self
            .rows
            .last()
            .is_some_and(|row| row.iter().all(CellValue::is_blank))
        {
            self.rows.pop();
        }
    }

    /// 在最后一个非空行之后追加记录，返回第一条新行的下标
    pub fn append_records(&mut self, records: &[StudentRecord]) -> usize {
        self.trim_trailing_blank_rows();
        if self.rows.is_empty() {
            *self = SheetGrid::with_header(std::mem::take(&mut self.name));
        }

        let first_new = self.rows.len();
        self.rows.extend(
            records
                .iter()
                .map(|r| r.to_row().into_iter().map(CellValue::from).collect()),
        );
        first_new
    }

    /// 数据行数（不含表头）
    pub fn data_rows(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    /// 单元格显示文本，越界为空串
    pub fn cell(&self, row: usize, col: usize) -> String {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .map(CellValue::text)
            .unwrap_or_default()
    }

    /// 写入单元格，按需扩展行列
    pub fn set(&mut self, row: usize, col: usize, value: CellValue) {
        if self.rows.len() <= row {
            self.rows.resize(row + 1, Vec::new());
        }
        let cells = &mut self.rows[row];
        if cells.len() <= col {
            cells.resize(col + 1, CellValue::Empty);
        }
        cells[col] = value;
    }

    /// 第 `row` 行中不及格的科目
    pub fn failed_subjects(&self, row: usize) -> BTreeSet<Subject> {
        tagger::failed_subjects(&self.cell(row, OVERALL_RESULT_COLUMN))
    }

    /// 从 `from_row` 起需要填充的 (行, 列)
    pub fn failed_cells(&self, from_row: usize) -> BTreeSet<(usize, usize)> {
        (from_row.max(1)..self.rows.len())
            .flat_map(|row| {
                self.failed_subjects(row)
                    .into_iter()
                    .map(move |subject| (row, subject.column()))
            })
            .collect()
    }

    /// 每列宽度：最长显示文本字符数 + 留白
    pub fn column_widths(&self) -> Vec<usize> {
        let cols = self.rows.iter().map(|r| r.len()).max().unwrap_or(0);
        (0..cols)
            .map(|col| {
                let widest = self
                    .rows
                    .iter()
                    .filter_map(|r| r.get(col))
                    .map(|c| c.text().chars().count())
                    .max()
                    .unwrap_or(0);
                widest + WIDTH_PADDING
            })
            .collect()
    }
}
