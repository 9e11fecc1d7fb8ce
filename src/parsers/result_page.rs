//! # 成绩页解析器
//!
//! 从查询结果页提取考生信息和各科成绩。
//!
//! ## 页面结构
//! - `span#LblRollNo`, `span#LblName`, `span#LblFatherName`: 身份信息
//! - `span#lblGazres`: 总成绩
//! - `table#TblResult`: 前 5 行为表头/考生信息，其余每行为一科
//!   （第 0 列科目名，第 2 列所得分数）
//!
//! 解析是尽力而为的：缺失字段为空串，表格结构变化不会报错。
//!
//! ## 依赖关系
//! - 被 `net/` 和 `commands/parse.rs` 使用
//! - 使用 `models/record.rs`, `models/subject.rs`

use super::{element_text, selector};
use crate::error::Result;
use crate::models::{StudentRecord, Subject};
use scraper::Html;

const ROLL_NO_ID: &str = "LblRollNo";
const NAME_ID: &str = "LblName";
const FATHER_NAME_ID: &str = "LblFatherName";
const OVERALL_RESULT_ID: &str = "lblGazres";
const RESULT_TABLE_ID: &str = "TblResult";

/// 成绩表中非科目行的数量
const HEADER_ROWS: usize = 5;

/// 解析成绩页
///
/// 准考证号字段为空时返回 `Ok(None)`（号码无效或查无此人）。
pub fn parse_result_page(html: &str) -> Result<Option<StudentRecord>> {
    let document = Html::parse_document(html);

    let roll_no = span_text(&document, ROLL_NO_ID)?;
    if roll_no.is_empty() {
        return Ok(None);
    }

    let mut record = StudentRecord::new(roll_no);
    record.candidate_name = span_text(&document, NAME_ID)?;
    record.father_name = span_text(&document, FATHER_NAME_ID)?;
    record.overall_result = span_text(&document, OVERALL_RESULT_ID)?;

    for (label, marks) in subject_rows(&document)? {
        if let Some(subject) = Subject::from_board_label(&label) {
            record.set_mark(subject, marks);
        }
    }

    Ok(Some(record))
}

/// 取 `span#id` 的文本，不存在时为空串
fn span_text(document: &Html, id: &str) -> Result<String> {
    let sel = selector(&format!("span#{}", id))?;
    Ok(document
        .select(&sel)
        .next()
        .map(element_text)
        .unwrap_or_default())
}

/// 成绩表中的 (科目名, 所得分数)
fn subject_rows(document: &Html) -> Result<Vec<(String, String)>> {
    let table_sel = selector(&format!("table#{}", RESULT_TABLE_ID))?;
    let row_sel = selector("tr")?;
    let cell_sel = selector("td, th")?;

    let table = match document.select(&table_sel).next() {
        Some(t) => t,
        None => return Ok(Vec::new()),
    };

    let rows = table
        .select(&row_sel)
        .skip(HEADER_ROWS)
        .filter_map(|row| {
            let cells: Vec<String> = row.select(&cell_sel).map(element_text).collect();
            if cells.len() >= 3 {
                Some((cells[0].clone(), cells[2].clone()))
            } else {
                None
            }
        })
        .collect();

    Ok(rows)
}
