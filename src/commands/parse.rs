//! # parse 命令实现
//!
//! 离线解析保存的成绩页，用于排查页面结构变化。
//!
//! ## 依赖关系
//! - 使用 `cli/parse.rs` 定义的参数
//! - 使用 `parsers/result_page.rs`, `tagger.rs`

use crate::cli::parse::ParseArgs;
use crate::error::{Result, ScrapeError};
use crate::models::{StudentRecord, Subject};
use crate::parsers::result_page::parse_result_page;
use crate::tagger;
use crate::utils::output;

use std::fs;
use tabled::{Table, Tabled};

/// 字段/值
#[derive(Debug, Clone, Tabled)]
struct FieldRow {
    #[tabled(rename = "Field")]
    field: String,
    #[tabled(rename = "Value")]
    value: String,
    #[tabled(rename = "Failed")]
    failed: String,
}

/// 执行 parse 命令
pub fn execute(args: ParseArgs) -> Result<()> {
    output::print_header("Parsing Result Page");

    if !args.input.exists() {
        return Err(ScrapeError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let html = fs::read_to_string(&args.input).map_err(|e| ScrapeError::FileReadError {
        path: args.input.display().to_string(),
        source: e,
    })?;

    match parse_result_page(&html)? {
        Some(record) => {
            println!("{}", Table::new(field_rows(&record)));
            output::print_done(&format!("Parsed result for Roll No {}", record.roll_no));
        }
        None => output::print_warning(&format!(
            "No roll number found in '{}'; the page holds no result",
            args.input.display()
        )),
    }

    Ok(())
}

fn field_rows(record: &StudentRecord) -> Vec<FieldRow> {
    let failed = tagger::failed_subjects(&record.overall_result);
    let row = |field: &str, value: &str, is_failed: bool| FieldRow {
        field: field.to_string(),
        value: value.to_string(),
        failed: if is_failed { "yes".to_string() } else { String::new() },
    };

    let mut rows = vec![
        row("Roll-No", &record.roll_no, false),
        row("Candidate Name", &record.candidate_name, false),
        row("Father Name", &record.father_name, false),
    ];
    rows.extend(
        Subject::ALL
            .iter()
            .map(|s| row(s.column_name(), record.mark(*s), failed.contains(s))),
    );
    rows.push(row("Overall Result", &record.overall_result, false));
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::COLUMN_ORDER;

    #[test]
    fn test_field_rows_follow_column_order() {
        let mut record = StudentRecord::new("520010");
        record.set_mark(Subject::Biology, "31");
        record.overall_result = "FAIL BIO".to_string();

        let rows = field_rows(&record);
        let fields: Vec<&str> = rows.iter().map(|r| r.field.as_str()).collect();
        assert_eq!(fields, COLUMN_ORDER.to_vec());

        let bio = rows.iter().find(|r| r.field == "Biology").unwrap();
        assert_eq!(bio.value, "31");
        assert_eq!(bio.failed, "yes");
        assert!(rows.iter().filter(|r| r.failed == "yes").count() == 1);
    }
}
