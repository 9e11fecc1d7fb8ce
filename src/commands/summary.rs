//! # summary 命令实现
//!
//! 统计结果工作簿中各科不及格人数。
//!
//! ## 依赖关系
//! - 使用 `cli/summary.rs` 定义的参数
//! - 使用 `export/xlsx.rs` 读取工作簿
//! - 使用 `export/sheet.rs` 和 `tagger.rs` 判定不及格

use crate::cli::summary::SummaryArgs;
use crate::error::{Result, ScrapeError};
use crate::export::{read_workbook, SheetGrid};
use crate::models::subject::SUBJECT_COUNT;
use crate::models::Subject;
use crate::utils::output;

use tabled::{Table, Tabled};

/// 统计结果
#[derive(Debug, Default, PartialEq, Eq)]
struct Tally {
    candidates: usize,
    with_failures: usize,
    per_subject: [usize; SUBJECT_COUNT],
}

#[derive(Debug, Clone, Tabled)]
struct SubjectRow {
    #[tabled(rename = "Subject")]
    subject: String,
    #[tabled(rename = "Failed")]
    failed: usize,
}

/// 执行 summary 命令
pub fn execute(args: SummaryArgs) -> Result<()> {
    output::print_header("Results Summary");

    if !args.input.exists() {
        return Err(ScrapeError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let grid = read_workbook(&args.input)?
        .into_iter()
        .find(|s| s.name == args.sheet)
        .ok_or_else(|| {
            ScrapeError::InvalidArgument(format!(
                "Sheet '{}' not found in '{}'",
                args.sheet,
                args.input.display()
            ))
        })?;

    let tally = tally(&grid);
    if tally.candidates == 0 {
        output::print_warning("The results sheet has no data rows.");
        return Ok(());
    }

    let rows: Vec<SubjectRow> = Subject::ALL
        .iter()
        .map(|s| SubjectRow {
            subject: s.column_name().to_string(),
            failed: tally.per_subject[s.index()],
        })
        .collect();
    println!("{}", Table::new(&rows));

    output::print_done(&format!(
        "{} candidates, {} with at least one failed subject",
        tally.candidates, tally.with_failures
    ));

    Ok(())
}

fn tally(grid: &SheetGrid) -> Tally {
    let mut tally = Tally::default();

    for row in 1..grid.rows.len() {
        if grid.cell(row, 0).trim().is_empty() {
            continue;
        }
        tally.candidates += 1;

        let failed = grid.failed_subjects(row);
        if !failed.is_empty() {
            tally.with_failures += 1;
        }
        for subject in failed {
            tally.per_subject[subject.index()] += 1;
        }
    }

    tally
}
