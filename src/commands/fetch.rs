//! # fetch 命令实现
//!
//! 批量查询成绩并写入工作簿。
//!
//! ## 功能
//! - 确定准考证号范围（命令行参数或交互输入）
//! - 顺序执行：取令牌 -> 提交查询 -> 解析
//! - 汇总后一次性写入工作簿（追加 + 高亮）
//! - 可选 CSV 副本
//!
//! ## 依赖关系
//! - 使用 `cli/fetch.rs` 定义的参数
//! - 使用 `net/`, `batch/`, `export/`, `tagger.rs`
//! - 使用 `utils/output.rs`, `utils/prompt.rs`

use crate::batch::{BatchResult, BatchRunner, ProcessResult};
use crate::cli::fetch::FetchArgs;
use crate::error::Result;
use crate::export;
use crate::models::{RollRange, StudentRecord};
use crate::net::{retrieve_result, BoardClient, ResultSource};
use crate::tagger;
use crate::utils::{output, prompt};

use std::io;
use std::time::Duration;
use tabled::{Table, Tabled};

/// 终端汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct RetrievedRow {
    #[tabled(rename = "Roll No")]
    roll_no: String,
    #[tabled(rename = "Candidate")]
    name: String,
    #[tabled(rename = "Overall Result")]
    overall: String,
    #[tabled(rename = "Failed")]
    failed: String,
}

impl From<&StudentRecord> for RetrievedRow {
    fn from(record: &StudentRecord) -> Self {
        let failed = tagger::failed_subjects(&record.overall_result)
            .iter()
            .map(|s| s.column_name())
            .collect::<Vec<_>>()
            .join(", ");
        RetrievedRow {
            roll_no: record.roll_no.clone(),
            name: record.candidate_name.clone(),
            overall: record.overall_result.clone(),
            failed,
        }
    }
}

/// 执行 fetch 命令
pub fn execute(args: FetchArgs) -> Result<()> {
    output::print_header("Retrieving BISE Results");

    let range = match (args.start, args.end) {
        (Some(start), Some(end)) => RollRange::new(start, end)?,
        _ => {
            let stdin = io::stdin();
            prompt::prompt_roll_range(&mut stdin.lock(), &mut io::stdout())?
        }
    };

    let client = BoardClient::new(&args.url, args.timeout.map(Duration::from_secs))?;
    output::print_info(&format!(
        "Querying {} roll numbers ({}) from {}",
        range.len(),
        range,
        client.url()
    ));

    let batch = collect_results(&client, &range);
    report_batch(&batch);

    if batch.records.is_empty() {
        output::print_warning("No results were successfully retrieved to save.");
        return Ok(());
    }

    let rows: Vec<RetrievedRow> = batch.records.iter().map(RetrievedRow::from).collect();
    println!("{}", Table::new(&rows));

    let outcome = export::write_records(&batch.records, &args.output, &args.sheet)?;
    output::print_write_outcome(&outcome, &args.output);

    if let Some(ref csv_path) = args.csv {
        export::csv::to_csv(&batch.records, csv_path)?;
        output::print_success(&format!("CSV copy saved to '{}'", csv_path.display()));
    }

    Ok(())
}

/// 顺序查询范围内所有准考证号
pub fn collect_results<S: ResultSource + ?Sized>(source: &S, range: &RollRange) -> BatchResult {
    let runner = BatchRunner::new("Retrieving");
    runner.run(&range.roll_numbers(), |roll_no| {
        match retrieve_result(source, roll_no) {
            Ok(Some(record)) => ProcessResult::Retrieved(record),
            Ok(None) => ProcessResult::NoResult(roll_no.to_string()),
            Err(e) => ProcessResult::Failed(roll_no.to_string(), e.to_string()),
        }
    })
}

/// 输出统计
fn report_batch(batch: &BatchResult) {
    output::print_info(&format!(
        "Processed {} roll numbers: {} retrieved, {} without result, {} failed",
        batch.total(),
        batch.retrieved(),
        batch.no_result,
        batch.failed
    ));
    for (roll_no, err) in &batch.failures {
        output::print_error(&format!("{}: {}", roll_no, err));
    }
}
