//! # 交互式输入
//!
//! 未通过命令行给出范围时，提示输入起止准考证号。
//! 输入无效时无限重试；输入流关闭时报错退出。
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 使用
//! - 使用 `models/range.rs`

use crate::error::{Result, ScrapeError};
use crate::models::RollRange;

use colored::Colorize;
use std::io::{BufRead, Write};

/// 提示输入准考证号范围
pub fn prompt_roll_range<R: BufRead, W: Write>(input: &mut R, out: &mut W) -> Result<RollRange> {
    loop {
        let start = ask(input, out, "Enter the starting roll number (e.g., 520001): ")?;
        let end = ask(input, out, "Enter the ending roll number (e.g., 520010): ")?;

        let (start, end) = match (start.parse::<i64>(), end.parse::<i64>()) {
            (Ok(s), Ok(e)) => (s, e),
            _ => {
                complain(out, "Invalid input. Please enter valid integer roll numbers.")?;
                continue;
            }
        };

        if start <= 0 || end <= 0 || start > u32::MAX as i64 || end > u32::MAX as i64 {
            complain(out, "Roll numbers must be positive integers. Please try again.")?;
            continue;
        }

        match RollRange::new(start as u32, end as u32) {
            Ok(range) => return Ok(range),
            Err(_) => complain(
                out,
                "Starting roll number cannot be greater than ending roll number. Please try again.",
            )?,
        }
    }
}

/// 输出提示并读取一行
fn ask<R: BufRead, W: Write>(input: &mut R, out: &mut W, question: &str) -> Result<String> {
    write!(out, "{}", question).map_err(stdout_error)?;
    out.flush().map_err(stdout_error)?;

    let mut line = String::new();
    let read = input
        .read_line(&mut line)
        .map_err(|e| ScrapeError::FileReadError {
            path: "<stdin>".to_string(),
            source: e,
        })?;
    if read == 0 {
        return Err(ScrapeError::Other(
            "Input closed before a roll number range was entered".to_string(),
        ));
    }

    Ok(line.trim().to_string())
}

fn complain<W: Write>(out: &mut W, msg: &str) -> Result<()> {
    writeln!(out, "{} {}", "[WARN]".yellow().bold(), msg).map_err(stdout_error)
}

fn stdout_error(e: std::io::Error) -> ScrapeError {
    ScrapeError::FileWriteError {
        path: "<stdout>".to_string(),
        source: e,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str) -> (Result<RollRange>, String) {
        let mut reader = Cursor::new(input.as_bytes().to_vec());
        let mut out = Vec::new();
        let result = prompt_roll_range(&mut reader, &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_valid_input() {
        let (result, _) = run("520001\n520003\n");
        assert_eq!(result.unwrap(), RollRange::new(520001, 520003).unwrap());
    }

    #[test]
    fn test_reprompts_until_valid() {
        let (result, out) = run("abc\n5\n0\n5\n9\n3\n 3 \n 9 \n");
        assert_eq!(result.unwrap(), RollRange::new(3, 9).unwrap());
        assert!(out.contains("Invalid input"));
        assert!(out.contains("must be positive"));
        assert!(out.contains("cannot be greater"));
    }

    #[test]
    fn test_closed_input_is_error() {
        let (result, _) = run("520001\n");
        assert!(matches!(result, Err(ScrapeError::Other(_))));
    }
}
