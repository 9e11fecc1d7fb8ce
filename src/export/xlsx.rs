//! # XLSX 读写
//!
//! 追加流程（读-改-写，显式且有界）：
//! 1. 用 `calamine` 把已有工作簿全部读入内存
//! 2. 在目标表最后一个非空行之后追加新记录
//! 3. 用 `rust_xlsxwriter` 整体渲染，写入同目录临时文件后重命名覆盖
//!
//! `rust_xlsxwriter` 无法就地编辑，所以旧行的填充色按其总成绩重新推算。
//! 已有单元格按原类型写回：数字、布尔、日期（以日期格式）、公式（连同缓存结果）；
//! 其他格式（字体、边框、条件格式等）不保留。
//!
//! 追加失败时回退为新建文件，只包含本次运行的记录。
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs`, `commands/summary.rs` 调用
//! - 使用 `export/sheet.rs`
//! - 使用 `calamine` 读取、`rust_xlsxwriter` 写入

use super::sheet::{CellValue, SheetGrid};
use crate::error::{Result, ScrapeError};
use crate::models::StudentRecord;
use crate::utils::output;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use rust_xlsxwriter::{Color, Format, FormatAlign, Formula, Workbook, Worksheet};
use std::fs;
use std::path::{Path, PathBuf};

/// 不及格单元格填充色（浅红）
const FAIL_FILL: u32 = 0xFFCCCC;

/// 写回日期单元格时使用的数字格式
const DATE_FORMAT: &str = "yyyy-mm-dd";
const DATETIME_FORMAT: &str = "yyyy-mm-dd hh:mm:ss";

/// 写入结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// 新建文件
    Created { rows: usize },
    /// 追加到已有文件
    Appended { existing: usize, added: usize },
    /// 追加失败后重建
    Recreated { rows: usize, reason: String },
}

/// 写入记录：文件不存在则新建，存在则追加，追加失败则重建
pub fn write_records(
    records: &[StudentRecord],
    path: &Path,
    sheet_name: &str,
) -> Result<WriteOutcome> {
    if !path.exists() {
        create_workbook(records, path, sheet_name)?;
        return Ok(WriteOutcome::Created {
            rows: records.len(),
        });
    }

    match append_workbook(records, path, sheet_name) {
        Ok(existing) => Ok(WriteOutcome::Appended {
            existing,
            added: records.len(),
        }),
        Err(e) => {
            output::print_warning(&format!(
                "Appending to '{}' failed ({}); creating a new file instead",
                path.display(),
                e
            ));
            create_workbook(records, path, sheet_name)?;
            Ok(WriteOutcome::Recreated {
                rows: records.len(),
                reason: e.to_string(),
            })
        }
    }
}

/// 读取工作簿的所有工作表（保留单元格类型和公式）
pub fn read_workbook(path: &Path) -> Result<Vec<SheetGrid>> {
    let mut workbook: Xlsx<_> = open_workbook(path).map_err(|e| read_error(path, e))?;

    let mut sheets = Vec::new();
    for name in workbook.sheet_names() {
        let values = workbook
            .worksheet_range(&name)
            .map_err(|e| read_error(path, e))?;
        let formulas = workbook
            .worksheet_formula(&name)
            .map_err(|e| read_error(path, e))?;
        sheets.push(grid_from_ranges(name, &values, &formulas));
    }

    Ok(sheets)
}

/// 新建工作簿
fn create_workbook(records: &[StudentRecord], path: &Path, sheet_name: &str) -> Result<()> {
    let mut grid = SheetGrid::with_header(sheet_name);
    grid.append_records(records);

    save_atomic(&[grid], sheet_name, path)
}

/// 追加到已有工作簿，返回原有数据行数
fn append_workbook(records: &[StudentRecord], path: &Path, sheet_name: &str) -> Result<usize> {
    let mut sheets = read_workbook(path)?;

    let index = match sheets.iter().position(|s| s.name == sheet_name) {
        Some(i) => i,
        None => {
            sheets.push(SheetGrid {
                name: sheet_name.to_string(),
                rows: Vec::new(),
            });
            sheets.len() - 1
        }
    };

    let grid = &mut sheets[index];
    grid.trim_trailing_blank_rows();
    let existing = grid.data_rows();
    grid.append_records(records);

    save_atomic(&sheets, sheet_name, path)?;
    Ok(existing)
}

/// 渲染后写入临时文件，再重命名为目标文件
fn save_atomic(sheets: &[SheetGrid], results_sheet: &str, path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    for grid in sheets {
        let worksheet = if grid.name == results_sheet {
            render_results_sheet(grid)?
        } else {
            render_plain_sheet(grid)?
        };
        workbook.push_worksheet(worksheet);
    }

    let tmp = temp_path(path);
    workbook.save(&tmp)?;

    fs::rename(&tmp, path).map_err(|e| {
        let _ = fs::remove_file(&tmp);
        ScrapeError::FileWriteError {
            path: path.display().to_string(),
            source: e,
        }
    })
}

/// 成绩表：表头样式、高亮、列宽、冻结窗格
fn render_results_sheet(grid: &SheetGrid) -> Result<Worksheet> {
    let header_fmt = Format::new().set_bold().set_align(FormatAlign::Center);
    let fail_fmt = Format::new().set_background_color(Color::RGB(FAIL_FILL));

    let failed = grid.failed_cells(1);

    let mut worksheet = Worksheet::new();
    worksheet.set_name(&grid.name)?;

    for (r, row) in grid.rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            let format = if r == 0 {
                Some(&header_fmt)
            } else if failed.contains(&(r, c)) {
                Some(&fail_fmt)
            } else {
                None
            };
            write_cell(&mut worksheet, r as u32, c as u16, value, format)?;
        }
    }

    for (c, width) in grid.column_widths().into_iter().enumerate() {
        worksheet.set_column_width(c as u16, width as f64)?;
    }
    worksheet.set_freeze_panes(1, 2)?;

    Ok(worksheet)
}

/// 其他工作表：按类型写回值
fn render_plain_sheet(grid: &SheetGrid) -> Result<Worksheet> {
    let mut worksheet = Worksheet::new();
    worksheet.set_name(&grid.name)?;

    for (r, row) in grid.rows.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            write_cell(&mut worksheet, r as u32, c as u16, value, None)?;
        }
    }

    Ok(worksheet)
}

/// 按单元格类型选择写入方法；带格式的空单元格写为空白格
fn write_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &CellValue,
    format: Option<&Format>,
) -> Result<()> {
    match (value, format) {
        (CellValue::Empty, None) => {}
        (CellValue::Empty, Some(fmt)) => {
            worksheet.write_blank(row, col, fmt)?;
        }
        (CellValue::Text(s), None) => {
            worksheet.write_string(row, col, s.as_str())?;
        }
        (CellValue::Text(s), Some(fmt)) => {
            worksheet.write_string_with_format(row, col, s.as_str(), fmt)?;
        }
        (CellValue::Number(n), None) => {
            worksheet.write_number(row, col, *n)?;
        }
        (CellValue::Number(n), Some(fmt)) => {
            worksheet.write_number_with_format(row, col, *n, fmt)?;
        }
        (CellValue::Bool(b), None) => {
            worksheet.write_boolean(row, col, *b)?;
        }
        (CellValue::Bool(b), Some(fmt)) => {
            worksheet.write_boolean_with_format(row, col, *b, fmt)?;
        }
        (CellValue::DateTime(serial), fmt) => {
            let num_format = if serial.fract() == 0.0 {
                DATE_FORMAT
            } else {
                DATETIME_FORMAT
            };
            let date_fmt = fmt.cloned().unwrap_or_default().set_num_format(num_format);
            worksheet.write_number_with_format(row, col, *serial, &date_fmt)?;
        }
        (CellValue::Formula { formula, cached }, fmt) => {
            let formula = Formula::new(formula.as_str()).set_result(cached.as_str());
            match fmt {
                Some(fmt) => worksheet.write_formula_with_format(row, col, formula, fmt)?,
                None => worksheet.write_formula(row, col, formula)?,
            };
        }
    }
    Ok(())
}

/// calamine 值区域和公式区域 -> 绝对坐标的网格
fn grid_from_ranges(name: String, values: &Range<Data>, formulas: &Range<String>) -> SheetGrid {
    let mut grid = SheetGrid {
        name,
        rows: Vec::new(),
    };

    if let Some((row_offset, col_offset)) = values.start() {
        for (r, c, cell) in values.used_cells() {
            let value = cell_value(cell);
            if value != CellValue::Empty {
                grid.set(row_offset as usize + r, col_offset as usize + c, value);
            }
        }
    }

    if let Some((row_offset, col_offset)) = formulas.start() {
        for (r, c, formula) in formulas.used_cells() {
            let (row, col) = (row_offset as usize + r, col_offset as usize + c);
            let cached = grid.cell(row, col);
            grid.set(
                row,
                col,
                CellValue::Formula {
                    formula: formula.clone(),
                    cached,
                },
            );
        }
    }

    grid.trim_trailing_blank_rows();
    grid
}

fn cell_value(cell: &Data) -> CellValue {
    match cell {
        Data::Empty => CellValue::Empty,
        Data::String(s) => CellValue::from(s.as_str()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::Bool(b) => CellValue::Bool(*b),
        Data::DateTime(dt) if dt.is_datetime() => CellValue::DateTime(dt.as_f64()),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => CellValue::from(s.as_str()),
        Data::Error(e) => CellValue::Text(e.to_string()),
    }
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "results.xlsx".to_string());
    path.with_file_name(format!(".{}.tmp", name))
}

fn read_error(path: &Path, e: impl std::fmt::Display) -> ScrapeError {
    ScrapeError::WorkbookReadError {
        path: path.display().to_string(),
        reason: e.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Subject, COLUMN_ORDER};
    use regex::Regex;
    use std::collections::BTreeMap;
    use std::io::Read;

    fn record(roll_no: &str, overall: &str) -> StudentRecord {
        let mut r = StudentRecord::new(roll_no);
        r.candidate_name = format!("CANDIDATE {}", roll_no);
        r.set_mark(Subject::Physics, "40");
        r.overall_result = overall.to_string();
        r
    }

    fn results_sheet(path: &Path) -> SheetGrid {
        read_workbook(path)
            .unwrap()
            .into_iter()
            .find(|s| s.name == "Sheet1")
            .unwrap()
    }

    #[test]
    fn test_create_new_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        let records = vec![record("520001", "PASS"), record("520002", "FAIL CHM")];
        let outcome = write_records(&records, &path, "Sheet1").unwrap();
        assert_eq!(outcome, WriteOutcome::Created { rows: 2 });

        let grid = results_sheet(&path);
        let header: Vec<String> = (0..COLUMN_ORDER.len()).map(|c| grid.cell(0, c)).collect();
        assert_eq!(header, COLUMN_ORDER.to_vec());
        assert_eq!(grid.data_rows(), 2);
        assert_eq!(grid.cell(1, 0), "520001");
        assert_eq!(grid.cell(2, 0), "520002");
        assert_eq!(grid.cell(2, Subject::Physics.column()), "40");
        assert!(!dir.path().join(".results.xlsx.tmp").exists());
    }

    #[test]
    fn test_append_keeps_single_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        write_records(&[record("1", "PASS"), record("2", "PASS")], &path, "Sheet1").unwrap();
        let outcome = write_records(
            &[record("3", "PASS"), record("4", "PASS"), record("5", "FAIL BIO")],
            &path,
            "Sheet1",
        )
        .unwrap();
        assert_eq!(
            outcome,
            WriteOutcome::Appended {
                existing: 2,
                added: 3
            }
        );

        let grid = results_sheet(&path);
        assert_eq!(grid.data_rows(), 5);
        let headers = (0..grid.rows.len())
            .filter(|&r| grid.cell(r, 0) == "Roll-No")
            .count();
        assert_eq!(headers, 1);
        let rolls: Vec<String> = (1..=5).map(|r| grid.cell(r, 0)).collect();
        assert_eq!(rolls, vec!["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn test_append_creates_missing_sheet_and_keeps_others() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        write_records(&[record("1", "PASS")], &path, "Notes").unwrap();
        write_records(&[record("2", "PASS")], &path, "Sheet1").unwrap();

        let sheets = read_workbook(&path).unwrap();
        let names: Vec<&str> = sheets.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Notes", "Sheet1"]);
        assert_eq!(sheets[0].cell(1, 0), "1");
        assert_eq!(sheets[1].cell(0, 0), "Roll-No");
        assert_eq!(sheets[1].cell(1, 0), "2");
    }

    #[test]
    fn test_corrupt_file_falls_back_to_new_workbook() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");
        fs::write(&path, b"definitely not a zip archive").unwrap();

        let outcome = write_records(&[record("9", "PASS")], &path, "Sheet1").unwrap();
        assert!(matches!(outcome, WriteOutcome::Recreated { rows: 1, .. }));

        let grid = results_sheet(&path);
        assert_eq!(grid.data_rows(), 1);
        assert_eq!(grid.cell(1, 0), "9");
    }

    /// 取 xlsx 包内某个部件的 XML 文本
    fn package_part(path: &Path, part: &str) -> String {
        let file = fs::File::open(path).unwrap();
        let mut archive = zip::ZipArchive::new(file).unwrap();
        let mut xml = String::new();
        archive
            .by_name(part)
            .unwrap()
            .read_to_string(&mut xml)
            .unwrap();
        xml
    }

    /// 单元格引用 -> 样式下标（无样式为 None）
    fn cell_styles(sheet_xml: &str) -> BTreeMap<String, Option<String>> {
        let re = Regex::new(r#"<c r="([A-Z]+[0-9]+)"(?: s="([0-9]+)")?"#).unwrap();
        re.captures_iter(sheet_xml)
            .map(|cap| (cap[1].to_string(), cap.get(2).map(|m| m.as_str().to_string())))
            .collect()
    }

    #[test]
    fn test_rendered_sheet_fill_header_and_panes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");
        write_records(
            &[record("520001", "PASS 901"), record("520003", "FAIL CHM PHY-I")],
            &path,
            "Sheet1",
        )
        .unwrap();

        let sheet = package_part(&path, "xl/worksheets/sheet1.xml");
        let styles = cell_styles(&sheet);

        // 表头 A1..N1 统一使用表头样式
        let header_style = styles["A1"].clone();
        assert!(header_style.is_some());
        for col in 'A'..='N' {
            assert_eq!(styles[&format!("{}1", col)], header_style);
        }

        // 只有第 3 行的物理（I）和化学（J）带填充
        let fill_style = styles["I3"].clone();
        assert!(fill_style.is_some());
        assert_ne!(fill_style, header_style);
        let filled: Vec<&str> = styles
            .iter()
            .filter(|(_, s)| **s == fill_style)
            .map(|(cell, _)| cell.as_str())
            .collect();
        assert_eq!(filled, vec!["I3", "J3"]);
        assert_eq!(styles["I2"], None);

        assert!(sheet.contains(r#"xSplit="2" ySplit="1""#));
        assert!(sheet.contains(r#"state="frozen""#));
        assert!(sheet.contains(r#"customWidth="1""#));

        let style_xml = package_part(&path, "xl/styles.xml");
        assert!(style_xml.contains("FFFFCCCC"));
        assert!(style_xml.contains("<b/>"));
        assert!(style_xml.contains(r#"horizontal="center""#));
    }

    #[test]
    fn test_append_preserves_typed_cells() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.xlsx");

        // 用户手工维护的工作簿：数字、日期、公式、布尔
        let mut workbook = Workbook::new();
        let results = workbook.add_worksheet().set_name("Sheet1").unwrap();
        for (c, title) in COLUMN_ORDER.iter().enumerate() {
            results.write_string(0, c as u16, *title).unwrap();
        }
        results.write_number(1, 0, 520001).unwrap();
        results.write_string(1, 1, "AHMAD ALI").unwrap();
        results.write_number(1, 7, 55).unwrap();
        results.write_string(1, 13, "PASS 845").unwrap();

        let date_fmt = Format::new().set_num_format(DATE_FORMAT);
        let notes = workbook.add_worksheet().set_name("Notes").unwrap();
        notes.write_number_with_format(0, 0, 45413, &date_fmt).unwrap();
        notes
            .write_formula(1, 0, Formula::new("=1+1").set_result("2"))
            .unwrap();
        notes.write_boolean(2, 0, true).unwrap();
        workbook.save(&path).unwrap();

        let outcome = write_records(&[record("520002", "FAIL MAT")], &path, "Sheet1").unwrap();
        assert_eq!(
            outcome,
            WriteOutcome::Appended {
                existing: 1,
                added: 1
            }
        );

        let mut book: Xlsx<_> = open_workbook(&path).unwrap();
        let results = book.worksheet_range("Sheet1").unwrap();
        assert_eq!(results.get_value((1, 0)), Some(&Data::Float(520001.0)));
        assert_eq!(results.get_value((1, 7)), Some(&Data::Float(55.0)));
        assert_eq!(
            results.get_value((2, 0)),
            Some(&Data::String("520002".to_string()))
        );

        let notes = book.worksheet_range("Notes").unwrap();
        match notes.get_value((0, 0)) {
            Some(Data::DateTime(dt)) => {
                assert!(dt.is_datetime());
                assert_eq!(dt.as_f64(), 45413.0);
            }
            other => panic!("date cell read back as {:?}", other),
        }
        assert_eq!(notes.get_value((1, 0)), Some(&Data::Float(2.0)));
        assert_eq!(notes.get_value((2, 0)), Some(&Data::Bool(true)));

        let formulas = book.worksheet_formula("Notes").unwrap();
        assert_eq!(formulas.get_value((1, 0)), Some(&"1+1".to_string()));
    }
}
