//! # 网络模块
//!
//! 成绩查询站点的两步回发流程：
//! 1. GET 查询页，取出 ASP.NET 令牌
//! 2. POST 令牌 + 准考证号，取回成绩页
//!
//! `ResultSource` 抽象了 HTTP 传输，便于在测试中替换。
//!
//! ## 依赖关系
//! - 被 `commands/fetch.rs` 使用
//! - 使用 `parsers/form_tokens.rs`, `parsers/result_page.rs`
//! - 子模块: client

pub mod client;

pub use client::BoardClient;

use crate::error::Result;
use crate::models::StudentRecord;
use crate::parsers::form_tokens::{
    parse_form_tokens, FormTokens, EVENT_VALIDATION, VIEWSTATE, VIEWSTATE_GENERATOR,
};
use crate::parsers::result_page::parse_result_page;

/// 默认查询地址
pub const DEFAULT_RESULT_URL: &str = "http://119.159.230.2/biseresultday/resultday.aspx";

/// 按准考证号查询的单选项
const SEARCH_BY_ROLL_NO: &str = "Search by Roll No.";

/// 提交按钮
const SHOW_RESULT: &str = "Show Result";

/// 成绩页来源
pub trait ResultSource {
    /// 读取查询页（含令牌）
    fn load_form(&self) -> Result<String>;

    /// 提交查询表单，返回成绩页
    fn submit_form(&self, fields: &[(&'static str, String)]) -> Result<String>;
}

/// 构造按准考证号查询的表单字段
pub fn lookup_form(roll_no: &str, tokens: &FormTokens) -> Vec<(&'static str, String)> {
    let mut fields = vec![
        ("__LASTFOCUS", String::new()),
        ("__EVENTTARGET", String::new()),
        ("__EVENTARGUMENT", String::new()),
        (VIEWSTATE, tokens.view_state.clone()),
        (EVENT_VALIDATION, tokens.event_validation.clone()),
    ];
    if let Some(generator) = &tokens.view_state_generator {
        fields.push((VIEWSTATE_GENERATOR, generator.clone()));
    }
    fields.push(("RbtSearchType", SEARCH_BY_ROLL_NO.to_string()));
    fields.push(("TxtSearchText", roll_no.to_string()));
    fields.push(("BtnShowResults", SHOW_RESULT.to_string()));
    fields
}

/// 查询单个准考证号
///
/// 每次查询都重新获取令牌。查无此号时返回 `Ok(None)`。
pub fn retrieve_result<S: ResultSource + ?Sized>(
    source: &S,
    roll_no: &str,
) -> Result<Option<StudentRecord>> {
    let form_page = source.load_form()?;
    let tokens = parse_form_tokens(&form_page)?;

    let result_page = source.submit_form(&lookup_form(roll_no, &tokens))?;
    parse_result_page(&result_page)
}

#[cfg(test)]
pub(crate) mod fake {
    //! 内存中的查询站点

    use super::ResultSource;
    use crate::error::{Result, ScrapeError};
    use std::collections::HashMap;

    pub const FORM_PAGE: &str = r#"<html><body><form method="post">
<input type="hidden" name="__VIEWSTATE" value="vs-token" />
<input type="hidden" name="__EVENTVALIDATION" value="ev-token" />
</form></body></html>"#;

    /// 按准考证号返回预设页面；未登记的号码模拟网络错误
    pub struct FakeBoard {
        pub form_page: String,
        pub pages: HashMap<String, String>,
    }

    impl FakeBoard {
        pub fn new() -> Self {
            FakeBoard {
                form_page: FORM_PAGE.to_string(),
                pages: HashMap::new(),
            }
        }

        pub fn with_page(mut self, roll_no: &str, html: String) -> Self {
            self.pages.insert(roll_no.to_string(), html);
            self
        }
    }

    fn field<'a>(fields: &'a [(&'static str, String)], name: &str) -> &'a str {
        fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
            .unwrap_or("")
    }

    impl ResultSource for FakeBoard {
        fn load_form(&self) -> Result<String> {
            Ok(self.form_page.clone())
        }

        fn submit_form(&self, fields: &[(&'static str, String)]) -> Result<String> {
            if field(fields, "__VIEWSTATE") != "vs-token"
                || field(fields, "__EVENTVALIDATION") != "ev-token"
            {
                return Err(ScrapeError::Other("tokens not echoed".to_string()));
            }
            let roll_no = field(fields, "TxtSearchText");
            self.pages
                .get(roll_no)
                .cloned()
                .ok_or_else(|| ScrapeError::Other(format!("connection reset ({})", roll_no)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fake::FakeBoard;
    use super::*;
    use crate::error::ScrapeError;
    use crate::models::Subject;
    use crate::parsers::result_page::fixtures::result_page;

    #[test]
    fn test_lookup_form_fields() {
        let tokens = FormTokens {
            view_state: "vs".to_string(),
            event_validation: "ev".to_string(),
            view_state_generator: Some("gen".to_string()),
        };
        let fields = lookup_form("520001", &tokens);
        let names: Vec<&str> = fields.iter().map(|(k, _)| *k).collect();

        assert_eq!(
            names,
            vec![
                "__LASTFOCUS",
                "__EVENTTARGET",
                "__EVENTARGUMENT",
                "__VIEWSTATE",
                "__EVENTVALIDATION",
                "__VIEWSTATEGENERATOR",
                "RbtSearchType",
                "TxtSearchText",
                "BtnShowResults",
            ]
        );
        assert!(fields.contains(&("TxtSearchText", "520001".to_string())));
        assert!(fields.contains(&("RbtSearchType", "Search by Roll No.".to_string())));
    }

    #[test]
    fn test_retrieve_result() {
        let board = FakeBoard::new().with_page(
            "520001",
            result_page(Some("520001"), "FAIL CHM", &[("CHEMISTRY", "20")]),
        );
        let record = retrieve_result(&board, "520001").unwrap().unwrap();
        assert_eq!(record.roll_no, "520001");
        assert_eq!(record.mark(Subject::Chemistry), "20");
    }

    #[test]
    fn test_retrieve_without_tokens() {
        let mut board = FakeBoard::new();
        board.form_page = "<html><body>Service unavailable</body></html>".to_string();
        assert!(matches!(
            retrieve_result(&board, "520001"),
            Err(ScrapeError::MissingToken { .. })
        ));
    }
}
