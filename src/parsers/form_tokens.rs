//! # ASP.NET 表单令牌解析器
//!
//! 从查询页提取回发所需的隐藏字段。
//!
//! ## 依赖关系
//! - 被 `net/client.rs` 使用
//! - 使用 `scraper` 选择器

use super::selector;
use crate::error::{Result, ScrapeError};
use scraper::Html;

pub const VIEWSTATE: &str = "__VIEWSTATE";
pub const EVENT_VALIDATION: &str = "__EVENTVALIDATION";
pub const VIEWSTATE_GENERATOR: &str = "__VIEWSTATEGENERATOR";

/// 回发令牌（原样回传，不做解释）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormTokens {
    pub view_state: String,
    pub event_validation: String,
    /// 旧版页面可能没有
    pub view_state_generator: Option<String>,
}

/// 解析查询页中的令牌
///
/// `__VIEWSTATE` 或 `__EVENTVALIDATION` 缺失或为空时返回 `MissingToken`。
pub fn parse_form_tokens(html: &str) -> Result<FormTokens> {
    let document = Html::parse_document(html);

    let view_state = hidden_value(&document, VIEWSTATE)?.ok_or_else(|| missing(VIEWSTATE))?;
    let event_validation =
        hidden_value(&document, EVENT_VALIDATION)?.ok_or_else(|| missing(EVENT_VALIDATION))?;
    let view_state_generator = hidden_value(&document, VIEWSTATE_GENERATOR)?;

    Ok(FormTokens {
        view_state,
        event_validation,
        view_state_generator,
    })
}

/// 取 `<input name=..>` 的非空 value
fn hidden_value(document: &Html, name: &str) -> Result<Option<String>> {
    let sel = selector(&format!("input[name=\"{}\"]", name))?;
    Ok(document
        .select(&sel)
        .next()
        .and_then(|input| input.value().attr("value"))
        .filter(|v| !v.is_empty())
        .map(|v| v.to_string()))
}

fn missing(field: &str) -> ScrapeError {
    ScrapeError::MissingToken {
        field: field.to_string(),
    }
}
