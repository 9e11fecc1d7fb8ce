//! # 解析器模块
//!
//! 解析成绩查询站点返回的 HTML 页面。
//!
//! ## 依赖关系
//! - 被 `net/` 和 `commands/` 使用
//! - 使用 `models/` 数据模型
//! - 子模块: form_tokens, result_page

pub mod form_tokens;
pub mod result_page;

use crate::error::{Result, ScrapeError};
use scraper::{ElementRef, Selector};

/// 编译 CSS 选择器
pub(crate) fn selector(css: &str) -> Result<Selector> {
    Selector::parse(css).map_err(|e| ScrapeError::ParseError {
        what: format!("selector '{}'", css),
        reason: e.to_string(),
    })
}

/// 元素文本：逐段去除首尾空白后拼接
pub(crate) fn element_text(element: ElementRef<'_>) -> String {
    element.text().map(str::trim).collect()
}
