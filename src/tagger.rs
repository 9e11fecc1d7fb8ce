//! # 不及格科目标注
//!
//! 从总成绩文本（如 `FAIL CHM PHY-I`、`RL PHY(PR)II/BIO`）推断不及格科目。
//!
//! ## 规则
//! 1. 转大写
//! 2. `/` 与 `-` 视为分隔符，按空白切分
//! 3. 每个词去掉 `(PR)`，再去掉结尾的 `II`，否则去掉结尾的 `I`
//! 4. 在不及格代码表中查找
//!
//! 代码之间相互独立，不校验考生是否选修该科目。
//!
//! ## 依赖关系
//! - 被 `export/` 和 `commands/` 使用
//! - 使用 `models/subject.rs`

use crate::models::Subject;

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;

static SEPARATORS: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[/\-\s]+").unwrap());

/// 总成绩中提到的不及格科目
pub fn failed_subjects(overall_result: &str) -> BTreeSet<Subject> {
    let upper = overall_result.to_uppercase();

    SEPARATORS
        .split(&upper)
        .map(clean_token)
        .filter_map(|token| Subject::from_failure_code(&token))
        .collect()
}

/// 清洗单个代码：去掉补考标记和次数后缀
pub fn clean_token(token: &str) -> String {
    let token = token.trim().replace("(PR)", "");

    if let Some(stripped) = token.strip_suffix("II") {
        stripped.to_string()
    } else if let Some(stripped) = token.strip_suffix('I') {
        stripped.to_string()
    } else {
        token
    }
}
