//! # 科目与列定义
//!
//! 静态查找表：
//! - 成绩页科目标签 -> 规范科目
//! - 总成绩中的不及格代码 -> 规范科目
//! - 表格列顺序
//!
//! 所有表均为编译期常量，运行时不可修改。
//!
//! ## 依赖关系
//! - 被 `models/record.rs`, `parsers/result_page.rs`, `tagger.rs`, `export/` 使用
//! - 无外部模块依赖

/// 规范科目（声明顺序即表格中的列顺序）
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Subject {
    Islamiyat,
    PakStudies,
    Urdu,
    English,
    Math,
    Physics,
    Chemistry,
    ComputerScience,
    Thq,
    Biology,
}

/// 科目数量
pub const SUBJECT_COUNT: usize = 10;

/// 成绩页标签 -> 科目
const BOARD_LABELS: [(&str, Subject); SUBJECT_COUNT] = [
    ("ISLAMIYAT (COMPULSORY)", Subject::Islamiyat),
    ("PAKISTAN STUDIES (COMPULSORY)", Subject::PakStudies),
    ("URDU", Subject::Urdu),
    ("ENGLISH", Subject::English),
    ("MATHEMATICS", Subject::Math),
    ("PHYSICS", Subject::Physics),
    ("CHEMISTRY", Subject::Chemistry),
    ("COMPUTER SCIENCE", Subject::ComputerScience),
    ("TRANSLATION OF THE HOLY QURAN", Subject::Thq),
    ("BIOLOGY", Subject::Biology),
];

/// 不及格代码 -> 科目
const FAILURE_CODES: [(&str, Subject); SUBJECT_COUNT] = [
    ("BIO", Subject::Biology),
    ("PHY", Subject::Physics),
    ("CHM", Subject::Chemistry),
    ("EGL", Subject::English),
    ("URU", Subject::Urdu),
    ("MAT", Subject::Math),
    ("THQ", Subject::Thq),
    ("PKS", Subject::PakStudies),
    ("ISM", Subject::Islamiyat),
    ("CS", Subject::ComputerScience),
];

/// 表头（列顺序）
pub const COLUMN_ORDER: [&str; 14] = [
    "Roll-No",
    "Candidate Name",
    "Father Name",
    "Islamiyat",
    "Pak Studies",
    "Urdu",
    "English",
    "Math",
    "Physics",
    "Chemistry",
    "Computer Science",
    "THQ",
    "Biology",
    "Overall Result",
];

/// 第一个科目列的下标
pub const FIRST_SUBJECT_COLUMN: usize = 3;

/// 总成绩列的下标
pub const OVERALL_RESULT_COLUMN: usize = FIRST_SUBJECT_COLUMN + SUBJECT_COUNT;

impl Subject {
    pub const ALL: [Subject; SUBJECT_COUNT] = [
        Subject::Islamiyat,
        Subject::PakStudies,
        Subject::Urdu,
        Subject::English,
        Subject::Math,
        Subject::Physics,
        Subject::Chemistry,
        Subject::ComputerScience,
        Subject::Thq,
        Subject::Biology,
    ];

    /// 根据成绩页上的科目标签查找
    pub fn from_board_label(label: &str) -> Option<Subject> {
        BOARD_LABELS
            .iter()
            .find(|(l, _)| *l == label)
            .map(|(_, s)| *s)
    }

    /// 根据总成绩中的不及格代码查找（代码需已清洗）
    pub fn from_failure_code(code: &str) -> Option<Subject> {
        FAILURE_CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, s)| *s)
    }

    /// 在科目数组中的下标
    pub fn index(self) -> usize {
        self as usize
    }

    /// 在表格中的列下标
    pub fn column(self) -> usize {
        FIRST_SUBJECT_COLUMN + self.index()
    }

    /// 规范列名
    pub fn column_name(self) -> &'static str {
        COLUMN_ORDER[self.column()]
    }
}
