use once_cell::sync::Lazy;
use regex::Regex;

// 不允许路径分隔符、NUL 和其它控制字符
static SEGMENT_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^/\\\x00-\x1f\x7f]+$").expect("Invalid path segment regex"));

/// 校验用户输入能否安全地作为单个路径段使用
///
/// 科目名直接作为目录名、作业编号拼进文件名，必须挡住目录穿越：
/// 空串、`.` 开头（含 `.` / `..`）、包含 `/` 或 `\`、包含控制字符都会被拒绝。
pub fn validate_path_segment(segment: &str) -> Result<(), &'static str> {
    if segment.is_empty() {
        return Err("must not be empty");
    }
    if segment.starts_with('.') {
        return Err("must not start with '.'");
    }
    if !SEGMENT_RE.is_match(segment) {
        return Err("must not contain path separators or control characters");
    }
    Ok(())
}
