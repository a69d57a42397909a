//! User-facing strings shown by the viewer.
//!
//! The viewer's audience reads Chinese; every label lives here so the
//! widgets, presenter, and formatter agree on exact wording.

// ─────────────────────────────────────────────────────────────────
// Cell markers
// ─────────────────────────────────────────────────────────────────

pub const NULL_MARKER: &str = "NULL";
pub const EMPTY_MARKER: &str = "(空)";
pub const EMPTY_STRING_MARKER: &str = "(空字符串)";
pub const WHITESPACE_MARKER: &str = "(空白字符)";
pub const JSON_BADGE: &str = "JSON";
pub const BOOL_TRUE: &str = "True";
pub const BOOL_FALSE: &str = "False";
pub const ELLIPSIS: &str = "...";

// ─────────────────────────────────────────────────────────────────
// Detail sections
// ─────────────────────────────────────────────────────────────────

pub const SECTION_BASIC: &str = "基本信息";
pub const SECTION_REQUEST: &str = "请求信息";
pub const SECTION_RESPONSE: &str = "响应信息";
pub const DETAIL_TITLE: &str = "记录详情";

// ─────────────────────────────────────────────────────────────────
// Data panel
// ─────────────────────────────────────────────────────────────────

pub const NO_DATA: &str = "暂无数据";
pub const LOADING: &str = "加载中...";
pub const LOAD_FAILED_TITLE: &str = "数据加载失败";
pub const ERROR_TYPE: &str = "错误类型";
pub const TABLE_NAME: &str = "表名";
pub const VIEW_DETAILS_HINT: &str = "按 e 查看详情";
pub const ERROR_DETAIL_TITLE: &str = "错误详情";
pub const INVALID_DATA_FORMAT: &str = "服务器返回了无效的数据格式";
pub const UNKNOWN_ERROR: &str = "未知错误";
pub const NO_TABLE_SELECTED: &str = "请选择一个数据表";

// ─────────────────────────────────────────────────────────────────
// Sidebar / header
// ─────────────────────────────────────────────────────────────────

pub const TABLES_TITLE: &str = "数据表";
pub const TABLE_INFO_TITLE: &str = "表信息";
pub const NO_TABLES: &str = "没有找到数据表";
pub const TABLES_LOAD_FAILED: &str = "加载失败";
pub const DB_CONNECTION_FAILED: &str = "数据库连接失败";
pub const ROW_COUNT: &str = "记录数";
pub const COLUMN_COUNT: &str = "总字段数";
pub const LIST_DISPLAY: &str = "列表显示";
pub const FIELD_STRUCTURE: &str = "字段结构";

/// "表 {table} 中没有记录"
pub fn empty_table(table: &str) -> String {
    format!("表 {} 中没有记录", table)
}

/// "{n} 条记录"
pub fn record_count(n: u64) -> String {
    format!("{} 条记录", n)
}

/// "服务器错误 {status}: {body}"
pub fn server_error(status: u16, body: &str) -> String {
    format!("服务器错误 {}: {}", status, body)
}

/// "加载失败: {reason}"
pub fn load_failed(reason: &str) -> String {
    format!("加载失败: {}", reason)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_labels() {
        assert_eq!(empty_table("users"), "表 users 中没有记录");
        assert_eq!(record_count(0), "0 条记录");
        assert_eq!(server_error(500, "boom"), "服务器错误 500: boom");
        assert_eq!(load_failed("timeout"), "加载失败: timeout");
    }
}
