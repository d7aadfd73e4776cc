//! 自定义断言辅助模块
//!
//! 提供测试中的常用断言函数

use std::path::Path;

/// 断言结果成功，返回内部值
pub fn assert_ok<T, E: std::fmt::Debug>(result: Result<T, E>) -> T {
    result.expect("操作应该成功")
}

/// 断言结果失败并匹配错误消息
pub fn assert_err_with<T: std::fmt::Debug, E: std::fmt::Display>(result: Result<T, E>, expected_msg: &str) {
    let err = result.expect_err("操作应该失败");
    let err_str = err.to_string();
    assert!(
        err_str.contains(expected_msg),
        "错误消息应包含 '{}', 实际是 '{}'",
        expected_msg,
        err_str
    );
}

/// 读回无表头的 CSV 文件
pub fn read_csv(path: &Path, delimiter: u8) -> Vec<Vec<String>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .delimiter(delimiter)
        .from_path(path)
        .expect("打开 CSV 文件失败");
    reader
        .records()
        .map(|record| {
            record
                .expect("读取 CSV 记录失败")
                .iter()
                .map(str::to_string)
                .collect()
        })
        .collect()
}
