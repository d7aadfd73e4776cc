//! 结果导出集成测试
//!
//! 通过临时文件验证按行/按列导出的内容，读回时不带表头

mod common;

use chatdb::config::ExportConfig;
use chatdb::core::{ChatDBError, ExportError, Record, StorageError};
use chatdb::output::{transpose, ResultProjector};
use common::assertions::{assert_err_with, assert_ok, read_csv};
use common::data_fixtures::{reply_chain, tweet_node, two_by_three};
use common::{tweet_chain, TestContext};
use tempfile::TempDir;

fn projector(ctx: &TestContext, records: Vec<Record>) -> ResultProjector {
    ctx.respond_with(records);
    ResultProjector::new(assert_ok(ctx.matcher.match_path(tweet_chain(3), None)))
}

fn expected_rows() -> Vec<Vec<String>> {
    vec![
        vec!["What time is it?".into(), "Noon, why?".into(), "Lunch!".into()],
        vec!["Anyone up?".into(), "yes, \"barely\"".into(), "zzz\nzzz".into()],
    ]
}

#[test]
fn test_export_rows_round_trip() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("rows.csv");
    let ctx = TestContext::new();

    assert_ok(projector(&ctx, two_by_three()).export_rows_to_path(&path, b','));

    assert_eq!(read_csv(&path, b','), expected_rows());
}

#[test]
fn test_export_rows_with_tab_delimiter() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("rows.tsv");
    let ctx = TestContext::new();

    assert_ok(projector(&ctx, two_by_three()).export_rows_to_path(&path, b'\t'));

    assert_eq!(read_csv(&path, b'\t'), expected_rows());
}

#[test]
fn test_export_columns_round_trip() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let paths: Vec<_> = (0..3)
        .map(|i| dir.path().join(format!("position_{}.txt", i)))
        .collect();
    let ctx = TestContext::new();

    assert_ok(projector(&ctx, two_by_three()).export_columns_to_paths(&paths));

    let columns = transpose(&expected_rows(), 3);
    for (path, column) in paths.iter().zip(columns) {
        let read: Vec<String> = read_csv(path, b',')
            .into_iter()
            .map(|mut row| row.remove(0))
            .collect();
        assert_eq!(read, column);
    }
}

#[test]
fn test_export_columns_count_mismatch_writes_nothing() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let paths: Vec<_> = (0..2)
        .map(|i| dir.path().join(format!("position_{}.txt", i)))
        .collect();
    let ctx = TestContext::new();
    let projector = projector(&ctx, two_by_three());

    let result = projector.export_columns_to_paths(&paths);
    assert!(matches!(
        result,
        Err(ChatDBError::Export(ExportError::DestinationCountMismatch {
            expected: 3,
            actual: 2
        }))
    ));
    assert!(paths.iter().all(|path| !path.exists()));
    // 校验先于查询执行
    assert!(ctx.store.executed().is_empty());
}

#[test]
fn test_export_to_missing_directory_names_destination() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("missing").join("rows.csv");
    let ctx = TestContext::new();

    let result = projector(&ctx, two_by_three()).export_rows_to_path(&path, b',');
    assert_err_with(result, "rows.csv");
}

#[test]
fn test_malformed_record_is_rejected() {
    let ctx = TestContext::new();
    let short = Record::single(
        "path",
        reply_chain(vec![tweet_node(1, "only"), tweet_node(2, "two")]),
    );
    let projector = projector(&ctx, vec![short]);

    let result = projector.extract();
    assert!(matches!(
        result,
        Err(ChatDBError::Storage(StorageError::MalformedRecord {
            row: 0,
            expected: 3,
            actual: 2
        }))
    ));
}

#[test]
fn test_missing_field_extracts_as_empty() {
    let ctx = TestContext::new();
    let projector = projector(&ctx, two_by_three()).with_field("user_name");

    let table = assert_ok(projector.extract());
    assert_eq!(table.len(), 2);
    assert!(table.iter().flatten().all(String::is_empty));
}

#[test]
fn test_extract_identifier_field() {
    let ctx = TestContext::new();
    let projector = projector(&ctx, two_by_three()).with_field("id_str");

    let table = assert_ok(projector.extract());
    assert_eq!(table[1], vec!["4", "5", "6"]);
    assert_eq!(
        ctx.store.last_executed().map(|q| q.parameters.is_empty()),
        Some(true)
    );
}

fn read_column(buffer: &[u8]) -> Vec<String> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .from_reader(buffer)
        .records()
        .map(|record| record.expect("读取 CSV 记录失败")[0].to_string())
        .collect()
}

#[test]
fn test_export_columns_to_writers_round_trip() {
    let ctx = TestContext::new();
    let mut sinks: Vec<Vec<u8>> = vec![Vec::new(), Vec::new(), Vec::new()];

    assert_ok(projector(&ctx, two_by_three()).export_columns(sinks.iter_mut().collect()));

    let columns = transpose(&expected_rows(), 3);
    for (sink, column) in sinks.iter().zip(columns) {
        assert_eq!(read_column(sink), column);
    }
}

#[test]
fn test_export_columns_writer_count_mismatch() {
    let ctx = TestContext::new();
    let projector = projector(&ctx, two_by_three());
    let mut sinks: Vec<Vec<u8>> = vec![Vec::new(); 4];

    let result = projector.export_columns(sinks.iter_mut().collect());
    assert!(matches!(
        result,
        Err(ChatDBError::Export(ExportError::DestinationCountMismatch {
            expected: 3,
            actual: 4
        }))
    ));
    assert!(sinks.iter().all(Vec::is_empty));
    assert!(ctx.store.executed().is_empty());
}

#[test]
fn test_export_delimited_uses_config() {
    let dir = TempDir::new().expect("创建临时目录失败");
    let path = dir.path().join("rows.tsv");
    let ctx = TestContext::new();
    ctx.respond_with(two_by_three());
    let config = ExportConfig {
        delimiter: '\t',
        ..ExportConfig::default()
    };
    let builder = assert_ok(ctx.matcher.match_path(tweet_chain(3), None));

    let projector = assert_ok(ResultProjector::with_config(builder, &config));
    assert_ok(projector.export_delimited_to_path(&path));

    assert_eq!(read_csv(&path, b'\t'), expected_rows());
}

#[cfg(not(feature = "frame"))]
#[test]
fn test_tabular_frame_requires_feature() {
    let ctx = TestContext::new();
    ctx.store
        .push_error(StorageError::ConnectionError("connection refused".to_string()));
    let builder = assert_ok(ctx.matcher.match_path(tweet_chain(3), None));

    let result = ResultProjector::new(builder).to_tabular_frame(None);
    assert!(matches!(
        result,
        Err(ChatDBError::Export(ExportError::DependencyUnavailable {
            dependency: "tabled",
            ..
        }))
    ));
    assert!(ctx.store.executed().is_empty());
}

#[cfg(feature = "frame")]
#[test]
fn test_tabular_frame_renders_rows() {
    let ctx = TestContext::new();
    let names = vec!["question".to_string(), "answer".to_string(), "follow-up".to_string()];

    let frame = assert_ok(projector(&ctx, two_by_three()).to_tabular_frame(Some(names)));
    let rendered = frame.to_string();
    assert!(rendered.contains("follow-up"));
    assert!(rendered.contains("Lunch!"));
    assert!(rendered.contains("Anyone up?"));
}
