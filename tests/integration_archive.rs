//! 推文归档集成测试
//!
//! 归档一条回复链后，用路径查询把它读回

mod common;

use std::sync::Arc;

use chatdb::archive::{ParentLink, TweetArchiver};
use chatdb::config::QueryConfig;
use chatdb::core::schema::simple_tweet_status;
use chatdb::core::{Node, Record, Value};
use chatdb::output::ResultProjector;
use chatdb::storage::GraphStore;
use common::assertions::{assert_err_with, assert_ok};
use common::data_fixtures::{reply_chain, tweet_node};
use common::{tweet_chain, TestContext};
use serde_json::json;

fn archiver(ctx: &TestContext) -> TweetArchiver {
    let graph: Arc<dyn GraphStore> = ctx.store.clone();
    TweetArchiver::new(graph, simple_tweet_status(), &QueryConfig::default())
}

#[test]
fn test_reply_links_to_archived_parent() {
    let ctx = TestContext::new();
    let archiver = archiver(&ctx);

    let root = assert_ok(archiver.add_status(&json!({
        "id_str": "100",
        "text": "What time is it?",
        "created_at": "Mon Oct 12 10:00:00 +0000 2026"
    })));
    assert_eq!(root, ParentLink::None);

    // 父消息查找命中已归档的节点
    ctx.respond_with(vec![Record::single(
        "path",
        reply_chain(vec![tweet_node(7, "What time is it?")]),
    )]);
    let reply = assert_ok(archiver.add_status(&json!({
        "id_str": "101",
        "text": "Noon, why?",
        "in_reply_to_status_id_str": "100",
        "entities": {"hashtags": []}
    })));
    assert_eq!(reply, ParentLink::Existing(7));

    let executed = ctx.store.executed();
    assert_eq!(executed.len(), 4);
    assert_eq!(
        executed[1].query,
        "MATCH path = (s0:`TweetStatus`) WHERE s0.`id_str` = $1 RETURN path LIMIT 1"
    );
    assert_eq!(executed[1].parameters["1"], Value::from("100"));
    assert_eq!(
        executed[3].query,
        "MATCH (s:`TweetStatus` {`id_str`: $key}), (p) WHERE id(p) = $parent \
         MERGE (s)-[:`REPLY`]->(p)"
    );
    assert_eq!(executed[3].parameters["parent"], Value::Int(7));

    let Value::Map(properties) = &executed[2].parameters["properties"] else {
        panic!("properties 应为 Map");
    };
    assert!(properties.contains_key("in_reply_to_status_id_str"));
    assert!(!properties.keys().any(|key| key.starts_with("entities")));
}

#[test]
fn test_reply_to_unknown_parent_creates_placeholder() {
    let ctx = TestContext::new();
    let link = assert_ok(archiver(&ctx).add_status(&json!({
        "id_str": "201",
        "text": "late reply",
        "in_reply_to_status_id_str": "200"
    })));
    assert_eq!(link, ParentLink::Placeholder("200".to_string()));

    let last = ctx.store.last_executed().expect("应记录连接查询");
    assert_eq!(
        last.query,
        "MATCH (s:`TweetStatus` {`id_str`: $key}) MERGE (p:`TweetStatus` {`id_str`: $parent}) \
         MERGE (s)-[:`REPLY`]->(p)"
    );
    assert_eq!(last.parameters["key"], Value::from("201"));
}

#[test]
fn test_status_without_primary_key_is_rejected() {
    let ctx = TestContext::new();
    assert_err_with(archiver(&ctx).add_status(&json!({"text": "anonymous"})), "id_str");
    assert_err_with(archiver(&ctx).add_status(&json!(["not", "an", "object"])), "JSON");
    assert!(ctx.store.executed().is_empty());
}

#[test]
fn test_custom_relationship_flows_into_archive_and_queries() {
    let ctx = TestContext::new();
    let config = QueryConfig {
        reply_relationship: "ANSWERS".to_string(),
    };
    let graph: Arc<dyn GraphStore> = ctx.store.clone();
    let archiver = TweetArchiver::new(graph, simple_tweet_status(), &config);

    let link = assert_ok(archiver.add_status(&json!({
        "id_str": "a1",
        "text": "hi",
        "in_reply_to_status_id_str": "a0"
    })));
    assert_eq!(link, ParentLink::Placeholder("a0".to_string()));
    let last = ctx.store.last_executed().expect("应记录连接查询");
    assert!(last.query.ends_with("MERGE (s)-[:`ANSWERS`]->(p)"));
}

#[test]
fn test_archived_chain_exports_as_rows() {
    let ctx = TestContext::new();
    let nodes: Vec<Node> = ["What time is it?", "Noon, why?"]
        .iter()
        .enumerate()
        .map(|(i, text)| tweet_node(i as i64 + 1, text))
        .collect();
    ctx.respond_with(vec![Record::single("path", reply_chain(nodes))]);

    let builder = assert_ok(ctx.matcher.match_path(tweet_chain(2), Some(Value::from("1"))));
    let mut buffer = Vec::new();
    assert_ok(ResultProjector::new(builder).export_rows(&mut buffer, b','));

    let text = String::from_utf8(buffer).expect("UTF-8");
    assert_eq!(text, "What time is it?,\"Noon, why?\"\n");
}
