//! 测试数据生成模块
//!
//! 构造回复链形式的路径记录

use chatdb::core::{Node, Path, Record, Relationship};

/// 创建带 text 属性的推文节点
pub fn tweet_node(identity: i64, text: &str) -> Node {
    Node::new(identity, vec!["TweetStatus".to_string()])
        .with_property("id_str", identity.to_string())
        .with_property("text", text)
}

/// 创建回复链：第一个节点为被回复的根消息，之后每个节点回复前一个
pub fn reply_chain(nodes: Vec<Node>) -> Path {
    let mut nodes = nodes.into_iter();
    let root = nodes.next().expect("回复链至少需要一个节点");
    let mut previous = root.identity();
    let mut path = Path::new(root);
    for (offset, node) in nodes.enumerate() {
        let identity = node.identity();
        path = path.step(
            Relationship::new(1000 + offset as i64, "REPLY", identity, previous),
            node,
        );
        previous = identity;
    }
    path
}

/// 把文本表的每一行变成一条 `RETURN path` 记录
pub fn chain_records(rows: &[&[&str]]) -> Vec<Record> {
    let mut identity = 0;
    rows.iter()
        .map(|row| {
            let nodes = row
                .iter()
                .map(|text| {
                    identity += 1;
                    tweet_node(identity, text)
                })
                .collect();
            Record::single("path", reply_chain(nodes))
        })
        .collect()
}

/// 2 条回复链 × 3 个位置
pub fn two_by_three() -> Vec<Record> {
    chain_records(&[
        &["What time is it?", "Noon, why?", "Lunch!"],
        &["Anyone up?", "yes, \"barely\"", "zzz\nzzz"],
    ])
}
