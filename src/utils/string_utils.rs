/// Escapes a name for use in an identifier position of a Cypher query
/// (labels, relationship types, property keys).
///
/// The name is always wrapped in backticks and embedded backticks are doubled,
/// so reserved words, spaces and punctuation can never break out of the quoting.
pub fn escape_identifier(name: &str) -> String {
    let mut escaped = String::with_capacity(name.len() + 2);
    escaped.push('`');
    for ch in name.chars() {
        if ch == '`' {
            escaped.push('`');
        }
        escaped.push(ch);
    }
    escaped.push('`');
    escaped
}

/// Alias of the node slot at `index` in a rendered chain (`s0`, `s1`, ...)
pub fn slot_alias(index: usize) -> String {
    format!("s{}", index)
}
