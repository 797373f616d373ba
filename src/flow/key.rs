//! 流标识符
//!
//! 定义流的唯一标识符。由 trace 层构造；调度核心只把它当作
//! 可比较、可哈希的不透明值。

/// 流标识符（不透明字符串）
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FlowKey(pub String);

impl FlowKey {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}
