//! Packet 类型
//!
//! 定义进入台账的 packet 及其调度参数。

/// 一条被接受的 trace 记录对应的 packet
#[derive(Debug, Clone)]
pub struct Packet {
    pub arrival: u64,
    pub length: u64,
    /// ingest 时一次性计算，之后不可变
    pub finish_tag: f64,
    /// 所属流在 ingest 时的 priority（即发现顺序下标）
    pub priority: usize,
    /// 原始记录文本，输出时原样透传
    pub payload: String,
}
