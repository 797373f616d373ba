//! Finish tag 更新规则
//!
//! 不维护全局虚拟时间的 WFQ 变体：每个流只依赖自己的 last_finish。

use super::registry::Flow;

impl Flow {
    /// 为一个到达的 packet 计算 finish tag，并推进本流的虚拟时间。
    ///
    /// `S = max(last_finish, arrival)`，`F = S + length / weight`。
    /// 必须按 ingest（trace）顺序调用，每个被接受的 packet 恰好一次；
    /// 之后对 weight 的修改不会回溯已算出的 tag。
    pub fn stamp(&mut self, arrival: u64, length: u64) -> f64 {
        let start = self.last_finish.max(arrival as f64);
        let tag = start + length as f64 / self.weight as f64;
        self.last_finish = tag;
        tag
    }
}
