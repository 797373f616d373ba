//! Packet 台账
//!
//! 只追加的 packet 存储。`append` 返回的下标即 ingest 顺序，
//! dispatch 阶段继续使用这些下标，不会失效。

use super::packet::Packet;

#[derive(Debug, Default)]
pub struct PacketLedger {
    pkts: Vec<Packet>,
}

impl PacketLedger {
    /// 追加一个 packet，返回其 ingest 下标
    pub fn append(&mut self, pkt: Packet) -> usize {
        let idx = self.pkts.len();
        self.pkts.push(pkt);
        idx
    }

    pub fn get(&self, idx: usize) -> Option<&Packet> {
        self.pkts.get(idx)
    }

    pub fn len(&self) -> usize {
        self.pkts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pkts.is_empty()
    }

    pub(crate) fn into_inner(self) -> Vec<Packet> {
        self.pkts
    }
}
