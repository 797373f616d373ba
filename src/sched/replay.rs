//! 回放驱动
//!
//! 两个严格有序的阶段：先完整 ingest 整个 trace 并按到达顺序计算
//! finish tag，再运行 dispatch 引擎产生调度输出。两个阶段绝不交错。

use std::io::{BufRead, Write};

use thiserror::Error;
use tracing::{debug, info, trace};

use crate::flow::FlowRegistry;
use crate::sched::{DispatchEngine, Packet, PacketLedger};
use crate::stats::RunStats;
use crate::trace::TraceRecord;

/// 回放过程中致命的 I/O 错误。已写出的调度行不会被撤回。
#[derive(Debug, Error)]
pub enum ReplayError {
    #[error("trace I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

/// 回放驱动：ingest 阶段的状态容器
#[derive(Debug, Default)]
pub struct Replay {
    registry: FlowRegistry,
    ledger: PacketLedger,
    skipped_lines: u64,
}

impl Replay {
    /// ingest 一行 trace 文本；格式错误的行被静默跳过。返回是否接受。
    pub fn ingest_line(&mut self, line: &str) -> bool {
        match TraceRecord::parse(line) {
            Ok(rec) => {
                self.ingest(rec);
                true
            }
            Err(err) => {
                trace!(%err, line, "跳过格式错误的行");
                self.skipped_lines += 1;
                false
            }
        }
    }

    /// ingest 一条已解析的记录：查找或创建流 -> 覆盖 weight ->
    /// 计算 finish tag -> 追加台账
    pub fn ingest(&mut self, rec: TraceRecord) {
        let id = self.registry.find_or_create(&rec.key);
        if let Some(w) = rec.weight {
            self.registry.set_weight(id, w);
        }
        let flow = self.registry.get_mut(id);
        let finish_tag = flow.stamp(rec.arrival, rec.length);
        let idx = self.ledger.append(Packet {
            arrival: rec.arrival,
            length: rec.length,
            finish_tag,
            priority: id,
            payload: rec.line,
        });
        debug!(index = idx, flow = id, finish_tag, "接受 packet");
    }

    /// 已接受的 packet 数
    pub fn accepted(&self) -> usize {
        self.ledger.len()
    }

    /// 已跳过的行数
    pub fn skipped(&self) -> u64 {
        self.skipped_lines
    }

    pub fn registry(&self) -> &FlowRegistry {
        &self.registry
    }

    /// 结束 ingest 阶段，构造 dispatch 引擎
    pub fn into_engine(self) -> DispatchEngine {
        DispatchEngine::new(self.ledger)
    }

    /// 完整回放：从 `input` 读 trace，边 dispatch 边向 `out` 写
    /// `"<start>: <记录原文>"`，返回本次 run 的统计。
    pub fn run<R: BufRead, W: Write>(input: R, mut out: W) -> Result<RunStats, ReplayError> {
        info!("▶️  开始回放 trace");

        let mut replay = Replay::default();
        for line in input.lines() {
            replay.ingest_line(&line?);
        }

        let mut stats =
            RunStats::from_ingest(&replay.registry, replay.accepted(), replay.skipped_lines);
        debug!(
            flows = stats.flows,
            accepted = stats.accepted_pkts,
            skipped = stats.skipped_lines,
            "ingest 完成"
        );

        let mut engine = replay.into_engine();
        while let Some(em) = engine.next_emission() {
            writeln!(out, "{}: {}", em.start, em.payload)?;
            stats.record_emission(&em);
        }
        stats.makespan = engine.now();

        info!(
            dispatched = stats.dispatched_pkts,
            makespan = stats.makespan,
            "✅ 回放完成"
        );
        Ok(stats)
    }
}
