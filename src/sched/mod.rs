//! 调度核心模块
//!
//! 此模块包含 packet 台账、dispatch 引擎与 trace 回放驱动。

// 子模块声明
mod dispatch;
mod ledger;
mod packet;
mod replay;

// 重新导出公共接口
pub use dispatch::{DispatchEngine, Emission};
pub use ledger::PacketLedger;
pub use packet::Packet;
pub use replay::{Replay, ReplayError};
