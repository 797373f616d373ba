//! 流（Flow）模块
//!
//! 此模块包含流的标识符、注册表与 finish tag 更新规则。

// 子模块声明
mod finish;
mod key;
mod registry;

// 重新导出公共接口
pub use key::FlowKey;
pub use registry::{Flow, FlowRegistry};
