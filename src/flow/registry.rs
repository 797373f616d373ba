//! 流注册表
//!
//! 按发现顺序为每个流分配 priority，维护 weight 与每流虚拟时间状态。

use std::collections::HashMap;

use tracing::debug;

use super::key::FlowKey;

/// 单个流的状态
#[derive(Debug, Clone)]
pub struct Flow {
    pub key: FlowKey,
    /// 带权公平的权重，始终 >= 1
    pub weight: u64,
    /// 本流最近一个 packet 的 finish tag（每流虚拟时间）
    pub last_finish: f64,
    /// 发现顺序下标，整个 run 内唯一且不复用
    pub priority: usize,
}

/// 流注册表：FlowKey -> Flow 的关联映射
#[derive(Debug, Default)]
pub struct FlowRegistry {
    index: HashMap<FlowKey, usize>,
    flows: Vec<Flow>,
}

impl FlowRegistry {
    /// 查找或创建流，返回其 id（等于 priority，即发现顺序下标）
    pub fn find_or_create(&mut self, key: &FlowKey) -> usize {
        if let Some(&id) = self.index.get(key) {
            return id;
        }
        let id = self.flows.len();
        debug!(key = key.as_str(), priority = id, "创建新流");
        self.flows.push(Flow {
            key: key.clone(),
            weight: 1,
            last_finish: 0.0,
            priority: id,
        });
        self.index.insert(key.clone(), id);
        id
    }

    /// 覆盖流的 weight；小于 1 的输入归一化为 1
    pub fn set_weight(&mut self, id: usize, weight: i64) {
        self.flows[id].weight = weight.max(1) as u64;
    }

    /// 获取流（id 必须来自 `find_or_create`）
    pub fn get(&self, id: usize) -> &Flow {
        &self.flows[id]
    }

    pub fn get_mut(&mut self, id: usize) -> &mut Flow {
        &mut self.flows[id]
    }

    /// 已发现的流数量
    pub fn len(&self) -> usize {
        self.flows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flows.is_empty()
    }

    /// 按发现顺序遍历所有流
    pub fn iter(&self) -> impl Iterator<Item = &Flow> {
        self.flows.iter()
    }
}
