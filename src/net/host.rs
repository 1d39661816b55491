//! 主机类型与主机注册表
//!
//! 定义模拟主机及其注册表。数据包中的主机端点是指向注册表的
//! 标识符：主机的生命周期远长于单个数据包，且被许多数据包共享。

use super::id::HostId;
use thiserror::Error;

/// 查询了注册表中不存在的主机。
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown host {0:?}")]
pub struct UnknownHost(pub HostId);

/// 模拟主机
#[derive(Debug)]
pub struct Host {
    id: HostId,
    name: String,
}

impl Host {
    /// 创建新主机
    pub fn new(id: HostId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// 获取主机标识符
    pub fn id(&self) -> HostId {
        self.id
    }

    /// 获取主机名称
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// 主机注册表
#[derive(Debug, Default)]
pub struct HostRegistry {
    hosts: Vec<Host>,
}

impl HostRegistry {
    /// 添加主机
    pub fn add_host(&mut self, name: impl Into<String>) -> HostId {
        let id = HostId(self.hosts.len());
        self.hosts.push(Host::new(id, name));
        id
    }

    /// 按标识符查找主机
    pub fn host(&self, id: HostId) -> Result<&Host, UnknownHost> {
        self.hosts.get(id.0).ok_or(UnknownHost(id))
    }

    pub fn len(&self) -> usize {
        self.hosts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hosts.is_empty()
    }
}
