//! 核心模块 - 配置、状态快照与内存存储
//!
//! # 模块结构
//!
//! - [`Config`] - 前台配置
//! - [`Snapshot`] - JSON 状态快照
//! - [`HotelStore`] - 共享内存状态

pub mod config;
pub mod snapshot;
pub mod store;

pub use config::Config;
pub use snapshot::{Snapshot, load_snapshot};
pub use store::HotelStore;
