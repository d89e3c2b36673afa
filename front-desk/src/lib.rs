//! Front Desk - 酒店前台核心
//!
//! # 架构概述
//!
//! 酒店前台的业务规则，全部是内存中的纯计算：
//!
//! - **预订** (`bookings`): 状态流转、按日入住分类、拖拽改期、月度汇总、CSV 导出
//! - **客房** (`rooms`): 房态流转、入住分房、房卡
//! - **员工** (`staff`): 员工状态与任务计时
//! - **餐厅** (`restaurant`): 点单、厨房进度、结账
//! - **存储** (`core`): 显式构造的 [`HotelStore`]，整表替换式更新
//!
//! # 模块结构
//!
//! ```text
//! front-desk/src/
//! ├── core/          # 配置、快照、HotelStore
//! ├── bookings/      # 预订领域
//! ├── rooms/         # 客房与房态
//! ├── restaurant/    # 餐厅 POS
//! ├── staff.rs       # 员工
//! ├── money.rs       # 金额计算 (rust_decimal)
//! └── utils/         # 日志、日期、校验
//! ```

pub mod bookings;
pub mod core;
pub mod money;
pub mod restaurant;
pub mod rooms;
pub mod staff;
pub mod utils;

// Re-export 公共类型
pub use bookings::{BookingError, MonthlyAggregate, TransitionError};
pub use core::{Config, HotelStore, Snapshot};
pub use restaurant::OrderError;
pub use rooms::RoomError;
pub use staff::StaffError;
pub use utils::{AppError, AppResult, DateRange};

// Re-export unified error types from shared
pub use utils::{ErrorCategory, ErrorCode, Notification};

// Re-export logger functions
pub use utils::logger::init_logger_with_file;

/// Load `.env`, read [`Config`] and start logging
pub fn setup_environment() -> Config {
    // .env is optional
    let _ = dotenv::dotenv();
    let config = Config::from_env();
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    config
}
