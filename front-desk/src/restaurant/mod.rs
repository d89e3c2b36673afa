//! Restaurant point of sale: orders, kitchen steps and bills

pub mod error;
pub mod order;

pub use error::{OrderError, OrderResult};
pub use order::{
    MAX_QUANTITY, add_item, advance_item, bill_order, cancel_order, kitchen_queue, open_order,
    pay_order, recalculate_totals, remove_item, update_quantity,
};
