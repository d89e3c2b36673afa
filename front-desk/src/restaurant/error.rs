use shared::error::{AppError, ErrorCode};
use shared::models::{OrderStatus, PrepStatus};
use thiserror::Error;

/// Restaurant POS errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Order {order_id} is {status}, items can no longer change")]
    OrderNotActive {
        order_id: String,
        status: OrderStatus,
    },

    #[error("Order item not found: {0}")]
    ItemNotFound(String),

    #[error("Invalid quantity: {0}")]
    InvalidQuantity(u32),

    #[error("Item {item_id} is already {status}")]
    InvalidPrepTransition { item_id: String, status: PrepStatus },

    #[error("Order {order_id}: cannot move from {from} to {to}")]
    InvalidTransition {
        order_id: String,
        from: OrderStatus,
        to: OrderStatus,
    },

    #[error("Order {0} has no items")]
    OrderEmpty(String),

    #[error("Menu item unavailable: {0}")]
    MenuItemUnavailable(String),

    #[error("Validation failed: {0}")]
    Validation(String),
}

pub type OrderResult<T> = Result<T, OrderError>;

impl From<OrderError> for AppError {
    fn from(err: OrderError) -> Self {
        let message = err.to_string();
        match err {
            OrderError::OrderNotFound(id) => {
                AppError::with_message(ErrorCode::OrderNotFound, message).with_detail("order_id", id)
            }
            OrderError::OrderNotActive { order_id, status } => {
                AppError::with_message(ErrorCode::OrderNotActive, message)
                    .with_detail("order_id", order_id)
                    .with_detail("status", status.as_str())
            }
            OrderError::ItemNotFound(id) => {
                AppError::with_message(ErrorCode::OrderItemNotFound, message)
                    .with_detail("item_id", id)
            }
            OrderError::InvalidQuantity(q) => {
                AppError::with_message(ErrorCode::InvalidQuantity, message)
                    .with_detail("quantity", q)
            }
            OrderError::InvalidPrepTransition { item_id, status } => {
                AppError::with_message(ErrorCode::InvalidPrepTransition, message)
                    .with_detail("item_id", item_id)
                    .with_detail("status", status.as_str())
            }
            OrderError::InvalidTransition { order_id, from, to } => {
                AppError::with_message(ErrorCode::InvalidOrderTransition, message)
                    .with_detail("order_id", order_id)
                    .with_detail("from", from.as_str())
                    .with_detail("to", to.as_str())
            }
            OrderError::OrderEmpty(id) => {
                AppError::with_message(ErrorCode::OrderEmpty, message).with_detail("order_id", id)
            }
            OrderError::MenuItemUnavailable(id) => {
                AppError::with_message(ErrorCode::MenuItemUnavailable, message)
                    .with_detail("menu_item_id", id)
            }
            OrderError::Validation(msg) => AppError::validation(msg),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_active_maps_to_code() {
        let app: AppError = OrderError::OrderNotActive {
            order_id: "O1".into(),
            status: OrderStatus::Paid,
        }
        .into();
        assert_eq!(app.code, ErrorCode::OrderNotActive);
        assert_eq!(app.message, "Order O1 is paid, items can no longer change");
    }
}
