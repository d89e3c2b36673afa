//! Restaurant orders (餐厅订单)
//!
//! ```text
//! active ──► billed ──► paid
//!    │
//!    └──► cancelled
//! ```
//!
//! Items change only while the order is active. Totals are derived: every
//! operation that touches `items` ends with [`recalculate_totals`].

use rust_decimal::Decimal;
use shared::models::{
    MenuItem, OrderItem, OrderOpen, OrderStatus, PrepStatus, RestaurantOrder,
};
use shared::types::Timestamp;

use super::error::{OrderError, OrderResult};
use crate::money::{line_total, tax_on, to_f64};
use crate::utils::validation::{MAX_NOTE_LEN, MAX_SHORT_TEXT_LEN};

/// Largest quantity a single line may carry
pub const MAX_QUANTITY: u32 = 99;

/// Recompute subtotal, tax and total from the items
pub fn recalculate_totals(order: &mut RestaurantOrder) {
    let subtotal: Decimal = order
        .items
        .iter()
        .map(|item| line_total(item.price, item.quantity))
        .sum();
    let tax = tax_on(subtotal, order.tax_rate);

    order.subtotal = to_f64(subtotal);
    order.tax = to_f64(tax);
    order.total = to_f64(subtotal + tax);
}

fn ensure_active(order: &RestaurantOrder) -> OrderResult<()> {
    if order.status != OrderStatus::Active {
        return Err(OrderError::OrderNotActive {
            order_id: order.id.clone(),
            status: order.status,
        });
    }
    Ok(())
}

fn ensure_quantity(quantity: u32) -> OrderResult<()> {
    if quantity == 0 || quantity > MAX_QUANTITY {
        return Err(OrderError::InvalidQuantity(quantity));
    }
    Ok(())
}

fn item_index(order: &RestaurantOrder, item_id: &str) -> OrderResult<usize> {
    order
        .items
        .iter()
        .position(|i| i.id == item_id)
        .ok_or_else(|| OrderError::ItemNotFound(item_id.to_string()))
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Open an empty order for a table or a room folio
pub fn open_order(
    payload: OrderOpen,
    id: impl Into<String>,
    kot_number: u32,
    tax_rate: f64,
    now: Timestamp,
) -> OrderResult<RestaurantOrder> {
    let table = non_empty(payload.table);
    let room_number = non_empty(payload.room_number);
    if table.is_none() && room_number.is_none() {
        return Err(OrderError::Validation(
            "order needs a table or a room number".into(),
        ));
    }
    for value in table.iter().chain(room_number.iter()) {
        if value.len() > MAX_SHORT_TEXT_LEN {
            return Err(OrderError::Validation(format!(
                "table/room label is too long ({} chars, max {MAX_SHORT_TEXT_LEN})",
                value.len()
            )));
        }
    }
    if !tax_rate.is_finite() || !(0.0..=100.0).contains(&tax_rate) {
        return Err(OrderError::Validation(format!(
            "tax rate must be between 0 and 100, got {tax_rate}"
        )));
    }

    let order = RestaurantOrder {
        id: id.into(),
        table,
        room_number,
        kot_number,
        items: Vec::new(),
        subtotal: 0.0,
        tax: 0.0,
        total: 0.0,
        tax_rate,
        status: OrderStatus::Active,
        created_at: now,
    };
    tracing::info!(order_id = %order.id, kot = kot_number, "Order opened");
    Ok(order)
}

/// Add `quantity` of a menu item
///
/// Merges into an existing line for the same menu item and note while that
/// line is still pending in the kitchen; otherwise a new line `item_id` is
/// appended.
pub fn add_item(
    order: &RestaurantOrder,
    menu_item: &MenuItem,
    quantity: u32,
    note: Option<String>,
    item_id: impl Into<String>,
) -> OrderResult<RestaurantOrder> {
    ensure_active(order)?;
    ensure_quantity(quantity)?;
    if !menu_item.available {
        return Err(OrderError::MenuItemUnavailable(menu_item.id.clone()));
    }
    let note = non_empty(note);
    if let Some(n) = &note
        && n.len() > MAX_NOTE_LEN
    {
        return Err(OrderError::Validation(format!(
            "note is too long ({} chars, max {MAX_NOTE_LEN})",
            n.len()
        )));
    }

    let mut updated = order.clone();
    let mergeable = updated.items.iter_mut().find(|i| {
        i.menu_item_id == menu_item.id && i.status == PrepStatus::Pending && i.note == note
    });
    match mergeable {
        Some(line) => {
            let merged = line.quantity + quantity;
            ensure_quantity(merged)?;
            line.quantity = merged;
        }
        None => updated.items.push(OrderItem {
            id: item_id.into(),
            menu_item_id: menu_item.id.clone(),
            name: menu_item.name.clone(),
            price: menu_item.price,
            quantity,
            status: PrepStatus::Pending,
            note,
        }),
    }
    recalculate_totals(&mut updated);
    Ok(updated)
}

/// Set a line's quantity; 0 removes the line
pub fn update_quantity(
    order: &RestaurantOrder,
    item_id: &str,
    quantity: u32,
) -> OrderResult<RestaurantOrder> {
    if quantity == 0 {
        return remove_item(order, item_id);
    }
    ensure_active(order)?;
    ensure_quantity(quantity)?;
    let idx = item_index(order, item_id)?;

    let mut updated = order.clone();
    updated.items[idx].quantity = quantity;
    recalculate_totals(&mut updated);
    Ok(updated)
}

pub fn remove_item(order: &RestaurantOrder, item_id: &str) -> OrderResult<RestaurantOrder> {
    ensure_active(order)?;
    let idx = item_index(order, item_id)?;

    let mut updated = order.clone();
    updated.items.remove(idx);
    recalculate_totals(&mut updated);
    Ok(updated)
}

/// Move one line to its next kitchen step
pub fn advance_item(order: &RestaurantOrder, item_id: &str) -> OrderResult<RestaurantOrder> {
    ensure_active(order)?;
    let idx = item_index(order, item_id)?;
    let current = order.items[idx].status;
    let next = current
        .next()
        .ok_or_else(|| OrderError::InvalidPrepTransition {
            item_id: item_id.to_string(),
            status: current,
        })?;

    let mut updated = order.clone();
    updated.items[idx].status = next;
    tracing::debug!(order_id = %order.id, item_id, from = %current, to = %next, "Kitchen step");
    Ok(updated)
}

fn transition(
    order: &RestaurantOrder,
    from: OrderStatus,
    to: OrderStatus,
) -> OrderResult<RestaurantOrder> {
    if order.status != from {
        tracing::warn!(
            order_id = %order.id,
            from = %order.status,
            to = %to,
            "Rejected order status change"
        );
        return Err(OrderError::InvalidTransition {
            order_id: order.id.clone(),
            from: order.status,
            to,
        });
    }
    let mut updated = order.clone();
    updated.status = to;
    tracing::info!(order_id = %order.id, status = %to, total = updated.total, "Order status changed");
    Ok(updated)
}

/// Close an active order for payment
pub fn bill_order(order: &RestaurantOrder) -> OrderResult<RestaurantOrder> {
    if order.status == OrderStatus::Active && order.items.is_empty() {
        return Err(OrderError::OrderEmpty(order.id.clone()));
    }
    transition(order, OrderStatus::Active, OrderStatus::Billed)
}

pub fn pay_order(order: &RestaurantOrder) -> OrderResult<RestaurantOrder> {
    transition(order, OrderStatus::Billed, OrderStatus::Paid)
}

pub fn cancel_order(order: &RestaurantOrder) -> OrderResult<RestaurantOrder> {
    transition(order, OrderStatus::Active, OrderStatus::Cancelled)
}

/// Lines the kitchen still has to work on, oldest ticket first
pub fn kitchen_queue(orders: &[RestaurantOrder]) -> Vec<(&RestaurantOrder, &OrderItem)> {
    let mut queue: Vec<_> = orders
        .iter()
        .filter(|o| o.status == OrderStatus::Active)
        .flat_map(|o| {
            o.items
                .iter()
                .filter(|i| matches!(i.status, PrepStatus::Pending | PrepStatus::Preparing))
                .map(move |i| (o, i))
        })
        .collect();
    queue.sort_by_key(|(o, _)| o.kot_number);
    queue
}
