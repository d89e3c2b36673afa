//! HotelStore - 前台内存状态
//!
//! One explicit store built at startup and handed to every consumer as a
//! cloned handle. Collections are never patched in place: each write builds
//! the next collection and swaps it in under the write lock, so a reader
//! always sees a whole before-or-after state.

use std::sync::Arc;

use chrono::NaiveDate;
use parking_lot::RwLock;
use shared::error::{AppError, AppResult};
use shared::models::{
    Booking, BookingCreate, BookingStatus, Hotel, MenuItem, OrderOpen, PhysicalRoom,
    RestaurantOrder, RoomStatus, StaffMember, StaffStatus,
};
use shared::util::{now_millis, prefixed_id};

use super::config::Config;
use super::snapshot::Snapshot;
use crate::bookings::{
    self, BookingError, DayOccupancy, DaySheet, MonthlyAggregate, MonthlyReport, StatusCounts,
    transition,
};
use crate::restaurant::{self, OrderError, OrderResult};
use crate::rooms::{self, RoomError, RoomStatusSummary};
use crate::staff::{self, StaffError, StaffResult, StaffSummary};
use crate::utils::DateRange;

/// Entities addressed by a string id
trait Keyed {
    fn key(&self) -> &str;
}

macro_rules! impl_keyed {
    ($($ty:ty),* $(,)?) => {
        $(impl Keyed for $ty {
            fn key(&self) -> &str {
                &self.id
            }
        })*
    };
}

impl_keyed!(Hotel, Booking, PhysicalRoom, StaffMember, RestaurantOrder, MenuItem);

/// Next collection with `updated` in place of the item sharing its key
fn replaced<T: Keyed + Clone>(items: &[T], updated: T) -> Vec<T> {
    items
        .iter()
        .map(|item| {
            if item.key() == updated.key() {
                updated.clone()
            } else {
                item.clone()
            }
        })
        .collect()
}

/// Next collection with `item` appended
fn appended<T: Clone>(items: &[T], item: T) -> Vec<T> {
    let mut next = Vec::with_capacity(items.len() + 1);
    next.extend_from_slice(items);
    next.push(item);
    next
}

fn find<'a, T: Keyed>(items: &'a [T], id: &str) -> Option<&'a T> {
    items.iter().find(|item| item.key() == id)
}

#[derive(Debug, Default)]
struct StoreState {
    hotels: Vec<Hotel>,
    bookings: Vec<Booking>,
    rooms: Vec<PhysicalRoom>,
    staff: Vec<StaffMember>,
    orders: Vec<RestaurantOrder>,
    menu: Vec<MenuItem>,
}

impl StoreState {
    fn booking(&self, id: &str) -> Result<&Booking, BookingError> {
        find(&self.bookings, id).ok_or_else(|| BookingError::BookingNotFound(id.to_string()))
    }

    fn room(&self, id: &str) -> Result<&PhysicalRoom, RoomError> {
        find(&self.rooms, id).ok_or_else(|| RoomError::RoomNotFound(id.to_string()))
    }

    fn staff_member(&self, id: &str) -> StaffResult<&StaffMember> {
        find(&self.staff, id).ok_or_else(|| StaffError::StaffNotFound(id.to_string()))
    }

    fn order(&self, id: &str) -> OrderResult<&RestaurantOrder> {
        find(&self.orders, id).ok_or_else(|| OrderError::OrderNotFound(id.to_string()))
    }

    /// Hotel/room type check; skipped while no hotel catalog is loaded
    fn check_room_type(&self, hotel_id: &str, room_type_id: &str) -> Result<(), RoomError> {
        if self.hotels.is_empty() {
            return Ok(());
        }
        let hotel =
            find(&self.hotels, hotel_id).ok_or_else(|| RoomError::HotelNotFound(hotel_id.into()))?;
        hotel
            .room_type(room_type_id)
            .map(|_| ())
            .ok_or_else(|| RoomError::RoomTypeNotFound(room_type_id.into()))
    }

    fn room_type_capacity(&self, hotel_id: &str, room_type_id: &str) -> Result<u32, RoomError> {
        let hotel =
            find(&self.hotels, hotel_id).ok_or_else(|| RoomError::HotelNotFound(hotel_id.into()))?;
        hotel
            .room_type(room_type_id)
            .map(|rt| rt.total_rooms)
            .ok_or_else(|| RoomError::RoomTypeNotFound(room_type_id.into()))
    }

    fn insert_booking(&mut self, booking: Booking) -> AppResult<()> {
        if booking.check_out <= booking.check_in {
            return Err(BookingError::InvalidDateRange {
                check_in: booking.check_in,
                check_out: booking.check_out,
            }
            .into());
        }
        if find(&self.bookings, &booking.id).is_some() {
            return Err(BookingError::BookingAlreadyExists(booking.id).into());
        }
        let next = appended(&self.bookings, booking);
        self.bookings = next;
        Ok(())
    }
}

/// Shared front desk state handle
///
/// Cloning is cheap; all clones see the same state.
#[derive(Clone)]
pub struct HotelStore {
    config: Arc<Config>,
    state: Arc<RwLock<StoreState>>,
}

impl std::fmt::Debug for HotelStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("HotelStore")
            .field("hotels", &state.hotels.len())
            .field("bookings", &state.bookings.len())
            .field("rooms", &state.rooms.len())
            .field("staff", &state.staff.len())
            .field("orders", &state.orders.len())
            .finish()
    }
}

impl HotelStore {
    /// Empty store
    pub fn new(config: Config) -> Self {
        Self {
            config: Arc::new(config),
            state: Arc::new(RwLock::new(StoreState::default())),
        }
    }

    /// Store seeded from a snapshot
    ///
    /// Bookings go through the same date-range and duplicate checks as
    /// [`HotelStore::insert_booking`].
    pub fn from_snapshot(config: Config, snapshot: Snapshot) -> AppResult<Self> {
        let mut state = StoreState {
            hotels: snapshot.hotels,
            rooms: snapshot.rooms,
            staff: snapshot.staff,
            orders: snapshot.orders,
            menu: snapshot.menu,
            bookings: Vec::with_capacity(snapshot.bookings.len()),
        };
        for booking in snapshot.bookings {
            state.insert_booking(booking)?;
        }
        tracing::info!(
            hotels = state.hotels.len(),
            bookings = state.bookings.len(),
            rooms = state.rooms.len(),
            staff = state.staff.len(),
            orders = state.orders.len(),
            "HotelStore loaded"
        );
        Ok(Self {
            config: Arc::new(config),
            state: Arc::new(RwLock::new(state)),
        })
    }

    /// Copy of the whole state
    pub fn snapshot(&self) -> Snapshot {
        let state = self.state.read();
        Snapshot {
            hotels: state.hotels.clone(),
            bookings: state.bookings.clone(),
            rooms: state.rooms.clone(),
            staff: state.staff.clone(),
            orders: state.orders.clone(),
            menu: state.menu.clone(),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    pub fn hotels(&self) -> Vec<Hotel> {
        self.state.read().hotels.clone()
    }

    pub fn hotel(&self, id: &str) -> AppResult<Hotel> {
        let state = self.state.read();
        find(&state.hotels, id)
            .cloned()
            .ok_or_else(|| RoomError::HotelNotFound(id.to_string()).into())
    }

    pub fn add_hotel(&self, hotel: Hotel) -> AppResult<()> {
        let mut state = self.state.write();
        if find(&state.hotels, &hotel.id).is_some() {
            return Err(AppError::already_exists(format!("hotel {}", hotel.id)));
        }
        tracing::info!(hotel_id = %hotel.id, name = %hotel.name, "Hotel added");
        let next = appended(&state.hotels, hotel);
        state.hotels = next;
        Ok(())
    }

    // =========================================================================
    // Bookings
    // =========================================================================

    pub fn bookings(&self) -> Vec<Booking> {
        self.state.read().bookings.clone()
    }

    pub fn booking(&self, id: &str) -> AppResult<Booking> {
        Ok(self.state.read().booking(id)?.clone())
    }

    /// Run a read-only query against the current booking list
    pub fn with_bookings<R>(&self, f: impl FnOnce(&[Booking]) -> R) -> R {
        f(&self.state.read().bookings)
    }

    /// Validate and add a new booking (id generated here)
    pub fn create_booking(&self, payload: BookingCreate) -> AppResult<Booking> {
        let mut state = self.state.write();
        state.check_room_type(&payload.hotel_id, &payload.room_type_id)?;
        let booking = bookings::create_booking(payload, prefixed_id("BK"), now_millis())?;
        state.insert_booking(booking.clone())?;
        Ok(booking)
    }

    /// Add an existing booking record (import, seeding)
    pub fn insert_booking(&self, booking: Booking) -> AppResult<()> {
        self.state.write().insert_booking(booking)
    }

    /// Apply a status change by booking id
    ///
    /// `checked-in` and `checked-out` go through [`HotelStore::check_in_booking`]
    /// and [`HotelStore::check_out_booking`] so the room side follows.
    pub fn update_booking_status(&self, id: &str, target: BookingStatus) -> AppResult<Booking> {
        match target {
            BookingStatus::CheckedIn => self.check_in_booking(id, None),
            BookingStatus::CheckedOut => self.check_out_booking(id),
            _ => {
                let mut state = self.state.write();
                let updated = transition::attempt_status_transition(state.booking(id)?, target)?;
                let next = replaced(&state.bookings, updated.clone());
                state.bookings = next;
                tracing::info!(booking_id = %id, status = %target, "Booking status changed");
                Ok(updated)
            }
        }
    }

    pub fn confirm_booking(&self, id: &str) -> AppResult<Booking> {
        self.update_booking_status(id, BookingStatus::Confirmed)
    }

    pub fn cancel_booking(&self, id: &str) -> AppResult<Booking> {
        self.update_booking_status(id, BookingStatus::Cancelled)
    }

    pub fn complete_booking(&self, id: &str) -> AppResult<Booking> {
        self.update_booking_status(id, BookingStatus::Completed)
    }

    /// Check a guest in and put them in a room
    ///
    /// With `room_id = None` the lowest-numbered available room of the booked
    /// type is used. Hotels without registered physical rooms for that type
    /// check in without an assignment.
    pub fn check_in_booking(&self, id: &str, room_id: Option<&str>) -> AppResult<Booking> {
        let mut state = self.state.write();
        let current = state.booking(id)?.clone();
        let mut updated = transition::check_in(&current, now_millis())?;

        let has_rooms = state
            .rooms
            .iter()
            .any(|r| r.hotel_id == current.hotel_id && r.room_type_id == current.room_type_id);
        let room = match room_id {
            Some(room_id) => Some(state.room(room_id)?.clone()),
            None if has_rooms => Some(
                rooms::find_available_room(&state.rooms, &current.hotel_id, &current.room_type_id)
                    .cloned()
                    .ok_or_else(|| RoomError::NoRoomAvailable {
                        hotel_id: current.hotel_id.clone(),
                        room_type_id: current.room_type_id.clone(),
                    })?,
            ),
            None => None,
        };

        if let Some(room) = room {
            let key_card = rooms::issue_key_card(&self.config.key_card_prefix, &room.room_number);
            let occupied = rooms::assign_room(&room, &current, key_card)?;
            updated.room_id = Some(occupied.id.clone());
            tracing::info!(
                booking_id = %id,
                room_number = %occupied.room_number,
                "Room assigned"
            );
            let next = replaced(&state.rooms, occupied);
            state.rooms = next;
        }

        let next = replaced(&state.bookings, updated.clone());
        state.bookings = next;
        tracing::info!(booking_id = %id, guest = %updated.guest.name, "Guest checked in");
        Ok(updated)
    }

    /// Check a guest out; the assigned room turns dirty
    pub fn check_out_booking(&self, id: &str) -> AppResult<Booking> {
        let mut state = self.state.write();
        let current = state.booking(id)?.clone();
        let updated = transition::check_out(&current, now_millis())?;

        let released = match current.room_id.as_deref() {
            Some(room_id) => match find(&state.rooms, room_id) {
                Some(room) if room.current_booking_id.as_deref() == Some(id) => {
                    Some(rooms::release_room(room)?)
                }
                _ => {
                    tracing::warn!(booking_id = %id, room_id, "Assigned room no longer linked");
                    None
                }
            },
            None => None,
        };
        if let Some(room) = released {
            let next = replaced(&state.rooms, room);
            state.rooms = next;
        }

        let next = replaced(&state.bookings, updated.clone());
        state.bookings = next;
        tracing::info!(booking_id = %id, "Guest checked out");
        Ok(updated)
    }

    /// Move a stay to start on `anchor`, keeping its length
    pub fn reschedule_booking(&self, id: &str, anchor: NaiveDate) -> AppResult<Booking> {
        let mut state = self.state.write();
        let updated = bookings::reschedule_booking(state.booking(id)?, anchor);
        let next = replaced(&state.bookings, updated.clone());
        state.bookings = next;
        tracing::info!(
            booking_id = %id,
            check_in = %updated.check_in,
            check_out = %updated.check_out,
            "Booking rescheduled"
        );
        Ok(updated)
    }

    /// Per-day counts for one date
    pub fn day_occupancy(&self, hotel_id: Option<&str>, date: NaiveDate) -> DayOccupancy {
        self.with_bookings(|b| bookings::classify_bookings_for_day(b, hotel_id, date).counts())
    }

    pub fn occupancy_series(&self, hotel_id: Option<&str>, range: &DateRange) -> Vec<DayOccupancy> {
        self.with_bookings(|b| bookings::occupancy_series(b, hotel_id, range))
    }

    /// Free rooms of a type for one night, capacity taken from the catalog
    pub fn available_rooms(
        &self,
        hotel_id: &str,
        room_type_id: &str,
        date: NaiveDate,
    ) -> AppResult<u32> {
        let state = self.state.read();
        let capacity = state.room_type_capacity(hotel_id, room_type_id)?;
        let hotel_bookings: Vec<Booking> = state
            .bookings
            .iter()
            .filter(|b| b.hotel_id == hotel_id)
            .cloned()
            .collect();
        Ok(bookings::available_rooms(
            &hotel_bookings,
            capacity,
            room_type_id,
            date,
        ))
    }

    pub fn monthly_aggregate(&self, hotel_id: Option<&str>, range: &DateRange) -> MonthlyAggregate {
        self.with_bookings(|b| bookings::monthly_aggregate(b, hotel_id, range))
    }

    /// Monthly aggregate in the configured currency
    pub fn monthly_report(&self, hotel_id: Option<&str>, range: &DateRange) -> MonthlyReport {
        self.with_bookings(|b| MonthlyReport::new(b, hotel_id, range, &self.config.currency))
    }

    /// Day sheet with the configured standard check-in/check-out times
    pub fn day_sheet(&self, hotel_id: Option<&str>, date: NaiveDate) -> DaySheet {
        self.with_bookings(|b| {
            DaySheet::new(
                b,
                hotel_id,
                date,
                self.config.check_in_time,
                self.config.check_out_time,
            )
        })
    }

    pub fn status_counts(&self, hotel_id: Option<&str>) -> StatusCounts {
        self.with_bookings(|b| bookings::status_counts(b, hotel_id))
    }

    pub fn export_csv(&self) -> String {
        self.with_bookings(bookings::export_bookings_csv)
    }

    // =========================================================================
    // Rooms
    // =========================================================================

    pub fn rooms(&self) -> Vec<PhysicalRoom> {
        self.state.read().rooms.clone()
    }

    pub fn room(&self, id: &str) -> AppResult<PhysicalRoom> {
        Ok(self.state.read().room(id)?.clone())
    }

    pub fn add_room(&self, room: PhysicalRoom) -> AppResult<()> {
        let mut state = self.state.write();
        if find(&state.rooms, &room.id).is_some() {
            return Err(AppError::already_exists(format!("room {}", room.id)));
        }
        state.check_room_type(&room.hotel_id, &room.room_type_id)?;
        let next = appended(&state.rooms, room);
        state.rooms = next;
        Ok(())
    }

    /// Housekeeping status change
    ///
    /// `occupied` is only reachable through check-in, and a room holding a
    /// guest is only released through check-out.
    pub fn set_room_status(&self, room_id: &str, target: RoomStatus) -> AppResult<PhysicalRoom> {
        let mut state = self.state.write();
        let room = state.room(room_id)?;
        if target == RoomStatus::Occupied {
            return Err(AppError::invalid(format!(
                "Room {room_id} can only become occupied through check-in"
            )));
        }
        if let Some(booking_id) = &room.current_booking_id {
            return Err(AppError::invalid(format!(
                "Room {room_id} is held by booking {booking_id}"
            ))
            .with_detail("booking_id", booking_id.clone()));
        }
        let updated = rooms::change_room_status(room, target)?;
        let next = replaced(&state.rooms, updated.clone());
        state.rooms = next;
        tracing::info!(room_id, status = %target, "Room status changed");
        Ok(updated)
    }

    pub fn room_status_summary(&self, hotel_id: Option<&str>) -> RoomStatusSummary {
        rooms::room_status_summary(&self.state.read().rooms, hotel_id)
    }

    // =========================================================================
    // Staff
    // =========================================================================

    pub fn staff(&self) -> Vec<StaffMember> {
        self.state.read().staff.clone()
    }

    pub fn add_staff(&self, member: StaffMember) -> AppResult<()> {
        let mut state = self.state.write();
        if find(&state.staff, &member.id).is_some() {
            return Err(AppError::already_exists(format!("staff {}", member.id)));
        }
        let next = appended(&state.staff, member);
        state.staff = next;
        Ok(())
    }

    fn update_staff(
        &self,
        id: &str,
        f: impl FnOnce(&StaffMember) -> StaffResult<StaffMember>,
    ) -> AppResult<StaffMember> {
        let mut state = self.state.write();
        let updated = f(state.staff_member(id)?)?;
        let next = replaced(&state.staff, updated.clone());
        state.staff = next;
        Ok(updated)
    }

    pub fn update_staff_status(&self, id: &str, status: StaffStatus) -> AppResult<StaffMember> {
        let updated = self.update_staff(id, |m| Ok(staff::update_staff_status(m, status)))?;
        tracing::info!(staff_id = %id, status = ?status, "Staff status changed");
        Ok(updated)
    }

    pub fn record_task_completion(&self, id: &str, minutes: f64) -> AppResult<StaffMember> {
        self.update_staff(id, |m| staff::record_task_completion(m, minutes))
    }

    pub fn staff_summary(&self) -> StaffSummary {
        staff::staff_summary(&self.state.read().staff)
    }

    // =========================================================================
    // Restaurant
    // =========================================================================

    pub fn menu(&self) -> Vec<MenuItem> {
        self.state.read().menu.clone()
    }

    pub fn add_menu_item(&self, item: MenuItem) -> AppResult<()> {
        let mut state = self.state.write();
        if find(&state.menu, &item.id).is_some() {
            return Err(AppError::already_exists(format!("menu item {}", item.id)));
        }
        let next = appended(&state.menu, item);
        state.menu = next;
        Ok(())
    }

    pub fn orders(&self) -> Vec<RestaurantOrder> {
        self.state.read().orders.clone()
    }

    pub fn order(&self, id: &str) -> AppResult<RestaurantOrder> {
        Ok(self.state.read().order(id)?.clone())
    }

    /// Open an order with the next kitchen ticket number
    pub fn open_order(&self, payload: OrderOpen) -> AppResult<RestaurantOrder> {
        let mut state = self.state.write();
        let kot_number = state.orders.iter().map(|o| o.kot_number).max().unwrap_or(0) + 1;
        let order = restaurant::open_order(
            payload,
            prefixed_id("OR"),
            kot_number,
            self.config.default_tax_rate,
            now_millis(),
        )?;
        let next = appended(&state.orders, order.clone());
        state.orders = next;
        Ok(order)
    }

    fn update_order(
        &self,
        id: &str,
        f: impl FnOnce(&RestaurantOrder) -> OrderResult<RestaurantOrder>,
    ) -> AppResult<RestaurantOrder> {
        let mut state = self.state.write();
        let updated = f(state.order(id)?)?;
        let next = replaced(&state.orders, updated.clone());
        state.orders = next;
        Ok(updated)
    }

    pub fn add_order_item(
        &self,
        order_id: &str,
        menu_item_id: &str,
        quantity: u32,
        note: Option<String>,
    ) -> AppResult<RestaurantOrder> {
        let menu_item = {
            let state = self.state.read();
            find(&state.menu, menu_item_id)
                .cloned()
                .ok_or_else(|| AppError::not_found(format!("menu item {menu_item_id}")))?
        };
        self.update_order(order_id, |o| {
            restaurant::add_item(o, &menu_item, quantity, note, prefixed_id("OI"))
        })
    }

    pub fn update_order_item(
        &self,
        order_id: &str,
        item_id: &str,
        quantity: u32,
    ) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, |o| restaurant::update_quantity(o, item_id, quantity))
    }

    pub fn remove_order_item(&self, order_id: &str, item_id: &str) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, |o| restaurant::remove_item(o, item_id))
    }

    pub fn advance_order_item(&self, order_id: &str, item_id: &str) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, |o| restaurant::advance_item(o, item_id))
    }

    pub fn bill_order(&self, order_id: &str) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, restaurant::bill_order)
    }

    pub fn pay_order(&self, order_id: &str) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, restaurant::pay_order)
    }

    pub fn cancel_order(&self, order_id: &str) -> AppResult<RestaurantOrder> {
        self.update_order(order_id, restaurant::cancel_order)
    }
}
