//! Wire-level data types for the Paack REST API
//!
//! Field names and optionality mirror the upstream contract exactly.
//! Optional fields are omitted from payloads when unset; the platform
//! treats absence and explicit defaults differently in places, so none of
//! these types invent values the caller did not set.

pub mod address;
pub mod auth;
pub mod customer;
pub mod field;
pub mod label;
pub mod order;
pub mod parcel;
pub mod schedule;

pub use address::Address;
pub use auth::{TokenRequest, TokenResponse};
pub use customer::Customer;
pub use field::{Field, FieldType};
pub use label::Label;
pub use order::{CancelResponse, Order, OrderConfirmation, OrderResponse, UpdateResponse};
pub use parcel::{Parcel, Parcels, ReplaceParcelsResponse};
pub use schedule::{Schedule, ScheduleSlot};
