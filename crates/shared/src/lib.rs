//! gearsheet Shared - Wire types for the engine and sheet front ends
//!
//! This crate contains the types that cross the engine boundary:
//! - Sheet requests and the line envelope the engine binary reads
//! - Response results and error codes
//! - The drag-and-drop transfer payload
//! - Sheet view DTOs and control bindings
//!
//! # Design Principles
//!
//! 1. **No business logic** - Pure data types and serialization
//! 2. **Ids as strings** - requests carry raw id strings; the engine parses them

pub mod requests;
pub mod responses;
pub mod transfer;
pub mod view;

pub use requests::{SheetEnvelope, SheetRequest};
pub use responses::{ErrorCode, ResponseResult};
pub use transfer::{TransferDecodeError, TransferPayload, ITEM_ENTITY_KIND};
pub use view::{
    Choice, ControlBinding, ControlBindings, ItemRow, SheetChoices, SheetControl, SheetView,
    TabView,
};
