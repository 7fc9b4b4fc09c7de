//! Purpose: Request/response records and operation types of the contact-center API.
//! Exports: Every record and operation, grouped by resource area.
//! Role: Declarative data layer; all behavior lives in `codec` and `api`.
//! Invariants: Wire names are the service's exact (case-sensitive) JSON keys.

mod contact;
mod hierarchy;
mod metrics;
mod routing;
mod tags;
mod users;

pub use contact::*;
pub use hierarchy::*;
pub use metrics::*;
pub use routing::*;
pub use tags::*;
pub use users::*;

crate::record! {
    /// Output of operations whose reply carries no fields.
    pub struct EmptyResult {}
}
