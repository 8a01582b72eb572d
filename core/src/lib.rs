//! Stub Core Library
//!
//! The engine behind the API model stubs: it turns a table of default field
//! values plus caller overrides into an example API response, the way the
//! backend's model serialisation would shape it.
//!
//! # Architecture
//!
//! - [`stub`] - The [`StubModel`] trait and the generic [`Stub`] generator
//! - [`overrides`] - Caller-supplied [`Overrides`]
//! - [`rules`] - Declarative post-merge [`FieldRule`]s
//! - [`slug`] - Framework slug parsing ([`FrameworkSlug`])
//! - [`timestamp`] - API timestamp formatting
//! - [`error`] - Error types and result handling
//!
//! # Example
//!
//! ```rust
//! use serde_json::{json, Map, Value};
//! use stub_core::{fields, overrides, FieldRule, Stub, StubModel, Trigger};
//!
//! struct Ticket;
//!
//! fn closed_fields() -> Map<String, Value> {
//!     fields! { "closedAt" => "2016-04-07T00:00:00.000000Z" }
//! }
//!
//! impl StubModel for Ticket {
//!     const RESOURCE_NAME: Option<&'static str> = Some("tickets");
//!     const RULES: &'static [FieldRule] = &[FieldRule::new("status", Trigger::Is("closed"), closed_fields)];
//!
//!     fn defaults() -> Map<String, Value> {
//!         fields! { "id" => 1, "status" => "open" }
//!     }
//! }
//!
//! let open = Stub::<Ticket>::default();
//! assert!(open.get("closedAt").is_none());
//!
//! let closed = Stub::<Ticket>::new(overrides! { "status" => "closed" });
//! assert_eq!(closed.get("closedAt"), Some(&json!("2016-04-07T00:00:00.000000Z")));
//! ```

pub mod error;
pub mod overrides;
pub mod rules;
pub mod slug;
pub mod stub;
pub mod timestamp;

// Re-exported for the `fields!` macro
pub use serde_json;

pub use error::{Result, StubError};
pub use overrides::{is_truthy, Overrides};
pub use rules::{FieldRule, Trigger};
pub use slug::{title_case, FrameworkSlug};
pub use stub::{alias, Alias, Stub, StubContext, StubModel};
pub use timestamp::{format_timestamp, Timestamp, TIMESTAMP_FORMAT};
