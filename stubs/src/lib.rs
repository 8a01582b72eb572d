//! API Model Stubs
//!
//! Example JSON responses for the commonly used Digital Marketplace API
//! models, shaped the way each model's serialisation would return them.
//! Every stub starts from fixed default values; tests override only the
//! fields they care about.
//!
//! Some models are never fetched on their own (lots, for example) and have no
//! envelope key; for those `single_result_response()` is the bare mapping.
//!
//! # Example
//!
//! ```rust
//! use api_model_stubs::BriefStub;
//! use serde_json::json;
//! use stub_core::overrides;
//!
//! let brief = BriefStub::new(overrides! { "framework_slug" => "digital-outcomes-and-specialists-3" });
//! let body = brief.single_result_response();
//!
//! assert_eq!(body["briefs"]["frameworkName"], json!("Digital Outcomes and Specialists 3"));
//! assert_eq!(body["briefs"]["framework"]["slug"], json!("digital-outcomes-and-specialists-3"));
//! ```

pub mod audit_event;
pub mod brief;
pub mod brief_response;
mod derive;
pub mod framework;
pub mod framework_agreement;
pub mod lot;
pub mod placeholders;
pub mod services;
pub mod supplier;
pub mod supplier_framework;

pub use audit_event::{AuditEvent, AuditEventStub};
pub use brief::{Brief, BriefStub};
pub use brief_response::{BriefResponse, BriefResponseStub};
pub use framework::{Framework, FrameworkStub};
pub use framework_agreement::{FrameworkAgreement, FrameworkAgreementStub};
pub use lot::{as_a_service_lots, cloud_lots, dos_lots, Lot, LotStub};
pub use placeholders::{
    DirectAwardProject, DirectAwardProjectStub, DirectAwardSearch, DirectAwardSearchStub, Outcome, OutcomeStub, User,
    UserStub,
};
pub use services::{ArchivedService, ArchivedServiceStub, DraftService, DraftServiceStub, Service, ServiceStub};
pub use supplier::{Supplier, SupplierStub};
pub use supplier_framework::{SupplierFramework, SupplierFrameworkStub};

pub use stub_core::{overrides, Overrides, Stub};
