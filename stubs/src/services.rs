//! Services in their three lifecycle stages: drafts, live services and
//! archived snapshots. All three share an envelope key and alias table.

use serde_json::{Map, Value};
use stub_core::{alias, fields, Alias, FieldRule, Stub, StubContext, StubModel, Trigger};

use crate::derive::{framework_from_slug, url_segment};

macro_rules! service_aliases {
    ($($extra:expr),* $(,)?) => {
        &[
            alias("frameworkFamily", "framework_family"),
            alias("frameworkFramework", "framework_framework"),
            alias("frameworkName", "framework_name"),
            alias("frameworkSlug", "framework_slug"),
            alias("lotSlug", "lot_slug"),
            alias("lotName", "lot_name"),
            alias("serviceName", "service_name"),
            alias("supplierId", "supplier_id"),
            alias("supplierName", "supplier_name"),
            alias("createdAt", "created_at"),
            alias("updatedAt", "updated_at"),
            $($extra,)*
        ]
    };
}

const SERVICES: Option<&str> = Some("services");
const API_ROOT: &str = "http://127.0.0.1:5000";

fn service_defaults(id: u64, status: &str) -> Map<String, Value> {
    fields! {
        "id" => id,
        "copiedToFollowingFramework" => false,
        "frameworkSlug" => "g-cloud-10",
        "frameworkFramework" => "g-cloud",
        "frameworkFamily" => "g-cloud",
        "frameworkName" => "G-Cloud 10",
        "frameworkStatus" => "open",
        "lot" => "cloud-software",
        "lotSlug" => "cloud-software",
        "lotName" => "Cloud software",
        "serviceName" => "I run a service that does a thing",
        "status" => status,
        "supplierId" => 8866655,
        "supplierName" => "Kev's Pies",
        "createdAt" => "2017-04-07T12:34:00.000000Z",
        "updatedAt" => "2017-04-07T12:34:00.000000Z",
    }
}

fn framework_from_service_slug(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
    framework_from_slug(
        data,
        ctx,
        "frameworkSlug",
        Some("frameworkName"),
        &["frameworkFamily", "frameworkFramework"],
    );
}

/// A draft service, before it is published to the marketplace
pub struct DraftService;

fn draft_edited() -> Map<String, Value> {
    fields! { "updatedAt" => "2017-05-08T13:24:00.000000Z" }
}

impl StubModel for DraftService {
    const RESOURCE_NAME: Option<&'static str> = SERVICES;

    const ALIASES: &'static [Alias] = service_aliases![alias("serviceId", "service_id")];

    const RULES: &'static [FieldRule] = &[FieldRule::new("status", Trigger::IsNot("not-submitted"), draft_edited)];

    fn defaults() -> Map<String, Value> {
        service_defaults(1234, "not-submitted")
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        let base = format!("{API_ROOT}/draft-services/{}", url_segment(data.get("id")));
        let links = fields! {
            "self" => (base.clone()),
            "publish" => (format!("{base}/publish")),
            "complete" => (format!("{base}/complete")),
            "copy" => (format!("{base}/copy")),
        };
        ctx.derive_field(data, "links", links);
        framework_from_service_slug(data, ctx);
    }
}

pub type DraftServiceStub = Stub<DraftService>;

/// A published service
pub struct Service;

impl StubModel for Service {
    const RESOURCE_NAME: Option<&'static str> = SERVICES;

    const ALIASES: &'static [Alias] = service_aliases![];

    fn defaults() -> Map<String, Value> {
        service_defaults(1010101010, "published")
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        let links = fields! {
            "self" => (format!("{API_ROOT}/services/{}", url_segment(data.get("id")))),
        };
        ctx.derive_field(data, "links", links);
        framework_from_service_slug(data, ctx);
    }
}

pub type ServiceStub = Stub<Service>;

/// An archived snapshot of a service.
///
/// The snapshot has its own id, which is what `id` sets and what the self
/// link uses; `service_id` sets the `id` field in the body to the id of the
/// service that was archived.
pub struct ArchivedService;

const DEFAULT_ARCHIVE_ID: u64 = 1234;

impl StubModel for ArchivedService {
    const RESOURCE_NAME: Option<&'static str> = SERVICES;

    const ALIASES: &'static [Alias] = service_aliases![];

    const PARAMETERS: &'static [&'static str] = &["service_id"];

    fn defaults() -> Map<String, Value> {
        service_defaults(1010101010, "not-submitted")
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        let archive_id = match ctx.param("id") {
            Some(id) => url_segment(Some(id)),
            None => DEFAULT_ARCHIVE_ID.to_string(),
        };
        let links = fields! {
            "self" => (format!("{API_ROOT}/archived-services/{archive_id}")),
        };
        ctx.derive_field(data, "links", links);

        if let Some(service_id) = ctx.param("service_id").filter(|id| !id.is_null()) {
            data.insert("id".to_string(), service_id.clone());
        }
        framework_from_service_slug(data, ctx);
    }
}

pub type ArchivedServiceStub = Stub<ArchivedService>;
