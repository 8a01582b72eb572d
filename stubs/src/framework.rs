use serde_json::{Map, Value};
use stub_core::slug::{capitalize, DIGITAL_OUTCOMES_AND_SPECIALISTS, G_CLOUD};
use stub_core::{alias, fields, Alias, FrameworkSlug, Stub, StubContext, StubModel};
use tracing::trace;

use crate::lot::{as_a_service_lots, cloud_lots, dos_lots};

/// A procurement framework (G-Cloud, Digital Outcomes and Specialists, ...).
///
/// The slug drives the display name, family, award routes and lots; any of
/// those can still be overridden individually. Explicit `lots` also fill the
/// lot order and descriptions of the framework agreement details.
pub struct Framework;

pub const DEFAULT_SLUG: &str = "g-cloud-10";

impl StubModel for Framework {
    const RESOURCE_NAME: Option<&'static str> = Some("frameworks");

    const ALIASES: &'static [Alias] = &[
        alias("family", "framework_family"),
        alias("hasDirectAward", "has_direct_award"),
        alias("hasFurtherCompetition", "has_further_competition"),
        alias("clarificationQuestionsOpen", "clarification_questions_open"),
        alias("allowDeclarationReuse", "allow_declaration_reuse"),
        alias("clarificationsCloseAtUTC", "clarifications_close_at"),
        alias("clarificationsPublishAtUTC", "clarifications_publish_at"),
        alias("applicationsCloseAtUTC", "applications_close_at"),
        alias("intentionToAwardAtUTC", "intention_to_award_at"),
        alias("frameworkLiveAtUTC", "framework_live_at"),
        alias("frameworkExpiresAtUTC", "framework_expires_at"),
    ];

    const PARAMETERS: &'static [&'static str] = &["framework_agreement_version"];

    fn defaults() -> Map<String, Value> {
        fields! {
            "id" => 1,
            "name" => "G-Cloud 10",
            "slug" => DEFAULT_SLUG,
            "framework" => "g-cloud",
            "family" => "g-cloud",
            "status" => "open",
            "clarificationQuestionsOpen" => true,
            "allowDeclarationReuse" => true,
            "frameworkAgreementDetails" => {},
            "countersignerName" => "Zachary X. Signer",
            "frameworkAgreementVersion" => "RM1557x",
            "variations" => {},
            "clarificationsCloseAtUTC" => "2000-01-01T00:00:00.000000Z",
            "clarificationsPublishAtUTC" => "2000-01-02T00:00:00.000000Z",
            "applicationsCloseAtUTC" => "2000-01-03T00:00:00.000000Z",
            "intentionToAwardAtUTC" => "2000-01-04T00:00:00.000000Z",
            "frameworkLiveAtUTC" => "2000-01-05T00:00:00.000000Z",
            "frameworkExpiresAtUTC" => "2000-01-06T00:00:00.000000Z",
        }
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        derive_from_slug(data, ctx);

        // `framework` is the deprecated name for `family`
        if let Some(family) = data.get("family").cloned() {
            ctx.derive_field(data, "framework", family);
        }

        if ctx.has_param("framework_agreement_version") {
            // null is meaningful here: G-Cloud 7 and earlier have no version
            let version = ctx
                .param("framework_agreement_version")
                .cloned()
                .unwrap_or(Value::Null);
            ctx.derive_field(data, "frameworkAgreementVersion", version);
            let version = data.get("frameworkAgreementVersion").cloned().unwrap_or_default();
            set_agreement_detail(data, ctx, "frameworkAgreementVersion", version);
        }

        if ctx.is_explicit("lots") {
            if let Some(lots) = data.get("lots").and_then(Value::as_array).cloned() {
                let (order, descriptions) = lot_order_and_descriptions(&lots);
                set_agreement_detail(data, ctx, "lotOrder", order);
                set_agreement_detail(data, ctx, "lotDescriptions", descriptions);
            }
        }

        let variations = data.get("variations").cloned().unwrap_or_default();
        set_agreement_detail(data, ctx, "variations", variations);
    }
}

pub type FrameworkStub = Stub<Framework>;

/// Nothing is derived from a slug that is not a string
fn derive_from_slug(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
    let Some(slug) = data.get("slug").and_then(Value::as_str).map(str::to_owned) else {
        return;
    };
    let parsed = FrameworkSlug::parse(&slug);
    trace!(slug = %slug, family = parsed.family(), "Deriving framework details");

    let (has_direct_award, has_further_competition, lots) = match parsed.family() {
        G_CLOUD => {
            let lots = if parsed.iteration().is_some_and(|n| n <= 8) {
                as_a_service_lots()
            } else {
                cloud_lots()
            };
            (true, false, lots)
        }
        DIGITAL_OUTCOMES_AND_SPECIALISTS => (false, true, dos_lots()),
        _ => (true, true, Vec::new()),
    };

    ctx.derive_field(data, "name", parsed.name());
    ctx.derive_field(data, "family", parsed.family());
    ctx.derive_field(data, "hasDirectAward", has_direct_award);
    ctx.derive_field(data, "hasFurtherCompetition", has_further_competition);
    ctx.derive_field(data, "lots", lots);
}

/// Write into the nested agreement details unless the caller replaced them
fn set_agreement_detail(data: &mut Map<String, Value>, ctx: &StubContext<'_>, key: &str, value: impl Into<Value>) {
    if ctx.is_explicit("frameworkAgreementDetails") {
        return;
    }
    if let Some(Value::Object(details)) = data.get_mut("frameworkAgreementDetails") {
        details.insert(key.to_string(), value.into());
    }
}

/// `lotOrder` and `lotDescriptions` ("Lot 1: Cloud hosting", ...) for a list
/// of lots, by slug
fn lot_order_and_descriptions(lots: &[Value]) -> (Vec<Value>, Map<String, Value>) {
    let slugs: Vec<&str> = lots
        .iter()
        .filter_map(|lot| lot.get("slug").and_then(Value::as_str))
        .collect();

    let descriptions = slugs
        .iter()
        .enumerate()
        .map(|(i, slug)| {
            let description = format!("Lot {}: {}", i + 1, capitalize(&slug.replace('-', " ")));
            ((*slug).to_string(), Value::String(description))
        })
        .collect();
    let order = slugs.iter().map(|slug| Value::from(*slug)).collect();

    (order, descriptions)
}
