use serde_json::{Map, Value};
use stub_core::{alias, fields, Alias, FieldRule, FrameworkSlug, Stub, StubContext, StubModel, Trigger};
use tracing::trace;

use crate::derive::{mirror_into, url_segment};

/// A supplier's response to a published brief.
///
/// The nested `brief` follows `briefId` unless the caller passes a whole
/// `brief`, in which case its id becomes the `briefId`. Links always point at
/// the final ids.
pub struct BriefResponse;

fn pending_award() -> Map<String, Value> {
    fields! { "awardDetails" => { "pending": true } }
}

fn award() -> Map<String, Value> {
    fields! {
        "awardDetails" => {
            "awardedContractStartDate": "2017-03-01",
            "awardedContractValue": "10000"
        },
    }
}

impl StubModel for BriefResponse {
    const RESOURCE_NAME: Option<&'static str> = Some("briefResponses");

    const ALIASES: &'static [Alias] = &[alias("supplierId", "supplier_id"), alias("briefId", "brief_id")];

    const PARAMETERS: &'static [&'static str] = &["framework_slug"];

    const RULES: &'static [FieldRule] = &[
        FieldRule::new("status", Trigger::Is("pending-awarded"), pending_award),
        FieldRule::new("status", Trigger::Is("awarded"), award),
    ];

    fn defaults() -> Map<String, Value> {
        fields! {
            "availability" => "25/01/2017",
            "brief" => {
                "id": 1234,
                "title": "I need a thing to do a thing",
                "status": "live",
                "applicationsClosedAt": "2016-11-22T11:22:33.444444Z",
                "framework": {
                    "family": "digital-outcomes-and-specialists",
                    "name": "Digital Outcomes and Specialists 3",
                    "slug": "digital-outcomes-and-specialists-3",
                    "status": "live"
                }
            },
            "briefId" => 1234,
            "createdAt" => "2016-11-01T11:22:33.444444Z",
            "essentialRequirements" => [],
            "essentialRequirementsMet" => true,
            "id" => 54321,
            "links" => {
                "brief": "http://localhost:5000/brief/1234",
                "self": "http://localhost:5000/brief-responses/54321",
                "supplier": "http://localhost:5000/supplier/1234"
            },
            "niceToHaveRequirements" => [],
            "respondToEmailAddress" => "contactme@example.com",
            "submittedAt" => "2016-11-21T12:00:01.000000Z",
            "status" => "submitted",
            "supplierId" => 1234,
            "supplierName" => "My Little Company",
            "supplierOrganisationSize" => "micro",
        }
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        if ctx.is_explicit("brief") {
            if let Some(id) = data.get("brief").and_then(|brief| brief.get("id")).cloned() {
                trace!(brief_id = %id, "Taking briefId from the explicit brief");
                data.insert("briefId".to_string(), id);
            }
        } else {
            mirror_into(data, ctx, "brief", &[("id", "briefId")]);
            if let Some(slug) = ctx.param("framework_slug").and_then(Value::as_str) {
                set_brief_framework(data, slug);
            }
        }

        let links = fields! {
            "brief" => (format!("http://localhost:5000/brief/{}", url_segment(data.get("briefId")))),
            "self" => (format!("http://localhost:5000/brief-responses/{}", url_segment(data.get("id")))),
            "supplier" => (format!("http://localhost:5000/supplier/{}", url_segment(data.get("supplierId")))),
        };
        ctx.derive_field(data, "links", links);
    }
}

fn set_brief_framework(data: &mut Map<String, Value>, slug: &str) {
    let parsed = FrameworkSlug::parse(slug);
    let framework = data
        .get_mut("brief")
        .and_then(|brief| brief.get_mut("framework"))
        .and_then(Value::as_object_mut);
    if let Some(framework) = framework {
        framework.insert("slug".to_string(), Value::from(slug));
        framework.insert("name".to_string(), Value::from(parsed.name()));
        framework.insert("family".to_string(), Value::from(parsed.family()));
    }
}

pub type BriefResponseStub = Stub<BriefResponse>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use stub_core::overrides;

    #[test]
    fn test_ids_drive_links_and_nested_brief() {
        let response = BriefResponseStub::new(overrides! {
            "framework_slug" => "digital-outcomes-and-specialists-2",
            "supplier_id" => 555,
            "brief_id" => 666,
            "id" => 777,
        })
        .into_response();

        assert_eq!(response["brief"]["id"], json!(666));
        assert_eq!(response["brief"]["framework"]["slug"], json!("digital-outcomes-and-specialists-2"));
        assert_eq!(response["brief"]["framework"]["name"], json!("Digital Outcomes and Specialists 2"));
        assert_eq!(
            response["links"],
            json!({
                "brief": "http://localhost:5000/brief/666",
                "self": "http://localhost:5000/brief-responses/777",
                "supplier": "http://localhost:5000/supplier/555"
            })
        );
        for parameter in ["framework_slug", "supplier_id", "brief_id"] {
            assert!(response.get(parameter).is_none(), "{parameter} leaked");
        }
    }

    #[test]
    fn test_explicit_brief_takes_precedence_over_brief_id() {
        let response = BriefResponseStub::new(overrides! {
            "brief" => json!({"id": 456}),
            "brief_id" => 789,
        });
        assert_eq!(response.get("briefId"), Some(&json!(456)));
        assert_eq!(response.get("brief"), Some(&json!({"id": 456})));
        assert_eq!(response.get("links").unwrap()["brief"], json!("http://localhost:5000/brief/456"));
    }

    #[test]
    fn test_award_details_follow_status() {
        let pending = BriefResponseStub::new(overrides! { "status" => "pending-awarded" });
        assert_eq!(pending.get("awardDetails"), Some(&json!({"pending": true})));

        let submitted = BriefResponseStub::default();
        assert!(submitted.get("awardDetails").is_none());
    }
}
