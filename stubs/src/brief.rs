use serde_json::{json, Map, Value};
use stub_core::{alias, fields, Alias, FieldRule, Stub, StubContext, StubModel, Trigger};

use crate::derive::{framework_from_slug, mirror_into};

/// A buyer's brief (requirements published to suppliers).
///
/// Briefs start in `draft`; any other status adds the publication milestones,
/// and `withdrawn`, `unsuccessful` and `cancelled` each add their own
/// timestamp. The nested `framework` object follows the flat `framework*`
/// fields unless it is overridden itself.
pub struct Brief;

fn buyer_user() -> Value {
    json!({
        "active": true,
        "role": "buyer",
        "emailAddress": "buyer@email.com",
        "id": 123,
        "name": "Buyer User"
    })
}

fn published_milestones() -> Map<String, Value> {
    fields! {
        "publishedAt" => "2016-03-29T10:11:14.000000Z",
        "applicationsClosedAt" => "2016-04-07T00:00:00.000000Z",
        "clarificationQuestionsClosedAt" => "2016-04-02T00:00:00.000000Z",
        "clarificationQuestionsPublishedBy" => "2016-04-02T00:00:00.000000Z",
    }
}

fn withdrawn() -> Map<String, Value> {
    fields! { "withdrawnAt" => "2016-05-07T00:00:00.000000Z" }
}

fn unsuccessful() -> Map<String, Value> {
    fields! { "unsuccessfulAt" => "2016-05-07T00:00:00.000000Z" }
}

fn cancelled() -> Map<String, Value> {
    fields! { "cancelledAt" => "2016-05-07T00:00:00.000000Z" }
}

pub const INITIAL_STATUS: &str = "draft";

impl StubModel for Brief {
    const RESOURCE_NAME: Option<&'static str> = Some("briefs");

    const ALIASES: &'static [Alias] = &[
        alias("lotName", "lot_name"),
        alias("lotSlug", "lot_slug"),
        alias("clarificationQuestions", "clarification_questions"),
        alias("frameworkFramework", "framework_family"),
        alias("frameworkName", "framework_name"),
        alias("frameworkSlug", "framework_slug"),
        alias("frameworkStatus", "framework_status"),
    ];

    const PARAMETERS: &'static [&'static str] = &["user_id", "clarification_questions_closed"];

    const RULES: &'static [FieldRule] = &[
        FieldRule::new("status", Trigger::IsNot(INITIAL_STATUS), published_milestones),
        FieldRule::new("status", Trigger::Is("withdrawn"), withdrawn),
        FieldRule::new("status", Trigger::Is("unsuccessful"), unsuccessful),
        FieldRule::new("status", Trigger::Is("cancelled"), cancelled),
    ];

    fn defaults() -> Map<String, Value> {
        fields! {
            "id" => 1234,
            "title" => "I need a thing to do a thing",
            "frameworkSlug" => "digital-outcomes-and-specialists",
            "frameworkName" => "Digital Outcomes and Specialists",
            "frameworkFramework" => "digital-outcomes-and-specialists",
            "frameworkStatus" => "live",
            "framework" => {
                "family": "digital-outcomes-and-specialists",
                "name": "Digital Outcomes and Specialists",
                "slug": "digital-outcomes-and-specialists",
                "status": "live"
            },
            "lotName" => "Digital Specialists",
            "lotSlug" => "digital-specialists",
            "isACopy" => false,
            "status" => "draft",
            "users" => [(buyer_user())],
            "clarificationQuestions" => [],
            "createdAt" => "2016-03-29T10:11:12.000000Z",
            "updatedAt" => "2016-03-29T10:11:13.000000Z",
            "links" => {},
        }
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        if ctx.is_truthy("user_id") {
            let mut user = buyer_user();
            if let Some(id) = ctx.param("user_id") {
                user["id"] = id.clone();
            }
            ctx.derive_field(data, "users", json!([user]));
        }

        let published = data.get("status").and_then(Value::as_str) != Some(INITIAL_STATUS);
        if published && ctx.is_set("clarification_questions_closed") {
            if let Some(closed) = ctx.param("clarification_questions_closed") {
                ctx.derive_field(data, "clarificationQuestionsAreClosed", closed.clone());
            }
        }

        framework_from_slug(
            data,
            ctx,
            "frameworkSlug",
            Some("frameworkName"),
            &["frameworkFramework"],
        );
        mirror_into(
            data,
            ctx,
            "framework",
            &[
                ("family", "frameworkFramework"),
                ("name", "frameworkName"),
                ("slug", "frameworkSlug"),
                ("status", "frameworkStatus"),
            ],
        );
    }
}

pub type BriefStub = Stub<Brief>;

#[cfg(test)]
mod tests {
    use super::*;
    use stub_core::overrides;

    #[test]
    fn test_user_id_replaces_buyer_id_only() {
        let brief = BriefStub::new(overrides! { "user_id" => 234 });
        assert_eq!(brief.get("users").unwrap()[0]["id"], json!(234));
        assert_eq!(brief.get("users").unwrap()[0]["role"], json!("buyer"));
        assert!(brief.get("user_id").is_none());

        // the shared default user is untouched
        assert_eq!(BriefStub::default().get("users").unwrap()[0]["id"], json!(123));
    }

    #[test]
    fn test_clarification_questions_closed_needs_published_brief() {
        let draft = BriefStub::new(overrides! { "clarification_questions_closed" => true });
        assert!(draft.get("clarificationQuestionsAreClosed").is_none());
        assert!(draft.get("clarification_questions_closed").is_none());

        let live = BriefStub::new(overrides! {
            "status" => "live",
            "clarification_questions_closed" => false,
        });
        assert_eq!(live.get("clarificationQuestionsAreClosed"), Some(&json!(false)));
    }

    #[test]
    fn test_slug_derives_name_and_family_into_nested_framework() {
        let brief = BriefStub::new(overrides! { "framework_slug" => "digital-outcomes-and-specialists-3" });
        assert_eq!(brief.get("frameworkName"), Some(&json!("Digital Outcomes and Specialists 3")));
        assert_eq!(
            brief.get("framework"),
            Some(&json!({
                "family": "digital-outcomes-and-specialists",
                "name": "Digital Outcomes and Specialists 3",
                "slug": "digital-outcomes-and-specialists-3",
                "status": "live"
            }))
        );
    }

    #[test]
    fn test_explicit_nested_framework_wins() {
        let nested = json!({"slug": "g-cloud-9"});
        let brief = BriefStub::new(overrides! {
            "framework_slug" => "digital-outcomes-and-specialists-2",
            "framework" => nested.clone(),
        });
        assert_eq!(brief.get("frameworkSlug"), Some(&json!("digital-outcomes-and-specialists-2")));
        assert_eq!(brief.get("framework"), Some(&nested));
    }

    #[test]
    fn test_explicit_status_timestamp_is_kept() {
        let brief = BriefStub::new(overrides! { "status" => "withdrawn", "withdrawnAt" => "yesterday" });
        assert_eq!(brief.get("withdrawnAt"), Some(&json!("yesterday")));
    }
}
