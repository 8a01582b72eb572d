use serde_json::{Map, Value};
use stub_core::{alias, fields, Alias, FieldRule, Stub, StubModel, Trigger};

pub struct AuditEvent;

fn acknowledgement() -> Map<String, Value> {
    fields! {
        "acknowledgedAt" => "2018-12-11T01:02:03.000000Z",
        "acknowledgedBy" => "acknowledger@example.com",
    }
}

impl StubModel for AuditEvent {
    const RESOURCE_NAME: Option<&'static str> = Some("auditEvents");

    const ALIASES: &'static [Alias] = &[alias("userName", "include_user")];

    const RULES: &'static [FieldRule] = &[FieldRule::new("acknowledged", Trigger::Truthy, acknowledgement)];

    fn defaults() -> Map<String, Value> {
        fields! {
            "id" => 123,
            "type" => "update_brief_response",
            "acknowledged" => false,
            "user" => "supplier@example.com",
            "data" => {
                "briefResponseData": {
                    "essentialRequirementsMet": true
                },
                "briefResponseId": 44444
            },
            "objectType" => "BriefResponse",
            "objectId" => 44444,
            "createdAt" => "2018-12-10T01:02:03.000000Z",
            "links" => {
                "self": "http://localhost/audit-events/123"
            },
        }
    }
}

pub type AuditEventStub = Stub<AuditEvent>;
