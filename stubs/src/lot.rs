//! Lots, and the canned lot lists used by framework stubs.

use serde_json::{Map, Value};
use stub_core::{alias, fields, overrides, Alias, Stub, StubModel};

/// A framework lot. Lots are only ever returned nested inside a framework,
/// so there is no envelope key.
pub struct Lot;

impl StubModel for Lot {
    const RESOURCE_NAME: Option<&'static str> = None;

    const ALIASES: &'static [Alias] = &[
        alias("allowsBrief", "allows_brief"),
        alias("oneServiceLimit", "one_service_limit"),
        alias("unitSingular", "unit_singular"),
        alias("unitPlural", "unit_plural"),
        alias("id", "lot_id"),
    ];

    fn defaults() -> Map<String, Value> {
        fields! {
            "id" => 1,
            "slug" => "some-lot",
            "name" => "Some lot",
            "allowsBrief" => false,
            "oneServiceLimit" => false,
            "unitSingular" => "service",
            "unitPlural" => "services",
        }
    }
}

pub type LotStub = Stub<Lot>;

/// Digital Outcomes and Specialists lots
pub fn dos_lots() -> Vec<Value> {
    vec![
        LotStub::new(overrides! {
            "lot_id" => 5,
            "slug" => "digital-outcomes",
            "name" => "Digital outcomes",
            "allows_brief" => true,
            "one_service_limit" => true,
        })
        .into_response(),
        LotStub::new(overrides! {
            "lot_id" => 6,
            "slug" => "digital-specialists",
            "name" => "Digital specialists",
            "allows_brief" => true,
            "one_service_limit" => true,
        })
        .into_response(),
        LotStub::new(overrides! {
            "lot_id" => 7,
            "slug" => "user-research-studios",
            "name" => "User research studios",
            "unit_singular" => "lab",
            "unit_plural" => "labs",
        })
        .into_response(),
        LotStub::new(overrides! {
            "lot_id" => 8,
            "slug" => "user-research-participants",
            "name" => "User research participants",
            "allows_brief" => true,
            "one_service_limit" => true,
        })
        .into_response(),
    ]
}

/// G-Cloud 8 and earlier
pub fn as_a_service_lots() -> Vec<Value> {
    [
        (1, "saas", "Software as a Service"),
        (2, "paas", "Platform as a Service"),
        (3, "iaas", "Infrastructure as a Service"),
        (4, "scs", "Specialist Cloud Services"),
    ]
    .into_iter()
    .map(simple_lot)
    .collect()
}

/// G-Cloud 9 onwards
pub fn cloud_lots() -> Vec<Value> {
    [
        (9, "cloud-hosting", "Cloud hosting"),
        (10, "cloud-software", "Cloud software"),
        (11, "cloud-support", "Cloud support"),
    ]
    .into_iter()
    .map(simple_lot)
    .collect()
}

fn simple_lot((id, slug, name): (u32, &str, &str)) -> Value {
    LotStub::new(overrides! { "lot_id" => id, "slug" => slug, "name" => name }).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_lot_id_alias() {
        let lot = LotStub::new(overrides! { "lot_id" => 9 });
        assert_eq!(lot.get("id"), Some(&json!(9)));
        assert!(lot.get("lot_id").is_none());
    }

    #[test]
    fn test_lot_has_no_envelope() {
        let lot = LotStub::default();
        assert_eq!(lot.single_result_response(), lot.response());
    }

    #[test]
    fn test_canned_lot_lists() {
        let slugs = |lots: Vec<Value>| {
            lots.iter()
                .map(|lot| lot["slug"].as_str().unwrap_or_default().to_string())
                .collect::<Vec<_>>()
        };
        assert_eq!(slugs(as_a_service_lots()), ["saas", "paas", "iaas", "scs"]);
        assert_eq!(slugs(cloud_lots()), ["cloud-hosting", "cloud-software", "cloud-support"]);
        assert_eq!(
            slugs(dos_lots()),
            [
                "digital-outcomes",
                "digital-specialists",
                "user-research-studios",
                "user-research-participants"
            ]
        );
    }

    #[test]
    fn test_user_research_studios_are_labs() {
        let studios = &dos_lots()[2];
        assert_eq!(studios["id"], json!(7));
        assert_eq!(studios["unitSingular"], json!("lab"));
        assert_eq!(studios["unitPlural"], json!("labs"));
        assert_eq!(studios["allowsBrief"], json!(false));
    }
}
