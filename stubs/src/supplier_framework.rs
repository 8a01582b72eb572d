use serde_json::{json, Map, Value};
use stub_core::{alias, fields, Alias, Stub, StubContext, StubModel};

use crate::derive::framework_from_slug;

/// A supplier's interest in (application to) a framework.
///
/// Flag parameters add canned blocks: `agreed_variations`, `with_declaration`
/// (status from `declaration_status`, `unstarted` otherwise) and
/// `with_agreement` (uploader and approver user details with `with_users`).
pub struct SupplierFramework;

const DEFAULT_DECLARATION_STATUS: &str = "unstarted";

fn agreed_variation() -> Value {
    json!({
        "agreedAt": "2018-05-04T16:58:52.362855Z",
        "agreedUserEmail": "stub@example.com",
        "agreedUserId": 123,
        "agreedUserName": "Test user"
    })
}

fn agreement(with_users: bool) -> Map<String, Value> {
    let mut agreement = fields! {
        "agreementId" => 9876,
        "agreementReturned" => true,
        "agreementReturnedAt" => "2017-05-17T14:31:27.118905Z",
        "agreementDetails" => {
            "frameworkAgreementVersion": "RM1557ix",
            "signerName": "A. Nonymous",
            "signerRole": "The Boss",
            "uploaderUserId": 443333,
            "uploaderUserName": "Test user",
            "uploaderUserEmail": "supplier@example.com"
        },
        "agreementPath" => "not/the/real/path.pdf",
        "countersigned" => true,
        "countersignedAt" => "2017-06-15T08:41:46.390992Z",
        "countersignedDetails" => {
            "approvedByUserId": 123
        },
        "agreementStatus" => "countersigned",
    };
    if with_users {
        agreement["agreementDetails"]["uploaderUserEmail"] = json!("stub@example.com");
        agreement["agreementDetails"]["uploaderUserName"] = json!("Test user");
        agreement["countersignedDetails"]["approvedByUserEmail"] = json!("stub@example.com");
        agreement["countersignedDetails"]["approvedByUserName"] = json!("Test user");
    }
    agreement
}

impl StubModel for SupplierFramework {
    const RESOURCE_NAME: Option<&'static str> = Some("frameworkInterest");

    const ALIASES: &'static [Alias] = &[
        alias("supplierId", "supplier_id"),
        alias("frameworkSlug", "framework_slug"),
        alias("onFramework", "on_framework"),
        alias("prefillDeclarationFromFrameworkSlug", "prefill_declaration_from_slug"),
        alias("applicationCompanyDetailsConfirmed", "application_company_details_confirmed"),
    ];

    const PARAMETERS: &'static [&'static str] = &[
        "agreed_variations",
        "with_declaration",
        "declaration_status",
        "with_agreement",
        "with_users",
    ];

    fn defaults() -> Map<String, Value> {
        fields! {
            "agreedVariations" => {},
            "agreementDetails" => {},
            "agreementId" => null,
            "agreementPath" => null,
            "agreementReturned" => false,
            "agreementReturnedAt" => null,
            "agreementStatus" => null,
            "allowDeclarationReuse" => true,
            "applicationCompanyDetailsConfirmed" => null,
            "countersigned" => false,
            "countersignedAt" => null,
            "countersignedDetails" => null,
            "countersignedPath" => null,
            "declaration" => {},
            "frameworkFamily" => "g-cloud",
            "frameworkFramework" => "g-cloud",
            "frameworkSlug" => "g-cloud-10",
            "onFramework" => false,
            "prefillDeclarationFromFrameworkSlug" => null,
            "supplierId" => 886665,
            "supplierName" => "Kev's Pies",
        }
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        framework_from_slug(data, ctx, "frameworkSlug", None, &["frameworkFamily", "frameworkFramework"]);

        if ctx.is_truthy("agreed_variations") {
            if let Some(variations) = data.get_mut("agreedVariations").and_then(Value::as_object_mut) {
                variations.insert("1".to_string(), agreed_variation());
            }
        }

        if ctx.is_truthy("with_declaration") {
            let status = ctx
                .param("declaration_status")
                .filter(|status| !status.is_null())
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_DECLARATION_STATUS));
            let declaration = json!({
                "nameOfOrganisation": "My Little Company",
                "organisationSize": "micro",
                "primaryContactEmail": "supplier@example.com",
                "status": status,
            });
            ctx.derive_field(data, "declaration", declaration);
        }

        if ctx.is_truthy("with_agreement") {
            ctx.inject(data, agreement(ctx.is_truthy("with_users")));
        }
    }
}

pub type SupplierFrameworkStub = Stub<SupplierFramework>;

#[cfg(test)]
mod tests {
    use super::*;
    use stub_core::overrides;

    #[test]
    fn test_declaration_status_defaults_to_unstarted() {
        let interest = SupplierFrameworkStub::new(overrides! { "with_declaration" => true });
        assert_eq!(interest.get("declaration").unwrap()["status"], json!("unstarted"));
        assert!(interest.get("with_declaration").is_none());
    }

    #[test]
    fn test_agreement_without_users_keeps_supplier_uploader() {
        let interest = SupplierFrameworkStub::new(overrides! { "with_agreement" => true });
        assert_eq!(
            interest.get("agreementDetails").unwrap()["uploaderUserEmail"],
            json!("supplier@example.com")
        );
        assert_eq!(interest.get("countersignedDetails"), Some(&json!({"approvedByUserId": 123})));
        assert_eq!(interest.get("agreementReturned"), Some(&json!(true)));
    }

    #[test]
    fn test_falsy_flags_add_nothing() {
        let interest = SupplierFrameworkStub::new(overrides! {
            "agreed_variations" => false,
            "with_agreement" => 0,
        });
        assert_eq!(interest.response(), SupplierFrameworkStub::default().response());
    }

    #[test]
    fn test_slug_derives_family() {
        let interest = SupplierFrameworkStub::new(overrides! { "framework_slug" => "digital-outcomes-and-specialists-4" });
        assert_eq!(interest.get("frameworkFamily"), Some(&json!("digital-outcomes-and-specialists")));
        assert_eq!(interest.get("frameworkFramework"), Some(&json!("digital-outcomes-and-specialists")));
    }
}
