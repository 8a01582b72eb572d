use serde_json::{Map, Value};
use stub_core::{alias, fields, Alias, Stub, StubModel};

/// A supplier's signed framework agreement
pub struct FrameworkAgreement;

impl StubModel for FrameworkAgreement {
    const RESOURCE_NAME: Option<&'static str> = Some("agreement");

    const ALIASES: &'static [Alias] = &[
        alias("signedAgreementDetails", "signed_agreement_details"),
        alias("signedAgreementPath", "signed_agreement_path"),
        alias("signedAgreementReturnedAt", "signed_agreement_returned_at"),
        alias("countersignedAgreementDetails", "countersigned_agreement_details"),
        alias("countersignedAgreementReturnedAt", "countersigned_agreement_returned_at"),
        alias("countersignedAgreementPath", "countersigned_agreement_path"),
    ];

    fn defaults() -> Map<String, Value> {
        fields! {
            "id" => 1234,
            "supplierId" => 43333,
            "frameworkSlug" => "digital-outcomes-and-specialists-3",
            "status" => "",
        }
    }
}

pub type FrameworkAgreementStub = Stub<FrameworkAgreement>;
