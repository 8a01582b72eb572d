use serde_json::{json, Map, Value};
use stub_core::{alias, fields, Alias, Stub, StubContext, StubModel};
use tracing::trace;

use crate::derive::url_segment;

/// A supplier account, with one contact.
///
/// Suppliers registered outside the UK give `other_company_registration_number`
/// instead of a Companies House number; the stub drops the latter and moves
/// the company to New Zealand.
pub struct Supplier;

const DEFAULT_CONTACT_ID: u64 = 4321;

fn contact_information() -> Value {
    json!({
        "address1": "123 Fake Road",
        "city": "Madeupolis",
        "contactName": "Mr E Man",
        "email": "mre@company.com",
        "id": DEFAULT_CONTACT_ID,
        "links": {
            "self": "http://localhost:5000/suppliers/1234/contact-information/4321"
        },
        "phoneNumber": "01234123123",
        "postcode": "A11 1AA",
        "website": "https://www.mre.company"
    })
}

/// Counts the API adds to a single supplier response
fn service_counts() -> Value {
    json!({
        "G-Cloud 9": 109,
        "G-Cloud 8": 108,
        "G-Cloud 7": 107,
        "G-Cloud 6": 106,
        "G-Cloud 5": 105
    })
}

impl StubModel for Supplier {
    const RESOURCE_NAME: Option<&'static str> = Some("suppliers");

    const ALIASES: &'static [Alias] = &[
        alias("otherCompanyRegistrationNumber", "other_company_registration_number"),
        alias("companyDetailsConfirmed", "company_details_confirmed"),
    ];

    const PARAMETERS: &'static [&'static str] = &["contact_id", "with_service_counts"];

    fn defaults() -> Map<String, Value> {
        fields! {
            "companiesHouseNumber" => "12345678",
            "companyDetailsConfirmed" => true,
            "contactInformation" => [(contact_information())],
            "description" => "I'm a supplier.",
            "dunsNumber" => "123456789",
            "id" => 1234,
            "links" => {
                "self": "http://localhost:5000/suppliers/1234"
            },
            "name" => "My Little Company",
            "organisationSize" => "micro",
            "registeredName" => "My Little Registered Company",
            "registrationCountry" => "country:GB",
            "tradingStatus" => "limited company",
            "vatNumber" => "111222333",
        }
    }

    fn derive(data: &mut Map<String, Value>, ctx: &StubContext<'_>) {
        let supplier_url = format!("http://localhost:5000/suppliers/{}", url_segment(data.get("id")));

        if !ctx.is_explicit("contactInformation") {
            let contact_id = ctx
                .param("contact_id")
                .filter(|id| !id.is_null())
                .cloned()
                .unwrap_or_else(|| Value::from(DEFAULT_CONTACT_ID));
            let mut contact = contact_information();
            contact["links"]["self"] =
                Value::from(format!("{supplier_url}/contact-information/{}", url_segment(Some(&contact_id))));
            contact["id"] = contact_id;
            data.insert("contactInformation".to_string(), json!([contact]));
        }

        ctx.derive_field(data, "links", json!({ "self": supplier_url }));

        // one registration number or the other, never both
        let overseas = data
            .get("otherCompanyRegistrationNumber")
            .is_some_and(stub_core::is_truthy);
        if overseas {
            trace!("Dropping companiesHouseNumber for an overseas supplier");
            if !ctx.is_explicit("companiesHouseNumber") {
                data.remove("companiesHouseNumber");
            }
            ctx.derive_field(data, "registrationCountry", "country:NZ");
        }

        if ctx.is_truthy("with_service_counts") {
            ctx.derive_field(data, "service_counts", service_counts());
        }
    }
}

pub type SupplierStub = Stub<Supplier>;
