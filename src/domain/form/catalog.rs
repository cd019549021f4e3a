//! The standard inquiry form.
//!
//! Personal Information → Business Information → Billing Address →
//! Service Details → Review. The compact variant drops the business step.

use super::field::{DependsOn, FieldDefinition, RadioOption};
use super::step::{FormDefinition, StepDefinition};

/// Field keys of the standard inquiry form. Keys are also the payload names.
pub mod keys {
    pub const FIRST_NAME: &str = "firstName";
    pub const LAST_NAME: &str = "lastName";
    pub const EMAIL: &str = "email";
    pub const PHONE: &str = "phone";
    pub const PHONE_EXT_CHECK: &str = "phoneExtCheck";
    pub const PHONE_EXT: &str = "phoneExt";
    pub const TEXT_NUMBER: &str = "textNumber";

    pub const BUSINESS_NAME: &str = "businessName";
    pub const BUSINESS_PHONE: &str = "businessPhone";
    pub const BUSINESS_PHONE_EXT_CHECK: &str = "businessPhoneExtCheck";
    pub const BUSINESS_PHONE_EXT: &str = "businessPhoneExt";
    pub const BUSINESS_EMAIL: &str = "businessEmail";
    pub const BUSINESS_SERVICES: &str = "businessServices";

    pub const BILLING_STREET: &str = "billingStreet";
    pub const BILLING_APT_UNIT: &str = "billingAptUnit";
    pub const BILLING_CITY: &str = "billingCity";
    pub const BILLING_STATE: &str = "billingState";
    pub const BILLING_ZIP_CODE: &str = "billingZipCode";
    pub const BILLING_COUNTRY: &str = "billingCountry";

    pub const PREFERRED_CONTACT: &str = "preferredContact";
    pub const SERVICE_DESIRED: &str = "serviceDesired";
    pub const HAS_WEBSITE: &str = "hasWebsite";
    pub const WEBSITE_ADDRESS: &str = "websiteAddress";
    pub const MESSAGE: &str = "message";
}

/// Country assumed when the billing country is left blank.
pub const DEFAULT_COUNTRY: &str = "USA";

impl FormDefinition {
    /// The full five-step inquiry form.
    pub fn inquiry() -> Self {
        Self::assemble(inquiry_steps(true))
    }

    /// The four-step variant without the business step.
    pub fn compact_inquiry() -> Self {
        Self::assemble(inquiry_steps(false))
    }

    /// Selects the variant from the `include_business_step` option.
    pub fn inquiry_variant(include_business_step: bool) -> Self {
        Self::assemble(inquiry_steps(include_business_step))
    }
}

fn inquiry_steps(include_business_step: bool) -> Vec<StepDefinition> {
    let mut steps = vec![personal_step()];
    if include_business_step {
        steps.push(business_step());
    }
    steps.push(billing_step());
    steps.push(service_step());
    steps.push(StepDefinition::review("Review Your Information"));
    steps
}

fn personal_step() -> StepDefinition {
    StepDefinition::new(
        "Personal Information",
        vec![
            FieldDefinition::text(keys::FIRST_NAME, "First Name").required(),
            FieldDefinition::text(keys::LAST_NAME, "Last Name").required(),
            FieldDefinition::email(keys::EMAIL, "Email").required(),
            FieldDefinition::phone(keys::PHONE, "Phone").required(),
            FieldDefinition::checkbox(keys::PHONE_EXT_CHECK, "Add extension"),
            FieldDefinition::text(keys::PHONE_EXT, "Phone Extension")
                .depends_on(DependsOn::checked(keys::PHONE_EXT_CHECK)),
            FieldDefinition::phone(keys::TEXT_NUMBER, "Text Number"),
        ],
    )
}

fn business_step() -> StepDefinition {
    StepDefinition::new(
        "Business Information",
        vec![
            FieldDefinition::text(keys::BUSINESS_NAME, "Business Name"),
            FieldDefinition::phone(keys::BUSINESS_PHONE, "Business Phone"),
            FieldDefinition::checkbox(keys::BUSINESS_PHONE_EXT_CHECK, "Add extension"),
            FieldDefinition::text(keys::BUSINESS_PHONE_EXT, "Business Extension")
                .depends_on(DependsOn::checked(keys::BUSINESS_PHONE_EXT_CHECK)),
            FieldDefinition::email(keys::BUSINESS_EMAIL, "Business Email"),
            FieldDefinition::text_area(keys::BUSINESS_SERVICES, "Business Services"),
        ],
    )
}

fn billing_step() -> StepDefinition {
    StepDefinition::new(
        "Billing Address",
        vec![
            FieldDefinition::text(keys::BILLING_STREET, "Street Address").required(),
            FieldDefinition::text(keys::BILLING_APT_UNIT, "Apt/Unit"),
            FieldDefinition::text(keys::BILLING_CITY, "City").required(),
            FieldDefinition::text(keys::BILLING_STATE, "State/Province").required(),
            FieldDefinition::zip(keys::BILLING_ZIP_CODE, "ZIP Code").required(),
            FieldDefinition::text(keys::BILLING_COUNTRY, "Country")
                .required()
                .with_default(DEFAULT_COUNTRY),
        ],
    )
}

fn service_step() -> StepDefinition {
    StepDefinition::new(
        "Service Details",
        vec![
            FieldDefinition::radio(
                keys::PREFERRED_CONTACT,
                "Preferred Contact Method",
                vec![
                    RadioOption::new("phone", "Phone").required(),
                    RadioOption::new("email", "Email"),
                    RadioOption::new("text", "Text"),
                    RadioOption::new("businessPhone", "Business Phone"),
                    RadioOption::new("businessEmail", "Business Email"),
                ],
            ),
            FieldDefinition::radio(
                keys::SERVICE_DESIRED,
                "Service Desired",
                vec![
                    RadioOption::new("Web Development", "Website").required(),
                    RadioOption::new("App Development", "App Development"),
                ],
            ),
            FieldDefinition::radio(
                keys::HAS_WEBSITE,
                "Do you currently have a website?",
                vec![RadioOption::new("yes", "Yes"), RadioOption::new("no", "No")],
            ),
            FieldDefinition::url(keys::WEBSITE_ADDRESS, "Website Address").depends_on(
                DependsOn::equals(keys::HAS_WEBSITE, "yes").required_when_visible(),
            ),
            FieldDefinition::text_area(keys::MESSAGE, "Message"),
        ],
    )
}
