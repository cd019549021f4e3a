//! SubmissionPayload - flattened form values plus the billing address.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::form::{
    keys, ConditionalFields, FieldValue, FormDefinition, FormState, DEFAULT_COUNTRY,
};

/// Billing address assembled from the dedicated address fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingAddress {
    pub street: String,
    pub apt_unit: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
}

impl BillingAddress {
    /// Missing fields become empty strings; a blank country becomes the default.
    pub fn from_form(form: &FormState) -> Self {
        let country = form.text(keys::BILLING_COUNTRY);
        Self {
            street: form.text(keys::BILLING_STREET).to_string(),
            apt_unit: form.text(keys::BILLING_APT_UNIT).to_string(),
            city: form.text(keys::BILLING_CITY).to_string(),
            state: form.text(keys::BILLING_STATE).to_string(),
            zip_code: form.text(keys::BILLING_ZIP_CODE).to_string(),
            country: if country.trim().is_empty() {
                DEFAULT_COUNTRY.to_string()
            } else {
                country.to_string()
            },
        }
    }
}

/// The JSON body posted to the submission endpoint.
///
/// Field values sit at the top level under their keys. Hidden dependent
/// fields and radio groups with no selection are omitted rather than sent
/// empty. Checkboxes are booleans.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionPayload {
    #[serde(flatten)]
    pub fields: BTreeMap<String, FieldValue>,
    pub billing_address: BillingAddress,
    /// Always true; distinguishes widget submissions from other producers
    /// sharing the same endpoint.
    pub is_form_submission: bool,
}

impl SubmissionPayload {
    pub fn from_form(definition: &FormDefinition, form: &FormState) -> Self {
        let fields = definition
            .fields()
            .filter(|f| ConditionalFields::is_visible(f, form))
            .filter_map(|f| {
                let value = form.get(&f.key)?.clone();
                if f.is_radio() && !f.has_option(value.as_str()) {
                    return None;
                }
                Some((f.key.clone(), value))
            })
            .collect();

        Self {
            fields,
            billing_address: BillingAddress::from_form(form),
            is_form_submission: true,
        }
    }

    /// Text value of a top-level field.
    pub fn value(&self, key: &str) -> Option<&str> {
        match self.fields.get(key)? {
            FieldValue::Text(s) => Some(s),
            FieldValue::Flag(_) => None,
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    pub fn to_json(&self) -> Result<serde_json::Value, serde_json::Error> {
        serde_json::to_value(self)
    }
}
