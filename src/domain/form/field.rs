//! Field definitions - immutable, defined at configuration time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The kind of input a field collects. Drives which shape rule applies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Email,
    Phone,
    Zip,
    Url,
    Radio,
    Checkbox,
    TextArea,
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            FieldKind::Text => "text",
            FieldKind::Email => "email",
            FieldKind::Phone => "phone",
            FieldKind::Zip => "zip",
            FieldKind::Url => "url",
            FieldKind::Radio => "radio",
            FieldKind::Checkbox => "checkbox",
            FieldKind::TextArea => "textarea",
        };
        write!(f, "{}", s)
    }
}

/// What the trigger field must hold for a dependent field to be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Trigger checkbox is checked.
    Checked,
    /// Trigger (radio group or text) holds exactly this value.
    Equals(String),
}

/// Conditional dependency of one field on another field's value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependsOn {
    pub trigger_key: String,
    pub trigger: Trigger,
    /// The dependent must be filled at submission time while it is visible,
    /// even though it carries no static `required` flag.
    pub required_when_visible: bool,
}

impl DependsOn {
    /// Shown while the checkbox `trigger_key` is checked.
    pub fn checked(trigger_key: impl Into<String>) -> Self {
        Self {
            trigger_key: trigger_key.into(),
            trigger: Trigger::Checked,
            required_when_visible: false,
        }
    }

    /// Shown while `trigger_key` holds `value`.
    pub fn equals(trigger_key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            trigger_key: trigger_key.into(),
            trigger: Trigger::Equals(value.into()),
            required_when_visible: false,
        }
    }

    /// Marks the dependent as required at submission while visible.
    pub fn required_when_visible(mut self) -> Self {
        self.required_when_visible = true;
        self
    }
}

/// One member of a radio group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RadioOption {
    pub value: String,
    pub label: String,
    /// A group is required when at least one member declares required.
    pub required: bool,
}

impl RadioOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}

/// Static definition of one input.
///
/// Built with the kind-specific constructors and refined with the
/// chained modifiers:
///
/// ```ignore
/// let email = FieldDefinition::email("email", "Email").required();
/// let ext = FieldDefinition::text("phoneExt", "Phone Extension")
///     .depends_on(DependsOn::checked("phoneExtCheck"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldDefinition {
    pub key: String,
    pub label: String,
    pub required: bool,
    pub kind: FieldKind,
    pub depends_on: Option<DependsOn>,
    /// Radio members; empty for every other kind.
    pub options: Vec<RadioOption>,
    pub min_length: Option<usize>,
    /// Initial value restored at mount and after a successful submission.
    pub default_value: Option<String>,
}

impl FieldDefinition {
    /// Creates a field of the given kind with no rules attached.
    pub fn new(key: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            required: false,
            kind,
            depends_on: None,
            options: Vec::new(),
            min_length: None,
            default_value: None,
        }
    }

    pub fn text(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Text)
    }

    pub fn email(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Email)
    }

    pub fn phone(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Phone)
    }

    pub fn zip(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Zip)
    }

    pub fn url(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Url)
    }

    pub fn text_area(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::TextArea)
    }

    pub fn checkbox(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self::new(key, label, FieldKind::Checkbox)
    }

    pub fn radio(
        key: impl Into<String>,
        label: impl Into<String>,
        options: Vec<RadioOption>,
    ) -> Self {
        Self {
            options,
            ..Self::new(key, label, FieldKind::Radio)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn depends_on(mut self, dependency: DependsOn) -> Self {
        self.depends_on = Some(dependency);
        self
    }

    pub fn with_min_length(mut self, min: usize) -> Self {
        self.min_length = Some(min);
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default_value = Some(value.into());
        self
    }

    pub fn is_radio(&self) -> bool {
        self.kind == FieldKind::Radio
    }

    pub fn is_checkbox(&self) -> bool {
        self.kind == FieldKind::Checkbox
    }

    /// Effective requiredness: for radio groups, true when the field or
    /// any member declares required.
    pub fn is_required(&self) -> bool {
        self.required || self.options.iter().any(|o| o.required)
    }

    /// Returns true if `value` is one of this radio group's members.
    pub fn has_option(&self, value: &str) -> bool {
        self.options.iter().any(|o| o.value == value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_kind() {
        assert_eq!(FieldDefinition::email("e", "E").kind, FieldKind::Email);
        assert_eq!(FieldDefinition::zip("z", "Z").kind, FieldKind::Zip);
        assert_eq!(FieldDefinition::text_area("m", "M").kind, FieldKind::TextArea);
        assert!(FieldDefinition::checkbox("c", "C").is_checkbox());
    }

    #[test]
    fn fields_are_optional_by_default() {
        assert!(!FieldDefinition::text("a", "A").is_required());
        assert!(FieldDefinition::text("a", "A").required().is_required());
    }

    #[test]
    fn radio_group_is_required_when_any_member_is() {
        let group = FieldDefinition::radio(
            "serviceDesired",
            "Service Desired",
            vec![
                RadioOption::new("Web Development", "Website").required(),
                RadioOption::new("App Development", "App Development"),
            ],
        );

        assert!(!group.required);
        assert!(group.is_required());
    }

    #[test]
    fn radio_group_without_required_members_is_optional() {
        let group = FieldDefinition::radio(
            "hasWebsite",
            "Do you currently have a website?",
            vec![RadioOption::new("yes", "Yes"), RadioOption::new("no", "No")],
        );
        assert!(!group.is_required());
        assert!(group.has_option("no"));
        assert!(!group.has_option("maybe"));
    }

    #[test]
    fn depends_on_builders() {
        let dep = DependsOn::equals("hasWebsite", "yes").required_when_visible();
        assert_eq!(dep.trigger, Trigger::Equals("yes".to_string()));
        assert!(dep.required_when_visible);
        assert!(!DependsOn::checked("phoneExtCheck").required_when_visible);
    }

    #[test]
    fn field_kind_displays_lowercase() {
        assert_eq!(FieldKind::TextArea.to_string(), "textarea");
        assert_eq!(FieldKind::Url.to_string(), "url");
    }
}
