use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub title: String,
    pub bio: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Skill {
    pub icon: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(rename = "emoji", alias = "icon")]
    pub icon: String,
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// 聯絡表單的四個欄位
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldName {
    Name,
    Email,
    Phone,
    Message,
}

impl FieldName {
    pub const ALL: [FieldName; 4] = [
        FieldName::Name,
        FieldName::Email,
        FieldName::Phone,
        FieldName::Message,
    ];

    /// 未知的欄位名稱回傳 None
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "name" => Some(FieldName::Name),
            "email" => Some(FieldName::Email),
            "phone" => Some(FieldName::Phone),
            "message" => Some(FieldName::Message),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Email => "email",
            FieldName::Phone => "phone",
            FieldName::Message => "message",
        }
    }
}

impl fmt::Display for FieldName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

impl FormFields {
    pub fn get(&self, field: FieldName) -> &str {
        match field {
            FieldName::Name => &self.name,
            FieldName::Email => &self.email,
            FieldName::Phone => &self.phone,
            FieldName::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: FieldName, value: impl Into<String>) {
        let slot = match field {
            FieldName::Name => &mut self.name,
            FieldName::Email => &mut self.email,
            FieldName::Phone => &mut self.phone,
            FieldName::Message => &mut self.message,
        };
        *slot = value.into();
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldName, &str)> + '_ {
        FieldName::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

/// 欄位錯誤；沒有 key 代表該欄位目前有效
pub type FormErrors = BTreeMap<FieldName, String>;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    About,
    Work,
    Contact,
}

impl Section {
    pub const ALL: [Section; 3] = [Section::About, Section::Work, Section::Contact];

    pub fn parse(id: &str) -> Option<Self> {
        match id {
            "about" => Some(Section::About),
            "work" => Some(Section::Work),
            "contact" => Some(Section::Contact),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::About => "about",
            Section::Work => "work",
            Section::Contact => "contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    #[serde(rename = "isValid")]
    pub is_valid: bool,
    pub errors: FormErrors,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionOutcome {
    Sent { message: String },
    Rejected { errors: FormErrors },
}

impl SubmissionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, SubmissionOutcome::Sent { .. })
    }

    pub fn errors(&self) -> Option<&FormErrors> {
        match self {
            SubmissionOutcome::Sent { .. } => None,
            SubmissionOutcome::Rejected { errors } => Some(errors),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
    Moved { section: Section },
    NotFound { message: String },
}

impl NavigationOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, NavigationOutcome::Moved { .. })
    }
}

/// 對外的 JSON 形狀：`{ success, message | section | errors }`
#[derive(Serialize)]
struct OutcomeWire<'a> {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    section: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    errors: Option<&'a FormErrors>,
}

impl Serialize for SubmissionOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            SubmissionOutcome::Sent { message } => OutcomeWire {
                success: true,
                message: Some(message.as_str()),
                section: None,
                errors: None,
            },
            SubmissionOutcome::Rejected { errors } => OutcomeWire {
                success: false,
                message: None,
                section: None,
                errors: Some(errors),
            },
        };
        wire.serialize(serializer)
    }
}

impl Serialize for NavigationOutcome {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let wire = match self {
            NavigationOutcome::Moved { section } => OutcomeWire {
                success: true,
                message: None,
                section: Some(*section),
                errors: None,
            },
            NavigationOutcome::NotFound { message } => OutcomeWire {
                success: false,
                message: Some(message.as_str()),
                section: None,
                errors: None,
            },
        };
        wire.serialize(serializer)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScrollTarget {
    pub target: String,
    pub offset: u32,
    pub behavior: &'static str,
}
