//! Wire Models
//!
//! Records mirrored from the document service. Keys are camelCase on the
//! wire; optional and missing fields fall back to empty values so a sparse
//! response still renders.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;

/// `{ id, name }` reference record. Categories, branches and departments all
/// share this shape.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NamedRef {
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
}

pub type Category = NamedRef;
pub type Branch = NamedRef;
pub type Department = NamedRef;

/// Document header as listed by the pending and search endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub file_no: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub subject: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub version: String,
    #[serde(default)]
    pub category_master: Option<Category>,
    #[serde(default, deserialize_with = "lenient_list")]
    pub file_paths: Vec<String>,
    #[serde(default)]
    pub approval_status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_created_on",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<CreatedOn>,
}

impl Document {
    pub fn category_name(&self) -> Option<&str> {
        self.category_master.as_ref().map(|c| c.name.as_str())
    }
}

/// A stored file belonging to a document header.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttachedFile {
    #[serde(default)]
    pub id: Option<u64>,
    #[serde(default, deserialize_with = "lenient_string")]
    pub doc_name: String,
    #[serde(
        default,
        deserialize_with = "lenient_created_on",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_on: Option<CreatedOn>,
    #[serde(default)]
    pub document_header: Option<Document>,
}

impl AttachedFile {
    pub fn category_name(&self) -> Option<&str> {
        self.document_header
            .as_ref()
            .and_then(Document::category_name)
            .filter(|name| !name.is_empty())
    }
}

/// Access level derived from the employee's role string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    Admin,
    BranchAdmin,
    #[default]
    User,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::Admin => "ADMIN",
            Role::BranchAdmin => "BRANCH ADMIN",
            Role::User => "USER",
        }
    }
}

impl From<&str> for Role {
    /// Case and `_`/space insensitive; anything unrecognised is a regular user.
    fn from(raw: &str) -> Self {
        let normalized = raw.trim().to_ascii_uppercase().replace('_', " ");
        match normalized.as_str() {
            "ADMIN" => Role::Admin,
            "BRANCH ADMIN" => Role::BranchAdmin,
            _ => Role::User,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default)]
    pub id: u64,
    #[serde(default, deserialize_with = "lenient_string")]
    pub name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(default, alias = "mobileNo", deserialize_with = "lenient_string")]
    pub mobile: String,
    /// Role as the service spells it, shown as-is in listings.
    #[serde(default, deserialize_with = "lenient_string")]
    pub role: String,
    #[serde(default)]
    pub branch: Option<Branch>,
    #[serde(default)]
    pub department: Option<Department>,
}

impl Employee {
    /// Access level used for search scoping and navigation.
    pub fn access(&self) -> Role {
        Role::from(self.role.as_str())
    }
}

/// Body of `POST /api/documents/search`. Every value is a string and an empty
/// string means "any".
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchCriteria {
    pub file_no: String,
    pub title: String,
    pub subject: String,
    pub version: String,
    pub category: String,
    pub branch: String,
    pub department: String,
}

/// `{ "id": n }` reference used inside request payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IdRef {
    pub id: u64,
}

/// Body of the save and update endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentPayload {
    pub document_header: DocumentHeaderPayload,
    pub file_paths: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentHeaderPayload {
    /// Set only when updating an existing header.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    pub file_no: String,
    pub title: String,
    pub subject: String,
    pub version: String,
    pub category_master: IdRef,
    pub employee: IdRef,
}

// ========================
// Timestamps
// ========================

/// Creation time of a header or file. Text and array forms are taken as
/// written; epoch values are shifted into the viewer's zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CreatedOn(pub NaiveDateTime);

impl CreatedOn {
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    pub fn month(&self) -> u32 {
        self.0.month()
    }

    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Accepts the encodings the service has been seen to emit: ISO-8601
    /// with or without offset, a bare date, epoch milliseconds, and Jackson's
    /// `LocalDateTime` array form.
    pub fn from_json(value: &Value) -> Option<Self> {
        let parsed = match value {
            Value::Number(n) => n.as_i64().and_then(|ms| from_epoch_millis(ms, &Local)),
            Value::String(s) => parse_text(s),
            Value::Array(parts) => parse_parts(parts),
            _ => None,
        };
        parsed.map(CreatedOn)
    }
}

impl Serialize for CreatedOn {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&self.0.format("%Y-%m-%dT%H:%M:%S"))
    }
}

/// Epoch values are instants; dates are read in the viewer's zone, which in
/// the browser is the JS `Date` zone.
fn from_epoch_millis<Tz: TimeZone>(ms: i64, zone: &Tz) -> Option<NaiveDateTime> {
    DateTime::from_timestamp_millis(ms).map(|dt| dt.with_timezone(zone).naive_local())
}

fn parse_text(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.naive_local());
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, pattern) {
            return Some(dt);
        }
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

fn parse_parts(parts: &[Value]) -> Option<NaiveDateTime> {
    let field = |i: usize| parts.get(i).and_then(Value::as_u64);
    let date = NaiveDate::from_ymd_opt(
        i32::try_from(field(0)?).ok()?,
        u32::try_from(field(1)?).ok()?,
        u32::try_from(field(2)?).ok()?,
    )?;
    let time = |i: usize| field(i).and_then(|v| u32::try_from(v).ok()).unwrap_or(0);
    date.and_hms_opt(time(3), time(4), time(5))
}

fn lenient_created_on<'de, D>(deserializer: D) -> Result<Option<CreatedOn>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<Value>::deserialize(deserializer)?;
    Ok(value.as_ref().and_then(CreatedOn::from_json))
}

/// `null` lists decode as empty.
fn lenient_list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Numbers and nulls arrive where the UI expects text (e.g. `"version": 2`).
fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}
