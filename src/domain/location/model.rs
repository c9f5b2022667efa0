//! Location domain entity

use std::fmt;

use serde::Deserialize;
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::shared::{DomainError, DomainResult};

/// Store-assigned identifier of a [`Location`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LocationId(Uuid);

impl LocationId {
    /// Mint a fresh identifier. Only store adapters call this.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    /// Parse a caller-supplied identifier.
    ///
    /// A malformed identifier is reported as a store failure, not as a
    /// missing record: the lookup never reaches a point where absence
    /// could be decided.
    pub fn parse(raw: &str) -> DomainResult<Self> {
        Uuid::parse_str(raw).map(Self).map_err(|e| {
            DomainError::Storage(format!("Cast to identifier failed for value \"{}\": {}", raw, e))
        })
    }
}

impl fmt::Display for LocationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A reported point together with the request that produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct Location {
    pub id: LocationId,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub request_sender: String,
    pub request_type: String,
    pub status: String,
    pub number_people: f64,
    pub phone_number: String,
    /// Free-form, never parsed as a calendar date
    pub date: String,
    pub phone_org: String,
}

/// Fully populated location that has not been stored yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewLocation {
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub request_sender: String,
    pub request_type: String,
    pub status: String,
    pub number_people: f64,
    pub phone_number: String,
    pub date: String,
    pub phone_org: String,
}

impl NewLocation {
    pub fn with_id(self, id: LocationId) -> Location {
        Location {
            id,
            name: self.name,
            latitude: self.latitude,
            longitude: self.longitude,
            request_sender: self.request_sender,
            request_type: self.request_type,
            status: self.status,
            number_people: self.number_people,
            phone_number: self.phone_number,
            date: self.date,
            phone_org: self.phone_org,
        }
    }
}

/// Location fields as received from a caller.
///
/// Each field is tri-state: absent (`None`), explicit `null`
/// (`Some(None)`) or a value (`Some(Some(v))`). Create needs every field
/// to carry a value; update forwards what was sent and the store refuses
/// to null out a field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Validate, ToSchema)]
pub struct LocationDraft {
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "name must not be empty"))]
    pub name: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub latitude: Option<Option<f64>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub longitude: Option<Option<f64>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "request_sender must not be empty"))]
    pub request_sender: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "request_type must not be empty"))]
    pub request_type: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "status must not be empty"))]
    pub status: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<f64>)]
    pub number_people: Option<Option<f64>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "phone_number must not be empty"))]
    pub phone_number: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "date must not be empty"))]
    pub date: Option<Option<String>>,
    #[serde(default, with = "serde_with::rust::double_option")]
    #[schema(value_type = Option<String>)]
    #[validate(length(min = 1, message = "phone_org must not be empty"))]
    pub phone_org: Option<Option<String>>,
}

impl LocationDraft {
    fn presence(&self) -> [(&'static str, Option<bool>); 10] {
        // None = absent, Some(false) = null, Some(true) = value
        [
            ("name", self.name.as_ref().map(Option::is_some)),
            ("latitude", self.latitude.as_ref().map(Option::is_some)),
            ("longitude", self.longitude.as_ref().map(Option::is_some)),
            ("request_sender", self.request_sender.as_ref().map(Option::is_some)),
            ("request_type", self.request_type.as_ref().map(Option::is_some)),
            ("status", self.status.as_ref().map(Option::is_some)),
            ("number_people", self.number_people.as_ref().map(Option::is_some)),
            ("phone_number", self.phone_number.as_ref().map(Option::is_some)),
            ("date", self.date.as_ref().map(Option::is_some)),
            ("phone_org", self.phone_org.as_ref().map(Option::is_some)),
        ]
    }

    /// Names of the fields that are absent or null.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        self.presence()
            .into_iter()
            .filter_map(|(field, state)| (state != Some(true)).then_some(field))
            .collect()
    }

    /// Names of the fields explicitly set to null.
    pub fn null_fields(&self) -> Vec<&'static str> {
        self.presence()
            .into_iter()
            .filter_map(|(field, state)| (state == Some(false)).then_some(field))
            .collect()
    }

    /// Convert into a storable location, failing if any field is missing
    /// or `number_people` is zero.
    pub fn require_all(self) -> DomainResult<NewLocation> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(DomainError::Validation(format!(
                "missing required fields: {}",
                missing.join(", ")
            )));
        }

        match self {
            LocationDraft {
                name: Some(Some(name)),
                latitude: Some(Some(latitude)),
                longitude: Some(Some(longitude)),
                request_sender: Some(Some(request_sender)),
                request_type: Some(Some(request_type)),
                status: Some(Some(status)),
                number_people: Some(Some(number_people)),
                phone_number: Some(Some(phone_number)),
                date: Some(Some(date)),
                phone_org: Some(Some(phone_org)),
            } => {
                if number_people == 0.0 {
                    return Err(DomainError::Validation(
                        "number_people must not be zero".to_string(),
                    ));
                }
                Ok(NewLocation {
                    name,
                    latitude,
                    longitude,
                    request_sender,
                    request_type,
                    status,
                    number_people,
                    phone_number,
                    date,
                    phone_org,
                })
            }
            _ => Err(DomainError::Validation("missing required fields".to_string())),
        }
    }

    /// Overwrite the fields of `location` that this draft carries.
    ///
    /// Every stored field is required, so an explicit null is refused as a
    /// store error and `location` is left untouched.
    pub fn apply_to(self, location: &mut Location) -> DomainResult<()> {
        let nulls = self.null_fields();
        if !nulls.is_empty() {
            return Err(DomainError::Storage(format!(
                "Validation failed: {} is required",
                nulls.join(", ")
            )));
        }

        if let Some(Some(v)) = self.name {
            location.name = v;
        }
        if let Some(Some(v)) = self.latitude {
            location.latitude = v;
        }
        if let Some(Some(v)) = self.longitude {
            location.longitude = v;
        }
        if let Some(Some(v)) = self.request_sender {
            location.request_sender = v;
        }
        if let Some(Some(v)) = self.request_type {
            location.request_type = v;
        }
        if let Some(Some(v)) = self.status {
            location.status = v;
        }
        if let Some(Some(v)) = self.number_people {
            location.number_people = v;
        }
        if let Some(Some(v)) = self.phone_number {
            location.phone_number = v;
        }
        if let Some(Some(v)) = self.date {
            location.date = v;
        }
        if let Some(Some(v)) = self.phone_org {
            location.phone_org = v;
        }
        Ok(())
    }
}

/// Validate the per-field rules shared by create and update: provided
/// text must not be empty.
///
/// Presence is not checked here; see [`LocationDraft::require_all`].
pub fn validate_draft(draft: &LocationDraft) -> DomainResult<()> {
    draft.validate().map_err(|errors| {
        let mut details: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| format!("{}: {}", field, e.code))
                })
            })
            .collect();
        details.sort();
        DomainError::Validation(details.join("; "))
    })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn set<T>(value: T) -> Option<Option<T>> {
        Some(Some(value))
    }

    pub(crate) fn shelter_draft() -> LocationDraft {
        LocationDraft {
            name: set("Shelter A".into()),
            latitude: set(10.77),
            longitude: set(106.70),
            request_sender: set("X".into()),
            request_type: set("rescue".into()),
            status: set("open".into()),
            number_people: set(5.0),
            phone_number: set("0900000000".into()),
            date: set("2024-01-01".into()),
            phone_org: set("OrgA".into()),
        }
    }

    fn stored() -> Location {
        shelter_draft()
            .require_all()
            .unwrap()
            .with_id(LocationId::generate())
    }

    #[test]
    fn complete_draft_converts() {
        let new = shelter_draft().require_all().unwrap();
        assert_eq!(new.name, "Shelter A");
        assert_eq!(new.number_people, 5.0);
        assert_eq!(new.phone_org, "OrgA");
    }

    #[test]
    fn missing_and_null_fields_are_reported_by_name() {
        let mut draft = shelter_draft();
        draft.phone_org = None;
        draft.latitude = Some(None);

        assert_eq!(draft.missing_fields(), vec!["latitude", "phone_org"]);
        match draft.require_all() {
            Err(DomainError::Validation(msg)) => {
                assert_eq!(msg, "missing required fields: latitude, phone_org")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn json_distinguishes_null_from_absent() {
        let draft: LocationDraft =
            serde_json::from_str(r#"{"name": null, "status": "open"}"#).unwrap();
        assert_eq!(draft.name, Some(None));
        assert_eq!(draft.status, set("open".to_string()));
        assert_eq!(draft.date, None);
        assert_eq!(draft.null_fields(), vec!["name"]);
    }

    #[test]
    fn fractional_people_count_is_a_number() {
        let draft: LocationDraft = serde_json::from_str(r#"{"number_people": 2.5}"#).unwrap();
        assert_eq!(draft.number_people, set(2.5));
    }

    #[test]
    fn coordinates_and_counts_are_not_range_checked() {
        let mut draft = shelter_draft();
        draft.latitude = set(95.0);
        draft.longitude = set(200.0);
        draft.number_people = set(-2.0);
        assert!(validate_draft(&draft).is_ok());
        assert!(draft.require_all().is_ok());
    }

    #[test]
    fn zero_people_is_rejected_on_create_only() {
        let mut draft = shelter_draft();
        draft.number_people = set(0.0);
        assert!(validate_draft(&draft).is_ok());
        assert!(matches!(draft.require_all(), Err(DomainError::Validation(_))));

        let mut location = stored();
        LocationDraft {
            number_people: set(0.0),
            ..Default::default()
        }
        .apply_to(&mut location)
        .unwrap();
        assert_eq!(location.number_people, 0.0);
    }

    #[test]
    fn zero_coordinates_are_present() {
        let mut draft = shelter_draft();
        draft.latitude = set(0.0);
        draft.longitude = set(0.0);
        assert!(draft.missing_fields().is_empty());
        assert!(draft.require_all().is_ok());
    }

    #[test]
    fn empty_text_fails_rules() {
        let mut draft = shelter_draft();
        draft.name = set(String::new());

        match validate_draft(&draft) {
            Err(DomainError::Validation(msg)) => assert!(msg.contains("name must not be empty")),
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn empty_draft_passes_rules() {
        assert!(validate_draft(&LocationDraft::default()).is_ok());
    }

    #[test]
    fn apply_to_only_touches_present_fields() {
        let mut location = stored();
        let before = location.clone();

        LocationDraft {
            status: set("closed".into()),
            number_people: set(12.0),
            ..Default::default()
        }
        .apply_to(&mut location)
        .unwrap();

        assert_eq!(location.status, "closed");
        assert_eq!(location.number_people, 12.0);
        assert_eq!(location.name, before.name);
        assert_eq!(location.id, before.id);
    }

    #[test]
    fn apply_to_refuses_null_and_leaves_record_untouched() {
        let mut location = stored();
        let before = location.clone();

        let err = LocationDraft {
            name: Some(None),
            status: set("closed".into()),
            ..Default::default()
        }
        .apply_to(&mut location)
        .unwrap_err();

        match err {
            DomainError::Storage(msg) => assert!(msg.contains("name is required")),
            other => panic!("expected store error, got {other:?}"),
        }
        assert_eq!(location, before);
    }

    #[test]
    fn malformed_identifier_is_a_store_error() {
        assert!(matches!(
            LocationId::parse("not-an-id"),
            Err(DomainError::Storage(_))
        ));
        let id = LocationId::generate();
        assert_eq!(LocationId::parse(&id.to_string()).unwrap(), id);
    }
}
