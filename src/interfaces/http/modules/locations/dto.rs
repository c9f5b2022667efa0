//! Location DTOs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::Location;

/// A stored location as returned by every read and write endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct LocationResponse {
    /// Store-assigned identifier
    pub id: String,
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

impl From<Location> for LocationResponse {
    fn from(l: Location) -> Self {
        Self {
            id: l.id.to_string(),
            name: l.name,
            latitude: l.latitude,
            longitude: l.longitude,
            request_sender: l.request_sender,
            request_type: l.request_type,
            status: l.status,
            number_people: l.number_people,
            phone_number: l.phone_number,
            date: l.date,
            phone_org: l.phone_org,
        }
    }
}

/// `{message, location}` body of create, update and delete
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LocationEnvelope {
    pub message: String,
    pub location: LocationResponse,
}

impl LocationEnvelope {
    pub fn new(message: impl Into<String>, location: Location) -> Self {
        Self {
            message: message.into(),
            location: location.into(),
        }
    }
}
