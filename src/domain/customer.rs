use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Customer row served by the demo listing endpoint.
///
/// The upstream demo also tags rows with a random "Active"/"Inactive" badge;
/// that is display filler with no business rule behind it and is deliberately
/// not part of the domain model.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Customer {
    pub id: String,
    pub name: CustomerName,
    pub email: String,
    pub phone: Option<String>,
    pub location: Option<CustomerLocation>,
    /// Avatar URL, when the endpoint provides one.
    pub picture: Option<String>,
    pub registered_at: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerName {
    pub first: String,
    pub last: String,
}

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct CustomerLocation {
    pub city: String,
    pub country: Option<String>,
}

impl Customer {
    /// Full name as rendered in list rows.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.name.first, self.name.last)
            .trim()
            .to_string()
    }
}
