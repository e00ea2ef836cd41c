use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: i64,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub zip_code: Option<String>,
    pub capacity: Option<i32>,
    pub amenities: Option<String>,
    pub is_active: bool,
    pub created_by: Option<i64>,
}

impl Venue {
    /// Display location for events held here: "address, city" with the
    /// state appended when present.
    pub fn display_location(&self) -> Option<String> {
        match (&self.address, &self.city) {
            (Some(address), Some(city)) => Some(match &self.state {
                Some(state) => format!("{address}, {city}, {state}"),
                None => format!("{address}, {city}"),
            }),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venue(address: Option<&str>, city: Option<&str>, state: Option<&str>) -> Venue {
        Venue {
            id: 1,
            name: "Grand Hall".to_string(),
            address: address.map(str::to_string),
            city: city.map(str::to_string),
            state: state.map(str::to_string),
            zip_code: None,
            capacity: Some(100),
            amenities: None,
            is_active: true,
            created_by: None,
        }
    }

    #[test]
    fn display_location_includes_state_when_present() {
        let v = venue(Some("12 Main St"), Some("Springfield"), Some("IL"));
        assert_eq!(
            v.display_location().as_deref(),
            Some("12 Main St, Springfield, IL")
        );
    }

    #[test]
    fn display_location_without_state() {
        let v = venue(Some("12 Main St"), Some("Springfield"), None);
        assert_eq!(
            v.display_location().as_deref(),
            Some("12 Main St, Springfield")
        );
    }

    #[test]
    fn display_location_requires_address_and_city() {
        assert_eq!(venue(Some("12 Main St"), None, None).display_location(), None);
        assert_eq!(venue(None, Some("Springfield"), None).display_location(), None);
    }
}
