use serde::{Deserialize, Serialize};

use crate::constants::{AMENITY_NO, AMENITY_YES};

/// One cafe record as stored
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Cafe {
    pub id: i64,
    /// Unique across all records
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    /// Free-form seat count, e.g. "20-30"
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    /// Free-form currency string, e.g. "$3.50"
    pub coffee_price: Option<String>,
}

/// Fields for a cafe about to be inserted (the id is assigned by the database)
#[derive(Debug, Clone)]
pub struct NewCafe {
    pub name: String,
    pub map_url: String,
    pub img_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: bool,
    pub has_wifi: bool,
    pub has_sockets: bool,
    pub can_take_calls: bool,
    pub coffee_price: Option<String>,
}

/// Map an amenity flag to its display string
pub fn amenity_label(flag: bool) -> &'static str {
    if flag {
        AMENITY_YES
    } else {
        AMENITY_NO
    }
}

/// A cafe prepared for the list view, amenity flags already rendered
#[derive(Debug, Clone)]
pub struct CafeRow {
    pub id: i64,
    pub name: String,
    pub img_url: String,
    pub map_url: String,
    pub location: String,
    pub seats: String,
    pub has_toilet: &'static str,
    pub has_wifi: &'static str,
    pub has_sockets: &'static str,
    pub can_take_calls: &'static str,
    pub coffee_price: String,
}

impl From<Cafe> for CafeRow {
    fn from(cafe: Cafe) -> Self {
        CafeRow {
            id: cafe.id,
            name: cafe.name,
            img_url: cafe.img_url,
            map_url: cafe.map_url,
            location: cafe.location,
            seats: cafe.seats,
            has_toilet: amenity_label(cafe.has_toilet),
            has_wifi: amenity_label(cafe.has_wifi),
            has_sockets: amenity_label(cafe.has_sockets),
            can_take_calls: amenity_label(cafe.can_take_calls),
            coffee_price: cafe.coffee_price.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_cafe() -> Cafe {
        Cafe {
            id: 7,
            name: "Blue Bottle".to_string(),
            map_url: "http://maps.example/1".to_string(),
            img_url: "http://img.example/1.png".to_string(),
            location: "Downtown".to_string(),
            seats: "10-20".to_string(),
            has_toilet: true,
            has_wifi: true,
            has_sockets: false,
            can_take_calls: false,
            coffee_price: Some("$3".to_string()),
        }
    }

    #[test]
    fn test_amenity_label() {
        assert_eq!(amenity_label(true), "Yes");
        assert_eq!(amenity_label(false), "No");
    }

    #[test]
    fn test_cafe_row_mapping() {
        let row = CafeRow::from(sample_cafe());

        assert_eq!(row.id, 7);
        assert_eq!(row.name, "Blue Bottle");
        assert_eq!(row.has_toilet, "Yes");
        assert_eq!(row.has_wifi, "Yes");
        assert_eq!(row.has_sockets, "No");
        assert_eq!(row.can_take_calls, "No");
        assert_eq!(row.coffee_price, "$3");
    }

    #[test]
    fn test_cafe_row_missing_price_renders_empty() {
        let mut cafe = sample_cafe();
        cafe.coffee_price = None;

        let row = CafeRow::from(cafe);
        assert_eq!(row.coffee_price, "");
    }
}
