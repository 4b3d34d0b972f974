use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

pub const MAX_STREET_NAME_LEN: usize = 255;
pub const MAX_NUMBER_LEN: usize = 20;
pub const MAX_BOX_NUMBER_LEN: usize = 11;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Country {
    pub id: i32,
    pub name: String,
    /// ISO 3166-1 alpha-3, e.g. `BEL`
    pub iso_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Locality {
    pub id: i32,
    pub postal_code: Option<String>,
    pub town: Option<String>,
    pub sub_town: Option<String>,
    pub main_town: Option<String>,
    pub province: Option<String>,
    pub country_id: i32,
}

/// What a postal-code lookup returns to the address form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct LocalitySummary {
    pub postal_code: Option<String>,
    pub town: Option<String>,
    pub province: Option<String>,
    pub main_town: Option<String>,
}

impl From<Locality> for LocalitySummary {
    fn from(locality: Locality) -> Self {
        Self {
            postal_code: locality.postal_code,
            town: locality.town,
            province: locality.province,
            main_town: locality.main_town,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Address {
    pub id: i32,
    pub street_name: String,
    pub number: Option<String>,
    pub box_number: Option<String>,
    pub locality_id: Option<i32>,
}

/// Address form. Length limits are checked by the service so they map to
/// `INVALID_ADDRESS`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate, ToSchema)]
pub struct AddressInput {
    pub street_name: String,
    pub number: Option<String>,
    pub box_number: Option<String>,
    pub locality_id: Option<i32>,
}

#[derive(Debug, Clone, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AddressSearch {
    /// Exact street name
    pub street_name: Option<String>,
    pub locality_id: Option<i32>,
}
