use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Locality;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "localities")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub locality_id: i32,
    pub postal_code: Option<String>,
    pub town: Option<String>,
    pub sub_town: Option<String>,
    pub main_town: Option<String>,
    pub province: Option<String>,
    pub fk_country_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::country::Entity",
        from = "Column::FkCountryId",
        to = "super::country::Column::CountryId"
    )]
    Country,
    #[sea_orm(has_many = "super::address::Entity")]
    Addresses,
}

impl Related<super::country::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Country.def()
    }
}

impl Related<super::address::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Addresses.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Locality {
    fn from(model: Model) -> Self {
        Self {
            id: model.locality_id,
            postal_code: model.postal_code,
            town: model.town,
            sub_town: model.sub_town,
            main_town: model.main_town,
            province: model.province,
            country_id: model.fk_country_id,
        }
    }
}
