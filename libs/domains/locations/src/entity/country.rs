use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Country;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "countries")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub country_id: i32,
    pub country_name: String,
    pub iso_alpha3: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::locality::Entity")]
    Localities,
}

impl Related<super::locality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Localities.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Country {
    fn from(model: Model) -> Self {
        Self {
            id: model.country_id,
            name: model.country_name,
            iso_code: model.iso_alpha3,
        }
    }
}
