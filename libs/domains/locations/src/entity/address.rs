use sea_orm::ActiveValue::{NotSet, Set};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use crate::models::Address;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "addresses")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub address_id: i32,
    pub street_name: String,
    pub number: Option<String>,
    pub box_number: Option<String>,
    pub fk_locality_id: Option<i32>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::locality::Entity",
        from = "Column::FkLocalityId",
        to = "super::locality::Column::LocalityId"
    )]
    Locality,
}

impl Related<super::locality::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Locality.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Address {
    fn from(model: Model) -> Self {
        Self {
            id: model.address_id,
            street_name: model.street_name,
            number: model.number,
            box_number: model.box_number,
            locality_id: model.fk_locality_id,
        }
    }
}

impl From<Address> for ActiveModel {
    fn from(address: Address) -> Self {
        ActiveModel {
            address_id: Set(address.id),
            street_name: Set(address.street_name),
            number: Set(address.number),
            box_number: Set(address.box_number),
            fk_locality_id: Set(address.locality_id),
        }
    }
}

pub fn new_active_model(address: Address) -> ActiveModel {
    ActiveModel {
        address_id: NotSet,
        ..ActiveModel::from(address)
    }
}
