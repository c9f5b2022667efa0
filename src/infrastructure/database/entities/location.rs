//! Location entity

use sea_orm::entity::prelude::*;

/// One stored location row
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "locations")]
pub struct Model {
    /// UUID v4 assigned on insert
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    pub name: String,

    pub latitude: f64,

    pub longitude: f64,

    /// Who sent the request
    pub request_sender: String,

    /// Kind of help requested (e.g. "rescue")
    pub request_type: String,

    pub status: String,

    pub number_people: f64,

    pub phone_number: String,

    /// Free-form date text as sent by the client
    pub date: String,

    /// Organisation phone used for lookups
    #[sea_orm(indexed)]
    pub phone_org: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
