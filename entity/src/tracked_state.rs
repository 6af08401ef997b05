//! Last-known natural key per tracked entity (e.g. the current track id).

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "tracked_state")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub entity_key: String,
    pub last_value: String,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
