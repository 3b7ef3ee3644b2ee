use sea_orm::entity::prelude::*;

/// A cinema saloon. `code` is assigned by the theater chain, not by us.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "cinema")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: i32,
    pub name: String,
    pub city: String,
    pub capacity: Option<i32>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub image: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::show_time::Entity")]
    ShowTime,
}

impl Related<super::show_time::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::ShowTime.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
