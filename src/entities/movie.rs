use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "movie")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub title: String,
    pub director: Option<String>,
    pub year: Option<i32>,
    pub length_min: Option<i32>,
    pub description: Option<String>,
    pub poster: Option<String>,
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
