use sea_orm::entity::prelude::*;

use crate::models::SaleStatus;

/// A movie screening at a cinema at a specific time.
///
/// `start_time` is unix seconds, `price` is in the smallest currency unit,
/// and `status` holds a [`SaleStatus`] code. Callers keep
/// `0 <= free_seats <= salable_seats`; nothing here enforces it.
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "show_time")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub movie_id: i32,
    pub cinema_code: i32,
    pub start_time: i64,
    pub price: i64,
    pub salable_seats: i32,
    pub free_seats: i32,
    pub status: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::movie::Entity",
        from = "Column::MovieId",
        to = "super::movie::Column::Id"
    )]
    Movie,
    #[sea_orm(
        belongs_to = "super::cinema::Entity",
        from = "Column::CinemaCode",
        to = "super::cinema::Column::Code"
    )]
    Cinema,
}

impl Related<super::movie::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Movie.def()
    }
}

impl Related<super::cinema::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Cinema.def()
    }
}

impl Model {
    pub fn sale_status(&self) -> Option<SaleStatus> {
        SaleStatus::from_code(self.status)
    }

    /// True if all seats are sold.
    pub fn is_full(&self) -> bool {
        self.free_seats == 0
    }

    /// Price with the currency suffix, for display.
    pub fn price_display(&self) -> String {
        format!("{} Toman", self.price)
    }
}

impl ActiveModelBehavior for ActiveModel {}

#[cfg(test)]
mod tests {
    use super::*;

    fn show(free_seats: i32) -> Model {
        Model {
            id: 1,
            movie_id: 1,
            cinema_code: 101,
            start_time: 1_750_000_000,
            price: 500_000,
            salable_seats: 50,
            free_seats,
            status: SaleStatus::SaleOpen.as_code(),
        }
    }

    #[test]
    fn full_only_when_no_free_seats() {
        assert!(show(0).is_full());
        assert!(!show(1).is_full());
        assert!(!show(50).is_full());
    }

    #[test]
    fn price_carries_currency_suffix() {
        assert_eq!(show(10).price_display(), "500000 Toman");
    }
}
