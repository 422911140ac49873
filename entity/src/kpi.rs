use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "kpi")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub description: String,
    /// Relative weight of this indicator when aggregating, in percent.
    pub weight: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::kpi_score::Entity")]
    KpiScore,
}

impl Related<super::kpi_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KpiScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
