use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "employee")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub full_name: String,
    pub position: String,
    pub department: String,
    #[sea_orm(unique)]
    pub email: String,
    pub phone: Option<String>,
    pub hired_on: Date,
    pub active: bool,
    pub created_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::document::Entity")]
    Document,
    #[sea_orm(has_many = "super::salary::Entity")]
    Salary,
    #[sea_orm(has_many = "super::access_log::Entity")]
    AccessLog,
    #[sea_orm(has_many = "super::vacation_balance::Entity")]
    VacationBalance,
    #[sea_orm(has_many = "super::vacation_request::Entity")]
    VacationRequest,
    #[sea_orm(has_many = "super::kpi_score::Entity")]
    KpiScore,
}

impl Related<super::document::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Document.def()
    }
}

impl Related<super::salary::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Salary.def()
    }
}

impl Related<super::access_log::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::AccessLog.def()
    }
}

impl Related<super::vacation_balance::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationBalance.def()
    }
}

impl Related<super::vacation_request::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::VacationRequest.def()
    }
}

impl Related<super::kpi_score::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::KpiScore.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
