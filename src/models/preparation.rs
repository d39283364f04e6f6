use sea_orm::entity::prelude::*;

/// A preparation method (baked, grilled, slow-cooked).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "preparations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_preparation::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_preparation::Relation::Preparation.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
