use sea_orm::entity::prelude::*;

/// A course a recipe belongs to (starter, main, dessert).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_course::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_course::Relation::Course.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
