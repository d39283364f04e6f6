use sea_orm::entity::prelude::*;

/// A named collection of recipes.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "cookbooks")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::cookbook_recipe::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cookbook_recipe::Relation::Cookbook.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
