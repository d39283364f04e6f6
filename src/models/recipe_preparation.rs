use sea_orm::entity::prelude::*;

/// Join row linking a recipe to a preparation method. The pair is unique.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "recipe_preparations")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub preparation_id: Uuid,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::recipe::Entity",
        from = "Column::RecipeId",
        to = "super::recipe::Column::Id",
        on_delete = "Cascade"
    )]
    Recipe,
    #[sea_orm(
        belongs_to = "super::preparation::Entity",
        from = "Column::PreparationId",
        to = "super::preparation::Column::Id",
        on_delete = "Cascade"
    )]
    Preparation,
}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Recipe.def()
    }
}

impl Related<super::preparation::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Preparation.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
