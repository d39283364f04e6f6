use sea_orm::entity::prelude::*;

/// A meal a recipe suits (breakfast, lunch, dinner).
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "meals")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl Related<super::recipe::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_meal::Relation::Recipe.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_meal::Relation::Meal.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
