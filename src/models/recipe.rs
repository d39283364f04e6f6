use sea_orm::entity::prelude::*;

/// A single recipe. `classification_id` and `source_id` are optional
/// references; when set they point at existing rows (enforced by foreign
/// keys in the schema).
#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "recipes")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    #[sea_orm(column_type = "Text")]
    pub ingredients: String,
    #[sea_orm(column_type = "Text")]
    pub instructions: String,
    #[sea_orm(column_type = "Text", nullable)]
    pub notes: Option<String>,
    pub servings: i32,
    pub calories: Option<f64>,
    pub fat: Option<f64>,
    pub cholesterol: Option<f64>,
    pub sodium: Option<f64>,
    pub protein: Option<f64>,
    pub date_added: DateTimeUtc,
    pub marked: bool,
    pub classification_id: Option<Uuid>,
    pub source_id: Option<Uuid>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::classification::Entity",
        from = "Column::ClassificationId",
        to = "super::classification::Column::Id"
    )]
    Classification,
    #[sea_orm(
        belongs_to = "super::source::Entity",
        from = "Column::SourceId",
        to = "super::source::Column::Id"
    )]
    Source,
}

impl Related<super::classification::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Classification.def()
    }
}

impl Related<super::source::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Source.def()
    }
}

impl Related<super::meal::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_meal::Relation::Meal.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_meal::Relation::Recipe.def().rev())
    }
}

impl Related<super::preparation::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_preparation::Relation::Preparation.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_preparation::Relation::Recipe.def().rev())
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        super::recipe_course::Relation::Course.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::recipe_course::Relation::Recipe.def().rev())
    }
}

impl Related<super::cookbook::Entity> for Entity {
    fn to() -> RelationDef {
        super::cookbook_recipe::Relation::Cookbook.def()
    }

    fn via() -> Option<RelationDef> {
        Some(super::cookbook_recipe::Relation::Recipe.def().rev())
    }
}

impl ActiveModelBehavior for ActiveModel {}
