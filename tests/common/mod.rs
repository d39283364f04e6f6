use std::time::Duration;

use axum::Router;
use axum::body::Body;
use axum::http::{HeaderMap, Request, StatusCode};
use chrono::{DateTime, TimeZone, Utc};
use sea_orm::{ActiveModelTrait, Database, DatabaseConnection, DbErr, Schema, Set};
use sea_orm_migration::prelude::*;
use tower::ServiceExt;
use uuid::Uuid;

use recipe_api::models::{
    classification, cookbook, cookbook_recipe, course, meal, preparation, recipe, recipe_course,
    recipe_meal, recipe_preparation, source,
};
use recipe_api::routes::{self, AppState};

#[allow(dead_code)]
pub async fn setup_test_db() -> Result<DatabaseConnection, DbErr> {
    let db = Database::connect("sqlite::memory:").await?;
    Migrator::up(&db, None).await?;
    Ok(db)
}

#[allow(dead_code)]
pub fn setup_app(db: &DatabaseConnection) -> Router {
    setup_app_with_budget(db, Duration::from_secs(5))
}

#[allow(dead_code)]
pub fn setup_app_with_budget(db: &DatabaseConnection, budget: Duration) -> Router {
    routes::router(AppState {
        db: db.clone(),
        budget,
    })
}

/// GET `uri` against the app, returning status, headers and parsed JSON body.
#[allow(dead_code)]
pub async fn get(app: &Router, uri: &str) -> (StatusCode, HeaderMap, serde_json::Value) {
    let response = app
        .clone()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if body.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&body).unwrap()
    };
    (status, headers, json)
}

/// Fixed reference date so orderings are reproducible: 2024-01-01 plus `n` days.
#[allow(dead_code)]
pub fn day(n: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 12, 0, 0).unwrap() + chrono::Duration::days(n)
}

#[allow(dead_code)]
pub fn recipe_row(name: &str, ingredients: &str, date_added: DateTime<Utc>) -> recipe::ActiveModel {
    recipe::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
        ingredients: Set(ingredients.to_owned()),
        instructions: Set("Combine and cook.".to_owned()),
        notes: Set(None),
        servings: Set(4),
        calories: Set(None),
        fat: Set(None),
        cholesterol: Set(None),
        sodium: Set(None),
        protein: Set(None),
        date_added: Set(date_added),
        marked: Set(false),
        classification_id: Set(None),
        source_id: Set(None),
    }
}

#[allow(dead_code)]
pub async fn insert_recipe(
    db: &DatabaseConnection,
    name: &str,
    ingredients: &str,
    date_added: DateTime<Utc>,
) -> Uuid {
    recipe_row(name, ingredients, date_added)
        .insert(db)
        .await
        .expect("insert recipe")
        .id
}

#[allow(dead_code)]
pub async fn insert_classification(db: &DatabaseConnection, name: &str) -> Uuid {
    classification::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert classification")
    .id
}

#[allow(dead_code)]
pub async fn insert_source(db: &DatabaseConnection, name: &str) -> Uuid {
    source::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert source")
    .id
}

#[allow(dead_code)]
pub async fn insert_meal(db: &DatabaseConnection, name: &str) -> Uuid {
    meal::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert meal")
    .id
}

#[allow(dead_code)]
pub async fn insert_preparation(db: &DatabaseConnection, name: &str) -> Uuid {
    preparation::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert preparation")
    .id
}

#[allow(dead_code)]
pub async fn insert_course(db: &DatabaseConnection, name: &str) -> Uuid {
    course::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert course")
    .id
}

#[allow(dead_code)]
pub async fn insert_cookbook(db: &DatabaseConnection, name: &str) -> Uuid {
    cookbook::ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(name.to_owned()),
    }
    .insert(db)
    .await
    .expect("insert cookbook")
    .id
}

#[allow(dead_code)]
pub async fn link_meal(db: &DatabaseConnection, recipe_id: Uuid, meal_id: Uuid) {
    recipe_meal::ActiveModel {
        id: Set(Uuid::new_v4()),
        recipe_id: Set(recipe_id),
        meal_id: Set(meal_id),
    }
    .insert(db)
    .await
    .expect("link meal");
}

#[allow(dead_code)]
pub async fn link_preparation(db: &DatabaseConnection, recipe_id: Uuid, preparation_id: Uuid) {
    recipe_preparation::ActiveModel {
        id: Set(Uuid::new_v4()),
        recipe_id: Set(recipe_id),
        preparation_id: Set(preparation_id),
    }
    .insert(db)
    .await
    .expect("link preparation");
}

#[allow(dead_code)]
pub async fn link_course(db: &DatabaseConnection, recipe_id: Uuid, course_id: Uuid) {
    recipe_course::ActiveModel {
        id: Set(Uuid::new_v4()),
        recipe_id: Set(recipe_id),
        course_id: Set(course_id),
    }
    .insert(db)
    .await
    .expect("link course");
}

#[allow(dead_code)]
pub async fn add_to_cookbook(db: &DatabaseConnection, cookbook_id: Uuid, recipe_id: Uuid) {
    cookbook_recipe::ActiveModel {
        id: Set(Uuid::new_v4()),
        cookbook_id: Set(cookbook_id),
        recipe_id: Set(recipe_id),
    }
    .insert(db)
    .await
    .expect("add to cookbook");
}

#[allow(dead_code)]
pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(CreateSchema)]
    }
}

pub struct CreateSchema;

impl MigrationName for CreateSchema {
    fn name(&self) -> &'static str {
        "m20240101_000001_create_schema"
    }
}

#[async_trait::async_trait]
impl MigrationTrait for CreateSchema {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let schema = Schema::new(manager.get_database_backend());

        manager
            .create_table(schema.create_table_from_entity(classification::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(source::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(meal::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(preparation::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(course::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(cookbook::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(recipe::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(recipe_meal::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(recipe_preparation::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(recipe_course::Entity))
            .await?;
        manager
            .create_table(schema.create_table_from_entity(cookbook_recipe::Entity))
            .await?;

        // A given (recipe, related-entity) pair appears at most once per join
        // table.
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_meals_pair")
                    .table(recipe_meal::Entity)
                    .col(recipe_meal::Column::RecipeId)
                    .col(recipe_meal::Column::MealId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_preparations_pair")
                    .table(recipe_preparation::Entity)
                    .col(recipe_preparation::Column::RecipeId)
                    .col(recipe_preparation::Column::PreparationId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_recipe_courses_pair")
                    .table(recipe_course::Entity)
                    .col(recipe_course::Column::RecipeId)
                    .col(recipe_course::Column::CourseId)
                    .unique()
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .name("idx_cookbook_recipes_pair")
                    .table(cookbook_recipe::Entity)
                    .col(cookbook_recipe::Column::CookbookId)
                    .col(cookbook_recipe::Column::RecipeId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(cookbook_recipe::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(recipe_course::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(recipe_preparation::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(recipe_meal::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(recipe::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(cookbook::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(course::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(preparation::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(meal::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(source::Entity).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(classification::Entity).to_owned())
            .await?;
        Ok(())
    }
}
