use catalog::{CATEGORY_NAMES, category, product};
use migration::{Migrator, MigratorTrait, SchemaManager};
use sea_orm::{
    Database, DatabaseConnection, EntityTrait, PaginatorTrait, QueryOrder, QuerySelect,
};

async fn migrated() -> DatabaseConnection {
    let db = Database::connect("sqlite::memory:").await.unwrap();
    Migrator::up(&db, None).await.unwrap();
    db
}

#[tokio::test]
async fn up_creates_and_seeds_both_tables() {
    let db = migrated().await;

    let names: Vec<String> = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.name)
        .collect();
    assert_eq!(names, CATEGORY_NAMES);
    assert_eq!(product::Entity::find().count(&db).await.unwrap(), 100);
    assert!(Migrator::get_pending_migrations(&db).await.unwrap().is_empty());
}

#[tokio::test]
async fn applies_categories_before_products() {
    let db = migrated().await;

    let applied: Vec<String> = Migrator::get_applied_migrations(&db)
        .await
        .unwrap()
        .iter()
        .map(|migration| migration.name().to_string())
        .collect();
    assert_eq!(
        applied,
        ["m20241027_022619_categories", "m20241027_022714_products"]
    );
}

#[tokio::test]
async fn down_empties_tables_without_dropping_them() {
    let db = migrated().await;

    Migrator::down(&db, None).await.unwrap();

    let manager = SchemaManager::new(&db);
    assert!(manager.has_table("categories").await.unwrap());
    assert!(manager.has_table("products").await.unwrap());
    assert_eq!(category::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(product::Entity::find().count(&db).await.unwrap(), 0);
    assert_eq!(Migrator::get_pending_migrations(&db).await.unwrap().len(), 2);
}

#[tokio::test]
async fn rolling_back_products_keeps_categories() {
    let db = migrated().await;

    Migrator::down(&db, Some(1)).await.unwrap();

    assert_eq!(category::Entity::find().count(&db).await.unwrap(), 5);
    assert_eq!(product::Entity::find().count(&db).await.unwrap(), 0);
}

#[tokio::test]
async fn reapplying_after_down_restarts_ids_at_one() {
    let db = migrated().await;

    Migrator::down(&db, None).await.unwrap();
    Migrator::up(&db, None).await.unwrap();

    let ids: Vec<i32> = category::Entity::find()
        .order_by_asc(category::Column::Id)
        .all(&db)
        .await
        .unwrap()
        .into_iter()
        .map(|model| model.id)
        .collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);

    let first_product: Option<i32> = product::Entity::find()
        .select_only()
        .column(product::Column::Id)
        .order_by_asc(product::Column::Id)
        .into_tuple()
        .one(&db)
        .await
        .unwrap();
    assert_eq!(first_product, Some(1));
}
