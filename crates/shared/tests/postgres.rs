//! Gateway tests against a live PostgreSQL. They return early when
//! `DATABASE_URL` is not set.

use anyhow::Result;
use rust_decimal::Decimal;
use shared::{
    abstract_trait::{DynStatusRepository, EntityRepositoryTrait, ScopedRepositoryTrait},
    config::{ConnectionManager, ConnectionPool, run_migrations},
    domain::requests::{
        CategoryRequest, OrderLineRequest, OrderRequest, ProductRequest, UserOrderRequest,
        UserRequest,
    },
    errors::RepositoryError,
    repository::{
        CategoryRepository, OrderLineRepository, OrderRepository, ProductRepository,
        StatusRepository, UserOrderRepository, UserRepository,
    },
    service::seed_order_statuses,
};
use std::{
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

async fn pool() -> Result<Option<ConnectionPool>> {
    let Ok(url) = std::env::var("DATABASE_URL") else {
        eprintln!("DATABASE_URL missing; skipping postgres tests");
        return Ok(None);
    };

    let pool = ConnectionManager::new_pool(&url, 1, 2).await?;
    run_migrations(&pool).await?;
    Ok(Some(pool))
}

fn unique(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos())
        .unwrap_or_default();
    format!("{prefix} {}-{nanos}", std::process::id())
}

fn category() -> CategoryRequest {
    CategoryRequest {
        name: unique("Burgers"),
        description: "Beef burgers".into(),
        path_image: "/img/b.png".into(),
    }
}

fn product(category_id: i32) -> ProductRequest {
    ProductRequest {
        name: unique("Classic Burger"),
        price: Decimal::new(999, 2),
        category_id,
        path_image: "/img/p.png".into(),
        base_description: None,
        full_description: None,
    }
}

fn in_progress_order() -> OrderRequest {
    OrderRequest {
        status_id: 1,
        value: Decimal::new(1550, 2),
    }
}

#[tokio::test]
async fn statuses_are_seeded_once() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let statuses = Arc::new(StatusRepository::new(pool)) as DynStatusRepository;

    seed_order_statuses(&statuses).await?;
    assert_eq!(seed_order_statuses(&statuses).await?, 0);

    let in_progress = statuses.find_by_id(1).await?.map(|s| s.name);
    assert_eq!(in_progress.as_deref(), Some("InProgress"));
    Ok(())
}

#[tokio::test]
async fn product_reads_join_the_category_name() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let burgers = categories.create(&category()).await?;
    let created = products.create(&product(burgers.id)).await?;
    assert_eq!(created.category_name.as_deref(), Some(burgers.name.as_str()));

    let fetched = products.find_by_id(created.id).await?.unwrap();
    assert_eq!(fetched.price, Decimal::new(999, 2));
    assert_eq!(fetched.category_name, created.category_name);

    assert!(products.delete(created.id).await?.is_some());
    assert!(products.find_by_id(created.id).await?.is_none());
    assert!(categories.delete(burgers.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn deleting_an_order_cascades_to_its_lines() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let statuses = Arc::new(StatusRepository::new(pool.clone())) as DynStatusRepository;
    seed_order_statuses(&statuses).await?;

    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());
    let lines = OrderLineRepository::new(pool);

    let burgers = categories.create(&category()).await?;
    let burger = products.create(&product(burgers.id)).await?;
    let order = orders.create(&in_progress_order()).await?;
    assert_eq!(order.status_name.as_deref(), Some("InProgress"));

    lines
        .create(&OrderLineRequest {
            order_id: order.id,
            product_id: burger.id,
        })
        .await?;
    assert_eq!(lines.find_by_parent(order.id).await?.len(), 1);

    assert!(orders.delete(order.id).await?.is_some());
    assert!(lines.find_by_parent(order.id).await?.is_empty());

    products.delete(burger.id).await?;
    categories.delete(burgers.id).await?;
    Ok(())
}

#[tokio::test]
async fn referenced_category_is_restricted() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let burgers = categories.create(&category()).await?;
    let burger = products.create(&product(burgers.id)).await?;

    let restricted = categories.delete(burgers.id).await;
    assert!(matches!(restricted, Err(RepositoryError::ForeignKey(_))));
    assert!(categories.find_by_id(burgers.id).await?.is_some());

    products.delete(burger.id).await?;
    assert!(categories.delete(burgers.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn product_in_an_order_is_restricted() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let statuses = Arc::new(StatusRepository::new(pool.clone())) as DynStatusRepository;
    seed_order_statuses(&statuses).await?;

    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());
    let lines = OrderLineRepository::new(pool);

    let burgers = categories.create(&category()).await?;
    let burger = products.create(&product(burgers.id)).await?;
    let order = orders.create(&in_progress_order()).await?;
    lines
        .create(&OrderLineRequest {
            order_id: order.id,
            product_id: burger.id,
        })
        .await?;

    let restricted = products.delete(burger.id).await;
    assert!(matches!(restricted, Err(RepositoryError::ForeignKey(_))));
    assert!(products.find_by_id(burger.id).await?.is_some());

    orders.delete(order.id).await?;
    products.delete(burger.id).await?;
    categories.delete(burgers.id).await?;
    Ok(())
}

#[tokio::test]
async fn user_with_orders_is_restricted() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let statuses = Arc::new(StatusRepository::new(pool.clone())) as DynStatusRepository;
    seed_order_statuses(&statuses).await?;

    let users = UserRepository::new(pool.clone());
    let orders = OrderRepository::new(pool.clone());
    let links = UserOrderRepository::new(pool);

    let jane = users
        .create(&UserRequest {
            name: unique("Jane Doe"),
            email: "jane@example.com".into(),
            password: "$2b$04$hashed".into(),
        })
        .await?;
    let order = orders.create(&in_progress_order()).await?;
    links
        .create(&UserOrderRequest {
            user_id: jane.id,
            order_id: order.id,
        })
        .await?;
    assert_eq!(links.find_by_parent(jane.id).await?.len(), 1);

    let restricted = users.delete(jane.id).await;
    assert!(matches!(restricted, Err(RepositoryError::ForeignKey(_))));
    assert!(users.find_by_id(jane.id).await?.is_some());

    orders.delete(order.id).await?;
    assert!(links.find_by_parent(jane.id).await?.is_empty());
    assert!(users.delete(jane.id).await?.is_some());
    Ok(())
}

#[tokio::test]
async fn product_names_are_unique() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let burgers = categories.create(&category()).await?;
    let burger = products.create(&product(burgers.id)).await?;

    let duplicate = products
        .create(&ProductRequest {
            name: burger.name.clone(),
            ..product(burgers.id)
        })
        .await;
    assert!(matches!(duplicate, Err(RepositoryError::AlreadyExists(_))));

    products.delete(burger.id).await?;
    categories.delete(burgers.id).await?;
    Ok(())
}

#[tokio::test]
async fn zero_price_violates_the_check() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };
    let categories = CategoryRepository::new(pool.clone());
    let products = ProductRepository::new(pool);

    let burgers = categories.create(&category()).await?;

    let free = products
        .create(&ProductRequest {
            price: Decimal::ZERO,
            ..product(burgers.id)
        })
        .await;
    assert!(matches!(free, Err(RepositoryError::Constraint(_))));

    categories.delete(burgers.id).await?;
    Ok(())
}

#[tokio::test]
async fn products_require_a_category() -> Result<()> {
    let Some(pool) = pool().await? else {
        return Ok(());
    };

    let orphan =
        sqlx::query("INSERT INTO products (name, price, category_id) VALUES ($1, $2, NULL)")
            .bind(unique("Orphan Burger"))
            .bind(Decimal::new(500, 2))
            .execute(&pool)
            .await
            .map_err(RepositoryError::from);
    assert!(matches!(orphan, Err(RepositoryError::Constraint(_))));
    Ok(())
}
