use pm_core::User;
use pm_db::UserRepository;

use sqlx::SqlitePool;
use uuid::Uuid;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    pm_db::open_in_memory()
        .await
        .expect("Failed to create test pool")
}

/// Inserts a user without credentials and returns its id
pub async fn create_test_user(pool: &SqlitePool, name: &str) -> Uuid {
    let user = User {
        id: Uuid::new_v4(),
        name: Some(name.to_string()),
        email: Some(format!("{}-{}@example.com", name.to_lowercase(), Uuid::new_v4())),
        image: None,
    };

    UserRepository::new(pool.clone())
        .create(&user, None)
        .await
        .expect("Failed to create test user");

    user.id
}
