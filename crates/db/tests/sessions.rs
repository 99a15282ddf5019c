//! Integration tests for refresh-token sessions.

use bodymap_core::roles::ROLE_USER;
use bodymap_db::models::user::{CreateUser, User};
use bodymap_db::repositories::{SessionRepo, UserRepo};
use chrono::{Duration, Utc};
use sqlx::PgPool;

async fn new_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        name: format!("{username} name"),
        email: None,
        password_hash: "not-a-real-hash".to_string(),
        role: ROLE_USER.to_string(),
    };
    UserRepo::create(pool, &input).await.unwrap()
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_consume_is_single_use(pool: PgPool) {
    let user = new_user(&pool, "dora").await;
    let expires_at = Utc::now() + Duration::days(7);
    let started = SessionRepo::start(&pool, user.id, "hash-a", expires_at)
        .await
        .unwrap();
    assert!(!started.is_revoked);

    let spent = SessionRepo::consume(&pool, "hash-a").await.unwrap().unwrap();
    assert_eq!(spent.id, started.id);
    assert_eq!(spent.user_id, user.id);
    assert!(spent.is_revoked);

    assert!(SessionRepo::consume(&pool, "hash-a").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_consume_ignores_expired_and_unknown(pool: PgPool) {
    let user = new_user(&pool, "eli").await;
    SessionRepo::start(&pool, user.id, "stale", Utc::now() - Duration::minutes(1))
        .await
        .unwrap();

    assert!(SessionRepo::consume(&pool, "stale").await.unwrap().is_none());
    assert!(SessionRepo::consume(&pool, "never-issued").await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_revoke_all_only_counts_live_sessions(pool: PgPool) {
    let user = new_user(&pool, "fay").await;
    let expires_at = Utc::now() + Duration::days(7);
    for hash in ["one", "two", "three"] {
        SessionRepo::start(&pool, user.id, hash, expires_at).await.unwrap();
    }
    SessionRepo::consume(&pool, "one").await.unwrap();

    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 2);
    assert!(SessionRepo::consume(&pool, "two").await.unwrap().is_none());
    assert_eq!(SessionRepo::revoke_all_for_user(&pool, user.id).await.unwrap(), 0);
}
