//! Live-database checks. These need a reachable MySQL server with a `dados`
//! table and the `DB_HOST`/`DB_USER`/`DB_PASSWORD`/`DB_NAME` variables set,
//! so they are ignored by default:
//!
//! ```sh
//! cargo test --test mysql -- --ignored
//! ```

use dados_seeder::{Config, RecordInserter};
use sqlx::mysql::MySqlConnection;
use sqlx::Connection;

async fn row_count(conn: &mut MySqlConnection) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM dados")
        .fetch_one(conn)
        .await
        .expect("count query")
}

#[tokio::test]
#[ignore = "needs a running MySQL server configured via DB_* variables"]
async fn run_inserts_exactly_one_row() {
    let config = Config::from_env();
    let mut conn = MySqlConnection::connect_with(&config.connect_options())
        .await
        .expect("test connection");
    let before = row_count(&mut conn).await;

    let record = RecordInserter::new(config)
        .run()
        .await
        .expect("insert run");
    assert!((1..=999).contains(&record.id));
    assert_eq!(record.name, record.city);

    let after = row_count(&mut conn).await;
    assert_eq!(after, before + 1);

    conn.close().await.expect("close test connection");
}

#[tokio::test]
#[ignore = "needs a running MySQL server configured via DB_* variables"]
async fn repeated_runs_never_collide_on_id() {
    let config = Config::from_env();

    // The table declares no uniqueness on AlunoID, so back-to-back runs must
    // all succeed even when the random ids happen to repeat.
    for _ in 0..5 {
        RecordInserter::new(config.clone())
            .run()
            .await
            .expect("insert run");
    }
}

#[tokio::test]
#[ignore = "needs a running MySQL server configured via DB_* variables"]
async fn prepare_fails_when_dados_table_is_absent() {
    // Point the run at a schema that has no `dados` table; the server
    // rejects the statement at prepare time, before any row is bound. The
    // run still finishes its close step and reports the prepare error.
    let config = Config::from_lookup(|name| match name {
        "DB_NAME" => Some("information_schema".to_string()),
        other => std::env::var(other).ok(),
    });

    let err = RecordInserter::new(config)
        .run()
        .await
        .expect_err("prepare should be rejected");
    assert!(matches!(err, dados_seeder::InsertError::Prepare(_)));
    assert!(err.to_string().starts_with("statement prepare failed"));
}

#[tokio::test]
async fn invalid_host_fails_before_any_insert() {
    // `.invalid` is reserved (RFC 2606), so resolution fails deterministically
    // instead of depending on the local resolver's wildcard behavior.
    let config = Config::from_lookup(|name| match name {
        "DB_HOST" => Some("db.invalid".to_string()),
        _ => Some(String::new()),
    });

    let err = RecordInserter::new(config)
        .run()
        .await
        .expect_err("connection should fail");
    assert!(matches!(err, dados_seeder::InsertError::Connection(_)));
}
