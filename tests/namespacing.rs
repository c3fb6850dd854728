//! End-to-end tests for the tenantkv unified API.
//!
//! Exercises the registry and the namespaced store together through the
//! `TenantKv` entry point, against the in-memory reference backend.

use std::sync::Arc;

use tenantkv::prelude::*;

fn db_with_tenants() -> (Arc<MemoryBackend>, TenantKv) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let backend = Arc::new(MemoryBackend::new());
    let db = TenantKv::builder()
        .backend(backend.clone())
        .tenant("downloader")
        .tenant("cache")
        .build();
    (backend, db)
}

// ============================================================================
// Registry behavior through the entry point
// ============================================================================

mod registry {
    use super::*;

    #[test]
    fn identifiers_normalize_to_camel_key_and_snake_prefix() {
        let mut db = TenantKv::in_memory();
        let prefix = db.tenants.add("memes galore");
        assert_eq!(prefix, "MEMES_GALORE");

        let listed = db.tenants.list();
        assert_eq!(listed.get("memesGalore").map(String::as_str), Some("MEMES_GALORE"));
    }

    #[test]
    fn lookup_miss_is_none_not_an_error() {
        let db = TenantKv::in_memory();
        assert_eq!(db.tenants.get("never registered"), None);
    }

    #[test]
    fn remove_then_lookup_misses() {
        let (_backend, mut db) = db_with_tenants();
        db.tenants.remove("downloader");
        assert_eq!(db.tenants.get("downloader"), None);
        assert_eq!(db.tenants.get("cache"), Some("CACHE"));
    }
}

// ============================================================================
// Physical layout and value codec
// ============================================================================

mod layout {
    use super::*;

    #[tokio::test]
    async fn json_value_lands_under_prefixed_key_and_reads_back() {
        let (backend, mut db) = db_with_tenants();
        let downloader = db.tenants.add("downloader");

        db.kv
            .set(&downloader, "key1", json!({"some": "json"}))
            .await
            .unwrap();

        // Backend holds DOWNLOADER#key1 with the serialized payload.
        let snapshot = backend.snapshot();
        let raw = snapshot.get("DOWNLOADER#key1").expect("prefixed key present");
        assert_eq!(raw, r#"{"some":"json"}"#);

        let value = db.kv.get(&downloader, "key1").await.unwrap();
        assert_eq!(value, Some(Value::Json(json!({"some": "json"}))));
    }

    #[tokio::test]
    async fn plain_string_round_trips_unchanged() {
        let (_backend, mut db) = db_with_tenants();
        let cache = db.tenants.add("cache");

        db.kv.set(&cache, "motd", "I am a string").await.unwrap();
        let value = db.kv.get(&cache, "motd").await.unwrap();
        assert_eq!(value, Some(Value::Text("I am a string".to_string())));
    }
}

// ============================================================================
// Namespace isolation
// ============================================================================

mod isolation {
    use super::*;

    #[tokio::test]
    async fn writes_under_one_tenant_are_invisible_to_another() {
        let (_backend, mut db) = db_with_tenants();
        let downloader = db.tenants.add("downloader");
        let cache = db.tenants.add("cache");

        db.kv.set(&downloader, "key1", "downloader data").await.unwrap();

        assert_eq!(db.kv.get(&cache, "key1").await.unwrap(), None);
        assert!(db.kv.keys(&cache).await.unwrap().is_empty());
        assert_eq!(db.kv.keys(&downloader).await.unwrap(), vec!["key1"]);
    }

    #[tokio::test]
    async fn clear_removes_one_tenant_and_spares_the_other() {
        let (backend, mut db) = db_with_tenants();
        let downloader = db.tenants.add("downloader");
        let cache = db.tenants.add("cache");

        for key in ["key1", "key2"] {
            db.kv.set(&downloader, key, "x").await.unwrap();
            db.kv.set(&cache, key, "x").await.unwrap();
        }

        db.kv.clear(&downloader).await.unwrap();

        assert!(db.kv.keys(&downloader).await.unwrap().is_empty());
        assert_eq!(db.kv.keys(&cache).await.unwrap(), vec!["key1", "key2"]);
        assert_eq!(backend.len(), 2);
    }
}

// ============================================================================
// Bulk operations
// ============================================================================

mod bulk {
    use super::*;

    #[tokio::test]
    async fn entries_returns_decoded_pairs_for_the_whole_namespace() {
        let (_backend, mut db) = db_with_tenants();
        let cache = db.tenants.add("cache");

        db.kv.set(&cache, "key1", json!({"n": 1})).await.unwrap();
        db.kv.set(&cache, "key2", "two").await.unwrap();

        let entries = db.kv.entries(&cache).await.unwrap();
        assert_eq!(
            entries,
            vec![
                ("key1".to_string(), Value::Json(json!({"n": 1}))),
                ("key2".to_string(), Value::Text("two".to_string())),
            ]
        );
    }

    #[tokio::test]
    async fn mget_on_an_unwritten_tenant_is_empty() {
        let (_backend, mut db) = db_with_tenants();
        let downloader = db.tenants.add("downloader");
        let pairs = db.kv.mget(&downloader, &["key1", "key2"]).await.unwrap();
        assert!(pairs.is_empty());
    }

    #[tokio::test]
    async fn mdelete_removes_exactly_the_given_keys() {
        let (_backend, mut db) = db_with_tenants();
        let downloader = db.tenants.add("downloader");

        for key in ["key1", "key2", "key3"] {
            db.kv.set(&downloader, key, "x").await.unwrap();
        }
        db.kv.mdelete(&downloader, &["key1", "key3"]).await.unwrap();

        assert_eq!(db.kv.keys(&downloader).await.unwrap(), vec!["key2"]);
    }

    #[tokio::test]
    async fn keys_reflects_writes_minus_removals() {
        let (_backend, mut db) = db_with_tenants();
        let cache = db.tenants.add("cache");

        db.kv.set(&cache, "a", "1").await.unwrap();
        db.kv.set(&cache, "b", "2").await.unwrap();
        db.kv.set(&cache, "c", "3").await.unwrap();
        db.kv.delete(&cache, "b").await.unwrap();

        assert_eq!(db.kv.keys(&cache).await.unwrap(), vec!["a", "c"]);
    }
}
