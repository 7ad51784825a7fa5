//! One runtime, one temporary database and media directory for the whole
//! test binary. Tests share the data, so each one creates its own rows.

use once_cell::sync::Lazy;
use std::future::Future;
use tempfile::TempDir;
use tokio::runtime::{Builder, Runtime};

static RUNTIME: Lazy<Runtime> = Lazy::new(|| {
    Builder::new_multi_thread()
        .enable_all()
        .build()
        .expect("test runtime")
});

static WORKSPACE: Lazy<TempDir> = Lazy::new(|| {
    let dir = tempfile::tempdir().expect("temp dir");
    RUNTIME.block_on(async {
        super::data::db::initialize_database(&dir.path().join("test.db"))
            .await
            .expect("test database");
        crate::system::initialization::apply_auth_migration()
            .await
            .expect("auth schema");
    });
    super::upload::initialize_media_dir(&dir.path().join("media")).expect("media dir");
    dir
});

/// Runs a test body against the shared database
pub fn run<F: Future>(future: F) -> F::Output {
    Lazy::force(&WORKSPACE);
    RUNTIME.block_on(future)
}
