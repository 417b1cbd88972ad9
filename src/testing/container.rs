use crate::*;
use sqlx::{PgPool, postgres::PgPoolOptions};
use std::time::Duration;
use testcontainers::{
    ContainerRequest, GenericImage, ImageExt,
    core::{IntoContainerPort as _, WaitFor, logs::LogFrame},
    runners::AsyncRunner as _,
};
use tokio::sync::OnceCell;

pub type Container = testcontainers::ContainerAsync<GenericImage>;

const PG_USER: &str = "postgres";
const PG_PASS: &str = "postgres";

/// Shared Postgres container, started once for the whole test run.
pub async fn postgres() -> &'static Container {
    static POSTGRES: OnceCell<Container> = OnceCell::const_new();
    const TRIES: u8 = 3;
    POSTGRES
        .get_or_init(|| async {
            for attempt in 1..=TRIES {
                match image().start().await {
                    Ok(container) => return container,
                    Err(e) => {
                        error!("Container start attempt {attempt}/{TRIES} failed: {e:?}");
                        if attempt == TRIES {
                            error!("Fatal: all container start attempts failed");
                            std::process::exit(1);
                        }
                    }
                }
            }
            unreachable!()
        })
        .await
}

/// Connection pool against one database of the test container.
pub(super) async fn pool(database: &str) -> PgPool {
    let container = postgres().await;
    let url = format!(
        "postgres://{PG_USER}:{PG_PASS}@{}:{}/{database}",
        container.get_host().await.expect("container host"),
        container
            .get_host_port_ipv4(5432)
            .await
            .expect("container port")
    );
    PgPoolOptions::new()
        .max_connections(3)
        .connect(&url)
        .await
        .expect("db init connection failure")
}

fn image() -> ContainerRequest<GenericImage> {
    let mut image = GenericImage::new("postgres", "17-alpine")
        .with_exposed_port(5432.tcp())
        .with_wait_for(WaitFor::message_on_stderr(
            "database system is ready to accept connections",
        ))
        .with_env_var("POSTGRES_USER", PG_USER)
        .with_env_var("POSTGRES_PASSWORD", PG_PASS)
        .with_env_var("POSTGRES_DB", "postgres");

    if config().container_logs {
        image = image.with_log_consumer(|line: &LogFrame| trace!("[Container Logs] {line:?}"));
    }

    if config().container_ramdisked {
        // Keeps the cluster in shared memory for a noticeably faster run.
        image = image
            .with_env_var("PGDATA", "/dev/shm/pgdata")
            .with_shm_size(512 * 1024 * 1024);
    }

    image.with_startup_timeout(Duration::from_secs(60))
}
