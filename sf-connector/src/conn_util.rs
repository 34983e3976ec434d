use std::{str::FromStr, sync::Once, time::Duration};

use sf_common::log_info;
use sqlx::{
    any::{AnyConnectOptions, AnyPoolOptions},
    Any, ConnectOptions, Pool,
};

static INSTALL_DRIVERS: Once = Once::new();

pub struct ConnUtil {}

impl ConnUtil {
    pub async fn create_conn_pool(
        url: &str,
        max_connections: u32,
        enable_sqlx_log: bool,
    ) -> anyhow::Result<Pool<Any>> {
        log_info!("warehouse url: {}", url);
        INSTALL_DRIVERS.call_once(sqlx::any::install_default_drivers);

        let mut conn_options = AnyConnectOptions::from_str(url)?
            .log_statements(log::LevelFilter::Info)
            .log_slow_statements(log::LevelFilter::Info, Duration::from_secs(1));
        if !enable_sqlx_log {
            conn_options = conn_options.disable_statement_logging();
        }

        let conn_pool = AnyPoolOptions::new()
            .max_connections(max_connections)
            .connect_with(conn_options)
            .await?;
        Ok(conn_pool)
    }
}
