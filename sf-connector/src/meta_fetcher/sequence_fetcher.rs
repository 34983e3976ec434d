use anyhow::Context;
use futures::TryStreamExt;
use sf_common::{error::Error, log_debug, meta::struct_meta::structure::sequence::Sequence};
use sqlx::{any::AnyRow, Any, Pool, Row};

pub struct SequenceFetcher {
    pub conn_pool: Pool<Any>,
}

impl SequenceFetcher {
    /// Returns sequence records in the order the warehouse reports them.
    /// An empty listing is a normal result, not an error.
    pub async fn list_sequences(&self) -> anyhow::Result<Vec<Sequence>> {
        let sql = "SHOW SEQUENCES";
        let mut results = Vec::new();

        let mut rows = sqlx::query(sql).fetch(&self.conn_pool);
        while let Some(row) = rows
            .try_next()
            .await
            .map_err(Error::SqlxError)
            .with_context(|| format!("failed to execute sql: [{}]", sql))?
        {
            results.push(Self::scan_sequence(&row)?);
        }

        if results.is_empty() {
            log_debug!("no sequences found");
        }
        Ok(results)
    }

    pub fn scan_sequence(row: &AnyRow) -> anyhow::Result<Sequence> {
        Ok(Sequence {
            name: row.try_get("name")?,
            database_name: row.try_get("database_name")?,
            schema_name: row.try_get("schema_name")?,
            next_value: row.try_get("next_value")?,
            interval: row.try_get("interval")?,
            created_on: row.try_get("created_on")?,
            owner: row.try_get("owner")?,
            comment: row.try_get("comment")?,
        })
    }
}
