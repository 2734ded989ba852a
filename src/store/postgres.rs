// PostgreSQL-backed reading store.
//
// The sensor network writes into a hosted Postgres instance; the dashboard
// only ever reads. Connections are short-lived: one per refresh, with a
// few retries for transient failures.

use async_trait::async_trait;
use log::{error, warn};
use openssl::ssl::{SslConnector, SslMethod, SslVerifyMode};
use postgres_openssl::MakeTlsConnector;
use tokio::time::{sleep, Duration};
use tokio_postgres::Row;
use url::Url;

use super::{ReadingStore, StoreError};
use crate::core::model::Reading;

const MAX_ATTEMPTS: usize = 3;
const WAIT_BETWEEN_ATTEMPTS_SECS: u64 = 1;

const READINGS_QUERY: &str = "SELECT id, created_at, heart_rate, spo2, body_temp, \
     room_temp, humidity, ecg_value, gsr_value \
     FROM sensor_readings \
     ORDER BY created_at DESC \
     LIMIT $1";

pub struct PostgresStore {
    database_url: String,
}

impl PostgresStore {
    pub fn new(database_url: impl Into<String>) -> Self {
        Self {
            database_url: database_url.into(),
        }
    }

    /// Fetch the `limit` most recent readings, newest first.
    async fn query_window(&self, limit: i64) -> Result<Vec<Reading>, StoreError> {
        let (clean_url, sslrootcert) = split_sslrootcert(&self.database_url)?;
        let connector = create_tls_connector(sslrootcert.as_deref())?;

        let mut last_error = String::new();
        for attempt in 0..MAX_ATTEMPTS {
            if attempt > 0 {
                sleep(Duration::from_secs(WAIT_BETWEEN_ATTEMPTS_SECS)).await;
            }

            let (client, connection) =
                match tokio_postgres::connect(&clean_url, connector.clone()).await {
                    Ok(pair) => pair,
                    Err(e) => {
                        warn!("Attempt {}: connection failed: {}", attempt + 1, e);
                        last_error = e.to_string();
                        continue;
                    }
                };

            tokio::spawn(async move {
                if let Err(e) = connection.await {
                    error!("Store connection error: {}", e);
                }
            });

            match client.query(READINGS_QUERY, &[&limit]).await {
                Ok(rows) => {
                    let mut readings = Vec::with_capacity(rows.len());
                    for row in &rows {
                        readings.push(reading_from_row(row)?);
                    }
                    return Ok(readings);
                }
                Err(e) => {
                    warn!("Attempt {}: query failed: {}", attempt + 1, e);
                    last_error = e.to_string();
                }
            }
        }

        Err(StoreError::Unavailable {
            attempts: MAX_ATTEMPTS,
            last: last_error,
        })
    }
}

#[async_trait]
impl ReadingStore for PostgresStore {
    async fn fetch_latest(&self) -> Result<Option<Reading>, StoreError> {
        Ok(self.query_window(1).await?.into_iter().next())
    }

    async fn fetch_history(&self, limit: usize) -> Result<Vec<Reading>, StoreError> {
        self.query_window(limit as i64).await
    }
}

fn reading_from_row(row: &Row) -> Result<Reading, StoreError> {
    Ok(Reading {
        id: row.try_get("id")?,
        recorded_at: row.try_get("created_at")?,
        heart_rate: row.try_get("heart_rate")?,
        spo2: row.try_get("spo2")?,
        body_temp: row.try_get("body_temp")?,
        room_temp: row.try_get("room_temp")?,
        humidity: row.try_get("humidity")?,
        ecg_value: row.try_get("ecg_value")?,
        gsr_value: row.try_get("gsr_value")?,
    })
}

/// Pull the `sslrootcert` query parameter out of the connection URL.
///
/// tokio-postgres does not understand the parameter; the TLS connector
/// needs the path separately, so it is stripped before connecting.
fn split_sslrootcert(database_url: &str) -> Result<(String, Option<String>), StoreError> {
    let url = Url::parse(database_url).map_err(|e| StoreError::InvalidUrl(e.to_string()))?;

    let mut sslrootcert = None;
    let mut clean_params = Vec::new();
    for (key, value) in url.query_pairs() {
        if key == "sslrootcert" {
            sslrootcert = Some(value.to_string());
        } else {
            clean_params.push((key.into_owned(), value.into_owned()));
        }
    }

    let mut clean_url = url.clone();
    clean_url.set_query(None);
    if !clean_params.is_empty() {
        let query = clean_params
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&");
        clean_url.set_query(Some(&query));
    }

    Ok((clean_url.to_string(), sslrootcert))
}

fn create_tls_connector(sslrootcert: Option<&str>) -> Result<MakeTlsConnector, StoreError> {
    let mut builder =
        SslConnector::builder(SslMethod::tls()).map_err(|e| StoreError::Tls(e.to_string()))?;

    match sslrootcert {
        Some(path) => {
            builder
                .set_ca_file(path)
                .map_err(|e| StoreError::Tls(format!("error loading CA cert: {}", e)))?;
        }
        None => {
            // Hosted stores without a pinned root still negotiate TLS;
            // chain verification needs the sslrootcert parameter.
            builder.set_verify(SslVerifyMode::NONE);
        }
    }

    Ok(MakeTlsConnector::new(builder.build()))
}
