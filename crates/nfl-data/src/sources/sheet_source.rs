use async_trait::async_trait;
use nfl_core::SourceConfig;
use reqwest::Client;

use super::DataSource;
use crate::{DataError, PlayerTable};

/// Published Google Sheets tab, fetched as CSV over HTTPS
pub struct SheetSource {
    url: String,
    client: Client,
}

impl SheetSource {
    /// Create a source for the configured sheet tab
    pub fn new(config: &SourceConfig) -> Result<Self, DataError> {
        Self::with_url(config.export_url(), config)
    }

    /// Create a source that fetches `url` with the client settings of `config`
    pub fn with_url(url: impl Into<String>, config: &SourceConfig) -> Result<Self, DataError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            url: url.into(),
            client,
        })
    }

    /// URL the table is fetched from
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DataSource for SheetSource {
    async fn load(&self) -> Result<PlayerTable, DataError> {
        tracing::info!("Fetching player table from {}", self.url);

        let body = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        tracing::debug!("Received {} bytes", body.len());

        let table = PlayerTable::from_csv_reader(self.url.clone(), body.as_ref())?;
        tracing::info!(
            "Loaded {} rows with {} columns",
            table.num_rows(),
            table.batch().num_columns()
        );
        Ok(table)
    }

    fn source_name(&self) -> &str {
        &self.url
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    fn local_config() -> SourceConfig {
        SourceConfig {
            timeout: Some(Duration::from_secs(5)),
            ..SourceConfig::default()
        }
    }

    /// Serve a single canned HTTP response on a local port
    async fn serve_once(response: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await;
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });
        format!("http://{}/export.csv", addr)
    }

    #[test]
    fn test_source_uses_export_url() {
        let config = SourceConfig {
            gid: "42".to_string(),
            timeout: Some(Duration::from_secs(5)),
            ..SourceConfig::default()
        };
        let source = SheetSource::new(&config).unwrap();
        assert!(source.url().ends_with("export?format=csv&gid=42"));
        assert_eq!(source.source_name(), source.url());
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_unavailable() {
        // Bind then drop to get a port nothing listens on
        let port = std::net::TcpListener::bind("127.0.0.1:0")
            .unwrap()
            .local_addr()
            .unwrap()
            .port();
        let source = SheetSource::with_url(format!("http://127.0.0.1:{}/export.csv", port), &local_config()).unwrap();

        let err = source.load().await.unwrap_err();
        assert!(matches!(err, DataError::DataUnavailable(_)));
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_error_status_is_unavailable() {
        let url = serve_once("HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\nConnection: close\r\n\r\n").await;
        let source = SheetSource::with_url(url, &local_config()).unwrap();

        let err = source.load().await.unwrap_err();
        match &err {
            DataError::DataUnavailable(msg) => assert!(msg.contains("404")),
            other => panic!("unexpected error: {other:?}"),
        }
        assert!(err.is_fatal());
    }

    #[tokio::test]
    async fn test_loads_table_from_response_body() {
        let url = serve_once(
            "HTTP/1.1 200 OK\r\nContent-Type: text/csv\r\nContent-Length: 33\r\nConnection: close\r\n\r\nplayer_name,season\nA,2020\nB,2021\n",
        )
        .await;
        let source = SheetSource::with_url(url.clone(), &local_config()).unwrap();

        let table = source.load().await.unwrap();
        assert_eq!(table.num_rows(), 2);
        assert_eq!(source.source_name(), url);
    }
}
