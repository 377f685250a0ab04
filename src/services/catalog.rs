//! Reference data service
//!
//! Background task that fetches the catalog on request so the UI loop
//! never waits on the network.

use chrono::{DateTime, Utc};
use tokio::sync::mpsc;

use crate::catalog::{Catalog, CatalogSource};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogRequest {
    /// Fetch all four lists again
    Refresh,
}

#[derive(Debug)]
pub enum CatalogResponse {
    Loaded {
        catalog: anyhow::Result<Catalog>,
        fetched_at: DateTime<Utc>,
    },
}

/// Spawn the catalog worker. Refresh requests queued while a fetch runs
/// are coalesced into one follow-up fetch.
pub fn spawn_catalog_service(
    source: CatalogSource,
) -> (
    mpsc::UnboundedSender<CatalogRequest>,
    mpsc::UnboundedReceiver<CatalogResponse>,
) {
    let (request_tx, mut request_rx) = mpsc::unbounded_channel::<CatalogRequest>();
    let (response_tx, response_rx) = mpsc::unbounded_channel::<CatalogResponse>();

    tokio::spawn(async move {
        while let Some(request) = request_rx.recv().await {
            while request_rx.try_recv().is_ok() {}

            match request {
                CatalogRequest::Refresh => {
                    tracing::debug!("fetching catalog from {}", source.describe());
                    let catalog = source.fetch().await;
                    if let Err(e) = &catalog {
                        tracing::warn!("catalog fetch failed: {:#}", e);
                    }

                    let response = CatalogResponse::Loaded {
                        catalog,
                        fetched_at: Utc::now(),
                    };
                    if response_tx.send(response).is_err() {
                        break; // UI side is gone
                    }
                }
            }
        }
    });

    (request_tx, response_rx)
}
