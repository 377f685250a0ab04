//! Catalog Response Handler
//!
//! Applies finished reference-data loads from the catalog service.

use leasefilter::logic::errors::refresh_failure_message;
use leasefilter::services::CatalogResponse;

use crate::App;

/// Handle a catalog service reply
pub fn handle_catalog_response(app: &mut App, response: CatalogResponse) {
    match response {
        CatalogResponse::Loaded { catalog: Ok(catalog), fetched_at } => {
            tracing::debug!(
                "catalog loaded: {} makes, {} body types, {} fuel types, {} transmissions",
                catalog.makes.len(),
                catalog.body_types.len(),
                catalog.fuel_types.len(),
                catalog.transmissions.len()
            );

            if let Err(e) = app.cache.save_catalog(&catalog, fetched_at) {
                tracing::warn!("Failed to save catalog snapshot: {}", e);
            }

            app.model.catalog.apply_loaded(catalog, fetched_at);

            // Lists may have shrunk under the cursor
            if app.model.ui.overlay_open {
                app.clamp_selection();
            }
        }
        CatalogResponse::Loaded { catalog: Err(e), .. } => {
            tracing::warn!("Catalog refresh failed: {:#}", e);
            let message = refresh_failure_message(&e);
            app.model.catalog.apply_failed(message.clone());
            app.model.show_toast(message);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{sample_catalog, test_app};
    use chrono::Utc;
    use leasefilter::model::{LoadState, View};

    #[test]
    fn test_loaded_catalog_is_applied_and_saved() {
        let (mut app, _requests) = test_app();
        app.model.catalog = leasefilter::model::CatalogModel::new();
        let fetched_at = Utc::now();

        handle_catalog_response(
            &mut app,
            CatalogResponse::Loaded { catalog: Ok(sample_catalog()), fetched_at },
        );

        assert_eq!(app.model.catalog.load_state, LoadState::Ready);
        assert_eq!(app.model.catalog.fetched_at, Some(fetched_at));

        let (saved, saved_at) = app.cache.get_catalog().unwrap().unwrap();
        assert_eq!(saved.makes.len(), 3);
        assert_eq!(saved_at.timestamp(), fetched_at.timestamp());
    }

    #[test]
    fn test_failed_refresh_keeps_catalog_and_toasts() {
        let (mut app, _requests) = test_app();

        handle_catalog_response(
            &mut app,
            CatalogResponse::Loaded {
                catalog: Err(anyhow::anyhow!("connection refused")),
                fetched_at: Utc::now(),
            },
        );

        assert!(matches!(app.model.catalog.load_state, LoadState::Failed(_)));
        assert!(app.model.catalog.has_data());
        let (message, _) = app.model.ui.toast_message.clone().unwrap();
        assert!(message.starts_with("Error:"), "got: {}", message);
    }

    #[test]
    fn test_shrunk_catalog_clamps_cursor() {
        let (mut app, _requests) = test_app();
        app.open_overlay();
        app.navigate_to(View::Makes, None);
        app.model.ui.selection = Some(2);

        let mut smaller = sample_catalog();
        smaller.makes.truncate(1);
        handle_catalog_response(
            &mut app,
            CatalogResponse::Loaded { catalog: Ok(smaller), fetched_at: Utc::now() },
        );

        assert_eq!(app.model.ui.selection, Some(0));
    }
}
