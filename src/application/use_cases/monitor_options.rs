use crate::application::dto::{MonitorOptions, SelectOption};
use crate::monitoring::domain::{CatalogueEntry, ScopeKind};
use crate::monitoring::policies::MonitorName;
use crate::ports::outbound::CatalogueRepository;
use crate::shared::Result;
use anyhow::Context;
use std::str::FromStr;
use std::sync::Arc;

/// MonitorOptionsUseCase - Builds the filter dropdowns of the monitor page
///
/// The three lists are fetched concurrently. When a monitor type and name are
/// given, the entry of that type whose formatted name equals the sanitised
/// requested name is marked selected.
pub struct MonitorOptionsUseCase<C: CatalogueRepository + ?Sized> {
    catalogue: Arc<C>,
}

impl<C: CatalogueRepository + ?Sized> Clone for MonitorOptionsUseCase<C> {
    fn clone(&self) -> Self {
        Self {
            catalogue: Arc::clone(&self.catalogue),
        }
    }
}

impl<C: CatalogueRepository + ?Sized> MonitorOptionsUseCase<C> {
    pub fn new(catalogue: Arc<C>) -> Self {
        Self { catalogue }
    }

    /// # Errors
    /// Returns a validation error for an unknown monitor type, or the
    /// catalogue error if any list cannot be fetched.
    pub async fn execute(
        &self,
        monitor_type: Option<&str>,
        monitor_name: Option<&str>,
    ) -> Result<MonitorOptions> {
        let requested_kind = monitor_type.map(ScopeKind::from_str).transpose()?;
        let requested_name = MonitorName::sanitize(monitor_name.unwrap_or_default());

        tracing::info!(
            monitor_type = monitor_type.unwrap_or("all"),
            monitor_name = %requested_name,
            "Building monitor options"
        );

        let (service_areas, teams, products) = tokio::try_join!(
            self.catalogue.get_service_areas(),
            self.catalogue.get_teams(),
            self.catalogue.get_product_entries(),
        )
        .inspect_err(|e| tracing::error!(error = %e, "Monitor options fetch failed"))
        .context("Failed to fetch monitor options")?;

        let to_options = |kind: ScopeKind, entries: Vec<CatalogueEntry>| {
            Self::select_options(requested_kind, &requested_name, kind, entries)
        };

        Ok(MonitorOptions {
            service_area_list: to_options(ScopeKind::ServiceArea, service_areas),
            team_list: to_options(ScopeKind::Team, teams),
            product_list: to_options(ScopeKind::Product, products),
        })
    }

    fn select_options(
        requested_kind: Option<ScopeKind>,
        requested_name: &str,
        kind: ScopeKind,
        entries: Vec<CatalogueEntry>,
    ) -> Vec<SelectOption> {
        std::iter::once(SelectOption::blank())
            .chain(entries.into_iter().map(|entry| {
                let selected =
                    MonitorName::is_selected(requested_kind, requested_name, kind, &entry.name);
                SelectOption::new(entry.id, entry.name, selected)
            }))
            .collect()
    }
}
