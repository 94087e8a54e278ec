use super::*;
use crate::application::dto::{ComponentQueueRequest, HealthStatus, StreamsRequest};
use crate::monitoring::domain::{
    CatalogueEntry, Component, Environment, MonitorScope, Product, ScopeId, ServiceArea,
    StreamMessage, StreamMessages, StreamQuery, Team, FROM_BEGINNING,
};
use crate::ports::outbound::{CatalogueRepository, HealthCheck, StreamStore, UpstreamHealthRecorder};
use crate::shared::error::MonitorError;
use crate::shared::Result;
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

// Mock implementations for testing
#[derive(Default)]
struct MockCatalogue {
    products: Vec<Product>,
    teams: Vec<Team>,
    service_areas: Vec<ServiceArea>,
    fail: bool,
    calls: Mutex<Vec<String>>,
}

impl MockCatalogue {
    fn record(&self, call: impl Into<String>) -> Result<()> {
        self.calls.lock().unwrap().push(call.into());
        if self.fail {
            return Err(MonitorError::catalogue("mock", "status 503").into());
        }
        Ok(())
    }

    fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CatalogueRepository for MockCatalogue {
    async fn get_products(&self, _ids: Option<&[u64]>, expand: bool) -> Result<Vec<Product>> {
        self.record(format!("get_products(expand={})", expand))?;
        Ok(self.products.clone())
    }

    async fn get_product(&self, id: ScopeId, expand: bool) -> Result<Product> {
        self.record(format!("get_product({}, expand={})", id, expand))?;
        self.products
            .iter()
            .find(|p| p.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found("product").into())
    }

    async fn get_team(&self, id: ScopeId, expand: bool) -> Result<Team> {
        self.record(format!("get_team({}, expand={})", id, expand))?;
        self.teams
            .iter()
            .find(|t| t.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found("team").into())
    }

    async fn get_service_area(&self, id: ScopeId, expand: bool) -> Result<ServiceArea> {
        self.record(format!("get_service_area({}, expand={})", id, expand))?;
        self.service_areas
            .iter()
            .find(|s| s.id == id.get())
            .cloned()
            .ok_or_else(|| MonitorError::not_found("service area").into())
    }

    async fn get_components(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_components")?;
        Ok(self
            .products
            .iter()
            .flat_map(|p| &p.components)
            .map(|c| CatalogueEntry::new(c.id, c.name.clone()))
            .collect())
    }

    async fn get_teams(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_teams")?;
        Ok(self
            .teams
            .iter()
            .map(|t| CatalogueEntry::new(t.id, t.name.clone()))
            .collect())
    }

    async fn get_service_areas(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_service_areas")?;
        Ok(self
            .service_areas
            .iter()
            .map(|s| CatalogueEntry::new(s.id, s.name.clone()))
            .collect())
    }

    async fn get_product_sets(&self) -> Result<Vec<CatalogueEntry>> {
        self.record("get_product_sets")?;
        Ok(vec![CatalogueEntry::new(1, "Prisons")])
    }
}

#[derive(Default)]
struct MockStreamStore {
    reads: Mutex<Vec<Vec<StreamQuery>>>,
}

#[async_trait]
impl StreamStore for MockStreamStore {
    async fn read_streams(&self, queries: &[StreamQuery]) -> Result<StreamMessages> {
        self.reads.lock().unwrap().push(queries.to_vec());
        Ok(queries
            .iter()
            .map(|q| {
                let message = StreamMessage {
                    id: "1-0".to_string(),
                    message: BTreeMap::from([("from".to_string(), q.resume_from_id.clone())]),
                };
                (q.stream_key.clone(), vec![message])
            })
            .collect())
    }
}

fn environment(id: u64, name: &str) -> Environment {
    Environment {
        id,
        name: name.to_string(),
        url: format!("https://{}.example.com", name),
        health_path: "/health".to_string(),
    }
}

fn component(id: u64, name: &str, environments: Vec<Environment>) -> Component {
    Component {
        id,
        name: name.to_string(),
        environments,
    }
}

fn product(id: u64, name: &str, components: Vec<Component>) -> Product {
    Product {
        id,
        name: name.to_string(),
        components,
    }
}

fn catalogue() -> MockCatalogue {
    let product_7 = product(
        7,
        "Product Seven",
        vec![
            component(70, "seven-api", vec![environment(700, "prod")]),
            component(71, "seven-worker", vec![]),
        ],
    );
    let product_8 = product(
        8,
        "Product Eight",
        vec![component(
            80,
            "eight-ui",
            vec![environment(800, "dev"), environment(801, "prod")],
        )],
    );

    MockCatalogue {
        products: vec![product_7.clone(), product_8.clone()],
        teams: vec![Team {
            id: 42,
            name: "Team Forty Two".to_string(),
            products: vec![product_8.clone()],
        }],
        service_areas: vec![ServiceArea {
            id: 3,
            name: "Service Area Three".to_string(),
            products: vec![product_7, product_8],
        }],
        ..Default::default()
    }
}

fn id(value: u64) -> ScopeId {
    ScopeId::new(value).unwrap()
}

// ========== ResolveScopeUseCase ==========

#[tokio::test]
async fn test_resolve_all_uses_single_expanded_fetch() {
    let catalogue = Arc::new(catalogue());
    let use_case = ResolveScopeUseCase::new(catalogue.clone());

    let records = use_case.execute(&MonitorScope::All).await.unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(catalogue.calls(), vec!["get_products(expand=true)"]);
}

#[tokio::test]
async fn test_resolve_product_with_empty_component() {
    let catalogue = Arc::new(catalogue());
    let use_case = ResolveScopeUseCase::new(catalogue.clone());

    let records = use_case
        .execute(&MonitorScope::Product(id(7)))
        .await
        .unwrap();

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].component_name, "seven-api");
    assert_eq!(records[0].environment_name, "prod");
    assert_eq!(catalogue.calls(), vec!["get_product(7, expand=true)"]);
}

#[tokio::test]
async fn test_resolve_team_only_returns_owned_environments() {
    let use_case = ResolveScopeUseCase::new(Arc::new(catalogue()));

    let records = use_case.execute(&MonitorScope::Team(id(42))).await.unwrap();

    assert_eq!(records.len(), 2);
    assert!(records.iter().all(|r| r.component_name == "eight-ui"));
}

#[tokio::test]
async fn test_resolve_service_area_spans_products() {
    let use_case = ResolveScopeUseCase::new(Arc::new(catalogue()));

    let records = use_case
        .execute(&MonitorScope::ServiceArea(id(3)))
        .await
        .unwrap();

    let ids: Vec<u64> = records.iter().map(|r| r.environment_id).collect();
    assert_eq!(ids, vec![700, 800, 801]);
}

#[tokio::test]
async fn test_resolve_propagates_catalogue_failure() {
    let catalogue = MockCatalogue {
        fail: true,
        ..catalogue()
    };
    let use_case = ResolveScopeUseCase::new(Arc::new(catalogue));

    let error = use_case
        .execute(&MonitorScope::Team(id(42)))
        .await
        .unwrap_err();

    assert!(error.to_string().contains("Failed to fetch team 42"));
    let cause = error
        .chain()
        .find_map(|e| e.downcast_ref::<MonitorError>())
        .unwrap();
    assert!(cause.is_upstream_error());
}

// ========== ReadQueueUseCase ==========

#[tokio::test]
async fn test_component_queue_is_one_batched_read_of_three_streams() {
    let store = Arc::new(MockStreamStore::default());
    let use_case = ReadQueueUseCase::new(store.clone(), DEFAULT_MAX_STREAMS);

    let request = ComponentQueueRequest::parse("hmpps-auth", "prod", "h:prod=5-0").unwrap();
    let messages = use_case.read_component_queue(request).await.unwrap();

    let reads = store.reads.lock().unwrap().clone();
    assert_eq!(reads.len(), 1);
    assert_eq!(reads[0].len(), 3);
    assert_eq!(messages["health:hmpps-auth:prod"][0].message["from"], "5-0");
    assert_eq!(
        messages["version:hmpps-auth:prod"][0].message["from"],
        FROM_BEGINNING
    );
}

#[tokio::test]
async fn test_read_streams_validates_keys_and_cursors() {
    let store = Arc::new(MockStreamStore::default());
    let use_case = ReadQueueUseCase::new(store.clone(), DEFAULT_MAX_STREAMS);

    for (key, cursor) in [
        ("health:auth", "0"),
        ("metrics:auth:prod", "0"),
        ("health:auth:prod", "latest"),
    ] {
        let request = StreamsRequest::new(BTreeMap::from([(key.to_string(), cursor.to_string())]));
        let error = use_case.read_streams(request).await.unwrap_err();
        assert!(
            error
                .chain()
                .find_map(|e| e.downcast_ref::<MonitorError>())
                .map(MonitorError::is_client_error)
                .unwrap_or(false),
            "{}={} should be rejected",
            key,
            cursor
        );
    }

    assert!(store.reads.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_read_streams_enforces_bounds() {
    let use_case = ReadQueueUseCase::new(Arc::new(MockStreamStore::default()), 2);

    assert!(use_case
        .read_streams(StreamsRequest::default())
        .await
        .is_err());

    let streams: BTreeMap<String, String> = ["a", "b", "c"]
        .iter()
        .map(|c| (format!("health:{}:prod", c), "0".to_string()))
        .collect();
    let error = use_case
        .read_streams(StreamsRequest::new(streams))
        .await
        .unwrap_err();
    assert!(error.to_string().contains("Too many streams"));
}

#[tokio::test]
async fn test_read_streams_passes_cursors_through() {
    let store = Arc::new(MockStreamStore::default());
    let use_case = ReadQueueUseCase::new(store.clone(), DEFAULT_MAX_STREAMS);

    let request = StreamsRequest::new(BTreeMap::from([
        ("health:auth:prod".to_string(), "$".to_string()),
        ("info:auth:dev".to_string(), "17-3".to_string()),
    ]));
    let messages = use_case.read_streams(request).await.unwrap();

    assert_eq!(messages.len(), 2);
    assert_eq!(messages["info:auth:dev"][0].message["from"], "17-3");
}

// ========== ListCatalogueUseCase ==========

#[tokio::test]
async fn test_list_catalogue_dispatches_per_collection() {
    use crate::monitoring::domain::CatalogueCollection;

    let catalogue = Arc::new(catalogue());
    let use_case = ListCatalogueUseCase::new(catalogue.clone());

    let teams = use_case.execute(CatalogueCollection::Teams).await.unwrap();
    assert_eq!(teams, vec![CatalogueEntry::new(42, "Team Forty Two")]);

    let products = use_case
        .execute(CatalogueCollection::Products)
        .await
        .unwrap();
    assert_eq!(products.len(), 2);

    assert_eq!(
        catalogue.calls(),
        vec!["get_teams", "get_products(expand=false)"]
    );
}

// ========== MonitorOptionsUseCase ==========

#[tokio::test]
async fn test_monitor_options_without_selection() {
    let use_case = MonitorOptionsUseCase::new(Arc::new(catalogue()));

    let options = use_case.execute(None, None).await.unwrap();

    assert_eq!(options.team_list.len(), 2);
    assert_eq!(options.team_list[0], crate::application::dto::SelectOption::blank());
    assert!(options
        .product_list
        .iter()
        .chain(&options.team_list)
        .chain(&options.service_area_list)
        .all(|o| !o.selected));
}

#[tokio::test]
async fn test_monitor_options_selects_matching_entry() {
    let use_case = MonitorOptionsUseCase::new(Arc::new(catalogue()));

    let options = use_case
        .execute(Some("product"), Some("product-eight"))
        .await
        .unwrap();

    let selected: Vec<u64> = options
        .product_list
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.value)
        .collect();
    assert_eq!(selected, vec![8]);
    assert!(options.team_list.iter().all(|o| !o.selected));
}

#[tokio::test]
async fn test_monitor_options_rejects_unknown_type() {
    let use_case = MonitorOptionsUseCase::new(Arc::new(catalogue()));
    assert!(use_case.execute(Some("bogus"), Some("x")).await.is_err());
}

// ========== CheckHealthUseCase ==========

struct StaticCheck {
    name: &'static str,
    healthy: bool,
}

#[async_trait]
impl HealthCheck for StaticCheck {
    fn name(&self) -> &str {
        self.name
    }

    async fn check(&self) -> Result<String> {
        if self.healthy {
            Ok("OK".to_string())
        } else {
            anyhow::bail!("connection refused")
        }
    }
}

#[derive(Default)]
struct RecordingRecorder {
    values: Mutex<Vec<(String, bool)>>,
}

impl UpstreamHealthRecorder for RecordingRecorder {
    fn record(&self, service: &str, healthy: bool) {
        self.values
            .lock()
            .unwrap()
            .push((service.to_string(), healthy));
    }
}

#[tokio::test]
async fn test_health_is_up_when_every_check_passes() {
    let recorder = Arc::new(RecordingRecorder::default());
    let use_case = CheckHealthUseCase::new(
        vec![Arc::new(StaticCheck {
            name: "serviceCatalogue",
            healthy: true,
        }) as Arc<dyn HealthCheck>],
        recorder.clone(),
    );

    let report = use_case.execute().await;

    assert_eq!(report.status, HealthStatus::Up);
    assert_eq!(report.components["serviceCatalogue"].status, "OK");
    assert_eq!(
        recorder.values.lock().unwrap().clone(),
        vec![("serviceCatalogue".to_string(), true)]
    );
}

#[tokio::test]
async fn test_health_is_down_when_any_check_fails() {
    let recorder = Arc::new(RecordingRecorder::default());
    let use_case = CheckHealthUseCase::new(
        vec![
            Arc::new(StaticCheck {
                name: "serviceCatalogue",
                healthy: true,
            }) as Arc<dyn HealthCheck>,
            Arc::new(StaticCheck {
                name: "streamStore",
                healthy: false,
            }) as Arc<dyn HealthCheck>,
        ],
        recorder.clone(),
    );

    let report = use_case.execute().await;

    assert_eq!(report.status, HealthStatus::Down);
    assert_eq!(report.components["streamStore"].status, "connection refused");
    let mut values = recorder.values.lock().unwrap().clone();
    values.sort();
    assert_eq!(
        values,
        vec![
            ("serviceCatalogue".to_string(), true),
            ("streamStore".to_string(), false)
        ]
    );
}
