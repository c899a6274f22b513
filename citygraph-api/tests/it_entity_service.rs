//! Entity service tests against a scripted in-memory store.
//!
//! The fake store pops pre-scripted responses and records every statement it
//! receives, so tests can assert both the generated SPARQL and the absence
//! of network calls on validation failures.

use async_trait::async_trait;
use citygraph_api::{ApiError, EntityService, ListFilters};
use citygraph_client::{ClientError, SparqlResults, SparqlStore};
use citygraph_core::record::PropertyValue;
use citygraph_core::schema::EntityType;
use citygraph_core::Error as CoreError;
use citygraph_vocab::city;
use serde_json::{json, Value as JsonValue};
use std::collections::{BTreeMap, VecDeque};
use std::sync::Mutex;

#[derive(Debug, Default)]
struct FakeStore {
    query_responses: Mutex<VecDeque<SparqlResults>>,
    ask_responses: Mutex<VecDeque<bool>>,
    queries: Mutex<Vec<String>>,
    asks: Mutex<Vec<String>>,
    updates: Mutex<Vec<String>>,
}

impl FakeStore {
    fn script_query(&self, body: JsonValue) {
        self.query_responses
            .lock()
            .unwrap()
            .push_back(serde_json::from_value(body).unwrap());
    }

    fn script_ask(&self, answer: bool) {
        self.ask_responses.lock().unwrap().push_back(answer);
    }

    fn recorded_updates(&self) -> Vec<String> {
        self.updates.lock().unwrap().clone()
    }

    fn exchanges(&self) -> usize {
        self.queries.lock().unwrap().len()
            + self.asks.lock().unwrap().len()
            + self.updates.lock().unwrap().len()
    }
}

#[async_trait]
impl SparqlStore for FakeStore {
    async fn query(&self, sparql: &str) -> citygraph_client::Result<SparqlResults> {
        self.queries.lock().unwrap().push(sparql.to_string());
        self.query_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::InvalidResponse("unscripted query".into()))
    }

    async fn ask(&self, sparql: &str) -> citygraph_client::Result<bool> {
        self.asks.lock().unwrap().push(sparql.to_string());
        self.ask_responses
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| ClientError::InvalidResponse("unscripted ask".into()))
    }

    async fn update(&self, sparql: &str) -> citygraph_client::Result<()> {
        self.updates.lock().unwrap().push(sparql.to_string());
        Ok(())
    }
}

fn fields(pairs: &[(&str, JsonValue)]) -> BTreeMap<String, JsonValue> {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

fn central_garage_row() -> JsonValue {
    json!({
        "head": {"vars": ["station", "type", "name", "capacity", "availableSpaces", "pricePerHour"]},
        "results": {"bindings": [
            {
                "station": {"type": "uri", "value": city::iri("CentralGarage")},
                "type": {"type": "uri", "value": city::CAR_PARKING_STATION},
                "capacity": {"type": "literal", "value": "200"},
                "availableSpaces": {"type": "literal", "value": "45"},
                "pricePerHour": {"type": "literal", "value": "2.5"}
            }
        ]}
    })
}

#[tokio::test]
async fn create_then_get_round_trips_supplied_fields() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_ask(false);
    let uri = service
        .create(
            EntityType::ParkingStation,
            "CentralGarage",
            Some("CarParkingStation"),
            &fields(&[
                ("capacity", json!(200)),
                ("availableSpaces", json!(45)),
                ("pricePerHour", json!(2.5)),
            ]),
        )
        .await
        .unwrap();
    assert_eq!(uri, city::iri("CentralGarage"));

    let updates = store.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert!(updates[0].contains("INSERT DATA"));
    assert!(updates[0].contains("a sc:CarParkingStation ."));

    store.script_query(central_garage_row());
    let record = service
        .get(EntityType::ParkingStation, "CentralGarage")
        .await
        .unwrap();
    assert_eq!(record.get("capacity"), Some(&PropertyValue::Integer(200)));
    assert_eq!(record.get("availableSpaces"), Some(&PropertyValue::Integer(45)));
    assert_eq!(record.get("pricePerHour"), Some(&PropertyValue::Float(2.5)));
    // fields never supplied are omitted, not defaulted
    assert!(record.get("name").is_none());
    assert!(record.get("address").is_none());
}

#[tokio::test]
async fn get_merges_multi_valued_property_rows() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    // two usesTransportMode triples yield two bindings rows for one subject
    store.script_query(json!({
        "head": {"vars": ["plan", "type", "transportMode", "isActive"]},
        "results": {"bindings": [
            {
                "plan": {"type": "uri", "value": city::iri("AlicePlan")},
                "type": {"type": "uri", "value": city::DAILY_COMMUTE_PLAN},
                "transportMode": {"type": "uri", "value": city::iri("MetroLine1")},
                "isActive": {"type": "literal", "value": "true"}
            },
            {
                "plan": {"type": "uri", "value": city::iri("AlicePlan")},
                "type": {"type": "uri", "value": city::DAILY_COMMUTE_PLAN},
                "transportMode": {"type": "uri", "value": city::iri("CityBike")},
                "isActive": {"type": "literal", "value": "true"}
            }
        ]}
    }));

    let record = service.get(EntityType::TravelPlan, "AlicePlan").await.unwrap();
    assert_eq!(
        record.get("transportMode"),
        Some(&PropertyValue::Many(vec![
            PropertyValue::Ref(city::iri("MetroLine1")),
            PropertyValue::Ref(city::iri("CityBike")),
        ]))
    );
    // the single-valued property stays scalar across the merged rows
    assert_eq!(record.get("isActive"), Some(&PropertyValue::Boolean(true)));

    // the generated query must not cap the rows the merge needs
    let sent = store.queries.lock().unwrap().clone();
    assert!(!sent[0].to_uppercase().contains("LIMIT"));
}

#[tokio::test]
async fn missing_required_field_performs_no_network_call() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    let err = service
        .create(EntityType::TransportMode, "GhostBus", Some("Bus"), &fields(&[]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ApiError::Core(CoreError::MissingRequiredField {
            entity: "TransportMode",
            field: "name"
        })
    ));
    assert_eq!(store.exchanges(), 0);
}

#[tokio::test]
async fn duplicate_create_is_rejected() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_ask(true);
    let err = service
        .create(
            EntityType::ParkingStation,
            "CentralGarage",
            Some("CarParkingStation"),
            &fields(&[("capacity", json!(200))]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::AlreadyExists(_)));
    assert!(store.recorded_updates().is_empty());
}

#[tokio::test]
async fn list_with_subtype_and_text_filter() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_query(central_garage_row());
    let records = service
        .list(
            EntityType::ParkingStation,
            &ListFilters {
                q: Some("central".into()),
                subtype: Some("CarParkingStation".into()),
            },
        )
        .await
        .unwrap();

    let sent = store.queries.lock().unwrap().clone();
    assert!(sent[0].contains("FILTER(CONTAINS(LCASE(STR(?name)), LCASE(\"central\")))"));
    assert!(sent[0].contains("FILTER(?type = sc:CarParkingStation)"));

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].class_iri, city::CAR_PARKING_STATION);
    assert_eq!(
        records[0].get("availableSpaces"),
        Some(&PropertyValue::Integer(45))
    );
}

#[tokio::test]
async fn partial_update_touches_only_supplied_property() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_ask(true);
    service
        .update(
            EntityType::ParkingStation,
            "CentralGarage",
            &fields(&[("availableSpaces", json!(40))]),
        )
        .await
        .unwrap();

    let updates = store.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert!(updates[0].contains("sc:hasAvailableSpaces"));
    assert!(updates[0].contains("\"40\"^^<http://www.w3.org/2001/XMLSchema#integer>"));
    assert!(!updates[0].contains("hasCapacity"));
    assert!(!updates[0].contains("hasPricePerHour"));
}

#[tokio::test]
async fn update_of_missing_subject_is_not_found() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_ask(false);
    let err = service
        .update(
            EntityType::ParkingStation,
            "NoSuchGarage",
            &fields(&[("availableSpaces", json!(1))]),
        )
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
    assert!(store.recorded_updates().is_empty());
}

#[tokio::test]
async fn delete_removes_subject_then_get_is_not_found() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    store.script_ask(true);
    service
        .delete(EntityType::ParkingStation, "CentralGarage")
        .await
        .unwrap();

    let updates = store.recorded_updates();
    assert_eq!(updates.len(), 1);
    assert!(updates[0].starts_with("DELETE WHERE"));
    assert!(updates[0].contains(&format!("<{}> ?p ?o", city::iri("CentralGarage"))));

    store.script_query(json!({
        "head": {"vars": ["station", "type"]},
        "results": {"bindings": []}
    }));
    let err = service
        .get(EntityType::ParkingStation, "CentralGarage")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound(_)));
}

#[tokio::test]
async fn store_failures_pass_through_with_diagnostics() {
    let service = EntityService::new(FakeStore::default());
    // nothing scripted: the fake returns InvalidResponse, standing in for a
    // store-side failure surfacing unchanged
    let err = service
        .list(EntityType::TransportMode, &ListFilters::none())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Client(_)));
}

#[tokio::test]
async fn invalid_local_name_is_rejected_before_any_exchange() {
    let service = EntityService::new(FakeStore::default());
    let store = service.store();

    let err = service
        .get(EntityType::Person, "Alice Smith")
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Core(CoreError::InvalidLocalName(_))));
    assert_eq!(store.exchanges(), 0);
}
