//! Fold SPARQL binding rows into entity records.
//!
//! Every non-identity property joins via OPTIONAL, so a subject with
//! single-valued properties produces exactly one row. A multi-valued
//! property (two triples with the same predicate) makes the store emit one
//! row per combination; folding by subject and merging per property turns
//! that cross-product back into one record with a `Many` value instead of
//! duplicate records.

use citygraph_client::results::{BindingRow, SparqlResults};
use citygraph_core::literal;
use citygraph_core::record::EntityRecord;
use citygraph_core::schema::EntitySchema;
use std::collections::HashMap;

/// Map a bindings document to one record per distinct subject, in first-seen
/// order.
pub fn map_records(schema: &EntitySchema, results: &SparqlResults) -> Vec<EntityRecord> {
    let mut records: Vec<EntityRecord> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for row in results.bindings() {
        let Some(subject) = row.get(schema.subject_var).filter(|t| t.is_uri()) else {
            continue;
        };

        let idx = *index.entry(subject.value.clone()).or_insert_with(|| {
            let class_iri = row.get("type").map(|t| t.value.as_str()).unwrap_or("");
            records.push(EntityRecord::new(subject.value.clone(), class_iri));
            records.len() - 1
        });

        fold_row(schema, &mut records[idx], row);
    }

    records
}

fn fold_row(schema: &EntitySchema, record: &mut EntityRecord, row: &BindingRow) {
    for prop in schema.properties {
        let Some(term) = row.get(prop.name) else {
            continue;
        };
        let value = literal::decode(&term.value, prop.datatype);
        match record.properties.get_mut(prop.name) {
            Some(existing) => existing.merge(value),
            None => {
                record.properties.insert(prop.name.to_string(), value);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use citygraph_core::record::PropertyValue;
    use citygraph_core::schema::{PARKING_STATION_SCHEMA, TRAVEL_PLAN_SCHEMA};
    use serde_json::json;

    fn results(value: serde_json::Value) -> SparqlResults {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn one_record_per_subject_with_typed_values() {
        let results = results(json!({
            "head": {"vars": ["station", "type", "name", "capacity", "availableSpaces"]},
            "results": {"bindings": [
                {
                    "station": {"type": "uri", "value": "http://x#CentralGarage"},
                    "type": {"type": "uri", "value": "http://x#CarParkingStation"},
                    "name": {"type": "literal", "value": "Central Garage"},
                    "capacity": {"type": "literal", "value": "200"},
                    "availableSpaces": {"type": "literal", "value": "45"}
                },
                {
                    "station": {"type": "uri", "value": "http://x#EastLot"},
                    "type": {"type": "uri", "value": "http://x#CarParkingStation"}
                }
            ]}
        }));

        let records = map_records(&PARKING_STATION_SCHEMA, &results);
        assert_eq!(records.len(), 2);

        let central = &records[0];
        assert_eq!(central.uri, "http://x#CentralGarage");
        assert_eq!(central.get("capacity"), Some(&PropertyValue::Integer(200)));
        assert_eq!(
            central.get("availableSpaces"),
            Some(&PropertyValue::Integer(45))
        );

        // absent properties stay absent, not defaulted
        let east = &records[1];
        assert!(east.get("capacity").is_none());
        assert!(east.get("name").is_none());
    }

    #[test]
    fn cross_product_rows_merge_into_multi_valued_property() {
        // a plan linked to two transport modes produces two rows
        let results = results(json!({
            "head": {"vars": ["plan", "type", "transportMode", "daysOfWeek"]},
            "results": {"bindings": [
                {
                    "plan": {"type": "uri", "value": "http://x#AlicePlan"},
                    "type": {"type": "uri", "value": "http://x#WeeklyPlan"},
                    "transportMode": {"type": "uri", "value": "http://x#MetroLine1"},
                    "daysOfWeek": {"type": "literal", "value": "Mon-Fri"}
                },
                {
                    "plan": {"type": "uri", "value": "http://x#AlicePlan"},
                    "type": {"type": "uri", "value": "http://x#WeeklyPlan"},
                    "transportMode": {"type": "uri", "value": "http://x#CityBike"},
                    "daysOfWeek": {"type": "literal", "value": "Mon-Fri"}
                }
            ]}
        }));

        let records = map_records(&TRAVEL_PLAN_SCHEMA, &results);
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("transportMode"),
            Some(&PropertyValue::Many(vec![
                PropertyValue::Ref("http://x#MetroLine1".into()),
                PropertyValue::Ref("http://x#CityBike".into()),
            ]))
        );
        // the single-valued property did not get duplicated
        assert_eq!(
            records[0].get("daysOfWeek"),
            Some(&PropertyValue::String("Mon-Fri".into()))
        );
    }

    #[test]
    fn rows_without_subject_binding_are_skipped() {
        let results = results(json!({
            "head": {"vars": ["station", "type"]},
            "results": {"bindings": [
                {"type": {"type": "uri", "value": "http://x#CarParkingStation"}}
            ]}
        }));
        assert!(map_records(&PARKING_STATION_SCHEMA, &results).is_empty());
    }
}
