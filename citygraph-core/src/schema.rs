//! Entity schemas and the schema registry.
//!
//! One schema per supported entity type describes how that type maps onto RDF:
//! which class IRIs its instances carry, which predicate holds each property,
//! and how each property's literal is typed. The query and update builders are
//! entirely data-driven from these definitions; there is no per-entity query
//! text anywhere else in the workspace.

use crate::datatype::Datatype;
use crate::error::{Error, Result};
use citygraph_vocab::city;
use std::str::FromStr;

/// Supported entity types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityType {
    /// Persons (Citizen/Tourist/Staff)
    Person,
    /// Transport modes (Bike/Bus/Metro)
    TransportMode,
    /// Parking stations (Car/Bike/EVCharging)
    ParkingStation,
    /// Travel plans (SingleTrip/DailyCommute/Weekly/Seasonal/Tour)
    TravelPlan,
}

impl EntityType {
    /// Stable name used in error messages and logs.
    pub fn name(self) -> &'static str {
        match self {
            EntityType::Person => "Person",
            EntityType::TransportMode => "TransportMode",
            EntityType::ParkingStation => "ParkingStation",
            EntityType::TravelPlan => "TravelPlan",
        }
    }
}

impl FromStr for EntityType {
    type Err = Error;

    /// Parse the external name of an entity type.
    ///
    /// Accepts the REST collection names ("persons", "transport-modes", ...)
    /// as well as the bare type names.
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "person" | "persons" | "Person" => Ok(EntityType::Person),
            "transport-mode" | "transport-modes" | "TransportMode" => {
                Ok(EntityType::TransportMode)
            }
            "parking-station" | "parking-stations" | "ParkingStation" => {
                Ok(EntityType::ParkingStation)
            }
            "travel-plan" | "travel-plans" | "TravelPlan" => Ok(EntityType::TravelPlan),
            other => Err(Error::unknown_entity_type(other)),
        }
    }
}

impl std::fmt::Display for EntityType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mapping of one entity property onto an RDF predicate.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDef {
    /// External field name (JSON key, SPARQL variable name)
    pub name: &'static str,
    /// Predicate IRI
    pub predicate: &'static str,
    /// Declared datatype
    pub datatype: Datatype,
    /// Must be supplied on create
    pub required: bool,
    /// Usable as a text-filter target
    pub filterable: bool,
}

/// RDF mapping for one entity type.
#[derive(Debug, Clone, Copy)]
pub struct EntitySchema {
    /// Entity type this schema describes
    pub entity_type: EntityType,
    /// SPARQL variable name bound to the subject (e.g. "station")
    pub subject_var: &'static str,
    /// Base class accepted on create when no subtype is given
    pub base_class: Option<&'static str>,
    /// Exact subtype class IRIs instances may carry
    pub subtypes: &'static [&'static str],
    /// Property holding the human-readable name (text-filter target)
    pub name_property: Option<&'static str>,
    /// Declared properties, in output order
    pub properties: &'static [PropertyDef],
}

impl EntitySchema {
    /// All class IRIs an instance of this type may carry.
    pub fn classes(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.base_class.into_iter().chain(self.subtypes.iter().copied())
    }

    /// Look up a property definition by field name.
    pub fn property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Resolve the class IRI to assert on create.
    ///
    /// `subtype` may be a full IRI or a bare local name; it must match one of
    /// the schema's classes exactly. With no subtype, the base class is used;
    /// types without a base class (ParkingStation) require a subtype.
    pub fn resolve_class(&self, subtype: Option<&str>) -> Result<&'static str> {
        match subtype {
            None => self.base_class.ok_or_else(|| Error::UnknownSubtype {
                entity: self.entity_type.name(),
                subtype: "(none)".to_string(),
            }),
            Some(s) => self
                .classes()
                .find(|class| *class == s || city::local_name(class) == Some(s))
                .ok_or_else(|| Error::UnknownSubtype {
                    entity: self.entity_type.name(),
                    subtype: s.to_string(),
                }),
        }
    }
}

/// Immutable registry of entity schemas.
///
/// Populated once; `lookup` is the only access path. The schema definitions
/// are process-wide statics, so the registry is a zero-sized handle.
#[derive(Debug, Clone, Copy, Default)]
pub struct SchemaRegistry;

impl SchemaRegistry {
    /// Registry over the smart-city ontology.
    pub fn smart_city() -> Self {
        SchemaRegistry
    }

    /// Look up the schema for an entity type.
    pub fn lookup(&self, entity_type: EntityType) -> &'static EntitySchema {
        match entity_type {
            EntityType::Person => &PERSON_SCHEMA,
            EntityType::TransportMode => &TRANSPORT_MODE_SCHEMA,
            EntityType::ParkingStation => &PARKING_STATION_SCHEMA,
            EntityType::TravelPlan => &TRAVEL_PLAN_SCHEMA,
        }
    }

    /// Parse an external entity type name and look up its schema.
    pub fn lookup_name(&self, name: &str) -> Result<&'static EntitySchema> {
        Ok(self.lookup(name.parse()?))
    }
}

/// Person schema
pub static PERSON_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::Person,
    subject_var: "person",
    base_class: Some(city::PERSON),
    subtypes: &[city::CITIZEN, city::TOURIST, city::STAFF],
    name_property: Some("name"),
    properties: &[
        PropertyDef {
            name: "name",
            predicate: city::HAS_NAME,
            datatype: Datatype::String,
            required: true,
            filterable: true,
        },
        PropertyDef {
            name: "travelPlan",
            predicate: city::HAS_TRAVEL_PLAN,
            datatype: Datatype::Reference,
            required: false,
            filterable: false,
        },
    ],
};

/// Transport mode schema
pub static TRANSPORT_MODE_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::TransportMode,
    subject_var: "mode",
    base_class: None,
    subtypes: &[city::BIKE, city::BUS, city::METRO],
    name_property: Some("name"),
    properties: &[
        PropertyDef {
            name: "name",
            predicate: city::HAS_NAME,
            datatype: Datatype::String,
            required: true,
            filterable: true,
        },
        PropertyDef {
            name: "speed",
            predicate: city::HAS_SPEED,
            datatype: Datatype::Float,
            required: false,
            filterable: false,
        },
    ],
};

/// Parking station schema
pub static PARKING_STATION_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::ParkingStation,
    subject_var: "station",
    base_class: None,
    subtypes: &[
        city::CAR_PARKING_STATION,
        city::BIKE_PARKING_STATION,
        city::EV_CHARGING_STATION,
    ],
    name_property: Some("name"),
    properties: &[
        PropertyDef {
            name: "name",
            predicate: city::HAS_NAME,
            datatype: Datatype::String,
            required: false,
            filterable: true,
        },
        PropertyDef {
            name: "capacity",
            predicate: city::HAS_CAPACITY,
            datatype: Datatype::Integer,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "availableSpaces",
            predicate: city::HAS_AVAILABLE_SPACES,
            datatype: Datatype::Integer,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "pricePerHour",
            predicate: city::HAS_PRICE_PER_HOUR,
            datatype: Datatype::Float,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "address",
            predicate: city::HAS_ADDRESS,
            datatype: Datatype::String,
            required: false,
            filterable: true,
        },
        PropertyDef {
            name: "latitude",
            predicate: city::HAS_LATITUDE,
            datatype: Datatype::Float,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "longitude",
            predicate: city::HAS_LONGITUDE,
            datatype: Datatype::Float,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "operatingHours",
            predicate: city::HAS_OPERATING_HOURS,
            datatype: Datatype::String,
            required: false,
            filterable: false,
        },
    ],
};

/// Travel plan schema
///
/// No name property: travel plans carry no hasName triple, so the text filter
/// is rejected for this type instead of silently matching nothing.
pub static TRAVEL_PLAN_SCHEMA: EntitySchema = EntitySchema {
    entity_type: EntityType::TravelPlan,
    subject_var: "plan",
    base_class: Some(city::TRAVEL_PLAN),
    subtypes: &[
        city::SINGLE_TRIP_PLAN,
        city::DAILY_COMMUTE_PLAN,
        city::WEEKLY_PLAN,
        city::SEASONAL_PLAN,
        city::TOUR_PLAN,
    ],
    name_property: None,
    properties: &[
        PropertyDef {
            name: "startStation",
            predicate: city::HAS_START_STATION,
            datatype: Datatype::Reference,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "endStation",
            predicate: city::HAS_END_STATION,
            datatype: Datatype::Reference,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "transportMode",
            predicate: city::USES_TRANSPORT_MODE,
            datatype: Datatype::Reference,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "startTime",
            predicate: city::HAS_START_TIME,
            datatype: Datatype::Time,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "endTime",
            predicate: city::HAS_END_TIME,
            datatype: Datatype::Time,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "daysOfWeek",
            predicate: city::HAS_DAYS_OF_WEEK,
            datatype: Datatype::String,
            required: false,
            filterable: false,
        },
        PropertyDef {
            name: "isActive",
            predicate: city::IS_ACTIVE,
            datatype: Datatype::Boolean,
            required: false,
            filterable: false,
        },
    ],
};
