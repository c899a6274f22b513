//! RDF Vocabulary Constants for the CityGraph data-access layer
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs and
//! smart-city ontology terms used throughout the CityGraph crates.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `owl` - OWL vocabulary (http://www.w3.org/2002/07/owl#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `city` - the smart-city ontology (classes and predicates)

/// RDF vocabulary constants
pub mod rdf {
    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// Namespace base for the rdf: prefix
    pub const NAMESPACE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// rdfs:subClassOf IRI
    pub const SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// rdfs:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";

    /// Namespace base for the rdfs: prefix
    pub const NAMESPACE: &str = "http://www.w3.org/2000/01/rdf-schema#";
}

/// OWL vocabulary constants
pub mod owl {
    /// owl:Class IRI
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";

    /// Namespace base for the owl: prefix
    pub const NAMESPACE: &str = "http://www.w3.org/2002/07/owl#";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:time IRI
    pub const TIME: &str = "http://www.w3.org/2001/XMLSchema#time";

    /// Namespace base for the xsd: prefix
    pub const NAMESPACE: &str = "http://www.w3.org/2001/XMLSchema#";
}

/// Smart-city ontology constants
///
/// The ontology lives in a single namespace; entity subject IRIs are formed by
/// appending a local name to [`city::NAMESPACE`].
pub mod city {
    /// Namespace base for the sc: prefix
    pub const NAMESPACE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#";

    /// Prefix label used in generated queries
    pub const PREFIX: &str = "sc";

    /// Expand a local name against the ontology namespace.
    pub fn iri(local: &str) -> String {
        format!("{NAMESPACE}{local}")
    }

    /// Strip the ontology namespace from an IRI, if present.
    pub fn local_name(iri: &str) -> Option<&str> {
        iri.strip_prefix(NAMESPACE)
    }

    // --- Classes ---

    /// sc:Person
    pub const PERSON: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Person";
    /// sc:Citizen
    pub const CITIZEN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Citizen";
    /// sc:Tourist
    pub const TOURIST: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Tourist";
    /// sc:Staff
    pub const STAFF: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Staff";

    /// sc:Bike
    pub const BIKE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Bike";
    /// sc:Bus
    pub const BUS: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Bus";
    /// sc:Metro
    pub const METRO: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#Metro";

    /// sc:CarParkingStation
    pub const CAR_PARKING_STATION: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#CarParkingStation";
    /// sc:BikeParkingStation
    pub const BIKE_PARKING_STATION: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#BikeParkingStation";
    /// sc:EVChargingStation
    pub const EV_CHARGING_STATION: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#EVChargingStation";

    /// sc:TravelPlan
    pub const TRAVEL_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#TravelPlan";
    /// sc:SingleTripPlan
    pub const SINGLE_TRIP_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#SingleTripPlan";
    /// sc:DailyCommutePlan
    pub const DAILY_COMMUTE_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#DailyCommutePlan";
    /// sc:WeeklyPlan
    pub const WEEKLY_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#WeeklyPlan";
    /// sc:SeasonalPlan
    pub const SEASONAL_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#SeasonalPlan";
    /// sc:TourPlan
    pub const TOUR_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#TourPlan";

    // --- Datatype properties ---

    /// sc:hasName
    pub const HAS_NAME: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasName";
    /// sc:hasSpeed
    pub const HAS_SPEED: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasSpeed";
    /// sc:hasCapacity
    pub const HAS_CAPACITY: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasCapacity";
    /// sc:hasAvailableSpaces
    pub const HAS_AVAILABLE_SPACES: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasAvailableSpaces";
    /// sc:hasPricePerHour
    pub const HAS_PRICE_PER_HOUR: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasPricePerHour";
    /// sc:hasAddress
    pub const HAS_ADDRESS: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasAddress";
    /// sc:hasLatitude
    pub const HAS_LATITUDE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasLatitude";
    /// sc:hasLongitude
    pub const HAS_LONGITUDE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasLongitude";
    /// sc:hasOperatingHours
    pub const HAS_OPERATING_HOURS: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasOperatingHours";
    /// sc:hasStartTime
    pub const HAS_START_TIME: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasStartTime";
    /// sc:hasEndTime
    pub const HAS_END_TIME: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasEndTime";
    /// sc:hasDaysOfWeek
    pub const HAS_DAYS_OF_WEEK: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasDaysOfWeek";
    /// sc:isActive
    pub const IS_ACTIVE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#isActive";

    // --- Object properties ---

    /// sc:hasTravelPlan (Person -> TravelPlan)
    pub const HAS_TRAVEL_PLAN: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasTravelPlan";
    /// sc:hasStartStation (TravelPlan -> Station)
    pub const HAS_START_STATION: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasStartStation";
    /// sc:hasEndStation (TravelPlan -> Station)
    pub const HAS_END_STATION: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#hasEndStation";
    /// sc:usesTransportMode (TravelPlan -> TransportMode)
    pub const USES_TRANSPORT_MODE: &str =
        "http://www.semanticweb.org/monpc/ontologies/2025/9/untitled-ontology-4#usesTransportMode";
}
