//! Prints the JSON schemas of the ranking results, keyed by type name.

use carrier_select::application::services::{CarrierComparison, RankedQuote, Savings};
use carrier_select::domain::entities::ShippingQuote;
use schemars::schema_for;
use serde_json::{Map, Value};

fn main() -> Result<(), serde_json::Error> {
    let mut schemas = Map::new();
    schemas.insert(
        "ShippingQuote".to_string(),
        serde_json::to_value(schema_for!(ShippingQuote))?,
    );
    schemas.insert(
        "RankedQuote".to_string(),
        serde_json::to_value(schema_for!(RankedQuote))?,
    );
    schemas.insert(
        "CarrierComparison".to_string(),
        serde_json::to_value(schema_for!(CarrierComparison))?,
    );
    schemas.insert("Savings".to_string(), serde_json::to_value(schema_for!(Savings))?);

    println!("{}", serde_json::to_string_pretty(&Value::Object(schemas))?);
    Ok(())
}
