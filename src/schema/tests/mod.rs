//! Test helpers shared across schema test modules

use super::{Schema, SchemaBuilder, TypeRegistry};

// Test modules
mod builder_tests;

/// The schema of the UK monthly historic station files, used as a
/// realistic fixture throughout
pub fn station_schema() -> Schema {
    let registry = TypeRegistry::with_builtins();
    SchemaBuilder::new()
        .fields_from_lists(
            "yyyy, mm, tmax, tmin, af, rain, sun",
            "date, integer, float, float, integer, float, float",
        )
        .units_from_list("degC, degC, days, mm, hours")
        .markers("*#")
        .heading_row(0)
        .data_row(1)
        .build(&registry)
        .unwrap()
}
