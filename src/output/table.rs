//! Table rendering for pointing maps

use comfy_table::{presets::NOTHING, Table};

use crate::ambassador::PointingMap;

/// Render a pointing map as a two-column table
pub fn pointings_table(map: &PointingMap) -> Table {
    let mut table = Table::new();
    table
        .load_preset(NOTHING)
        .set_header(vec!["Service", "URL"]);

    for (service, url) in map {
        table.add_row(vec![service, url]);
    }

    table
}

/// Print a pointing map, with a note when it is empty
pub fn print_pointings(map: &PointingMap) {
    if map.is_empty() {
        println!("(no pointings configured)");
        return;
    }
    println!("{}", pointings_table(map));
}
