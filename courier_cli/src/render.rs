use comfy_table::{Table, presets::UTF8_FULL};

pub fn new_table<const N: usize>(header: [&str; N]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL).set_header(header);
    table
}

pub fn yes_no(value: bool) -> &'static str {
    if value { "yes" } else { "no" }
}
