use scipstore_api::util::from_hex;
use scipstore_api::{Range, ranges_from_flat};
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Tabled)]
struct RangeRow {
    #[tabled(rename = "Start Line")]
    start_line: i32,
    #[tabled(rename = "Start Char")]
    start_character: i32,
    #[tabled(rename = "End Line")]
    end_line: i32,
    #[tabled(rename = "End Char")]
    end_character: i32,
}

impl From<Range> for RangeRow {
    fn from(r: Range) -> Self {
        Self {
            start_line: r.start_line,
            start_character: r.start_character,
            end_line: r.end_line,
            end_character: r.end_character,
        }
    }
}

pub fn run(hex: &str) -> Result<String, Box<dyn std::error::Error>> {
    let bytes = from_hex(hex).ok_or("expected an even number of hex digits")?;
    let ranges = ranges_from_flat(&scipstore_core::decode_ranges(&bytes)?)?;
    if ranges.is_empty() {
        return Ok("No ranges.".to_string());
    }
    let rows: Vec<RangeRow> = ranges.into_iter().map(RangeRow::from).collect();
    Ok(Table::new(rows).with(Style::psql()).to_string())
}
