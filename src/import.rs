//! Delimited boat record parsing
//!
//! Records are six comma-separated fields with no header row and no quoting:
//!
//! ```text
//! CATEGORY,NAME,YEAR,MAKE_MODEL,LENGTH,PRICE
//! SAILING,Eagle,2015,Catalina 22,22,18000.00
//! ```
//!
//! Bulk reads skip malformed records and keep going; single-record parsing
//! reports the first problem it finds.

use std::io::Read;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{FleetError, FleetResult};
use crate::models::{Boat, BoatCategory, Money};

/// Number of fields in one boat record
pub const FIELD_COUNT: usize = 6;

/// Boats read from a bulk file, plus how many records were rejected
#[derive(Debug, Default)]
pub struct ImportBatch {
    pub boats: Vec<Boat>,
    pub skipped: usize,
}

/// Build a boat from already-split fields
pub fn parse_fields(fields: &[&str]) -> FleetResult<Boat> {
    if fields.len() != FIELD_COUNT {
        return Err(FleetError::Parse(format!(
            "expected {} fields, found {}",
            FIELD_COUNT,
            fields.len()
        )));
    }

    let category: BoatCategory = fields[0].parse()?;
    let name = fields[1].trim();
    let year: i32 = fields[2]
        .trim()
        .parse()
        .map_err(|_| FleetError::Parse(format!("invalid year '{}'", fields[2].trim())))?;
    let make_model = fields[3].trim();
    let length: u32 = fields[4]
        .trim()
        .parse()
        .map_err(|_| FleetError::Parse(format!("invalid length '{}'", fields[4].trim())))?;
    let price = Money::parse(fields[5])
        .map_err(|e| FleetError::Parse(format!("invalid purchase price: {}", e)))?;

    Boat::new(category, name, year, make_model, length, price)
}

/// Parse one record line as typed at the prompt
pub fn parse_line(line: &str) -> FleetResult<Boat> {
    let fields: Vec<&str> = line.trim_end_matches(['\r', '\n']).split(',').collect();
    parse_fields(&fields)
}

fn parse_record(record: &StringRecord) -> FleetResult<Boat> {
    let fields: Vec<&str> = record.iter().collect();
    parse_fields(&fields)
}

/// Read every well-formed record from a bulk source
///
/// Only an I/O failure of the underlying reader aborts the read; anything
/// else wrong with a record just counts it as skipped.
pub fn read_boats<R: Read>(reader: R) -> FleetResult<ImportBatch> {
    let mut csv_reader = ReaderBuilder::new()
        .has_headers(false)
        .quoting(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut batch = ImportBatch::default();

    for result in csv_reader.records() {
        let record = match result {
            Ok(record) => record,
            Err(e) if e.is_io_error() => {
                return Err(FleetError::Import(format!("Failed to read records: {}", e)));
            }
            Err(_) => {
                batch.skipped += 1;
                continue;
            }
        };

        match parse_record(&record) {
            Ok(boat) => batch.boats.push(boat),
            Err(_) => batch.skipped += 1,
        }
    }

    Ok(batch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_line() {
        let boat = parse_line("SAILING,Eagle,2015,Catalina 22,22,18000.00").unwrap();
        assert_eq!(boat.category(), BoatCategory::Sailing);
        assert_eq!(boat.name(), "Eagle");
        assert_eq!(boat.year(), 2015);
        assert_eq!(boat.make_model(), "Catalina 22");
        assert_eq!(boat.length(), 22);
        assert_eq!(boat.purchase_price(), Money::from_dollars_cents(18000, 0));
        assert_eq!(boat.expenses(), Money::zero());
    }

    #[test]
    fn test_parse_line_lowercase_category_and_padding() {
        let boat = parse_line("power, Big Brother ,2019, Mako ,20,12000\r\n").unwrap();
        assert_eq!(boat.category(), BoatCategory::Power);
        assert_eq!(boat.name(), "Big Brother");
        assert_eq!(boat.make_model(), "Mako");
    }

    #[test]
    fn test_parse_line_errors() {
        let too_few = parse_line("SAILING,Eagle,2015").unwrap_err();
        assert!(too_few.to_string().contains("expected 6 fields, found 3"));

        let too_many = parse_line("SAILING,Eagle,2015,Catalina,22,18000,extra").unwrap_err();
        assert!(too_many.is_parse());

        let bad_enum = parse_line("CANOE,Eagle,2015,Catalina,22,18000").unwrap_err();
        assert!(bad_enum.to_string().contains("CANOE"));

        let bad_year = parse_line("SAILING,Eagle,twenty,Catalina,22,18000").unwrap_err();
        assert!(bad_year.to_string().contains("invalid year"));

        let bad_length = parse_line("SAILING,Eagle,2015,Catalina,22.5,18000").unwrap_err();
        assert!(bad_length.to_string().contains("invalid length"));

        let bad_price = parse_line("SAILING,Eagle,2015,Catalina,22,lots").unwrap_err();
        assert!(bad_price.to_string().contains("invalid purchase price"));
    }

    #[test]
    fn test_parse_line_price_is_plain_number() {
        for price in ["$18000", "--18000", "+-18000"] {
            let line = format!("SAILING,Eagle,2015,Catalina 22,22,{}", price);
            let err = parse_line(&line).unwrap_err();
            assert!(err.is_parse(), "{} should be rejected", price);
        }
    }

    #[test]
    fn test_read_boats_skips_malformed_lines_in_order() {
        let data = "\
SAILING,Eagle,2015,Catalina 22,22,18000.00
POWER,Big Brother,2019,Mako,20,12000
not,a,boat
SAILING,Osprey,1999,J/24,24,abc
POWER,Rescue,2010,Boston Whaler,17,9500.50
ROWING,Oars,2000,Shell,30,1000
";
        let batch = read_boats(data.as_bytes()).unwrap();

        let names: Vec<&str> = batch.boats.iter().map(|b| b.name()).collect();
        assert_eq!(names, vec!["Eagle", "Big Brother", "Rescue"]);
        assert_eq!(batch.skipped, 3);
    }

    #[test]
    fn test_read_boats_ignores_quotes() {
        let data = "SAILING,\"Eagle\",2015,Catalina 22,22,18000\n";
        let batch = read_boats(data.as_bytes()).unwrap();
        assert_eq!(batch.boats.len(), 1);
        assert_eq!(batch.boats[0].name(), "\"Eagle\"");
    }

    #[test]
    fn test_read_boats_invalid_utf8_is_skipped() {
        let mut data = b"SAILING,Eagle,2015,Catalina 22,22,18000\n".to_vec();
        data.extend_from_slice(b"POWER,\xff\xfe,2019,Mako,20,12000\n");
        data.extend_from_slice(b"POWER,Rescue,2010,Whaler,17,9500\n");

        let batch = read_boats(data.as_slice()).unwrap();
        assert_eq!(batch.boats.len(), 2);
        assert_eq!(batch.skipped, 1);
    }

    #[test]
    fn test_read_boats_empty_input() {
        let batch = read_boats("".as_bytes()).unwrap();
        assert!(batch.boats.is_empty());
        assert_eq!(batch.skipped, 0);
    }
}
