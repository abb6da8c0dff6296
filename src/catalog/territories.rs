//! Dependent territory table.
//!
//! Each entry names the country that administers it; the territories game
//! quizzes both the sovereign and the local capital.

use super::{Place, PlaceKind, Region, Side};

const fn territory(
    code: &'static str,
    name: &'static str,
    capital: &'static str,
    region: Region,
    currency: &'static str,
    population: u64,
    area_km2: u32,
    drives_on: Side,
    sovereign: &'static str,
) -> Place {
    Place {
        code,
        name,
        capital,
        region,
        currency,
        population,
        area_km2,
        drives_on,
        kind: PlaceKind::Territory,
        sovereign: Some(sovereign),
    }
}

use Region::{Africa, Europe, NorthAmerica, Oceania, SouthAmerica};
use Side::{Left, Right};

pub static TERRITORIES: &[Place] = &[
    territory("PR", "Puerto Rico", "San Juan", NorthAmerica, "United States dollar", 3_210_000, 9_104, Right, "United States"),
    territory("GU", "Guam", "Hagatna", Oceania, "United States dollar", 172_000, 540, Right, "United States"),
    territory("AS", "American Samoa", "Pago Pago", Oceania, "United States dollar", 45_000, 199, Right, "United States"),
    territory("GL", "Greenland", "Nuuk", NorthAmerica, "Danish krone", 56_000, 2_166_086, Right, "Denmark"),
    territory("FO", "Faroe Islands", "Torshavn", Europe, "Danish krone", 54_000, 1_393, Right, "Denmark"),
    territory("NC", "New Caledonia", "Noumea", Oceania, "CFP franc", 271_000, 18_575, Right, "France"),
    territory("PF", "French Polynesia", "Papeete", Oceania, "CFP franc", 279_000, 4_167, Right, "France"),
    territory("RE", "Reunion", "Saint-Denis", Africa, "Euro", 870_000, 2_511, Right, "France"),
    territory("GI", "Gibraltar", "Gibraltar", Europe, "Gibraltar pound", 34_000, 7, Right, "United Kingdom"),
    territory("BM", "Bermuda", "Hamilton", NorthAmerica, "Bermudian dollar", 64_000, 54, Left, "United Kingdom"),
    territory("KY", "Cayman Islands", "George Town", NorthAmerica, "Cayman Islands dollar", 69_000, 264, Left, "United Kingdom"),
    territory("FK", "Falkland Islands", "Stanley", SouthAmerica, "Falkland Islands pound", 3_700, 12_173, Left, "United Kingdom"),
    territory("AW", "Aruba", "Oranjestad", NorthAmerica, "Aruban florin", 107_000, 180, Right, "Netherlands"),
    territory("CW", "Curacao", "Willemstad", NorthAmerica, "Netherlands Antillean guilder", 153_000, 444, Right, "Netherlands"),
    territory("CK", "Cook Islands", "Avarua", Oceania, "New Zealand dollar", 15_000, 236, Left, "New Zealand"),
];
