//! Country table.
//!
//! Population figures are rounded recent estimates; they only need to rank
//! places consistently for the comparison games, not to be census-exact.

use super::{Place, PlaceKind, Region, Side};

const fn country(
    code: &'static str,
    name: &'static str,
    capital: &'static str,
    region: Region,
    currency: &'static str,
    population: u64,
    area_km2: u32,
    drives_on: Side,
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
        kind: PlaceKind::Country,
        sovereign: None,
    }
}

use Region::{Africa, Asia, Europe, NorthAmerica, Oceania, SouthAmerica};
use Side::{Left, Right};

pub static COUNTRIES: &[Place] = &[
    // ── Europe ──────────────────────────────────────────────────
    country("FR", "France", "Paris", Europe, "Euro", 68_170_000, 551_695, Right),
    country("DE", "Germany", "Berlin", Europe, "Euro", 84_480_000, 357_588, Right),
    country("IT", "Italy", "Rome", Europe, "Euro", 58_870_000, 302_073, Right),
    country("ES", "Spain", "Madrid", Europe, "Euro", 48_370_000, 505_990, Right),
    country("PT", "Portugal", "Lisbon", Europe, "Euro", 10_530_000, 92_212, Right),
    country("GB", "United Kingdom", "London", Europe, "Pound sterling", 68_350_000, 242_495, Left),
    country("IE", "Ireland", "Dublin", Europe, "Euro", 5_260_000, 70_273, Left),
    country("NL", "Netherlands", "Amsterdam", Europe, "Euro", 17_880_000, 41_543, Right),
    country("BE", "Belgium", "Brussels", Europe, "Euro", 11_820_000, 30_528, Right),
    country("CH", "Switzerland", "Bern", Europe, "Swiss franc", 8_850_000, 41_285, Right),
    country("AT", "Austria", "Vienna", Europe, "Euro", 9_130_000, 83_879, Right),
    country("PL", "Poland", "Warsaw", Europe, "Zloty", 36_690_000, 312_696, Right),
    country("CZ", "Czechia", "Prague", Europe, "Czech koruna", 10_870_000, 78_871, Right),
    country("SK", "Slovakia", "Bratislava", Europe, "Euro", 5_430_000, 49_035, Right),
    country("SI", "Slovenia", "Ljubljana", Europe, "Euro", 2_120_000, 20_273, Right),
    country("SE", "Sweden", "Stockholm", Europe, "Swedish krona", 10_550_000, 450_295, Right),
    country("NO", "Norway", "Oslo", Europe, "Norwegian krone", 5_520_000, 385_207, Right),
    country("FI", "Finland", "Helsinki", Europe, "Euro", 5_580_000, 338_455, Right),
    country("DK", "Denmark", "Copenhagen", Europe, "Danish krone", 5_950_000, 42_933, Right),
    country("IS", "Iceland", "Reykjavik", Europe, "Icelandic krona", 390_000, 103_000, Right),
    country("GR", "Greece", "Athens", Europe, "Euro", 10_390_000, 131_957, Right),
    country("HU", "Hungary", "Budapest", Europe, "Forint", 9_590_000, 93_028, Right),
    country("RO", "Romania", "Bucharest", Europe, "Romanian leu", 19_050_000, 238_398, Right),
    country("BG", "Bulgaria", "Sofia", Europe, "Lev", 6_430_000, 110_994, Right),
    country("HR", "Croatia", "Zagreb", Europe, "Euro", 3_850_000, 56_594, Right),
    country("RS", "Serbia", "Belgrade", Europe, "Serbian dinar", 6_620_000, 88_361, Right),
    country("UA", "Ukraine", "Kyiv", Europe, "Hryvnia", 36_740_000, 603_500, Right),
    country("RU", "Russia", "Moscow", Europe, "Russian ruble", 144_440_000, 17_098_246, Right),
    country("EE", "Estonia", "Tallinn", Europe, "Euro", 1_370_000, 45_227, Right),
    country("LV", "Latvia", "Riga", Europe, "Euro", 1_880_000, 64_589, Right),
    country("LT", "Lithuania", "Vilnius", Europe, "Euro", 2_870_000, 65_300, Right),
    country("MT", "Malta", "Valletta", Europe, "Euro", 540_000, 316, Left),
    country("CY", "Cyprus", "Nicosia", Europe, "Euro", 1_260_000, 9_251, Left),
    // ── Asia ────────────────────────────────────────────────────
    country("CN", "China", "Beijing", Asia, "Renminbi", 1_410_710_000, 9_596_961, Right),
    country("JP", "Japan", "Tokyo", Asia, "Yen", 124_520_000, 377_975, Left),
    country("IN", "India", "New Delhi", Asia, "Indian rupee", 1_428_630_000, 3_287_263, Left),
    country("ID", "Indonesia", "Jakarta", Asia, "Rupiah", 277_530_000, 1_904_569, Left),
    country("PK", "Pakistan", "Islamabad", Asia, "Pakistani rupee", 240_490_000, 881_913, Left),
    country("BD", "Bangladesh", "Dhaka", Asia, "Taka", 172_950_000, 147_570, Left),
    country("TH", "Thailand", "Bangkok", Asia, "Baht", 71_800_000, 513_120, Left),
    country("VN", "Vietnam", "Hanoi", Asia, "Dong", 98_860_000, 331_212, Right),
    country("KR", "South Korea", "Seoul", Asia, "South Korean won", 51_710_000, 100_210, Right),
    country("PH", "Philippines", "Manila", Asia, "Philippine peso", 117_330_000, 300_000, Right),
    country("MY", "Malaysia", "Kuala Lumpur", Asia, "Ringgit", 34_310_000, 330_803, Left),
    country("SG", "Singapore", "Singapore", Asia, "Singapore dollar", 5_920_000, 728, Left),
    country("MN", "Mongolia", "Ulaanbaatar", Asia, "Tugrik", 3_450_000, 1_564_116, Right),
    country("KZ", "Kazakhstan", "Astana", Asia, "Tenge", 19_900_000, 2_724_900, Right),
    country("UZ", "Uzbekistan", "Tashkent", Asia, "Uzbek som", 35_160_000, 447_400, Right),
    country("NP", "Nepal", "Kathmandu", Asia, "Nepalese rupee", 30_900_000, 147_181, Left),
    country("LK", "Sri Lanka", "Sri Jayawardenepura Kotte", Asia, "Sri Lankan rupee", 22_040_000, 65_610, Left),
    country("SA", "Saudi Arabia", "Riyadh", Asia, "Saudi riyal", 36_410_000, 2_149_690, Right),
    country("AE", "United Arab Emirates", "Abu Dhabi", Asia, "UAE dirham", 9_440_000, 83_600, Right),
    country("QA", "Qatar", "Doha", Asia, "Qatari riyal", 2_720_000, 11_586, Right),
    country("JO", "Jordan", "Amman", Asia, "Jordanian dinar", 11_280_000, 89_342, Right),
    country("IR", "Iran", "Tehran", Asia, "Iranian rial", 89_170_000, 1_648_195, Right),
    country("IQ", "Iraq", "Baghdad", Asia, "Iraqi dinar", 45_500_000, 438_317, Right),
    country("TR", "Turkey", "Ankara", Asia, "Turkish lira", 85_330_000, 783_562, Right),
    country("GE", "Georgia", "Tbilisi", Asia, "Lari", 3_740_000, 69_700, Right),
    country("AM", "Armenia", "Yerevan", Asia, "Dram", 2_780_000, 29_743, Right),
    country("AZ", "Azerbaijan", "Baku", Asia, "Manat", 10_140_000, 86_600, Right),
    // ── Africa ──────────────────────────────────────────────────
    country("EG", "Egypt", "Cairo", Africa, "Egyptian pound", 112_720_000, 1_002_450, Right),
    country("NG", "Nigeria", "Abuja", Africa, "Naira", 223_800_000, 923_768, Right),
    country("ZA", "South Africa", "Pretoria", Africa, "Rand", 60_410_000, 1_221_037, Left),
    country("KE", "Kenya", "Nairobi", Africa, "Kenyan shilling", 55_100_000, 580_367, Left),
    country("TZ", "Tanzania", "Dodoma", Africa, "Tanzanian shilling", 67_440_000, 945_087, Left),
    country("ET", "Ethiopia", "Addis Ababa", Africa, "Birr", 126_530_000, 1_104_300, Right),
    country("GH", "Ghana", "Accra", Africa, "Cedi", 34_120_000, 238_533, Right),
    country("MA", "Morocco", "Rabat", Africa, "Moroccan dirham", 37_840_000, 446_550, Right),
    country("DZ", "Algeria", "Algiers", Africa, "Algerian dinar", 45_610_000, 2_381_741, Right),
    country("TN", "Tunisia", "Tunis", Africa, "Tunisian dinar", 12_460_000, 163_610, Right),
    country("SN", "Senegal", "Dakar", Africa, "West African CFA franc", 17_760_000, 196_722, Right),
    country("CI", "Ivory Coast", "Yamoussoukro", Africa, "West African CFA franc", 28_870_000, 322_463, Right),
    country("CM", "Cameroon", "Yaounde", Africa, "Central African CFA franc", 28_650_000, 475_442, Right),
    country("UG", "Uganda", "Kampala", Africa, "Ugandan shilling", 48_580_000, 241_550, Left),
    country("ZW", "Zimbabwe", "Harare", Africa, "Zimbabwean dollar", 16_320_000, 390_757, Left),
    country("BW", "Botswana", "Gaborone", Africa, "Pula", 2_630_000, 581_730, Left),
    country("NA", "Namibia", "Windhoek", Africa, "Namibian dollar", 2_600_000, 824_292, Left),
    country("MU", "Mauritius", "Port Louis", Africa, "Mauritian rupee", 1_260_000, 2_040, Left),
    country("MG", "Madagascar", "Antananarivo", Africa, "Ariary", 30_330_000, 587_041, Right),
    country("CD", "DR Congo", "Kinshasa", Africa, "Congolese franc", 102_260_000, 2_344_858, Right),
    // ── North America ───────────────────────────────────────────
    country("US", "United States", "Washington, D.C.", NorthAmerica, "United States dollar", 334_910_000, 9_833_517, Right),
    country("CA", "Canada", "Ottawa", NorthAmerica, "Canadian dollar", 40_100_000, 9_984_670, Right),
    country("MX", "Mexico", "Mexico City", NorthAmerica, "Mexican peso", 128_460_000, 1_964_375, Right),
    country("GT", "Guatemala", "Guatemala City", NorthAmerica, "Quetzal", 17_600_000, 108_889, Right),
    country("CU", "Cuba", "Havana", NorthAmerica, "Cuban peso", 11_190_000, 109_884, Right),
    country("JM", "Jamaica", "Kingston", NorthAmerica, "Jamaican dollar", 2_830_000, 10_991, Left),
    country("PA", "Panama", "Panama City", NorthAmerica, "Balboa", 4_470_000, 75_417, Right),
    country("CR", "Costa Rica", "San Jose", NorthAmerica, "Costa Rican colon", 5_210_000, 51_100, Right),
    country("BS", "Bahamas", "Nassau", NorthAmerica, "Bahamian dollar", 410_000, 13_943, Left),
    // ── South America ───────────────────────────────────────────
    country("BR", "Brazil", "Brasilia", SouthAmerica, "Real", 216_420_000, 8_515_767, Right),
    country("AR", "Argentina", "Buenos Aires", SouthAmerica, "Argentine peso", 46_650_000, 2_780_400, Right),
    country("CL", "Chile", "Santiago", SouthAmerica, "Chilean peso", 19_660_000, 756_102, Right),
    country("PE", "Peru", "Lima", SouthAmerica, "Sol", 34_350_000, 1_285_216, Right),
    country("CO", "Colombia", "Bogota", SouthAmerica, "Colombian peso", 52_090_000, 1_141_748, Right),
    country("VE", "Venezuela", "Caracas", SouthAmerica, "Bolivar", 28_440_000, 916_445, Right),
    country("EC", "Ecuador", "Quito", SouthAmerica, "United States dollar", 18_190_000, 283_561, Right),
    country("BO", "Bolivia", "Sucre", SouthAmerica, "Boliviano", 12_390_000, 1_098_581, Right),
    country("PY", "Paraguay", "Asuncion", SouthAmerica, "Guarani", 6_860_000, 406_752, Right),
    country("UY", "Uruguay", "Montevideo", SouthAmerica, "Uruguayan peso", 3_420_000, 181_034, Right),
    country("GY", "Guyana", "Georgetown", SouthAmerica, "Guyanese dollar", 810_000, 214_969, Left),
    country("SR", "Suriname", "Paramaribo", SouthAmerica, "Surinamese dollar", 620_000, 163_820, Left),
    // ── Oceania ─────────────────────────────────────────────────
    country("AU", "Australia", "Canberra", Oceania, "Australian dollar", 26_640_000, 7_692_024, Left),
    country("NZ", "New Zealand", "Wellington", Oceania, "New Zealand dollar", 5_220_000, 270_467, Left),
    country("FJ", "Fiji", "Suva", Oceania, "Fijian dollar", 930_000, 18_274, Left),
    country("PG", "Papua New Guinea", "Port Moresby", Oceania, "Kina", 10_330_000, 462_840, Left),
    country("WS", "Samoa", "Apia", Oceania, "Tala", 220_000, 2_842, Left),
];
