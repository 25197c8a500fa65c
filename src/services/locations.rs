//! Province and city lookup tables for the customer form
//!
//! Display-only data; locations never influence ranking.

use std::collections::BTreeMap;

pub const DEFAULT_PROVINCE: &str = "Cavite";

/// Provinces of the Philippines, default first
pub const PROVINCES: &[&str] = &[
    "Cavite",
    "Abra", "Agusan del Norte", "Agusan del Sur", "Aklan", "Albay", "Antique", "Apayao", "Aurora",
    "Basilan", "Bataan", "Batanes", "Batangas", "Benguet", "Biliran", "Bohol", "Bukidnon", "Bulacan",
    "Cagayan", "Camarines Norte", "Camarines Sur", "Camiguin", "Capiz", "Catanduanes", "Cebu",
    "Cotabato", "Davao de Oro", "Davao del Norte", "Davao del Sur", "Davao Occidental", "Davao Oriental",
    "Dinagat Islands", "Eastern Samar", "Guimaras", "Ifugao", "Ilocos Norte", "Ilocos Sur", "Iloilo", "Isabela",
    "Kalinga", "La Union", "Laguna", "Lanao del Norte", "Lanao del Sur", "Leyte", "Maguindanao del Norte",
    "Maguindanao del Sur", "Marinduque", "Masbate", "Metro Manila", "Misamis Occidental", "Misamis Oriental",
    "Mountain Province", "Negros Occidental", "Negros Oriental", "Northern Samar", "Nueva Ecija", "Nueva Vizcaya",
    "Occidental Mindoro", "Oriental Mindoro", "Palawan", "Pampanga", "Pangasinan", "Quezon", "Quirino", "Rizal",
    "Romblon", "Samar", "Sarangani", "Siquijor", "Sorsogon", "South Cotabato", "Southern Leyte", "Sultan Kudarat",
    "Sulu", "Surigao del Norte", "Surigao del Sur", "Tarlac", "Tawi-Tawi", "Zambales", "Zamboanga del Norte",
    "Zamboanga del Sur", "Zamboanga Sibugay",
];

// Only a handful of provinces have city lists so far
const CITIES: &[(&str, &[&str])] = &[
    ("Cavite", &[
        "Bacoor", "Cavite City", "Dasmariñas", "General Trias", "Imus", "Tagaytay", "Trece Martires",
        "Alfonso", "Amadeo", "Carmona", "General Mariano Alvarez (GMA)", "Indang", "Kawit",
        "Magallanes", "Maragondon", "Mendez", "Naic", "Noveleta", "Rosario", "Silang", "Tanza",
        "Ternate",
    ]),
    ("Metro Manila", &[
        "Caloocan", "Las Piñas", "Makati", "Malabon", "Mandaluyong", "Manila", "Marikina",
        "Muntinlupa", "Navotas", "Parañaque", "Pasay", "Pasig", "Pateros", "Quezon City",
        "San Juan", "Taguig", "Valenzuela",
    ]),
    ("Laguna", &["Calamba", "Santa Rosa", "Biñan", "San Pedro", "Los Baños", "Cabuyao", "San Pablo", "Sta. Cruz"]),
    ("Batangas", &["Batangas City", "Lipa", "Tanauan", "Santo Tomas", "Nasugbu", "Calatagan"]),
    ("Cebu", &["Cebu City", "Mandaue", "Lapu-Lapu", "Talisay", "Toledo"]),
];

/// Cities of a province; empty when the province has no list
pub fn cities_for(province: &str) -> &'static [&'static str] {
    CITIES
        .iter()
        .find(|(name, _)| *name == province)
        .map(|(_, cities)| *cities)
        .unwrap_or(&[])
}

pub fn cities_by_province() -> BTreeMap<String, Vec<String>> {
    CITIES
        .iter()
        .map(|(province, cities)| {
            (province.to_string(), cities.iter().map(|c| c.to_string()).collect())
        })
        .collect()
}
