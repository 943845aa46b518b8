//! Static knowledge base backing the assistant's canned replies.
//!
//! The knowledge base is read-only reference data: site identity, the
//! service catalogue, featured destinations, and priced tour packages.
//! It is loaded once at startup (built-in defaults, optionally overridden
//! from the config file) and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Identity and contact details for the travel site the assistant fronts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteDetails {
    #[serde(default = "default_site_name")]
    pub name: String,

    #[serde(default = "default_tagline")]
    pub tagline: String,

    #[serde(default = "default_support_email")]
    pub support_email: String,

    #[serde(default = "default_support_phone")]
    pub support_phone: String,
}

fn default_site_name() -> String {
    "CarSe-Chalo".to_string()
}

fn default_tagline() -> String {
    "LOSE YOURSELF | DISCOVER YOURSELF".to_string()
}

fn default_support_email() -> String {
    "support@carse-chalo.com".to_string()
}

fn default_support_phone() -> String {
    "+91-XXXXXXX".to_string()
}

impl Default for SiteDetails {
    fn default() -> Self {
        Self {
            name: default_site_name(),
            tagline: default_tagline(),
            support_email: default_support_email(),
            support_phone: default_support_phone(),
        }
    }
}

/// Read-only reference data interpolated into some replies.
///
/// List order matters: replies quote the first few entries of each list,
/// so the most representative items belong at the front.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KnowledgeBase {
    #[serde(default)]
    pub site: SiteDetails,

    #[serde(default = "default_services")]
    pub services: Vec<String>,

    #[serde(default = "default_destinations")]
    pub destinations: Vec<String>,

    #[serde(default = "default_packages")]
    pub packages: Vec<String>,
}

fn default_services() -> Vec<String> {
    [
        "24x7 Pickup Service - Airport, railway station, and bus stand pickup",
        "Car Rental - Affordable rental cars for any journey",
        "Travel Packages - Exciting and affordable travel packages",
        "Airport Transfers",
        "Luxury Cars",
        "Outstation Rides",
        "City Tours",
        "Self Drive",
        "Corporate Travel",
        "Wedding Cars",
        "Hourly Rentals",
        "Event Transport",
        "Bike Rentals",
        "Bus/Van Hire",
        "Custom Packages",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_destinations() -> Vec<String> {
    [
        "Palampur - Tea gardens and scenic hills",
        "Ladakh - High-altitude desert region",
        "Dharamshala - Home to the Dalai Lama",
        "Jaipur - The Pink City",
        "Goa - Famous beaches and Portuguese heritage",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_packages() -> Vec<String> {
    [
        "Highlights Of Palampur - INR 2,600.00",
        "Shakti Peeths & Forts Of Kangra - INR 2,600.00",
        "Bir – Paragliding, Baijnath Temple - INR 4,800.00",
        "Little Lhasa – Dharamshala - INR 2,500.00",
        "Best Of Palampur - INR 1,850.00",
        "Best Of Himachal (Ex Chandigarh) 8 Nights - INR 32,600.00",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self {
            site: SiteDetails::default(),
            services: default_services(),
            destinations: default_destinations(),
            packages: default_packages(),
        }
    }
}
