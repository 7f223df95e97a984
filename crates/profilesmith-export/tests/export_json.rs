use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};

use profilesmith_core::{
    Channel, Gender, LoyaltyData, MarketingPreferences, PersonalDetails, Profile,
    RetailPreferences, SystemData,
};
use profilesmith_export::{Exporter, canonicalize};

fn sample_profile() -> Profile {
    Profile {
        personal_details: PersonalDetails {
            first_name: "Rosa".to_string(),
            last_name: "Marsh".to_string(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1987, 11, 3).expect("valid date"),
            home_address: "830 Willow Lane".to_string(),
            home_city: "Fairview".to_string(),
            postal_code: "73301".to_string(),
            country: "United States".to_string(),
            iso_country_code: "US".to_string(),
            mobile_phone: "+1-512-555-0163".to_string(),
            email: "rosamarsh@example.com".to_string(),
        },
        retail_preferences: RetailPreferences {
            favourite_color: "Purple".to_string(),
            favourite_category: "Womens".to_string(),
            favourite_sub_category: "Tops".to_string(),
            shirt_size: "L".to_string(),
            pants_size: "M".to_string(),
            shoe_size: 39,
        },
        marketing_preferences: MarketingPreferences {
            consent: false,
            preferred_communication_method: Channel::Email,
        },
        loyalty_data: LoyaltyData {
            loyalty_number_id: 2201987654321,
            date_joined: NaiveDate::from_ymd_opt(2021, 2, 14).expect("valid date"),
            points: 1200,
        },
        system_data: SystemData {
            customer_id: "987654321".to_string(),
            test_profile: true,
        },
    }
}

fn fixed_created_at() -> DateTime<Utc> {
    "2025-06-01T09:30:00Z"
        .parse::<DateTime<Utc>>()
        .expect("valid timestamp")
}

fn temp_out_dir(label: &str) -> PathBuf {
    let mut dir = std::env::temp_dir();
    dir.push(format!("profilesmith_export_{label}_{}", uuid::Uuid::new_v4()));
    dir
}

#[test]
fn canonical_merges_the_four_sub_records() {
    let profile = sample_profile();
    let document = canonicalize(&profile, fixed_created_at());

    assert_eq!(document.identification.customer_id, "987654321");
    assert_eq!(document.identification.loyalty_id, 2201987654321);
    assert_eq!(document.user_account.id, "987654321");
    assert_eq!(document.consents.collect.val, "n");
    assert_eq!(document.consents.marketing.preferred, Channel::Email);
    assert_eq!(document.person.name.full_name, "Rosa Marsh");
    assert_eq!(document.person.birth_day_and_month, "11-03");
    assert_eq!(document.person.birth_year, 1987);
    assert_eq!(document.individual_characteristics.core.age, 37);
    assert_eq!(document.home_address.street1, "830 Willow Lane");
    assert_eq!(document.mobile_phone.number, "+1-512-555-0163");
    assert!(document.test_profile);
}

#[test]
fn consent_maps_to_single_letter() {
    let mut profile = sample_profile();
    profile.marketing_preferences.consent = true;
    let document = canonicalize(&profile, fixed_created_at());
    assert_eq!(document.consents.collect.val, "y");
}

#[test]
fn canonical_json_uses_camel_case_keys() {
    let document = canonicalize(&sample_profile(), fixed_created_at());
    let value = serde_json::to_value(&document).expect("serialize document");
    let object = value.as_object().expect("document object");

    let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(
        keys,
        vec![
            "consents",
            "createDate",
            "homeAddress",
            "identification",
            "individualCharacteristics",
            "loyalty",
            "mobilePhone",
            "person",
            "personalEmail",
            "testProfile",
            "userAccount",
        ]
    );

    assert_eq!(value["userAccount"]["ID"], serde_json::json!("987654321"));
    assert_eq!(value["loyalty"]["loyaltyID"], serde_json::json!(2201987654321_i64));
    assert_eq!(value["person"]["gender"], serde_json::json!("female"));
    assert_eq!(
        value["consents"]["marketing"]["preferred"],
        serde_json::json!("email")
    );
}

#[test]
fn export_writes_timestamped_file() {
    let out_dir = temp_out_dir("writes");
    let exporter = Exporter::new(&out_dir).expect("create exporter");
    let document = canonicalize(&sample_profile(), fixed_created_at());

    let path = exporter.export(&document).expect("export document");

    assert_eq!(
        path.file_name().and_then(|name| name.to_str()),
        Some("profile_987654321_20250601_093000.json")
    );

    let contents = fs::read_to_string(&path).expect("read exported file");
    let parsed: serde_json::Value = serde_json::from_str(&contents).expect("parse exported json");
    assert_eq!(
        parsed["identification"]["customerId"],
        serde_json::json!("987654321")
    );

    fs::remove_dir_all(&out_dir).ok();
}

#[test]
fn exporter_creates_missing_results_dir() {
    let out_dir = temp_out_dir("creates").join("nested").join("results");
    assert!(!out_dir.exists());

    let exporter = Exporter::new(&out_dir).expect("create exporter");
    assert!(exporter.output_dir().is_dir());

    fs::remove_dir_all(out_dir.parent().and_then(|p| p.parent()).expect("root")).ok();
}
