use chrono::NaiveDate;
use profilesmith_core::{
    Channel, Gender, LoyaltyData, MarketingPreferences, PersonalDetails, Profile,
    RetailPreferences, SystemData,
};

fn sample_profile() -> Profile {
    Profile {
        personal_details: PersonalDetails {
            first_name: "Ada".to_string(),
            last_name: "Lively".to_string(),
            gender: Gender::Female,
            date_of_birth: NaiveDate::from_ymd_opt(1990, 4, 17).expect("valid date"),
            home_address: "12 Birch Street".to_string(),
            home_city: "Springfield".to_string(),
            postal_code: "62704".to_string(),
            country: "United States".to_string(),
            iso_country_code: "US".to_string(),
            mobile_phone: "+1-202-555-0142".to_string(),
            email: "adalively@example.com".to_string(),
        },
        retail_preferences: RetailPreferences {
            favourite_color: "Green".to_string(),
            favourite_category: "Womens".to_string(),
            favourite_sub_category: "Dresses".to_string(),
            shirt_size: "M".to_string(),
            pants_size: "S".to_string(),
            shoe_size: 38,
        },
        marketing_preferences: MarketingPreferences {
            consent: true,
            preferred_communication_method: Channel::Push,
        },
        loyalty_data: LoyaltyData {
            loyalty_number_id: 2201123456789,
            date_joined: NaiveDate::from_ymd_opt(2019, 8, 2).expect("valid date"),
            points: 48250,
        },
        system_data: SystemData {
            customer_id: "123456789".to_string(),
            test_profile: true,
        },
    }
}

#[test]
fn profile_serializes_with_snake_case_sections() {
    let profile = sample_profile();
    let value = serde_json::to_value(&profile).expect("serialize profile");

    let sections = value.as_object().expect("profile object");
    for key in [
        "personal_details",
        "retail_preferences",
        "marketing_preferences",
        "loyalty_data",
        "system_data",
    ] {
        assert!(sections.contains_key(key), "missing section {key}");
    }

    assert_eq!(
        value["personal_details"]["gender"],
        serde_json::json!("female")
    );
    assert_eq!(
        value["marketing_preferences"]["preferred_communication_method"],
        serde_json::json!("push")
    );
    assert_eq!(
        value["personal_details"]["date_of_birth"],
        serde_json::json!("1990-04-17")
    );
}

#[test]
fn profile_round_trips_through_json() {
    let profile = sample_profile();
    let encoded = serde_json::to_string(&profile).expect("serialize profile");
    let decoded: Profile = serde_json::from_str(&encoded).expect("deserialize profile");
    assert_eq!(decoded, profile);
}

#[test]
fn enum_parse_matches_display() {
    assert_eq!(Gender::parse("male"), Some(Gender::Male));
    assert_eq!(Gender::parse("other"), None);
    assert_eq!(Channel::parse(Channel::Sms.as_str()), Some(Channel::Sms));
    assert_eq!(Gender::Female.to_string(), "female");
}
