//! Canonical customer document.
//!
//! Downstream consumers expect one camelCase JSON object per customer that
//! merges the four persisted sub-records, so the field names here are part
//! of the output contract.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use profilesmith_core::{Channel, Gender, Profile};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CanonicalProfile {
    pub create_date: DateTime<Utc>,
    pub identification: Identification,
    pub individual_characteristics: IndividualCharacteristics,
    pub user_account: UserAccount,
    pub loyalty: Loyalty,
    pub consents: Consents,
    pub home_address: HomeAddress,
    pub mobile_phone: MobilePhone,
    pub person: Person,
    pub personal_email: PersonalEmail,
    pub test_profile: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identification {
    pub customer_id: String,
    pub email: String,
    pub loyalty_id: i64,
    pub phone_number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IndividualCharacteristics {
    pub core: CoreCharacteristics,
    pub retail: RetailCharacteristics,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoreCharacteristics {
    /// Completed years at document creation time.
    pub age: u32,
    pub favourite_category: String,
    pub favourite_sub_category: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RetailCharacteristics {
    pub favorite_color: String,
    pub pants_size: String,
    pub shirt_size: String,
    pub shoe_size: i16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserAccount {
    #[serde(rename = "ID")]
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Loyalty {
    #[serde(rename = "loyaltyID")]
    pub loyalty_id: i64,
    pub join_date: NaiveDate,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Consents {
    pub collect: ConsentFlag,
    pub marketing: MarketingChannel,
}

/// Single-letter consent marker (`y` / `n`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsentFlag {
    pub val: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketingChannel {
    pub preferred: Channel,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HomeAddress {
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub street1: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MobilePhone {
    pub number: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    /// `MM-DD` of the birth date; the year lives in `birthYear`.
    pub birth_day_and_month: String,
    pub birth_year: i32,
    pub name: PersonName,
    pub gender: Gender,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersonName {
    pub last_name: String,
    pub full_name: String,
    pub first_name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalEmail {
    pub address: String,
}

/// Merge the four sub-records of a profile into the canonical document.
pub fn canonicalize(profile: &Profile, created_at: DateTime<Utc>) -> CanonicalProfile {
    let personal = &profile.personal_details;
    let retail = &profile.retail_preferences;
    let marketing = &profile.marketing_preferences;
    let loyalty = &profile.loyalty_data;
    let system = &profile.system_data;

    let age = created_at
        .date_naive()
        .years_since(personal.date_of_birth)
        .unwrap_or_default();

    CanonicalProfile {
        create_date: created_at,
        identification: Identification {
            customer_id: system.customer_id.clone(),
            email: personal.email.clone(),
            loyalty_id: loyalty.loyalty_number_id,
            phone_number: personal.mobile_phone.clone(),
        },
        individual_characteristics: IndividualCharacteristics {
            core: CoreCharacteristics {
                age,
                favourite_category: retail.favourite_category.clone(),
                favourite_sub_category: retail.favourite_sub_category.clone(),
            },
            retail: RetailCharacteristics {
                favorite_color: retail.favourite_color.clone(),
                pants_size: retail.pants_size.clone(),
                shirt_size: retail.shirt_size.clone(),
                shoe_size: retail.shoe_size,
            },
        },
        user_account: UserAccount {
            id: system.customer_id.clone(),
        },
        loyalty: Loyalty {
            loyalty_id: loyalty.loyalty_number_id,
            join_date: loyalty.date_joined,
            points: loyalty.points,
        },
        consents: Consents {
            collect: ConsentFlag {
                val: if marketing.consent { "y" } else { "n" }.to_string(),
            },
            marketing: MarketingChannel {
                preferred: marketing.preferred_communication_method,
            },
        },
        home_address: HomeAddress {
            city: personal.home_city.clone(),
            country: personal.country.clone(),
            country_code: personal.iso_country_code.clone(),
            street1: personal.home_address.clone(),
            postal_code: personal.postal_code.clone(),
        },
        mobile_phone: MobilePhone {
            number: personal.mobile_phone.clone(),
        },
        person: Person {
            birth_day_and_month: personal.date_of_birth.format("%m-%d").to_string(),
            birth_year: personal.date_of_birth.year(),
            name: PersonName {
                last_name: personal.last_name.clone(),
                full_name: personal.full_name(),
                first_name: personal.first_name.clone(),
            },
            gender: personal.gender,
        },
        personal_email: PersonalEmail {
            address: personal.email.clone(),
        },
        test_profile: system.test_profile,
    }
}
