use sqlx::Row;
use sqlx::postgres::PgRow;

use profilesmith_core::{
    Channel, Gender, LoyaltyData, MarketingPreferences, PersonalDetails, Profile,
    RetailPreferences, SystemData,
};

use crate::error::StoreError;

/// Reassemble a [`Profile`] from the joined four-table row.
pub fn profile_from_row(row: &PgRow) -> Result<Profile, StoreError> {
    let gender_raw: String = row.try_get("gender")?;
    let gender = Gender::parse(&gender_raw).ok_or_else(|| StoreError::InvalidColumn {
        column: "gender".to_string(),
        value: gender_raw,
    })?;

    let channel_raw: String = row.try_get("preferred_communication_method")?;
    let channel = Channel::parse(&channel_raw).ok_or_else(|| StoreError::InvalidColumn {
        column: "preferred_communication_method".to_string(),
        value: channel_raw,
    })?;

    Ok(Profile {
        personal_details: PersonalDetails {
            first_name: row.try_get("first_name")?,
            last_name: row.try_get("last_name")?,
            gender,
            date_of_birth: row.try_get("date_of_birth")?,
            home_address: row.try_get("home_address")?,
            home_city: row.try_get("city")?,
            postal_code: row.try_get("postal_code")?,
            country: row.try_get("country")?,
            iso_country_code: row.try_get("iso_country_code")?,
            mobile_phone: row.try_get("mobile_phone")?,
            email: row.try_get("email")?,
        },
        retail_preferences: RetailPreferences {
            favourite_color: row.try_get("favourite_color")?,
            favourite_category: row.try_get("favourite_category")?,
            favourite_sub_category: row.try_get("favourite_sub_category")?,
            shirt_size: row.try_get("shirt_size")?,
            pants_size: row.try_get("pants_size")?,
            shoe_size: row.try_get("shoe_size")?,
        },
        marketing_preferences: MarketingPreferences {
            consent: row.try_get("marketing_consent")?,
            preferred_communication_method: channel,
        },
        loyalty_data: LoyaltyData {
            loyalty_number_id: row.try_get("loyalty_number_id")?,
            date_joined: row.try_get("date_joined")?,
            points: row.try_get("points")?,
        },
        system_data: SystemData {
            customer_id: row.try_get("customer_id")?,
            test_profile: row.try_get("test_profile")?,
        },
    })
}
