use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A complete synthetic customer profile.
///
/// One `Profile` maps to one row in each of the four persisted tables; the
/// customer id in [`SystemData`] links them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    pub personal_details: PersonalDetails,
    pub retail_preferences: RetailPreferences,
    pub marketing_preferences: MarketingPreferences,
    pub loyalty_data: LoyaltyData,
    pub system_data: SystemData,
}

impl Profile {
    /// The generated customer identifier that links the four sub-records.
    pub fn customer_id(&self) -> &str {
        &self.system_data.customer_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonalDetails {
    pub first_name: String,
    pub last_name: String,
    pub gender: Gender,
    pub date_of_birth: NaiveDate,
    pub home_address: String,
    pub home_city: String,
    pub postal_code: String,
    pub country: String,
    pub iso_country_code: String,
    pub mobile_phone: String,
    pub email: String,
}

impl PersonalDetails {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            _ => None,
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetailPreferences {
    pub favourite_color: String,
    pub favourite_category: String,
    pub favourite_sub_category: String,
    pub shirt_size: String,
    pub pants_size: String,
    /// EU shoe size; the generated range depends on gender.
    pub shoe_size: i16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketingPreferences {
    pub consent: bool,
    pub preferred_communication_method: Channel,
}

/// Communication channel a customer prefers for marketing contact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    Email,
    Push,
    Sms,
}

impl Channel {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Push => "push",
            Self::Sms => "sms",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "email" => Some(Self::Email),
            "push" => Some(Self::Push),
            "sms" => Some(Self::Sms),
            _ => None,
        }
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoyaltyData {
    /// Loyalty number: the `2201` program prefix followed by the customer id.
    pub loyalty_number_id: i64,
    pub date_joined: NaiveDate,
    pub points: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SystemData {
    /// Nine-digit identifier, unique within a generation run.
    pub customer_id: String,
    pub test_profile: bool,
}
