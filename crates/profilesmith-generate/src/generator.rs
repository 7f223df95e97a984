use std::collections::HashSet;

use chrono::{Duration, Months, NaiveDate, Utc};
use fake::Fake;
use fake::faker::address::en::{BuildingNumber, CityName, StreetName, ZipCode};
use fake::faker::name::en::{FirstName, LastName};
use fake::faker::phone_number::en::CellNumber;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use profilesmith_core::{
    Gender, LoyaltyData, MarketingPreferences, PersonalDetails, Profile, RetailPreferences,
    SystemData,
};

use crate::catalog::{CATEGORIES, CHANNELS, CLOTHING_SIZES, COLOURS};
use crate::errors::GenerateError;

const MIN_AGE_YEARS: u32 = 18;
const MAX_AGE_YEARS: u32 = 70;
const MEMBERSHIP_WINDOW_YEARS: u32 = 10;
const MAX_POINTS: i64 = 1_000_000;
const CUSTOMER_ID_SPACE: u32 = 1_000_000_000;
const MAX_ID_ATTEMPTS: u32 = 64;

/// Loyalty numbers carry the four-digit program prefix `2201` ahead of the
/// nine customer-id digits.
const LOYALTY_PREFIX: i64 = 2_201_000_000_000;

/// Produces synthetic customer profiles from a seeded RNG.
///
/// Customer ids are tracked per instance, so one generator never yields the
/// same id twice within a run.
#[derive(Debug, Clone)]
pub struct ProfileGenerator {
    rng: ChaCha8Rng,
    issued_ids: HashSet<String>,
}

impl ProfileGenerator {
    /// Generator seeded from OS entropy.
    pub fn new() -> Self {
        Self::from_rng(ChaCha8Rng::from_os_rng())
    }

    /// Deterministic generator; the same seed yields the same profile
    /// sequence within a calendar day (ages are anchored to today).
    pub fn with_seed(seed: u64) -> Self {
        Self::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    fn from_rng(rng: ChaCha8Rng) -> Self {
        Self {
            rng,
            issued_ids: HashSet::new(),
        }
    }

    /// Generate one internally consistent profile.
    pub fn generate(&mut self) -> Result<Profile, GenerateError> {
        let customer_id = self.next_customer_id()?;
        let today = Utc::now().date_naive();

        let first_name: String = FirstName().fake_with_rng(&mut self.rng);
        let last_name: String = LastName().fake_with_rng(&mut self.rng);
        let gender = if self.rng.random_bool(0.5) {
            Gender::Male
        } else {
            Gender::Female
        };
        let date_of_birth = self.date_of_birth(today);

        let building: String = BuildingNumber().fake_with_rng(&mut self.rng);
        let street: String = StreetName().fake_with_rng(&mut self.rng);
        let home_city: String = CityName().fake_with_rng(&mut self.rng);
        let postal_code: String = ZipCode().fake_with_rng(&mut self.rng);
        let mobile_phone: String = CellNumber().fake_with_rng(&mut self.rng);
        let email = format!(
            "{}{}@example.com",
            first_name.to_lowercase(),
            last_name.to_lowercase()
        );

        let family = &CATEGORIES[self.rng.random_range(0..CATEGORIES.len())];
        let sub_category =
            family.sub_categories[self.rng.random_range(0..family.sub_categories.len())];
        let retail_preferences = RetailPreferences {
            favourite_color: COLOURS[self.rng.random_range(0..COLOURS.len())].to_string(),
            favourite_category: family.name.to_string(),
            favourite_sub_category: sub_category.to_string(),
            shirt_size: CLOTHING_SIZES[self.rng.random_range(0..CLOTHING_SIZES.len())].to_string(),
            pants_size: CLOTHING_SIZES[self.rng.random_range(0..CLOTHING_SIZES.len())].to_string(),
            shoe_size: self.shoe_size(gender),
        };

        let marketing_preferences = MarketingPreferences {
            consent: self.rng.random_bool(0.5),
            preferred_communication_method: CHANNELS[self.rng.random_range(0..CHANNELS.len())],
        };

        let loyalty_data = LoyaltyData {
            loyalty_number_id: loyalty_number(&customer_id),
            date_joined: self.date_joined(today),
            points: self.rng.random_range(0..=MAX_POINTS),
        };

        debug!(customer_id = %customer_id, "profile generated");

        Ok(Profile {
            personal_details: PersonalDetails {
                first_name,
                last_name,
                gender,
                date_of_birth,
                home_address: format!("{building} {street}"),
                home_city,
                postal_code,
                country: "United States".to_string(),
                iso_country_code: "US".to_string(),
                mobile_phone,
                email,
            },
            retail_preferences,
            marketing_preferences,
            loyalty_data,
            system_data: SystemData {
                customer_id,
                test_profile: true,
            },
        })
    }

    fn next_customer_id(&mut self) -> Result<String, GenerateError> {
        for _ in 0..MAX_ID_ATTEMPTS {
            let candidate = format!("{:09}", self.rng.random_range(0..CUSTOMER_ID_SPACE));
            if self.issued_ids.insert(candidate.clone()) {
                return Ok(candidate);
            }
        }
        Err(GenerateError::IdSpaceExhausted(MAX_ID_ATTEMPTS))
    }

    fn date_of_birth(&mut self, today: NaiveDate) -> NaiveDate {
        let latest = years_before(today, MIN_AGE_YEARS);
        let earliest = years_before(today, MAX_AGE_YEARS);
        self.date_between(earliest, latest)
    }

    fn date_joined(&mut self, today: NaiveDate) -> NaiveDate {
        let earliest = years_before(today, MEMBERSHIP_WINDOW_YEARS);
        self.date_between(earliest, today)
    }

    fn date_between(&mut self, earliest: NaiveDate, latest: NaiveDate) -> NaiveDate {
        let span_days = (latest - earliest).num_days().max(0);
        earliest + Duration::days(self.rng.random_range(0..=span_days))
    }

    fn shoe_size(&mut self, gender: Gender) -> i16 {
        match gender {
            Gender::Male => self.rng.random_range(40..=47),
            Gender::Female => self.rng.random_range(34..=41),
        }
    }
}

impl Default for ProfileGenerator {
    fn default() -> Self {
        Self::new()
    }
}

fn loyalty_number(customer_id: &str) -> i64 {
    let digits = customer_id.parse::<i64>().unwrap_or(0);
    LOYALTY_PREFIX + digits
}

fn years_before(date: NaiveDate, years: u32) -> NaiveDate {
    date.checked_sub_months(Months::new(years * 12))
        .unwrap_or(date)
}
