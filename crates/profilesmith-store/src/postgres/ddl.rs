//! Create-if-absent DDL for the four profile tables, in dependency order.

pub const CREATE_CUSTOMERS: &str = "
CREATE TABLE IF NOT EXISTS customers (
    customer_id VARCHAR(36) PRIMARY KEY,
    first_name VARCHAR(50) NOT NULL,
    last_name VARCHAR(50) NOT NULL,
    gender VARCHAR(20) NOT NULL,
    date_of_birth DATE NOT NULL,
    email VARCHAR(100) UNIQUE NOT NULL,
    mobile_phone VARCHAR(30) NOT NULL,
    home_address VARCHAR(100) NOT NULL,
    city VARCHAR(50) NOT NULL,
    postal_code VARCHAR(30) NOT NULL,
    country VARCHAR(50) NOT NULL DEFAULT 'United States',
    iso_country_code CHAR(2) NOT NULL DEFAULT 'US',
    test_profile BOOLEAN NOT NULL,
    profile_creation_date TIMESTAMPTZ NOT NULL DEFAULT now()
)
";

pub const CREATE_RETAIL_PREFERENCES: &str = "
CREATE TABLE IF NOT EXISTS retail_preferences (
    customer_id VARCHAR(36) PRIMARY KEY REFERENCES customers(customer_id),
    favourite_color VARCHAR(30) NOT NULL,
    favourite_category VARCHAR(50) NOT NULL,
    favourite_sub_category VARCHAR(50) NOT NULL,
    shirt_size VARCHAR(10) NOT NULL,
    pants_size VARCHAR(10) NOT NULL,
    shoe_size SMALLINT NOT NULL
)
";

pub const CREATE_MARKETING_PREFERENCES: &str = "
CREATE TABLE IF NOT EXISTS marketing_preferences (
    customer_id VARCHAR(36) PRIMARY KEY REFERENCES customers(customer_id),
    marketing_consent BOOLEAN NOT NULL DEFAULT false,
    preferred_communication_method VARCHAR(20) NOT NULL
)
";

pub const CREATE_LOYALTY_MEMBERS: &str = "
CREATE TABLE IF NOT EXISTS loyalty_members (
    loyalty_number_id BIGINT PRIMARY KEY,
    customer_id VARCHAR(36) UNIQUE NOT NULL REFERENCES customers(customer_id),
    date_joined DATE NOT NULL,
    points BIGINT NOT NULL DEFAULT 0
)
";

pub const ALL_TABLES: &[(&str, &str)] = &[
    ("customers", CREATE_CUSTOMERS),
    ("retail_preferences", CREATE_RETAIL_PREFERENCES),
    ("marketing_preferences", CREATE_MARKETING_PREFERENCES),
    ("loyalty_members", CREATE_LOYALTY_MEMBERS),
];
