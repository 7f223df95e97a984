//! Fixed retail catalog the generator draws preferences from.

use profilesmith_core::Channel;

/// A top-level product category and its sub-categories.
#[derive(Debug, Clone, Copy)]
pub struct CategoryFamily {
    pub name: &'static str,
    pub sub_categories: &'static [&'static str],
}

pub const CATEGORIES: &[CategoryFamily] = &[
    CategoryFamily {
        name: "Mens",
        sub_categories: &["Shirts", "Pants", "Jackets and Hoodies", "Accessories"],
    },
    CategoryFamily {
        name: "Womens",
        sub_categories: &["Dresses", "Tops", "Jackets and Hoodies", "Skirts"],
    },
    CategoryFamily {
        name: "Kids",
        sub_categories: &["Toys", "Clothing", "School Supplies"],
    },
];

pub const COLOURS: &[&str] = &["Red", "Blue", "Green", "Black", "White", "Purple", "Pink"];

pub const CLOTHING_SIZES: &[&str] = &["XS", "S", "M", "L", "XL", "XXL"];

pub const CHANNELS: &[Channel] = &[Channel::Email, Channel::Push, Channel::Sms];

/// Look up a category family by name.
pub fn family(name: &str) -> Option<&'static CategoryFamily> {
    CATEGORIES.iter().find(|family| family.name == name)
}
