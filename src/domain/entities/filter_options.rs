//! Fixed option lists offered by the filter form. The empty string is the
//! "no filter" entry of every list.

use std::fmt;

pub const CATEGORIES: &[&str] = &[
    "",
    "Tops",
    "Bottoms",
    "Dresses",
    "Outerwear",
    "Shoes",
    "Accessories",
    "Activewear",
    "Sleepwear",
    "Swimwear",
];

pub const BRANDS: &[&str] = &[
    "", "Nike", "Adidas", "Zara", "H&M", "Uniqlo", "Levi's", "Gap", "Patagonia", "Other",
];

pub const SIZES: &[&str] = &["", "XS", "S", "M", "L", "XL", "XXL"];

pub const COLORS: &[&str] = &[
    "", "Black", "White", "Gray", "Navy", "Blue", "Red", "Green", "Yellow", "Pink", "Purple",
    "Brown", "Beige", "Multi",
];

/// The free-text fields of a draft, each backed by one option list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextField {
    Category,
    Brand,
    Size,
    Color,
}

impl TextField {
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            TextField::Category => CATEGORIES,
            TextField::Brand => BRANDS,
            TextField::Size => SIZES,
            TextField::Color => COLORS,
        }
    }

    /// Label shown for the empty "no filter" entry.
    pub fn any_label(&self) -> &'static str {
        match self {
            TextField::Category => "All Categories",
            TextField::Brand => "All Brands",
            TextField::Size => "All Sizes",
            TextField::Color => "All Colors",
        }
    }

    pub fn display_value<'a>(&self, value: &'a str) -> &'a str {
        if value.is_empty() {
            self.any_label()
        } else {
            value
        }
    }
}

impl fmt::Display for TextField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextField::Category => write!(f, "category"),
            TextField::Brand => write!(f, "brand"),
            TextField::Size => write!(f, "size"),
            TextField::Color => write!(f, "color"),
        }
    }
}
