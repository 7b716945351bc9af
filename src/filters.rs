//! Catalog Filters
//!
//! Filter configuration, option lists, patch merging and the
//! "differs from defaults" check that drives the clear-filters button.

use serde::{Deserialize, Serialize};

/// Gender options (value, label)
pub const GENDER_OPTIONS: &[(&str, &str)] = &[
    ("men", "Men"),
    ("women", "Women"),
    ("kids", "Kids"),
];

/// Category options (value, label)
pub const CATEGORY_OPTIONS: &[(&str, &str)] = &[
    ("all", "All"),
    ("shose", "Shose"),
    ("apparel", "Apparel"),
    ("accessories", "Accessories"),
];

/// Rating thresholds, strongest first
pub const RATING_OPTIONS: &[&str] = &["up4Star", "up3Star", "up2Star", "up1Star"];

/// Price bands (value, label)
pub const PRICE_OPTIONS: &[(&str, &str)] = &[
    ("below", "Below $25"),
    ("between", "Between $25 - $75"),
    ("above", "Above $75"),
];

/// Selectable color swatches
pub const COLOR_OPTIONS: &[&str] = &[
    "#00AB55", "#000000", "#FFFFFF", "#FFC0CB", "#FF4842", "#1890FF", "#94D82D", "#FFC107",
];

/// Complete set of narrowing criteria for the catalog view
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterConfiguration {
    /// Price band, empty string = unset
    pub price: String,
    pub gender: Vec<String>,
    pub colors: Vec<String>,
    pub rating: String,
    pub category: String,
}

/// Partial update emitted by the filter widgets.
///
/// Unknown fields are rejected when decoding from JSON.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FilterPatch {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub colors: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rating: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl FilterPatch {
    pub fn price(value: impl Into<String>) -> Self {
        Self { price: Some(value.into()), ..Default::default() }
    }

    pub fn gender(values: Vec<String>) -> Self {
        Self { gender: Some(values), ..Default::default() }
    }

    pub fn colors(values: Vec<String>) -> Self {
        Self { colors: Some(values), ..Default::default() }
    }

    pub fn rating(value: impl Into<String>) -> Self {
        Self { rating: Some(value.into()), ..Default::default() }
    }

    pub fn category(value: impl Into<String>) -> Self {
        Self { category: Some(value.into()), ..Default::default() }
    }
}

/// A single field value, viewed for comparison
#[derive(Debug, Clone, Copy, PartialEq)]
enum FieldValue<'a> {
    Scalar(&'a str),
    List(&'a [String]),
}

impl FilterConfiguration {
    /// All fields by name, in declaration order
    fn fields(&self) -> [(&'static str, FieldValue<'_>); 5] {
        [
            ("price", FieldValue::Scalar(&self.price)),
            ("gender", FieldValue::List(&self.gender)),
            ("colors", FieldValue::List(&self.colors)),
            ("rating", FieldValue::Scalar(&self.rating)),
            ("category", FieldValue::Scalar(&self.category)),
        ]
    }

    fn field(&self, name: &str) -> Option<FieldValue<'_>> {
        self.fields()
            .into_iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value)
    }
}

/// The initial state and reset target.
pub fn default_filters() -> FilterConfiguration {
    FilterConfiguration {
        price: String::new(),
        gender: vec![GENDER_OPTIONS[0].0.to_string()],
        colors: vec![COLOR_OPTIONS[4].to_string()],
        rating: RATING_OPTIONS[0].to_string(),
        category: CATEGORY_OPTIONS[0].0.to_string(),
    }
}

/// Merge `patch` over `current`, returning a new configuration.
///
/// Fields absent from the patch are carried over unchanged.
pub fn apply(current: &FilterConfiguration, patch: FilterPatch) -> FilterConfiguration {
    let FilterPatch { price, gender, colors, rating, category } = patch;
    FilterConfiguration {
        price: price.unwrap_or_else(|| current.price.clone()),
        gender: gender.unwrap_or_else(|| current.gender.clone()),
        colors: colors.unwrap_or_else(|| current.colors.clone()),
        rating: rating.unwrap_or_else(|| current.rating.clone()),
        category: category.unwrap_or_else(|| current.category.clone()),
    }
}

/// True as soon as any field of `current` differs from `defaults`.
///
/// Sequence fields compare position by position, so `["a", "b"]` and
/// `["b", "a"]` count as different.
pub fn has_deviated_from_default(current: &FilterConfiguration, defaults: &FilterConfiguration) -> bool {
    defaults.fields().into_iter().any(|(name, default_value)| {
        match (current.field(name), default_value) {
            (Some(FieldValue::List(cur)), FieldValue::List(def)) => {
                cur.len() != def.len() || cur.iter().zip(def).any(|(a, b)| a != b)
            }
            (Some(cur), def) => cur != def,
            (None, _) => true,
        }
    })
}

/// `values` with `value` removed if present, appended otherwise
pub fn toggled(values: &[String], value: &str) -> Vec<String> {
    if values.iter().any(|v| v == value) {
        values.iter().filter(|v| *v != value).cloned().collect()
    } else {
        let mut next = values.to_vec();
        next.push(value.to_string());
        next
    }
}

/// Sort keys offered by the sort control
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    #[serde(rename = "featured")]
    Featured,
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "priceDesc")]
    PriceDesc,
    #[serde(rename = "priceAsc")]
    PriceAsc,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [SortKey::Featured, SortKey::Newest, SortKey::PriceDesc, SortKey::PriceAsc];

    pub fn value(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::Newest => "newest",
            SortKey::PriceDesc => "priceDesc",
            SortKey::PriceAsc => "priceAsc",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::Newest => "Newest",
            SortKey::PriceDesc => "Price: High-Low",
            SortKey::PriceAsc => "Price: Low-High",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.value() == value)
    }
}
