use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Cad,
    Chf,
    Eur,
    Gbp,
    Jpy,
    Usd,
    #[serde(other)]
    Unknown,
}

/// The kind of route a transaction moved through.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RouteType {
    AccountNumber,
    Card,
    Lockbox,
    #[serde(other)]
    Unknown,
}

/// Set once a transfer requiring approval has been approved.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub approved_at: Option<DateTime<Utc>>,
    pub approved_by: Option<String>,
}

/// Set once a transfer requiring approval has been canceled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub canceled_at: Option<DateTime<Utc>>,
    pub canceled_by: Option<String>,
}

/// Range filter on `created_at` for list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreatedAtFilter {
    pub after: Option<DateTime<Utc>>,
    pub before: Option<DateTime<Utc>>,
    pub on_or_after: Option<DateTime<Utc>>,
    pub on_or_before: Option<DateTime<Utc>>,
}

/// `field.in=a,b` filter for list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InFilter<T> {
    #[serde(rename = "in")]
    pub values: Vec<T>,
}

impl<T> InFilter<T> {
    pub fn new(values: impl IntoIterator<Item = T>) -> Self {
        Self {
            values: values.into_iter().collect(),
        }
    }
}

/// Defines an enum for an Increase `category` union: the JSON object holds a
/// `category` string plus one sibling field per category, and only the
/// sibling named by `category` is populated. Categories without a variant
/// decode into `Other` with their raw payload.
macro_rules! category_union {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$vmeta:meta])*
                $variant:ident($payload:ty) = $tag:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq)]
        pub enum $name {
            $(
                $(#[$vmeta])*
                $variant($payload),
            )+
            /// A category this client does not model.
            Other {
                category: String,
                payload: Option<serde_json::Value>,
            },
        }

        impl $name {
            /// The wire value of the `category` discriminator.
            pub fn category(&self) -> &str {
                match self {
                    $($name::$variant(_) => $tag,)+
                    $name::Other { category, .. } => category.as_str(),
                }
            }
        }

        impl<'de> serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: serde::Deserializer<'de>,
            {
                use serde::de::Error as _;

                let mut map =
                    <serde_json::Map<String, serde_json::Value> as serde::Deserialize>::deserialize(
                        deserializer,
                    )?;
                let category = match map.remove("category") {
                    Some(serde_json::Value::String(category)) => category,
                    _ => return Err(D::Error::missing_field("category")),
                };
                let payload = map.remove(category.as_str()).filter(|v| !v.is_null());
                match category.as_str() {
                    $(
                        $tag => {
                            let payload = payload.ok_or_else(|| {
                                D::Error::custom(format!(
                                    "category `{}` without a `{}` object",
                                    $tag, $tag
                                ))
                            })?;
                            serde_json::from_value(payload)
                                .map($name::$variant)
                                .map_err(D::Error::custom)
                        }
                    )+
                    _ => Ok($name::Other { category, payload }),
                }
            }
        }

        impl serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::Serializer,
            {
                use serde::ser::SerializeMap;

                let mut map = serializer.serialize_map(Some(2))?;
                map.serialize_entry("category", self.category())?;
                match self {
                    $($name::$variant(payload) => map.serialize_entry($tag, payload)?,)+
                    $name::Other { category, payload } => {
                        map.serialize_entry(category.as_str(), payload)?
                    }
                }
                map.end()
            }
        }
    };
}

pub(crate) use category_union;
