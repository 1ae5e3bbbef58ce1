//! Lookup data structures.
//!
//! This module defines the record returned for one IP address and the fixed set
//! of fields it carries.

use serde::Deserialize;
use strum_macros::EnumIter as EnumIterMacro;

use crate::config::PLACEHOLDER;

/// Information returned by the lookup service for one IP address.
///
/// Every field is optional; the service omits whatever it does not know.
/// Unknown keys in the response are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[allow(missing_docs)]
pub struct LookupResult {
    /// Address the result describes
    pub ip: Option<String>,
    /// Reverse DNS name
    pub hostname: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    /// ISO 3166-1 alpha-2 country code
    pub country: Option<String>,
    /// `"<latitude>,<longitude>"`
    pub loc: Option<String>,
    /// Network owner, usually `"AS<number> <name>"`
    pub org: Option<String>,
    pub postal: Option<String>,
    /// IANA timezone name
    pub timezone: Option<String>,
}

/// Fields of a `LookupResult`, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIterMacro)]
#[allow(missing_docs)]
pub enum Field {
    Ip,
    Hostname,
    City,
    Region,
    Country,
    Location,
    Org,
    Postal,
    Timezone,
}

impl Field {
    /// Key of the field in the service's JSON response.
    pub fn key(&self) -> &'static str {
        match self {
            Field::Ip => "ip",
            Field::Hostname => "hostname",
            Field::City => "city",
            Field::Region => "region",
            Field::Country => "country",
            Field::Location => "loc",
            Field::Org => "org",
            Field::Postal => "postal",
            Field::Timezone => "timezone",
        }
    }

    /// Human-readable label used by the console and HTML renderers.
    pub fn label(&self) -> &'static str {
        match self {
            Field::Ip => "IP Address",
            Field::Hostname => "Hostname",
            Field::City => "City",
            Field::Region => "Region",
            Field::Country => "Country",
            Field::Location => "Location",
            Field::Org => "ISP",
            Field::Postal => "Postal Code",
            Field::Timezone => "Timezone",
        }
    }
}

impl LookupResult {
    /// Returns the value of `field`, if the service provided one.
    pub fn get(&self, field: Field) -> Option<&str> {
        let value = match field {
            Field::Ip => &self.ip,
            Field::Hostname => &self.hostname,
            Field::City => &self.city,
            Field::Region => &self.region,
            Field::Country => &self.country,
            Field::Location => &self.loc,
            Field::Org => &self.org,
            Field::Postal => &self.postal,
            Field::Timezone => &self.timezone,
        };
        value.as_deref()
    }

    /// Returns the value of `field`, or the `N/A` placeholder when absent.
    pub fn display_value(&self, field: Field) -> &str {
        self.get(field).unwrap_or(PLACEHOLDER)
    }

    /// Splits `loc` into `(latitude, longitude)`.
    ///
    /// Returns `None` unless `loc` is present and has exactly two
    /// comma-separated components. The components are returned verbatim.
    pub fn coordinates(&self) -> Option<(&str, &str)> {
        let loc = self.loc.as_deref()?;
        let mut parts = loc.split(',');
        match (parts.next(), parts.next(), parts.next()) {
            (Some(lat), Some(lon), None) => Some((lat, lon)),
            _ => None,
        }
    }
}
