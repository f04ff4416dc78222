use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Record fields the list can be ordered by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortField {
    Name,
    Type,
    Priority,
    Description,
    Categories,
    Defaults,
    AllowedValues,
}

impl SortField {
    pub const ALL: [SortField; 7] = [
        SortField::Name,
        SortField::Type,
        SortField::Priority,
        SortField::Description,
        SortField::Categories,
        SortField::Defaults,
        SortField::AllowedValues,
    ];

    /// Query-string key for this field.
    pub fn as_str(self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Type => "type",
            SortField::Priority => "priority",
            SortField::Description => "description",
            SortField::Categories => "categories",
            SortField::Defaults => "defaults",
            SortField::AllowedValues => "allowed_values",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        SortField::ALL
            .into_iter()
            .find(|f| f.as_str() == key || (key == "allowedvalues" && *f == SortField::AllowedValues))
            .ok_or_else(|| format!("unknown sort field: {}", s))
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            SortDirection::Asc => "asc",
            SortDirection::Desc => "desc",
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

impl FromStr for SortDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "asc" => Ok(SortDirection::Asc),
            "desc" => Ok(SortDirection::Desc),
            other => Err(format!("unknown sort direction: {}", other)),
        }
    }
}

/// Field and direction currently used to order the element set.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SortSpec {
    pub field: SortField,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn new(field: SortField, direction: SortDirection) -> Self {
        Self { field, direction }
    }

    /// The spec a header link for `field` should request: toggles the
    /// direction on the active column, ascending otherwise.
    pub fn toggled_for(&self, field: SortField) -> SortSpec {
        if self.field == field {
            SortSpec::new(field, self.direction.reversed())
        } else {
            SortSpec::new(field, SortDirection::Asc)
        }
    }
}

impl Default for SortSpec {
    fn default() -> Self {
        Self::new(SortField::Name, SortDirection::Asc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort_field() {
        assert_eq!("name".parse::<SortField>(), Ok(SortField::Name));
        assert_eq!(" Priority ".parse::<SortField>(), Ok(SortField::Priority));
        assert_eq!("allowedValues".parse::<SortField>(), Ok(SortField::AllowedValues));
        assert!("password".parse::<SortField>().is_err());
    }

    #[test]
    fn test_toggle() {
        let spec = SortSpec::new(SortField::Name, SortDirection::Asc);
        assert_eq!(spec.toggled_for(SortField::Name).direction, SortDirection::Desc);
        assert_eq!(spec.toggled_for(SortField::Type), SortSpec::new(SortField::Type, SortDirection::Asc));
    }
}
