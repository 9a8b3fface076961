use serde::{Deserialize, Serialize};

/// Home address parsed from a residence-indicator clause such as "r 2103 Bryant av S"
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct HomeAddress {
    /// Literal 3-5 digit street number as matched
    pub street_number: Option<String>,
    pub street_name: Option<String>,
    pub apartment_or_unit: Option<String>,
    /// Literal abbreviation: "r" (resides), "b" (boards) or "rms" (rooms)
    pub residence_indicator: Option<String>,
}

/// One resident listing extracted from a directory page
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ResidentRecord {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    /// Husband's first name from a "(wid ...)" reference
    pub spouse: Option<String>,
    pub occupation: Option<String>,
    pub company_name: Option<String>,
    pub home_address: HomeAddress,
    /// Reserved; never populated by extraction
    pub work_address: Option<String>,
    /// Reserved; never populated by extraction
    pub telephone: Option<String>,
    pub directory_name: String,
    pub page_number: u32,
}

impl ResidentRecord {
    /// Empty record stamped with its provenance
    pub fn new(directory_name: impl Into<String>, page_number: u32) -> Self {
        Self {
            first_name: None,
            last_name: None,
            spouse: None,
            occupation: None,
            company_name: None,
            home_address: HomeAddress::default(),
            work_address: None,
            telephone: None,
            directory_name: directory_name.into(),
            page_number,
        }
    }

    /// A record is kept only when it carries a name or a street number
    pub fn is_retainable(&self) -> bool {
        self.first_name.is_some()
            || self.last_name.is_some()
            || self.home_address.street_number.is_some()
    }
}
