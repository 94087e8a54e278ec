use serde::Serialize;

/// One entry of a dropdown list on the monitor page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub value: u64,
    pub text: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(value: u64, text: impl Into<String>, selected: bool) -> Self {
        Self {
            value,
            text: text.into(),
            selected,
        }
    }

    /// Blank first entry of every list
    pub fn blank() -> Self {
        Self::new(0, "", false)
    }
}

/// MonitorOptions - The three filter dropdowns of the monitor page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MonitorOptions {
    pub service_area_list: Vec<SelectOption>,
    pub team_list: Vec<SelectOption>,
    pub product_list: Vec<SelectOption>,
}
