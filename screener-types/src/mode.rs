use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The study's delivery format. Decides which conditional block is assembled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mode {
    /// Remote session over video.
    #[serde(rename = "online")]
    Online,

    /// In person at an external facility.
    #[serde(rename = "inperson_external")]
    InPersonExternal,

    /// In person at the ShopperLab, with mobile eye-tracking.
    #[serde(rename = "inperson_shopperlab")]
    InPersonShopperLab,
}

impl Mode {
    pub const ALL: [Mode; 3] = [Self::Online, Self::InPersonExternal, Self::InPersonShopperLab];

    /// The machine name, as used in setup files.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Online => "online",
            Self::InPersonExternal => "inperson_external",
            Self::InPersonShopperLab => "inperson_shopperlab",
        }
    }

    /// The label shown in forms and document headers.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Online => "Online (Virtual)",
            Self::InPersonExternal => "In-Person (External Facility)",
            Self::InPersonShopperLab => "In-Person (ShopperLab)",
        }
    }

    /// Header label for an optional mode; unknown modes show a dash.
    pub fn label_or_dash(mode: Option<Mode>) -> &'static str {
        mode.map_or("—", |m| m.label())
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a mode name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown study mode: '{0}'")]
pub struct UnknownMode(pub String);

impl FromStr for Mode {
    type Err = UnknownMode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "online" => Ok(Self::Online),
            "inperson_external" | "in_person_external" => Ok(Self::InPersonExternal),
            "inperson_shopperlab" | "in_person_shopperlab" => Ok(Self::InPersonShopperLab),
            _ => Err(UnknownMode(s.to_string())),
        }
    }
}
