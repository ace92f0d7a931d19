use serde::{Deserialize, Serialize};

macro_rules! countries {
    ($($variant:ident => $name:literal),+ $(,)?) => {
        #[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
        pub enum Country {
            $(#[serde(rename = $name)] $variant,)+
        }

        impl Country {
            pub const ALL: &'static [Country] = &[$(Country::$variant,)+];

            /// Display name, which is also the value sent as `pais`.
            pub fn name(&self) -> &'static str {
                match self {
                    $(Country::$variant => $name,)+
                }
            }
        }
    };
}

countries! {
    Argentina => "Argentina",
    Bolivia => "Bolivia",
    Brazil => "Brasil",
    Chile => "Chile",
    Colombia => "Colombia",
    CostaRica => "Costa Rica",
    Cuba => "Cuba",
    DominicanRepublic => "República Dominicana",
    Ecuador => "Ecuador",
    ElSalvador => "El Salvador",
    Guatemala => "Guatemala",
    Honduras => "Honduras",
    Mexico => "México",
    Nicaragua => "Nicaragua",
    Panama => "Panamá",
    Paraguay => "Paraguay",
    Peru => "Perú",
    PuertoRico => "Puerto Rico",
    Uruguay => "Uruguay",
    Venezuela => "Venezuela",
    Spain => "España",
    UnitedStates => "Estados Unidos",
    France => "Francia",
    Germany => "Alemania",
    Italy => "Italia",
    UnitedKingdom => "Reino Unido",
    Other => "Otro",
}

impl Country {
    /// Case-insensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim().to_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|country| country.name().to_lowercase() == name)
    }
}
