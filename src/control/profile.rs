//! Drying profiles.
//!
//! Each profile maps to its display name and target temperature through a
//! `match`, so there is no table to index out of bounds.

use core::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum Profile {
    /// Heater disabled.
    #[default]
    None = 0,
    Pla = 1,
    Abs = 2,
    Petg = 3,
    Tpu = 4,
}

impl Profile {
    /// Profiles the operator can pick from the menu, in menu order.
    pub const SELECTABLE: [Self; 4] = [Self::Pla, Self::Abs, Self::Petg, Self::Tpu];

    pub const fn name(self) -> &'static str {
        match self {
            Self::None => "None",
            Self::Pla => "PLA",
            Self::Abs => "ABS",
            Self::Petg => "PETG",
            Self::Tpu => "TPU",
        }
    }

    /// Target chamber temperature in °C.
    pub const fn target_c(self) -> f32 {
        match self {
            Self::None => 0.0,
            Self::Pla => 50.0,
            Self::Abs => 80.0,
            Self::Petg => 70.0,
            Self::Tpu => 60.0,
        }
    }

    /// `false` only for [`Profile::None`].
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::None)
    }

    /// 1-based menu number; `None` has no menu entry.
    pub const fn menu_number(self) -> Option<u8> {
        match self {
            Self::None => None,
            other => Some(other as u8),
        }
    }

    /// Inverse of [`menu_number`](Self::menu_number).
    pub fn from_menu_number(n: i64) -> Option<Self> {
        Self::SELECTABLE
            .into_iter()
            .find(|p| p.menu_number().map(i64::from) == Some(n))
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
