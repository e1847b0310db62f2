//! Prize catalog
//!
//! The list of catchable prizes is owned by the page. The simulation only
//! ever clones entries out of it.

use serde::{Deserialize, Serialize};

/// One catchable prize as shown in the machine and in the caught list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeDef {
    /// Glyph drawn for the prize
    pub emoji: String,
    pub label: String,
    /// Opened in a new tab when the caught entry is clicked
    pub link: String,
}

impl PrizeDef {
    pub fn new(emoji: impl Into<String>, label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            label: label.into(),
            link: link.into(),
        }
    }
}

/// Ordered, read-only prize list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PrizeCatalog {
    pub prizes: Vec<PrizeDef>,
}

impl Default for PrizeCatalog {
    fn default() -> Self {
        Self {
            prizes: vec![PrizeDef::new("🐱", "lucky cat", "https://example.com/")],
        }
    }
}

impl PrizeCatalog {
    pub fn new(prizes: Vec<PrizeDef>) -> Self {
        Self { prizes }
    }

    /// Parse a JSON array of `{ "emoji", "label", "link" }`
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn len(&self) -> usize {
        self.prizes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prizes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &PrizeDef> {
        self.prizes.iter()
    }

    /// DOM id of the inline JSON catalog
    #[allow(dead_code)]
    const ELEMENT_ID: &'static str = "prize-catalog";

    /// Load the catalog from the page (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let Some(json) = crate::platform::inline_json(Self::ELEMENT_ID) else {
            log::info!("No prize catalog on page, using built-in list");
            return Self::default();
        };

        match Self::from_json(&json) {
            Ok(catalog) => {
                log::info!("Loaded {} prizes", catalog.len());
                catalog
            }
            Err(e) => {
                log::warn!("Malformed prize catalog ({}), using built-in list", e);
                Self::default()
            }
        }
    }

    /// Native stub
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::default()
    }
}
