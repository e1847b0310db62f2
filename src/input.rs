//! Player inputs
//!
//! Inputs are one-shot triggers. The machine decides whether to honour them;
//! anything arriving while a grab is in flight is dropped without complaint.

/// A discrete player action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Input {
    MoveLeft,
    MoveRight,
    Grab,
}

impl Input {
    /// Map a `KeyboardEvent.key` value to an input
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowLeft" => Some(Input::MoveLeft),
            "ArrowRight" => Some(Input::MoveRight),
            " " | "Enter" => Some(Input::Grab),
            _ => None,
        }
    }

    /// Map an on-screen button id to an input
    pub fn from_button_id(id: &str) -> Option<Self> {
        match id {
            "leftBtn" => Some(Input::MoveLeft),
            "rightBtn" => Some(Input::MoveRight),
            "grabBtn" => Some(Input::Grab),
            _ => None,
        }
    }

    /// Button ids wired by the web host, in display order
    pub const BUTTON_IDS: [&'static str; 3] = ["leftBtn", "rightBtn", "grabBtn"];
}
