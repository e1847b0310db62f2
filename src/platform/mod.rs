//! Platform abstraction layer
//!
//! Handles browser/native differences for:
//! - Time (milliseconds on the same clock as animation-frame timestamps)
//! - Inline page configuration (JSON `<script>` blocks)
//! - The DOM view (web only)

#[cfg(target_arch = "wasm32")]
pub mod dom;

/// Current time in milliseconds
#[cfg(target_arch = "wasm32")]
pub fn now_ms() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now())
        .unwrap_or_else(js_sys::Date::now)
}

/// Current time in milliseconds since first call
#[cfg(not(target_arch = "wasm32"))]
pub fn now_ms() -> f64 {
    use std::sync::OnceLock;
    use std::time::Instant;

    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed().as_secs_f64() * 1000.0
}

/// Seed for a fresh session
pub fn session_seed() -> u64 {
    #[cfg(target_arch = "wasm32")]
    {
        js_sys::Date::now() as u64
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Text of an inline `<script type="application/json" id=...>` block, if present and non-blank
#[cfg(target_arch = "wasm32")]
pub fn inline_json(element_id: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let text = document.get_element_by_id(element_id)?.text_content()?;
    if text.trim().is_empty() {
        None
    } else {
        Some(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clock_is_monotonic() {
        let a = now_ms();
        let b = now_ms();
        assert!(b >= a);
        assert!(a >= 0.0);
    }
}
