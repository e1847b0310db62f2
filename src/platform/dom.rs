//! DOM view for the browser build
//!
//! Writes prize and claw positions into element styles each frame and turns
//! `GameEvent`s into CSS class toggles and banner text. Nothing here feeds
//! back into the simulation.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlButtonElement, HtmlElement};

use crate::sim::{CaughtCollection, ClawMachine, GameEvent, PlayArea, RandomSource};

/// How long the claw glows after a move (ms)
const MOVE_FLASH_MS: f64 = 200.0;
/// Banner display times (ms)
const MISS_BANNER_MS: f64 = 1500.0;
const CATCH_BANNER_MS: f64 = 2500.0;

const GRAB_LABEL: &str = "🎯 GRAB";
const GRABBING_LABEL: &str = "⚡ GRABBING...";
const EMPTY_CAUGHT_TEXT: &str = "No prizes caught yet... Try the claw machine!";

/// Handles to the page elements the game draws into
pub struct DomView {
    document: Document,
    claw: HtmlElement,
    prize_area: HtmlElement,
    caught_display: Element,
    grab_button: Option<HtmlButtonElement>,
    banner: Option<HtmlElement>,
    prizes: Vec<HtmlElement>,
    flash_until: f64,
    banner_until: f64,
}

impl DomView {
    /// Look up the page skeleton. `None` if a required element is missing
    pub fn new(document: Document) -> Option<Self> {
        let claw = html_by_id(&document, "claw")?;
        let prize_area = html_by_id(&document, "prizeArea")?;
        let caught_display = document.get_element_by_id("caughtDisplay")?;
        let grab_button = document
            .get_element_by_id("grabBtn")
            .and_then(|el| el.dyn_into::<HtmlButtonElement>().ok());
        let banner = document
            .get_element_by_id("banner")
            .and_then(|el| el.dyn_into::<HtmlElement>().ok());

        Some(Self {
            document,
            claw,
            prize_area,
            caught_display,
            grab_button,
            banner,
            prizes: Vec::new(),
            flash_until: 0.0,
            banner_until: 0.0,
        })
    }

    /// Current playable bounds of the prize area
    pub fn measure_area(&self) -> PlayArea {
        let rect = self.prize_area.get_bounding_client_rect();
        PlayArea::from_element_size(rect.width() as f32, rect.height() as f32)
    }

    /// Create one element per prize inside the prize area
    pub fn mount_prizes<R: RandomSource>(&mut self, machine: &ClawMachine<R>) {
        for prize in &machine.prizes {
            let Some(el) = self
                .document
                .create_element("div")
                .ok()
                .and_then(|el| el.dyn_into::<HtmlElement>().ok())
            else {
                log::warn!("Could not create element for {}", prize.def.label);
                continue;
            };
            el.set_class_name("prize");
            let _ = el.set_attribute("data-link", &prize.def.link);
            let _ = el.set_attribute("title", &prize.def.label);
            el.set_text_content(Some(&prize.def.emoji));
            let _ = self.prize_area.append_child(&el);
            self.prizes.push(el);
        }
        self.render_caught(&machine.caught);
    }

    /// Publish positions for this frame and expire timed effects
    pub fn sync<R: RandomSource>(&mut self, machine: &ClawMachine<R>, now_ms: f64) {
        for (prize, el) in machine.prizes.iter().zip(&self.prizes) {
            let style = el.style();
            let _ = style.set_property("left", &format!("{}px", prize.pos.x));
            let _ = style.set_property("top", &format!("{}px", prize.pos.y));
            if prize.hidden {
                let _ = style.set_property("visibility", "hidden");
            }
        }

        let claw = machine.grab.claw();
        let _ = self
            .claw
            .style()
            .set_property("left", &format!("{}%", claw.position));

        if self.flash_until > 0.0 && now_ms >= self.flash_until {
            let _ = self.claw.class_list().remove_1("flash");
            self.flash_until = 0.0;
        }
        if self.banner_until > 0.0 && now_ms >= self.banner_until {
            if let Some(banner) = &self.banner {
                banner.set_class_name("hidden");
            }
            self.banner_until = 0.0;
        }
    }

    /// Play the cosmetic side of one simulation event
    pub fn apply(&mut self, event: &GameEvent, caught: &CaughtCollection, now_ms: f64) {
        match event {
            GameEvent::ClawMoved { .. } => {
                let _ = self.claw.class_list().add_1("flash");
                self.flash_until = now_ms + MOVE_FLASH_MS;
            }
            GameEvent::GrabStarted { .. } => {
                let _ = self.claw.class_list().add_1("grabbing");
                if let Some(btn) = &self.grab_button {
                    btn.set_disabled(true);
                    btn.set_text_content(Some(GRABBING_LABEL));
                }
            }
            GameEvent::Caught { prize } => {
                if let Some(el) = self.prizes.get(*prize) {
                    let _ = el.class_list().add_1("grabbed");
                }
                self.show_banner("⚡ CAUGHT! ⚡", "caught", now_ms + CATCH_BANNER_MS);
            }
            GameEvent::Missed => {
                self.show_banner("💨 MISS", "miss", now_ms + MISS_BANNER_MS);
            }
            GameEvent::PrizeHidden { prize } => {
                if let Some(el) = self.prizes.get(*prize) {
                    let _ = el.style().set_property("visibility", "hidden");
                }
            }
            GameEvent::CaughtListChanged => self.render_caught(caught),
            GameEvent::InputReenabled => {
                let _ = self.claw.class_list().remove_1("grabbing");
                if let Some(btn) = &self.grab_button {
                    btn.set_disabled(false);
                    btn.set_text_content(Some(GRAB_LABEL));
                }
            }
        }
    }

    fn show_banner(&mut self, text: &str, class: &str, until: f64) {
        if let Some(banner) = &self.banner {
            banner.set_text_content(Some(text));
            banner.set_class_name(class);
            self.banner_until = until;
        }
    }

    /// Rebuild the caught list: one link per prize, opening in a new tab
    fn render_caught(&self, caught: &CaughtCollection) {
        self.caught_display.set_inner_html("");

        if caught.is_empty() {
            if let Ok(p) = self.document.create_element("p") {
                p.set_class_name("empty");
                p.set_text_content(Some(EMPTY_CAUGHT_TEXT));
                let _ = self.caught_display.append_child(&p);
            }
            return;
        }

        for def in caught.iter() {
            let Ok(entry) = self.document.create_element("a") else {
                continue;
            };
            entry.set_class_name("caught-prize");
            let _ = entry.set_attribute("href", &def.link);
            let _ = entry.set_attribute("target", "_blank");
            let _ = entry.set_attribute("rel", "noopener noreferrer");

            if let (Ok(glyph), Ok(label)) = (
                self.document.create_element("span"),
                self.document.create_element("div"),
            ) {
                glyph.set_class_name("glyph");
                glyph.set_text_content(Some(&def.emoji));
                label.set_class_name("label");
                label.set_text_content(Some(&def.label));
                let _ = entry.append_child(&glyph);
                let _ = entry.append_child(&label);
            }

            let _ = self.caught_display.append_child(&entry);
        }
    }
}

fn html_by_id(document: &Document, id: &str) -> Option<HtmlElement> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::error!("Missing #{} element", id);
    }
    el?.dyn_into::<HtmlElement>().ok()
}
