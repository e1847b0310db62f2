//! Claw Machine entry point
//!
//! Handles platform-specific initialization and runs the frame loop.

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;

#[cfg(target_arch = "wasm32")]
mod wasm_game {
    use std::cell::RefCell;
    use std::rc::Rc;
    use wasm_bindgen::prelude::*;

    use claw_machine::platform::{self, dom::DomView};
    use claw_machine::sim::{ClawMachine, SeededRandom, apply_input, tick};
    use claw_machine::{Input, PrizeCatalog, Tuning};

    /// Game instance holding all state
    struct Game {
        machine: ClawMachine<SeededRandom>,
        view: DomView,
    }

    impl Game {
        /// Feed one input to the machine and play its effects right away
        fn input(&mut self, input: Input) {
            let now = platform::now_ms();
            if !apply_input(&mut self.machine, input, now) {
                log::debug!("{:?} ignored, grab in progress", input);
            }
            self.flush_events(now);
        }

        /// One animation frame: re-measure, simulate, publish
        fn frame(&mut self, time: f64) {
            let area = self.view.measure_area();
            tick(&mut self.machine, area, time);
            self.flush_events(time);
            self.view.sync(&self.machine, time);
        }

        fn flush_events(&mut self, now: f64) {
            for event in self.machine.drain_events() {
                self.view.apply(&event, &self.machine.caught, now);
            }
        }
    }

    pub fn run() {
        console_error_panic_hook::set_once();
        console_log::init_with_level(log::Level::Info).expect("Failed to init logger");

        log::info!("Claw Machine starting...");

        let window = web_sys::window().expect("no window");
        let document = window.document().expect("no document");

        let Some(mut view) = DomView::new(document) else {
            log::error!("Page is missing the claw machine markup, not starting");
            return;
        };

        let tuning = Tuning::load();
        let catalog = PrizeCatalog::load();
        let seed = platform::session_seed();
        let machine = ClawMachine::new(&catalog, tuning, view.measure_area(), SeededRandom::new(seed));
        view.mount_prizes(&machine);

        log::info!("Machine initialized with seed: {}", seed);

        let game = Rc::new(RefCell::new(Game { machine, view }));

        setup_buttons(game.clone());
        setup_keyboard(game.clone());

        // Start frame loop
        request_animation_frame(game);

        log::info!("Claw Machine running!");
    }

    fn setup_buttons(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();

        for id in Input::BUTTON_IDS {
            let (Some(btn), Some(input)) = (document.get_element_by_id(id), Input::from_button_id(id))
            else {
                log::warn!("Button #{} not found", id);
                continue;
            };
            let game = game.clone();
            let closure = Closure::<dyn FnMut(_)>::new(move |_event: web_sys::MouseEvent| {
                game.borrow_mut().input(input);
            });
            let _ = btn.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
            closure.forget();
        }
    }

    fn setup_keyboard(game: Rc<RefCell<Game>>) {
        let document = web_sys::window().unwrap().document().unwrap();
        let closure = Closure::<dyn FnMut(_)>::new(move |event: web_sys::KeyboardEvent| {
            let Some(input) = Input::from_key(&event.key()) else {
                return;
            };
            // Space would scroll the page, Enter would re-click a focused button
            if input == Input::Grab {
                event.prevent_default();
            }
            game.borrow_mut().input(input);
        });
        let _ = document.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn request_animation_frame(game: Rc<RefCell<Game>>) {
        let window = web_sys::window().unwrap();
        let closure = Closure::once(move |time: f64| {
            game_loop(game, time);
        });
        let _ = window.request_animation_frame(closure.as_ref().unchecked_ref());
        closure.forget();
    }

    fn game_loop(game: Rc<RefCell<Game>>, time: f64) {
        game.borrow_mut().frame(time);
        request_animation_frame(game);
    }
}

#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(start)]
pub fn wasm_main() {
    wasm_game::run();
}

#[cfg(not(target_arch = "wasm32"))]
fn main() {
    env_logger::init();
    log::info!("Claw Machine (native) starting...");
    log::info!("Native mode is headless - run with `trunk serve` for the playable web version");

    headless_demo();
}

#[cfg(target_arch = "wasm32")]
fn main() {
    // WASM entry point is wasm_main, this is just to satisfy the compiler
}

/// Let the prizes settle, steer the claw over the first one and grab until it is caught
#[cfg(not(target_arch = "wasm32"))]
fn headless_demo() {
    use claw_machine::platform::session_seed;
    use claw_machine::sim::{ClawMachine, GameEvent, PlayArea, SeededRandom, apply_input, tick};
    use claw_machine::{Input, PrizeCatalog, Tuning};

    const FRAME_MS: f64 = 1000.0 / 60.0;
    const MAX_ATTEMPTS: u32 = 10;

    // Same bounds as the shipped page's 640x300 prize area
    let area = PlayArea::from_element_size(640.0, 300.0);
    let seed = session_seed();
    let tuning = Tuning::load();
    let mut machine = ClawMachine::new(&PrizeCatalog::load(), tuning, area, SeededRandom::new(seed));
    log::info!("Seed {}, area {}x{}", seed, area.width, area.height);

    let mut now = 0.0;
    let run_until = |machine: &mut ClawMachine<SeededRandom>, now: &mut f64, until: f64| {
        while *now < until {
            *now += FRAME_MS;
            tick(machine, area, *now);
        }
    };

    // Settle
    run_until(&mut machine, &mut now, 3000.0);

    for attempt in 1..=MAX_ATTEMPTS {
        let Some((_, target)) = machine.active_prizes().next() else {
            break;
        };
        let target_percent = target.center().x / area.width * 100.0;

        // Steer toward the prize
        let step = machine.tuning.claw_step;
        loop {
            let claw = machine.grab.claw().position;
            let input = if target_percent < claw - step / 2.0 {
                Input::MoveLeft
            } else if target_percent > claw + step / 2.0 {
                Input::MoveRight
            } else {
                break;
            };
            apply_input(&mut machine, input, now);
            if machine.grab.claw().position == claw {
                break; // pinned at a travel limit
            }
        }

        apply_input(&mut machine, Input::Grab, now);
        let until = now + machine.tuning.grab_cycle_ms() + FRAME_MS;
        run_until(&mut machine, &mut now, until);

        let caught = machine
            .drain_events()
            .iter()
            .any(|e| matches!(e, GameEvent::Caught { .. }));
        println!(
            "Attempt {}: claw at {:.0}% -> {}",
            attempt,
            machine.grab.claw().position,
            if caught { "CAUGHT" } else { "miss" }
        );
        if caught {
            break;
        }
    }

    // Let the reveal play out
    let until = now + machine.tuning.reveal_ms;
    run_until(&mut machine, &mut now, until);

    println!("Caught {} prize(s):", machine.caught.len());
    for def in machine.caught.iter() {
        println!("  {} {} <{}>", def.emoji, def.label, def.link);
    }
}
