use std::time::Duration;

use dioxus::prelude::*;

use crate::{
    clock::{face::ClockFace, mode::ClockMode},
    hooks::{interval::use_interval, persistent::use_persistent},
};

const CLOCK_MODE_KEY: &str = "clock_mode";

#[component]
pub fn ClockComponent() -> Element {
    let mut now = use_signal(chrono::Local::now);
    let mut mode = use_persistent(CLOCK_MODE_KEY, ClockMode::default);

    use_interval(Duration::from_secs(1), move || now.set(chrono::Local::now()));

    let face = ClockFace::new(now().time(), mode.get());

    rsx! {
        div {
            class: "flex relative select-none",
            onclick: move |_| mode.set(mode.get().toggled()),

            span {
                class: "text-5xl",
                "{face.hours}:{face.minutes}"
            }
            "\u{a0}"
            {face.meridiem.map(|meridiem| rsx! {
                span {
                    class: "absolute right-0 text-xl -mt-3 -mr-6",
                    "{meridiem}"
                }
            })}
        }
    }
}
