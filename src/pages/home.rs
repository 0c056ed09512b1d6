use dioxus::prelude::*;

use crate::components::clock::ClockComponent;

#[component]
pub fn HomePage() -> Element {
    rsx! {
        document::Title { "Jergus Lejko" }

        div {
            class: "h-screen px-20 py-16",

            div {
                class: "flex flex-col justify-between w-full h-full border-b-2 border-gray-300",

                div {
                    class: "flex justify-end",

                    ClockComponent {}
                }
                div {
                    class: "flex flex-col md:flex-row md:items-end justify-between py-10",

                    div {
                        div {
                            class: "text-8xl",
                            "Hi, I'm Jergus."
                        }
                    }
                    div {
                        class: "text-2xl mt-8 md:mt-0 text-right",

                        a {
                            class: "inline-block w-36",
                            href: "#",
                            "Read story →"
                        }
                    }
                }
            }
        }
    }
}
