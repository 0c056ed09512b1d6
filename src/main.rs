mod app;
mod clock;
mod components;
mod hooks;
mod pages;
mod router;
mod storage;

fn main() {
    dioxus::launch(app::App);
}
