mod app;
mod component;

use app::App;

fn main() {
    dioxus::launch(App);
}
