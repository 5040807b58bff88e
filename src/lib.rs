pub mod app;
pub mod draft;
pub mod generate;
pub mod timer;
pub mod toast;
pub mod validate;

use app::App;

/// Mounts the generator form UI onto the document body.
pub fn run() {
    console_error_panic_hook::set_once();
    yew::Renderer::<App>::new().render();
}
