use fltk::{app, group::Flex, prelude::*, tree::Tree, window::Window};

use rusume::app::AppSettings;

fn main() {
    let settings = AppSettings::load();

    let app = app::App::default();
    let mut wind = Window::new(
        100,
        100,
        settings.window_width,
        settings.window_height,
        "Rusume",
    );

    let mut flex = Flex::new(0, 0, settings.window_width, settings.window_height, None);
    flex.set_type(fltk::group::FlexType::Column);

    // Unpopulated for now; the section/record hierarchy will hang off this.
    let mut tree = Tree::new(0, 0, 0, 0, "");
    tree.set_show_root(false);

    flex.end();
    wind.resizable(&flex);
    wind.end();
    wind.show();

    app.run().unwrap();
}
