//! Cubefolio — cube-driven portfolio. Runs the cube_navigator app.

use bevy::prelude::*;
use cube_navigator::prelude::*;

fn main() {
    let _ = dotenvy::dotenv();
    let (sink, updates) = init_navigation_channel();

    // Host side of the navigation feed: log clicks and section changes.
    std::thread::spawn(move || {
        for update in updates {
            match update {
                NavUpdate::FaceClicked(face) => eprintln!("cubefolio: face clicked: {face:?}"),
                NavUpdate::SectionChanged(section) => {
                    eprintln!("cubefolio: section changed: {section:?}")
                }
            }
        }
    });

    CubeNavigatorBuilder::new()
        .window_title("Cubefolio")
        .clear_color(Color::srgb(0.06, 0.06, 0.09))
        .navigation_sink(sink)
        .build()
        .run();
}
