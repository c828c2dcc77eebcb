use nasa_wallpaper::layout::{self, TextBoxStyle};
use nasa_wallpaper::{colours, Canvas, Font, Px, Rect};

fn main() {
    // pass the path of any TrueType / OpenType font
    let font_path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "arial.ttf".to_string());
    let font = Font::load_from_disk(&font_path).expect("can load font");

    let mut canvas = Canvas::new(800, 600, colours::BLACK).expect("can create canvas");
    let bbox = Rect::new(50, 50, 750, 550);
    let style = TextBoxStyle {
        padding: Px(20.0),
        ..Default::default()
    };

    let lines = layout::wrap_and_render(
        &mut canvas,
        &lipsum::lipsum(300),
        &font.sized(Px(22.0)),
        bbox,
        &style,
    )
    .expect("can lay out text");
    println!("drew {lines} lines");

    canvas.save("text-box.jpg").expect("can save canvas");
}
