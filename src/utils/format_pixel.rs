use image::Rgba;

pub fn format_pixel(Rgba([r, g, b, a]): Rgba<u8>) -> String {
    format!("({}, {}, {}, {})", r, g, b, a)
}
