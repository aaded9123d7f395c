//! Recorded-shape Lens pages and image fixtures shared by the test modules.

use std::io::Cursor;

use image::{Rgb, RgbImage};

pub fn wrap_data_array(data_array: &str) -> String {
    format!(
        concat!(
            "<!doctype html><html><head>",
            "<script nonce=\"n0nce\">AF_initDataCallback({{key: 'ds:0', hash: '1', data:[null], sideChannel: {{}}}});</script>",
            "<script nonce=\"n0nce\">AF_initDataCallback({{key: 'ds:1', hash: '2', data:{}, sideChannel: {{}}}});</script>",
            "</head><body></body></html>"
        ),
        data_array
    )
}

pub fn build_result_page(lines: &[&str]) -> String {
    let encoded_lines = serde_json::to_string(lines).expect("lines serialize to JSON");
    wrap_data_array(&format!(
        "[null,null,null,[null,null,null,null,[[{}],\"en\"]],[\"layout\"]]",
        encoded_lines
    ))
}

pub fn build_empty_result_page() -> String {
    wrap_data_array("[null,null,null,[null,null,null,null,[[]]],[\"layout\"]]")
}

pub fn encode_png(width: u32, height: u32, fill: [u8; 3]) -> Vec<u8> {
    let canvas = RgbImage::from_pixel(width, height, Rgb(fill));
    let mut bytes = Vec::new();
    canvas
        .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
        .expect("PNG encoding succeeds");
    bytes
}
