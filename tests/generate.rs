//! End-to-end: compose the default backdrop, encode it, write it to disk,
//! and validate the file the way a PNG consumer would see it.

use dmg_background::backdrop::Backdrop;
use dmg_background::config::BackdropConfig;
use dmg_background::display::{PixelBuffer, Rgba};
use dmg_background::png;

#[test]
fn generated_file_is_a_valid_png_of_the_declared_size() {
    let dir = tempfile::tempdir().expect("temp dir");
    let out = dir.path().join("nested").join("dmg-background.png");

    let config = BackdropConfig::default();
    let (width, height) = (config.width, config.height);
    let backdrop = Backdrop::new(config);
    let mut buffer = PixelBuffer::with_size(width, height);
    backdrop.render(&mut buffer);

    std::fs::create_dir_all(out.parent().unwrap()).expect("create output dir");
    std::fs::write(&out, png::encode(width, height, buffer.as_bytes())).expect("write png");

    let bytes = std::fs::read(&out).expect("read back");
    assert!(!bytes.is_empty());

    // Canonical PNG signature
    assert_eq!(&bytes[..8], &[0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A]);

    // IHDR is the first chunk; its payload starts at byte 16
    assert_eq!(&bytes[12..16], b"IHDR");
    let ihdr_width = u32::from_be_bytes(bytes[16..20].try_into().unwrap());
    let ihdr_height = u32::from_be_bytes(bytes[20..24].try_into().unwrap());
    assert_eq!((ihdr_width, ihdr_height), (660, 400));
}

#[test]
fn config_file_drives_the_composition() {
    let dir = tempfile::tempdir().expect("temp dir");
    let config_path = dir.path().join("backdrop.json");

    let config = BackdropConfig {
        gradient_top: Rgba::opaque(0, 0, 0),
        ..BackdropConfig::default()
    };
    config.save(&config_path).expect("save config");

    let loaded = BackdropConfig::load(&config_path).expect("load config");
    assert_eq!(loaded, config);

    let mut buffer = PixelBuffer::with_size(loaded.width, loaded.height);
    Backdrop::new(loaded).render(&mut buffer);
    assert_eq!(buffer.get_pixel(0, 0), Some(Rgba::opaque(0, 0, 0)));
}
