use super::*;

fn header_tokens(bytes: &[u8], n: usize) -> Vec<String> {
    let text = String::from_utf8_lossy(bytes);
    text.split_ascii_whitespace()
        .take(n)
        .map(str::to_string)
        .collect()
}

#[test]
fn rgb8_clamps_scales_and_drops_alpha() {
    let mut img = Image::new(2, 1).unwrap();
    img.pixel_mut(0, 0).copy_from_slice(&[1.5, -0.25, 0.5, 1.0]);
    img.pixel_mut(1, 0).copy_from_slice(&[0.0, 1.0, 0.999, 7.0]);

    assert_eq!(to_rgb8(&img), vec![255, 0, 127, 0, 255, 254]);
}

#[test]
fn ppm_has_p6_header_and_row_major_payload() {
    let mut img = Image::new(3, 2).unwrap();
    img.clear([1.0, 1.0, 1.0, 1.0]);
    img.pixel_mut(2, 1).copy_from_slice(&[1.0, 0.0, 0.0, 1.0]);

    let mut out = Vec::new();
    write_ppm(&img, &mut out).unwrap();

    assert_eq!(header_tokens(&out, 4), vec!["P6", "3", "2", "255"]);

    let payload = &out[out.len() - 3 * 2 * 3..];
    assert_eq!(&payload[..15], &[255u8; 15][..]);
    assert_eq!(&payload[15..], &[255, 0, 0]);
}

#[test]
fn save_image_writes_both_formats() {
    let dir = std::path::PathBuf::from("target").join("export_unit");
    std::fs::create_dir_all(&dir).unwrap();

    let mut img = Image::new(4, 4).unwrap();
    img.clear([0.25, 0.5, 0.75, 1.0]);

    for format in [ExportFormat::Ppm, ExportFormat::Png] {
        let path = dir.join(format!("frame.{}", format.extension()));
        let _ = std::fs::remove_file(&path);
        save_image(&img, &path, format).unwrap();
        let bytes = std::fs::read(&path).unwrap();
        match format {
            ExportFormat::Ppm => assert!(bytes.starts_with(b"P6")),
            ExportFormat::Png => assert!(bytes.starts_with(&[0x89, b'P', b'N', b'G'])),
        }
    }
}

#[test]
fn save_image_reports_missing_directory() {
    let img = Image::new(1, 1).unwrap();
    let path = std::path::Path::new("target/export_unit/does/not/exist/frame.ppm");
    let err = save_image(&img, path, ExportFormat::Ppm).unwrap_err();
    assert!(matches!(err, RenderError::Io { .. }));
}
