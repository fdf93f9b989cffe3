//! Decode-then-scale regression test
//!
//! Writes a nine-patch PNG, scales it through the facade entry points and
//! compares the result with scaling the in-memory source directly.

use ninepatch::io::write_image;
use ninepatch::{
    ImageFormat, NinePatch, NinePatchError, ResolutionMapping, ScalingRequest, scale_encoded,
    scale_file, scale_nine_patch, scale_to_png,
};
use ninepatch_test::{NinePatchBuilder, RegParams, regout_dir};

#[test]
fn scale_file_reg() {
    let mut rp = RegParams::new("scale_file");

    let src = NinePatchBuilder::new(24, 16)
        .stretch_x(8, 15)
        .stretch_y(6, 9)
        .build()
        .expect("build source");
    let path = format!("{}/scale_file_src.png", regout_dir());
    write_image(&src, &path, ImageFormat::Png).expect("write source");

    let req = ScalingRequest::new(25.0, 10.0, ResolutionMapping::QHD_TO_FHD_PORTRAIT);
    let direct = scale_nine_patch(&src, &req).expect("scale direct");
    let from_file = scale_file(&path, &req).expect("scale file");
    rp.compare_values(75.0, from_file.width() as f64, 0.0);
    rp.compare_values(30.0, from_file.height() as f64, 0.0);
    rp.compare_pix(&direct, &from_file);

    let bytes = std::fs::read(&path).expect("read back");
    let from_mem = scale_encoded(&bytes, &req).expect("scale bytes");
    rp.compare_pix(&direct, &from_mem);

    let png = scale_to_png(&bytes, &req).expect("scale to png");
    let decoded = ninepatch::io::read_image_mem(&png).expect("decode output");
    rp.compare_pix(&direct, &decoded);
    rp.write_pix_and_check(&decoded, ImageFormat::Png)
        .expect("check output");

    // One parse, several sizes.
    let patch = NinePatch::from_source(&src).expect("parse");
    for (w, h) in [(24, 16), (48, 16), (100, 40), (17, 12)] {
        let out = patch.render(w, h).expect("render");
        rp.compare_values(w as f64, out.width() as f64, 0.0);
        rp.compare_values(h as f64, out.height() as f64, 0.0);
    }

    let garbage = matches!(
        scale_encoded(b"definitely not an image", &req),
        Err(NinePatchError::Decode(_))
    );
    rp.compare_values(1.0, if garbage { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}
