//! Nine-patch scale regression test
//!
//! Builds nine-patch sources in memory and checks output geometry and
//! pixel placement for the documented scenarios.

use ninepatch_core::{ImageFormat, PixelGrid, color};
use ninepatch_scale::{
    NinePatch, ResolutionMapping, ScaleError, ScalingRequest, StretchSegment, StretchWarning,
    composite, scale_nine_patch, scale_nine_patch_with_report,
};
use ninepatch_test::{NinePatchBuilder, RegParams, content_pixel};

#[test]
fn scale_reg() {
    let mut rp = RegParams::new("scale");

    // --- Test 1: 100x100 content, one stretch band [40,59] per axis -> 200x200 ---
    let src = NinePatchBuilder::new(100, 100)
        .stretch_x(40, 59)
        .stretch_y(40, 59)
        .build()
        .expect("build 100x100");
    let report =
        scale_nine_patch_with_report(&src, &ScalingRequest::pixels(200, 200)).expect("scale 200");
    rp.compare_sizes(&[40, 120, 40], &report.plan.columns.sizes);
    rp.compare_sizes(&[40, 120, 40], &report.plan.rows.sizes);
    rp.compare_values(0.0, report.plan.warnings.len() as f64, 0.0);
    let out = &report.output;
    rp.compare_values(200.0, out.width() as f64, 0.0);
    rp.compare_values(200.0, out.height() as f64, 0.0);
    // Corners are verbatim copies.
    rp.compare_values(content_pixel(0, 0) as f64, out.get_pixel(0, 0).unwrap() as f64, 0.0);
    rp.compare_values(
        content_pixel(99, 99) as f64,
        out.get_pixel(199, 199).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        content_pixel(39, 60) as f64,
        out.get_pixel(39, 160).unwrap() as f64,
        0.0,
    );
    // Stretch band: 20 source columns over 120 destination columns, 6 each.
    rp.compare_values(
        content_pixel(40, 0) as f64,
        out.get_pixel(45, 0).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        content_pixel(41, 0) as f64,
        out.get_pixel(46, 0).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        content_pixel(60, 0) as f64,
        out.get_pixel(160, 0).unwrap() as f64,
        0.0,
    );
    rp.write_pix_and_check(out, ImageFormat::Png)
        .expect("write scale 200");

    // --- Test 2: no markers, content 50 wide -> 80 ---
    let src = NinePatchBuilder::new(50, 10).build().expect("build 50x10");
    let report =
        scale_nine_patch_with_report(&src, &ScalingRequest::pixels(80, 10)).expect("scale 80");
    rp.compare_sizes(&[80], &report.plan.columns.sizes);
    rp.compare_sizes(&[10], &report.plan.rows.sizes);
    let no_markers = report.plan.warnings.iter().any(|w| {
        matches!(
            w,
            StretchWarning::NoMarkers {
                source_len: 50,
                target_len: 80,
                ..
            }
        )
    });
    rp.compare_values(1.0, if no_markers { 1.0 } else { 0.0 }, 0.0);

    // --- Test 3: 12x12 source, no markers, 10x10 raw target -> identical content ---
    let src = NinePatchBuilder::new(10, 10).build().expect("build 10x10");
    let out = scale_nine_patch(&src, &ScalingRequest::pixels(10, 10)).expect("scale identity");
    let content = src.remove_border(1).expect("strip border");
    rp.compare_pix(&content, &out);

    // --- Test 4: 2x2 source is rejected ---
    let tiny = PixelGrid::new(2, 2).expect("tiny");
    let rejected = matches!(
        scale_nine_patch(&tiny, &ScalingRequest::pixels(10, 10)),
        Err(ScaleError::InvalidInput { width: 2, height: 2 })
    );
    rp.compare_values(1.0, if rejected { 1.0 } else { 0.0 }, 0.0);

    // --- Test 5: translucent black is not a marker ---
    let src = NinePatchBuilder::new(10, 10)
        .stretch_x(3, 6)
        .marker_color(color::compose_rgba(0, 0, 0, 254))
        .build()
        .expect("build translucent");
    let patch = NinePatch::from_source(&src).expect("parse translucent");
    rp.compare_values(0.0, patch.markers().horizontal.len() as f64, 0.0);
    let src = NinePatchBuilder::new(10, 10)
        .stretch_x(3, 6)
        .build()
        .expect("build opaque");
    let patch = NinePatch::from_source(&src).expect("parse opaque");
    rp.compare_values(
        1.0,
        if patch.markers().horizontal == vec![StretchSegment::new(3, 6)] {
            1.0
        } else {
            0.0
        },
        0.0,
    );

    // --- Test 6: logical units with the 1440x2560 -> 1080x1920 mapping ---
    let src = NinePatchBuilder::new(20, 20)
        .stretch_x(5, 14)
        .stretch_y(5, 14)
        .build()
        .expect("build 20x20");
    let req = ScalingRequest::new(30.0, 15.0, ResolutionMapping::QHD_TO_FHD_PORTRAIT);
    let out = scale_nine_patch(&src, &req).expect("scale logical");
    rp.compare_values(90.0, out.width() as f64, 0.0);
    rp.compare_values(45.0, out.height() as f64, 0.0);
    eprintln!("  logical 30x15 -> {}x{}", out.width(), out.height());

    // --- Test 7: a solid source stays solid at any size ---
    let fill = color::compose_rgba(200, 40, 90, 255);
    let src = NinePatchBuilder::new(9, 7)
        .stretch_x(2, 6)
        .stretch_y(3, 3)
        .solid(fill)
        .build()
        .expect("build solid");
    let out = scale_nine_patch(&src, &ScalingRequest::pixels(37, 23)).expect("scale solid");
    let uniform = out.data().iter().all(|&p| p == fill);
    rp.compare_values(1.0, if uniform { 1.0 } else { 0.0 }, 0.0);

    assert!(rp.cleanup());
}

#[test]
fn scale_identity_reg() {
    let mut rp = RegParams::new("scale_identity");

    // Scaling to the content's own size is a pixel-exact copy for any layout.
    let layouts: [&[(u32, u32)]; 4] = [&[], &[(0, 0)], &[(2, 4), (9, 9)], &[(0, 11)]];
    for xs in layouts {
        for ys in layouts {
            let mut b = NinePatchBuilder::new(12, 12);
            for &(s, e) in xs {
                b = b.stretch_x(s, e);
            }
            for &(s, e) in ys {
                b = b.stretch_y(s, e);
            }
            let src = b.build().expect("build");
            let report = scale_nine_patch_with_report(&src, &ScalingRequest::pixels(12, 12))
                .expect("scale identity");
            rp.compare_values(0.0, report.plan.columns.correction as f64, 0.0);
            rp.compare_values(0.0, report.plan.rows.correction as f64, 0.0);
            let content = src.remove_border(1).expect("strip");
            rp.compare_pix(&content, &report.output);
        }
    }

    assert!(rp.cleanup());
}

#[test]
fn scale_degenerate_reg() {
    let mut rp = RegParams::new("scale_degenerate");

    // Target smaller than the fixed content: stretch collapses, last region shrinks.
    let src = NinePatchBuilder::new(100, 10)
        .stretch_x(40, 59)
        .build()
        .expect("build");
    let report = scale_nine_patch_with_report(&src, &ScalingRequest::pixels(60, 10))
        .expect("scale down");
    rp.compare_sizes(&[40, 0, 20], &report.plan.columns.sizes);
    rp.compare_values(60.0, report.output.width() as f64, 0.0);
    let kinds: Vec<_> = report
        .plan
        .warnings
        .iter()
        .map(|w| match w {
            StretchWarning::NoMarkers { .. } => 0.0,
            StretchWarning::ZeroStretchBudget { .. } => 1.0,
            StretchWarning::FixedRegionShrunk { .. } => 2.0,
        })
        .collect();
    rp.compare_values(2.0, kinds.len() as f64, 0.0);
    rp.compare_values(1.0, kinds[0], 0.0);
    rp.compare_values(2.0, kinds[1], 0.0);
    // Left fixed band intact; right band shows its first 20 source columns.
    rp.compare_values(
        content_pixel(39, 0) as f64,
        report.output.get_pixel(39, 0).unwrap() as f64,
        0.0,
    );
    let x = 40 + 9;
    let expected_src_x = 60 + (2 * 9 + 1) * 40 / (2 * 20);
    rp.compare_values(
        content_pixel(expected_src_x, 0) as f64,
        report.output.get_pixel(x, 0).unwrap() as f64,
        0.0,
    );

    // Far below: last region goes negative. It covers [40 - 30, 40) =
    // [10, 40), which starts at the output edge, so the left band fills
    // all 10 columns.
    let report = scale_nine_patch_with_report(&src, &ScalingRequest::pixels(10, 10))
        .expect("scale far down");
    rp.compare_sizes(&[40, 0, -30], &report.plan.columns.sizes);
    rp.compare_values(10.0, report.output.width() as f64, 0.0);
    rp.compare_values(
        content_pixel(9, 0) as f64,
        report.output.get_pixel(9, 0).unwrap() as f64,
        0.0,
    );

    // The same sizes on a wider canvas show where the negative region
    // lands: the 40-column right band squeezed into [10, 40), painted over
    // the left band.
    let patch = NinePatch::from_source(&src).expect("parse");
    let wide = composite(
        patch.content(),
        patch.regions(),
        &[40, 0, -30],
        &[10],
        40,
        10,
    )
    .expect("composite wide");
    rp.compare_values(
        content_pixel(9, 0) as f64,
        wide.get_pixel(9, 0).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        content_pixel(60, 0) as f64,
        wide.get_pixel(10, 0).unwrap() as f64,
        0.0,
    );
    rp.compare_values(
        content_pixel(99, 5) as f64,
        wide.get_pixel(39, 5).unwrap() as f64,
        0.0,
    );

    assert!(rp.cleanup());
}
