use polytile_core::{PolygonKind, TilingConfiguration};
use polytile_render::{build_frame, Palette, RenderFrame, Rgba};

fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn palette() -> Palette {
    Palette::from_hex(&["#E63946", "#F1FAEE", "#A8DADC", "#457B9D"]).unwrap()
}

#[test]
fn every_kind_produces_tiles_inside_the_canvas() {
    init_logger();
    for kind in [
        PolygonKind::triangle(),
        PolygonKind::square(),
        PolygonKind::hexagon(),
        PolygonKind::octagon(),
        PolygonKind::rectangle(2.0),
    ] {
        let config = TilingConfiguration::builder()
            .kind(kind)
            .horizontal_target(8.0)
            .stagger(0.5)
            .canvas_size(320.0, 240.0)
            .build()
            .unwrap();
        let frame = build_frame(&config, &palette());
        assert!(!frame.tiles.is_empty(), "{} drew nothing", kind.name());
        assert_eq!(frame.kind_id, kind.id());
        for tile in &frame.tiles {
            assert_eq!(tile.vertices.len(), 2 * kind.sides());
            assert!(tile.color_index < 4);
            // visible tiles sit on or just around the canvas
            let mut xs = tile.vertices.iter().step_by(2);
            let mut ys = tile.vertices.iter().skip(1).step_by(2);
            assert!(xs.all(|&x| x.is_finite() && x > -100.0 && x < 420.0));
            assert!(ys.all(|&y| y.is_finite() && y > -100.0 && y < 340.0));
        }
    }
}

#[test]
fn resizing_the_canvas_rebuilds_the_frame() {
    init_logger();
    let small = TilingConfiguration::builder()
        .kind(PolygonKind::hexagon())
        .fixed_width(40.0)
        .canvas_size(200.0, 200.0)
        .build()
        .unwrap();
    let large = small.to_builder().canvas_size(400.0, 400.0).build().unwrap();
    let a = build_frame(&small, &palette());
    let b = build_frame(&large, &palette());
    assert!(b.tiles.len() > a.tiles.len());
    assert_eq!(b.canvas_width, 400.0);
}

#[test]
fn configuration_and_frame_survive_json() {
    init_logger();
    let json = r#"{
        "kind": { "kind": "Octagon", "initial_rotation": { "radians": 0.39269908169872414 } },
        "sizing": { "HorizontalTarget": 5.0 },
        "inter_tile_spacing": 1.0,
        "canvas_size": { "width": 150.0, "height": 90.0 }
    }"#;
    let config = TilingConfiguration::from_json(json).unwrap();
    let frame = build_frame(&config, &Palette::single(Rgba::rgb(10, 20, 30)));
    let parsed = RenderFrame::from_json(&frame.to_json().unwrap()).unwrap();
    assert_eq!(parsed.tiles.len(), frame.tiles.len());
    assert!(parsed.tiles.iter().all(|t| t.color == Rgba::rgb(10, 20, 30)));
}
