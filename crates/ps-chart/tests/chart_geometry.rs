use ps_air::psychro::{dew_point, saturation_pressure};
use ps_chart::*;
use ps_comfort::ComfortRange;

fn salon() -> PlotPoint {
    PlotPoint {
        temperature: 22.0,
        relative_humidity: 50.0,
        dew_point: dew_point(22.0, 50.0),
        label: "Salon".to_string(),
        color: "#e91e63".to_string(),
    }
}

#[test]
fn saturation_curve_matches_psat_on_scaled_canvas() {
    let proj = ChartProjector::new(CanvasSize::new(515.0, 386.0).unwrap());
    let sat = rh_isopleths(&proj)
        .into_iter()
        .find(|l| l.is_saturation())
        .unwrap();
    for (i, p) in sat.points.iter().enumerate() {
        let t = -10.0 + i as f64;
        let y = proj.bottom_edge - saturation_pressure(t) / 4.0 * proj.chart_height;
        assert!((p.y - y).abs() < 1e-9);
    }
}

#[test]
fn resize_rebuilds_geometry() {
    let range = ComfortRange::default();
    let small = ChartScene::build(
        CanvasSize::for_container(440.0),
        &range,
        &[salon()],
        ChartOptions::default(),
    );
    let large = ChartScene::build(
        CanvasSize::for_container(1000.0),
        &range,
        &[salon()],
        ChartOptions::default(),
    );
    assert!(large.markers[0].marker.center.x > small.markers[0].marker.center.x);
    assert!(large.markers[0].marker.radius > small.markers[0].marker.radius);
}

#[test]
fn hover_through_css_scaled_view() {
    let size = CanvasSize::default();
    let scene = ChartScene::build(
        size,
        &ComfortRange::default(),
        &[salon()],
        ChartOptions::default(),
    );
    let center = scene.markers[0].marker.center;
    // Canvas displayed at half size, offset by (100, 40).
    let view = ViewRect {
        left: 100.0,
        top: 40.0,
        width: 400.0,
        height: 300.0,
    };
    let (client_x, client_y) = (100.0 + center.x / 2.0 + 2.0, 40.0 + center.y / 2.0);
    let pointer = pointer_to_canvas(client_x, client_y, &view, size).unwrap();
    assert_eq!(scene.hover(pointer), Some(0));
    let far = pointer_to_canvas(100.0, 40.0, &view, size).unwrap();
    assert_eq!(scene.hover(far), None);
}

#[test]
fn recorded_frame_serializes() {
    let scene = ChartScene::build(
        CanvasSize::default(),
        &ComfortRange::default(),
        &[salon()],
        ChartOptions::default(),
    );
    let mut surface = RecordingSurface::new(CanvasSize::default());
    scene.draw(&mut surface, &Palette::dark());
    let json = serde_json::to_string(&surface.commands).unwrap();
    assert!(json.contains("#121212"));
    let back: Vec<DrawCommand> = serde_json::from_str(&json).unwrap();
    assert_eq!(back.len(), surface.commands.len());
}

#[test]
fn every_isenthalp_point_is_on_grid() {
    let proj = ChartProjector::new(CanvasSize::default());
    for line in isenthalps(&proj) {
        let IsolineKind::Enthalpy { h } = line.kind else {
            panic!("expected isenthalp");
        };
        let states = find_isenthalp_states(f64::from(h));
        assert_eq!(states.len(), line.points.len());
        for (t, rh) in states {
            assert_eq!((t * 2.0).fract(), 0.0);
            assert_eq!(rh % 5.0, 0.0);
        }
    }
}
