use plotpath::geom::{Extent, ScreenPoint};
use plotpath::render::voronoi;
use plotpath::{
    ChartProps, DataPoint, Domain, Interval, ScaleTransform, ShapeKind, calculate_path, parse_path,
};
use proptest::prelude::*;

fn data_strategy() -> impl Strategy<Value = Vec<DataPoint>> {
    proptest::collection::vec((-1_000.0f64..1_000.0, -1_000.0f64..1_000.0), 1..48)
        .prop_map(|pairs| pairs.into_iter().map(DataPoint::from).collect())
}

proptest! {
    #[test]
    fn inferred_domain_contains_zero_and_every_point(data in data_strategy()) {
        let domain = Domain::infer(&data);
        prop_assert!(domain.x.contains(0.0));
        prop_assert!(domain.y.contains(0.0));
        for point in &data {
            prop_assert!(domain.x.contains(point.x));
            prop_assert!(domain.y.contains(point.y));
        }
    }

    #[test]
    fn linear_scale_inverts(
        start in -1_000.0f64..1_000.0,
        span in 1.0f64..1_000.0,
        value in -2_000.0f64..2_000.0,
    ) {
        let scale = ScaleTransform::linear(
            Interval::new(start, start + span),
            Interval::new(400.0, 20.0),
        )
        .unwrap();
        let roundtrip = scale.invert(scale.apply(value));
        prop_assert!((roundtrip - value).abs() <= 1e-6 * value.abs().max(1.0));
    }

    #[test]
    fn linear_line_has_one_command_per_point(data in data_strategy()) {
        prop_assume!(data.len() >= 2);
        let props = ChartProps::builder().data(data.clone()).build();
        let path = calculate_path(&props, ShapeKind::Line, 0).unwrap();
        let commands = parse_path(&path).unwrap();
        prop_assert_eq!(commands.len(), data.len());
        prop_assert_eq!(commands[0].name, 'M');
        prop_assert!(commands[1..].iter().all(|c| c.name == 'L' && c.args.len() == 2));
    }

    #[test]
    fn linear_area_is_closed_around_both_edges(data in data_strategy()) {
        let props = ChartProps::builder().data(data.clone()).build();
        let path = calculate_path(&props, ShapeKind::Area, 0).unwrap();
        let commands = parse_path(&path).unwrap();
        prop_assert_eq!(commands.len(), 2 * data.len() + 1);
        prop_assert_eq!(commands.last().map(|c| c.name), Some('Z'));
    }

    #[test]
    fn voronoi_cell_contains_its_site(
        coords in proptest::collection::vec((1.0f64..99.0, 1.0f64..99.0), 1..16),
        pick in any::<prop::sample::Index>(),
    ) {
        let sites: Vec<ScreenPoint> = coords.iter().map(|&(x, y)| ScreenPoint::new(x, y)).collect();
        for (i, a) in sites.iter().enumerate() {
            for b in &sites[i + 1..] {
                prop_assume!((a.x - b.x).abs() > 1e-3 || (a.y - b.y).abs() > 1e-3);
            }
        }
        let extent = Extent::new(ScreenPoint::new(0.0, 0.0), ScreenPoint::new(100.0, 100.0));
        let index = pick.index(sites.len());
        let polygon = voronoi::cell(&sites, extent, index).unwrap();
        let site = sites[index];
        let n = polygon.len();
        let crosses: Vec<f64> = (0..n)
            .map(|i| {
                let a = polygon[i];
                let b = polygon[(i + 1) % n];
                (b.x - a.x) * (site.y - a.y) - (b.y - a.y) * (site.x - a.x)
            })
            .collect();
        let tolerance = 1e-6;
        prop_assert!(
            crosses.iter().all(|c| *c >= -tolerance) || crosses.iter().all(|c| *c <= tolerance)
        );
        let inflated = Extent::new(
            ScreenPoint::new(-tolerance, -tolerance),
            ScreenPoint::new(100.0 + tolerance, 100.0 + tolerance),
        );
        prop_assert!(polygon.iter().all(|vertex| inflated.contains(*vertex)));
    }
}
