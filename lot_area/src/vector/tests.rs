/*
This file is part of the Building Aggregration Tool
Copyright (C) 2022 Novel-T

The Building Aggregration Tool is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, either version 3 of the License, or
(at your option) any later version.

This program is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with this program.  If not, see <http://www.gnu.org/licenses/>.
*/
use float_cmp::{ApproxEq, F64Margin};

use crate::units::{AreaUnit, SQUARE_FEET_PER_SQUARE_METER};
use crate::vector::projection::EARTH_RADIUS_M;
use crate::vector::ring::signed_planar_area;
use crate::vector::*;

const METERS_PER_FOOT: f64 = 0.3048;

/// Degrees of longitude (or latitude, close to the equator) spanning that many meters
fn degrees(meters: f64) -> f64 {
    (meters / EARTH_RADIUS_M).to_degrees()
}

/// Clockwise rectangle with its south west corner at (lon, lat)
fn rectangle_m(lon: f64, lat: f64, width_m: f64, height_m: f64) -> Ring {
    let w = degrees(width_m);
    let h = degrees(height_m);
    Ring::from_lon_lat(&[
        (lon, lat),
        (lon, lat + h),
        (lon + w, lat + h),
        (lon + w, lat),
        (lon, lat),
    ])
}

fn rectangle_ft(lon: f64, lat: f64, width_ft: f64, height_ft: f64) -> Ring {
    rectangle_m(lon, lat, width_ft * METERS_PER_FOOT, height_ft * METERS_PER_FOOT)
}

#[test]
fn test_square_near_equator() {
    for &side in &[10.0, 100.0, 250.0] {
        let polygon = Polygon::new(vec![rectangle_m(0.001, 0.001, side, side)]);
        let expected = side * side * SQUARE_FEET_PER_SQUARE_METER;

        let area = compute_area(&polygon).value().unwrap();
        assert!((area - expected).abs() <= 1.0, "side {} area {} expected {}", side, area, expected);
    }
}

#[test]
fn test_result_is_rounded() {
    let polygon = Polygon::new(vec![rectangle_m(0.001, 0.001, 100., 100.)]);
    assert_eq!(AreaResult::Available(107_639.), compute_area(&polygon));
}

#[test]
fn test_square_meters() {
    let polygon = Polygon::new(vec![rectangle_m(-0.002, 0.0005, 20., 30.)]);
    assert_eq!(AreaResult::Available(600.), compute_area_in(&polygon, AreaUnit::SquareMeters));
}

#[test]
fn test_mercator_inflates_away_from_equator() {
    //Same size in degrees, but much further north
    let equator = Polygon::new(vec![rectangle_m(0., 0., 50., 50.)]);
    let north = Polygon::new(vec![rectangle_m(0., 60., 50., 50.)]);

    let equator_area = compute_area(&equator).value().unwrap();
    let north_area = compute_area(&north).value().unwrap();

    //Only the north / south scale grows, sec(60) is 2
    let margin = F64Margin { epsilon: 0.01, ulps: 3 };
    assert!((north_area / equator_area).approx_eq(2.0, margin), "{}", north_area / equator_area);
}

#[test]
fn test_reversed_sole_ring() {
    let ring = rectangle_m(12.5, 41.9, 40., 25.);
    let reversed = ring.reversed();

    assert!(signed_planar_area(&ring) > 0.);
    assert!(signed_planar_area(&reversed) < 0.);
    let margin = F64Margin { epsilon: 1e-18, ulps: 4 };
    assert!((-signed_planar_area(&ring)).approx_eq(signed_planar_area(&reversed), margin));

    let forward_area = compute_area(&Polygon::new(vec![ring]));
    let reversed_area = compute_area(&Polygon::new(vec![reversed]));
    assert!(forward_area.is_available());
    assert_eq!(forward_area, reversed_area);
}

#[test]
fn test_explicit_closure_does_not_matter() {
    let closed = rectangle_m(0.01, 0.01, 30., 30.);
    let open = Ring::new(closed.open_points().to_vec());
    assert_eq!(5, closed.points().len());
    assert_eq!(4, open.points().len());

    assert_eq!(
        compute_area(&Polygon::new(vec![closed])),
        compute_area(&Polygon::new(vec![open]))
    );
}

#[test]
fn test_hole_is_subtracted() {
    let outer = rectangle_m(0.001, 0.001, 100., 100.);
    let hole = rectangle_m(0.0012, 0.0012, 20., 10.).reversed();

    let outer_only = compute_area(&Polygon::new(vec![outer.clone()])).value().unwrap();
    let with_hole = compute_area(&Polygon::new(vec![outer, hole])).value().unwrap();

    assert!(with_hole < outer_only);
    let expected = (100. * 100. - 20. * 10.) * SQUARE_FEET_PER_SQUARE_METER;
    assert!((with_hole - expected).abs() <= 1.0, "{} vs {}", with_hole, expected);
}

#[test]
fn test_hole_as_large_as_outer() {
    let outer = rectangle_m(0.001, 0.001, 100., 100.);
    let hole = outer.reversed();

    assert_eq!(AreaResult::Unavailable, compute_area(&Polygon::new(vec![outer, hole])));
}

#[test]
fn test_larger_ring_is_the_boundary() {
    //Winding of the enclosing ring wins, the small clockwise ring becomes the hole
    let inner = rectangle_m(0.001, 0.001, 10., 10.);
    let enclosing = rectangle_m(0.0009, 0.0009, 100., 100.).reversed();

    let area = compute_area(&Polygon::new(vec![inner, enclosing])).value().unwrap();
    let expected = (100. * 100. - 10. * 10.) * SQUARE_FEET_PER_SQUARE_METER;
    assert!((area - expected).abs() <= 1.0, "{} vs {}", area, expected);
}

#[test]
fn test_counter_clockwise_outer_with_hole() {
    //GeoJSON winding, outer counter clockwise and holes clockwise
    let outer = rectangle_m(0.001, 0.001, 100., 100.).reversed();
    let hole = rectangle_m(0.0012, 0.0012, 20., 10.);

    let clockwise = compute_area(&Polygon::new(vec![outer.reversed(), hole.reversed()]));
    let counter_clockwise = compute_area(&Polygon::new(vec![outer, hole]));

    assert!(counter_clockwise.is_available());
    assert_eq!(clockwise, counter_clockwise);
}

#[test]
fn test_same_orientation_rings_are_added() {
    let outer = rectangle_m(0.001, 0.001, 100., 100.);
    let inner = rectangle_m(0.0012, 0.0012, 20., 10.);
    let expected = (100. * 100. + 20. * 10.) * SQUARE_FEET_PER_SQUARE_METER;

    let clockwise = compute_area(&Polygon::new(vec![outer.clone(), inner.clone()]))
        .value().unwrap();
    assert!((clockwise - expected).abs() <= 1.0);

    let counter_clockwise = compute_area(&Polygon::new(vec![outer.reversed(), inner.reversed()]))
        .value().unwrap();
    assert!((counter_clockwise - expected).abs() <= 1.0);
}

#[test]
fn test_hole_listed_first() {
    //Position is only a convention, orientation decides
    let outer = rectangle_m(0.001, 0.001, 100., 100.);
    let hole = rectangle_m(0.0012, 0.0012, 20., 10.).reversed();

    let hole_first = compute_area(&Polygon::new(vec![hole.clone(), outer.clone()]));
    let hole_last = compute_area(&Polygon::new(vec![outer.clone(), hole.clone()]));

    assert!(hole_last.is_available());
    assert_eq!(hole_last, hole_first);

    let expected = (100. * 100. - 20. * 10.) * SQUARE_FEET_PER_SQUARE_METER;
    assert!((hole_first.value().unwrap() - expected).abs() <= 1.0);

    //Same with GeoJSON winding
    let geojson_hole_first = compute_area(&Polygon::new(vec![hole.reversed(), outer.reversed()]));
    assert_eq!(hole_last, geojson_hole_first);
}

#[test]
fn test_short_ring_contributes_nothing() {
    let outer = rectangle_m(0.001, 0.001, 100., 100.);
    let short = Ring::from_lon_lat(&[(0.0012, 0.0012), (0.0013, 0.0013)]);

    let outer_only = compute_area(&Polygon::new(vec![outer.clone()]));
    let with_short = compute_area(&Polygon::new(vec![outer, short.clone()]));
    assert_eq!(outer_only, with_short);

    //Malformed first ring does not set the winding
    let short_first = compute_area(&Polygon::new(vec![
        short,
        rectangle_m(0.001, 0.001, 100., 100.).reversed(),
    ]));
    assert_eq!(outer_only, short_first);
}

#[test]
fn test_degenerate_polygons() {
    assert_eq!(AreaResult::Unavailable, compute_area(&Polygon::default()));

    let collinear = Ring::from_lon_lat(&[(0., 0.), (0.001, 0.001), (0.002, 0.002)]);
    assert_eq!(AreaResult::Unavailable, compute_area(&Polygon::new(vec![collinear])));

    let not_finite = Ring::from_lon_lat(&[(0., 0.), (0., f64::NAN), (0.001, 0.001)]);
    assert_eq!(AreaResult::Unavailable, compute_area(&Polygon::new(vec![not_finite])));
}

#[test]
fn test_idempotent() {
    let polygon = Polygon::new(vec![
        rectangle_m(-122.4194, 37.7749, 35.5, 27.25),
        rectangle_m(-122.41935, 37.77495, 3., 4.).reversed(),
    ]);

    let first = compute_area(&polygon).value().unwrap();
    let second = compute_area(&polygon).value().unwrap();
    assert_eq!(first.to_bits(), second.to_bits());
    assert_eq!(net_area_m2(&polygon).to_bits(), net_area_m2(&polygon).to_bits());
}

#[test]
fn test_total_area_empty() {
    assert_eq!(AreaResult::Unavailable, compute_total_area(&[]));
    assert_eq!(AreaResult::Unavailable, sum_results(vec![]));
}

#[test]
fn test_total_area_skips_unavailable() {
    let polygons = vec![
        Polygon::new(vec![rectangle_ft(0.001, 0.001, 10., 10.)]),
        Polygon::new(vec![rectangle_ft(0.002, 0.001, 10., 20.)]),
        Polygon::new(vec![Ring::from_lon_lat(&[(0., 0.), (1., 1.)])]),
    ];

    assert_eq!(AreaResult::Available(100.), compute_area(&polygons[0]));
    assert_eq!(AreaResult::Available(200.), compute_area(&polygons[1]));
    assert_eq!(AreaResult::Unavailable, compute_area(&polygons[2]));

    assert_eq!(AreaResult::Available(300.), compute_total_area(&polygons));

    assert_eq!(
        AreaResult::Available(300.),
        sum_results(vec![
            AreaResult::Available(100.),
            AreaResult::Available(200.),
            AreaResult::Unavailable
        ])
    );
}

#[test]
fn test_total_area_all_unavailable() {
    let polygons = vec![Polygon::default(), Polygon::new(vec![Ring::default()])];
    assert_eq!(AreaResult::Unavailable, compute_total_area(&polygons));
}

#[test]
fn test_from_total() {
    assert_eq!(AreaResult::Available(11.), AreaResult::from_total(10.6));
    assert_eq!(AreaResult::Unavailable, AreaResult::from_total(0.));
    assert_eq!(AreaResult::Unavailable, AreaResult::from_total(0.2));
    assert_eq!(AreaResult::Unavailable, AreaResult::from_total(-5.));
    assert_eq!(AreaResult::Unavailable, AreaResult::from_total(f64::INFINITY));
    assert_eq!(AreaResult::Unavailable, AreaResult::from_total(f64::NAN));

    assert_eq!("11", AreaResult::Available(11.).to_string());
    assert_eq!("unavailable", AreaResult::Unavailable.to_string());
    assert_eq!(0., AreaResult::Unavailable.unwrap_or_zero());
}
