// SPDX-License-Identifier: Apache-2.0

use approx::abs_diff_eq;
use indexmap::IndexMap;
use padring::*;

fn floorplan(bondpad_margin: f64, iocell_margin: f64) -> FloorplanDimensions {
    FloorplanDimensions::new(
        Dimension::new(1000.0, 1000.0).unwrap(),
        SideMargins::uniform(bondpad_margin).unwrap(),
        SideMargins::uniform(iocell_margin).unwrap(),
        SideMargins::uniform(0.0).unwrap(),
    )
}

fn pins(names: &[&str]) -> Vec<Pin> {
    names.iter().map(|name| Pin::inout(name)).collect()
}

fn ring(
    floorplan: Option<FloorplanDimensions>,
    side: Side,
    items: Vec<PlacementItem>,
    pins: Vec<Pin>,
) -> PadRing {
    PadRing::new(floorplan, IndexMap::from([(side, items)]), pins, Attributes::new()).unwrap()
}

fn two_pad_ring(floorplan: FloorplanDimensions) -> PadRing {
    ring(
        Some(floorplan),
        Side::Top,
        vec![PlacementItem::pins(["a"]), PlacementItem::pins(["b"])],
        pins(&["a", "b"]),
    )
}

fn close(actual: Option<f64>, expected: f64) -> bool {
    actual.is_some_and(|actual| abs_diff_eq!(actual, expected, epsilon = 1e-9))
}

#[test]
fn two_pads_are_spaced_by_pitch() {
    let mut pad_ring = two_pad_ring(floorplan(0.0, 0.0));
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();

    let a = pad_ring.pad("a").unwrap();
    assert!(close(a.space(), 10.0));
    assert!(close(a.iocell_center_to_ring_edge(), 54.5));
    assert!(close(a.offset(), 44.5));
    assert!(close(a.bondpad_center_to_ring_edge(), 54.5));
    assert!(close(a.bondpad_space(), 0.0));

    let b = pad_ring.pad("b").unwrap();
    assert!(close(b.space(), 25.0));
    assert!(close(b.iocell_center_to_ring_edge(), 104.5));
    assert_eq!(b.offset(), None);
    assert!(close(b.bondpad_center_to_ring_edge(), 104.5));
    assert!(close(b.bondpad_space(), 30.0));
}

#[test]
fn margin_difference_shifts_bond_pads() {
    let mut pad_ring = two_pad_ring(floorplan(10.0, 60.0));
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();

    let a = pad_ring.pad("a").unwrap();
    let b = pad_ring.pad("b").unwrap();
    assert!(close(a.iocell_center_to_ring_edge(), 54.5));
    assert!(close(a.offset(), 94.5));
    assert!(close(a.bondpad_center_to_ring_edge(), 104.5));
    assert!(close(b.iocell_center_to_ring_edge(), 104.5));
    assert!(close(b.bondpad_center_to_ring_edge(), 154.5));
    assert!(close(b.bondpad_space(), 30.0));
}

#[test]
fn spacing_twice_gives_the_same_result() {
    let mut pad_ring = two_pad_ring(floorplan(0.0, 0.0));
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();
    let centers = |pad_ring: &PadRing| -> Vec<Option<f64>> {
        pad_ring
            .pad_list()
            .iter()
            .map(Pad::iocell_center_to_ring_edge)
            .collect()
    };
    let first = centers(&pad_ring);
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();
    let second = centers(&pad_ring);
    assert_eq!(first, second);
}

#[test]
fn pad_without_bondpad_is_packed() {
    let cut = Pad::physical("prcut", Cell::new("PRCUT", 5.0, 32.0).unwrap(), None);
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Top,
        vec![PlacementItem::pins(["a"]), cut.into(), PlacementItem::pins(["b"])],
        pins(&["a", "b"]),
    );
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();

    let cut = pad_ring.pad("prcut").unwrap();
    assert!(close(cut.space(), 0.0));
    assert!(close(cut.iocell_center_to_ring_edge(), 69.5));
    assert_eq!(cut.bondpad_space(), None);

    let b = pad_ring.pad("b").unwrap();
    assert!(close(b.space(), 20.0));
    assert!(close(b.iocell_center_to_ring_edge(), 104.5));
    assert!(close(b.bondpad_space(), 30.0));
    pad_ring.check_overlaps().unwrap();
}

#[test]
fn fixed_center_is_kept() {
    let fixed = Pad::logical(vec![Pin::inout("b")]).with_iocell_center(200.0);
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Left,
        vec![PlacementItem::pins(["a"]), fixed.into(), PlacementItem::pins(["c"])],
        pins(&["a", "b", "c"]),
    );
    pad_ring.space_side_by_pitch(Side::Left, 10.0, 50.0).unwrap();

    let b = pad_ring.pad("b").unwrap();
    assert!(close(b.iocell_center_to_ring_edge(), 200.0));
    assert!(close(b.space(), 120.5));
    assert_eq!(b.fixed_iocell_center(), Some(200.0));

    let c = pad_ring.pad("c").unwrap();
    assert!(close(c.space(), 25.0));
    assert!(close(c.iocell_center_to_ring_edge(), 250.0));
}

#[test]
fn fixed_center_on_first_pad_sets_its_space() {
    let fixed = Pad::logical(vec![Pin::inout("a")]).with_iocell_center(100.0);
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Bottom,
        vec![fixed.into(), PlacementItem::pins(["b"])],
        pins(&["a", "b"]),
    );
    pad_ring.space_side_by_pitch(Side::Bottom, 10.0, 50.0).unwrap();

    let a = pad_ring.pad("a").unwrap();
    assert!(close(a.space(), 55.5));
    assert!(close(a.iocell_center_to_ring_edge(), 100.0));
    assert!(close(a.offset(), 90.0));
    assert!(close(a.bondpad_center_to_ring_edge(), 100.0));
}

#[test]
fn corner_is_anchored_at_side_start() {
    let corner = Pad::corner("corner_tl", Cell::new("CORNER", 32.0, 32.0).unwrap());
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Top,
        vec![corner.into(), PlacementItem::pins(["a"])],
        pins(&["a"]),
    );
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0).unwrap();

    let corner = pad_ring.pad("corner_tl").unwrap();
    assert!(close(corner.iocell_center_to_ring_edge(), 16.0));
    assert!(close(corner.space(), 0.0));
    assert!(close(corner.offset(), 0.0));
    assert_eq!(corner.bondpad_center_to_ring_edge(), None);
    assert!(close(pad_ring.pad("a").unwrap().iocell_center_to_ring_edge(), 54.5));
    pad_ring.check_overlaps().unwrap();
}

#[test]
fn corner_footprint_follows_the_adjoining_iocell() {
    let corner = Pad::corner("c", Cell::new("CORNER", 40.0, 40.0).unwrap());
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Top,
        vec![corner.into(), PlacementItem::pins(["a"])],
        pins(&["a"]),
    );
    pad_ring.space_side_by_pitch(Side::Top, 2.0, 50.0).unwrap();

    assert!(close(pad_ring.pad("c").unwrap().iocell_center_to_ring_edge(), 16.0));
    let a = pad_ring.pad("a").unwrap();
    assert!(close(a.iocell_center_to_ring_edge(), 46.5));
    assert!(close(a.space(), 2.0));
    pad_ring.check_overlaps().unwrap();
}

#[test]
fn missing_floorplan_is_an_error() {
    let mut pad_ring = ring(None, Side::Top, vec![PlacementItem::pins(["a"])], pins(&["a"]));
    assert_eq!(
        pad_ring.space_side_by_pitch(Side::Top, 10.0, 50.0),
        Err(PadRingError::MissingFloorplan(Side::Top))
    );
}

#[test]
fn first_pad_needs_a_bondpad() {
    let cut = Pad::physical("prcut", Cell::new("PRCUT", 5.0, 32.0).unwrap(), None);
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Right,
        vec![cut.into(), PlacementItem::pins(["a"])],
        pins(&["a"]),
    );
    assert_eq!(
        pad_ring.space_side_by_pitch(Side::Right, 10.0, 50.0),
        Err(PadRingError::MissingFirstBondpad {
            side: Side::Right,
            pad: "prcut".to_string(),
        })
    );
}

#[test]
fn empty_side_is_skipped() {
    let _ = env_logger::builder().is_test(true).try_init();
    let mut pad_ring = ring(
        Some(floorplan(0.0, 0.0)),
        Side::Top,
        vec![PlacementItem::pins(["a"])],
        pins(&["a"]),
    );
    pad_ring.space_side_by_pitch(Side::Bottom, 10.0, 50.0).unwrap();
    assert_eq!(pad_ring.pad("a").unwrap().space(), None);
}

#[test]
fn whole_ring_is_spaced() {
    let mapping = IndexMap::from([
        (Side::Top, vec![PlacementItem::pins(["a"]), PlacementItem::pins(["b"])]),
        (Side::Left, vec![PlacementItem::pins(["c"])]),
    ]);
    let mut pad_ring = PadRing::new(
        Some(floorplan(0.0, 0.0)),
        mapping,
        pins(&["a", "b", "c"]),
        Attributes::new(),
    )
    .unwrap();
    pad_ring
        .space_ring_by_pitch(&SpacingOptions::new(10.0, 50.0))
        .unwrap();

    assert!(pad_ring.pad_list().iter().all(|pad| pad.space().is_some()));
    assert!(close(pad_ring.pad("c").unwrap().iocell_center_to_ring_edge(), 54.5));
    pad_ring.check_overlaps().unwrap();
}

#[test]
fn tight_pitch_overlaps() {
    let mut pad_ring = two_pad_ring(floorplan(0.0, 0.0));
    pad_ring.space_side_by_pitch(Side::Top, 10.0, 20.0).unwrap();
    assert_eq!(
        pad_ring.check_overlaps(),
        Err(PadRingError::OverlappingPads {
            side: Side::Top,
            first: "a".to_string(),
            second: "b".to_string(),
        })
    );

    pad_ring.space_side_by_pitch(Side::Top, 10.0, 25.0).unwrap();
    pad_ring.check_overlaps().unwrap();
}
