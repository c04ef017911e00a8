use super::*;

fn dims(width: u32, height: u32) -> Dimensions {
    Dimensions::new(width, height).unwrap()
}

#[test]
fn dimension_law_matches_ceil_division() {
    let base = dims(37, 10);
    let got = level_dimensions(base, 9);
    assert_eq!(got.len(), 9);
    for (i, d) in got.iter().enumerate() {
        let p = 1u32 << i;
        assert_eq!(d.width, base.width.div_ceil(p), "level {i} width");
        assert_eq!(d.height, base.height.div_ceil(p), "level {i} height");
    }
}

#[test]
fn extra_levels_collapse_to_unit() {
    let got = level_dimensions(dims(4, 4), 6);
    let pairs: Vec<(u32, u32)> = got.iter().map(|d| (d.width, d.height)).collect();
    assert_eq!(pairs, vec![(4, 4), (2, 2), (1, 1), (1, 1), (1, 1), (1, 1)]);
}

#[test]
fn huge_level_counts_do_not_overflow() {
    let got = level_dimensions(dims(u32::MAX, 3), 70);
    assert_eq!(got.len(), 70);
    assert!(got[69].is_unit());
}

#[test]
fn levels_to_unit_counts_level_zero() {
    assert_eq!(levels_to_unit(dims(1, 1)), 1);
    assert_eq!(levels_to_unit(dims(2, 1)), 2);
    assert_eq!(levels_to_unit(dims(16, 16)), 5);
    assert_eq!(levels_to_unit(dims(17, 3)), 6);
}
