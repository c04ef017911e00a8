use super::*;

#[test]
fn dimensions_reject_zero_sides() {
    assert!(Dimensions::new(0, 4).is_err());
    assert!(Dimensions::new(4, 0).is_err());
    assert!(Dimensions::new(1, 1).is_ok());
}

#[test]
fn halved_rounds_up_and_stops_at_one() {
    let d = Dimensions::new(5, 3).unwrap();
    assert_eq!(d.halved(), Dimensions { width: 3, height: 2 });
    assert_eq!(d.halved().halved(), Dimensions { width: 2, height: 1 });
    let unit = Dimensions::new(1, 1).unwrap();
    assert_eq!(unit.halved(), unit);
    assert!(unit.is_unit());
}

#[test]
fn rgba8_len_overflow_is_none() {
    let d = Dimensions {
        width: u32::MAX,
        height: u32::MAX,
    };
    assert!(d.rgba8_len().is_none());
    assert_eq!(Dimensions::new(3, 2).unwrap().rgba8_len(), Some(24));
    assert_eq!(Dimensions::new(3, 2).unwrap().pixel_count(), 6);
}

#[test]
fn hole_uses_configured_sentinel() {
    let c = Rgba8::hole(7);
    assert_eq!(c, Rgba8::new(0, 0, 0, 7));
    assert!(c.is_hole(7));
    assert!(!c.is_hole(0));
    assert!(!Rgba8::opaque(1, 2, 3).is_hole(0));
}

#[test]
fn array_conversions_keep_channel_order() {
    let c = Rgba8::from([1, 2, 3, 4]);
    assert_eq!(c.rgb(), [1, 2, 3]);
    assert_eq!(<[u8; 4]>::from(c), [1, 2, 3, 4]);
}
