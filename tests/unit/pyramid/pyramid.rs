use super::*;
use crate::foundation::core::Rgba8;

fn gradient(width: u32, height: u32) -> PixelBuffer {
    let mut buf = PixelBuffer::new(width, height).unwrap();
    for y in 0..height {
        for x in 0..width {
            buf.set(x, y, Rgba8::new((x * 13) as u8, (y * 7) as u8, 99, 255));
        }
    }
    buf
}

#[test]
fn allocate_copies_level_zero_and_sizes_levels() {
    let input = gradient(11, 6);
    let pyr = Pyramid::allocate(&input, 5).unwrap();
    assert_eq!(pyr.len(), 5);
    assert_eq!(pyr.level(0).unwrap(), &input);
    let dims: Vec<(u32, u32)> = pyr.levels().iter().map(|l| (l.width(), l.height())).collect();
    assert_eq!(dims, vec![(11, 6), (6, 3), (3, 2), (2, 1), (1, 1)]);
}

#[test]
fn allocate_rejects_zero_and_absurd_levels() {
    assert!(Pyramid::allocate(&gradient(2, 2), 0).is_err());
    assert!(Pyramid::allocate(&gradient(2, 2), 1_000_000_000).is_err());
    assert_eq!(Pyramid::allocate(&gradient(2, 2), MAX_LEVELS).unwrap().len(), MAX_LEVELS);
}

#[test]
fn single_level_pyramid_is_a_no_op() {
    let mut input = gradient(3, 3);
    input.set(1, 1, Rgba8::hole(0));
    let mut pyr = Pyramid::allocate(&input, 1).unwrap();
    let opts = InpaintOpts::with_levels(1);
    pyr.analyze(&opts).unwrap();
    let tally = pyr.synthesize(&opts).unwrap();
    assert_eq!(tally, FillTally::default());
    assert_eq!(pyr.into_base(), input);
}

#[test]
fn analysis_never_touches_level_zero() {
    let mut input = gradient(8, 8);
    input.set(3, 3, Rgba8::hole(0));
    let mut pyr = Pyramid::allocate(&input, 4).unwrap();
    pyr.analyze(&InpaintOpts::with_levels(4)).unwrap();
    assert_eq!(pyr.level(0).unwrap(), &input);
    assert_eq!(pyr.level_holes(0), vec![1, 0, 0, 0]);
}

#[test]
fn synthesis_leaves_no_holes_when_top_is_filled() {
    let mut input = gradient(9, 7);
    for y in 2..5 {
        for x in 1..6 {
            input.set(x, y, Rgba8::hole(0));
        }
    }
    let opts = InpaintOpts::with_levels(5);
    let mut pyr = Pyramid::allocate(&input, opts.levels).unwrap();
    pyr.analyze(&opts).unwrap();
    let tally = pyr.synthesize(&opts).unwrap();
    assert_eq!(tally.unfilled, 0);
    assert!(pyr.level_holes(0).iter().all(|&h| h == 0));
}

#[test]
fn fully_masked_input_stays_masked_at_every_level() {
    let input = PixelBuffer::filled(6, 5, Rgba8::new(3, 4, 5, 0)).unwrap();
    let opts = InpaintOpts::with_levels(4);
    let mut pyr = Pyramid::allocate(&input, opts.levels).unwrap();
    pyr.analyze(&opts).unwrap();
    let tally = pyr.synthesize(&opts).unwrap();
    assert_eq!(tally.filled, 0);
    for level in pyr.levels() {
        assert_eq!(level.count_holes(0), u64::from(level.width() * level.height()));
    }
    assert_eq!(pyr.into_base(), input);
}

#[test]
fn top_level_holes_are_blended_and_lower_levels_end_valid() {
    let color = Rgba8::opaque(120, 60, 30);
    let mut input = PixelBuffer::filled(8, 8, color).unwrap();
    for y in 0..8 {
        for x in 0..6 {
            input.set(x, y, Rgba8::hole(0));
        }
    }
    let opts = InpaintOpts::with_levels(3);
    let mut pyr = Pyramid::allocate(&input, opts.levels).unwrap();
    pyr.analyze(&opts).unwrap();
    assert_eq!(pyr.level_holes(0), vec![48, 12, 2]);

    let tally = pyr.synthesize(&opts).unwrap();
    assert_eq!(tally, FillTally { filled: 60, unfilled: 0 });
    // The 2x2 top keeps its left column of holes; every finer level is fully valid.
    assert_eq!(pyr.level_holes(0), vec![0, 0, 2]);

    let level1 = pyr.level(1).unwrap();
    assert_eq!(level1.get(0, 2), Rgba8::opaque(0, 0, 0));
    assert_eq!(level1.get(1, 2), Rgba8::opaque(60, 30, 15));
    assert_eq!(level1.get(2, 2), color);

    let base = pyr.level(0).unwrap();
    let expected = [(0, 0, 0), (30, 15, 8), (60, 30, 15), (90, 45, 22), (120, 60, 30)];
    for (x, (r, g, b)) in expected.into_iter().enumerate() {
        assert_eq!(base.get(x as u32, 5), Rgba8::opaque(r, g, b), "x = {x}");
    }
    assert_eq!(base.get(7, 5), color);
}
