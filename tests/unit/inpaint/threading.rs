use super::*;

fn stamp_rows(exec: &RowExecutor) -> (PixelBuffer, u64) {
    let mut buf = PixelBuffer::new(3, 5).unwrap();
    let total = exec.for_each_row(&mut buf, |y, row| {
        for px in row.chunks_exact_mut(4) {
            px.copy_from_slice(&[y as u8, 0, 0, 255]);
        }
        u64::from(y)
    });
    (buf, total)
}

#[test]
fn sequential_visits_every_row_once() {
    let (buf, total) = stamp_rows(&RowExecutor::sequential());
    assert_eq!(total, 1 + 2 + 3 + 4);
    for y in 0..5 {
        assert_eq!(buf.get(2, y).r, y as u8);
    }
}

#[test]
fn parallel_matches_sequential() {
    let exec = RowExecutor::new(&InpaintThreading {
        parallel: true,
        threads: Some(2),
    })
    .unwrap();
    assert!(exec.is_parallel());
    assert_eq!(stamp_rows(&exec), stamp_rows(&RowExecutor::sequential()));
}

#[test]
fn non_parallel_threading_builds_no_pool() {
    let exec = RowExecutor::new(&InpaintThreading {
        parallel: false,
        threads: Some(8),
    })
    .unwrap();
    assert!(!exec.is_parallel());
}
