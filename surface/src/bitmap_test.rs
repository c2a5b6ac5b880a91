use super::*;

// =============================================================
// Construction
// =============================================================

#[test]
fn blank_has_requested_size() {
    let bmp = Bitmap::blank(45, 30);
    assert_eq!(bmp.width(), 45);
    assert_eq!(bmp.height(), 30);
    assert_eq!(bmp.as_rgba().len(), 45 * 30 * 4);
}

#[test]
fn blank_is_all_paper() {
    let bmp = Bitmap::blank(8, 8);
    assert!(bmp.is_blank());
    assert_eq!(bmp.ink_count(), 0);
    assert_eq!(bmp.get(0, 0), Some(PAPER));
    assert_eq!(bmp.get(7, 7), Some(PAPER));
}

#[test]
fn oversized_request_is_clamped() {
    let bmp = Bitmap::blank(u32::MAX, 2);
    assert_eq!(bmp.width(), MAX_LOGICAL_SIDE);
    assert_eq!(bmp.height(), 2);
    assert_eq!(bmp.as_rgba().len(), MAX_LOGICAL_SIDE as usize * 2 * 4);
}

#[test]
fn zero_sized_bitmap_is_trivially_blank() {
    let bmp = Bitmap::blank(0, 0);
    assert!(bmp.is_blank());
    assert!(bmp.as_rgba().is_empty());
    assert_eq!(bmp.get(0, 0), None);
}

// =============================================================
// Reads and writes
// =============================================================

#[test]
fn set_then_get() {
    let mut bmp = Bitmap::blank(4, 4);
    assert!(bmp.set(2, 1, INK));
    assert_eq!(bmp.get(2, 1), Some(INK));
    assert!(bmp.is_inked(2, 1));
    assert!(!bmp.is_inked(1, 2));
}

#[test]
fn set_reports_unchanged_pixel() {
    let mut bmp = Bitmap::blank(4, 4);
    assert!(bmp.set(0, 0, INK));
    assert!(!bmp.set(0, 0, INK));
    assert!(!bmp.set(1, 1, PAPER));
}

#[test]
fn writes_outside_are_clipped() {
    let mut bmp = Bitmap::blank(4, 4);
    assert!(!bmp.set(-1, 0, INK));
    assert!(!bmp.set(0, -1, INK));
    assert!(!bmp.set(4, 0, INK));
    assert!(!bmp.set(0, 4, INK));
    assert!(bmp.is_blank());
}

#[test]
fn reads_outside_are_none() {
    let bmp = Bitmap::blank(4, 4);
    assert_eq!(bmp.get(-1, 2), None);
    assert_eq!(bmp.get(2, 4), None);
    assert!(!bmp.is_inked(9, 9));
}

#[test]
fn pixels_are_row_major_rgba() {
    let mut bmp = Bitmap::blank(3, 2);
    bmp.set(1, 1, [10, 20, 30, 40]);
    let offset = (3 + 1) * 4;
    assert_eq!(&bmp.as_rgba()[offset..offset + 4], &[10, 20, 30, 40]);
}

// =============================================================
// Fill and counting
// =============================================================

#[test]
fn ink_count_tracks_writes() {
    let mut bmp = Bitmap::blank(5, 5);
    bmp.set(0, 0, INK);
    bmp.set(4, 4, INK);
    bmp.set(2, 3, INK);
    assert_eq!(bmp.ink_count(), 3);
    assert!(!bmp.is_blank());
}

#[test]
fn fill_resets_every_pixel() {
    let mut bmp = Bitmap::blank(5, 5);
    bmp.set(1, 1, INK);
    bmp.set(3, 2, [1, 2, 3, 4]);
    bmp.fill(PAPER);
    assert!(bmp.is_blank());
    assert_eq!(bmp, Bitmap::blank(5, 5));
}
