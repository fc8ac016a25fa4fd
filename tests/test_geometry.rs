use galaxy_shooter::geometry::{Rect, Triangle};

#[test]
fn overlapping_rects_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(a.intersects(&Rect::new(5, 5, 10, 10)));
    assert!(a.intersects(&Rect::new(2, 2, 2, 2)));
    assert!(Rect::new(2, 2, 2, 2).intersects(&a));
}

#[test]
fn touching_rects_do_not_intersect() {
    let a = Rect::new(0, 0, 10, 10);
    assert!(!a.intersects(&Rect::new(10, 0, 5, 5)));
    assert!(!a.intersects(&Rect::new(0, 10, 5, 5)));
    assert!(!a.intersects(&Rect::new(20, 20, 5, 5)));
}

fn beam() -> Triangle {
    Triangle::new((400, 480), (380, 520), (420, 520))
}

#[test]
fn rect_straddling_triangle_base() {
    assert!(beam().intersects_rect(&Rect::new(390, 515, 20, 20)));
}

#[test]
fn rect_containing_whole_triangle() {
    assert!(beam().intersects_rect(&Rect::new(300, 400, 200, 200)));
}

#[test]
fn rect_inside_bounding_box_but_beside_slanted_edge() {
    // Top-left corner of the triangle's bounding box is empty space
    assert!(!beam().intersects_rect(&Rect::new(380, 480, 5, 5)));
    assert!(!beam().intersects_rect(&Rect::new(415, 480, 5, 5)));
}

#[test]
fn rect_touching_apex_only() {
    assert!(!beam().intersects_rect(&Rect::new(395, 470, 10, 10)));
}

#[test]
fn rect_far_away() {
    assert!(!beam().intersects_rect(&Rect::new(0, 0, 40, 40)));
}
