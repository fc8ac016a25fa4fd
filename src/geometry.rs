/// Collision shapes.  Overlap tests are strict: shapes that only share an
/// edge do not collide.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Rect { x, y, w, h }
    }

    pub fn right(&self) -> i32 {
        self.x + self.w
    }

    pub fn bottom(&self) -> i32 {
        self.y + self.h
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    fn corners(&self) -> [(i32, i32); 4] {
        [
            (self.x, self.y),
            (self.right(), self.y),
            (self.right(), self.bottom()),
            (self.x, self.bottom()),
        ]
    }
}

/// A filled triangle given by its three vertices.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Triangle {
    pub points: [(i32, i32); 3],
}

impl Triangle {
    pub const fn new(a: (i32, i32), b: (i32, i32), c: (i32, i32)) -> Self {
        Triangle { points: [a, b, c] }
    }

    /// Separating-axis test against an axis-aligned box.  Candidate axes are
    /// the two box axes plus the normal of every triangle edge.
    pub fn intersects_rect(&self, rect: &Rect) -> bool {
        let corners = rect.corners();

        let mut axes: Vec<(i64, i64)> = vec![(1, 0), (0, 1)];
        for i in 0..3 {
            let (ax, ay) = self.points[i];
            let (bx, by) = self.points[(i + 1) % 3];
            let normal = (-(by - ay) as i64, (bx - ax) as i64);
            if normal != (0, 0) {
                axes.push(normal);
            }
        }

        axes.iter().all(|&axis| {
            let (tri_min, tri_max) = project(&self.points, axis);
            let (box_min, box_max) = project(&corners, axis);
            tri_max > box_min && box_max > tri_min
        })
    }
}

fn project(points: &[(i32, i32)], (nx, ny): (i64, i64)) -> (i64, i64) {
    points
        .iter()
        .map(|&(x, y)| x as i64 * nx + y as i64 * ny)
        .fold((i64::MAX, i64::MIN), |(lo, hi), d| (lo.min(d), hi.max(d)))
}
