use crate::math::{points_coincide, Point2, Rect, DEDUP_TOLERANCE};

/// Maximum endpoint moves before a segment is given up on.
const MAX_CLIP_ITERATIONS: usize = 20;

const INSIDE: u8 = 0;
const LEFT: u8 = 1;
const RIGHT: u8 = 2;
const BOTTOM: u8 = 4;
const TOP: u8 = 8;

/// Computes the Cohen–Sutherland outcode of `p` against `rect`.
fn outcode(p: &Point2, rect: &Rect) -> u8 {
    let mut code = INSIDE;
    if p.x < rect.x_min {
        code |= LEFT;
    } else if p.x > rect.x_max {
        code |= RIGHT;
    }
    if p.y < rect.y_min {
        code |= BOTTOM;
    } else if p.y > rect.y_max {
        code |= TOP;
    }
    code
}

/// Clips the segment `a → b` to `rect` (Cohen–Sutherland).
///
/// Returns the clipped endpoints in the original direction, or `None` when
/// the segment lies entirely outside.
#[must_use]
pub fn clip_segment_to_rect(a: Point2, b: Point2, rect: &Rect) -> Option<(Point2, Point2)> {
    let (mut p0, mut p1) = (a, b);
    let mut code0 = outcode(&p0, rect);
    let mut code1 = outcode(&p1, rect);

    for _ in 0..MAX_CLIP_ITERATIONS {
        if code0 | code1 == INSIDE {
            return Some((p0, p1));
        }
        if code0 & code1 != INSIDE {
            return None;
        }

        let code_out = if code0 != INSIDE { code0 } else { code1 };
        let d = p1 - p0;
        let moved = if code_out & TOP != 0 {
            Point2::new(p0.x + d.x * (rect.y_max - p0.y) / d.y, rect.y_max)
        } else if code_out & BOTTOM != 0 {
            Point2::new(p0.x + d.x * (rect.y_min - p0.y) / d.y, rect.y_min)
        } else if code_out & RIGHT != 0 {
            Point2::new(rect.x_max, p0.y + d.y * (rect.x_max - p0.x) / d.x)
        } else {
            Point2::new(rect.x_min, p0.y + d.y * (rect.x_min - p0.x) / d.x)
        };

        if code_out == code0 {
            p0 = moved;
            code0 = outcode(&p0, rect);
        } else {
            p1 = moved;
            code1 = outcode(&p1, rect);
        }
    }

    None
}

/// Clips a polyline to `rect`, returning the pieces that lie inside.
///
/// A polyline that leaves and re-enters the rectangle yields one piece per
/// visit. A piece is closed when a segment is rejected or when a clipped
/// segment does not start where the previous one ended (within
/// [`DEDUP_TOLERANCE`]). Pieces with fewer than 2 points are dropped.
#[must_use]
pub fn clip_polyline_to_rect(points: &[Point2], rect: &Rect) -> Vec<Vec<Point2>> {
    let mut pieces = Vec::new();
    if points.len() < 2 {
        return pieces;
    }

    let mut current: Vec<Point2> = Vec::new();

    for seg in points.windows(2) {
        match clip_segment_to_rect(seg[0], seg[1], rect) {
            Some((start, end)) => {
                match current.last() {
                    None => current.push(start),
                    Some(last) if !points_coincide(last, &start, DEDUP_TOLERANCE) => {
                        flush_piece(&mut pieces, &mut current);
                        current.push(start);
                    }
                    Some(_) => {}
                }
                current.push(end);
            }
            None => flush_piece(&mut pieces, &mut current),
        }
    }

    flush_piece(&mut pieces, &mut current);
    pieces
}

/// Moves `current` into `pieces` if it forms a line, and clears it.
fn flush_piece(pieces: &mut Vec<Vec<Point2>>, current: &mut Vec<Point2>) {
    let piece = std::mem::take(current);
    if piece.len() >= 2 {
        pieces.push(piece);
    }
}
