//! Component labeling and Moore-neighbor boundary tracing.
//!
//! A raster scan seeds a stack-based flood fill for every unvisited
//! foreground pixel, then the component's outer boundary is walked clockwise
//! starting from that seed. The seed is the component's topmost-leftmost
//! pixel by construction, which fixes the discovery order of contours.

use crate::image::Mask;

/// Clockwise Moore neighborhood starting West, image coordinates (y down).
const MOORE: [(isize, isize); 8] = [
    (-1, 0),
    (-1, -1),
    (0, -1),
    (1, -1),
    (1, 0),
    (1, 1),
    (0, 1),
    (-1, 1),
];

const NEIGH_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Outer boundary of one connected component.
#[derive(Clone, Debug)]
pub struct Contour {
    /// Boundary pixel centers in trace order (clockwise).
    pub points: Vec<[f32; 2]>,
    /// Topmost-leftmost pixel of the component (the trace start).
    pub start: (usize, usize),
}

/// Trace the outer boundary of every 8-connected foreground component,
/// in raster order of the component seeds.
pub fn find_external_contours(mask: &Mask) -> Vec<Contour> {
    let w = mask.w;
    let h = mask.h;
    let mut labeled = vec![false; w * h];
    let mut stack: Vec<usize> = Vec::with_capacity(64);
    let mut contours = Vec::new();

    for idx in 0..w * h {
        if labeled[idx] || mask.data[idx] == 0 {
            continue;
        }
        // Mark the whole component so later raster positions skip it.
        stack.clear();
        stack.push(idx);
        labeled[idx] = true;
        while let Some(p) = stack.pop() {
            let x = p % w;
            let y = p / w;
            for (dx, dy) in NEIGH_OFFSETS {
                let xn = x as isize + dx;
                let yn = y as isize + dy;
                if xn < 0 || yn < 0 || xn >= w as isize || yn >= h as isize {
                    continue;
                }
                let n = yn as usize * w + xn as usize;
                if !labeled[n] && mask.data[n] != 0 {
                    labeled[n] = true;
                    stack.push(n);
                }
            }
        }

        let start = (idx % w, idx / w);
        contours.push(Contour {
            points: trace_boundary(mask, start),
            start,
        });
    }

    contours
}

/// Walk the outer boundary clockwise from `start`, whose West and North
/// neighbors are background by the raster-seed invariant.
fn trace_boundary(mask: &Mask, start: (usize, usize)) -> Vec<[f32; 2]> {
    let mut points = vec![[start.0 as f32, start.1 as f32]];
    let mut current = start;
    // Direction from the current pixel to its backtrack (background) cell.
    let mut backtrack_dir = 0usize;
    let mut first_move: Option<usize> = None;
    let limit = 4 * mask.w * mask.h + 8;
    let mut steps = 0usize;

    loop {
        // The cell at `backtrack_dir` is background, so scanning starts one
        // past it and the previously-examined cell is always well defined.
        let mut found = None;
        for i in 1..=8 {
            let d = (backtrack_dir + i) % 8;
            let nx = current.0 as isize + MOORE[d].0;
            let ny = current.1 as isize + MOORE[d].1;
            if nx < 0 || ny < 0 || nx >= mask.w as isize || ny >= mask.h as isize {
                continue;
            }
            if !mask.is_set(nx as usize, ny as usize) {
                continue;
            }
            let prev_d = (backtrack_dir + i - 1) % 8;
            let prev = (
                current.0 as isize + MOORE[prev_d].0,
                current.1 as isize + MOORE[prev_d].1,
            );
            found = Some((d, (nx as usize, ny as usize), prev));
            break;
        }

        let (d, next, prev) = match found {
            Some(f) => f,
            None => break, // isolated pixel
        };
        if current == start {
            match first_move {
                // Leaving the start along the first direction again means the
                // lap is closed.
                Some(m) if m == d => break,
                Some(_) => {}
                None => first_move = Some(d),
            }
        }

        backtrack_dir = direction_between(next, prev);
        current = next;
        if current != start {
            points.push([current.0 as f32, current.1 as f32]);
        }
        steps += 1;
        if steps > limit {
            break;
        }
    }

    points
}

/// Direction index of the unit king move from `from` to `to`.
///
/// Consecutive Moore directions always differ by a king move, so the
/// backtrack cell of a fresh step is reachable this way.
fn direction_between(from: (usize, usize), to: (isize, isize)) -> usize {
    let dx = to.0 - from.0 as isize;
    let dy = to.1 - from.1 as isize;
    for (i, &(mx, my)) in MOORE.iter().enumerate() {
        if (mx, my) == (dx, dy) {
            return i;
        }
    }
    debug_assert!(false, "backtrack cell not king-adjacent: ({dx}, {dy})");
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mask_from_rows(rows: &[&str]) -> Mask {
        let h = rows.len();
        let w = rows[0].len();
        let mut mask = Mask::new(w, h);
        for (y, row) in rows.iter().enumerate() {
            for (x, c) in row.chars().enumerate() {
                if c == '#' {
                    mask.set(x, y);
                }
            }
        }
        mask
    }

    #[test]
    fn solid_block_traces_its_outline() {
        let mask = mask_from_rows(&[
            "......",
            ".###..",
            ".###..",
            ".###..",
            "......",
        ]);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        let c = &contours[0];
        assert_eq!(c.start, (1, 1));
        // Outline of a 3x3 block is its 8 border pixels.
        assert_eq!(c.points.len(), 8);
        assert!(c.points.iter().all(|p| p[0] >= 1.0 && p[0] <= 3.0));
        assert!(c.points.iter().all(|p| p[1] >= 1.0 && p[1] <= 3.0));
        assert!(!c.points.contains(&[2.0, 2.0]));
    }

    #[test]
    fn components_are_discovered_in_raster_order() {
        let mask = mask_from_rows(&[
            "........",
            "..##..#.",
            "..##..#.",
            "........",
            ".#......",
        ]);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 3);
        assert_eq!(contours[0].start, (2, 1));
        assert_eq!(contours[1].start, (6, 1));
        assert_eq!(contours[2].start, (1, 4));
    }

    #[test]
    fn isolated_pixel_yields_a_single_point() {
        let mut mask = Mask::new(4, 4);
        mask.set(2, 2);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points, vec![[2.0, 2.0]]);
    }

    #[test]
    fn ring_traces_only_the_outer_boundary() {
        let mask = mask_from_rows(&[
            ".....",
            ".###.",
            ".#.#.",
            ".###.",
            ".....",
        ]);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        // The inner hole boundary is not reported.
        assert!(contours[0].points.iter().all(|p| p != &[2.0, 2.0]));
        assert_eq!(contours[0].points.len(), 8);
    }

    #[test]
    fn diagonal_chain_is_one_component() {
        let mask = mask_from_rows(&[
            "#....",
            ".#...",
            "..#..",
            "...#.",
        ]);
        let contours = find_external_contours(&mask);
        assert_eq!(contours.len(), 1);
        assert_eq!(contours[0].points.len(), 4 + 2);
    }
}
