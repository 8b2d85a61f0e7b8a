// Tile map → wall segments.
//
// Each solid tile contributes unit-length edges anchored at its upper-left
// grid point. Edges shared by two solid tiles cancel out, and the survivors
// are welded into the longest straight runs possible.

use std::collections::{HashMap, HashSet};

use glam::dvec2;
use log::debug;
use smallvec::SmallVec;

use crate::geometry::{GeometryError, Point, Segment, point_key};

/// The reference level: a walled 20×12 arena full of diagonal pillars.
///
/// ```text
///  /  ###   # or *  ### & ###  %    #  `  #
///     ##            ###    ##      ##     ##
///     #             ###     #     ###     ###
/// ```
pub const DEMO_MAP: &str = "
###########`&#######
#           ` / /  #
#/%#/&`&/&`& % `%`&#
# / %  / `/% &  /  #
#& / `   & / & /%/%#
# `&  & `& ` `% ` &#
#  % # / `%&  # `& #
#% /% %`` / %/& &  #
#/% /   &`%/ % /%& #
# # //&    %& %`&  #
#  % %`  %/     % &#
####################
";

/// One map cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tile {
    Empty,
    /// `#` or `*`
    Block,
    /// `/`
    UpperLeft,
    /// `&`
    UpperRight,
    /// `%`
    LowerRight,
    /// `` ` ``
    LowerLeft,
}

/// At most four edges per tile.
pub type TileSegments = SmallVec<[Segment; 4]>;

impl Tile {
    pub fn from_char(c: char) -> Tile {
        match c {
            '#' | '*' => Tile::Block,
            '/' => Tile::UpperLeft,
            '&' => Tile::UpperRight,
            '%' => Tile::LowerRight,
            '`' => Tile::LowerLeft,
            _ => Tile::Empty,
        }
    }

    /// Unit edges of this tile with its upper-left corner at `ul`.
    ///
    /// Shared edges are always emitted with the same orientation
    /// (left→right, top→bottom) so neighbours produce identical values.
    pub fn segments(self, ul: Point) -> TileSegments {
        let at = |x0: f64, y0: f64, x1: f64, y1: f64| {
            Segment::new(ul + dvec2(x0, y0), ul + dvec2(x1, y1))
        };
        let top = || at(0.0, 0.0, 1.0, 0.0);
        let bottom = || at(0.0, -1.0, 1.0, -1.0);
        let left = || at(0.0, 0.0, 0.0, -1.0);
        let right = || at(1.0, 0.0, 1.0, -1.0);

        match self {
            Tile::Empty => SmallVec::new(),
            Tile::Block => SmallVec::from_buf([top(), right(), left(), bottom()]),
            Tile::UpperLeft => [top(), at(1.0, 0.0, 0.0, -1.0), left()].into_iter().collect(),
            Tile::UpperRight => [top(), right(), at(0.0, 0.0, 1.0, -1.0)].into_iter().collect(),
            Tile::LowerRight => [bottom(), right(), at(0.0, -1.0, 1.0, 0.0)].into_iter().collect(),
            Tile::LowerLeft => [at(0.0, 0.0, 1.0, -1.0), bottom(), left()].into_iter().collect(),
        }
    }
}

/// Raw tile edges, row by row. Row 0 is the highest `y`.
pub fn tile_segments(map: &str) -> Vec<Segment> {
    let rows: Vec<&str> = map.split('\n').collect();
    let mut y = rows.len() as f64;
    let mut out = Vec::new();

    for row in rows {
        for (x, c) in row.chars().enumerate() {
            out.extend(Tile::from_char(c).segments(dvec2(x as f64, y)));
        }
        y -= 1.0;
    }
    out
}

/// Drop edges that appear exactly twice: they sit between two solid tiles.
///
/// Anything appearing once survives. Three or more copies cannot come out
/// of the tile alphabet; such an edge is kept once.
pub fn remove_shared_edges(segments: Vec<Segment>) -> Vec<Segment> {
    let mut counts: HashMap<Segment, usize> = HashMap::with_capacity(segments.len());
    for s in &segments {
        *counts.entry(*s).or_default() += 1;
    }

    let mut kept = HashSet::with_capacity(segments.len());
    segments
        .into_iter()
        .filter(|s| counts[s] != 2 && kept.insert(*s))
        .collect()
}

type EndpointKey = (u64, u64);

/// Segments keyed by both of their endpoints.
struct EndpointIndex {
    cells: HashMap<EndpointKey, SmallVec<[usize; 4]>>,
}

impl EndpointIndex {
    fn new() -> Self {
        Self {
            cells: HashMap::new(),
        }
    }

    fn insert(&mut self, slot: usize, s: &Segment) {
        self.cells.entry(point_key(s.start())).or_default().push(slot);
        self.cells.entry(point_key(s.end())).or_default().push(slot);
    }

    fn remove(&mut self, slot: usize, s: &Segment) {
        for key in [point_key(s.start()), point_key(s.end())] {
            if let Some(cell) = self.cells.get_mut(&key) {
                if let Some(i) = cell.iter().position(|&x| x == slot) {
                    cell.swap_remove(i);
                }
            }
        }
    }

    fn at(&self, p: Point) -> &[usize] {
        self.cells.get(&point_key(p)).map(|c| c.as_slice()).unwrap_or(&[])
    }
}

/// Weld `s` and `n` if they share an endpoint and slope.
///
/// The result spans the two endpoints that are *not* shared and keeps the
/// orientation of whichever piece leads into the joint.
fn weld(s: &Segment, n: &Segment) -> Option<Segment> {
    if s.slope() != n.slope() {
        return None;
    }
    let (a, b) = if s.end() == n.start() {
        (s.start(), n.end())
    } else if s.start() == n.end() {
        (n.start(), s.end())
    } else if s.end() == n.end() {
        (s.start(), n.start())
    } else if s.start() == n.start() {
        (s.end(), n.end())
    } else {
        return None;
    };
    Some(Segment::new(a, b))
}

/// Repeatedly weld colinear, end-to-end segments until no pair is left.
///
/// Worklist over an endpoint index: every live segment is examined at
/// least once after its last neighbour change, so when the list drains no
/// weldable pair remains. Each weld removes one segment, which bounds the
/// loop by the input size.
pub fn merge_colinear(segments: Vec<Segment>) -> Result<Vec<Segment>, GeometryError> {
    let mut slots: Vec<Option<Segment>> = segments.into_iter().map(Some).collect();
    let mut index = EndpointIndex::new();
    for (i, s) in slots.iter().enumerate() {
        if let Some(s) = s {
            index.insert(i, s);
        }
    }

    let mut work: Vec<usize> = (0..slots.len()).rev().collect();

    while let Some(i) = work.pop() {
        let Some(s) = slots[i] else { continue };

        let found = [s.start(), s.end()].into_iter().find_map(|p| {
            index.at(p).iter().find_map(|&j| {
                if j == i {
                    return None;
                }
                let n = slots[j]?;
                weld(&s, &n).map(|w| (j, n, w))
            })
        });

        let Some((j, n, welded)) = found else { continue };

        if welded.is_degenerate() {
            return Err(GeometryError::DegenerateSegment {
                start: welded.start(),
                end: welded.end(),
            });
        }

        index.remove(i, &s);
        index.remove(j, &n);
        slots[i] = None;
        slots[j] = None;

        let k = slots.len();
        slots.push(Some(welded));
        index.insert(k, &welded);
        work.push(k);
    }

    Ok(slots.into_iter().flatten().collect())
}

/// Full pipeline: tiles → unique edges → welded walls.
pub fn compile_map(map: &str) -> Result<Vec<Segment>, GeometryError> {
    let raw = tile_segments(map);
    debug!("map: {} tile segments", raw.len());

    let unique = remove_shared_edges(raw);
    debug!("map: {} after removing shared edges", unique.len());

    let walls = merge_colinear(unique)?;
    debug!("map: {} after colinear merge", walls.len());

    Ok(walls)
}

/*====================================================================*/
/*                                Tests                               */
/*====================================================================*/
#[cfg(test)]
mod tests {
    use super::*;

    fn seg(x1: f64, y1: f64, x2: f64, y2: f64) -> Segment {
        Segment::new(dvec2(x1, y1), dvec2(x2, y2))
    }

    fn as_set(v: &[Segment]) -> HashSet<Segment> {
        v.iter().copied().collect()
    }

    #[test]
    fn symbols() {
        assert_eq!(Tile::from_char('#'), Tile::Block);
        assert_eq!(Tile::from_char('*'), Tile::Block);
        assert_eq!(Tile::from_char('/'), Tile::UpperLeft);
        assert_eq!(Tile::from_char('&'), Tile::UpperRight);
        assert_eq!(Tile::from_char('%'), Tile::LowerRight);
        assert_eq!(Tile::from_char('`'), Tile::LowerLeft);
        assert_eq!(Tile::from_char(' '), Tile::Empty);
        assert_eq!(Tile::from_char('x'), Tile::Empty);
    }

    #[test]
    fn tile_edge_counts() {
        let ul = dvec2(2.0, 5.0);
        assert_eq!(Tile::Empty.segments(ul).len(), 0);
        assert_eq!(Tile::Block.segments(ul).len(), 4);
        for t in [Tile::UpperLeft, Tile::UpperRight, Tile::LowerRight, Tile::LowerLeft] {
            let segs = t.segments(ul);
            assert_eq!(segs.len(), 3, "{t:?}");
            // two unit legs and one diagonal
            let diagonals = segs.iter().filter(|s| (s.length() - 2f64.sqrt()).abs() < 1e-12);
            assert_eq!(diagonals.count(), 1, "{t:?}");
        }
    }

    #[test]
    fn triangles_fill_their_corner() {
        let ul = Point::ZERO;
        // the corner that is *not* on the hypotenuse is the solid corner
        let corner_of = |t: Tile| -> Point {
            let segs = t.segments(ul);
            let hyp = segs.iter().find(|s| s.length() > 1.0).unwrap();
            let corners = [dvec2(0.0, 0.0), dvec2(1.0, 0.0), dvec2(0.0, -1.0), dvec2(1.0, -1.0)];
            *corners
                .iter()
                .find(|c| segs.iter().any(|s| s.start() == **c || s.end() == **c)
                    && **c != hyp.start()
                    && **c != hyp.end())
                .unwrap()
        };
        assert_eq!(corner_of(Tile::UpperLeft), dvec2(0.0, 0.0));
        assert_eq!(corner_of(Tile::UpperRight), dvec2(1.0, 0.0));
        assert_eq!(corner_of(Tile::LowerRight), dvec2(1.0, -1.0));
        assert_eq!(corner_of(Tile::LowerLeft), dvec2(0.0, -1.0));
    }

    #[test]
    fn rows_walk_downwards() {
        let segs = tile_segments("#\n\n#");
        // three rows: y = 3, 2, 1
        assert_eq!(segs.len(), 8);
        assert!(segs.contains(&seg(0.0, 3.0, 1.0, 3.0)));
        assert!(segs.contains(&seg(0.0, 0.0, 1.0, 0.0)));
    }

    #[test]
    fn shared_edges_cancel() {
        let raw = tile_segments("##");
        assert_eq!(raw.len(), 8);
        let unique = remove_shared_edges(raw);
        assert_eq!(unique.len(), 6);
        assert!(!unique.contains(&seg(1.0, 1.0, 1.0, 0.0)));
    }

    #[test]
    fn odd_duplicates_survive_once() {
        let a = seg(0.0, 0.0, 1.0, 0.0);
        let b = seg(5.0, 0.0, 5.0, 1.0);
        let out = remove_shared_edges(vec![a, a, a, b]);
        assert_eq!(out, vec![a, b]);
    }

    #[test]
    fn strip_collapses_to_outline() {
        let walls = compile_map("##").unwrap();
        let expected = as_set(&[
            seg(0.0, 1.0, 2.0, 1.0),
            seg(0.0, 0.0, 2.0, 0.0),
            seg(0.0, 1.0, 0.0, 0.0),
            seg(2.0, 1.0, 2.0, 0.0),
        ]);
        assert_eq!(walls.len(), 4);
        assert_eq!(as_set(&walls), expected);
    }

    #[test]
    fn single_block_keeps_four_edges() {
        let walls = compile_map("#").unwrap();
        assert_eq!(walls.len(), 4);
        assert!(walls.iter().all(|w| (w.length() - 1.0).abs() < 1e-12));
    }

    #[test]
    fn square_room_is_eight_walls() {
        // outer ring of 4 + inner ring of 4
        let walls = compile_map("###\n# #\n###").unwrap();
        assert_eq!(walls.len(), 8);
        let total: f64 = walls.iter().map(Segment::length).sum();
        assert!((total - (12.0 + 4.0)).abs() < 1e-9);
    }

    #[test]
    fn weld_orientations() {
        let s = seg(0.0, 0.0, 1.0, 0.0);
        assert_eq!(weld(&s, &seg(1.0, 0.0, 2.0, 0.0)), Some(seg(0.0, 0.0, 2.0, 0.0)));
        assert_eq!(weld(&s, &seg(-1.0, 0.0, 0.0, 0.0)), Some(seg(-1.0, 0.0, 1.0, 0.0)));
        assert_eq!(weld(&s, &seg(2.0, 0.0, 1.0, 0.0)), Some(seg(0.0, 0.0, 2.0, 0.0)));
        assert_eq!(weld(&s, &seg(0.0, 0.0, -1.0, 0.0)), Some(seg(1.0, 0.0, -1.0, 0.0)));
        // shared point but bent
        assert_eq!(weld(&s, &seg(1.0, 0.0, 1.0, 1.0)), None);
        // same slope, no shared point
        assert_eq!(weld(&s, &seg(3.0, 0.0, 4.0, 0.0)), None);
    }

    #[test]
    fn merge_reaches_fixed_point() {
        let run: Vec<Segment> = (0..6)
            .map(|i| seg(i as f64, 0.0, i as f64 + 1.0, 0.0))
            .rev()
            .collect();
        let merged = merge_colinear(run).unwrap();
        assert_eq!(merged, vec![seg(0.0, 0.0, 6.0, 0.0)]);

        // no two remaining walls may still be weldable
        let walls = compile_map(DEMO_MAP).unwrap();
        for (i, a) in walls.iter().enumerate() {
            for b in &walls[i + 1..] {
                assert!(weld(a, b).is_none(), "{a:?} / {b:?}");
            }
        }
    }

    #[test]
    fn diagonal_runs_merge() {
        // two lower-left triangles stacked diagonally share one hypotenuse line
        let walls = compile_map("` \n `").unwrap();
        let long = walls
            .iter()
            .filter(|w| (w.length() - 2.0 * 2f64.sqrt()).abs() < 1e-9)
            .count();
        assert_eq!(long, 1);
    }

    #[test]
    fn folded_segment_is_rejected() {
        let err = merge_colinear(vec![seg(0.0, 0.0, 1.0, 0.0), seg(1.0, 0.0, 0.0, 0.0)]).unwrap_err();
        assert!(matches!(err, GeometryError::DegenerateSegment { .. }));
    }

    #[test]
    fn demo_map_compiles() {
        let raw = tile_segments(DEMO_MAP).len();
        let walls = compile_map(DEMO_MAP).unwrap();
        assert!(!walls.is_empty());
        assert!(walls.len() < raw);
        assert!(walls.iter().all(|w| !w.is_degenerate()));

        // outer boundary: leading blank line puts the top row at y = 13
        assert!(walls.contains(&seg(0.0, 13.0, 11.0, 13.0)));
        assert!(walls.contains(&seg(12.0, 13.0, 20.0, 13.0)));
    }

    #[test]
    fn empty_map_has_no_walls() {
        assert!(compile_map("").unwrap().is_empty());
        assert!(compile_map("   \n   ").unwrap().is_empty());
    }
}
