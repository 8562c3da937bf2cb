//! Shared crane topology: 22 vertex slots and one fixed triangle list.
//!
//! Every pose is indexed by the same slots, so any two poses can be blended coordinate by
//! coordinate. Wing roots are split into corner copies (18..=21) so the wings can separate from
//! the body walls; the resulting mesh is non-manifold at those seams.

/// Number of vertex slots shared by every pose.
pub const VERTEX_COUNT: usize = 22;

/// Number of triangles in the crease pattern.
pub const TRIANGLE_COUNT: usize = 20;

/// Named vertex slots.
pub mod slot {
    /// Body centre (the hump of the finished crane).
    pub const CENTER: usize = 0;
    /// Right wing tip.
    pub const WING_R_TIP: usize = 1;
    /// Left wing tip.
    pub const WING_L_TIP: usize = 2;
    /// Tail tip.
    pub const TAIL_TIP: usize = 3;
    /// Beak tip.
    pub const BEAK_TIP: usize = 4;
    /// Waist, right back.
    pub const WAIST_RB: usize = 5;
    /// Waist, left back.
    pub const WAIST_LB: usize = 6;
    /// Waist, left front.
    pub const WAIST_LF: usize = 7;
    /// Waist, right front.
    pub const WAIST_RF: usize = 8;
    /// Tail knee on the spine.
    pub const TAIL_KNEE_SPINE: usize = 9;
    /// Tail knee, left edge.
    pub const TAIL_KNEE_L: usize = 10;
    /// Tail knee, right edge.
    pub const TAIL_KNEE_R: usize = 11;
    /// Neck knee on the spine.
    pub const NECK_KNEE_SPINE: usize = 12;
    /// Neck knee, left edge.
    pub const NECK_KNEE_L: usize = 13;
    /// Neck knee, right edge.
    pub const NECK_KNEE_R: usize = 14;
    /// Beak bend on the spine.
    pub const BEAK_BEND_SPINE: usize = 15;
    /// Beak bend, left edge.
    pub const BEAK_BEND_L: usize = 16;
    /// Beak bend, right edge.
    pub const BEAK_BEND_R: usize = 17;
    /// Right wing root, front copy of `WAIST_RF`.
    pub const WING_R_ROOT_F: usize = 18;
    /// Right wing root, back copy of `WAIST_RB`.
    pub const WING_R_ROOT_B: usize = 19;
    /// Left wing root, front copy of `WAIST_LF`.
    pub const WING_L_ROOT_F: usize = 20;
    /// Left wing root, back copy of `WAIST_LB`.
    pub const WING_L_ROOT_B: usize = 21;
}

use slot::*;

/// Triangle index triples, counter-clockwise.
pub const TRIANGLES: [[u16; 3]; TRIANGLE_COUNT] = [
    // body walls
    tri(CENTER, WAIST_RF, WAIST_RB),
    tri(CENTER, WAIST_LB, WAIST_LF),
    // wings
    tri(WING_R_TIP, WING_R_ROOT_B, WING_R_ROOT_F),
    tri(WING_L_TIP, WING_L_ROOT_F, WING_L_ROOT_B),
    // tail
    tri(CENTER, TAIL_KNEE_L, WAIST_LB),
    tri(CENTER, TAIL_KNEE_SPINE, TAIL_KNEE_L),
    tri(CENTER, WAIST_RB, TAIL_KNEE_R),
    tri(CENTER, TAIL_KNEE_R, TAIL_KNEE_SPINE),
    tri(TAIL_KNEE_SPINE, TAIL_TIP, TAIL_KNEE_L),
    tri(TAIL_KNEE_SPINE, TAIL_KNEE_R, TAIL_TIP),
    // neck
    tri(CENTER, WAIST_LF, NECK_KNEE_L),
    tri(CENTER, NECK_KNEE_L, NECK_KNEE_SPINE),
    tri(CENTER, NECK_KNEE_R, WAIST_RF),
    tri(CENTER, NECK_KNEE_SPINE, NECK_KNEE_R),
    // beak base
    tri(NECK_KNEE_SPINE, NECK_KNEE_L, BEAK_BEND_L),
    tri(NECK_KNEE_SPINE, BEAK_BEND_L, BEAK_BEND_SPINE),
    tri(NECK_KNEE_SPINE, BEAK_BEND_R, NECK_KNEE_R),
    tri(NECK_KNEE_SPINE, BEAK_BEND_SPINE, BEAK_BEND_R),
    // beak tip
    tri(BEAK_BEND_SPINE, BEAK_BEND_L, BEAK_TIP),
    tri(BEAK_BEND_SPINE, BEAK_TIP, BEAK_BEND_R),
];

const fn tri(a: usize, b: usize, c: usize) -> [u16; 3] {
    [a as u16, b as u16, c as u16]
}

const _: () = {
    let mut i = 0;
    while i < TRIANGLE_COUNT {
        let mut j = 0;
        while j < 3 {
            assert!(
                (TRIANGLES[i][j] as usize) < VERTEX_COUNT,
                "triangle index out of range"
            );
            j += 1;
        }
        i += 1;
    }
};

/// Flattened index buffer (`TRIANGLE_COUNT * 3` entries) for renderers.
pub fn index_buffer() -> Vec<u32> {
    TRIANGLES
        .iter()
        .flat_map(|t| t.iter().map(|&i| u32::from(i)))
        .collect()
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/topology.rs"]
mod tests;
