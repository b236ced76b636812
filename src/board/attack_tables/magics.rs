//! Magic bitboard tables for sliding piece attacks.
//!
//! For every square and slider family (rook, bishop) we precompute the attack
//! set for each subset of relevant blockers, and a per-square magic multiplier
//! that perfect-hashes blocker subsets into the table:
//!
//! `attacks = table[((occupancy & mask) * magic) >> (64 - popcount(mask))]`
//!
//! The relevant-blocker mask excludes the square itself and the outermost
//! square of each ray, since an edge blocker cannot change the attack set.
//! Magic multipliers are found at first use by seeded random search; a
//! candidate is accepted only when every distinct blocker subset maps to a
//! slot holding its own attack set, so the shipped tables are collision-free
//! by construction. Exhausting the search budget aborts: a wrong table would
//! corrupt every downstream move.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::types::Bitboard;

const DIR_N: usize = 0;
const DIR_S: usize = 1;
const DIR_E: usize = 2;
const DIR_W: usize = 3;
const DIR_NE: usize = 4;
const DIR_NW: usize = 5;
const DIR_SE: usize = 6;
const DIR_SW: usize = 7;

const ROOK_DIRS: [usize; 4] = [DIR_N, DIR_S, DIR_E, DIR_W];
const BISHOP_DIRS: [usize; 4] = [DIR_NE, DIR_NW, DIR_SE, DIR_SW];

const ROOK_MAGIC_SEED: u64 = 0xD2B5_4F3A_11C9_8E60;
const BISHOP_MAGIC_SEED: u64 = 0x7A6C_03E9_F4D1_552B;

/// Attempts per square before giving up on the magic search.
const MAGIC_SEARCH_BUDGET: usize = 1_000_000;

static RAYS: Lazy<[[u64; 64]; 8]> = Lazy::new(|| {
    let mut rays = [[0u64; 64]; 8];
    let dirs = [
        (1, 0),   // N
        (-1, 0),  // S
        (0, 1),   // E
        (0, -1),  // W
        (1, 1),   // NE
        (1, -1),  // NW
        (-1, 1),  // SE
        (-1, -1), // SW
    ];
    for sq in 0..64 {
        let r = (sq / 8) as isize;
        let f = (sq % 8) as isize;
        for (d, (dr, df)) in dirs.iter().enumerate() {
            let mut mask = 0u64;
            let mut nr = r + dr;
            let mut nf = f + df;
            while (0..8).contains(&nr) && (0..8).contains(&nf) {
                mask |= 1u64 << ((nr as usize) * 8 + (nf as usize));
                nr += dr;
                nf += df;
            }
            rays[d][sq] = mask;
        }
    }
    rays
});

fn is_increasing_dir(dir: usize) -> bool {
    matches!(dir, DIR_N | DIR_E | DIR_NE | DIR_NW)
}

fn nearest_blocker_idx(dir: usize, blockers: u64) -> usize {
    if is_increasing_dir(dir) {
        blockers.trailing_zeros() as usize
    } else {
        63 - blockers.leading_zeros() as usize
    }
}

/// Attacks along one ray, stopping at (and including) the first blocker.
fn ray_attacks(from_idx: usize, dir: usize, occupancy: u64) -> u64 {
    let ray = RAYS[dir][from_idx];
    let blockers = ray & occupancy;
    if blockers == 0 {
        return ray;
    }
    let blocker_idx = nearest_blocker_idx(dir, blockers);
    ray ^ RAYS[dir][blocker_idx]
}

/// Ray-traced slider attacks; slow path used to fill the magic tables.
fn slider_attacks_slow(from_idx: usize, occupancy: u64, bishop: bool) -> u64 {
    let dirs = if bishop { BISHOP_DIRS } else { ROOK_DIRS };
    let mut attacks = 0u64;
    for dir in dirs {
        attacks |= ray_attacks(from_idx, dir, occupancy);
    }
    attacks
}

/// Relevant-blocker mask: every ray square except the outermost one.
fn relevant_mask(sq: usize, bishop: bool) -> u64 {
    let dirs = if bishop { BISHOP_DIRS } else { ROOK_DIRS };
    let mut mask = 0u64;
    for dir in dirs {
        let ray = RAYS[dir][sq];
        let trimmed = match dir {
            DIR_N => ray & !Bitboard::RANK_8.0,
            DIR_S => ray & !Bitboard::RANK_1.0,
            DIR_E => ray & !Bitboard::FILE_H.0,
            DIR_W => ray & !Bitboard::FILE_A.0,
            DIR_NE => ray & !Bitboard::RANK_8.0 & !Bitboard::FILE_H.0,
            DIR_NW => ray & !Bitboard::RANK_8.0 & !Bitboard::FILE_A.0,
            DIR_SE => ray & !Bitboard::RANK_1.0 & !Bitboard::FILE_H.0,
            _ => ray & !Bitboard::RANK_1.0 & !Bitboard::FILE_A.0,
        };
        mask |= trimmed;
    }
    mask
}

/// Spread the low bits of `index` over the set bits of `mask`, enumerating
/// blocker subsets as `index` counts from 0 to `2^popcount(mask) - 1`.
fn occupancy_from_index(mut index: usize, mut mask: u64) -> u64 {
    let mut result = 0u64;
    while mask != 0 {
        let sq = mask.trailing_zeros() as usize;
        mask &= mask - 1;
        if index & 1 != 0 {
            result |= 1u64 << sq;
        }
        index >>= 1;
    }
    result
}

/// One square's worth of magic lookup state.
pub(crate) struct MagicEntry {
    mask: u64,
    magic: u64,
    shift: u32,
    attacks: Vec<u64>,
}

impl MagicEntry {
    #[inline]
    pub(crate) fn lookup(&self, occupancy: u64) -> u64 {
        let index = ((occupancy & self.mask).wrapping_mul(self.magic)) >> self.shift;
        self.attacks[index as usize]
    }
}

/// Search for a multiplier that maps every blocker subset of `mask` to a
/// distinct table index, and build the attack table under it.
fn find_magic(sq: usize, bishop: bool, rng: &mut StdRng) -> MagicEntry {
    let mask = relevant_mask(sq, bishop);
    let bits = mask.count_ones();
    let size = 1usize << bits;
    let shift = 64 - bits;

    let occupancies: Vec<u64> = (0..size).map(|i| occupancy_from_index(i, mask)).collect();
    let references: Vec<u64> = occupancies
        .iter()
        .map(|&occ| slider_attacks_slow(sq, occ, bishop))
        .collect();

    let mut table = vec![0u64; size];
    let mut used = vec![false; size];

    'search: for _ in 0..MAGIC_SEARCH_BUDGET {
        // Sparse candidates converge much faster than uniform ones
        let magic = rng.gen::<u64>() & rng.gen::<u64>() & rng.gen::<u64>();
        if (mask.wrapping_mul(magic) & 0xFF00000000000000).count_ones() < 6 {
            continue;
        }

        table.fill(0);
        used.fill(false);

        for (&occ, &reference) in occupancies.iter().zip(references.iter()) {
            let index = (occ.wrapping_mul(magic) >> shift) as usize;
            if !used[index] {
                used[index] = true;
                table[index] = reference;
            } else if table[index] != reference {
                // Destructive collision, try the next candidate
                continue 'search;
            }
        }

        return MagicEntry {
            mask,
            magic,
            shift,
            attacks: table,
        };
    }

    panic!("no collision-free magic found for square {sq} (bishop: {bishop})");
}

fn build_family(bishop: bool, seed: u64) -> Vec<MagicEntry> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..64).map(|sq| find_magic(sq, bishop, &mut rng)).collect()
}

pub(crate) static ROOK_MAGICS: Lazy<Vec<MagicEntry>> =
    Lazy::new(|| build_family(false, ROOK_MAGIC_SEED));

pub(crate) static BISHOP_MAGICS: Lazy<Vec<MagicEntry>> =
    Lazy::new(|| build_family(true, BISHOP_MAGIC_SEED));
