//! Per-residue summary secondary-structure label, reduced from the stride/bridge/bend state by
//! a fixed precedence table.

use crate::helix::HelixFlag;

/// One of the eight DSSP summary labels, plus loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SSLabel {
    AlphaHelix, // H
    BetaBridge, // B
    Strand,     // E
    Helix3,     // G
    Helix5,     // I
    HelixPPII,  // P
    Turn,       // T
    Bend,       // S
    Loop,       // ' '
}

impl SSLabel {
    pub fn code(&self) -> char {
        match self {
            SSLabel::AlphaHelix => 'H',
            SSLabel::BetaBridge => 'B',
            SSLabel::Strand => 'E',
            SSLabel::Helix3 => 'G',
            SSLabel::Helix5 => 'I',
            SSLabel::HelixPPII => 'P',
            SSLabel::Turn => 'T',
            SSLabel::Bend => 'S',
            SSLabel::Loop => ' ',
        }
    }
}

/// One residue's worth of classifier state, pure input to [`reduce`].
pub struct ResidueMotifs {
    pub stride4: HelixFlag,
    pub stride3: HelixFlag,
    pub stride5: HelixFlag,
    pub ppii: HelixFlag,
    pub is_strand: bool,
    pub is_isolated_bridge: bool,
    pub is_bend: bool,
}

/// Precedence (highest wins):
/// 1. H (α, stride-4)  2. E/B (bridge)  3. G (stride-3)  4. I (stride-5)
/// 5. P (PPII)  6. T (any unpaired turn of stride 3/4/5)  7. S (bend)  8. loop
///
/// G/H/I are only assigned to a stride's `Middle` residues — the ones genuinely interior to a
/// run of consecutive turns. A lone turn bracket (`Start`/`End`/`StartAndEnd`) that never
/// qualifies as `Middle` for any stride falls through to `T` instead.
pub fn reduce(m: &ResidueMotifs) -> SSLabel {
    if m.stride4.is_middle() {
        return SSLabel::AlphaHelix;
    }
    if m.is_strand {
        return SSLabel::Strand;
    }
    if m.is_isolated_bridge {
        return SSLabel::BetaBridge;
    }
    if m.stride3.is_middle() {
        return SSLabel::Helix3;
    }
    if m.stride5.is_middle() {
        return SSLabel::Helix5;
    }
    if m.ppii.is_participating() {
        return SSLabel::HelixPPII;
    }
    if m.stride3.is_participating() || m.stride4.is_participating() || m.stride5.is_participating() {
        return SSLabel::Turn;
    }
    if m.is_bend {
        return SSLabel::Bend;
    }
    SSLabel::Loop
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> ResidueMotifs {
        ResidueMotifs {
            stride4: HelixFlag::None,
            stride3: HelixFlag::None,
            stride5: HelixFlag::None,
            ppii: HelixFlag::None,
            is_strand: false,
            is_isolated_bridge: false,
            is_bend: false,
        }
    }

    #[test]
    fn alpha_helix_wins_over_everything() {
        let mut m = base();
        m.stride4 = HelixFlag::Middle;
        m.is_strand = true;
        assert_eq!(reduce(&m), SSLabel::AlphaHelix);
    }

    #[test]
    fn strand_wins_over_isolated_bridge_and_g_helix() {
        let mut m = base();
        m.is_strand = true;
        m.is_isolated_bridge = true;
        m.stride3 = HelixFlag::Start;
        assert_eq!(reduce(&m), SSLabel::Strand);
    }

    #[test]
    fn loop_when_nothing_fires() {
        assert_eq!(reduce(&base()), SSLabel::Loop);
    }

    #[test]
    fn lone_turn_bracket_is_turn_not_loop() {
        let mut m = base();
        m.stride4 = HelixFlag::Start;
        assert_eq!(reduce(&m), SSLabel::Turn);

        let mut m = base();
        m.stride3 = HelixFlag::End;
        assert_eq!(reduce(&m), SSLabel::Turn);

        let mut m = base();
        m.stride5 = HelixFlag::StartAndEnd;
        assert_eq!(reduce(&m), SSLabel::Turn);
    }

    #[test]
    fn middle_of_stride_run_still_wins_over_turn() {
        let mut m = base();
        m.stride4 = HelixFlag::Middle;
        assert_eq!(reduce(&m), SSLabel::AlphaHelix);

        let mut m = base();
        m.stride3 = HelixFlag::Middle;
        assert_eq!(reduce(&m), SSLabel::Helix3);

        let mut m = base();
        m.stride5 = HelixFlag::Middle;
        assert_eq!(reduce(&m), SSLabel::Helix5);
    }

    #[test]
    fn turn_falls_back_to_bend_when_also_bent() {
        let mut m = base();
        m.stride4 = HelixFlag::Start;
        m.is_bend = false;
        assert_eq!(reduce(&m), SSLabel::Turn);
        m.stride4 = HelixFlag::None;
        m.is_bend = true;
        assert_eq!(reduce(&m), SSLabel::Bend);
    }
}
