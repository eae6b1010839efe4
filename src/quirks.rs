/// The set of documented behavioral divergences between CHIP-8
/// interpreters. Each field independently selects one of two well-defined
/// semantics for the opcode(s) it governs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Quirks {
    /// 8XY6/8XYE operate on V[Y] rather than V[X] in place.
    pub shift_vy: bool,
    /// FX55/FX65 leave I incremented by X+1 after the transfer.
    pub increment_i: bool,
    /// 8XY1/8XY2/8XY3 zero V[15] after the bitwise operation.
    pub reset_vf: bool,
    /// Switching SUPER to lores mode clears the framebuffer.
    pub clr_scn_on_lores: bool,
    /// Sprites wrap around all four screen edges instead of clipping.
    pub wrap_sprite: bool,
    /// BNNN becomes BXNN: jump target adds V[X] instead of V[0].
    pub bxnn: bool,
    /// SUPER lores scroll distances are physical pixels (not doubled).
    pub half_pixel_scroll_low_res: bool,
}

impl Quirks {
    /// The original COSMAC VIP CHIP-8 interpreter's defaults.
    pub fn vip_defaults() -> Self {
        Quirks {
            shift_vy: true,
            increment_i: true,
            reset_vf: true,
            clr_scn_on_lores: false,
            wrap_sprite: false,
            bxnn: false,
            half_pixel_scroll_low_res: false,
        }
    }

    /// SUPER-CHIP 1.1's defaults.
    pub fn super_defaults() -> Self {
        Quirks {
            shift_vy: false,
            increment_i: false,
            reset_vf: false,
            clr_scn_on_lores: true,
            wrap_sprite: false,
            bxnn: true,
            half_pixel_scroll_low_res: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vip_defaults_match_specified_table() {
        let q = Quirks::vip_defaults();
        assert!(q.shift_vy);
        assert!(q.increment_i);
        assert!(q.reset_vf);
        assert!(!q.clr_scn_on_lores);
        assert!(!q.bxnn);
    }

    #[test]
    fn super_defaults_match_specified_table() {
        let q = Quirks::super_defaults();
        assert!(!q.shift_vy);
        assert!(!q.increment_i);
        assert!(!q.reset_vf);
        assert!(q.clr_scn_on_lores);
        assert!(q.bxnn);
    }
}
