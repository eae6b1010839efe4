/// Which historical CHIP-8 interpreter a [Processor](crate::Processor) emulates.
///
/// The variant selects a RAM-initialisation strategy, a stack depth, a font
/// set, and (together with [Quirks](crate::Quirks)) which opcodes are
/// recognised at all. It does not select quirk behaviour directly — two
/// processors running the same variant may still carry different quirks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// The original COSMAC VIP CHIP-8 interpreter: 64x32 mono display, a
    /// 12-deep call stack, and the small font only.
    Vip,
    /// SUPER-CHIP 1.1: a 128x64 display (lores sprites pixel-doubled onto
    /// it), a 16-deep call stack, both fonts, and RPL user flags.
    Super,
    /// XO-CHIP. Reserved for future use; [Processor::initialise_and_load](crate::Processor::initialise_and_load)
    /// refuses it today.
    Xo,
}
