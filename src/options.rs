use crate::quirks::Quirks;
use crate::variant::Variant;

/// The default CHIP-8 program start address within memory.
const DEFAULT_PROGRAM_ADDRESS: u16 = 0x200;

/// A struct to allow specification of start-up parameters.
///
/// This crate provides configurable options covering which historic CHIP-8
/// interpreter to emulate and the quirk behaviours it should follow (so as
/// to allow fine-grained mimicking of specific historic interpreters).
/// Configuration of these options is done through the [Options] struct, an
/// instance of which is passed to
/// [Processor::initialise_and_load()](crate::processor::Processor::initialise_and_load)
/// when instantiating [Processor](crate::Processor).
#[derive(Clone, Copy)]
pub struct Options {
    /// Which historic interpreter to emulate.
    pub variant: Variant,
    /// The quirk behaviours in effect. Defaults to `variant`'s documented
    /// defaults but may be overridden independently of it.
    pub quirks: Quirks,
    /// The memory address at which the loaded program is placed, and to
    /// which the program counter is initialised.
    pub program_start_address: u16,
    /// A fixed seed for the random number generator backing `CXNN` and (for
    /// [Variant::Super]) RAM randomization at load time. `None` seeds from
    /// entropy.
    pub seed: Option<u64>,
}

impl Options {
    /// Constructor that returns an [Options] instance for the given variant,
    /// using that variant's documented quirk defaults and no fixed seed.
    pub fn new(variant: Variant) -> Self {
        let quirks = match variant {
            Variant::Vip => Quirks::vip_defaults(),
            Variant::Super | Variant::Xo => Quirks::super_defaults(),
        };
        Options {
            variant,
            quirks,
            program_start_address: DEFAULT_PROGRAM_ADDRESS,
            seed: None,
        }
    }
}

impl Default for Options {
    /// Constructor that returns an [Options] instance using typical default
    /// settings ([Variant::Vip] with its documented quirks).
    fn default() -> Self {
        Options::new(Variant::Vip)
    }
}
