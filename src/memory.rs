use rand::RngCore;

/// The 4KB RAM shared by both variants.
///
/// Addresses are silently masked to the RAM length rather than producing an
/// error — every method here is therefore total.
#[derive(Clone)]
pub(crate) struct Memory {
    bytes: [u8; Memory::SIZE],
}

impl Memory {
    pub(crate) const SIZE: usize = 0x1000;

    /// A fresh, zeroed bank of RAM.
    pub(crate) fn new() -> Self {
        Memory {
            bytes: [0; Memory::SIZE],
        }
    }

    /// SUPER-CHIP 1.1 randomizes RAM contents at reset rather than zeroing
    /// it, matching the reference source's `chip8_reset` (which seeds the
    /// C standard library RNG and never explicitly clears `ram`).
    pub(crate) fn new_randomized(rng: &mut impl RngCore) -> Self {
        let mut bytes = [0u8; Memory::SIZE];
        rng.fill_bytes(&mut bytes);
        Memory { bytes }
    }

    fn mask(address: u16) -> usize {
        address as usize % Memory::SIZE
    }

    pub(crate) fn read_byte(&self, address: u16) -> u8 {
        self.bytes[Memory::mask(address)]
    }

    pub(crate) fn write_byte(&mut self, address: u16, value: u8) {
        let index = Memory::mask(address);
        self.bytes[index] = value;
    }

    /// Reads the big-endian 16-bit opcode starting at `address`.
    pub(crate) fn read_two_bytes(&self, address: u16) -> u16 {
        let high = self.read_byte(address) as u16;
        let low = self.read_byte(address.wrapping_add(1)) as u16;
        (high << 8) | low
    }

    pub(crate) fn read_bytes(&self, address: u16, count: usize) -> Vec<u8> {
        (0..count)
            .map(|i| self.read_byte(address.wrapping_add(i as u16)))
            .collect()
    }

    pub(crate) fn write_bytes(&mut self, address: u16, data: &[u8]) {
        for (i, byte) in data.iter().enumerate() {
            self.write_byte(address.wrapping_add(i as u16), *byte);
        }
    }

    pub(crate) fn clear(&mut self) {
        self.bytes = [0; Memory::SIZE];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn read_write_round_trips() {
        let mut memory = Memory::new();
        memory.write_byte(0x300, 0xAB);
        assert_eq!(memory.read_byte(0x300), 0xAB);
    }

    #[test]
    fn read_two_bytes_is_big_endian() {
        let mut memory = Memory::new();
        memory.write_bytes(0x200, &[0x12, 0x34]);
        assert_eq!(memory.read_two_bytes(0x200), 0x1234);
    }

    #[test]
    fn addresses_beyond_ram_size_wrap_rather_than_panic() {
        let mut memory = Memory::new();
        memory.write_byte(0x1000, 0x42);
        assert_eq!(memory.read_byte(0x0), 0x42);
    }

    #[test]
    fn write_bytes_then_read_bytes_round_trips_a_slice() {
        let mut memory = Memory::new();
        let data = [1, 2, 3, 4, 5];
        memory.write_bytes(0x400, &data);
        assert_eq!(memory.read_bytes(0x400, data.len()), data.to_vec());
    }

    #[test]
    fn clear_zeroes_every_byte() {
        let mut memory = Memory::new();
        memory.write_byte(0x123, 0xFF);
        memory.clear();
        assert_eq!(memory.read_byte(0x123), 0);
    }
}
