//! RGBA pixel values and channel accumulation
//!
//! Pixels cross the codec boundary packed into a single `u32` with red in the
//! lowest byte and alpha in the highest. Inside the crate every operation works
//! on the unpacked channels so truncation is explicit.

/// A single 8-bit-per-channel RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    /// Red channel
    pub r: u8,
    /// Green channel
    pub g: u8,
    /// Blue channel
    pub b: u8,
    /// Alpha channel, zero means fully transparent
    pub a: u8,
}

impl Pixel {
    /// Create a pixel from its four channels
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Unpack a `0xAABBGGRR` word
    pub const fn from_packed(value: u32) -> Self {
        Self {
            r: (value & 0xff) as u8,
            g: ((value >> 8) & 0xff) as u8,
            b: ((value >> 16) & 0xff) as u8,
            a: ((value >> 24) & 0xff) as u8,
        }
    }

    /// Pack into a `0xAABBGGRR` word
    pub const fn to_packed(self) -> u32 {
        (self.r as u32) | ((self.g as u32) << 8) | ((self.b as u32) << 16) | ((self.a as u32) << 24)
    }

    /// Build a pixel from `[r, g, b, a]`
    pub const fn from_rgba(channels: [u8; 4]) -> Self {
        let [r, g, b, a] = channels;
        Self { r, g, b, a }
    }

    /// Channels as `[r, g, b, a]`
    pub const fn to_rgba(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    /// Color channels as `[r, g, b]`
    pub const fn rgb(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// True when the alpha channel is zero
    pub const fn is_transparent(self) -> bool {
        self.a == 0
    }

    /// Replace the color channels, keeping alpha
    #[must_use]
    pub const fn with_rgb(self, rgb: [u8; 3]) -> Self {
        let [r, g, b] = rgb;
        Self { r, g, b, a: self.a }
    }
}

/// Running per-channel sum of sampled colors
///
/// At most eight neighbors are ever accumulated, so `u32` sums cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ColorSum {
    r: u32,
    g: u32,
    b: u32,
    count: u32,
}

impl ColorSum {
    /// Add the color channels of a pixel; alpha is ignored
    pub const fn add(&mut self, pixel: Pixel) {
        self.r += pixel.r as u32;
        self.g += pixel.g as u32;
        self.b += pixel.b as u32;
        self.count += 1;
    }

    /// Number of accumulated samples
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Unweighted mean of the samples, truncated toward zero
    ///
    /// Returns `None` when no sample was added.
    pub const fn mean(&self) -> Option<[u8; 3]> {
        if self.count == 0 {
            return None;
        }

        Some([
            (self.r / self.count) as u8,
            (self.g / self.count) as u8,
            (self.b / self.count) as u8,
        ])
    }
}
