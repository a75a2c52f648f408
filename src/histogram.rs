//! Per-channel intensity histograms.

use image::RgbImage;

/// One color channel of a pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Channel {
    Blue,
    Green,
    Red,
}

impl Channel {
    /// Fixed presentation order for histogram columns.
    pub const ORDER: [Channel; 3] = [Channel::Blue, Channel::Green, Channel::Red];

    /// Index of this channel inside an `image::Rgb` pixel.
    pub fn rgb_index(self) -> usize {
        match self {
            Channel::Red => 0,
            Channel::Green => 1,
            Channel::Blue => 2,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Channel::Blue => "Blue",
            Channel::Green => "Green",
            Channel::Red => "Red",
        }
    }
}

/// Counts how many pixels of `image` hold each of the 256 possible
/// intensities on `channel`. The counts sum to `width * height`.
pub fn histogram(image: &RgbImage, channel: Channel) -> [u32; 256] {
    let mut counts = [0u32; 256];
    let index = channel.rgb_index();
    for pixel in image.pixels() {
        counts[pixel.0[index] as usize] += 1;
    }
    counts
}
