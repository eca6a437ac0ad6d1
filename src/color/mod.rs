/// Convert one sRGB channel value to linear space, keeping the 0-255 scale.
///
/// Brickadia stores linear RGB while the image formats we decode are sRGB.
/// Formula from https://physicallybased.info/tools/. The 0.0521327014 term
/// approximates 0.055/1.055 and is kept verbatim so saves generated by
/// earlier versions of the tool stay byte-identical.
///
/// Stays in f64 the whole way: channel 255 lands just below 255.0, and
/// rounding through f32 would nudge it onto 255.0 exactly, changing the byte
/// the save ends up storing.
pub fn srgb_to_linear(channel: u8) -> f64 {
    let normalized = f64::from(channel) / 255.0;
    if normalized < 0.04045 {
        (normalized / 12.92) * 255.0
    } else {
        (normalized / 1.055 + 0.0521327014).powf(2.4) * 255.0
    }
}
